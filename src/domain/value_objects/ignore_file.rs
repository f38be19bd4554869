//! Ignore file content written when `.gitignore` is missing

/// Entries written to a fresh `.gitignore`, in order
pub const DEFAULT_GITIGNORE_ENTRIES: [&str; 5] = ["__pycache__/", "*.pyc", "venv/", ".env", "*.log"];

/// Renders ignore entries one per line, newline-terminated.
pub fn render_ignore_file(entries: &[String]) -> String {
    let mut out = String::with_capacity(entries.iter().map(|e| e.len() + 1).sum());
    for entry in entries {
        out.push_str(entry);
        out.push('\n');
    }
    out
}

pub fn default_gitignore_entries() -> Vec<String> {
    DEFAULT_GITIGNORE_ENTRIES
        .iter()
        .map(|s| s.to_string())
        .collect()
}
