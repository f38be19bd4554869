//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::error::{GitshipError, GitshipResult};

use super::types::Config;

/// File name looked up in the working directory
pub const PROJECT_CONFIG_FILE: &str = "gitship.toml";

/// Overrides the user config location (tests, unusual setups)
pub const USER_CONFIG_PATH_VAR: &str = "GITSHIP_USER_CONFIG_PATH";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

impl std::fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown config key '{}' in {}", self.key, self.file.display())?;
        if let Some(line) = self.line {
            write!(f, ":{}", line)?;
        }
        if let Some(suggestion) = &self.suggestion {
            write!(f, " (did you mean '{}'?)", suggestion)?;
        }
        Ok(())
    }
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> GitshipResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| GitshipError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Load an explicitly named config file; it must exist and parse.
pub fn load_explicit(path: &Path) -> GitshipResult<(Config, Vec<ConfigWarning>)> {
    if !path.is_file() {
        return Err(GitshipError::ConfigNotFound {
            path: path.to_path_buf(),
        });
    }
    let (config, warnings) = load_with_warnings(path)?;
    Ok((with_env_overrides(config), warnings))
}

/// Load from project config, user config, or defaults
///
/// A config file that fails to parse is skipped with a warning log, the
/// same as a missing one.
pub fn load_or_default(workdir: &Path) -> (Config, Vec<ConfigWarning>) {
    load_or_default_from(workdir, user_config_path())
}

pub(crate) fn load_or_default_from(
    workdir: &Path,
    user_config: Option<PathBuf>,
) -> (Config, Vec<ConfigWarning>) {
    let candidates = [Some(workdir.join(PROJECT_CONFIG_FILE)), user_config];

    for candidate in candidates.into_iter().flatten() {
        if !candidate.is_file() {
            continue;
        }
        match load_with_warnings(&candidate) {
            Ok((config, warnings)) => {
                debug!(path = %candidate.display(), "loaded config");
                return (with_env_overrides(config), warnings);
            }
            Err(e) => warn!("ignoring config {}: {}", candidate.display(), e),
        }
    }

    (with_env_overrides(Config::default()), Vec::new())
}

/// Apply environment variable overrides (GITSHIP_* prefix)
pub fn with_env_overrides(mut config: Config) -> Config {
    if let Some(remote) = non_empty_var("GITSHIP_REMOTE") {
        config.git.remote = remote;
    }

    if let Some(branch) = non_empty_var("GITSHIP_BRANCH") {
        config.git.branch = branch;
    }

    if let Some(message) = non_empty_var("GITSHIP_COMMIT_MESSAGE") {
        config.git.message = message;
    }

    if let Some(val) = non_empty_var("GITSHIP_NO_PAUSE") {
        if is_truthy(&val) {
            config.run.pause = false;
        }
    }

    config
}

/// `$GITSHIP_USER_CONFIG_PATH`, else `<config dir>/gitship/config.toml`
pub fn user_config_path() -> Option<PathBuf> {
    if let Some(path) = non_empty_var(USER_CONFIG_PATH_VAR) {
        return Some(PathBuf::from(path));
    }
    dirs::config_dir().map(|d| d.join("gitship").join("config.toml"))
}

fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}

fn is_truthy(val: &str) -> bool {
    matches!(val.trim().to_lowercase().as_str(), "1" | "true" | "yes")
}

/// Line of `key = ...` or `[key]`, ignoring keys that only appear in values
fn find_line_number(content: &str, key: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| {
            let line = line.trim_start();
            let assigns = line
                .strip_prefix(key)
                .is_some_and(|rest| rest.trim_start().starts_with('='));
            assigns || line.trim_end() == format!("[{}]", key)
        })
        .map(|i| i + 1)
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "venv",
        "path",
        "install",
        "program",
        "manifest",
        "gitignore",
        "entries",
        "secrets",
        "git",
        "stage",
        "message",
        "remote",
        "branch",
        "run",
        "pause",
        "strict",
    ];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = if ac == bc { 0 } else { 1 };
            curr[j + 1] =
                std::cmp::min(std::cmp::min(prev[j + 1] + 1, curr[j] + 1), prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
