//! Invocation value object - one external process to run

use std::ffi::{OsStr, OsString};
use std::fmt;
use std::path::{Path, PathBuf};

/// A change applied to the child process environment
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnvChange {
    Set(OsString, OsString),
    Remove(OsString),
}

/// An external command: program, arguments, environment and working directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: OsString,
    pub args: Vec<OsString>,
    pub env: Vec<EnvChange>,
    pub cwd: PathBuf,
}

impl Invocation {
    pub fn new(program: impl Into<OsString>, cwd: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            env: Vec::new(),
            cwd: cwd.into(),
        }
    }

    pub fn arg(mut self, arg: impl Into<OsString>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    pub fn with_env(mut self, env: &[EnvChange]) -> Self {
        self.env.extend_from_slice(env);
        self
    }

    pub fn cwd(&self) -> &Path {
        &self.cwd
    }

    /// Arguments as lossy UTF-8 strings (for events and assertions)
    pub fn args_lossy(&self) -> Vec<String> {
        self.args
            .iter()
            .map(|a| a.to_string_lossy().into_owned())
            .collect()
    }

    /// Program name as lossy UTF-8
    pub fn program_lossy(&self) -> String {
        self.program.to_string_lossy().into_owned()
    }
}

fn quote(arg: &OsStr) -> String {
    let s = arg.to_string_lossy();
    if s.is_empty() || s.chars().any(|c| c.is_whitespace() || c == '"') {
        format!("\"{}\"", s.replace('"', "\\\""))
    } else {
        s.into_owned()
    }
}

impl fmt::Display for Invocation {
    /// Shell-like rendering, for display only
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", quote(&self.program))?;
        for arg in &self.args {
            write!(f, " {}", quote(arg))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_quotes_args_with_spaces() {
        let inv = Invocation::new("git", ".")
            .arg("commit")
            .arg("-m")
            .arg("Deploy update");
        assert_eq!(inv.to_string(), "git commit -m \"Deploy update\"");
    }

    #[test]
    fn args_lossy_preserves_order() {
        let inv = Invocation::new("git", ".").args(["add", "a", "b"]);
        assert_eq!(inv.args_lossy(), vec!["add", "a", "b"]);
    }
}
