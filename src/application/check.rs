//! Check Use Case
//!
//! Inspects the environment the deploy sequence depends on without
//! changing anything: git availability, work tree, remote, venv,
//! installer, and the staged paths.

use std::path::Path;

use crate::config::Config;
use crate::domain::ports::{CommandRunner, FileSystem};
use crate::domain::value_objects::{Invocation, VenvActivation};

/// Result of a single check
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckItem {
    /// Name of the check
    pub name: String,
    /// Status of the check
    pub status: CheckStatus,
    /// Human-readable message
    pub message: String,
    /// Recommendation for fixing issues
    pub recommendation: Option<String>,
}

/// Status of a check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckStatus {
    Pass,
    Warning,
    Error,
}

impl CheckStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            CheckStatus::Pass => "pass",
            CheckStatus::Warning => "warning",
            CheckStatus::Error => "error",
        }
    }
}

/// Result of the check operation
#[derive(Debug, Clone, Default)]
pub struct CheckResult {
    /// All check items
    pub items: Vec<CheckItem>,
    /// Number of passed checks
    pub passed: usize,
    /// Number of warnings
    pub warnings: usize,
    /// Number of errors
    pub errors: usize,
}

impl CheckResult {
    /// Check if all checks passed (no errors)
    pub fn is_success(&self) -> bool {
        self.errors == 0
    }

    /// Check if all checks passed with no warnings
    pub fn is_clean(&self) -> bool {
        self.errors == 0 && self.warnings == 0
    }

    fn push(&mut self, item: CheckItem) {
        match item.status {
            CheckStatus::Pass => self.passed += 1,
            CheckStatus::Warning => self.warnings += 1,
            CheckStatus::Error => self.errors += 1,
        }
        self.items.push(item);
    }
}

fn item(name: &str, status: CheckStatus, message: impl Into<String>) -> CheckItem {
    CheckItem {
        name: name.to_string(),
        status,
        message: message.into(),
        recommendation: None,
    }
}

fn with_hint(mut item: CheckItem, hint: impl Into<String>) -> CheckItem {
    item.recommendation = Some(hint.into());
    item
}

/// Check Use Case
pub struct CheckUseCase<R, FS>
where
    R: CommandRunner,
    FS: FileSystem,
{
    runner: R,
    file_system: FS,
}

impl<R, FS> CheckUseCase<R, FS>
where
    R: CommandRunner,
    FS: FileSystem,
{
    pub fn new(runner: R, file_system: FS) -> Self {
        Self {
            runner,
            file_system,
        }
    }

    /// Run every check against `workdir`
    pub fn execute(&self, config: &Config, workdir: &Path) -> CheckResult {
        let mut result = CheckResult::default();
        let git = config.git.program.as_str();

        // Without git nothing else about the repository can be checked.
        if !self.succeeds(&Invocation::new(git, workdir).arg("--version")) {
            result.push(with_hint(
                item("git", CheckStatus::Error, format!("`{}` is not available", git)),
                "Install git or set [git] program in gitship.toml",
            ));
        } else {
            result.push(item("git", CheckStatus::Pass, format!("`{}` found", git)));
            self.check_repository(config, workdir, &mut result);
        }

        self.check_venv(config, workdir, &mut result);
        self.check_stage_paths(config, workdir, &mut result);

        result
    }

    fn check_repository(&self, config: &Config, workdir: &Path, result: &mut CheckResult) {
        let git = config.git.program.as_str();

        let inside = Invocation::new(git, workdir).args(["rev-parse", "--is-inside-work-tree"]);
        if self.succeeds(&inside) {
            result.push(item("repository", CheckStatus::Pass, "inside a git work tree"));
        } else {
            result.push(with_hint(
                item("repository", CheckStatus::Error, "not a git work tree"),
                "Run `git init` and add a remote",
            ));
            return;
        }

        let remote = &config.git.remote;
        let get_url = Invocation::new(git, workdir).args(["remote", "get-url"]).arg(remote);
        if self.succeeds(&get_url) {
            result.push(item(
                "remote",
                CheckStatus::Pass,
                format!("remote '{}' configured", remote),
            ));
        } else {
            result.push(with_hint(
                item(
                    "remote",
                    CheckStatus::Warning,
                    format!("remote '{}' not configured; push will fail", remote),
                ),
                format!("git remote add {} <url>", remote),
            ));
        }
    }

    fn check_venv(&self, config: &Config, workdir: &Path, result: &mut CheckResult) {
        let venv = VenvActivation::new(workdir.join(&config.venv.path));
        let script = venv.activation_script();
        let env = if self.file_system.exists(&script) {
            result.push(item(
                "venv",
                CheckStatus::Pass,
                format!("{} found", config.venv.path.display()),
            ));
            venv.env_changes(std::env::var_os("PATH").as_deref())
                .unwrap_or_default()
        } else {
            result.push(with_hint(
                item(
                    "venv",
                    CheckStatus::Warning,
                    format!("{} not found", script.display()),
                ),
                format!("python -m venv {}", config.venv.path.display()),
            ));
            Vec::new()
        };

        let manifest = workdir.join(&config.install.manifest);
        if !self.file_system.exists(&manifest) {
            result.push(item(
                "installer",
                CheckStatus::Pass,
                format!(
                    "{} absent; install step will be skipped",
                    config.install.manifest.display()
                ),
            ));
            return;
        }

        let installer = &config.install.program;
        let version = Invocation::new(installer, workdir)
            .arg("--version")
            .with_env(&env);
        if self.succeeds(&version) {
            result.push(item(
                "installer",
                CheckStatus::Pass,
                format!("`{}` found", installer),
            ));
        } else {
            result.push(item(
                "installer",
                CheckStatus::Warning,
                format!("`{}` is not available; install step will fail", installer),
            ));
        }
    }

    fn check_stage_paths(&self, config: &Config, workdir: &Path, result: &mut CheckResult) {
        let missing: Vec<String> = config
            .git
            .stage
            .iter()
            .filter(|p| !self.file_system.exists(&workdir.join(p)))
            .map(|p| p.display().to_string())
            .collect();

        if missing.is_empty() {
            result.push(item("stage", CheckStatus::Pass, "all staged paths exist"));
        } else {
            result.push(item(
                "stage",
                CheckStatus::Warning,
                format!("missing: {}", missing.join(", ")),
            ));
        }
    }

    fn succeeds(&self, invocation: &Invocation) -> bool {
        self.runner
            .run(invocation)
            .map(|s| s.is_success())
            .unwrap_or(false)
    }
}
