//! Test environment builder for isolated gitship runs.
//!
//! Provides `TestEnv` - a temp project directory plus helpers to run the
//! gitship binary against it with stub `git`/`pip` executables that log
//! their arguments instead of touching a real repository.
//!
//! The stubs are written once per test binary and shared: writing an
//! executable while another thread forks can fail with ETXTBSY.

use std::os::unix::fs::{symlink, PermissionsExt};
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use std::sync::OnceLock;

use tempfile::TempDir;

use super::fixtures::*;

/// Result of running a gitship CLI command
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Combine stdout and stderr
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }

    /// Parse stdout as NDJSON
    pub fn json_events(&self) -> Vec<serde_json::Value> {
        self.stdout
            .lines()
            .filter(|l| !l.trim().is_empty())
            .map(|l| serde_json::from_str(l).unwrap_or_else(|e| panic!("bad NDJSON {l:?}: {e}")))
            .collect()
    }
}

struct Stubs {
    _dir: TempDir,
    /// Holds `git`; becomes the whole `PATH`
    bin: PathBuf,
    /// A venv whose `bin/` holds `activate` and `pip`
    venv: PathBuf,
    /// Empty directory, for runs where nothing is on `PATH`
    empty: PathBuf,
}

fn write_executable(path: &Path, content: &str) {
    std::fs::write(path, content).expect("Failed to write stub");
    std::fs::set_permissions(path, std::fs::Permissions::from_mode(0o755))
        .expect("Failed to chmod stub");
}

fn stubs() -> &'static Stubs {
    static STUBS: OnceLock<Stubs> = OnceLock::new();
    STUBS.get_or_init(|| {
        let dir = tempfile::tempdir().expect("Failed to create stub dir");
        let bin = dir.path().join("bin");
        let venv = dir.path().join("venv");
        let empty = dir.path().join("empty");
        std::fs::create_dir_all(&bin).unwrap();
        std::fs::create_dir_all(venv.join("bin")).unwrap();
        std::fs::create_dir_all(&empty).unwrap();

        write_executable(&bin.join("git"), GIT_STUB);
        write_executable(&venv.join("bin").join("pip"), PIP_STUB);
        std::fs::write(venv.join("bin").join("activate"), ACTIVATE_SCRIPT).unwrap();

        Stubs {
            _dir: dir,
            bin,
            venv,
            empty,
        }
    })
}

/// Isolated project with stub tools.
pub struct TestEnv {
    /// Temporary directory for the project
    pub project_root: TempDir,
    /// Invocation log and user config live here, outside the project
    scratch: TempDir,
    /// `PATH` for the child
    path: PathBuf,
}

impl TestEnv {
    /// Default project: server.py, requirements.txt, a venv, no .gitignore, no .env
    pub fn new() -> Self {
        Self::builder().build()
    }

    pub fn builder() -> TestEnvBuilder {
        TestEnvBuilder::new()
    }

    /// Get path relative to project root
    pub fn project_path(&self, relative: &str) -> PathBuf {
        self.project_root.path().join(relative)
    }

    /// Run gitship in the project directory
    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_env(args, &[])
    }

    /// Run gitship in the project directory with extra env vars
    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        self.run_from_with_env(self.project_root.path(), args, env_vars)
    }

    /// Run gitship from a specific directory with extra env vars
    pub fn run_from_with_env(
        &self,
        cwd: &Path,
        args: &[&str],
        env_vars: &[(&str, &str)],
    ) -> TestResult {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_gitship"));
        cmd.current_dir(cwd)
            .args(args)
            .env_clear()
            .env("PATH", &self.path)
            .env("HOME", self.scratch.path())
            .env("NO_COLOR", "1")
            .env("GITSHIP_TEST_LOG", self.log_path())
            .env(
                "GITSHIP_USER_CONFIG_PATH",
                self.scratch.path().join("user-config.toml"),
            );

        for (key, value) in env_vars {
            cmd.env(key, value);
        }

        let output = cmd.output().expect("Failed to execute gitship");
        Self::output_to_result(output)
    }

    fn output_to_result(output: Output) -> TestResult {
        TestResult {
            success: output.status.success(),
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        }
    }

    fn log_path(&self) -> PathBuf {
        self.scratch.path().join("invocations.log")
    }

    /// Every stub invocation so far, one `program args...` line each
    pub fn invocations(&self) -> Vec<String> {
        std::fs::read_to_string(self.log_path())
            .map(|s| s.lines().map(str::to_string).collect())
            .unwrap_or_default()
    }

    /// Write the user-level config file
    pub fn write_user_config(&self, content: &str) {
        std::fs::write(self.scratch.path().join("user-config.toml"), content)
            .expect("Failed to write user config");
    }

    /// Write a file to the project directory
    pub fn write_project_file(&self, relative_path: &str, content: &str) {
        let full_path = self.project_path(relative_path);
        if let Some(parent) = full_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create directories");
        }
        std::fs::write(&full_path, content).expect("Failed to write file");
    }

    pub fn read_project_file(&self, relative_path: &str) -> String {
        std::fs::read_to_string(self.project_path(relative_path))
            .unwrap_or_else(|e| panic!("Failed to read {}: {}", relative_path, e))
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for TestEnv with fluent API
pub struct TestEnvBuilder {
    venv: bool,
    requirements: bool,
    gitignore: Option<String>,
    dotenv: bool,
    project_config: Option<String>,
    tools_on_path: bool,
}

impl TestEnvBuilder {
    pub fn new() -> Self {
        Self {
            venv: true,
            requirements: true,
            gitignore: None,
            dotenv: false,
            project_config: None,
            tools_on_path: true,
        }
    }

    /// No `venv/` directory, so `pip` cannot be found
    pub fn without_venv(mut self) -> Self {
        self.venv = false;
        self
    }

    pub fn without_requirements(mut self) -> Self {
        self.requirements = false;
        self
    }

    /// Pre-existing `.gitignore`
    pub fn with_gitignore(mut self, content: &str) -> Self {
        self.gitignore = Some(content.to_string());
        self
    }

    /// Project has a `.env` secrets file
    pub fn with_dotenv(mut self) -> Self {
        self.dotenv = true;
        self
    }

    /// Write `gitship.toml` into the project
    pub fn with_project_config(mut self, toml: &str) -> Self {
        self.project_config = Some(toml.to_string());
        self
    }

    /// `PATH` is an empty directory: no git, no pip
    pub fn without_tools(mut self) -> Self {
        self.tools_on_path = false;
        self
    }

    pub fn build(self) -> TestEnv {
        let stubs = stubs();
        let project_root = tempfile::tempdir().expect("Failed to create project dir");
        let scratch = tempfile::tempdir().expect("Failed to create scratch dir");
        let root = project_root.path();

        std::fs::write(root.join("server.py"), SERVER_PY).unwrap();
        if self.requirements {
            std::fs::write(root.join("requirements.txt"), REQUIREMENTS_TXT).unwrap();
        }
        if self.venv {
            symlink(&stubs.venv, root.join("venv")).expect("Failed to link venv");
        }
        if let Some(content) = &self.gitignore {
            std::fs::write(root.join(".gitignore"), content).unwrap();
        }
        if self.dotenv {
            std::fs::write(root.join(".env"), DOTENV).unwrap();
        }
        if let Some(toml) = &self.project_config {
            std::fs::write(root.join("gitship.toml"), toml).unwrap();
        }

        let path = if self.tools_on_path {
            stubs.bin.clone()
        } else {
            stubs.empty.clone()
        };

        TestEnv {
            project_root,
            scratch,
            path,
        }
    }
}

impl Default for TestEnvBuilder {
    fn default() -> Self {
        Self::new()
    }
}
