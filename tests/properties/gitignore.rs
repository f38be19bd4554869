//! Property tests for the ignore-file step.

use std::path::PathBuf;

use proptest::prelude::*;

use gitship::application::{DeployOptions, DeployUseCase};
use gitship::domain::ports::{CommandRunner, CommandStatus, NoPause, RunnerError};
use gitship::domain::value_objects::{Invocation, DEFAULT_GITIGNORE_ENTRIES};
use gitship::infrastructure::LocalFs;
use gitship::{Config, DeployPlan};

/// Every command succeeds without running
struct Succeed;

impl CommandRunner for Succeed {
    fn run(&self, _invocation: &Invocation) -> Result<CommandStatus, RunnerError> {
        Ok(CommandStatus::success())
    }
}

fn deploy(workdir: PathBuf) {
    let plan = DeployPlan::from_config(&Config::default());
    let options = DeployOptions::new(workdir);
    DeployUseCase::new(Succeed, LocalFs::new(), NoPause).execute(&plan, &options);
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: an existing ignore file is never modified, whatever it holds.
    #[test]
    fn property_existing_gitignore_unmodified(content in "(?s).{0,256}") {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(".gitignore");
        std::fs::write(&path, &content).unwrap();

        deploy(dir.path().to_path_buf());

        prop_assert_eq!(std::fs::read_to_string(&path).unwrap(), content);
    }

    /// PROPERTY: a created ignore file has exactly the five default lines,
    /// regardless of what else is in the project.
    #[test]
    fn property_created_gitignore_is_exact(
        files in proptest::collection::vec("[a-z]{1,8}\\.(py|txt|env)", 0..6)
    ) {
        let dir = tempfile::tempdir().unwrap();
        for name in &files {
            std::fs::write(dir.path().join(name), "x").unwrap();
        }

        deploy(dir.path().to_path_buf());

        let written = std::fs::read_to_string(dir.path().join(".gitignore")).unwrap();
        let lines: Vec<&str> = written.lines().collect();
        prop_assert_eq!(lines, DEFAULT_GITIGNORE_ENTRIES.to_vec());
        prop_assert!(written.ends_with('\n'));
    }
}
