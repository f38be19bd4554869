//! Property tests for planned invocations.

use std::path::Path;

use proptest::prelude::*;

use gitship::domain::value_objects::Step;
use gitship::{Config, DeployPlan};

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: the commit message is passed as one argument, never split.
    #[test]
    fn property_commit_message_is_single_arg(message in "[^\\x00]{1,64}") {
        let mut config = Config::default();
        config.git.message = message.clone();
        let plan = DeployPlan::from_config(&config);

        let commit = plan
            .steps()
            .iter()
            .find(|s| matches!(s, Step::Commit { .. }))
            .unwrap();
        let invocation = plan.invocation(commit, Path::new("/work")).unwrap();

        prop_assert_eq!(
            invocation.args_lossy(),
            vec!["commit".to_string(), "-m".to_string(), message]
        );
    }

    /// PROPERTY: step order never depends on configuration values.
    #[test]
    fn property_step_order_is_fixed(
        remote in "[a-z]{1,10}",
        branch in "[a-z]{1,10}",
        stage in proptest::collection::vec("[a-z]{1,8}\\.py", 0..4)
    ) {
        let mut config = Config::default();
        config.git.remote = remote;
        config.git.branch = branch;
        config.git.stage = stage.into_iter().map(Into::into).collect();

        let kinds: Vec<&str> = DeployPlan::from_config(&config)
            .steps()
            .iter()
            .map(|s| s.kind().as_str())
            .collect();

        prop_assert_eq!(
            kinds,
            vec![
                "activate-venv",
                "install-requirements",
                "ensure-gitignore",
                "untrack-secrets",
                "stage",
                "commit",
                "push",
            ]
        );
    }
}
