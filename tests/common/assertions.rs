//! Assertion macros with descriptive failure messages.

/// Assert that stdout or stderr contains `needle`.
#[macro_export]
macro_rules! assert_output_contains {
    ($result:expr, $needle:expr) => {
        let combined = $result.combined_output();
        assert!(
            combined.contains($needle),
            "Expected output to contain {:?}.\nOutput:\n{}",
            $needle,
            combined
        );
    };
}

/// Assert that the stub log contains exactly this invocation.
#[macro_export]
macro_rules! assert_invoked {
    ($env:expr, $line:expr) => {
        let log = $env.invocations();
        assert!(
            log.iter().any(|l| l == $line),
            "Expected invocation {:?}.\nInvocations:\n  {}",
            $line,
            log.join("\n  ")
        );
    };
}

/// Assert that no logged invocation starts with `prefix`.
#[macro_export]
macro_rules! assert_not_invoked {
    ($env:expr, $prefix:expr) => {
        let log = $env.invocations();
        assert!(
            !log.iter().any(|l| l.starts_with($prefix)),
            "Expected no invocation starting with {:?}.\nInvocations:\n  {}",
            $prefix,
            log.join("\n  ")
        );
    };
}
