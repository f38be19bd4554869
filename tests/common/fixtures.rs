//! Test fixtures: stub executables and project files.

/// Stub `git`: logs its argv, fails for subcommands listed in `$GITSHIP_TEST_FAIL`
pub const GIT_STUB: &str = r#"#!/bin/sh
echo "git $*" >> "$GITSHIP_TEST_LOG"
for f in $GITSHIP_TEST_FAIL; do
  if [ "$f" = "$1" ]; then
    echo "stub git: $1 failed" >&2
    exit 1
  fi
done
exit 0
"#;

/// Stub `pip`: only reachable through an activated venv
pub const PIP_STUB: &str = r#"#!/bin/sh
echo "pip $*" >> "$GITSHIP_TEST_LOG"
for f in $GITSHIP_TEST_FAIL; do
  if [ "$f" = "pip" ]; then
    echo "stub pip: failed" >&2
    exit 1
  fi
done
exit 0
"#;

pub const ACTIVATE_SCRIPT: &str = "# stub activate\n";

pub const SERVER_PY: &str = "print('hello')\n";

pub const REQUIREMENTS_TXT: &str = "flask==3.0.0\n";

pub const DOTENV: &str = "SECRET_KEY=hunter2\n";

/// The ignore file written when none exists
pub const DEFAULT_GITIGNORE: &str = "__pycache__/\n*.pyc\nvenv/\n.env\n*.log\n";
