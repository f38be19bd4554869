//! Acknowledger Port
//!
//! The final "press any key" wait before the tool exits.

/// Blocks until the operator acknowledges completion
pub trait Acknowledger {
    fn wait(&self) -> std::io::Result<()>;
}

/// Returns immediately (non-interactive runs, tests, `--no-pause`)
#[derive(Debug, Clone, Copy, Default)]
pub struct NoPause;

impl Acknowledger for NoPause {
    fn wait(&self) -> std::io::Result<()> {
        Ok(())
    }
}
