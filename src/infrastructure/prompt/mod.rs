//! Operator prompts

mod keypress;

pub use keypress::KeypressAcknowledger;
