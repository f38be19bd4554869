//! Output Rendering
//!
//! Human-readable console output for deploy progress and check results.

use std::io::{self, Write};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use crossterm::style::Stylize;

use crate::application::{CheckResult, CheckStatus, COMPLETION_MESSAGE};
use crate::config::ConfigWarning;
use crate::domain::ports::{DeployEvent, DeployEventSink};
use crate::domain::value_objects::StepOutcome;

/// Icons for output rendering
#[derive(Debug, Clone, Copy)]
struct Icons {
    check: &'static str,
    cross: &'static str,
    warn: &'static str,
    skip: &'static str,
    run: &'static str,
}

impl Icons {
    fn unicode() -> Self {
        Self {
            check: "✓",
            cross: "✗",
            warn: "⚠",
            skip: "○",
            run: "→",
        }
    }

    fn ascii() -> Self {
        Self {
            check: "[OK]",
            cross: "[FAIL]",
            warn: "[WARN]",
            skip: "[ ]",
            run: "->",
        }
    }

    fn pick(unicode: bool) -> Self {
        if unicode {
            Self::unicode()
        } else {
            Self::ascii()
        }
    }
}

/// Rendering switches shared by every text view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextStyle {
    pub color: bool,
    pub unicode: bool,
    pub verbose: u8,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            color: false,
            unicode: true,
            verbose: 0,
        }
    }
}

impl TextStyle {
    fn green(&self, s: &str) -> String {
        if self.color {
            s.green().to_string()
        } else {
            s.to_string()
        }
    }

    fn red(&self, s: &str) -> String {
        if self.color {
            s.red().to_string()
        } else {
            s.to_string()
        }
    }

    fn yellow(&self, s: &str) -> String {
        if self.color {
            s.yellow().to_string()
        } else {
            s.to_string()
        }
    }

    fn dim(&self, s: &str) -> String {
        if self.color {
            s.dark_grey().to_string()
        } else {
            s.to_string()
        }
    }

    fn bold(&self, s: &str) -> String {
        if self.color {
            s.bold().to_string()
        } else {
            s.to_string()
        }
    }
}

/// Console event sink: one line per step, then the completion message
pub struct ConsoleEventSink {
    style: TextStyle,
    step_count: AtomicUsize,
    writer: Mutex<Box<dyn Write + Send>>,
}

impl ConsoleEventSink {
    pub fn stdout(style: TextStyle) -> Self {
        Self::with_writer(style, io::stdout())
    }

    pub fn with_writer<W: Write + Send + 'static>(style: TextStyle, writer: W) -> Self {
        Self {
            style,
            step_count: AtomicUsize::new(0),
            writer: Mutex::new(Box::new(writer)),
        }
    }

    fn counter(&self, index: usize) -> String {
        let total = self.step_count.load(Ordering::Relaxed);
        self.style.dim(&format!("[{}/{}]", index + 1, total))
    }

    /// Text for one event, or `None` when the event prints nothing
    pub fn render(&self, event: &DeployEvent) -> Option<String> {
        let style = &self.style;
        let icons = Icons::pick(style.unicode);

        match event {
            DeployEvent::Started {
                workdir,
                step_count,
                dry_run,
            } => {
                self.step_count.store(*step_count, Ordering::Relaxed);
                let mut out = format!("{}\n", style.bold("gitship deploy"));
                out.push_str(&format!("  Workdir: {}\n", workdir.display()));
                if *dry_run {
                    out.push_str("  Mode: dry run\n");
                }
                Some(out)
            }

            DeployEvent::StepStarted {
                index,
                kind,
                command,
            } => {
                let mut out = format!("{} {}", self.counter(*index), kind.label());
                if let Some(command) = command {
                    out.push_str(&format!("\n  {} {}", icons.run, style.dim(command)));
                }
                Some(out)
            }

            DeployEvent::StepFinished {
                index,
                kind,
                outcome,
            } => match outcome {
                StepOutcome::Completed => Some(format!("  {} done", style.green(icons.check))),
                StepOutcome::Planned => Some(format!("  {} would run", icons.skip)),
                StepOutcome::Skipped { reason } => Some(format!(
                    "{} {} {}",
                    self.counter(*index),
                    kind.label(),
                    style.dim(&format!("(skipped: {})", reason))
                )),
                // Suppressed failures look like success unless asked for detail
                StepOutcome::Suppressed { code } => {
                    let mut out = format!("  {} done", style.green(icons.check));
                    if style.verbose > 0 {
                        out.push_str(&style.dim(&format!(" (exit {} ignored)", fmt_code(*code))));
                    }
                    Some(out)
                }
                StepOutcome::Failed { code, message } => {
                    let mut out = format!(
                        "  {} exited with {}",
                        style.yellow(icons.warn),
                        fmt_code(*code)
                    );
                    if let Some(message) = message {
                        out.push_str(&format!(": {}", message));
                    }
                    Some(out)
                }
                StepOutcome::Unavailable { error } => {
                    Some(format!("  {} {}", style.red(icons.cross), error))
                }
            },

            DeployEvent::Completed {
                completed,
                skipped,
                failed,
                suppressed,
            } => {
                let mut out = String::from("\n");
                if style.verbose > 0 {
                    out.push_str(&style.dim(&format!(
                        "{} done, {} skipped, {} failed, {} ignored\n",
                        completed, skipped, failed, suppressed
                    )));
                }
                out.push_str(COMPLETION_MESSAGE);
                Some(out)
            }
        }
    }
}

fn fmt_code(code: Option<i32>) -> String {
    match code {
        Some(c) => format!("code {}", c),
        None => "no code".to_string(),
    }
}

impl DeployEventSink for ConsoleEventSink {
    fn on_event(&self, event: DeployEvent) {
        if let Some(text) = self.render(&event) {
            if let Ok(mut writer) = self.writer.lock() {
                let _ = writeln!(writer, "{}", text);
                let _ = writer.flush();
            }
        }
    }
}

/// Render `check` results as text
pub fn render_check(result: &CheckResult, style: TextStyle) -> String {
    let icons = Icons::pick(style.unicode);
    let mut out = format!("{}\n\n", style.bold("gitship check"));

    for item in &result.items {
        let icon = match item.status {
            CheckStatus::Pass => style.green(icons.check),
            CheckStatus::Warning => style.yellow(icons.warn),
            CheckStatus::Error => style.red(icons.cross),
        };
        out.push_str(&format!("  {} {} - {}\n", icon, item.name, item.message));
        if let Some(rec) = &item.recommendation {
            out.push_str(&format!("    {} {}\n", icons.run, style.dim(rec)));
        }
    }

    out.push_str(&format!(
        "\nSummary: {} passed, {} warnings, {} errors\n",
        result.passed, result.warnings, result.errors
    ));
    out
}

/// Render config warnings, one per line
pub fn render_config_warnings(warnings: &[ConfigWarning], style: TextStyle) -> String {
    let icons = Icons::pick(style.unicode);
    warnings
        .iter()
        .map(|w| format!("{} {}\n", style.yellow(icons.warn), w))
        .collect()
}
