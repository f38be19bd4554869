//! gitship CLI
//!
//! Usage: gitship [--json] [-v...] [-C <DIR>] [--config <FILE>] [COMMAND]
//!
//! Commands:
//!   deploy  Run the deploy sequence (default)
//!   check   Inspect what the deploy sequence depends on
//!   init    Write a gitship.toml with the default settings

use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use is_terminal::IsTerminal;

use gitship::application::{init_config, DeployOptions};
use gitship::config::{load_explicit, Config, ConfigWarning};
use gitship::domain::ports::DeployEventSink;
use gitship::domain::services::DeployPlan;
use gitship::error::GitshipError;
use gitship::infrastructure::{JsonEventSink, KeypressAcknowledger, LocalFs, OutputMode};
use gitship::logging::init_logger;
use gitship::presentation::{
    create_check_use_case, create_deploy_use_case, render_check, render_config_warnings, Cli,
    Commands, ConsoleEventSink, TextStyle,
};

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    let workdir = resolve_workdir(cli.dir.as_deref())?;
    let style = text_style(cli.verbose);

    match cli.command.unwrap_or_else(Commands::default_deploy) {
        Commands::Deploy {
            dry_run,
            no_pause,
            strict,
            message,
        } => {
            let mut config = load_config(cli.config.as_deref(), &workdir, cli.json, style)?;
            if let Some(message) = message {
                config.git.message = message;
            }
            cmd_deploy(&config, &workdir, cli.json, style, dry_run, no_pause, strict)
        }
        Commands::Check => {
            let config = load_config(cli.config.as_deref(), &workdir, cli.json, style)?;
            cmd_check(&config, &workdir, cli.json, style)
        }
        Commands::Init { force } => cmd_init(&workdir, force, cli.json),
    }
}

fn resolve_workdir(dir: Option<&Path>) -> Result<PathBuf> {
    let dir = match dir {
        Some(d) => d.to_path_buf(),
        None => std::env::current_dir().context("cannot determine current directory")?,
    };
    match dir.canonicalize() {
        Ok(path) if path.is_dir() => Ok(path),
        _ => Err(GitshipError::WorkdirNotFound { path: dir }.into()),
    }
}

fn text_style(verbose: u8) -> TextStyle {
    let color = std::io::stdout().is_terminal() && std::env::var_os("NO_COLOR").is_none();
    TextStyle {
        color,
        unicode: !cfg!(windows),
        verbose,
    }
}

fn load_config(
    explicit: Option<&Path>,
    workdir: &Path,
    json: bool,
    style: TextStyle,
) -> Result<Config> {
    let (config, warnings) = match explicit {
        Some(path) => load_explicit(path)?,
        None => Config::load_or_default(workdir),
    };
    print_warnings(&warnings, json, style);
    Ok(config)
}

fn print_warnings(warnings: &[ConfigWarning], json: bool, style: TextStyle) {
    if warnings.is_empty() {
        return;
    }
    // stderr either way; stdout belongs to the event stream
    let style = if json {
        TextStyle {
            color: false,
            ..style
        }
    } else {
        style
    };
    eprint!("{}", render_config_warnings(warnings, style));
}

fn cmd_deploy(
    config: &Config,
    workdir: &Path,
    json: bool,
    style: TextStyle,
    dry_run: bool,
    no_pause: bool,
    strict: bool,
) -> Result<ExitCode> {
    let plan = DeployPlan::from_config(config);
    let pause = config.run.pause && !no_pause && !json && KeypressAcknowledger::is_interactive();

    let options = DeployOptions::new(workdir)
        .with_dry_run(dry_run)
        .with_pause(pause)
        .with_base_path(std::env::var_os("PATH"));

    let (mode, sink): (OutputMode, Arc<dyn DeployEventSink>) = if json {
        (OutputMode::Capture, Arc::new(JsonEventSink::stdout()))
    } else {
        (OutputMode::Inherit, Arc::new(ConsoleEventSink::stdout(style)))
    };

    let use_case = create_deploy_use_case(mode);
    let report = use_case.execute_with_events(&plan, &options, sink);

    if (strict || config.run.strict) && report.has_failures() {
        return Ok(ExitCode::FAILURE);
    }
    Ok(ExitCode::SUCCESS)
}

fn cmd_check(config: &Config, workdir: &Path, json: bool, style: TextStyle) -> Result<ExitCode> {
    let result = create_check_use_case().execute(config, workdir);

    if json {
        let start = serde_json::json!({
            "event": "start",
            "command": "check",
            "workdir": workdir.display().to_string(),
        });
        println!("{}", start);
        for item in &result.items {
            let event = serde_json::json!({
                "event": "check",
                "command": "check",
                "name": item.name,
                "status": item.status.as_str(),
                "message": item.message,
                "recommendation": item.recommendation,
            });
            println!("{}", event);
        }
        let complete = serde_json::json!({
            "event": "complete",
            "command": "check",
            "passed": result.passed,
            "warnings": result.warnings,
            "errors": result.errors,
            "success": result.is_success(),
        });
        println!("{}", complete);
    } else {
        print!("{}", render_check(&result, style));
    }

    if !result.is_success() {
        return Ok(ExitCode::FAILURE);
    }
    Ok(ExitCode::SUCCESS)
}

fn cmd_init(workdir: &Path, force: bool, json: bool) -> Result<ExitCode> {
    let path = init_config(&LocalFs::new(), workdir, force)?;

    if json {
        let output = serde_json::json!({
            "event": "complete",
            "command": "init",
            "path": path.display().to_string(),
        });
        println!("{}", output);
    } else {
        println!("Wrote {}", path.display());
    }
    Ok(ExitCode::SUCCESS)
}
