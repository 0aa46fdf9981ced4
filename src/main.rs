//! Shipsync CLI - mirror a project to a server and run its deploy steps
//!
//! Usage: shipsync [--config <PATH>] [--dry-run] [--json] [-v]
//!
//! Stages:
//!   1. dependencies  rsync and ssh on PATH
//!   2. connectivity  ssh probe with a connect timeout
//!   3. sync          rsync -avz --delete to <alias>:<remote>
//!   4. remote        one ssh session running the command chain

mod ui;

use std::process::ExitCode;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;

use shipsync::config::{self, DeployConfig, LoadedConfig};
use shipsync::domain::ports::DeployEventSink;
use shipsync::infrastructure::{InterruptFlag, JsonEventSink};
use shipsync::presentation::{create_deploy_use_case, Cli};
use shipsync::{DeployOptions, DeployOutputOptions, DeployReport};

use crate::ui::context::UiContext;
use crate::ui::views::deploy::ConsoleEventSink;

fn main() -> ExitCode {
    let cli = Cli::parse();

    let loaded = match load_config(&cli) {
        Ok(loaded) => loaded,
        Err(err) => {
            let ui = UiContext::new(cli.json, cli.verbose, cli.color, &DeployConfig::default());
            ui::error::print_error(&err, &ui);
            return ExitCode::FAILURE;
        }
    };

    let ui = UiContext::new(cli.json, cli.verbose, cli.color, &loaded.config);
    ui::output::print_config_source(&loaded.source, &ui);
    ui::output::print_config_warnings(&loaded.warnings, &ui);

    match cmd_deploy(&loaded.config, cli.dry_run, &ui) {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            ui::error::print_error(&err, &ui);
            ExitCode::FAILURE
        }
    }
}

fn load_config(cli: &Cli) -> Result<LoadedConfig> {
    let cwd = std::env::current_dir().context("cannot determine current directory")?;
    Ok(config::resolve(cli.config.as_deref(), &cwd)?)
}

fn cmd_deploy(config: &DeployConfig, dry_run: bool, ui: &UiContext) -> Result<DeployReport> {
    let interrupt = InterruptFlag::new();
    interrupt
        .install()
        .context("failed to install Ctrl+C handler")?;

    // JSON consumers get a clean event stream, so tool output is captured
    let events: Arc<dyn DeployEventSink> = if ui.json {
        Arc::new(JsonEventSink::stdout())
    } else {
        Arc::new(ConsoleEventSink::stdout(*ui))
    };
    let output = if ui.json {
        DeployOutputOptions::Capture
    } else {
        DeployOutputOptions::Stream
    };

    let options = DeployOptions::default().dry_run(dry_run).output(output);
    let use_case = create_deploy_use_case(config, events, interrupt);

    Ok(use_case.execute(&options)?)
}
