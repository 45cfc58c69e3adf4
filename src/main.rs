//! Freshstart - self-updating application launcher
//!
//! Before starting an application, makes sure its git checkout matches the
//! remote and that its Python requirements are installed. Updates survive
//! crashes: an update that did not finish is redone on the next launch.

use clap::Parser;

mod cli;
mod commands;
mod config;
mod cycle;
mod error;
mod events;
mod git;
mod i18n;
mod installer;
mod launch;
mod logging;
mod marker;
mod process;
mod progress;
mod requirements;
mod sync;

#[cfg(test)]
mod temp;
#[cfg(test)]
mod test_fixtures;

use cli::{Cli, Commands};
use commands::helpers::{Context, resolve_work_dir};
use error::Result;

/// Load configuration, start logging and run a command that needs both
fn run_in_context(cli: &Cli, command: &Commands) -> Result<i32> {
    let work_dir = resolve_work_dir(cli.workdir.clone())?;
    let _guard = logging::init(&launch::log_dir(&work_dir), cli.verbose)?;
    tracing::info!(version = env!("CARGO_PKG_VERSION"), work_dir = %work_dir.display(), "freshstart starting");

    let ctx = Context::load(work_dir, cli.config.as_deref()).inspect_err(|e| {
        tracing::error!(error = %e, "cannot load configuration");
    })?;

    let result = match command {
        Commands::Launch(args) => commands::launch::run(&ctx, args),
        Commands::Status => commands::status::run(&ctx).map(|()| 0),
        Commands::Plan => commands::plan::run(&ctx).map(|()| 0),
        Commands::Version | Commands::Completions(_) => Ok(0),
    };

    if let Err(e) = &result {
        tracing::error!(error = %e, "command failed");
    }
    result
}

fn main() {
    let cli = Cli::parse();
    let command = cli.command();

    let result = match &command {
        Commands::Version => commands::version::run().map(|()| 0),
        Commands::Completions(args) => commands::completions::run(args).map(|()| 0),
        _ => run_in_context(&cli, &command),
    };

    match result {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("{:?}", miette::Report::new(e));
            std::process::exit(1);
        }
    }
}
