//! Launch command implementation
//!
//! The update cycle runs on a worker thread; this thread only drains its
//! events into the progress display. Once the cycle is done the
//! application is started in the foreground.

use std::thread;

use crate::cli::LaunchArgs;
use crate::commands::helpers::Context;
use crate::cycle::{CycleOutcome, UpdateCycle};
use crate::error::{LauncherError, Result};
use crate::events;
use crate::i18n::{Labels, Translator};
use crate::installer::{self, PackageInstaller};
use crate::launch::{self, AppLauncher};
use crate::marker::InstallationMarker;
use crate::process::SystemRunner;
use crate::progress::ProgressDisplay;
use crate::sync::GitSyncer;

/// Run launch command; returns the process exit code
pub fn run(ctx: &Context, args: &LaunchArgs) -> Result<i32> {
    let config = &ctx.config;
    let runner = SystemRunner;
    let syncer = GitSyncer;

    if args.reset_venv {
        installer::reset_venv(config)?;
    }
    let python = installer::resolve_interpreter(config, &runner)?;
    tracing::info!(python = %python.display(), "using interpreter");

    let translator = Translator::from_config(config);
    let mut display = ProgressDisplay::new(Labels::new(&translator));

    let cycle = UpdateCycle::new(
        config.remote_target(),
        InstallationMarker::in_dir(&ctx.work_dir),
        &syncer,
        PackageInstaller::new(&runner, &python).with_extra_args(config.pip_args.clone()),
    );

    let (notifier, receiver) = events::channel();
    let outcome = thread::scope(|scope| {
        let worker = scope.spawn(move || cycle.run(&notifier));
        let drained = display.drain(&receiver);
        tracing::debug!(?drained, "progress display closed");
        worker.join().unwrap_or_else(|_| {
            Err(LauncherError::Io {
                message: "update worker panicked".to_string(),
            })
        })
    })?;

    match outcome {
        CycleOutcome::UpToDate => tracing::info!("no update needed"),
        CycleOutcome::Updated { reason, installed } => {
            tracing::info!(%reason, installed, "update finished");
        }
    }

    if args.no_start {
        tracing::info!("not starting application (--no-start)");
        return Ok(0);
    }

    AppLauncher::new(
        python,
        config.repo_dir.clone(),
        config.startup_script.clone(),
        launch::log_dir(&ctx.work_dir),
    )
    .launch()
}
