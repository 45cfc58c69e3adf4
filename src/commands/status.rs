//! Status command implementation

use console::Style;

use crate::commands::helpers::Context;
use crate::cycle::{Decision, UpdateCycle};
use crate::error::Result;
use crate::installer::PackageInstaller;
use crate::marker::InstallationMarker;
use crate::process::SystemRunner;
use crate::sync::GitSyncer;

/// Print what the next launch would do, without changing anything
pub fn run(ctx: &Context) -> Result<()> {
    let config = &ctx.config;
    let runner = SystemRunner;
    let syncer = GitSyncer;
    let marker = InstallationMarker::in_dir(&ctx.work_dir);
    let marker_present = marker.exists();

    let cycle = UpdateCycle::new(
        config.remote_target(),
        marker,
        &syncer,
        PackageInstaller::new(&runner, config.base_python()),
    );

    let bold = Style::new().bold();
    let target = cycle.target();
    println!("{} {}", bold.apply_to("Remote:"), target.url);
    println!(
        "{} {} ({})",
        bold.apply_to("Checkout:"),
        target.local_path.display(),
        if target.local_path.exists() {
            "present"
        } else {
            "missing"
        }
    );
    println!(
        "{} {}",
        bold.apply_to("Marker:"),
        if marker_present {
            Style::new().yellow().apply_to("present")
        } else {
            Style::new().green().apply_to("absent")
        }
    );

    match cycle.decide() {
        Decision::UpToDate => println!(
            "{} {}",
            bold.apply_to("Next launch:"),
            Style::new().green().apply_to("up to date, no update")
        ),
        Decision::Update(reason) => println!(
            "{} {} ({reason})",
            bold.apply_to("Next launch:"),
            Style::new().yellow().apply_to("update")
        ),
    }

    Ok(())
}
