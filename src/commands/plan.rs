//! Plan command implementation

use console::Style;

use crate::commands::helpers::Context;
use crate::error::Result;
use crate::requirements;

/// Print the install plan of the current checkout, in install order
pub fn run(ctx: &Context) -> Result<()> {
    let plan = requirements::resolve(&ctx.config.repo_dir);

    if plan.is_empty() {
        println!("No requirements to install.");
        return Ok(());
    }

    println!(
        "{}",
        Style::new()
            .bold()
            .apply_to(format!("Install plan ({} entries):", plan.len()))
    );
    for (index, entry) in plan.iter().enumerate() {
        if entry.is_bulk_dependency {
            println!(
                "  {}. {} {}",
                index + 1,
                entry,
                Style::new().dim().apply_to("(bulk)")
            );
        } else {
            println!("  {}. {}", index + 1, entry);
        }
    }

    Ok(())
}
