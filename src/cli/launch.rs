use clap::Parser;

/// Arguments for launch command
#[derive(Parser, Debug, Clone, Default)]
pub struct LaunchArgs {
    /// Run the update cycle but do not start the application
    #[arg(long)]
    pub no_start: bool,

    /// Delete and recreate the configured venv before updating
    #[arg(long)]
    pub reset_venv: bool,
}
