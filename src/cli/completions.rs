use clap::Parser;
use clap_complete::Shell;

/// Arguments for completions command
#[derive(Parser, Debug, Clone)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    freshstart completions bash > ~/.bash_completion.d/freshstart\n\n\
                  Generate zsh completions:\n    freshstart completions zsh > ~/.zfunc/_freshstart\n\n\
                  Generate fish completions:\n    freshstart completions fish > ~/.config/fish/completions/freshstart.fish")]
pub struct CompletionsArgs {
    /// Shell type
    #[arg(value_enum)]
    pub shell: Shell,
}
