use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "taskline", bin_name = "taskline", version)]
#[command(about = "Task tracking from the command line", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show or change configuration (~/.taskline.json)
    Config {
        #[command(subcommand)]
        action: Option<ConfigCommand>,
    },
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum ConfigCommand {
    /// Show every resolved setting
    Show,

    /// Print one setting by dotted key (e.g. theme.colors.error)
    Get {
        key: String,
    },

    /// Change one setting by dotted key
    Set {
        key: String,

        /// New value, read as JSON when it parses and as a string otherwise
        value: String,

        /// Fail instead of skipping when the key cannot be written
        #[arg(long)]
        strict: bool,
    },

    /// Print the config file location
    Path,

    /// Restore the default configuration
    Reset,
}
