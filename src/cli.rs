use clap::{Parser, Subcommand};

/// Display name substituted into help text and the version banner.
pub const PROGRAM_NAME: &str = "hail";

/// Short description shown in top-level help.
pub const PROGRAM_ABOUT: &str = "A small starter command-line interface.";

/// Command-line arguments for the hail CLI.
#[derive(Debug, Parser)]
#[command(name = PROGRAM_NAME, version, about = PROGRAM_ABOUT, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the version number
    Version,
    /// Say hello
    Hello {
        /// Name to greet; defaults to "World" when omitted.
        name: Option<String>,
    },
}
