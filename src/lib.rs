use anyhow::Context;
use clap::{CommandFactory, Parser};

pub mod cli;
pub mod commands;
pub mod error;

pub type Result<T> = anyhow::Result<T>;

/// Entry point used by the binary crate and integration tests.
pub fn run() -> Result<()> {
    init_tracing();

    let args = match cli::Cli::try_parse() {
        Ok(args) => args,
        // Usage errors exit 1 through main; help and --version render
        // through clap and exit cleanly.
        Err(err) if err.use_stderr() => {
            return Err(error::HailError::Usage(err.to_string()).into());
        }
        Err(err) => {
            err.print().context("failed to write help output")?;
            return Ok(());
        }
    };

    let Some(command) = args.command else {
        cli::Cli::command()
            .print_help()
            .context("failed to write help output")?;
        return Ok(());
    };

    let message = commands::execute(&command).context("failed to execute command")?;
    println!("{message}");
    Ok(())
}

fn init_tracing() {
    use std::sync::Once;
    use tracing_subscriber::{fmt, EnvFilter};

    static INIT: Once = Once::new();
    INIT.call_once(|| {
        let env_filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

        fmt()
            .with_env_filter(env_filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .init();
    });
}
