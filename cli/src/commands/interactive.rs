//! Interactive mode command

use crate::config::CliConfigLoader;
use anyhow::{Context, Result};
use greet_core::{ExitReason, InteractiveShell};
use std::io;
use tracing::debug;

/// Start interactive mode
pub fn interactive_command(config_loader: CliConfigLoader) -> Result<()> {
    let config = config_loader.load()?;
    debug!("Using title: {:?}", config.title);

    let stdin = io::stdin().lock();
    let stdout = io::stdout().lock();

    let mut shell = InteractiveShell::new(&config, stdin, stdout)
        .context("Failed to start interactive shell")?;
    let summary = shell.run().context("Interactive session failed")?;
    drop(shell);

    if summary.exit == ExitReason::InputExhausted {
        // Leave the terminal on a fresh line after the dangling prompt.
        println!();
    }

    debug!("Dispatched {} commands", summary.commands_dispatched);
    Ok(())
}
