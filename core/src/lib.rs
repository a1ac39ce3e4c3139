//! # greet Core
//!
//! Core library for greet - a small interactive command shell.
//!
//! The shell greets the user once, then loops: prompt for a token, dispatch
//! it, repeat until `quit` or end of input. Every component is generic over
//! [`std::io::BufRead`] and [`std::io::Write`] so sessions can be driven from
//! in-memory buffers as easily as from a terminal.

// Core modules
pub mod config;
pub mod dispatcher;
pub mod error;
pub mod greeter;
pub mod prompter;
pub mod render;
pub mod shell;

// Re-export commonly used types
pub use config::ShellConfig;
pub use dispatcher::{Action, Command, CommandDispatcher, ShellState};
pub use error::{ConfigError, Error, InputError, Result};
pub use greeter::Greeter;
pub use prompter::Prompter;
pub use render::{Renderer, UnderlineStyle};
pub use shell::{ExitReason, InteractiveShell, SessionSummary};

/// Current version of the greet-core library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize tracing with a specific debug mode
///
/// Logs go to stderr so they never interleave with the banner and prompts.
pub fn init_tracing_with_debug(debug: bool) {
    let filter = if debug { "debug" } else { "info" };

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(filter))
        .with_writer(std::io::stderr)
        .init();
}
