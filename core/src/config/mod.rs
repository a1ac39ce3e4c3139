//! Minimal configuration module for greet core
//!
//! Only exports pure data types. All discovery and loading logic is in the CLI layer.

pub mod types;

pub use types::{ShellConfig, DEFAULT_MAX_INPUT_LEN, DEFAULT_TITLE};
