//! CLI command implementations

pub mod compare;
pub mod interactive;

pub use compare::compare_command;
pub use interactive::interactive_command;
