//! Command parsing and the shell state machine
//!
//! The dispatcher has two states. `quit` moves it from [`ShellState::Running`]
//! to [`ShellState::Terminated`], which is absorbing; every other command
//! leaves it running and yields an [`Action`] for the shell to perform.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// A command recognised at the prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    Quit,
    /// Anything else, kept verbatim so it can be echoed
    Unknown(String),
}

impl Command {
    /// Built-in command names and their help text, in menu order
    pub const BUILTINS: &'static [(&'static str, &'static str)] = &[
        ("help", "display the help menu."),
        ("quit", "exit the program."),
    ];

    pub fn as_str(&self) -> &str {
        match self {
            Command::Help => "help",
            Command::Quit => "quit",
            Command::Unknown(token) => token,
        }
    }
}

impl FromStr for Command {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "help" => Command::Help,
            "quit" => Command::Quit,
            other => Command::Unknown(other.to_string()),
        })
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Dispatcher state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ShellState {
    #[default]
    Running,
    Terminated,
}

/// What the shell should do in response to a command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    None,
    ShowHelp,
    Echo(String),
}

/// Maps commands to actions and tracks the running state
#[derive(Debug, Default)]
pub struct CommandDispatcher {
    state: ShellState,
    dispatched: usize,
}

impl CommandDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> ShellState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == ShellState::Running
    }

    /// Number of commands handled while running
    pub fn dispatched(&self) -> usize {
        self.dispatched
    }

    /// Apply `command` to the current state and return the action to perform
    pub fn dispatch(&mut self, command: Command) -> Action {
        let (action, next) = transition(self.state, command);
        if self.state == ShellState::Running {
            self.dispatched += 1;
        }
        self.state = next;
        action
    }
}

/// The transition table
fn transition(state: ShellState, command: Command) -> (Action, ShellState) {
    match (state, command) {
        (ShellState::Terminated, _) => (Action::None, ShellState::Terminated),
        (ShellState::Running, Command::Quit) => (Action::None, ShellState::Terminated),
        (ShellState::Running, Command::Help) => (Action::ShowHelp, ShellState::Running),
        (ShellState::Running, Command::Unknown(token)) => {
            (Action::Echo(token), ShellState::Running)
        }
    }
}
