//! The interactive loop: greet once, then prompt and dispatch until done

use crate::config::ShellConfig;
use crate::dispatcher::{Action, Command, CommandDispatcher};
use crate::error::{Error, InputError, Result};
use crate::greeter::Greeter;
use crate::prompter::Prompter;
use crate::render::Renderer;
use std::io::{BufRead, Write};
use tracing::debug;

/// Why a session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitReason {
    /// The user entered `quit`
    Quit,
    /// The input stream was closed
    InputExhausted,
}

/// Outcome of [`InteractiveShell::run`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionSummary {
    pub exit: ExitReason,
    pub commands_dispatched: usize,
}

/// Greet → prompt → dispatch → repeat
pub struct InteractiveShell<R: BufRead, W: Write> {
    greeter: Greeter,
    prompter: Prompter<R>,
    renderer: Renderer<W>,
    dispatcher: CommandDispatcher,
}

impl<R: BufRead, W: Write> InteractiveShell<R, W> {
    /// Build a shell from a validated configuration
    pub fn new(config: &ShellConfig, input: R, output: W) -> Result<Self> {
        config.validate()?;

        Ok(Self {
            greeter: Greeter::new(config.title.clone()),
            prompter: Prompter::new(input, config.max_input_len),
            renderer: Renderer::new(output).with_clear_screen(config.clear_screen),
            dispatcher: CommandDispatcher::new(),
        })
    }

    /// Run the session to completion
    pub fn run(&mut self) -> Result<SessionSummary> {
        self.greeter.greet(&mut self.renderer)?;

        let exit = loop {
            if !self.dispatcher.is_running() {
                break ExitReason::Quit;
            }

            let token = match self.prompter.prompt(&mut self.renderer) {
                Ok(Some(token)) => token,
                Ok(None) => continue,
                Err(Error::Input(InputError::Exhausted)) => {
                    debug!("Input exhausted, ending session");
                    break ExitReason::InputExhausted;
                }
                Err(Error::Input(InputError::TooLong { limit })) => {
                    self.renderer.print(&format!(
                        "\n Input too long (limit is {} bytes), please try again.\n",
                        limit
                    ))?;
                    continue;
                }
                Err(e) => return Err(e),
            };

            self.handle(&token)?;
        };

        self.renderer.flush()?;

        let summary = SessionSummary {
            exit,
            commands_dispatched: self.dispatcher.dispatched(),
        };
        debug!(
            "Session ended ({:?}) after {} commands",
            summary.exit, summary.commands_dispatched
        );
        Ok(summary)
    }

    fn handle(&mut self, token: &str) -> Result<()> {
        let Ok(command) = token.parse::<Command>();
        debug!("Dispatching command: {}", command);

        match self.dispatcher.dispatch(command) {
            Action::None => {}
            Action::ShowHelp => self.greeter.help(&mut self.renderer)?,
            Action::Echo(text) => {
                self.renderer.print(&format!("\n your choice: {}\n", text))?;
            }
        }
        Ok(())
    }

    /// Borrow the output sink
    pub fn output(&self) -> &W {
        self.renderer.get_ref()
    }

    /// Consume the shell, returning the output sink
    pub fn into_output(self) -> W {
        self.renderer.into_inner()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompter::PROMPT;
    use std::io;

    /// Sink whose every write fails, like a closed pipe
    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::from(io::ErrorKind::BrokenPipe))
        }

        fn flush(&mut self) -> io::Result<()> {
            Err(io::Error::from(io::ErrorKind::BrokenPipe))
        }
    }

    fn session(input: &str) -> (SessionSummary, String) {
        let config = ShellConfig::new("Demo").with_clear_screen(false);
        let mut shell = InteractiveShell::new(&config, input.as_bytes(), Vec::new()).unwrap();
        let summary = shell.run().unwrap();
        let output = String::from_utf8(shell.output().clone()).unwrap();
        (summary, output)
    }

    #[test]
    fn test_foo_help_quit() {
        let (summary, output) = session("foo\nhelp\nquit\n");

        assert_eq!(summary.exit, ExitReason::Quit);
        assert_eq!(summary.commands_dispatched, 3);

        let echo = output.find("your choice: foo").unwrap();
        let help = output.find("Below are the commands").unwrap();
        assert!(echo < help);
        assert_eq!(output.matches("Welcome to Demo").count(), 2);
        assert!(!output.contains("your choice: help"));
        assert!(!output.contains("your choice: quit"));
        assert!(output.ends_with(PROMPT));
    }

    #[test]
    fn test_immediate_eof() {
        let (summary, output) = session("");

        assert_eq!(summary.exit, ExitReason::InputExhausted);
        assert_eq!(summary.commands_dispatched, 0);
        assert!(output.contains("Welcome to Demo"));
        assert!(!output.contains("your choice"));
    }

    #[test]
    fn test_blank_lines_reprompt() {
        let (summary, output) = session("\n\nquit\n");
        assert_eq!(summary.exit, ExitReason::Quit);
        assert_eq!(summary.commands_dispatched, 1);
        assert_eq!(output.matches(PROMPT).count(), 3);
        assert!(!output.contains("your choice"));
    }

    #[test]
    fn test_quit_stops_reading() {
        let (summary, output) = session("quit\nfoo\n");
        assert_eq!(summary.exit, ExitReason::Quit);
        assert!(!output.contains("your choice: foo"));
    }

    #[test]
    fn test_tokens_on_one_line() {
        let (summary, output) = session("one two quit three\n");
        assert_eq!(summary.exit, ExitReason::Quit);
        assert_eq!(summary.commands_dispatched, 3);
        assert!(output.contains("your choice: one"));
        assert!(output.contains("your choice: two"));
        assert!(!output.contains("three"));
    }

    #[test]
    fn test_long_input_reprompts() {
        let config = ShellConfig::new("Demo")
            .with_clear_screen(false)
            .with_max_input_len(4);
        let input = "waytoolong\nquit\n";
        let mut shell = InteractiveShell::new(&config, input.as_bytes(), Vec::new()).unwrap();
        let summary = shell.run().unwrap();
        let output = String::from_utf8(shell.into_output()).unwrap();

        assert_eq!(summary.exit, ExitReason::Quit);
        assert!(output.contains("Input too long (limit is 4 bytes)"));
        assert!(!output.contains("waytoolong"));
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = ShellConfig::new("Demo").with_max_input_len(0);
        let result = InteractiveShell::new(&config, "".as_bytes(), Vec::new());
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn test_write_failure_is_io_error() {
        let config = ShellConfig::new("Demo");
        let mut shell = InteractiveShell::new(&config, "quit\n".as_bytes(), BrokenPipe).unwrap();
        let err = shell.run().unwrap_err();
        match err {
            Error::Io(e) => assert_eq!(e.kind(), io::ErrorKind::BrokenPipe),
            other => panic!("expected IO error, got {:?}", other),
        }
    }
}
