//! Welcome banner and help menu

use crate::dispatcher::Command;
use crate::render::{Renderer, UnderlineStyle};
use std::io::{self, Write};

/// Composes the welcome banner from the program title
#[derive(Debug, Clone)]
pub struct Greeter {
    title: String,
}

impl Greeter {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// The banner text for this title
    pub fn message(&self) -> String {
        format!("Welcome to {}", self.title)
    }

    /// Clear the screen and render the underlined banner
    pub fn greet<W: Write>(&self, renderer: &mut Renderer<W>) -> io::Result<()> {
        renderer.clear_screen();
        renderer.underline(&self.message(), UnderlineStyle::BANNER)
    }

    /// Re-greet, then list the commands available at each prompt
    pub fn help<W: Write>(&self, renderer: &mut Renderer<W>) -> io::Result<()> {
        self.greet(renderer)?;
        renderer.print("\n Below are the commands available at each prompt.")?;
        for (name, description) in Command::BUILTINS {
            renderer.print(&format!("\n   {} - {}", name, description))?;
        }
        renderer.print("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn output<F>(f: F) -> String
    where
        F: FnOnce(&mut Renderer<Vec<u8>>) -> io::Result<()>,
    {
        let mut renderer = Renderer::new(Vec::new()).with_clear_screen(false);
        f(&mut renderer).unwrap();
        String::from_utf8(renderer.into_inner()).unwrap()
    }

    #[test]
    fn test_greet_contains_welcome() {
        for title in ["Awesome Program", "x", "Ünïcode tïtle"] {
            let greeter = Greeter::new(title);
            let text = output(|r| greeter.greet(r));
            assert!(text.contains(&format!("Welcome to {}", title)));
        }
    }

    #[test]
    fn test_greet_layout() {
        let greeter = Greeter::new("Demo");
        let text = output(|r| greeter.greet(r));
        assert_eq!(text, "\n Welcome to Demo\n ---------------\n");
    }

    #[test]
    fn test_empty_title_gives_degenerate_greeting() {
        let greeter = Greeter::new("");
        let text = output(|r| greeter.greet(r));
        assert!(text.contains("Welcome to "));
        assert!(text.contains(&"-".repeat("Welcome to ".len())));
    }

    #[test]
    fn test_greet_clears_screen_first() {
        let greeter = Greeter::new("Demo");
        let mut renderer = Renderer::new(Vec::new());
        greeter.greet(&mut renderer).unwrap();
        let bytes = renderer.into_inner();
        assert_eq!(bytes.first(), Some(&0x1b));
    }

    #[test]
    fn test_help_lists_commands_after_banner() {
        let greeter = Greeter::new("Demo");
        let text = output(|r| greeter.help(r));
        let banner = text.find("Welcome to Demo").unwrap();
        let help = text.find("   help - display the help menu.").unwrap();
        let quit = text.find("   quit - exit the program.").unwrap();
        assert!(banner < help && help < quit);
        assert!(text.contains("Below are the commands available at each prompt."));
        assert!(text.ends_with('\n'));
    }
}
