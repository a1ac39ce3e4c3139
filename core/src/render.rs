//! Terminal rendering primitives
//!
//! Titles with a dash underline of matching width, plain text output and
//! screen clearing, all written to an arbitrary [`Write`] sink.

use crossterm::{
    cursor::MoveTo,
    terminal::{Clear, ClearType},
    QueueableCommand,
};
use std::io::{self, Write};
use tracing::debug;

/// Layout options for [`Renderer::underline`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UnderlineStyle {
    /// Indent the title and its rule by one space
    pub indent: bool,
    /// Emit an empty line before the title
    pub blank_before: bool,
    /// End the rule line with a newline
    pub line_break_after: bool,
}

impl UnderlineStyle {
    /// Title and rule flush left, rule left unterminated
    pub const PLAIN: Self = Self {
        indent: false,
        blank_before: false,
        line_break_after: false,
    };

    /// Indented, separated from previous output, rule terminated
    pub const BANNER: Self = Self {
        indent: true,
        blank_before: true,
        line_break_after: true,
    };
}

/// Writes shell output to the underlying sink
#[derive(Debug)]
pub struct Renderer<W: Write> {
    out: W,
    clear_screen: bool,
}

impl<W: Write> Renderer<W> {
    /// Create a renderer that clears the screen when asked to
    pub fn new(out: W) -> Self {
        Self {
            out,
            clear_screen: true,
        }
    }

    /// Enable or disable the clear-screen sequence
    pub fn with_clear_screen(mut self, clear_screen: bool) -> Self {
        self.clear_screen = clear_screen;
        self
    }

    /// Print `message` followed by a rule of dashes, one per character
    pub fn underline(&mut self, message: &str, style: UnderlineStyle) -> io::Result<()> {
        let pad = if style.indent { " " } else { "" };
        let rule = "-".repeat(message.chars().count());

        if style.blank_before {
            writeln!(self.out)?;
        }
        writeln!(self.out, "{pad}{message}")?;
        write!(self.out, "{pad}{rule}")?;
        if style.line_break_after {
            writeln!(self.out)?;
        }
        Ok(())
    }

    /// Reset the visible display to blank with the cursor at the top left
    ///
    /// Failures are logged and otherwise ignored.
    pub fn clear_screen(&mut self) {
        if !self.clear_screen {
            return;
        }

        let result = self
            .out
            .queue(MoveTo(0, 0))
            .and_then(|out| out.queue(Clear(ClearType::All)))
            .and_then(|out| out.flush());

        if let Err(e) = result {
            debug!("Failed to clear screen: {}", e);
        }
    }

    /// Write text verbatim
    pub fn print(&mut self, text: &str) -> io::Result<()> {
        self.out.write_all(text.as_bytes())
    }

    /// Flush buffered output
    pub fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }

    /// Borrow the underlying sink
    pub fn get_ref(&self) -> &W {
        &self.out
    }

    /// Consume the renderer, returning the underlying sink
    pub fn into_inner(self) -> W {
        self.out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(message: &str, style: UnderlineStyle) -> String {
        let mut renderer = Renderer::new(Vec::new());
        renderer.underline(message, style).unwrap();
        String::from_utf8(renderer.into_inner()).unwrap()
    }

    #[test]
    fn test_rule_matches_character_count() {
        for message in ["a", "Hello World", "Welcome to Awesome Program", "héllo wörld"] {
            let output = render(message, UnderlineStyle::PLAIN);
            let lines: Vec<&str> = output.lines().collect();
            assert_eq!(lines[0], message);
            assert_eq!(lines[1].chars().count(), message.chars().count());
            assert!(lines[1].chars().all(|c| c == '-'));
        }
    }

    #[test]
    fn test_plain_rule_is_unterminated() {
        assert_eq!(render("abc", UnderlineStyle::PLAIN), "abc\n---");
    }

    #[test]
    fn test_banner_layout() {
        assert_eq!(render("abc", UnderlineStyle::BANNER), "\n abc\n ---\n");
    }

    #[test]
    fn test_indent_without_blank_before() {
        let style = UnderlineStyle {
            indent: true,
            ..UnderlineStyle::PLAIN
        };
        assert_eq!(render("hi", style), " hi\n --");
    }

    #[test]
    fn test_empty_message_has_empty_rule() {
        assert_eq!(render("", UnderlineStyle::PLAIN), "\n");
    }

    #[test]
    fn test_clear_screen_is_repeatable() {
        let mut once = Renderer::new(Vec::new());
        once.clear_screen();
        let single = once.into_inner();
        assert!(!single.is_empty());

        let mut thrice = Renderer::new(Vec::new());
        thrice.clear_screen();
        thrice.clear_screen();
        thrice.clear_screen();
        assert_eq!(thrice.into_inner(), single.repeat(3));
    }

    #[cfg(unix)]
    #[test]
    fn test_clear_screen_sequence() {
        let mut renderer = Renderer::new(Vec::new());
        renderer.clear_screen();
        assert_eq!(renderer.into_inner(), b"\x1b[1;1H\x1b[2J");
    }

    #[test]
    fn test_clear_screen_disabled_writes_nothing() {
        let mut renderer = Renderer::new(Vec::new()).with_clear_screen(false);
        renderer.clear_screen();
        assert!(renderer.get_ref().is_empty());
    }

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

    #[test]
    fn test_clear_screen_swallows_write_failure() {
        let mut renderer = Renderer::new(BrokenPipe);
        renderer.clear_screen();
        renderer.clear_screen();
    }

    #[test]
    fn test_underline_propagates_write_failure() {
        let mut renderer = Renderer::new(BrokenPipe);
        let err = renderer
            .underline("title", UnderlineStyle::BANNER)
            .unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
    }
}
