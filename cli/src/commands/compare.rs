//! Compare command: string equality and ordering

use anyhow::Result;
use greet_core::{Renderer, UnderlineStyle};
use std::cmp::Ordering;
use std::io::{self, Write};
use tracing::debug;

/// Sign of the lexicographic byte-wise comparison, as -1, 0 or 1
pub fn ordering_sign(left: &str, right: &str) -> i32 {
    match left.as_bytes().cmp(right.as_bytes()) {
        Ordering::Less => -1,
        Ordering::Equal => 0,
        Ordering::Greater => 1,
    }
}

/// Render the comparison report for two strings
pub fn render_comparison<W: Write>(
    renderer: &mut Renderer<W>,
    left: &str,
    right: &str,
) -> io::Result<()> {
    renderer.underline("String comparison", UnderlineStyle::BANNER)?;
    renderer.print(&format!("\n left:  {:?}", left))?;
    renderer.print(&format!("\n right: {:?}", right))?;
    renderer.print(&format!("\n same:  {}", left == right))?;
    renderer.print(&format!("\n order: {}\n", ordering_sign(left, right)))?;
    renderer.flush()
}

/// Print whether two strings are the same and how they order
pub fn compare_command(left: &str, right: &str) -> Result<()> {
    debug!("Comparing {:?} with {:?}", left, right);

    let mut renderer = Renderer::new(io::stdout().lock());
    render_comparison(&mut renderer, left, right)?;
    Ok(())
}
