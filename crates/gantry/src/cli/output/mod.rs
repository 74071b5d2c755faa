//! Output formatting utilities

use console::style;

/// Print a success message
pub fn success(message: &str) {
    println!("{} {}", style("✓").green().bold(), message);
}

/// Print a warning message
pub fn warning(message: &str) {
    println!("{} {}", style("!").yellow().bold(), message);
}

/// Print a numbered workflow step
pub fn step(message: &str, n: usize, total: usize) {
    println!(" {} {} ({}/{})", style("*").yellow(), message, n, total);
}

/// Print a command banner like `[prep]`
pub fn banner(name: &str) {
    println!("{}", style(format!("[{}]", name)).bold().blue());
}
