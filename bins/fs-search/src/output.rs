//! How fs-search writes to the terminal.
//!
//! Results go to stdout; failures go to stderr so `match` can be scripted.

use owo_colors::OwoColorize;

/// One-line status messages with a coloured marker.
pub struct Status;

impl Status {
    /// Query matched.
    pub fn success(message: &str) {
        println!("{} {}", "✓".green(), message);
    }

    /// Query did not match, or the command failed.
    pub fn error(message: &str) {
        eprintln!("{} {}", "✗".red(), message);
    }

    /// Config location and other context.
    pub fn info(message: &str) {
        println!("{} {}", "ℹ".blue(), message);
    }

    /// Title above a list of ranked rows, underlined to its width.
    pub fn header(message: &str) {
        println!();
        println!("{}", message.bold());
        println!("{}", "─".repeat(message.chars().count()));
    }
}

/// Format one ranked row: score, `=` for exact or `~` for fuzzy, then label.
pub fn format_match(score: f64, exact: bool, label: &str) -> String {
    let marker = if exact { "=".green().to_string() } else { "~".yellow().to_string() };
    format!("{:>5.2} {} {}", score, marker, label)
}
