//! Report formatting utilities for terminal output

use crate::models::Money;

/// Right-align a money amount to `width` visible columns, then color it
///
/// Padding goes inside the escape codes so terminal alignment ignores them.
pub fn format_money_colored_right(amount: Money, width: usize) -> String {
    let padded = format!("{:>width$}", amount.to_string(), width = width);
    if amount.is_negative() {
        format!("\x1b[31m{}\x1b[0m", padded) // Red for negative
    } else if amount.is_positive() {
        format!("\x1b[32m{}\x1b[0m", padded) // Green for positive
    } else {
        padded
    }
}

/// Format a percentage with appropriate precision
pub fn format_percentage(pct: f64) -> String {
    if pct < 0.1 && pct > 0.0 {
        format!("{:.2}%", pct)
    } else if pct < 10.0 {
        format!("{:.1}%", pct)
    } else {
        format!("{:.0}%", pct)
    }
}

/// Create a simple bar chart representation
pub fn format_bar(value: f64, max_value: f64, width: usize) -> String {
    if max_value <= 0.0 || value <= 0.0 {
        return " ".repeat(width);
    }

    let filled = ((value / max_value) * width as f64).round() as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format a separator line
pub fn separator(width: usize) -> String {
    "─".repeat(width)
}

/// Truncate a string to at most `max_len` characters with an ellipsis
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        ".".repeat(max_len)
    } else {
        let kept: String = s.chars().take(max_len - 3).collect();
        format!("{}...", kept)
    }
}
