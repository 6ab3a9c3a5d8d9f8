//! Boxed terminal layout shared by the dashboard commands

use chrono::{DateTime, Utc};
use owo_colors::OwoColorize;
use std::fmt::Display;

const WIDTH: usize = 62;

pub fn banner(title: &str) {
    let rule = "═".repeat(WIDTH);
    println!("{}", format!("╔{}╗", rule).cyan().bold());
    println!("{}", format!("║ {:^width$} ║", title, width = WIDTH - 2).cyan().bold());
    println!("{}", format!("╚{}╝", rule).cyan().bold());
    println!(
        "  {}: {}",
        "Generated".bright_black(),
        Utc::now().format("%Y-%m-%d %H:%M:%S UTC").to_string().white()
    );
    println!();
}

fn top_line(title: &str) -> String {
    let used = title.chars().count() + 3;
    format!("┌─ {} {}┐", title, "─".repeat(WIDTH.saturating_sub(used)))
}

fn bottom_line() -> String {
    format!("└{}┘", "─".repeat(WIDTH))
}

pub fn section_start(title: &str) {
    println!("{}", top_line(title).green().bold());
}

pub fn section_end() {
    println!("{}", bottom_line().green().bold());
    println!();
}

pub fn row(label: &str, value: impl Display) {
    println!("│ {} {}", format!("{:<20}", label).bright_black(), value);
}

pub fn line(text: impl Display) {
    println!("│ {}", text);
}

pub fn error_box(message: &str) {
    eprintln!("{}", top_line("Error").red());
    eprintln!("│ {}", message.red());
    eprintln!("{}", bottom_line().red());
}

/// Render a subgraph timestamp as a date, leaving non-numeric text untouched
pub fn format_date(timestamp: &str) -> String {
    timestamp
        .trim()
        .parse::<i64>()
        .ok()
        .and_then(|secs| DateTime::from_timestamp(secs, 0))
        .map(|date| date.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| timestamp.to_string())
}

pub fn yes_no(value: bool) -> String {
    if value {
        "yes".green().bold().to_string()
    } else {
        "no".red().bold().to_string()
    }
}
