//! Color constants for the terminal user interface.

use ratatui::style::Color;

use crate::fields::{Priority, Status};

/// Brand accent, used for the header and status bar.
pub const PURPLE: Color = Color::Rgb(124, 58, 237);
pub const DARK_GREEN: Color = Color::Rgb(0, 80, 0);
pub const GOLD: Color = Color::Rgb(255, 215, 0);
pub const DARK_RED: Color = Color::Rgb(114, 0, 0);

/// Badge color for a priority.
pub fn priority_color(p: Priority) -> Color {
    match p {
        Priority::Low => Color::Green,
        Priority::Medium => GOLD,
        Priority::High => Color::Red,
    }
}

/// Badge color for a status.
pub fn status_color(s: Status) -> Color {
    match s {
        Status::Todo => Color::Gray,
        Status::InProgress => Color::Blue,
        Status::Review => Color::Magenta,
        Status::Completed => Color::Green,
    }
}

/// Dot color for a project's color tag. Unknown tags render gray.
pub fn project_color(tag: &str) -> Color {
    match tag {
        "purple" => PURPLE,
        "blue" => Color::Blue,
        "green" => DARK_GREEN,
        "orange" => Color::Rgb(249, 115, 22),
        "red" => DARK_RED,
        _ => Color::Gray,
    }
}
