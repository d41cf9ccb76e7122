//! Formatting utilities for terminal output

use crate::game::GameStatus;
use colored::{ColoredString, Colorize};

/// Join words with commas, in the order given
#[must_use]
pub fn word_list<S: AsRef<str>>(words: &[S]) -> String {
    words
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Status label coloured by how the game went for the player
#[must_use]
pub fn status_label(status: GameStatus) -> ColoredString {
    let text = status.to_string();
    match status {
        GameStatus::InProgress => text.normal(),
        GameStatus::WonBySurvival => text.green().bold(),
        GameStatus::GaveUp => text.yellow(),
        GameStatus::NoMovesLeft => text.red(),
    }
}
