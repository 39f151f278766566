//! Formatting utilities for terminal output

use crate::core::{Feedback, Scale};

/// Format feedback as one marker per digit: strikes, then balls, then misses
///
/// `●` strike, `◐` ball, `○` miss.
#[must_use]
pub fn feedback_to_markers(feedback: Feedback, scale: Scale) -> String {
    let strikes = usize::from(feedback.strike);
    let balls = usize::from(feedback.ball);
    let misses = scale.len().saturating_sub(strikes + balls);

    format!("{}{}{}", "●".repeat(strikes), "◐".repeat(balls), "○".repeat(misses))
}

/// Markers followed by the counts, e.g. `●◐◐○ 1S 2B`
#[must_use]
pub fn feedback_badge(feedback: Feedback, scale: Scale) -> String {
    format!("{} {feedback}", feedback_to_markers(feedback, scale))
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = if max > 0.0 {
        ((value / max) * width as f64) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Share of the universe a feedback group keeps, as a bar
#[must_use]
pub fn partition_bar(size: usize, total: usize, width: usize) -> String {
    create_progress_bar(size as f64, total as f64, width)
}
