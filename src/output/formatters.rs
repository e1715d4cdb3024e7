//! Formatting utilities for terminal output

/// Format one pair with its sum, e.g. `(2 + 5) = 7`
#[must_use]
pub fn format_pair(pair: (i64, i64)) -> String {
    let (a, b) = pair;
    format!("({a} + {b}) = {}", a + b)
}

/// Format a sequence as a bracketed list, e.g. `[3, 5, 2, 3]`
#[must_use]
pub fn format_sequence(values: &[i64]) -> String {
    let joined = values
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ");
    format!("[{joined}]")
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
