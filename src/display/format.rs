//! Formatting helpers for terminal output

use crate::models::Money;

const FILLED: char = '█';
const EMPTY: char = '·';

/// Percentage with one decimal place, e.g. `63.6%`
pub fn format_percentage(pct: f64) -> String {
    format!("{:.1}%", pct)
}

/// Horizontal bar for `amount` scaled against `max`
///
/// Any non-zero amount gets at least one filled cell.
pub fn format_bar(amount: Money, max: Money, width: usize) -> String {
    let filled = if !amount.is_positive() || !max.is_positive() {
        0
    } else {
        let scaled = amount.cents() as u128 * width as u128 / max.cents() as u128;
        (scaled as usize).clamp(1, width)
    };

    let mut bar = String::with_capacity(width * FILLED.len_utf8());
    bar.extend(std::iter::repeat(FILLED).take(filled));
    bar.extend(std::iter::repeat(EMPTY).take(width - filled));
    bar
}

/// Shorten to `max_chars` characters, ending in `…` when cut
pub fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        return s.to_string();
    }
    if max_chars == 0 {
        return String::new();
    }
    let mut head: String = s.chars().take(max_chars - 1).collect();
    head.push('…');
    head
}

pub fn separator(width: usize) -> String {
    "-".repeat(width)
}
