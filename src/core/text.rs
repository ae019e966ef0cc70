//! Character-count text metrics and small numeric helpers.
//!
//! The layout engines deliberately estimate label widths as
//! `character count x font size` instead of measuring rendered glyphs.
//! Keeping the estimate backend-independent makes every layout a pure,
//! deterministic function of its configuration.

/// Length in characters of the longest string in `strings`, 0 when empty.
#[must_use]
pub fn max_character_count<S: AsRef<str>>(strings: &[S]) -> usize {
    strings
        .iter()
        .map(|s| s.as_ref().chars().count())
        .max()
        .unwrap_or(0)
}

/// The string with the greatest character count, first-wins on ties.
#[must_use]
pub fn longest_string<S: AsRef<str>>(strings: &[S]) -> Option<&str> {
    let mut longest: Option<(&str, usize)> = None;
    for s in strings {
        let s = s.as_ref();
        let len = s.chars().count();
        if longest.is_none_or(|(_, best)| len > best) {
            longest = Some((s, len));
        }
    }
    longest.map(|(s, _)| s)
}

/// Inclusive prefix sums: `cumulative_sum(&[a, b, c]) == [a, a+b, a+b+c]`.
#[must_use]
pub fn cumulative_sum(values: &[f64]) -> Vec<f64> {
    let mut sum = 0.0;
    values
        .iter()
        .map(|v| {
            sum += v;
            sum
        })
        .collect()
}
