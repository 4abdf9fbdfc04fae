// The ellipsis is appended after the kept characters, so the result may be
// one character longer than `max_len`.
#[must_use]
pub fn truncate(text: &str, max_len: usize) -> String {
    if text.chars().count() > max_len {
        let mut truncated: String = text.chars().take(max_len).collect();
        truncated.push('\u{2026}');
        truncated
    } else {
        text.to_string()
    }
}

// Grouping only splits the final thousands: 1_000_000 renders as "1000,000".
#[must_use]
pub fn format_steps(count: u32) -> String {
    if count > 999 {
        format!("{},{:03}", count / 1000, count % 1000)
    } else {
        count.to_string()
    }
}
