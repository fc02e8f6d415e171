//! Small text formatting helpers for dashboard figures.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

/// Group digits in threes with commas: `2450` -> `"2,450"`.
pub fn thousands(value: u32) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// First whitespace-separated word of a display name.
pub fn first_name(full_name: &str) -> &str {
    full_name.split_whitespace().next().unwrap_or(full_name)
}

/// Possessive form used in section headings: `"Alex"` -> `"Alex's"`.
pub fn possessive(name: &str) -> String {
    if name.ends_with('s') { format!("{name}'") } else { format!("{name}'s") }
}

/// `"+150 pts"` for positive awards, `None` for zero.
pub fn points_award(points: u32) -> Option<String> {
    (points > 0).then(|| format!("+{points} pts"))
}

/// `"7 days"`, `"1 day"`.
pub fn day_count(days: u32) -> String {
    if days == 1 { "1 day".to_owned() } else { format!("{days} days") }
}
