/// Keep only ASCII digits (`+1 (555) 010-2000` → `15550102000`)
pub fn digits_only(s: &str) -> String {
    s.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// True when the string is empty after trimming
pub fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}

/// Truncate a string to a maximum number of characters
pub fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        s.chars().take(max).collect::<String>() + "..."
    }
}
