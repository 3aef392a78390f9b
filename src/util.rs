// Small text helpers used when printing to the terminal and in logs.

/// Appends `postfix` to `text` unless `count` is exactly one.
pub fn pluralize(text: &str, postfix: &str, count: usize) -> String {
    if count == 1 {
        text.to_string()
    } else {
        format!("{text}{postfix}")
    }
}

/// Keeps the first `length` characters of `text` and adds an ellipsis.
/// Text that already fits is returned unchanged.
pub fn shorten(text: &str, length: usize) -> String {
    if text.chars().count() <= length {
        return text.to_string();
    }
    let head: String = text.chars().take(length).collect();
    format!("{head}...")
}
