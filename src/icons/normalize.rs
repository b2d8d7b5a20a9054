/// Canonical lookup key for a display name.
///
/// Lowercases, keeps ASCII digits and `a-z`, and turns every run of other
/// characters into a single space. Leading and trailing space is dropped.
/// `None` normalizes to the empty string.
pub fn normalize(text: Option<&str>) -> String {
    let Some(text) = text else {
        return String::new();
    };

    let mut key = String::with_capacity(text.len());
    let mut pending_space = false;

    for ch in text.chars().flat_map(char::to_lowercase) {
        if ch.is_ascii_lowercase() || ch.is_ascii_digit() {
            if pending_space && !key.is_empty() {
                key.push(' ');
            }
            pending_space = false;
            key.push(ch);
        } else {
            pending_space = true;
        }
    }

    key
}

/// Strips everything except ASCII letters and digits, lowercased.
/// Used by the fuzzy lookup tiers where spacing should not matter.
pub fn flatten(text: &str) -> String {
    text.chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_lowercase())
        .collect()
}
