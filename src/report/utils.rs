/// Keeps the first 60 characters of `content`, marking the cut with an ellipsis.
pub(crate) fn shorten_content(content: &str) -> String {
    let max_length = 60;
    if content.chars().count() <= max_length {
        content.to_owned()
    } else {
        content.chars().take(max_length).collect::<String>() + "…"
    }
}

/// Uppercases the first character, leaving the rest untouched.
pub(crate) fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Empty strings carry no more information than missing ones.
pub(crate) fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}
