use chrono::{Local, TimeZone};

/// Formats an epoch-milliseconds timestamp in the local timezone.
/// Values outside the representable range come back as the raw number.
pub fn format_epoch_millis(millis: i64) -> String {
    match Local.timestamp_millis_opt(millis).earliest() {
        Some(dt) => dt.format("%Y-%m-%d %H:%M:%S %Z").to_string(),
        None => millis.to_string(),
    }
}

/// Word-wraps a single line at `width` columns, breaking only between words.
///
/// Lines at or under the limit pass through untouched. Longer lines are split
/// on spaces and re-accumulated: before each word, a line that would overflow
/// is flushed (even when empty) and the word starts a new one. Flushed lines
/// keep the trailing space left by accumulation; fixtures depend on that
/// exact spacing, so it must not be trimmed here.
pub fn wrap_line(line: &str, width: usize) -> Vec<String> {
    if line.len() <= width {
        return vec![line.to_string()];
    }

    let mut wrapped = Vec::new();
    let mut current = String::new();
    for word in line.split(' ') {
        if current.len() + word.len() > width {
            wrapped.push(std::mem::take(&mut current));
        }
        current.push_str(word);
        current.push(' ');
    }
    if !current.is_empty() {
        wrapped.push(current);
    }
    wrapped
}

/// Wraps multi-line text, honoring existing newlines as hard breaks before
/// wrapping within each resulting line.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    text.split('\n')
        .flat_map(|line| wrap_line(line, width))
        .collect()
}

/// Truncates a string to at most `max` characters.
pub fn truncate_chars(s: &str, max: usize) -> String {
    s.chars().take(max).collect()
}
