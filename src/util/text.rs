// src/util/text.rs
use regex::Regex;
use std::sync::LazyLock;

static FILE_NAME_HOSTILE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"[/\\:*?"<>|\x00-\x1f]"#).expect("valid regex"));

/// Shorten content for list views: the first `max_chars` characters followed
/// by an ellipsis, which is appended even when nothing was cut.
///
/// # Examples
///
/// ```
/// use notecase::util::text::preview;
///
/// assert_eq!(preview("Buy milk", 100), "Buy milk...");
/// assert_eq!(preview("abcdef", 3), "abc...");
/// ```
pub fn preview(content: &str, max_chars: usize) -> String {
    let head: String = content.chars().take(max_chars).collect();
    format!("{head}...")
}

/// Turn a note title into a file stem that is safe on every platform.
/// An empty result falls back to `note`.
pub fn sanitize_file_stem(title: &str) -> String {
    let cleaned = FILE_NAME_HOSTILE.replace_all(title.trim(), "_");
    let cleaned = cleaned.trim_matches('.');
    if cleaned.is_empty() {
        "note".to_string()
    } else {
        cleaned.to_string()
    }
}

/// Greedy word wrap against an arbitrary width measure.
///
/// Explicit newlines always start a new line, blank lines are kept, and a
/// word wider than `max_width` on its own is split between characters.
pub fn wrap_text<F>(text: &str, max_width: f32, measure: F) -> Vec<String>
where
    F: Fn(&str) -> f32,
{
    let mut lines = Vec::new();

    for paragraph in text.split('\n') {
        let paragraph = paragraph.trim_end_matches('\r');
        let mut current = String::new();

        for word in paragraph.split_whitespace() {
            let candidate = if current.is_empty() {
                word.to_string()
            } else {
                format!("{current} {word}")
            };

            if measure(&candidate) <= max_width {
                current = candidate;
                continue;
            }

            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
            }

            if measure(word) <= max_width {
                current = word.to_string();
            } else {
                for ch in word.chars() {
                    let mut next = current.clone();
                    next.push(ch);
                    if !current.is_empty() && measure(&next) > max_width {
                        lines.push(std::mem::take(&mut current));
                        current.push(ch);
                    } else {
                        current = next;
                    }
                }
            }
        }

        lines.push(current);
    }

    lines
}
