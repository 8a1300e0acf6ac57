//! Text helpers for embedding message text into generated Java source.

/// Column budget used for javadoc comment lines.
pub const DEFAULT_WRAP_WIDTH: usize = 80;

/// Greedy word wrap.
///
/// Words are separated by single spaces and a line is closed as soon as the
/// next word would push it past `width` characters. Words are never split,
/// so a word longer than `width` gets a line of its own.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut line = String::new();
    let mut line_len = 0;

    for word in text.split_whitespace() {
        let word_len = word.chars().count();
        if line_len > 0 && line_len + 1 + word_len > width {
            lines.push(std::mem::take(&mut line));
            line_len = 0;
        }
        if line_len > 0 {
            line.push(' ');
            line_len += 1;
        }
        line.push_str(word);
        line_len += word_len;
    }

    if line_len > 0 {
        lines.push(line);
    }
    lines
}

/// Escape text for a javadoc comment.
pub fn escape_comment(text: &str) -> String {
    text.replace('<', "&lt;")
        .replace('>', "&gt;")
        // a literal `*/` would close the comment
        .replace("*/", "*&#47;")
}

/// Escape text for a Java string literal. Surrounding whitespace is trimmed.
pub fn escape_java_string(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.trim().chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c => out.push(c),
        }
    }
    out
}
