/// Greedy word wrap.
///
/// Only word lengths count towards `width`, separating spaces do not. A word
/// that would push the running count past `width` starts a new line; a word
/// longer than `width` is kept whole on its own line. Whitespace in `text` is
/// collapsed, so wrapping the output again at the same width is a no-op.
pub fn wrap(text: &str, width: usize) -> String {
    let mut lines: Vec<Vec<&str>> = Vec::new();
    let mut current: Vec<&str> = Vec::new();
    let mut current_len = 0;

    for word in text.split_whitespace() {
        let word_len = word.chars().count();

        if !current.is_empty() && current_len + word_len > width {
            lines.push(std::mem::take(&mut current));
            current_len = 0;
        }

        current.push(word);
        current_len += word_len;
    }

    if !current.is_empty() {
        lines.push(current);
    }

    lines
        .iter()
        .map(|words| words.join(" "))
        .collect::<Vec<_>>()
        .join("\n")
}
