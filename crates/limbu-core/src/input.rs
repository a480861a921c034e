/// Characters of text before the cursor considered when querying suggestions
pub const DEFAULT_CONTEXT_CHARS: usize = 50;

const LIMBU_EXCLAMATION: char = '\u{1944}';
const LIMBU_QUESTION: char = '\u{1945}';

/// Keep only the trailing `max_chars` characters of the text before the cursor.
pub fn text_before_cursor(text: &str, max_chars: usize) -> &str {
    let skip = text.chars().count().saturating_sub(max_chars);
    match text.char_indices().nth(skip) {
        Some((offset, _)) => &text[offset..],
        None => "",
    }
}

fn is_word_boundary(ch: char) -> bool {
    ch.is_whitespace()
        || ch.is_ascii_punctuation()
        || ch == LIMBU_EXCLAMATION
        || ch == LIMBU_QUESTION
        || ch == '।'
}

/// The word being typed: everything after the last boundary character.
pub fn current_word(text: &str) -> &str {
    match text.rfind(is_word_boundary) {
        Some(offset) => {
            let boundary_len = text[offset..].chars().next().map_or(0, char::len_utf8);
            &text[offset + boundary_len..]
        }
        None => text,
    }
}
