//! Query highlighting for search results.
//!
//! The query is treated as a literal string, never compiled into a
//! pattern, so metacharacters like `(` or `+` in user input cannot
//! produce a malformed matcher. Matching is case-insensitive with the
//! original casing preserved in the output.

/// Opening emphasis marker wrapped around each match
pub const MARK_OPEN: &str = "<mark>";

/// Closing emphasis marker
pub const MARK_CLOSE: &str = "</mark>";

/// Find the byte spans of every case-insensitive occurrence of `query`
/// in `text`. Spans are non-overlapping and in order. An empty query
/// yields no spans.
pub fn find_spans(text: &str, query: &str) -> Vec<(usize, usize)> {
    let needle: Vec<char> = query.chars().flat_map(char::to_lowercase).collect();
    if needle.is_empty() {
        return Vec::new();
    }

    let chars: Vec<(usize, char)> = text.char_indices().collect();
    let mut spans = Vec::new();
    let mut i = 0;

    while i < chars.len() {
        match match_end(&chars, i, &needle, text.len()) {
            Some(end) => {
                spans.push((chars[i].0, end));
                // Skip past the match so occurrences never overlap
                while i < chars.len() && chars[i].0 < end {
                    i += 1;
                }
            }
            None => i += 1,
        }
    }

    spans
}

/// If the needle matches at char position `start`, return the byte offset
/// one past the matched region.
fn match_end(
    chars: &[(usize, char)],
    start: usize,
    needle: &[char],
    text_len: usize,
) -> Option<usize> {
    let mut ni = 0;
    let mut ci = start;

    while ni < needle.len() {
        let (_, ch) = *chars.get(ci)?;
        for folded in ch.to_lowercase() {
            // A char whose case-folding runs past the needle is a partial
            // match at best, which does not count.
            if ni >= needle.len() || folded != needle[ni] {
                return None;
            }
            ni += 1;
        }
        ci += 1;
    }

    Some(chars.get(ci).map(|(offset, _)| *offset).unwrap_or(text_len))
}

/// Wrap every case-insensitive occurrence of `query` in emphasis markers.
/// Returns `text` unchanged when the query is empty or nothing matches.
pub fn highlight(text: &str, query: &str) -> String {
    let spans = find_spans(text, query);
    if spans.is_empty() {
        return text.to_string();
    }

    let extra = spans.len() * (MARK_OPEN.len() + MARK_CLOSE.len());
    let mut out = String::with_capacity(text.len() + extra);
    let mut cursor = 0;

    for (start, end) in spans {
        out.push_str(&text[cursor..start]);
        out.push_str(MARK_OPEN);
        out.push_str(&text[start..end]);
        out.push_str(MARK_CLOSE);
        cursor = end;
    }
    out.push_str(&text[cursor..]);

    out
}
