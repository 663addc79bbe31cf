/// Derives the anchor identifier for a heading.
///
/// Lower-cases, trims, collapses whitespace/hyphen runs to a single hyphen,
/// and drops every character outside `[a-z0-9_-]`. The same function is used
/// for rendered anchors and for table-of-contents targets, so identical
/// heading text always yields the identical identifier. Two headings that
/// normalize to the same slug collide; the last rendered anchor wins.
pub fn slugify(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut last_hyphen = false;
    for ch in text.trim().chars() {
        let ch = ch.to_ascii_lowercase();
        if ch.is_whitespace() || ch == '-' {
            if !last_hyphen {
                out.push('-');
                last_hyphen = true;
            }
            continue;
        }
        if ch.is_ascii_lowercase() || ch.is_ascii_digit() || ch == '_' {
            out.push(ch);
            last_hyphen = false;
        }
        // Anything else (punctuation, non-ASCII) is dropped without a
        // placeholder, so "Section 2.1" becomes "section-21".
    }
    out
}
