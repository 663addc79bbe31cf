use crate::ast::{Inline, InlineSeq};

/// Formats a block's raw text into styled fragments, preserving source order.
///
/// Two passes: in-document links `[display](#target)` are extracted first,
/// then the remaining segments are split on `**strong**` markers. The grammar
/// is deliberately permissive and one level deep; unmatched markers fall
/// through as plain text.
pub fn parse_inline(text: &str) -> InlineSeq {
    let mut out = Vec::new();
    let mut rest = text;
    while let Some(link) = find_link(rest) {
        push_strong_fragments(&mut out, &rest[..link.start]);
        out.push(Inline::Link {
            text: link.display.to_string(),
            target: link.target.to_string(),
        });
        rest = &rest[link.end..];
    }
    push_strong_fragments(&mut out, rest);
    out
}

struct LinkMatch<'a> {
    start: usize,
    end: usize,
    display: &'a str,
    target: &'a str,
}

/// Finds the leftmost non-greedy `[display](#target)` match. The display text
/// runs to the first `](#` and may itself contain brackets; the target runs
/// to the first `)` and is taken verbatim (it is assumed to already be a
/// slug, never a raw URL).
fn find_link(text: &str) -> Option<LinkMatch<'_>> {
    let open = text.find('[')?;
    let after_open = open + 1;
    let display_end = after_open + text[after_open..].find("](#")?;
    let target_start = display_end + 3;
    let close = target_start + text[target_start..].find(')')?;
    Some(LinkMatch {
        start: open,
        end: close + 1,
        display: &text[after_open..display_end],
        target: &text[target_start..close],
    })
}

fn push_strong_fragments(out: &mut InlineSeq, segment: &str) {
    let mut rest = segment;
    while let Some(start) = rest.find("**") {
        let content_start = start + 2;
        let Some(len) = rest[content_start..].find("**") else {
            break;
        };
        if start > 0 {
            out.push(Inline::Text(rest[..start].to_string()));
        }
        out.push(Inline::Strong(rest[content_start..content_start + len].to_string()));
        rest = &rest[content_start + len + 2..];
    }
    if !rest.is_empty() {
        out.push(Inline::Text(rest.to_string()));
    }
}

#[cfg(test)]
mod tests {
    use super::parse_inline;
    use crate::ast::Inline;

    fn text(value: &str) -> Inline {
        Inline::Text(value.to_string())
    }

    #[test]
    fn plain_text_round_trips() {
        assert_eq!(parse_inline("no markers here"), vec![text("no markers here")]);
    }

    #[test]
    fn strong_splits_around_markers() {
        assert_eq!(
            parse_inline("Hello **world**"),
            vec![text("Hello "), Inline::Strong("world".to_string())]
        );
    }

    #[test]
    fn link_extracts_display_and_target() {
        assert_eq!(
            parse_inline("see [Scope](#scope)."),
            vec![
                text("see "),
                Inline::Link {
                    text: "Scope".to_string(),
                    target: "scope".to_string(),
                },
                text("."),
            ]
        );
    }

    #[test]
    fn links_take_precedence_over_strong() {
        // Markers inside a link's display text stay verbatim; nesting is
        // not part of the grammar.
        assert_eq!(
            parse_inline("[**bold name**](#x)"),
            vec![Inline::Link {
                text: "**bold name**".to_string(),
                target: "x".to_string(),
            }]
        );
    }

    #[test]
    fn unterminated_markers_degrade_to_text() {
        assert_eq!(parse_inline("**open"), vec![text("**open")]);
        assert_eq!(parse_inline("[text](no-hash)"), vec![text("[text](no-hash)")]);
        assert_eq!(parse_inline("[text](#open"), vec![text("[text](#open")]);
    }

    #[test]
    fn empty_strong_is_kept() {
        assert_eq!(parse_inline("****"), vec![Inline::Strong(String::new())]);
    }

    #[test]
    fn display_text_may_contain_brackets() {
        assert_eq!(
            parse_inline("see [a] and [b](#x)"),
            vec![
                text("see "),
                Inline::Link {
                    text: "a] and [b".to_string(),
                    target: "x".to_string(),
                },
            ]
        );
    }

    #[test]
    fn empty_target_is_preserved() {
        assert_eq!(
            parse_inline("[x](#)"),
            vec![Inline::Link {
                text: "x".to_string(),
                target: String::new(),
            }]
        );
    }
}
