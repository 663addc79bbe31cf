use crate::ast::TocEntry;
use crate::slug::slugify;

/// Derives the navigation index straight from the source text.
///
/// This pass is deliberately independent of the block scanner so the sidebar
/// stays correct even if the main render diverges; the cost is computing each
/// slug twice, which is acceptable for single-blob documents. Only level-1
/// and level-2 headings appear in the index.
pub fn build_toc(source: &str) -> Vec<TocEntry> {
    source
        .split('\n')
        .filter_map(|line| {
            let level = if line.starts_with("# ") {
                1
            } else if line.starts_with("## ") {
                2
            } else {
                return None;
            };
            let text = heading_text(line);
            Some(TocEntry {
                id: slugify(text),
                text: text.to_string(),
                level,
            })
        })
        .collect()
}

/// Strips the leading `#` run and the whitespace that follows it.
fn heading_text(line: &str) -> &str {
    line.trim_start_matches('#').trim_start()
}

#[cfg(test)]
mod tests {
    use super::build_toc;
    use crate::ast::TocEntry;

    #[test]
    fn collects_levels_one_and_two_in_order() {
        let source = "# Overview\ntext\n## Scope\n### Detail\n## Approach\n";
        let toc = build_toc(source);
        assert_eq!(
            toc,
            vec![
                TocEntry {
                    text: "Overview".to_string(),
                    level: 1,
                    id: "overview".to_string(),
                },
                TocEntry {
                    text: "Scope".to_string(),
                    level: 2,
                    id: "scope".to_string(),
                },
                TocEntry {
                    text: "Approach".to_string(),
                    level: 2,
                    id: "approach".to_string(),
                },
            ]
        );
    }

    #[test]
    fn indented_or_bare_hashes_are_ignored() {
        assert!(build_toc("  # indented\n#bare\n").is_empty());
    }

    #[test]
    fn empty_document_yields_empty_index() {
        assert!(build_toc("").is_empty());
        assert!(build_toc("\n\n").is_empty());
    }
}
