use reportmark_core::Block;

/// Structure counts surfaced to the user alongside an export.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct DocumentStats {
    pub tables: usize,
    pub lists: usize,
    pub headings: usize,
}

/// Outcome of the pre-export integrity pass.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ExportCheck {
    pub verified: bool,
    pub issues: Vec<String>,
    pub stats: DocumentStats,
}

/// Inspects a parsed document before export. A body row wider than its header
/// is the structural signal that the printed table may exceed the printable
/// area, since the extra cells get no column.
pub fn inspect(blocks: &[Block]) -> ExportCheck {
    let mut stats = DocumentStats::default();
    let mut issues = Vec::new();

    for block in blocks {
        match block {
            Block::Heading { .. } => stats.headings += 1,
            Block::List(_) => stats.lists += 1,
            Block::Table(table) => {
                stats.tables += 1;
                let widest = table.rows.iter().map(Vec::len).max().unwrap_or(0);
                if widest > table.header.len() {
                    issues.push(format!(
                        "Table {} may exceed printable area.",
                        stats.tables
                    ));
                }
            }
            Block::Paragraph { .. } => {}
        }
    }

    ExportCheck {
        verified: issues.is_empty(),
        issues,
        stats,
    }
}
