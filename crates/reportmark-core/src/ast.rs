pub type InlineSeq = Vec<Inline>;

/// One structural unit of the rendered report.
///
/// Blocks carry no identity beyond their position in the output sequence;
/// every parse produces a fresh vector.
#[derive(Clone, Debug, PartialEq)]
pub enum Block {
    Heading {
        level: u8,
        /// Anchor identifier derived from the raw heading text, before
        /// inline formatting.
        id: String,
        content: InlineSeq,
    },
    Table(Table),
    List(List),
    Paragraph {
        content: InlineSeq,
    },
}

/// A pipe-delimited table. The header is the first row that survives
/// separator removal; the body may be empty while the block still exists.
#[derive(Clone, Debug, PartialEq)]
pub struct Table {
    pub header: Vec<InlineSeq>,
    pub rows: Vec<Vec<InlineSeq>>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct List {
    pub items: Vec<ListItem>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ListItem {
    pub content: InlineSeq,
    pub kind: ListKind,
    /// Count of leading whitespace characters on the source line. Rendering
    /// offsets nested items proportionally to this value.
    pub indent: usize,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ListKind {
    Bullet,
    Ordered,
}

/// A styled run of text within a block. The grammar is one level deep:
/// strong markers inside a link's display text (or vice versa) stay verbatim.
#[derive(Clone, Debug, PartialEq)]
pub enum Inline {
    Text(String),
    Strong(String),
    Link { text: String, target: String },
}

/// A navigation record pointing at a level-1 or level-2 heading's anchor.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TocEntry {
    pub text: String,
    pub level: u8,
    pub id: String,
}
