mod ast;
mod emit;
mod inline;
mod nav;
mod scanner;
mod session;
mod slug;
mod toc;

pub use ast::{Block, Inline, InlineSeq, List, ListItem, ListKind, Table, TocEntry};
pub use emit::{emit_html, emit_html_sanitized, emit_toc_html};
pub use inline::parse_inline;
pub use nav::{
    AnchorLayout, DEFAULT_HEADER_OFFSET, Navigator, ScrollBehavior, ScrollRequest,
};
pub use scanner::parse;
pub use session::{Projections, Session, project};
pub use slug::slugify;
pub use toc::build_toc;
