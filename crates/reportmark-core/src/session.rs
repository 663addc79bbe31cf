use std::sync::{Arc, Mutex};

use lru::LruCache;
use once_cell::sync::Lazy;

use crate::ast::{Block, TocEntry};
use crate::nav::{AnchorLayout, DEFAULT_HEADER_OFFSET, Navigator, ScrollRequest};
use crate::scanner::parse;
use crate::toc::build_toc;

/// Pure projections of one document: the renderable block sequence and the
/// navigation index. Both are recomputed from scratch on every document
/// change and never mutated afterwards.
#[derive(Clone, Debug, PartialEq)]
pub struct Projections {
    pub blocks: Vec<Block>,
    pub toc: Vec<TocEntry>,
}

type Cache = Mutex<LruCache<String, Arc<Projections>>>;

static PROJECTION_CACHE: Lazy<Cache> = Lazy::new(|| Mutex::new(LruCache::new(16.try_into().unwrap())));

/// Projects a document, memoized on the document text. Revisions replace the
/// document wholesale, so identity of the text is the cache key; recomputing
/// is idempotent and side-effect-free, making the cache purely an economy.
pub fn project(source: &str) -> Arc<Projections> {
    if let Some(cached) = PROJECTION_CACHE.lock().unwrap().get(source) {
        return Arc::clone(cached);
    }

    let computed = Arc::new(Projections {
        blocks: parse(source),
        toc: build_toc(source),
    });

    PROJECTION_CACHE
        .lock()
        .unwrap()
        .put(source.to_string(), Arc::clone(&computed));
    computed
}

/// Owns the current document and everything derived from it.
///
/// There is exactly one writer: the surrounding application session. Each
/// generation or chat revision replaces the document (never edits it), which
/// reprojects the derived structures and resets navigation state.
#[derive(Clone, Debug)]
pub struct Session {
    source: String,
    projections: Arc<Projections>,
    navigator: Navigator,
}

impl Session {
    pub fn new() -> Self {
        Self::with_header_offset(DEFAULT_HEADER_OFFSET)
    }

    pub fn with_header_offset(header_offset: f64) -> Self {
        Self {
            source: String::new(),
            projections: project(""),
            navigator: Navigator::new(header_offset),
        }
    }

    pub fn replace_document(&mut self, source: &str) {
        self.source = source.to_string();
        self.projections = project(source);
        self.navigator.reset();
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn blocks(&self) -> &[Block] {
        &self.projections.blocks
    }

    pub fn toc(&self) -> &[TocEntry] {
        &self.projections.toc
    }

    pub fn navigate(&mut self, id: &str, layout: &dyn AnchorLayout) -> Option<ScrollRequest> {
        self.navigator.navigate(id, layout)
    }

    pub fn active_heading(&self) -> Option<&str> {
        self.navigator.active_heading()
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::{Session, project};
    use std::collections::HashMap;

    #[test]
    fn projection_is_memoized_by_document_text() {
        let source = "# Memo Check\n\nBody text.\n";
        let first = project(source);
        let second = project(source);
        assert!(std::sync::Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn replacing_the_document_resets_navigation() {
        let layout = HashMap::from([("intro".to_string(), 200.0)]);
        let mut session = Session::new();
        session.replace_document("# Intro\n");
        session.navigate("intro", &layout).expect("anchor exists");
        assert_eq!(session.active_heading(), Some("intro"));

        session.replace_document("# Revised\n");
        assert_eq!(session.active_heading(), None);
        assert_eq!(session.toc().len(), 1);
        assert_eq!(session.toc()[0].id, "revised");
    }

    #[test]
    fn empty_session_projects_nothing() {
        let session = Session::new();
        assert!(session.blocks().is_empty());
        assert!(session.toc().is_empty());
    }
}
