use std::collections::HashMap;

/// Compensation for the sticky header that overlays the top of the viewport.
pub const DEFAULT_HEADER_OFFSET: f64 = 100.0;

/// Resolves an anchor identifier to the document-relative top of its rendered
/// element. Implemented by whatever owns the rendered surface; tests and
/// headless hosts can use a plain map.
pub trait AnchorLayout {
    fn anchor_top(&self, id: &str) -> Option<f64>;
}

impl AnchorLayout for HashMap<String, f64> {
    fn anchor_top(&self, id: &str) -> Option<f64> {
        self.get(id).copied()
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ScrollBehavior {
    Smooth,
    Instant,
}

/// The scroll the host should perform in response to a link activation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollRequest {
    pub top: f64,
    pub behavior: ScrollBehavior,
}

/// Tracks which heading is active and turns link activations into scroll
/// requests. Misses are silent: a stale link, a collided slug, or a target
/// outside the document leaves the state untouched and scrolls nowhere.
#[derive(Clone, Debug)]
pub struct Navigator {
    header_offset: f64,
    active: Option<String>,
}

impl Navigator {
    pub fn new(header_offset: f64) -> Self {
        Self {
            header_offset,
            active: None,
        }
    }

    pub fn navigate(&mut self, id: &str, layout: &dyn AnchorLayout) -> Option<ScrollRequest> {
        let top = layout.anchor_top(id)?;
        self.active = Some(id.to_string());
        Some(ScrollRequest {
            top: top - self.header_offset,
            behavior: ScrollBehavior::Smooth,
        })
    }

    /// Identifier recorded by the last successful navigation, if any.
    pub fn active_heading(&self) -> Option<&str> {
        self.active.as_deref()
    }

    /// Forgets the active heading. Called whenever the document is replaced.
    pub fn reset(&mut self) {
        self.active = None;
    }

    pub fn header_offset(&self) -> f64 {
        self.header_offset
    }
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new(DEFAULT_HEADER_OFFSET)
    }
}

#[cfg(test)]
mod tests {
    use super::{DEFAULT_HEADER_OFFSET, Navigator, ScrollBehavior};
    use std::collections::HashMap;

    fn layout() -> HashMap<String, f64> {
        HashMap::from([("scope".to_string(), 640.0), ("overview".to_string(), 120.0)])
    }

    #[test]
    fn navigation_compensates_for_the_sticky_header() {
        let mut nav = Navigator::default();
        let request = nav.navigate("scope", &layout()).expect("anchor exists");
        assert_eq!(request.top, 640.0 - DEFAULT_HEADER_OFFSET);
        assert_eq!(request.behavior, ScrollBehavior::Smooth);
        assert_eq!(nav.active_heading(), Some("scope"));
    }

    #[test]
    fn missing_anchor_is_silently_ignored() {
        let mut nav = Navigator::default();
        nav.navigate("overview", &layout()).expect("anchor exists");
        assert!(nav.navigate("not-there", &layout()).is_none());
        assert_eq!(nav.active_heading(), Some("overview"));
    }

    #[test]
    fn reset_clears_the_active_heading() {
        let mut nav = Navigator::new(64.0);
        nav.navigate("overview", &layout());
        nav.reset();
        assert_eq!(nav.active_heading(), None);
    }
}
