// View state of the storefront window, split from app.rs.

use crate::types::{KindFilter, Section};

/// Which block is shown and how the catalog is narrowed down.
#[derive(Debug, Clone, Default)]
pub struct ViewState {
    pub section: Section,
    pub query: String,
    pub kind_filter: KindFilter,
}

impl ViewState {
    /// Switch the active section. Returns false if it was already active.
    pub fn navigate(&mut self, to: Section) -> bool {
        if self.section == to {
            return false;
        }
        log::debug!("section: {} -> {}", self.section, to);
        self.section = to;
        true
    }

    /// Called after the header search text was edited: a non-empty query is
    /// only visible in the catalog, so jump there.
    pub fn on_query_changed(&mut self) {
        if !self.query.trim().is_empty() && self.section != Section::Catalog {
            self.navigate(Section::Catalog);
        }
    }

    pub fn has_query(&self) -> bool {
        !self.query.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_on_home() {
        let v = ViewState::default();
        assert_eq!(v.section, Section::Home);
        assert_eq!(v.kind_filter, KindFilter::All);
        assert!(!v.has_query());
    }

    #[test]
    fn navigate_reports_changes_only() {
        let mut v = ViewState::default();
        assert!(v.navigate(Section::Cart));
        assert!(!v.navigate(Section::Cart));
        assert_eq!(v.section, Section::Cart);
    }

    #[test]
    fn typing_a_query_opens_catalog() {
        let mut v = ViewState::default();
        v.query = "neon".into();
        v.on_query_changed();
        assert_eq!(v.section, Section::Catalog);
    }

    #[test]
    fn blank_query_keeps_section() {
        let mut v = ViewState::default();
        v.navigate(Section::Tops);
        v.query = "   ".into();
        v.on_query_changed();
        assert_eq!(v.section, Section::Tops);
    }
}
