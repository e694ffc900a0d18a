use super::catalog::{Catalog, ContentItem};

/// Ids of liked items, in the order they were liked.
#[derive(Debug, Clone, Default)]
pub struct Favorites {
    ids: Vec<u32>,
}

impl Favorites {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds the id if absent, removes it otherwise. Returns true when the
    /// item is a favorite after the call.
    pub fn toggle(&mut self, id: u32) -> bool {
        if let Some(pos) = self.ids.iter().position(|f| *f == id) {
            self.ids.remove(pos);
            log::debug!("favorites: removed id={}", id);
            false
        } else {
            self.ids.push(id);
            log::debug!("favorites: added id={}", id);
            true
        }
    }

    pub fn contains(&self, id: u32) -> bool {
        self.ids.contains(&id)
    }

    pub fn ids(&self) -> &[u32] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Favorite items in catalog order (not in the order they were liked).
    pub fn items<'a>(&self, catalog: &'a Catalog) -> Vec<&'a ContentItem> {
        catalog
            .all()
            .into_iter()
            .filter(|i| self.contains(i.id))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_twice_restores_state() {
        let mut f = Favorites::new();
        assert!(f.toggle(2));
        assert!(f.contains(2));
        assert!(!f.toggle(2));
        assert!(!f.contains(2));
        assert!(f.is_empty());
    }

    #[test]
    fn items_follow_catalog_order() {
        let catalog = Catalog::mock();
        let mut f = Favorites::new();
        f.toggle(5);
        f.toggle(1);
        f.toggle(3);
        assert_eq!(f.ids(), &[5, 1, 3]);
        let ids: Vec<u32> = f.items(&catalog).iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![1, 3, 5]);
    }

    #[test]
    fn unknown_ids_are_not_listed() {
        let catalog = Catalog::mock();
        let mut f = Favorites::new();
        f.toggle(99);
        assert_eq!(f.len(), 1);
        assert!(f.items(&catalog).is_empty());
    }
}
