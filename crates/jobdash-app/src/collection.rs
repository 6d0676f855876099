//! In-memory cache of the last fetched set of a resource

use jobdash_core::PageCursors;

/// Last fetched items of one resource kind, replaced wholesale on each fetch
#[derive(Debug, Clone)]
pub struct Collection<T> {
    items: Vec<T>,
    cursors: Option<PageCursors>,
    revision: u64,
}

/// Borrowed view of a [`Collection`]
#[derive(Debug, Clone, Copy)]
pub struct CollectionView<'a, T> {
    pub items: &'a [T],
    pub cursors: Option<PageCursors>,
}

impl<T> Default for Collection<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            cursors: None,
            revision: 0,
        }
    }
}

impl<T> Collection<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Swap in a freshly fetched set
    pub fn replace(&mut self, items: Vec<T>, cursors: Option<PageCursors>) {
        self.items = items;
        self.cursors = cursors;
        self.revision += 1;
    }

    pub fn current(&self) -> CollectionView<'_, T> {
        CollectionView {
            items: &self.items,
            cursors: self.cursors,
        }
    }

    /// Whether at least one fetch has completed
    pub fn is_loaded(&self) -> bool {
        self.revision > 0
    }

    /// Number of replacements so far
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn cursors(&self) -> Option<PageCursors> {
        self.cursors
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_collection_is_not_loaded() {
        let c: Collection<u32> = Collection::new();
        assert!(!c.is_loaded());
        assert!(c.current().items.is_empty());
        assert!(c.current().cursors.is_none());
    }

    #[test]
    fn test_empty_fetch_counts_as_loaded() {
        let mut c: Collection<u32> = Collection::new();
        c.replace(Vec::new(), None);
        assert!(c.is_loaded());
        assert!(c.is_empty());
    }

    #[test]
    fn test_replace_discards_previous_items_and_cursors() {
        let mut c = Collection::new();
        c.replace(vec![1, 2, 3], Some(PageCursors::around(2, true)));
        c.replace(vec![9], None);

        let view = c.current();
        assert_eq!(view.items, &[9]);
        assert!(view.cursors.is_none());
        assert_eq!(c.revision(), 2);
    }
}
