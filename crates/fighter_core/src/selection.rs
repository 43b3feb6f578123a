//! Toggle-based selection sets.

/// What a toggle did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Toggle {
    /// The id was absent and is now selected.
    Added,
    /// The id was selected and is now removed.
    Removed,
}

/// An ordered set of selected ids.
///
/// Each id is present at most once. Insertion order is preserved so that
/// listings show picks in the order they were made.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionSet {
    ids: Vec<String>,
}

impl SelectionSet {
    /// Create an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Check whether `id` is selected.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.ids.iter().any(|x| x == id)
    }

    /// Add `id` if absent, remove it if present.
    pub fn toggle(&mut self, id: &str) -> Toggle {
        if let Some(pos) = self.ids.iter().position(|x| x == id) {
            self.ids.remove(pos);
            Toggle::Removed
        } else {
            self.ids.push(id.to_string());
            Toggle::Added
        }
    }

    /// Toggle `id`, refusing additions once `limit` ids are selected.
    ///
    /// Removal is always allowed. Returns `None` when the addition was
    /// refused; the set is left unchanged.
    pub fn toggle_within(&mut self, id: &str, limit: usize) -> Option<Toggle> {
        if !self.contains(id) && self.ids.len() >= limit {
            return None;
        }
        Some(self.toggle(id))
    }

    /// Remove every selection.
    pub fn clear(&mut self) {
        self.ids.clear();
    }

    /// Number of selected ids.
    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Check if nothing is selected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Selected ids in selection order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.ids.iter().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_adds_then_removes() {
        let mut set = SelectionSet::new();
        assert_eq!(set.toggle("a"), Toggle::Added);
        assert!(set.contains("a"));
        assert_eq!(set.toggle("a"), Toggle::Removed);
        assert!(set.is_empty());
    }

    #[test]
    fn test_preserves_selection_order() {
        let mut set = SelectionSet::new();
        set.toggle("c");
        set.toggle("a");
        set.toggle("b");
        set.toggle("a");
        assert_eq!(set.iter().collect::<Vec<_>>(), vec!["c", "b"]);
    }

    #[test]
    fn test_toggle_within_limit() {
        let mut set = SelectionSet::new();
        assert_eq!(set.toggle_within("a", 2), Some(Toggle::Added));
        assert_eq!(set.toggle_within("b", 2), Some(Toggle::Added));

        // Full: additions refused, nothing changes.
        assert_eq!(set.toggle_within("c", 2), None);
        assert_eq!(set.len(), 2);
        assert!(!set.contains("c"));

        // Removal still works at the limit.
        assert_eq!(set.toggle_within("a", 2), Some(Toggle::Removed));
        assert_eq!(set.toggle_within("c", 2), Some(Toggle::Added));
    }

    #[test]
    fn test_zero_limit_refuses_everything() {
        let mut set = SelectionSet::new();
        assert_eq!(set.toggle_within("a", 0), None);
        assert!(set.is_empty());
    }
}
