//! Product category filter state.
//!
//! Exactly one category is active at a time; the first one is active by
//! default. IDs are strings for stability against reordering.

/// Exclusive-selection state over a fixed set of category ids.
#[derive(Debug, Clone, Default)]
pub struct CategoryFilter {
    categories: Vec<String>,
    active: usize,
}

impl CategoryFilter {
    /// Create a filter over the given categories, first one active.
    pub fn new<I, S>(categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            categories: categories.into_iter().map(Into::into).collect(),
            active: 0,
        }
    }

    /// All category ids, in display order.
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    /// The active category id, if the set is non-empty.
    pub fn active(&self) -> Option<&str> {
        self.categories.get(self.active).map(String::as_str)
    }

    /// Check whether an id is the active category.
    pub fn is_active(&self, id: &str) -> bool {
        self.active() == Some(id)
    }

    /// Activate a category by id.
    ///
    /// Returns true if the active category changed. Unknown ids leave the
    /// state untouched.
    pub fn activate(&mut self, id: &str) -> bool {
        match self.categories.iter().position(|c| c == id) {
            Some(index) if index != self.active => {
                self.active = index;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_category_is_active_by_default() {
        let filter = CategoryFilter::new(["laptops", "phones", "tablets"]);
        assert_eq!(filter.active(), Some("laptops"));
        assert!(filter.is_active("laptops"));
    }

    #[test]
    fn activate_switches_exactly_one() {
        let mut filter = CategoryFilter::new(["laptops", "phones"]);
        assert!(filter.activate("phones"));
        assert!(filter.is_active("phones"));
        assert!(!filter.is_active("laptops"));
        // Re-activating the active category is a no-op.
        assert!(!filter.activate("phones"));
    }

    #[test]
    fn unknown_id_is_rejected() {
        let mut filter = CategoryFilter::new(["laptops", "phones"]);
        assert!(!filter.activate("toasters"));
        assert_eq!(filter.active(), Some("laptops"));
    }

    #[test]
    fn empty_filter_has_no_active_category() {
        let filter = CategoryFilter::new(Vec::<String>::new());
        assert_eq!(filter.active(), None);
    }
}
