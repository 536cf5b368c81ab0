//! The fixed set of spending categories.

use std::fmt;

/// Classifies an expense. The set is closed and never changes at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Food,
    Transportation,
    Housing,
    Utilities,
    Entertainment,
    Personal,
    Debt,
    Other,
}

impl Category {
    /// Every category, in display order. Menus number them starting at 1,
    /// and aggregation reports follow the same order.
    pub const ALL: [Category; 8] = [
        Category::Food,
        Category::Transportation,
        Category::Housing,
        Category::Utilities,
        Category::Entertainment,
        Category::Personal,
        Category::Debt,
        Category::Other,
    ];

    /// Resolves a 1-based menu index. Out-of-range indices yield `None`.
    pub fn from_index(index: usize) -> Option<Category> {
        Category::ALL.get(index.checked_sub(1)?).copied()
    }

    pub fn label(&self) -> &'static str {
        match self {
            Category::Food => "Food",
            Category::Transportation => "Transportation",
            Category::Housing => "Housing",
            Category::Utilities => "Utilities",
            Category::Entertainment => "Entertainment",
            Category::Personal => "Personal",
            Category::Debt => "Debt",
            Category::Other => "Other",
        }
    }

    /// Zero-based slot of this category within [`Category::ALL`].
    pub fn position(&self) -> usize {
        Category::ALL
            .iter()
            .position(|candidate| candidate == self)
            .unwrap_or(0)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_index_resolves_the_full_menu_range() {
        assert_eq!(Category::from_index(1), Some(Category::Food));
        assert_eq!(Category::from_index(8), Some(Category::Other));
    }

    #[test]
    fn from_index_rejects_out_of_range_values() {
        assert_eq!(Category::from_index(0), None);
        assert_eq!(Category::from_index(9), None);
    }

    #[test]
    fn position_matches_declaration_order() {
        for (slot, category) in Category::ALL.iter().enumerate() {
            assert_eq!(category.position(), slot);
        }
    }
}
