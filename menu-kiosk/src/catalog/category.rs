//! CategoryIndex - category labels and the menu filter
//!
//! Pure functions of the catalog contents and the current filter selection.

use indexmap::IndexSet;
use shared::models::MenuItem;

/// Label shown for the "no filter" choice
pub const ALL_LABEL: &str = "すべて";

/// Distinct category labels in order of first appearance
///
/// Items without a category contribute [`shared::UNCATEGORIZED_LABEL`].
pub fn categories(items: &[MenuItem]) -> Vec<String> {
    let labels: IndexSet<&str> = items.iter().map(MenuItem::category_label).collect();
    labels.into_iter().map(str::to_string).collect()
}

/// Current filter selection (transient UI state)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(String),
}

impl CategoryFilter {
    pub fn only(label: impl Into<String>) -> Self {
        Self::Only(label.into())
    }

    pub fn label(&self) -> &str {
        match self {
            CategoryFilter::All => ALL_LABEL,
            CategoryFilter::Only(label) => label,
        }
    }

    /// Whether `item` is visible under this filter
    pub fn matches(&self, item: &MenuItem) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(label) => item.category_label() == label,
        }
    }

    /// Next choice in `All → c1 → … → cn → All`
    pub fn next(&self, categories: &[String]) -> Self {
        let position = self.position(categories);
        match position {
            None => categories.first().cloned().map_or(Self::All, Self::Only),
            Some(i) if i + 1 < categories.len() => Self::Only(categories[i + 1].clone()),
            Some(_) => Self::All,
        }
    }

    /// Previous choice in `All → c1 → … → cn → All`
    pub fn prev(&self, categories: &[String]) -> Self {
        match self.position(categories) {
            None => categories.last().cloned().map_or(Self::All, Self::Only),
            Some(0) => Self::All,
            Some(i) => Self::Only(categories[i - 1].clone()),
        }
    }

    /// Index of the selection in `categories`; `All` and unknown labels are `None`
    fn position(&self, categories: &[String]) -> Option<usize> {
        match self {
            CategoryFilter::All => None,
            CategoryFilter::Only(label) => categories.iter().position(|c| c == label),
        }
    }
}

/// Items visible under `filter`, in catalog order
pub fn visible_items<'a>(items: &'a [MenuItem], filter: &CategoryFilter) -> Vec<&'a MenuItem> {
    items.iter().filter(|item| filter.matches(item)).collect()
}
