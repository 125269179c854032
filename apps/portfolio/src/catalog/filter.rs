use thiserror::Error;

use super::{CatalogEntry, Category};

/// Query-string value of the "all" selector.
pub const ALL_SLUG: &str = "all";

#[derive(Debug, Error, PartialEq)]
#[error("unknown category '{0}'")]
pub struct UnknownCategory(pub String);

/// Category selector: either every category or exactly one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryFilter<C> {
    All,
    Only(C),
}

impl<C> Default for CategoryFilter<C> {
    fn default() -> Self {
        Self::All
    }
}

impl<C: Category> CategoryFilter<C> {
    /// Parses a query-string value. Absent, empty and `all` select everything.
    pub fn parse(raw: Option<&str>) -> Result<Self, UnknownCategory> {
        match raw {
            None | Some("") | Some(ALL_SLUG) => Ok(Self::All),
            Some(slug) => C::from_slug(slug)
                .map(Self::Only)
                .ok_or_else(|| UnknownCategory(slug.to_string())),
        }
    }

    pub fn matches(&self, category: C) -> bool {
        match self {
            Self::All => true,
            Self::Only(selected) => *selected == category,
        }
    }
}

/// Page-scoped filter inputs. Built per request, never shared.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterState<C> {
    pub category: CategoryFilter<C>,
    pub search: String,
}

impl<C> Default for FilterState<C> {
    fn default() -> Self {
        Self {
            category: CategoryFilter::All,
            search: String::new(),
        }
    }
}

impl<C: Category> FilterState<C> {
    pub fn new(category: CategoryFilter<C>, search: impl Into<String>) -> Self {
        Self {
            category,
            search: search.into(),
        }
    }

    /// True when nothing narrows the catalog: "all" selected, empty search.
    pub fn is_default(&self) -> bool {
        self.category == CategoryFilter::All && self.search.is_empty()
    }

    pub fn matches<E: CatalogEntry<Category = C>>(&self, entry: &E) -> bool {
        self.category.matches(entry.category()) && matches_search(entry, &self.search)
    }
}

fn matches_search<E: CatalogEntry>(entry: &E, search: &str) -> bool {
    if search.is_empty() {
        return true;
    }
    let needle = search.to_lowercase();
    entry.title().to_lowercase().contains(&needle)
        || entry.excerpt().to_lowercase().contains(&needle)
        || entry
            .tags()
            .iter()
            .any(|tag| tag.to_lowercase().contains(&needle))
}

/// Returns the entries visible under `state`, in catalog order.
pub fn filter<'a, E: CatalogEntry>(catalog: &'a [E], state: &FilterState<E::Category>) -> Vec<&'a E> {
    catalog.iter().filter(|e| state.matches(*e)).collect()
}

/// Featured entries in catalog order, regardless of any filter.
pub fn featured<E: CatalogEntry>(catalog: &[E]) -> Vec<&E> {
    catalog.iter().filter(|e| e.featured()).collect()
}
