//! Catalogs: ordered collections of posts or projects, the filter that
//! narrows them, and the single-selection controller behind the modals.

pub mod filter;
pub mod selection;

pub use filter::{featured, filter, CategoryFilter, FilterState, UnknownCategory};
pub use selection::{ClickTarget, Selection};

/// A closed, catalog-specific category enumeration.
///
/// The "all" selector is not a variant; it lives in [`CategoryFilter::All`].
pub trait Category: Copy + PartialEq + 'static {
    /// Button label for the "all" selector.
    const ALL_LABEL: &'static str;

    /// Every variant, in display order.
    fn variants() -> &'static [Self];

    /// Stable identifier used in query strings and the content file.
    fn slug(&self) -> &'static str;

    fn label(&self) -> &'static str;

    fn from_slug(slug: &str) -> Option<Self> {
        Self::variants().iter().copied().find(|c| c.slug() == slug)
    }
}

/// One item of a catalog. Implemented by blog posts and projects.
pub trait CatalogEntry {
    type Category: Category;

    /// Unique within the catalog, never changes.
    fn id(&self) -> u32;
    fn title(&self) -> &str;
    fn category(&self) -> Self::Category;
    /// Short teaser: a post excerpt or a project description.
    fn excerpt(&self) -> &str;
    /// Tags or technologies, in display order.
    fn tags(&self) -> &[String];
    fn featured(&self) -> bool;
    /// Long-form text handed to the block renderer when the entry is opened.
    fn content(&self) -> Option<&str>;
}

pub fn find_by_id<E: CatalogEntry>(catalog: &[E], id: u32) -> Option<&E> {
    catalog.iter().find(|e| e.id() == id)
}
