//! Read-only item lookup consumed by the quiz engine.

/// The view of one reviewable item the quiz engine needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogItem<'a> {
    pub id: &'a str,
    /// Items sharing a category are preferred as distractors.
    pub category: &'a str,
    pub display_name: &'a str,
    pub short_code: &'a str,
}

/// Lookup of reviewable items by identifier.
pub trait Catalog {
    fn item(&self, id: &str) -> Option<CatalogItem<'_>>;

    /// All item ids in catalog order.
    fn item_ids(&self) -> Vec<&str>;

    fn contains(&self, id: &str) -> bool {
        self.item(id).is_some()
    }
}
