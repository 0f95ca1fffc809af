//! Catalog entry contract: stable identity plus a unique display name.

/// Anything stored in the catalog under an id and looked up by name.
///
/// Names are unique within one kind of entry and compared exactly; the
/// catalog trims them once on insertion.
pub trait CatalogEntry {
    /// Strongly-typed entry identifier.
    type Id: Copy + Eq + core::hash::Hash + core::fmt::Debug;

    fn id(&self) -> Self::Id;

    fn name(&self) -> &str;
}

/// Find an entry by exact name.
pub fn find_by_name<'a, T, I>(entries: I, name: &str) -> Option<&'a T>
where
    T: CatalogEntry + 'a,
    I: IntoIterator<Item = &'a T>,
{
    entries.into_iter().find(|entry| entry.name() == name)
}
