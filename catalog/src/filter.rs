use crate::entry::CatalogEntry;

/// Case-insensitive substring match against the name or the description.
/// An empty term matches every entry.
pub fn matches_term(entry: &CatalogEntry, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }
    let term = term.to_lowercase();
    entry.name.to_lowercase().contains(&term) || entry.description.to_lowercase().contains(&term)
}

/// Indices of the entries matching `term`, in table order.
pub fn filter_indices(entries: &[CatalogEntry], term: &str) -> Vec<usize> {
    entries
        .iter()
        .enumerate()
        .filter(|(_, entry)| matches_term(entry, term))
        .map(|(index, _)| index)
        .collect()
}
