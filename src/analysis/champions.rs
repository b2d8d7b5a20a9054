use crate::dataset::ingest::Datasets;
use std::collections::BTreeSet;

/// Every non-empty `champion_name` across the four datasets, sorted ascending.
pub fn champion_set(datasets: &Datasets) -> Vec<String> {
    datasets
        .all_rows()
        .map(|row| row.champion())
        .filter(|name| !name.is_empty())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Maps a free-text query onto a known champion.
///
/// A case-insensitive exact match wins, otherwise the first champion that
/// contains the query. Blank queries match nothing.
pub fn resolve_champion<'a>(query: &str, champions: &'a [String]) -> Option<&'a str> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return None;
    }

    champions
        .iter()
        .find(|name| name.to_lowercase() == needle)
        .or_else(|| champions.iter().find(|name| name.to_lowercase().contains(&needle)))
        .map(String::as_str)
}
