use crate::api::models::{
    first_string, ArenaPayload, AUGMENT_ICON_FIELDS, ITEM_ICON_FIELDS, NAME_FIELDS,
};
use crate::icons::lookup::{lookup_augment_icon, lookup_item_icon};
use crate::icons::normalize::normalize;
use crate::icons::path::{resolve_path, AssetBase};
use serde_json::Value;
use std::collections::HashMap;

/// Normalized name -> icon URL, iterated in first-insertion order.
///
/// Re-inserting a key replaces its URL but keeps its original position.
#[derive(Debug, Clone, Default)]
pub struct IconCatalog {
    entries: Vec<(String, String)>,
    positions: HashMap<String, usize>,
}

impl IconCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true when the key was new.
    pub fn insert(&mut self, key: String, url: String) -> bool {
        match self.positions.get(&key) {
            Some(&pos) => {
                self.entries[pos].1 = url;
                false
            }
            None => {
                self.positions.insert(key.clone(), self.entries.len());
                self.entries.push((key, url));
                true
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.positions
            .get(key)
            .map(|&pos| self.entries[pos].1.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[derive(Debug, Clone, Default)]
pub struct Catalogs {
    pub items: IconCatalog,
    pub augments: IconCatalog,
}

impl Catalogs {
    pub fn empty() -> Self {
        Catalogs {
            items: IconCatalog::new(),
            augments: IconCatalog::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty() && self.augments.is_empty()
    }

    pub fn log_summary(&self) {
        if self.is_empty() {
            tracing::warn!("Icon catalogs came back empty, icons will show as placeholders");
            return;
        }
        tracing::info!(
            "Icon catalogs loaded: {} items, {} augments",
            self.items.len(),
            self.augments.len()
        );
        for (key, _) in self.items.iter().take(3) {
            tracing::debug!("sample item lookup '{}' -> {:?}", key, lookup_item_icon(key, &self.items));
        }
        for (key, _) in self.augments.iter().take(3) {
            tracing::debug!(
                "sample augment lookup '{}' -> {:?}",
                key,
                lookup_augment_icon(key, &self.augments)
            );
        }
    }
}

/// Builds both icon catalogs from the two remote payloads.
///
/// Base items go in first, then the arena item overrides, so an override
/// wins when both normalize to the same key.
pub fn build_catalogs(items: &[Value], arena: &ArenaPayload, base: &AssetBase) -> Catalogs {
    let mut catalogs = Catalogs::empty();

    index_descriptors(&mut catalogs.items, items, ITEM_ICON_FIELDS, base);
    let overridden = index_descriptors(&mut catalogs.items, arena.item_overrides(), ITEM_ICON_FIELDS, base);
    if overridden > 0 {
        tracing::debug!("{} arena item entries replaced base catalog icons", overridden);
    }

    index_descriptors(&mut catalogs.augments, arena.augments(), AUGMENT_ICON_FIELDS, base);

    catalogs
}

// Returns how many inserts replaced an existing key.
fn index_descriptors(
    catalog: &mut IconCatalog,
    descriptors: &[Value],
    icon_fields: &[&str],
    base: &AssetBase,
) -> usize {
    let mut replaced = 0;
    for descriptor in descriptors {
        let key = normalize(first_string(descriptor, NAME_FIELDS));
        let icon = first_string(descriptor, icon_fields)
            .map(|raw| resolve_path(raw, base))
            .unwrap_or_default();

        if key.is_empty() || icon.is_empty() {
            continue;
        }
        if !catalog.insert(key, icon) {
            replaced += 1;
        }
    }
    replaced
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn base() -> AssetBase {
        AssetBase::new("https://raw.communitydragon.org/latest", "rcp-be-lol-game-data")
    }

    fn arena(value: Value) -> ArenaPayload {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_insert_overwrites_in_place() {
        let mut catalog = IconCatalog::new();
        assert!(catalog.insert("a".into(), "1".into()));
        assert!(catalog.insert("b".into(), "2".into()));
        assert!(!catalog.insert("a".into(), "3".into()));

        let order: Vec<_> = catalog.iter().collect();
        assert_eq!(order, vec![("a", "3"), ("b", "2")]);
        assert_eq!(catalog.get("a"), Some("3"));
        assert_eq!(catalog.len(), 2);
    }

    #[test]
    fn test_build_items_and_augments() {
        let items = vec![
            json!({ "name": "Infinity Edge", "iconPath": "/lol-game-data/assets/ASSETS/Items/Icons2D/3031_Marksman.png" }),
            json!({ "name": "", "iconPath": "/lol-game-data/assets/x.png" }),
            json!({ "name": "No Icon" }),
        ];
        let payload = arena(json!({
            "augments": [
                { "name": "Jeweled Gauntlet", "iconLarge": "assets/ux/cherry/augments/icons/jeweledgauntlet_large.png" },
                { "name": "Typhoon", "iconSmall": "https://cdn.example.com/typhoon.png" }
            ]
        }));

        let catalogs = build_catalogs(&items, &payload, &base());

        assert_eq!(catalogs.items.len(), 1);
        assert!(catalogs
            .items
            .get("infinity edge")
            .unwrap()
            .ends_with("/assets/items/icons2d/3031_marksman.png"));
        assert_eq!(catalogs.augments.len(), 2);
        assert!(catalogs
            .augments
            .get("jeweled gauntlet")
            .unwrap()
            .ends_with("/assets/ux/cherry/augments/icons/jeweledgauntlet_large.png"));
        assert_eq!(catalogs.augments.get("typhoon"), Some("https://cdn.example.com/typhoon.png"));
    }

    #[test]
    fn test_arena_overrides_win_over_base_items() {
        let items = vec![json!({ "name": "Guardian Angel", "iconPath": "/lol-game-data/assets/Items/base.png" })];
        let payload = arena(json!({
            "Items": [{ "Name": "Guardian-Angel", "Icon": "Items/Arena/ga.png" }],
            "augments": []
        }));

        let catalogs = build_catalogs(&items, &payload, &base());

        assert_eq!(catalogs.items.len(), 1);
        assert!(catalogs.items.get("guardian angel").unwrap().ends_with("/items/arena/ga.png"));
    }

    #[test]
    fn test_legacy_arena_array_is_augment_list() {
        let payload = arena(json!([{ "name": "Back To Basics", "iconPath": "/x/assets/b2b.png" }]));
        let catalogs = build_catalogs(&[], &payload, &base());
        assert!(catalogs.items.is_empty());
        assert_eq!(catalogs.augments.len(), 1);
        assert!(!catalogs.is_empty());
    }

    #[test]
    fn test_empty_payloads_build_empty_catalogs() {
        let catalogs = build_catalogs(&[], &arena(json!({})), &base());
        assert!(catalogs.is_empty());
        assert!(Catalogs::empty().is_empty());
    }

    #[test]
    fn test_augment_icon_field_priority() {
        let payload = arena(json!({
            "data": [{ "name": "Dual Wield", "iconSmall": "small.png", "iconLarge": "large.png" }]
        }));
        let catalogs = build_catalogs(&[], &payload, &base());
        assert!(catalogs.augments.get("dual wield").unwrap().ends_with("/large.png"));
    }
}
