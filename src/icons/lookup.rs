use crate::icons::catalog::IconCatalog;
use crate::icons::normalize::{flatten, normalize};

/// Resolves an item display name to its icon URL.
///
/// Tiers, first hit wins: exact normalized key, then flattened equality,
/// then flattened containment in either direction. Fuzzy tiers walk the
/// catalog in insertion order.
pub fn lookup_item_icon<'a>(display_name: &str, catalog: &'a IconCatalog) -> Option<&'a str> {
    let key = normalize(Some(display_name));
    if key.is_empty() {
        return None;
    }
    if let Some(url) = catalog.get(&key) {
        return Some(url);
    }

    let query = flatten(display_name);
    if query.is_empty() {
        return None;
    }

    let flattened: Vec<(String, &str)> = catalog.iter().map(|(k, url)| (flatten(k), url)).collect();

    flattened
        .iter()
        .find(|(k, _)| *k == query)
        .or_else(|| {
            flattened
                .iter()
                .find(|(k, _)| !k.is_empty() && (k.contains(&query) || query.contains(k.as_str())))
        })
        .map(|(_, url)| *url)
}

/// Resolves an augment display name: exact key, then containment on
/// normalized keys.
pub fn lookup_augment_icon<'a>(display_name: &str, catalog: &'a IconCatalog) -> Option<&'a str> {
    let key = normalize(Some(display_name));
    if key.is_empty() {
        return None;
    }
    if let Some(url) = catalog.get(&key) {
        return Some(url);
    }

    catalog
        .iter()
        .find(|(k, _)| k.contains(key.as_str()) || key.contains(*k))
        .map(|(_, url)| url)
}

/// Stand-in shown when no icon resolves: the name's first letter.
pub fn placeholder_glyph(display_name: &str) -> String {
    let initial = display_name
        .trim()
        .chars()
        .next()
        .map(|c| c.to_uppercase().collect::<String>())
        .unwrap_or_else(|| "?".to_string());
    format!("[{}]", initial)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog(entries: &[(&str, &str)]) -> IconCatalog {
        let mut catalog = IconCatalog::new();
        for (key, url) in entries {
            catalog.insert(key.to_string(), url.to_string());
        }
        catalog
    }

    #[test]
    fn test_exact_tier() {
        let items = catalog(&[("cruelty", "https://x/cruelty.png"), ("cruel", "https://x/cruel.png")]);
        assert_eq!(lookup_item_icon("Cruelty", &items), Some("https://x/cruelty.png"));
    }

    #[test]
    fn test_exact_tier_beats_earlier_fuzzy_candidate() {
        let items = catalog(&[("cruelty extra", "https://x/first.png"), ("cruelty", "https://x/exact.png")]);
        assert_eq!(lookup_item_icon("Cruelty", &items), Some("https://x/exact.png"));
    }

    #[test]
    fn test_flattened_tier_ignores_punctuation() {
        let items = catalog(&[("prowlers claw", "https://x/prowler.png")]);
        assert_eq!(lookup_item_icon("Prowler's Claw", &items), Some("https://x/prowler.png"));
    }

    #[test]
    fn test_strict_flattened_beats_substring() {
        let items = catalog(&[
            ("hextech gunblade upgraded", "https://x/long.png"),
            ("hex tech gunblade", "https://x/flat.png"),
        ]);
        assert_eq!(lookup_item_icon("Hextech Gunblade", &items), Some("https://x/flat.png"));
    }

    #[test]
    fn test_substring_tier_first_in_insertion_order() {
        let items = catalog(&[
            ("zhonya s hourglass", "https://x/z1.png"),
            ("zhonya s paradox hourglass", "https://x/z2.png"),
        ]);
        assert_eq!(lookup_item_icon("Zhonya", &items), Some("https://x/z1.png"));
        assert_eq!(lookup_item_icon("Zhonya's Hourglass (Arena)", &items), Some("https://x/z1.png"));
    }

    #[test]
    fn test_no_match() {
        let items = catalog(&[("sunfire aegis", "https://x/s.png")]);
        assert_eq!(lookup_item_icon("Rabadon", &items), None);
        assert_eq!(lookup_item_icon("", &items), None);
        assert_eq!(lookup_item_icon("!!", &items), None);
        assert_eq!(lookup_item_icon("Anything", &IconCatalog::new()), None);
    }

    #[test]
    fn test_augment_lookup() {
        let augments = catalog(&[
            ("jeweled gauntlet", "https://x/jg.png"),
            ("blade waltz", "https://x/bw.png"),
        ]);
        assert_eq!(lookup_augment_icon("Jeweled Gauntlet", &augments), Some("https://x/jg.png"));
        assert_eq!(lookup_augment_icon("Blade", &augments), Some("https://x/bw.png"));
        assert_eq!(lookup_augment_icon("Blade Waltz (Prismatic)", &augments), Some("https://x/bw.png"));
        // Containment is on spaced keys, not flattened ones.
        assert_eq!(lookup_augment_icon("bladewaltz", &augments), None);
    }

    #[test]
    fn test_placeholder_glyph() {
        assert_eq!(placeholder_glyph("prowler's claw"), "[P]");
        assert_eq!(placeholder_glyph("  "), "[?]");
    }
}
