use serde::Deserialize;
use serde_json::{Map, Value};

// Field candidates, tried in order. The two catalogs are maintained
// independently and do not agree on naming or casing.
pub const NAME_FIELDS: &[&str] = &["name", "Name", "displayName", "DisplayName"];

pub const ITEM_ICON_FIELDS: &[&str] = &["iconPath", "IconPath", "icon", "Icon", "squarePortraitPath"];

pub const AUGMENT_ICON_FIELDS: &[&str] = &[
    "iconLarge",
    "IconLarge",
    "iconSmall",
    "IconSmall",
    "iconPath",
    "IconPath",
    "icon",
    "Icon",
];

pub const ARENA_ITEM_LIST_FIELDS: &[&str] = &["items", "Items"];

pub const AUGMENT_LIST_FIELDS: &[&str] = &["augments", "data"];

/// Arena-mode catalog payload.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ArenaPayload {
    /// Current shape: an object carrying item overrides and augments.
    Modern(Map<String, Value>),
    /// Older shape: the array of augment descriptors itself.
    Legacy(Vec<Value>),
}

impl ArenaPayload {
    pub fn item_overrides(&self) -> &[Value] {
        match self {
            ArenaPayload::Modern(map) => first_array(map, ARENA_ITEM_LIST_FIELDS),
            ArenaPayload::Legacy(_) => &[],
        }
    }

    pub fn augments(&self) -> &[Value] {
        match self {
            ArenaPayload::Modern(map) => first_array(map, AUGMENT_LIST_FIELDS),
            ArenaPayload::Legacy(list) => list,
        }
    }
}

fn first_array<'a>(map: &'a Map<String, Value>, candidates: &[&str]) -> &'a [Value] {
    candidates
        .iter()
        .find_map(|field| map.get(*field).and_then(Value::as_array))
        .map(Vec::as_slice)
        .unwrap_or(&[])
}

/// First candidate field holding a non-empty string.
pub fn first_string<'a>(descriptor: &'a Value, candidates: &[&str]) -> Option<&'a str> {
    let object = descriptor.as_object()?;
    candidates.iter().find_map(|field| {
        object
            .get(*field)
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|s| !s.is_empty())
    })
}
