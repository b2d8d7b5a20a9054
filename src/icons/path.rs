const ASSETS_SEGMENT: &str = "/assets/";
const GAME_DATA_SEGMENT: &str = "/lol-game-data/";
const ASSETS_PREFIX: &str = "assets/";

/// Root of the static asset host plus the game-data plugin name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetBase {
    root: String,
    plugin: String,
}

impl AssetBase {
    pub fn new(root: &str, plugin: &str) -> Self {
        AssetBase {
            root: root.trim_end_matches('/').to_string(),
            plugin: plugin.trim_matches('/').to_string(),
        }
    }

    pub fn root(&self) -> &str {
        &self.root
    }

    pub fn plugin(&self) -> &str {
        &self.plugin
    }

    /// `<root>/plugins/<plugin>/global/default/assets/`
    pub fn assets_root(&self) -> String {
        format!("{}/plugins/{}/global/default/assets/", self.root, self.plugin)
    }

    fn join(&self, tail: &str) -> String {
        format!("{}{}", self.assets_root(), tail.to_lowercase())
    }
}

/// Rewrites an icon reference from either catalog into an absolute URL.
///
/// Accepts absolute URLs, paths with an `/assets/` segment anywhere, paths
/// under `/lol-game-data/`, and bare relative paths. Never fails: the result
/// may point at a missing file, and an empty input yields an empty string.
pub fn resolve_path(raw: &str, base: &AssetBase) -> String {
    let raw = raw.trim();
    if raw.is_empty() {
        return String::new();
    }

    let path = strip_query(raw).replace('\\', "/");
    // ASCII lowercasing keeps byte offsets aligned with `path`.
    let lower = path.to_ascii_lowercase();

    if lower.starts_with("http://") || lower.starts_with("https://") {
        return path;
    }

    if let Some(idx) = lower.rfind(ASSETS_SEGMENT) {
        return base.join(&path[idx + ASSETS_SEGMENT.len()..]);
    }

    if let Some(idx) = lower.find(GAME_DATA_SEGMENT) {
        let start = idx + GAME_DATA_SEGMENT.len();
        let remainder = &path[start..];
        let tail = match lower[start..].rfind(ASSETS_SEGMENT) {
            Some(inner) => &remainder[inner + ASSETS_SEGMENT.len()..],
            None => remainder,
        };
        return base.join(strip_assets_prefix(tail));
    }

    let relative = path.trim_start_matches('/');
    base.join(strip_assets_prefix(relative))
}

fn strip_query(path: &str) -> &str {
    match path.find(['?', '#']) {
        Some(idx) => &path[..idx],
        None => path,
    }
}

fn strip_assets_prefix(path: &str) -> &str {
    match path.get(..ASSETS_PREFIX.len()) {
        Some(head) if head.eq_ignore_ascii_case(ASSETS_PREFIX) => &path[ASSETS_PREFIX.len()..],
        _ => path,
    }
}
