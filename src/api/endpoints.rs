// CommunityDragon hosts both catalogs and the icon files they reference.
use crate::icons::path::AssetBase;

pub const DEFAULT_ASSET_ROOT: &str = "https://raw.communitydragon.org/latest";
pub const DEFAULT_GAME_DATA_PLUGIN: &str = "rcp-be-lol-game-data";

pub const USER_AGENT: &str = "arena_lens/0.1.0";

pub fn items_url(base: &AssetBase) -> String {
    format!(
        "{}/plugins/{}/global/default/v1/items.json",
        base.root(),
        base.plugin()
    )
}

pub fn arena_url(base: &AssetBase) -> String {
    format!("{}/cdragon/arena/en_us.json", base.root())
}
