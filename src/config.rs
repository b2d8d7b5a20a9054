use crate::api::endpoints;
use crate::error::AppError;
use crate::icons::path::AssetBase;
use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub asset_base: AssetBase,
    pub items_url: String,
    pub arena_url: String,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any key lookup; `from_env` feeds it the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let root = read_var(&lookup, "ARENA_ASSET_BASE", endpoints::DEFAULT_ASSET_ROOT)?;
        let plugin = read_var(&lookup, "ARENA_GAME_DATA_PLUGIN", endpoints::DEFAULT_GAME_DATA_PLUGIN)?;
        let asset_base = AssetBase::new(&root, &plugin);

        let items_url = match lookup("ARENA_ITEMS_URL") {
            Some(url) => non_empty("ARENA_ITEMS_URL", url)?,
            None => endpoints::items_url(&asset_base),
        };
        let arena_url = match lookup("ARENA_CATALOG_URL") {
            Some(url) => non_empty("ARENA_CATALOG_URL", url)?,
            None => endpoints::arena_url(&asset_base),
        };

        Ok(Config {
            asset_base,
            items_url,
            arena_url,
        })
    }
}

fn read_var<F>(lookup: &F, key: &str, default: &str) -> Result<String, AppError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(value) => non_empty(key, value),
        None => Ok(default.to_string()),
    }
}

fn non_empty(key: &str, value: String) -> Result<String, AppError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(AppError::ConfigError(format!("{} is set but empty", key)));
    }
    Ok(trimmed.to_string())
}
