use crate::config::Config;
use crate::error::AppError;
use crate::icons::catalog::{build_catalogs, Catalogs};
use serde_json::Value;

use super::endpoints::USER_AGENT;
use super::models::ArenaPayload;

pub struct CatalogClient {
    config: Config,
}

impl CatalogClient {
    pub fn new(config: Config) -> Self {
        CatalogClient { config }
    }

    // Single attempt, no retry: a failed catalog only costs icons.
    fn execute_request(&self, url: &str) -> Result<String, AppError> {
        tracing::debug!("GET {}", url);
        ureq::get(url)
            .set("User-Agent", USER_AGENT)
            .call()
            .map_err(|e| AppError::HttpError(e.to_string()))?
            .into_string()
            .map_err(|e| AppError::HttpError(e.to_string()))
    }

    pub fn get_items(&self) -> Result<Vec<Value>, AppError> {
        let body = self.execute_request(&self.config.items_url)?;
        parse_items(&body)
    }

    pub fn get_arena(&self) -> Result<ArenaPayload, AppError> {
        let body = self.execute_request(&self.config.arena_url)?;
        parse_arena(&body)
    }

    /// Fetches both payloads and indexes them.
    pub fn fetch_catalogs(&self) -> Result<Catalogs, AppError> {
        let items = self.get_items()?;
        let arena = self.get_arena()?;
        Ok(build_catalogs(&items, &arena, &self.config.asset_base))
    }
}

pub fn parse_items(body: &str) -> Result<Vec<Value>, AppError> {
    let value: Value = serde_json::from_str(body).map_err(|e| AppError::JsonError(e.to_string()))?;
    match value {
        Value::Array(items) => Ok(items),
        other => Err(AppError::CatalogShape(format!(
            "items payload should be an array, got {}",
            json_kind(&other)
        ))),
    }
}

pub fn parse_arena(body: &str) -> Result<ArenaPayload, AppError> {
    let value: Value = serde_json::from_str(body).map_err(|e| AppError::JsonError(e.to_string()))?;
    let kind = json_kind(&value);
    serde_json::from_value(value).map_err(|_| {
        AppError::CatalogShape(format!("arena payload should be an object or array, got {}", kind))
    })
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_items() {
        let items = parse_items(r#"[{"id": 1001, "name": "Boots", "iconPath": "/lol-game-data/assets/x.png"}]"#).unwrap();
        assert_eq!(items.len(), 1);

        assert!(matches!(parse_items(r#"{"items": []}"#), Err(AppError::CatalogShape(_))));
        assert!(matches!(parse_items("<html>"), Err(AppError::JsonError(_))));
    }

    #[test]
    fn test_parse_arena_shapes() {
        let modern = parse_arena(r#"{"augments": [{"name": "Typhoon"}]}"#).unwrap();
        assert_eq!(modern.augments().len(), 1);

        let legacy = parse_arena(r#"[{"name": "Typhoon"}, {"name": "Dual Wield"}]"#).unwrap();
        assert_eq!(legacy.augments().len(), 2);

        let err = parse_arena("42").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Unexpected catalog shape: arena payload should be an object or array, got a number"
        );
    }
}
