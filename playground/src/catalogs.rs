//! Catalog loading from a locales directory

use std::collections::HashMap;
use std::path::Path;

use lingo_core::{Catalog, Messages};
use serde::Serialize;

/// Message schema of the built-in catalogs
#[derive(Debug, Clone, Serialize)]
pub struct ResourceSchema {
    pub hello: String,
    pub apples: String,
}

/// Catalogs used when the locales directory does not exist
pub fn builtin_messages() -> Messages<ResourceSchema> {
    Messages::new()
        .locale(
            "en",
            ResourceSchema {
                hello: "hello, {name}".to_string(),
                apples: "no apples | one apple | {count} apples".to_string(),
            },
        )
        .locale(
            "ja",
            ResourceSchema {
                hello: "こんにちは, {name}".to_string(),
                apples: "りんごがありません | りんご1個 | りんご{count}個".to_string(),
            },
        )
}

/// Locale tags are used as file names, anything else is refused
fn is_locale_file_name(locale: &str) -> bool {
    !locale.is_empty() && locale.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
}

/// Load `<dir>/<locale>.json`; `None` when there is no such catalog
pub async fn load_catalog(dir: &Path, locale: &str) -> anyhow::Result<Option<Catalog>> {
    if !is_locale_file_name(locale) {
        return Ok(None);
    }

    let path = dir.join(format!("{}.json", locale));
    if !tokio::fs::try_exists(&path).await? {
        return Ok(None);
    }

    let content = tokio::fs::read_to_string(&path).await?;
    let catalog = Catalog::from_json(locale, &content)?;
    tracing::debug!("Loaded {} messages for {} from {}", catalog.len(), locale, path.display());
    Ok(Some(catalog))
}

/// Load every `*.json` catalog of `dir`
pub async fn load_catalogs(dir: &Path) -> anyhow::Result<HashMap<String, Catalog>> {
    let mut catalogs = HashMap::new();
    let mut entries = tokio::fs::read_dir(dir).await?;

    while let Some(entry) = entries.next_entry().await? {
        let path = entry.path();
        if path.extension().and_then(|ext| ext.to_str()) != Some("json") {
            continue;
        }
        let Some(locale) = path.file_stem().and_then(|stem| stem.to_str()) else {
            continue;
        };
        if let Some(catalog) = load_catalog(dir, locale).await? {
            catalogs.insert(locale.to_string(), catalog);
        }
    }

    Ok(catalogs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn locales_dir() -> PathBuf {
        Path::new(env!("CARGO_MANIFEST_DIR")).join("locales")
    }

    #[tokio::test]
    async fn test_load_catalog() {
        let catalog = load_catalog(&locales_dir(), "ja").await.unwrap().unwrap();
        assert_eq!(catalog.resolve("hello"), Some("こんにちは, {name}"));
        assert_eq!(catalog.resolve("locale.current"), Some("現在のロケールは {0} です"));

        assert!(load_catalog(&locales_dir(), "fr").await.unwrap().is_none());
        assert!(load_catalog(&locales_dir(), "../Cargo").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_load_catalogs() {
        let catalogs = load_catalogs(&locales_dir()).await.unwrap();
        let mut locales: Vec<&str> = catalogs.keys().map(String::as_str).collect();
        locales.sort();
        assert_eq!(locales, vec!["en", "ja", "zh"]);
    }

    #[test]
    fn test_builtin_messages() {
        let catalogs = builtin_messages().into_catalogs().unwrap();
        assert_eq!(catalogs["en"].resolve("hello"), Some("hello, {name}"));
        assert_eq!(catalogs["ja"].len(), 2);
    }
}
