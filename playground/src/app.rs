use std::path::Path;

use lingo_web::{I18nMiddleware, I18nOptions, LocaleSource, define_i18n_middleware};

use crate::catalogs::{builtin_messages, load_catalog, load_catalogs};
use crate::config::{DetectorKind, I18nConfig};
use crate::detectors::CatalogDetector;

/// Build the i18n middleware described by the `[i18n]` section
pub async fn build_middleware(config: &I18nConfig) -> anyhow::Result<I18nMiddleware> {
    let dir = Path::new(&config.locales_dir);
    let mut options = I18nOptions::new()
        .missing_warn(config.missing_warn)
        .escape_parameter(config.escape_parameter);
    options.core.locale = config.default_locale.clone();

    if !dir.is_dir() {
        tracing::warn!("Locales directory {} not found, using built-in messages", dir.display());
        options = options.schema(builtin_messages())?;
    } else if config.lazy_load && config.detector != DetectorKind::Static {
        if let Some(catalog) = load_catalog(dir, &config.default_locale).await? {
            options = options.message(config.default_locale.clone(), catalog);
        }
    } else {
        options = options.messages(load_catalogs(dir).await?);
    }

    let options = match config.detector {
        DetectorKind::Static => options.locale(config.default_locale.clone()),
        kind => options.locale(LocaleSource::detector(CatalogDetector::new(
            kind,
            config.default_locale.clone(),
            dir.to_path_buf(),
        ))),
    };

    Ok(define_i18n_middleware(options))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::router;
    use axum::{body::Body, http::Request};
    use tower::ServiceExt;

    async fn get(middleware: I18nMiddleware, uri: &str) -> String {
        let req = Request::builder().uri(uri).body(Body::empty()).unwrap();
        let response = router(middleware).oneshot(req).await.unwrap();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    fn config(detector: DetectorKind, lazy_load: bool) -> I18nConfig {
        I18nConfig {
            detector,
            lazy_load,
            locales_dir: concat!(env!("CARGO_MANIFEST_DIR"), "/locales").to_string(),
            ..I18nConfig::default()
        }
    }

    #[tokio::test]
    async fn test_lazy_load_starts_with_default_locale() {
        let middleware = build_middleware(&config(DetectorKind::Query, true)).await.unwrap();
        assert_eq!(middleware.i18n().available_locales(), vec!["en"]);
        assert_eq!(middleware.i18n().locale(), "en");
    }

    #[tokio::test]
    async fn test_eager_load() {
        let middleware = build_middleware(&config(DetectorKind::Header, false)).await.unwrap();
        assert_eq!(middleware.i18n().available_locales(), vec!["en", "ja", "zh"]);
    }

    #[tokio::test]
    async fn test_static_locale() {
        let mut config = config(DetectorKind::Static, true);
        config.default_locale = "ja".to_string();
        let middleware = build_middleware(&config).await.unwrap();
        assert_eq!(middleware.i18n().locale(), "ja");
        assert_eq!(middleware.i18n().available_locales().len(), 3);
    }

    #[tokio::test]
    async fn test_missing_directory_uses_builtin_messages() {
        let mut config = config(DetectorKind::Header, true);
        config.locales_dir = "does/not/exist".to_string();
        let middleware = build_middleware(&config).await.unwrap();
        assert_eq!(middleware.i18n().available_locales(), vec!["en", "ja"]);
    }

    #[tokio::test]
    async fn test_header_without_accept_language_uses_default_locale() {
        for lazy_load in [false, true] {
            let middleware = build_middleware(&config(DetectorKind::Header, lazy_load)).await.unwrap();
            assert_eq!(get(middleware, "/").await, "hello, lingo");
        }
    }

    #[tokio::test]
    async fn test_path_detector_on_plain_routes() {
        let middleware = build_middleware(&config(DetectorKind::Path, true)).await.unwrap();
        assert_eq!(get(middleware.clone(), "/apples?count=3").await, "3 apples");
        assert_eq!(get(middleware, "/ja/hello").await, "こんにちは, lingo");
    }
}
