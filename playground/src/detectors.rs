//! Detector selected by the `i18n.detector` setting

use std::path::PathBuf;

use async_trait::async_trait;
use lingo_core::I18n;
use lingo_web::{
    DetectLocale, RequestHead,
    utils::{
        CookieOptions, HeaderOptions, PathOptions, QueryOptions, get_cookie_locale,
        get_header_locale, get_path_locale, get_query_locale,
    },
};
use tower::BoxError;

use crate::catalogs::load_catalog;
use crate::config::DetectorKind;

/// Reads the locale from the configured request source and loads its
/// catalog from disk the first time it is seen. A locale without a catalog
/// resolves to the default locale.
#[derive(Debug, Clone)]
pub struct CatalogDetector {
    kind: DetectorKind,
    default_locale: String,
    locales_dir: PathBuf,
}

impl CatalogDetector {
    pub fn new(kind: DetectorKind, default_locale: impl Into<String>, locales_dir: PathBuf) -> Self {
        Self { kind, default_locale: default_locale.into(), locales_dir }
    }

    fn locale_of(&self, request: &RequestHead) -> Result<String, BoxError> {
        let lang = self.default_locale.clone();
        let locale = match self.kind {
            DetectorKind::Header => {
                get_header_locale(request.headers(), &HeaderOptions { lang, ..Default::default() })?
            },
            DetectorKind::Query => {
                get_query_locale(request.uri(), &QueryOptions { lang, ..Default::default() })?
            },
            DetectorKind::Cookie => {
                get_cookie_locale(request.headers(), &CookieOptions { lang, ..Default::default() })?
            },
            DetectorKind::Path => {
                get_path_locale(request.uri(), &PathOptions { lang, ..Default::default() })?
            },
            DetectorKind::Static => return Ok(lang),
        };
        Ok(locale.to_string())
    }
}

#[async_trait]
impl DetectLocale for CatalogDetector {
    async fn detect(&self, request: &RequestHead, i18n: &I18n) -> Result<String, BoxError> {
        let locale = self.locale_of(request)?;

        if i18n.has_messages(&locale) {
            return Ok(locale);
        }

        match load_catalog(&self.locales_dir, &locale).await? {
            Some(catalog) => {
                tracing::info!("Lazy loaded {} catalog", locale);
                i18n.set_messages(locale.clone(), catalog);
                Ok(locale)
            },
            None => {
                tracing::debug!(
                    "No catalog for {} in {}, using {}",
                    locale,
                    self.locales_dir.display(),
                    self.default_locale
                );
                Ok(self.default_locale.clone())
            },
        }
    }

    fn kind(&self) -> &'static str {
        self.kind.as_str()
    }
}
