//! Translation accessor

use axum::http::Extensions;
use lingo_core::{I18n, TranslateArgs};
use unic_langid::LanguageIdentifier;

use crate::error::I18nError;
use crate::middleware::I18nContext;

/// Translation function bound to the locale detected for one request
#[derive(Debug, Clone)]
pub struct Translator {
    i18n: I18n,
    locale: String,
}

impl Translator {
    pub fn new(i18n: I18n, locale: impl Into<String>) -> Self {
        Self { i18n, locale: locale.into() }
    }

    pub fn locale(&self) -> &str {
        &self.locale
    }

    pub fn i18n(&self) -> &I18n {
        &self.i18n
    }

    /// Translate a key without arguments
    pub fn t(&self, key: &str) -> String {
        self.translate(key, TranslateArgs::default())
    }

    /// Translate a key; a key missing from every catalog is returned as is.
    ///
    /// `args` accepts a plural count, a default message, a list, a named
    /// map or a full [`TranslateArgs`]. An explicit `locale` in the
    /// arguments overrides the detected one.
    pub fn translate(&self, key: &str, args: impl Into<TranslateArgs>) -> String {
        let mut args = args.into();
        if args.locale.is_none() {
            args.locale = Some(self.locale.clone());
        }
        self.i18n.translate(key, args).unwrap_or_else(|| key.to_string())
    }
}

fn context(extensions: &Extensions) -> Result<&I18nContext, I18nError> {
    extensions.get::<I18nContext>().ok_or(I18nError::NotInitialized)
}

/// Translator for the request owning `extensions`.
///
/// Fails with [`I18nError::NotInitialized`] when the i18n middleware did not
/// run for this request.
pub async fn use_translation(extensions: &Extensions) -> Result<Translator, I18nError> {
    context(extensions)?.translator().await
}

/// Locale the detector resolves for the request owning `extensions`
pub async fn get_detector_locale(extensions: &Extensions) -> Result<LanguageIdentifier, I18nError> {
    context(extensions)?.detected_locale().await
}
