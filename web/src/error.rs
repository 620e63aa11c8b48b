use axum::{
    Json,
    http::{StatusCode, header::InvalidHeaderValue},
    response::{IntoResponse, Response},
};
use lingo_core::CoreError;
use rust_i18n::t;
use serde::Serialize;
use thiserror::Error;
use tower::BoxError;
use unic_langid::LanguageIdentifierError;

use crate::adapters::scope;
use crate::utils::{HeaderOptions, get_header_language};

/// Error raised by the i18n middleware, its accessors and utilities
#[derive(Error, Debug)]
pub enum I18nError {
    // Middleware errors 1xxx
    #[error(
        "middleware not initialized, please install the layer obtained with `define_i18n_middleware`"
    )]
    NotInitialized,

    // Detection errors 2xxx
    #[error("Locale detection failed: {0}")]
    Detection(#[source] BoxError),

    // Locale errors 3xxx
    #[error("Invalid locale tag '{tag}': {source}")]
    InvalidLocale {
        tag: String,
        #[source]
        source: LanguageIdentifierError,
    },

    // Header errors 4xxx
    #[error("Invalid header value: {0}")]
    InvalidHeader(#[from] InvalidHeaderValue),

    // Core errors 5xxx
    #[error(transparent)]
    Core(#[from] CoreError),
}

impl I18nError {
    /// Helper to create invalid locale error
    pub fn invalid_locale(tag: impl Into<String>, source: LanguageIdentifierError) -> Self {
        Self::InvalidLocale { tag: tag.into(), source }
    }

    /// Error returned by the locale detector, unchanged
    pub fn detection_source(&self) -> Option<&(dyn std::error::Error + Send + Sync + 'static)> {
        match self {
            Self::Detection(err) => Some(err.as_ref()),
            _ => None,
        }
    }

    pub fn error_code(&self) -> i32 {
        match self {
            Self::NotInitialized => 1001,
            Self::Detection(_) => 2001,
            Self::InvalidLocale { .. } => 3001,
            Self::InvalidHeader(_) => 4001,
            Self::Core(_) => 5001,
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidLocale { .. } => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get localized error message for the given locale
    pub fn localized_message(&self, locale: &str) -> String {
        match self {
            Self::NotInitialized => t!("error.not_initialized", locale = locale).to_string(),
            Self::Detection(err) => {
                t!("error.detection_failed", locale = locale, reason = err.to_string()).to_string()
            },
            Self::InvalidLocale { tag, .. } => {
                t!("error.invalid_locale", locale = locale, tag = tag).to_string()
            },
            Self::InvalidHeader(err) => {
                t!("error.invalid_header", locale = locale, reason = err.to_string()).to_string()
            },
            Self::Core(err) => {
                t!("error.core", locale = locale, message = err.to_string()).to_string()
            },
        }
    }
}

/// Error body rendered for handlers and extractor rejections
#[derive(Debug, Serialize)]
pub struct I18nErrorResponse {
    pub code: i32,
    pub message: String,
}

impl IntoResponse for I18nError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let response = I18nErrorResponse {
            code: self.error_code(),
            message: self.localized_message(&response_locale()),
        };

        (status, Json(response)).into_response()
    }
}

/// Primary language of the request being served, used for error messages
fn response_locale() -> String {
    scope::current()
        .map(|context| get_header_language(context.request().headers(), &HeaderOptions::default()))
        .and_then(|language| {
            language
                .split(['-', '_'])
                .next()
                .filter(|primary| !primary.is_empty())
                .map(str::to_lowercase)
        })
        .unwrap_or_else(|| "en".to_string())
}

pub type I18nResult<T> = Result<T, I18nError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes_and_status() {
        assert_eq!(I18nError::NotInitialized.error_code(), 1001);
        assert_eq!(I18nError::NotInitialized.status_code(), StatusCode::INTERNAL_SERVER_ERROR);

        let err = "@@".parse::<unic_langid::LanguageIdentifier>().unwrap_err();
        let err = I18nError::invalid_locale("@@", err);
        assert_eq!(err.error_code(), 3001);
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_localized_message() {
        let err = I18nError::Detection("boom".into());
        assert_eq!(err.localized_message("en"), "Locale detection failed: boom");
        assert_eq!(err.localized_message("ja"), "ロケールの検出に失敗しました: boom");
        // unsupported locales use the english messages
        assert_eq!(err.localized_message("fr"), "Locale detection failed: boom");
        assert_eq!(err.detection_source().map(ToString::to_string), Some("boom".to_string()));
    }
}
