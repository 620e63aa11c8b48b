//! Per-request locale detection and translation for axum and tower services
//!
//! [`define_i18n_middleware`] builds one [`I18nMiddleware`] per application.
//! Install it with one of the adapters:
//!
//! * [`i18n_middleware`] for `axum::middleware::from_fn_with_state`, read
//!   with the [`Translation`] and [`DetectedLocale`] extractors,
//! * [`I18nMiddleware::layer`] for any tower service, read with
//!   [`use_translation`] on the request extensions,
//! * [`I18nMiddleware::scope`] around a future, read with
//!   [`scope::use_translation`].
//!
//! Handlers served through the first two adapters can also use the
//! task-local accessors in [`scope`].

rust_i18n::i18n!("locales", fallback = "en");

pub mod adapters;
pub mod detector;
pub mod error;
pub mod middleware;
pub mod request;
pub mod translation;
pub mod utils;

pub use adapters::axum::{DetectedLocale, Translation, i18n_middleware};
pub use adapters::scope;
pub use adapters::tower::{I18nLayer, I18nService};
pub use detector::{
    AcceptLanguageDetector, BoundDetector, DetectLocale, LocaleSource,
    detect_locale_from_accept_language_header,
};
pub use error::{I18nError, I18nErrorResponse, I18nResult};
pub use middleware::{I18nContext, I18nMiddleware, I18nOptions, define_i18n_middleware};
pub use request::RequestHead;
pub use translation::{Translator, get_detector_locale, use_translation};

pub use lingo_core::{Catalog, CoreOptions, DefaultMessage, I18n, Messages, TranslateArgs};

#[cfg(test)]
mod tests;
