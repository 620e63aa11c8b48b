//! Middleware installer and the request-scoped binding
//!
//! `I18nMiddleware` owns the one translation context of an application and
//! the resolved locale detector. Every adapter drives the same two hooks:
//! `on_request` produces the request's [`I18nContext`], which the adapter
//! stores for handlers; `on_response` releases it. The shared context is
//! never mutated per request, so concurrent requests cannot observe each
//! other's locale.

use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;

use lingo_core::{Catalog, CoreOptions, I18n, Messages};
use serde::Serialize;
use unic_langid::LanguageIdentifier;

use crate::adapters::{scope, tower::I18nLayer};
use crate::detector::{BoundDetector, DetectLocale, LocaleSource, resolve_detector};
use crate::error::I18nError;
use crate::request::RequestHead;
use crate::translation::Translator;
use crate::utils::to_locale;

/// Options of [`define_i18n_middleware`]
#[derive(Debug, Clone, Default)]
pub struct I18nOptions {
    /// Static locale or detector; `None` detects from `Accept-Language`
    pub locale: Option<LocaleSource>,
    pub core: CoreOptions,
}

impl I18nOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn locale(mut self, locale: impl Into<LocaleSource>) -> Self {
        self.locale = Some(locale.into());
        self
    }

    pub fn message(mut self, locale: impl Into<String>, catalog: Catalog) -> Self {
        self.core = self.core.message(locale, catalog);
        self
    }

    pub fn messages(mut self, messages: HashMap<String, Catalog>) -> Self {
        self.core = self.core.messages(messages);
        self
    }

    /// Add catalogs from a typed message schema
    pub fn schema<S: Serialize>(mut self, messages: Messages<S>) -> Result<Self, I18nError> {
        self.core = self.core.schema(messages)?;
        Ok(self)
    }

    pub fn missing_warn(mut self, enabled: bool) -> Self {
        self.core = self.core.missing_warn(enabled);
        self
    }

    pub fn escape_parameter(mut self, enabled: bool) -> Self {
        self.core = self.core.escape_parameter(enabled);
        self
    }
}

impl From<CoreOptions> for I18nOptions {
    fn from(core: CoreOptions) -> Self {
        Self { locale: None, core }
    }
}

/// The installed i18n middleware, shared by all adapters
#[derive(Clone)]
pub struct I18nMiddleware {
    i18n: I18n,
    detector: Arc<dyn DetectLocale>,
}

impl I18nMiddleware {
    pub fn new(options: impl Into<I18nOptions>) -> Self {
        let I18nOptions { locale, mut core } = options.into();
        if let Some(LocaleSource::Static(locale)) = &locale {
            core.locale = locale.clone();
        }

        let i18n = I18n::new(core);
        let detector = resolve_detector(locale);
        tracing::info!(
            "i18n middleware installed: default locale {}, locales {:?}, {} detector",
            i18n.locale(),
            i18n.available_locales(),
            detector.kind()
        );

        Self { i18n, detector }
    }

    /// Translation context shared by every request
    pub fn i18n(&self) -> &I18n {
        &self.i18n
    }

    /// Request-start hook: bind the detector to this request
    pub fn on_request(&self, request: RequestHead) -> I18nContext {
        tracing::debug!("i18n binding created for {} {}", request.method(), request.uri());
        I18nContext {
            i18n: self.i18n.clone(),
            detector: BoundDetector::new(Arc::clone(&self.detector), request),
        }
    }

    /// Request-end hook: release the binding
    pub fn on_response(&self, context: I18nContext) {
        tracing::debug!(
            "i18n binding released for {} {}",
            context.request().method(),
            context.request().uri()
        );
    }

    /// Tower layer installing this middleware
    pub fn layer(&self) -> I18nLayer {
        I18nLayer::new(self.clone())
    }

    /// Run `future` with this request bound in the task-local scope
    pub async fn scope<F: Future>(&self, request: RequestHead, future: F) -> F::Output {
        let context = self.on_request(request);
        let output = scope::run(context.clone(), future).await;
        self.on_response(context);
        output
    }
}

impl std::fmt::Debug for I18nMiddleware {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("I18nMiddleware")
            .field("i18n", &self.i18n)
            .field("detector", &self.detector.kind())
            .finish()
    }
}

/// Build the i18n middleware
///
/// ```
/// use axum::{Router, middleware::from_fn_with_state, routing::get};
/// use lingo_web::{I18nOptions, Translation, define_i18n_middleware, i18n_middleware};
/// use lingo_core::Catalog;
/// use serde_json::json;
///
/// let middleware = define_i18n_middleware(
///     I18nOptions::new()
///         .message("en", Catalog::from_value("en", json!({ "hello": "Hello {name}!" })).unwrap())
///         .message("ja", Catalog::from_value("ja", json!({ "hello": "こんにちは、{name}！" })).unwrap()),
/// );
///
/// let app: Router = Router::new()
///     .route("/", get(|t: Translation| async move { t.translate("hello", [("name", "axum")]) }))
///     .layer(from_fn_with_state(middleware, i18n_middleware));
/// ```
pub fn define_i18n_middleware(options: impl Into<I18nOptions>) -> I18nMiddleware {
    I18nMiddleware::new(options)
}

/// Request-scoped binding of the translation context and the bound detector
#[derive(Debug, Clone)]
pub struct I18nContext {
    i18n: I18n,
    detector: BoundDetector,
}

impl I18nContext {
    pub fn i18n(&self) -> &I18n {
        &self.i18n
    }

    pub fn request(&self) -> &RequestHead {
        self.detector.request()
    }

    /// Run the bound detector
    pub async fn locale(&self) -> Result<String, I18nError> {
        self.detector.detect(&self.i18n).await
    }

    /// Detect the locale and return a translator bound to it
    pub async fn translator(&self) -> Result<Translator, I18nError> {
        let locale = self.locale().await?;
        tracing::debug!("Detected locale {} for {}", locale, self.request().uri());
        Ok(Translator::new(self.i18n.clone(), locale))
    }

    /// Detected locale as a parsed language identifier
    pub async fn detected_locale(&self) -> Result<LanguageIdentifier, I18nError> {
        to_locale(&self.locale().await?)
    }
}
