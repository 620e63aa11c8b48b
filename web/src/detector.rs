//! Locale detectors
//!
//! The `locale` option of the middleware is a [`LocaleSource`]: either a
//! static locale or a detector. It is resolved once, when the middleware is
//! built, into an `Arc<dyn DetectLocale>`; each request then gets that
//! detector bound to its [`RequestHead`] as a [`BoundDetector`].

use std::fmt;
use std::future::Future;
use std::sync::Arc;

use async_trait::async_trait;
use lingo_core::I18n;
use tower::BoxError;

use crate::error::I18nError;
use crate::request::RequestHead;
use crate::utils::{HeaderOptions, get_header_locale};

/// Determines the locale of one request.
///
/// Implementations may suspend, e.g. to load the catalog of the detected
/// locale into `i18n` before returning it.
#[async_trait]
pub trait DetectLocale: Send + Sync + 'static {
    async fn detect(&self, request: &RequestHead, i18n: &I18n) -> Result<String, BoxError>;

    /// Short name used in logs
    fn kind(&self) -> &'static str {
        "custom"
    }
}

/// Locale of the first tag listed in `Accept-Language`
pub fn detect_locale_from_accept_language_header(
    request: &RequestHead,
) -> Result<String, I18nError> {
    get_header_locale(request.headers(), &HeaderOptions::default()).map(|locale| locale.to_string())
}

/// Default detector when no `locale` option is configured
#[derive(Debug, Clone, Copy, Default)]
pub struct AcceptLanguageDetector;

#[async_trait]
impl DetectLocale for AcceptLanguageDetector {
    async fn detect(&self, request: &RequestHead, _i18n: &I18n) -> Result<String, BoxError> {
        Ok(detect_locale_from_accept_language_header(request)?)
    }

    fn kind(&self) -> &'static str {
        "accept-language"
    }
}

#[derive(Debug, Clone)]
pub struct StaticDetector(String);

#[async_trait]
impl DetectLocale for StaticDetector {
    async fn detect(&self, _request: &RequestHead, _i18n: &I18n) -> Result<String, BoxError> {
        Ok(self.0.clone())
    }

    fn kind(&self) -> &'static str {
        "static"
    }
}

/// Synchronous detector closure
pub struct FnDetector<F>(F);

#[async_trait]
impl<F> DetectLocale for FnDetector<F>
where
    F: Fn(&RequestHead, &I18n) -> Result<String, BoxError> + Send + Sync + 'static,
{
    async fn detect(&self, request: &RequestHead, i18n: &I18n) -> Result<String, BoxError> {
        (self.0)(request, i18n)
    }
}

/// Asynchronous detector closure; receives owned handles so the returned
/// future can be `'static`.
pub struct AsyncFnDetector<F>(F);

#[async_trait]
impl<F, Fut> DetectLocale for AsyncFnDetector<F>
where
    F: Fn(RequestHead, I18n) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<String, BoxError>> + Send + 'static,
{
    async fn detect(&self, request: &RequestHead, i18n: &I18n) -> Result<String, BoxError> {
        (self.0)(request.clone(), i18n.clone()).await
    }
}

/// The `locale` option: a static locale or a per-request detector
#[derive(Clone)]
pub enum LocaleSource {
    Static(String),
    Detector(Arc<dyn DetectLocale>),
}

impl LocaleSource {
    pub fn from_fn<F>(detect: F) -> Self
    where
        F: Fn(&RequestHead, &I18n) -> Result<String, BoxError> + Send + Sync + 'static,
    {
        Self::Detector(Arc::new(FnDetector(detect)))
    }

    pub fn from_async<F, Fut>(detect: F) -> Self
    where
        F: Fn(RequestHead, I18n) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<String, BoxError>> + Send + 'static,
    {
        Self::Detector(Arc::new(AsyncFnDetector(detect)))
    }

    pub fn detector<D: DetectLocale>(detector: D) -> Self {
        Self::Detector(Arc::new(detector))
    }
}

impl From<&str> for LocaleSource {
    fn from(locale: &str) -> Self {
        Self::Static(locale.to_string())
    }
}

impl From<String> for LocaleSource {
    fn from(locale: String) -> Self {
        Self::Static(locale)
    }
}

impl fmt::Debug for LocaleSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Static(locale) => f.debug_tuple("Static").field(locale).finish(),
            Self::Detector(detector) => f.debug_tuple("Detector").field(&detector.kind()).finish(),
        }
    }
}

/// Resolve the configured source into the detector used for every request
pub(crate) fn resolve_detector(source: Option<LocaleSource>) -> Arc<dyn DetectLocale> {
    match source {
        Some(LocaleSource::Static(locale)) => {
            tracing::warn!(
                "'locale' option is static {} locale! you should specify dynamic locale detector",
                locale
            );
            Arc::new(StaticDetector(locale))
        },
        Some(LocaleSource::Detector(detector)) => detector,
        None => Arc::new(AcceptLanguageDetector),
    }
}

/// A detector bound to one request
#[derive(Clone)]
pub struct BoundDetector {
    detector: Arc<dyn DetectLocale>,
    request: Arc<RequestHead>,
}

impl BoundDetector {
    pub(crate) fn new(detector: Arc<dyn DetectLocale>, request: RequestHead) -> Self {
        Self { detector, request: Arc::new(request) }
    }

    pub fn request(&self) -> &RequestHead {
        &self.request
    }

    pub fn kind(&self) -> &'static str {
        self.detector.kind()
    }

    /// Run the detector; sync and async detectors are both awaited here
    pub async fn detect(&self, i18n: &I18n) -> Result<String, I18nError> {
        self.detector.detect(&self.request, i18n).await.map_err(I18nError::Detection)
    }
}

impl fmt::Debug for BoundDetector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoundDetector")
            .field("kind", &self.detector.kind())
            .field("method", self.request.method())
            .field("uri", self.request.uri())
            .finish()
    }
}
