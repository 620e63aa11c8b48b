//! axum adapter
//!
//! Install with `axum::middleware::from_fn_with_state(middleware, i18n_middleware)`.
//! The binding is stored in the request extensions and read back by the
//! [`Translation`] and [`DetectedLocale`] extractors.

use std::ops::Deref;

use axum::{
    async_trait,
    extract::{FromRequestParts, Request, State},
    http::request::Parts,
    middleware::Next,
    response::Response,
};
use unic_langid::LanguageIdentifier;

use super::scope;
use crate::error::I18nError;
use crate::middleware::{I18nContext, I18nMiddleware};
use crate::request::RequestHead;
use crate::translation::{Translator, get_detector_locale, use_translation};

/// Middleware binding the i18n context to each request
pub async fn i18n_middleware(
    State(middleware): State<I18nMiddleware>,
    mut req: Request,
    next: Next,
) -> Response {
    let context = middleware.on_request(RequestHead::from_request(&req));
    req.extensions_mut().insert(context.clone());

    let response = scope::run(context.clone(), next.run(req)).await;

    middleware.on_response(context);
    response
}

/// Extractor for the translator of the current request
#[derive(Debug, Clone)]
pub struct Translation(pub Translator);

impl Deref for Translation {
    type Target = Translator;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for Translation
where
    S: Send + Sync,
{
    type Rejection = I18nError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        use_translation(&parts.extensions).await.map(Translation)
    }
}

/// Extractor for the locale detected for the current request
#[derive(Debug, Clone)]
pub struct DetectedLocale(pub LanguageIdentifier);

#[async_trait]
impl<S> FromRequestParts<S> for DetectedLocale
where
    S: Send + Sync,
{
    type Rejection = I18nError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        get_detector_locale(&parts.extensions).await.map(DetectedLocale)
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for I18nContext
where
    S: Send + Sync,
{
    type Rejection = I18nError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts.extensions.get::<I18nContext>().cloned().ok_or(I18nError::NotInitialized)
    }
}
