//! Task-local binding
//!
//! Code running inside [`run`] can reach the request's translator without a
//! handle to the request. The binding belongs to the task driving the
//! future; tasks spawned from it do not inherit it.

use std::future::Future;

use unic_langid::LanguageIdentifier;

use crate::error::I18nError;
use crate::middleware::I18nContext;
use crate::translation::Translator;

tokio::task_local! {
    static CURRENT: I18nContext;
}

/// Run `future` with `context` bound as the current request
pub async fn run<F: Future>(context: I18nContext, future: F) -> F::Output {
    CURRENT.scope(context, future).await
}

/// Binding of the request being served, if any
pub fn current() -> Option<I18nContext> {
    CURRENT.try_with(Clone::clone).ok()
}

pub async fn use_translation() -> Result<Translator, I18nError> {
    current().ok_or(I18nError::NotInitialized)?.translator().await
}

pub async fn get_detector_locale() -> Result<LanguageIdentifier, I18nError> {
    current().ok_or(I18nError::NotInitialized)?.detected_locale().await
}
