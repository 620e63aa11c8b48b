use axum::http::Uri;
use lingo_core::DEFAULT_LOCALE;
use unic_langid::LanguageIdentifier;

use super::to_locale;
use crate::error::I18nError;

#[derive(Debug, Clone)]
pub struct QueryOptions {
    /// Query parameter holding the locale
    pub name: String,
    pub lang: String,
}

impl Default for QueryOptions {
    fn default() -> Self {
        Self { name: "locale".to_string(), lang: DEFAULT_LOCALE.to_string() }
    }
}

/// Percent-decoded value of the first `name` query parameter
pub fn query_value(uri: &Uri, name: &str) -> Option<String> {
    uri.query()?.split('&').find_map(|pair| {
        let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
        (decode(key) == name).then(|| decode(value))
    })
}

fn decode(component: &str) -> String {
    let component = component.replace('+', " ");
    urlencoding::decode(&component)
        .map(|decoded| decoded.into_owned())
        .unwrap_or(component)
}

pub fn get_query_locale(uri: &Uri, options: &QueryOptions) -> Result<LanguageIdentifier, I18nError> {
    match query_value(uri, &options.name).filter(|value| !value.is_empty()) {
        Some(value) => to_locale(&value),
        None => to_locale(&options.lang),
    }
}

pub fn try_query_locale(uri: &Uri, options: &QueryOptions) -> Option<LanguageIdentifier> {
    get_query_locale(uri, options).ok()
}
