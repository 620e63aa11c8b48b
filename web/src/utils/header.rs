use axum::http::{
    HeaderMap,
    header::{ACCEPT_LANGUAGE, HeaderName},
};
use lingo_core::DEFAULT_LOCALE;
use unic_langid::LanguageIdentifier;

use super::to_locale;
use crate::error::I18nError;

#[derive(Debug, Clone)]
pub struct HeaderOptions {
    /// Header to read; anything but `accept-language` is taken as one tag
    pub name: HeaderName,
    /// Tag used when the header is absent
    pub lang: String,
}

impl Default for HeaderOptions {
    fn default() -> Self {
        Self { name: ACCEPT_LANGUAGE, lang: DEFAULT_LOCALE.to_string() }
    }
}

/// Split an `Accept-Language` value into its tags, in listed order.
///
/// Quality values are dropped, not sorted on: the first listed tag wins.
pub fn parse_accept_language(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(|entry| entry.split(';').next().unwrap_or(entry).trim())
        .filter(|tag| !tag.is_empty() && *tag != "*")
        .map(str::to_string)
        .collect()
}

pub fn get_header_languages(headers: &HeaderMap, options: &HeaderOptions) -> Vec<String> {
    let Some(value) = headers
        .get(&options.name)
        .and_then(|value| value.to_str().ok())
        .filter(|value| !value.trim().is_empty())
    else {
        return Vec::new();
    };

    if options.name == ACCEPT_LANGUAGE {
        parse_accept_language(value)
    } else {
        vec![value.trim().to_string()]
    }
}

/// First language of the header, or an empty string
pub fn get_header_language(headers: &HeaderMap, options: &HeaderOptions) -> String {
    get_header_languages(headers, options).into_iter().next().unwrap_or_default()
}

pub fn get_header_locales(
    headers: &HeaderMap,
    options: &HeaderOptions,
) -> Result<Vec<LanguageIdentifier>, I18nError> {
    let languages = get_header_languages(headers, options);
    if languages.is_empty() {
        return Ok(vec![to_locale(&options.lang)?]);
    }
    languages.iter().map(|language| to_locale(language)).collect()
}

pub fn get_header_locale(
    headers: &HeaderMap,
    options: &HeaderOptions,
) -> Result<LanguageIdentifier, I18nError> {
    let language = get_header_language(headers, options);
    if language.is_empty() { to_locale(&options.lang) } else { to_locale(&language) }
}

pub fn try_header_locales(
    headers: &HeaderMap,
    options: &HeaderOptions,
) -> Option<Vec<LanguageIdentifier>> {
    get_header_locales(headers, options).ok()
}

pub fn try_header_locale(headers: &HeaderMap, options: &HeaderOptions) -> Option<LanguageIdentifier> {
    get_header_locale(headers, options).ok()
}
