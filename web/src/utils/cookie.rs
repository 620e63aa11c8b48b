use axum::http::{
    HeaderMap, HeaderValue,
    header::{COOKIE, SET_COOKIE},
};
use lingo_core::DEFAULT_LOCALE;
use unic_langid::LanguageIdentifier;

use super::to_locale;
use crate::error::I18nError;

pub const DEFAULT_COOKIE_NAME: &str = "i18n_locale";

#[derive(Debug, Clone)]
pub struct CookieOptions {
    pub name: String,
    pub lang: String,
}

impl Default for CookieOptions {
    fn default() -> Self {
        Self { name: DEFAULT_COOKIE_NAME.to_string(), lang: DEFAULT_LOCALE.to_string() }
    }
}

/// Attributes of the `Set-Cookie` header written by [`set_cookie_locale`]
#[derive(Debug, Clone)]
pub struct SetCookieOptions {
    pub name: String,
    pub path: Option<String>,
    pub domain: Option<String>,
    pub max_age: Option<u64>,
    pub http_only: bool,
    pub secure: bool,
}

impl Default for SetCookieOptions {
    fn default() -> Self {
        Self {
            name: DEFAULT_COOKIE_NAME.to_string(),
            path: Some("/".to_string()),
            domain: None,
            max_age: None,
            http_only: false,
            secure: false,
        }
    }
}

/// Decoded value of cookie `name` across all `Cookie` headers
pub fn cookie_value(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .find_map(|pair| {
            let (key, value) = pair.trim().split_once('=')?;
            if key.trim() != name {
                return None;
            }
            let value = value.trim().trim_matches('"');
            Some(
                urlencoding::decode(value)
                    .map(|decoded| decoded.into_owned())
                    .unwrap_or_else(|_| value.to_string()),
            )
        })
}

pub fn get_cookie_locale(
    headers: &HeaderMap,
    options: &CookieOptions,
) -> Result<LanguageIdentifier, I18nError> {
    match cookie_value(headers, &options.name).filter(|value| !value.is_empty()) {
        Some(value) => to_locale(&value),
        None => to_locale(&options.lang),
    }
}

pub fn try_cookie_locale(headers: &HeaderMap, options: &CookieOptions) -> Option<LanguageIdentifier> {
    get_cookie_locale(headers, options).ok()
}

/// Append a `Set-Cookie` header persisting `locale`
pub fn set_cookie_locale(
    headers: &mut HeaderMap,
    locale: &str,
    options: &SetCookieOptions,
) -> Result<(), I18nError> {
    let locale = to_locale(locale)?;
    let mut cookie = format!("{}={}", options.name, urlencoding::encode(&locale.to_string()));
    if let Some(path) = &options.path {
        cookie.push_str(&format!("; Path={}", path));
    }
    if let Some(domain) = &options.domain {
        cookie.push_str(&format!("; Domain={}", domain));
    }
    if let Some(max_age) = options.max_age {
        cookie.push_str(&format!("; Max-Age={}", max_age));
    }
    if options.http_only {
        cookie.push_str("; HttpOnly");
    }
    if options.secure {
        cookie.push_str("; Secure");
    }

    headers.append(SET_COOKIE, HeaderValue::from_str(&cookie)?);
    tracing::debug!("Set locale cookie: {}", cookie);
    Ok(())
}
