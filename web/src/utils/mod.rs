//! Locale utilities over `http` requests
//!
//! `get_*` functions fall back to a default language tag when the source is
//! absent and fail on tags that are not valid BCP 47 identifiers. `try_*`
//! variants turn those failures into `None`.

pub mod cookie;
pub mod header;
pub mod path;
pub mod query;

pub use cookie::{
    CookieOptions, DEFAULT_COOKIE_NAME, SetCookieOptions, cookie_value, get_cookie_locale,
    set_cookie_locale, try_cookie_locale,
};
pub use header::{
    HeaderOptions, get_header_language, get_header_languages, get_header_locale,
    get_header_locales, parse_accept_language, try_header_locale, try_header_locales,
};
pub use path::{PathOptions, get_path_locale, path_language, try_path_locale};
pub use query::{QueryOptions, get_query_locale, query_value, try_query_locale};

use unic_langid::LanguageIdentifier;

use crate::error::I18nError;

/// Parse a language tag into a locale
pub fn to_locale(tag: &str) -> Result<LanguageIdentifier, I18nError> {
    tag.trim()
        .parse::<LanguageIdentifier>()
        .map_err(|source| I18nError::invalid_locale(tag, source))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_locale() {
        assert_eq!(to_locale("ja").unwrap().to_string(), "ja");
        assert_eq!(to_locale(" en-US ").unwrap().to_string(), "en-US");
        assert!(matches!(to_locale("@@@"), Err(I18nError::InvalidLocale { .. })));
    }
}
