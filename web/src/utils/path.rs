use axum::http::Uri;
use lingo_core::DEFAULT_LOCALE;
use unic_langid::LanguageIdentifier;

use super::to_locale;
use crate::error::I18nError;

#[derive(Debug, Clone)]
pub struct PathOptions {
    pub lang: String,
    /// Index of the path segment holding the locale
    pub index: usize,
}

impl Default for PathOptions {
    fn default() -> Self {
        Self { lang: DEFAULT_LOCALE.to_string(), index: 0 }
    }
}

/// Non-empty path segment at `index`
pub fn path_language(path: &str, index: usize) -> Option<&str> {
    path.split('/').filter(|segment| !segment.is_empty()).nth(index)
}

pub fn get_path_locale(uri: &Uri, options: &PathOptions) -> Result<LanguageIdentifier, I18nError> {
    to_locale(path_language(uri.path(), options.index).unwrap_or(&options.lang))
}

pub fn try_path_locale(uri: &Uri, options: &PathOptions) -> Option<LanguageIdentifier> {
    get_path_locale(uri, options).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_language() {
        assert_eq!(path_language("/ja/docs/intro", 0), Some("ja"));
        assert_eq!(path_language("//ja/docs", 1), Some("docs"));
        assert_eq!(path_language("/", 0), None);
    }

    #[test]
    fn test_get_path_locale() {
        let uri: Uri = "/en-GB/articles?page=2".parse().unwrap();
        assert_eq!(get_path_locale(&uri, &PathOptions::default()).unwrap().to_string(), "en-GB");

        let uri: Uri = "/".parse().unwrap();
        assert_eq!(get_path_locale(&uri, &PathOptions::default()).unwrap().to_string(), "en-US");

        let uri: Uri = "/v1/docs/ja".parse().unwrap();
        let options = PathOptions { index: 2, ..PathOptions::default() };
        assert_eq!(get_path_locale(&uri, &options).unwrap().to_string(), "ja");
        assert!(try_path_locale(&uri, &PathOptions::default()).is_none());
    }
}
