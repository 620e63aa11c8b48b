//! Translation context shared by every request of one application

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use dashmap::DashMap;
use serde::{Deserialize, Serialize};

use crate::catalog::{Catalog, Messages};
use crate::error::CoreResult;
use crate::format;
use crate::translate::{DefaultMessage, TranslateArgs};

/// Locale used when nothing else is configured
pub const DEFAULT_LOCALE: &str = "en-US";

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CoreOptions {
    /// Default locale for calls without a locale override
    pub locale: String,
    pub messages: HashMap<String, Catalog>,
    /// Log a warning when a key is missing from the requested locale
    pub missing_warn: bool,
    /// HTML-escape interpolated parameters
    pub escape_parameter: bool,
}

impl Default for CoreOptions {
    fn default() -> Self {
        Self {
            locale: DEFAULT_LOCALE.to_string(),
            messages: HashMap::new(),
            missing_warn: true,
            escape_parameter: false,
        }
    }
}

impl CoreOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = locale.into();
        self
    }

    pub fn message(mut self, locale: impl Into<String>, catalog: Catalog) -> Self {
        self.messages.insert(locale.into(), catalog);
        self
    }

    pub fn messages(mut self, messages: HashMap<String, Catalog>) -> Self {
        self.messages.extend(messages);
        self
    }

    /// Add catalogs from a typed message schema
    pub fn schema<S: Serialize>(self, messages: Messages<S>) -> CoreResult<Self> {
        Ok(self.messages(messages.into_catalogs()?))
    }

    pub fn missing_warn(mut self, enabled: bool) -> Self {
        self.missing_warn = enabled;
        self
    }

    pub fn escape_parameter(mut self, enabled: bool) -> Self {
        self.escape_parameter = enabled;
        self
    }
}

/// Handle to the translation context.
///
/// Cloning is cheap; all clones share the same catalogs. There is no
/// mutable "current locale": callers pass the locale per call through
/// [`TranslateArgs::locale`], falling back to the configured default.
#[derive(Clone)]
pub struct I18n {
    inner: Arc<Inner>,
}

struct Inner {
    locale: String,
    messages: DashMap<String, Catalog>,
    missing_warn: bool,
    escape_parameter: bool,
}

impl I18n {
    pub fn new(options: CoreOptions) -> Self {
        let CoreOptions { locale, messages, missing_warn, escape_parameter } = options;
        Self {
            inner: Arc::new(Inner {
                locale,
                messages: messages.into_iter().collect(),
                missing_warn,
                escape_parameter,
            }),
        }
    }

    /// Configured default locale
    pub fn locale(&self) -> &str {
        &self.inner.locale
    }

    pub fn has_messages(&self, locale: &str) -> bool {
        self.inner.messages.contains_key(locale)
    }

    /// Install or replace the catalog of one locale
    pub fn set_messages(&self, locale: impl Into<String>, catalog: Catalog) {
        let locale = locale.into();
        tracing::debug!("Loaded {} top-level messages for locale {}", catalog.len(), locale);
        self.inner.messages.insert(locale, catalog);
    }

    pub fn available_locales(&self) -> Vec<String> {
        let mut locales: Vec<String> =
            self.inner.messages.iter().map(|entry| entry.key().clone()).collect();
        locales.sort();
        locales
    }

    /// Translate `key`.
    ///
    /// Returns `None` when the key is missing from the locale's catalog and
    /// no default message was given.
    pub fn translate(&self, key: &str, args: impl Into<TranslateArgs>) -> Option<String> {
        let args = args.into();
        let locale = args.locale.as_deref().unwrap_or(&self.inner.locale);

        let template = self
            .inner
            .messages
            .get(locale)
            .and_then(|catalog| catalog.resolve(key).map(str::to_owned));

        let template = match template {
            Some(template) => template,
            None => {
                if args.missing_warn.unwrap_or(self.inner.missing_warn) {
                    tracing::warn!("Not found '{}' key in '{}' locale messages", key, locale);
                }
                match &args.default_message {
                    Some(DefaultMessage::Text(text)) => text.clone(),
                    Some(DefaultMessage::Key) => key.to_string(),
                    None => return None,
                }
            },
        };

        let escape = args.escape_parameter.unwrap_or(self.inner.escape_parameter);
        Some(format::render(&template, &args, escape))
    }
}

impl fmt::Debug for I18n {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("I18n")
            .field("locale", &self.inner.locale)
            .field("locales", &self.available_locales())
            .field("missing_warn", &self.inner.missing_warn)
            .field("escape_parameter", &self.inner.escape_parameter)
            .finish()
    }
}
