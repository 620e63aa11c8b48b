//! Translation core for lingo
//!
//! Holds per-locale message catalogs and renders messages: nested key
//! lookup, `{name}` / `{0}` interpolation and `|` plural choice. Locale
//! detection and request binding live in `lingo-web`.

pub mod catalog;
pub mod context;
pub mod error;
mod format;
pub mod translate;

pub use catalog::{Catalog, Messages};
pub use context::{CoreOptions, DEFAULT_LOCALE, I18n};
pub use error::{CoreError, CoreResult};
pub use translate::{DefaultMessage, TranslateArgs};
