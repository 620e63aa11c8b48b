use thiserror::Error;

/// Errors raised while building catalogs for the translation core
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Invalid catalog for locale '{locale}': {reason}")]
    InvalidCatalog { locale: String, reason: String },

    // Catalog source could not be parsed or serialized
    #[error("Catalog JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CoreError {
    /// Helper to create invalid catalog error
    pub fn invalid_catalog(locale: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidCatalog { locale: locale.into(), reason: reason.into() }
    }
}

pub type CoreResult<T> = Result<T, CoreError>;
