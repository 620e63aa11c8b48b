use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub i18n: I18nConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub file: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct I18nConfig {
    pub default_locale: String,
    pub detector: DetectorKind,
    /// Directory holding `<locale>.json` catalogs
    pub locales_dir: String,
    /// Load only the default locale at startup, the others on first request
    pub lazy_load: bool,
    pub missing_warn: bool,
    pub escape_parameter: bool,
}

/// Where the playground reads a request's locale from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum DetectorKind {
    #[default]
    Header,
    Query,
    Cookie,
    Path,
    Static,
}

impl DetectorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Header => "header",
            Self::Query => "query",
            Self::Cookie => "cookie",
            Self::Path => "path",
            Self::Static => "static",
        }
    }
}

impl std::str::FromStr for DetectorKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "header" => Ok(Self::Header),
            "query" => Ok(Self::Query),
            "cookie" => Ok(Self::Cookie),
            "path" => Ok(Self::Path),
            "static" => Ok(Self::Static),
            other => anyhow::bail!("unknown detector '{}'", other),
        }
    }
}

impl Config {
    /// Load configuration with environment variable override support
    ///
    /// Loading order:
    /// 1. Load from the given file, or the first config.toml found
    /// 2. Override with environment variables (prefixed with APP_)
    /// 3. Validate the final configuration
    pub fn load(path: Option<&str>) -> Result<Self, anyhow::Error> {
        let mut config = match path.map(str::to_string).or_else(Self::find_config_file) {
            Some(config_path) => Self::from_toml(&config_path)?,
            None => {
                tracing::warn!("Configuration file not found, using defaults");
                Config::default()
            },
        };

        config.apply_overrides(|name| std::env::var(name).ok());
        config.validate()?;

        Ok(config)
    }

    /// Apply overrides looked up by variable name
    ///
    /// Supported variables:
    /// - APP_SERVER_HOST: Server host (default: 127.0.0.1)
    /// - APP_SERVER_PORT: Server port (default: 3000)
    /// - APP_LOG_LEVEL: Logging level (e.g., "info,lingo_web=debug")
    /// - APP_I18N_DEFAULT_LOCALE: Default locale (default: en)
    /// - APP_I18N_DETECTOR: header, query, cookie, path or static
    /// - APP_I18N_LOCALES_DIR: Catalog directory (default: locales)
    pub fn apply_overrides(&mut self, var: impl Fn(&str) -> Option<String>) {
        if let Some(host) = var("APP_SERVER_HOST") {
            self.server.host = host;
            tracing::info!("Override server.host from env: {}", self.server.host);
        }

        if let Some(port) = var("APP_SERVER_PORT")
            && let Ok(port) = port.parse()
        {
            self.server.port = port;
            tracing::info!("Override server.port from env: {}", self.server.port);
        }

        if let Some(level) = var("APP_LOG_LEVEL") {
            self.logging.level = level;
            tracing::info!("Override logging.level from env: {}", self.logging.level);
        }

        if let Some(locale) = var("APP_I18N_DEFAULT_LOCALE") {
            self.i18n.default_locale = locale;
            tracing::info!("Override i18n.default_locale from env: {}", self.i18n.default_locale);
        }

        if let Some(detector) = var("APP_I18N_DETECTOR") {
            match detector.parse() {
                Ok(kind) => {
                    self.i18n.detector = kind;
                    tracing::info!("Override i18n.detector from env: {}", detector);
                },
                Err(e) => tracing::warn!(
                    "Invalid APP_I18N_DETECTOR '{}': {} (keep {})",
                    detector,
                    e,
                    self.i18n.detector.as_str()
                ),
            }
        }

        if let Some(dir) = var("APP_I18N_LOCALES_DIR") {
            self.i18n.locales_dir = dir;
            tracing::info!("Override i18n.locales_dir from env: {}", self.i18n.locales_dir);
        }
    }

    pub fn validate(&self) -> Result<(), anyhow::Error> {
        if self.server.port == 0 {
            anyhow::bail!("Server port cannot be 0");
        }

        if self.i18n.default_locale.trim().is_empty() {
            anyhow::bail!("i18n.default_locale cannot be empty");
        }

        if let Err(e) = lingo_web::utils::to_locale(&self.i18n.default_locale) {
            anyhow::bail!("i18n.default_locale is invalid: {}", e);
        }

        if self.i18n.detector == DetectorKind::Static && self.i18n.lazy_load {
            tracing::debug!("Static detector ignores lazy_load, all catalogs load at startup");
        }

        Ok(())
    }

    fn find_config_file() -> Option<String> {
        let possible_paths =
            ["conf/config.toml", "config.toml", "./conf/config.toml", "./config.toml"];

        for path in &possible_paths {
            if Path::new(path).exists() {
                return Some(path.to_string());
            }
        }
        None
    }

    pub fn from_toml(path: &str) -> Result<Self, anyhow::Error> {
        let content = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { host: "127.0.0.1".to_string(), port: 3000 }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: "info,lingo_web=debug,lingo_playground=debug".to_string(), file: None }
    }
}

impl Default for I18nConfig {
    fn default() -> Self {
        Self {
            default_locale: "en".to_string(),
            detector: DetectorKind::Header,
            locales_dir: "locales".to_string(),
            lazy_load: true,
            missing_warn: true,
            escape_parameter: false,
        }
    }
}
