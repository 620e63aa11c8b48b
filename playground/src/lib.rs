//! Playground server for the lingo i18n middleware

pub mod app;
pub mod catalogs;
pub mod config;
pub mod detectors;
pub mod handlers;
pub mod logging;

pub use app::build_middleware;
pub use config::Config;
