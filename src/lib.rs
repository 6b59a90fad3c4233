//! Locale resolution and translation core for the SpaceX Explorer site.

pub mod config;
pub mod i18n;
pub mod preferences;
pub mod resolver;
pub mod seo;
pub mod server;
