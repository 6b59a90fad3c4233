//! Internationalization (i18n) module for multi-language support.
//!
//! This module provides a centralized architecture for managing the site's
//! supported languages. All language-related logic, localized strings, and
//! translation infrastructure is contained here.
//!
//! # Architecture
//!
//! - `registry`: Single source of truth for all supported languages and their metadata
//! - `language`: Type-safe Language type validated against the registry
//! - `translations`: Strongly typed translation tables with per-entry fallback
//! - `strings`: The per-language string tables (data)
//! - `phrases`: Literal phrase substitution for externally sourced text
//!
//! # Example
//!
//! ```rust,ignore
//! use crate::i18n::{Language, TranslationTable};
//!
//! let language = Language::detect_best(Some("zh-CN,zh;q=0.9,en;q=0.8"));
//! let title = TranslationTable::text(language, |t| t.launches.title);
//! ```

mod language;
mod phrases;
mod registry;
pub mod strings;
pub mod translations;

pub use language::Language;
pub use phrases::localize_phrases;
pub use registry::{LanguageConfig, LanguageRegistry};
pub use translations::{TranslationTable, Translations};
