//! Internationalization (i18n) module for multi-language support.
//!
//! This module provides the language infrastructure for the site. All
//! language metadata, the current-selection state, and its change
//! notification contract live here; the localized copy itself lives in
//! [`crate::content`].
//!
//! # Architecture
//!
//! - `language`: Type-safe `Language` value validated against the supported set
//! - `registry`: The supported-language list, the current selection, and the
//!   subscribe/notify contract used to re-resolve content on a change
//!
//! # Example
//!
//! ```rust,ignore
//! use delve_site::i18n::{Language, LanguageRegistry};
//!
//! let mut registry = LanguageRegistry::new();
//! registry.change_language("ja");          // current becomes Japanese
//! registry.change_language("fr");          // unknown code: no-op
//! assert_eq!(registry.current().code(), "ja");
//! ```

mod language;
mod registry;

pub use language::Language;
pub use registry::{LanguageRegistry, SubscriberId};
