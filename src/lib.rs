//! Core library for the DELVE marketing site.
//!
//! The site itself is mostly presentation markup; the logic worth keeping
//! behind a library boundary is here:
//!
//! - [`i18n`]: the language registry (available languages, current
//!   selection, change notification)
//! - [`content`]: per-language per-section content bundles, default-language
//!   fallback, and site-variable token substitution
//! - [`carousel`]: the wrap-around slide navigation state machine
//! - [`dashboard`]: the internal dashboard stats client with its fixed
//!   fallback record

pub mod carousel;
pub mod config;
pub mod content;
pub mod dashboard;
pub mod i18n;
pub mod retry;
