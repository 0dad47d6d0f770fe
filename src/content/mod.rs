//! Localized content: bundles, resolution, and text normalization.
//!
//! Each page section has one JSON document per language. This module owns
//! the typed schemas for those documents (`bundle`), the immutable store
//! that maps `(languageCode, sectionId)` to a resolved bundle with
//! default-language fallback (`resolver`), the `{namespace.key}` token
//! substitution applied to every text field (`text`), and the named
//! placeholder assets used when a record carries no image (`assets`).

mod assets;
mod bundle;
mod resolver;
mod text;

pub use assets::{implementer_placeholder, partner_placeholder, slide_placeholder};
pub use bundle::{
    BannerContent, Cta, DatedItem, FooterContent, FooterLink, HeaderContent, HomeContent,
    LinkSection, Logo, NavLabels, SectionContent, SectionId, Slide, Stat,
};
pub use resolver::{ContentError, ContentStore, ValidationReport};
pub use text::{substitute, substitute_opt, SiteVariables};
