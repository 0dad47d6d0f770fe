//! Content resolution: `(languageCode, sectionId) -> resolved bundle`.
//!
//! The store is built once at startup from a declared set of bundle
//! documents and never mutated. Resolution is a pure lookup with
//! whole-section fallback: a missing or unknown language falls back to the
//! default language's document for that section, never to a field-by-field
//! merge across languages. If the default is missing too, resolution
//! degrades to a neutral empty bundle so a page never crashes on missing
//! copy; that gap is surfaced through [`ContentStore::validate_completeness`]
//! instead.

use crate::content::bundle::{SectionContent, SectionId};
use crate::content::text::{substitute_value, SiteVariables};
use crate::i18n::Language;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use thiserror::Error;
use tracing::warn;

/// Errors raised while building a content store.
///
/// These can only occur at startup; resolution itself is total.
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("content source declares unsupported language code '{0}'")]
    UnknownLanguage(String),

    #[error("duplicate bundle for ({language}, {section})")]
    Duplicate { language: String, section: SectionId },

    #[error("failed to parse {section} bundle for language '{language}'")]
    Parse {
        language: String,
        section: SectionId,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to read bundle file {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Completeness report over the loaded bundle set.
///
/// Errors are missing default-language sections (the default MUST be
/// complete); warnings are missing sections for other advertised languages
/// (they fall back to the default at runtime).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl ValidationReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    pub fn is_clean(&self) -> bool {
        !self.has_errors() && !self.has_warnings()
    }
}

// The original site imported these statically per component; here they are
// one declared table built into the binary.
const EMBEDDED_SOURCES: &[(&str, SectionId, &str)] = &[
    ("en", SectionId::Header, include_str!("../../content/en/header.json")),
    ("en", SectionId::Home, include_str!("../../content/en/home.json")),
    ("en", SectionId::Footer, include_str!("../../content/en/footer.json")),
    ("ja", SectionId::Header, include_str!("../../content/ja/header.json")),
    ("ja", SectionId::Home, include_str!("../../content/ja/home.json")),
    ("ja", SectionId::Footer, include_str!("../../content/ja/footer.json")),
    ("zh", SectionId::Header, include_str!("../../content/zh/header.json")),
    ("zh", SectionId::Home, include_str!("../../content/zh/home.json")),
    ("zh", SectionId::Footer, include_str!("../../content/zh/footer.json")),
    ("es", SectionId::Header, include_str!("../../content/es/header.json")),
    ("es", SectionId::Home, include_str!("../../content/es/home.json")),
    ("es", SectionId::Footer, include_str!("../../content/es/footer.json")),
];

/// Immutable map from `(languageCode, sectionId)` to resolved content.
///
/// Text fields are token-substituted when the store is built, so
/// [`ContentStore::resolve`] does no I/O and no allocation beyond an `Arc`
/// clone; two calls with equal arguments return the same `Arc`.
pub struct ContentStore {
    bundles: HashMap<String, HashMap<SectionId, Arc<SectionContent>>>,
    neutral: HashMap<SectionId, Arc<SectionContent>>,
    default_code: String,
}

impl ContentStore {
    /// Build a store from an explicit list of bundle documents.
    ///
    /// # Arguments
    /// * `default_language` - Language whose bundles back the fallback path
    /// * `documents` - `(languageCode, sectionId, document)` triples; codes
    ///   must name supported languages and pairs must be unique
    /// * `variables` - Site variables substituted into every text field
    pub fn from_documents(
        default_language: Language,
        documents: Vec<(String, SectionId, serde_json::Value)>,
        variables: &SiteVariables,
    ) -> Result<Self, ContentError> {
        let mut bundles: HashMap<String, HashMap<SectionId, Arc<SectionContent>>> =
            HashMap::new();

        for (code, section, mut value) in documents {
            let language = Language::from_code(&code)
                .map_err(|_| ContentError::UnknownLanguage(code.clone()))?;

            substitute_value(&mut value, variables);
            let content = SectionContent::from_value(section, value).map_err(|source| {
                ContentError::Parse {
                    language: code.clone(),
                    section,
                    source,
                }
            })?;

            let per_language = bundles.entry(language.code().to_string()).or_default();
            if per_language.insert(section, Arc::new(content)).is_some() {
                return Err(ContentError::Duplicate {
                    language: code,
                    section,
                });
            }
        }

        let neutral = SectionId::ALL
            .into_iter()
            .map(|section| (section, Arc::new(SectionContent::empty(section))))
            .collect();

        Ok(Self {
            bundles,
            neutral,
            default_code: default_language.code().to_string(),
        })
    }

    /// Build the store from the bundles compiled into the binary.
    pub fn from_embedded(
        default_language: Language,
        variables: &SiteVariables,
    ) -> Result<Self, ContentError> {
        let mut documents = Vec::with_capacity(EMBEDDED_SOURCES.len());
        for (code, section, raw) in EMBEDDED_SOURCES {
            let value: serde_json::Value =
                serde_json::from_str(raw).map_err(|source| ContentError::Parse {
                    language: (*code).to_string(),
                    section: *section,
                    source,
                })?;
            documents.push(((*code).to_string(), *section, value));
        }
        Self::from_documents(default_language, documents, variables)
    }

    /// Build the store from `<dir>/<code>/<section>.json` files.
    ///
    /// Directories that do not name a supported language are skipped with a
    /// warning; missing section files are left to the fallback path and the
    /// completeness report.
    pub fn from_dir(
        dir: &Path,
        default_language: Language,
        variables: &SiteVariables,
    ) -> Result<Self, ContentError> {
        let entries = std::fs::read_dir(dir).map_err(|source| ContentError::Io {
            path: dir.to_path_buf(),
            source,
        })?;

        let mut documents = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|source| ContentError::Io {
                path: dir.to_path_buf(),
                source,
            })?;
            if !entry.path().is_dir() {
                continue;
            }
            let code = entry.file_name().to_string_lossy().into_owned();
            if Language::from_code(&code).is_err() {
                warn!("Skipping content directory for unsupported language '{}'", code);
                continue;
            }

            for section in SectionId::ALL {
                let path = entry.path().join(format!("{}.json", section.as_str()));
                if !path.exists() {
                    continue;
                }
                let raw = std::fs::read_to_string(&path)
                    .map_err(|source| ContentError::Io { path: path.clone(), source })?;
                let value: serde_json::Value =
                    serde_json::from_str(&raw).map_err(|source| ContentError::Parse {
                        language: code.clone(),
                        section,
                        source,
                    })?;
                documents.push((code.clone(), section, value));
            }
        }

        Self::from_documents(default_language, documents, variables)
    }

    /// The language code missing bundles fall back to.
    pub fn default_code(&self) -> &str {
        &self.default_code
    }

    /// Resolve the content of `section` for `language_code`.
    ///
    /// Total and deterministic: an unknown code or a missing bundle yields
    /// the default language's whole bundle for the section; if that is also
    /// missing, the section's neutral empty bundle. Equal arguments against
    /// an unchanged store return the same `Arc`.
    pub fn resolve(&self, language_code: &str, section: SectionId) -> Arc<SectionContent> {
        if let Some(bundle) = self.get(language_code, section) {
            return Arc::clone(bundle);
        }
        if language_code != self.default_code {
            if let Some(bundle) = self.get(&self.default_code, section) {
                return Arc::clone(bundle);
            }
        }
        Arc::clone(
            self.neutral
                .get(&section)
                .expect("neutral bundle exists for every section"),
        )
    }

    fn get(&self, language_code: &str, section: SectionId) -> Option<&Arc<SectionContent>> {
        self.bundles
            .get(language_code)
            .and_then(|per_language| per_language.get(&section))
    }

    /// Check that every advertised language has a bundle for every section.
    ///
    /// Missing default-language sections are errors (resolution for them
    /// degrades to empty content); other gaps are warnings (they fall back
    /// to the default language).
    pub fn validate_completeness(&self, languages: &[Language]) -> ValidationReport {
        let mut report = ValidationReport::new();

        for language in languages {
            for section in SectionId::ALL {
                if self.get(language.code(), section).is_some() {
                    continue;
                }
                if language.code() == self.default_code {
                    report.errors.push(format!(
                        "Default language '{}' has no {} bundle",
                        language.code(),
                        section
                    ));
                } else {
                    report.warnings.push(format!(
                        "Language '{}' has no {} bundle; falling back to '{}'",
                        language.code(),
                        section,
                        self.default_code
                    ));
                }
            }
        }

        report
    }
}
