//! Language registry: Single source of truth for language selection.
//!
//! The registry holds the fixed, ordered set of languages the site ships
//! and the one piece of mutable shared state in the core: the currently
//! selected language. Selection changes go through exactly one writer path
//! (`change_language`) and are pushed to subscribers synchronously, so a
//! caller returning from `change_language` knows every dependent component
//! has already seen the new language.

use crate::i18n::language::{supported_languages, Language};
use anyhow::{bail, Result};
use tracing::debug;

/// Handle returned by [`LanguageRegistry::subscribe`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubscriberId(u64);

type Subscriber = Box<dyn FnMut(Language)>;

/// The available-language set plus the current selection.
///
/// Created once at process start and kept for the process lifetime. The
/// language set never changes after construction; only the selection does.
pub struct LanguageRegistry {
    languages: Vec<Language>,
    current: Language,
    subscribers: Vec<(SubscriberId, Subscriber)>,
    next_subscriber_id: u64,
}

impl LanguageRegistry {
    /// Create a registry over the site's supported languages with English
    /// as the initial selection.
    pub fn new() -> Self {
        // supported_languages() is non-empty and starts with English, so
        // with_languages cannot fail here.
        Self::with_languages(supported_languages().to_vec(), "en")
            .expect("built-in language set is valid")
    }

    /// Create a registry over an explicit language set.
    ///
    /// # Arguments
    /// * `languages` - Ordered, non-empty set with no duplicate codes
    /// * `default_code` - Code of the initial selection; must be in the set
    pub fn with_languages(languages: Vec<Language>, default_code: &str) -> Result<Self> {
        if languages.is_empty() {
            bail!("Language registry requires at least one language");
        }
        for (i, lang) in languages.iter().enumerate() {
            if languages[..i].iter().any(|l| l.code() == lang.code()) {
                bail!("Duplicate language code in registry: '{}'", lang.code());
            }
        }
        let current = match languages.iter().find(|l| l.code() == default_code) {
            Some(lang) => *lang,
            None => bail!(
                "Default language '{}' is not in the registry",
                default_code
            ),
        };

        Ok(Self {
            languages,
            current,
            subscribers: Vec::new(),
            next_subscriber_id: 0,
        })
    }

    /// The ordered set of available languages.
    pub fn available(&self) -> &[Language] {
        &self.languages
    }

    /// The currently selected language.
    pub fn current(&self) -> Language {
        self.current
    }

    /// Look up an available language by code.
    pub fn get_by_code(&self, code: &str) -> Option<Language> {
        self.languages.iter().find(|l| l.code() == code).copied()
    }

    /// Change the current language.
    ///
    /// If `code` names an available language it becomes current and every
    /// live subscriber is notified exactly once before this call returns.
    /// An unknown code is a no-op: the selection codes arrive from URL
    /// params and stored preferences, so bad input must never throw.
    ///
    /// Re-selecting the already-current language still notifies; the call
    /// was accepted, so the notification contract applies uniformly.
    pub fn change_language(&mut self, code: &str) {
        let Some(language) = self.get_by_code(code) else {
            debug!("Ignoring change to unknown language code '{}'", code);
            return;
        };

        self.current = language;
        debug!("Language changed to {} ({})", language.name(), code);

        for (_, subscriber) in self.subscribers.iter_mut() {
            subscriber(language);
        }
    }

    /// Register a callback invoked on every accepted language change.
    ///
    /// Delivery is synchronous and exactly once per change per live
    /// subscriber; notification order between subscribers is unspecified.
    pub fn subscribe(&mut self, callback: impl FnMut(Language) + 'static) -> SubscriberId {
        let id = SubscriberId(self.next_subscriber_id);
        self.next_subscriber_id += 1;
        self.subscribers.push((id, Box::new(callback)));
        id
    }

    /// Remove a subscriber. Returns `false` if the id was already removed.
    pub fn unsubscribe(&mut self, id: SubscriberId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sub_id, _)| *sub_id != id);
        self.subscribers.len() != before
    }
}

impl std::fmt::Debug for LanguageRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LanguageRegistry")
            .field("languages", &self.languages)
            .field("current", &self.current)
            .field("subscribers", &self.subscribers.len())
            .field("next_subscriber_id", &self.next_subscriber_id)
            .finish()
    }
}

impl Default for LanguageRegistry {
    fn default() -> Self {
        Self::new()
    }
}
