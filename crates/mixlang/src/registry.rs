//! Language tag to extractor mapping.
//!
//! The [`Registry`] is a plain value: built once, optionally narrowed by
//! configuration, then handed to a [`Dispatcher`]. Nothing looks extractors
//! up through global state, so the set of supported languages can be
//! inspected and tested like any other data.

use std::collections::BTreeMap;

use tracing::debug;

use crate::languages::{javascript, python};
use crate::types::Identifier;

/// A pure function from a block of code to the declarations it contains.
pub type Extractor = fn(&str) -> Vec<Identifier>;

/// Mapping from language tag to extractor.
///
/// Tags are matched exactly and case-sensitively.
#[derive(Clone, Default)]
pub struct Registry {
    extractors: BTreeMap<String, Extractor>,
}

impl std::fmt::Debug for Registry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_set().entries(self.languages()).finish()
    }
}

impl Registry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with every built-in language (`js`, `py`).
    #[must_use]
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        registry.register(javascript::TAG, javascript::extract);
        registry.register(python::TAG, python::extract);
        registry
    }

    /// Register `extractor` for `tag`, replacing any previous entry for that tag.
    ///
    /// Returns the extractor previously registered for `tag`, if any.
    pub fn register(&mut self, tag: impl Into<String>, extractor: Extractor) -> Option<Extractor> {
        self.extractors.insert(tag.into(), extractor)
    }

    /// Look up the extractor for `tag`.
    #[must_use]
    pub fn get(&self, tag: &str) -> Option<Extractor> {
        self.extractors.get(tag).copied()
    }

    /// Returns `true` if an extractor is registered for `tag`.
    #[must_use]
    pub fn contains(&self, tag: &str) -> bool {
        self.extractors.contains_key(tag)
    }

    /// Registered tags in sorted order.
    pub fn languages(&self) -> impl Iterator<Item = &str> {
        self.extractors.keys().map(String::as_str)
    }

    /// Keep only the tags listed in `enabled`.
    ///
    /// Entries in `enabled` with no registered extractor are ignored.
    pub fn retain_languages(&mut self, enabled: &[String]) {
        self.extractors
            .retain(|tag, _| enabled.iter().any(|wanted| wanted == tag));
    }

    /// Number of registered languages.
    #[must_use]
    pub fn len(&self) -> usize {
        self.extractors.len()
    }

    /// Returns `true` if no languages are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.extractors.is_empty()
    }
}

/// Routes a section's code to the extractor for its language tag.
#[derive(Debug, Clone)]
pub struct Dispatcher {
    registry: Registry,
}

impl Dispatcher {
    /// Create a dispatcher over `registry`.
    #[must_use]
    pub fn new(registry: Registry) -> Self {
        Self { registry }
    }

    /// Run the extractor registered for `language` over `code`.
    ///
    /// Every returned identifier carries `language`, whatever tag the
    /// extractor itself stamps. Unknown tags yield an empty list.
    #[must_use]
    pub fn dispatch(&self, language: &str, code: &str) -> Vec<Identifier> {
        match self.registry.get(language) {
            Some(extract) => {
                let mut identifiers = extract(code);
                for identifier in &mut identifiers {
                    if identifier.language != language {
                        identifier.language = language.to_string();
                    }
                }
                identifiers
            }
            None => {
                debug!(language, "No extractor registered, skipping section");
                Vec::new()
            }
        }
    }

    /// Returns `true` if `language` has a registered extractor.
    #[must_use]
    pub fn supports(&self, language: &str) -> bool {
        self.registry.contains(language)
    }

    /// The registry this dispatcher routes through.
    #[must_use]
    pub fn registry(&self) -> &Registry {
        &self.registry
    }
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self::new(Registry::builtin())
    }
}
