//! Language-specific identifier extraction.
//!
//! Each supported language exposes a pure `extract(code) -> Vec<Identifier>`
//! function built on a [`PatternSet`]: three independent regular expressions
//! for variable, function, and class declarations.
//!
//! ## Adding a New Language
//!
//! 1. Create a new module (e.g., `ruby.rs`) with `VARIABLE_PATTERN`,
//!    `FUNCTION_PATTERN` and `CLASS_PATTERN` constants
//! 2. Compile them into a `Lazy<PatternSet>` and expose `extract()`
//! 3. Register the tag in [`crate::Registry::builtin`]
//!
//! ## Match Order
//!
//! Results are grouped by category rather than by source position: every
//! variable match first, then every function match, then every class match.
//! Within a category matches keep their order of appearance. Downstream
//! consumers depend on this grouping.

pub mod javascript;
pub mod python;

use regex::Regex;

use crate::types::{Identifier, IdentifierKind};

/// The three declaration rules for one language.
///
/// Every pattern must put the declared name in capture group 1.
#[derive(Debug)]
pub struct PatternSet {
    variable: Regex,
    function: Regex,
    class: Regex,
}

impl PatternSet {
    /// Compile a pattern set from its three source patterns.
    ///
    /// # Errors
    ///
    /// Returns the first pattern that fails to compile.
    pub fn new(variable: &str, function: &str, class: &str) -> Result<Self, regex::Error> {
        Ok(Self {
            variable: Regex::new(variable)?,
            function: Regex::new(function)?,
            class: Regex::new(class)?,
        })
    }

    /// Run all three scans over `code` and tag each match with `language`.
    #[must_use]
    pub fn extract(&self, code: &str, language: &str) -> Vec<Identifier> {
        let mut identifiers = Vec::new();

        for (regex, kind) in [
            (&self.variable, IdentifierKind::Variable),
            (&self.function, IdentifierKind::Function),
            (&self.class, IdentifierKind::Class),
        ] {
            identifiers.extend(
                captured_names(regex, code).map(|name| Identifier::new(name, kind, language)),
            );
        }

        identifiers
    }
}

/// Capture group 1 of every non-overlapping match, in order of appearance.
fn captured_names<'c>(regex: &'c Regex, code: &'c str) -> impl Iterator<Item = &'c str> + 'c {
    regex
        .captures_iter(code)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str())
}
