//! Domain types for mixlang.
//!
//! - **`Section`**: one tagged block of a mix file, with its verbatim code
//! - **`Identifier`**: one declaration recognized inside a section's code
//! - **`IdentifierKind`**: the declaration category (variable, function, class)
//!
//! Sections are produced by the splitter with an empty identifier list and
//! filled in exactly once by the pipeline's extraction pass.

use serde::{Deserialize, Serialize};

// ============================================================================
// Enums
// ============================================================================

/// Category of a recognized declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IdentifierKind {
    /// `var`/`let`/`const` in JavaScript, any assignment target in Python
    Variable,
    /// `function` in JavaScript, `def` in Python
    Function,
    /// `class` in both languages
    Class,
}

impl IdentifierKind {
    /// Lowercase name used in rendered output.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Variable => "variable",
            Self::Function => "function",
            Self::Class => "class",
        }
    }
}

impl std::fmt::Display for IdentifierKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Entities
// ============================================================================

/// A declaration recognized by an identifier extractor.
///
/// Identifiers carry no position information and no links to other
/// identifiers; each one is a standalone fact owned by its [`Section`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Identifier {
    /// The captured token
    pub name: String,
    /// What kind of declaration matched
    pub kind: IdentifierKind,
    /// Language tag of the owning section
    pub language: String,
}

impl Identifier {
    /// Create a new identifier.
    #[must_use]
    pub fn new(name: impl Into<String>, kind: IdentifierKind, language: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind,
            language: language.into(),
        }
    }
}

/// One language-tagged block of a mix file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    /// Interior of the boundary marker that opened this section
    pub language: String,
    /// Every line of the block, each terminated by `\n`
    pub code: String,
    /// Declarations found in `code`; empty until extraction runs
    pub identifiers: Vec<Identifier>,
}

impl Section {
    /// Create a section with no identifiers.
    #[must_use]
    pub fn new(language: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            language: language.into(),
            code: code.into(),
            identifiers: Vec::new(),
        }
    }

    /// Identifiers of a single kind, in extraction order.
    pub fn identifiers_of(&self, kind: IdentifierKind) -> impl Iterator<Item = &Identifier> {
        self.identifiers.iter().filter(move |id| id.kind == kind)
    }

    /// Number of lines in the section's code.
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.code.lines().count()
    }
}
