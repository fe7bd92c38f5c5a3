//! JavaScript (`js`) identifier extraction.

use once_cell::sync::Lazy;

use super::PatternSet;
use crate::types::Identifier;

/// Language tag this extractor is registered under.
pub const TAG: &str = "js";

// Patterns use `(?-u)` so `\w`, `\b` and `\s` are ASCII-only; a non-ASCII
// letter is never part of a name and always ends a word.

/// `var`, `let` or `const` followed by the declared name.
pub const VARIABLE_PATTERN: &str = r"(?-u)\b(?:var|let|const)\s+(\w+)";

/// `function` followed by the function name.
pub const FUNCTION_PATTERN: &str = r"(?-u)\bfunction\s+(\w+)";

/// `class` followed by the class name.
pub const CLASS_PATTERN: &str = r"(?-u)\bclass\s+(\w+)";

static PATTERNS: Lazy<PatternSet> = Lazy::new(|| {
    PatternSet::new(VARIABLE_PATTERN, FUNCTION_PATTERN, CLASS_PATTERN)
        .expect("javascript patterns are valid regular expressions")
});

/// Extract variable, function and class declarations from JavaScript code.
#[must_use]
pub fn extract(code: &str) -> Vec<Identifier> {
    PATTERNS.extract(code, TAG)
}
