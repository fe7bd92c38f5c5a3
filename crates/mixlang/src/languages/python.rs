//! Python (`py`) identifier extraction.
//!
//! The variable rule is a bare assignment heuristic: any word followed by a
//! single `=`. It also fires on `==` comparisons and keyword arguments, so
//! callers should treat the variable list as a superset.

use once_cell::sync::Lazy;

use super::PatternSet;
use crate::types::Identifier;

/// Language tag this extractor is registered under.
pub const TAG: &str = "py";

// ASCII-only word characters and boundaries, as in the JavaScript patterns.

/// Any word followed by `=`, with optional surrounding whitespace.
pub const VARIABLE_PATTERN: &str = r"(?-u)\b(\w+)\s*=\s*";

/// `def` followed by the function name.
pub const FUNCTION_PATTERN: &str = r"(?-u)\bdef\s+(\w+)";

/// `class` followed by the class name.
pub const CLASS_PATTERN: &str = r"(?-u)\bclass\s+(\w+)";

static PATTERNS: Lazy<PatternSet> = Lazy::new(|| {
    PatternSet::new(VARIABLE_PATTERN, FUNCTION_PATTERN, CLASS_PATTERN)
        .expect("python patterns are valid regular expressions")
});

/// Extract variable, function and class declarations from Python code.
#[must_use]
pub fn extract(code: &str) -> Vec<Identifier> {
    PATTERNS.extract(code, TAG)
}
