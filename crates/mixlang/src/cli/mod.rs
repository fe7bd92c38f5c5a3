//! CLI command implementations.

mod render;

pub mod parse;

use clap::ValueEnum;

/// How parsed sections are written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// `Language:` / `Code:` blocks
    #[default]
    Text,
    /// Pretty-printed JSON array of sections
    Json,
}
