//! # Mixlang: Mixed-Language Source Splitting
//!
//! Mixlang reads a "mix file", a single text file that embeds several code
//! blocks, each introduced by a `[tag]` line, and returns those blocks as
//! [`Section`]s together with a best-effort list of the variables, functions
//! and classes each block declares.
//!
//! ## Design Philosophy
//!
//! - **Heuristic, not a parser** - Declarations are found with per-language
//!   regular expressions; there is no AST, scoping or name resolution
//! - **Permissive input** - Missing markers, unknown tags and empty blocks are
//!   valid input that yields empty collections; only I/O can fail
//! - **Explicit registry** - Supported languages are a [`Registry`] value
//!   injected into a [`Dispatcher`], not global state
//! - **Library first** - The `mixlang` binary is a thin renderer over
//!   [`parse_file`]
//!
//! ## Quick Start
//!
//! ```no_run
//! use mixlang::IdentifierKind;
//!
//! let sections = mixlang::parse_file("program.mix")?;
//!
//! for section in &sections {
//!     println!("[{}] {} lines", section.language, section.line_count());
//!     for function in section.identifiers_of(IdentifierKind::Function) {
//!         println!("  fn {}", function.name);
//!     }
//! }
//! # Ok::<(), mixlang::Error>(())
//! ```
//!
//! ## Supported Languages
//!
//! | Tag  | Variables                 | Functions  | Classes |
//! |------|---------------------------|------------|---------|
//! | `js` | `var`/`let`/`const` name  | `function` | `class` |
//! | `py` | any `name =` assignment   | `def`      | `class` |

mod config;
mod error;
pub mod languages;
mod pipeline;
mod registry;
pub mod splitter;
mod types;

pub use config::{CONFIG_FILE_NAME, Config};
pub use error::{Error, Result};
pub use pipeline::{Pipeline, parse_file, unsupported_languages};
pub use registry::{Dispatcher, Extractor, Registry};
pub use splitter::{SectionSplitter, split_reader, split_str};
pub use types::{Identifier, IdentifierKind, Section};
