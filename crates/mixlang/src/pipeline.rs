//! The split-then-extract pipeline.
//!
//! ```text
//! file ──► splitter ──► Vec<Section> (language + code)
//!                            │
//!                            ▼
//!                      dispatcher ──► identifiers filled in per section
//! ```
//!
//! Extraction cannot fail, so the only error a pipeline run produces is the
//! I/O error from opening or reading the input.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use rayon::prelude::*;
use tracing::info;

use crate::config::Config;
use crate::error::Result;
use crate::registry::Dispatcher;
use crate::splitter;
use crate::types::Section;

/// Parse a mix file with the built-in extractors.
///
/// # Errors
///
/// Returns [`Error::Io`](crate::Error::Io) if the file cannot be opened or read.
pub fn parse_file(path: impl AsRef<Path>) -> Result<Vec<Section>> {
    Pipeline::default().parse_file(path.as_ref())
}

/// Tags used by `sections` that `dispatcher` has no extractor for.
///
/// Each tag is reported once, in order of first appearance.
#[must_use]
pub fn unsupported_languages(sections: &[Section], dispatcher: &Dispatcher) -> Vec<String> {
    let mut unsupported: Vec<String> = Vec::new();
    for section in sections {
        if !dispatcher.supports(&section.language)
            && !unsupported.iter().any(|tag| *tag == section.language)
        {
            unsupported.push(section.language.clone());
        }
    }
    unsupported
}

/// Splits input into sections and runs identifier extraction over them.
#[derive(Debug, Clone, Default)]
pub struct Pipeline {
    dispatcher: Dispatcher,
    parallel: bool,
}

impl Pipeline {
    /// Create a sequential pipeline around `dispatcher`.
    #[must_use]
    pub fn new(dispatcher: Dispatcher) -> Self {
        Self {
            dispatcher,
            parallel: false,
        }
    }

    /// Build a pipeline from configuration.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self::new(Dispatcher::new(config.registry())).with_parallel(config.parallel)
    }

    /// Extract sections on the rayon thread pool instead of sequentially.
    ///
    /// Output is identical either way.
    #[must_use]
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// The dispatcher used for extraction.
    #[must_use]
    pub fn dispatcher(&self) -> &Dispatcher {
        &self.dispatcher
    }

    /// Open, split and extract the file at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`](crate::Error::Io) if the file cannot be opened
    /// or read. No partial results are returned.
    pub fn parse_file(&self, path: &Path) -> Result<Vec<Section>> {
        info!(path = %path.display(), "Parsing mix file");

        let file = File::open(path)?;
        let sections = self.parse_reader(BufReader::new(file))?;

        info!(
            sections = sections.len(),
            identifiers = sections.iter().map(|s| s.identifiers.len()).sum::<usize>(),
            "Parsed mix file"
        );
        Ok(sections)
    }

    /// Split and extract everything readable from `reader`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`](crate::Error::Io) if reading fails.
    pub fn parse_reader<R: BufRead>(&self, reader: R) -> Result<Vec<Section>> {
        let mut sections = splitter::split_reader(reader)?;
        self.extract(&mut sections);
        Ok(sections)
    }

    /// Split and extract in-memory text.
    #[must_use]
    pub fn parse_str(&self, input: &str) -> Vec<Section> {
        let mut sections = splitter::split_str(input);
        self.extract(&mut sections);
        sections
    }

    /// Replace each section's identifiers with the dispatcher's output for it.
    pub fn extract(&self, sections: &mut [Section]) {
        let fill = |section: &mut Section| {
            section.identifiers = self.dispatcher.dispatch(&section.language, &section.code);
        };

        if self.parallel {
            sections.par_iter_mut().for_each(fill);
        } else {
            sections.iter_mut().for_each(fill);
        }
    }
}
