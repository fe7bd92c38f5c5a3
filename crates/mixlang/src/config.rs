//! Configuration loading for mixlang.
//!
//! Configuration is optional. When present it lives in a YAML file
//! (`mixlang.yaml` by default) and narrows or tunes the pipeline:
//!
//! ```yaml
//! languages: [js, py]     # enabled extractors; omit for all built-ins
//! show-identifiers: true  # render identifiers after each section
//! parallel: false         # extract sections on the rayon thread pool
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};
use crate::registry::Registry;

/// Name of the configuration file looked up by [`Config::discover`].
pub const CONFIG_FILE_NAME: &str = "mixlang.yaml";

/// Pipeline and output settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, rename_all = "kebab-case")]
pub struct Config {
    /// Language tags to enable. `None` enables every built-in extractor.
    pub languages: Option<Vec<String>>,

    /// Render each section's identifiers after its code
    pub show_identifiers: bool,

    /// Run extraction across sections in parallel
    pub parallel: bool,
}

impl Config {
    /// Load configuration from a YAML file.
    ///
    /// An empty file yields the default configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the file cannot be read and [`Error::Config`]
    /// if it is not valid configuration YAML.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(&content)
            .map_err(|e| Error::Config(format!("{}: {e}", path.display())))
    }

    /// Load `mixlang.yaml` from `dir` if it exists, otherwise use defaults.
    ///
    /// # Errors
    ///
    /// Same as [`Config::load`] when the file exists.
    pub fn discover(dir: &Path) -> Result<Self> {
        let path = dir.join(CONFIG_FILE_NAME);
        if path.is_file() {
            debug!(path = %path.display(), "Loading configuration");
            Self::load(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Built-in registry narrowed to the enabled languages.
    #[must_use]
    pub fn registry(&self) -> Registry {
        let mut registry = Registry::builtin();
        if let Some(enabled) = &self.languages {
            registry.retain_languages(enabled);
        }
        registry
    }
}
