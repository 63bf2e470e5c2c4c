//! Site configuration management for `rti.toml`.
//!
//! # Sections
//!
//! | Section       | Purpose                                        |
//! |---------------|------------------------------------------------|
//! | `[base]`      | Site identity (title, url)                     |
//! | `[documents]` | Document link prefix, inference fallback state |
//! | `[export]`    | JSON data output for the page renderer         |
//!
//! Every section is optional; a project without `rti.toml` runs on defaults.
//!
//! # Example
//!
//! ```toml
//! [base]
//! title = "FileMyRTI"
//! url = "https://filemyrti.com"
//!
//! [documents]
//! base_url = "/assets/PDF"
//! default_state = "tamil-nadu"
//!
//! [export]
//! output = "public/_data"
//! pretty = true
//! ```

mod base;
mod defaults;
mod documents;
mod error;
mod export;

use base::BaseConfig;
use documents::DocumentsConfig;
use export::ExportConfig;

pub use error::ConfigError;

use crate::catalog::STATE_CATALOG;
use crate::cli::{Cli, Commands};
use crate::resolver::known_states;
use anyhow::{Result, bail};
use educe::Educe;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Config file looked up in the project root when `-C` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "rti.toml";

// ============================================================================
// Root Configuration
// ============================================================================

/// Root configuration structure representing rti.toml
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct SiteConfig {
    /// Absolute path to the config file (set after loading)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Project root (set after loading)
    #[serde(skip, default = "defaults::root")]
    #[educe(Default = defaults::root())]
    pub root: PathBuf,

    /// Site identity
    #[serde(default)]
    pub base: BaseConfig,

    /// Document links and inference fallback
    #[serde(default)]
    pub documents: DocumentsConfig,

    /// Data export settings
    #[serde(default)]
    pub export: ExportConfig,
}

impl SiteConfig {
    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self> {
        let config: SiteConfig = toml::from_str(content)?;
        Ok(config)
    }

    /// Load configuration from file path
    pub fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;
        let mut config = Self::from_str(&content)?;
        config.config_path = path.to_path_buf();
        Ok(config)
    }

    /// Load and validate configuration for a CLI invocation.
    ///
    /// A config file named with `-C` must exist; the default `rti.toml` is
    /// optional.
    pub fn load(cli: &Cli) -> Result<Self> {
        let root = cli.root.as_deref().unwrap_or(Path::new("./"));
        let explicit = cli.config.is_some();
        let default_file = Path::new(DEFAULT_CONFIG_FILE);
        let config_path = root.join(cli.config.as_deref().unwrap_or(default_file));

        let mut config = if config_path.exists() {
            Self::from_path(&config_path)?
        } else if explicit {
            bail!(ConfigError::NotFound(config_path));
        } else {
            Self::default()
        };

        config.root = root.to_path_buf();
        config.update_with_cli(cli);
        config.validate()?;
        Ok(config)
    }

    /// Update configuration with CLI arguments
    pub fn update_with_cli(&mut self, cli: &Cli) {
        match &cli.command {
            Commands::Export {
                output,
                pretty,
                base_url,
            } => {
                Self::update_option(&mut self.export.output, output.as_ref());
                Self::update_option(&mut self.export.pretty, pretty.as_ref());
                Self::update_option(&mut self.documents.base_url, base_url.as_ref());
            }
            Commands::Resolve { default_state, .. } => {
                Self::update_option(&mut self.documents.default_state, default_state.as_ref());
            }
            _ => {}
        }

        self.documents.default_state = self.documents.default_state.to_lowercase();
        self.export.output = self.root.join(&self.export.output);
    }

    /// Update config option if CLI value is provided
    fn update_option<T: Clone>(config_option: &mut T, cli_option: Option<&T>) {
        if let Some(option) = cli_option {
            *config_option = option.clone();
        }
    }

    /// Prefix for document links.
    ///
    /// A root-relative `[documents.base_url]` is joined onto `[base.url]`
    /// when the site URL is set; any other base is used as given.
    pub fn documents_base(&self) -> String {
        let base_url = self.documents.base_url.as_str();
        match self.base.url.as_deref() {
            Some(site) if base_url.starts_with('/') => {
                format!("{}{base_url}", site.trim_end_matches('/'))
            }
            _ => base_url.to_owned(),
        }
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        let url = self.base.url.as_deref();
        if url.is_some_and(|url| !url.starts_with("http")) {
            let message = "[base.url] must start with http:// or https://";
            bail!(ConfigError::Validation(message.into()));
        }

        let state = self.documents.default_state.as_str();
        if !STATE_CATALOG.contains(state) && !known_states().any(|known| known == state) {
            let message = format!("[documents.default_state] `{state}` is not a known state");
            bail!(ConfigError::Validation(message));
        }

        if self.export.output.as_os_str().is_empty() {
            let message = "[export.output] must not be empty";
            bail!(ConfigError::Validation(message.into()));
        }

        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================
