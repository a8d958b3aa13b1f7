//! Configuration file support for qubes-claw-media.
//!
//! Settings are read from `~/.config/qubes-claw-media/config.toml`, or from a
//! path given on the command line. They cover the font candidate list and the
//! branding strings stamped on every image.
//!
//! If no config file exists, the built-in defaults are used.

pub mod types;

// Re-export commonly used types at module level
pub use types::{BrandingConfig, FontConfig};

use crate::draw::FontResolver;
use anyhow::{Context, Result};
use log::{debug, info, warn};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Directory name under the user's config directory
const CONFIG_DIR_NAME: &str = "qubes-claw-media";

/// Main configuration structure.
///
/// # Example TOML
/// ```toml
/// [fonts]
/// default_family = "Monospace"
/// candidates = [
///   { path = "/usr/share/fonts/fira-code/FiraCode-Regular.ttf" },
///   { path = "/usr/share/fonts/redhat/RedHatDisplay-Bold.otf" },
/// ]
///
/// [branding]
/// product = "qubes-claw"
/// repository = "github.com/GabrieleRisso/qubes-claw"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, JsonSchema)]
pub struct Config {
    /// Font candidates and fallback family
    #[serde(default)]
    pub fonts: FontConfig,

    /// Product strings for headers, footers and watermarks
    #[serde(default)]
    pub branding: BrandingConfig,
}

impl Config {
    /// Replaces unusable values with defaults, logging a warning for each.
    fn validate(&mut self) {
        self.fonts.candidates.retain(|candidate| {
            let keep = !candidate.path.as_os_str().is_empty();
            if !keep {
                warn!("Ignoring font candidate with an empty path");
            }
            keep
        });

        if self.fonts.candidates.is_empty() {
            warn!("Font candidate list is empty, using built-in candidates");
            self.fonts.candidates = FontConfig::default().candidates;
        }

        if self.fonts.default_family.trim().is_empty() {
            warn!("Empty default font family, falling back to 'Monospace'");
            self.fonts.default_family = FontConfig::default().default_family;
        }
    }

    /// Returns the path to the default configuration file.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined (e.g., HOME not set).
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not find config directory")?
            .join(CONFIG_DIR_NAME);

        Ok(config_dir.join("config.toml"))
    }

    /// Loads configuration from `path`, or from the default location when
    /// `path` is `None`.
    ///
    /// A missing file at the default location yields defaults. A missing file
    /// that was named explicitly is an error.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config_path = match path {
            Some(path) => path.to_path_buf(),
            None => {
                let default_path = match Self::get_config_path() {
                    Ok(p) => p,
                    Err(e) => {
                        debug!("{e:#}; using default config");
                        return Ok(Self::default());
                    }
                };
                if !default_path.exists() {
                    info!("Config file not found, using defaults");
                    debug!("Expected config at: {}", default_path.display());
                    return Ok(Self::default());
                }
                default_path
            }
        };

        Self::load_from(&config_path)
    }

    /// Reads and validates a config file.
    pub fn load_from(config_path: &Path) -> Result<Self> {
        let config_str = fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config from {}", config_path.display()))?;

        let mut config: Config = toml::from_str(&config_str)
            .with_context(|| format!("Failed to parse config from {}", config_path.display()))?;

        config.validate();

        info!("Loaded config from {}", config_path.display());
        debug!("Config: {:?}", config);

        Ok(config)
    }

    /// Builds the font resolver described by the `[fonts]` section.
    pub fn font_resolver(&self) -> FontResolver {
        FontResolver::new(self.fonts.candidates.clone(), &self.fonts.default_family)
    }

    /// JSON schema describing the config file.
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Config)
    }
}
