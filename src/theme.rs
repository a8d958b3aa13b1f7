//! Everything a builder needs besides coordinates: fonts and branding.

use crate::config::{BrandingConfig, Config};
use crate::draw::FontResolver;

/// Resolved settings shared by all diagram builders and post composers.
#[derive(Debug, Clone)]
pub struct Theme {
    pub fonts: FontResolver,
    pub branding: BrandingConfig,
}

impl Theme {
    pub fn from_config(config: &Config) -> Self {
        Self {
            fonts: config.font_resolver(),
            branding: config.branding.clone(),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}
