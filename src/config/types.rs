//! Configuration type definitions.

use crate::draw::font::{self, FontCandidate};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Font lookup settings.
///
/// The candidate order matters: text styles pick their preferred entry by
/// index (code, text, bold, code-bold, mono) and fall back to the first entry
/// that loads.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct FontConfig {
    /// Ordered font files; each file's first face names the Pango family and weight
    #[serde(default = "default_candidates")]
    pub candidates: Vec<FontCandidate>,

    /// Generic family used when no candidate file is available
    #[serde(default = "default_family")]
    pub default_family: String,
}

impl Default for FontConfig {
    fn default() -> Self {
        Self {
            candidates: default_candidates(),
            default_family: default_family(),
        }
    }
}

/// Product strings used in headers, footers and watermarks.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct BrandingConfig {
    /// Product name shown in footers and post headers
    #[serde(default = "default_product")]
    pub product: String,

    /// Short line shown next to the product name on posts
    #[serde(default = "default_subtitle")]
    pub subtitle: String,

    /// Repository URL (without scheme) used as the watermark
    #[serde(default = "default_repository")]
    pub repository: String,
}

impl Default for BrandingConfig {
    fn default() -> Self {
        Self {
            product: default_product(),
            subtitle: default_subtitle(),
            repository: default_repository(),
        }
    }
}

fn default_candidates() -> Vec<FontCandidate> {
    font::default_candidates()
}

fn default_family() -> String {
    "Monospace".to_string()
}

fn default_product() -> String {
    "qubes-claw".to_string()
}

fn default_subtitle() -> String {
    "AI agents on Qubes OS".to_string()
}

fn default_repository() -> String {
    "github.com/GabrieleRisso/qubes-claw".to_string()
}
