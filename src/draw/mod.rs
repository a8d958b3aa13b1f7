//! Rendering primitives for the diagram and post images (Cairo + Pango).
//!
//! This module defines the drawing building blocks:
//! - [`Color`]: RGBA color with the shared dark-theme palette
//! - [`FontResolver`]: maps logical text styles to installed fonts
//! - [`Canvas`]: a fixed-size RGB surface that can be saved as PNG
//! - Drawing functions for boxes, badges, arrows and text

pub mod canvas;
pub mod color;
pub mod font;
pub mod render;

// Re-export commonly used types at module level
pub use canvas::{Canvas, HEIGHT, WIDTH};
pub use color::Color;
pub use font::{FontCandidate, FontResolver, FontStyle, ResolvedFont};
pub use render::{BadgeStyle, TextExtents};

pub use color::{
    ACCENT, BAR_BG, BG, BLUE, BORDER, CARD_BG, FG, FOOTER_BG, GREEN, ORANGE, PANEL_BG, PURPLE, RED,
    SOFT, TERMINAL_BG, WHITE,
};
