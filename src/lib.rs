//! Diagram and social post image generation for qubes-claw.
//!
//! The library holds the drawing primitives, the three architecture diagrams
//! and the three post composers; the `generate-diagrams` and
//! `generate-posts` binaries are thin wrappers around [`diagrams`] and
//! [`posts`].

pub mod assets;
pub mod config;
pub mod diagrams;
pub mod draw;
pub mod error;
pub mod posts;
pub mod theme;
pub mod util;

pub use config::Config;
pub use error::RenderError;
pub use theme::Theme;
