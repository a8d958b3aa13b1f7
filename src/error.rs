//! Error type shared by the diagram and post renderers.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort rendering of a diagram or post.
///
/// Missing optional inputs are not errors; they are substituted before
/// anything here can be produced.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Cairo error: {0}")]
    Cairo(#[from] cairo::Error),

    #[error("Failed to decode image {}: {source}", path.display())]
    ImageDecode {
        path: PathBuf,
        source: cairo::IoError,
    },

    #[error("Failed to encode PNG {}: {source}", path.display())]
    ImageEncode {
        path: PathBuf,
        source: cairo::IoError,
    },

    #[error("File error at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl RenderError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
