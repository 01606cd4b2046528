//! Error types for shape generation, card construction and output.

use crate::ShapeKind;

/// Everything that can go wrong while building or writing a scene.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A size with a negative or non-finite edge.
    #[error("invalid size {width}x{height}")]
    InvalidSize { width: f32, height: f32 },

    /// A size that is valid but outside what the requested shape can draw:
    /// too small for the margin or an edge the patterns cannot sample.
    #[error("{width}x{height} is out of range for {kind:?}")]
    DegenerateSize {
        kind: ShapeKind,
        width: f32,
        height: f32,
    },

    /// Writing output failed.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// A style file could not be parsed.
    #[error("malformed style: {0}")]
    Style(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
