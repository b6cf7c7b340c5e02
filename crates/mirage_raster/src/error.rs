//! # Rasterizer Error Types
//!
//! Precondition violations at the buffer boundary. The frame path itself
//! never fails: once the views are built and the width checked, every call
//! runs to completion.

use thiserror::Error;

/// Errors that can occur constructing buffer views or starting a render.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RasterError {
    /// Destination width of zero would divide the scanline interpolation
    /// by zero.
    #[error("destination width must be non-zero")]
    ZeroDestinationWidth,

    /// A texture dimension of zero would wrap texel indices modulo zero.
    #[error("texture dimensions must be non-zero, got {width}x{height}")]
    EmptyTexture {
        /// Texture width in texels.
        width: usize,
        /// Texture height in texels.
        height: usize,
    },

    /// Buffer length disagrees with the declared RGBA dimensions.
    #[error("buffer length {len} does not match {width}x{height} RGBA")]
    BufferSizeMismatch {
        /// Actual slice length in bytes.
        len: usize,
        /// Declared width in pixels.
        width: usize,
        /// Declared height in pixels.
        height: usize,
    },
}

/// Result type for rasterizer operations.
pub type RasterResult<T> = Result<T, RasterError>;
