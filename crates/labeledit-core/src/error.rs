//! Error types for labeledit-core
//!
//! Provides a unified error type for all operations in the core crate.
//! Each variant captures enough context for diagnostics without exposing
//! internal implementation details.

use thiserror::Error;

/// labeledit-core error type
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid grid dimensions
    #[error("invalid grid dimensions: {width}x{height}x{depth}")]
    InvalidDimension { width: u32, height: u32, depth: u32 },

    /// Cell data does not match the declared dimensions
    #[error("data size mismatch: expected {expected} cells, got {actual}")]
    DataSizeMismatch { expected: usize, actual: usize },

    /// Source data contains a negative cell value
    #[error("negative label value {value} at cell index {index}")]
    NegativeLabel { index: usize, value: i64 },

    /// Cell coordinates outside the grid
    #[error("cell ({x}, {y}, {z}) out of bounds for {width}x{height}x{depth} grid")]
    OutOfBounds {
        x: u32,
        y: u32,
        z: u32,
        width: u32,
        height: u32,
        depth: u32,
    },

    /// Invalid parameter value
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}

/// Result type alias for core operations
pub type Result<T> = std::result::Result<T, Error>;
