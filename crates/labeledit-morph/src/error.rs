//! Error types for labeledit-morph

use thiserror::Error;

/// Errors that can occur during morphological and merge operations
#[derive(Debug, Error)]
pub enum MorphError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] labeledit_core::Error),

    /// Negative structuring element radius
    ///
    /// A negative radius is a precondition violation by the caller, reported
    /// rather than silently clamped.
    #[error("negative structuring element radius: {0}")]
    NegativeRadius(i32),

    /// A merge addressed background instead of a label
    #[error("merge requires positive label ids: {0}")]
    BackgroundMerge(&'static str),
}

/// Result type for morphological operations
pub type MorphResult<T> = Result<T, MorphError>;
