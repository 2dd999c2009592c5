//! labeledit-morph - Label-aware morphological operations
//!
//! This crate provides the edit primitives of the labeledit workspace:
//!
//! - Structuring elements ([`Strel`]) defining operation neighborhoods
//! - Label morphology: dilation and erosion of all labels in one pass,
//!   keeping labels mutually exclusive, plus opening/closing compositions
//! - The merge engine: relabeling a selected set of labels to one id
//!
//! All operations work on `labeledit_core::LabelGrid` values; the
//! morphological passes return a fresh grid computed from a snapshot of the
//! input, the merge engine mutates a `LabelGridMut` in place.

mod error;
pub mod label;
pub mod merge;
pub mod strel;

pub use error::{MorphError, MorphResult};
pub use strel::{Strel, StrelShape};

// Re-export the operation entry points
pub use label::{close, dilate, erode, open};
pub use merge::{merge, merge_selection};
