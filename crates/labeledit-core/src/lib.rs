//! labeledit-core - Core data structures for label image editing
//!
//! This crate provides the data model shared by the labeledit workspace:
//!
//! - [`LabelGrid`] / [`LabelGridMut`] - the 2D/3D label image under edit,
//!   with an immutable shared form for snapshots and an exclusively owned
//!   mutable form for edits
//! - [`Region`] and the selection functions - mapping point and area picks
//!   to the set of label ids they touch
//! - [`Error`] - the core error type
//!
//! The edit operations themselves (merge, dilation, erosion) live in
//! `labeledit-morph`; the serialized edit session lives in
//! `labeledit-session`.

mod error;
pub mod grid;
pub mod select;

pub use error::{Error, Result};
pub use grid::{LabelGrid, LabelGridMut};
pub use select::{Region, Selection, labels_at_points, labels_in_region};
