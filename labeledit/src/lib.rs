//! Labeledit - Interactive label image editing for Rust
//!
//! An engine for editing *label images*: 2D or 3D grids in which every cell
//! holds an integer identifying the region it belongs to, with 0 reserved
//! for background. Two edit primitives are provided:
//!
//! - **Merge**: collapse a selected set of labels into one
//! - **Label-aware morphology**: dilate or erode all labels simultaneously
//!   while keeping them mutually exclusive
//!
//! Edits are driven through a [`session::Session`], which serializes
//! commands on a single worker thread so concurrent callers can never
//! interleave mutations.
//!
//! # Example
//!
//! ```
//! use labeledit::{LabelGrid, labels_at_points};
//! use labeledit::session::{EditCommand, Session};
//!
//! let source = LabelGrid::from_rows(&[
//!     &[1, 1, 0],
//!     &[1, 0, 2],
//!     &[0, 2, 2],
//! ]).unwrap();
//!
//! let mut session = Session::open(source.clone());
//!
//! // Merge the labels picked at two points into one region.
//! let picked = labels_at_points(&source, &[(0, 0, 0), (2, 2, 0)]);
//! session
//!     .submit(EditCommand::Merge { target: 1, sources: picked })
//!     .unwrap()
//!     .wait()
//!     .unwrap();
//!
//! let edited = session.close().unwrap();
//! assert_eq!(edited.labels(), vec![1]);
//! ```

// Re-export core types (primary data structures used everywhere)
pub use labeledit_core::*;

// Re-export domain crates as modules to avoid name conflicts
pub use labeledit_morph as morph;
pub use labeledit_session as session;
