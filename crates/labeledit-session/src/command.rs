//! Edit commands
//!
//! A command is created by the presentation layer, enqueued on the session,
//! and consumed exactly once by the worker.

use labeledit_core::Selection;
use labeledit_morph::Strel;

/// One edit request against the session's label grid
#[derive(Debug, Clone)]
pub enum EditCommand {
    /// Rewrite all occurrences of `sources` to `target`
    Merge {
        /// The surviving label id
        target: u32,
        /// The label ids to fold into `target`
        sources: Selection,
    },
    /// Grow every label into adjacent background
    Dilate(Strel),
    /// Shrink every label at its boundary
    Erode(Strel),
}
