//! labeledit-test - Regression test support for the labeledit workspace
//!
//! Provides a regression test tracker in the spirit of classic image
//! library regression harnesses plus fixture builders for label grids.
//! All fixtures are built in code; the workspace has no image I/O.
//!
//! # Usage
//!
//! ```
//! use labeledit_test::{RegParams, grid_2d};
//!
//! let mut rp = RegParams::new("example");
//! let grid = grid_2d(&[&[1, 0], &[0, 2]]);
//! rp.compare_values(1, grid.count_label(1) as i64);
//! assert!(rp.cleanup());
//! ```
//!
//! # Environment variables
//!
//! - `REGTEST_MODE`: set to "display" to report failures without failing

mod params;

pub use params::{RegParams, RegTestMode};

use labeledit_core::LabelGrid;

/// Build a 2D label grid from row slices.
///
/// # Panics
///
/// Panics on empty or ragged input. Test fixtures are expected to be
/// well-formed.
pub fn grid_2d(rows: &[&[u32]]) -> LabelGrid {
    LabelGrid::from_rows(rows).expect("well-formed 2D fixture")
}

/// Build a 3D label grid from slice-of-rows data, front slice first.
///
/// # Panics
///
/// Panics on empty or ragged input.
pub fn grid_3d(slices: &[&[&[u32]]]) -> LabelGrid {
    let depth = slices.len() as u32;
    let height = slices.first().map_or(0, |s| s.len() as u32);
    let width = slices
        .first()
        .and_then(|s| s.first())
        .map_or(0, |r| r.len() as u32);

    let mut data = Vec::new();
    for slice in slices {
        assert_eq!(slice.len() as u32, height, "ragged 3D fixture");
        for row in *slice {
            assert_eq!(row.len() as u32, width, "ragged 3D fixture");
            data.extend_from_slice(row);
        }
    }
    LabelGrid::from_vec(width, height, depth, data).expect("well-formed 3D fixture")
}

/// Build a grid with a single labeled cell at the center, background
/// elsewhere. Handy as a dilation seed.
pub fn centered_seed(width: u32, height: u32, depth: u32, label: u32) -> LabelGrid {
    let grid = LabelGrid::new(width, height, depth).expect("non-zero fixture dimensions");
    let mut grid_mut = grid.to_mut();
    grid_mut
        .set(width / 2, height / 2, depth / 2, label)
        .expect("center is in bounds");
    grid_mut.into()
}
