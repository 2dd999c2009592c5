//! Region selection
//!
//! Converts a user selection - point picks or an enclosed area - into the
//! concrete set of label ids it touches. The presentation layer owns the
//! picking gesture; this module owns the mapping from picked coordinates to
//! labels, whose output feeds the merge engine.

use crate::grid::LabelGrid;
use std::collections::BTreeSet;

/// A set of selected label ids.
///
/// Background (0) is never part of a selection. The ordered set makes
/// selection iteration deterministic, which downstream consumers (merge
/// target choice) rely on.
pub type Selection = BTreeSet<u32>;

/// An axis-aligned selection box, clipped against the grid on use.
///
/// For 2D grids use [`Region::new_2d`], which fixes `z = 0, depth = 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    /// Left edge
    pub x: u32,
    /// Top edge
    pub y: u32,
    /// Front slice
    pub z: u32,
    /// Extent along x
    pub width: u32,
    /// Extent along y
    pub height: u32,
    /// Extent along z
    pub depth: u32,
}

impl Region {
    /// Create a new 3D region.
    pub fn new(x: u32, y: u32, z: u32, width: u32, height: u32, depth: u32) -> Self {
        Region {
            x,
            y,
            z,
            width,
            height,
            depth,
        }
    }

    /// Create a single-slice region for 2D grids.
    pub fn new_2d(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self::new(x, y, 0, width, height, 1)
    }

    /// Clip this region against the grid, returning half-open coordinate
    /// ranges. Empty ranges mean the region lies entirely outside.
    fn clip(
        &self,
        grid: &LabelGrid,
    ) -> (
        std::ops::Range<u32>,
        std::ops::Range<u32>,
        std::ops::Range<u32>,
    ) {
        let x_end = self.x.saturating_add(self.width).min(grid.width());
        let y_end = self.y.saturating_add(self.height).min(grid.height());
        let z_end = self.z.saturating_add(self.depth).min(grid.depth());
        (self.x..x_end, self.y..y_end, self.z..z_end)
    }
}

/// Collect the labels under a set of point picks.
///
/// Picks on background cells and picks outside the grid contribute nothing.
/// For 2D grids pass `z = 0` in each pick.
pub fn labels_at_points(grid: &LabelGrid, points: &[(u32, u32, u32)]) -> Selection {
    let mut selection = Selection::new();
    for &(x, y, z) in points {
        if let Some(label) = grid.get(x, y, z) {
            if label != 0 {
                selection.insert(label);
            }
        }
    }
    selection
}

/// Collect the distinct labels inside an enclosed region.
///
/// The region is clipped to the grid; background is never selected.
pub fn labels_in_region(grid: &LabelGrid, region: &Region) -> Selection {
    let mut selection = Selection::new();
    let (xs, ys, zs) = region.clip(grid);
    for z in zs {
        for y in ys.clone() {
            for x in xs.clone() {
                let label = grid.get_unchecked(x, y, z);
                if label != 0 {
                    selection.insert(label);
                }
            }
        }
    }
    selection
}
