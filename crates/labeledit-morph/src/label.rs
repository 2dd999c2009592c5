//! Label-aware morphology
//!
//! Grows (dilation) or shrinks (erosion) every label in a grid
//! simultaneously in one coherent pass, keeping all labels pairwise
//! disjoint. This differs from applying binary morphology label by label,
//! which would let two growth fronts race for the same background cell and
//! silently fuse regions.
//!
//! Both passes read only a snapshot of the input grid and write a fresh
//! output, so a decision for one cell never observes a decision made for
//! another cell in the same pass. That independence is what makes the
//! result deterministic and order-free.

use crate::strel::Strel;
use labeledit_core::LabelGrid;

/// Dilate every label into adjacent background simultaneously.
///
/// For each background cell, the neighborhood given by `strel` is examined
/// on the input grid:
///
/// - no labeled neighbor: the cell stays background
/// - one distinct labeled neighbor: the cell takes that label
/// - two or more distinct labels (a contested cell, where growth fronts
///   meet): the **lowest label id wins**. The rule is a pure function of
///   the neighbor label set, so the result is independent of scan and
///   offset order and identical across repeated runs.
///
/// Cells already holding a label are never altered: labels only grow into
/// background, never into each other.
pub fn dilate(grid: &LabelGrid, strel: &Strel) -> LabelGrid {
    let (w, h, d) = (grid.width(), grid.height(), grid.depth());
    let mut out = grid.to_mut();

    for z in 0..d {
        for y in 0..h {
            for x in 0..w {
                if grid.get_unchecked(x, y, z) != 0 {
                    continue;
                }
                let mut winner = 0u32;
                for &(dx, dy, dz) in strel.offsets() {
                    let value = neighbor(grid, x, y, z, dx, dy, dz);
                    if value != 0 && (winner == 0 || value < winner) {
                        winner = value;
                    }
                }
                if winner != 0 {
                    out.set_unchecked(x, y, z, winner);
                }
            }
        }
    }

    out.into()
}

/// Erode every label simultaneously.
///
/// A cell with label `L` survives only if every neighborhood cell also
/// holds `L`. A neighbor holding background, a different label, or lying
/// outside the grid (outside counts as background) erodes the cell to 0.
/// Background cells are never altered.
pub fn erode(grid: &LabelGrid, strel: &Strel) -> LabelGrid {
    let (w, h, d) = (grid.width(), grid.height(), grid.depth());
    let mut out = grid.to_mut();

    for z in 0..d {
        for y in 0..h {
            for x in 0..w {
                let label = grid.get_unchecked(x, y, z);
                if label == 0 {
                    continue;
                }
                for &(dx, dy, dz) in strel.offsets() {
                    if neighbor(grid, x, y, z, dx, dy, dz) != label {
                        out.set_unchecked(x, y, z, 0);
                        break;
                    }
                }
            }
        }
    }

    out.into()
}

/// Morphological opening: erosion followed by dilation with the same
/// structuring element.
pub fn open(grid: &LabelGrid, strel: &Strel) -> LabelGrid {
    dilate(&erode(grid, strel), strel)
}

/// Morphological closing: dilation followed by erosion with the same
/// structuring element.
pub fn close(grid: &LabelGrid, strel: &Strel) -> LabelGrid {
    erode(&dilate(grid, strel), strel)
}

/// Read a neighbor cell from the input snapshot.
///
/// Cells outside the grid read as background.
#[inline]
fn neighbor(grid: &LabelGrid, x: u32, y: u32, z: u32, dx: i32, dy: i32, dz: i32) -> u32 {
    let nx = i64::from(x) + i64::from(dx);
    let ny = i64::from(y) + i64::from(dy);
    let nz = i64::from(z) + i64::from(dz);
    if nx < 0
        || ny < 0
        || nz < 0
        || nx >= i64::from(grid.width())
        || ny >= i64::from(grid.height())
        || nz >= i64::from(grid.depth())
    {
        return 0;
    }
    grid.get_unchecked(nx as u32, ny as u32, nz as u32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strel::StrelShape;

    fn square(radius: i32) -> Strel {
        Strel::from_radius(StrelShape::Square, radius).unwrap()
    }

    #[test]
    fn test_dilate_single_label() {
        let grid = LabelGrid::from_rows(&[
            &[0, 0, 0], //
            &[0, 7, 0],
            &[0, 0, 0],
        ])
        .unwrap();
        let dilated = dilate(&grid, &square(1));
        assert!(dilated.data().iter().all(|&c| c == 7));
    }

    #[test]
    fn test_dilate_radius_zero_is_identity() {
        let grid = LabelGrid::from_rows(&[&[1, 0, 0], &[0, 0, 0], &[0, 0, 2]]).unwrap();
        let dilated = dilate(&grid, &square(0));
        assert!(dilated.same_content(&grid));
    }

    #[test]
    fn test_erode_does_not_touch_background() {
        let grid = LabelGrid::from_rows(&[&[0, 0], &[0, 3]]).unwrap();
        let eroded = erode(&grid, &square(1));
        assert_eq!(eroded.count_label(0), 4);
    }

    #[test]
    fn test_neighbor_outside_is_background() {
        let grid = LabelGrid::from_rows(&[&[5]]).unwrap();
        assert_eq!(neighbor(&grid, 0, 0, 0, -1, 0, 0), 0);
        assert_eq!(neighbor(&grid, 0, 0, 0, 0, 1, 0), 0);
        assert_eq!(neighbor(&grid, 0, 0, 0, 0, 0, 1), 0);
    }
}
