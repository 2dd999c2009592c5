//! The merge engine
//!
//! Merging is purely a relabeling operation: every cell holding one of the
//! source ids is rewritten to the target id in a single full-grid scan.
//! Spatial adjacency of the merged regions is deliberately not required -
//! the selection geometry already expressed the user's intent.

use crate::error::{MorphError, MorphResult};
use labeledit_core::{LabelGridMut, Selection};

/// Rewrite all occurrences of the source labels to the target label.
///
/// The operation is idempotent per cell and the cell visiting order is
/// irrelevant. `target` need not already be present in the grid. An empty
/// `sources` set, or one containing only `target`, leaves the grid
/// unchanged.
///
/// # Errors
///
/// Returns [`MorphError::BackgroundMerge`] if `target` is 0 or `sources`
/// contains 0: background is not a label, and relabeling into it would
/// silently delete regions.
pub fn merge(grid: &mut LabelGridMut, target: u32, sources: &Selection) -> MorphResult<()> {
    if target == 0 {
        return Err(MorphError::BackgroundMerge(
            "target must be a positive label id",
        ));
    }
    if sources.contains(&0) {
        return Err(MorphError::BackgroundMerge(
            "sources must be positive label ids",
        ));
    }
    if sources.is_empty() || (sources.len() == 1 && sources.contains(&target)) {
        return Ok(());
    }

    for cell in grid.data_mut().iter_mut() {
        if sources.contains(cell) {
            *cell = target;
        }
    }
    Ok(())
}

/// Merge all labels of a selection into its smallest id.
///
/// This is the selection-driven entry point: the region selector produces a
/// set of label ids, and the lowest one survives as the merge target. A
/// selection with fewer than two ids is a no-op.
///
/// Returns the surviving label id, or `None` when nothing was merged.
///
/// # Errors
///
/// Returns [`MorphError::BackgroundMerge`] if the selection contains 0.
pub fn merge_selection(grid: &mut LabelGridMut, selection: &Selection) -> MorphResult<Option<u32>> {
    if selection.len() < 2 {
        return Ok(None);
    }
    let Some(&target) = selection.first() else {
        return Ok(None);
    };
    merge(grid, target, selection)?;
    Ok(Some(target))
}

#[cfg(test)]
mod tests {
    use super::*;
    use labeledit_core::LabelGrid;

    fn selection(ids: &[u32]) -> Selection {
        ids.iter().copied().collect()
    }

    #[test]
    fn test_merge_rejects_background_target() {
        let grid = LabelGrid::from_rows(&[&[1, 2]]).unwrap();
        let mut grid_mut = grid.to_mut();
        let err = merge(&mut grid_mut, 0, &selection(&[1])).unwrap_err();
        assert!(matches!(err, MorphError::BackgroundMerge(_)));
    }

    #[test]
    fn test_merge_rejects_background_source() {
        let grid = LabelGrid::from_rows(&[&[1, 2]]).unwrap();
        let mut grid_mut = grid.to_mut();
        let err = merge(&mut grid_mut, 1, &selection(&[0, 2])).unwrap_err();
        assert!(matches!(err, MorphError::BackgroundMerge(_)));
    }

    #[test]
    fn test_merge_target_absent_from_grid() {
        let grid = LabelGrid::from_rows(&[&[1, 2], &[2, 1]]).unwrap();
        let mut grid_mut = grid.to_mut();
        merge(&mut grid_mut, 9, &selection(&[1, 2])).unwrap();
        let merged: LabelGrid = grid_mut.into();
        assert_eq!(merged.labels(), vec![9]);
    }

    #[test]
    fn test_merge_selection_singleton_is_noop() {
        let grid = LabelGrid::from_rows(&[&[1, 2]]).unwrap();
        let mut grid_mut = grid.to_mut();
        assert_eq!(merge_selection(&mut grid_mut, &selection(&[2])).unwrap(), None);
        let unchanged: LabelGrid = grid_mut.into();
        assert!(unchanged.same_content(&grid));
    }
}
