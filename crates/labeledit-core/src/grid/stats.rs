//! Label statistics
//!
//! Queries over the label population of a grid: which labels are present,
//! how many cells each occupies, and content comparison. These back the
//! testable properties of the edit operations (dilation never shrinks a
//! label, erosion never grows one) and are generally useful to callers
//! inspecting an edit result.

use super::LabelGrid;
use std::collections::{BTreeMap, BTreeSet};

impl LabelGrid {
    /// Get the sorted set of distinct positive labels present in the grid.
    ///
    /// Background (0) is never included.
    pub fn labels(&self) -> Vec<u32> {
        let set: BTreeSet<u32> = self.data().iter().copied().filter(|&c| c != 0).collect();
        set.into_iter().collect()
    }

    /// Count the cells holding the given label.
    ///
    /// Counting background (`label = 0`) is allowed and counts empty cells.
    pub fn count_label(&self, label: u32) -> usize {
        self.data().iter().filter(|&&c| c == label).count()
    }

    /// Histogram of positive labels to their cell counts.
    pub fn label_histogram(&self) -> BTreeMap<u32, usize> {
        let mut histogram = BTreeMap::new();
        for &cell in self.data() {
            if cell != 0 {
                *histogram.entry(cell).or_insert(0) += 1;
            }
        }
        histogram
    }

    /// Check whether two grids have identical dimensions and cell content.
    pub fn same_content(&self, other: &LabelGrid) -> bool {
        self.same_dimensions(other) && self.data() == other.data()
    }
}
