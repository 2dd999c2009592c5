//! The label grid - the in-memory label image under edit
//!
//! `LabelGrid` is the unit of mutation for every edit operation. Each cell
//! holds a `u32`: 0 is background, any positive value is a label id.
//! Distinct positive values denote mutually exclusive regions; no
//! connectivity requirement is imposed on a single label, so a label may
//! become disconnected after an edit.
//!
//! # Cell layout
//!
//! - Cells are stored in a flat `Vec<u32>`, x-fastest, then y, then z:
//!   `index = (z * height + y) * width + x`
//! - 2D grids have `depth == 1`
//!
//! # Ownership model
//!
//! `LabelGrid` uses `Arc` for efficient cloning (shared ownership), so a
//! redisplay snapshot is a pointer copy. To modify cells, convert to
//! [`LabelGridMut`] via [`LabelGrid::try_into_mut`] or [`LabelGrid::to_mut`],
//! then convert back with `Into<LabelGrid>`. This enforces the single-writer
//! contract at compile time.

mod access;
mod stats;

use crate::error::{Error, Result};
use std::sync::Arc;

/// Internal grid data
#[derive(Debug)]
struct GridData {
    /// Width in cells
    width: u32,
    /// Height in cells
    height: u32,
    /// Depth in cells (1 for 2D grids)
    depth: u32,
    /// The cell data (0 = background, positive = label id)
    data: Vec<u32>,
}

impl GridData {
    #[inline]
    fn contains(&self, x: u32, y: u32, z: u32) -> bool {
        x < self.width && y < self.height && z < self.depth
    }

    #[inline]
    fn index(&self, x: u32, y: u32, z: u32) -> usize {
        ((z as usize * self.height as usize) + y as usize) * self.width as usize + x as usize
    }
}

/// The label image
///
/// Uses reference counting via `Arc` for efficient cloning, so taking a
/// snapshot for redisplay is cheap.
///
/// # Examples
///
/// ```
/// use labeledit_core::LabelGrid;
///
/// // Create a new all-background 2D grid
/// let grid = LabelGrid::new(64, 48, 1).unwrap();
/// assert_eq!(grid.width(), 64);
/// assert_eq!(grid.height(), 48);
/// assert!(grid.is_2d());
/// ```
#[derive(Debug, Clone)]
pub struct LabelGrid {
    inner: Arc<GridData>,
}

impl LabelGrid {
    /// Create a new all-background grid with the given dimensions.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if any dimension is 0.
    pub fn new(width: u32, height: u32, depth: u32) -> Result<Self> {
        Self::check_dimensions(width, height, depth)?;
        let data = vec![0u32; Self::cell_count(width, height, depth)];
        Ok(LabelGrid {
            inner: Arc::new(GridData {
                width,
                height,
                depth,
                data,
            }),
        })
    }

    /// Create a grid from existing cell data.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if any dimension is 0, or
    /// [`Error::DataSizeMismatch`] if `data.len() != width * height * depth`.
    pub fn from_vec(width: u32, height: u32, depth: u32, data: Vec<u32>) -> Result<Self> {
        Self::check_dimensions(width, height, depth)?;
        let expected = Self::cell_count(width, height, depth);
        if data.len() != expected {
            return Err(Error::DataSizeMismatch {
                expected,
                actual: data.len(),
            });
        }
        Ok(LabelGrid {
            inner: Arc::new(GridData {
                width,
                height,
                depth,
                data,
            }),
        })
    }

    /// Create a grid from signed source data, validating that it is a
    /// well-formed label image.
    ///
    /// This is the session-creation input path: external images arrive as
    /// signed integers, and a label image must contain only non-negative
    /// values.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NegativeLabel`] for the first negative cell value,
    /// [`Error::InvalidParameter`] if a value exceeds the label range, plus
    /// the dimension errors of [`LabelGrid::from_vec`].
    pub fn from_signed(width: u32, height: u32, depth: u32, source: &[i64]) -> Result<Self> {
        let mut data = Vec::with_capacity(source.len());
        for (index, &value) in source.iter().enumerate() {
            if value < 0 {
                return Err(Error::NegativeLabel { index, value });
            }
            let cell = u32::try_from(value).map_err(|_| {
                Error::InvalidParameter(format!(
                    "label value {value} at cell index {index} exceeds the supported range"
                ))
            })?;
            data.push(cell);
        }
        Self::from_vec(width, height, depth, data)
    }

    /// Create a 2D grid from row slices.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] for empty input and
    /// [`Error::InvalidParameter`] for ragged rows.
    pub fn from_rows(rows: &[&[u32]]) -> Result<Self> {
        let height = rows.len() as u32;
        let width = rows.first().map_or(0, |r| r.len() as u32);
        Self::check_dimensions(width, height, 1)?;
        let mut data = Vec::with_capacity((width as usize) * (height as usize));
        for row in rows {
            if row.len() as u32 != width {
                return Err(Error::InvalidParameter(format!(
                    "ragged rows: expected width {width}, got {}",
                    row.len()
                )));
            }
            data.extend_from_slice(row);
        }
        Self::from_vec(width, height, 1, data)
    }

    fn check_dimensions(width: u32, height: u32, depth: u32) -> Result<()> {
        if width == 0 || height == 0 || depth == 0 {
            return Err(Error::InvalidDimension {
                width,
                height,
                depth,
            });
        }
        Ok(())
    }

    #[inline]
    fn cell_count(width: u32, height: u32, depth: u32) -> usize {
        width as usize * height as usize * depth as usize
    }

    /// Get the grid width in cells.
    #[inline]
    pub fn width(&self) -> u32 {
        self.inner.width
    }

    /// Get the grid height in cells.
    #[inline]
    pub fn height(&self) -> u32 {
        self.inner.height
    }

    /// Get the grid depth in cells (1 for 2D grids).
    #[inline]
    pub fn depth(&self) -> u32 {
        self.inner.depth
    }

    /// Check whether this is a 2D grid.
    #[inline]
    pub fn is_2d(&self) -> bool {
        self.inner.depth == 1
    }

    /// Get the total number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.inner.data.len()
    }

    /// Check whether the grid has no cells.
    ///
    /// Always false for a constructed grid; present for API completeness.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.inner.data.is_empty()
    }

    /// Get raw access to the cell data.
    #[inline]
    pub fn data(&self) -> &[u32] {
        &self.inner.data
    }

    /// Get the number of strong references to this grid.
    #[inline]
    pub fn ref_count(&self) -> usize {
        Arc::strong_count(&self.inner)
    }

    /// Check if two grids have the same width, height, and depth.
    pub fn same_dimensions(&self, other: &LabelGrid) -> bool {
        self.inner.width == other.inner.width
            && self.inner.height == other.inner.height
            && self.inner.depth == other.inner.depth
    }

    /// Create a new all-background grid with the same dimensions as this one.
    pub fn create_template(&self) -> Self {
        LabelGrid {
            inner: Arc::new(GridData {
                width: self.inner.width,
                height: self.inner.height,
                depth: self.inner.depth,
                data: vec![0u32; self.inner.data.len()],
            }),
        }
    }

    /// Create a deep copy of this grid.
    ///
    /// Unlike `clone()` which shares data via Arc, this creates a completely
    /// independent copy.
    pub fn deep_clone(&self) -> Self {
        LabelGrid {
            inner: Arc::new(GridData {
                width: self.inner.width,
                height: self.inner.height,
                depth: self.inner.depth,
                data: self.inner.data.clone(),
            }),
        }
    }

    /// Try to get mutable access to the cell data.
    ///
    /// Succeeds only if there is exactly one reference to the data.
    /// If successful, returns a [`LabelGridMut`] that allows modification.
    pub fn try_into_mut(self) -> std::result::Result<LabelGridMut, Self> {
        match Arc::try_unwrap(self.inner) {
            Ok(data) => Ok(LabelGridMut { inner: data }),
            Err(arc) => Err(LabelGrid { inner: arc }),
        }
    }

    /// Create a mutable copy of this grid.
    ///
    /// Always creates a new copy that can be modified.
    pub fn to_mut(&self) -> LabelGridMut {
        LabelGridMut {
            inner: GridData {
                width: self.inner.width,
                height: self.inner.height,
                depth: self.inner.depth,
                data: self.inner.data.clone(),
            },
        }
    }
}

/// Mutable label grid
///
/// Allows modification of cell data. Convert back to an immutable
/// [`LabelGrid`] using `Into<LabelGrid>`. There is never more than one
/// owner of a `LabelGridMut`, so holding one proves exclusive write access.
#[derive(Debug)]
pub struct LabelGridMut {
    inner: GridData,
}

impl LabelGridMut {
    /// Get the grid width in cells.
    #[inline]
    pub fn width(&self) -> u32 {
        self.inner.width
    }

    /// Get the grid height in cells.
    #[inline]
    pub fn height(&self) -> u32 {
        self.inner.height
    }

    /// Get the grid depth in cells (1 for 2D grids).
    #[inline]
    pub fn depth(&self) -> u32 {
        self.inner.depth
    }

    /// Get raw access to the cell data.
    #[inline]
    pub fn data(&self) -> &[u32] {
        &self.inner.data
    }

    /// Get mutable raw access to the cell data.
    #[inline]
    pub fn data_mut(&mut self) -> &mut [u32] {
        &mut self.inner.data
    }

    /// Reset every cell to background.
    pub fn clear(&mut self) {
        self.inner.data.fill(0);
    }
}

impl From<LabelGridMut> for LabelGrid {
    fn from(grid_mut: LabelGridMut) -> Self {
        LabelGrid {
            inner: Arc::new(grid_mut.inner),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_creation() {
        let grid = LabelGrid::new(10, 20, 3).unwrap();
        assert_eq!(grid.width(), 10);
        assert_eq!(grid.height(), 20);
        assert_eq!(grid.depth(), 3);
        assert_eq!(grid.len(), 600);
        assert!(!grid.is_2d());
        assert!(grid.data().iter().all(|&c| c == 0));
    }

    #[test]
    fn test_grid_creation_invalid() {
        assert!(LabelGrid::new(0, 10, 1).is_err());
        assert!(LabelGrid::new(10, 0, 1).is_err());
        assert!(LabelGrid::new(10, 10, 0).is_err());
    }

    #[test]
    fn test_from_vec_size_mismatch() {
        let err = LabelGrid::from_vec(3, 3, 1, vec![0; 8]).unwrap_err();
        assert!(matches!(
            err,
            Error::DataSizeMismatch {
                expected: 9,
                actual: 8
            }
        ));
    }

    #[test]
    fn test_from_signed_rejects_negative() {
        let err = LabelGrid::from_signed(2, 2, 1, &[0, 3, -7, 1]).unwrap_err();
        assert!(matches!(err, Error::NegativeLabel { index: 2, value: -7 }));
    }

    #[test]
    fn test_from_signed_rejects_oversized() {
        let big = i64::from(u32::MAX) + 1;
        let err = LabelGrid::from_signed(2, 1, 1, &[0, big]).unwrap_err();
        assert!(matches!(err, Error::InvalidParameter(_)));
    }

    #[test]
    fn test_from_signed_accepts_label_image() {
        let grid = LabelGrid::from_signed(2, 2, 1, &[0, 3, 7, 1]).unwrap();
        assert_eq!(grid.data(), &[0, 3, 7, 1]);
    }

    #[test]
    fn test_from_rows() {
        let grid = LabelGrid::from_rows(&[&[1, 1, 0], &[1, 0, 2], &[0, 2, 2]]).unwrap();
        assert_eq!(grid.width(), 3);
        assert_eq!(grid.height(), 3);
        assert!(grid.is_2d());
        assert_eq!(grid.get(2, 1, 0), Some(2));
    }

    #[test]
    fn test_from_rows_ragged() {
        assert!(LabelGrid::from_rows(&[&[1, 2], &[3]]).is_err());
        assert!(LabelGrid::from_rows(&[]).is_err());
    }

    #[test]
    fn test_clone_shares_data() {
        let g1 = LabelGrid::new(10, 10, 1).unwrap();
        let g2 = g1.clone();
        assert_eq!(g1.ref_count(), 2);
        assert_eq!(g1.data().as_ptr(), g2.data().as_ptr());
    }

    #[test]
    fn test_deep_clone() {
        let g1 = LabelGrid::new(10, 10, 1).unwrap();
        let g2 = g1.deep_clone();
        assert_eq!(g1.ref_count(), 1);
        assert_eq!(g2.ref_count(), 1);
        assert_ne!(g1.data().as_ptr(), g2.data().as_ptr());
    }

    #[test]
    fn test_mut_roundtrip() {
        let grid = LabelGrid::new(4, 4, 1).unwrap();
        let mut grid_mut = grid.try_into_mut().unwrap();
        grid_mut.set(2, 3, 0, 9).unwrap();
        let grid: LabelGrid = grid_mut.into();
        assert_eq!(grid.get(2, 3, 0), Some(9));
    }

    #[test]
    fn test_try_into_mut_fails_when_shared() {
        let g1 = LabelGrid::new(4, 4, 1).unwrap();
        let _g2 = g1.clone();
        assert!(g1.try_into_mut().is_err());
    }

    #[test]
    fn test_create_template() {
        let grid = LabelGrid::from_rows(&[&[1, 2], &[3, 4]]).unwrap();
        let tmpl = grid.create_template();
        assert!(tmpl.same_dimensions(&grid));
        assert!(tmpl.data().iter().all(|&c| c == 0));
    }
}
