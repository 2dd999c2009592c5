//! Cell access functions
//!
//! Low-level functions for getting and setting individual cells on both
//! the shared and the mutable grid forms. The checked variants report
//! out-of-range coordinates; the unchecked variants are for inner loops
//! that have already validated their bounds.

use super::{LabelGrid, LabelGridMut};
use crate::error::{Error, Result};

impl LabelGrid {
    /// Get the cell value at (x, y, z).
    ///
    /// Returns `None` if the coordinates are out of bounds. For 2D grids
    /// pass `z = 0`.
    #[inline]
    pub fn get(&self, x: u32, y: u32, z: u32) -> Option<u32> {
        if !self.inner.contains(x, y, z) {
            return None;
        }
        Some(self.inner.data[self.inner.index(x, y, z)])
    }

    /// Get the cell value without bounds checking.
    ///
    /// # Panics
    ///
    /// Panics if the coordinates are out of bounds.
    #[inline]
    pub fn get_unchecked(&self, x: u32, y: u32, z: u32) -> u32 {
        self.inner.data[self.inner.index(x, y, z)]
    }

    /// Get a row of cells at (y, z).
    ///
    /// # Panics
    ///
    /// Panics if `y >= height` or `z >= depth`.
    #[inline]
    pub fn row(&self, y: u32, z: u32) -> &[u32] {
        let start = self.inner.index(0, y, z);
        &self.inner.data[start..start + self.inner.width as usize]
    }
}

impl LabelGridMut {
    /// Get the cell value at (x, y, z).
    ///
    /// Returns `None` if the coordinates are out of bounds.
    #[inline]
    pub fn get(&self, x: u32, y: u32, z: u32) -> Option<u32> {
        if !self.inner.contains(x, y, z) {
            return None;
        }
        Some(self.inner.data[self.inner.index(x, y, z)])
    }

    /// Get the cell value without bounds checking.
    ///
    /// # Panics
    ///
    /// Panics if the coordinates are out of bounds.
    #[inline]
    pub fn get_unchecked(&self, x: u32, y: u32, z: u32) -> u32 {
        self.inner.data[self.inner.index(x, y, z)]
    }

    /// Set the cell value at (x, y, z).
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfBounds`] if the coordinates are out of bounds.
    #[inline]
    pub fn set(&mut self, x: u32, y: u32, z: u32, value: u32) -> Result<()> {
        if !self.inner.contains(x, y, z) {
            return Err(Error::OutOfBounds {
                x,
                y,
                z,
                width: self.inner.width,
                height: self.inner.height,
                depth: self.inner.depth,
            });
        }
        let index = self.inner.index(x, y, z);
        self.inner.data[index] = value;
        Ok(())
    }

    /// Set the cell value without bounds checking.
    ///
    /// # Panics
    ///
    /// Panics if the coordinates are out of bounds.
    #[inline]
    pub fn set_unchecked(&mut self, x: u32, y: u32, z: u32, value: u32) {
        let index = self.inner.index(x, y, z);
        self.inner.data[index] = value;
    }

    /// Get mutable access to a row of cells at (y, z).
    ///
    /// # Panics
    ///
    /// Panics if `y >= height` or `z >= depth`.
    #[inline]
    pub fn row_mut(&mut self, y: u32, z: u32) -> &mut [u32] {
        let start = self.inner.index(0, y, z);
        let width = self.inner.width as usize;
        &mut self.inner.data[start..start + width]
    }
}
