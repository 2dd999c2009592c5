//! Structuring elements for label morphology
//!
//! A structuring element defines the neighborhood examined around each cell
//! during one morphological pass. It is described by a shape tag and a
//! radius, from which an ordered list of relative coordinate offsets is
//! derived once at construction. A `Strel` is immutable after construction.

use crate::error::{MorphError, MorphResult};

/// Neighborhood shape of a structuring element
///
/// `Square` and `Diamond` are planar (their offsets stay within one slice,
/// so on a 3D grid they operate slice by slice); `Cube` and `Octahedron`
/// are their volumetric counterparts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrelShape {
    /// All offsets with |dx| <= r and |dy| <= r (Chebyshev ball, 2D)
    Square,
    /// All offsets with each coordinate in [-r, r] (Chebyshev ball, 3D)
    Cube,
    /// All offsets with |dx| + |dy| <= r (Manhattan ball, 2D)
    Diamond,
    /// All offsets with |dx| + |dy| + |dz| <= r (Manhattan ball, 3D)
    Octahedron,
}

/// Structuring element: a neighborhood shape and radius
///
/// The derived offsets are ordered by z, then y, then x, ascending, with the
/// center excluded. The order is fixed so that repeated construction yields
/// byte-identical neighborhoods, keeping every morphological pass
/// reproducible.
///
/// # Examples
///
/// ```
/// use labeledit_morph::{Strel, StrelShape};
///
/// let strel = Strel::from_radius(StrelShape::Square, 1).unwrap();
/// assert_eq!(strel.offsets().len(), 8);
///
/// // Radius 0 is the empty neighborhood: no dilation effect.
/// let none = Strel::from_radius(StrelShape::Cube, 0).unwrap();
/// assert!(none.is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct Strel {
    shape: StrelShape,
    radius: u32,
    offsets: Vec<(i32, i32, i32)>,
}

impl Strel {
    /// Create a structuring element of the given shape and radius.
    ///
    /// # Errors
    ///
    /// Returns [`MorphError::NegativeRadius`] if `radius < 0`.
    pub fn from_radius(shape: StrelShape, radius: i32) -> MorphResult<Self> {
        if radius < 0 {
            return Err(MorphError::NegativeRadius(radius));
        }
        let radius = radius as u32;
        Ok(Strel {
            shape,
            radius,
            offsets: Self::build_offsets(shape, radius),
        })
    }

    fn build_offsets(shape: StrelShape, radius: u32) -> Vec<(i32, i32, i32)> {
        let r = radius as i32;
        let z_range = match shape {
            StrelShape::Square | StrelShape::Diamond => 0..=0,
            StrelShape::Cube | StrelShape::Octahedron => -r..=r,
        };

        let mut offsets = Vec::new();
        for dz in z_range {
            for dy in -r..=r {
                for dx in -r..=r {
                    if (dx, dy, dz) == (0, 0, 0) {
                        continue;
                    }
                    let inside = match shape {
                        StrelShape::Square | StrelShape::Cube => true,
                        StrelShape::Diamond | StrelShape::Octahedron => {
                            dx.abs() + dy.abs() + dz.abs() <= r
                        }
                    };
                    if inside {
                        offsets.push((dx, dy, dz));
                    }
                }
            }
        }
        offsets
    }

    /// Get the shape tag.
    #[inline]
    pub fn shape(&self) -> StrelShape {
        self.shape
    }

    /// Get the radius.
    #[inline]
    pub fn radius(&self) -> u32 {
        self.radius
    }

    /// Get the ordered neighborhood offsets (center excluded).
    #[inline]
    pub fn offsets(&self) -> &[(i32, i32, i32)] {
        &self.offsets
    }

    /// Get the number of cells in the neighborhood.
    #[inline]
    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    /// Check whether the neighborhood is empty (radius 0).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_negative_radius_rejected() {
        let err = Strel::from_radius(StrelShape::Square, -1).unwrap_err();
        assert!(matches!(err, MorphError::NegativeRadius(-1)));
    }

    #[test]
    fn test_radius_zero_is_empty() {
        for shape in [
            StrelShape::Square,
            StrelShape::Cube,
            StrelShape::Diamond,
            StrelShape::Octahedron,
        ] {
            let strel = Strel::from_radius(shape, 0).unwrap();
            assert!(strel.is_empty(), "{shape:?} radius 0 should be empty");
        }
    }

    #[test]
    fn test_neighborhood_sizes() {
        // (2r+1)^2 - 1 for squares, (2r+1)^3 - 1 for cubes
        assert_eq!(Strel::from_radius(StrelShape::Square, 1).unwrap().len(), 8);
        assert_eq!(Strel::from_radius(StrelShape::Square, 2).unwrap().len(), 24);
        assert_eq!(Strel::from_radius(StrelShape::Cube, 1).unwrap().len(), 26);
        // Manhattan balls: 2r(r+1) in 2D
        assert_eq!(Strel::from_radius(StrelShape::Diamond, 1).unwrap().len(), 4);
        assert_eq!(Strel::from_radius(StrelShape::Diamond, 2).unwrap().len(), 12);
        assert_eq!(
            Strel::from_radius(StrelShape::Octahedron, 1).unwrap().len(),
            6
        );
    }

    #[test]
    fn test_planar_shapes_stay_in_slice() {
        let strel = Strel::from_radius(StrelShape::Square, 2).unwrap();
        assert!(strel.offsets().iter().all(|&(_, _, dz)| dz == 0));
    }

    #[test]
    fn test_offsets_deterministic() {
        let a = Strel::from_radius(StrelShape::Octahedron, 3).unwrap();
        let b = Strel::from_radius(StrelShape::Octahedron, 3).unwrap();
        assert_eq!(a.offsets(), b.offsets());
    }

    #[test]
    fn test_center_excluded() {
        let strel = Strel::from_radius(StrelShape::Cube, 2).unwrap();
        assert!(!strel.offsets().contains(&(0, 0, 0)));
    }
}
