//! Conversion between cell corners and glam integer vectors.

use glam::{UVec2, UVec3};

use super::{Octant, Quadrant};
use crate::constants::Level;

impl Quadrant {
  /// Corner of the quadrant on the finest grid.
  #[inline]
  pub fn anchor(&self) -> UVec2 {
    UVec2::from_array(self.coords)
  }

  /// Quadrant with corner `anchor` at `level`.
  #[inline]
  pub fn from_anchor(anchor: UVec2, level: Level) -> Self {
    Self::new(anchor.to_array(), level)
  }
}

impl Octant {
  /// Corner of the octant on the finest grid.
  #[inline]
  pub fn anchor(&self) -> UVec3 {
    UVec3::from_array(self.coords)
  }

  /// Octant with corner `anchor` at `level`.
  #[inline]
  pub fn from_anchor(anchor: UVec3, level: Level) -> Self {
    Self::new(anchor.to_array(), level)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_quadrant_anchor_roundtrip() {
    let q = Quadrant::from_uniform_index(3, 37);
    let back = Quadrant::from_anchor(q.anchor(), q.level);
    assert_eq!(back, q);
  }

  #[test]
  fn test_octant_anchor_matches_coords() {
    let o = Octant::new([1 << 18, 0, 1 << 17], 2);
    assert!(o.is_valid());
    assert_eq!(o.anchor(), UVec3::new(1 << 18, 0, 1 << 17));
  }

  #[test]
  fn test_anchor_scales_with_level() {
    // Uniform index 3 at level 1 is the upper right quadrant.
    let q = Quadrant::from_uniform_index(1, 3);
    assert_eq!(q.anchor(), UVec2::splat(Quadrant::ROOT_LEN / 2));
  }
}
