use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use super::*;

// =========================================================================
// Validity
// =========================================================================

/// The root and every uniform-grid cell are valid.
#[test]
fn test_root_and_uniform_cells_are_valid() {
  assert!(Quadrant::root().is_valid());
  assert!(Octant::root().is_valid());

  for index in 0..16 {
    let q = Quadrant::from_uniform_index(2, index);
    assert!(q.is_valid(), "Uniform cell {} should be valid: {:?}", index, q);
  }
}

/// Coordinates must be multiples of the side length.
#[test]
fn test_misaligned_cell_is_invalid() {
  let half = Quadrant::ROOT_LEN / 2;
  assert!(Quadrant::new([half, 0], 1).is_valid());
  assert!(!Quadrant::new([half, 0], 0).is_valid(), "Root must sit at 0");
  assert!(!Quadrant::new([1, 0], 29).is_valid());
  assert!(Quadrant::new([1, 0], 30).is_valid());
}

/// Coordinates must stay inside the root.
#[test]
fn test_out_of_domain_cell_is_invalid() {
  assert!(!Quadrant::new([Quadrant::ROOT_LEN, 0], 1).is_valid());
  assert!(!Octant::new([0, 0, Octant::ROOT_LEN], 3).is_valid());
}

/// Levels beyond the maximum are rejected.
#[test]
fn test_level_beyond_max_is_invalid() {
  assert!(!Quadrant::new([0, 0], Quadrant::MAX_LEVEL + 1).is_valid());
  assert!(!Octant::new([0, 0, 0], Octant::MAX_LEVEL + 1).is_valid());
}

// =========================================================================
// Equality and ordering
// =========================================================================

/// Same corner, different level: not equal.
#[test]
fn test_equality_includes_level() {
  let a = Quadrant::new([0, 0], 3);
  let b = Quadrant::new([0, 0], 3);
  let c = Quadrant::new([0, 0], 4);

  assert!(a.is_equal(&b));
  assert!(!a.is_equal(&c));
  assert_ne!(a, c);
}

/// Equal cells produce equal hashes.
#[test]
fn test_cell_hash_consistency() {
  let hash = |q: &Octant| {
    let mut hasher = DefaultHasher::new();
    q.hash(&mut hasher);
    hasher.finish()
  };
  let a = Octant::from_uniform_index(4, 1234);
  let b = Octant::from_uniform_index(4, 1234);

  assert_eq!(hash(&a), hash(&b), "Equal cells must have equal hashes");
}

/// Sorting by `Ord` yields Morton order with ancestors first.
#[test]
fn test_sort_orders_ancestors_before_descendants() {
  let root = Quadrant::root();
  let first = root.child(0);
  let grandchild = first.child(0);
  let last = root.child(3);

  let mut cells = vec![last, grandchild, root, first];
  cells.sort();

  assert_eq!(cells, vec![root, first, grandchild, last]);
}

/// Side length halves per level.
#[test]
fn test_side_len_halves_per_level() {
  let mut q = Quadrant::root();
  while q.level < 5 {
    let child = q.child(0);
    assert_eq!(child.side_len() * 2, q.side_len());
    q = child;
  }
  assert_eq!(Quadrant::side_len_at(Quadrant::MAX_LEVEL), 1);
}
