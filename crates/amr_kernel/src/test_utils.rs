//! Shared proptest strategies for cell and tree tests.

use proptest::prelude::*;

use crate::cell::Cell;
use crate::constants::Level;

/// Any valid cell up to `max_level`.
pub fn cell_up_to<const D: usize>(max_level: Level) -> impl Strategy<Value = Cell<D>> {
  (0..=max_level.min(Cell::<D>::MAX_LEVEL)).prop_flat_map(|level| {
    (0..(1u64 << (D * level as usize)))
      .prop_map(move |index| Cell::<D>::from_uniform_index(level, index))
  })
}

/// Any valid cell.
pub fn any_cell<const D: usize>() -> impl Strategy<Value = Cell<D>> {
  cell_up_to::<D>(Cell::<D>::MAX_LEVEL)
}

/// Ancestor-or-self of `q` at `level`.
pub fn truncate<const D: usize>(q: &Cell<D>, level: Level) -> Cell<D> {
  Cell::from_uniform_index(level, q.linear_id(level))
}

/// Pairs that are often related: independent, ancestor/descendant,
/// siblings or identical.
pub fn related_pair<const D: usize>() -> impl Strategy<Value = (Cell<D>, Cell<D>)> {
  prop_oneof![
    (any_cell::<D>(), any_cell::<D>()),
    (any_cell::<D>(), any::<u8>()).prop_map(|(q, up)| {
      let level = up % (q.level + 1);
      (truncate(&q, level), q)
    }),
    (any_cell::<D>(), any::<u8>()).prop_map(|(q, pick)| {
      if q.level == 0 {
        (q, q)
      } else {
        let id = pick % Cell::<D>::CHILDREN as u8;
        (q, q.parent().child(id))
      }
    }),
    any_cell::<D>().prop_map(|q| (q, q)),
  ]
}

/// Ordered boundary pairs accepted by region completion.
pub fn region_bounds<const D: usize>(max_level: Level) -> impl Strategy<Value = (Cell<D>, Cell<D>)> {
  (cell_up_to::<D>(max_level), cell_up_to::<D>(max_level))
    .prop_filter("bounds must be ordered and disjoint", |(a, b)| {
      a != b && !a.is_ancestor(b) && !b.is_ancestor(a)
    })
    .prop_map(|(a, b)| if a < b { (a, b) } else { (b, a) })
}
