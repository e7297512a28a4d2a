//! Minimal completion of the region between two cells.
//!
//! This is Algorithm 2 of H. Sundar, R.S. Sampath and G. Biros, "Bottom-up
//! construction and 2:1 balance refinement of linear octrees in parallel"
//! (SISC, 2008). Starting from the children of the nearest common ancestor
//! of the two bounds, every candidate cell is either
//!
//! 1. strictly between the bounds and not containing the upper bound:
//!    emitted as is, it is as coarse as it can get;
//! 2. an ancestor of a bound: replaced by its children;
//! 3. anything else (a bound itself, or outside the interval): dropped.
//!
//! ```text
//!  q1 = 1, q2 = 14 on a 4x4 grid (level 2):
//!
//!  ┌───┬───┬───┬───┐        ┌───────┬───┬───┐
//!  │   │   │q2 │   │        │       │q2 │   │
//!  ├───┼───┼───┼───┤        │       ├───┼───┤
//!  │   │   │   │   │        │       │12 │13 │
//!  ├───┼───┼───┼───┤  --->  ├───┬───┼───┴───┤
//!  │   │   │   │   │        │ 2 │ 3 │       │
//!  ├───┼───┼───┼───┤        ├───┼───┤       │
//!  │   │q1 │   │   │        │   │q1 │       │
//!  └───┴───┴───┴───┘        └───┴───┴───────┘
//! ```
//!
//! Candidates are kept on an explicit stack, children pushed in reverse so
//! they pop in Morton order. Only ancestors of a bound are ever refined, so
//! the stack holds at most `CHILDREN - 1` cells per level plus one set of
//! children and output comes out sorted without a final sort.

use super::{DataLifecycle, LinearTree, TreeIndex};
use crate::cell::Cell;

/// Walk the minimal region between `q1` and `q2`, calling `emit` in Morton
/// order with each cell and whether it is one of the bounds.
fn visit_region<const D: usize>(
  q1: &Cell<D>,
  include_q1: bool,
  q2: &Cell<D>,
  include_q2: bool,
  mut emit: impl FnMut(Cell<D>, bool),
) {
  q1.assert_valid();
  q2.assert_valid();
  assert!(
    q1 < q2,
    "region bounds out of order: {:?} is not before {:?}",
    q1,
    q2
  );
  assert!(
    !q1.is_ancestor(q2),
    "region bound {:?} contains the other bound {:?}",
    q1,
    q2
  );

  if include_q1 {
    emit(*q1, true);
  }

  let depth = Cell::<D>::MAX_LEVEL as usize;
  let mut stack: Vec<Cell<D>> = Vec::with_capacity((Cell::<D>::CHILDREN - 1) * depth + 1);
  let ancestor = q1.nearest_common_ancestor(q2);
  stack.extend(ancestor.children().into_iter().rev());

  while let Some(w) = stack.pop() {
    if q1 < &w && &w < q2 && !w.is_ancestor(q2) {
      emit(w, false);
    } else if w.is_ancestor(q1) || w.is_ancestor(q2) {
      stack.extend(w.children().into_iter().rev());
    }
  }

  if include_q2 {
    emit(*q2, true);
  }
}

/// Cells of the minimal linear tree from `q1` to `q2`, bounds included
/// according to the flags.
///
/// # Panics
/// Unless `q1 < q2` in Morton order and `q1` does not contain `q2`.
#[cfg_attr(feature = "tracing", tracing::instrument(skip_all, name = "linear_tree::region_cells"))]
pub fn region_cells<const D: usize>(
  q1: &Cell<D>,
  include_q1: bool,
  q2: &Cell<D>,
  include_q2: bool,
) -> Vec<Cell<D>> {
  let mut cells = Vec::new();
  visit_region(q1, include_q1, q2, include_q2, |cell, _| cells.push(cell));
  cells
}

/// Fill the empty `tree` with the minimal linear tree from `q1` to `q2`.
///
/// Interior cells get a payload from `lifecycle.init_data`; included bounds
/// get theirs from `lifecycle.init_endpoint_data`, so the caller decides
/// what the bounds carry. The payloads of `q1` and `q2` themselves are not
/// touched.
///
/// # Panics
/// Unless `q1 < q2` in Morton order, `q1` does not contain `q2` and `tree`
/// is empty.
#[cfg_attr(feature = "tracing", tracing::instrument(skip_all, name = "linear_tree::complete_region"))]
pub fn complete_region<const D: usize, L>(
  q1: &Cell<D>,
  include_q1: bool,
  q2: &Cell<D>,
  include_q2: bool,
  tree: &mut LinearTree<D, L::Data>,
  which_tree: TreeIndex,
  lifecycle: &mut L,
) where
  L: DataLifecycle<D>,
{
  assert!(tree.is_empty(), "region completion needs an empty tree");

  visit_region(q1, include_q1, q2, include_q2, |cell, bound| {
    let data = if bound {
      lifecycle.init_endpoint_data(which_tree, &cell)
    } else {
      lifecycle.init_data(which_tree, &cell)
    };
    tree.push(cell, data);
  });

  #[cfg(feature = "tracing")]
  tracing::debug!(
    cells = tree.len(),
    max_level = tree.max_level(),
    "completed region"
  );

  debug_assert!(tree.is_linear());
}

#[cfg(test)]
#[path = "complete_test.rs"]
mod complete_test;
