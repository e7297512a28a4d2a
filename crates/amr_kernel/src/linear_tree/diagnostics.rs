//! Order checks and a human-readable dump of a linear tree.
//!
//! The dump prints one line per cell with its hex corner coordinates, level
//! and how it relates to the previous cell:
//!
//! ```text
//! F   first cell
//! I   identical to the previous cell
//! R   smaller than the previous cell (tree is out of order)
//! Cn  child n of the previous cell
//! Sn  sibling of the previous cell with child id n
//! D   descendant of the previous cell
//! Qn  any later cell, with child id n
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::io::{self, Write};

use super::LinearTree;
use crate::cell::Cell;
use crate::constants::ChildIndex;

/// How a cell relates to its predecessor in a linear tree.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Relation {
  /// No predecessor.
  First,
  Identical,
  /// Predecessor is larger in Morton order.
  Reverse,
  Child(ChildIndex),
  Sibling(ChildIndex),
  Descendant,
  /// Larger and otherwise unrelated.
  Successor(ChildIndex),
}

impl fmt::Display for Relation {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Relation::First => write!(f, "F"),
      Relation::Identical => write!(f, "I"),
      Relation::Reverse => write!(f, "R"),
      Relation::Child(id) => write!(f, "C{}", id),
      Relation::Sibling(id) => write!(f, "S{}", id),
      Relation::Descendant => write!(f, "D"),
      Relation::Successor(id) => write!(f, "Q{}", id),
    }
  }
}

/// Classify `cur` against the cell before it.
pub fn classify<const D: usize>(prev: &Cell<D>, cur: &Cell<D>) -> Relation {
  match prev.compare(cur) {
    Ordering::Greater => Relation::Reverse,
    Ordering::Equal => Relation::Identical,
    // The root is the smallest cell, so `cur` has a parent here.
    Ordering::Less => {
      if prev.is_parent(cur) {
        Relation::Child(cur.child_id())
      } else if prev.is_sibling(cur) {
        Relation::Sibling(cur.child_id())
      } else if prev.is_ancestor(cur) {
        Relation::Descendant
      } else {
        Relation::Successor(cur.child_id())
      }
    }
  }
}

impl<const D: usize, T> LinearTree<D, T> {
  /// Strictly increasing in Morton order.
  pub fn is_sorted(&self) -> bool {
    self
      .leaves
      .windows(2)
      .all(|pair| pair[0].cell.compare(&pair[1].cell) == Ordering::Less)
  }

  /// Sorted and free of overlaps.
  pub fn is_linear(&self) -> bool {
    self.leaves.windows(2).all(|pair| {
      let (a, b) = (&pair[0].cell, &pair[1].cell);
      a.compare(b) == Ordering::Less && !a.is_ancestor(b)
    })
  }

  /// Linear and without gaps between consecutive cells.
  pub fn is_complete(&self) -> bool {
    self
      .leaves
      .windows(2)
      .all(|pair| pair[0].cell.is_next(&pair[1].cell))
  }

  /// Every cell paired with its relation to the previous one.
  pub fn relations(&self) -> impl Iterator<Item = (&Cell<D>, Relation)> + '_ {
    let mut prev: Option<&Cell<D>> = None;
    self.cells().map(move |cell| {
      let relation = match prev {
        Some(p) => classify(p, cell),
        None => Relation::First,
      };
      prev = Some(cell);
      (cell, relation)
    })
  }

  /// Write one line per cell to `out`; nothing happens without a sink.
  ///
  /// A present `identifier` prefixes every line with `[identifier] `.
  pub fn print(&self, identifier: Option<u32>, out: Option<&mut dyn Write>) -> io::Result<()> {
    let Some(out) = out else {
      return Ok(());
    };

    for (cell, relation) in self.relations() {
      if let Some(id) = identifier {
        write!(out, "[{}] ", id)?;
      }
      for c in cell.coords.iter() {
        write!(out, "0x{:x} ", c)?;
      }
      writeln!(out, "{} {}", cell.level, relation)?;

      #[cfg(feature = "tracing")]
      {
        if relation == Relation::Reverse {
          tracing::warn!(?cell, "linear tree out of order");
        }
      }
    }
    Ok(())
  }
}

#[cfg(test)]
#[path = "diagnostics_test.rs"]
mod diagnostics_test;
