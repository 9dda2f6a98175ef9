use std::collections::BTreeSet;

use tracing::trace;

/// Independent expand/collapse state for a list of sections.
#[derive(
  Debug, Clone, PartialEq, Eq, Default,
)]
pub struct OpenSections {
  open: BTreeSet<usize>
}

impl OpenSections {
  /// Seeds the open set from each section's default flag.
  pub fn seeded<I>(defaults: I) -> Self
  where
    I: IntoIterator<Item = bool>
  {
    let open = defaults
      .into_iter()
      .enumerate()
      .filter_map(|(index, open)| {
        open.then_some(index)
      })
      .collect();
    Self {
      open
    }
  }

  #[must_use]
  pub fn is_open(
    &self,
    index: usize
  ) -> bool {
    self.open.contains(&index)
  }

  #[must_use]
  pub fn toggled(
    &self,
    index: usize
  ) -> Self {
    let mut open = self.open.clone();
    if !open.remove(&index) {
      open.insert(index);
    }
    trace!(
      index,
      open = open.contains(&index),
      "toggled section"
    );
    Self {
      open
    }
  }
}

/// Single-open dropdown selection used by the header utility bar: the
/// clicked entry opens, or closes when it was already open.
#[must_use]
pub fn toggle_exclusive(
  open: Option<usize>,
  index: usize
) -> Option<usize> {
  if open == Some(index) {
    None
  } else {
    Some(index)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn seeding_follows_default_flags() {
    let sections =
      OpenSections::seeded([false, true, false, true]);
    assert!(!sections.is_open(0));
    assert!(sections.is_open(1));
    assert!(sections.is_open(3));
  }

  #[test]
  fn sections_toggle_independently() {
    let sections =
      OpenSections::seeded([true, false]);
    let sections = sections.toggled(1);
    assert!(sections.is_open(0));
    assert!(sections.is_open(1));

    let sections = sections.toggled(0);
    assert!(!sections.is_open(0));
    assert!(sections.is_open(1));
  }

  #[test]
  fn exclusive_toggle_keeps_one_open() {
    assert_eq!(
      toggle_exclusive(None, 2),
      Some(2)
    );
    assert_eq!(
      toggle_exclusive(Some(2), 0),
      Some(0)
    );
    assert_eq!(
      toggle_exclusive(Some(0), 0),
      None
    );
  }
}
