use std::collections::BTreeSet;

use chrono::NaiveDate;

use crate::date::{
  YearMonth,
  is_in_range,
  is_same_day,
  is_saturday,
  is_sunday
};
use crate::selection::Selection;

/// Visual state of one grid cell.
#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  PartialOrd,
  Ord,
  Hash,
)]
pub enum DayTag {
  OtherMonth,
  Today,
  Sunday,
  Saturday,
  Disabled,
  Selected,
  RangeStart,
  RangeEnd,
  InRange
}

impl DayTag {
  #[must_use]
  pub fn as_class(self) -> &'static str {
    match self {
      | Self::OtherMonth => "other-month",
      | Self::Today => "today",
      | Self::Sunday => "sunday",
      | Self::Saturday => "saturday",
      | Self::Disabled => "disabled",
      | Self::Selected => "selected",
      | Self::RangeStart => "range-start",
      | Self::RangeEnd => "range-end",
      | Self::InRange => "in-range"
    }
  }
}

#[derive(
  Debug, Clone, PartialEq, Eq, Default,
)]
pub struct DayState {
  pub tags:        BTreeSet<DayTag>,
  pub interactive: bool
}

impl DayState {
  #[must_use]
  pub fn has(
    &self,
    tag: DayTag
  ) -> bool {
    self.tags.contains(&tag)
  }

  pub fn classes(
    &self
  ) -> impl Iterator<Item = &'static str> + '_
  {
    self
      .tags
      .iter()
      .map(|tag| tag.as_class())
  }

  /// Whether the cell shows as pressed to assistive technology.
  #[must_use]
  pub fn is_pressed(&self) -> bool {
    self.has(DayTag::Selected)
      || self.has(DayTag::RangeStart)
      || self.has(DayTag::RangeEnd)
  }
}

/// Classifies `date` for display inside `view`.
///
/// Out-of-month padding days carry only [`DayTag::OtherMonth`]. Disabled
/// days keep their today/weekday tags but never receive selection tags.
/// Neither kind is interactive.
pub fn classify<F>(
  date: NaiveDate,
  view: YearMonth,
  today: NaiveDate,
  selection: &Selection,
  is_disabled: F
) -> DayState
where
  F: Fn(NaiveDate) -> bool
{
  let mut tags = BTreeSet::new();

  if !view.contains(date) {
    tags.insert(DayTag::OtherMonth);
    return DayState {
      tags,
      interactive: false
    };
  }

  if is_same_day(date, today) {
    tags.insert(DayTag::Today);
  }
  if is_sunday(date) {
    tags.insert(DayTag::Sunday);
  }
  if is_saturday(date) {
    tags.insert(DayTag::Saturday);
  }

  if is_disabled(date) {
    tags.insert(DayTag::Disabled);
    return DayState {
      tags,
      interactive: false
    };
  }

  match selection {
    | Selection::Single(value) => {
      if value.is_some_and(|selected| {
        is_same_day(date, selected)
      }) {
        tags.insert(DayTag::Selected);
      }
    }
    | Selection::Range(range) => {
      match (range.start(), range.end()) {
        | (Some(start), None) => {
          if is_same_day(date, start) {
            tags.insert(DayTag::Selected);
          }
        }
        | (Some(start), Some(end)) => {
          if is_same_day(date, start) {
            tags.insert(DayTag::RangeStart);
          }
          if is_same_day(date, end) {
            tags.insert(DayTag::RangeEnd);
          }
          if is_in_range(
            date,
            Some(start),
            Some(end)
          ) {
            tags.insert(DayTag::InRange);
          }
        }
        | (None, _) => {}
      }
    }
  }

  DayState {
    tags,
    interactive: true
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::selection::DateRange;

  fn day(
    month: u32,
    d: u32
  ) -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, month, d)
      .expect("valid date")
  }

  fn october() -> YearMonth {
    YearMonth::new(2026, 10)
  }

  fn never(_: NaiveDate) -> bool {
    false
  }

  fn tags(state: &DayState) -> Vec<DayTag> {
    state.tags.iter().copied().collect()
  }

  #[test]
  fn other_month_suppresses_everything() {
    let padding = day(9, 30);
    let selection = Selection::Range(
      DateRange::between(
        day(9, 28),
        day(10, 3)
      )
    );
    let state = classify(
      padding,
      october(),
      padding,
      &selection,
      |_| true
    );
    assert_eq!(
      tags(&state),
      vec![DayTag::OtherMonth]
    );
    assert!(!state.interactive);
  }

  #[test]
  fn today_and_weekend_tags_accumulate() {
    // 2026-10-17 is a Saturday.
    let state = classify(
      day(10, 17),
      october(),
      day(10, 17),
      &Selection::default(),
      never
    );
    assert_eq!(
      tags(&state),
      vec![DayTag::Today, DayTag::Saturday]
    );
    assert!(state.interactive);

    let sunday = classify(
      day(10, 18),
      october(),
      day(10, 17),
      &Selection::default(),
      never
    );
    assert_eq!(
      tags(&sunday),
      vec![DayTag::Sunday]
    );
  }

  #[test]
  fn disabled_day_never_gets_selection_tags()
  {
    let target = day(10, 11);
    let selections = [
      Selection::Single(Some(target)),
      Selection::Range(DateRange::starting(
        target
      )),
      Selection::Range(DateRange::between(
        target,
        day(10, 20)
      )),
      Selection::Range(DateRange::between(
        day(10, 1),
        target
      )),
      Selection::Range(DateRange::between(
        day(10, 1),
        day(10, 20)
      )),
    ];
    for selection in &selections {
      let state = classify(
        target,
        october(),
        day(10, 16),
        selection,
        |d| d == target
      );
      assert_eq!(
        tags(&state),
        vec![
          DayTag::Sunday,
          DayTag::Disabled
        ]
      );
      assert!(!state.interactive);
      assert!(!state.is_pressed());
    }
  }

  #[test]
  fn single_mode_marks_selected_day() {
    let selection =
      Selection::Single(Some(day(10, 14)));
    let hit = classify(
      day(10, 14),
      october(),
      day(10, 16),
      &selection,
      never
    );
    assert_eq!(
      tags(&hit),
      vec![DayTag::Selected]
    );
    assert!(hit.is_pressed());

    let miss = classify(
      day(10, 15),
      october(),
      day(10, 16),
      &selection,
      never
    );
    assert!(miss.tags.is_empty());
  }

  #[test]
  fn half_open_range_marks_start_as_selected()
  {
    let selection = Selection::Range(
      DateRange::starting(day(10, 6))
    );
    let state = classify(
      day(10, 6),
      october(),
      day(10, 16),
      &selection,
      never
    );
    assert_eq!(
      tags(&state),
      vec![DayTag::Selected]
    );
  }

  #[test]
  fn completed_range_marks_endpoints_and_interior()
  {
    let selection = Selection::Range(
      DateRange::between(
        day(10, 6),
        day(10, 9)
      )
    );
    let classes = |d: u32| {
      tags(&classify(
        day(10, d),
        october(),
        day(10, 16),
        &selection,
        never
      ))
    };
    assert_eq!(
      classes(6),
      vec![DayTag::RangeStart]
    );
    assert_eq!(
      classes(7),
      vec![DayTag::InRange]
    );
    assert_eq!(
      classes(8),
      vec![DayTag::InRange]
    );
    assert_eq!(
      classes(9),
      vec![DayTag::RangeEnd]
    );
    assert!(classes(5).is_empty());
  }

  #[test]
  fn one_day_range_is_both_endpoints() {
    let selection = Selection::Range(
      DateRange::between(
        day(10, 6),
        day(10, 6)
      )
    );
    let state = classify(
      day(10, 6),
      october(),
      day(10, 16),
      &selection,
      never
    );
    assert_eq!(
      tags(&state),
      vec![
        DayTag::RangeStart,
        DayTag::RangeEnd
      ]
    );
  }
}
