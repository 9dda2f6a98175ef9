use chrono::NaiveDate;

use crate::date::{
  YearMonth,
  add_days,
  start_of_week
};

pub const GRID_ROWS: usize = 6;
pub const GRID_COLUMNS: usize = 7;

/// Six consecutive weeks covering a month. The height is fixed even when
/// five weeks would tile the month, so the calendar never changes size
/// while paging.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthGrid {
  month: YearMonth,
  weeks: [[NaiveDate; GRID_COLUMNS];
    GRID_ROWS]
}

impl MonthGrid {
  #[must_use]
  pub fn month(&self) -> YearMonth {
    self.month
  }

  #[must_use]
  pub fn weeks(
    &self
  ) -> &[[NaiveDate; GRID_COLUMNS];
       GRID_ROWS] {
    &self.weeks
  }

  pub fn days(
    &self
  ) -> impl Iterator<Item = NaiveDate> + '_
  {
    self
      .weeks
      .iter()
      .flat_map(|week| week.iter().copied())
  }

  #[must_use]
  pub fn first(&self) -> NaiveDate {
    self.weeks[0][0]
  }

  #[must_use]
  pub fn last(&self) -> NaiveDate {
    self.weeks[GRID_ROWS - 1]
      [GRID_COLUMNS - 1]
  }
}

#[must_use]
pub fn build_month_grid(
  month: YearMonth
) -> MonthGrid {
  let grid_start =
    start_of_week(month.first_day());
  let mut weeks = [[grid_start;
    GRID_COLUMNS];
    GRID_ROWS];

  for (row, week) in
    weeks.iter_mut().enumerate()
  {
    for (column, cell) in
      week.iter_mut().enumerate()
    {
      let offset =
        (row * GRID_COLUMNS + column) as i64;
      *cell = add_days(grid_start, offset);
    }
  }

  tracing::trace!(
    %month,
    first = %grid_start,
    "built month grid"
  );

  MonthGrid {
    month,
    weeks
  }
}

#[cfg(test)]
mod tests {
  use chrono::{
    Datelike,
    Weekday
  };

  use super::*;

  #[test]
  fn grid_is_forty_two_consecutive_days() {
    for year in [1999, 2024, 2026, 2100] {
      for month in 1..=12 {
        let grid = build_month_grid(
          YearMonth::new(year, month)
        );
        let days: Vec<_> =
          grid.days().collect();
        assert_eq!(days.len(), 42);
        assert_eq!(
          days[0].weekday(),
          Weekday::Sun
        );
        for pair in days.windows(2) {
          assert_eq!(
            add_days(pair[0], 1),
            pair[1]
          );
        }
        assert!(
          days.contains(
            &grid.month().first_day()
          )
        );
        assert!(
          days.contains(
            &grid.month().last_day()
          )
        );
      }
    }
  }

  #[test]
  fn month_starting_on_sunday_has_no_leading_padding()
  {
    // February 2026 starts on a Sunday and spans exactly four weeks.
    let grid = build_month_grid(
      YearMonth::new(2026, 2)
    );
    assert_eq!(
      grid.first(),
      NaiveDate::from_ymd_opt(2026, 2, 1)
        .expect("valid date")
    );
    assert_eq!(
      grid.last(),
      NaiveDate::from_ymd_opt(
        2026, 3, 14
      )
      .expect("valid date")
    );
  }

  #[test]
  fn leading_days_come_from_previous_month()
  {
    // October 2026 starts on a Thursday.
    let grid = build_month_grid(
      YearMonth::new(2026, 10)
    );
    assert_eq!(
      grid.weeks()[0][0],
      NaiveDate::from_ymd_opt(
        2026, 9, 27
      )
      .expect("valid date")
    );
    assert_eq!(
      grid.weeks()[0][4],
      NaiveDate::from_ymd_opt(2026, 10, 1)
        .expect("valid date")
    );
  }
}
