use chrono::NaiveDate;
use tracing::{
  debug,
  trace
};

use crate::date::YearMonth;
use crate::grid::{
  MonthGrid,
  build_month_grid
};
use crate::selection::Selection;

pub const DEFAULT_YEAR_RADIUS: u32 = 10;

/// Quick-jump pickers in the calendar header. At most one is open.
#[derive(
  Debug, Clone, Copy, PartialEq, Eq,
)]
pub enum Dropdown {
  Year,
  Month
}

/// Per-instance calendar navigation state: the displayed month and the
/// open picker, if any.
#[derive(
  Debug, Clone, Copy, PartialEq, Eq,
)]
pub struct ViewState {
  month:    YearMonth,
  dropdown: Option<Dropdown>
}

impl ViewState {
  /// Opens on `initial_month` when given, else on the selection's anchor
  /// date, else on `today`.
  #[must_use]
  pub fn initial(
    initial_month: Option<NaiveDate>,
    selection: &Selection,
    today: NaiveDate
  ) -> Self {
    let base = initial_month
      .or_else(|| selection.anchor())
      .unwrap_or(today);
    debug!(
      %base,
      "initialized calendar view"
    );
    Self::showing(YearMonth::of(base))
  }

  #[must_use]
  pub fn showing(
    month: YearMonth
  ) -> Self {
    Self {
      month,
      dropdown: None
    }
  }

  #[must_use]
  pub fn month(&self) -> YearMonth {
    self.month
  }

  #[must_use]
  pub fn dropdown(
    &self
  ) -> Option<Dropdown> {
    self.dropdown
  }

  #[must_use]
  pub fn is_open(
    &self,
    dropdown: Dropdown
  ) -> bool {
    self.dropdown == Some(dropdown)
  }

  #[must_use]
  pub fn grid(&self) -> MonthGrid {
    build_month_grid(self.month)
  }

  #[must_use]
  pub fn prior(self) -> Self {
    self.step(-1)
  }

  #[must_use]
  pub fn next(self) -> Self {
    self.step(1)
  }

  fn step(
    self,
    months: i32
  ) -> Self {
    let month = self.month.shift(months);
    trace!(
      from = %self.month,
      to = %month,
      "paged calendar view"
    );
    Self::showing(month)
  }

  /// Opens `dropdown`, or closes it when it is already open. Opening one
  /// picker closes the other.
  #[must_use]
  pub fn toggle(
    self,
    dropdown: Dropdown
  ) -> Self {
    let dropdown =
      if self.is_open(dropdown) {
        None
      } else {
        Some(dropdown)
      };
    Self {
      month: self.month,
      dropdown
    }
  }

  #[must_use]
  pub fn dismiss(self) -> Self {
    Self::showing(self.month)
  }

  #[must_use]
  pub fn pick_year(
    self,
    year: i32
  ) -> Self {
    debug!(year, "picked year");
    Self::showing(
      self.month.with_year(year)
    )
  }

  #[must_use]
  pub fn pick_month(
    self,
    month: u32
  ) -> Self {
    debug!(month, "picked month");
    Self::showing(
      self.month.with_month(month)
    )
  }

  /// The selection a click on `date` proposes, or `None` when the cell
  /// is padding from another month or disabled.
  pub fn click_day<F>(
    &self,
    date: NaiveDate,
    selection: &Selection,
    is_disabled: F
  ) -> Option<Selection>
  where
    F: Fn(NaiveDate) -> bool
  {
    if !self.month.contains(date) {
      trace!(%date, "ignored click on padding day");
      return None;
    }
    if is_disabled(date) {
      trace!(%date, "ignored click on disabled day");
      return None;
    }
    Some(selection.propose(date))
  }
}

/// The years listed in the year picker: `radius` before `center`,
/// `center` itself and `radius` after.
#[must_use]
pub fn year_window(
  center: i32,
  radius: u32
) -> Vec<i32> {
  let radius = radius as i32;
  (center.saturating_sub(radius)
    ..=center.saturating_add(radius))
    .collect()
}

#[must_use]
pub fn month_choices() -> [u32; 12] {
  [1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12]
}
