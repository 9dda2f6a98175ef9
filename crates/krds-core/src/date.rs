use std::fmt;

use chrono::{
  Datelike,
  Duration,
  Local,
  NaiveDate,
  NaiveDateTime,
  Utc,
  Weekday
};
use chrono_tz::Tz;
use tracing::warn;

/// A displayed calendar month. Construction always normalizes the month
/// into `1..=12`, carrying overflow into the year, and keeps the year
/// within what `NaiveDate` can represent.
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
pub struct YearMonth {
  year:  i32,
  month: u32
}

impl YearMonth {
  /// Builds a month from a possibly out-of-range month number, so
  /// `(2025, 13)` is January 2026 and `(2026, 0)` is December 2025.
  #[must_use]
  pub fn new(
    year: i32,
    month: i32
  ) -> Self {
    let zero_based = month - 1;
    let carried = year.saturating_add(
      zero_based.div_euclid(12)
    );
    let month =
      zero_based.rem_euclid(12) as u32 + 1;
    let year = carried.clamp(
      NaiveDate::MIN.year(),
      NaiveDate::MAX.year()
    );
    if year != carried {
      warn!(
        requested = carried,
        year,
        "year outside supported range; clamped"
      );
    }
    Self {
      year,
      month
    }
  }

  #[must_use]
  pub fn of(date: NaiveDate) -> Self {
    Self {
      year:  date.year(),
      month: date.month()
    }
  }

  #[must_use]
  pub fn year(self) -> i32 {
    self.year
  }

  #[must_use]
  pub fn month(self) -> u32 {
    self.month
  }

  #[must_use]
  pub fn shift(
    self,
    months: i32
  ) -> Self {
    Self::new(
      self.year,
      self.month as i32 + months
    )
  }

  #[must_use]
  pub fn with_year(
    self,
    year: i32
  ) -> Self {
    Self::new(year, self.month as i32)
  }

  #[must_use]
  pub fn with_month(
    self,
    month: u32
  ) -> Self {
    Self::new(self.year, month as i32)
  }

  #[must_use]
  pub fn first_day(self) -> NaiveDate {
    first_day_of_month(
      self.year, self.month
    )
  }

  #[must_use]
  pub fn last_day(self) -> NaiveDate {
    add_days(
      self.shift(1).first_day(),
      -1
    )
  }

  #[must_use]
  pub fn contains(
    self,
    date: NaiveDate
  ) -> bool {
    date.year() == self.year
      && date.month() == self.month
  }
}

impl fmt::Display for YearMonth {
  fn fmt(
    &self,
    f: &mut fmt::Formatter<'_>
  ) -> fmt::Result {
    write!(
      f,
      "{:04}-{:02}",
      self.year, self.month
    )
  }
}

fn first_day_of_month(
  year: i32,
  month: u32
) -> NaiveDate {
  NaiveDate::from_ymd_opt(
    year, month, 1
  )
  .unwrap_or(NaiveDate::MIN)
}

#[must_use]
pub fn is_same_day(
  a: NaiveDate,
  b: NaiveDate
) -> bool {
  a == b
}

/// True when `date` lies strictly between the two endpoints, in either
/// order. Missing endpoints never contain anything.
#[must_use]
pub fn is_in_range(
  date: NaiveDate,
  start: Option<NaiveDate>,
  end: Option<NaiveDate>
) -> bool {
  let (Some(start), Some(end)) =
    (start, end)
  else {
    return false;
  };
  date > start.min(end)
    && date < start.max(end)
}

#[must_use]
pub fn start_of_day(
  moment: NaiveDateTime
) -> NaiveDate {
  moment.date()
}

#[must_use]
pub fn add_days(
  date: NaiveDate,
  days: i64
) -> NaiveDate {
  date
    .checked_add_signed(Duration::days(
      days
    ))
    .unwrap_or(date)
}

/// The Sunday on or before `day`.
#[must_use]
pub fn start_of_week(
  day: NaiveDate
) -> NaiveDate {
  let diff = day
    .weekday()
    .num_days_from_sunday()
    as i64;
  add_days(day, -diff)
}

#[must_use]
pub fn is_sunday(day: NaiveDate) -> bool {
  day.weekday() == Weekday::Sun
}

#[must_use]
pub fn is_saturday(
  day: NaiveDate
) -> bool {
  day.weekday() == Weekday::Sat
}

#[must_use]
pub fn today_in_timezone(
  timezone: Tz
) -> NaiveDate {
  Utc::now()
    .with_timezone(&timezone)
    .date_naive()
}

/// Where "today" is read from: the host clock's own offset, or a named
/// IANA zone.
#[derive(
  Debug, Clone, Copy, PartialEq, Eq,
)]
pub enum ClockZone {
  Local,
  Named(Tz)
}

impl ClockZone {
  #[must_use]
  pub fn today(self) -> NaiveDate {
    match self {
      | Self::Local => {
        Local::now().date_naive()
      }
      | Self::Named(timezone) => {
        today_in_timezone(timezone)
      }
    }
  }
}
