use chrono::NaiveDate;
use serde::{
  Deserialize,
  Serialize
};
use tracing::debug;

#[derive(
  Debug,
  Clone,
  Copy,
  Default,
  PartialEq,
  Eq,
  Serialize,
  Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum SelectionMode {
  #[default]
  Single,
  Range
}

impl SelectionMode {
  #[must_use]
  pub fn as_key(self) -> &'static str {
    match self {
      | Self::Single => "single",
      | Self::Range => "range"
    }
  }
}

/// Two optional endpoints. When both are present `start <= end`.
#[derive(
  Debug,
  Clone,
  Copy,
  Default,
  PartialEq,
  Eq,
  Serialize,
  Deserialize,
)]
pub struct DateRange {
  start: Option<NaiveDate>,
  end:   Option<NaiveDate>
}

impl DateRange {
  #[must_use]
  pub fn empty() -> Self {
    Self::default()
  }

  /// A range that has been started but not finished.
  #[must_use]
  pub fn starting(
    start: NaiveDate
  ) -> Self {
    Self {
      start: Some(start),
      end:   None
    }
  }

  /// Restores the ordering invariant on caller-supplied endpoints.
  #[must_use]
  pub fn from_parts(
    start: Option<NaiveDate>,
    end: Option<NaiveDate>
  ) -> Self {
    match (start, end) {
      | (Some(a), Some(b)) => {
        Self::between(a, b)
      }
      | (start, end) => {
        Self {
          start,
          end
        }
      }
    }
  }

  /// A completed range; the endpoints are reordered when needed.
  #[must_use]
  pub fn between(
    a: NaiveDate,
    b: NaiveDate
  ) -> Self {
    Self {
      start: Some(a.min(b)),
      end:   Some(a.max(b))
    }
  }

  #[must_use]
  pub fn start(self) -> Option<NaiveDate> {
    self.start
  }

  #[must_use]
  pub fn end(self) -> Option<NaiveDate> {
    self.end
  }

  #[must_use]
  pub fn is_complete(self) -> bool {
    self.start.is_some()
      && self.end.is_some()
  }

  /// Merges a click into the range: an empty or completed range restarts
  /// at `day`, a half-open range closes around `day`.
  #[must_use]
  pub fn extend_with(
    self,
    day: NaiveDate
  ) -> Self {
    match (self.start, self.end) {
      | (Some(start), None) => {
        Self::between(start, day)
      }
      | _ => Self::starting(day)
    }
  }
}

/// The caller-owned selection a calendar renders against.
#[derive(
  Debug, Clone, Copy, PartialEq, Eq,
)]
pub enum Selection {
  Single(Option<NaiveDate>),
  Range(DateRange)
}

impl Default for Selection {
  fn default() -> Self {
    Self::Single(None)
  }
}

impl Selection {
  #[must_use]
  pub fn empty(
    mode: SelectionMode
  ) -> Self {
    match mode {
      | SelectionMode::Single => {
        Self::Single(None)
      }
      | SelectionMode::Range => {
        Self::Range(DateRange::empty())
      }
    }
  }

  #[must_use]
  pub fn mode(&self) -> SelectionMode {
    match self {
      | Self::Single(_) => {
        SelectionMode::Single
      }
      | Self::Range(_) => {
        SelectionMode::Range
      }
    }
  }

  /// The date a calendar should open on when no explicit month is given.
  #[must_use]
  pub fn anchor(
    &self
  ) -> Option<NaiveDate> {
    match self {
      | Self::Single(value) => *value,
      | Self::Range(range) => {
        range.start()
      }
    }
  }

  /// The selection that results from clicking `day`. Callers are
  /// responsible for filtering non-interactive days first.
  #[must_use]
  pub fn propose(
    &self,
    day: NaiveDate
  ) -> Self {
    let next = match self {
      | Self::Single(_) => {
        Self::Single(Some(day))
      }
      | Self::Range(range) => {
        Self::Range(range.extend_with(day))
      }
    };
    debug!(
      %day,
      previous = ?self,
      next = ?next,
      "proposed selection"
    );
    next
  }
}
