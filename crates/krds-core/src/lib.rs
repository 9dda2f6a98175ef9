//! Framework-independent logic behind the KRDS components: the calendar
//! month grid, day classification, selection and navigation state, and
//! pagination windowing. Everything here is pure and host-testable; the
//! `krds_ui` crate binds it to markup.

pub mod classify;
pub mod config;
pub mod date;
pub mod disclosure;
pub mod grid;
pub mod pagination;
pub mod selection;
pub mod variants;
pub mod view;

pub use classify::{
  DayState,
  DayTag,
  classify
};
pub use config::KrdsConfig;
pub use date::{
  ClockZone,
  YearMonth
};
pub use grid::{
  MonthGrid,
  build_month_grid
};
pub use pagination::{
  PageItem,
  PageJump
};
pub use selection::{
  DateRange,
  Selection,
  SelectionMode
};
pub use view::{
  Dropdown,
  ViewState
};
