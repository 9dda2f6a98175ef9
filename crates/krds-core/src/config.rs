use std::fs;
use std::path::Path;
use std::sync::OnceLock;

use anyhow::Context;
use chrono::{
  Datelike,
  NaiveDate
};
use chrono_tz::Tz;
use serde::Deserialize;
use tracing::{
  error,
  info,
  warn
};

use crate::date::{
  ClockZone,
  YearMonth
};
use crate::view::DEFAULT_YEAR_RADIUS;

const EMBEDDED_CONFIG_TOML: &str =
  include_str!("../assets/krds.toml");
const DEFAULT_TIMEZONE: &str =
  "Asia/Seoul";
/// `timezone` value that reads "today" from the host clock.
const LOCAL_TIMEZONE: &str = "local";
const MAX_YEAR_RADIUS: u32 = 100;

fn default_timezone() -> String {
  DEFAULT_TIMEZONE.to_string()
}

fn default_year_radius() -> u32 {
  DEFAULT_YEAR_RADIUS
}

fn default_weekday_labels() -> Vec<String>
{
  ["일", "월", "화", "수", "목", "금", "토"]
    .into_iter()
    .map(str::to_string)
    .collect()
}

fn text(value: &str) -> String {
  value.to_string()
}

#[derive(
  Debug, Clone, PartialEq, Deserialize,
)]
pub struct KrdsConfig {
  #[serde(default)]
  pub version:    u32,
  #[serde(default)]
  pub calendar:   CalendarConfig,
  #[serde(default)]
  pub pagination: PaginationConfig,
  #[serde(default)]
  pub layout:     LayoutConfig
}

#[derive(
  Debug, Clone, PartialEq, Deserialize,
)]
#[serde(default)]
pub struct CalendarConfig {
  pub timezone:         String,
  pub year_radius:      u32,
  pub weekday_labels:   Vec<String>,
  pub title_format:     String,
  pub month_format:     String,
  pub year_format:      String,
  pub day_label_format: String,
  pub prev_label:       String,
  pub next_label:       String,
  pub cancel_label:     String,
  pub confirm_label:    String
}

#[derive(
  Debug, Clone, PartialEq, Deserialize,
)]
#[serde(default)]
pub struct PaginationConfig {
  pub prev_label:        String,
  pub next_label:        String,
  pub go_label:          String,
  pub input_label:       String,
  pub page_label_format: String
}

#[derive(
  Debug, Clone, PartialEq, Deserialize,
)]
#[serde(default)]
pub struct LayoutConfig {
  pub logo_placeholder:     String,
  pub slogan_placeholder:   String,
  pub container_link_label: String
}

impl Default for KrdsConfig {
  fn default() -> Self {
    Self {
      version:    1,
      calendar:   CalendarConfig::default(),
      pagination:
        PaginationConfig::default(),
      layout:     LayoutConfig::default()
    }
  }
}

impl Default for CalendarConfig {
  fn default() -> Self {
    Self {
      timezone:         default_timezone(),
      year_radius:      default_year_radius(),
      weekday_labels:
        default_weekday_labels(),
      title_format:     text(
        "{year}년 {month}월"
      ),
      month_format:     text("{month}월"),
      year_format:      text("{year}년"),
      day_label_format: text(
        "{year}년 {month}월 {day}일"
      ),
      prev_label:       text("이전 달"),
      next_label:       text("다음 달"),
      cancel_label:     text("취소"),
      confirm_label:    text("확인")
    }
  }
}

impl Default for PaginationConfig {
  fn default() -> Self {
    Self {
      prev_label:        text("이전"),
      next_label:        text("다음"),
      go_label:          text("이동"),
      input_label:       text(
        "페이지 번호 입력"
      ),
      page_label_format: text(
        "{page}페이지"
      )
    }
  }
}

impl Default for LayoutConfig {
  fn default() -> Self {
    Self {
      logo_placeholder:     text("로고"),
      slogan_placeholder:   text("슬로건"),
      container_link_label: text(
        "바로가기"
      )
    }
  }
}

impl KrdsConfig {
  /// Parses and sanitizes a TOML document.
  pub fn parse(
    raw: &str
  ) -> anyhow::Result<Self> {
    let mut config =
      toml::from_str::<KrdsConfig>(raw)
        .context(
          "failed to parse krds config"
        )?;
    sanitize_config(&mut config);
    Ok(config)
  }

  #[tracing::instrument]
  pub fn from_path(
    path: &Path
  ) -> anyhow::Result<Self> {
    let raw = fs::read_to_string(path)
      .with_context(|| {
        format!(
          "failed to read {}",
          path.display()
        )
      })?;
    let config = Self::parse(&raw)
      .with_context(|| {
        format!(
          "invalid config in {}",
          path.display()
        )
      })?;
    info!(path = %path.display(), "loaded krds config");
    Ok(config)
  }

  /// The configuration compiled into the library. Falls back to defaults
  /// when the embedded document does not parse.
  #[must_use]
  pub fn embedded() -> Self {
    match Self::parse(EMBEDDED_CONFIG_TOML)
    {
      | Ok(config) => {
        info!(
          version = config.version,
          timezone = %config.calendar.timezone,
          "loaded embedded krds config"
        );
        config
      }
      | Err(error) => {
        error!(error = %format!("{error:#}"), "failed parsing embedded krds config; using defaults");
        Self::default()
      }
    }
  }
}

/// Process-wide read-only configuration, loaded on first use.
pub fn shared() -> &'static KrdsConfig {
  static SHARED: OnceLock<KrdsConfig> =
    OnceLock::new();
  SHARED.get_or_init(KrdsConfig::embedded)
}

impl CalendarConfig {
  #[must_use]
  pub fn clock_zone(&self) -> ClockZone {
    parse_clock_zone(&self.timezone)
      .or_else(|| {
        parse_clock_zone(DEFAULT_TIMEZONE)
      })
      .unwrap_or(ClockZone::Named(
        chrono_tz::UTC
      ))
  }

  #[must_use]
  pub fn today(&self) -> NaiveDate {
    self.clock_zone().today()
  }

  #[must_use]
  pub fn month_title(
    &self,
    month: YearMonth
  ) -> String {
    fill_template(
      &self.title_format,
      &[
        ("year", month.year().to_string()),
        (
          "month",
          month.month().to_string()
        ),
      ]
    )
  }

  #[must_use]
  pub fn year_label(
    &self,
    year: i32
  ) -> String {
    fill_template(
      &self.year_format,
      &[("year", year.to_string())]
    )
  }

  #[must_use]
  pub fn month_label(
    &self,
    month: u32
  ) -> String {
    fill_template(
      &self.month_format,
      &[("month", month.to_string())]
    )
  }

  /// Accessible label for a single grid cell.
  #[must_use]
  pub fn day_label(
    &self,
    date: NaiveDate
  ) -> String {
    fill_template(
      &self.day_label_format,
      &[
        ("year", date.year().to_string()),
        ("month", date.month().to_string()),
        ("day", date.day().to_string()),
      ]
    )
  }
}

impl PaginationConfig {
  #[must_use]
  pub fn page_label(
    &self,
    page: u32
  ) -> String {
    fill_template(
      &self.page_label_format,
      &[("page", page.to_string())]
    )
  }
}

/// Replaces `{name}` placeholders; unknown placeholders are left as-is.
#[must_use]
pub fn fill_template(
  template: &str,
  values: &[(&str, String)]
) -> String {
  values.iter().fold(
    template.to_string(),
    |acc, (name, value)| {
      acc.replace(
        &format!("{{{name}}}"),
        value
      )
    }
  )
}

fn parse_clock_zone(
  raw: &str
) -> Option<ClockZone> {
  let trimmed = raw.trim();
  if trimmed.is_empty() {
    return None;
  }
  if trimmed
    .eq_ignore_ascii_case(LOCAL_TIMEZONE)
  {
    return Some(ClockZone::Local);
  }
  trimmed
    .parse::<Tz>()
    .ok()
    .map(ClockZone::Named)
}

fn sanitize_config(
  config: &mut KrdsConfig
) {
  let calendar_defaults =
    CalendarConfig::default();
  let calendar = &mut config.calendar;

  if parse_clock_zone(&calendar.timezone)
    .is_none()
  {
    warn!(
      timezone = %calendar.timezone,
      "invalid timezone id; using default"
    );
    calendar.timezone =
      default_timezone();
  }

  if calendar.year_radius == 0 {
    calendar.year_radius =
      default_year_radius();
  }
  if calendar.year_radius
    > MAX_YEAR_RADIUS
  {
    calendar.year_radius =
      MAX_YEAR_RADIUS;
  }

  if calendar.weekday_labels.len() != 7
    || calendar
      .weekday_labels
      .iter()
      .any(|label| label.trim().is_empty())
  {
    warn!(
      count = calendar.weekday_labels.len(),
      "weekday_labels needs seven \
       non-empty entries; using defaults"
    );
    calendar.weekday_labels =
      default_weekday_labels();
  }

  fill_blank(
    &mut calendar.title_format,
    &calendar_defaults.title_format
  );
  fill_blank(
    &mut calendar.month_format,
    &calendar_defaults.month_format
  );
  fill_blank(
    &mut calendar.year_format,
    &calendar_defaults.year_format
  );
  fill_blank(
    &mut calendar.day_label_format,
    &calendar_defaults.day_label_format
  );
  fill_blank(
    &mut calendar.prev_label,
    &calendar_defaults.prev_label
  );
  fill_blank(
    &mut calendar.next_label,
    &calendar_defaults.next_label
  );
  fill_blank(
    &mut calendar.cancel_label,
    &calendar_defaults.cancel_label
  );
  fill_blank(
    &mut calendar.confirm_label,
    &calendar_defaults.confirm_label
  );

  let pagination_defaults =
    PaginationConfig::default();
  let pagination = &mut config.pagination;
  fill_blank(
    &mut pagination.prev_label,
    &pagination_defaults.prev_label
  );
  fill_blank(
    &mut pagination.next_label,
    &pagination_defaults.next_label
  );
  fill_blank(
    &mut pagination.go_label,
    &pagination_defaults.go_label
  );
  fill_blank(
    &mut pagination.input_label,
    &pagination_defaults.input_label
  );
  fill_blank(
    &mut pagination.page_label_format,
    &pagination_defaults.page_label_format
  );

  let layout_defaults =
    LayoutConfig::default();
  let layout = &mut config.layout;
  fill_blank(
    &mut layout.logo_placeholder,
    &layout_defaults.logo_placeholder
  );
  fill_blank(
    &mut layout.slogan_placeholder,
    &layout_defaults.slogan_placeholder
  );
  fill_blank(
    &mut layout.container_link_label,
    &layout_defaults.container_link_label
  );
}

fn fill_blank(
  value: &mut String,
  fallback: &str
) {
  if value.trim().is_empty() {
    *value = fallback.to_string();
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn embedded_config_matches_defaults() {
    let embedded =
      KrdsConfig::parse(EMBEDDED_CONFIG_TOML)
        .expect("embedded config parses");
    assert_eq!(
      embedded,
      KrdsConfig::default()
    );
  }

  #[test]
  fn missing_sections_use_defaults() {
    let config = KrdsConfig::parse(
      "version = 2\n"
    )
    .expect("parse minimal config");
    assert_eq!(config.version, 2);
    assert_eq!(
      config.calendar,
      CalendarConfig::default()
    );
  }

  #[test]
  fn sanitize_repairs_bad_values() {
    let config = KrdsConfig::parse(
      r#"
[calendar]
timezone = "Mars/Olympus"
year_radius = 0
weekday_labels = ["S", "M"]
cancel_label = "  "

[pagination]
go_label = ""
"#
    )
    .expect("parse config");
    assert_eq!(
      config.calendar.timezone,
      DEFAULT_TIMEZONE
    );
    assert_eq!(
      config.calendar.year_radius,
      DEFAULT_YEAR_RADIUS
    );
    assert_eq!(
      config.calendar.weekday_labels,
      default_weekday_labels()
    );
    assert_eq!(
      config.calendar.cancel_label,
      "취소"
    );
    assert_eq!(
      config.pagination.go_label,
      "이동"
    );
  }

  #[test]
  fn oversized_radius_is_capped() {
    let config = KrdsConfig::parse(
      "[calendar]\nyear_radius = 5000\n"
    )
    .expect("parse config");
    assert_eq!(
      config.calendar.year_radius,
      MAX_YEAR_RADIUS
    );
  }

  #[test]
  fn malformed_toml_is_an_error() {
    let error =
      KrdsConfig::parse("[calendar")
        .expect_err("must not parse");
    assert!(
      format!("{error:#}")
        .contains("failed to parse")
    );
  }

  #[test]
  fn labels_fill_templates() {
    let calendar = CalendarConfig::default();
    assert_eq!(
      calendar.month_title(YearMonth::new(
        2026, 10
      )),
      "2026년 10월"
    );
    assert_eq!(
      calendar.day_label(
        NaiveDate::from_ymd_opt(
          2026, 3, 1
        )
        .expect("valid date")
      ),
      "2026년 3월 1일"
    );
    assert_eq!(
      PaginationConfig::default()
        .page_label(12),
      "12페이지"
    );
    assert_eq!(
      fill_template(
        "{a}-{b}",
        &[("a", "1".to_string())]
      ),
      "1-{b}"
    );
  }

  #[test]
  fn timezone_resolves_configured_zone() {
    assert_eq!(
      CalendarConfig::default().clock_zone(),
      ClockZone::Named(
        chrono_tz::Asia::Seoul
      )
    );
  }

  #[test]
  fn local_timezone_uses_host_clock() {
    for raw in ["local", " Local "] {
      let config = KrdsConfig::parse(
        &format!(
          "[calendar]\ntimezone = \"{raw}\"\n"
        )
      )
      .expect("parse config");
      assert_eq!(
        config.calendar.timezone,
        raw
      );
      assert_eq!(
        config.calendar.clock_zone(),
        ClockZone::Local
      );
    }
  }
}
