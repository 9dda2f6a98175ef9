use std::io::{self, IsTerminal, Write};

use chrono::{Datelike, NaiveDate};
use krds_core::config::{CalendarConfig, PaginationConfig};
use krds_core::pagination::{PageItem, PageJump, has_next, has_prev, page_items};
use krds_core::{DayState, DayTag, Selection, YearMonth, build_month_grid, classify};
use unicode_width::UnicodeWidthStr;

/// Display width of one grid cell.
const CELL_WIDTH: usize = 4;

#[derive(Debug, Clone)]
pub struct Renderer {
    color: bool,
}

impl Renderer {
    /// Colors only when stdout is a terminal.
    pub fn detect() -> Self {
        Self {
            color: io::stdout().is_terminal(),
        }
    }

    pub fn plain() -> Self {
        Self { color: false }
    }

    #[tracing::instrument(skip(self, config, selection, is_disabled))]
    pub fn month_grid<F>(
        &self,
        config: &CalendarConfig,
        month: YearMonth,
        today: NaiveDate,
        selection: &Selection,
        is_disabled: F,
    ) -> String
    where
        F: Fn(NaiveDate) -> bool,
    {
        let mut lines = Vec::with_capacity(8);
        lines.push(config.month_title(month));

        let header = config
            .weekday_labels
            .iter()
            .enumerate()
            .map(|(idx, label)| {
                let padded = pad_left(label, CELL_WIDTH);
                match idx {
                    0 => self.paint(&padded, "31"),
                    6 => self.paint(&padded, "34"),
                    _ => padded,
                }
            })
            .collect::<String>();
        lines.push(header);

        let grid = build_month_grid(month);
        for week in grid.weeks() {
            let row = week
                .iter()
                .map(|day| {
                    let state = classify(*day, month, today, selection, &is_disabled);
                    self.cell(*day, &state)
                })
                .collect::<String>();
            lines.push(row);
        }

        lines.join("\n")
    }

    /// One line naming the selection mode and its current value.
    pub fn selection_summary(&self, selection: &Selection) -> String {
        let value = match selection {
            Selection::Single(Some(day)) => day.to_string(),
            Selection::Single(None) => "-".to_string(),
            Selection::Range(range) if range.is_complete() => {
                let start = range.start().map(|day| day.to_string()).unwrap_or_default();
                let end = range.end().map(|day| day.to_string()).unwrap_or_default();
                format!("{start} ~ {end}")
            }
            Selection::Range(range) => match range.start() {
                Some(start) => format!("{start} ~ (open)"),
                None => "-".to_string(),
            },
        };
        format!("{}: {value}", selection.mode().as_key())
    }

    pub fn page_strip(&self, labels: &PaginationConfig, current: u32, total: u32) -> String {
        let mut parts = Vec::new();
        parts.push(self.nav(&labels.prev_label, has_prev(current)));
        for item in page_items(current, total) {
            parts.push(match item {
                PageItem::Page(page) if page == current => self.paint(&format!("[{page}]"), "1"),
                PageItem::Page(page) => page.to_string(),
                PageItem::Ellipsis => "…".to_string(),
            });
        }
        parts.push(self.nav(&labels.next_label, has_next(current, total)));
        parts.join(" ")
    }

    fn nav(&self, label: &str, enabled: bool) -> String {
        if enabled {
            label.to_string()
        } else {
            self.paint(&format!("({label})"), "2")
        }
    }

    fn cell(&self, day: NaiveDate, state: &DayState) -> String {
        if state.has(DayTag::OtherMonth) {
            return self.paint(&format!("({:>2})", day.day()), "2");
        }

        let text = format!(" {:>2}{}", day.day(), marker(state));
        if state.has(DayTag::Disabled) {
            self.paint(&text, "2")
        } else if state.is_pressed() || state.has(DayTag::InRange) {
            self.paint(&text, "7")
        } else if state.has(DayTag::Sunday) {
            self.paint(&text, "31")
        } else if state.has(DayTag::Saturday) {
            self.paint(&text, "34")
        } else {
            text
        }
    }

    fn paint(&self, text: &str, code: &str) -> String {
        if !self.color {
            return text.to_string();
        }
        format!("\x1b[{code}m{text}\x1b[0m")
    }
}

/// One-character legend for an in-month cell.
fn marker(state: &DayState) -> char {
    if state.is_pressed() {
        '*'
    } else if state.has(DayTag::InRange) {
        '~'
    } else if state.has(DayTag::Disabled) {
        'x'
    } else if state.has(DayTag::Today) {
        '!'
    } else {
        ' '
    }
}

pub fn describe_jump(jump: PageJump) -> String {
    match jump {
        PageJump::Go(page) => format!("go {page}"),
        PageJump::Revert(page) => format!("revert {page}"),
    }
}

fn pad_left(text: &str, width: usize) -> String {
    let used = UnicodeWidthStr::width(text);
    format!("{}{}", " ".repeat(width.saturating_sub(used)), text)
}

pub fn write_output<W: Write>(mut writer: W, text: &str) -> anyhow::Result<()> {
    writeln!(writer, "{text}")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use krds_core::DateRange;
    use krds_core::date::{is_saturday, is_sunday};

    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
    }

    fn calendar() -> CalendarConfig {
        CalendarConfig::default()
    }

    #[test]
    fn korean_weekday_header_aligns_to_cells() {
        let out = Renderer::plain().month_grid(
            &calendar(),
            YearMonth::new(2026, 3),
            date(2026, 3, 16),
            &Selection::default(),
            |_| false,
        );
        let lines: Vec<&str> = out.lines().collect();

        assert_eq!(lines.len(), 8);
        assert_eq!(lines[0], "2026년 3월");
        assert_eq!(UnicodeWidthStr::width(lines[1]), CELL_WIDTH * 7);
        for row in &lines[2..] {
            assert_eq!(UnicodeWidthStr::width(*row), CELL_WIDTH * 7);
        }
    }

    #[test]
    fn marks_padding_today_and_range() {
        let range = Selection::Range(DateRange::between(date(2026, 3, 10), date(2026, 3, 12)));
        let out = Renderer::plain().month_grid(
            &calendar(),
            YearMonth::new(2026, 3),
            date(2026, 3, 16),
            &range,
            |_| false,
        );
        let lines: Vec<&str> = out.lines().collect();

        // March 2026 starts on a Sunday; the last row is April padding.
        assert!(lines[2].starts_with("  1 "));
        assert!(lines[7].ends_with("(11)"));
        assert!(out.contains(" 10*"));
        assert!(out.contains(" 11~"));
        assert!(out.contains(" 12*"));
        assert!(out.contains(" 16!"));
    }

    #[test]
    fn disabled_weekends_are_marked() {
        let out = Renderer::plain().month_grid(
            &calendar(),
            YearMonth::new(2026, 3),
            date(2026, 1, 1),
            &Selection::Single(Some(date(2026, 3, 7))),
            |day| is_sunday(day) || is_saturday(day),
        );

        assert!(out.contains("  7x"));
        assert!(!out.contains("  7*"));
    }

    #[test]
    fn page_strip_brackets_current_and_dims_edges() {
        let labels = PaginationConfig::default();
        let renderer = Renderer::plain();

        assert_eq!(
            renderer.page_strip(&labels, 1, 99),
            "(이전) [1] 2 3 4 5 6 7 8 … 99 다음"
        );
        assert_eq!(
            renderer.page_strip(&labels, 50, 99),
            "이전 1 … 48 49 [50] 51 52 … 99 다음"
        );
        assert_eq!(renderer.page_strip(&labels, 3, 3), "이전 1 2 [3] (다음)");
    }

    #[test]
    fn selection_summary_names_mode_and_value() {
        let renderer = Renderer::plain();

        assert_eq!(renderer.selection_summary(&Selection::default()), "single: -");
        assert_eq!(
            renderer.selection_summary(&Selection::Single(Some(date(2026, 10, 16)))),
            "single: 2026-10-16"
        );
        assert_eq!(
            renderer.selection_summary(&Selection::Range(DateRange::starting(date(2026, 10, 20)))),
            "range: 2026-10-20 ~ (open)"
        );
        assert_eq!(
            renderer.selection_summary(&Selection::Range(DateRange::between(
                date(2026, 10, 20),
                date(2026, 10, 6)
            ))),
            "range: 2026-10-06 ~ 2026-10-20"
        );
        assert_eq!(
            renderer.selection_summary(&Selection::Range(DateRange::empty())),
            "range: -"
        );
    }

    #[test]
    fn jump_descriptions() {
        assert_eq!(describe_jump(PageJump::Go(7)), "go 7");
        assert_eq!(describe_jump(PageJump::Revert(3)), "revert 3");
    }
}
