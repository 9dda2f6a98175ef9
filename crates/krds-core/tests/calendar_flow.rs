use chrono::{Datelike, NaiveDate, Weekday};
use krds_core::pagination::{page_items, resolve_page_input, sanitize_page_input};
use krds_core::{
    DateRange, DayTag, Dropdown, PageItem, PageJump, Selection, SelectionMode, ViewState,
    YearMonth, classify,
};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
}

fn is_weekend(day: NaiveDate) -> bool {
    matches!(day.weekday(), Weekday::Sat | Weekday::Sun)
}

#[test]
fn range_picker_two_clicks_then_restart() {
    let today = date(2026, 10, 16);
    let mut selection = Selection::empty(SelectionMode::Range);
    let view = ViewState::initial(None, &selection, today);
    assert_eq!(view.month(), YearMonth::new(2026, 10));

    // Weekends are disabled, so clicking Saturday the 24th proposes nothing.
    assert_eq!(view.click_day(date(2026, 10, 24), &selection, is_weekend), None);

    selection = view
        .click_day(date(2026, 10, 22), &selection, is_weekend)
        .expect("weekday is clickable");
    selection = view
        .click_day(date(2026, 10, 13), &selection, is_weekend)
        .expect("weekday is clickable");
    assert_eq!(
        selection,
        Selection::Range(DateRange::between(date(2026, 10, 13), date(2026, 10, 22)))
    );

    let tagged: Vec<_> = view
        .grid()
        .days()
        .filter(|day| {
            classify(*day, view.month(), today, &selection, is_weekend).has(DayTag::InRange)
        })
        .collect();
    // 14th..21st minus the weekend of the 17th/18th.
    assert_eq!(tagged.len(), 6);
    assert!(!tagged.contains(&date(2026, 10, 17)));

    let weekend_inside = classify(date(2026, 10, 17), view.month(), today, &selection, is_weekend);
    assert!(weekend_inside.has(DayTag::Disabled));
    assert!(!weekend_inside.has(DayTag::InRange));

    selection = view
        .click_day(date(2026, 10, 29), &selection, is_weekend)
        .expect("weekday is clickable");
    assert_eq!(selection, Selection::Range(DateRange::starting(date(2026, 10, 29))));
}

#[test]
fn navigating_to_other_month_changes_interactive_cells() {
    let today = date(2026, 10, 16);
    let selection = Selection::Single(Some(date(2026, 11, 2)));
    let view = ViewState::initial(None, &selection, today);
    assert_eq!(view.month(), YearMonth::new(2026, 11));

    // The 2nd of November sits in row 0 of the November grid, but appears as
    // trailing padding in the October grid and is inert there.
    let october = view.prior();
    let padded = classify(date(2026, 11, 2), october.month(), today, &selection, |_| false);
    assert_eq!(padded.tags.iter().copied().collect::<Vec<_>>(), vec![DayTag::OtherMonth]);
    assert!(!padded.interactive);
    assert!(october.grid().days().any(|day| day == date(2026, 11, 2)));

    let picked = october.toggle(Dropdown::Year).pick_year(2030);
    assert_eq!(picked.month(), YearMonth::new(2030, 10));
    assert_eq!(picked.dropdown(), None);
}

#[test]
fn pagination_walkthrough() {
    let items = page_items(50, 99);
    assert_eq!(
        items,
        vec![
            PageItem::Page(1),
            PageItem::Ellipsis,
            PageItem::Page(48),
            PageItem::Page(49),
            PageItem::Page(50),
            PageItem::Page(51),
            PageItem::Page(52),
            PageItem::Ellipsis,
            PageItem::Page(99),
        ]
    );

    let typed = sanitize_page_input("7a3");
    assert_eq!(typed, "73");
    assert_eq!(resolve_page_input(&typed, 50, 99), PageJump::Go(73));
    assert_eq!(resolve_page_input("abc", 50, 99), PageJump::Revert(50));
}
