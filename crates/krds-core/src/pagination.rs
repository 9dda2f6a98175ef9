use tracing::debug;

/// Page counts at or below this show every page.
pub const FULL_RANGE_LIMIT: u32 = 10;
/// Pages shown in the leading and trailing windows.
pub const EDGE_WINDOW: u32 = 8;
/// Pages shown on each side of the current page in the centered window.
pub const CENTER_RADIUS: u32 = 2;
/// How close to either end the current page must be to use an edge window.
pub const EDGE_THRESHOLD: u32 = 5;

#[derive(
  Debug, Clone, Copy, PartialEq, Eq,
)]
pub enum PageItem {
  Page(u32),
  Ellipsis
}

/// The windowed page strip for `current` out of `total` pages.
#[must_use]
pub fn page_items(
  current: u32,
  total: u32
) -> Vec<PageItem> {
  let total = total.max(1);
  let pages = |from: u32, to: u32| {
    (from..=to).map(PageItem::Page)
  };

  if total <= FULL_RANGE_LIMIT {
    return pages(1, total).collect();
  }

  if current <= EDGE_THRESHOLD {
    return pages(1, EDGE_WINDOW)
      .chain([
        PageItem::Ellipsis,
        PageItem::Page(total),
      ])
      .collect();
  }

  if current >= total - (EDGE_THRESHOLD - 1)
  {
    return [
      PageItem::Page(1),
      PageItem::Ellipsis,
    ]
    .into_iter()
    .chain(pages(
      total - (EDGE_WINDOW - 1),
      total
    ))
    .collect();
  }

  [PageItem::Page(1), PageItem::Ellipsis]
    .into_iter()
    .chain(pages(
      current - CENTER_RADIUS,
      current + CENTER_RADIUS
    ))
    .chain([
      PageItem::Ellipsis,
      PageItem::Page(total),
    ])
    .collect()
}

#[must_use]
pub fn has_prev(current: u32) -> bool {
  current > 1
}

#[must_use]
pub fn has_next(
  current: u32,
  total: u32
) -> bool {
  current < total
}

/// Keeps only ASCII digits, the way the page field filters keystrokes.
#[must_use]
pub fn sanitize_page_input(
  raw: &str
) -> String {
  raw
    .chars()
    .filter(char::is_ascii_digit)
    .collect()
}

/// What submitting the page field does.
#[derive(
  Debug, Clone, Copy, PartialEq, Eq,
)]
pub enum PageJump {
  /// Navigate to this page.
  Go(u32),
  /// Discard the input and show this page number again.
  Revert(u32)
}

#[must_use]
pub fn resolve_page_input(
  raw: &str,
  current: u32,
  total: u32
) -> PageJump {
  match raw.trim().parse::<u32>() {
    | Ok(page)
      if (1..=total).contains(&page) =>
    {
      PageJump::Go(page)
    }
    | parsed => {
      debug!(
        raw,
        current,
        total,
        valid_number = parsed.is_ok(),
        "rejected page input"
      );
      PageJump::Revert(current)
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn strip(items: &[PageItem]) -> String {
    items
      .iter()
      .map(|item| match item {
        | PageItem::Page(n) => n.to_string(),
        | PageItem::Ellipsis => "…".to_string()
      })
      .collect::<Vec<_>>()
      .join(" ")
  }

  #[test]
  fn small_totals_list_every_page() {
    assert_eq!(
      strip(&page_items(1, 1)),
      "1"
    );
    assert_eq!(
      strip(&page_items(4, 10)),
      "1 2 3 4 5 6 7 8 9 10"
    );
  }

  #[test]
  fn leading_window_near_start() {
    assert_eq!(
      strip(&page_items(1, 99)),
      "1 2 3 4 5 6 7 8 … 99"
    );
    assert_eq!(
      strip(&page_items(5, 99)),
      "1 2 3 4 5 6 7 8 … 99"
    );
  }

  #[test]
  fn centered_window_in_the_middle() {
    assert_eq!(
      strip(&page_items(50, 99)),
      "1 … 48 49 50 51 52 … 99"
    );
    assert_eq!(
      strip(&page_items(6, 99)),
      "1 … 4 5 6 7 8 … 99"
    );
    assert_eq!(
      strip(&page_items(94, 99)),
      "1 … 92 93 94 95 96 … 99"
    );
  }

  #[test]
  fn trailing_window_near_end() {
    assert_eq!(
      strip(&page_items(97, 99)),
      "1 … 92 93 94 95 96 97 98 99"
    );
    assert_eq!(
      strip(&page_items(95, 99)),
      "1 … 92 93 94 95 96 97 98 99"
    );
    assert_eq!(
      strip(&page_items(11, 11)),
      "1 … 4 5 6 7 8 9 10 11"
    );
  }

  #[test]
  fn arrows_disable_at_the_edges() {
    assert!(!has_prev(1));
    assert!(has_prev(2));
    assert!(has_next(9, 10));
    assert!(!has_next(10, 10));
  }

  #[test]
  fn input_filter_drops_non_digits() {
    assert_eq!(
      sanitize_page_input("a1b2-3 "),
      "123"
    );
    assert_eq!(sanitize_page_input("abc"), "");
  }

  #[test]
  fn page_jump_validates_range() {
    assert_eq!(
      resolve_page_input("7", 3, 10),
      PageJump::Go(7)
    );
    assert_eq!(
      resolve_page_input("10", 3, 10),
      PageJump::Go(10)
    );
    assert_eq!(
      resolve_page_input("", 3, 10),
      PageJump::Revert(3)
    );
    assert_eq!(
      resolve_page_input("0", 3, 10),
      PageJump::Revert(3)
    );
    assert_eq!(
      resolve_page_input("11", 3, 10),
      PageJump::Revert(3)
    );
    assert_eq!(
      resolve_page_input(
        "99999999999999",
        3,
        10
      ),
      PageJump::Revert(3)
    );
  }

  #[test]
  fn letters_revert_without_jumping() {
    let typed = sanitize_page_input("abc");
    assert_eq!(
      resolve_page_input(&typed, 5, 99),
      PageJump::Revert(5)
    );
  }
}
