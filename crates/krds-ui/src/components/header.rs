use krds_core::config;
use krds_core::disclosure::toggle_exclusive;
use krds_core::variants::HeaderVariant;
use yew::{
  AttrValue,
  Callback,
  Html,
  MouseEvent,
  Properties,
  classes,
  function_component,
  html,
  use_node_ref,
  use_state
};

use super::link::{
  Link,
  LinkItem
};
use crate::hooks::use_outside_click;
use crate::icons;

/// A utility-bar entry. With dropdown entries it toggles a menu instead of
/// dispatching its own link.
#[derive(Clone, PartialEq, Default)]
pub struct UtilityItem {
  pub link:     LinkItem,
  pub dropdown: Vec<LinkItem>
}

impl UtilityItem {
  pub fn new(link: LinkItem) -> Self {
    Self {
      link,
      dropdown: Vec::new()
    }
  }

  #[must_use]
  pub fn with_dropdown(
    mut self,
    dropdown: Vec<LinkItem>
  ) -> Self {
    self.dropdown = dropdown;
    self
  }

  fn has_dropdown(&self) -> bool {
    !self.dropdown.is_empty()
  }
}

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
  #[prop_or_default]
  pub variant:           HeaderVariant,
  #[prop_or_default]
  pub logo:              Option<Html>,
  #[prop_or(true)]
  pub show_slogan:       bool,
  /// Official-site notice shown in the horizontal masthead.
  #[prop_or_default]
  pub official_notice:   Option<AttrValue>,
  #[prop_or_default]
  pub utility_items:     Vec<UtilityItem>,
  #[prop_or_default]
  pub nav_items:         Vec<LinkItem>,
  #[prop_or_default]
  pub header_menu_items: Vec<LinkItem>
}

#[derive(Properties, PartialEq)]
struct UtilityBarProps {
  items: Vec<UtilityItem>
}

#[function_component(UtilityBar)]
fn utility_bar(
  props: &UtilityBarProps
) -> Html {
  let open = use_state(|| None::<usize>);
  let bar_ref = use_node_ref();

  {
    let open = open.clone();
    use_outside_click(
      bar_ref.clone(),
      open.is_some(),
      Callback::from(move |()| {
        open.set(None);
      })
    );
  }

  html! {
      <div class="utility-bar" ref={bar_ref}>
          {
              for props.items.iter().enumerate().map(|(index, item)| {
                  let is_open = *open == Some(index);
                  html! {
                      <>
                          if index > 0 {
                              <span class="utility-divider" aria-hidden="true" />
                          }
                          { utility_link(item, is_open, toggle(&open, index)) }
                      </>
                  }
              })
          }
      </div>
  }
}

fn toggle(
  open: &yew::UseStateHandle<
    Option<usize>
  >,
  index: usize
) -> Callback<MouseEvent> {
  let open = open.clone();
  Callback::from(move |_: MouseEvent| {
    let next =
      toggle_exclusive(*open, index);
    tracing::trace!(
      index,
      open = ?next,
      "toggled utility dropdown"
    );
    open.set(next);
  })
}

fn utility_link(
  item: &UtilityItem,
  is_open: bool,
  on_toggle: Callback<MouseEvent>
) -> Html {
  if !item.has_dropdown() {
    let content = html! {
        <>
            { item.link.label.clone() }
            { icons::chevron_small() }
        </>
    };
    return html! {
        <div class="utility-link">
            <Link item={item.link.clone()} class="utility-item" {content} />
        </div>
    };
  }

  html! {
      <div class="utility-link">
          <button
              type="button"
              class="utility-item"
              onclick={on_toggle}
              aria-expanded={is_open.to_string()}
          >
              { item.link.label.clone() }
              { icons::chevron_down(is_open) }
          </button>
          if is_open {
              <div class="dropdown">
                  <div class="dropdown-arrow" />
                  <div class="dropdown-box">
                      {
                          for item.dropdown.iter().map(|entry| html! {
                              <Link item={entry.clone()} class="dropdown-item" />
                          })
                      }
                  </div>
              </div>
          }
      </div>
  }
}

fn nav_links(
  items: &[LinkItem],
  class: &'static str
) -> Html {
  items
    .iter()
    .map(|item| {
      html! { <Link item={item.clone()} {class} /> }
    })
    .collect()
}

#[function_component(Header)]
pub fn header(
  props: &HeaderProps
) -> Html {
  let layout = &config::shared().layout;
  let logo =
    props.logo.clone().unwrap_or_else(|| {
      html! {
          <div class="logo-placeholder">{ layout.logo_placeholder.clone() }</div>
      }
    });
  let utility_bar = (!props
    .utility_items
    .is_empty())
  .then(|| {
    html! { <UtilityBar items={props.utility_items.clone()} /> }
  });

  match props.variant {
    | HeaderVariant::Union => html! {
        <header class={classes!("header", props.variant.as_class())}>
            <div class="inner">
                { utility_bar }
                <div class="main-row">
                    <div class="logo-area">
                        { logo }
                        if props.show_slogan {
                            <div class="slogan-placeholder">{ layout.slogan_placeholder.clone() }</div>
                        }
                    </div>
                    if !props.nav_items.is_empty() {
                        <nav class="nav-items">
                            { nav_links(&props.nav_items, "nav-item") }
                        </nav>
                    }
                </div>
            </div>
        </header>
    },
    | HeaderVariant::Horizontal => html! {
        <header class={classes!("header", props.variant.as_class())}>
            if let Some(notice) = &props.official_notice {
                <div class="masthead">
                    <div class="masthead-inner">
                        { icons::flag() }
                        <span>{ notice.clone() }</span>
                    </div>
                </div>
            }
            <div class="header-body">
                <div class="inner">
                    { utility_bar }
                    <div class="main-row">
                        <div class="logo-area">{ logo }</div>
                        if !props.header_menu_items.is_empty() {
                            <nav class="header-menu-items">
                                { nav_links(&props.header_menu_items, "header-menu-item") }
                            </nav>
                        }
                    </div>
                </div>
            </div>
            if !props.nav_items.is_empty() {
                <div class="menu-bar">
                    <div class="menu-bar-inner">
                        { nav_links(&props.nav_items, "menu-bar-nav-item") }
                    </div>
                </div>
            }
        </header>
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::components::LinkKind;

  #[test]
  fn entries_make_item_a_toggle() {
    let item = UtilityItem::new(
      LinkItem::new("주요 사이트")
    )
    .with_dropdown(vec![
      LinkItem::new("관련 기관"),
    ]);
    assert!(item.has_dropdown());
  }

  #[test]
  fn item_without_entries_dispatches_its_link() {
    let plain = UtilityItem::new(
      LinkItem::new("사이트맵")
        .with_href("#sitemap")
    );
    assert!(!plain.has_dropdown());
    assert_eq!(
      plain.link.kind(),
      LinkKind::Anchor
    );

    let emptied = UtilityItem::new(
      LinkItem::new("로그인")
    )
    .with_dropdown(Vec::new());
    assert!(!emptied.has_dropdown());
  }

  #[test]
  fn only_one_dropdown_open() {
    let open = toggle_exclusive(None, 0);
    assert_eq!(open, Some(0));
    assert_eq!(toggle_exclusive(open, 2), Some(2));
    assert_eq!(toggle_exclusive(Some(2), 2), None);
  }
}
