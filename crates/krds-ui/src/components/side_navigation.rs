use krds_core::disclosure::OpenSections;
use yew::{
  AttrValue,
  Callback,
  Html,
  MouseEvent,
  Properties,
  function_component,
  html,
  use_state
};

use super::link::{
  Link,
  LinkItem
};
use crate::icons;

#[derive(Clone, PartialEq, Default)]
pub struct SideNavSection {
  pub label:        AttrValue,
  pub items:        Vec<LinkItem>,
  pub default_open: bool
}

impl SideNavSection {
  pub fn new(
    label: impl Into<AttrValue>,
    items: Vec<LinkItem>
  ) -> Self {
    Self {
      label: label.into(),
      items,
      default_open: false
    }
  }

  #[must_use]
  pub fn opened(mut self) -> Self {
    self.default_open = true;
    self
  }
}

#[derive(Properties, PartialEq)]
pub struct SideNavigationProps {
  pub title:    AttrValue,
  #[prop_or_default]
  pub sections: Vec<SideNavSection>
}

#[function_component(SideNavigation)]
pub fn side_navigation(
  props: &SideNavigationProps
) -> Html {
  let open = {
    let defaults: Vec<bool> = props
      .sections
      .iter()
      .map(|section| section.default_open)
      .collect();
    use_state(move || {
      OpenSections::seeded(defaults)
    })
  };

  html! {
      <nav class="side-navigation" aria-label={props.title.clone()}>
          <div class="title">{ props.title.clone() }</div>
          {
              for props.sections.iter().enumerate().map(|(index, section)| {
                  let is_open = open.is_open(index);
                  let onclick = {
                      let open = open.clone();
                      Callback::from(move |_: MouseEvent| open.set(open.toggled(index)))
                  };
                  html! {
                      <div class="section">
                          <button
                              type="button"
                              class={if is_open { "section-header open" } else { "section-header" }}
                              {onclick}
                              aria-expanded={is_open.to_string()}
                          >
                              <span class="section-label">{ section.label.clone() }</span>
                              if is_open {
                                  { icons::arrow_up() }
                              } else {
                                  { icons::arrow_down() }
                              }
                          </button>
                          if is_open && !section.items.is_empty() {
                              <div class="open-list">
                                  { for section.items.iter().map(sub_item) }
                              </div>
                          }
                      </div>
                  }
              })
          }
      </nav>
  }
}

fn sub_item(item: &LinkItem) -> Html {
  let content = html! {
      <>
          <span class="bullet" aria-hidden="true" />
          <span>{ item.label.clone() }</span>
      </>
  };
  html! {
      <Link item={item.clone()} class="last-depth-item" {content} />
  }
}
