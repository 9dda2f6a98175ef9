use krds_core::config;
use krds_core::pagination::{
  PageItem,
  PageJump,
  has_next,
  has_prev,
  page_items,
  resolve_page_input,
  sanitize_page_input
};
use web_sys::{
  HtmlInputElement,
  InputEvent,
  KeyboardEvent
};
use yew::{
  Callback,
  Html,
  MouseEvent,
  Properties,
  UseStateHandle,
  classes,
  function_component,
  html,
  use_effect_with,
  use_state
};
use yew::prelude::TargetCast;

use crate::icons;

#[derive(Properties, PartialEq)]
pub struct PaginationProps {
  pub current_page:    u32,
  pub total_pages:     u32,
  pub on_change:       Callback<u32>,
  #[prop_or(true)]
  pub show_page_input: bool
}

fn submit(
  input: &UseStateHandle<String>,
  current: u32,
  total: u32,
  on_change: &Callback<u32>
) {
  match resolve_page_input(
    input.as_str(),
    current,
    total
  ) {
    | PageJump::Go(page) => {
      tracing::debug!(
        page,
        "page input accepted"
      );
      on_change.emit(page);
    }
    | PageJump::Revert(page) => {
      input.set(page.to_string());
    }
  }
}

#[function_component(Pagination)]
pub fn pagination(
  props: &PaginationProps
) -> Html {
  let labels = &config::shared().pagination;
  let current = props.current_page;
  let total = props.total_pages;

  let input =
    use_state(|| current.to_string());
  {
    let input = input.clone();
    use_effect_with(current, move |current| {
      input.set(current.to_string());
    });
  }

  let go_to = |page: u32| {
    let on_change = props.on_change.clone();
    Callback::from(move |_: MouseEvent| {
      on_change.emit(page);
    })
  };

  let on_input = {
    let input = input.clone();
    Callback::from(move |event: InputEvent| {
      let field: HtmlInputElement =
        event.target_unchecked_into();
      let digits =
        sanitize_page_input(&field.value());
      field.set_value(&digits);
      input.set(digits);
    })
  };
  let on_keydown = {
    let input = input.clone();
    let on_change = props.on_change.clone();
    Callback::from(
      move |event: KeyboardEvent| {
        if event.key() == "Enter" {
          submit(
            &input,
            current,
            total,
            &on_change
          );
        }
      }
    )
  };
  let on_go = {
    let input = input.clone();
    let on_change = props.on_change.clone();
    Callback::from(move |_: MouseEvent| {
      submit(
        &input,
        current,
        total,
        &on_change
      );
    })
  };

  let prev_enabled = has_prev(current);
  let next_enabled =
    has_next(current, total);
  let nav_state = |enabled: bool| {
    if enabled {
      "nav-enabled"
    } else {
      "nav-disabled"
    }
  };

  html! {
      <div class="pagination">
          <div class="number-row">
              <button
                  type="button"
                  class={classes!("prev-button", nav_state(prev_enabled))}
                  onclick={go_to(current.saturating_sub(1))}
                  disabled={!prev_enabled}
                  aria-label={format!("{} 페이지", labels.prev_label)}
              >
                  { icons::arrow_left() }
                  <span>{ labels.prev_label.clone() }</span>
              </button>

              {
                  for page_items(current, total).into_iter().map(|item| match item {
                      | PageItem::Ellipsis => html! {
                          <span class="ellipsis" aria-hidden="true">
                              { icons::ellipsis() }
                          </span>
                      },
                      | PageItem::Page(page) => {
                          let active = page == current;
                          html! {
                              <button
                                  type="button"
                                  class={classes!("number-button", if active { "active" } else { "inactive" })}
                                  onclick={go_to(page)}
                                  aria-label={labels.page_label(page)}
                                  aria-current={active.then_some("page")}
                              >
                                  { page.to_string() }
                              </button>
                          }
                      }
                  })
              }

              <button
                  type="button"
                  class={classes!("next-button", nav_state(next_enabled))}
                  onclick={go_to(current.saturating_add(1))}
                  disabled={!next_enabled}
                  aria-label={format!("{} 페이지", labels.next_label)}
              >
                  <span>{ labels.next_label.clone() }</span>
                  { icons::arrow_right() }
              </button>
          </div>

          {
              if props.show_page_input {
                  html! {
                      <div class="input-row">
                          <div class="form">
                              <input
                                  type="text"
                                  inputmode="numeric"
                                  class="page-input"
                                  value={(*input).clone()}
                                  oninput={on_input}
                                  onkeydown={on_keydown}
                                  aria-label={labels.input_label.clone()}
                              />
                              <span class="total-pages">{ format!("/{total}") }</span>
                          </div>
                          <button type="button" class="go-button" onclick={on_go}>
                              { labels.go_label.clone() }
                          </button>
                      </div>
                  }
              } else {
                  html! {}
              }
          }
      </div>
  }
}
