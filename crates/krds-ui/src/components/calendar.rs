use chrono::{
  Datelike,
  NaiveDate
};
use krds_core::config::{
  self,
  CalendarConfig
};
use krds_core::variants::{
  ButtonSize,
  ButtonVariant
};
use krds_core::view::{
  month_choices,
  year_window
};
use krds_core::{
  DateRange,
  Dropdown,
  Selection,
  SelectionMode,
  ViewState,
  classify
};
use yew::{
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

use super::button::Button;
use crate::hooks::use_outside_click;
use crate::icons;

#[derive(Properties, PartialEq)]
pub struct CalendarProps {
  #[prop_or_default]
  pub mode:            SelectionMode,
  #[prop_or_default]
  pub value:           Option<NaiveDate>,
  #[prop_or_default]
  pub range_value:     DateRange,
  #[prop_or_default]
  pub on_change:       Option<Callback<NaiveDate>>,
  #[prop_or_default]
  pub on_range_change: Option<Callback<DateRange>>,
  /// Returns true for days that cannot be picked.
  #[prop_or_default]
  pub disabled_dates:
    Option<Callback<NaiveDate, bool>>,
  #[prop_or_default]
  pub initial_month:   Option<NaiveDate>,
  #[prop_or_default]
  pub show_footer:     bool,
  #[prop_or_default]
  pub on_cancel:       Option<Callback<()>>,
  #[prop_or_default]
  pub on_confirm:      Option<Callback<()>>
}

impl CalendarProps {
  fn selection(&self) -> Selection {
    match self.mode {
      | SelectionMode::Single => {
        Selection::Single(self.value)
      }
      | SelectionMode::Range => {
        Selection::Range(
          DateRange::from_parts(
            self.range_value.start(),
            self.range_value.end()
          )
        )
      }
    }
  }
}

fn is_disabled(
  predicate: &Option<
    Callback<NaiveDate, bool>
  >,
  date: NaiveDate
) -> bool {
  predicate
    .as_ref()
    .is_some_and(|predicate| {
      predicate.emit(date)
    })
}

#[function_component(Calendar)]
pub fn calendar(
  props: &CalendarProps
) -> Html {
  let config = &config::shared().calendar;
  let today = config.today();
  let selection = props.selection();

  let view = {
    let initial_month =
      props.initial_month;
    use_state(move || {
      ViewState::initial(
        initial_month,
        &selection,
        today
      )
    })
  };
  let header_ref = use_node_ref();

  {
    let view = view.clone();
    use_outside_click(
      header_ref.clone(),
      view.dropdown().is_some(),
      Callback::from(move |()| {
        view.set(view.dismiss());
      })
    );
  }

  let on_prev = {
    let view = view.clone();
    Callback::from(move |_: MouseEvent| {
      view.set(view.prior());
    })
  };
  let on_next = {
    let view = view.clone();
    Callback::from(move |_: MouseEvent| {
      view.set(view.next());
    })
  };
  let toggle = |dropdown: Dropdown| {
    let view = view.clone();
    Callback::from(move |_: MouseEvent| {
      view.set(view.toggle(dropdown));
    })
  };

  let on_day = {
    let view = view.clone();
    let predicate =
      props.disabled_dates.clone();
    let on_change = props.on_change.clone();
    let on_range_change =
      props.on_range_change.clone();
    Callback::from(move |day: NaiveDate| {
      let proposal = view.click_day(
        day,
        &selection,
        |date| is_disabled(&predicate, date)
      );
      match proposal {
        | Some(Selection::Single(Some(
          date
        ))) => {
          if let Some(on_change) = &on_change
          {
            on_change.emit(date);
          }
        }
        | Some(Selection::Range(range)) => {
          if let Some(on_range_change) =
            &on_range_change
          {
            on_range_change.emit(range);
          }
        }
        | Some(Selection::Single(None))
        | None => {}
      }
    })
  };

  let month = view.month();
  let grid = view.grid();

  html! {
      <div class="calendar">
          <div class="header" ref={header_ref}>
              <button type="button" class="nav-button" onclick={on_prev} aria-label={config.prev_label.clone()}>
                  { icons::chevron_left() }
              </button>
              <div class="header-center" aria-live="polite" aria-label={config.month_title(month)}>
                  <button
                      type="button"
                      class={classes!("header-title", "year-toggle", view.is_open(Dropdown::Year).then_some("open"))}
                      aria-haspopup="listbox"
                      aria-expanded={view.is_open(Dropdown::Year).to_string()}
                      onclick={toggle(Dropdown::Year)}
                  >
                      { config.year_label(month.year()) }
                  </button>
                  <button
                      type="button"
                      class={classes!("header-title", "month-toggle", view.is_open(Dropdown::Month).then_some("open"))}
                      aria-haspopup="listbox"
                      aria-expanded={view.is_open(Dropdown::Month).to_string()}
                      onclick={toggle(Dropdown::Month)}
                  >
                      { config.month_label(month.month()) }
                  </button>
                  { render_dropdown(&view, config) }
              </div>
              <button type="button" class="nav-button" onclick={on_next} aria-label={config.next_label.clone()}>
                  { icons::chevron_right() }
              </button>
          </div>

          <div class="weekdays">
              {
                  for config.weekday_labels.iter().enumerate().map(|(index, label)| html! {
                      <div class={classes!("weekday", (index == 0).then_some("sunday"), (index == 6).then_some("saturday"))}>
                          { label.clone() }
                      </div>
                  })
              }
          </div>

          <div class="grid" role="grid">
              {
                  for grid.weeks().iter().map(|week| html! {
                      <div class="week" role="row">
                          {
                              for week.iter().map(|day| {
                                  let day = *day;
                                  let state = classify(
                                      day,
                                      month,
                                      today,
                                      &selection,
                                      |date| is_disabled(&props.disabled_dates, date),
                                  );
                                  let pressed = state.interactive.then(|| state.is_pressed().to_string());
                                  let on_day = on_day.clone();
                                  html! {
                                      <button
                                          type="button"
                                          role="gridcell"
                                          class={classes!("day", state.classes().collect::<Vec<_>>())}
                                          aria-label={config.day_label(day)}
                                          aria-pressed={pressed}
                                          disabled={!state.interactive}
                                          tabindex={(!state.interactive).then_some("-1")}
                                          onclick={Callback::from(move |_: MouseEvent| on_day.emit(day))}
                                      >
                                          { day.day().to_string() }
                                      </button>
                                  }
                              })
                          }
                      </div>
                  })
              }
          </div>

          {
              if props.show_footer {
                  render_footer(props, config)
              } else {
                  html! {}
              }
          }
      </div>
  }
}

fn render_dropdown(
  view: &yew::UseStateHandle<ViewState>,
  config: &CalendarConfig
) -> Html {
  let month = view.month();
  match view.dropdown() {
    | Some(Dropdown::Year) => html! {
        <ul class="dropdown year-dropdown" role="listbox">
            {
                for year_window(month.year(), config.year_radius).into_iter().map(|year| {
                    let view = view.clone();
                    let active = year == month.year();
                    html! {
                        <li role="option" aria-selected={active.to_string()}>
                            <button
                                type="button"
                                class={classes!("dropdown-item", active.then_some("active"))}
                                onclick={Callback::from(move |_: MouseEvent| view.set(view.pick_year(year)))}
                            >
                                { config.year_label(year) }
                            </button>
                        </li>
                    }
                })
            }
        </ul>
    },
    | Some(Dropdown::Month) => html! {
        <ul class="dropdown month-dropdown" role="listbox">
            {
                for month_choices().into_iter().map(|choice| {
                    let view = view.clone();
                    let active = choice == month.month();
                    html! {
                        <li role="option" aria-selected={active.to_string()}>
                            <button
                                type="button"
                                class={classes!("dropdown-item", active.then_some("active"))}
                                onclick={Callback::from(move |_: MouseEvent| view.set(view.pick_month(choice)))}
                            >
                                { config.month_label(choice) }
                            </button>
                        </li>
                    }
                })
            }
        </ul>
    },
    | None => html! {}
  }
}

fn render_footer(
  props: &CalendarProps,
  config: &CalendarConfig
) -> Html {
  let emit = |callback: Option<Callback<()>>| {
    Callback::from(move |_: MouseEvent| {
      if let Some(callback) = &callback {
        callback.emit(());
      }
    })
  };

  html! {
      <div class="footer">
          <Button variant={ButtonVariant::Secondary} size={ButtonSize::Small} onclick={emit(props.on_cancel.clone())}>
              { config.cancel_label.clone() }
          </Button>
          <Button variant={ButtonVariant::Primary} size={ButtonSize::Small} onclick={emit(props.on_confirm.clone())}>
              { config.confirm_label.clone() }
          </Button>
      </div>
  }
}
