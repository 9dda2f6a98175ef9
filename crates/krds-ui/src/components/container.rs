use krds_core::config;
use krds_core::variants::ContainerSize;
use yew::{
  AttrValue,
  Callback,
  Html,
  MouseEvent,
  Properties,
  classes,
  function_component,
  html
};

use crate::icons;

#[derive(Properties, PartialEq)]
pub struct ContainerProps {
  #[prop_or_default]
  pub size:          ContainerSize,
  #[prop_or_default]
  pub image_src:     Option<AttrValue>,
  #[prop_or_default]
  pub image_alt:     AttrValue,
  #[prop_or_default]
  pub badge:         Option<AttrValue>,
  pub title:         AttrValue,
  #[prop_or_default]
  pub description:   Option<AttrValue>,
  /// Defaults to the configured container link label.
  #[prop_or_default]
  pub link_label:    Option<AttrValue>,
  /// The link button is rendered only when this is set.
  #[prop_or_default]
  pub on_link_click: Option<Callback<()>>
}

#[function_component(Container)]
pub fn container(
  props: &ContainerProps
) -> Html {
  let layout = &config::shared().layout;
  let title_class = classes!(
    "title",
    (props.size == ContainerSize::Large)
      .then_some("title-large")
  );

  let link = props.on_link_click.as_ref().map(
    |on_link_click| {
      let on_link_click =
        on_link_click.clone();
      let onclick =
        Callback::from(move |_: MouseEvent| {
          on_link_click.emit(());
        });
      let label = props
        .link_label
        .clone()
        .unwrap_or_else(|| {
          AttrValue::from(
            layout.container_link_label.clone()
          )
        });
      html! {
          <button type="button" class="link" {onclick}>
              { label }
              { icons::chevron_right() }
          </button>
      }
    }
  );

  html! {
      <div class={classes!("container", props.size.as_class())}>
          if let Some(src) = &props.image_src {
              <img src={src.clone()} alt={props.image_alt.clone()} class="image" />
          } else {
              <div class="image-placeholder" aria-hidden="true" />
          }

          if let Some(badge) = &props.badge {
              <div class="top-row">
                  <span class="badge">{ badge.clone() }</span>
              </div>
          }

          <div class="card-title">
              <p class={title_class}>{ props.title.clone() }</p>
              if let Some(description) = &props.description {
                  <p class="description">{ description.clone() }</p>
              }
          </div>

          { link }
      </div>
  }
}
