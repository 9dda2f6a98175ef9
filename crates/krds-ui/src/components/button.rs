use krds_core::variants::{
  ButtonSize,
  ButtonVariant,
  button_classes
};
use yew::{
  AttrValue,
  Callback,
  Html,
  MouseEvent,
  Properties,
  function_component,
  html
};

#[derive(Properties, PartialEq)]
pub struct ButtonProps {
  #[prop_or_default]
  pub variant:     ButtonVariant,
  #[prop_or_default]
  pub size:        ButtonSize,
  #[prop_or_default]
  pub full_width:  bool,
  #[prop_or_default]
  pub disabled:    bool,
  #[prop_or_default]
  pub icon_left:   Option<Html>,
  #[prop_or_default]
  pub icon_right:  Option<Html>,
  #[prop_or_default]
  pub class:       Option<AttrValue>,
  #[prop_or(AttrValue::Static("button"))]
  pub button_type: AttrValue,
  #[prop_or_default]
  pub aria_label:  Option<AttrValue>,
  #[prop_or_default]
  pub onclick:     Callback<MouseEvent>,
  #[prop_or_default]
  pub children:    Html
}

#[function_component(Button)]
pub fn button(
  props: &ButtonProps
) -> Html {
  let class = button_classes(
    props.variant,
    props.size,
    props.full_width,
    props.disabled,
    props.class.as_deref()
  );

  let onclick = {
    let disabled = props.disabled;
    let onclick = props.onclick.clone();
    Callback::from(
      move |event: MouseEvent| {
        if disabled {
          return;
        }
        onclick.emit(event);
      }
    )
  };

  html! {
      <button
          type={props.button_type.clone()}
          {class}
          disabled={props.disabled}
          aria-label={props.aria_label.clone()}
          {onclick}
      >
          {
              if let Some(icon) = &props.icon_left {
                  html! { <span class="icon-left">{ icon.clone() }</span> }
              } else {
                  html! {}
              }
          }
          { props.children.clone() }
          {
              if let Some(icon) = &props.icon_right {
                  html! { <span class="icon-right">{ icon.clone() }</span> }
              } else {
                  html! {}
              }
          }
      </button>
  }
}
