use yew::{
  AttrValue,
  Callback,
  Html,
  MouseEvent,
  Properties,
  function_component,
  html
};

/// Which element a [`LinkItem`] renders as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkKind {
  /// `<a href>`; still forwards `on_click`.
  Anchor,
  /// `<button type="button">` firing `on_click`.
  Action
}

/// A labeled destination. Rendered as a hyperlink when `href` is set,
/// otherwise as a button that fires `on_click`.
#[derive(Clone, PartialEq, Default)]
pub struct LinkItem {
  pub label:    AttrValue,
  pub href:     Option<AttrValue>,
  pub on_click: Option<Callback<()>>
}

impl LinkItem {
  pub fn new(
    label: impl Into<AttrValue>
  ) -> Self {
    Self {
      label: label.into(),
      ..Self::default()
    }
  }

  #[must_use]
  pub fn with_href(
    mut self,
    href: impl Into<AttrValue>
  ) -> Self {
    self.href = Some(href.into());
    self
  }

  #[must_use]
  pub fn with_on_click(
    mut self,
    on_click: Callback<()>
  ) -> Self {
    self.on_click = Some(on_click);
    self
  }

  #[must_use]
  pub fn kind(&self) -> LinkKind {
    if self.href.is_some() {
      LinkKind::Anchor
    } else {
      LinkKind::Action
    }
  }

  pub(crate) fn click_handler(
    &self
  ) -> Callback<MouseEvent> {
    let on_click = self.on_click.clone();
    let label = self.label.clone();
    Callback::from(move |_: MouseEvent| {
      tracing::debug!(label = %label, "link activated");
      if let Some(on_click) = &on_click {
        on_click.emit(());
      }
    })
  }
}

#[derive(Properties, PartialEq)]
pub struct LinkProps {
  pub item:       LinkItem,
  #[prop_or_default]
  pub class:      AttrValue,
  /// Replaces the plain label as the element's content.
  #[prop_or_default]
  pub content:    Option<Html>,
  #[prop_or_default]
  pub aria_label: Option<AttrValue>
}

#[function_component(Link)]
pub fn link(props: &LinkProps) -> Html {
  let item = &props.item;
  let onclick = item.click_handler();
  let content = props
    .content
    .clone()
    .unwrap_or_else(|| {
      html! { { item.label.clone() } }
    });
  let aria_label =
    props.aria_label.clone();

  match item.kind() {
    | LinkKind::Anchor => html! {
        <a href={item.href.clone()} class={props.class.clone()} aria-label={aria_label} {onclick}>
            { content }
        </a>
    },
    | LinkKind::Action => html! {
        <button type="button" class={props.class.clone()} aria-label={aria_label} {onclick}>
            { content }
        </button>
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn href_selects_anchor() {
    let item = LinkItem::new("사이트맵")
      .with_href("#sitemap");
    assert_eq!(item.kind(), LinkKind::Anchor);

    let with_handler = item
      .with_on_click(Callback::from(|()| {}));
    assert_eq!(
      with_handler.kind(),
      LinkKind::Anchor
    );
  }

  #[test]
  fn missing_href_selects_action() {
    assert_eq!(
      LinkItem::new("로그인").kind(),
      LinkKind::Action
    );
    assert_eq!(
      LinkItem::new("로그인")
        .with_on_click(Callback::from(|()| {}))
        .kind(),
      LinkKind::Action
    );
  }
}
