use gloo::events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::{
  Element,
  Event,
  Node
};
use yew::{
  Callback,
  NodeRef,
  hook,
  use_effect_with,
  use_mut_ref
};

/// Calls `on_outside` for every pointer-down that lands outside `region`
/// while `active` is true.
///
/// The document listener exists only while `active` holds; it is dropped
/// when `active` turns false or the calling component unmounts.
#[hook]
pub fn use_outside_click(
  region: NodeRef,
  active: bool,
  on_outside: Callback<()>
) {
  let latest = use_mut_ref(|| on_outside.clone());
  *latest.borrow_mut() = on_outside;

  use_effect_with(active, move |active| {
    let listener = active.then(|| {
      tracing::trace!(
        "attached outside-click listener"
      );
      let document = gloo::utils::document();
      EventListener::new(
        &document,
        "mousedown",
        move |event: &Event| {
          if event_within(&region, event) {
            return;
          }
          let callback =
            latest.borrow().clone();
          callback.emit(());
        }
      )
    });

    move || {
      if listener.is_some() {
        tracing::trace!(
          "released outside-click listener"
        );
      }
      drop(listener);
    }
  });
}

fn event_within(
  region: &NodeRef,
  event: &Event
) -> bool {
  let Some(region) =
    region.cast::<Element>()
  else {
    return false;
  };
  event
    .target()
    .and_then(|target| {
      target.dyn_into::<Node>().ok()
    })
    .is_some_and(|node| {
      region.contains(Some(&node))
    })
}
