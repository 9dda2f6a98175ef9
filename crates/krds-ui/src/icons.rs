use krds_core::variants::SocialKind;
use yew::{
  Html,
  html
};

pub(crate) fn chevron_left() -> Html {
  html! {
      <svg class="nav-icon" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="1.6" stroke-linecap="round" stroke-linejoin="round" aria-hidden="true">
          <polyline points="15 18 9 12 15 6" />
      </svg>
  }
}

pub(crate) fn chevron_right() -> Html {
  html! {
      <svg class="nav-icon" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="1.6" stroke-linecap="round" stroke-linejoin="round" aria-hidden="true">
          <polyline points="9 18 15 12 9 6" />
      </svg>
  }
}

/// Small disclosure chevron; rotated when `open`.
pub(crate) fn chevron_down(
  open: bool
) -> Html {
  let style = if open {
    "transform:rotate(180deg);transition:transform 0.15s ease;"
  } else {
    "transform:rotate(0deg);transition:transform 0.15s ease;"
  };
  html! {
      <svg width="16" height="16" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="1.6" stroke-linecap="round" stroke-linejoin="round" aria-hidden="true" {style}>
          <polyline points="6 9 12 15 18 9" />
      </svg>
  }
}

pub(crate) fn chevron_small() -> Html {
  html! {
      <svg width="16" height="16" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="1.6" stroke-linecap="round" stroke-linejoin="round" aria-hidden="true">
          <polyline points="9 18 15 12 9 6" />
      </svg>
  }
}

pub(crate) fn arrow_left() -> Html {
  html! {
      <svg width="20" height="20" viewBox="0 0 20 20" fill="none" aria-hidden="true">
          <path d="M12.5 4L5.5 10L12.5 16" stroke="currentColor" stroke-width="1.4" stroke-linecap="round" stroke-linejoin="round" />
      </svg>
  }
}

pub(crate) fn arrow_right() -> Html {
  html! {
      <svg width="20" height="20" viewBox="0 0 20 20" fill="none" aria-hidden="true">
          <path d="M7.5 4L14.5 10L7.5 16" stroke="currentColor" stroke-width="1.4" stroke-linecap="round" stroke-linejoin="round" />
      </svg>
  }
}

pub(crate) fn arrow_up() -> Html {
  html! {
      <svg width="20" height="20" viewBox="0 0 20 20" fill="none" aria-hidden="true">
          <path d="M5 13L10 8L15 13" stroke="#33363D" stroke-width="1.4" stroke-linecap="round" stroke-linejoin="round" />
      </svg>
  }
}

pub(crate) fn arrow_down() -> Html {
  html! {
      <svg width="20" height="20" viewBox="0 0 20 20" fill="none" aria-hidden="true">
          <path d="M5 8L10 13L15 8" stroke="#33363D" stroke-width="1.4" stroke-linecap="round" stroke-linejoin="round" />
      </svg>
  }
}

pub(crate) fn ellipsis() -> Html {
  html! {
      <svg width="24" height="24" viewBox="0 0 24 24" fill="none" aria-hidden="true">
          <rect x="4" y="10.6" width="2.8" height="2.8" rx="1.4" fill="currentColor" />
          <rect x="10.6" y="10.6" width="2.8" height="2.8" rx="1.4" fill="currentColor" />
          <rect x="17.2" y="10.6" width="2.8" height="2.8" rx="1.4" fill="currentColor" />
      </svg>
  }
}

pub(crate) fn flag() -> Html {
  html! {
      <svg class="flag-icon" viewBox="0 0 24 24" fill="none" aria-hidden="true">
          <rect x="2" y="5" width="20" height="14" rx="1" fill="#003964" />
          <rect x="2" y="5" width="20" height="7" rx="1" fill="#D63D4A" />
      </svg>
  }
}

pub(crate) fn plus() -> Html {
  html! {
      <svg class="related-site-icon" width="20" height="20" viewBox="0 0 20 20" fill="none" aria-hidden="true">
          <line x1="10" y1="2.5" x2="10" y2="17.5" stroke="#33363d" stroke-width="1.33" stroke-linecap="round" />
          <line x1="2.5" y1="10" x2="17.5" y2="10" stroke="#33363d" stroke-width="1.33" stroke-linecap="round" />
      </svg>
  }
}

pub(crate) fn social(
  kind: SocialKind
) -> Html {
  match kind {
    | SocialKind::Instagram => html! {
        <svg width="20" height="20" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="1.6" stroke-linecap="round" stroke-linejoin="round" aria-hidden="true">
            <rect x="2" y="2" width="20" height="20" rx="5" />
            <circle cx="12" cy="12" r="5" />
            <circle cx="17.5" cy="6.5" r="1" fill="currentColor" stroke="none" />
        </svg>
    },
    | SocialKind::Youtube => html! {
        <svg width="20" height="20" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="1.6" stroke-linecap="round" stroke-linejoin="round" aria-hidden="true">
            <path d="M22.54 6.42a2.78 2.78 0 0 0-1.95-1.97C18.88 4 12 4 12 4s-6.88 0-8.59.45A2.78 2.78 0 0 0 1.46 6.42 29 29 0 0 0 1 12a29 29 0 0 0 .46 5.58 2.78 2.78 0 0 0 1.95 1.97C5.12 20 12 20 12 20s6.88 0 8.59-.45a2.78 2.78 0 0 0 1.95-1.97A29 29 0 0 0 23 12a29 29 0 0 0-.46-5.58z" />
            <polygon points="9.75 15.02 15.5 12 9.75 8.98 9.75 15.02" fill="currentColor" stroke="none" />
        </svg>
    },
    | SocialKind::Twitter => html! {
        <svg width="20" height="20" viewBox="0 0 24 24" fill="currentColor" aria-hidden="true">
            <path d="M18.244 2.25h3.308l-7.227 8.26 8.502 11.24H16.17l-4.714-6.231-5.401 6.231H2.746l7.73-8.835L1.254 2.25H8.08l4.26 5.632zm-1.161 17.52h1.833L7.084 4.126H5.117z" />
        </svg>
    },
    | SocialKind::Facebook => html! {
        <svg width="20" height="20" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="1.6" stroke-linecap="round" stroke-linejoin="round" aria-hidden="true">
            <path d="M18 2h-3a5 5 0 0 0-5 5v3H7v4h3v8h4v-8h3l1-4h-4V7a1 1 0 0 1 1-1h3z" />
        </svg>
    },
    | SocialKind::NaverBlog => html! {
        <svg width="20" height="20" viewBox="0 0 24 24" fill="currentColor" aria-hidden="true">
            <path d="M16 3H8C5.79 3 4 4.79 4 7v10c0 2.21 1.79 4 4 4h8c2.21 0 4-1.79 4-4V7c0-2.21-1.79-4-4-4zm-4.9 11.5H9.7V9.5h1.4v5zm5.2 0h-3.6V9.5h1.4v4h2.2v1.5z" />
        </svg>
    }
  }
}
