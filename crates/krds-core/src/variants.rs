use serde::{
  Deserialize,
  Serialize
};

#[derive(
  Debug,
  Clone,
  Copy,
  Default,
  PartialEq,
  Eq,
  Serialize,
  Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum ButtonVariant {
  #[default]
  Primary,
  Secondary,
  Tertiary
}

impl ButtonVariant {
  #[must_use]
  pub fn all() -> [Self; 3] {
    [
      Self::Primary,
      Self::Secondary,
      Self::Tertiary
    ]
  }

  #[must_use]
  pub fn as_class(self) -> &'static str {
    match self {
      | Self::Primary => "primary",
      | Self::Secondary => "secondary",
      | Self::Tertiary => "tertiary"
    }
  }
}

#[derive(
  Debug,
  Clone,
  Copy,
  Default,
  PartialEq,
  Eq,
  Serialize,
  Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum ButtonSize {
  XLarge,
  Large,
  #[default]
  Medium,
  Small,
  XSmall
}

impl ButtonSize {
  #[must_use]
  pub fn all() -> [Self; 5] {
    [
      Self::XLarge,
      Self::Large,
      Self::Medium,
      Self::Small,
      Self::XSmall
    ]
  }

  #[must_use]
  pub fn as_class(self) -> &'static str {
    match self {
      | Self::XLarge => "xlarge",
      | Self::Large => "large",
      | Self::Medium => "medium",
      | Self::Small => "small",
      | Self::XSmall => "xsmall"
    }
  }
}

/// Space-separated class list for a button.
#[must_use]
pub fn button_classes(
  variant: ButtonVariant,
  size: ButtonSize,
  full_width: bool,
  disabled: bool,
  extra: Option<&str>
) -> String {
  let mut classes = vec![
    "button",
    variant.as_class(),
    size.as_class(),
  ];
  if full_width {
    classes.push("full-width");
  }
  if disabled {
    classes.push("disabled");
  }
  if let Some(extra) = extra
    .map(str::trim)
    .filter(|extra| !extra.is_empty())
  {
    classes.push(extra);
  }
  classes.join(" ")
}

#[derive(
  Debug,
  Clone,
  Copy,
  Default,
  PartialEq,
  Eq,
  Serialize,
  Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum ContainerSize {
  Small,
  #[default]
  Medium,
  Large
}

impl ContainerSize {
  #[must_use]
  pub fn as_class(self) -> &'static str {
    match self {
      | Self::Small => "small",
      | Self::Medium => "medium",
      | Self::Large => "large"
    }
  }
}

#[derive(
  Debug,
  Clone,
  Copy,
  Default,
  PartialEq,
  Eq,
  Serialize,
  Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum HeaderVariant {
  #[default]
  Union,
  Horizontal
}

impl HeaderVariant {
  #[must_use]
  pub fn as_class(self) -> &'static str {
    match self {
      | Self::Union => "union",
      | Self::Horizontal => "horizontal"
    }
  }
}

#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  Serialize,
  Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum SocialKind {
  Instagram,
  Youtube,
  Twitter,
  Facebook,
  NaverBlog
}

impl SocialKind {
  /// Also used as the accessible label.
  #[must_use]
  pub fn as_key(self) -> &'static str {
    match self {
      | Self::Instagram => "instagram",
      | Self::Youtube => "youtube",
      | Self::Twitter => "twitter",
      | Self::Facebook => "facebook",
      | Self::NaverBlog => "naverblog"
    }
  }
}
