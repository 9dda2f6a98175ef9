use krds_core::config;
use krds_core::variants::SocialKind;
use yew::{
  AttrValue,
  Html,
  Properties,
  function_component,
  html
};

use super::link::{
  Link,
  LinkItem
};
use crate::icons;

#[derive(Clone, PartialEq)]
pub struct FooterPhoneItem {
  pub label:  AttrValue,
  pub values: Vec<AttrValue>
}

#[derive(Clone, PartialEq)]
pub struct FooterInfoItem {
  pub label: AttrValue,
  pub value: AttrValue
}

#[derive(Clone, PartialEq)]
pub struct FooterSocialLink {
  pub kind:     SocialKind,
  pub href:     Option<AttrValue>,
  pub on_click: Option<yew::Callback<()>>
}

impl FooterSocialLink {
  fn as_link(&self) -> LinkItem {
    LinkItem {
      label:    AttrValue::Static(
        self.kind.as_key()
      ),
      href:     self.href.clone(),
      on_click: self.on_click.clone()
    }
  }
}

#[derive(Properties, PartialEq)]
pub struct FooterProps {
  #[prop_or_default]
  pub logo:          Option<Html>,
  #[prop_or_default]
  pub related_sites: Vec<LinkItem>,
  #[prop_or_default]
  pub address:       Option<AttrValue>,
  #[prop_or_default]
  pub phones:        Vec<FooterPhoneItem>,
  #[prop_or_default]
  pub info_items:    Vec<FooterInfoItem>,
  #[prop_or_default]
  pub utility_links: Vec<LinkItem>,
  #[prop_or_default]
  pub social_links:  Vec<FooterSocialLink>,
  #[prop_or_default]
  pub policy_links:  Vec<LinkItem>,
  #[prop_or_default]
  pub copyright:     Option<AttrValue>
}

impl FooterProps {
  fn has_contact(&self) -> bool {
    self.address.is_some()
      || !self.phones.is_empty()
  }

  fn has_links(&self) -> bool {
    !self.utility_links.is_empty()
      || !self.social_links.is_empty()
  }

  fn has_grid(&self) -> bool {
    self.has_contact()
      || !self.info_items.is_empty()
      || self.has_links()
  }
}

fn related_sites(
  sites: &[LinkItem]
) -> Html {
  html! {
      <div class="related-site-bar">
          <div class="related-site-inner">
              {
                  for sites.iter().map(|site| {
                      let content = html! {
                          <>
                              <span class="related-site-label">{ site.label.clone() }</span>
                              { icons::plus() }
                          </>
                      };
                      html! { <Link item={site.clone()} class="related-site-item" {content} /> }
                  })
              }
          </div>
      </div>
  }
}

fn phone_row(
  phone: &FooterPhoneItem
) -> Html {
  html! {
      <div class="phone-row">
          <span class="phone-label">{ phone.label.clone() }</span>
          <div class="phone-values">
              {
                  for phone.values.iter().enumerate().map(|(index, value)| html! {
                      <>
                          if index > 0 {
                              <span class="phone-divider" aria-hidden="true" />
                          }
                          <span>{ value.clone() }</span>
                      </>
                  })
              }
          </div>
      </div>
  }
}

fn grid(props: &FooterProps) -> Html {
  html! {
      <div class="grid">
          if props.has_contact() {
              <div class="contact-column">
                  if let Some(address) = &props.address {
                      <p class="address-text">{ address.clone() }</p>
                  }
                  if !props.phones.is_empty() {
                      <div class="phone-list">
                          { for props.phones.iter().map(phone_row) }
                      </div>
                  }
              </div>
          }

          if !props.info_items.is_empty() {
              <div class="info-column">
                  {
                      for props.info_items.iter().map(|item| html! {
                          <div class="info-item">
                              <span class="info-label">{ item.label.clone() }</span>
                              <span class="info-value">{ item.value.clone() }</span>
                          </div>
                      })
                  }
              </div>
          }

          if props.has_links() {
              <div class="links-column">
                  if !props.utility_links.is_empty() {
                      <div class="utility-links">
                          {
                              for props.utility_links.iter().map(|link| {
                                  let content = html! {
                                      <>
                                          { link.label.clone() }
                                          { icons::chevron_small() }
                                      </>
                                  };
                                  html! { <Link item={link.clone()} class="utility-link" {content} /> }
                              })
                          }
                      </div>
                  }
                  if !props.social_links.is_empty() {
                      <div class="social-list">
                          {
                              for props.social_links.iter().map(|social| {
                                  let item = social.as_link();
                                  let aria_label = item.label.clone();
                                  html! {
                                      <Link
                                          {item}
                                          class="social-icon"
                                          content={icons::social(social.kind)}
                                          {aria_label}
                                      />
                                  }
                              })
                          }
                      </div>
                  }
              </div>
          }
      </div>
  }
}

#[function_component(Footer)]
pub fn footer(
  props: &FooterProps
) -> Html {
  let layout = &config::shared().layout;
  let logo =
    props.logo.clone().unwrap_or_else(|| {
      html! {
          <div class="logo-placeholder">{ layout.logo_placeholder.clone() }</div>
      }
    });
  let has_copyright_row = !props
    .policy_links
    .is_empty()
    || props.copyright.is_some();

  html! {
      <footer class="footer">
          if !props.related_sites.is_empty() {
              { related_sites(&props.related_sites) }
          }

          <div class="surface">
              <div class="inner">
                  <div class="top-area">
                      <div class="logo-area">{ logo }</div>
                      if props.has_grid() {
                          { grid(props) }
                      }
                  </div>

                  if has_copyright_row {
                      <div class="copyright-row">
                          if !props.policy_links.is_empty() {
                              <div class="policy-links">
                                  {
                                      for props.policy_links.iter().map(|link| html! {
                                          <Link item={link.clone()} class="policy-link" />
                                      })
                                  }
                              </div>
                          }
                          if let Some(copyright) = &props.copyright {
                              <span class="copyright-text">{ copyright.clone() }</span>
                          }
                      </div>
                  }
              </div>
          </div>
      </footer>
  }
}
