//! Yew bindings for the KRDS component set.

pub mod components;
pub mod hooks;
mod icons;

pub use components::{
  Button,
  ButtonProps,
  Calendar,
  CalendarProps,
  Container,
  ContainerProps,
  Footer,
  FooterInfoItem,
  FooterPhoneItem,
  FooterProps,
  FooterSocialLink,
  Header,
  HeaderProps,
  Link,
  LinkItem,
  LinkKind,
  Pagination,
  PaginationProps,
  SideNavSection,
  SideNavigation,
  SideNavigationProps,
  UtilityItem
};
