mod button;
mod calendar;
mod container;
mod footer;
mod header;
mod link;
mod pagination;
mod side_navigation;

pub use button::{
  Button,
  ButtonProps
};
pub use calendar::{
  Calendar,
  CalendarProps
};
pub use container::{
  Container,
  ContainerProps
};
pub use footer::{
  Footer,
  FooterInfoItem,
  FooterPhoneItem,
  FooterProps,
  FooterSocialLink
};
pub use header::{
  Header,
  HeaderProps,
  UtilityItem
};
pub use link::{
  Link,
  LinkItem,
  LinkKind,
  LinkProps
};
pub use pagination::{
  Pagination,
  PaginationProps
};
pub use side_navigation::{
  SideNavSection,
  SideNavigation,
  SideNavigationProps
};
