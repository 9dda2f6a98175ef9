use chrono::NaiveDate;
use krds_core::date::{
  is_saturday,
  is_sunday
};
use krds_core::variants::{
  ButtonSize,
  ButtonVariant,
  ContainerSize,
  HeaderVariant,
  SocialKind
};
use krds_core::{
  DateRange,
  SelectionMode
};
use krds_ui::{
  Button,
  Calendar,
  Container,
  Footer,
  FooterInfoItem,
  FooterPhoneItem,
  FooterSocialLink,
  Header,
  LinkItem,
  Pagination,
  SideNavSection,
  SideNavigation,
  UtilityItem
};
use yew::{
  AttrValue,
  Callback,
  Html,
  MouseEvent,
  function_component,
  html,
  use_state
};

const TOTAL_PAGES: u32 = 99;

fn logged(
  label: &'static str
) -> Callback<()> {
  Callback::from(move |()| {
    tracing::info!(label, "showcase action");
  })
}

fn link(label: &'static str) -> LinkItem {
  LinkItem::new(label)
    .with_on_click(logged(label))
}

#[function_component(App)]
pub fn app() -> Html {
  html! {
      <main class="showcase">
          <h1>{ "KRDS components" }</h1>
          <ButtonGallery />
          <CalendarDemo />
          <PaginationDemo />
          <LayoutDemo />
      </main>
  }
}

#[function_component(ButtonGallery)]
fn button_gallery() -> Html {
  html! {
      <section class="showcase-section">
          <h2>{ "Button" }</h2>
          {
              for ButtonVariant::all().into_iter().map(|variant| html! {
                  <div class="showcase-row">
                      {
                          for ButtonSize::all().into_iter().flat_map(|size| [false, true].map(|disabled| {
                              let label = format!("{} {}", variant.as_class(), size.as_class());
                              let onclick = {
                                  let label = label.clone();
                                  Callback::from(move |_: MouseEvent| tracing::info!(%label, "button pressed"))
                              };
                              html! {
                                  <Button {variant} {size} {disabled} {onclick}>
                                      { label }
                                  </Button>
                              }
                          }))
                      }
                  </div>
              })
          }
          <Button full_width=true>{ "full width" }</Button>
      </section>
  }
}

#[function_component(CalendarDemo)]
fn calendar_demo() -> Html {
  let single = use_state(|| None::<NaiveDate>);
  let range = use_state(DateRange::empty);

  let on_change = {
    let single = single.clone();
    Callback::from(move |date: NaiveDate| {
      tracing::info!(%date, "single date picked");
      single.set(Some(date));
    })
  };
  let on_range_change = {
    let range = range.clone();
    Callback::from(
      move |next: DateRange| {
        tracing::info!(
          start = ?next.start(),
          end = ?next.end(),
          "range picked"
        );
        range.set(next);
      }
    )
  };
  let on_cancel = {
    let range = range.clone();
    Callback::from(move |()| {
      range.set(DateRange::empty());
    })
  };
  let weekends = Callback::from(
    |day: NaiveDate| {
      is_sunday(day) || is_saturday(day)
    }
  );

  html! {
      <section class="showcase-section">
          <h2>{ "Calendar" }</h2>
          <div class="showcase-row">
              <Calendar value={*single} {on_change} />
              <Calendar
                  mode={SelectionMode::Range}
                  range_value={*range}
                  {on_range_change}
                  disabled_dates={weekends}
                  show_footer=true
                  {on_cancel}
                  on_confirm={logged("range confirmed")}
              />
          </div>
      </section>
  }
}

#[function_component(PaginationDemo)]
fn pagination_demo() -> Html {
  let page = use_state(|| 1_u32);
  let on_change = {
    let page = page.clone();
    Callback::from(move |next: u32| {
      page.set(next);
    })
  };

  html! {
      <section class="showcase-section">
          <h2>{ "Pagination" }</h2>
          <Pagination current_page={*page} total_pages={TOTAL_PAGES} {on_change} />
      </section>
  }
}

#[function_component(LayoutDemo)]
fn layout_demo() -> Html {
  let utility_items = vec![
    UtilityItem::new(link("주요 사이트"))
      .with_dropdown(vec![
        link("관련 기관"),
        link("산하 기관"),
      ]),
    UtilityItem::new(link("로그인")),
    UtilityItem::new(
      LinkItem::new("사이트맵")
        .with_href("#sitemap")
    ),
  ];
  let nav_items = vec![
    link("기관 소개"),
    link("정책 정보"),
    link("알림 소식"),
  ];

  let phones = vec![FooterPhoneItem {
    label:  AttrValue::from("대표전화"),
    values: vec![
      AttrValue::from("1234-5678"),
      AttrValue::from("02-123-4567"),
    ]
  }];
  let info_items = vec![FooterInfoItem {
    label: AttrValue::from("운영시간"),
    value: AttrValue::from(
      "평일 09:00 ~ 18:00"
    )
  }];
  let social_links = [
    SocialKind::Instagram,
    SocialKind::Youtube,
    SocialKind::Twitter,
    SocialKind::Facebook,
    SocialKind::NaverBlog,
  ]
  .into_iter()
  .map(|kind| FooterSocialLink {
    kind,
    href: None,
    on_click: Some(logged(kind.as_key()))
  })
  .collect::<Vec<_>>();

  let sections = vec![
    SideNavSection::new(
      "서비스 안내",
      vec![link("민원 신청"), link("조회")]
    )
    .opened(),
    SideNavSection::new(
      "자료실",
      vec![
        LinkItem::new("공지사항")
          .with_href("#notice"),
      ]
    ),
    SideNavSection::new("빈 메뉴", Vec::new()),
  ];

  html! {
      <section class="showcase-section">
          <h2>{ "Header" }</h2>
          <Header utility_items={utility_items.clone()} nav_items={nav_items.clone()} />
          <Header
              variant={HeaderVariant::Horizontal}
              official_notice="이 누리집은 대한민국 공식 전자정부 누리집입니다."
              {utility_items}
              header_menu_items={vec![link("검색"), link("전체 메뉴")]}
              {nav_items}
          />

          <h2>{ "Container" }</h2>
          <div class="showcase-row">
              <Container size={ContainerSize::Small} title="작은 카드" />
              <Container
                  badge="새 소식"
                  title="보통 카드"
                  description="설명 문구"
                  on_link_click={logged("container link")}
              />
              <Container size={ContainerSize::Large} title="큰 카드" link_label="자세히 보기" on_link_click={logged("large container link")} />
          </div>

          <h2>{ "Side navigation" }</h2>
          <SideNavigation title="민원 서비스" {sections} />

          <h2>{ "Footer" }</h2>
          <Footer
              related_sites={vec![link("관련 사이트"), link("유관 기관")]}
              address="(03171) 서울특별시 종로구 세종대로 209"
              {phones}
              {info_items}
              utility_links={vec![link("찾아오시는 길"), link("자주 묻는 질문")]}
              {social_links}
              policy_links={vec![link("이용약관"), link("개인정보처리방침")]}
              copyright="© Government of the Republic of Korea. All rights reserved."
          />
      </section>
  }
}
