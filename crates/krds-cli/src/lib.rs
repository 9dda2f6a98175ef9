//! Terminal previews of the KRDS calendar and pagination logic.

pub mod cli;
pub mod render;

use std::ffi::OsString;
use std::io;

use anyhow::{
  Context,
  bail
};
use chrono::NaiveDate;
use clap::Parser;
use krds_core::date::{
  is_saturday,
  is_sunday
};
use krds_core::pagination::resolve_page_input;
use krds_core::view::ViewState;
use krds_core::{
  KrdsConfig,
  Selection,
  SelectionMode,
  YearMonth,
  config
};
use tracing::{
  debug,
  info
};

use crate::cli::{
  Command,
  GlobalCli,
  GridArgs
};
use crate::render::Renderer;

pub fn run(
  raw_args: Vec<OsString>
) -> anyhow::Result<()> {
  let cli = GlobalCli::parse_from(raw_args);

  cli::init_tracing(
    cli.verbose,
    cli.quiet
  )?;

  info!(
    verbose = cli.verbose,
    quiet = cli.quiet,
    "starting krds CLI"
  );

  let config = match &cli.config {
    | Some(path) => {
      KrdsConfig::from_path(path)
        .context(
          "failed to load --config file"
        )?
    }
    | None => config::shared().clone()
  };

  let renderer = Renderer::detect();
  let output = match cli.command {
    | Command::Grid(args) => {
      grid(&renderer, &config, &args)?
    }
    | Command::Pages {
      current,
      total
    } => {
      check_pages(current, total)?;
      renderer.page_strip(
        &config.pagination,
        current,
        total
      )
    }
    | Command::Jump {
      input,
      current,
      total
    } => {
      check_pages(current, total)?;
      render::describe_jump(
        resolve_page_input(
          &input, current, total
        )
      )
    }
  };

  render::write_output(
    io::stdout().lock(),
    &output
  )
}

fn check_pages(
  current: u32,
  total: u32
) -> anyhow::Result<()> {
  if total == 0 {
    bail!("total must be at least 1");
  }
  if current == 0 || current > total {
    bail!(
      "current page {current} is outside \
       1..={total}"
    );
  }
  Ok(())
}

/// Replays `--select` clicks through the same view logic the calendar
/// component uses, then renders the resulting month.
#[tracing::instrument(skip(renderer, config))]
fn grid(
  renderer: &Renderer,
  config: &KrdsConfig,
  args: &GridArgs
) -> anyhow::Result<String> {
  let month = YearMonth::new(
    args.year,
    i32::try_from(args.month)
      .context("month out of range")?
  );
  let today = args
    .today
    .unwrap_or_else(|| config.calendar.today());
  let mode = if args.range {
    SelectionMode::Range
  } else {
    SelectionMode::Single
  };
  let is_disabled = |day: NaiveDate| {
    args.disable_weekends
      && (is_sunday(day) || is_saturday(day))
  };

  let view = ViewState::showing(month);
  let mut selection = Selection::empty(mode);
  for day in &args.select {
    match view.click_day(
      *day,
      &selection,
      is_disabled
    ) {
      | Some(next) => selection = next,
      | None => {
        debug!(%day, "selection click ignored");
      }
    }
  }

  let grid = renderer.month_grid(
    &config.calendar,
    month,
    today,
    &selection,
    is_disabled
  );
  Ok(format!(
    "{grid}\n{}",
    renderer.selection_summary(&selection)
  ))
}
