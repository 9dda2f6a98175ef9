use std::io::IsTerminal;
use std::path::PathBuf;

use anyhow::anyhow;
use chrono::NaiveDate;
use clap::{ArgAction, Args, Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug, Clone)]
#[command(
    name = "krds",
    version,
    about = "Preview KRDS calendar grids and pagination strips in the terminal"
)]
pub struct GlobalCli {
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[arg(short = 'q', long = "quiet", action = ArgAction::Count, global = true)]
    pub quiet: u8,

    /// Load labels and timezone from this TOML file instead of the embedded one.
    #[arg(long = "config", global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Print the six-week grid for a month.
    Grid(GridArgs),
    /// Print the pagination strip for a page.
    Pages {
        current: u32,
        total: u32,
    },
    /// Show what submitting the page field would do.
    Jump {
        input: String,
        #[arg(long)]
        current: u32,
        #[arg(long)]
        total: u32,
    },
}

#[derive(Args, Debug, Clone)]
pub struct GridArgs {
    pub year: i32,

    #[arg(value_parser = clap::value_parser!(u32).range(1..=12))]
    pub month: u32,

    /// Overrides "today" (defaults to the configured timezone's date).
    #[arg(long)]
    pub today: Option<NaiveDate>,

    /// Click these days in order, as a user would.
    #[arg(long = "select", action = ArgAction::Append)]
    pub select: Vec<NaiveDate>,

    /// Use range selection instead of single.
    #[arg(long)]
    pub range: bool,

    #[arg(long)]
    pub disable_weekends: bool,
}

/// Crates whose spans follow `-v`/`-q`; everything else stays at `warn`.
const OWN_TARGETS: [&str; 2] = ["krds_core", "krds_cli"];

/// Filter used when `RUST_LOG` is unset.
pub fn default_directive(verbose: u8, quiet: u8) -> String {
    let level = match (quiet, verbose) {
        (2.., _) => "error",
        (1, _) => "warn",
        (0, 0) => "warn",
        (0, 1) => "info",
        (0, 2) => "debug",
        (0, _) => "trace",
    };
    let own = OWN_TARGETS
        .iter()
        .map(|target| format!("{target}={level}"))
        .collect::<Vec<_>>()
        .join(",");
    let rest = if quiet >= 2 { "error" } else { "warn" };
    format!("{rest},{own}")
}

pub fn init_tracing(verbose: u8, quiet: u8) -> anyhow::Result<()> {
    let directive = default_directive(verbose, quiet);
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&directive))
        .map_err(|e| anyhow!("invalid RUST_LOG / log filter: {e}"))?;

    let init_result = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(verbose >= 2)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .try_init();

    if let Err(err) = init_result {
        debug!(error = %err, "tracing subscriber already set, continuing");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_grid_with_repeated_selects() {
        let cli = GlobalCli::try_parse_from([
            "krds",
            "-vv",
            "grid",
            "2026",
            "3",
            "--range",
            "--select",
            "2026-03-10",
            "--select",
            "2026-03-05",
        ])
        .expect("valid args");

        assert_eq!(cli.verbose, 2);
        let Command::Grid(args) = cli.command else {
            panic!("expected grid command");
        };
        assert_eq!(args.year, 2026);
        assert_eq!(args.month, 3);
        assert!(args.range);
        assert_eq!(args.select.len(), 2);
    }

    #[test]
    fn default_filter_scopes_verbosity_to_own_crates() {
        assert_eq!(default_directive(0, 0), "warn,krds_core=warn,krds_cli=warn");
        assert_eq!(default_directive(2, 0), "warn,krds_core=debug,krds_cli=debug");
        assert_eq!(default_directive(5, 0), "warn,krds_core=trace,krds_cli=trace");
        assert_eq!(default_directive(3, 2), "error,krds_core=error,krds_cli=error");
    }

    #[test]
    fn rejects_month_out_of_range() {
        assert!(GlobalCli::try_parse_from(["krds", "grid", "2026", "13"]).is_err());
        assert!(GlobalCli::try_parse_from(["krds", "grid", "2026", "0"]).is_err());
    }

    #[test]
    fn global_flags_follow_subcommand() {
        let cli = GlobalCli::try_parse_from(["krds", "pages", "5", "20", "-q", "--config", "alt.toml"])
            .expect("valid args");

        assert_eq!(cli.quiet, 1);
        assert_eq!(cli.config, Some(PathBuf::from("alt.toml")));
        assert!(matches!(cli.command, Command::Pages { current: 5, total: 20 }));
    }
}
