//! Command implementations for the WTD CLI.
//!
//! Headless access to the same simulator the dashboard runs on: one-off
//! snapshots, a ticking live feed and the filtered history table.

use clap::{Subcommand, ValueEnum};
use wtd_data::simulator::{DEFAULT_LOOKBACK_HOURS, DEFAULT_TICK_SECS};
use wtd_data::time_range::TimeRange;

pub mod history;
pub mod live;

/// Longest `history --hours` accepted: one year.
pub const MAX_LOOKBACK_HOURS: i64 = 8760;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Format {
    #[default]
    Csv,
    Json,
}

#[derive(Subcommand)]
pub enum Command {
    /// Print one snapshot of every sensor with its status
    Snapshot {
        /// Simulator seed; random when omitted
        #[arg(long)]
        seed: Option<u64>,

        /// Emit JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Print a fresh snapshot every tick, with alerts for status changes
    Watch {
        /// Seconds between snapshots
        #[arg(short, long, default_value_t = DEFAULT_TICK_SECS)]
        interval: u32,

        /// Stop after this many snapshots (runs until interrupted when omitted)
        #[arg(short, long)]
        count: Option<usize>,

        #[arg(long)]
        seed: Option<u64>,
    },

    /// Print hourly history filtered to a time range
    History {
        /// Hours of history to generate, at most a year
        #[arg(
            long,
            default_value_t = DEFAULT_LOOKBACK_HOURS,
            value_parser = clap::value_parser!(u32).range(0..=MAX_LOOKBACK_HOURS)
        )]
        hours: u32,

        /// 6h, 12h, 24h, 7d or a custom YYYY-MM-DD..[YYYY-MM-DD] span
        #[arg(short, long, default_value = "24h")]
        range: TimeRange,

        #[arg(short, long, value_enum, default_value_t = Format::Csv)]
        format: Format,

        /// Write to this path instead of stdout
        #[arg(short, long)]
        output: Option<String>,

        #[arg(long)]
        seed: Option<u64>,
    },
}

/// Seed from the clock when none is given.
pub fn seed_or_clock(seed: Option<u64>) -> u64 {
    seed.unwrap_or_else(|| chrono::Utc::now().timestamp_micros() as u64)
}

pub async fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Snapshot { seed, json } => live::run_snapshot(seed_or_clock(seed), json),
        Command::Watch {
            interval,
            count,
            seed,
        } => live::run_watch(seed_or_clock(seed), interval, count).await,
        Command::History {
            hours,
            range,
            format,
            output,
            seed,
        } => history::run_history(seed_or_clock(seed), hours, range, format, output.as_deref()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser)]
    struct TestCli {
        #[command(subcommand)]
        command: Command,
    }

    #[test]
    fn history_defaults_and_overrides() {
        let cli = TestCli::try_parse_from(["wtd-cli", "history"]).unwrap();
        match cli.command {
            Command::History {
                hours,
                range,
                format,
                output,
                seed,
            } => {
                assert_eq!(hours, DEFAULT_LOOKBACK_HOURS);
                assert_eq!(range, TimeRange::Day);
                assert_eq!(format, Format::Csv);
                assert!(output.is_none() && seed.is_none());
            }
            _ => panic!("expected history"),
        }

        let cli = TestCli::try_parse_from([
            "wtd-cli", "history", "--range", "7d", "--format", "json", "--seed", "9",
        ])
        .unwrap();
        match cli.command {
            Command::History {
                range, format, seed, ..
            } => {
                assert_eq!(range, TimeRange::Week);
                assert_eq!(format, Format::Json);
                assert_eq!(seed, Some(9));
            }
            _ => panic!("expected history"),
        }
    }

    #[test]
    fn bad_range_is_rejected() {
        assert!(TestCli::try_parse_from(["wtd-cli", "history", "--range", "3w"]).is_err());
    }

    #[test]
    fn hours_are_capped_at_a_year() {
        assert!(TestCli::try_parse_from(["wtd-cli", "history", "--hours", "4000000000"]).is_err());
        assert!(TestCli::try_parse_from(["wtd-cli", "history", "--hours", "8761"]).is_err());

        let cli = TestCli::try_parse_from(["wtd-cli", "history", "--hours", "8760"]).unwrap();
        match cli.command {
            Command::History { hours, .. } => assert_eq!(hours, 8760),
            _ => panic!("expected history"),
        }
    }

    #[test]
    fn explicit_seed_wins() {
        assert_eq!(seed_or_clock(Some(42)), 42);
    }
}
