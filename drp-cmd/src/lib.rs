//! Command implementations for the date range picker CLI.
//!
//! Drives the same form the web page uses, without a browser: pick days,
//! submit, and print either the payload or the field errors.

use chrono::{DateTime, NaiveDate, Utc};
use clap::{Subcommand, ValueEnum};
use drp_core::Field;

pub mod args;
pub mod calendar;
pub mod submit;

#[derive(Subcommand)]
pub enum Command {
    /// Pick a start and end day, submit, and print the payload
    Submit {
        /// Start day (YYYY-MM-DD)
        #[arg(short = 's', long, value_parser = args::parse_date)]
        start: Option<NaiveDate>,

        /// End day (YYYY-MM-DD)
        #[arg(short = 'e', long, value_parser = args::parse_date)]
        end: Option<NaiveDate>,

        /// Current time as RFC 3339 (defaults to the system clock)
        #[arg(long, value_parser = args::parse_now)]
        now: Option<DateTime<Utc>>,

        /// Earliest selectable day (YYYY-MM-DD)
        #[arg(long, value_parser = args::parse_date)]
        min_date: Option<NaiveDate>,

        /// Pick the end day before the start day, so an end earlier than the
        /// start reaches submission instead of being a disabled day
        #[arg(long)]
        end_first: bool,
    },

    /// Print the calendar grid a field's popover would show
    Calendar {
        /// Field whose calendar to print
        #[arg(short = 'f', long, value_enum)]
        field: FieldArg,

        /// Month to show (YYYY-MM); defaults to the picked day's month, else today's
        #[arg(short = 'm', long, value_parser = args::parse_month)]
        month: Option<NaiveDate>,

        /// Picked start day (YYYY-MM-DD)
        #[arg(short = 's', long, value_parser = args::parse_date)]
        start: Option<NaiveDate>,

        /// Current time as RFC 3339 (defaults to the system clock)
        #[arg(long, value_parser = args::parse_now)]
        now: Option<DateTime<Utc>>,

        /// Earliest selectable day (YYYY-MM-DD)
        #[arg(long, value_parser = args::parse_date)]
        min_date: Option<NaiveDate>,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum FieldArg {
    Start,
    End,
}

impl From<FieldArg> for Field {
    fn from(arg: FieldArg) -> Self {
        match arg {
            FieldArg::Start => Field::Start,
            FieldArg::End => Field::End,
        }
    }
}

pub fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Submit {
            start,
            end,
            now,
            min_date,
            end_first,
        } => submit::run_submit(
            start,
            end,
            end_first,
            now.unwrap_or_else(Utc::now),
            args::config(min_date),
        ),
        Command::Calendar {
            field,
            month,
            start,
            now,
            min_date,
        } => calendar::run_calendar(
            field.into(),
            month,
            start,
            now.unwrap_or_else(Utc::now),
            args::config(min_date),
        ),
    }
}
