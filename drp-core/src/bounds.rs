//! Selectable-day bounds for the two calendars.
//!
//! Both calendars stop at "today" and at the configured minimum date. The end
//! calendar additionally starts at the day currently chosen for start, so the
//! bounds must be rebuilt whenever they are shown rather than kept around.

use crate::config::FormConfig;
use crate::field::Field;
use chrono::NaiveDate;
use std::fmt;

/// Inclusive range of days a calendar lets the user pick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionBounds {
    min: NaiveDate,
    max: NaiveDate,
}

impl SelectionBounds {
    pub fn new(min: NaiveDate, max: NaiveDate) -> Self {
        Self { min, max }
    }

    /// Bounds for `field` given the current start day and today's date.
    pub fn for_field(
        field: Field,
        start: Option<NaiveDate>,
        today: NaiveDate,
        config: &FormConfig,
    ) -> Self {
        let min = match (field, start) {
            (Field::End, Some(start)) => start.max(config.min_date),
            _ => config.min_date,
        };
        Self { min, max: today }
    }

    pub fn min(&self) -> NaiveDate {
        self.min
    }

    pub fn max(&self) -> NaiveDate {
        self.max
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.min <= date && date <= self.max
    }

    pub fn is_disabled(&self, date: NaiveDate) -> bool {
        !self.contains(date)
    }

    /// True when no day at all can be picked.
    pub fn is_empty(&self) -> bool {
        self.min > self.max
    }
}

impl fmt::Display for SelectionBounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            f.write_str("no selectable days")
        } else {
            write!(f, "{} to {}", self.min, self.max)
        }
    }
}
