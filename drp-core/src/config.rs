//! Form configuration.

use chrono::NaiveDate;

/// Earliest day either calendar lets the user pick.
pub const MIN_SELECTABLE_DATE: NaiveDate = match NaiveDate::from_ymd_opt(2022, 1, 1) {
    Some(date) => date,
    None => panic!("invalid minimum selectable date"),
};

/// chrono format for the trigger button text (dd/MM/yyyy).
pub const DISPLAY_FORMAT: &str = "%d/%m/%Y";

/// Settings shared by both fields of a form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormConfig {
    /// Lower bound for both calendars, inclusive.
    pub min_date: NaiveDate,
    /// chrono format string used to render a picked day.
    pub display_format: &'static str,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            min_date: MIN_SELECTABLE_DATE,
            display_format: DISPLAY_FORMAT,
        }
    }
}

impl FormConfig {
    pub fn with_min_date(mut self, min_date: NaiveDate) -> Self {
        self.min_date = min_date;
        self
    }
}
