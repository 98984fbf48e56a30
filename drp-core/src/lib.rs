//! Date range form domain.
//!
//! This crate holds everything the picker page does that is not rendering:
//! - `form`: the two-field form state machine, schema validation and submission
//! - `date_range`: the submitted range and day-boundary normalization
//! - `bounds`: which days each calendar lets the user pick
//! - `calendar`: the month grid shown inside a field's popover
//! - `error`, `config`, `messages`: field errors, constants and fixed UI strings

pub mod bounds;
pub mod calendar;
pub mod config;
pub mod date_range;
pub mod error;
pub mod field;
pub mod form;
pub mod messages;

pub use bounds::SelectionBounds;
pub use calendar::{CalendarDay, MonthView};
pub use config::FormConfig;
pub use date_range::DateRange;
pub use error::{FieldError, FormErrors, SelectionError};
pub use field::Field;
pub use form::{DateRangeForm, FormStatus};
