//! The date range form: field values, selection, validation and submission.
//!
//! Validation only runs on submit. Once a submission has been attempted, a
//! new selection re-validates the field that changed and nothing else, so an
//! error left on `end` by a reversed range stays until the next submit even
//! if `start` is corrected.

use crate::bounds::SelectionBounds;
use crate::calendar::{self, MonthView};
use crate::config::FormConfig;
use crate::date_range::{self, DateRange};
use crate::error::{FieldError, FormErrors, SelectionError};
use crate::field::Field;
use crate::messages;
use chrono::{DateTime, NaiveDate, Utc};
use log::{debug, info, warn};

/// Where the form is in its lifecycle.
///
/// `Accepted` and `Rejected` describe the last submit and last only until
/// the next selection; the form never reaches a terminal state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormStatus {
    Empty,
    PartiallySelected,
    BothSelected,
    Rejected,
    Accepted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Outcome {
    Accepted,
    Rejected,
}

/// Transient state of one date range form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateRangeForm {
    config: FormConfig,
    start: Option<DateTime<Utc>>,
    end: Option<DateTime<Utc>>,
    errors: FormErrors,
    submit_count: usize,
    outcome: Option<Outcome>,
}

impl Default for DateRangeForm {
    fn default() -> Self {
        Self::new(FormConfig::default())
    }
}

impl DateRangeForm {
    pub fn new(config: FormConfig) -> Self {
        Self {
            config,
            start: None,
            end: None,
            errors: FormErrors::default(),
            submit_count: 0,
            outcome: None,
        }
    }

    pub fn config(&self) -> &FormConfig {
        &self.config
    }

    /// Current value of a field, as stored (normalized after a submit).
    pub fn value(&self, field: Field) -> Option<DateTime<Utc>> {
        match field {
            Field::Start => self.start,
            Field::End => self.end,
        }
    }

    /// Calendar day of a field's value.
    pub fn day(&self, field: Field) -> Option<NaiveDate> {
        self.value(field).map(|value| value.date_naive())
    }

    /// Trigger button text: the picked day as dd/MM/yyyy, or the placeholder.
    pub fn render_field(&self, field: Field) -> String {
        match self.day(field) {
            Some(day) => day.format(self.config.display_format).to_string(),
            None => messages::PLACEHOLDER.to_string(),
        }
    }

    pub fn is_placeholder(&self, field: Field) -> bool {
        self.value(field).is_none()
    }

    pub fn error(&self, field: Field) -> Option<FieldError> {
        self.errors.get(field)
    }

    pub fn errors(&self) -> &FormErrors {
        &self.errors
    }

    pub fn submit_count(&self) -> usize {
        self.submit_count
    }

    pub fn is_submitted(&self) -> bool {
        self.submit_count > 0
    }

    pub fn status(&self) -> FormStatus {
        match self.outcome {
            Some(Outcome::Accepted) => FormStatus::Accepted,
            Some(Outcome::Rejected) => FormStatus::Rejected,
            None => match (self.start.is_some(), self.end.is_some()) {
                (false, false) => FormStatus::Empty,
                (true, true) => FormStatus::BothSelected,
                _ => FormStatus::PartiallySelected,
            },
        }
    }

    /// Days `field`'s calendar accepts at `now`.
    ///
    /// Reads the current start value on every call; callers must not keep
    /// the result across selections.
    pub fn bounds(&self, field: Field, now: DateTime<Utc>) -> SelectionBounds {
        SelectionBounds::for_field(
            field,
            self.day(Field::Start),
            now.date_naive(),
            &self.config,
        )
    }

    /// Month a field's popover opens on.
    pub fn initial_month(&self, field: Field, now: DateTime<Utc>) -> NaiveDate {
        calendar::initial_month(self.day(field), now.date_naive())
    }

    /// Grid for `field`'s popover showing the month containing `month`, or
    /// `None` for a month at the edge of the representable calendar.
    pub fn month_view(
        &self,
        field: Field,
        month: NaiveDate,
        now: DateTime<Utc>,
    ) -> Option<MonthView> {
        MonthView::build(
            month,
            self.day(field),
            now.date_naive(),
            &self.bounds(field, now),
        )
    }

    /// Set or clear a field without checking its bounds.
    pub fn select(&mut self, field: Field, date: Option<NaiveDate>) {
        debug!("select {}: {:?}", field, date);
        *self.slot_mut(field) = date.map(date_range::midnight);
        self.outcome = None;
        if self.is_submitted() {
            self.revalidate(field);
        }
    }

    /// A click on `date` in `field`'s calendar.
    ///
    /// Clicking the day that is already picked clears the field. Returns the
    /// field's new day.
    pub fn pick(
        &mut self,
        field: Field,
        date: NaiveDate,
        now: DateTime<Utc>,
    ) -> Result<Option<NaiveDate>, SelectionError> {
        let bounds = self.bounds(field, now);
        if bounds.is_disabled(date) {
            warn!("ignoring disabled day {} for {} ({})", date, field, bounds);
            return Err(SelectionError::Disabled {
                field,
                date,
                bounds,
            });
        }

        let next = if self.day(field) == Some(date) {
            None
        } else {
            Some(date)
        };
        self.select(field, next);
        Ok(next)
    }

    /// Validate, normalize and return the range.
    ///
    /// Missing fields abort before normalization. Otherwise the normalized
    /// values are written back to the form even if the range is then
    /// rejected for ending before it starts.
    pub fn submit(&mut self) -> Result<DateRange, FormErrors> {
        self.submit_count += 1;
        self.errors = FormErrors::default();

        let (start, end) = match (self.start, self.end) {
            (Some(start), Some(end)) => (start, end),
            (start, end) => {
                if start.is_none() {
                    self.errors
                        .set(Field::Start, FieldError::RequiredFieldMissing(Field::Start));
                }
                if end.is_none() {
                    self.errors
                        .set(Field::End, FieldError::RequiredFieldMissing(Field::End));
                }
                return Err(self.reject());
            }
        };

        let range = DateRange::normalized(start, end);
        self.start = Some(range.start);
        self.end = Some(range.end);

        if !range.is_ordered() {
            self.errors.set(Field::End, FieldError::InvalidRange);
            return Err(self.reject());
        }

        self.outcome = Some(Outcome::Accepted);
        info!(
            "accepted date range {} to {} ({} days)",
            date_range::format_timestamp(&range.start),
            date_range::format_timestamp(&range.end),
            range.num_days()
        );
        Ok(range)
    }

    fn reject(&mut self) -> FormErrors {
        self.outcome = Some(Outcome::Rejected);
        for (field, error) in self.errors.iter() {
            warn!("submission rejected, {}: {}", field, error);
        }
        self.errors.clone()
    }

    fn revalidate(&mut self, field: Field) {
        match self.value(field) {
            Some(_) => self.errors.clear(field),
            None => self
                .errors
                .set(field, FieldError::RequiredFieldMissing(field)),
        }
    }

    fn slot_mut(&mut self, field: Field) -> &mut Option<DateTime<Utc>> {
        match field {
            Field::Start => &mut self.start,
            Field::End => &mut self.end,
        }
    }
}
