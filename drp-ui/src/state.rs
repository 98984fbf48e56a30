//! Form state managed via Dioxus context.
//!
//! `FormState` bundles the form's signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with
//! `use_context::<FormState>()`. Every mounted page gets its own instance.

use crate::toast::Toast;
use chrono::{NaiveDate, Utc};
use dioxus::prelude::*;
use drp_core::{DateRangeForm, Field, FormConfig};

/// Shared state of one date range form.
#[derive(Clone, Copy)]
pub struct FormState {
    /// Field values and their errors
    pub form: Signal<DateRangeForm>,
    /// Field whose calendar popover is open, if any
    pub open_field: Signal<Option<Field>>,
    /// Notification for the last accepted submission
    pub toast: Signal<Option<Toast>>,
}

impl FormState {
    /// Create a FormState with the default configuration.
    pub fn new() -> Self {
        Self::with_config(FormConfig::default())
    }

    pub fn with_config(config: FormConfig) -> Self {
        Self {
            form: Signal::new(DateRangeForm::new(config)),
            open_field: Signal::new(None),
            toast: Signal::new(None),
        }
    }

    /// Open `field`'s popover, or close it if it is already open.
    /// Opening one field's popover closes the other's.
    pub fn toggle_popover(&mut self, field: Field) {
        let current = *self.open_field.read();
        let next = if current == Some(field) {
            None
        } else {
            Some(field)
        };
        log::debug!("popover {:?} -> {:?}", current, next);
        self.open_field.set(next);
    }

    pub fn close_popover(&mut self) {
        if self.open_field.read().is_some() {
            self.open_field.set(None);
        }
    }

    /// Day click inside `field`'s calendar. "Now" is read at click time.
    pub fn pick(&mut self, field: Field, date: NaiveDate) {
        let result = self.form.write().pick(field, date, Utc::now());
        if let Err(err) = result {
            log::warn!("{err}");
        }
    }

    /// Submit the form; an accepted range replaces the current toast.
    pub fn submit(&mut self) {
        let result = self.form.write().submit();
        if let Ok(range) = result {
            self.toast.set(Some(Toast::submitted(&range)));
        }
    }

    pub fn dismiss_toast(&mut self) {
        self.toast.set(None);
    }
}
