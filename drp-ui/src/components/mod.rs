//! Reusable Dioxus RSX components for the date range form.

mod calendar;
mod date_field;
mod date_picker_form;
mod form_message;
mod toaster;

pub use calendar::Calendar;
pub use date_field::DateField;
pub use date_picker_form::DatePickerForm;
pub use form_message::FormMessage;
pub use toaster::Toaster;
