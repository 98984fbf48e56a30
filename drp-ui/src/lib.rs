//! Dioxus components for the date range picker form.
//!
//! This crate provides:
//! - `state`: reactive `FormState` with Dioxus Signals
//! - `components`: the form, its date fields, the calendar popover and the toaster
//! - `toast`: the notification raised by an accepted submission

pub mod components;
pub mod state;
pub mod toast;
