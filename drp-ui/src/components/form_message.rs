//! Inline error message beneath a field.

use crate::state::FormState;
use dioxus::prelude::*;
use drp_core::Field;

/// Shows `field`'s current error, if any.
#[component]
pub fn FormMessage(field: Field) -> Element {
    let state = use_context::<FormState>();
    let error = state.form.read().error(field);

    rsx! {
        if let Some(error) = error {
            p {
                style: "margin: 0; font-size: 13px; font-weight: 500; color: #ef4444;",
                "{error}"
            }
        }
    }
}
