//! Start and end pickers with the submit button.

use crate::components::DateField;
use crate::state::FormState;
use dioxus::prelude::*;
use drp_core::{messages, Field};

const FORM_CLASS: &str = "date-range-form";
const FIELDS_CLASS: &str = "date-range-fields";

/// Fields stack in a column on narrow screens and sit in a row from 768px up.
const FORM_CSS: &str = "
.date-range-form, .date-range-fields {
    display: flex;
    flex-direction: column;
    align-items: center;
    justify-content: center;
    gap: 32px;
}
@media (min-width: 768px) {
    .date-range-form, .date-range-fields {
        flex-direction: row;
        align-items: flex-end;
    }
}
";

/// The date range form. Expects a `FormState` in context.
#[component]
pub fn DatePickerForm() -> Element {
    let mut state = use_context::<FormState>();
    let submit_label = messages::SUBMIT_LABEL;

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        state.submit();
    };

    rsx! {
        style { "{FORM_CSS}" }
        form {
            class: FORM_CLASS,
            onsubmit: on_submit,
            div {
                class: FIELDS_CLASS,
                DateField { field: Field::Start }
                DateField { field: Field::End }
            }
            button {
                r#type: "submit",
                style: "margin-bottom: 8px; padding: 8px 16px; border: none; border-radius: 6px; background: #18181b; color: #fafafa; font-size: 14px; font-weight: 500; cursor: pointer;",
                "{submit_label}"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_switches_to_row_on_wide_screens() {
        let (narrow, wide) = FORM_CSS
            .split_once("@media (min-width: 768px)")
            .unwrap();
        assert!(narrow.contains(&format!(".{FORM_CLASS}, .{FIELDS_CLASS}")));
        assert!(narrow.contains("flex-direction: column;"));
        assert!(wide.contains("flex-direction: row;"));
    }
}
