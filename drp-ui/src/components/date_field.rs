//! A labelled date field: trigger button, calendar popover and error message.

use crate::components::{Calendar, FormMessage};
use crate::state::FormState;
use dioxus::prelude::*;
use drp_core::Field;

const MUTED_TEXT: &str = "#71717a";
const TEXT: &str = "#09090b";
const DESTRUCTIVE: &str = "#ef4444";

/// Date field for `field`.
///
/// The popover closes on Escape, on a second click of the trigger or on a
/// click outside it. Picking a day leaves it open.
#[component]
pub fn DateField(field: Field) -> Element {
    let mut state = use_context::<FormState>();
    let (text, placeholder, has_error) = {
        let form = state.form.read();
        (
            form.render_field(field),
            form.is_placeholder(field),
            form.error(field).is_some(),
        )
    };
    let open = *state.open_field.read() == Some(field);

    let label = field.label();
    let label_color = if has_error { DESTRUCTIVE } else { TEXT };
    let text_color = if placeholder { MUTED_TEXT } else { TEXT };
    let trigger_style = format!(
        "width: 240px; display: flex; align-items: center; padding: 8px 12px; border: 1px solid #e4e4e7; border-radius: 6px; background: white; font-size: 14px; text-align: left; cursor: pointer; color: {text_color};"
    );

    let on_keydown = move |evt: KeyboardEvent| {
        if evt.key() == Key::Escape {
            state.close_popover();
        }
    };

    rsx! {
        div {
            style: "display: flex; flex-direction: column; gap: 8px; position: relative;",
            onkeydown: on_keydown,
            label {
                style: "font-size: 14px; font-weight: 500; color: {label_color};",
                "{label}"
            }
            button {
                r#type: "button",
                style: "{trigger_style}",
                onclick: move |_| state.toggle_popover(field),
                span { "{text}" }
                span {
                    style: "margin-left: auto; opacity: 0.5;",
                    "📅"
                }
            }
            if open {
                // Backdrop: a click anywhere outside the popover closes it.
                div {
                    style: "position: fixed; inset: 0; z-index: 40;",
                    onclick: move |_| state.close_popover(),
                }
                div {
                    style: "position: absolute; top: 76px; left: 0; z-index: 50; background: white; border: 1px solid #e4e4e7; border-radius: 6px; box-shadow: 0 4px 12px rgba(0, 0, 0, 0.1);",
                    Calendar { field }
                }
            }
            FormMessage { field }
        }
    }
}
