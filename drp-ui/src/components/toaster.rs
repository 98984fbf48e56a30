//! Toast viewport.

use crate::state::FormState;
use dioxus::prelude::*;

/// Renders the current toast in the bottom-right corner with a close button.
#[component]
pub fn Toaster() -> Element {
    let mut state = use_context::<FormState>();
    let toast = state.toast.read().clone();

    rsx! {
        if let Some(toast) = toast {
            div {
                role: "status",
                style: "position: fixed; right: 16px; bottom: 16px; z-index: 100; padding: 16px 24px; background: white; border: 1px solid #e4e4e7; border-radius: 8px; box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);",
                div {
                    style: "display: flex; align-items: flex-start; gap: 16px;",
                    strong {
                        style: "font-size: 14px;",
                        "{toast.title}"
                    }
                    button {
                        r#type: "button",
                        style: "margin-left: auto; border: none; background: none; color: #71717a; cursor: pointer;",
                        onclick: move |_| state.dismiss_toast(),
                        "✕"
                    }
                }
                pre {
                    style: "margin-top: 8px; width: 340px; border-radius: 6px; background: #020617; padding: 16px;",
                    code {
                        style: "color: white;",
                        "{toast.description}"
                    }
                }
            }
        }
    }
}
