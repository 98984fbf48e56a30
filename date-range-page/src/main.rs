//! Date range picker page
//!
//! A single centered form with "Desde" and "Hasta" date fields and a
//! "Buscar" button. Each field opens a calendar popover. Submitting a valid
//! range shows the normalized payload in a toast; otherwise the missing or
//! misordered fields are flagged inline.
//!
//! All form logic lives in `drp-core`. This binary only mounts the page.

use drp_ui::components::{DatePickerForm, Toaster};
use drp_ui::state::FormState;
use dioxus::prelude::*;

/// DOM id of the element the app mounts into.
const ROOT_ID: &str = "date-range-root";

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname(ROOT_ID))
        .launch(App);
}

#[component]
fn App() -> Element {
    use_context_provider(|| {
        let state = FormState::new();
        log::info!(
            "date range page mounted (earliest day {})",
            state.form.peek().config().min_date
        );
        state
    });

    rsx! {
        HomePage {}
        Toaster {}
    }
}

#[component]
fn HomePage() -> Element {
    rsx! {
        main {
            style: "display: flex; min-height: 100vh; flex-direction: column; align-items: center; justify-content: center; padding: 24px; font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;",
            DatePickerForm {}
        }
    }
}
