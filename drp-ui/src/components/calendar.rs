//! Month grid shown in a date field's popover.

use crate::state::FormState;
use chrono::{NaiveDate, Utc};
use dioxus::prelude::*;
use drp_core::calendar::WEEKDAY_HEADER;
use drp_core::{CalendarDay, Field};

const NAV_BUTTON_STYLE: &str = "width: 28px; height: 28px; border: 1px solid #e4e4e7; border-radius: 6px; background: transparent; cursor: pointer;";

/// Calendar for `field`. Opens on the picked day's month, else today's.
#[component]
pub fn Calendar(field: Field) -> Element {
    let state = use_context::<FormState>();
    let mut month = use_signal(|| state.form.read().initial_month(field, Utc::now()));

    let now = Utc::now();
    let form = state.form.read();
    let Some(view) = form.month_view(field, month(), now) else {
        log::warn!("no calendar grid for {} around {}", field, month());
        return rsx! {};
    };
    let caption = view.caption();
    // Navigation stops at the last month that still has a full grid.
    let reachable = |target: Option<NaiveDate>| {
        target.filter(|target| form.month_view(field, *target, now).is_some())
    };
    let previous = reachable(view.previous());
    let next = reachable(view.next());
    drop(form);

    rsx! {
        div {
            style: "padding: 12px; font-size: 14px;",
            div {
                style: "display: flex; align-items: center; justify-content: space-between; margin-bottom: 8px;",
                button {
                    r#type: "button",
                    style: NAV_BUTTON_STYLE,
                    disabled: previous.is_none(),
                    onclick: move |_| {
                        if let Some(target) = previous {
                            month.set(target);
                        }
                    },
                    "‹"
                }
                span {
                    style: "font-weight: 500;",
                    "{caption}"
                }
                button {
                    r#type: "button",
                    style: NAV_BUTTON_STYLE,
                    disabled: next.is_none(),
                    onclick: move |_| {
                        if let Some(target) = next {
                            month.set(target);
                        }
                    },
                    "›"
                }
            }
            table {
                style: "border-collapse: collapse;",
                thead {
                    tr {
                        for name in WEEKDAY_HEADER {
                            th {
                                style: "width: 36px; font-weight: 400; font-size: 12px; color: #71717a;",
                                "{name}"
                            }
                        }
                    }
                }
                tbody {
                    for week in view.weeks() {
                        tr {
                            for day in week.iter().copied() {
                                td {
                                    style: "padding: 1px;",
                                    DayButton { field, day }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn DayButton(field: Field, day: CalendarDay) -> Element {
    let mut state = use_context::<FormState>();
    let label = day.date.format("%-d").to_string();
    let style = day_style(&day);

    rsx! {
        button {
            r#type: "button",
            style: "{style}",
            disabled: day.disabled,
            onclick: move |_| state.pick(field, day.date),
            "{label}"
        }
    }
}

fn day_style(day: &CalendarDay) -> String {
    let (background, color) = if day.selected {
        ("#18181b", "#fafafa")
    } else if day.today {
        ("#f4f4f5", "#09090b")
    } else {
        ("transparent", "#09090b")
    };
    let opacity = if day.disabled {
        "0.5"
    } else if day.outside {
        "0.6"
    } else {
        "1"
    };
    let cursor = if day.disabled { "default" } else { "pointer" };

    format!(
        "width: 36px; height: 36px; border: none; border-radius: 6px; background: {background}; color: {color}; opacity: {opacity}; cursor: {cursor};"
    )
}
