//! `calendar`: print a field's month grid as text.

use anyhow::{anyhow, Result};
use chrono::{DateTime, Datelike, NaiveDate, Utc};
use drp_core::calendar::WEEKDAY_HEADER;
use drp_core::{CalendarDay, DateRangeForm, Field, FormConfig, MonthView};
use log::debug;

pub fn run_calendar(
    field: Field,
    month: Option<NaiveDate>,
    start: Option<NaiveDate>,
    now: DateTime<Utc>,
    config: FormConfig,
) -> Result<()> {
    print!("{}", calendar_text(field, month, start, now, config)?);
    Ok(())
}

/// The grid `field`'s popover would show, with `start` already picked.
pub fn calendar_text(
    field: Field,
    month: Option<NaiveDate>,
    start: Option<NaiveDate>,
    now: DateTime<Utc>,
    config: FormConfig,
) -> Result<String> {
    let mut form = DateRangeForm::new(config);
    if let Some(start) = start {
        form.pick(Field::Start, start, now)?;
    }

    let month = month.unwrap_or_else(|| form.initial_month(field, now));
    let bounds = form.bounds(field, now);
    debug!("{} calendar for {}, selectable {}", field, month, bounds);

    let view = form.month_view(field, month, now).ok_or_else(|| {
        anyhow!(
            "month {} is outside the supported calendar",
            month.format("%Y-%m")
        )
    })?;
    Ok(render_month(&view))
}

/// Text grid: blank cells for neighbouring months, `--` for disabled days,
/// `[ d]` for the picked day and `( d)` for today.
pub fn render_month(view: &MonthView) -> String {
    let mut out = format!("{}\n", view.caption());

    let header: String = WEEKDAY_HEADER.iter().map(|name| format!(" {name} ")).collect();
    out.push_str(header.trim_end());
    out.push('\n');

    for week in view.weeks() {
        let row: String = week.iter().map(render_day).collect();
        out.push_str(row.trim_end());
        out.push('\n');
    }
    out
}

fn render_day(day: &CalendarDay) -> String {
    let n = day.date.day();
    if day.outside {
        "    ".to_string()
    } else if day.disabled {
        " -- ".to_string()
    } else if day.selected {
        format!("[{n:>2}]")
    } else if day.today {
        format!("({n:>2})")
    } else {
        format!(" {n:>2} ")
    }
}
