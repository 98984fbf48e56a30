//! Month grid shown inside a field's popover.
//!
//! Weeks start on Sunday. Days of the neighbouring months that share a week
//! with the visible month are included and flagged `outside`.

use crate::bounds::SelectionBounds;
use chrono::{Datelike, Days, Months, NaiveDate};

/// Weekday column headers, Sunday first.
pub const WEEKDAY_HEADER: [&str; 7] = ["Su", "Mo", "Tu", "We", "Th", "Fr", "Sa"];

/// A single cell of the month grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarDay {
    pub date: NaiveDate,
    /// Belongs to the previous or next month.
    pub outside: bool,
    pub disabled: bool,
    pub selected: bool,
    pub today: bool,
}

/// One month of selectable days.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthView {
    month: NaiveDate,
    weeks: Vec<[CalendarDay; 7]>,
}

impl MonthView {
    /// Build the grid for the month containing `month`.
    ///
    /// Returns `None` when the grid would reach past the dates chrono can
    /// represent.
    pub fn build(
        month: NaiveDate,
        selected: Option<NaiveDate>,
        today: NaiveDate,
        bounds: &SelectionBounds,
    ) -> Option<Self> {
        let first = first_of_month(month);
        let last = first
            .checked_add_months(Months::new(1))?
            .checked_sub_days(Days::new(1))?;
        let lead = u64::from(first.weekday().num_days_from_sunday());

        let mut weeks = Vec::new();
        let mut week_start = first.checked_sub_days(Days::new(lead))?;
        while week_start <= last {
            let mut week = Vec::with_capacity(7);
            for offset in 0..7 {
                let date = week_start.checked_add_days(Days::new(offset))?;
                week.push(CalendarDay {
                    date,
                    outside: first_of_month(date) != first,
                    disabled: bounds.is_disabled(date),
                    selected: selected == Some(date),
                    today: date == today,
                });
            }
            let week: [CalendarDay; 7] = week.try_into().ok()?;
            weeks.push(week);
            week_start = week_start.checked_add_days(Days::new(7))?;
        }

        Some(Self { month: first, weeks })
    }

    /// First day of the visible month.
    pub fn month(&self) -> NaiveDate {
        self.month
    }

    pub fn weeks(&self) -> &[[CalendarDay; 7]] {
        &self.weeks
    }

    pub fn days(&self) -> impl Iterator<Item = &CalendarDay> {
        self.weeks.iter().flatten()
    }

    /// Caption such as "March 2024".
    pub fn caption(&self) -> String {
        self.month.format("%B %Y").to_string()
    }

    /// First day of the previous month, if representable.
    pub fn previous(&self) -> Option<NaiveDate> {
        self.month.checked_sub_months(Months::new(1))
    }

    pub fn next(&self) -> Option<NaiveDate> {
        self.month.checked_add_months(Months::new(1))
    }
}

/// First day of the month containing `date`.
pub fn first_of_month(date: NaiveDate) -> NaiveDate {
    date - Days::new(u64::from(date.day0()))
}

/// Month a popover opens on: the picked day's month, else the current one.
pub fn initial_month(selected: Option<NaiveDate>, today: NaiveDate) -> NaiveDate {
    first_of_month(selected.unwrap_or(today))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Weekday;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn open_bounds() -> SelectionBounds {
        SelectionBounds::new(date(2022, 1, 1), date(2030, 12, 31))
    }

    #[test]
    fn test_march_2024_grid() {
        let view = MonthView::build(date(2024, 3, 17), None, date(2024, 3, 20), &open_bounds()).unwrap();
        assert_eq!(view.month(), date(2024, 3, 1));
        assert_eq!(view.caption(), "March 2024");

        // March 1st 2024 is a Friday, March 31st a Sunday.
        assert_eq!(view.weeks().len(), 6);
        let first_cell = view.weeks()[0][0];
        assert_eq!(first_cell.date, date(2024, 2, 25));
        assert!(first_cell.outside);
        assert_eq!(view.weeks()[0][5].date, date(2024, 3, 1));
        assert!(!view.weeks()[0][5].outside);

        for week in view.weeks() {
            assert_eq!(week[0].date.weekday(), Weekday::Sun);
        }
        assert_eq!(view.days().filter(|day| !day.outside).count(), 31);
        assert_eq!(view.days().filter(|day| day.today).count(), 1);
    }

    #[test]
    fn test_february_2026_fits_four_weeks() {
        // Sunday the 1st through Saturday the 28th.
        let view = MonthView::build(date(2026, 2, 1), None, date(2026, 2, 10), &open_bounds()).unwrap();
        assert_eq!(view.weeks().len(), 4);
        assert!(view.days().all(|day| !day.outside));
    }

    #[test]
    fn test_flags_follow_bounds_and_selection() {
        let bounds = SelectionBounds::new(date(2024, 3, 10), date(2024, 3, 20));
        let view = MonthView::build(date(2024, 3, 1), Some(date(2024, 3, 12)), date(2024, 3, 20), &bounds).unwrap();

        let cell = |d: NaiveDate| *view.days().find(|day| day.date == d).unwrap();
        assert!(cell(date(2024, 3, 9)).disabled);
        assert!(!cell(date(2024, 3, 10)).disabled);
        assert!(cell(date(2024, 3, 12)).selected);
        assert!(!cell(date(2024, 3, 20)).disabled);
        assert!(cell(date(2024, 3, 21)).disabled);
        assert_eq!(view.days().filter(|day| day.selected).count(), 1);
    }

    #[test]
    fn test_month_navigation_crosses_years() {
        let view = MonthView::build(date(2024, 1, 15), None, date(2024, 1, 15), &open_bounds()).unwrap();
        assert_eq!(view.previous(), Some(date(2023, 12, 1)));
        assert_eq!(view.next(), Some(date(2024, 2, 1)));
    }

    #[test]
    fn test_months_at_the_edge_of_the_calendar() {
        let today = date(2024, 1, 15);
        assert!(MonthView::build(NaiveDate::MAX, None, today, &open_bounds()).is_none());
        assert!(MonthView::build(NaiveDate::MIN, None, today, &open_bounds()).is_none());

        // The second-to-last month still fits, but there is nothing after it.
        let near_end = first_of_month(NaiveDate::MAX).checked_sub_months(Months::new(1)).unwrap();
        let view = MonthView::build(near_end, None, today, &open_bounds()).unwrap();
        assert!(view.next().is_some());
        assert!(MonthView::build(view.next().unwrap(), None, today, &open_bounds()).is_none());
    }

    #[test]
    fn test_initial_month() {
        assert_eq!(initial_month(Some(date(2023, 8, 19)), date(2024, 6, 1)), date(2023, 8, 1));
        assert_eq!(initial_month(None, date(2024, 6, 30)), date(2024, 6, 1));
    }
}
