//! `submit`: pick both days and submit the form.

use anyhow::Result;
use chrono::{DateTime, NaiveDate, Utc};
use drp_core::{messages, DateRange, DateRangeForm, Field, FormConfig};
use log::info;

/// Pick `start` and `end` the way calendar clicks would, then submit.
///
/// Start is picked first unless `end_first` is set. A day outside its
/// field's bounds fails before submission. A rejected submission prints one
/// `field: message` line per error to stderr.
pub fn submit_range(
    form: &mut DateRangeForm,
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
    end_first: bool,
    now: DateTime<Utc>,
) -> Result<DateRange> {
    let mut picks = [(Field::Start, start), (Field::End, end)];
    if end_first {
        picks.reverse();
    }
    for (field, day) in picks {
        if let Some(day) = day {
            form.pick(field, day, now)?;
        }
    }

    match form.submit() {
        Ok(range) => Ok(range),
        Err(errors) => {
            for (field, error) in errors.iter() {
                eprintln!("{field}: {error}");
            }
            Err(errors.into())
        }
    }
}

pub fn run_submit(
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
    end_first: bool,
    now: DateTime<Utc>,
    config: FormConfig,
) -> Result<()> {
    info!("submitting {:?}..{:?} at {}", start, end, now);
    let mut form = DateRangeForm::new(config);
    let range = submit_range(&mut form, start, end, end_first, now)?;

    println!("{}", messages::SUBMITTED_TITLE);
    println!("{}", range.to_pretty_json()?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use drp_core::{FieldError, FormErrors, SelectionError};

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn midnight_of(day: NaiveDate) -> DateTime<Utc> {
        drp_core::date_range::midnight(day)
    }

    fn now() -> DateTime<Utc> {
        date(2024, 6, 1).and_hms_opt(12, 0, 0).unwrap().and_utc()
    }

    #[test]
    fn test_submit_range() {
        let mut form = DateRangeForm::default();
        let range = submit_range(
            &mut form,
            Some(date(2024, 3, 5)),
            Some(date(2024, 3, 10)),
            false,
            now(),
        )
        .unwrap();
        assert_eq!(
            range.to_pretty_json().unwrap(),
            "{\n  \"start\": \"2024-03-05T00:00:00.000Z\",\n  \"end\": \"2024-03-10T23:59:59.999Z\"\n}"
        );
    }

    #[test]
    fn test_missing_fields_are_reported() {
        let mut form = DateRangeForm::default();
        let err = submit_range(&mut form, None, None, false, now()).unwrap_err();
        let errors = err.downcast_ref::<FormErrors>().unwrap();
        assert_eq!(errors.get(Field::Start), Some(FieldError::RequiredFieldMissing(Field::Start)));
        assert_eq!(errors.get(Field::End), Some(FieldError::RequiredFieldMissing(Field::End)));
    }

    #[test]
    fn test_end_before_start_is_disabled() {
        let mut form = DateRangeForm::default();
        let err = submit_range(
            &mut form,
            Some(date(2024, 3, 10)),
            Some(date(2024, 3, 5)),
            false,
            now(),
        )
        .unwrap_err();
        assert!(matches!(
            err.downcast_ref::<SelectionError>(),
            Some(SelectionError::Disabled { field: Field::End, .. })
        ));
    }

    #[test]
    fn test_future_day_is_disabled() {
        let mut form = DateRangeForm::default();
        let err = submit_range(&mut form, Some(date(2024, 6, 2)), None, false, now()).unwrap_err();
        assert!(err.downcast_ref::<SelectionError>().is_some());
    }

    #[test]
    fn test_end_first_reaches_invalid_range() {
        let mut form = DateRangeForm::default();
        let err = submit_range(
            &mut form,
            Some(date(2024, 3, 10)),
            Some(date(2024, 3, 5)),
            true,
            now(),
        )
        .unwrap_err();
        let errors = err.downcast_ref::<FormErrors>().unwrap();
        assert_eq!(errors.get(Field::End), Some(FieldError::InvalidRange));
        assert_eq!(errors.get(Field::Start), None);
        assert_eq!(form.value(Field::Start), Some(midnight_of(date(2024, 3, 10))));
    }
}
