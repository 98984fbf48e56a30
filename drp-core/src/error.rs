//! Error types for the date range form.
use crate::bounds::SelectionBounds;
use crate::field::Field;
use crate::messages;
use chrono::NaiveDate;
use thiserror::Error;

/// A validation error attached to a single field.
///
/// The display text is the message rendered beneath the field.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    /// The field was empty when the form was submitted.
    #[error("{}", .0.required_message())]
    RequiredFieldMissing(Field),

    /// The end day precedes the start day.
    #[error("{}", messages::INVALID_RANGE)]
    InvalidRange,
}

/// Per-field errors of a rejected submission.
#[derive(Error, Debug, Clone, Default, PartialEq, Eq)]
#[error("date range submission rejected")]
pub struct FormErrors {
    start: Option<FieldError>,
    end: Option<FieldError>,
}

impl FormErrors {
    pub fn get(&self, field: Field) -> Option<FieldError> {
        match field {
            Field::Start => self.start,
            Field::End => self.end,
        }
    }

    pub fn set(&mut self, field: Field, error: FieldError) {
        *self.slot_mut(field) = Some(error);
    }

    pub fn clear(&mut self, field: Field) {
        *self.slot_mut(field) = None;
    }

    pub fn is_empty(&self) -> bool {
        self.start.is_none() && self.end.is_none()
    }

    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// Errors in field order (start first).
    pub fn iter(&self) -> impl Iterator<Item = (Field, FieldError)> + '_ {
        Field::ALL
            .into_iter()
            .filter_map(|field| self.get(field).map(|error| (field, error)))
    }

    fn slot_mut(&mut self, field: Field) -> &mut Option<FieldError> {
        match field {
            Field::Start => &mut self.start,
            Field::End => &mut self.end,
        }
    }
}

/// A click on a day the field's calendar does not allow.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionError {
    #[error("{date} cannot be selected for {field} (allowed: {bounds})")]
    Disabled {
        field: Field,
        date: NaiveDate,
        bounds: SelectionBounds,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_error_messages() {
        assert_eq!(
            FieldError::RequiredFieldMissing(Field::Start).to_string(),
            "Fecha de inicio requerida"
        );
        assert_eq!(
            FieldError::RequiredFieldMissing(Field::End).to_string(),
            "Fecha final requerida"
        );
        assert_eq!(FieldError::InvalidRange.to_string(), "Seleccione una fecha valida");
    }

    #[test]
    fn test_form_errors_slots() {
        let mut errors = FormErrors::default();
        assert!(errors.is_empty());

        errors.set(Field::End, FieldError::InvalidRange);
        errors.set(Field::Start, FieldError::RequiredFieldMissing(Field::Start));
        assert_eq!(errors.len(), 2);

        let fields: Vec<Field> = errors.iter().map(|(field, _)| field).collect();
        assert_eq!(fields, vec![Field::Start, Field::End]);

        errors.clear(Field::Start);
        assert_eq!(errors.get(Field::Start), None);
        assert_eq!(errors.get(Field::End), Some(FieldError::InvalidRange));
    }

    #[test]
    fn test_selection_error_display() {
        let bounds = SelectionBounds::new(
            NaiveDate::from_ymd_opt(2022, 1, 1).unwrap(),
            NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
        );
        let error = SelectionError::Disabled {
            field: Field::End,
            date: NaiveDate::from_ymd_opt(2021, 12, 31).unwrap(),
            bounds,
        };
        assert_eq!(
            error.to_string(),
            "2021-12-31 cannot be selected for end (allowed: 2022-01-01 to 2024-06-01)"
        );
    }
}
