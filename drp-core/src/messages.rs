//! Fixed user-facing strings. The form is shown in Spanish.

pub const START_LABEL: &str = "Desde";
pub const END_LABEL: &str = "Hasta";

/// Trigger text while a field has no date.
pub const PLACEHOLDER: &str = "Selecciona una fecha";

pub const SUBMIT_LABEL: &str = "Buscar";

pub const START_REQUIRED: &str = "Fecha de inicio requerida";
pub const END_REQUIRED: &str = "Fecha final requerida";
pub const INVALID_RANGE: &str = "Seleccione una fecha valida";

/// Title of the toast raised by an accepted submission.
pub const SUBMITTED_TITLE: &str = "You submitted the following values:";
