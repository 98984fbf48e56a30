use crate::messages;
use std::fmt;

/// One of the two date fields of the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Start,
    End,
}

impl Field {
    pub const ALL: [Field; 2] = [Field::Start, Field::End];

    /// Key used in the submission payload and in logs.
    pub fn name(self) -> &'static str {
        match self {
            Field::Start => "start",
            Field::End => "end",
        }
    }

    /// Label rendered above the field's trigger button.
    pub fn label(self) -> &'static str {
        match self {
            Field::Start => messages::START_LABEL,
            Field::End => messages::END_LABEL,
        }
    }

    pub fn required_message(self) -> &'static str {
        match self {
            Field::Start => messages::START_REQUIRED,
            Field::End => messages::END_REQUIRED,
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
