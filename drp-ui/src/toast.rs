use drp_core::{messages, DateRange};

/// A one-shot notification. Only one is shown at a time.
#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub title: String,
    /// Preformatted body, rendered inside `pre`/`code`.
    pub description: String,
}

impl Toast {
    /// Notification for an accepted submission, listing the payload as
    /// indented JSON.
    pub fn submitted(range: &DateRange) -> Self {
        Self {
            title: messages::SUBMITTED_TITLE.to_string(),
            description: payload_text(range.to_pretty_json()),
        }
    }
}

fn payload_text(json: serde_json::Result<String>) -> String {
    match json {
        Ok(text) => text,
        Err(err) => {
            log::warn!("failed to format submission payload: {err}");
            String::new()
        }
    }
}
