//! Error taxonomy for the form lifecycle.
//!
//! Every variant is terminal for the current render cycle: it moves the view
//! into the error section and nothing is retried automatically. The only
//! recovery path is a manual reload or a new user action.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    /// Short-form session lookup failed, either at the transport level or
    /// with an explicit failure flag in the response.
    #[error("Failed to load the form configuration: {0}")]
    Resolution(String),

    /// No fields were resolved from the URL or the session lookup.
    #[error(
        "No form fields were specified. Open this page with ?fields=name,email \
         (comma-separated field names) or use a shared form link."
    )]
    MissingFields,

    /// The schema generation call failed.
    #[error("Failed to generate the form: {0}")]
    SchemaFetch(String),

    /// The submit call failed.
    #[error("Failed to submit the form: {0}")]
    Submission(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_message_tells_the_caller_how_to_supply_them() {
        let message = FormError::MissingFields.to_string();
        assert!(message.contains("?fields="));
        assert!(message.contains("form link"));
    }

    #[test]
    fn server_messages_are_forwarded() {
        let err = FormError::SchemaFetch("rate limit exceeded".to_string());
        assert!(err.to_string().contains("rate limit exceeded"));
    }
}
