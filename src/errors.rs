use std::fmt;

use actix_web::{
    HttpResponse,
    error::ResponseError,
    http::{StatusCode, header::ContentType},
};

/// Everything that can go wrong while handling a contact submission. Each
/// variant maps to exactly one HTTP response; the `Display` text is the
/// user-safe message, underlying causes are logged where the error is raised.
#[derive(Debug, PartialEq, Eq)]
pub enum ContactError {
    /// Client exceeded the sliding-window limit; `minutes` is the whole-minute
    /// ceiling of the wait until a slot frees up.
    RateLimited { minutes: u64 },
    MissingFields,
    InvalidEmail,
    /// The email provider API key is absent from configuration. Operator
    /// problem; the caller only learns the service is unavailable.
    NotConfigured,
    /// Transport failure or non-success status from the email provider.
    DeliveryFailed,
    /// Catch-all for failures with no more specific mapping, e.g. an
    /// unparseable request body.
    Unexpected,
}

impl fmt::Display for ContactError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContactError::RateLimited { minutes } => write!(
                f,
                "Too many requests. Please try again in {} minute{}.",
                minutes,
                if *minutes == 1 { "" } else { "s" }
            ),
            ContactError::MissingFields => write!(f, "All fields are required"),
            ContactError::InvalidEmail => write!(f, "Invalid email address"),
            ContactError::NotConfigured => write!(f, "Email service is not configured"),
            ContactError::DeliveryFailed | ContactError::Unexpected => {
                write!(f, "Failed to send message. Please try again later.")
            }
        }
    }
}

impl ResponseError for ContactError {
    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code())
            .insert_header(ContentType::json())
            .json(serde_json::json!({ "error": self.to_string() }))
    }

    fn status_code(&self) -> StatusCode {
        match self {
            ContactError::RateLimited { .. } => StatusCode::TOO_MANY_REQUESTS,
            ContactError::MissingFields | ContactError::InvalidEmail => StatusCode::BAD_REQUEST,
            ContactError::NotConfigured
            | ContactError::DeliveryFailed
            | ContactError::Unexpected => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rate_limited_message_pluralizes() {
        assert_eq!(
            ContactError::RateLimited { minutes: 1 }.to_string(),
            "Too many requests. Please try again in 1 minute."
        );
        assert_eq!(
            ContactError::RateLimited { minutes: 60 }.to_string(),
            "Too many requests. Please try again in 60 minutes."
        );
    }

    #[test]
    fn status_codes_match_taxonomy() {
        assert_eq!(
            ContactError::RateLimited { minutes: 1 }.status_code(),
            StatusCode::TOO_MANY_REQUESTS
        );
        assert_eq!(
            ContactError::MissingFields.status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ContactError::InvalidEmail.status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ContactError::NotConfigured.status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            ContactError::DeliveryFailed.status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
