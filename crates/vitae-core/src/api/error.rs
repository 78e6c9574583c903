use thiserror::Error;

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Server error: {0}")]
    ServerError(String),

    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    #[error("Response was not valid JSON: {0}")]
    InvalidJson(#[source] serde_json::Error),

    #[error("Unexpected response: {0}")]
    InvalidResponse(String),
}

/// Maximum length for error response bodies in error messages
const MAX_ERROR_BODY_LENGTH: usize = 500;

impl FetchError {
    /// Truncate a response body to avoid logging excessive data. Bodies are
    /// arbitrary remote content, so the cut must land on a char boundary.
    fn truncate_body(body: &str) -> String {
        if body.len() <= MAX_ERROR_BODY_LENGTH {
            body.to_string()
        } else {
            let mut cut = MAX_ERROR_BODY_LENGTH;
            while !body.is_char_boundary(cut) {
                cut -= 1;
            }
            format!(
                "{}... (truncated, {} total bytes)",
                &body[..cut],
                body.len()
            )
        }
    }

    pub fn from_status(status: reqwest::StatusCode, body: &str) -> Self {
        let truncated = Self::truncate_body(body);
        match status.as_u16() {
            404 => FetchError::NotFound(truncated),
            500..=599 => FetchError::ServerError(truncated),
            _ => FetchError::InvalidResponse(format!("Status {}: {}", status, truncated)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_status_classification() {
        assert!(matches!(
            FetchError::from_status(reqwest::StatusCode::NOT_FOUND, ""),
            FetchError::NotFound(_)
        ));
        assert!(matches!(
            FetchError::from_status(reqwest::StatusCode::BAD_GATEWAY, ""),
            FetchError::ServerError(_)
        ));
        assert!(matches!(
            FetchError::from_status(reqwest::StatusCode::FORBIDDEN, ""),
            FetchError::InvalidResponse(_)
        ));
    }

    #[test]
    fn test_multibyte_bodies_truncate_on_char_boundaries() {
        // 200 euro signs: 600 bytes, and byte 500 falls mid-character.
        let body = "\u{20ac}".repeat(200);
        let err = FetchError::from_status(reqwest::StatusCode::INTERNAL_SERVER_ERROR, &body);
        let message = err.to_string();
        assert!(message.contains("truncated, 600 total bytes"));
        // 498 is the nearest boundary below 500 for a 3-byte char.
        assert_eq!(message.matches('\u{20ac}').count(), 166);
    }

    #[test]
    fn test_long_bodies_are_truncated() {
        let body = "x".repeat(2000);
        let err = FetchError::from_status(reqwest::StatusCode::INTERNAL_SERVER_ERROR, &body);
        let message = err.to_string();
        assert!(message.contains("truncated, 2000 total bytes"));
        assert!(message.len() < body.len());
    }
}
