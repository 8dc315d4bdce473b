//! Uniform `{info}` / `{error}` response wrappers

use serde::Serialize;

/// Success envelope: `{"info": "..."}`
#[derive(Debug, Serialize)]
pub struct InfoResponse {
    #[serde(rename = "info")]
    pub message: String,
}

impl InfoResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Error envelope: `{"error": "..."}`
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    #[serde(rename = "error")]
    pub message: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn envelope_keys() {
        let info = serde_json::to_string(&InfoResponse::new("done")).unwrap();
        assert_eq!(info, r#"{"info":"done"}"#);

        let error = serde_json::to_string(&ErrorResponse::new("nope")).unwrap();
        assert_eq!(error, r#"{"error":"nope"}"#);
    }
}
