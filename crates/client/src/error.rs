use nexus_native_utils::AudioError;

/// Any failure to get a `result` out of the backend. Callers treat every
/// variant the same way; `status()` is there for logging.
#[derive(Debug, thiserror::Error)]
pub enum RpcError {
    #[error("API error: {0}")]
    Status(u16),
    #[error("API transport error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("API returned malformed JSON: {source}")]
    Json {
        status: Option<u16>,
        #[source]
        source: serde_json::Error,
    },
}

impl From<serde_json::Error> for RpcError {
    fn from(source: serde_json::Error) -> Self {
        RpcError::Json {
            status: None,
            source,
        }
    }
}

impl RpcError {
    /// The HTTP status of a non-2xx response, or of a 2xx response whose body
    /// failed to decode. `None` for connection failures and result-type mismatches.
    pub fn status(&self) -> Option<u16> {
        match self {
            RpcError::Status(status) => Some(*status),
            RpcError::Transport(e) => e.status().map(|s| s.as_u16()),
            RpcError::Json { status, .. } => *status,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SpeechError {
    #[error(transparent)]
    Rpc(#[from] RpcError),
    #[error("unplayable speech audio: {0}")]
    Audio(#[from] AudioError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_display() {
        let err = RpcError::Status(503);
        assert_eq!(err.to_string(), "API error: 503");
        assert_eq!(err.status(), Some(503));
    }

    #[test]
    fn test_malformed_body_keeps_status() {
        let source = serde_json::from_str::<serde_json::Value>("<html>").unwrap_err();
        let err = RpcError::Json {
            status: Some(200),
            source,
        };
        assert_eq!(err.status(), Some(200));
        assert!(err.to_string().starts_with("API returned malformed JSON: "));
    }

    #[test]
    fn test_result_decode_error_has_no_status() {
        let err: RpcError = serde_json::from_str::<serde_json::Value>("{oops")
            .unwrap_err()
            .into();
        assert_eq!(err.status(), None);
    }
}
