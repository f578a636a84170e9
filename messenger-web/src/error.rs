use reqwest::StatusCode;
use thiserror::Error;

/// Failure talking to the Messenger API.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("server answered {0}")]
    Status(StatusCode),

    #[error("malformed response body: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ClientError {
    /// HTTP status behind the failure, when the server answered at all.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Transport(err) => err.status(),
            Self::Status(status) => Some(*status),
            Self::Decode(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_is_exposed() {
        let error = ClientError::Status(StatusCode::CONFLICT);
        assert_eq!(error.status(), Some(StatusCode::CONFLICT));
        assert_eq!(error.to_string(), "server answered 409 Conflict");
    }

    #[test]
    fn test_decode_errors_have_no_status() {
        let error: ClientError = serde_json::from_str::<u32>("nope").unwrap_err().into();
        assert_eq!(error.status(), None);
        assert!(error.to_string().starts_with("malformed response body"));
    }
}
