use thiserror::Error;

use crate::domain::errors::DomainError;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Unexpected status {status}: {body}")]
    UnexpectedStatus { status: u16, body: String },

    #[error("Could not decode response: {0}")]
    Decode(String),

    #[error("Could not encode order: {0}")]
    Encode(String),
}

impl From<reqwest::Error> for ClientError {
    fn from(e: reqwest::Error) -> Self {
        ClientError::Transport(e.to_string())
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(e: serde_json::Error) -> Self {
        ClientError::Decode(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domain_error_is_transparent() {
        let err: ClientError = DomainError::DiscountNotSet.into();
        assert!(matches!(err, ClientError::Domain(DomainError::DiscountNotSet)));
        assert_eq!(err.to_string(), "Discount has not been set");
    }

    #[test]
    fn invalid_order_id_display() {
        let err: ClientError = DomainError::InvalidOrderId("a/b".to_string()).into();
        assert_eq!(err.to_string(), "Invalid order id: \"a/b\"");
    }

    #[test]
    fn unexpected_status_display() {
        let err = ClientError::UnexpectedStatus {
            status: 422,
            body: "{}".to_string(),
        };
        assert_eq!(err.to_string(), "Unexpected status 422: {}");
    }

    #[test]
    fn json_error_maps_to_decode() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: ClientError = json_err.into();
        assert!(matches!(err, ClientError::Decode(_)));
    }

    #[test]
    fn encode_error_display() {
        assert_eq!(
            ClientError::Encode("key must be a string".to_string()).to_string(),
            "Could not encode order: key must be a string"
        );
    }

    #[test]
    fn config_error_display() {
        assert_eq!(
            ClientError::Config("bad".to_string()).to_string(),
            "Configuration error: bad"
        );
    }
}
