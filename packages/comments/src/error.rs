//! Error type shared by every panel operation.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum PanelError {
    #[error("Invalid comment quantity: {0:?}")]
    InvalidQuantity(String),

    #[error("Request to {endpoint} failed: {message}")]
    Request { endpoint: String, message: String },

    #[error("{endpoint} answered with status {status}")]
    Status { endpoint: String, status: u16 },

    #[error("Malformed response from {endpoint}: {message}")]
    Decode { endpoint: String, message: String },

    #[error("Invalid panel configuration: {0}")]
    Config(String),
}

impl PanelError {
    pub fn request(endpoint: &str, err: impl std::fmt::Display) -> Self {
        Self::Request {
            endpoint: endpoint.to_string(),
            message: err.to_string(),
        }
    }

    pub fn decode(endpoint: &str, err: impl std::fmt::Display) -> Self {
        Self::Decode {
            endpoint: endpoint.to_string(),
            message: err.to_string(),
        }
    }
}
