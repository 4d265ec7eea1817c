//! Protocol Stack Layers Library
//!
//! This crate implements the LTE RLC configuration layer according to
//! 3GPP TS 36.322 and TS 36.331.

pub mod rlc;

use common::types::RlcMode;
use thiserror::Error;

/// Common errors for protocol layers
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LayerError {
    #[error("Invalid {field} index {index}: expected less than {len}")]
    InvalidConfigIndex {
        field: &'static str,
        index: u8,
        len: usize,
    },

    #[error("Unsupported RLC mode: {0}")]
    UnsupportedMode(RlcMode),

    #[error("Configuration error: {0}")]
    ConfigurationError(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = LayerError::InvalidConfigIndex {
            field: "poll_pdu",
            index: 8,
            len: 8,
        };
        assert_eq!(err.to_string(), "Invalid poll_pdu index 8: expected less than 8");
        assert_eq!(
            LayerError::UnsupportedMode(RlcMode::Tm).to_string(),
            "Unsupported RLC mode: Transparent Mode"
        );
    }
}
