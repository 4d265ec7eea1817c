//! Decoded RLC-Config signaling
//!
//! Plain index holders filled in by the RRC decoder. Only the record selected
//! by `mode` is consulted during resolution.

use common::types::RlcMode;
use serde::{Deserialize, Serialize};

/// AM fields of RLC-Config (ul-AM-RLC and dl-AM-RLC)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SignaledAmConfig {
    /// t-PollRetransmit index
    pub t_poll_retx: u8,
    /// pollPDU index
    pub poll_pdu: u8,
    /// pollByte index
    pub poll_byte: u8,
    /// maxRetxThreshold index
    pub max_retx_thresh: u8,
    /// t-Reordering index
    pub t_reordering: u8,
    /// t-StatusProhibit index
    pub t_status_prohibit: u8,
}

/// UM bi-directional fields of RLC-Config
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SignaledUmConfig {
    /// t-Reordering index (dl-UM-RLC)
    pub t_reordering: u8,
    /// SN-FieldLength of dl-UM-RLC, raw enumeration value
    pub rx_sn_field_length: u8,
    /// SN-FieldLength of ul-UM-RLC, raw enumeration value
    pub tx_sn_field_length: u8,
}

/// RLC-Config as handed over by the RRC decoder
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignaledRlcConfig {
    /// Raw RLC mode value (0 = TM, 1 = UM, 2 = AM)
    pub mode: u8,
    #[serde(default)]
    pub am: SignaledAmConfig,
    #[serde(default)]
    pub um: SignaledUmConfig,
}

impl SignaledRlcConfig {
    /// Signaling selecting Acknowledged Mode
    pub fn am(am: SignaledAmConfig) -> Self {
        Self {
            mode: RlcMode::Am as u8,
            am,
            um: SignaledUmConfig::default(),
        }
    }

    /// Signaling selecting Unacknowledged Mode
    pub fn um(um: SignaledUmConfig) -> Self {
        Self {
            mode: RlcMode::Um as u8,
            am: SignaledAmConfig::default(),
            um,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_constructors() {
        assert_eq!(SignaledRlcConfig::am(SignaledAmConfig::default()).mode, 2);
        assert_eq!(SignaledRlcConfig::um(SignaledUmConfig::default()).mode, 1);
    }

    #[test]
    fn test_parse_yaml_fixture() {
        let yaml = r#"
mode: 2
am:
  t_poll_retx: 8
  poll_pdu: 7
  poll_byte: 14
  max_retx_thresh: 3
  t_reordering: 7
  t_status_prohibit: 0
"#;
        let signaled: SignaledRlcConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(signaled.mode, 2);
        assert_eq!(signaled.am.t_poll_retx, 8);
        assert_eq!(signaled.am.poll_byte, 14);
        assert_eq!(signaled.um, SignaledUmConfig::default());
    }

    #[test]
    fn test_parse_yaml_partial_record() {
        let yaml = r#"
mode: 1
um:
  tx_sn_field_length: 1
"#;
        let signaled: SignaledRlcConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(signaled.um.t_reordering, 0);
        assert_eq!(signaled.um.rx_sn_field_length, 0);
        assert_eq!(signaled.um.tx_sn_field_length, 1);
    }
}
