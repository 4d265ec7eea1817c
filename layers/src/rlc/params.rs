//! Mode specific RLC parameters
//!
//! Configurable parameters of 3GPP TS 36.322 section 7, already converted
//! to physical units.

use common::types::SnFieldLength;
use serde::Serialize;

/// Acknowledged Mode parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct RlcAmConfig {
    /// Poll retransmission timeout in ms
    pub t_poll_retx: u32,
    /// Set the poll bit after this many PDUs, `None` for infinity
    pub poll_pdu: Option<u32>,
    /// Set the poll bit after this many bytes, `None` for infinity
    pub poll_byte: Option<u32>,
    /// Maximum number of retransmissions
    pub max_retx_thresh: u32,
    /// Timer used by rx to detect PDU loss in ms
    pub t_reordering: u32,
    /// Timer used by rx to prohibit tx of status PDUs in ms
    pub t_status_prohibit: u32,
}

/// Unacknowledged Mode parameters
///
/// Window size and counter moduli always follow the SN field lengths, apart
/// from the MRB profile where reordering is disabled altogether.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct RlcUmConfig {
    t_reordering: u32,
    tx_sn_field_length: SnFieldLength,
    rx_sn_field_length: SnFieldLength,
    rx_window_size: u32,
    rx_mod: u32,
    tx_mod: u32,
    is_mrb: bool,
}

impl RlcUmConfig {
    /// Build a unicast UM configuration, deriving window and moduli
    pub fn new(t_reordering: u32, rx_sn_field_length: SnFieldLength, tx_sn_field_length: SnFieldLength) -> Self {
        Self {
            t_reordering,
            tx_sn_field_length,
            rx_sn_field_length,
            rx_window_size: rx_sn_field_length.window_size(),
            rx_mod: rx_sn_field_length.modulus(),
            tx_mod: tx_sn_field_length.modulus(),
            is_mrb: false,
        }
    }

    /// Fixed profile for multicast bearers (no reordering, modulus 1)
    pub fn mrb() -> Self {
        Self {
            t_reordering: 0,
            tx_sn_field_length: SnFieldLength::Size5,
            rx_sn_field_length: SnFieldLength::Size5,
            rx_window_size: 0,
            rx_mod: 1,
            tx_mod: 1,
            is_mrb: true,
        }
    }

    /// Reordering timer in ms
    pub fn t_reordering(&self) -> u32 {
        self.t_reordering
    }

    /// SN field length used for transmission (UL)
    pub fn tx_sn_field_length(&self) -> SnFieldLength {
        self.tx_sn_field_length
    }

    /// SN field length used for reception (DL)
    pub fn rx_sn_field_length(&self) -> SnFieldLength {
        self.rx_sn_field_length
    }

    pub fn rx_window_size(&self) -> u32 {
        self.rx_window_size
    }

    /// Rx counter modulus
    pub fn rx_mod(&self) -> u32 {
        self.rx_mod
    }

    /// Tx counter modulus
    pub fn tx_mod(&self) -> u32 {
        self.tx_mod
    }

    /// Whether this is a multicast bearer
    pub fn is_mrb(&self) -> bool {
        self.is_mrb
    }
}
