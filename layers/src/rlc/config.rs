//! RLC configuration resolution
//!
//! Turns decoded RLC-Config signaling into the mode specific parameter set
//! consumed by the RLC entity, and provides the fixed configurations for
//! bearers that are never signaled individually.

use std::fmt;

use common::types::RlcMode;
use num_traits::FromPrimitive;
use serde::Serialize;
use tracing::{debug, trace};

use super::params::{RlcAmConfig, RlcUmConfig};
use super::signaling::{SignaledAmConfig, SignaledRlcConfig, SignaledUmConfig};
use super::tables::{
    MAX_RETX_THRESHOLD, POLL_BYTE_KB, POLL_PDU, SN_FIELD_LENGTH, T_POLL_RETRANSMIT_MS,
    T_REORDERING_MS, T_STATUS_PROHIBIT_MS,
};
use crate::LayerError;

/// Complete configuration of one RLC entity
///
/// Only the record of the active mode exists. Reconfiguration produces a new
/// value instead of patching an existing one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "rlc_mode")]
pub enum RlcConfig {
    /// Transparent Mode, no configurable parameters
    #[default]
    Tm,
    /// Unacknowledged Mode
    Um(RlcUmConfig),
    /// Acknowledged Mode
    Am(RlcAmConfig),
}

impl RlcConfig {
    /// Resolve decoded RLC-Config signaling
    pub fn resolve(signaled: &SignaledRlcConfig) -> Result<Self, LayerError> {
        let mode = RlcMode::from_u8(signaled.mode).ok_or_else(|| {
            LayerError::ConfigurationError(format!("Unknown RLC mode value {}", signaled.mode))
        })?;

        let config = match mode {
            RlcMode::Am => RlcConfig::Am(RlcAmConfig::resolve(&signaled.am)?),
            RlcMode::Um => RlcConfig::Um(RlcUmConfig::resolve(&signaled.um)?),
            RlcMode::Tm => return Err(LayerError::UnsupportedMode(mode)),
        };

        debug!("Resolved RLC config: {}", config);
        Ok(config)
    }

    /// Fixed configuration for MCH bearers
    pub fn mch() -> Self {
        trace!("Using fixed MCH RLC config");
        RlcConfig::Um(RlcUmConfig::mrb())
    }

    /// Default SRB configuration (TS 36.331 section 9.2.1.1)
    pub fn srb_default() -> Self {
        trace!("Using default SRB RLC config");
        RlcConfig::Am(RlcAmConfig {
            t_poll_retx: 45,
            poll_pdu: None,
            poll_byte: None,
            max_retx_thresh: 4,
            t_reordering: 35,
            t_status_prohibit: 0,
        })
    }

    /// Active RLC mode
    pub fn mode(&self) -> RlcMode {
        match self {
            RlcConfig::Tm => RlcMode::Tm,
            RlcConfig::Um(_) => RlcMode::Um,
            RlcConfig::Am(_) => RlcMode::Am,
        }
    }

    /// AM parameters, if this is an AM configuration
    pub fn am(&self) -> Option<&RlcAmConfig> {
        match self {
            RlcConfig::Am(am) => Some(am),
            _ => None,
        }
    }

    /// UM parameters, if this is a UM configuration
    pub fn um(&self) -> Option<&RlcUmConfig> {
        match self {
            RlcConfig::Um(um) => Some(um),
            _ => None,
        }
    }
}

impl TryFrom<&SignaledRlcConfig> for RlcConfig {
    type Error = LayerError;

    fn try_from(signaled: &SignaledRlcConfig) -> Result<Self, Self::Error> {
        RlcConfig::resolve(signaled)
    }
}

impl RlcAmConfig {
    /// Look up the AM signaling indices
    pub fn resolve(am: &SignaledAmConfig) -> Result<Self, LayerError> {
        Ok(Self {
            t_poll_retx: T_POLL_RETRANSMIT_MS.lookup(am.t_poll_retx)?,
            poll_pdu: POLL_PDU.lookup(am.poll_pdu)?,
            // Signaled in kB
            poll_byte: POLL_BYTE_KB.lookup(am.poll_byte)?.map(|kb| kb * 1000),
            max_retx_thresh: MAX_RETX_THRESHOLD.lookup(am.max_retx_thresh)?,
            t_reordering: T_REORDERING_MS.lookup(am.t_reordering)?,
            t_status_prohibit: T_STATUS_PROHIBIT_MS.lookup(am.t_status_prohibit)?,
        })
    }
}

impl RlcUmConfig {
    /// Look up the UM signaling indices and derive window and moduli
    pub fn resolve(um: &SignaledUmConfig) -> Result<Self, LayerError> {
        let t_reordering = T_REORDERING_MS.lookup(um.t_reordering)?;
        let rx_sn_field_length = SN_FIELD_LENGTH
            .with_field("rx_sn_field_length")
            .lookup(um.rx_sn_field_length)?;
        let tx_sn_field_length = SN_FIELD_LENGTH
            .with_field("tx_sn_field_length")
            .lookup(um.tx_sn_field_length)?;

        Ok(Self::new(t_reordering, rx_sn_field_length, tx_sn_field_length))
    }
}

struct Threshold(Option<u32>);

impl fmt::Display for Threshold {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(value) => write!(f, "{}", value),
            None => f.write_str("inf"),
        }
    }
}

impl fmt::Display for RlcConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.mode())?;
        match self {
            RlcConfig::Tm => Ok(()),
            RlcConfig::Am(am) => write!(
                f,
                ": t_poll_retx={}ms, poll_pdu={}, poll_byte={}, max_retx_thresh={}, t_reordering={}ms, t_status_prohibit={}ms",
                am.t_poll_retx,
                Threshold(am.poll_pdu),
                Threshold(am.poll_byte),
                am.max_retx_thresh,
                am.t_reordering,
                am.t_status_prohibit,
            ),
            RlcConfig::Um(um) => write!(
                f,
                ": t_reordering={}ms, rx_sn={}, tx_sn={}, rx_window_size={}, rx_mod={}, tx_mod={}, is_mrb={}",
                um.t_reordering(),
                um.rx_sn_field_length(),
                um.tx_sn_field_length(),
                um.rx_window_size(),
                um.rx_mod(),
                um.tx_mod(),
                um.is_mrb(),
            ),
        }
    }
}
