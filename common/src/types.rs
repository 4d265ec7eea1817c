//! Common Types for the RLC Protocol Stack
//!
//! Defines the enumerations shared between RRC signaling handling and the
//! RLC entity (3GPP TS 36.322)

use std::fmt;

use serde::{Deserialize, Serialize};
use num_derive::{FromPrimitive, ToPrimitive};

/// RLC operating modes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, FromPrimitive, ToPrimitive, Serialize, Deserialize)]
pub enum RlcMode {
    /// Transparent Mode
    Tm = 0,
    /// Unacknowledged Mode
    Um = 1,
    /// Acknowledged Mode
    Am = 2,
}

impl RlcMode {
    /// Human readable name used in logs and diagnostics
    pub fn label(&self) -> &'static str {
        match self {
            RlcMode::Tm => "Transparent Mode",
            RlcMode::Um => "Unacknowledged Mode",
            RlcMode::Am => "Acknowledged Mode",
        }
    }
}

impl fmt::Display for RlcMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// UMD PDU sequence number field length
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, FromPrimitive, ToPrimitive, Serialize, Deserialize)]
pub enum SnFieldLength {
    /// 5 bit SN
    Size5 = 0,
    /// 10 bit SN
    Size10 = 1,
}

impl SnFieldLength {
    /// Width of the SN field in bits
    pub fn bits(&self) -> u16 {
        match self {
            SnFieldLength::Size5 => 5,
            SnFieldLength::Size10 => 10,
        }
    }

    /// SN counter modulus (2^bits)
    pub fn modulus(&self) -> u32 {
        1 << self.bits()
    }

    /// UM receive window size (half the modulus)
    pub fn window_size(&self) -> u32 {
        self.modulus() / 2
    }

    /// Human readable name used in logs and diagnostics
    pub fn label(&self) -> &'static str {
        match self {
            SnFieldLength::Size5 => "5 bits",
            SnFieldLength::Size10 => "10 bits",
        }
    }
}

impl fmt::Display for SnFieldLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
