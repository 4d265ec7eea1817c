//! RRC signaling value tables for RLC configuration
//!
//! Maps the enumerated values carried in RLC-Config (3GPP TS 36.331) onto
//! physical units. `None` entries stand for the `infinity` code points.

use common::types::SnFieldLength;

use crate::LayerError;

/// Immutable lookup table from a signaled index to a physical value
#[derive(Debug, Clone, Copy)]
pub struct ConfigTable<T: Copy + 'static> {
    field: &'static str,
    values: &'static [T],
}

impl<T: Copy + 'static> ConfigTable<T> {
    /// Create a table for the named signaling field
    pub const fn new(field: &'static str, values: &'static [T]) -> Self {
        Self { field, values }
    }

    /// Resolve a signaled index
    ///
    /// Indices past the end of the table are rejected with
    /// [`LayerError::InvalidConfigIndex`].
    pub fn lookup(&self, index: u8) -> Result<T, LayerError> {
        self.values
            .get(usize::from(index))
            .copied()
            .ok_or(LayerError::InvalidConfigIndex {
                field: self.field,
                index,
                len: self.values.len(),
            })
    }

    /// Same table reported under another field name
    pub fn with_field(self, field: &'static str) -> Self {
        Self { field, values: self.values }
    }

    /// Signaling field name
    pub fn field(&self) -> &'static str {
        self.field
    }

    /// Number of valid indices
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Raw table contents in index order
    pub fn values(&self) -> &'static [T] {
        self.values
    }
}

/// t-PollRetransmit in ms
pub const T_POLL_RETRANSMIT_MS: ConfigTable<u32> = ConfigTable::new(
    "t_poll_retx",
    &[
        5, 10, 15, 20, 25, 30, 35, 40, 45, 50,
        55, 60, 65, 70, 75, 80, 85, 90, 95, 100,
        105, 110, 115, 120, 125, 130, 135, 140, 145, 150,
        155, 160, 165, 170, 175, 180, 185, 190, 195, 200,
        205, 210, 215, 220, 225, 230, 235, 240, 245, 250,
        300, 350, 400, 450, 500,
    ],
);

/// pollPDU in PDUs
pub const POLL_PDU: ConfigTable<Option<u32>> = ConfigTable::new(
    "poll_pdu",
    &[
        Some(4), Some(8), Some(16), Some(32),
        Some(64), Some(128), Some(256), None,
    ],
);

/// pollByte in kB
pub const POLL_BYTE_KB: ConfigTable<Option<u32>> = ConfigTable::new(
    "poll_byte",
    &[
        Some(25), Some(50), Some(75), Some(100), Some(125),
        Some(250), Some(375), Some(500), Some(750), Some(1000),
        Some(1250), Some(1500), Some(2000), Some(3000), None,
    ],
);

/// maxRetxThreshold in transmissions
pub const MAX_RETX_THRESHOLD: ConfigTable<u32> = ConfigTable::new(
    "max_retx_thresh",
    &[1, 2, 3, 4, 6, 8, 16, 32],
);

/// t-Reordering in ms
pub const T_REORDERING_MS: ConfigTable<u32> = ConfigTable::new(
    "t_reordering",
    &[
        0, 5, 10, 15, 20, 25, 30, 35, 40, 45,
        50, 55, 60, 65, 70, 75, 80, 85, 90, 95,
        100, 110, 120, 130, 140, 150, 160, 170, 180, 190,
        200,
    ],
);

/// t-StatusProhibit in ms
pub const T_STATUS_PROHIBIT_MS: ConfigTable<u32> = ConfigTable::new(
    "t_status_prohibit",
    &[
        0, 5, 10, 15, 20, 25, 30, 35, 40, 45,
        50, 55, 60, 65, 70, 75, 80, 85, 90, 95,
        100, 105, 110, 115, 120, 125, 130, 135, 140, 145,
        150, 155, 160, 165, 170, 175, 180, 185, 190, 195,
        200, 205, 210, 215, 220, 225, 230, 235, 240, 245,
        250, 300, 350, 400, 450, 500,
    ],
);

/// SN-FieldLength, indexed by its raw enumeration value
pub const SN_FIELD_LENGTH: ConfigTable<SnFieldLength> = ConfigTable::new(
    "sn_field_length",
    &[SnFieldLength::Size5, SnFieldLength::Size10],
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_sizes() {
        assert_eq!(T_POLL_RETRANSMIT_MS.len(), 55);
        assert_eq!(POLL_PDU.len(), 8);
        assert_eq!(POLL_BYTE_KB.len(), 15);
        assert_eq!(MAX_RETX_THRESHOLD.len(), 8);
        assert_eq!(T_REORDERING_MS.len(), 31);
        assert_eq!(T_STATUS_PROHIBIT_MS.len(), 56);
    }

    #[test]
    fn test_lookup_boundaries() {
        assert_eq!(T_POLL_RETRANSMIT_MS.lookup(0), Ok(5));
        assert_eq!(T_POLL_RETRANSMIT_MS.lookup(54), Ok(500));
        assert_eq!(POLL_PDU.lookup(0), Ok(Some(4)));
        assert_eq!(POLL_PDU.lookup(7), Ok(None));
        assert_eq!(POLL_BYTE_KB.lookup(13), Ok(Some(3000)));
        assert_eq!(MAX_RETX_THRESHOLD.lookup(7), Ok(32));
        assert_eq!(T_REORDERING_MS.lookup(20), Ok(100));
        assert_eq!(T_REORDERING_MS.lookup(30), Ok(200));
        assert_eq!(T_STATUS_PROHIBIT_MS.lookup(55), Ok(500));
    }

    #[test]
    fn test_lookup_one_past_end() {
        let err = T_STATUS_PROHIBIT_MS.lookup(56).unwrap_err();
        assert_eq!(
            err,
            LayerError::InvalidConfigIndex {
                field: "t_status_prohibit",
                index: 56,
                len: 56,
            }
        );
        assert!(POLL_BYTE_KB.lookup(u8::MAX).is_err());
    }

    #[test]
    fn test_sn_field_length_table() {
        assert_eq!(SN_FIELD_LENGTH.lookup(0), Ok(SnFieldLength::Size5));
        assert_eq!(SN_FIELD_LENGTH.lookup(1), Ok(SnFieldLength::Size10));

        let rx = SN_FIELD_LENGTH.with_field("rx_sn_field_length");
        assert_eq!(
            rx.lookup(2),
            Err(LayerError::InvalidConfigIndex {
                field: "rx_sn_field_length",
                index: 2,
                len: 2,
            })
        );
    }

    #[test]
    fn test_timer_tables_are_increasing() {
        for table in [T_POLL_RETRANSMIT_MS, MAX_RETX_THRESHOLD, T_REORDERING_MS, T_STATUS_PROHIBIT_MS] {
            assert!(
                table.values().windows(2).all(|w| w[0] < w[1]),
                "{} is not strictly increasing",
                table.field()
            );
        }
    }
}
