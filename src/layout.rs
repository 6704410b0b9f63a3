//! Bit layout of a TSID
//!
//! `0 | timestamp delta (41) | node (10) | sequence (12)`, most significant bit first.

pub const TIMESTAMP_BITS: u8 = 41;
pub const NODE_BITS: u8 = 10;
pub const SEQUENCE_BITS: u8 = 12;

pub const NODE_SHIFT: u8 = SEQUENCE_BITS;
pub const TIMESTAMP_SHIFT: u8 = NODE_BITS + SEQUENCE_BITS;

pub const MAX_TIMESTAMP: u64 = (1 << TIMESTAMP_BITS) - 1;
pub const MAX_NODE: u16 = (1 << NODE_BITS) - 1;
pub const MAX_SEQUENCE: u16 = (1 << SEQUENCE_BITS) - 1;

/// Pack the three fields into a raw value. Each field is masked to its width.
#[inline(always)]
pub const fn compose(timestamp_delta: u64, node: u16, sequence: u16) -> u64 {
    ((timestamp_delta & MAX_TIMESTAMP) << TIMESTAMP_SHIFT)
        | (((node & MAX_NODE) as u64) << NODE_SHIFT)
        | ((sequence & MAX_SEQUENCE) as u64)
}

/// Split a raw value into `(timestamp_delta, node, sequence)`
#[inline]
pub const fn decompose(raw: u64) -> (u64, u16, u16) {
    (
        (raw >> TIMESTAMP_SHIFT) & MAX_TIMESTAMP,
        ((raw >> NODE_SHIFT) & MAX_NODE as u64) as u16,
        (raw & MAX_SEQUENCE as u64) as u16,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_fills_63_bits() {
        assert_eq!(TIMESTAMP_BITS + NODE_BITS + SEQUENCE_BITS, 63);
        assert_eq!(MAX_NODE, 1023);
        assert_eq!(MAX_SEQUENCE, 4095);
        assert_eq!(MAX_TIMESTAMP, 2_199_023_255_551);
    }

    #[test]
    fn test_component_boundaries() {
        let raw = compose(MAX_TIMESTAMP, MAX_NODE, MAX_SEQUENCE);
        assert_eq!(raw, i64::MAX as u64);
        assert_eq!(decompose(raw), (MAX_TIMESTAMP, MAX_NODE, MAX_SEQUENCE));
    }

    #[test]
    fn test_decompose() {
        let raw = compose(0x1234567, 42, 123);
        assert_eq!(decompose(raw), (0x1234567, 42, 123));
        assert_eq!(raw, (0x1234567 << 22) | (42 << 12) | 123);
    }
}
