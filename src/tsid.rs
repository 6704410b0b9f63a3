//! The TSID value type

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};

use crate::codec;
use crate::error::{Result, TsidError};
use crate::layout;

/// A 64-bit time-sorted identifier
///
/// The raw value is always in `0..=i64::MAX`. Ordering, equality and hashing
/// follow the raw value, so identifiers from one epoch sort by creation time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Tsid(u64);

impl Tsid {
    /// Number of characters in the text form
    pub const TEXT_LEN: usize = codec::ENCODED_LEN;

    /// Build from a signed raw value, rejecting negatives
    pub fn from_i64(value: i64) -> Result<Self> {
        if value < 0 {
            return Err(TsidError::InvalidValue {
                value: value as i128,
            });
        }
        Ok(Self(value as u64))
    }

    /// Parse the 13-character text form
    pub fn from_text(text: &str) -> Result<Self> {
        let raw = codec::decode(text)?;
        Self::try_from(raw)
    }

    /// Only the generator packs values, and its layout leaves the top bit clear.
    #[inline(always)]
    pub(crate) const fn from_raw(raw: u64) -> Self {
        Self(raw & i64::MAX as u64)
    }

    #[inline(always)]
    pub const fn as_i64(&self) -> i64 {
        self.0 as i64
    }

    #[inline(always)]
    pub const fn as_u64(&self) -> u64 {
        self.0
    }

    /// Encode as 13 uppercase Crockford Base32 characters
    pub fn to_text(&self) -> String {
        codec::encode(self.0)
    }

    /// Milliseconds since the epoch the generator was configured with
    #[inline(always)]
    pub const fn timestamp_delta(&self) -> u64 {
        layout::decompose(self.0).0
    }

    #[inline(always)]
    pub const fn node(&self) -> u16 {
        layout::decompose(self.0).1
    }

    #[inline(always)]
    pub const fn sequence(&self) -> u16 {
        layout::decompose(self.0).2
    }

    /// Decompose into `(timestamp_delta, node, sequence)`
    #[inline]
    pub const fn decompose(&self) -> (u64, u16, u16) {
        layout::decompose(self.0)
    }

    /// Absolute Unix milliseconds, given the epoch the identifier was minted with
    ///
    /// `None` when the sum does not fit in a `u64`.
    pub const fn unix_millis(&self, epoch: u64) -> Option<u64> {
        self.timestamp_delta().checked_add(epoch)
    }

    /// Creation time as a UTC datetime, given the epoch it was minted with
    pub fn datetime(&self, epoch: u64) -> Option<DateTime<Utc>> {
        let millis = i64::try_from(self.unix_millis(epoch)?).ok()?;
        DateTime::<Utc>::from_timestamp_millis(millis)
    }
}

impl TryFrom<u64> for Tsid {
    type Error = TsidError;

    fn try_from(value: u64) -> Result<Self> {
        if value > i64::MAX as u64 {
            return Err(TsidError::InvalidValue {
                value: value as i128,
            });
        }
        Ok(Self(value))
    }
}

impl TryFrom<i64> for Tsid {
    type Error = TsidError;

    fn try_from(value: i64) -> Result<Self> {
        Self::from_i64(value)
    }
}

impl From<Tsid> for u64 {
    fn from(tsid: Tsid) -> Self {
        tsid.as_u64()
    }
}

impl From<Tsid> for i64 {
    fn from(tsid: Tsid) -> Self {
        tsid.as_i64()
    }
}

impl FromStr for Tsid {
    type Err = TsidError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_text(s)
    }
}

impl fmt::Display for Tsid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let buffer = codec::encode_array(self.0);
        for &b in &buffer {
            write!(f, "{}", b as char)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LITERAL: i64 = 175928847299117063;

    #[test]
    fn test_from_i64() {
        assert!(Tsid::from_i64(0).is_ok());
        assert!(Tsid::from_i64(1).is_ok());
        assert!(Tsid::from_i64(i64::MAX).is_ok());
        assert_eq!(
            Tsid::from_i64(-1),
            Err(TsidError::InvalidValue { value: -1 })
        );
        assert_eq!(
            Tsid::from_i64(i64::MIN),
            Err(TsidError::InvalidValue {
                value: i64::MIN as i128
            })
        );
    }

    #[test]
    fn test_try_from_u64_rejects_sign_bit() {
        assert_eq!(Tsid::try_from(i64::MAX as u64).unwrap().as_i64(), i64::MAX);
        assert_eq!(
            Tsid::try_from(u64::MAX),
            Err(TsidError::InvalidValue {
                value: u64::MAX as i128
            })
        );
    }

    #[test]
    fn test_literal_text() {
        let tsid = Tsid::from_i64(LITERAL).unwrap();
        assert_eq!(tsid.to_text(), "09RGCPP108007");
        assert_eq!(tsid.to_string(), "09RGCPP108007");
        assert_eq!(Tsid::from_text("09RGCPP108007").unwrap().as_i64(), LITERAL);
        assert_eq!(Tsid::from_text("09rgcpp108007").unwrap().as_i64(), LITERAL);
        assert_eq!("09RGCPP108007".parse::<Tsid>().unwrap(), tsid);
    }

    #[test]
    fn test_from_text_rejects_top_bit() {
        assert_eq!(
            Tsid::from_text("ZZZZZZZZZZZZF"),
            Err(TsidError::InvalidValue {
                value: u64::MAX as i128
            })
        );
    }

    #[test]
    fn test_equality_and_ordering_by_value() {
        let a = Tsid::from_i64(10).unwrap();
        let b = Tsid::from_i64(10).unwrap();
        let c = Tsid::from_i64(11).unwrap();
        assert_eq!(a, b);
        assert!(a < c);
        assert_eq!(i64::from(c), 11);
        assert_eq!(u64::from(c), 11);
    }

    #[test]
    fn test_components_and_datetime() {
        let epoch = 1_704_067_200_000u64; // 2024-01-01
        let tsid = Tsid::from_raw(layout::compose(86_400_000, 42, 7));
        assert_eq!(tsid.decompose(), (86_400_000, 42, 7));
        assert_eq!(tsid.node(), 42);
        assert_eq!(tsid.sequence(), 7);
        assert_eq!(tsid.unix_millis(epoch), Some(epoch + 86_400_000));

        let datetime = tsid.datetime(epoch).unwrap();
        assert_eq!(datetime.to_rfc3339(), "2024-01-02T00:00:00+00:00");
    }

    #[test]
    fn test_absolute_time_with_oversized_epoch() {
        let tsid = Tsid::from_i64(i64::MAX).unwrap();
        assert_eq!(tsid.unix_millis(u64::MAX), None);
        assert_eq!(tsid.datetime(u64::MAX), None);
        assert_eq!(tsid.datetime(i64::MAX as u64), None);
    }
}
