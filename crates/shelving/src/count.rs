use serde::{Deserialize, Serialize};

use spicerack_core::{DomainError, DomainResult, ValueObject, ALPHABET_LEN};

/// Upper bound on shelves: each shelf needs at least one letter of its own.
pub const MAX_SHELVES: usize = ALPHABET_LEN;

/// Number of shelves to distribute over, always within `1..=MAX_SHELVES`.
///
/// Out-of-range requests are clamped rather than rejected: there is always at
/// least one shelf to show.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "i64", into = "i64")]
pub struct ShelfCount(usize);

impl ShelfCount {
    pub const MIN: ShelfCount = ShelfCount(1);
    pub const MAX: ShelfCount = ShelfCount(MAX_SHELVES);

    /// Clamp any integer into range (`0` and negatives become `1`).
    pub fn clamped(requested: i64) -> Self {
        let n = requested.clamp(1, MAX_SHELVES as i64);
        Self(n as usize)
    }

    /// Like `clamped`, but reports out-of-range input instead of fixing it.
    pub fn strict(requested: i64) -> DomainResult<Self> {
        if (1..=MAX_SHELVES as i64).contains(&requested) {
            Ok(Self(requested as usize))
        } else {
            Err(DomainError::configuration(format!(
                "shelf count must be between 1 and {MAX_SHELVES}, got {requested}"
            )))
        }
    }

    pub fn get(self) -> usize {
        self.0
    }
}

impl Default for ShelfCount {
    fn default() -> Self {
        Self::MIN
    }
}

impl ValueObject for ShelfCount {}

impl From<i64> for ShelfCount {
    fn from(value: i64) -> Self {
        Self::clamped(value)
    }
}

impl From<ShelfCount> for i64 {
    fn from(value: ShelfCount) -> Self {
        value.0 as i64
    }
}

impl core::fmt::Display for ShelfCount {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_and_negative_become_one() {
        assert_eq!(ShelfCount::clamped(0).get(), 1);
        assert_eq!(ShelfCount::clamped(-7).get(), 1);
        assert_eq!(ShelfCount::clamped(i64::MIN).get(), 1);
    }

    #[test]
    fn large_values_are_capped() {
        assert_eq!(ShelfCount::clamped(27).get(), MAX_SHELVES);
        assert_eq!(ShelfCount::clamped(i64::MAX).get(), MAX_SHELVES);
        assert_eq!(ShelfCount::clamped(5).get(), 5);
    }

    #[test]
    fn strict_reports_out_of_range() {
        assert!(matches!(ShelfCount::strict(0), Err(DomainError::Configuration(_))));
        assert!(matches!(ShelfCount::strict(27), Err(DomainError::Configuration(_))));
        assert_eq!(ShelfCount::strict(3).unwrap().get(), 3);
    }

    #[test]
    fn deserializing_clamps() {
        let count: ShelfCount = serde_json::from_str("-2").unwrap();
        assert_eq!(count, ShelfCount::MIN);
        assert_eq!(serde_json::to_string(&ShelfCount::clamped(4)).unwrap(), "4");
    }
}
