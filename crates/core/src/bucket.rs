//! Alphabet buckets: the 26 letter keys spice jars are grouped by, and the
//! per-letter jar counts derived from an inventory.

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::value_object::ValueObject;

/// Number of buckets (`A..=Z`).
pub const ALPHABET_LEN: usize = 26;

/// One of the 26 uppercase ASCII letters.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Letter(u8);

impl Letter {
    pub const A: Letter = Letter(0);
    pub const Z: Letter = Letter(ALPHABET_LEN as u8 - 1);

    /// Letter at `index` in the alphabet (`0 => A`).
    pub fn from_index(index: usize) -> Option<Self> {
        (index < ALPHABET_LEN).then(|| Self(index as u8))
    }

    /// Case-insensitive conversion from an ASCII letter.
    pub fn from_char(c: char) -> Option<Self> {
        c.is_ascii_alphabetic()
            .then(|| Self(c.to_ascii_uppercase() as u8 - b'A'))
    }

    /// Bucket key for a spice name.
    ///
    /// The first character decides when it is an ASCII letter. Otherwise the
    /// first ASCII letter anywhere in the name is used ("7 Spice" shelves
    /// under `S`). Names without any ASCII letter have no bucket.
    pub fn bucket_of(name: &str) -> Option<Self> {
        let first = name.trim_start().chars().next()?;
        Self::from_char(first).or_else(|| name.chars().find_map(Self::from_char))
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }

    pub fn as_char(self) -> char {
        (b'A' + self.0) as char
    }

    /// The following letter, `None` after `Z`.
    pub fn succ(self) -> Option<Self> {
        Self::from_index(self.index() + 1)
    }

    /// The preceding letter, `None` before `A`.
    pub fn pred(self) -> Option<Self> {
        self.index().checked_sub(1).and_then(Self::from_index)
    }

    /// `A..=Z` in order.
    pub fn all() -> impl DoubleEndedIterator<Item = Letter> + ExactSizeIterator + Clone {
        (0..ALPHABET_LEN as u8).map(Letter)
    }
}

impl ValueObject for Letter {}

impl core::fmt::Debug for Letter {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "Letter({})", self.as_char())
    }
}

impl core::fmt::Display for Letter {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

impl Serialize for Letter {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_char(self.as_char())
    }
}

impl<'de> Deserialize<'de> for Letter {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let c = char::deserialize(deserializer)?;
        Letter::from_char(c)
            .ok_or_else(|| serde::de::Error::custom(format!("'{c}' is not an ASCII letter")))
    }
}

/// Jar count per letter, always covering all 26 letters (zero-filled).
///
/// Never stored alongside the entries it is derived from: it is recomputed
/// from the entry list whenever it is needed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(into = "BTreeMap<String, u32>", try_from = "BTreeMap<String, u32>")]
pub struct BucketCounts([u32; ALPHABET_LEN]);

impl BucketCounts {
    pub fn zeroed() -> Self {
        Self::default()
    }

    /// Build from explicit `(letter, count)` pairs; repeated letters accumulate.
    pub fn from_pairs(pairs: impl IntoIterator<Item = (Letter, u32)>) -> Self {
        let mut counts = Self::zeroed();
        for (letter, n) in pairs {
            let slot = &mut counts.0[letter.index()];
            *slot = slot.saturating_add(n);
        }
        counts
    }

    /// Build from a raw per-letter array (`[0] => A`).
    pub fn from_array(counts: [u32; ALPHABET_LEN]) -> Self {
        Self(counts)
    }

    pub fn get(&self, letter: Letter) -> u32 {
        self.0[letter.index()]
    }

    pub fn total(&self) -> u64 {
        self.0.iter().map(|&n| u64::from(n)).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.0.iter().all(|&n| n == 0)
    }

    /// Sum over an inclusive letter span.
    pub fn sum_over(&self, letters: impl IntoIterator<Item = Letter>) -> u64 {
        letters.into_iter().map(|l| u64::from(self.get(l))).sum()
    }

    /// All 26 `(letter, count)` pairs in alphabetical order.
    pub fn iter(&self) -> impl Iterator<Item = (Letter, u32)> + '_ {
        Letter::all().map(move |l| (l, self.get(l)))
    }

    /// Only the letters with a non-zero count, in alphabetical order.
    pub fn populated(&self) -> impl Iterator<Item = (Letter, u32)> + '_ {
        self.iter().filter(|&(_, n)| n > 0)
    }

    pub fn as_array(&self) -> &[u32; ALPHABET_LEN] {
        &self.0
    }
}

impl ValueObject for BucketCounts {}

impl FromIterator<Letter> for BucketCounts {
    fn from_iter<I: IntoIterator<Item = Letter>>(iter: I) -> Self {
        Self::from_pairs(iter.into_iter().map(|l| (l, 1)))
    }
}

impl From<BucketCounts> for BTreeMap<String, u32> {
    fn from(value: BucketCounts) -> Self {
        value.iter().map(|(l, n)| (l.to_string(), n)).collect()
    }
}

impl TryFrom<BTreeMap<String, u32>> for BucketCounts {
    type Error = String;

    fn try_from(map: BTreeMap<String, u32>) -> Result<Self, Self::Error> {
        let mut counts = Self::zeroed();
        for (key, n) in map {
            let mut chars = key.chars();
            let letter = match (chars.next(), chars.next()) {
                (Some(c), None) => Letter::from_char(c),
                _ => None,
            }
            .ok_or_else(|| format!("invalid bucket key: {key:?}"))?;
            counts.0[letter.index()] = n;
        }
        Ok(counts)
    }
}
