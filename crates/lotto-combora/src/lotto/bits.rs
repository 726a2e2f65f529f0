use super::def::{LottoError, MAX_NUMBER, MIN_NUMBER, check_range};

/// All 49 numbers set
const FULL_BITS: u64 = (1u64 << MAX_NUMBER) - 1;

/// Set of lottery numbers stored as one-hot bits.
/// Number `n` lives at bit `n - 1`, so iteration is always ascending.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub struct NumberSet {
    bits: u64,
}

fn bit(number: u8) -> u64 {
    1u64 << (number - MIN_NUMBER)
}

impl NumberSet {
    pub const fn new() -> Self {
        Self { bits: 0 }
    }

    /// The whole pool 1-49
    pub const fn full() -> Self {
        Self { bits: FULL_BITS }
    }

    pub fn from_numbers(numbers: impl IntoIterator<Item = u8>) -> Result<Self, LottoError> {
        let mut set = Self::new();
        for number in numbers {
            set.insert(number)?;
        }
        Ok(set)
    }

    /// Returns `true` if the number was not present before
    pub fn insert(&mut self, number: u8) -> Result<bool, LottoError> {
        let mask = bit(check_range(number)?);
        let added = self.bits & mask == 0;
        self.bits |= mask;
        Ok(added)
    }

    /// Returns `true` if the number was present
    pub fn remove(&mut self, number: u8) -> bool {
        if !self.contains(number) {
            return false;
        }
        self.bits &= !bit(number);
        true
    }

    /// Flip membership, returning whether the number is now in the set
    pub fn toggle(&mut self, number: u8) -> Result<bool, LottoError> {
        let mask = bit(check_range(number)?);
        self.bits ^= mask;
        Ok(self.bits & mask != 0)
    }

    pub fn contains(&self, number: u8) -> bool {
        check_range(number).is_ok() && self.bits & bit(number) != 0
    }

    pub fn len(&self) -> usize {
        self.bits.count_ones() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.bits == 0
    }

    pub fn clear(&mut self) {
        self.bits = 0;
    }

    pub fn union(&self, other: &Self) -> Self {
        Self {
            bits: self.bits | other.bits,
        }
    }

    pub fn intersection(&self, other: &Self) -> Self {
        Self {
            bits: self.bits & other.bits,
        }
    }

    pub fn difference(&self, other: &Self) -> Self {
        Self {
            bits: self.bits & !other.bits,
        }
    }

    pub fn iter(&self) -> NumberSetIter {
        NumberSetIter { bits: self.bits }
    }

    pub fn to_vec(&self) -> Vec<u8> {
        self.iter().collect()
    }
}

/// Ascending iterator over a [`NumberSet`]
#[derive(Debug, Clone)]
pub struct NumberSetIter {
    bits: u64,
}

impl Iterator for NumberSetIter {
    type Item = u8;

    fn next(&mut self) -> Option<u8> {
        if self.bits == 0 {
            return None;
        }
        let idx = self.bits.trailing_zeros() as u8;
        // clear lowest set bit
        self.bits &= self.bits - 1;
        Some(idx + MIN_NUMBER)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.bits.count_ones() as usize;
        (len, Some(len))
    }
}

impl ExactSizeIterator for NumberSetIter {}

impl IntoIterator for NumberSet {
    type Item = u8;
    type IntoIter = NumberSetIter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for &NumberSet {
    type Item = u8;
    type IntoIter = NumberSetIter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
