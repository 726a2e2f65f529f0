use std::collections::BTreeMap;

use serde::ser::SerializeMap as _;
use serde::{Deserialize, Serialize, Serializer};

use super::def::{LottoError, MAX_NUMBER, MIN_NUMBER, check_range};
use super::input::parse_weight;

pub const MAX_WEIGHT: u8 = 100;

const TABLE_LEN: usize = MAX_NUMBER as usize;

/// Per-number selection weight in 0-100, indexed by number.
///
/// Serialized as a JSON object keyed `"1"`..`"49"`. Missing keys read as 0
/// and stored values are clamped into range when loaded.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "BTreeMap<String, i64>")]
pub struct WeightTable {
    weights: [u8; TABLE_LEN],
}

impl Default for WeightTable {
    fn default() -> Self {
        Self {
            weights: [0; TABLE_LEN],
        }
    }
}

fn index(number: u8) -> Result<usize, LottoError> {
    check_range(number).map(|n| usize::from(n - MIN_NUMBER))
}

impl WeightTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every number gets the same weight
    pub fn filled(weight: u8) -> Self {
        Self {
            weights: [weight.min(MAX_WEIGHT); TABLE_LEN],
        }
    }

    /// `None` for numbers outside 1-49
    pub fn get(&self, number: u8) -> Option<u8> {
        index(number).ok().map(|i| self.weights[i])
    }

    /// Weight used while sampling. Out-of-range numbers weigh nothing and
    /// the stored value is clamped once more.
    pub fn sampling_weight(&self, number: u8) -> u32 {
        u32::from(self.get(number).unwrap_or(0).min(MAX_WEIGHT))
    }

    pub fn set(&mut self, number: u8, weight: u8) -> Result<(), LottoError> {
        let i = index(number)?;
        self.weights[i] = weight.min(MAX_WEIGHT);
        Ok(())
    }

    /// Set a weight from raw form input
    pub fn set_from_input(&mut self, number: u8, input: &str) -> Result<u8, LottoError> {
        let weight = parse_weight(input);
        self.set(number, weight)?;
        Ok(weight)
    }

    pub fn set_all(&mut self, weight: u8) {
        self.weights = [weight.min(MAX_WEIGHT); TABLE_LEN];
    }

    pub fn clear(&mut self) {
        self.set_all(0);
    }

    pub fn is_zero(&self) -> bool {
        self.weights.iter().all(|&w| w == 0)
    }

    pub fn total(&self, candidates: &[u8]) -> u32 {
        candidates.iter().map(|&n| self.sampling_weight(n)).sum()
    }

    /// `(number, weight)` pairs in pool order
    pub fn iter(&self) -> impl Iterator<Item = (u8, u8)> + '_ {
        (MIN_NUMBER..=MAX_NUMBER).zip(self.weights.iter().copied())
    }
}

impl Serialize for WeightTable {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(TABLE_LEN))?;
        for (number, weight) in self.iter() {
            map.serialize_entry(&number.to_string(), &weight)?;
        }
        map.end()
    }
}

impl TryFrom<BTreeMap<String, i64>> for WeightTable {
    type Error = LottoError;

    fn try_from(raw: BTreeMap<String, i64>) -> Result<Self, Self::Error> {
        let mut table = Self::default();
        for (key, value) in raw {
            let number = key
                .trim()
                .parse::<u8>()
                .ok()
                .filter(|n| check_range(*n).is_ok())
                .ok_or_else(|| LottoError::InvalidWeightKey(key.clone()))?;
            // clamp keeps the value inside u8
            let weight = value.clamp(0, i64::from(MAX_WEIGHT)) as u8;
            table.set(number, weight)?;
        }
        Ok(table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_all_zero() {
        let table = WeightTable::new();
        assert!(table.is_zero());
        assert_eq!(table.iter().count(), 49);
        assert_eq!(table.get(1), Some(0));
        assert_eq!(table.get(0), None);
        assert_eq!(table.get(50), None);
    }

    #[test]
    fn test_set_clamps_and_checks_bounds() {
        let mut table = WeightTable::new();
        table.set(7, 250).unwrap();
        assert_eq!(table.get(7), Some(100));
        assert_eq!(table.set(0, 10), Err(LottoError::NumberOutOfRange(0)));
        assert_eq!(table.set(50, 10), Err(LottoError::NumberOutOfRange(50)));
        assert_eq!(table.sampling_weight(50), 0);
    }

    #[test]
    fn test_set_from_input() {
        let mut table = WeightTable::new();
        assert_eq!(table.set_from_input(3, "35"), Ok(35));
        assert_eq!(table.set_from_input(4, "-8"), Ok(0));
        assert_eq!(table.set_from_input(5, "abc"), Ok(0));
        assert_eq!(table.set_from_input(6, "1000"), Ok(100));
        assert_eq!(table.get(3), Some(35));
        assert_eq!(table.get(6), Some(100));
    }

    #[test]
    fn test_bulk_operations() {
        let mut table = WeightTable::new();
        table.set_all(60);
        assert!(table.iter().all(|(_, w)| w == 60));
        assert_eq!(table.total(&[1, 2, 3]), 180);

        table.clear();
        assert!(table.is_zero());
        assert_eq!(WeightTable::filled(120).get(49), Some(100));
    }

    #[test]
    fn test_weight_round_trip() {
        let mut table = WeightTable::new();
        table.set(1, 10).unwrap();
        table.set(25, 100).unwrap();
        table.set(49, 3).unwrap();

        let json = serde_json::to_string(&table).unwrap();
        let restored: WeightTable = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, table);
    }

    #[test]
    fn test_serialized_shape() {
        let table = WeightTable::filled(5);
        let value = serde_json::to_value(&table).unwrap();
        let object = value.as_object().unwrap();
        assert_eq!(object.len(), 49);
        assert_eq!(object["1"], 5);
        assert_eq!(object["49"], 5);
    }

    #[test]
    fn test_lenient_load() {
        let table: WeightTable = serde_json::from_str(r#"{"2": 500, "3": -1}"#).unwrap();
        assert_eq!(table.get(1), Some(0));
        assert_eq!(table.get(2), Some(100));
        assert_eq!(table.get(3), Some(0));
    }

    #[test]
    fn test_invalid_keys_rejected() {
        assert!(serde_json::from_str::<WeightTable>(r#"{"0": 5}"#).is_err());
        assert!(serde_json::from_str::<WeightTable>(r#"{"fifty": 5}"#).is_err());
        assert!(serde_json::from_str::<WeightTable>(r#"{"1": "heavy"}"#).is_err());
    }
}
