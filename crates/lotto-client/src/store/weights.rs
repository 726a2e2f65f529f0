use lotto_combora::WeightTable;

use super::KvStore;

pub const WEIGHTS_KEY: &str = "lotto_weights";

/// Persists the weight table under [`WEIGHTS_KEY`]
#[derive(Debug, Clone)]
pub struct WeightStore<S> {
    store: S,
}

impl<S: KvStore> WeightStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Stored weights, or all zero when the entry is absent or malformed
    pub fn load(&self) -> WeightTable {
        let raw = match self.store.get(WEIGHTS_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                log::debug!("No stored weights, starting from zero");
                return WeightTable::default();
            }
            Err(e) => {
                log::warn!("Failed to read stored weights: {e:#}");
                return WeightTable::default();
            }
        };

        serde_json::from_str(&raw).unwrap_or_else(|e| {
            log::warn!("Failed to parse stored weights, starting from zero: {e}");
            WeightTable::default()
        })
    }

    /// Overwrite the stored entry
    pub fn save(&mut self, weights: &WeightTable) -> anyhow::Result<()> {
        let raw = serde_json::to_string(weights)?;
        self.store.set(WEIGHTS_KEY, raw)?;
        log::debug!("Saved weights");
        Ok(())
    }

    /// Zero the table and drop the stored entry
    pub fn reset(&mut self, weights: &mut WeightTable) -> anyhow::Result<()> {
        weights.clear();
        self.store.remove(WEIGHTS_KEY)
    }
}
