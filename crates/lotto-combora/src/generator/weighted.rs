use rand::{Rng as _, RngCore};

use super::Sampler;
use super::uniform::Uniform;
use crate::lotto::WeightTable;

/// Selection probability proportional to weight, recomputed after each
/// draw. A zero total falls back to [`Uniform`] for that draw.
pub struct Weighted<'a> {
    weights: &'a WeightTable,
}

impl<'a> Weighted<'a> {
    pub fn new(weights: &'a WeightTable) -> Self {
        Self { weights }
    }
}

impl Sampler for Weighted<'_> {
    fn pick(&self, rng: &mut dyn RngCore, available: &mut Vec<u8>) -> Option<u8> {
        if available.is_empty() {
            return None;
        }

        let total = self.weights.total(available);
        if total == 0 {
            return Uniform.pick(rng, available);
        }

        // walk the pool in order until the drawn value is used up
        let mut remainder = rng.gen_range(0..total);
        let index = available
            .iter()
            .position(|&n| {
                let weight = self.weights.sampling_weight(n);
                if remainder < weight {
                    true
                } else {
                    remainder -= weight;
                    false
                }
            })
            .unwrap_or(available.len() - 1);

        Some(available.remove(index))
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng as _;
    use rand::rngs::StdRng;

    use super::*;

    #[test]
    fn test_single_weighted_number_comes_first() {
        let mut weights = WeightTable::new();
        weights.set(23, 1).unwrap();
        let sampler = Weighted::new(&weights);

        for seed in 0..200 {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut available: Vec<u8> = (1..=49).collect();
            assert_eq!(sampler.pick(&mut rng, &mut available), Some(23));
            assert!(!available.contains(&23));
        }
    }

    #[test]
    fn test_zero_weight_never_beats_weighted() {
        let mut weights = WeightTable::new();
        weights.set(2, 40).unwrap();
        weights.set(48, 60).unwrap();
        let sampler = Weighted::new(&weights);

        let mut rng = StdRng::seed_from_u64(8);
        for _ in 0..500 {
            let mut available: Vec<u8> = (1..=49).collect();
            let first = sampler.pick(&mut rng, &mut available);
            let second = sampler.pick(&mut rng, &mut available);
            let mut pair = [first, second];
            pair.sort_unstable();
            assert_eq!(pair, [Some(2), Some(48)]);
            // both weighted numbers gone: uniform fallback over the rest
            let third = sampler.pick(&mut rng, &mut available);
            assert!(third.is_some_and(|n| n != 2 && n != 48));
        }
    }

    #[test]
    fn test_zero_total_falls_back_to_uniform() {
        let weights = WeightTable::new();
        let sampler = Weighted::new(&weights);
        let mut rng = StdRng::seed_from_u64(1);
        let mut available = vec![5, 6, 7];

        let mut drawn = Vec::new();
        while let Some(n) = sampler.pick(&mut rng, &mut available) {
            drawn.push(n);
        }
        drawn.sort_unstable();
        assert_eq!(drawn, vec![5, 6, 7]);
    }

    #[test]
    fn test_probability_follows_weight() {
        const ROUNDS: usize = 20_000;
        let mut weights = WeightTable::new();
        weights.set(10, 75).unwrap();
        weights.set(20, 25).unwrap();
        let sampler = Weighted::new(&weights);

        let mut rng = StdRng::seed_from_u64(77);
        let mut tens = 0usize;
        for _ in 0..ROUNDS {
            let mut available = vec![10, 20, 30];
            if sampler.pick(&mut rng, &mut available) == Some(10) {
                tens += 1;
            }
        }

        let share = tens as f64 / ROUNDS as f64;
        assert!((share - 0.75).abs() < 0.02, "share of 10 was {share}");
    }
}
