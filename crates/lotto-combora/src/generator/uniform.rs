use rand::{Rng as _, RngCore};

use super::Sampler;

/// Every remaining candidate is equally likely.
pub struct Uniform;

impl Sampler for Uniform {
    fn pick(&self, rng: &mut dyn RngCore, available: &mut Vec<u8>) -> Option<u8> {
        if available.is_empty() {
            return None;
        }
        let index = rng.gen_range(0..available.len());
        // `remove` keeps pool order for the weighted walk
        Some(available.remove(index))
    }
}
