use rand::rngs::StdRng;
use rand::seq::SliceRandom as _;
use rand::{Rng, RngCore, SeedableRng as _};
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

use crate::lotto::{Constraints, LottoError, PICK_SIZE, Ticket, WeightTable};

pub mod uniform;
pub mod weighted;

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
#[strum(ascii_case_insensitive)]
pub enum GenerationMode {
    #[default]
    #[strum(to_string = "uniform")]
    Uniform,
    #[strum(to_string = "weighted")]
    Weighted,
}

impl GenerationMode {
    pub fn create_sampler<'a>(&self, weights: &'a WeightTable) -> Box<dyn Sampler + 'a> {
        match self {
            Self::Uniform => Box::new(uniform::Uniform),
            Self::Weighted => Box::new(weighted::Weighted::new(weights)),
        }
    }
}

/// Draws fill numbers without replacement.
pub trait Sampler {
    /// Remove one candidate from `available` and return it, `None` once the
    /// candidates are used up.
    fn pick(&self, rng: &mut dyn RngCore, available: &mut Vec<u8>) -> Option<u8>;
}

/// Generates ticket batches from an injected random source.
#[derive(Debug, Clone)]
pub struct TicketGenerator<R> {
    rng: R,
}

impl TicketGenerator<StdRng> {
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }

    /// Same seed, same batches
    pub fn with_seed(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> TicketGenerator<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Generate `count` independent tickets.
    ///
    /// `count == 0` returns an empty batch. The request fails with
    /// [`LottoError::PoolExhausted`] when the constraints leave fewer than six
    /// usable numbers; every returned ticket is complete.
    pub fn generate(
        &mut self,
        count: usize,
        constraints: &Constraints,
        mode: GenerationMode,
        weights: &WeightTable,
    ) -> Result<Vec<Ticket>, LottoError> {
        if count == 0 {
            log::debug!("Nothing to generate for an empty batch");
            return Ok(Vec::new());
        }

        let forced = constraints.forced().to_vec();
        let fill_pool = constraints.fill_pool();

        let available = forced.len().min(PICK_SIZE) + fill_pool.len();
        if available < PICK_SIZE {
            log::warn!("Constraints leave {available} numbers, refusing to generate");
            return Err(LottoError::PoolExhausted {
                available,
                needed: PICK_SIZE,
            });
        }

        log::debug!(
            "Generating {count} {mode} tickets: {} forced, {} in fill pool",
            forced.len(),
            fill_pool.len()
        );

        let sampler = mode.create_sampler(weights);
        (0..count)
            .map(|_| self.generate_one(&forced, &fill_pool, sampler.as_ref()))
            .collect()
    }

    fn generate_one(
        &mut self,
        forced: &[u8],
        fill_pool: &[u8],
        sampler: &dyn Sampler,
    ) -> Result<Ticket, LottoError> {
        // more than six forced: this ticket keeps a random six of them
        let mut picked: Vec<u8> = if forced.len() > PICK_SIZE {
            forced
                .choose_multiple(&mut self.rng, PICK_SIZE)
                .copied()
                .collect()
        } else {
            forced.to_vec()
        };

        let mut available = fill_pool.to_vec();
        while picked.len() < PICK_SIZE {
            let Some(number) = sampler.pick(&mut self.rng, &mut available) else {
                return Err(LottoError::PoolExhausted {
                    available: picked.len(),
                    needed: PICK_SIZE,
                });
            };
            picked.push(number);
        }

        Ok(Ticket::from_picked(picked))
    }
}
