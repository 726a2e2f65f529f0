use rand::Rng;

use crate::generator::{GenerationMode, TicketGenerator};
use crate::lotto::{Constraints, Draw, LottoError, PrizeTier, Ticket, WeightTable, parse_ticket_count};
use crate::stats::PrizeStats;

/// Everything one user session works on: constraints and weights that
/// persist across generations, plus the latest batch which each generation
/// replaces.
#[derive(Debug, Clone, Default)]
pub struct Session {
    constraints: Constraints,
    weights: WeightTable,
    mode: GenerationMode,
    draw: Option<Draw>,
    batch: Vec<Ticket>,
    stats: Option<PrizeStats>,
}

impl Session {
    pub fn new(weights: WeightTable) -> Self {
        Self {
            weights,
            ..Self::default()
        }
    }

    pub fn constraints(&self) -> &Constraints {
        &self.constraints
    }

    pub fn toggle_forced(&mut self, number: u8) -> Result<bool, LottoError> {
        self.constraints.toggle_forced(number)
    }

    pub fn toggle_excluded(&mut self, number: u8) -> Result<bool, LottoError> {
        self.constraints.toggle_excluded(number)
    }

    pub fn force(&mut self, number: u8) -> Result<(), LottoError> {
        self.constraints.force(number)
    }

    pub fn exclude(&mut self, number: u8) -> Result<(), LottoError> {
        self.constraints.exclude(number)
    }

    pub fn mode(&self) -> GenerationMode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: GenerationMode) {
        self.mode = mode;
    }

    pub fn weights(&self) -> &WeightTable {
        &self.weights
    }

    pub fn weights_mut(&mut self) -> &mut WeightTable {
        &mut self.weights
    }

    pub fn draw(&self) -> Option<&Draw> {
        self.draw.as_ref()
    }

    /// The draw is fixed once received
    pub fn set_draw(&mut self, draw: Draw) {
        if self.draw.is_some() {
            log::debug!("Draw already set for this session, keeping it");
            return;
        }
        self.draw = Some(draw);
    }

    pub fn batch(&self) -> &[Ticket] {
        &self.batch
    }

    /// `None` until a batch was generated while a draw was known
    pub fn stats(&self) -> Option<&PrizeStats> {
        self.stats.as_ref()
    }

    /// Tier per ticket of the current batch, empty without a draw
    pub fn results(&self) -> Vec<(usize, Option<PrizeTier>)> {
        self.draw
            .as_ref()
            .map(|draw| Ticket::check_multiple_tickets(&self.batch, draw))
            .unwrap_or_default()
    }

    /// Generate a new batch from raw count input.
    ///
    /// Invalid input (non-numeric, zero, negative) is ignored and returns
    /// `Ok(false)` with the previous batch untouched. Otherwise the batch and
    /// statistics are replaced, never merged.
    pub fn generate<R: Rng>(
        &mut self,
        count_input: &str,
        generator: &mut TicketGenerator<R>,
    ) -> Result<bool, LottoError> {
        let Some(count) = parse_ticket_count(count_input) else {
            log::debug!("Ignoring ticket count input {count_input:?}");
            return Ok(false);
        };

        let batch = generator.generate(count, &self.constraints, self.mode, &self.weights)?;
        self.stats = self
            .draw
            .as_ref()
            .map(|draw| PrizeStats::aggregate(&batch, draw));
        self.batch = batch;
        Ok(true)
    }
}
