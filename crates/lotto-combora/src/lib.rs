//! Ticket generation and prize checking for 6/49 lotteries.
//!
//! [`generator::TicketGenerator`] builds batches under forced/excluded
//! constraints, optionally weighted. Tickets are scored with
//! [`lotto::PrizeTier::evaluate`] and tallied by [`stats::PrizeStats`].

pub mod generator;
pub mod lotto;
pub mod session;
pub mod stats;

pub use generator::{GenerationMode, TicketGenerator};
pub use lotto::{Constraints, Draw, LottoError, NumberSet, PrizeTier, Ticket, WeightTable};
pub use session::Session;
pub use stats::PrizeStats;
