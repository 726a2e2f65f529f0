mod bits;
mod check;
mod def;
mod input;
mod pool;
mod weights;

pub use bits::{NumberSet, NumberSetIter};
pub use def::{Draw, LottoError, MAX_NUMBER, MIN_NUMBER, PICK_SIZE, PrizeTier, Ticket};
pub use input::{MAX_TICKET_COUNT, parse_leading_int, parse_ticket_count, parse_weight};
pub use pool::{Constraints, NumberPool};
pub use weights::{MAX_WEIGHT, WeightTable};
