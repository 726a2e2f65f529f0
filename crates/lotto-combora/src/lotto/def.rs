use chrono::NaiveDate;
use console::style;
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use strum_macros::{Display as StrumDisplay, EnumIter};

pub const MIN_NUMBER: u8 = 1;
pub const MAX_NUMBER: u8 = 49;
pub const PICK_SIZE: usize = 6;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LottoError {
    #[error("Number {0} is out of range (1-49)")]
    NumberOutOfRange(u8),

    #[error("Duplicate numbers found")]
    Duplicate,

    #[error("Invalid number of winning numbers: expected 6, got {0}")]
    InvalidWinningCount(usize),

    #[error("Ticket holds at most 6 numbers, got {0}")]
    TicketTooLong(usize),

    #[error("Special number {0} is also a winning number")]
    SpecialConflict(u8),

    #[error("Invalid weight key: {0}")]
    InvalidWeightKey(String),

    #[error("Only {available} numbers are available, a ticket needs {needed}")]
    PoolExhausted { available: usize, needed: usize },
}

pub(crate) fn check_range(number: u8) -> Result<u8, LottoError> {
    if (MIN_NUMBER..=MAX_NUMBER).contains(&number) {
        Ok(number)
    } else {
        Err(LottoError::NumberOutOfRange(number))
    }
}

fn check_numbers(numbers: &mut [u8]) -> Result<(), LottoError> {
    for &number in numbers.iter() {
        check_range(number)?;
    }
    numbers.sort_unstable();
    if numbers.windows(2).any(|w| w[0] == w[1]) {
        return Err(LottoError::Duplicate);
    }
    Ok(())
}

/// A ticket in canonical (ascending) order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<u8>")]
pub struct Ticket(Vec<u8>);

impl Ticket {
    /// Validate and sort user supplied numbers.
    ///
    /// Fewer than six numbers are accepted so partial tickets can still be
    /// scored; more than six are rejected.
    pub fn new(numbers: impl Into<Vec<u8>>) -> Result<Self, LottoError> {
        let mut numbers = numbers.into();
        if numbers.len() > PICK_SIZE {
            return Err(LottoError::TicketTooLong(numbers.len()));
        }
        check_numbers(&mut numbers)?;
        Ok(Self(numbers))
    }

    /// Numbers assembled by the generator are distinct and in range already.
    pub(crate) fn from_picked(mut numbers: Vec<u8>) -> Self {
        numbers.sort_unstable();
        Self(numbers)
    }

    pub fn numbers(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn is_complete(&self) -> bool {
        self.0.len() == PICK_SIZE
    }

    pub fn contains(&self, number: u8) -> bool {
        self.0.binary_search(&number).is_ok()
    }
}

impl TryFrom<Vec<u8>> for Ticket {
    type Error = LottoError;

    fn try_from(numbers: Vec<u8>) -> Result<Self, Self::Error> {
        Self::new(numbers)
    }
}

impl Display for Ticket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let numbers = self
            .0
            .iter()
            .map(|n| format!("{n:02}"))
            .collect::<Vec<_>>()
            .join(" ");
        write!(f, "{}", style(numbers).cyan().bold())
    }
}

/// Official result of one draw, validated on construction and when
/// deserialized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawDraw")]
pub struct Draw {
    draw_date: NaiveDate,
    winning_numbers: [u8; PICK_SIZE],
    special_number: u8,
}

impl Draw {
    pub fn new(
        draw_date: NaiveDate,
        winning_numbers: &[u8],
        special_number: u8,
    ) -> Result<Self, LottoError> {
        if winning_numbers.len() != PICK_SIZE {
            return Err(LottoError::InvalidWinningCount(winning_numbers.len()));
        }
        let mut numbers = [0u8; PICK_SIZE];
        numbers.copy_from_slice(winning_numbers);
        check_numbers(&mut numbers)?;

        check_range(special_number)?;
        if numbers.contains(&special_number) {
            return Err(LottoError::SpecialConflict(special_number));
        }

        Ok(Self {
            draw_date,
            winning_numbers: numbers,
            special_number,
        })
    }

    pub fn draw_date(&self) -> NaiveDate {
        self.draw_date
    }

    pub fn winning_numbers(&self) -> &[u8; PICK_SIZE] {
        &self.winning_numbers
    }

    pub fn special_number(&self) -> u8 {
        self.special_number
    }
}

#[derive(Deserialize)]
struct RawDraw {
    draw_date: NaiveDate,
    winning_numbers: Vec<u8>,
    special_number: u8,
}

impl TryFrom<RawDraw> for Draw {
    type Error = LottoError;

    fn try_from(raw: RawDraw) -> Result<Self, Self::Error> {
        Self::new(raw.draw_date, &raw.winning_numbers, raw.special_number)
    }
}

impl Display for Draw {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let numbers = self
            .winning_numbers
            .iter()
            .map(|n| format!("{n:02}"))
            .collect::<Vec<_>>()
            .join(" ");
        write!(
            f,
            "{} {} + {}",
            self.draw_date.format("%m/%d"),
            style(numbers).yellow().bold(),
            style(format!("{:02}", self.special_number)).red().bold()
        )
    }
}

/// Prize tiers from the highest value to the lowest.
///
/// The derived ordering follows declaration order, so `First < Consolation`.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    StrumDisplay,
    EnumIter,
)]
pub enum PrizeTier {
    #[strum(to_string = "Grand prize")]
    First,
    #[strum(to_string = "2nd prize")]
    Second,
    #[strum(to_string = "3rd prize")]
    Third,
    #[strum(to_string = "4th prize")]
    Fourth,
    #[strum(to_string = "5th prize")]
    Fifth,
    #[strum(to_string = "6th prize")]
    Sixth,
    #[strum(to_string = "7th prize")]
    Seventh,
    #[strum(to_string = "Consolation prize")]
    Consolation,
}
