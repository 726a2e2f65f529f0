use super::def::{Draw, PrizeTier, Ticket};

impl PrizeTier {
    /// Check prize level
    ///
    /// # Parameters
    /// * `numbers` - Ticket numbers, any length; repeated numbers count once
    /// * `draw` - Winning numbers and special number
    ///
    /// # Returns
    /// The prize tier, or `None` when the numbers win nothing
    pub fn evaluate(numbers: &[u8], draw: &Draw) -> Option<Self> {
        // count per winning number so duplicates in `numbers` cannot add up
        let match_count = draw
            .winning_numbers()
            .iter()
            .filter(|&n| numbers.contains(n))
            .count();

        let has_special = numbers.contains(&draw.special_number());

        // 2 + special outranks 3 without special
        match (match_count, has_special) {
            (6, _) => Some(Self::First),
            (5, true) => Some(Self::Second),
            (5, false) => Some(Self::Third),
            (4, true) => Some(Self::Fourth),
            (4, false) => Some(Self::Fifth),
            (3, true) => Some(Self::Sixth),
            (2, true) => Some(Self::Seventh),
            (3, false) => Some(Self::Consolation),
            _ => None,
        }
    }
}

impl Draw {
    /// Whether the number is drawn at all, winning or special
    pub fn is_winning_number(&self, number: u8) -> bool {
        self.winning_numbers().contains(&number) || self.special_number() == number
    }
}

impl Ticket {
    pub fn check_prize(&self, draw: &Draw) -> Option<PrizeTier> {
        PrizeTier::evaluate(self.numbers(), draw)
    }

    /// Check multiple tickets against a draw
    pub fn check_multiple_tickets(
        tickets: &[Self],
        draw: &Draw,
    ) -> Vec<(usize, Option<PrizeTier>)> {
        tickets
            .iter()
            .enumerate()
            .map(|(index, ticket)| (index, ticket.check_prize(draw)))
            .collect()
    }
}
