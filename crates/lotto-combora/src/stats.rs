use std::fmt::Display;

use serde::Serialize;

use crate::lotto::{Draw, PrizeTier, Ticket};

/// Tier counts for one batch, in order of first occurrence.
/// Tiers that never occurred are absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PrizeStats {
    counts: Vec<(PrizeTier, usize)>,
}

impl PrizeStats {
    pub fn aggregate(tickets: &[Ticket], draw: &Draw) -> Self {
        let mut stats = Self::default();
        for tier in tickets.iter().filter_map(|ticket| ticket.check_prize(draw)) {
            stats.record(tier);
        }
        stats
    }

    pub fn record(&mut self, tier: PrizeTier) {
        if let Some((_, count)) = self.counts.iter_mut().find(|(t, _)| *t == tier) {
            *count += 1;
        } else {
            self.counts.push((tier, 1));
        }
    }

    pub fn get(&self, tier: PrizeTier) -> usize {
        self.counts
            .iter()
            .find(|(t, _)| *t == tier)
            .map_or(0, |(_, count)| *count)
    }

    pub fn iter(&self) -> impl Iterator<Item = (PrizeTier, usize)> + '_ {
        self.counts.iter().copied()
    }

    /// Number of distinct tiers hit
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Winning tickets over all tiers
    pub fn total_winning(&self) -> usize {
        self.counts.iter().map(|(_, count)| count).sum()
    }
}

impl Display for PrizeStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            self.counts
                .iter()
                .map(|(tier, count)| format!("{tier}: {count}"))
                .collect::<Vec<_>>()
                .join("\n")
        )
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn draw() -> Draw {
        let date = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
        Draw::new(date, &[1, 2, 3, 4, 5, 6], 7).unwrap()
    }

    fn ticket(numbers: &[u8]) -> Ticket {
        Ticket::new(numbers.to_vec()).unwrap()
    }

    #[test]
    fn test_only_winning_tiers_counted() {
        let tickets = vec![
            ticket(&[1, 2, 3, 4, 5, 6]),
            ticket(&[10, 11, 12, 13, 14, 15]),
            ticket(&[20, 21, 22, 23, 24, 25]),
            ticket(&[30, 31, 32, 33, 34, 35]),
        ];
        let stats = PrizeStats::aggregate(&tickets, &draw());

        assert_eq!(stats.iter().collect::<Vec<_>>(), vec![(PrizeTier::First, 1)]);
        assert_eq!(stats.len(), 1);
        assert_eq!(stats.get(PrizeTier::Second), 0);
        assert_eq!(stats.total_winning(), 1);
    }

    #[test]
    fn test_insertion_order() {
        let tickets = vec![
            ticket(&[1, 2, 3, 10, 11, 12]), // consolation
            ticket(&[1, 2, 3, 4, 5, 7]),    // second
            ticket(&[1, 2, 3, 20, 21, 22]), // consolation
            ticket(&[1, 2, 7, 30, 31, 32]), // seventh
        ];
        let stats = PrizeStats::aggregate(&tickets, &draw());

        assert_eq!(
            stats.iter().collect::<Vec<_>>(),
            vec![
                (PrizeTier::Consolation, 2),
                (PrizeTier::Second, 1),
                (PrizeTier::Seventh, 1),
            ]
        );
        assert_eq!(stats.total_winning(), 4);
        assert_eq!(
            stats.to_string(),
            "Consolation prize: 2\n2nd prize: 1\n7th prize: 1"
        );
    }

    #[test]
    fn test_empty_batch() {
        let stats = PrizeStats::aggregate(&[], &draw());
        assert!(stats.is_empty());
        assert_eq!(stats.total_winning(), 0);
    }
}
