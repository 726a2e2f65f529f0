use super::bits::NumberSet;
use super::def::{LottoError, MAX_NUMBER, MIN_NUMBER, PICK_SIZE};

/// The fixed universe of numbers 1-49.
pub struct NumberPool;

impl NumberPool {
    pub fn all() -> impl Iterator<Item = u8> {
        MIN_NUMBER..=MAX_NUMBER
    }

    pub fn contains(number: u8) -> bool {
        (MIN_NUMBER..=MAX_NUMBER).contains(&number)
    }

    /// Candidates for the slots not covered by `forced`, in pool order.
    ///
    /// Every forced number is removed even if a ticket later keeps only part
    /// of the forced set, so a ticket never holds the same number twice.
    pub fn fill_pool(forced: &NumberSet, excluded: &NumberSet) -> Vec<u8> {
        NumberSet::full()
            .difference(excluded)
            .difference(forced)
            .to_vec()
    }
}

/// Forced and excluded numbers chosen by the user.
///
/// The toggling methods keep both sets disjoint. Sets assembled through
/// [`Constraints::new`] are taken as given: the generator trusts `excluded`
/// for the fill pool and never filters `forced`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Constraints {
    forced: NumberSet,
    excluded: NumberSet,
}

impl Constraints {
    pub fn new(forced: NumberSet, excluded: NumberSet) -> Self {
        Self { forced, excluded }
    }

    pub fn forced(&self) -> &NumberSet {
        &self.forced
    }

    pub fn excluded(&self) -> &NumberSet {
        &self.excluded
    }

    /// Returns whether the number is forced afterwards
    pub fn toggle_forced(&mut self, number: u8) -> Result<bool, LottoError> {
        let forced = self.forced.toggle(number)?;
        if forced {
            self.excluded.remove(number);
        }
        Ok(forced)
    }

    /// Returns whether the number is excluded afterwards
    pub fn toggle_excluded(&mut self, number: u8) -> Result<bool, LottoError> {
        let excluded = self.excluded.toggle(number)?;
        if excluded {
            self.forced.remove(number);
        }
        Ok(excluded)
    }

    /// Mark a number forced, whatever its state before
    pub fn force(&mut self, number: u8) -> Result<(), LottoError> {
        self.forced.insert(number)?;
        self.excluded.remove(number);
        Ok(())
    }

    /// Mark a number excluded, whatever its state before
    pub fn exclude(&mut self, number: u8) -> Result<(), LottoError> {
        self.excluded.insert(number)?;
        self.forced.remove(number);
        Ok(())
    }

    pub fn clear(&mut self) {
        self.forced.clear();
        self.excluded.clear();
    }

    pub fn fill_pool(&self) -> Vec<u8> {
        NumberPool::fill_pool(&self.forced, &self.excluded)
    }

    /// Largest ticket these constraints can produce
    pub fn capacity(&self) -> usize {
        self.forced.len().min(PICK_SIZE) + self.fill_pool().len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pool_is_one_to_forty_nine() {
        let all: Vec<u8> = NumberPool::all().collect();
        assert_eq!(all.len(), 49);
        assert_eq!(all.first(), Some(&1));
        assert_eq!(all.last(), Some(&49));
        assert!(NumberPool::contains(49));
        assert!(!NumberPool::contains(0));
    }

    #[test]
    fn test_fill_pool_removes_forced_and_excluded() {
        let forced = NumberSet::from_numbers([1, 2]).unwrap();
        let excluded = NumberSet::from_numbers([3, 49]).unwrap();
        let pool = NumberPool::fill_pool(&forced, &excluded);

        assert_eq!(pool.len(), 45);
        assert_eq!(pool.first(), Some(&4));
        assert_eq!(pool.last(), Some(&48));
        assert!(pool.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_toggles_keep_sets_disjoint() {
        let mut constraints = Constraints::default();
        assert_eq!(constraints.toggle_excluded(10), Ok(true));
        assert_eq!(constraints.toggle_forced(10), Ok(true));
        assert!(constraints.forced().contains(10));
        assert!(!constraints.excluded().contains(10));

        assert_eq!(constraints.toggle_excluded(10), Ok(true));
        assert!(!constraints.forced().contains(10));

        assert_eq!(constraints.toggle_excluded(10), Ok(false));
        assert!(constraints.excluded().is_empty());
    }

    #[test]
    fn test_force_and_exclude_are_idempotent() {
        let mut constraints = Constraints::default();
        constraints.force(3).unwrap();
        constraints.force(3).unwrap();
        assert_eq!(constraints.forced().to_vec(), vec![3]);

        constraints.exclude(3).unwrap();
        constraints.exclude(3).unwrap();
        assert!(constraints.forced().is_empty());
        assert_eq!(constraints.excluded().to_vec(), vec![3]);

        assert_eq!(constraints.force(0), Err(LottoError::NumberOutOfRange(0)));
        assert_eq!(constraints.exclude(50), Err(LottoError::NumberOutOfRange(50)));
    }

    #[test]
    fn test_overlapping_sets_are_tolerated() {
        let both = NumberSet::from_numbers([5]).unwrap();
        let constraints = Constraints::new(both, both);
        assert!(!constraints.fill_pool().contains(&5));
        assert_eq!(constraints.capacity(), 49);
    }

    #[test]
    fn test_capacity() {
        let forced = NumberSet::from_numbers(1..=8).unwrap();
        let excluded = NumberSet::from_numbers(9..=45).unwrap();
        let constraints = Constraints::new(forced, excluded);
        // 6 of the forced plus 46..=49
        assert_eq!(constraints.capacity(), 10);

        let excluded = NumberSet::from_numbers(1..=44).unwrap();
        let constraints = Constraints::new(NumberSet::new(), excluded);
        assert_eq!(constraints.capacity(), 5);
    }
}
