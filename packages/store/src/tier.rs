//! Planet size tiers derived from population.

/// Discrete display bucket for a planet, smallest first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SizeTier {
    Small,
    Medium,
    Large,
    Huge,
    Colossal,
}

const THRESHOLDS: [(u64, SizeTier); 4] = [
    (1_000_000_000, SizeTier::Colossal),
    (100_000_000, SizeTier::Huge),
    (10_000_000, SizeTier::Large),
    (1_000_000, SizeTier::Medium),
];

impl SizeTier {
    /// Classify a population string.
    ///
    /// `"unknown"` and anything without a leading digit are [`SizeTier::Small`].
    /// Otherwise the leading run of digits is read as an integer and bucketed
    /// with strict `>` thresholds. A digit run too long for `u64` is
    /// [`SizeTier::Colossal`].
    pub fn from_population(population: &str) -> Self {
        let digits_len = population
            .bytes()
            .take_while(|b| b.is_ascii_digit())
            .count();
        if digits_len == 0 {
            return SizeTier::Small;
        }

        let Ok(count) = population[..digits_len].parse::<u64>() else {
            return SizeTier::Colossal;
        };

        THRESHOLDS
            .iter()
            .find(|(threshold, _)| count > *threshold)
            .map(|(_, tier)| *tier)
            .unwrap_or(SizeTier::Small)
    }

    /// 1 for the smallest tier through 5 for the largest.
    pub fn rank(self) -> u8 {
        match self {
            SizeTier::Small => 1,
            SizeTier::Medium => 2,
            SizeTier::Large => 3,
            SizeTier::Huge => 4,
            SizeTier::Colossal => 5,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_is_smallest() {
        assert_eq!(SizeTier::from_population("unknown"), SizeTier::Small);
        assert_eq!(SizeTier::from_population("unknown").rank(), 1);
    }

    #[test]
    fn test_thresholds_are_strict() {
        assert_eq!(SizeTier::from_population("1000000"), SizeTier::Small);
        assert_eq!(SizeTier::from_population("1000001"), SizeTier::Medium);
        assert_eq!(SizeTier::from_population("10000000"), SizeTier::Medium);
        assert_eq!(SizeTier::from_population("10000001"), SizeTier::Large);
        assert_eq!(SizeTier::from_population("100000000"), SizeTier::Large);
        assert_eq!(SizeTier::from_population("100000001"), SizeTier::Huge);
        assert_eq!(SizeTier::from_population("1000000000"), SizeTier::Huge);
        assert_eq!(SizeTier::from_population("1000000001"), SizeTier::Colossal);
        assert_eq!(SizeTier::from_population("1000000001").rank(), 5);
    }

    #[test]
    fn test_small_and_odd_values() {
        assert_eq!(SizeTier::from_population("0"), SizeTier::Small);
        assert_eq!(SizeTier::from_population("200000"), SizeTier::Small);
        assert_eq!(SizeTier::from_population(""), SizeTier::Small);
        assert_eq!(SizeTier::from_population("n/a"), SizeTier::Small);
        // Only the leading digits count.
        assert_eq!(SizeTier::from_population("2000000 approx"), SizeTier::Medium);
        assert_eq!(
            SizeTier::from_population("99999999999999999999999"),
            SizeTier::Colossal
        );
    }
}
