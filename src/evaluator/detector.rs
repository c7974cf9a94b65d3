use super::hand_analysis::HandAnalysis;
use crate::evaluator::Category;

/// Strategy pattern: each detector recognises one category.
pub trait CategoryDetector {
    fn category(&self) -> Category;
    fn detect(&self, analysis: &HandAnalysis) -> bool;
}

// ============================================================================
// Detector Implementations (in priority order: highest to lowest)
// ============================================================================

/// Five consecutive ranks, one suit.
pub struct StraightFlushDetector;

impl CategoryDetector for StraightFlushDetector {
    fn category(&self) -> Category {
        Category::StraightFlush
    }

    fn detect(&self, analysis: &HandAnalysis) -> bool {
        analysis.suit_info.is_flush && analysis.straight_info.is_straight
    }
}

/// Two ranks, one of them four times.
pub struct FourOfAKindDetector;

impl CategoryDetector for FourOfAKindDetector {
    fn category(&self) -> Category {
        Category::FourOfAKind
    }

    fn detect(&self, analysis: &HandAnalysis) -> bool {
        analysis.rank_groups.has_shape(2, 4)
    }
}

/// Two ranks, one of them three times.
pub struct FullHouseDetector;

impl CategoryDetector for FullHouseDetector {
    fn category(&self) -> Category {
        Category::FullHouse
    }

    fn detect(&self, analysis: &HandAnalysis) -> bool {
        analysis.rank_groups.has_shape(2, 3)
    }
}

pub struct FlushDetector;

impl CategoryDetector for FlushDetector {
    fn category(&self) -> Category {
        Category::Flush
    }

    fn detect(&self, analysis: &HandAnalysis) -> bool {
        analysis.suit_info.is_flush
    }
}

pub struct StraightDetector;

impl CategoryDetector for StraightDetector {
    fn category(&self) -> Category {
        Category::Straight
    }

    fn detect(&self, analysis: &HandAnalysis) -> bool {
        analysis.straight_info.is_straight
    }
}

/// Three ranks, one of them three times.
pub struct ThreeOfAKindDetector;

impl CategoryDetector for ThreeOfAKindDetector {
    fn category(&self) -> Category {
        Category::ThreeOfAKind
    }

    fn detect(&self, analysis: &HandAnalysis) -> bool {
        analysis.rank_groups.has_shape(3, 3)
    }
}

/// Three ranks, the largest group a pair.
pub struct TwoPairDetector;

impl CategoryDetector for TwoPairDetector {
    fn category(&self) -> Category {
        Category::TwoPair
    }

    fn detect(&self, analysis: &HandAnalysis) -> bool {
        analysis.rank_groups.has_shape(3, 2)
    }
}

/// Four ranks, one of them twice.
pub struct OnePairDetector;

impl CategoryDetector for OnePairDetector {
    fn category(&self) -> Category {
        Category::OnePair
    }

    fn detect(&self, analysis: &HandAnalysis) -> bool {
        analysis.rank_groups.has_shape(4, 2)
    }
}

pub struct HighCardDetector;

impl CategoryDetector for HighCardDetector {
    fn category(&self) -> Category {
        Category::HighCard
    }

    fn detect(&self, _analysis: &HandAnalysis) -> bool {
        true // fallback
    }
}

// ============================================================================
// Static detector list (in priority order)
// ============================================================================

pub const DETECTORS: [&dyn CategoryDetector; 9] = [
    &StraightFlushDetector,
    &FourOfAKindDetector,
    &FullHouseDetector,
    &FlushDetector,
    &StraightDetector,
    &ThreeOfAKindDetector,
    &TwoPairDetector,
    &OnePairDetector,
    &HighCardDetector,
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Card, Rank, Suit};

    fn analyse(cards: [(Rank, Suit); 5]) -> HandAnalysis {
        HandAnalysis::new(&cards.map(|(r, s)| Card::new(r, s)))
    }

    fn first_match(analysis: &HandAnalysis) -> Category {
        DETECTORS
            .iter()
            .find(|d| d.detect(analysis))
            .map(|d| d.category())
            .unwrap_or(Category::Invalid)
    }

    #[test]
    fn straight_flush_wins_over_flush_and_straight() {
        let a = analyse([
            (Rank::Nine, Suit::Hearts),
            (Rank::Eight, Suit::Hearts),
            (Rank::Seven, Suit::Hearts),
            (Rank::Six, Suit::Hearts),
            (Rank::Five, Suit::Hearts),
        ]);
        assert!(FlushDetector.detect(&a));
        assert!(StraightDetector.detect(&a));
        assert_eq!(first_match(&a), Category::StraightFlush);
    }

    #[test]
    fn quads_are_not_full_house() {
        let a = analyse([
            (Rank::Ace, Suit::Spades),
            (Rank::Ace, Suit::Hearts),
            (Rank::Ace, Suit::Diamonds),
            (Rank::Ace, Suit::Clubs),
            (Rank::King, Suit::Spades),
        ]);
        assert!(!FullHouseDetector.detect(&a));
        assert_eq!(first_match(&a), Category::FourOfAKind);
    }

    #[test]
    fn trips_and_two_pair_share_distinct_count() {
        let trips = analyse([
            (Rank::Jack, Suit::Spades),
            (Rank::Jack, Suit::Hearts),
            (Rank::Jack, Suit::Diamonds),
            (Rank::Nine, Suit::Clubs),
            (Rank::Seven, Suit::Spades),
        ]);
        assert!(!TwoPairDetector.detect(&trips));
        assert_eq!(first_match(&trips), Category::ThreeOfAKind);

        let two_pair = analyse([
            (Rank::Ace, Suit::Spades),
            (Rank::Ace, Suit::Hearts),
            (Rank::King, Suit::Diamonds),
            (Rank::King, Suit::Clubs),
            (Rank::Queen, Suit::Spades),
        ]);
        assert!(!ThreeOfAKindDetector.detect(&two_pair));
        assert_eq!(first_match(&two_pair), Category::TwoPair);
    }

    #[test]
    fn full_house_and_one_pair() {
        let fh = analyse([
            (Rank::King, Suit::Spades),
            (Rank::King, Suit::Hearts),
            (Rank::King, Suit::Diamonds),
            (Rank::Queen, Suit::Clubs),
            (Rank::Queen, Suit::Spades),
        ]);
        assert_eq!(first_match(&fh), Category::FullHouse);

        let pair = analyse([
            (Rank::Jack, Suit::Spades),
            (Rank::Jack, Suit::Hearts),
            (Rank::Nine, Suit::Diamonds),
            (Rank::Seven, Suit::Clubs),
            (Rank::Three, Suit::Spades),
        ]);
        assert_eq!(first_match(&pair), Category::OnePair);
    }

    #[test]
    fn high_card_is_the_fallback() {
        let a = analyse([
            (Rank::Ace, Suit::Spades),
            (Rank::King, Suit::Hearts),
            (Rank::Jack, Suit::Diamonds),
            (Rank::Nine, Suit::Clubs),
            (Rank::Seven, Suit::Spades),
        ]);
        assert_eq!(first_match(&a), Category::HighCard);
    }
}
