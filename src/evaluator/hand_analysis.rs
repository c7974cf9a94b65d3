use super::rank_groups::RankGroups;
use super::straight_info::StraightInfo;
use super::suit_info::SuitInfo;
use crate::cards::Card;
use crate::evaluator::{Category, Detail, HandValue};

/// Pre-computed analysis of a 5-card hand.
/// Built once and shared by all category detectors.
#[derive(Debug, Clone)]
pub struct HandAnalysis {
    pub sorted_cards: [Card; 5],
    pub values: [u8; 5],
    pub rank_groups: RankGroups,
    pub suit_info: SuitInfo,
    pub straight_info: StraightInfo,
}

impl HandAnalysis {
    pub fn new(cards: &[Card; 5]) -> Self {
        // Stable: equal ranks keep their incoming order.
        let mut sorted_cards = *cards;
        sorted_cards.sort_by_key(|c| c.value());

        let values = sorted_cards.map(|c| c.value());
        let rank_groups = RankGroups::from_cards(&sorted_cards);
        let suit_info = SuitInfo::detect(&sorted_cards);
        let straight_info = StraightInfo::detect(&values);

        Self { sorted_cards, values, rank_groups, suit_info, straight_info }
    }

    pub fn ordinality(&self) -> u64 {
        self.rank_groups.ordinality()
    }

    pub fn build_detail(&self, category: Category) -> Detail {
        let base = category.base(self.straight_info.is_wheel);
        Detail { category, score: HandValue::from_parts(self.ordinality(), base) }
    }
}
