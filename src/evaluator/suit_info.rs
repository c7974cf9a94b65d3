use crate::cards::{Card, Suit};

/// Flush information for a hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SuitInfo {
    pub is_flush: bool,
    pub flush_suit: Option<Suit>,
}

impl SuitInfo {
    /// All cards share one suit. An empty slice is never a flush.
    pub fn detect(cards: &[Card]) -> Self {
        let Some(first) = cards.first().map(|c| c.suit()) else {
            return SuitInfo { is_flush: false, flush_suit: None };
        };
        if cards.iter().all(|c| c.suit() == first) {
            SuitInfo { is_flush: true, flush_suit: Some(first) }
        } else {
            SuitInfo { is_flush: false, flush_suit: None }
        }
    }
}
