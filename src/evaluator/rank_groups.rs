use crate::cards::Card;

const LOWEST: u8 = 2;
const RANK_SPAN: u32 = 13;

/// Rank frequencies of a hand, indexed by rank value (2-14).
///
/// Example: KKK JJ has counts[13] = 3 and counts[11] = 2, two distinct
/// ranks and a maximum repeat of three.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RankGroups {
    counts: [u8; 15],
}

impl RankGroups {
    pub fn from_cards(cards: &[Card]) -> Self {
        let mut counts = [0u8; 15];
        for c in cards {
            counts[c.value() as usize] += 1;
        }
        Self { counts }
    }

    pub fn count(&self, value: u8) -> u8 {
        self.counts.get(value as usize).copied().unwrap_or(0)
    }

    /// Number of different ranks present.
    pub fn distinct(&self) -> usize {
        self.counts.iter().filter(|&&n| n > 0).count()
    }

    /// Largest number of cards sharing one rank.
    pub fn max_repeat(&self) -> u8 {
        self.counts.iter().copied().max().unwrap_or(0)
    }

    /// Cardinality shape test: `distinct` ranks with the biggest group of `max`.
    pub fn has_shape(&self, distinct: usize, max: u8) -> bool {
        self.distinct() == distinct && self.max_repeat() == max
    }

    /// Positions in `cards` whose rank occurs exactly `n` times.
    pub fn positions_with_count(&self, cards: &[Card], n: u8) -> Vec<usize> {
        cards
            .iter()
            .enumerate()
            .filter(|(_, c)| self.count(c.value()) == n)
            .map(|(i, _)| i)
            .collect()
    }

    /// Presence bit per rank in the low 13 bits, then one 13-bit block each
    /// for ranks seen twice, three and four times.
    pub fn ordinality(&self) -> u64 {
        let mut bits = 0u64;
        for value in LOWEST..=14 {
            let n = self.counts[value as usize];
            if n == 0 {
                continue;
            }
            let offset = u32::from(value - LOWEST);
            bits |= 1 << offset;
            if n > 1 {
                bits |= 1 << (RANK_SPAN + (u32::from(n) - 2) * RANK_SPAN + offset);
            }
        }
        bits
    }
}
