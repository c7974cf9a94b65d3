pub(crate) mod detector;
pub(crate) mod hand_analysis;
pub(crate) mod rank_groups;
pub(crate) mod straight_info;
pub(crate) mod suit_info;

use crate::cards::Card;
use core::cmp::Ordering;
use core::fmt;
use std::collections::HashSet;

/// Number of cards in a scorable hand.
pub const HAND_SIZE: usize = 5;

/// Bit width reserved for ordinality; the category base sits above it.
pub const ORDINALITY_BITS: u32 = 52;

const RANK_SPAN: u32 = 13;

/// Poker hand category from weakest to strongest, plus `Invalid`.
///
/// `Invalid` is not a rank: it never compares above or below anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
#[repr(u8)]
pub enum Category {
    HighCard = 0,
    OnePair = 1,
    TwoPair = 2,
    ThreeOfAKind = 3,
    Straight = 4,
    Flush = 5,
    FullHouse = 6,
    FourOfAKind = 7,
    StraightFlush = 8,
    Invalid = 9,
}

impl Category {
    /// Every playable category, weakest first.
    pub const RANKED: [Category; 9] = [
        Category::HighCard,
        Category::OnePair,
        Category::TwoPair,
        Category::ThreeOfAKind,
        Category::Straight,
        Category::Flush,
        Category::FullHouse,
        Category::FourOfAKind,
        Category::StraightFlush,
    ];

    pub const fn ordinal(self) -> u8 {
        self as u8
    }

    pub const fn name(self) -> &'static str {
        match self {
            Category::HighCard => "High card",
            Category::OnePair => "One pair",
            Category::TwoPair => "Two pair",
            Category::ThreeOfAKind => "Three of a kind",
            Category::Straight => "Straight",
            Category::Flush => "Flush",
            Category::FullHouse => "Full house",
            Category::FourOfAKind => "Four of a kind",
            Category::StraightFlush => "Straight flush",
            Category::Invalid => "Invalid",
        }
    }

    /// Value placed above the ordinality bits.
    ///
    /// Straights and straight flushes get an extra slot each so a wheel can
    /// sit one below its category without colliding with the category under it.
    pub const fn base(self, wheel: bool) -> u64 {
        let mut base = self as u64;
        if self.ordinal() >= Category::Straight.ordinal() {
            base += 1;
        }
        if self.ordinal() >= Category::StraightFlush.ordinal() {
            base += 1;
        }
        if wheel && matches!(self, Category::Straight | Category::StraightFlush) {
            base -= 1;
        }
        base
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Compact, comparable hand strength. Higher is better; zero means invalid.
///
/// Layout: bits 0..13 mark which ranks are present, bits 13..26 mark paired
/// ranks, 26..39 tripled ranks, 39..52 quadrupled ranks, and the category
/// base occupies bits 52 and up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct HandValue(u64);

impl HandValue {
    pub const ZERO: HandValue = HandValue(0);

    pub const fn raw(self) -> u64 {
        self.0
    }

    pub const fn from_raw(raw: u64) -> Self {
        HandValue(raw)
    }

    /// Combine an ordinality pattern with a category base.
    pub const fn from_parts(ordinality: u64, category_base: u64) -> Self {
        HandValue(ordinality | (category_base << ORDINALITY_BITS))
    }

    pub const fn ordinality(self) -> u64 {
        self.0 & ((1u64 << ORDINALITY_BITS) - 1)
    }

    pub const fn category_base(self) -> u64 {
        self.0 >> ORDINALITY_BITS
    }

    /// The 64-bit binary form split into its fields:
    /// category | quads | trips | pairs | presence.
    ///
    /// ```
    /// use draw_poker::evaluator::HandValue;
    ///
    /// let bits = HandValue::from_raw(1).grouped_bits();
    /// assert!(bits.ends_with(" 0000000000001"));
    /// assert_eq!(bits.split(' ').count(), 5);
    /// ```
    pub fn grouped_bits(self) -> String {
        let bin = format!("{:064b}", self.0);
        let cut = (64 - ORDINALITY_BITS) as usize;
        let mut out = String::with_capacity(68);
        out.push_str(&bin[..cut]);
        for block in bin[cut..].as_bytes().chunks(RANK_SPAN as usize) {
            out.push(' ');
            out.push_str(std::str::from_utf8(block).unwrap_or_default());
        }
        out
    }
}

impl fmt::Display for HandValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Category and score of a hand, recomputed whenever the hand changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Detail {
    pub category: Category,
    pub score: HandValue,
}

impl Detail {
    pub const INVALID: Detail = Detail { category: Category::Invalid, score: HandValue::ZERO };

    pub const fn is_valid(&self) -> bool {
        !matches!(self.category, Category::Invalid)
    }
}

impl Default for Detail {
    fn default() -> Self {
        Detail::INVALID
    }
}

/// Result of comparing two hands from the first hand's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Comparison {
    Less,
    Equal,
    Greater,
    /// At least one side is not a valid hand; no ordering exists.
    Invalid,
}

impl Comparison {
    pub const fn ordering(self) -> Option<Ordering> {
        match self {
            Comparison::Less => Some(Ordering::Less),
            Comparison::Equal => Some(Ordering::Equal),
            Comparison::Greater => Some(Ordering::Greater),
            Comparison::Invalid => None,
        }
    }
}

impl From<Ordering> for Comparison {
    fn from(o: Ordering) -> Self {
        match o {
            Ordering::Less => Comparison::Less,
            Ordering::Equal => Comparison::Equal,
            Ordering::Greater => Comparison::Greater,
        }
    }
}

/// True for exactly five cards with no repeated (rank, suit) pair.
pub fn is_valid_hand(cards: &[Card]) -> bool {
    if cards.len() != HAND_SIZE {
        return false;
    }
    let set: HashSet<Card> = cards.iter().copied().collect();
    set.len() == HAND_SIZE
}

/// Classify and score a hand. Anything that is not a valid five-card hand
/// yields [`Detail::INVALID`].
///
/// ```
/// use draw_poker::cards::parse_token;
/// use draw_poker::evaluator::{evaluate, Category};
///
/// let cards: Vec<_> = ["AS", "KS", "QS", "JS", "TS"]
///     .iter()
///     .map(|t| parse_token(t).unwrap())
///     .collect();
/// assert_eq!(evaluate(&cards).category, Category::StraightFlush);
/// ```
pub fn evaluate(cards: &[Card]) -> Detail {
    use detector::DETECTORS;
    use hand_analysis::HandAnalysis;

    if !is_valid_hand(cards) {
        tracing::trace!(cards = cards.len(), "invalid hand detected");
        return Detail::INVALID;
    }
    let five = [cards[0], cards[1], cards[2], cards[3], cards[4]];
    let analysis = HandAnalysis::new(&five);

    for detector in DETECTORS.iter() {
        if detector.detect(&analysis) {
            let detail = analysis.build_detail(detector.category());
            tracing::trace!(
                category = %detail.category,
                ordinality = analysis.ordinality(),
                score = detail.score.raw(),
                "hand scored"
            );
            return detail;
        }
    }

    // Unreachable: the high-card detector always matches.
    Detail::INVALID
}

/// Compare two details. Invalid on either side gives [`Comparison::Invalid`].
pub fn compare_details(a: &Detail, b: &Detail) -> Comparison {
    if !a.is_valid() || !b.is_valid() {
        return Comparison::Invalid;
    }
    a.score.cmp(&b.score).into()
}

/// Compare two hands by score.
///
/// ```
/// use draw_poker::evaluator::{compare_hands, Comparison};
/// use draw_poker::hand::PokerHand;
///
/// let royal: PokerHand = "AS KS QS JS TS".parse().unwrap();
/// let quads: PokerHand = "9C 9D 9H 9S AC".parse().unwrap();
/// let short: PokerHand = "9C 9D".parse().unwrap();
/// assert_eq!(compare_hands(&royal, &quads), Comparison::Greater);
/// assert_eq!(compare_hands(&royal, &short), Comparison::Invalid);
/// ```
pub fn compare_hands<A, B>(a: &A, b: &B) -> Comparison
where
    A: crate::hand::Hand + ?Sized,
    B: crate::hand::Hand + ?Sized,
{
    compare_details(&a.detail(), &b.detail())
}

/// Positions of cards whose rank occurs exactly `cardinality` times.
///
/// Positions are grouped by ascending rank; `cards` is expected to be sorted
/// by value, as a [`crate::hand::PokerHand`] always is.
pub fn index_by_cardinality(cards: &[Card], cardinality: u8) -> Vec<usize> {
    rank_groups::RankGroups::from_cards(cards).positions_with_count(cards, cardinality)
}

/// Positions of the cards that make up `category` within a hand currently
/// classified as `current`.
///
/// Pair, two-pair, trips and quads look at rank groupings regardless of the
/// hand's own category (two pair needs exactly four matching positions).
/// Straight, flush, full house and straight flush select all five positions,
/// but only when the hand is that category. High card and invalid select
/// nothing.
pub fn index_by_category(cards: &[Card], current: Category, category: Category) -> Vec<usize> {
    match category {
        Category::OnePair => index_by_cardinality(cards, 2),
        Category::TwoPair => {
            let idx = index_by_cardinality(cards, 2);
            if idx.len() == 4 {
                idx
            } else {
                Vec::new()
            }
        }
        Category::ThreeOfAKind => index_by_cardinality(cards, 3),
        Category::FourOfAKind => index_by_cardinality(cards, 4),
        Category::Straight | Category::Flush | Category::FullHouse | Category::StraightFlush => {
            if current == category {
                (0..cards.len()).collect()
            } else {
                Vec::new()
            }
        }
        Category::HighCard | Category::Invalid => Vec::new(),
    }
}
