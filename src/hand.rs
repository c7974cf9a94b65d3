use crate::cards::{parse_token, Card};
use crate::collection::CardCollection;
use crate::evaluator::{self, Category, Comparison, Detail, HandValue, HAND_SIZE};
use std::collections::HashSet;
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum HandError {
    #[error("expected exactly 5 cards, got {0}")]
    CardCount(usize),
    #[error("duplicate card in hand: {0}")]
    DuplicateCard(Card),
}

/// Capability shared by anything that can be scored and compared as a hand.
pub trait Hand {
    fn cards(&self) -> &[Card];

    /// Category and score for the cards currently held.
    fn detail(&self) -> Detail;

    fn is_valid(&self) -> bool {
        self.detail().is_valid()
    }

    fn category(&self) -> Category {
        self.detail().category
    }

    fn score(&self) -> HandValue {
        self.detail().score
    }

    fn compare(&self, other: &dyn Hand) -> Comparison {
        evaluator::compare_hands(self, other)
    }
}

/// A five-card draw hand.
///
/// Cards are kept sorted by rank value (ties keep arrival order) and the
/// [`Detail`] is recomputed after every mutation, so reads are always current.
/// A hand that is not exactly five distinct, well-formed cards is classified
/// as [`Category::Invalid`] with a zero score rather than rejected.
///
/// ```
/// use draw_poker::evaluator::Category;
/// use draw_poker::hand::{Hand, PokerHand};
///
/// let hand = PokerHand::from_notation("KH 7D KS 7C 2H");
/// assert_eq!(hand.category(), Category::TwoPair);
/// assert_eq!(hand.names(false), ["2H", "7D", "7C", "KH", "KS"]);
///
/// let short = PokerHand::from_notation("KH 7D");
/// assert!(!short.is_valid());
/// assert_eq!(short.score().raw(), 0);
/// ```
#[derive(Debug, Clone, Default)]
pub struct PokerHand {
    cards: CardCollection,
    malformed: Vec<String>,
    detail: Detail,
}

impl PokerHand {
    /// An empty hand, waiting to be dealt into.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_cards(cards: Vec<Card>) -> Self {
        let mut hand = Self { cards: CardCollection::from_cards(cards), ..Self::default() };
        hand.recompute();
        hand
    }

    /// Like [`PokerHand::from_cards`] but refuses anything that would not be a
    /// valid hand.
    pub fn try_from_cards(cards: Vec<Card>) -> Result<Self, HandError> {
        if cards.len() != HAND_SIZE {
            return Err(HandError::CardCount(cards.len()));
        }
        let mut seen = HashSet::with_capacity(HAND_SIZE);
        for c in &cards {
            if !seen.insert(*c) {
                return Err(HandError::DuplicateCard(*c));
            }
        }
        Ok(Self::from_cards(cards))
    }

    /// Build a hand from whitespace-separated `<rank><suit>` tokens.
    ///
    /// Repeated tokens are collapsed to their first occurrence before parsing.
    /// Tokens that do not parse are kept aside (see [`PokerHand::malformed`])
    /// and make the hand invalid.
    pub fn from_notation(notation: &str) -> Self {
        let mut seen = HashSet::new();
        let mut hand = Self::default();
        for token in notation.split_whitespace() {
            if !seen.insert(token) {
                tracing::debug!(token, "dropping repeated notation token");
                continue;
            }
            match parse_token(token) {
                Ok(card) => hand.cards.add(card),
                Err(err) => {
                    tracing::debug!(token, %err, "malformed card token");
                    hand.malformed.push(token.to_string());
                }
            }
        }
        hand.recompute();
        hand
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn get(&self, idx: usize) -> Option<&Card> {
        self.cards.get(idx)
    }

    /// Tokens from notation that could not be read as cards.
    pub fn malformed(&self) -> &[String] {
        &self.malformed
    }

    pub fn add(&mut self, card: Card) {
        self.cards.add(card);
        self.recompute();
    }

    pub fn extend<I: IntoIterator<Item = Card>>(&mut self, cards: I) {
        self.cards.extend(cards);
        self.recompute();
    }

    pub fn remove(&mut self, card: &Card) -> bool {
        let removed = self.cards.remove(card);
        if removed {
            self.recompute();
        }
        removed
    }

    pub fn remove_at(&mut self, idx: usize) -> Option<Card> {
        let card = self.cards.remove_at(idx)?;
        self.recompute();
        Some(card)
    }

    /// Swap out the cards at `indices` for `replacements`.
    ///
    /// Indices refer to the current sorted order; out-of-range and repeated
    /// indices are ignored. Removal happens highest index first so earlier
    /// positions stay stable. Returns the removed cards.
    pub fn replace(&mut self, indices: &[usize], replacements: Vec<Card>) -> Vec<Card> {
        let mut order: Vec<usize> = indices.iter().copied().filter(|&i| i < self.cards.len()).collect();
        order.sort_unstable_by(|a, b| b.cmp(a));
        order.dedup();

        let discarded: Vec<Card> = order.into_iter().filter_map(|i| self.cards.remove_at(i)).collect();
        self.cards.extend(replacements);
        self.recompute();
        discarded
    }

    /// Give every card back, leaving the hand empty and invalid.
    pub fn take_all(&mut self) -> Vec<Card> {
        let cards = self.cards.take_all();
        self.malformed.clear();
        self.recompute();
        cards
    }

    pub fn index_by_category(&self, category: Category) -> Vec<usize> {
        evaluator::index_by_category(self.cards.as_slice(), self.detail.category, category)
    }

    pub fn index_by_cardinality(&self, cardinality: u8) -> Vec<usize> {
        evaluator::index_by_cardinality(self.cards.as_slice(), cardinality)
    }

    /// Category name, e.g. `"Full house"`.
    pub fn description(&self) -> &'static str {
        self.detail.category.name()
    }

    pub fn describe(&self, verbose: bool) -> String {
        self.cards.describe(verbose)
    }

    pub fn names(&self, verbose: bool) -> Vec<String> {
        self.cards.names(verbose)
    }

    fn recompute(&mut self) {
        self.cards.as_mut_slice().sort_by_key(|c| c.value());
        self.detail = if self.malformed.is_empty() {
            evaluator::evaluate(self.cards.as_slice())
        } else {
            Detail::INVALID
        };
    }
}

impl Hand for PokerHand {
    fn cards(&self) -> &[Card] {
        self.cards.as_slice()
    }

    fn detail(&self) -> Detail {
        self.detail
    }
}

impl FromStr for PokerHand {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_notation(s))
    }
}

impl fmt::Display for PokerHand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for token in self.cards.iter().map(|c| c.to_string()).chain(self.malformed.iter().cloned()) {
            if !first {
                f.write_str(" ")?;
            }
            f.write_str(&token)?;
            first = false;
        }
        Ok(())
    }
}
