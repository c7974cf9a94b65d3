use crate::cards::{Card, Orientation, Rank, Suit};
use crate::collection::CardCollection;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// A card supply. Built full (52 cards) for play, or empty to act as a
/// discard pile.
#[derive(Debug, Clone, Default)]
pub struct Deck {
    cards: CardCollection,
}

impl Deck {
    pub const FULL_SIZE: usize = 52;

    /// ```
    /// use draw_poker::deck::Deck;
    ///
    /// let deck = Deck::standard();
    /// assert_eq!(deck.len(), 52);
    /// ```
    pub fn standard() -> Self {
        let mut deck = Self::empty();
        deck.reset();
        deck
    }

    /// An empty deck, used as the discard pile.
    pub fn empty() -> Self {
        Self { cards: CardCollection::with_capacity(Self::FULL_SIZE) }
    }

    /// Regenerate the full suits x ranks product, dropping whatever was held.
    pub fn reset(&mut self) {
        self.cards.clear();
        for &s in &Suit::ALL {
            for &r in &Rank::ALL {
                self.cards.add(Card::new(r, s));
            }
        }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn cards(&self) -> &[Card] {
        self.cards.as_slice()
    }

    /// Shuffle using a seeded RNG for reproducibility.
    pub fn shuffle_seeded(&mut self, seed: u64) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        self.shuffle_with(&mut rng);
    }

    /// Fisher-Yates shuffle over the whole deck with the provided RNG.
    pub fn shuffle_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        if self.cards.is_empty() {
            tracing::warn!("cannot shuffle an empty deck");
            return;
        }
        self.cards.as_mut_slice().shuffle(rng);
        tracing::trace!(cards = self.cards.len(), "deck shuffled");
    }

    /// Take the top (last) card, turned to `orientation`. `None` when empty.
    pub fn deal(&mut self, orientation: Orientation) -> Option<Card> {
        let mut card = self.cards.pop()?;
        card.turn_to(orientation);
        tracing::trace!(card = %card, "dealt card from deck");
        Some(card)
    }

    /// Put a card on top of the deck.
    pub fn add(&mut self, card: Card) {
        self.cards.add(card);
    }

    /// Move every card held by `other` onto this deck, leaving `other` empty.
    pub fn absorb(&mut self, other: &mut Deck) -> usize {
        let moved = other.cards.take_all();
        let n = moved.len();
        self.cards.extend(moved);
        n
    }
}
