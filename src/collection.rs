use crate::cards::Card;

/// An ordered, growable run of cards.
///
/// Insertion order is kept for display; nothing here enforces uniqueness.
///
/// ```
/// use draw_poker::cards::{Card, Rank, Suit};
/// use draw_poker::collection::CardCollection;
///
/// let mut cc = CardCollection::new();
/// cc.add(Card::new(Rank::Ace, Suit::Spades));
/// cc.add(Card::new(Rank::King, Suit::Diamonds));
/// assert_eq!(cc.describe(false), " | AS | KD | ");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CardCollection {
    cards: Vec<Card>,
}

impl CardCollection {
    pub fn new() -> Self {
        Self { cards: Vec::new() }
    }

    pub fn with_capacity(n: usize) -> Self {
        Self { cards: Vec::with_capacity(n) }
    }

    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    pub fn add(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Remove every card equal to `card`. Returns whether anything was removed.
    pub fn remove(&mut self, card: &Card) -> bool {
        let before = self.cards.len();
        self.cards.retain(|c| c != card);
        self.cards.len() != before
    }

    pub fn remove_at(&mut self, idx: usize) -> Option<Card> {
        if idx < self.cards.len() {
            Some(self.cards.remove(idx))
        } else {
            None
        }
    }

    pub fn get(&self, idx: usize) -> Option<&Card> {
        self.cards.get(idx)
    }

    pub fn contains(&self, card: &Card) -> bool {
        self.cards.contains(card)
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Card> {
        self.cards.iter()
    }

    pub fn as_slice(&self) -> &[Card] {
        &self.cards
    }

    pub(crate) fn as_mut_slice(&mut self) -> &mut [Card] {
        &mut self.cards
    }

    /// Remove and return the last card.
    pub fn pop(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Empty the collection, returning its cards in order.
    pub fn take_all(&mut self) -> Vec<Card> {
        std::mem::take(&mut self.cards)
    }

    pub fn clear(&mut self) {
        self.cards.clear();
    }

    pub fn names(&self, verbose: bool) -> Vec<String> {
        self.cards.iter().map(|c| c.name(verbose)).collect()
    }

    /// Pipe-delimited listing, e.g. `" | AS | KD | "`. Empty when there are no cards.
    pub fn describe(&self, verbose: bool) -> String {
        if self.cards.is_empty() {
            return String::new();
        }
        let mut out = String::from(" | ");
        for c in &self.cards {
            out.push_str(&c.name(verbose));
            out.push_str(" | ");
        }
        out
    }
}

impl From<Vec<Card>> for CardCollection {
    fn from(cards: Vec<Card>) -> Self {
        Self::from_cards(cards)
    }
}

impl Extend<Card> for CardCollection {
    fn extend<I: IntoIterator<Item = Card>>(&mut self, iter: I) {
        self.cards.extend(iter);
    }
}

impl<'a> IntoIterator for &'a CardCollection {
    type Item = &'a Card;
    type IntoIter = std::slice::Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.iter()
    }
}
