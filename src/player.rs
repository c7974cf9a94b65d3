use crate::agents::{AgentKind, DecisionContext, Intent, PlayerAgent};
use crate::cards::Card;
use crate::hand::PokerHand;
use core::fmt;

/// Where a player stands within the current hand.
///
/// `Folded` is absorbing until the hand ends. `Drawing` marks a player who
/// has taken part in the exchange round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[non_exhaustive]
pub enum PlayerStatus {
    #[default]
    Waiting,
    Active,
    AllIn,
    Calling,
    Raising,
    Drawing,
    Folded,
}

impl PlayerStatus {
    pub fn label(self) -> &'static str {
        match self {
            PlayerStatus::Waiting => "Waiting",
            PlayerStatus::Active => "Active",
            PlayerStatus::AllIn => "All in",
            PlayerStatus::Calling => "Calling",
            PlayerStatus::Raising => "Raising",
            PlayerStatus::Drawing => "Drawing",
            PlayerStatus::Folded => "Folded",
        }
    }

    /// Status implied by putting `amount` in against `blind`.
    pub fn for_bet(amount: f64, blind: f64) -> Self {
        if amount <= 0.0 {
            PlayerStatus::Folded
        } else if amount < blind {
            PlayerStatus::AllIn
        } else if amount == blind {
            PlayerStatus::Calling
        } else {
            PlayerStatus::Raising
        }
    }
}

/// What a betting decision amounted to once applied.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BetResult {
    pub amount: f64,
    pub status: PlayerStatus,
}

/// A player's state as revealed at showdown.
#[derive(Debug, Clone)]
pub struct Outcome {
    pub name: String,
    pub balance: f64,
    pub hand: PokerHand,
    pub status: PlayerStatus,
}

/// A seat at the table: identity, money, cards and the agent that decides.
pub struct Player {
    id: usize,
    name: String,
    balance: f64,
    hand: PokerHand,
    status: PlayerStatus,
    agent: Box<dyn PlayerAgent>,
}

impl fmt::Debug for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Player")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("balance", &self.balance)
            .field("hand", &self.hand.to_string())
            .field("status", &self.status)
            .field("kind", &self.agent.kind())
            .finish()
    }
}

impl Player {
    /// `id` is 1-based; the name is derived from it and the agent kind.
    pub fn new(id: usize, balance: f64, agent: Box<dyn PlayerAgent>) -> Self {
        let name = format!("{} Player ({id})", agent.kind().label());
        Self { id, name, balance, hand: PokerHand::new(), status: PlayerStatus::Waiting, agent }
    }

    pub fn id(&self) -> usize {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> AgentKind {
        self.agent.kind()
    }

    pub fn balance(&self) -> f64 {
        self.balance
    }

    pub fn hand(&self) -> &PokerHand {
        &self.hand
    }

    pub fn status(&self) -> PlayerStatus {
        self.status
    }

    pub fn is_folded(&self) -> bool {
        self.status == PlayerStatus::Folded
    }

    pub(crate) fn set_status(&mut self, status: PlayerStatus) {
        self.status = status;
    }

    pub(crate) fn credit(&mut self, amount: f64) {
        self.balance += amount;
    }

    pub(crate) fn receive_intent(&mut self, intent: Intent) -> bool {
        self.agent.receive(intent)
    }

    /// Forced payment such as the ante. Fails, leaving the balance untouched,
    /// when the player cannot cover it.
    pub fn pay(&mut self, amount: f64) -> bool {
        if amount.is_nan() || amount < 0.0 || amount > self.balance {
            tracing::debug!(player = %self.name, amount, balance = self.balance, "insufficient balance");
            return false;
        }
        self.balance -= amount;
        true
    }

    /// Add dealt or replacement cards to the hand. Status is unchanged.
    pub fn receive<I: IntoIterator<Item = Card>>(&mut self, cards: I) {
        self.hand.extend(cards);
        tracing::trace!(player = %self.name, hand = %self.hand, "received cards");
    }

    /// Swap the cards at `indices` for `replacements`; returns what was removed.
    pub fn replace(&mut self, indices: &[usize], replacements: Vec<Card>) -> Vec<Card> {
        let discarded = self.hand.replace(indices, replacements);
        tracing::trace!(player = %self.name, discarded = discarded.len(), hand = %self.hand, "replaced cards");
        discarded
    }

    /// Ask the agent for a bet and apply it.
    ///
    /// The amount is clamped to `[0, balance]` (NaN counts as zero), taken
    /// from the balance, and the status follows from comparing it to `blind`.
    pub fn place_bet(&mut self, blind: f64, pot: f64) -> BetResult {
        let ctx = DecisionContext { blind, pot, balance: self.balance, hand: &self.hand };
        let requested = self.agent.bet(&ctx);
        let amount = if requested.is_nan() { 0.0 } else { requested.clamp(0.0, self.balance.max(0.0)) };
        self.balance -= amount;
        self.status = PlayerStatus::for_bet(amount, blind);
        tracing::debug!(player = %self.name, requested, amount, blind, status = self.status.label(), "bet placed");
        BetResult { amount, status: self.status }
    }

    /// Ask the agent which cards to exchange. Positions past the end of the
    /// hand are dropped; the result is sorted and free of repeats.
    pub fn choose_discards(&mut self, blind: f64, pot: f64) -> Vec<usize> {
        let ctx = DecisionContext { blind, pot, balance: self.balance, hand: &self.hand };
        let mut indices = self.agent.discard(&ctx);
        let len = self.hand.len();
        indices.retain(|&i| i < len);
        indices.sort_unstable();
        indices.dedup();
        indices
    }

    pub fn show(&self) -> Outcome {
        Outcome {
            name: self.name.clone(),
            balance: self.balance,
            hand: self.hand.clone(),
            status: self.status,
        }
    }
}
