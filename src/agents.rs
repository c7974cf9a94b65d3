//! Agents: pluggable decision makers behind each seat.
//!
//! The engine never asks *how* a decision is made. Each seat owns a
//! `PlayerAgent`; when it is that seat's turn the engine hands the agent a
//! read-only [`DecisionContext`] and takes back an amount (betting) or a list
//! of card positions (drawing). Humans are modelled as an agent fed with
//! queued [`Intent`]s by whatever frontend is attached; bots compute their
//! decisions from the hand and a seeded RNG.

use crate::hand::PokerHand;
use std::collections::VecDeque;

/// Kinds of agents attached to seats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum AgentKind {
    Human,
    Bot,
}

impl AgentKind {
    /// Prefix used in player names, e.g. `"AI Player (2)"`.
    pub fn label(self) -> &'static str {
        match self {
            AgentKind::Human => "Human",
            AgentKind::Bot => "AI",
        }
    }
}

/// Everything an agent may look at when deciding.
#[derive(Debug, Clone, Copy)]
pub struct DecisionContext<'a> {
    /// Minimum bet to stay in at full stake.
    pub blind: f64,
    pub pot: f64,
    /// The deciding player's own balance.
    pub balance: f64,
    /// The deciding player's own hand, sorted by rank.
    pub hand: &'a PokerHand,
}

/// Seat-level intents, typically produced by a UI for a human player.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum Intent {
    Fold,
    /// Pay exactly the blind.
    Call,
    /// Pay the given amount, never less than the blind.
    Raise(f64),
    AllIn,
    /// Replace the cards at these positions.
    Discard(Vec<usize>),
    /// Keep every card.
    StandPat,
}

/// A seat controller that decides for a player when it is their turn.
pub trait PlayerAgent {
    /// Amount to put in the pot. Zero folds; less than the blind is all-in.
    fn bet(&mut self, ctx: &DecisionContext<'_>) -> f64;
    /// Positions (0-based, into the sorted hand) of cards to replace.
    fn discard(&mut self, ctx: &DecisionContext<'_>) -> Vec<usize>;
    fn kind(&self) -> AgentKind {
        AgentKind::Human
    }
    /// Optionally receive an intent; default is to ignore and return false.
    fn receive(&mut self, _intent: Intent) -> bool {
        false
    }
}

mod bots;

pub use bots::{BotAgent, BotProfile, Strategy, StrategyParseError};

/// Executes intents queued by a frontend, in order.
///
/// With nothing queued the agent folds when asked to bet and stands pat when
/// asked to draw.
///
/// ```
/// use draw_poker::agents::{DecisionContext, HumanAgent, Intent, PlayerAgent};
/// use draw_poker::hand::PokerHand;
///
/// let hand = PokerHand::from_notation("2C 5D 9H JS KC");
/// let ctx = DecisionContext { blind: 10.0, pot: 30.0, balance: 90.0, hand: &hand };
///
/// let mut human = HumanAgent::new();
/// human.receive(Intent::Raise(25.0));
/// assert_eq!(human.bet(&ctx), 25.0);
/// assert_eq!(human.bet(&ctx), 0.0);
/// ```
#[derive(Debug, Default)]
pub struct HumanAgent {
    bets: VecDeque<Intent>,
    draws: VecDeque<Vec<usize>>,
}

impl HumanAgent {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an agent with a script of intents already queued.
    pub fn scripted<I: IntoIterator<Item = Intent>>(intents: I) -> Self {
        let mut agent = Self::new();
        for intent in intents {
            agent.receive(intent);
        }
        agent
    }

    pub fn pending_bets(&self) -> usize {
        self.bets.len()
    }

    pub fn pending_draws(&self) -> usize {
        self.draws.len()
    }
}

impl PlayerAgent for HumanAgent {
    fn bet(&mut self, ctx: &DecisionContext<'_>) -> f64 {
        let intent = self.bets.pop_front();
        if ctx.balance < ctx.blind {
            // Only all-in or fold remain possible.
            return match intent {
                Some(Intent::Fold) | None => 0.0,
                Some(_) => ctx.balance,
            };
        }
        match intent {
            Some(Intent::Call) => ctx.blind,
            Some(Intent::Raise(amount)) => amount.max(ctx.blind).min(ctx.balance),
            Some(Intent::AllIn) => ctx.balance,
            _ => 0.0,
        }
    }

    fn discard(&mut self, _ctx: &DecisionContext<'_>) -> Vec<usize> {
        self.draws.pop_front().unwrap_or_default()
    }

    fn kind(&self) -> AgentKind {
        AgentKind::Human
    }

    fn receive(&mut self, intent: Intent) -> bool {
        match intent {
            Intent::Discard(indices) => self.draws.push_back(indices),
            Intent::StandPat => self.draws.push_back(Vec::new()),
            other => self.bets.push_back(other),
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx(hand: &PokerHand, blind: f64, balance: f64) -> DecisionContext<'_> {
        DecisionContext { blind, pot: 0.0, balance, hand }
    }

    #[test]
    fn human_resolves_intents_in_order() {
        let hand = PokerHand::from_notation("2C 5D 9H JS KC");
        let mut h = HumanAgent::scripted([Intent::Call, Intent::Raise(5.0), Intent::AllIn, Intent::Fold]);
        assert_eq!(h.pending_bets(), 4);
        assert_eq!(h.bet(&ctx(&hand, 10.0, 50.0)), 10.0);
        // A raise below the blind is lifted to the blind.
        assert_eq!(h.bet(&ctx(&hand, 10.0, 50.0)), 10.0);
        assert_eq!(h.bet(&ctx(&hand, 10.0, 50.0)), 50.0);
        assert_eq!(h.bet(&ctx(&hand, 10.0, 50.0)), 0.0);
        assert_eq!(h.bet(&ctx(&hand, 10.0, 50.0)), 0.0);
    }

    #[test]
    fn raise_is_capped_at_balance() {
        let hand = PokerHand::new();
        let mut h = HumanAgent::scripted([Intent::Raise(500.0)]);
        assert_eq!(h.bet(&ctx(&hand, 10.0, 40.0)), 40.0);
    }

    #[test]
    fn short_stack_can_only_go_all_in() {
        let hand = PokerHand::new();
        let mut h = HumanAgent::scripted([Intent::Call, Intent::Fold]);
        assert_eq!(h.bet(&ctx(&hand, 20.0, 7.5)), 7.5);
        assert_eq!(h.bet(&ctx(&hand, 20.0, 7.5)), 0.0);
    }

    #[test]
    fn discards_are_queued_separately() {
        let hand = PokerHand::new();
        let mut h = HumanAgent::new();
        assert!(h.receive(Intent::Discard(vec![0, 3])));
        assert!(h.receive(Intent::Call));
        assert!(h.receive(Intent::StandPat));
        assert_eq!(h.pending_draws(), 2);
        assert_eq!(h.discard(&ctx(&hand, 0.0, 0.0)), vec![0, 3]);
        assert!(h.discard(&ctx(&hand, 0.0, 0.0)).is_empty());
        assert!(h.discard(&ctx(&hand, 0.0, 0.0)).is_empty());
        assert_eq!(h.pending_bets(), 1);
    }

    #[test]
    fn kind_labels() {
        assert_eq!(HumanAgent::new().kind().label(), "Human");
        assert_eq!(AgentKind::Bot.label(), "AI");
    }
}
