use crate::evaluator::Category;
use crate::hand::Hand;
use rand::{rngs::StdRng, Rng, RngCore, SeedableRng};
use std::fmt;
use std::str::FromStr;

use super::{AgentKind, DecisionContext, PlayerAgent};

/// Betting temperament: the share of its balance (in percent) a bot is
/// willing to open with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[non_exhaustive]
pub enum Strategy {
    Conservative,
    #[default]
    Balanced,
    Aggressive,
}

impl Strategy {
    pub const ALL: [Strategy; 3] = [Strategy::Conservative, Strategy::Balanced, Strategy::Aggressive];

    pub const fn percent(self) -> u8 {
        match self {
            Strategy::Conservative => 5,
            Strategy::Balanced => 20,
            Strategy::Aggressive => 45,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Strategy::Conservative => "conservative",
            Strategy::Balanced => "balanced",
            Strategy::Aggressive => "aggressive",
        }
    }

    fn fraction(self) -> f64 {
        f64::from(self.percent()) / 100.0
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown strategy '{0}' (expected conservative, balanced or aggressive)")]
pub struct StrategyParseError(String);

impl FromStr for Strategy {
    type Err = StrategyParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Strategy::ALL
            .into_iter()
            .find(|st| st.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| StrategyParseError(s.to_string()))
    }
}

/// Configuration for a bot's temperament and randomness.
#[derive(Debug, Clone, Default)]
#[non_exhaustive]
pub struct BotProfile {
    pub strategy: Strategy,
    pub rng_seed: Option<u64>,
}

impl BotProfile {
    pub fn for_strategy(strategy: Strategy) -> Self {
        Self { strategy, rng_seed: None }
    }

    /// Set a deterministic RNG seed for reproducible decisions.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng_seed = Some(seed);
        self
    }
}

#[derive(Debug)]
struct BotState {
    rng: StdRng,
}

impl BotState {
    fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(v) => StdRng::seed_from_u64(v),
            None => {
                let mut seed = [0u8; 32];
                rand::rng().fill_bytes(&mut seed);
                StdRng::from_seed(seed)
            }
        };
        Self { rng }
    }
}

/// Computer-controlled seat.
///
/// Opening stake is `max(blind, balance * strategy%)` plus a random bump of
/// up to a quarter of that. A made hand multiplies the stake by its category
/// number (one pair x1 .. straight flush x8); a high card only opens when the
/// stake is small relative to what the strategy would risk.
#[derive(Debug)]
pub struct BotAgent {
    profile: BotProfile,
    state: BotState,
}

impl BotAgent {
    pub fn new(profile: BotProfile) -> Self {
        let state = BotState::new(profile.rng_seed);
        Self { profile, state }
    }

    pub fn profile(&self) -> &BotProfile {
        &self.profile
    }

    pub fn strategy(&self) -> Strategy {
        self.profile.strategy
    }

    fn opening_stake(&mut self, blind: f64, balance: f64) -> f64 {
        let base = blind.max(balance * self.profile.strategy.fraction());
        let variance = (base / 4.0).floor().max(0.0) as u64;
        base + self.state.rng.random_range(0..=variance) as f64
    }
}

impl Default for BotAgent {
    fn default() -> Self {
        Self::new(BotProfile::default())
    }
}

impl PlayerAgent for BotAgent {
    fn bet(&mut self, ctx: &DecisionContext<'_>) -> f64 {
        let category = ctx.hand.detail().category;
        let stake = self.opening_stake(ctx.blind, ctx.balance);
        let amount = match category {
            Category::Invalid => 0.0,
            Category::HighCard => {
                let ceiling = ctx.balance * f64::from(self.profile.strategy.percent())
                    / f64::from(Strategy::Aggressive.percent());
                if stake <= ceiling {
                    stake
                } else {
                    0.0
                }
            }
            made => stake * f64::from(made.ordinal()),
        };
        let amount = amount.min(ctx.balance);
        tracing::debug!(
            strategy = %self.profile.strategy,
            category = %category,
            blind = ctx.blind,
            balance = ctx.balance,
            amount,
            "bot bet"
        );
        amount
    }

    fn discard(&mut self, ctx: &DecisionContext<'_>) -> Vec<usize> {
        let hand = ctx.hand;
        let category = hand.detail().category;
        let discards: Vec<usize> = match category {
            Category::HighCard => (0..hand.len()).collect(),
            Category::OnePair | Category::TwoPair | Category::ThreeOfAKind | Category::FourOfAKind => {
                let keep = hand.index_by_category(category);
                (0..hand.len()).filter(|i| !keep.contains(i)).collect()
            }
            _ => Vec::new(),
        };
        tracing::debug!(category = %category, discards = discards.len(), "bot draw");
        discards
    }

    fn kind(&self) -> AgentKind {
        AgentKind::Bot
    }
}
