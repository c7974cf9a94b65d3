//! Round orchestration for a single hand of five-card draw.
//!
//! The engine owns the deck, the discard pile and the seats, and walks the
//! hand through its phases:
//!
//! ```text
//! Seating -> (ante) -> Dealing -> (deal) -> Betting [round 0]
//!   -> Drawing -> (draw) -> RoundOver -> (advance) -> Betting [round 1]
//!   -> Showdown -> (showdown) -> Finished
//! ```
//!
//! Each step is a public method that checks the current [`Phase`], so a
//! frontend can drive the hand one step at a time; [`PokerEngine::start_game`]
//! and [`PokerEngine::end_game`] run the whole sequence. Everything is
//! synchronous and single-threaded: agents are called in seat order and the
//! engine is not meant to be shared across threads while a hand is running.

use crate::agents::{AgentKind, BotAgent, BotProfile, HumanAgent, Intent, PlayerAgent};
use crate::cards::Orientation;
use crate::deck::Deck;
use crate::evaluator::HAND_SIZE;
use crate::hand::Hand;
use crate::player::{Outcome, Player, PlayerStatus};
use core::fmt;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Largest table the recycling policy can always serve.
pub const MAX_PLAYERS: usize = 7;
pub const MIN_PLAYERS: usize = 2;

pub const DEFAULT_ANTE: f64 = 10.0;
pub const DEFAULT_STARTING_BALANCE: f64 = 100.0;
pub const DEFAULT_RECYCLE_THRESHOLD: usize = 5;

/// Render an amount the way the table shows money, e.g. `"$10.00"`.
///
/// ```
/// assert_eq!(draw_poker::engine::format_currency(10.0), "$10.00");
/// assert_eq!(draw_poker::engine::format_currency(2.5), "$2.50");
/// ```
pub fn format_currency(amount: f64) -> String {
    format!("${amount:.2}")
}

/// Engine settings.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub struct EngineConfig {
    pub ante: f64,
    /// Balance given to players seated through `seat_bot` / `seat_human`.
    pub starting_balance: f64,
    /// Recycle the discard pile once the deck is down to this many cards.
    pub recycle_threshold: usize,
    /// Seed for shuffling and for bots seated without their own seed.
    pub seed: Option<u64>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            ante: DEFAULT_ANTE,
            starting_balance: DEFAULT_STARTING_BALANCE,
            recycle_threshold: DEFAULT_RECYCLE_THRESHOLD,
            seed: None,
        }
    }
}

impl EngineConfig {
    pub fn with_ante(mut self, ante: f64) -> Self {
        self.ante = ante;
        self
    }

    pub fn with_starting_balance(mut self, balance: f64) -> Self {
        self.starting_balance = balance;
        self
    }

    pub fn with_recycle_threshold(mut self, threshold: usize) -> Self {
        self.recycle_threshold = threshold;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

/// The next step the engine expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Phase {
    Seating,
    Dealing,
    Betting,
    Drawing,
    RoundOver,
    Showdown,
    Finished,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Phase::Seating => "seating",
            Phase::Dealing => "dealing",
            Phase::Betting => "betting",
            Phase::Drawing => "drawing",
            Phase::RoundOver => "round over",
            Phase::Showdown => "showdown",
            Phase::Finished => "finished",
        };
        f.write_str(s)
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum EngineError {
    #[error("table is full ({max} seats)")]
    TableFull { max: usize },
    #[error("need at least {min} players, have {got}")]
    NotEnoughPlayers { min: usize, got: usize },
    #[error("expected phase {expected}, engine is in {actual}")]
    OutOfPhase { expected: Phase, actual: Phase },
    #[error("deck ran out of cards")]
    DeckExhausted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum HandHistoryVerb {
    Ante,
    AnteFailed,
    Fold,
    AllIn,
    Call,
    Raise,
    Draw,
    StandPat,
    Win,
    Split,
}

impl HandHistoryVerb {
    pub fn label(self) -> &'static str {
        match self {
            HandHistoryVerb::Ante => "Ante",
            HandHistoryVerb::AnteFailed => "Ante failed",
            HandHistoryVerb::Fold => "Fold",
            HandHistoryVerb::AllIn => "All in",
            HandHistoryVerb::Call => "Call",
            HandHistoryVerb::Raise => "Raise",
            HandHistoryVerb::Draw => "Draw",
            HandHistoryVerb::StandPat => "Stand pat",
            HandHistoryVerb::Win => "Win",
            HandHistoryVerb::Split => "Split",
        }
    }
}

/// One recorded action. `amount` is money for bets and wins, and the number
/// of cards exchanged for draws.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub struct HandHistoryEntry {
    pub seat: usize,
    pub verb: HandHistoryVerb,
    pub amount: Option<f64>,
    pub round: u8,
}

/// Result of the showdown.
#[derive(Debug, Clone)]
pub struct Showdown {
    /// Every seat in seat order, balances after payout.
    pub outcomes: Vec<Outcome>,
    /// Seats sharing the best valid hand among players still in.
    pub winners: Vec<usize>,
    pub pot: f64,
    /// What each winner received; zero when nobody could be paid.
    pub share: f64,
}

impl Showdown {
    pub fn is_split(&self) -> bool {
        self.winners.len() > 1
    }
}

/// A single hand of five-card draw for up to [`MAX_PLAYERS`] seats.
///
/// ```
/// use draw_poker::agents::{BotProfile, Strategy};
/// use draw_poker::engine::{EngineConfig, Phase, PokerEngine};
///
/// let mut engine = PokerEngine::new(EngineConfig::default().with_seed(7));
/// engine.seat_bot(BotProfile::for_strategy(Strategy::Balanced)).unwrap();
/// engine.seat_bot(BotProfile::for_strategy(Strategy::Aggressive)).unwrap();
/// engine.start_game().unwrap();
/// let showdown = engine.end_game().unwrap();
///
/// assert_eq!(engine.phase(), Phase::Finished);
/// assert_eq!(showdown.outcomes.len(), 2);
/// assert_eq!(engine.pot(), if showdown.winners.is_empty() { showdown.pot } else { 0.0 });
/// ```
pub struct PokerEngine {
    config: EngineConfig,
    players: Vec<Player>,
    deck: Deck,
    discards: Deck,
    pot: f64,
    blind: f64,
    current_round: u8,
    current_player: Option<usize>,
    phase: Phase,
    rng: ChaCha8Rng,
    history: Vec<HandHistoryEntry>,
}

impl fmt::Debug for PokerEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PokerEngine")
            .field("phase", &self.phase)
            .field("round", &self.current_round)
            .field("pot", &self.pot)
            .field("blind", &self.blind)
            .field("players", &self.players)
            .field("deck", &self.deck.len())
            .field("discards", &self.discards.len())
            .finish()
    }
}

impl Default for PokerEngine {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

impl PokerEngine {
    pub fn new(config: EngineConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::seed_from_u64(rand::rng().random()),
        };
        Self {
            config,
            players: Vec::with_capacity(MAX_PLAYERS),
            deck: Deck::standard(),
            discards: Deck::empty(),
            pot: 0.0,
            blind: 0.0,
            current_round: 0,
            current_player: None,
            phase: Phase::Seating,
            rng,
            history: Vec::new(),
        }
    }

    /// Use a specific deck instead of a fresh 52-card one. Only while seating.
    pub fn with_deck(mut self, deck: Deck) -> Self {
        self.deck = deck;
        self
    }

    // ------------------------------------------------------------------
    // Seating
    // ------------------------------------------------------------------

    /// Seat a player controlled by `agent`. Returns the seat index.
    pub fn add_player(&mut self, agent: Box<dyn PlayerAgent>, balance: f64) -> Result<usize, EngineError> {
        self.expect_phase(Phase::Seating)?;
        if self.players.len() >= MAX_PLAYERS {
            return Err(EngineError::TableFull { max: MAX_PLAYERS });
        }
        let seat = self.players.len();
        let player = Player::new(seat + 1, balance, agent);
        tracing::debug!(seat, name = player.name(), balance = %format_currency(balance), "player seated");
        self.players.push(player);
        Ok(seat)
    }

    /// Seat a bot with the configured starting balance. A profile without a
    /// seed draws one from the engine, so a seeded engine replays exactly.
    pub fn seat_bot(&mut self, profile: BotProfile) -> Result<usize, EngineError> {
        let profile = match profile.rng_seed {
            Some(_) => profile,
            None => {
                let seed = self.rng.random();
                profile.with_seed(seed)
            }
        };
        let balance = self.config.starting_balance;
        self.add_player(Box::new(BotAgent::new(profile)), balance)
    }

    pub fn seat_human(&mut self, agent: HumanAgent) -> Result<usize, EngineError> {
        let balance = self.config.starting_balance;
        self.add_player(Box::new(agent), balance)
    }

    /// Forward an intent to the agent at `seat`. False if there is no such
    /// seat or the agent ignores intents.
    pub fn receive(&mut self, seat: usize, intent: Intent) -> bool {
        self.players.get_mut(seat).map(|p| p.receive_intent(intent)).unwrap_or(false)
    }

    // ------------------------------------------------------------------
    // Queries
    // ------------------------------------------------------------------

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn ante(&self) -> f64 {
        self.config.ante
    }

    pub fn set_ante(&mut self, ante: f64) {
        tracing::debug!(ante = %format_currency(ante), "ante set");
        self.config.ante = ante;
    }

    pub fn pot(&self) -> f64 {
        self.pot
    }

    pub fn blind(&self) -> f64 {
        self.blind
    }

    pub fn current_round(&self) -> u8 {
        self.current_round
    }

    /// Seat currently deciding, if a betting or drawing round is running.
    pub fn current_player(&self) -> Option<usize> {
        self.current_player
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn player(&self, seat: usize) -> Option<&Player> {
        self.players.get(seat)
    }

    pub fn players_with_status(&self, status: PlayerStatus) -> impl Iterator<Item = usize> + '_ {
        self.players.iter().enumerate().filter(move |(_, p)| p.status() == status).map(|(i, _)| i)
    }

    pub fn deck_len(&self) -> usize {
        self.deck.len()
    }

    pub fn discard_len(&self) -> usize {
        self.discards.len()
    }

    pub fn history(&self) -> &[HandHistoryEntry] {
        &self.history
    }

    pub fn history_recent(&self, n: usize) -> &[HandHistoryEntry] {
        let start = self.history.len().saturating_sub(n);
        &self.history[start..]
    }

    // ------------------------------------------------------------------
    // Whole-hand drivers
    // ------------------------------------------------------------------

    /// Run ante, deal, first betting round, draw, and second betting round.
    pub fn start_game(&mut self) -> Result<(), EngineError> {
        self.expect_phase(Phase::Seating)?;
        if self.players.len() < MIN_PLAYERS {
            return Err(EngineError::NotEnoughPlayers { min: MIN_PLAYERS, got: self.players.len() });
        }
        tracing::info!(players = self.players.len(), ante = %format_currency(self.config.ante), "starting game");
        self.ante_up()?;
        self.deal_cards()?;
        self.betting_round()?;
        self.drawing_round()?;
        self.advance_round()?;
        self.betting_round()?;
        Ok(())
    }

    /// Settle the hand. The engine is finished afterwards.
    pub fn end_game(&mut self) -> Result<Showdown, EngineError> {
        self.showdown()
    }

    // ------------------------------------------------------------------
    // Phase steps
    // ------------------------------------------------------------------

    /// Collect the ante from every seat. A player who cannot pay is folded
    /// and contributes nothing.
    pub fn ante_up(&mut self) -> Result<(), EngineError> {
        self.expect_phase(Phase::Seating)?;
        let ante = self.config.ante;
        for seat in 0..self.players.len() {
            let player = &mut self.players[seat];
            if player.pay(ante) {
                self.pot += ante;
                tracing::debug!(player = player.name(), ante = %format_currency(ante), "ante paid");
                self.record(seat, HandHistoryVerb::Ante, Some(ante));
            } else {
                player.set_status(PlayerStatus::Folded);
                tracing::debug!(player = player.name(), "folded, cannot cover the ante");
                self.record(seat, HandHistoryVerb::AnteFailed, None);
            }
        }
        tracing::debug!(
            paid = self.players_with_status(PlayerStatus::Waiting).count(),
            pot = %format_currency(self.pot),
            "ante collected"
        );
        self.phase = Phase::Dealing;
        Ok(())
    }

    /// Shuffle and deal five cards to every waiting player, one card per
    /// player per pass. Humans see their cards face up, bots face down.
    pub fn deal_cards(&mut self) -> Result<(), EngineError> {
        self.expect_phase(Phase::Dealing)?;
        let waiting: Vec<usize> = self.players_with_status(PlayerStatus::Waiting).collect();
        if self.deck.len() < waiting.len() * HAND_SIZE {
            return Err(EngineError::DeckExhausted);
        }
        tracing::debug!(cards = self.deck.len(), "shuffling deck");
        self.deck.shuffle_with(&mut self.rng);

        for _ in 0..HAND_SIZE {
            for &seat in &waiting {
                let orientation = Self::orientation_for(self.players[seat].kind());
                let card = self.deck.deal(orientation).ok_or(EngineError::DeckExhausted)?;
                self.players[seat].receive([card]);
            }
        }
        for &seat in &waiting {
            self.players[seat].set_status(PlayerStatus::Active);
        }
        tracing::debug!(players = waiting.len(), per_player = HAND_SIZE, "cards dealt");
        self.phase = Phase::Betting;
        Ok(())
    }

    /// Ask each active player, in seat order, for a bet.
    pub fn betting_round(&mut self) -> Result<(), EngineError> {
        self.expect_phase(Phase::Betting)?;
        for seat in 0..self.players.len() {
            if self.players[seat].status() == PlayerStatus::Active {
                self.current_player = Some(seat);
                self.handle_bet(seat);
            }
        }
        self.current_player = None;
        self.phase = if self.current_round == 0 { Phase::Drawing } else { Phase::Showdown };
        Ok(())
    }

    /// Let every player still in exchange cards, in seat order.
    pub fn drawing_round(&mut self) -> Result<(), EngineError> {
        self.expect_phase(Phase::Drawing)?;
        for seat in 0..self.players.len() {
            if !self.players[seat].is_folded() {
                self.current_player = Some(seat);
                self.handle_draw(seat)?;
            }
        }
        self.current_player = None;
        self.phase = Phase::RoundOver;
        Ok(())
    }

    /// Move to the next betting round; everyone still in becomes active.
    pub fn advance_round(&mut self) -> Result<(), EngineError> {
        self.expect_phase(Phase::RoundOver)?;
        for p in self.players.iter_mut().filter(|p| !p.is_folded()) {
            p.set_status(PlayerStatus::Active);
        }
        self.current_round += 1;
        tracing::debug!(round = self.current_round, pot = %format_currency(self.pot), "new round");
        self.phase = Phase::Betting;
        Ok(())
    }

    /// Reveal every hand and pay the pot to the best valid hand(s) among
    /// players who have not folded. Equal best scores split the pot evenly.
    pub fn showdown(&mut self) -> Result<Showdown, EngineError> {
        self.expect_phase(Phase::Showdown)?;
        let contenders: Vec<usize> = (0..self.players.len())
            .filter(|&i| !self.players[i].is_folded() && self.players[i].hand().is_valid())
            .collect();
        let best = contenders.iter().map(|&i| self.players[i].hand().score()).max();
        let winners: Vec<usize> = match best {
            Some(best) => contenders.into_iter().filter(|&i| self.players[i].hand().score() == best).collect(),
            None => Vec::new(),
        };

        let pot = self.pot;
        let mut share = 0.0;
        if winners.is_empty() {
            tracing::warn!(pot = %format_currency(pot), "no player eligible for the pot");
        } else {
            share = pot / winners.len() as f64;
            let verb = if winners.len() > 1 { HandHistoryVerb::Split } else { HandHistoryVerb::Win };
            for &seat in &winners {
                self.players[seat].credit(share);
                self.record(seat, verb, Some(share));
                let p = &self.players[seat];
                tracing::info!(
                    player = p.name(),
                    hand = p.hand().description(),
                    share = %format_currency(share),
                    "pot awarded"
                );
            }
            self.pot = 0.0;
        }

        let outcomes = self.players.iter().map(Player::show).collect();
        self.phase = Phase::Finished;
        Ok(Showdown { outcomes, winners, pot, share })
    }

    // ------------------------------------------------------------------
    // Internals
    // ------------------------------------------------------------------

    fn handle_bet(&mut self, seat: usize) {
        let (blind, pot) = (self.blind, self.pot);
        let player = &mut self.players[seat];
        if player.balance() <= 0.0 {
            // Nothing left to wager; stays in for the showdown.
            player.set_status(PlayerStatus::AllIn);
            self.record(seat, HandHistoryVerb::AllIn, Some(0.0));
            return;
        }
        let result = player.place_bet(blind, pot);
        tracing::debug!(player = player.name(), amount = %format_currency(result.amount), "engine received bet");
        self.pot += result.amount;
        if result.amount > self.blind {
            self.blind = result.amount;
            tracing::debug!(blind = %format_currency(self.blind), "blind raised");
        }
        let verb = match result.status {
            PlayerStatus::Folded => HandHistoryVerb::Fold,
            PlayerStatus::AllIn => HandHistoryVerb::AllIn,
            PlayerStatus::Calling => HandHistoryVerb::Call,
            _ => HandHistoryVerb::Raise,
        };
        let amount = (verb != HandHistoryVerb::Fold).then_some(result.amount);
        self.record(seat, verb, amount);
    }

    fn handle_draw(&mut self, seat: usize) -> Result<(), EngineError> {
        let (blind, pot) = (self.blind, self.pot);
        let indices = self.players[seat].choose_discards(blind, pot);
        if indices.is_empty() {
            tracing::debug!(player = self.players[seat].name(), "stands pat");
            self.record(seat, HandHistoryVerb::StandPat, None);
        } else {
            let n = indices.len();
            if self.deck.len() < n {
                self.recycle_discards();
            }
            if self.deck.len() < n {
                return Err(EngineError::DeckExhausted);
            }
            let orientation = Self::orientation_for(self.players[seat].kind());
            let mut replacements = Vec::with_capacity(n);
            for _ in 0..n {
                replacements.push(self.deck.deal(orientation).ok_or(EngineError::DeckExhausted)?);
            }
            let discarded = self.players[seat].replace(&indices, replacements);
            for mut card in discarded {
                card.turn_to(Orientation::FaceDown);
                self.discards.add(card);
            }
            tracing::debug!(player = self.players[seat].name(), cards = n, "drew cards");
            self.record(seat, HandHistoryVerb::Draw, Some(n as f64));

            if self.deck.len() <= self.config.recycle_threshold {
                tracing::trace!(deck = self.deck.len(), "deck running low");
                self.recycle_discards();
            }
        }
        self.players[seat].set_status(PlayerStatus::Drawing);
        Ok(())
    }

    fn recycle_discards(&mut self) {
        let moved = self.deck.absorb(&mut self.discards);
        tracing::debug!(moved, "recycling discards");
        self.deck.shuffle_with(&mut self.rng);
    }

    fn orientation_for(kind: AgentKind) -> Orientation {
        match kind {
            AgentKind::Bot => Orientation::FaceDown,
            _ => Orientation::FaceUp,
        }
    }

    fn expect_phase(&self, expected: Phase) -> Result<(), EngineError> {
        if self.phase == expected {
            Ok(())
        } else {
            Err(EngineError::OutOfPhase { expected, actual: self.phase })
        }
    }

    fn record(&mut self, seat: usize, verb: HandHistoryVerb, amount: Option<f64>) {
        let entry = HandHistoryEntry { seat, verb, amount, round: self.current_round };
        self.history.push(entry);
    }
}
