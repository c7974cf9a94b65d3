//! draw-poker: five-card draw hand scoring and round orchestration
//!
//! Goals:
//! - Exact, total-ordered scoring of 5-card hands packed into a single `u64`
//! - A synchronous round engine (ante, deal, bet, draw, bet, showdown)
//! - No panics for invalid input: bad hands are a category, not an error
//! - Reproducible play when seeded
//!
//! ## Quick start: score and compare hands
//! ```
//! use draw_poker::evaluator::{Category, Comparison};
//! use draw_poker::hand::{Hand, PokerHand};
//!
//! let wheel: PokerHand = "AS 2D 3H 4C 5H".parse().unwrap();
//! let six_high: PokerHand = "2D 3H 4S 5C 6H".parse().unwrap();
//! assert_eq!(wheel.category(), Category::Straight);
//! assert_eq!(wheel.compare(&six_high), Comparison::Less);
//! ```
//!
//! ## Playing a hand
//! Seat two to seven players on a [`engine::PokerEngine`], then call
//! `start_game` and `end_game`. Library code only emits `tracing` events;
//! install a subscriber in the host to see them. A demo is available with:
//! ```sh
//! cargo run --bin draw-poker -- --players 4 --seed 7
//! ```

pub mod agents;
pub mod cards;
pub mod collection;
pub mod deck;
pub mod engine;
pub mod evaluator;
pub mod hand;
pub mod player;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
