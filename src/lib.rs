//! tdb-poker: Triple Double Bonus video poker core
//!
//! Goals:
//! - Deterministic, total hand classification into the Triple Double Bonus categories
//! - Injectable randomness for dealing, so rounds replay exactly under a seed
//! - No panics for invalid input; use `Result` for recoverable errors
//!
//! ## Quick start: classify and pay a hand
//! ```
//! use tdb_poker::evaluator::{classify_hand, Category};
//! use tdb_poker::hand::Hand;
//! use tdb_poker::paytable::Paytable;
//!
//! let hand: Hand = "Th Jh Qh Kh Ah".parse().unwrap();
//! let category = classify_hand(&hand);
//! assert_eq!(category, Category::RoyalFlush);
//! assert_eq!(Paytable::default().payout(category, 5), 800);
//! ```
//!
//! ## A full round
//! ```
//! use tdb_poker::engine::Machine;
//! use tdb_poker::game::{parse_holds, GameState};
//!
//! let mut machine = Machine::seeded(7);
//! let mut state = GameState::deal(&mut machine).unwrap();
//! state.set_held(parse_holds("12").unwrap());
//! state.redraw(&mut machine).unwrap();
//! let settlement = state.finish(&machine, 5);
//! assert!(settlement.winnings == -5 || settlement.winnings >= 5);
//! ```

pub mod cards;
pub mod deck;
pub mod engine;
pub mod evaluator;
pub mod game;
pub mod hand;
pub mod paytable;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
