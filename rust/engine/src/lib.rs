//! # axiomind-holdem: Single-Hand Rules Engine
//!
//! Drives one hand of no-limit Texas Hold'em from blinds to payout: betting
//! rounds with minimum-raise enforcement, dealing, side-pot construction from
//! unequal all-ins, and showdown payouts. Chip stacks belong to the caller and
//! are mutated in place; the total number of chips on the table never changes.
//!
//! ## Core Modules
//!
//! - [`engine`] - The [`engine::Hand`] state machine and its public operations
//! - [`rules`] - Bet ledger: current-round contributions and bet legality
//! - [`pot`] - Side-pot construction from round contributions
//! - [`showdown`] - Pot awards, remainder handling and payout events
//! - [`evaluator`] - Pluggable hand evaluation with a built-in default
//! - [`cards`] / [`deck`] - Card codes and the per-hand deck
//! - [`game`] - Streets and their order
//! - [`pacing`] - Presentation pause hook
//! - [`config`] - Stakes configuration
//! - [`logger`] - Hand history records in JSONL
//! - [`errors`] - Error types for hand operations
//!
//! ## Quick Start
//!
//! ```rust
//! use axiomind_holdem::config::GameConfig;
//! use axiomind_holdem::deck::Deck;
//! use axiomind_holdem::engine::Hand;
//! use axiomind_holdem::player::{PlayerAction, Seat};
//!
//! let mut seats = vec![Seat::new("a", 100), Seat::new("b", 50), Seat::new("c", 25)];
//! let mut hand = Hand::new(&mut seats, GameConfig::new(5, 10), Deck::from_seed(42)).unwrap();
//! hand.start().unwrap();
//!
//! // everyone is all-in preflop; the board runs out and pots are paid
//! hand.act("a", PlayerAction::Bet(100)).unwrap();
//! hand.act("b", PlayerAction::Bet(45)).unwrap();
//! hand.act("c", PlayerAction::Bet(15)).unwrap();
//! assert!(hand.is_complete());
//! assert_eq!(hand.total_chips(), 175);
//! ```

pub mod cards;
pub mod config;
pub mod deck;
pub mod engine;
pub mod errors;
pub mod evaluator;
pub mod game;
pub mod logger;
pub mod pacing;
pub mod player;
pub mod pot;
pub mod rules;
pub mod showdown;
