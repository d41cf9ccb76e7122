//! Nearagrams
//!
//! A turn-based word game: each move adds or removes exactly one letter of the
//! current word while reusing all the others, and the computer answers with a
//! move chosen by one ply of lookahead.
//!
//! # Quick Start
//!
//! ```rust
//! use nearagrams::core::UsedWords;
//! use nearagrams::lexicon::Lexicon;
//! use nearagrams::solver::find_near_anagrams;
//!
//! let lexicon = Lexicon::build(["cat", "act", "cats", "cast", "scat"]);
//! let moves = find_near_anagrams("cat", &lexicon, &UsedWords::new());
//!
//! assert_eq!(moves.into_iter().collect::<Vec<_>>(), vec!["cast", "cats", "scat"]);
//! ```

// Core domain types
pub mod core;

// Dictionary index and word lists
pub mod lexicon;

// Nearagram search and move selection
pub mod solver;

// Game state machine
pub mod game;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
