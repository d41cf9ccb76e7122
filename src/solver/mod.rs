//! Nearagram search and computer move selection

mod finder;
mod selector;

pub use finder::{Direction, branching_factor, find_in_direction, find_near_anagrams};
pub use selector::{ScoredMove, eligible_moves, rank_candidates, select_next};
