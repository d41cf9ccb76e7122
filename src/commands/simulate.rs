//! Calibration runs
//!
//! Plays many games per difficulty with a bot in the player's seat and reports how
//! far it gets. The bot picks uniformly among its nearagrams, so differences
//! between difficulties come from the computer's move policy.

use crate::core::Difficulty;
use crate::game::{Game, GameError, GameStatus, QUIT_SENTINEL};
use crate::lexicon::Lexicon;
use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rayon::prelude::*;
use std::time::{Duration, Instant};

/// Settings for a calibration run
#[derive(Debug, Clone)]
pub struct SimulateConfig {
    pub games_per_difficulty: usize,
    /// Bot quits after this many accepted moves
    pub max_turns: u32,
    pub seed: u64,
    pub difficulties: Vec<Difficulty>,
    pub show_progress: bool,
}

impl Default for SimulateConfig {
    fn default() -> Self {
        Self {
            games_per_difficulty: 100,
            max_turns: 50,
            seed: 0,
            difficulties: Difficulty::ALL.to_vec(),
            show_progress: true,
        }
    }
}

/// Outcome of one simulated game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimulatedGame {
    pub score: u32,
    pub turns: u32,
    pub status: GameStatus,
}

/// Aggregate results for one difficulty
#[derive(Debug, Clone)]
pub struct DifficultyStats {
    pub difficulty: Difficulty,
    pub games: usize,
    pub mean_score: f64,
    pub mean_turns: f64,
    pub best_score: u32,
    pub no_moves_left: usize,
    pub won_by_survival: usize,
    pub turn_limit: usize,
}

impl DifficultyStats {
    fn from_games(difficulty: Difficulty, games: &[SimulatedGame]) -> Self {
        let count = games.len();
        let divisor = count.max(1) as f64;
        let count_status = |status: GameStatus| games.iter().filter(|g| g.status == status).count();

        Self {
            difficulty,
            games: count,
            mean_score: games.iter().map(|g| f64::from(g.score)).sum::<f64>() / divisor,
            mean_turns: games.iter().map(|g| f64::from(g.turns)).sum::<f64>() / divisor,
            best_score: games.iter().map(|g| g.score).max().unwrap_or(0),
            no_moves_left: count_status(GameStatus::NoMovesLeft),
            won_by_survival: count_status(GameStatus::WonBySurvival),
            turn_limit: count_status(GameStatus::GaveUp),
        }
    }
}

/// Results of a calibration run
#[derive(Debug)]
pub struct SimulationReport {
    pub difficulties: Vec<DifficultyStats>,
    pub duration: Duration,
}

/// Seed for one game, distinct per difficulty and game index
fn game_seed(base: u64, difficulty: Difficulty, index: usize) -> u64 {
    base.wrapping_mul(0x9E37_79B9_7F4A_7C15)
        .wrapping_add(u64::from(difficulty.level()) << 32)
        .wrapping_add(index as u64)
}

/// Play one bot game to the end or the turn limit
///
/// # Errors
/// Returns `GameError::EmptyLexicon` if the game cannot start.
pub fn simulate_game(
    lexicon: &Lexicon,
    difficulty: Difficulty,
    max_turns: u32,
    seed: u64,
) -> Result<SimulatedGame, GameError> {
    let mut game = Game::start(lexicon, difficulty, StdRng::seed_from_u64(seed))?;
    let mut bot = StdRng::seed_from_u64(seed ^ u64::MAX);

    while !game.status().is_over() {
        let choices: Vec<&str> = game.candidates().iter().copied().collect();
        let proposal = match choices.choose(&mut bot) {
            Some(&word) if game.turns() < max_turns => word.to_string(),
            _ => QUIT_SENTINEL.to_string(),
        };
        game.play_turn(&proposal);
    }

    Ok(SimulatedGame {
        score: game.score(),
        turns: game.turns(),
        status: game.status(),
    })
}

/// Run the configured number of games for each difficulty
///
/// Games run in parallel; results depend only on the seed.
///
/// # Errors
///
/// Returns an error if the dictionary has no starting word for a difficulty.
pub fn run_simulation(lexicon: &Lexicon, config: &SimulateConfig) -> Result<SimulationReport> {
    let start = Instant::now();
    let total = config.games_per_difficulty * config.difficulties.len();

    let pb = if config.show_progress {
        ProgressBar::new(total as u64)
    } else {
        ProgressBar::hidden()
    };
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")?
            .progress_chars("█▓▒░"),
    );

    let mut difficulties = Vec::with_capacity(config.difficulties.len());
    for &difficulty in &config.difficulties {
        pb.set_message(difficulty.to_string());

        let games = (0..config.games_per_difficulty)
            .into_par_iter()
            .map(|index| {
                let seed = game_seed(config.seed, difficulty, index);
                let result = simulate_game(lexicon, difficulty, config.max_turns, seed);
                pb.inc(1);
                result
            })
            .collect::<Result<Vec<_>, _>>()?;

        let stats = DifficultyStats::from_games(difficulty, &games);
        log::info!(
            "{difficulty}: {} games, mean score {:.2}",
            stats.games,
            stats.mean_score
        );
        difficulties.push(stats);
    }

    pb.finish_with_message("done");

    Ok(SimulationReport {
        difficulties,
        duration: start.elapsed(),
    })
}
