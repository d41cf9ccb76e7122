//! Command implementations

pub mod analyze;
pub mod play;
pub mod simulate;

pub use analyze::{AnalysisResult, MoveReport, analyze_word};
pub use play::{PlayConfig, run_play};
pub use simulate::{
    DifficultyStats, SimulateConfig, SimulationReport, run_simulation, simulate_game,
};
