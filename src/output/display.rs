//! Display functions for the game and command results

use super::formatters::{create_progress_bar, status_label, word_list};
use crate::commands::{AnalysisResult, SimulationReport};
use crate::game::{GameStatus, GameSummary, TurnOutcome};
use colored::Colorize;
use std::io::{self, Write};

const INTRO_TEXT: &str = "
Welcome to Nearagrams.

You will be shown a word.
You need to enter a nearagram: an English word that reuses all the letters of the last word,
but has either one more or one fewer letter.
You will take turns back and forth with the computer until no more nearagrams are left.

You cannot reuse words and all words must be at least 3 letters.
Your score is the total number of letters in the words you play.

Good luck!
";

/// Write the welcome text
///
/// # Errors
/// Returns any error from the writer.
pub fn write_intro<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "{}", INTRO_TEXT.bright_white())
}

/// Write the difficulty choices
///
/// # Errors
/// Returns any error from the writer.
pub fn write_difficulty_menu<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "Difficulty levels: 1. Easy, 2. Medium, 3. Hard")
}

/// Write the word the player must answer
///
/// # Errors
/// Returns any error from the writer.
pub fn write_turn_header<W: Write>(out: &mut W, word: &str) -> io::Result<()> {
    writeln!(out, "\nCurrent word: {}", word.bright_yellow().bold())
}

/// Write feedback for one turn
///
/// # Errors
/// Returns any error from the writer.
pub fn write_outcome<W: Write>(out: &mut W, outcome: &TurnOutcome) -> io::Result<()> {
    match outcome {
        TurnOutcome::Accepted(accepted) => {
            writeln!(out, "{}", "Correct!".green().bold())?;
            writeln!(out, "Your score is {}", accepted.score.to_string().bright_cyan())?;
            match &accepted.reply {
                Some(reply) => writeln!(out, "I play: {}", reply.bright_white().bold()),
                None => writeln!(out, "I have no reply to {}!", accepted.word.bright_white()),
            }
        }
        TurnOutcome::Rejected(rejection) => writeln!(out, "{}", rejection.to_string().red()),
        TurnOutcome::GaveUp { forgone } => writeln!(
            out,
            "You gave up. Remaining nearagrams were: {}",
            word_list(forgone).yellow()
        ),
        TurnOutcome::NoMovesLeft | TurnOutcome::Finished(_) => Ok(()),
    }
}

/// Write the end-of-game summary
///
/// # Errors
/// Returns any error from the writer.
pub fn write_summary<W: Write>(out: &mut W, summary: &GameSummary) -> io::Result<()> {
    match summary.status {
        GameStatus::NoMovesLeft => {
            writeln!(out, "{}", "Game over! There are no more nearagrams left.".red())?;
        }
        GameStatus::WonBySurvival => {
            writeln!(out, "{}", "I'm out of nearagrams. You win!".green().bold())?;
        }
        GameStatus::GaveUp | GameStatus::InProgress => {}
    }
    writeln!(
        out,
        "Game over. Your score: {}",
        summary.score.to_string().bright_cyan().bold()
    )
}

/// Print the result of word analysis
pub fn print_analysis_result(result: &AnalysisResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "NEARAGRAMS OF".bright_cyan().bold(),
        result.word.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    let max_branching = result
        .longer
        .iter()
        .chain(&result.shorter)
        .map(|m| m.branching)
        .max()
        .unwrap_or(0);

    let sections = [
        ("One letter more", &result.longer),
        ("One letter fewer", &result.shorter),
    ];
    for (title, moves) in sections {
        println!("\n{} ({})", title.bright_cyan().bold(), moves.len());
        if moves.is_empty() {
            println!("   {}", "none".bright_black());
        }
        for m in moves {
            let bar = create_progress_bar(m.branching as f64, max_branching as f64, 20);
            println!("   {:<12} [{}] {}", m.word, bar.green(), m.branching);
        }
    }

    println!("\n{}", "Computer picks from:".bright_cyan().bold());
    for (difficulty, words) in &result.picks {
        println!("   {:<8} {}", difficulty.to_string(), word_list(words));
    }
}

/// Print the result of a calibration run
pub fn print_simulation_report(report: &SimulationReport) {
    println!("\n{}", "═".repeat(70).cyan());
    println!(" {} ", "SIMULATION RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(70).cyan());

    for stats in &report.difficulties {
        println!(
            "\n📊 {} ({} games)",
            stats.difficulty.to_string().bright_cyan().bold(),
            stats.games
        );
        println!(
            "   Average score:   {}",
            format!("{:.2}", stats.mean_score).bright_yellow().bold()
        );
        println!("   Average turns:   {:.2}", stats.mean_turns);
        println!("   Best score:      {}", stats.best_score.to_string().green());
        println!(
            "   Outcomes:        {} {}, {} {}, {} {}",
            stats.no_moves_left,
            status_label(GameStatus::NoMovesLeft),
            stats.won_by_survival,
            status_label(GameStatus::WonBySurvival),
            stats.turn_limit,
            "hit turn limit".bright_black()
        );
    }

    println!("\n   Time taken:      {:.2}s", report.duration.as_secs_f64());
}
