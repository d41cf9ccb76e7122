//! Interactive play mode
//!
//! Line-oriented game loop over any reader and writer, so the same code drives a
//! terminal session and scripted tests.

use crate::core::{Difficulty, DifficultyPolicy};
use crate::game::{Game, GameError, GameSummary, QUIT_SENTINEL, TurnOutcome};
use crate::lexicon::Lexicon;
use crate::output::display::{
    write_difficulty_menu, write_intro, write_outcome, write_summary, write_turn_header,
};
use anyhow::{Context, Result};
use rand::Rng;
use std::io::{BufRead, Write};

/// Settings for one interactive game
#[derive(Debug, Clone, Copy, Default)]
pub struct PlayConfig {
    /// Skip the prompt and use this difficulty
    pub difficulty: Option<Difficulty>,
    /// How to treat a difficulty outside 1-3
    pub policy: DifficultyPolicy,
    pub show_intro: bool,
}

/// Play one game, reading proposals from `input` and reporting to `output`
///
/// End of input counts as quitting.
///
/// # Errors
///
/// Returns an error if:
/// - Reading input or writing output fails
/// - The difficulty is invalid and the policy rejects it
/// - The dictionary has no starting word for the chosen difficulty
pub fn run_play<R, W, G>(
    lexicon: &Lexicon,
    config: &PlayConfig,
    rng: G,
    input: &mut R,
    output: &mut W,
) -> Result<GameSummary>
where
    R: BufRead,
    W: Write,
    G: Rng,
{
    if config.show_intro {
        write_intro(output)?;
    }

    let difficulty = match config.difficulty {
        Some(difficulty) => difficulty,
        None => choose_difficulty(config.policy, input, output)?,
    };
    writeln!(output, "Proceeding with difficulty level {}", difficulty.level())?;

    let mut game = Game::start(lexicon, difficulty, rng)?;

    loop {
        write_turn_header(output, game.current_word())?;

        if game.status().is_over() {
            break;
        }
        writeln!(output, "There are {} nearagrams.", game.candidates().len())?;

        let line = prompt(
            &format!("Enter a nearagram (enter '{QUIT_SENTINEL}' to quit)"),
            input,
            output,
        )?
        .unwrap_or_else(|| QUIT_SENTINEL.to_string());

        let outcome = game.play_turn(&line);
        write_outcome(output, &outcome)?;

        if matches!(outcome, TurnOutcome::GaveUp { .. }) {
            break;
        }
    }

    let summary = game.summary();
    write_summary(output, &summary)?;
    output.flush().context("failed to flush output")?;
    Ok(summary)
}

fn choose_difficulty<R: BufRead, W: Write>(
    policy: DifficultyPolicy,
    input: &mut R,
    output: &mut W,
) -> Result<Difficulty> {
    write_difficulty_menu(output)?;
    let raw = prompt("Choose difficulty (1-3)", input, output)?.unwrap_or_default();

    match policy.resolve(&raw) {
        Ok(difficulty) => {
            if Difficulty::parse_level(&raw).is_err() {
                writeln!(output, "Invalid difficulty. Defaulting to {difficulty}.")?;
            }
            Ok(difficulty)
        }
        Err(err) => Err(GameError::from(err).into()),
    }
}

/// Write a prompt and read one raw line
///
/// Returns `None` at end of input.
fn prompt<R: BufRead, W: Write>(
    text: &str,
    input: &mut R,
    output: &mut W,
) -> Result<Option<String>> {
    write!(output, "{text}: ")?;
    output.flush().context("failed to flush output")?;

    let mut line = String::new();
    let read = input.read_line(&mut line).context("failed to read input")?;
    Ok((read > 0).then_some(line))
}
