//! Nearagrams - CLI
//!
//! Play the nearagram word game in the terminal, inspect a word's moves, or run
//! calibration games for each difficulty.

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use nearagrams::{
    commands::{PlayConfig, SimulateConfig, analyze_word, run_play, run_simulation},
    core::{Difficulty, DifficultyPolicy},
    game::GameError,
    lexicon::{DEFAULT_WORDS, Lexicon, loader::load_from_file},
    output::{print_analysis_result, print_simulation_report},
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io;

#[derive(Parser)]
#[command(
    name = "nearagrams",
    about = "Word game: add or remove one letter, reuse all the others",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'embedded' (default) or path to a file of whitespace-separated words
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,

    /// Difficulty: 1 (easy), 2 (medium) or 3 (hard); prompted for when omitted
    #[arg(short, long, global = true)]
    difficulty: Option<String>,

    /// What to do with a difficulty outside 1-3
    #[arg(long, global = true, value_enum, default_value_t = DifficultyPolicy::DefaultToMedium)]
    on_invalid_difficulty: DifficultyPolicy,

    /// Seed for reproducible games
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// More log output (-v info, -vv debug); RUST_LOG overrides
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a game against the computer (default)
    Play {
        /// Skip the welcome text
        #[arg(long)]
        no_intro: bool,
    },

    /// Show the nearagrams of a word and how each difficulty would choose
    Analyze {
        /// Word to analyze
        word: String,
    },

    /// Play bot games at each difficulty and report statistics
    Simulate {
        /// Games per difficulty
        #[arg(short = 'n', long, default_value = "100")]
        games: usize,

        /// Bot quits after this many moves
        #[arg(long, default_value = "50")]
        max_turns: u32,
    },
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();
}

/// Load the lexicon based on the -w flag
///
/// - "embedded": the word list compiled into the binary
/// - "<path>": whitespace-separated words from a file
fn load_lexicon(wordlist: &str, required_lengths: &[usize]) -> Result<Lexicon> {
    let lexicon = if wordlist == "embedded" {
        Lexicon::build_checked(DEFAULT_WORDS, required_lengths)?
    } else {
        let words = load_from_file(wordlist)
            .with_context(|| format!("failed to read word list {wordlist}"))?;
        Lexicon::build_checked(&words, required_lengths)?
    };
    Ok(lexicon)
}

fn make_rng(seed: Option<u64>) -> StdRng {
    seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let difficulty = cli
        .difficulty
        .as_deref()
        .map(|raw| cli.on_invalid_difficulty.resolve(raw))
        .transpose()
        .map_err(GameError::from)?;

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play { no_intro: false });

    match command {
        Commands::Play { no_intro } => {
            let required: Vec<usize> = difficulty
                .map(Difficulty::starting_length)
                .into_iter()
                .collect();
            let lexicon = load_lexicon(&cli.wordlist, &required)?;
            run_play_command(&lexicon, difficulty, cli.on_invalid_difficulty, cli.seed, !no_intro)
        }
        Commands::Analyze { word } => {
            let lexicon = load_lexicon(&cli.wordlist, &[])?;
            let result = analyze_word(&word, &lexicon)?;
            print_analysis_result(&result);
            Ok(())
        }
        Commands::Simulate { games, max_turns } => {
            let difficulties = difficulty.map_or_else(|| Difficulty::ALL.to_vec(), |d| vec![d]);
            let required: Vec<usize> = difficulties.iter().map(|d| d.starting_length()).collect();
            let lexicon = load_lexicon(&cli.wordlist, &required)?;

            let config = SimulateConfig {
                games_per_difficulty: games,
                max_turns,
                seed: cli.seed.unwrap_or_else(rand::random),
                difficulties,
                show_progress: true,
            };
            println!(
                "Simulating {games} games per difficulty with seed {}...",
                config.seed
            );
            let report = run_simulation(&lexicon, &config)?;
            print_simulation_report(&report);
            Ok(())
        }
    }
}

fn run_play_command(
    lexicon: &Lexicon,
    difficulty: Option<Difficulty>,
    policy: DifficultyPolicy,
    seed: Option<u64>,
    show_intro: bool,
) -> Result<()> {
    let config = PlayConfig {
        difficulty,
        policy,
        show_intro,
    };

    let mut input = io::stdin().lock();
    let mut output = io::stdout().lock();
    run_play(lexicon, &config, make_rng(seed), &mut input, &mut output)?;
    Ok(())
}
