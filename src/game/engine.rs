//! The game state machine
//!
//! A game alternates one player word and one computer word. Each accepted player
//! word scores its length; rejected words change nothing.

use super::error::GameError;
use super::outcome::{AcceptedMove, GameStatus, GameSummary, Rejection, TurnOutcome};
use crate::core::{Difficulty, MIN_WORD_LEN, UsedWords};
use crate::lexicon::Lexicon;
use crate::solver::{find_near_anagrams, select_next};
use rand::Rng;
use std::collections::BTreeSet;

/// Input that ends the game
pub const QUIT_SENTINEL: &str = "q";

/// A single game session
///
/// Owns its used-word set and random source; borrows the shared lexicon.
pub struct Game<'a, R> {
    lexicon: &'a Lexicon,
    difficulty: Difficulty,
    current_word: String,
    score: u32,
    turns: u32,
    used: UsedWords,
    candidates: BTreeSet<&'a str>,
    status: GameStatus,
    rng: R,
}

impl<'a, R: Rng> Game<'a, R> {
    /// Start a game from a random word of the difficulty's starting length
    ///
    /// # Errors
    /// Returns `GameError::EmptyLexicon` if the lexicon has no word of that length.
    pub fn start(
        lexicon: &'a Lexicon,
        difficulty: Difficulty,
        mut rng: R,
    ) -> Result<Self, GameError> {
        let word = lexicon
            .random_word(difficulty.starting_length(), &mut rng)?
            .to_string();
        Ok(Self::from_word(lexicon, difficulty, word, rng))
    }

    /// Start a game from a chosen word
    ///
    /// The used set starts empty; only words played by either side are recorded, so
    /// the computer may answer the first move with the starting word.
    pub fn from_word(
        lexicon: &'a Lexicon,
        difficulty: Difficulty,
        word: impl Into<String>,
        rng: R,
    ) -> Self {
        let current_word = word.into().trim().to_lowercase();
        let used = UsedWords::new();

        let candidates = find_near_anagrams(&current_word, lexicon, &used);
        let status = if candidates.is_empty() {
            GameStatus::NoMovesLeft
        } else {
            GameStatus::InProgress
        };

        log::info!(
            "new {difficulty} game from '{current_word}' ({} nearagrams)",
            candidates.len()
        );

        Self {
            lexicon,
            difficulty,
            current_word,
            score: 0,
            turns: 0,
            used,
            candidates,
            status,
            rng,
        }
    }

    /// Play one player proposal
    ///
    /// The input is trimmed and lowercased first. On acceptance the computer
    /// replies straight away and the candidate set is recomputed for its word.
    pub fn play_turn(&mut self, input: &str) -> TurnOutcome {
        if self.status.is_over() {
            return TurnOutcome::Finished(self.status);
        }
        if self.candidates.is_empty() {
            self.status = GameStatus::NoMovesLeft;
            return TurnOutcome::NoMovesLeft;
        }

        let word = input.trim().to_lowercase();
        if word == QUIT_SENTINEL {
            self.status = GameStatus::GaveUp;
            log::info!("player gave up at '{}' with score {}", self.current_word, self.score);
            return TurnOutcome::GaveUp {
                forgone: self.forgone(),
            };
        }

        if let Err(rejection) = self.validate(&word) {
            log::debug!("rejected '{word}': {rejection:?}");
            return TurnOutcome::Rejected(rejection);
        }

        TurnOutcome::Accepted(self.accept(word))
    }

    /// Check a normalised proposal against the current word
    ///
    /// # Errors
    /// Returns the first `Rejection` that applies.
    pub fn validate(&self, word: &str) -> Result<(), Rejection> {
        if self.used.contains(word) {
            return Err(Rejection::AlreadyUsed);
        }
        let length = word.chars().count();
        if length < MIN_WORD_LEN {
            return Err(Rejection::TooShort);
        }
        if length.abs_diff(self.current_word.chars().count()) != 1 {
            return Err(Rejection::WrongLengthDelta);
        }
        if !self.lexicon.contains(word) {
            return Err(Rejection::NotInDictionary);
        }
        if !self.candidates.contains(word) {
            return Err(Rejection::NotAValidMove);
        }
        Ok(())
    }

    fn accept(&mut self, word: String) -> AcceptedMove {
        let points = word.len() as u32;
        self.score += points;
        self.turns += 1;
        self.used.insert(word.as_str());

        let reply = select_next(&word, self.lexicon, &self.used, self.difficulty, &mut self.rng);

        match reply {
            Some(reply) => {
                self.used.insert(reply);
                self.current_word = reply.to_string();
                self.candidates = find_near_anagrams(reply, self.lexicon, &self.used);
                if self.candidates.is_empty() {
                    self.status = GameStatus::NoMovesLeft;
                }
            }
            None => {
                self.current_word.clone_from(&word);
                self.candidates.clear();
                self.status = GameStatus::WonBySurvival;
            }
        }

        log::debug!(
            "accepted '{word}' (+{points}), computer replied {reply:?}, status {:?}",
            self.status
        );

        AcceptedMove {
            word,
            points,
            score: self.score,
            reply: reply.map(str::to_string),
        }
    }

    /// Current candidate set, sorted
    fn forgone(&self) -> Vec<String> {
        self.candidates.iter().map(ToString::to_string).collect()
    }

    #[must_use]
    pub fn current_word(&self) -> &str {
        &self.current_word
    }

    #[must_use]
    pub const fn score(&self) -> u32 {
        self.score
    }

    /// Accepted player moves so far
    #[must_use]
    pub const fn turns(&self) -> u32 {
        self.turns
    }

    #[must_use]
    pub const fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.status
    }

    /// Nearagrams the player may play against the current word
    #[must_use]
    pub const fn candidates(&self) -> &BTreeSet<&'a str> {
        &self.candidates
    }

    #[must_use]
    pub const fn used_words(&self) -> &UsedWords {
        &self.used
    }

    #[must_use]
    pub fn summary(&self) -> GameSummary {
        GameSummary {
            difficulty: self.difficulty,
            status: self.status,
            score: self.score,
            turns: self.turns,
            last_word: self.current_word.clone(),
            forgone: if self.status == GameStatus::GaveUp {
                self.forgone()
            } else {
                Vec::new()
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::{DEFAULT_WORDS, LexiconError};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn cat_lexicon() -> Lexicon {
        Lexicon::build(["cat", "cats", "act", "cast", "scat"])
    }

    fn tea_lexicon() -> Lexicon {
        Lexicon::build([
            "tea", "eat", "ate", "east", "tear", "team", "least", "beast", "heart",
        ])
    }

    fn rng(seed: u64) -> StdRng {
        StdRng::seed_from_u64(seed)
    }

    fn candidate_list<'a>(game: &Game<'a, StdRng>) -> Vec<&'a str> {
        game.candidates().iter().copied().collect()
    }

    #[test]
    fn from_word_computes_candidates() {
        let lexicon = cat_lexicon();
        let game = Game::from_word(&lexicon, Difficulty::Medium, "cat", rng(1));

        assert_eq!(game.status(), GameStatus::InProgress);
        assert_eq!(game.current_word(), "cat");
        assert_eq!(candidate_list(&game), vec!["cast", "cats", "scat"]);
        assert_eq!(game.score(), 0);
        assert!(game.used_words().is_empty());
    }

    #[test]
    fn computer_may_return_to_starting_word() {
        let lexicon = Lexicon::build(["cat", "cats"]);
        let mut game = Game::from_word(&lexicon, Difficulty::Medium, "cats", rng(3));

        let outcome = game.play_turn("cat");

        assert_eq!(
            outcome,
            TurnOutcome::Accepted(AcceptedMove {
                word: "cat".to_string(),
                points: 3,
                score: 3,
                reply: Some("cats".to_string()),
            })
        );
        assert_eq!(game.current_word(), "cats");
        assert!(game.used_words().contains("cats"));
        assert_eq!(game.status(), GameStatus::NoMovesLeft);
    }

    #[test]
    fn start_picks_word_of_starting_length() {
        let lexicon = Lexicon::build(DEFAULT_WORDS);
        for difficulty in Difficulty::ALL {
            let game = Game::start(&lexicon, difficulty, rng(5)).unwrap();
            assert_eq!(game.current_word().len(), difficulty.starting_length());
            assert_eq!(game.difficulty(), difficulty);
        }
    }

    #[test]
    fn start_fails_without_starting_words() {
        let lexicon = cat_lexicon();
        let err = Game::start(&lexicon, Difficulty::Hard, rng(1)).err().unwrap();
        assert_eq!(err, GameError::EmptyLexicon(LexiconError::Empty { length: 6 }));
    }

    #[test]
    fn rejects_same_length_word() {
        let lexicon = cat_lexicon();
        let mut game = Game::from_word(&lexicon, Difficulty::Medium, "cat", rng(1));

        assert_eq!(
            game.play_turn("act"),
            TurnOutcome::Rejected(Rejection::WrongLengthDelta)
        );
        assert_eq!(game.score(), 0);
        assert_eq!(game.current_word(), "cat");
    }

    #[test]
    fn each_rejection_is_distinct() {
        let lexicon = Lexicon::build(["cat", "cats", "act", "cast", "scat", "cots"]);
        let mut game = Game::from_word(&lexicon, Difficulty::Medium, "cat", rng(1));

        assert_eq!(game.play_turn("at"), TurnOutcome::Rejected(Rejection::TooShort));
        assert_eq!(game.play_turn(""), TurnOutcome::Rejected(Rejection::TooShort));
        assert_eq!(
            game.play_turn("coats"),
            TurnOutcome::Rejected(Rejection::WrongLengthDelta)
        );
        assert_eq!(
            game.play_turn("cat"),
            TurnOutcome::Rejected(Rejection::WrongLengthDelta)
        );
        assert_eq!(
            game.play_turn("cart"),
            TurnOutcome::Rejected(Rejection::NotInDictionary)
        );
        assert_eq!(
            game.play_turn("cots"),
            TurnOutcome::Rejected(Rejection::NotAValidMove)
        );

        // Nothing changed
        assert_eq!(game.status(), GameStatus::InProgress);
        assert_eq!(game.turns(), 0);
        assert_eq!(candidate_list(&game), vec!["cast", "cats", "scat"]);

        assert!(matches!(game.play_turn("cats"), TurnOutcome::Accepted(_)));
        assert_eq!(game.play_turn("cats"), TurnOutcome::Rejected(Rejection::AlreadyUsed));
    }

    #[test]
    fn lengths_count_characters_not_bytes() {
        let lexicon = cat_lexicon();
        let game = Game::from_word(&lexicon, Difficulty::Medium, "cat", rng(1));

        assert_eq!(game.validate("éé"), Err(Rejection::TooShort));
        assert_eq!(game.validate("çats"), Err(Rejection::NotInDictionary));
        assert_eq!(game.validate("éclat"), Err(Rejection::WrongLengthDelta));
    }

    #[test]
    fn short_word_rejected_even_if_known() {
        // Two-letter words never make it into a lexicon; the length check catches them first anyway
        let lexicon = cat_lexicon();
        let mut game = Game::from_word(&lexicon, Difficulty::Easy, "cats", rng(2));
        assert_eq!(game.play_turn("ca"), TurnOutcome::Rejected(Rejection::TooShort));
        assert_eq!(game.validate("at"), Err(Rejection::TooShort));
    }

    #[test]
    fn input_is_normalised() {
        let lexicon = cat_lexicon();
        let mut game = Game::from_word(&lexicon, Difficulty::Medium, "cat", rng(1));

        match game.play_turn("  CATS \n") {
            TurnOutcome::Accepted(accepted) => assert_eq!(accepted.word, "cats"),
            other => panic!("expected acceptance, got {other:?}"),
        }
    }

    #[test]
    fn accepted_move_scores_length_and_gets_reply() {
        // The starting word isn't in this dictionary, so "cats" only shrinks to "act"
        let lexicon = Lexicon::build(["act", "cats", "cast", "scat"]);
        let mut game = Game::from_word(&lexicon, Difficulty::Medium, "cat", rng(1));

        let outcome = game.play_turn("cats");
        assert_eq!(
            outcome,
            TurnOutcome::Accepted(AcceptedMove {
                word: "cats".to_string(),
                points: 4,
                score: 4,
                reply: Some("act".to_string()),
            })
        );

        assert_eq!(game.current_word(), "act");
        assert_eq!(game.turns(), 1);
        assert!(game.used_words().contains("cats"));
        assert!(game.used_words().contains("act"));
        assert_eq!(candidate_list(&game), vec!["cast", "scat"]);
        assert_eq!(game.status(), GameStatus::InProgress);
    }

    #[test]
    fn used_words_never_return_as_candidates() {
        let lexicon = cat_lexicon();
        let mut game = Game::from_word(&lexicon, Difficulty::Medium, "cat", rng(1));

        let TurnOutcome::Accepted(accepted) = game.play_turn("cats") else {
            panic!("expected acceptance");
        };
        let reply = accepted.reply.unwrap();

        for &candidate in game.candidates() {
            assert!(!game.used_words().contains(candidate));
        }
        assert_eq!(game.play_turn("cats"), TurnOutcome::Rejected(Rejection::AlreadyUsed));
        assert_eq!(game.play_turn(&reply), TurnOutcome::Rejected(Rejection::AlreadyUsed));
    }

    #[test]
    fn computer_without_reply_ends_game() {
        let lexicon = Lexicon::build(["cat", "cats", "cast"]);
        let mut game = Game::from_word(&lexicon, Difficulty::Medium, "cat", rng(1));

        // cat -> cats -> cat (computer) -> cast: "cast" only shrinks to the used "cat"
        game.play_turn("cats");
        assert_eq!(game.current_word(), "cat");
        let outcome = game.play_turn("cast");

        match outcome {
            TurnOutcome::Accepted(accepted) => {
                assert_eq!(accepted.reply, None);
                assert_eq!(accepted.score, 8);
            }
            other => panic!("expected acceptance, got {other:?}"),
        }
        assert_eq!(game.status(), GameStatus::WonBySurvival);
        assert_eq!(game.current_word(), "cast");
        assert_eq!(game.play_turn("cats"), TurnOutcome::Finished(GameStatus::WonBySurvival));
    }

    #[test]
    fn hard_reply_can_leave_player_stuck() {
        let lexicon = tea_lexicon();
        let mut game = Game::from_word(&lexicon, Difficulty::Hard, "tea", rng(9));

        let TurnOutcome::Accepted(accepted) = game.play_turn("east") else {
            panic!("expected acceptance");
        };

        // With east used, tea/eat/ate still lead to tear/team; least and beast are dead ends
        assert!(matches!(accepted.reply.as_deref(), Some("least" | "beast")));
        assert_eq!(game.status(), GameStatus::NoMovesLeft);
        assert_eq!(game.play_turn("tear"), TurnOutcome::Finished(GameStatus::NoMovesLeft));
    }

    #[test]
    fn easy_reply_keeps_player_going() {
        let lexicon = tea_lexicon();
        let mut game = Game::from_word(&lexicon, Difficulty::Easy, "tea", rng(9));

        let TurnOutcome::Accepted(accepted) = game.play_turn("east") else {
            panic!("expected acceptance");
        };

        assert!(matches!(accepted.reply.as_deref(), Some("tea" | "eat" | "ate")));
        assert_eq!(game.status(), GameStatus::InProgress);
        assert_eq!(candidate_list(&game), vec!["team", "tear"]);
    }

    #[test]
    fn quitting_reports_sorted_candidates() {
        let lexicon = cat_lexicon();
        let mut game = Game::from_word(&lexicon, Difficulty::Medium, "cat", rng(1));
        let expected: Vec<String> = candidate_list(&game).into_iter().map(String::from).collect();

        let outcome = game.play_turn(" Q ");

        assert_eq!(outcome, TurnOutcome::GaveUp { forgone: expected.clone() });
        assert_eq!(game.status(), GameStatus::GaveUp);

        let summary = game.summary();
        assert_eq!(summary.forgone, expected);
        assert_eq!(summary.status, GameStatus::GaveUp);
        assert_eq!(summary.score, 0);
    }

    #[test]
    fn quitting_after_moves_keeps_score() {
        let lexicon = cat_lexicon();
        let mut game = Game::from_word(&lexicon, Difficulty::Medium, "cat", rng(1));
        game.play_turn("cats");

        assert_eq!(
            game.play_turn("q"),
            TurnOutcome::GaveUp {
                forgone: vec!["cast".to_string(), "scat".to_string()]
            }
        );
        assert_eq!(game.summary().score, 4);
        assert_eq!(game.summary().turns, 1);
    }

    #[test]
    fn dead_start_has_no_moves() {
        let lexicon = Lexicon::build(["zzz", "cats"]);
        let mut game = Game::from_word(&lexicon, Difficulty::Medium, "zzz", rng(1));

        assert_eq!(game.status(), GameStatus::NoMovesLeft);
        assert_eq!(game.play_turn("cats"), TurnOutcome::Finished(GameStatus::NoMovesLeft));
        assert!(game.summary().forgone.is_empty());
    }

    #[test]
    fn seeded_games_replay_identically() {
        let lexicon = Lexicon::build(DEFAULT_WORDS);

        let play = |seed: u64| {
            let mut game = Game::start(&lexicon, Difficulty::Medium, rng(seed)).unwrap();
            let mut words = vec![game.current_word().to_string()];
            while !game.status().is_over() && game.turns() < 10 {
                let next = (*game.candidates().iter().next().unwrap()).to_string();
                game.play_turn(&next);
                words.push(game.current_word().to_string());
            }
            (words, game.score())
        };

        assert_eq!(play(11), play(11));
    }
}
