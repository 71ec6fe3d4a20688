//! Game sessions and the turn controller.
//!
//! A [`Session`] owns everything about one game: the secret character, the
//! candidate set, the question and guess budgets, and the transcript. Turn
//! handlers validate first and only then mutate, so a rejected call leaves
//! the session exactly as it was. Each accepted handler returns the
//! transcript entries it appended.

use std::collections::BTreeSet;

use chrono::Utc;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::catalogue::{Catalogue, Character, TraitTag};
use crate::config::{GameConfig, Mode};
use crate::error::{GameError, GameResult};
use crate::filter::filter;
use crate::oracle::QuestionOracle;
use crate::selector::{QuestionSelector, vocabulary_exhausted};
use crate::transcript::{Entry, Transcript};

/// Where a game stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// Created, intro not shown yet.
    NotStarted,
    /// Turns are being played.
    InProgress,
    /// The guesser found the secret.
    Win,
    /// The guesser ran out of guesses or questions, or guessed wrong.
    Lose,
}

impl GameState {
    /// Whether the game is over.
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Win | Self::Lose)
    }
}

impl std::fmt::Display for GameState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotStarted => write!(f, "Not Started"),
            Self::InProgress => write!(f, "In Progress"),
            Self::Win => write!(f, "Win"),
            Self::Lose => write!(f, "Lose"),
        }
    }
}

/// What a line of chat input is asking for in human-guesses mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    /// Guess a character by name.
    Guess(String),
    /// Ask the oracle a free-text question.
    Question(String),
    /// Reveal the next hint.
    Hint,
}

/// Read a typed yes/no answer.
pub fn parse_answer(text: &str) -> Option<bool> {
    match text.trim().to_lowercase().as_str() {
        "y" | "yes" | "yep" | "true" => Some(true),
        "n" | "no" | "nope" | "false" => Some(false),
        _ => None,
    }
}

/// The full mutable state of one game.
#[derive(Debug, Clone)]
pub struct Session {
    config: GameConfig,
    roster: Vec<Character>,
    secret: Character,
    candidates: Vec<Character>,
    asked: BTreeSet<TraitTag>,
    pending: Option<TraitTag>,
    attempts_remaining: u32,
    questions_remaining: u32,
    questions_asked: u32,
    hints_shown: usize,
    transcript: Transcript,
    state: GameState,
    selector: QuestionSelector,
    rng: StdRng,
}

impl Session {
    /// Create a session over the configured catalogue partition with a
    /// randomly drawn secret.
    pub fn new(catalogue: &Catalogue, config: GameConfig) -> GameResult<Self> {
        let roster = catalogue.partition(config.difficulty).to_vec();
        Self::from_roster(roster, config)
    }

    /// Create a session over an explicit roster with a randomly drawn
    /// secret.
    pub fn from_roster(roster: Vec<Character>, config: GameConfig) -> GameResult<Self> {
        if roster.is_empty() {
            return Err(GameError::EmptyPartition(config.difficulty));
        }
        let mut rng = StdRng::seed_from_u64(config.seed);
        let secret = roster[rng.random_range(0..roster.len())].clone();
        Ok(Self::fresh(roster, secret, config, rng))
    }

    /// Create a session with a chosen secret.
    pub fn with_secret(roster: Vec<Character>, name: &str, config: GameConfig) -> GameResult<Self> {
        let secret = roster
            .iter()
            .find(|c| c.matches_name(name))
            .cloned()
            .ok_or_else(|| GameError::UnknownCharacter(name.trim().to_string()))?;
        let rng = StdRng::seed_from_u64(config.seed);
        Ok(Self::fresh(roster, secret, config, rng))
    }

    fn fresh(roster: Vec<Character>, secret: Character, config: GameConfig, rng: StdRng) -> Self {
        log::debug!(
            "new {} session on {} ({} characters)",
            config.mode,
            config.difficulty,
            roster.len()
        );
        Self {
            candidates: roster.clone(),
            roster,
            secret,
            asked: BTreeSet::new(),
            pending: None,
            attempts_remaining: config.max_attempts,
            questions_remaining: config.max_questions,
            questions_asked: 0,
            hints_shown: 0,
            transcript: Transcript::new(),
            state: GameState::NotStarted,
            selector: QuestionSelector::new(config.strategy),
            rng,
            config,
        }
    }

    /// Replace this session with a fresh, not-started one over the same
    /// roster and configuration. The new secret is drawn from the same
    /// random stream, so consecutive games differ.
    pub fn reset(&mut self) {
        let secret = self.roster[self.rng.random_range(0..self.roster.len())].clone();
        *self = Self::fresh(
            self.roster.clone(),
            secret,
            self.config.clone(),
            self.rng.clone(),
        );
    }

    /// Show the intro and, in system-guesses mode, pose the first question.
    ///
    /// Starting a game that is already in progress does nothing.
    pub fn start(&mut self) -> GameResult<&[Entry]> {
        match self.state {
            GameState::NotStarted => {}
            GameState::InProgress => return Ok(&[]),
            GameState::Win | GameState::Lose => return Err(GameError::GameOver),
        }
        let mark = self.transcript.len();
        self.state = GameState::InProgress;
        log::info!(
            "game started: {} on {}, secret drawn from {} characters",
            self.config.mode,
            self.config.difficulty,
            self.roster.len()
        );

        match self.config.mode {
            Mode::HumanGuesses => {
                self.transcript.append(Entry::narration(format!(
                    "I've picked a character from the {} list. You have {} chances to guess \
                     who I am! What's your first question?",
                    self.config.difficulty, self.attempts_remaining
                )));
            }
            Mode::SystemGuesses => {
                self.transcript.append(Entry::narration(format!(
                    "You are {} from the {} list. Answer my questions truthfully and I'll \
                     try to guess who you are.",
                    self.secret.name, self.config.difficulty
                )));
                self.next_turn();
            }
        }
        Ok(self.transcript.since(mark))
    }

    fn ensure(&self, mode: Mode) -> GameResult<()> {
        if self.config.mode != mode {
            return Err(GameError::WrongMode { expected: mode });
        }
        match self.state {
            GameState::NotStarted => Err(GameError::NotStarted),
            GameState::InProgress => Ok(()),
            GameState::Win | GameState::Lose => Err(GameError::GameOver),
        }
    }

    fn finish(&mut self, won: bool, message: String) {
        self.state = if won { GameState::Win } else { GameState::Lose };
        self.pending = None;
        log::info!("game over ({}): secret was {}", self.state, self.secret.name);
        self.transcript.append(Entry::Outcome {
            won,
            message,
            timestamp: Utc::now(),
        });
    }

    // -- Human guesses ------------------------------------------------------

    /// Guess the secret by name. Uses up one attempt.
    pub fn guess(&mut self, name: &str) -> GameResult<&[Entry]> {
        self.ensure(Mode::HumanGuesses)?;
        let name = name.trim();
        if name.is_empty() {
            return Err(GameError::EmptyInput);
        }

        let mark = self.transcript.len();
        self.attempts_remaining = self.attempts_remaining.saturating_sub(1);
        self.transcript.append(Entry::Guess {
            name: name.to_string(),
            timestamp: Utc::now(),
        });

        if self.secret.matches_name(name) {
            let message = format!("That's right! The character was {}! You win!", self.secret);
            self.finish(true, message);
        } else if self.attempts_remaining == 0 {
            let message = format!(
                "You're out of guesses! The character was {}. Better luck next time!",
                self.secret
            );
            self.finish(false, message);
        } else {
            let left = self.attempts_remaining;
            let noun = if left == 1 { "guess" } else { "guesses" };
            self.transcript.append(Entry::narration(format!(
                "Nope, that's not me. You have {left} {noun} left. Try another question!"
            )));
        }
        Ok(self.transcript.since(mark))
    }

    /// Ask the oracle a free-text question about the secret.
    ///
    /// A successful answer uses up one question. A failed call is recorded
    /// in the transcript and only costs a question when
    /// [`GameConfig::charge_failed_questions`] is set.
    pub fn ask(&mut self, question: &str, oracle: &dyn QuestionOracle) -> GameResult<&[Entry]> {
        self.ensure(Mode::HumanGuesses)?;
        let question = question.trim();
        if question.is_empty() {
            return Err(GameError::EmptyInput);
        }
        if self.questions_remaining == 0 {
            return Err(GameError::OutOfQuestions);
        }

        let mark = self.transcript.len();
        self.transcript.append(Entry::HumanQuestion {
            question: question.to_string(),
            timestamp: Utc::now(),
        });

        match oracle.answer_question(&self.secret, question) {
            Ok(answer) => {
                self.questions_remaining = self.questions_remaining.saturating_sub(1);
                self.questions_asked += 1;
                self.transcript.append(Entry::OracleAnswer {
                    answer,
                    timestamp: Utc::now(),
                });
            }
            Err(e) => {
                log::warn!("oracle failed: {e}");
                if self.config.charge_failed_questions {
                    self.questions_remaining = self.questions_remaining.saturating_sub(1);
                    self.questions_asked += 1;
                }
                self.transcript.append(Entry::OracleFailure {
                    error: e.to_string(),
                    timestamp: Utc::now(),
                });
            }
        }

        if self.questions_remaining == 0 {
            self.transcript.append(Entry::narration(
                "That was your last question. Make a guess!",
            ));
        }
        Ok(self.transcript.since(mark))
    }

    /// Reveal the secret's next hint. Hints are free.
    pub fn hint(&mut self) -> GameResult<&[Entry]> {
        self.ensure(Mode::HumanGuesses)?;
        let mark = self.transcript.len();
        match self.secret.hints.get(self.hints_shown) {
            Some(text) => {
                let text = text.clone();
                self.hints_shown += 1;
                self.transcript.append(Entry::Hint {
                    number: self.hints_shown,
                    text,
                    timestamp: Utc::now(),
                });
            }
            None => {
                self.transcript
                    .append(Entry::narration("No more hints! You've seen them all."));
            }
        }
        Ok(self.transcript.since(mark))
    }

    /// Decide what a line of chat input means.
    ///
    /// Input starting with "guess", or naming a roster character, is a
    /// guess. A request for a hint is a hint. Anything else is a question.
    pub fn classify(&self, text: &str) -> Intent {
        let trimmed = text.trim();
        let lower = trimmed.to_lowercase();

        let bare = lower.trim_end_matches(['!', '.', '?']);
        if matches!(bare, "hint" | "a hint" | "hint please" | "give me a hint") {
            return Intent::Hint;
        }

        let named = self
            .roster
            .iter()
            .filter(|c| lower.contains(&c.name.to_lowercase()))
            .max_by_key(|c| c.name.len())
            .map(|c| c.name.clone());

        if lower.starts_with("guess") {
            let typed = trimmed
                .get("guess".len()..)
                .unwrap_or("")
                .trim_start_matches([':', ' ', ','])
                .trim_end_matches(['!', '.', '?'])
                .trim();
            return Intent::Guess(named.unwrap_or_else(|| typed.to_string()));
        }

        match named {
            Some(name) => Intent::Guess(name),
            None => Intent::Question(trimmed.to_string()),
        }
    }

    /// Route a line of chat input to [`guess`](Self::guess),
    /// [`ask`](Self::ask), or [`hint`](Self::hint).
    pub fn submit(&mut self, text: &str, oracle: &dyn QuestionOracle) -> GameResult<&[Entry]> {
        self.ensure(Mode::HumanGuesses)?;
        match self.classify(text) {
            Intent::Guess(name) => self.guess(&name),
            Intent::Question(question) => self.ask(&question, oracle),
            Intent::Hint => self.hint(),
        }
    }

    // -- System guesses -----------------------------------------------------

    /// Answer the pending question.
    pub fn answer(&mut self, yes: bool) -> GameResult<&[Entry]> {
        self.ensure(Mode::SystemGuesses)?;
        let tag = self.pending.ok_or(GameError::NoPendingQuestion)?;

        let mark = self.transcript.len();
        self.pending = None;
        self.candidates = filter(&self.candidates, tag, yes);
        self.asked.insert(tag);
        self.questions_asked += 1;
        self.questions_remaining = self.questions_remaining.saturating_sub(1);
        self.transcript.append(Entry::HumanAnswer {
            tag,
            answer: yes,
            remaining: self.candidates.len(),
            timestamp: Utc::now(),
        });

        self.next_turn();
        Ok(self.transcript.since(mark))
    }

    /// The answer the secret character would give to the pending question.
    pub fn truthful_answer(&self) -> GameResult<bool> {
        self.ensure(Mode::SystemGuesses)?;
        let tag = self.pending.ok_or(GameError::NoPendingQuestion)?;
        Ok(self.secret.has(tag))
    }

    fn next_turn(&mut self) {
        match self.candidates.len() {
            0 => {
                let message = format!(
                    "None of my characters match those answers. You were {}. I give up!",
                    self.secret
                );
                self.finish(false, message);
            }
            1 => {
                let guess = self.candidates[0].clone();
                self.final_guess(guess);
            }
            _ if self.questions_remaining == 0 => self.out_of_questions(),
            n => match self
                .selector
                .next_question(&self.candidates, &self.asked, &mut self.rng)
            {
                Some(tag) => {
                    self.pending = Some(tag);
                    self.transcript.append(Entry::SystemQuestion {
                        tag,
                        number: self.questions_asked + 1,
                        timestamp: Utc::now(),
                    });
                }
                None if vocabulary_exhausted(&self.asked) => self.out_of_questions(),
                None => {
                    let guess = self.candidates[self.rng.random_range(0..n)].clone();
                    log::debug!("{n} candidates indistinguishable, picked {guess}");
                    self.final_guess(guess);
                }
            },
        }
    }

    fn out_of_questions(&mut self) {
        let message = format!("I'm out of questions! You were {}.", self.secret);
        self.finish(false, message);
    }

    fn final_guess(&mut self, guess: Character) {
        self.transcript.append(Entry::FinalGuess {
            name: guess.name.clone(),
            timestamp: Utc::now(),
        });
        if self.secret.matches_name(&guess.name) {
            let message = format!("I got it! You were {}.", self.secret);
            self.finish(true, message);
        } else {
            let message = format!("I was wrong, you were {}. You stumped me!", self.secret);
            self.finish(false, message);
        }
    }

    // -- Accessors ----------------------------------------------------------

    /// The session configuration.
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// The play mode.
    pub fn mode(&self) -> Mode {
        self.config.mode
    }

    /// Current state.
    pub fn state(&self) -> GameState {
        self.state
    }

    /// The secret character.
    pub fn secret(&self) -> &Character {
        &self.secret
    }

    /// Every character in the session's partition.
    pub fn roster(&self) -> &[Character] {
        &self.roster
    }

    /// Characters still consistent with the answers so far.
    pub fn candidates(&self) -> &[Character] {
        &self.candidates
    }

    /// Tags asked so far in system-guesses mode.
    pub fn asked(&self) -> &BTreeSet<TraitTag> {
        &self.asked
    }

    /// The question waiting for an answer.
    pub fn pending_question(&self) -> Option<TraitTag> {
        self.pending
    }

    /// Guesses left in human-guesses mode.
    pub fn attempts_remaining(&self) -> u32 {
        self.attempts_remaining
    }

    /// Questions left in the budget.
    pub fn questions_remaining(&self) -> u32 {
        self.questions_remaining
    }

    /// Questions used so far.
    pub fn questions_asked(&self) -> u32 {
        self.questions_asked
    }

    /// Hints revealed so far.
    pub fn hints_shown(&self) -> usize {
        self.hints_shown
    }

    /// The game transcript.
    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    /// One-line status summary.
    pub fn status(&self) -> String {
        match self.config.mode {
            Mode::HumanGuesses => format!(
                "{} | {} | {} guesses left | {} questions left | {} hints shown | {}",
                self.config.mode,
                self.config.difficulty,
                self.attempts_remaining,
                self.questions_remaining,
                self.hints_shown,
                self.state
            ),
            Mode::SystemGuesses => format!(
                "{} | {} | {} strategy | {} candidates | {} questions left | {}",
                self.config.mode,
                self.config.difficulty,
                self.selector.strategy(),
                self.candidates.len(),
                self.questions_remaining,
                self.state
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalogue::Difficulty;
    use crate::error::OracleError;
    use crate::oracle::OfflineOracle;
    use crate::selector::Strategy;

    struct EchoOracle;

    impl QuestionOracle for EchoOracle {
        fn answer_question(&self, secret: &Character, question: &str) -> Result<String, OracleError> {
            Ok(format!("{}: {question}", secret.name))
        }
    }

    fn iron_and_thor() -> Vec<Character> {
        vec![
            Character::new("Iron Man").with_traits([TraitTag::Avenger, TraitTag::Genius]),
            Character::new("Thor")
                .with_traits([TraitTag::God])
                .with_hints(["I was not born on Earth.", "Only the worthy may lift my weapon."]),
        ]
    }

    fn human(roster: Vec<Character>, secret: &str, config: GameConfig) -> Session {
        let mut s =
            Session::with_secret(roster, secret, config.with_mode(Mode::HumanGuesses)).unwrap();
        s.start().unwrap();
        s
    }

    fn system(roster: Vec<Character>, secret: &str, config: GameConfig) -> Session {
        let mut s =
            Session::with_secret(roster, secret, config.with_mode(Mode::SystemGuesses)).unwrap();
        s.start().unwrap();
        s
    }

    fn last_outcome(s: &Session) -> (bool, String) {
        match s.transcript().entries().last() {
            Some(Entry::Outcome { won, message, .. }) => (*won, message.clone()),
            other => panic!("expected an outcome, got {other:?}"),
        }
    }

    // -- Lifecycle ------------------------------------------------------------

    #[test]
    fn new_session_is_not_started() {
        let s = Session::new(&Catalogue::builtin(), GameConfig::default()).unwrap();
        assert_eq!(s.state(), GameState::NotStarted);
        assert!(s.transcript().is_empty());
        assert!(s.roster().contains(s.secret()));
        assert_eq!(s.roster().len(), 4);
    }

    #[test]
    fn same_seed_same_secret() {
        let cat = Catalogue::builtin();
        let cfg = GameConfig::default().with_difficulty(Difficulty::Hard).with_seed(9);
        let a = Session::new(&cat, cfg.clone()).unwrap();
        let b = Session::new(&cat, cfg).unwrap();
        assert_eq!(a.secret().name, b.secret().name);
    }

    #[test]
    fn empty_roster_rejected() {
        let err = Session::from_roster(Vec::new(), GameConfig::default()).unwrap_err();
        assert!(matches!(err, GameError::EmptyPartition(Difficulty::Easy)));
    }

    #[test]
    fn unknown_secret_rejected() {
        let err =
            Session::with_secret(iron_and_thor(), "Wolverine", GameConfig::default()).unwrap_err();
        assert!(matches!(err, GameError::UnknownCharacter(name) if name == "Wolverine"));
    }

    #[test]
    fn start_shows_intro() {
        let mut s = Session::with_secret(iron_and_thor(), "thor", GameConfig::default()).unwrap();
        let entries = s.start().unwrap();
        assert_eq!(entries.len(), 1);
        assert!(entries[0].text().contains("You have 5 chances"));
        assert_eq!(s.state(), GameState::InProgress);
        assert!(s.start().unwrap().is_empty());
    }

    #[test]
    fn handlers_rejected_before_start() {
        let mut s = Session::with_secret(iron_and_thor(), "Thor", GameConfig::default()).unwrap();
        assert!(matches!(s.guess("Thor"), Err(GameError::NotStarted)));
        assert!(s.transcript().is_empty());
    }

    #[test]
    fn reset_gives_fresh_session() {
        let mut s = human(iron_and_thor(), "Thor", GameConfig::default());
        s.guess("Iron Man").unwrap();
        s.hint().unwrap();
        s.reset();
        assert_eq!(s.state(), GameState::NotStarted);
        assert!(s.transcript().is_empty());
        assert_eq!(s.attempts_remaining(), 5);
        assert_eq!(s.hints_shown(), 0);
        assert!(s.roster().contains(s.secret()));
        assert!(s.start().is_ok());
    }

    #[test]
    fn reset_after_terminal_allows_play() {
        let mut s = human(iron_and_thor(), "Thor", GameConfig::default());
        s.guess("thor").unwrap();
        assert!(s.state().is_terminal());
        s.reset();
        s.start().unwrap();
        assert!(s.guess("Iron Man").is_ok());
    }

    // -- Human guesses ----------------------------------------------------------

    #[test]
    fn correct_guess_wins_case_insensitively() {
        let mut s = human(iron_and_thor(), "Thor", GameConfig::default());
        s.guess("  tHoR ").unwrap();
        assert_eq!(s.state(), GameState::Win);
        let (won, message) = last_outcome(&s);
        assert!(won);
        assert_eq!(message, "That's right! The character was Thor! You win!");
    }

    #[test]
    fn wrong_guess_keeps_playing() {
        let mut s = human(iron_and_thor(), "Thor", GameConfig::default());
        let entries = s.guess("Iron Man").unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(
            entries[1].text(),
            "Nope, that's not me. You have 4 guesses left. Try another question!"
        );
        assert_eq!(s.attempts_remaining(), 4);
        assert_eq!(s.state(), GameState::InProgress);
    }

    #[test]
    fn last_wrong_guess_loses_and_reveals_secret() {
        let mut s = human(iron_and_thor(), "Thor", GameConfig::default().with_attempts(1));
        s.guess("Iron Man").unwrap();
        assert_eq!(s.state(), GameState::Lose);
        assert_eq!(s.attempts_remaining(), 0);
        let (won, message) = last_outcome(&s);
        assert!(!won);
        assert!(message.contains("Thor"));
        assert!(message.contains("out of guesses"));
    }

    #[test]
    fn empty_guess_rejected_without_mutation() {
        let mut s = human(iron_and_thor(), "Thor", GameConfig::default());
        let before = s.transcript().len();
        assert!(matches!(s.guess("   "), Err(GameError::EmptyInput)));
        assert_eq!(s.attempts_remaining(), 5);
        assert_eq!(s.transcript().len(), before);
    }

    #[test]
    fn successful_question_uses_one_question() {
        let mut s = human(iron_and_thor(), "Thor", GameConfig::default());
        let entries = s.ask(" Can you fly? ", &EchoOracle).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].text(), "Can you fly?");
        assert_eq!(entries[1].text(), "Thor: Can you fly?");
        assert_eq!(s.questions_remaining(), 19);
        assert_eq!(s.attempts_remaining(), 5);
    }

    #[test]
    fn oracle_failure_is_contained() {
        let mut s = human(iron_and_thor(), "Thor", GameConfig::default());
        let entries = s.ask("Are you human?", &OfflineOracle).unwrap();
        assert!(matches!(entries[1], Entry::OracleFailure { .. }));
        assert_eq!(entries[1].text(), "Unable to answer: no oracle configured");
        assert_eq!(s.questions_remaining(), 20);
        assert_eq!(s.attempts_remaining(), 5);
        assert_eq!(s.state(), GameState::InProgress);
    }

    #[test]
    fn oracle_failure_can_cost_a_question() {
        let cfg = GameConfig::default().with_charged_failures(true);
        let mut s = human(iron_and_thor(), "Thor", cfg);
        s.ask("Are you human?", &OfflineOracle).unwrap();
        assert_eq!(s.questions_remaining(), 19);
        assert_eq!(s.state(), GameState::InProgress);
    }

    #[test]
    fn question_budget_is_enforced() {
        let cfg = GameConfig::default().with_max_questions(1);
        let mut s = human(iron_and_thor(), "Thor", cfg);
        let entries = s.ask("Can you fly?", &EchoOracle).unwrap();
        assert_eq!(
            entries.last().unwrap().text(),
            "That was your last question. Make a guess!"
        );
        let before = s.transcript().len();
        assert!(matches!(
            s.ask("Are you green?", &EchoOracle),
            Err(GameError::OutOfQuestions)
        ));
        assert_eq!(s.transcript().len(), before);
        assert_eq!(s.questions_remaining(), 0);
        assert!(s.guess("Thor").is_ok());
    }

    #[test]
    fn hints_reveal_in_order_then_run_out() {
        let mut s = human(iron_and_thor(), "Thor", GameConfig::default());
        assert_eq!(s.hint().unwrap()[0].text(), "Hint 1: I was not born on Earth.");
        assert_eq!(
            s.hint().unwrap()[0].text(),
            "Hint 2: Only the worthy may lift my weapon."
        );
        assert_eq!(
            s.hint().unwrap()[0].text(),
            "No more hints! You've seen them all."
        );
        assert_eq!(s.hints_shown(), 2);
        assert_eq!(s.attempts_remaining(), 5);
    }

    #[test]
    fn classify_routes_input() {
        let s = human(iron_and_thor(), "Thor", GameConfig::default());
        assert_eq!(s.classify("guess thor"), Intent::Guess("Thor".into()));
        assert_eq!(s.classify("Guess: Hulk!"), Intent::Guess("Hulk".into()));
        assert_eq!(s.classify("is it iron man?"), Intent::Guess("Iron Man".into()));
        assert_eq!(s.classify("Give me a hint!"), Intent::Hint);
        assert_eq!(s.classify("hint"), Intent::Hint);
        assert_eq!(
            s.classify("Can you fly?"),
            Intent::Question("Can you fly?".into())
        );
        assert_eq!(s.classify("guess"), Intent::Guess(String::new()));
    }

    #[test]
    fn submit_dispatches() {
        let mut s = human(iron_and_thor(), "Thor", GameConfig::default());
        s.submit("hint", &EchoOracle).unwrap();
        assert_eq!(s.hints_shown(), 1);
        s.submit("Do you have a hammer?", &EchoOracle).unwrap();
        assert_eq!(s.questions_remaining(), 19);
        s.submit("I think you are Thor", &EchoOracle).unwrap();
        assert_eq!(s.state(), GameState::Win);
        assert!(matches!(
            s.submit("guess", &EchoOracle),
            Err(GameError::GameOver)
        ));
    }

    #[test]
    fn system_actions_rejected_in_human_mode() {
        let mut s = human(iron_and_thor(), "Thor", GameConfig::default());
        assert!(matches!(
            s.answer(true),
            Err(GameError::WrongMode {
                expected: Mode::SystemGuesses
            })
        ));
        assert!(s.truthful_answer().is_err());
    }

    #[test]
    fn terminal_state_freezes_session() {
        let mut s = human(iron_and_thor(), "Thor", GameConfig::default());
        s.guess("Thor").unwrap();
        let len = s.transcript().len();
        assert!(matches!(s.guess("Thor"), Err(GameError::GameOver)));
        assert!(matches!(s.ask("Why?", &EchoOracle), Err(GameError::GameOver)));
        assert!(matches!(s.hint(), Err(GameError::GameOver)));
        assert!(matches!(s.start(), Err(GameError::GameOver)));
        assert_eq!(s.transcript().len(), len);
        assert_eq!(s.attempts_remaining(), 4);
        assert_eq!(s.questions_remaining(), 20);
    }

    #[test]
    fn typed_answers() {
        assert_eq!(parse_answer(" Yes "), Some(true));
        assert_eq!(parse_answer("N"), Some(false));
        assert_eq!(parse_answer("maybe"), None);
    }

    // -- System guesses ---------------------------------------------------------

    #[test]
    fn eliminating_to_the_secret_wins() {
        let mut s = system(iron_and_thor(), "Thor", GameConfig::default());
        assert_eq!(s.pending_question(), Some(TraitTag::Avenger));
        assert!(!s.truthful_answer().unwrap());

        let entries = s.answer(false).unwrap().to_vec();
        assert_eq!(s.candidates().len(), 1);
        assert_eq!(s.candidates()[0].name, "Thor");
        assert!(
            entries
                .iter()
                .any(|e| matches!(e, Entry::FinalGuess { name, .. } if name == "Thor"))
        );
        assert_eq!(s.state(), GameState::Win);
        assert_eq!(s.pending_question(), None);
    }

    #[test]
    fn single_character_roster_guesses_at_start() {
        let roster = vec![Character::new("Nebula").with_traits([TraitTag::Cyborg])];
        let s = system(roster, "Nebula", GameConfig::default());
        assert_eq!(s.state(), GameState::Win);
        assert_eq!(s.questions_asked(), 0);
    }

    #[test]
    fn exhausted_vocabulary_loses() {
        let roster = vec![
            Character::new("A").with_traits([TraitTag::Avenger]),
            Character::new("B").with_traits([TraitTag::Avenger]),
            Character::new("C"),
        ];
        let mut s = system(roster, "A", GameConfig::default());
        assert_eq!(s.pending_question(), Some(TraitTag::Avenger));
        s.asked = TraitTag::ALL
            .into_iter()
            .filter(|t| *t != TraitTag::Avenger)
            .collect();

        let entries = s.answer(true).unwrap().to_vec();
        assert_eq!(s.state(), GameState::Lose);
        assert_eq!(s.candidates().len(), 2);
        assert!(
            !entries
                .iter()
                .any(|e| matches!(e, Entry::SystemQuestion { .. }))
        );
        let (won, message) = last_outcome(&s);
        assert!(!won);
        assert!(message.contains("out of questions"));
        assert!(matches!(s.answer(true), Err(GameError::GameOver)));
    }

    #[test]
    fn indistinguishable_candidates_get_a_tie_break_guess() {
        let roster = vec![
            Character::new("A").with_traits([TraitTag::Avenger]),
            Character::new("B").with_traits([TraitTag::Avenger]),
            Character::new("C"),
        ];
        let mut s = system(roster, "A", GameConfig::default());
        let entries = s.answer(true).unwrap();
        let guessed = entries
            .iter()
            .find_map(|e| match e {
                Entry::FinalGuess { name, .. } => Some(name.clone()),
                _ => None,
            })
            .unwrap();
        assert!(guessed == "A" || guessed == "B");
        let expected = if guessed == "A" {
            GameState::Win
        } else {
            GameState::Lose
        };
        assert_eq!(s.state(), expected);
    }

    #[test]
    fn question_ceiling_loses() {
        let roster = vec![
            Character::new("A").with_traits([TraitTag::Avenger, TraitTag::Hero]),
            Character::new("B").with_traits([TraitTag::Avenger]),
            Character::new("C"),
        ];
        let mut s = system(roster, "A", GameConfig::default().with_max_questions(1));
        s.answer(true).unwrap();
        assert_eq!(s.questions_remaining(), 0);
        assert_eq!(s.state(), GameState::Lose);
        assert!(last_outcome(&s).1.contains("out of questions"));
    }

    #[test]
    fn contradictory_answers_lose() {
        let mut s = system(iron_and_thor(), "Thor", GameConfig::default());
        s.pending = Some(TraitTag::Wings);
        s.answer(true).unwrap();
        assert!(s.candidates().is_empty());
        assert_eq!(s.state(), GameState::Lose);
        assert!(last_outcome(&s).1.contains("None of my characters"));
    }

    #[test]
    fn answer_without_pending_question() {
        let mut s = Session::with_secret(
            iron_and_thor(),
            "Thor",
            GameConfig::default().with_mode(Mode::SystemGuesses),
        )
        .unwrap();
        assert!(matches!(s.answer(true), Err(GameError::NotStarted)));
        s.start().unwrap();
        s.pending = None;
        assert!(matches!(s.answer(true), Err(GameError::NoPendingQuestion)));
    }

    #[test]
    fn human_actions_rejected_in_system_mode() {
        let mut s = system(iron_and_thor(), "Thor", GameConfig::default());
        assert!(matches!(
            s.guess("Thor"),
            Err(GameError::WrongMode {
                expected: Mode::HumanGuesses
            })
        ));
        assert!(s.hint().is_err());
    }

    #[test]
    fn truthful_self_play_always_wins_on_builtin() {
        let cat = Catalogue::builtin();
        for difficulty in Difficulty::ALL {
            for strategy in Strategy::ALL {
                for seed in 0..8 {
                    let cfg = GameConfig::default()
                        .with_mode(Mode::SystemGuesses)
                        .with_difficulty(difficulty)
                        .with_strategy(strategy)
                        .with_seed(seed);
                    let mut s = Session::new(&cat, cfg).unwrap();
                    s.start().unwrap();
                    while !s.state().is_terminal() {
                        let yes = s.truthful_answer().unwrap();
                        s.answer(yes).unwrap();
                        assert!(s.candidates().contains(s.secret()));
                    }
                    assert_eq!(s.state(), GameState::Win, "{difficulty} {strategy} {seed}");
                }
            }
        }
    }

    #[test]
    fn status_line() {
        let s = human(iron_and_thor(), "Thor", GameConfig::default());
        assert_eq!(
            s.status(),
            "You Guess | Easy | 5 guesses left | 20 questions left | 0 hints shown | In Progress"
        );
        let s = system(iron_and_thor(), "Thor", GameConfig::default());
        assert!(s.status().starts_with("I Guess | Easy | Priority strategy | 2 candidates"));
        let s = system(
            iron_and_thor(),
            "Thor",
            GameConfig::default().with_strategy(Strategy::BestSplit),
        );
        assert!(s.status().contains("| Best Split strategy |"));
    }
}
