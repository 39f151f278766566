//! Turn-loop state machine
//!
//! ```text
//! Init -> Generating -> AwaitingGuess -> (score, filter, check) -> AwaitingGuess ...
//!                              \-> AwaitingFeedback (Defense, resumed by submit_feedback)
//! Init -> AwaitingAttackGuess (Attack, resumed by submit_guess)
//! any  -> Finished(Solved | Contradiction | TurnLimitExceeded | Cancelled | Invalid)
//! ```
//!
//! Scoring, filtering and the termination check happen inside a single step
//! and are never observable on their own.

use super::{Mode, Narration, Narrations, Outcome, SessionError, SolverConfig};
use crate::core::{Code, Feedback, Scale, validate_code};
use crate::solver::{DirectExecutor, Executor, SearchError, Universe, filter_candidates};
use std::collections::VecDeque;
use std::time::Instant;

/// Where a session currently is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Nothing checked yet
    Init,
    /// Secret accepted, universe not generated yet
    Generating,
    /// Ready to compute the next engine guess
    AwaitingGuess,
    /// Defense: a guess is out, waiting for `submit_feedback`
    AwaitingFeedback,
    /// Attack: waiting for `submit_guess`
    AwaitingAttackGuess,
    /// Terminal; see `SolverSession::outcome`
    Finished,
}

/// One resolved guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Turn {
    pub guess: Code,
    pub feedback: Feedback,
    /// Candidates before and after filtering (engine modes only)
    pub candidates: Option<(usize, usize)>,
    /// Worst case promised by the search (`None` for the fixed opening)
    pub worst_case: Option<usize>,
}

/// State of one game, owned by the caller and threaded through every call
pub struct SolverSession {
    scale: Scale,
    mode: Mode,
    config: SolverConfig,
    secret_input: Option<String>,
    secret: Option<Code>,
    universe: Option<Universe>,
    candidates: Vec<Code>,
    history: Vec<Turn>,
    turn: usize,
    pending: Option<(Code, Option<usize>)>,
    phase: Phase,
    outcome: Option<Outcome>,
    queue: VecDeque<Narration>,
}

impl SolverSession {
    /// Create a session with the default configuration
    ///
    /// The secret is only used in Attack and Autoplay; when absent a random
    /// one is drawn. It is validated when the session starts running.
    #[must_use]
    pub fn new(scale: Scale, mode: Mode, secret: Option<&str>) -> Self {
        Self::with_config(scale, mode, secret, SolverConfig::default())
    }

    #[must_use]
    pub fn with_config(
        scale: Scale,
        mode: Mode,
        secret: Option<&str>,
        config: SolverConfig,
    ) -> Self {
        let secret_input = match mode {
            Mode::Defense => {
                if secret.is_some() {
                    tracing::warn!("ignoring secret given for a defense session");
                }
                None
            }
            Mode::Attack | Mode::Autoplay => secret.map(str::to_string),
        };

        tracing::info!(%scale, %mode, executor = config.executor.name(), "session created");

        Self {
            scale,
            mode,
            config,
            secret_input,
            secret: None,
            universe: None,
            candidates: Vec::new(),
            history: Vec::new(),
            turn: 0,
            pending: None,
            phase: Phase::Init,
            outcome: None,
            queue: VecDeque::new(),
        }
    }

    /// Drive the session, yielding narration as it goes
    ///
    /// The stream pauses (ends) when the caller has to act: after a Defense
    /// guess and whenever Attack waits for a guess. Calling `run` again
    /// continues from there. `stop` is consulted before the universe is
    /// generated, before every engine guess, and while a search is polled.
    ///
    /// # Examples
    /// ```
    /// use baseball_solver::core::Scale;
    /// use baseball_solver::session::{Mode, SolverSession};
    ///
    /// let scale = Scale::new(3).unwrap();
    /// let mut session = SolverSession::new(scale, Mode::Autoplay, Some("472"));
    /// let narration: Vec<_> = session.run(|| false).collect();
    ///
    /// assert!(narration.last().unwrap().is_terminal());
    /// assert!(session.outcome().unwrap().is_solved());
    /// ```
    pub fn run<F: FnMut() -> bool>(&mut self, stop: F) -> Narrations<'_, F> {
        Narrations {
            session: self,
            stop,
        }
    }

    /// Resolve the outstanding Defense guess with the caller's feedback
    ///
    /// Feedback with impossible counts is accepted and leads to a
    /// contradiction rather than an error.
    ///
    /// # Errors
    /// `WrongMode` outside Defense, `GameOver` after the end,
    /// `NotAwaitingInput` when no guess is outstanding.
    pub fn submit_feedback(&mut self, feedback: Feedback) -> Result<Narration, SessionError> {
        self.expect_input(Mode::Defense, Phase::AwaitingFeedback, "feedback")?;
        let Some((guess, worst_case)) = self.pending.take() else {
            return Err(SessionError::NotAwaitingInput("feedback"));
        };

        let before = self.candidates.len();
        self.candidates = filter_candidates(&self.candidates, &guess, feedback);
        let after = self.candidates.len();
        self.history.push(Turn {
            guess,
            feedback,
            candidates: Some((before, after)),
            worst_case,
        });
        tracing::debug!(turn = self.turn, %guess, %feedback, before, after, "feedback applied");

        let ack = format!("{feedback} for {guess}. {after} candidates remain.");
        Ok(match self.conclude(guess, feedback) {
            Some(terminal) => Narration {
                text: format!("{ack}\n{}", terminal.text),
                ..terminal
            },
            None => Narration::turn(self.turn, ack),
        })
    }

    /// Parse and submit feedback text such as `1s 2b`
    ///
    /// # Errors
    /// `Format` for unreadable text, otherwise as `submit_feedback`.
    pub fn submit_feedback_text(&mut self, text: &str) -> Result<Narration, SessionError> {
        let feedback = crate::core::parse_feedback(text)?;
        self.submit_feedback(feedback)
    }

    /// Score a guess typed by the caller against the secret (Attack)
    ///
    /// # Errors
    /// `Validation` for malformed codes (the turn is not counted),
    /// `WrongMode` outside Attack, `GameOver` after the end,
    /// `NotAwaitingInput` before the session has started.
    pub fn submit_guess(&mut self, text: &str) -> Result<Narration, SessionError> {
        self.expect_input(Mode::Attack, Phase::AwaitingAttackGuess, "guesses")?;
        let Some(secret) = self.secret else {
            return Err(SessionError::NotAwaitingInput("guesses"));
        };
        let guess = validate_code(text.trim(), self.scale)?;

        self.turn += 1;
        let feedback = Feedback::score(&guess, &secret);
        self.history.push(Turn {
            guess,
            feedback,
            candidates: None,
            worst_case: None,
        });

        if feedback.is_solved(self.scale.len()) {
            let turns = self.turn;
            return Ok(self.finish(
                format!("🎉 Correct! You found {secret} in {turns} turns. 🎉"),
                Outcome::Solved { turns, secret },
            ));
        }

        Ok(Narration::turn(
            self.turn,
            format!("Your guess {guess}: {feedback}"),
        ))
    }

    /// Stop the game early (the caller typed `stop` or left the game)
    ///
    /// # Errors
    /// `GameOver` when the game has already ended.
    pub fn cancel(&mut self) -> Result<Narration, SessionError> {
        if self.phase == Phase::Finished {
            return Err(SessionError::GameOver);
        }
        self.queue.clear();
        Ok(self.finish("⛔ Game stopped.", Outcome::Cancelled))
    }

    #[must_use]
    pub const fn scale(&self) -> Scale {
        self.scale
    }

    #[must_use]
    pub const fn mode(&self) -> Mode {
        self.mode
    }

    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub const fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Number of guesses made so far
    #[must_use]
    pub const fn turn(&self) -> usize {
        self.turn
    }

    #[must_use]
    pub fn history(&self) -> &[Turn] {
        &self.history
    }

    #[must_use]
    pub fn candidates(&self) -> &[Code] {
        &self.candidates
    }

    #[must_use]
    pub fn candidate_count(&self) -> usize {
        self.candidates.len()
    }

    /// Defense guess waiting for feedback
    #[must_use]
    pub fn pending_guess(&self) -> Option<Code> {
        self.pending.map(|(guess, _)| guess)
    }

    #[must_use]
    pub const fn outcome(&self) -> Option<&Outcome> {
        self.outcome.as_ref()
    }

    /// The secret, once the game is over
    #[must_use]
    pub fn revealed_secret(&self) -> Option<Code> {
        if self.phase != Phase::Finished {
            return None;
        }
        match &self.outcome {
            Some(Outcome::Solved { secret, .. }) => Some(*secret),
            _ => self.secret,
        }
    }

    /// One observable step of the state machine
    pub(super) fn advance(&mut self, stop: &mut dyn FnMut() -> bool) -> Option<Narration> {
        loop {
            if let Some(narration) = self.queue.pop_front() {
                return Some(narration);
            }

            match self.phase {
                Phase::Init => self.validate(),
                Phase::Generating => self.generate(stop),
                Phase::AwaitingGuess => match (self.mode, self.secret) {
                    (Mode::Autoplay, Some(secret)) => self.play_turn(secret, stop),
                    (Mode::Defense, _) => self.propose_guess(stop),
                    // Attack guesses arrive through submit_guess
                    _ => self.phase = Phase::AwaitingAttackGuess,
                },
                Phase::AwaitingFeedback | Phase::AwaitingAttackGuess | Phase::Finished => {
                    return None;
                }
            }
        }
    }

    fn validate(&mut self) {
        if self.mode == Mode::Defense {
            self.announce_generation(String::new());
            return;
        }

        let secret = match self.secret_input.take() {
            Some(text) => validate_code(text.trim(), self.scale),
            None => Ok(Code::random(self.scale, &mut rand::rng())),
        };

        match secret {
            Err(err) => {
                tracing::warn!(%err, "secret rejected");
                let narration = self.finish(format!("⛔ {err}"), Outcome::Invalid(err));
                self.queue.push_back(narration);
            }
            Ok(secret) => {
                self.secret = Some(secret);
                if self.mode == Mode::Attack {
                    self.phase = Phase::AwaitingAttackGuess;
                    self.queue.push_back(Narration::info(format!(
                        "🎯 I picked a secret {}-digit code with no repeated digits. Take a guess!",
                        self.scale
                    )));
                } else {
                    self.announce_generation(format!("Autoplay toward {secret}. "));
                }
            }
        }
    }

    /// Emitted before the expensive step so the caller can render progress
    fn announce_generation(&mut self, prefix: String) {
        let size = Universe::size_for(self.scale);
        self.queue.push_back(Narration::info(format!(
            "🎲 {prefix}Generating all {size} possible {}-digit codes... (this may take a moment)",
            self.scale
        )));
        self.phase = Phase::Generating;
    }

    fn generate(&mut self, stop: &mut dyn FnMut() -> bool) {
        if stop() {
            self.cancelled();
            return;
        }

        let started = Instant::now();
        let universe = Universe::generate(self.scale);
        self.candidates = universe.as_slice().to_vec();
        self.universe = Some(universe);
        self.phase = Phase::AwaitingGuess;
        tracing::debug!(elapsed = ?started.elapsed(), "universe ready");
    }

    fn play_turn(&mut self, secret: Code, stop: &mut dyn FnMut() -> bool) {
        if stop() {
            self.cancelled();
            return;
        }

        let before = self.candidates.len();
        let (guess, worst_case) = match self.next_guess(stop) {
            Ok(choice) => choice,
            Err(err) => {
                self.search_failed(err);
                return;
            }
        };

        self.turn += 1;
        let feedback = Feedback::score(&guess, &secret);
        self.candidates = filter_candidates(&self.candidates, &guess, feedback);
        let after = self.candidates.len();
        self.history.push(Turn {
            guess,
            feedback,
            candidates: Some((before, after)),
            worst_case,
        });

        self.queue.push_back(Narration::turn(
            self.turn,
            format!(
                "--- Turn {} ---\nThinking... ({before} candidates)\nGuess: {guess}\nResult: {feedback}\n{after} candidates remain",
                self.turn
            ),
        ));

        if let Some(terminal) = self.conclude(guess, feedback) {
            self.queue.push_back(terminal);
        }
    }

    fn propose_guess(&mut self, stop: &mut dyn FnMut() -> bool) {
        if stop() {
            self.cancelled();
            return;
        }

        let (guess, worst_case) = match self.next_guess(stop) {
            Ok(choice) => choice,
            Err(err) => {
                self.search_failed(err);
                return;
            }
        };

        self.turn += 1;
        self.pending = Some((guess, worst_case));
        self.phase = Phase::AwaitingFeedback;

        let text = if self.candidates.len() == 1 {
            format!(
                "💻 It must be {guess}! (turn {}) Confirm with '{}s 0b'.",
                self.turn, self.scale
            )
        } else {
            format!(
                "💻 Turn {}: is it {guess}? ({} candidates left)\nReply with feedback like '1s 2b'.",
                self.turn,
                self.candidates.len()
            )
        };
        self.queue.push_back(Narration::turn(self.turn, text));
    }

    fn next_guess(
        &self,
        stop: &mut dyn FnMut() -> bool,
    ) -> Result<(Code, Option<usize>), SearchError> {
        if self.history.is_empty() && self.config.fixed_opening {
            return Ok((Code::opening(self.scale), None));
        }

        let Some(universe) = self.universe.as_ref() else {
            return Err(SearchError::Exhausted);
        };

        let started = Instant::now();
        let selection = match self.config.executor.search(universe, &self.candidates, stop) {
            Err(SearchError::WorkerLost) => {
                tracing::error!("search worker lost, retrying on the calling thread");
                DirectExecutor.search(universe, &self.candidates, stop)?
            }
            other => other?,
        };

        tracing::debug!(
            turn = self.turn + 1,
            candidates = self.candidates.len(),
            guess = %selection.guess,
            worst_case = selection.worst_case,
            evaluated = selection.evaluated,
            elapsed = ?started.elapsed(),
            "guess selected"
        );

        Ok((selection.guess, Some(selection.worst_case)))
    }

    /// Termination check after a resolved guess, in the order solved,
    /// contradiction, turn limit
    fn conclude(&mut self, guess: Code, feedback: Feedback) -> Option<Narration> {
        let turns = self.turn;

        if feedback.is_solved(self.scale.len()) {
            return Some(self.finish(
                format!("🎉 Solved! Found {guess} in {turns} turns."),
                Outcome::Solved {
                    turns,
                    secret: guess,
                },
            ));
        }

        if self.candidates.is_empty() {
            tracing::warn!(turns, "candidate set is empty");
            return Some(self.finish(
                "⚠️ No candidates remain: the feedback so far contradicts itself.",
                Outcome::Contradiction { turns },
            ));
        }

        if turns >= self.config.max_turns {
            let limit = self.config.max_turns;
            tracing::warn!(limit, "turn limit reached without a solution");
            return Some(self.finish(
                format!("⛔ No solution within {limit} turns, giving up."),
                Outcome::TurnLimitExceeded { limit },
            ));
        }

        self.phase = Phase::AwaitingGuess;
        None
    }

    fn search_failed(&mut self, err: SearchError) {
        match err {
            SearchError::Cancelled => self.cancelled(),
            // The direct retry never loses its worker, so only an empty set remains
            SearchError::Exhausted | SearchError::WorkerLost => {
                let turns = self.turn;
                let narration = self.finish(
                    "⚠️ No candidates remain: the feedback so far contradicts itself.",
                    Outcome::Contradiction { turns },
                );
                self.queue.push_back(narration);
            }
        }
    }

    fn cancelled(&mut self) {
        let narration = self.finish("⛔ Computation stopped at user request.", Outcome::Cancelled);
        self.queue.push_back(narration);
    }

    fn finish(&mut self, text: impl Into<String>, outcome: Outcome) -> Narration {
        tracing::info!(%outcome, turns = self.turn, "session finished");
        self.phase = Phase::Finished;
        self.pending = None;
        self.outcome = Some(outcome.clone());
        Narration {
            turn: (self.turn > 0).then_some(self.turn),
            text: text.into(),
            outcome: Some(outcome),
        }
    }

    fn expect_input(
        &self,
        mode: Mode,
        phase: Phase,
        action: &'static str,
    ) -> Result<(), SessionError> {
        if self.mode != mode {
            return Err(SessionError::WrongMode {
                action,
                mode: self.mode,
            });
        }
        if self.phase == Phase::Finished {
            return Err(SessionError::GameOver);
        }
        if self.phase != phase {
            return Err(SessionError::NotAwaitingInput(action));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::DEFAULT_MAX_TURNS;
    use crate::solver::ExecutorType;
    use std::time::Duration;

    fn scale(n: usize) -> Scale {
        Scale::new(n).unwrap()
    }

    fn direct() -> SolverConfig {
        SolverConfig::new().with_executor(ExecutorType::from_name("direct", Duration::ZERO))
    }

    fn drain(session: &mut SolverSession) -> Vec<Narration> {
        session.run(|| false).collect()
    }

    #[test]
    fn autoplay_solves_within_limit() {
        for (n, secret) in [(3, "472"), (4, "9876"), (4, "1023")] {
            let mut session =
                SolverSession::with_config(scale(n), Mode::Autoplay, Some(secret), direct());
            let narration = drain(&mut session);

            let last = narration.last().unwrap();
            assert!(last.is_terminal());
            match session.outcome() {
                Some(Outcome::Solved { turns, secret: found }) => {
                    assert_eq!(found.to_string(), secret);
                    assert!(*turns <= DEFAULT_MAX_TURNS);
                    assert_eq!(*turns, session.history().len());
                }
                other => panic!("expected a solve for {secret}, got {other:?}"),
            }
        }
    }

    #[test]
    fn autoplay_solves_every_three_digit_secret() {
        let universe = Universe::generate(scale(3));
        let mut worst = 0;

        for target in universe.iter() {
            let text = target.to_string();
            let mut session =
                SolverSession::with_config(scale(3), Mode::Autoplay, Some(&text), direct());
            drain(&mut session);

            match session.outcome() {
                Some(Outcome::Solved { turns, secret }) => {
                    assert_eq!(secret, target);
                    worst = worst.max(*turns);
                }
                other => panic!("expected a solve for {text}, got {other:?}"),
            }
        }
        assert!(worst <= 6, "worst game took {worst} turns");
    }

    #[test]
    fn autoplay_opens_with_fixed_guess() {
        let mut session = SolverSession::with_config(scale(4), Mode::Autoplay, Some("5678"), direct());
        drain(&mut session);

        let first = session.history()[0];
        assert_eq!(first.guess.to_string(), "0123");
        assert_eq!(first.feedback, Feedback::new(0, 0));
        assert_eq!(first.candidates, Some((5040, 360)));
        assert_eq!(first.worst_case, None);
    }

    #[test]
    fn autoplay_candidates_shrink_and_keep_secret() {
        let mut session = SolverSession::with_config(scale(4), Mode::Autoplay, Some("4071"), direct());
        drain(&mut session);

        for turn in session.history() {
            let (before, after) = turn.candidates.unwrap();
            assert!(after <= before);
        }
        assert_eq!(session.revealed_secret().unwrap().to_string(), "4071");
    }

    #[test]
    fn autoplay_without_secret_draws_one() {
        let mut session = SolverSession::with_config(scale(3), Mode::Autoplay, None, direct());
        drain(&mut session);
        assert!(session.outcome().unwrap().is_solved());
    }

    #[test]
    fn offloaded_autoplay_matches_direct() {
        let mut direct_session =
            SolverSession::with_config(scale(4), Mode::Autoplay, Some("2580"), direct());
        let mut offloaded =
            SolverSession::new(scale(4), Mode::Autoplay, Some("2580"));
        drain(&mut direct_session);
        drain(&mut offloaded);

        assert_eq!(direct_session.history(), offloaded.history());
    }

    #[test]
    fn stop_before_generation_cancels() {
        let mut session = SolverSession::new(scale(4), Mode::Autoplay, Some("1234"));
        let narration: Vec<_> = session.run(|| true).collect();

        assert_eq!(narration.len(), 2);
        assert!(narration[0].text.contains("5040"));
        assert_eq!(narration[1].outcome, Some(Outcome::Cancelled));
        assert_eq!(session.candidate_count(), 0);
        assert!(session.history().is_empty());
        assert_eq!(session.phase(), Phase::Finished);
    }

    #[test]
    fn stop_between_turns_cancels() {
        let mut session = SolverSession::with_config(scale(4), Mode::Autoplay, Some("9876"), direct());
        let mut checks = 0;
        let narration: Vec<_> = session
            .run(|| {
                checks += 1;
                checks > 2
            })
            .collect();

        assert_eq!(narration.last().unwrap().outcome, Some(Outcome::Cancelled));
        assert_eq!(session.history().len(), 1);
    }

    #[test]
    fn stop_during_offloaded_search_leaves_candidates() {
        let config = SolverConfig::new().with_fixed_opening(false);
        let mut session = SolverSession::with_config(scale(4), Mode::Autoplay, Some("9876"), config);
        let mut checks = 0;
        let started = Instant::now();
        let narration: Vec<_> = session
            .run(|| {
                checks += 1;
                checks > 2
            })
            .collect();

        assert_eq!(narration.last().unwrap().outcome, Some(Outcome::Cancelled));
        assert_eq!(session.candidate_count(), 5040);
        assert!(session.history().is_empty());
        assert!(started.elapsed() < Duration::from_secs(5));
    }

    #[test]
    fn invalid_secret_ends_before_generation() {
        let mut session = SolverSession::new(scale(4), Mode::Autoplay, Some("12a3"));
        let narration = drain(&mut session);

        assert_eq!(narration.len(), 1);
        assert!(narration[0].text.starts_with("⛔"));
        assert!(matches!(
            session.outcome(),
            Some(Outcome::Invalid(crate::core::ValidationError::NonDigit(_)))
        ));
        assert_eq!(session.candidate_count(), 0);
    }

    #[test]
    fn secret_of_wrong_length_is_invalid() {
        let mut session = SolverSession::new(scale(4), Mode::Attack, Some("123"));
        drain(&mut session);
        assert!(matches!(
            session.outcome(),
            Some(Outcome::Invalid(crate::core::ValidationError::WrongLength { .. }))
        ));
    }

    #[test]
    fn turn_limit_is_reported() {
        let config = direct().with_max_turns(1);
        let mut session = SolverSession::with_config(scale(4), Mode::Autoplay, Some("9876"), config);
        drain(&mut session);

        assert_eq!(
            session.outcome(),
            Some(&Outcome::TurnLimitExceeded { limit: 1 })
        );
        assert_eq!(session.history().len(), 1);
    }

    #[test]
    fn run_after_finish_yields_nothing() {
        let mut session = SolverSession::with_config(scale(3), Mode::Autoplay, Some("012"), direct());
        drain(&mut session);
        assert!(drain(&mut session).is_empty());
    }

    #[test]
    fn defense_solves_with_truthful_feedback() {
        let secret = validate_code("7305", scale(4)).unwrap();
        let mut session = SolverSession::with_config(scale(4), Mode::Defense, None, direct());

        loop {
            drain(&mut session);
            if session.phase() == Phase::Finished {
                break;
            }
            let guess = session.pending_guess().unwrap();
            session
                .submit_feedback(Feedback::score(&guess, &secret))
                .unwrap();
        }

        match session.outcome() {
            Some(Outcome::Solved { secret: found, .. }) => assert_eq!(*found, secret),
            other => panic!("expected a solve, got {other:?}"),
        }
    }

    #[test]
    fn defense_first_guess_is_opening() {
        let mut session = SolverSession::new(scale(4), Mode::Defense, None);
        let narration = drain(&mut session);

        assert_eq!(session.phase(), Phase::AwaitingFeedback);
        assert_eq!(session.pending_guess().unwrap().to_string(), "0123");
        assert!(narration.last().unwrap().text.contains("0123"));
        assert_eq!(session.turn(), 1);
    }

    #[test]
    fn defense_impossible_feedback_is_contradiction() {
        let mut session = SolverSession::with_config(scale(4), Mode::Defense, None, direct());
        drain(&mut session);

        let narration = session.submit_feedback_text("5s 0b").unwrap();
        assert_eq!(narration.outcome, Some(Outcome::Contradiction { turns: 1 }));
        assert_eq!(session.candidate_count(), 0);
    }

    #[test]
    fn defense_inconsistent_feedback_is_contradiction() {
        let mut session = SolverSession::with_config(scale(3), Mode::Defense, None, direct());
        drain(&mut session);
        // 3 balls on 012 leaves {120, 201}
        session.submit_feedback(Feedback::new(0, 3)).unwrap();
        drain(&mut session);
        let guess = session.pending_guess().unwrap();
        assert_eq!(guess.to_string(), "120");

        let narration = session.submit_feedback(Feedback::new(0, 0)).unwrap();
        assert!(matches!(
            narration.outcome,
            Some(Outcome::Contradiction { turns: 2 })
        ));
    }

    #[test]
    fn defense_bad_feedback_text_leaves_state() {
        let mut session = SolverSession::with_config(scale(4), Mode::Defense, None, direct());
        drain(&mut session);

        let err = session.submit_feedback_text("two strikes").unwrap_err();
        assert!(matches!(err, SessionError::Format(_)));
        assert_eq!(session.phase(), Phase::AwaitingFeedback);
        assert_eq!(session.candidate_count(), 5040);
        assert!(session.history().is_empty());
    }

    #[test]
    fn defense_ignores_secret() {
        let mut session = SolverSession::new(scale(4), Mode::Defense, Some("1234"));
        drain(&mut session);
        assert_eq!(session.phase(), Phase::AwaitingFeedback);
        assert_eq!(session.revealed_secret(), None);
    }

    #[test]
    fn attack_scores_guesses_until_solved() {
        let mut session = SolverSession::new(scale(4), Mode::Attack, Some("0123"));
        let intro = drain(&mut session);
        assert_eq!(intro.len(), 1);
        assert_eq!(session.phase(), Phase::AwaitingAttackGuess);

        let miss = session.submit_guess("1234").unwrap();
        assert!(miss.text.contains("0S 3B"));
        assert!(!miss.is_terminal());

        let hit = session.submit_guess(" 0123 ").unwrap();
        assert!(hit.is_terminal());
        assert!(matches!(
            session.outcome(),
            Some(Outcome::Solved { turns: 2, .. })
        ));
        assert_eq!(session.submit_guess("0123"), Err(SessionError::GameOver));
    }

    #[test]
    fn attack_rejects_malformed_guess_without_counting() {
        let mut session = SolverSession::new(scale(4), Mode::Attack, Some("0123"));
        drain(&mut session);

        for bad in ["1123", "12", "abcd", ""] {
            let err = session.submit_guess(bad).unwrap_err();
            assert!(matches!(err, SessionError::Validation(_)), "{bad}: {err}");
        }
        assert_eq!(session.turn(), 0);
        assert!(session.history().is_empty());
    }

    #[test]
    fn attack_has_no_turn_limit() {
        let config = SolverConfig::new().with_max_turns(1);
        let mut session = SolverSession::with_config(scale(3), Mode::Attack, Some("987"), config);
        drain(&mut session);

        for guess in ["012", "345", "678"] {
            assert!(!session.submit_guess(guess).unwrap().is_terminal());
        }
        assert!(session.submit_guess("987").unwrap().is_terminal());
    }

    #[test]
    fn input_in_wrong_mode_or_phase_is_rejected() {
        let mut attack = SolverSession::new(scale(4), Mode::Attack, None);
        assert_eq!(
            attack.submit_guess("0123"),
            Err(SessionError::NotAwaitingInput("guesses"))
        );
        assert!(matches!(
            attack.submit_feedback(Feedback::new(0, 0)),
            Err(SessionError::WrongMode { mode: Mode::Attack, .. })
        ));

        let mut defense = SolverSession::new(scale(4), Mode::Defense, None);
        assert!(matches!(
            defense.submit_guess("0123"),
            Err(SessionError::WrongMode { mode: Mode::Defense, .. })
        ));
    }

    #[test]
    fn cancel_ends_game_once() {
        let mut session = SolverSession::new(scale(4), Mode::Attack, Some("4567"));
        drain(&mut session);

        let narration = session.cancel().unwrap();
        assert_eq!(narration.outcome, Some(Outcome::Cancelled));
        assert_eq!(session.revealed_secret().unwrap().to_string(), "4567");
        assert_eq!(session.cancel(), Err(SessionError::GameOver));
    }
}
