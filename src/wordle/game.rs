/*
 * MIT License
 *
 * Copyright (c) 2022 Joseph Sacchini
 *
 * Permission is hereby granted, free of charge, to any person obtaining a copy
 * of this software and associated documentation files (the "Software"), to deal
 * in the Software without restriction, including without limitation the rights
 * to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
 * copies of the Software, and to permit persons to whom the Software is
 * furnished to do so, subject to the following conditions:
 *
 * The above copyright notice and this permission notice shall be included in all
 * copies or substantial portions of the Software.
 *
 * THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
 * IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
 * FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
 * AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
 * LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
 * OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
 * SOFTWARE.
 */


use super::{
    prelude::*,
    color::*,
    dictionary::Dictionary,
    error::SolverErr,
    filter::recompute_candidates,
    select::GuessSelector,
    state::ConstraintState,
};

/// Where a game stands after its latest turn
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Status {
    InProgress,
    /// the latest guess came back all Correct
    Win,
    /// NUM_TURNS guesses were made without a win
    Loss,
}

impl Status {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Status::InProgress)
    }
}

/// What a single accepted guess produced
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TurnOutcome {
    pub pattern: Pattern,
    pub status: Status,
    /// 1-based number of the turn that was just played
    pub turn: usize,
}

///
/// One game session. Owns its ConstraintState exclusively and borrows the Dictionary it was started
/// with, so a single Dictionary can back any number of games at once while every index a game
/// holds (the secret, the candidates) always refers to that same Dictionary.
///
/// A game either knows the secret, in which case it scores guesses itself, or it does not
/// ("unknown word" mode), in which case the caller supplies the feedback the real puzzle showed.
///
/// Once Win or Loss is reached, every further turn is rejected.
///
#[derive(Clone, Debug)]
pub struct Game<'a> {
    dictionary: &'a Dictionary,
    secret: Option<usize>,
    state: ConstraintState,
    history: Vec<(String, Pattern)>,
    status: Status,
}

impl<'a> Game<'a> {
    /// Starts a game against a secret, which must be a word of the dictionary
    pub fn new(dictionary: &'a Dictionary, secret: &str) -> Result<Self, SolverErr> {
        let secret = normalize_wordle_word(secret);
        parse_word(&secret)?;
        let idx = dictionary.index_of(&secret).ok_or(SolverErr::UnknownWord(secret))?;

        Ok(Self::with_secret(dictionary, Some(idx)))
    }

    /// Starts a game where the feedback comes from outside (e.g. the real puzzle)
    pub fn unknown(dictionary: &'a Dictionary) -> Self {
        Self::with_secret(dictionary, None)
    }

    fn with_secret(dictionary: &'a Dictionary, secret: Option<usize>) -> Self {
        Self {
            dictionary,
            secret,
            state: ConstraintState::new(),
            history: Vec::with_capacity(NUM_TURNS),
            status: Status::InProgress,
        }
    }

    ///
    /// Plays `guess` against the secret: scores it, records the feedback, and refilters the
    /// candidates. A malformed guess is rejected before anything changes, so it does not use up
    /// a turn.
    ///
    pub fn turn(&mut self, guess: &str) -> Result<TurnOutcome, SolverErr> {
        self.ensure_playable()?;
        let secret = self.secret.ok_or(SolverErr::NoSecret)?;
        let guess = parse_guess(guess)?;
        let pattern = Pattern::score_words(self.dictionary.word(secret), &guess);
        Ok(self.record(guess, pattern))
    }

    ///
    /// Records a guess together with externally supplied feedback such as "xxgxy". Works in either
    /// mode; a game with a secret does not double check the feedback.
    ///
    pub fn turn_with_feedback(&mut self, guess: &str, result: &str) -> Result<TurnOutcome, SolverErr> {
        self.ensure_playable()?;
        let guess = parse_guess(guess)?;
        let pattern = Pattern::parse_feedback(result)?;
        Ok(self.record(guess, pattern))
    }

    ///
    /// Like `turn_with_feedback`, but only keeps the turn if some candidate survives it. Feedback
    /// that contradicts the earlier turns (usually a typo) is reported as EmptyCandidateSet and the
    /// game is left exactly as it was.
    ///
    pub fn turn_if_consistent(&mut self, guess: &str, result: &str) -> Result<TurnOutcome, SolverErr> {
        let mut trial = self.clone();
        let outcome = trial.turn_with_feedback(guess, result)?;
        if trial.candidates().is_empty() {
            return Err(SolverErr::EmptyCandidateSet);
        }

        *self = trial;
        Ok(outcome)
    }

    /// Asks the selector for the next guess, filtering first if no turn has been played yet
    pub fn recommend(&mut self, selector: &mut dyn GuessSelector) -> Result<usize, SolverErr> {
        if !self.state.is_seeded() {
            recompute_candidates(self.dictionary, &mut self.state);
        }

        selector.select(self.dictionary, &self.state)
    }

    fn ensure_playable(&self) -> Result<(), SolverErr> {
        match self.status {
            Status::InProgress => Ok(()),
            Status::Win => Err(SolverErr::AlreadySolved),
            Status::Loss => Err(SolverErr::TurnsExhausted),
        }
    }

    fn record(&mut self, guess: Word, pattern: Pattern) -> TurnOutcome {
        self.state.apply_feedback(&guess, &pattern);
        recompute_candidates(self.dictionary, &mut self.state);
        self.history.push((String::from_utf8_lossy(&guess).into_owned(), pattern));

        self.status = if pattern.is_win() {
            Status::Win
        } else if self.history.len() >= NUM_TURNS {
            Status::Loss
        } else {
            Status::InProgress
        };

        TurnOutcome { pattern, status: self.status, turn: self.history.len() }
    }

    pub fn dictionary(&self) -> &'a Dictionary {
        self.dictionary
    }

    pub fn status(&self) -> Status {
        self.status
    }

    /// Number of turns played so far
    pub fn turns(&self) -> usize {
        self.history.len()
    }

    pub fn secret(&self) -> Option<usize> {
        self.secret
    }

    pub fn state(&self) -> &ConstraintState {
        &self.state
    }

    pub fn candidates(&self) -> &[usize] {
        self.state.candidates()
    }

    /// Every guess played so far with the feedback it got, oldest first
    pub fn history(&self) -> &[(String, Pattern)] {
        &self.history
    }
}

fn parse_guess(raw: &str) -> Result<Word, SolverErr> {
    parse_word(&normalize_wordle_word(raw))
}
