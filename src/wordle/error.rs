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

use thiserror::Error;
use super::prelude::WORD_SIZE;

/// Failures while building a Dictionary. These are fatal: the load is aborted on the first one.
#[derive(Error, Debug)]
pub enum LoadDictErr {
    #[error("malformed dictionary entry '{entry}' on line {line} (expected {} letters)", WORD_SIZE)]
    MalformedEntry { line: usize, entry: String },
    #[error("invalid character '{character}' in dictionary entry '{entry}' on line {line}")]
    InvalidCharacter {
        line: usize,
        entry: String,
        character: char,
    },
    #[error("the dictionary contains no words")]
    Empty,
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Failures while playing a turn or picking a guess. None of these corrupt the session state.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SolverErr {
    #[error("expected {expected} letters but got {actual}")]
    InvalidLength { expected: usize, actual: usize },
    #[error("provided guess '{0}' is not valid")]
    InvalidGuess(String),
    #[error("followup error: '{0}' is not one of G/g, Y/y, X/x")]
    InvalidFeedback(char),
    #[error("the word '{0}' is not in the dictionary")]
    UnknownWord(String),
    #[error("no possible words remain")]
    EmptyCandidateSet,
    #[error("the pattern table has not been precomputed")]
    MissingPrecomputation,
    #[error("this game has no secret word to score against")]
    NoSecret,
    #[error("the wordle puzzle is already solved")]
    AlreadySolved,
    #[error("no turns remaining")]
    TurnsExhausted,
}
