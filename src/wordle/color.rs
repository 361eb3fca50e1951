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

use std::fmt::{Display, Formatter};
use std::ops::{Index, IndexMut};
use self::Coloring::*;
use super::{prelude::*, error::SolverErr};

///
/// Every pattern maps to a "code" which uniquely identifies it. The range is 0 -> 3^5=243 for 3
/// colorings in a 5 letter puzzle, so a u8 is enough (and keeps the precomputed table small).
///
pub type PatternCode = u8;

///
/// The three tags a wordle square can get...
///   * Absent = the letter is not in the answer (or every copy of it has already been accounted
///              for by other squares of the same guess)
///   * Present = the letter is in the answer, but not in this position
///   * Correct = the letter is in the answer at this position
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Coloring {
    Absent,
    Present,
    Correct,
}

impl Coloring {
    pub const ALL: [Coloring; 3] = [Absent, Present, Correct];
    pub const NUM: usize = Self::ALL.len();

    /// Converts the coloring to a base-3 digit (0, 1, or 2)
    pub fn ordinal(&self) -> PatternCode {
        match self {
            Absent => 0,
            Present => 1,
            Correct => 2,
        }
    }

    pub fn from_ordinal(code: PatternCode) -> Option<Self> {
        Some(match code {
            0 => Absent,
            1 => Present,
            2 => Correct,
            _ => return None,
        })
    }

    /// Reads a single feedback character: G/g = Correct, Y/y = Present, X/x = Absent
    pub fn from_feedback_char(c: char) -> Result<Self, SolverErr> {
        match c {
            'G' | 'g' => Ok(Correct),
            'Y' | 'y' => Ok(Present),
            'X' | 'x' => Ok(Absent),
            other => Err(SolverErr::InvalidFeedback(other)),
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            Absent => "⬛",
            Present => "🟨",
            Correct => "🟩"
        }
    }
}

pub type PatternArray = [Coloring; WORD_SIZE];

/// The full feedback for one guess against one target, one Coloring per square.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Pattern(pub PatternArray);

impl From<PatternArray> for Pattern {
    fn from(arr: PatternArray) -> Self {
        Self(arr)
    }
}

impl Index<usize> for Pattern {
    type Output = Coloring;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl IndexMut<usize> for Pattern {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.0[index]
    }
}

impl Pattern {
    /// How many different patterns exist (3^5=243 for a 5 letter puzzle)
    pub const NUM_STATES: usize = Coloring::NUM.pow(WORD_SIZE as u32);

    pub const ALL_CORRECT: Pattern = Pattern([Correct; WORD_SIZE]);

    ///
    /// Validating entry point of the feedback engine: the feedback `guess` gets when the answer is
    /// `secret`. Both must be 5 lowercase letters.
    ///
    pub fn score(secret: &str, guess: &str) -> Result<Self, SolverErr> {
        let secret = parse_word(secret)?;
        let guess = parse_word(guess)?;
        Ok(Self::score_words(&secret, &guess))
    }

    ///
    /// Compute what colors would be shown given some secret & guess. For example if the guess was
    /// "tares" and the answer was "scare" we should compute [Absent, Present, Present, Present, Present]
    ///
    /// The order of the two passes matters when letters repeat:
    /// * a "budget" for each letter in the alphabet is taken from the secret
    /// * the GREEN pass marks all exact matches first, spending their budget
    /// * the YELLOW pass then walks the rest left to right, marking Present while budget remains
    ///
    pub fn score_words(secret: &Word, guess: &Word) -> Self {
        let mut out = Self::default();
        let mut budget = count_letters(secret);

        // GREEN pass
        for i in 0..WORD_SIZE {
            if guess[i] == secret[i] {
                budget[letter_idx(guess[i])] -= 1;
                out[i] = Correct;
            }
        }

        // YELLOW pass
        for i in 0..WORD_SIZE {
            if out[i] != Correct {
                let counter = &mut budget[letter_idx(guess[i])];
                if *counter > 0 {
                    *counter -= 1;
                    out[i] = Present;
                }
            }
        }

        out
    }

    ///
    /// Parses externally supplied feedback such as "xxgxy" (case insensitive G/Y/X).
    ///
    pub fn parse_feedback(result: &str) -> Result<Self, SolverErr> {
        let result = result.trim();
        let actual = result.chars().count();
        if actual != WORD_SIZE {
            return Err(SolverErr::InvalidLength { expected: WORD_SIZE, actual });
        }

        let mut out = Self::default();
        for (i, c) in result.chars().enumerate() {
            out[i] = Coloring::from_feedback_char(c)?;
        }

        Ok(out)
    }

    /// Whether every square is Correct
    pub fn is_win(&self) -> bool {
        self.0.iter().all(|c| *c == Correct)
    }

    ///
    /// Treats the pattern as a 5 digit base-3 number where square 0 is the least significant digit.
    /// The code is used as an array index when bucketing candidates, which avoids hashing.
    ///
    pub fn to_code(&self) -> PatternCode {
        let mut out = 0;
        let mut multiplier = 1;
        for i in 0..WORD_SIZE {
            out += self[i].ordinal() * multiplier;
            multiplier = multiplier.wrapping_mul(Coloring::NUM as u8);
        }
        out
    }

    pub fn from_code(mut code: PatternCode) -> Option<Self> {
        let mut out = Self::default();
        for i in 0..WORD_SIZE {
            out[i] = Coloring::from_ordinal(code % (Coloring::NUM as u8))?;
            code /= Coloring::NUM as u8;
        }

        Some(out)
    }
}

pub(crate) fn parse_word(raw: &str) -> Result<Word, SolverErr> {
    let actual = raw.chars().count();
    if actual != WORD_SIZE {
        return Err(SolverErr::InvalidLength { expected: WORD_SIZE, actual });
    }

    to_word(raw).ok_or_else(|| SolverErr::InvalidGuess(raw.to_string()))
}

impl Default for Pattern {
    fn default() -> Self {
        Self([Absent; WORD_SIZE])
    }
}

impl Display for Pattern {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for i in 0..WORD_SIZE {
            f.write_str(self[i].emoji())?;
        }

        Ok(())
    }
}
