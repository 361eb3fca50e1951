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

use super::{prelude::*, color::*};

///
/// Everything learned from the feedback received so far, plus the candidate words that are still
/// consistent with all of it.
///
/// The letter sets are stored as LetterMasks so that checking a dictionary word against them is a
/// couple of AND instructions.
///
/// `apply_feedback` only records what a turn told us. The candidates are recomputed separately by
/// `recompute_candidates` in the filter module.
///
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ConstraintState {
    /// confirmed letter at each position
    pub(crate) green: [Option<u8>; WORD_SIZE],
    /// letters known to be wrong at each position (yellow squares, and grey squares of letters
    /// that repeat)
    pub(crate) yellow: [LetterMask; WORD_SIZE],
    /// letters known to be somewhere in the answer
    pub(crate) required: LetterMask,
    /// letters known to be nowhere in the answer
    pub(crate) excluded: LetterMask,
    /// lower bound on how many times each letter occurs, never decreases
    pub(crate) min_count: [u8; ALPHABET_SIZE],
    /// exact count of a letter once a turn showed both a coloured and a grey copy of it
    pub(crate) max_count: [Option<u8>; ALPHABET_SIZE],
    /// positions that are green, or whose letter is settled for every remaining candidate
    pub(crate) solved: [bool; WORD_SIZE],
    /// None until the first filter pass, ascending word indexes afterwards
    pub(crate) candidates: Option<Vec<usize>>,
}

impl ConstraintState {
    pub fn new() -> Self {
        Self::default()
    }

    ///
    /// Records what one guess and its feedback tell us about the answer.
    ///
    /// Grey squares are only read after the whole guess has been seen. A letter that is grey in one
    /// square but yellow/green in another just means the answer has fewer copies than the guess,
    /// so it caps the count instead of excluding the letter.
    ///
    pub fn apply_feedback(&mut self, guess: &Word, pattern: &Pattern) {
        let mut observed = [0u8; ALPHABET_SIZE];
        let mut greyed: LetterMask = 0;

        for i in 0..WORD_SIZE {
            let c = guess[i];
            let letter = letter_idx(c);
            match pattern[i] {
                Coloring::Correct => {
                    self.green[i] = Some(c);
                    self.solved[i] = true;
                    self.required |= letter_bit(letter);
                    observed[letter] += 1;
                }
                Coloring::Present => {
                    self.yellow[i] |= letter_bit(letter);
                    self.required |= letter_bit(letter);
                    observed[letter] += 1;
                }
                Coloring::Absent => {
                    // if the answer had this letter here, the square would have been green
                    self.yellow[i] |= letter_bit(letter);
                    greyed |= letter_bit(letter);
                }
            }
        }

        for letter in iter_letters(greyed) {
            if observed[letter] == 0 {
                self.excluded |= letter_bit(letter);
            } else {
                self.max_count[letter] = Some(observed[letter]);
            }
        }

        for (letter, &count) in observed.iter().enumerate() {
            if count > self.min_count[letter] {
                self.min_count[letter] = count;
            }
        }
    }

    ///
    /// Checks one dictionary word against everything we know. Green letters are always enforced;
    /// the per-position exclusions are skipped at solved positions (every current candidate agrees
    /// on them).
    ///
    pub fn allows(&self, word: &Word, mask: LetterMask) -> bool {
        // must contain every required letter
        if mask & self.required != self.required {
            return false;
        }

        // must not contain any letter known to be absent
        if mask & self.excluded_not_required() != 0 {
            return false;
        }

        for i in 0..WORD_SIZE {
            let c = word[i];
            match self.green[i] {
                Some(g) if g != c => return false,
                Some(_) => {}
                None if self.solved[i] => {}
                None if self.yellow[i] & letter_bit(letter_idx(c)) != 0 => return false,
                None => {}
            }
        }

        let counts = count_letters(word);
        for letter in iter_letters(self.required) {
            let count = counts[letter];
            if count < self.min_count[letter] {
                return false;
            }

            if let Some(max) = self.max_count[letter] {
                if count > max {
                    return false;
                }
            }
        }

        true
    }

    /// Letters that are excluded, minus any that some square showed as present/correct
    #[inline]
    pub fn excluded_not_required(&self) -> LetterMask {
        self.excluded & !self.required
    }

    pub fn green(&self, pos: usize) -> Option<u8> {
        self.green[pos]
    }

    pub fn yellow(&self, pos: usize) -> LetterMask {
        self.yellow[pos]
    }

    pub fn required_letters(&self) -> LetterMask {
        self.required
    }

    pub fn excluded_letters(&self) -> LetterMask {
        self.excluded
    }

    pub fn min_count(&self, letter: usize) -> u8 {
        self.min_count[letter]
    }

    pub fn max_count(&self, letter: usize) -> Option<u8> {
        self.max_count[letter]
    }

    pub fn is_solved(&self, pos: usize) -> bool {
        self.solved[pos]
    }

    pub fn num_solved(&self) -> usize {
        self.solved.iter().filter(|s| **s).count()
    }

    /// Letters that have been neither confirmed nor ruled out yet
    pub fn unplayed_letters(&self) -> LetterMask {
        ALL_LETTERS & !(self.excluded | self.required)
    }

    /// The current candidates, empty if no filter pass has run yet
    pub fn candidates(&self) -> &[usize] {
        self.candidates.as_deref().unwrap_or(&[])
    }

    /// Whether a filter pass has seeded the candidates yet
    pub fn is_seeded(&self) -> bool {
        self.candidates.is_some()
    }
}
