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

use std::fs;
use std::io::{self, BufRead};
use std::path::Path;
use instant::Instant;
use rayon::prelude::*;
use super::{prelude::*, color::*, error::LoadDictErr};

///
/// Holds every word which can be guessed (and which can be the answer), in the order it was loaded.
///
/// Words are identified by their index in this list everywhere else in the crate. The Dictionary
/// is built once and never changes afterwards (except for opting into the pattern table), so it
/// can be shared by reference between any number of games.
///
#[derive(Clone, Debug)]
pub struct Dictionary {
    /// the words, exactly as loaded (after normalization)
    strings: Vec<String>,
    /// the same words as fixed size byte arrays, which is what the hot loops use
    words: Vec<Word>,
    /// bit i is set iff letter i appears somewhere in the word (parallel to `words`)
    masks: Vec<LetterMask>,
    /// letter -> ascending indexes of every word containing that letter
    inverted: [Vec<usize>; ALPHABET_SIZE],
    /// only present once precompute_entropy_table has been called
    pattern_table: Option<PatternTable>,
}

///
/// Precomputed feedback for every (guess, target) pair of the dictionary, plus k*log2(k) for every
/// k that a bucket count can take. Costs N^2 bytes, so this is opt-in.
///
#[derive(Clone, Debug)]
pub struct PatternTable {
    num_words: usize,
    /// row = guess index, column = target index
    codes: Vec<PatternCode>,
    /// klog2k[k] = k * log2(k), with klog2k[0] = 0
    klog2k: Vec<WordleFloat>,
}

impl PatternTable {
    fn build(words: &[Word]) -> Self {
        let num_words = words.len();
        let mut codes = vec![0 as PatternCode; num_words * num_words];
        if num_words > 0 {
            codes
                .par_chunks_mut(num_words)
                .zip(words.par_iter())
                .for_each(|(row, guess)| {
                    for (code, target) in row.iter_mut().zip(words) {
                        *code = Pattern::score_words(target, guess).to_code();
                    }
                });
        }

        let klog2k = (0..=num_words)
            .map(|k| if k == 0 { 0.0 } else { (k as WordleFloat) * (k as WordleFloat).log2() })
            .collect();

        Self { num_words, codes, klog2k }
    }

    /// The feedback code `guess` gets when the answer is `target`
    #[inline]
    pub fn code(&self, guess: usize, target: usize) -> PatternCode {
        self.codes[guess * self.num_words + target]
    }

    /// All feedback codes for one guess, indexed by target
    #[inline]
    pub fn row(&self, guess: usize) -> &[PatternCode] {
        let start = guess * self.num_words;
        &self.codes[start..start + self.num_words]
    }

    /// k * log2(k) for any bucket size k in [0, N]
    #[inline]
    pub fn klog2k(&self, k: usize) -> WordleFloat {
        self.klog2k[k]
    }
}

impl Dictionary {
    ///
    /// Builds a dictionary from an ordered list of words. Every entry is normalized (trimmed and
    /// lowercased) and must then be exactly WORD_SIZE letters a..=z. The first bad entry aborts
    /// the whole load.
    ///
    pub fn load<I, S>(source: I) -> Result<Self, LoadDictErr>
    where
        I: IntoIterator<Item=S>,
        S: AsRef<str>,
    {
        let mut strings = Vec::new();
        for (idx, raw) in source.into_iter().enumerate() {
            strings.push(validate_entry(idx + 1, raw.as_ref())?);
        }

        Self::from_validated(strings)
    }

    ///
    /// Reads one word per line. Blank lines are skipped (so a trailing newline is fine), anything
    /// else goes through the same validation as `load`. Line numbers in errors are 1-based.
    ///
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self, LoadDictErr> {
        let mut strings = Vec::new();
        for (idx, line) in reader.lines().enumerate() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }

            strings.push(validate_entry(idx + 1, &line)?);
        }

        Self::from_validated(strings)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, LoadDictErr> {
        let f = fs::File::open(path)?;
        Self::from_reader(io::BufReader::new(f))
    }

    fn from_validated(strings: Vec<String>) -> Result<Self, LoadDictErr> {
        if strings.is_empty() {
            return Err(LoadDictErr::Empty);
        }

        let words: Vec<Word> = strings
            .iter()
            .filter_map(|s| to_word(s))
            .collect();
        debug_assert_eq!(words.len(), strings.len());

        let masks: Vec<LetterMask> = words.iter().map(word_mask).collect();

        // walking the words in order keeps every list sorted ascending, which the sorted-merge
        // intersection in the filter depends on
        let mut inverted: [Vec<usize>; ALPHABET_SIZE] = Default::default();
        for (idx, mask) in masks.iter().enumerate() {
            for letter in iter_letters(*mask) {
                inverted[letter].push(idx);
            }
        }

        log::debug!("loaded {} words into the dictionary", words.len());
        Ok(Self {
            strings,
            words,
            masks,
            inverted,
            pattern_table: None,
        })
    }

    ///
    /// Computes the feedback of every word against every other word (O(N^2 * WORD_SIZE)) so the
    /// fast entropy strategy can look patterns up instead of scoring them. Calling it again is a
    /// no-op.
    ///
    pub fn precompute_entropy_table(&mut self) {
        if self.pattern_table.is_some() {
            return;
        }

        let start = Instant::now();
        self.pattern_table = Some(PatternTable::build(&self.words));
        log::debug!(
            "precomputed {}x{} pattern table in {:.2}s",
            self.len(),
            self.len(),
            start.elapsed().as_secs_f64()
        );
    }

    pub fn pattern_table(&self) -> Option<&PatternTable> {
        self.pattern_table.as_ref()
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn word_str(&self, idx: usize) -> &str {
        &self.strings[idx]
    }

    pub fn word(&self, idx: usize) -> &Word {
        &self.words[idx]
    }

    pub fn mask(&self, idx: usize) -> LetterMask {
        self.masks[idx]
    }

    /// Ascending indexes of the words containing the letter at this index of the alphabet
    pub fn words_with_letter(&self, letter: usize) -> &[usize] {
        &self.inverted[letter]
    }

    pub fn iter_words(&self) -> impl Iterator<Item=&str> + '_ {
        self.strings.iter().map(|s| s.as_str())
    }

    /// Linear lookup of a word's index
    pub fn index_of(&self, word: &str) -> Option<usize> {
        let word = to_word(word)?;
        self.words.iter().position(|w| *w == word)
    }
}

fn validate_entry(line: usize, raw: &str) -> Result<String, LoadDictErr> {
    let entry = normalize_wordle_word(raw);
    if entry.chars().count() != WORD_SIZE {
        return Err(LoadDictErr::MalformedEntry { line, entry });
    }

    if let Some(character) = entry.chars().find(|c| !c.is_ascii_lowercase()) {
        return Err(LoadDictErr::InvalidCharacter { line, entry, character });
    }

    Ok(entry)
}
