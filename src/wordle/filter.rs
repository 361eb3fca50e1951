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

use std::cmp::Ordering;
use super::{prelude::*, dictionary::Dictionary, state::ConstraintState};

///
/// Brings `state.candidates` up to date with everything in the state.
///
/// The very first call seeds the candidates from the dictionary:
///   * when some letters are known to be required, the inverted index lists of those letters are
///     intersected (lowest letter first)
///   * otherwise every word that avoids all excluded letters is taken
///
/// Every call (the first one included) then re-checks each held candidate against the full state
/// and keeps the ones that pass, in order. The set can only shrink.
///
/// Finally the solved flags are refreshed: a position is solved once it has a green letter or
/// every remaining candidate has the same letter there. Later passes skip those positions.
///
pub fn recompute_candidates(dictionary: &Dictionary, state: &mut ConstraintState) {
    let held = match state.candidates.take() {
        Some(held) => held,
        None => seed_candidates(dictionary, state),
    };
    let before = held.len();

    // retain keeps the ascending order, which membership checks and the heuristic's
    // intersections rely on
    let mut kept = held;
    kept.retain(|&idx| state.allows(dictionary.word(idx), dictionary.mask(idx)));

    log::debug!("filtered candidates {} -> {}", before, kept.len());
    if kept.is_empty() {
        log::warn!("no candidates remain, the feedback received so far is contradictory");
    }

    refresh_solved(dictionary, state, &kept);
    state.candidates = Some(kept);
}

fn seed_candidates(dictionary: &Dictionary, state: &ConstraintState) -> Vec<usize> {
    let required = state.required_letters();
    let mut letters = iter_letters(required);
    if let Some(first) = letters.next() {
        let mut out = dictionary.words_with_letter(first).to_vec();
        for letter in letters {
            out = intersect(&out, dictionary.words_with_letter(letter));
        }
        return out;
    }

    // nothing is known to be present, so drop every word touching an excluded letter
    let mut excluded_idx = vec![false; dictionary.len()];
    for letter in iter_letters(state.excluded_letters()) {
        for &idx in dictionary.words_with_letter(letter) {
            excluded_idx[idx] = true;
        }
    }

    excluded_idx
        .iter()
        .enumerate()
        .filter(|(_, excluded)| !**excluded)
        .map(|(idx, _)| idx)
        .collect()
}

fn refresh_solved(dictionary: &Dictionary, state: &mut ConstraintState, candidates: &[usize]) {
    for pos in 0..WORD_SIZE {
        if state.solved[pos] {
            continue;
        }

        let unanimous = match candidates.split_first() {
            Some((&first, rest)) => {
                let c = dictionary.word(first)[pos];
                rest.iter().all(|&idx| dictionary.word(idx)[pos] == c)
            }
            None => false,
        };

        state.solved[pos] = state.green[pos].is_some() || unanimous;
    }
}

///
/// Sorted-merge intersection of two ascending index lists. Output is ascending.
///
pub fn intersect(a: &[usize], b: &[usize]) -> Vec<usize> {
    let mut out = Vec::with_capacity(a.len().min(b.len()));
    let (mut i, mut j) = (0, 0);
    while i < a.len() && j < b.len() {
        match a[i].cmp(&b[j]) {
            Ordering::Less => i += 1,
            Ordering::Greater => j += 1,
            Ordering::Equal => {
                out.push(a[i]);
                i += 1;
                j += 1;
            }
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordle::Pattern;
    use test_case::test_case;

    const WORDS: [&str; 10] = [
        "salet", "crane", "trace", "least", "allot", "geese", "crate", "react", "caret", "cater",
    ];

    fn dictionary() -> Dictionary {
        Dictionary::load(WORDS).unwrap()
    }

    fn turn(dict: &Dictionary, state: &mut ConstraintState, secret: &str, guess: &str) {
        let pattern = Pattern::score(secret, guess).unwrap();
        state.apply_feedback(&to_word(guess).unwrap(), &pattern);
        recompute_candidates(dict, state);
    }

    fn words_of(dict: &Dictionary, state: &ConstraintState) -> Vec<String> {
        state.candidates().iter().map(|&idx| dict.word_str(idx).to_string()).collect()
    }

    #[test_case(&[1, 3, 5, 7], &[2, 3, 4, 7, 9], &[3, 7])]
    #[test_case(&[], &[1, 2], &[])]
    #[test_case(&[1, 2, 3], &[1, 2, 3], &[1, 2, 3])]
    #[test_case(&[0, 10], &[5], &[])]
    fn test_intersect(a: &[usize], b: &[usize], expected: &[usize]) {
        assert_eq!(intersect(a, b), expected);
    }

    #[test]
    fn test_first_pass_without_feedback_keeps_everything() {
        let dict = dictionary();
        let mut state = ConstraintState::new();
        recompute_candidates(&dict, &mut state);
        assert_eq!(state.candidates(), (0..dict.len()).collect::<Vec<_>>().as_slice());
    }

    #[test]
    fn test_scenario_salet_vs_crane() {
        let dict = dictionary();
        let mut state = ConstraintState::new();
        turn(&dict, &mut state, "crane", "salet");
        assert_eq!(words_of(&dict, &state), vec!["crane"]);
        assert!((0..WORD_SIZE).all(|pos| state.is_solved(pos)));
    }

    #[test]
    fn test_seed_from_required_letters() {
        let dict = dictionary();
        let mut state = ConstraintState::new();
        // crane vs allot = [X, X, Y, X, X]
        turn(&dict, &mut state, "allot", "crane");
        assert_eq!(state.required_letters(), letter_bit(letter_idx(b'a')));
        assert_eq!(words_of(&dict, &state), vec!["allot"]);
    }

    #[test]
    fn test_seed_from_excluded_letters_only() {
        let dict = dictionary();
        let mut state = ConstraintState::new();
        turn(&dict, &mut state, "geese", "tract");
        assert_eq!(state.required_letters(), 0);
        assert_eq!(words_of(&dict, &state), vec!["geese"]);
    }

    #[test]
    fn test_soundness_and_monotonicity() {
        let dict = dictionary();
        for secret in WORDS {
            for first in WORDS {
                for second in WORDS {
                    let mut state = ConstraintState::new();
                    recompute_candidates(&dict, &mut state);
                    let mut previous = state.candidates().to_vec();
                    for guess in [first, second] {
                        turn(&dict, &mut state, secret, guess);
                        let current = state.candidates().to_vec();
                        assert!(current.len() <= previous.len());
                        assert!(current.iter().all(|idx| previous.contains(idx)));
                        assert!(
                            current.contains(&dict.index_of(secret).unwrap()),
                            "secret {} lost after {} then {}",
                            secret,
                            first,
                            second
                        );
                        previous = current;
                    }
                }
            }
        }
    }

    #[test]
    fn test_idempotent() {
        let dict = dictionary();
        let mut state = ConstraintState::new();
        turn(&dict, &mut state, "caret", "trace");
        let once = state.candidates().to_vec();
        recompute_candidates(&dict, &mut state);
        assert_eq!(state.candidates(), once.as_slice());
        recompute_candidates(&dict, &mut state);
        assert_eq!(state.candidates(), once.as_slice());
    }

    #[test]
    fn test_empty_set_is_never_reseeded() {
        let dict = dictionary();
        let mut state = ConstraintState::new();
        // contradictory feedback: two different words both reported all green
        state.apply_feedback(&to_word("crane").unwrap(), &Pattern::ALL_CORRECT);
        state.apply_feedback(&to_word("trace").unwrap(), &Pattern::ALL_CORRECT);
        recompute_candidates(&dict, &mut state);
        assert!(state.is_seeded());
        assert!(state.candidates().is_empty());

        recompute_candidates(&dict, &mut state);
        assert!(state.candidates().is_empty());
    }
}
