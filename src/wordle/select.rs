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
use std::str::FromStr;
use rand::{Rng, SeedableRng, rngs::StdRng};
use rayon::prelude::*;
use super::{
    prelude::*,
    color::*,
    dictionary::{Dictionary, PatternTable},
    error::SolverErr,
    filter::intersect,
    state::ConstraintState,
};

///
/// Anything that can recommend the next guess. Implementations only provide `pick`; callers use
/// `select`, which handles the cases every strategy treats the same way:
///   * strategies that need the pattern table fail with MissingPrecomputation before doing work
///   * an empty candidate set is contradictory feedback, reported as EmptyCandidateSet
///   * a single remaining candidate is the answer, returned without scoring anything
///
/// The returned value is an index into the Dictionary.
///
pub trait GuessSelector {
    fn name(&self) -> &'static str;

    fn requires_pattern_table(&self) -> bool {
        false
    }

    /// Chooses among at least two candidates
    fn pick(
        &mut self,
        dictionary: &Dictionary,
        state: &ConstraintState,
        candidates: &[usize],
    ) -> Result<usize, SolverErr>;

    fn select(&mut self, dictionary: &Dictionary, state: &ConstraintState) -> Result<usize, SolverErr> {
        if self.requires_pattern_table() && dictionary.pattern_table().is_none() {
            return Err(SolverErr::MissingPrecomputation);
        }

        match state.candidates() {
            [] => Err(SolverErr::EmptyCandidateSet),
            [only] => Ok(*only),
            candidates => {
                let picked = self.pick(dictionary, state, candidates)?;
                log::trace!(
                    "{} picked '{}' out of {} candidates",
                    self.name(),
                    dictionary.word_str(picked),
                    candidates.len()
                );
                Ok(picked)
            }
        }
    }
}

/// Which strategy to play with. This is the configuration value; `selector` builds the real thing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Strategy {
    First,
    Middle,
    Last,
    Random,
    Heuristic,
    Entropy,
    FastEntropy,
}

impl Strategy {
    pub const ALL: [Strategy; 7] = [
        Strategy::First,
        Strategy::Middle,
        Strategy::Last,
        Strategy::Random,
        Strategy::Heuristic,
        Strategy::Entropy,
        Strategy::FastEntropy,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Strategy::First => "first",
            Strategy::Middle => "middle",
            Strategy::Last => "last",
            Strategy::Random => "random",
            Strategy::Heuristic => "heuristic",
            Strategy::Entropy => "entropy",
            Strategy::FastEntropy => "fast-entropy",
        }
    }

    pub fn requires_pattern_table(&self) -> bool {
        matches!(self, Strategy::FastEntropy)
    }

    /// Builds the selector. `seed` is only used by the random picker.
    pub fn selector(&self, seed: u64) -> Box<dyn GuessSelector + Send> {
        match self {
            Strategy::First => Box::new(Positional::First),
            Strategy::Middle => Box::new(Positional::Middle),
            Strategy::Last => Box::new(Positional::Last),
            Strategy::Random => Box::new(RandomPick::new(StdRng::seed_from_u64(seed))),
            Strategy::Heuristic => Box::new(HeuristicSelector::default()),
            Strategy::Entropy => Box::new(ExactEntropy),
            Strategy::FastEntropy => Box::new(FastEntropy),
        }
    }
}

impl Display for Strategy {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Strategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|strategy| strategy.name() == wanted)
            .ok_or_else(|| {
                let names: Vec<&str> = Self::ALL.iter().map(|s| s.name()).collect();
                format!("unknown strategy '{}' (expected one of: {})", s, names.join(", "))
            })
    }
}

/// Baselines that just take a fixed position of the candidate list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Positional {
    First,
    Middle,
    Last,
}

impl GuessSelector for Positional {
    fn name(&self) -> &'static str {
        match self {
            Positional::First => "first",
            Positional::Middle => "middle",
            Positional::Last => "last",
        }
    }

    fn pick(&mut self, _: &Dictionary, _: &ConstraintState, candidates: &[usize]) -> Result<usize, SolverErr> {
        let at = match self {
            Positional::First => 0,
            Positional::Middle => candidates.len() / 2,
            Positional::Last => candidates.len() - 1,
        };
        Ok(candidates[at])
    }
}

/// Uniformly random candidate, drawing from a caller supplied source.
pub struct RandomPick<R> {
    rng: R,
}

impl<R: Rng> RandomPick<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> GuessSelector for RandomPick<R> {
    fn name(&self) -> &'static str {
        "random"
    }

    fn pick(&mut self, _: &Dictionary, _: &ConstraintState, candidates: &[usize]) -> Result<usize, SolverErr> {
        Ok(candidates[self.rng.gen_range(0..candidates.len())])
    }
}

/// Where the heuristic looks for words to score.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Shortlist {
    /// every dictionary word avoiding the excluded letters (may recommend a non-candidate)
    Dictionary,
    /// only the current candidates
    Candidates,
}

impl Default for Shortlist {
    fn default() -> Self {
        Shortlist::Dictionary
    }
}

/// Coarse progress of a game: solved positions plus distinct letters known to be present.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Early,
    Mid,
    Late,
}

impl Phase {
    pub fn of(state: &ConstraintState) -> Self {
        match state.num_solved() + num_letters(state.required_letters()) {
            0..=2 => Phase::Early,
            3..=5 => Phase::Mid,
            _ => Phase::Late,
        }
    }
}

///
/// Bonus/penalty magnitudes for the heuristic. Derived from the Phase on every call, never stored
/// between games.
///
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HeuristicWeights {
    /// flat part of the bonus for guessing an actual candidate
    pub candidate_bonus: WordleFloat,
    /// part of the candidate bonus divided by the number of candidates
    pub candidate_scale: WordleFloat,
    /// per distinct letter neither confirmed nor ruled out yet
    pub unplayed_bonus: WordleFloat,
    /// per distinct letter already known to be present
    pub yellow_bonus: WordleFloat,
    /// per extra copy of a letter, growing with each copy
    pub repeat_penalty: WordleFloat,
    /// narrow the shortlist down to words with the most common unplayed letters first
    pub narrow_shortlist: bool,
}

impl HeuristicWeights {
    pub const EARLY: Self = Self {
        candidate_bonus: 10.0,
        candidate_scale: 200.0,
        unplayed_bonus: 25.0,
        yellow_bonus: 5.0,
        repeat_penalty: 15.0,
        narrow_shortlist: true,
    };

    pub const MID: Self = Self {
        candidate_bonus: 30.0,
        candidate_scale: 300.0,
        unplayed_bonus: 20.0,
        yellow_bonus: 30.0,
        repeat_penalty: 10.0,
        narrow_shortlist: false,
    };

    pub const LATE: Self = Self {
        candidate_bonus: 60.0,
        candidate_scale: 600.0,
        unplayed_bonus: 10.0,
        yellow_bonus: 20.0,
        repeat_penalty: 5.0,
        narrow_shortlist: false,
    };

    pub fn for_phase(phase: Phase) -> Self {
        match phase {
            Phase::Early => Self::EARLY,
            Phase::Mid => Self::MID,
            Phase::Late => Self::LATE,
        }
    }

    /// Fewer candidates left means guessing one of them is worth more
    pub fn membership_bonus(&self, num_candidates: usize) -> WordleFloat {
        self.candidate_bonus + self.candidate_scale / (num_candidates.max(1) as WordleFloat)
    }
}

///
/// Letter frequency / position heuristic. Cheap enough to score the whole dictionary every turn.
///
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HeuristicSelector {
    pub shortlist: Shortlist,
}

impl HeuristicSelector {
    pub fn new(shortlist: Shortlist) -> Self {
        Self { shortlist }
    }

    ///
    /// Score of one word. The candidate set must be sorted ascending (the filter keeps it that way).
    ///
    pub fn score_word(
        dictionary: &Dictionary,
        state: &ConstraintState,
        candidates: &[usize],
        weights: &HeuristicWeights,
        idx: usize,
    ) -> WordleFloat {
        let mask = dictionary.mask(idx);
        let mut score = 0.0;

        if candidates.binary_search(&idx).is_ok() {
            score += weights.membership_bonus(candidates.len());
        }

        score += weights.unplayed_bonus * num_letters(mask & state.unplayed_letters()) as WordleFloat;
        score += weights.yellow_bonus * num_letters(mask & state.required_letters()) as WordleFloat;

        for &count in count_letters(dictionary.word(idx)).iter() {
            // the 2nd copy costs 1x the penalty, the 3rd 2x more, ...
            let extra = count.saturating_sub(1) as WordleFloat;
            score -= weights.repeat_penalty * extra * (extra + 1.0) / 2.0;
        }

        score
    }

    fn base_shortlist(&self, dictionary: &Dictionary, state: &ConstraintState, candidates: &[usize]) -> Vec<usize> {
        match self.shortlist {
            Shortlist::Candidates => candidates.to_vec(),
            Shortlist::Dictionary => {
                let excluded = state.excluded_not_required();
                (0..dictionary.len())
                    .filter(|&idx| dictionary.mask(idx) & excluded == 0)
                    .collect()
            }
        }
    }
}

///
/// Counts, over every candidate and every unsolved position, how often each unplayed letter shows
/// up, and returns the letters that show up at all from most to least common (ties by letter).
///
fn unplayed_letters_by_frequency(dictionary: &Dictionary, state: &ConstraintState, candidates: &[usize]) -> Vec<usize> {
    let unplayed = state.unplayed_letters();
    let mut freq = [0usize; ALPHABET_SIZE];
    for &idx in candidates {
        let word = dictionary.word(idx);
        for pos in (0..WORD_SIZE).filter(|pos| !state.is_solved(*pos)) {
            let letter = letter_idx(word[pos]);
            if unplayed & letter_bit(letter) != 0 {
                freq[letter] += 1;
            }
        }
    }

    let mut letters: Vec<usize> = (0..ALPHABET_SIZE).filter(|l| freq[*l] > 0).collect();
    letters.sort_by(|a, b| freq[*b].cmp(&freq[*a]));
    letters
}

impl GuessSelector for HeuristicSelector {
    fn name(&self) -> &'static str {
        "heuristic"
    }

    fn pick(&mut self, dictionary: &Dictionary, state: &ConstraintState, candidates: &[usize]) -> Result<usize, SolverErr> {
        let weights = HeuristicWeights::for_phase(Phase::of(state));
        let mut shortlist = self.base_shortlist(dictionary, state, candidates);

        if weights.narrow_shortlist {
            for letter in unplayed_letters_by_frequency(dictionary, state, candidates) {
                if shortlist.len() <= 1 {
                    break;
                }

                let next = intersect(&shortlist, dictionary.words_with_letter(letter));
                if !next.is_empty() {
                    shortlist = next;
                }
            }
        }

        let mut best: Option<(usize, WordleFloat)> = None;
        for idx in shortlist {
            let score = Self::score_word(dictionary, state, candidates, &weights, idx);
            // strictly greater, so the first word reaching the best score wins
            if best.map_or(true, |(_, best_score)| score > best_score) {
                best = Some((idx, score));
            }
        }

        best.map(|(idx, _)| idx).ok_or(SolverErr::EmptyCandidateSet)
    }
}

///
/// The "expected info" of a guess: Shannon entropy (in bits) of the distribution of patterns it
/// produces against the candidates, each candidate being equally likely.
///
/// For example, if a pattern is produced by half of the candidates, seeing it halves the search
/// space, which is 1 bit of information with probability 0.5.
///
pub fn entropy(dictionary: &Dictionary, guess: usize, candidates: &[usize]) -> WordleFloat {
    if candidates.is_empty() {
        return 0.0;
    }

    let mut buckets = [0usize; Pattern::NUM_STATES];
    let guess_word = dictionary.word(guess);
    for &target in candidates {
        let code = Pattern::score_words(dictionary.word(target), guess_word).to_code();
        buckets[code as usize] += 1;
    }

    let n = candidates.len() as WordleFloat;
    buckets
        .iter()
        .filter(|count| **count > 0)
        .map(|&count| {
            let p = count as WordleFloat / n;
            -p * p.log2()
        })
        .sum()
}

///
/// Same value as `entropy`, rearranged so it only needs table lookups:
/// H = log2(N) - (1/N) * sum(count_k * log2(count_k))
///
pub fn fast_entropy(table: &PatternTable, guess: usize, candidates: &[usize]) -> WordleFloat {
    if candidates.is_empty() {
        return 0.0;
    }

    let mut buckets = [0usize; Pattern::NUM_STATES];
    let row = table.row(guess);
    for &target in candidates {
        buckets[row[target] as usize] += 1;
    }

    let n = candidates.len();
    let sum: WordleFloat = buckets
        .iter()
        .filter(|count| **count > 0)
        .map(|&count| table.klog2k(count))
        .sum();

    (n as WordleFloat).log2() - sum / n as WordleFloat
}

///
/// Scores every candidate on the rayon pool, then takes the first maximum in candidate order so the
/// answer does not depend on scheduling.
///
fn max_by_score<F>(candidates: &[usize], score: F) -> Option<(usize, WordleFloat)>
where
    F: Fn(usize) -> WordleFloat + Sync,
{
    let scores: Vec<WordleFloat> = candidates.par_iter().map(|&idx| score(idx)).collect();
    let mut best: Option<(usize, WordleFloat)> = None;
    for (&idx, &s) in candidates.iter().zip(&scores) {
        if best.map_or(true, |(_, best_score)| s > best_score) {
            best = Some((idx, s));
        }
    }

    best
}

/// Maximizes entropy by scoring every (guess, candidate) pair on the fly.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ExactEntropy;

impl GuessSelector for ExactEntropy {
    fn name(&self) -> &'static str {
        "entropy"
    }

    fn pick(&mut self, dictionary: &Dictionary, _: &ConstraintState, candidates: &[usize]) -> Result<usize, SolverErr> {
        let (idx, bits) = max_by_score(candidates, |guess| entropy(dictionary, guess, candidates))
            .ok_or(SolverErr::EmptyCandidateSet)?;
        log::trace!("'{}' has {:.4} bits of expected info", dictionary.word_str(idx), bits);
        Ok(idx)
    }
}

/// Maximizes entropy using the dictionary's precomputed pattern table.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FastEntropy;

impl GuessSelector for FastEntropy {
    fn name(&self) -> &'static str {
        "fast-entropy"
    }

    fn requires_pattern_table(&self) -> bool {
        true
    }

    fn pick(&mut self, dictionary: &Dictionary, _: &ConstraintState, candidates: &[usize]) -> Result<usize, SolverErr> {
        let table = dictionary.pattern_table().ok_or(SolverErr::MissingPrecomputation)?;
        let (idx, bits) = max_by_score(candidates, |guess| fast_entropy(table, guess, candidates))
            .ok_or(SolverErr::EmptyCandidateSet)?;
        log::trace!("'{}' has {:.4} bits of expected info", dictionary.word_str(idx), bits);
        Ok(idx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordle::recompute_candidates;
    use test_case::test_case;

    const WORDS: [&str; 12] = [
        "salet", "crane", "trace", "least", "allot", "geese",
        "crate", "react", "caret", "cater", "slate", "stale",
    ];

    fn dictionary() -> Dictionary {
        let mut dict = Dictionary::load(WORDS).unwrap();
        dict.precompute_entropy_table();
        dict
    }

    fn state_after(dict: &Dictionary, secret: &str, guesses: &[&str]) -> ConstraintState {
        let mut state = ConstraintState::new();
        for guess in guesses {
            let pattern = Pattern::score(secret, guess).unwrap();
            state.apply_feedback(&to_word(guess).unwrap(), &pattern);
        }
        recompute_candidates(dict, &mut state);
        state
    }

    #[test_case("first", Strategy::First)]
    #[test_case("Fast-Entropy", Strategy::FastEntropy)]
    #[test_case(" heuristic ", Strategy::Heuristic)]
    fn test_strategy_from_str(raw: &str, expected: Strategy) {
        assert_eq!(raw.parse::<Strategy>(), Ok(expected));
    }

    #[test]
    fn test_strategy_names_roundtrip() {
        for strategy in Strategy::ALL {
            assert_eq!(strategy.to_string().parse::<Strategy>(), Ok(strategy));
            assert_eq!(strategy.selector(0).name(), strategy.name());
        }
        assert!("bogus".parse::<Strategy>().is_err());
    }

    #[test]
    fn test_empty_candidates_is_an_error() {
        let dict = dictionary();
        let unfiltered = ConstraintState::new();
        for strategy in Strategy::ALL {
            assert_eq!(
                strategy.selector(1).select(&dict, &unfiltered),
                Err(SolverErr::EmptyCandidateSet),
                "{}",
                strategy
            );
        }
    }

    #[test]
    fn test_missing_precomputation() {
        let dict = Dictionary::load(WORDS).unwrap();
        let state = state_after(&dict, "crane", &[]);
        assert_eq!(FastEntropy.select(&dict, &state), Err(SolverErr::MissingPrecomputation));
        assert!(ExactEntropy.select(&dict, &state).is_ok());
    }

    #[test]
    fn test_single_candidate_returned_by_every_strategy() {
        let dict = dictionary();
        let state = state_after(&dict, "crane", &["salet"]);
        assert_eq!(state.candidates(), &[dict.index_of("crane").unwrap()]);
        for strategy in Strategy::ALL {
            assert_eq!(strategy.selector(7).select(&dict, &state), Ok(dict.index_of("crane").unwrap()));
        }
    }

    #[test]
    fn test_positional() {
        let dict = dictionary();
        let state = state_after(&dict, "crane", &[]);
        let n = dict.len();
        assert_eq!(Positional::First.select(&dict, &state), Ok(0));
        assert_eq!(Positional::Middle.select(&dict, &state), Ok(n / 2));
        assert_eq!(Positional::Last.select(&dict, &state), Ok(n - 1));
    }

    #[test]
    fn test_random_is_deterministic_for_a_seed() {
        let dict = dictionary();
        let state = state_after(&dict, "crane", &[]);
        let picks = |seed| {
            let mut selector = RandomPick::new(StdRng::seed_from_u64(seed));
            (0..20).map(|_| selector.select(&dict, &state).unwrap()).collect::<Vec<_>>()
        };
        let a = picks(42);
        assert_eq!(a, picks(42));
        assert!(a.iter().all(|idx| state.candidates().contains(idx)));
    }

    #[test]
    fn test_phase() {
        let dict = dictionary();
        assert_eq!(Phase::of(&ConstraintState::new()), Phase::Early);
        // trace vs crate = [Y, G, G, Y, G]: 3 solved + 5 required
        let state = state_after(&dict, "crate", &["trace"]);
        assert_eq!(Phase::of(&state), Phase::Late);
    }

    #[test]
    fn test_membership_bonus_grows_as_candidates_shrink() {
        for weights in [HeuristicWeights::EARLY, HeuristicWeights::MID, HeuristicWeights::LATE] {
            assert!(weights.membership_bonus(2) > weights.membership_bonus(100));
        }
        assert!(HeuristicWeights::LATE.membership_bonus(2) > HeuristicWeights::EARLY.membership_bonus(2));
    }

    #[test]
    fn test_repeat_penalty() {
        let dict = Dictionary::load(["geese", "crane"]).unwrap();
        let state = ConstraintState::new();
        let weights = HeuristicWeights::MID;
        let geese = HeuristicSelector::score_word(&dict, &state, &[], &weights, 0);
        let crane = HeuristicSelector::score_word(&dict, &state, &[], &weights, 1);
        // geese: 3 distinct unplayed letters, 'e' has two extra copies (1x + 2x penalty)
        assert_eq!(geese, 3.0 * weights.unplayed_bonus - 3.0 * weights.repeat_penalty);
        assert_eq!(crane, 5.0 * weights.unplayed_bonus);
    }

    #[test]
    fn test_heuristic_prefers_candidates_late() {
        let dict = dictionary();
        let state = state_after(&dict, "caret", &["trace"]);
        let candidates = state.candidates().to_vec();
        assert!(candidates.len() > 1);
        for shortlist in [Shortlist::Dictionary, Shortlist::Candidates] {
            let picked = HeuristicSelector::new(shortlist).select(&dict, &state).unwrap();
            assert!(candidates.contains(&picked), "{:?} picked {}", shortlist, dict.word_str(picked));
        }
    }

    #[test]
    fn test_heuristic_early_gathers_new_letters() {
        let dict = Dictionary::load(["mamma", "sassy", "price", "crime"]).unwrap();
        // aught vs mamma = [Y, X, X, X, X]
        let state = state_after(&dict, "mamma", &["aught"]);
        assert_eq!(state.candidates(), &[0, 1]);
        assert_eq!(Phase::of(&state), Phase::Early);

        // "crime" brings five new letters; narrowing on the most common unplayed letter ('m')
        // drops "price", which would otherwise win the tie
        let picked = HeuristicSelector::new(Shortlist::Dictionary).select(&dict, &state);
        assert_eq!(picked, Ok(3));
        let picked = HeuristicSelector::new(Shortlist::Candidates).select(&dict, &state);
        assert_eq!(picked, Ok(0));
    }

    #[test]
    fn test_heuristic_mid_prefers_candidates() {
        let dict = dictionary();
        // crane vs stale = [X, X, G, X, G], leaving slate and stale
        let state = state_after(&dict, "stale", &["crane"]);
        assert_eq!(Phase::of(&state), Phase::Mid);
        let slate = dict.index_of("slate").unwrap();
        for shortlist in [Shortlist::Dictionary, Shortlist::Candidates] {
            assert_eq!(HeuristicSelector::new(shortlist).select(&dict, &state), Ok(slate));
        }
    }

    // "least" splits the other two into one bucket, so it never ties with them on entropy
    #[test_case(["stale", "slate", "least"], 0, 0)]
    #[test_case(["least", "stale", "slate"], 0, 1)]
    #[test_case(["least", "slate", "stale"], 0, 1)]
    #[test_case(["slate", "least", "stale"], 0, 0)]
    fn test_ties_go_to_the_first_word(words: [&str; 3], heuristic: usize, entropy: usize) {
        let mut dict = Dictionary::load(words).unwrap();
        dict.precompute_entropy_table();
        let state = state_after(&dict, words[0], &[]);
        for shortlist in [Shortlist::Dictionary, Shortlist::Candidates] {
            assert_eq!(HeuristicSelector::new(shortlist).select(&dict, &state), Ok(heuristic));
        }
        assert_eq!(ExactEntropy.select(&dict, &state), Ok(entropy));
        assert_eq!(FastEntropy.select(&dict, &state), Ok(entropy));
    }

    #[test]
    fn test_entropy_known_values() {
        let dict = dictionary();
        let all: Vec<usize> = (0..dict.len()).collect();
        // a guess against itself only is a single bucket
        assert_eq!(entropy(&dict, 0, &[0]), 0.0);
        // two candidates that a guess tells apart is exactly 1 bit
        let crane = dict.index_of("crane").unwrap();
        let geese = dict.index_of("geese").unwrap();
        assert!((entropy(&dict, crane, &[crane, geese]) - 1.0).abs() < 1e-12);
        assert_eq!(entropy(&dict, crane, &[]), 0.0);
        assert!(entropy(&dict, crane, &all) > 1.0);
    }

    #[test]
    fn test_entropy_bound_and_fast_equivalence() {
        let dict = dictionary();
        let table = dict.pattern_table().unwrap();
        let subsets: Vec<Vec<usize>> = vec![
            (0..dict.len()).collect(),
            vec![1, 2, 6, 7, 8, 9],
            vec![0, 3, 10, 11],
            vec![4, 5],
        ];
        for candidates in &subsets {
            let bound = (candidates.len() as WordleFloat).log2();
            for guess in 0..dict.len() {
                let exact = entropy(&dict, guess, candidates);
                let fast = fast_entropy(table, guess, candidates);
                assert!(exact <= bound + 1e-9, "{} > log2({})", exact, candidates.len());
                assert!((exact - fast).abs() < 1e-9, "exact {} vs fast {}", exact, fast);
            }
        }
    }

    #[test_case("crane", &[])]
    #[test_case("caret", &["trace"])]
    #[test_case("stale", &["crane"])]
    #[test_case("geese", &["tract"])]
    fn test_exact_and_fast_pick_the_same(secret: &str, guesses: &[&str]) {
        let dict = dictionary();
        let state = state_after(&dict, secret, guesses);
        let exact = ExactEntropy.select(&dict, &state).unwrap();
        let fast = FastEntropy.select(&dict, &state).unwrap();
        let candidates = state.candidates();
        let exact_bits = entropy(&dict, exact, candidates);
        let fast_bits = entropy(&dict, fast, candidates);
        assert!(exact == fast || (exact_bits - fast_bits).abs() < 1e-9);
        for &other in candidates {
            assert!(entropy(&dict, other, candidates) <= exact_bits + 1e-9);
        }
    }
}
