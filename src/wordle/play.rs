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


use instant::Instant;
use rayon::prelude::*;
use super::{
    prelude::*,
    color::Pattern,
    dictionary::Dictionary,
    error::SolverErr,
    game::{Game, Status, TurnOutcome},
    select::{GuessSelector, Strategy},
};

/// The full record of one autoplayed game
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameReport {
    pub secret: String,
    pub guesses: Vec<(String, Pattern)>,
    pub status: Status,
    pub turns: usize,
}

impl GameReport {
    pub fn is_win(&self) -> bool {
        self.status == Status::Win
    }
}

///
/// Plays one whole game against `secret`: opens with `first_guess`, then keeps playing whatever the
/// selector recommends until the game is won or lost.
///
pub fn autoplay(
    dictionary: &Dictionary,
    secret: &str,
    first_guess: &str,
    selector: &mut dyn GuessSelector,
) -> Result<GameReport, SolverErr> {
    let mut game = Game::new(dictionary, secret)?;
    let mut outcome = game.turn(first_guess)?;
    while !outcome.status.is_terminal() {
        let next = game.recommend(selector)?;
        outcome = game.turn(dictionary.word_str(next))?;
    }

    let report = GameReport {
        secret: normalize_wordle_word(secret),
        guesses: game.history().to_vec(),
        status: outcome.status,
        turns: outcome.turn,
    };
    log::trace!("{} {:?} in {} turns using {}", report.secret, report.status, report.turns, selector.name());
    Ok(report)
}

/// One turn of a replayed game, with the candidates that were left after it
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReplayTurn {
    pub guess: String,
    pub outcome: TurnOutcome,
    pub candidates: Vec<usize>,
}

///
/// Plays a fixed list of guesses against `secret`, in order. Stops as soon as the game is over;
/// guesses left after that are not played.
///
pub fn replay<S: AsRef<str>>(
    dictionary: &Dictionary,
    secret: &str,
    guesses: &[S],
) -> Result<Vec<ReplayTurn>, SolverErr> {
    let mut game = Game::new(dictionary, secret)?;
    let mut turns = Vec::with_capacity(guesses.len().min(NUM_TURNS));
    for guess in guesses {
        if game.status().is_terminal() {
            log::warn!("game over after {} turns, ignoring the remaining guesses", game.turns());
            break;
        }

        let outcome = game.turn(guess.as_ref())?;
        turns.push(ReplayTurn {
            guess: normalize_wordle_word(guess.as_ref()),
            outcome,
            candidates: game.candidates().to_vec(),
        });
    }

    Ok(turns)
}

/// Totals over every game of a benchmark run
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BenchmarkReport {
    pub strategy: Strategy,
    pub games: usize,
    pub wins: usize,
    /// turns summed over every game, a loss counting as NUM_TURNS
    pub total_turns: usize,
}

impl BenchmarkReport {
    /// Percentage of games won
    pub fn win_rate(&self) -> WordleFloat {
        if self.games == 0 {
            return 0.0;
        }

        100.0 * self.wins as WordleFloat / self.games as WordleFloat
    }

    pub fn avg_turns(&self) -> WordleFloat {
        if self.games == 0 {
            return 0.0;
        }

        self.total_turns as WordleFloat / self.games as WordleFloat
    }
}

///
/// Autoplays every dictionary word as the secret. Games are independent, so they run on the rayon
/// pool sharing the dictionary; each game builds its own selector (the random picker is seeded with
/// `seed` plus the secret's index, which keeps runs reproducible).
///
pub fn benchmark(
    dictionary: &Dictionary,
    first_guess: &str,
    strategy: Strategy,
    seed: u64,
) -> Result<BenchmarkReport, SolverErr> {
    if strategy.requires_pattern_table() && dictionary.pattern_table().is_none() {
        return Err(SolverErr::MissingPrecomputation);
    }

    let start = Instant::now();
    let reports = (0..dictionary.len())
        .into_par_iter()
        .map(|idx| {
            let mut selector = strategy.selector(seed.wrapping_add(idx as u64));
            autoplay(dictionary, dictionary.word_str(idx), first_guess, selector.as_mut())
        })
        .collect::<Result<Vec<_>, _>>()?;

    let report = BenchmarkReport {
        strategy,
        games: reports.len(),
        wins: reports.iter().filter(|r| r.is_win()).count(),
        total_turns: reports
            .iter()
            .map(|r| if r.is_win() { r.turns } else { NUM_TURNS })
            .sum(),
    };
    log::debug!(
        "benchmarked {} over {} games in {:.2}s",
        strategy,
        report.games,
        start.elapsed().as_secs_f64()
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordle::Coloring::*;
    use test_case::test_case;

    const WORDS: [&str; 12] = [
        "salet", "crane", "trace", "least", "allot", "geese",
        "crate", "react", "caret", "cater", "slate", "stale",
    ];

    #[test]
    fn test_autoplay_scenario() {
        let dict = Dictionary::load(["salet", "crane", "trace", "least"]).unwrap();
        let mut selector = Strategy::First.selector(0);
        let report = autoplay(&dict, "crane", "salet", selector.as_mut()).unwrap();
        assert_eq!(report.status, Status::Win);
        assert_eq!(report.turns, 2);
        assert_eq!(
            report.guesses,
            vec![
                ("salet".to_string(), Pattern([Absent, Present, Absent, Present, Absent])),
                ("crane".to_string(), Pattern::ALL_CORRECT),
            ]
        );
    }

    #[test]
    fn test_autoplay_first_guess_wins() {
        let dict = Dictionary::load(WORDS).unwrap();
        let mut selector = Strategy::Heuristic.selector(0);
        let report = autoplay(&dict, "salet", "salet", selector.as_mut()).unwrap();
        assert!(report.is_win());
        assert_eq!(report.turns, 1);
    }

    #[test]
    fn test_autoplay_rejects_bad_input() {
        let dict = Dictionary::load(WORDS).unwrap();
        let mut selector = Strategy::First.selector(0);
        assert_eq!(
            autoplay(&dict, "zzzzz", "salet", selector.as_mut()),
            Err(SolverErr::UnknownWord("zzzzz".to_string()))
        );
        assert_eq!(
            autoplay(&dict, "crane", "sale", selector.as_mut()),
            Err(SolverErr::InvalidLength { expected: 5, actual: 4 })
        );
    }

    #[test]
    fn test_replay() {
        let dict = Dictionary::load(WORDS).unwrap();
        let turns = replay(&dict, "stale", &["Crane", "least", "slate", "stale", "salet"]).unwrap();
        assert_eq!(turns.len(), 4);
        assert_eq!(turns[0].guess, "crane");
        assert_eq!(turns[0].outcome.pattern, Pattern([Absent, Absent, Correct, Absent, Correct]));
        assert_eq!(
            turns[0].candidates,
            vec![dict.index_of("slate").unwrap(), dict.index_of("stale").unwrap()]
        );
        for (i, turn) in turns.iter().enumerate() {
            assert_eq!(turn.outcome.turn, i + 1);
            assert!(turn.candidates.contains(&dict.index_of("stale").unwrap()));
        }
        assert_eq!(turns[3].outcome.status, Status::Win);
        assert_eq!(turns[2].outcome.status, Status::InProgress);
    }

    #[test]
    fn test_replay_stops_at_a_loss() {
        let dict = Dictionary::load(WORDS).unwrap();
        let guesses = ["geese"; NUM_TURNS + 2];
        let turns = replay(&dict, "crane", &guesses).unwrap();
        assert_eq!(turns.len(), NUM_TURNS);
        assert_eq!(turns[NUM_TURNS - 1].outcome.status, Status::Loss);
    }

    #[test]
    fn test_replay_rejects_bad_guess() {
        let dict = Dictionary::load(WORDS).unwrap();
        assert_eq!(
            replay(&dict, "crane", &["salet", "cr"]),
            Err(SolverErr::InvalidLength { expected: 5, actual: 2 })
        );
    }

    #[test_case(Strategy::First)]
    #[test_case(Strategy::Middle)]
    #[test_case(Strategy::Last)]
    #[test_case(Strategy::Random)]
    #[test_case(Strategy::Heuristic)]
    #[test_case(Strategy::Entropy)]
    #[test_case(Strategy::FastEntropy)]
    fn test_benchmark(strategy: Strategy) {
        let mut dict = Dictionary::load(WORDS).unwrap();
        dict.precompute_entropy_table();
        let report = benchmark(&dict, "salet", strategy, 3).unwrap();
        assert_eq!(report.games, WORDS.len());
        // candidates always contain the secret and shrink every turn, so tiny dictionaries are
        // always solved in time
        assert_eq!(report.wins, report.games);
        assert!(report.avg_turns() >= 1.0 && report.avg_turns() <= NUM_TURNS as WordleFloat);
        assert_eq!(report.win_rate(), 100.0);
        assert_eq!(report, benchmark(&dict, "salet", strategy, 3).unwrap());
    }

    #[test]
    fn test_benchmark_needs_table_for_fast_entropy() {
        let dict = Dictionary::load(WORDS).unwrap();
        assert_eq!(
            benchmark(&dict, "salet", Strategy::FastEntropy, 0),
            Err(SolverErr::MissingPrecomputation)
        );
    }

    #[test]
    fn test_empty_report() {
        let report = BenchmarkReport { strategy: Strategy::First, games: 0, wins: 0, total_turns: 0 };
        assert_eq!(report.win_rate(), 0.0);
        assert_eq!(report.avg_turns(), 0.0);
    }
}
