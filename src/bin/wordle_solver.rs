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


use std::{error::Error, io::{self, BufRead, Write}, path::PathBuf};
use clap::{Parser, Subcommand};
use rand::{Rng, SeedableRng, rngs::StdRng};
use wordle_solver::wordle::*;

const SHOW_CANDIDATES: usize = 10;

/// Wordle solver: simulates games, benchmarks strategies, and assists with real puzzles
#[derive(Parser, Debug)]
#[clap(author, version)]
struct Cli {
    /// word list, one 5 letter word per line
    #[clap(short, long)]
    dictionary: PathBuf,

    /// build the pattern table (needed by the fast-entropy strategy)
    #[clap(long)]
    precompute: bool,

    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Autoplay a single secret word, printing every turn
    Solve {
        #[clap(long)]
        secret: String,
        #[clap(long, default_value = "salet")]
        first: String,
        #[clap(long, default_value = "entropy")]
        strategy: Strategy,
        #[clap(long, default_value_t = 0)]
        seed: u64,
    },
    /// Autoplay every dictionary word and report how a strategy does
    Bench {
        #[clap(long, default_value = "salet")]
        first: String,
        #[clap(long, default_value = "entropy")]
        strategy: Strategy,
        #[clap(long, default_value_t = 0)]
        seed: u64,
    },
    /// Help with a puzzle whose answer is unknown: enter "<guess> <result>" lines, e.g. "crane xxgxy"
    Assist {
        #[clap(long, default_value = "entropy")]
        strategy: Strategy,
        #[clap(long, default_value_t = 0)]
        seed: u64,
    },
    /// Play a game yourself against a secret word
    Play {
        /// a random dictionary word when omitted
        #[clap(long)]
        secret: Option<String>,
        #[clap(long)]
        seed: Option<u64>,
    },
    /// Play a fixed list of guesses against a secret word, printing every turn and its candidates
    Replay {
        #[clap(long)]
        secret: String,
        /// at most 6 are played
        #[clap(required = true)]
        guesses: Vec<String>,
    },
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    let mut dictionary = Dictionary::from_file(&cli.dictionary)?;
    log::info!("loaded {} words from {}", dictionary.len(), cli.dictionary.display());
    if cli.precompute {
        dictionary.precompute_entropy_table();
    }

    match cli.command {
        Command::Solve { secret, first, strategy, seed } => solve(&dictionary, &secret, &first, strategy, seed),
        Command::Bench { first, strategy, seed } => bench(&dictionary, &first, strategy, seed),
        Command::Assist { strategy, seed } => assist(&dictionary, strategy, seed),
        Command::Play { secret, seed } => play(&dictionary, secret, seed),
        Command::Replay { secret, guesses } => replay_guesses(&dictionary, &secret, &guesses),
    }
}

fn solve(dictionary: &Dictionary, secret: &str, first: &str, strategy: Strategy, seed: u64) -> Result<(), Box<dyn Error>> {
    let mut selector = strategy.selector(seed);
    let mut game = Game::new(dictionary, secret)?;
    let mut guess = first.to_string();
    loop {
        let outcome = game.turn(&guess)?;
        println!(
            "{}. {} {} ({} candidates)",
            outcome.turn,
            normalize_wordle_word(&guess),
            outcome.pattern,
            game.candidates().len()
        );

        match outcome.status {
            Status::Win => {
                println!("solved in {} turns", outcome.turn);
                return Ok(());
            }
            Status::Loss => {
                println!("failed to find '{}' in {} turns", normalize_wordle_word(secret), NUM_TURNS);
                return Ok(());
            }
            Status::InProgress => {
                guess = dictionary.word_str(game.recommend(selector.as_mut())?).to_string();
                println!("   next: {}", guess);
            }
        }
    }
}

fn bench(dictionary: &Dictionary, first: &str, strategy: Strategy, seed: u64) -> Result<(), Box<dyn Error>> {
    let report = benchmark(dictionary, first, strategy, seed)?;
    println!("strategy:  {}", report.strategy);
    println!("games:     {}", report.games);
    println!("wins:      {} ({:.2}%)", report.wins, report.win_rate());
    println!("avg turns: {:.4}", report.avg_turns());
    Ok(())
}

fn assist(dictionary: &Dictionary, strategy: Strategy, seed: u64) -> Result<(), Box<dyn Error>> {
    let mut selector = strategy.selector(seed);
    let mut game = Game::unknown(dictionary);
    println!("try: {}", dictionary.word_str(game.recommend(selector.as_mut())?));

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        let mut parts = line.split_whitespace();
        let (guess, result) = match (parts.next(), parts.next()) {
            (Some(guess), Some(result)) => (guess, result),
            (None, _) => continue,
            _ => {
                eprintln!("expected '<guess> <result>', like 'crane xxgxy'");
                continue;
            }
        };

        // contradictory feedback is dropped so a typo can be entered again
        let outcome = match game.turn_if_consistent(guess, result) {
            Ok(outcome) => outcome,
            Err(SolverErr::EmptyCandidateSet) => {
                eprintln!("'{} {}' contradicts the earlier turns, ignored", guess, result);
                continue;
            }
            Err(err) => {
                eprintln!("{}", err);
                continue;
            }
        };

        if outcome.status == Status::Win {
            println!("solved in {} turns", outcome.turn);
            return Ok(());
        }

        print_candidates(dictionary, game.candidates());
        let next = match game.recommend(selector.as_mut()) {
            Ok(next) => next,
            Err(err) => {
                eprintln!("{}", err);
                continue;
            }
        };
        if outcome.status == Status::Loss {
            println!("out of turns, the answer was probably '{}'", dictionary.word_str(next));
            return Ok(());
        }
        println!("try: {}", dictionary.word_str(next));
    }

    Ok(())
}

fn play(dictionary: &Dictionary, secret: Option<String>, seed: Option<u64>) -> Result<(), Box<dyn Error>> {
    let secret = match secret {
        Some(secret) => secret,
        None => {
            let mut rng = match seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_entropy(),
            };
            dictionary.word_str(rng.gen_range(0..dictionary.len())).to_string()
        }
    };

    let mut game = Game::new(dictionary, &secret)?;
    print!("guess: ");
    io::stdout().flush()?;

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        match game.turn(&line) {
            Ok(outcome) => {
                println!("{}. {}", outcome.turn, outcome.pattern);
                match outcome.status {
                    Status::Win => {
                        println!("solved in {} turns", outcome.turn);
                        return Ok(());
                    }
                    Status::Loss => {
                        println!("the word was '{}'", normalize_wordle_word(&secret));
                        return Ok(());
                    }
                    Status::InProgress => {}
                }
            }
            Err(err) => println!("{}", err),
        }

        print!("guess: ");
        io::stdout().flush()?;
    }

    Ok(())
}

fn replay_guesses(dictionary: &Dictionary, secret: &str, guesses: &[String]) -> Result<(), Box<dyn Error>> {
    for turn in replay(dictionary, secret, guesses)? {
        println!("{}. {} {}", turn.outcome.turn, turn.guess, turn.outcome.pattern);
        print_candidates(dictionary, &turn.candidates);
        match turn.outcome.status {
            Status::Win => println!("solved in {} turns", turn.outcome.turn),
            Status::Loss => println!("the word was '{}'", normalize_wordle_word(secret)),
            Status::InProgress => {}
        }
    }

    Ok(())
}

fn print_candidates(dictionary: &Dictionary, candidates: &[usize]) {
    let shown: Vec<&str> = candidates
        .iter()
        .take(SHOW_CANDIDATES)
        .map(|&idx| dictionary.word_str(idx))
        .collect();
    let more = candidates.len().saturating_sub(SHOW_CANDIDATES);
    if more > 0 {
        println!("{} candidates: {} (+{} more)", candidates.len(), shown.join(" "), more);
    } else {
        println!("{} candidates: {}", candidates.len(), shown.join(" "));
    }
}
