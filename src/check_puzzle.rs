// Jumbles – A word swap game
// Copyright (C) 2024  Neil Roberts
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <http://www.gnu.org/licenses/>.

// Some of the shared modules have parts that only the web game uses
#![allow(dead_code)]

mod grid;
mod dictionary;
mod puzzle;
mod puzzle_data;
mod save_state;
mod share;
mod solver;
mod logging;

use std::{fs, process::ExitCode, ffi::OsString};
use std::rc::Rc;
use clap::Parser;
use dictionary::Dictionary;
use grid::{Grid, N_ROWS};
use puzzle::{Config, Puzzle};
use puzzle_data::PuzzleData;

#[derive(Parser)]
#[command(name = "Check puzzle")]
struct Cli {
    #[arg(required = true, value_name = "PUZZLE")]
    puzzles: Vec<OsString>,
    #[arg(short, long, value_name = "FILE")]
    dictionary: OsString,
    #[arg(
        short,
        long,
        value_name = "COUNT",
        default_value_t = puzzle::DEFAULT_MAX_SWAPS,
    )]
    max_swaps: u32,
    #[arg(short = 'H', long)]
    human_readable: bool,
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, PartialEq, Eq)]
enum Problem {
    UnknownWord(String),
    RowAlreadySolved(u32),
    TooManySwaps { needed: usize, max_swaps: u32 },
    Unsolvable,
}

impl std::fmt::Display for Problem {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Problem::UnknownWord(word) => {
                write!(f, "“{}” is not in the dictionary", word)
            },
            Problem::RowAlreadySolved(row) => {
                write!(f, "row {} is already a word", row + 1)
            },
            Problem::TooManySwaps { needed, max_swaps } => {
                write!(
                    f,
                    "the solution needs {} swaps but the limit is {}",
                    needed,
                    max_swaps,
                )
            },
            Problem::Unsolvable => write!(f, "the puzzle can’t be solved"),
        }
    }
}

struct Report {
    max_swaps: u32,
    solution: Option<solver::Solution>,
    problems: Vec<Problem>,
}

fn check_puzzle(
    puzzle_data: &PuzzleData,
    dictionary: &Rc<Dictionary>,
    default_max_swaps: u32,
) -> Report {
    let mut problems = Vec::new();

    for word in puzzle_data.words.iter() {
        if !dictionary.contains(word) {
            problems.push(Problem::UnknownWord(word.clone()));
        }
    }

    let max_swaps = puzzle_data.max_swaps.unwrap_or(default_max_swaps);

    let mut puzzle = Puzzle::new(
        puzzle_data.grid.clone(),
        Rc::clone(dictionary),
        Config { max_swaps },
        (),
    );

    for (row, &valid) in puzzle.row_validity().iter().enumerate() {
        if valid {
            problems.push(Problem::RowAlreadySolved(row as u32));
        }
    }

    let solution = solver::solve(
        &puzzle_data.grid,
        puzzle_data.words.as_slice(),
    );

    match solution {
        Some(ref solution) => {
            if solution.swaps.len() > max_swaps as usize {
                problems.push(Problem::TooManySwaps {
                    needed: solution.swaps.len(),
                    max_swaps,
                });
            } else {
                // Play the solution through to make sure the game
                // agrees that it solves the puzzle
                for &(a, b) in solution.swaps.iter() {
                    puzzle.swap(a, b);
                }

                if puzzle.solved_swaps().is_none() {
                    problems.push(Problem::Unsolvable);
                }
            }
        },
        None => problems.push(Problem::Unsolvable),
    }

    Report {
        max_swaps,
        solution,
        problems,
    }
}

fn print_grid(grid: &Grid) {
    for row in 0..N_ROWS as u32 {
        println!("  {}", grid.row_word(row).to_uppercase());
    }
}

fn print_human_readable(puzzle_data: &PuzzleData, report: &Report) {
    println!("Puzzle #{}\n", puzzle_data.number);
    print_grid(&puzzle_data.grid);

    if let Some(solution) = report.solution.as_ref() {
        println!(
            "\nSolution in {} of {} swaps\n",
            solution.swaps.len(),
            report.max_swaps,
        );

        for &((row1, col1), (row2, col2)) in solution.swaps.iter() {
            println!(
                "  {},{} ↔ {},{}",
                row1 + 1,
                col1 + 1,
                row2 + 1,
                col2 + 1,
            );
        }

        println!();

        print_grid(&solution.grid);
    }

    for problem in report.problems.iter() {
        println!("\n⚠ {}", problem);
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    logging::init_logger(cli.verbose);

    let dictionary = match fs::read_to_string(&cli.dictionary) {
        Ok(d) => Rc::new(Dictionary::from_word_list(&d)),
        Err(e) => {
            eprintln!("{}: {}", cli.dictionary.to_string_lossy(), e);
            return ExitCode::FAILURE;
        },
    };

    log::debug!("loaded {} words", dictionary.len());

    let mut result = ExitCode::SUCCESS;

    for filename in cli.puzzles.iter() {
        let puzzle_data = match fs::read_to_string(filename)
            .map_err(|e| e.to_string())
            .and_then(|s| s.parse::<PuzzleData>().map_err(|e| e.to_string()))
        {
            Ok(p) => p,
            Err(e) => {
                eprintln!("{}: {}", filename.to_string_lossy(), e);
                result = ExitCode::FAILURE;
                continue;
            },
        };

        let report = check_puzzle(&puzzle_data, &dictionary, cli.max_swaps);

        if cli.human_readable {
            print_human_readable(&puzzle_data, &report);
        } else if let Some(solution) = report.solution.as_ref() {
            println!(
                "{}: {}/{}",
                filename.to_string_lossy(),
                solution.swaps.len(),
                report.max_swaps,
            );
        }

        if !report.problems.is_empty() {
            for problem in report.problems.iter() {
                eprintln!("{}: {}", filename.to_string_lossy(), problem);
            }

            result = ExitCode::FAILURE;
        }
    }

    result
}
