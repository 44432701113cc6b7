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
mod logging;

use std::{fs, process::ExitCode, ffi::OsString};
use std::io::BufRead;
use std::rc::Rc;
use clap::Parser;
use grid::{Position, N_ROWS, N_COLUMNS};
use puzzle::{Config, Listener, Puzzle};
use puzzle_data::PuzzleData;

#[derive(Parser)]
#[command(name = "Jumbles")]
struct Cli {
    #[arg(value_name = "PUZZLE")]
    puzzle: OsString,
    #[arg(short, long, value_name = "FILE")]
    dictionary: OsString,
    #[arg(
        short,
        long,
        value_name = "COUNT",
        default_value_t = puzzle::DEFAULT_MAX_SWAPS,
    )]
    max_swaps: u32,
    #[arg(short, long)]
    verbose: bool,
}

struct Printer;

impl Listener for Printer {
    fn row_solved(&mut self, row: u32) {
        println!("Row {} solved!", row + 1);
    }

    fn solved(&mut self, n_swaps: u32) {
        if n_swaps == 1 {
            println!("Solved in 1 swap!");
        } else {
            println!("Solved in {} swaps!", n_swaps);
        }
    }

    fn out_of_moves(&mut self) {
        println!("Out of moves! Type “reset” to try again.");
    }
}

#[derive(Debug, PartialEq, Eq)]
enum Command {
    Select(Position),
    Swap(Position, Position),
    Reset,
    Share,
    Quit,
}

// Coordinates are typed counting from 1
fn parse_coordinate(s: &str, limit: usize) -> Result<u32, String> {
    match s.parse::<usize>() {
        Ok(n) if n >= 1 && n <= limit => Ok(n as u32 - 1),
        _ => Err(format!("“{}” is not a number from 1 to {}", s, limit)),
    }
}

fn parse_position(row: &str, col: &str) -> Result<Position, String> {
    Ok((parse_coordinate(row, N_ROWS)?, parse_coordinate(col, N_COLUMNS)?))
}

fn parse_command(line: &str) -> Result<Command, String> {
    let words = line.split_whitespace().collect::<Vec<_>>();

    match words.as_slice() {
        ["reset"] => Ok(Command::Reset),
        ["share"] => Ok(Command::Share),
        ["quit"] | ["q"] => Ok(Command::Quit),
        [row, col] => Ok(Command::Select(parse_position(row, col)?)),
        [row1, col1, row2, col2] => Ok(Command::Swap(
            parse_position(row1, col1)?,
            parse_position(row2, col2)?,
        )),
        [] => Err("empty command".to_string()),
        _ => Err(format!("unknown command “{}”", line.trim())),
    }
}

fn print_puzzle<L: Listener>(puzzle: &Puzzle<L>) {
    let validity = puzzle.row_validity();

    for row in 0..N_ROWS as u32 {
        for col in 0..N_COLUMNS as u32 {
            let letter = puzzle.grid().at(row, col).to_uppercase();

            if puzzle.selection() == Some((row, col)) {
                print!("[{}]", letter);
            } else {
                print!(" {} ", letter);
            }
        }

        if validity[row as usize] {
            print!("  ✓");
        }

        println!();
    }

    println!("Swaps: {}/{}", puzzle.n_swaps(), puzzle.max_swaps());
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    logging::init_logger(cli.verbose);

    let word_list = match fs::read_to_string(&cli.dictionary) {
        Ok(d) => d,
        Err(e) => {
            eprintln!("{}: {}", cli.dictionary.to_string_lossy(), e);
            return ExitCode::FAILURE;
        },
    };

    let puzzle_data = match fs::read_to_string(&cli.puzzle)
        .map_err(|e| e.to_string())
        .and_then(|s| {
            s.parse::<PuzzleData>().map_err(|e| {
                format!("Puzzle unavailable: {}", e)
            })
        })
    {
        Ok(p) => p,
        Err(e) => {
            eprintln!("{}: {}", cli.puzzle.to_string_lossy(), e);
            return ExitCode::FAILURE;
        },
    };

    let mut dictionary = dictionary::Dictionary::from_word_list(&word_list);

    for word in puzzle_data.words.iter() {
        dictionary.insert(word);
    }

    let config = Config {
        max_swaps: puzzle_data.max_swaps.unwrap_or(cli.max_swaps),
    };

    let mut puzzle = Puzzle::new(
        puzzle_data.grid,
        Rc::new(dictionary),
        config,
        Printer,
    );

    print_puzzle(&puzzle);

    for line in std::io::stdin().lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(e) => {
                eprintln!("stdin: {}", e);
                return ExitCode::FAILURE;
            },
        };

        match parse_command(&line) {
            Ok(Command::Select((row, col))) => {
                puzzle.select_or_swap(row, col);
            },
            Ok(Command::Swap(a, b)) => {
                if !puzzle.swap(a, b) {
                    println!("That swap isn’t possible");
                }
            },
            Ok(Command::Reset) => puzzle.reset(),
            Ok(Command::Share) => {
                println!("{}", puzzle.share_text(puzzle_data.number));
                continue;
            },
            Ok(Command::Quit) => break,
            Err(e) => {
                eprintln!("{}", e);
                continue;
            },
        }

        print_puzzle(&puzzle);
    }

    ExitCode::SUCCESS
}
