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

use std::fmt;

pub const N_ROWS: usize = 4;
pub const N_COLUMNS: usize = 5;
pub const N_LETTERS: usize = N_ROWS * N_COLUMNS;

/// A (row, column) coordinate in the grid.
pub type Position = (u32, u32);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    letters: [char; N_LETTERS],
}

#[derive(Debug, PartialEq, Eq)]
pub enum Error {
    WrongRowCount(usize),
    WrongRowLength { row: usize, length: usize },
    InvalidLetter(char),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::WrongRowCount(count) => {
                write!(f, "expected {} rows but found {}", N_ROWS, count)
            },
            Error::WrongRowLength { row, length } => {
                write!(
                    f,
                    "row {} has {} letters instead of {}",
                    row + 1,
                    length,
                    N_COLUMNS,
                )
            },
            Error::InvalidLetter(ch) => write!(f, "invalid letter “{}”", ch),
        }
    }
}

fn normalize_letter(ch: char) -> Result<char, Error> {
    if !ch.is_alphabetic() {
        return Err(Error::InvalidLetter(ch));
    }

    let mut lower = ch.to_lowercase();

    match (lower.next(), lower.next()) {
        (Some(lower), None) => Ok(lower),
        _ => Err(Error::InvalidLetter(ch)),
    }
}

impl Grid {
    /// Parses a grid written as one row per line. Blank lines and
    /// surrounding whitespace are ignored.
    pub fn new(s: &str) -> Result<Grid, Error> {
        Grid::from_rows(
            s.lines().map(str::trim).filter(|line| !line.is_empty())
        )
    }

    pub fn from_rows<I, T>(rows: I) -> Result<Grid, Error>
        where I: IntoIterator<Item = T>,
              T: AsRef<str>
    {
        let mut letters = [' '; N_LETTERS];
        let mut n_rows = 0;

        for (row, text) in rows.into_iter().enumerate() {
            n_rows += 1;

            if row >= N_ROWS {
                continue;
            }

            let text = text.as_ref();
            let length = text.chars().count();

            if length != N_COLUMNS {
                return Err(Error::WrongRowLength { row, length });
            }

            for (col, ch) in text.chars().enumerate() {
                letters[row * N_COLUMNS + col] = normalize_letter(ch)?;
            }
        }

        if n_rows != N_ROWS {
            return Err(Error::WrongRowCount(n_rows));
        }

        Ok(Grid { letters })
    }

    /// Parses a grid written as all of its letters in row order
    /// without any separators.
    pub fn from_letters(s: &str) -> Result<Grid, Error> {
        let letters = s.chars().collect::<Vec<char>>();

        if letters.len() % N_COLUMNS != 0 {
            return Err(Error::WrongRowLength {
                row: letters.len() / N_COLUMNS,
                length: letters.len() % N_COLUMNS,
            });
        }

        Grid::from_rows(
            letters.chunks(N_COLUMNS).map(|row| row.iter().collect::<String>())
        )
    }

    pub fn at(&self, row: u32, col: u32) -> char {
        self.letters[index(row, col)]
    }

    pub fn row(&self, row: u32) -> &[char] {
        assert!((row as usize) < N_ROWS);

        let start = row as usize * N_COLUMNS;

        &self.letters[start..start + N_COLUMNS]
    }

    pub fn row_word(&self, row: u32) -> String {
        self.row(row).iter().collect()
    }

    pub fn letters(&self) -> impl Iterator<Item = char> + '_ {
        self.letters.iter().copied()
    }

    /// Returns the letters in sorted order. Two grids are
    /// rearrangements of each other when these are equal.
    pub fn sorted_letters(&self) -> [char; N_LETTERS] {
        let mut letters = self.letters;
        letters.sort_unstable();
        letters
    }

    pub fn swap(&mut self, a: Position, b: Position) {
        self.letters.swap(index(a.0, a.1), index(b.0, b.1));
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (row, letters) in self.letters.chunks(N_COLUMNS).enumerate() {
            if row > 0 {
                writeln!(f)?;
            }

            for &letter in letters {
                write!(f, "{}", letter)?;
            }
        }

        Ok(())
    }
}

fn index(row: u32, col: u32) -> usize {
    assert!((row as usize) < N_ROWS);
    assert!((col as usize) < N_COLUMNS);

    row as usize * N_COLUMNS + col as usize
}
