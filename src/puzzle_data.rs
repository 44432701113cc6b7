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
use std::str::FromStr;
use serde::Deserialize;
use super::grid::{self, Grid, N_ROWS, N_COLUMNS};

/// A puzzle as it is published by the puzzle server.
#[derive(Debug)]
pub struct PuzzleData {
    pub number: usize,
    pub grid: Grid,
    pub words: Vec<String>,
    pub max_swaps: Option<u32>,
}

// A row can either be sent as a string or as an array of one-letter
// strings.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawRow {
    Word(String),
    Letters(Vec<String>),
}

impl RawRow {
    fn into_string(self) -> String {
        match self {
            RawRow::Word(word) => word,
            RawRow::Letters(letters) => letters.concat(),
        }
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawPuzzle {
    #[serde(default)]
    number: usize,
    grid: Option<Vec<RawRow>>,
    words: Option<Vec<String>>,
    max_swaps: Option<u32>,
}

#[derive(Debug)]
pub enum Error {
    Json(serde_json::Error),
    MissingGrid,
    GridError(grid::Error),
    MissingWords,
    WrongWordCount(usize),
    WrongWordLength(String),
    LettersMismatch,
    ZeroMaxSwaps,
}

impl From<grid::Error> for Error {
    fn from(e: grid::Error) -> Error {
        Error::GridError(e)
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Error {
        Error::Json(e)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::Json(e) => e.fmt(f),
            Error::MissingGrid => write!(f, "missing grid"),
            Error::GridError(e) => e.fmt(f),
            Error::MissingWords => write!(f, "missing word list"),
            Error::WrongWordCount(count) => {
                write!(f, "expected {} words but found {}", N_ROWS, count)
            },
            Error::WrongWordLength(word) => {
                write!(f, "“{}” is not {} letters long", word, N_COLUMNS)
            },
            Error::LettersMismatch => {
                write!(f, "the words don’t use the letters of the grid")
            },
            Error::ZeroMaxSwaps => write!(f, "the swap limit is zero"),
        }
    }
}

impl std::error::Error for Error {}

impl FromStr for PuzzleData {
    type Err = Error;

    fn from_str(s: &str) -> Result<PuzzleData, Error> {
        let raw = serde_json::from_str::<RawPuzzle>(s)?;

        let Some(rows) = raw.grid
        else {
            return Err(Error::MissingGrid);
        };

        let grid = Grid::from_rows(rows.into_iter().map(RawRow::into_string))?;

        let Some(words) = raw.words
        else {
            return Err(Error::MissingWords);
        };

        if words.len() != N_ROWS {
            return Err(Error::WrongWordCount(words.len()));
        }

        let words = words.into_iter()
            .map(|word| {
                if word.chars().count() == N_COLUMNS {
                    Ok(word.to_lowercase())
                } else {
                    Err(Error::WrongWordLength(word))
                }
            })
            .collect::<Result<Vec<String>, Error>>()?;

        let solution = Grid::from_rows(words.iter())
            .map_err(|_| Error::LettersMismatch)?;

        if solution.sorted_letters() != grid.sorted_letters() {
            return Err(Error::LettersMismatch);
        }

        if raw.max_swaps == Some(0) {
            return Err(Error::ZeroMaxSwaps);
        }

        Ok(PuzzleData {
            number: raw.number,
            grid,
            words,
            max_swaps: raw.max_swaps,
        })
    }
}
