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

use super::grid::Grid;
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// The progress of a puzzle: how many swaps have been made and the
/// arrangement of the letters that they led to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveState {
    n_swaps: u32,
    grid: Grid,
}

impl SaveState {
    pub fn new(n_swaps: u32, grid: Grid) -> SaveState {
        SaveState { n_swaps, grid }
    }

    pub fn n_swaps(&self) -> u32 {
        self.n_swaps
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }
}

impl fmt::Display for SaveState {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:x}.", self.n_swaps)?;

        for letter in self.grid.letters() {
            write!(f, "{}", letter)?;
        }

        Ok(())
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum Error {
    InvalidSwapCount,
    InvalidGrid,
    TrailingText,
    InvalidPuzzleNumber,
    MissingSeparator,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let text = match self {
            Error::InvalidSwapCount => "invalid swap count",
            Error::InvalidGrid => "invalid grid",
            Error::TrailingText => "trailing text",
            Error::InvalidPuzzleNumber => "invalid puzzle number",
            Error::MissingSeparator => "missing separator",
        };

        write!(f, "{}", text)
    }
}

impl FromStr for SaveState {
    type Err = Error;

    fn from_str(s: &str) -> Result<SaveState, Error> {
        let mut parts = s.split('.');

        let Some(n_swaps) = parts.next()
            .and_then(|p| u32::from_str_radix(p, 16).ok())
        else {
            return Err(Error::InvalidSwapCount);
        };

        let Some(grid) = parts.next()
            .and_then(|p| Grid::from_letters(p).ok())
        else {
            return Err(Error::InvalidGrid);
        };

        if parts.next().is_some() {
            return Err(Error::TrailingText);
        }

        Ok(SaveState { n_swaps, grid })
    }
}

/// Writes the save states of several puzzles as comma-separated
/// `number:state` entries, ordered by puzzle number.
pub fn serialize_multiple<W: fmt::Write>(
    output: &mut W,
    save_states: &HashMap<usize, SaveState>,
) -> fmt::Result {
    let mut puzzle_nums = save_states.keys().copied().collect::<Vec<_>>();
    puzzle_nums.sort_unstable();

    for (i, puzzle_num) in puzzle_nums.into_iter().enumerate() {
        if i > 0 {
            output.write_char(',')?;
        }

        write!(output, "{}:{}", puzzle_num, save_states[&puzzle_num])?;
    }

    Ok(())
}

pub fn parse_multiple(s: &str) -> Result<HashMap<usize, SaveState>, Error> {
    let mut save_states = HashMap::new();

    if s.is_empty() {
        return Ok(save_states);
    }

    for entry in s.split(',') {
        let Some((puzzle_num, save_state)) = entry.split_once(':')
        else {
            return Err(Error::MissingSeparator);
        };

        let Ok(puzzle_num) = puzzle_num.parse::<usize>()
        else {
            return Err(Error::InvalidPuzzleNumber);
        };

        save_states.insert(puzzle_num, save_state.parse::<SaveState>()?);
    }

    Ok(save_states)
}

#[cfg(test)]
mod test {
    use super::*;

    fn scrambled_grid() -> Grid {
        Grid::new("stcak\ndoges\nrunts\nabcde").unwrap()
    }

    #[test]
    fn display() {
        assert_eq!(
            &SaveState::new(0, scrambled_grid()).to_string(),
            "0.stcakdogesruntsabcde",
        );
        assert_eq!(
            &SaveState::new(14, scrambled_grid()).to_string(),
            "e.stcakdogesruntsabcde",
        );
    }

    #[test]
    fn parse() {
        let save_state = "c.stcakdogesruntsabcde".parse::<SaveState>()
            .unwrap();

        assert_eq!(save_state.n_swaps(), 12);
        assert_eq!(save_state.grid(), &scrambled_grid());
    }

    #[test]
    fn parse_error() {
        assert_eq!(
            &"".parse::<SaveState>().unwrap_err().to_string(),
            "invalid swap count",
        );
        assert_eq!(
            &"g.stcakdogesruntsabcde".parse::<SaveState>()
                .unwrap_err()
                .to_string(),
            "invalid swap count",
        );
        assert_eq!(
            &"1".parse::<SaveState>().unwrap_err().to_string(),
            "invalid grid",
        );
        assert_eq!(
            &"1.stcakdoges".parse::<SaveState>().unwrap_err().to_string(),
            "invalid grid",
        );
        assert_eq!(
            &"1.stcakdoges!untsabcde".parse::<SaveState>()
                .unwrap_err()
                .to_string(),
            "invalid grid",
        );
        assert_eq!(
            &"1.stcakdogesruntsabcde.0".parse::<SaveState>()
                .unwrap_err()
                .to_string(),
            "trailing text",
        );
    }

    #[test]
    fn multiple() {
        let mut save_states = HashMap::new();

        save_states.insert(12, SaveState::new(3, scrambled_grid()));
        save_states.insert(2, SaveState::new(0, scrambled_grid()));

        let mut s = String::new();
        serialize_multiple(&mut s, &save_states).unwrap();

        assert_eq!(
            &s,
            "2:0.stcakdogesruntsabcde,12:3.stcakdogesruntsabcde",
        );

        assert_eq!(parse_multiple(&s).unwrap(), save_states);
        assert!(parse_multiple("").unwrap().is_empty());
    }

    #[test]
    fn multiple_error() {
        assert_eq!(
            parse_multiple("2").unwrap_err(),
            Error::MissingSeparator,
        );
        assert_eq!(
            parse_multiple("x:0.stcakdogesruntsabcde").unwrap_err(),
            Error::InvalidPuzzleNumber,
        );
        assert_eq!(
            parse_multiple("2:0.stcakdogesruntsabcde,3:z").unwrap_err(),
            Error::InvalidSwapCount,
        );
    }
}
