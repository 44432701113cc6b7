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

use super::grid::{Grid, Position, N_ROWS};
use super::dictionary::Dictionary;
use super::save_state::SaveState;
use super::share;
use std::rc::Rc;

pub const DEFAULT_MAX_SWAPS: u32 = 12;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    pub max_swaps: u32,
}

impl Default for Config {
    fn default() -> Config {
        Config {
            max_swaps: DEFAULT_MAX_SWAPS,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    InProgress,
    Solved,
    OutOfMoves,
}

/// Receives the notifications that a puzzle emits. Each method is
/// called synchronously from within the operation that caused the
/// change.
pub trait Listener {
    fn row_solved(&mut self, _row: u32) {}
    fn solved(&mut self, _n_swaps: u32) {}
    fn out_of_moves(&mut self) {}
    fn swap_count_changed(&mut self, _n_swaps: u32) {}
}

impl Listener for () {}

pub struct Puzzle<L: Listener = ()> {
    initial_grid: Grid,
    grid: Grid,
    dictionary: Rc<Dictionary>,
    max_swaps: u32,
    n_swaps: u32,
    selection: Option<Position>,

    // Row validity as of the last evaluation, used to report only
    // the rows that have just become valid.
    previous_validity: [bool; N_ROWS],
    solved_swaps: Option<u32>,
    out_of_moves_reported: bool,

    save_state_dirty: bool,

    listener: L,
}

impl<L: Listener> Puzzle<L> {
    pub fn new(
        grid: Grid,
        dictionary: Rc<Dictionary>,
        config: Config,
        listener: L,
    ) -> Puzzle<L> {
        let mut puzzle = Puzzle {
            initial_grid: grid.clone(),
            grid,
            dictionary,
            max_swaps: config.max_swaps,
            n_swaps: 0,
            selection: None,
            previous_validity: [false; N_ROWS],
            solved_swaps: None,
            out_of_moves_reported: false,
            save_state_dirty: false,
            listener,
        };

        puzzle.rearm();

        puzzle
    }

    // Resets the outcome tracking to match the current grid without
    // emitting anything.
    fn rearm(&mut self) {
        self.previous_validity = self.row_validity();

        self.solved_swaps = self.previous_validity
            .iter()
            .all(|&valid| valid)
            .then_some(self.n_swaps);

        self.out_of_moves_reported =
            self.solved_swaps.is_none() && self.n_swaps >= self.max_swaps;
    }

    /// Handles a tap on a tile. The first tap selects the tile, a
    /// second tap on the same tile deselects it and a tap on any
    /// other tile swaps the two.
    pub fn select_or_swap(&mut self, row: u32, col: u32) {
        let position = (row, col);

        // Validate the coordinates even if they only get stored
        self.grid.at(row, col);

        if self.solved_swaps.is_some() {
            return;
        }

        match self.selection {
            None => self.selection = Some(position),
            Some(selected) if selected == position => self.selection = None,
            Some(selected) => {
                self.swap(selected, position);
                self.selection = None;
            },
        }
    }

    /// Swaps the letters at two positions. Returns false without
    /// changing anything if the swap isn’t allowed.
    pub fn swap(&mut self, a: Position, b: Position) -> bool {
        self.grid.at(a.0, a.1);
        self.grid.at(b.0, b.1);

        if a == b {
            self.selection = None;
            return false;
        }

        if self.solved_swaps.is_some() {
            log::debug!("ignoring swap on a solved puzzle");
            return false;
        }

        if self.n_swaps >= self.max_swaps {
            log::debug!(
                "ignoring swap because the limit of {} was reached",
                self.max_swaps,
            );
            return false;
        }

        self.grid.swap(a, b);
        self.n_swaps += 1;
        self.selection = None;
        self.save_state_dirty = true;

        self.listener.swap_count_changed(self.n_swaps);

        self.evaluate();

        true
    }

    fn evaluate(&mut self) {
        let validity = self.row_validity();

        for (row, (&was_valid, &valid)) in self.previous_validity
            .iter()
            .zip(validity.iter())
            .enumerate()
        {
            if valid && !was_valid {
                self.listener.row_solved(row as u32);
            }
        }

        self.previous_validity = validity;

        if validity.iter().all(|&valid| valid) {
            if self.solved_swaps.is_none() {
                log::info!("puzzle solved in {} swaps", self.n_swaps);
                self.solved_swaps = Some(self.n_swaps);
                self.listener.solved(self.n_swaps);
            }
        } else if self.n_swaps >= self.max_swaps &&
            !self.out_of_moves_reported
        {
            log::info!("out of moves after {} swaps", self.n_swaps);
            self.out_of_moves_reported = true;
            self.listener.out_of_moves();
        }
    }

    /// Puts the letters back in their starting positions and forgets
    /// all progress. Rows that are already words in the starting grid
    /// aren’t reported by `row_solved` until they are broken and made
    /// again.
    pub fn reset(&mut self) {
        self.grid = self.initial_grid.clone();
        self.n_swaps = 0;
        self.selection = None;
        self.save_state_dirty = true;

        self.rearm();

        self.listener.swap_count_changed(0);
    }

    pub fn row_validity(&self) -> [bool; N_ROWS] {
        let mut validity = [false; N_ROWS];

        for (row, valid) in validity.iter_mut().enumerate() {
            *valid = self.dictionary.contains(&self.grid.row_word(row as u32));
        }

        validity
    }

    pub fn outcome(&self) -> Outcome {
        if self.row_validity().iter().all(|&valid| valid) {
            Outcome::Solved
        } else if self.n_swaps >= self.max_swaps {
            Outcome::OutOfMoves
        } else {
            Outcome::InProgress
        }
    }

    /// The number of swaps it took to solve the puzzle, or None if it
    /// hasn’t been solved yet.
    pub fn solved_swaps(&self) -> Option<u32> {
        self.solved_swaps
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn initial_grid(&self) -> &Grid {
        &self.initial_grid
    }

    pub fn n_swaps(&self) -> u32 {
        self.n_swaps
    }

    pub fn max_swaps(&self) -> u32 {
        self.max_swaps
    }

    pub fn swaps_remaining(&self) -> u32 {
        self.max_swaps.saturating_sub(self.n_swaps)
    }

    pub fn selection(&self) -> Option<Position> {
        self.selection
    }

    pub fn listener(&self) -> &L {
        &self.listener
    }

    pub fn listener_mut(&mut self) -> &mut L {
        &mut self.listener
    }

    pub fn share_text(&self, puzzle_num: usize) -> String {
        share::share_text(puzzle_num, self.n_swaps, &self.row_validity())
    }

    pub fn save_state(&self) -> SaveState {
        SaveState::new(self.n_swaps, self.grid.clone())
    }

    pub fn changed_save_state(&mut self) -> Option<SaveState> {
        if self.save_state_dirty {
            self.save_state_dirty = false;
            Some(self.save_state())
        } else {
            None
        }
    }

    /// Restores the progress from a save state. The state is ignored
    /// if it isn’t a rearrangement of this puzzle’s letters or if it
    /// has more swaps than the limit.
    pub fn load_save_state(&mut self, save_state: &SaveState) -> bool {
        if save_state.grid().sorted_letters() !=
            self.initial_grid.sorted_letters()
        {
            log::warn!("save state doesn’t match the puzzle letters");
            return false;
        }

        if save_state.n_swaps() > self.max_swaps {
            log::warn!(
                "save state has {} swaps but the limit is {}",
                save_state.n_swaps(),
                self.max_swaps,
            );
            return false;
        }

        self.grid = save_state.grid().clone();
        self.n_swaps = save_state.n_swaps();
        self.selection = None;
        self.save_state_dirty = false;

        self.rearm();

        self.listener.swap_count_changed(self.n_swaps);

        true
    }
}
