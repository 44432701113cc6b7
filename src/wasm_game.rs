// Jumbles – A word swap game
// Copyright (C) 2023, 2024  Neil Roberts
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

use wasm_bindgen::prelude::*;
use super::grid::{N_ROWS, N_COLUMNS};
use super::dictionary::Dictionary;
use super::puzzle::{Config, Outcome, Puzzle, DEFAULT_MAX_SWAPS};
use super::puzzle_data::PuzzleData;
use super::save_state::{self, SaveState};
use super::event_queue::{self, Event, EventQueue};
use super::logging;
use std::collections::HashMap;
use std::cell::RefCell;
use std::rc::Rc;

const SAVE_STATE_KEY: &'static str = "jumbles-save-states";

#[derive(Default)]
struct Callbacks {
    row_solved: Option<js_sys::Function>,
    solved: Option<js_sys::Function>,
    out_of_moves: Option<js_sys::Function>,
    swap_count_changed: Option<js_sys::Function>,
}

impl Callbacks {
    fn for_event(&self, event: Event) -> (Option<js_sys::Function>, JsValue) {
        match event {
            Event::RowSolved(row) => (self.row_solved.clone(), row.into()),
            Event::Solved(n_swaps) => (self.solved.clone(), n_swaps.into()),
            Event::OutOfMoves => {
                (self.out_of_moves.clone(), JsValue::UNDEFINED)
            },
            Event::SwapCountChanged(n_swaps) => {
                (self.swap_count_changed.clone(), n_swaps.into())
            },
        }
    }
}

fn in_range(row: u32, col: u32) -> bool {
    (row as usize) < N_ROWS && (col as usize) < N_COLUMNS
}

/// The game as seen from JavaScript. The page handles all of the
/// drawing and input and calls into this to change the puzzle.
///
/// The callbacks are invoked before the method that caused the event
/// returns, but only once the puzzle is no longer borrowed, so they
/// are free to call back into the game.
#[wasm_bindgen]
pub struct Jumbles {
    puzzle: RefCell<Puzzle<EventQueue>>,
    callbacks: RefCell<Callbacks>,
    puzzle_num: usize,
}

#[wasm_bindgen]
impl Jumbles {
    /// Builds the game from the puzzle JSON fetched from the server
    /// and the text of the word list. Malformed puzzles are reported
    /// as an “unavailable” error. The swap limit in the puzzle takes
    /// precedence over `default_max_swaps`.
    #[wasm_bindgen(constructor)]
    pub fn new(
        puzzle_json: &str,
        word_list: &str,
        default_max_swaps: Option<u32>,
    ) -> Result<Jumbles, JsError> {
        let data = match puzzle_json.parse::<PuzzleData>() {
            Ok(d) => d,
            Err(e) => {
                log::error!("error parsing puzzle: {}", e);
                return Err(JsError::new(&format!("Puzzle unavailable: {}", e)));
            },
        };

        let mut dictionary = Dictionary::from_word_list(word_list);

        // The solutions are always accepted even if the word list
        // doesn’t have them
        for word in data.words.iter() {
            dictionary.insert(word);
        }

        let config = Config {
            max_swaps: data.max_swaps
                .or(default_max_swaps)
                .unwrap_or(DEFAULT_MAX_SWAPS),
        };

        let puzzle = Puzzle::new(
            data.grid,
            Rc::new(dictionary),
            config,
            EventQueue::default(),
        );

        Ok(Jumbles {
            puzzle: RefCell::new(puzzle),
            callbacks: RefCell::new(Callbacks::default()),
            puzzle_num: data.number,
        })
    }

    pub fn set_on_row_solved(&self, callback: Option<js_sys::Function>) {
        self.callbacks.borrow_mut().row_solved = callback;
    }

    pub fn set_on_solved(&self, callback: Option<js_sys::Function>) {
        self.callbacks.borrow_mut().solved = callback;
    }

    pub fn set_on_out_of_moves(&self, callback: Option<js_sys::Function>) {
        self.callbacks.borrow_mut().out_of_moves = callback;
    }

    pub fn set_on_swap_count_changed(
        &self,
        callback: Option<js_sys::Function>,
    ) {
        self.callbacks.borrow_mut().swap_count_changed = callback;
    }

    pub fn select_or_swap(&self, row: u32, col: u32) {
        if !in_range(row, col) {
            log::error!("tile ({}, {}) is outside of the grid", row, col);
            return;
        }

        self.puzzle.borrow_mut().select_or_swap(row, col);
        self.dispatch_events();
    }

    pub fn swap(&self, row1: u32, col1: u32, row2: u32, col2: u32) -> bool {
        if !in_range(row1, col1) || !in_range(row2, col2) {
            log::error!("swap is outside of the grid");
            return false;
        }

        let swapped = self.puzzle.borrow_mut().swap(
            (row1, col1),
            (row2, col2),
        );

        self.dispatch_events();

        swapped
    }

    /// Puts the letters back where they started. Rows that were
    /// already words in the starting grid aren’t reported again.
    pub fn reset(&self) {
        self.puzzle.borrow_mut().reset();
        self.dispatch_events();
    }

    pub fn puzzle_num(&self) -> usize {
        self.puzzle_num
    }

    /// All of the letters in row order.
    pub fn letters(&self) -> String {
        self.puzzle.borrow().grid().letters().collect()
    }

    pub fn n_swaps(&self) -> u32 {
        self.puzzle.borrow().n_swaps()
    }

    pub fn max_swaps(&self) -> u32 {
        self.puzzle.borrow().max_swaps()
    }

    pub fn swaps_remaining(&self) -> u32 {
        self.puzzle.borrow().swaps_remaining()
    }

    pub fn row_valid(&self, row: u32) -> bool {
        self.puzzle.borrow().row_validity()
            .get(row as usize)
            .copied()
            .unwrap_or(false)
    }

    /// One byte per row, set to 1 if the row is currently a word.
    pub fn row_validity(&self) -> Vec<u8> {
        self.puzzle.borrow().row_validity()
            .iter()
            .map(|&valid| valid as u8)
            .collect()
    }

    /// The selected tile as an index in row order.
    pub fn selection(&self) -> Option<u32> {
        self.puzzle.borrow().selection().map(|(row, col)| {
            row * N_COLUMNS as u32 + col
        })
    }

    pub fn outcome(&self) -> String {
        match self.puzzle.borrow().outcome() {
            Outcome::InProgress => "in-progress",
            Outcome::Solved => "solved",
            Outcome::OutOfMoves => "out-of-moves",
        }.to_string()
    }

    pub fn share_text(&self) -> String {
        self.puzzle.borrow().share_text(self.puzzle_num)
    }

    pub fn save_progress(&self) {
        let Some(save_state) = self.puzzle.borrow_mut().changed_save_state()
        else {
            return;
        };

        let Some(local_storage) = get_local_storage()
        else {
            return;
        };

        let mut save_states = load_save_states_from_local_storage(
            &local_storage
        );

        save_states.insert(self.puzzle_num, save_state);

        let mut save_states_string = String::new();

        if save_state::serialize_multiple(
            &mut save_states_string,
            &save_states,
        ).is_err() {
            log::error!("Error serializing save states");
            return;
        }

        if let Err(_) =
            local_storage.set_item(SAVE_STATE_KEY, &save_states_string)
        {
            log::error!("Error saving state");
        }
    }

    /// Loads the progress saved for this puzzle, if there is any.
    pub fn restore_progress(&self) -> bool {
        let Some(local_storage) = get_local_storage()
        else {
            return false;
        };

        let save_states = load_save_states_from_local_storage(&local_storage);

        let Some(save_state) = save_states.get(&self.puzzle_num)
        else {
            return false;
        };

        let loaded = self.puzzle.borrow_mut().load_save_state(save_state);

        self.dispatch_events();

        loaded
    }
}

impl Jumbles {
    fn dispatch_events(&self) {
        event_queue::dispatch_events(&self.puzzle, |event| {
            // Take a copy of the function so that the callback can
            // replace itself
            let (callback, arg) = self.callbacks.borrow().for_event(event);

            if let Some(callback) = callback {
                if let Err(e) = callback.call1(&JsValue::NULL, &arg) {
                    log::error!("callback failed: {:?}", e);
                }
            }
        });
    }
}

fn load_save_states_from_local_storage(
    local_storage: &web_sys::Storage,
) -> HashMap<usize, SaveState> {
    match local_storage.get_item(SAVE_STATE_KEY) {
        Ok(Some(save_states)) => {
            match save_state::parse_multiple(&save_states) {
                Ok(save_states) => save_states,
                Err(e) => {
                    log::warn!("Error parsing save states: {}", e);
                    HashMap::new()
                },
            }
        },
        Ok(None) => HashMap::new(),
        Err(_) => {
            log::warn!("Error getting save states");
            HashMap::new()
        },
    }
}

fn get_local_storage() -> Option<web_sys::Storage> {
    let Some(window) = web_sys::window()
    else {
        log::warn!("failed to get window");
        return None;
    };

    match window.local_storage() {
        Ok(Some(local_storage)) => Some(local_storage),
        Ok(None) => {
            log::warn!("Local storage is None");
            None
        },
        Err(_) => {
            log::warn!("Error getting local storage");
            None
        },
    }
}

#[wasm_bindgen]
pub fn init_jumbles(verbose: bool) {
    std::panic::set_hook(Box::new(console_error_panic_hook::hook));

    logging::init_logger(verbose);
}
