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

use super::puzzle::{Listener, Puzzle};
use std::cell::RefCell;
use std::collections::VecDeque;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    RowSolved(u32),
    Solved(u32),
    OutOfMoves,
    SwapCountChanged(u32),
}

/// A listener that stores the events so that they can be handled
/// after the puzzle is no longer borrowed. That lets the handlers
/// look at the puzzle or even change it again.
#[derive(Debug, Default)]
pub struct EventQueue {
    events: VecDeque<Event>,
}

impl EventQueue {
    pub fn pop(&mut self) -> Option<Event> {
        self.events.pop_front()
    }
}

impl Listener for EventQueue {
    fn row_solved(&mut self, row: u32) {
        self.events.push_back(Event::RowSolved(row));
    }

    fn solved(&mut self, n_swaps: u32) {
        self.events.push_back(Event::Solved(n_swaps));
    }

    fn out_of_moves(&mut self) {
        self.events.push_back(Event::OutOfMoves);
    }

    fn swap_count_changed(&mut self, n_swaps: u32) {
        self.events.push_back(Event::SwapCountChanged(n_swaps));
    }
}

/// Passes the queued events to `handler` in the order they were
/// emitted. The puzzle is only borrowed while an event is being
/// taken off the queue.
pub fn dispatch_events<F>(puzzle: &RefCell<Puzzle<EventQueue>>, mut handler: F)
    where F: FnMut(Event)
{
    loop {
        let Some(event) = puzzle.borrow_mut().listener_mut().pop()
        else {
            break;
        };

        handler(event);
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use super::super::grid::Grid;
    use super::super::dictionary::Dictionary;
    use super::super::puzzle::Config;
    use std::rc::Rc;

    fn make_puzzle(grid: &str, max_swaps: u32) -> RefCell<Puzzle<EventQueue>> {
        RefCell::new(Puzzle::new(
            Grid::new(grid).unwrap(),
            Rc::new(Dictionary::from_words([
                "stack", "dogma", "runts", "fried",
            ])),
            Config { max_swaps },
            EventQueue::default(),
        ))
    }

    fn drain(puzzle: &RefCell<Puzzle<EventQueue>>) -> Vec<Event> {
        let mut events = Vec::new();
        dispatch_events(puzzle, |event| events.push(event));
        events
    }

    #[test]
    fn order() {
        // Swapping the last letters of the first and last rows fixes
        // both of them and solves the puzzle
        let puzzle = make_puzzle("stacd\ndogma\nrunts\nfriek", 12);

        assert!(drain(&puzzle).is_empty());

        assert!(puzzle.borrow_mut().swap((0, 4), (3, 4)));

        assert_eq!(
            drain(&puzzle),
            [
                Event::SwapCountChanged(1),
                Event::RowSolved(0),
                Event::RowSolved(3),
                Event::Solved(1),
            ],
        );

        // The queue is empty once everything has been dispatched
        assert!(drain(&puzzle).is_empty());

        puzzle.borrow_mut().reset();

        assert_eq!(drain(&puzzle), [Event::SwapCountChanged(0)]);
    }

    #[test]
    fn out_of_moves_order() {
        let puzzle = make_puzzle("stcak\ndgoma\nrunst\nfride", 1);

        puzzle.borrow_mut().swap((1, 1), (1, 3));

        assert_eq!(
            drain(&puzzle),
            [Event::SwapCountChanged(1), Event::OutOfMoves],
        );
    }

    #[test]
    fn handler_uses_puzzle() {
        let puzzle = make_puzzle("stacd\ndogma\nrunts\nfriek", 12);

        puzzle.borrow_mut().swap((0, 4), (3, 4));

        let mut seen = Vec::new();

        dispatch_events(&puzzle, |event| {
            // The handler can look at the puzzle while handling
            let puzzle = puzzle.borrow();

            match event {
                Event::RowSolved(row) => {
                    seen.push(puzzle.grid().row_word(row));
                },
                Event::Solved(_) => {
                    seen.push(puzzle.share_text(7).lines().next()
                              .unwrap()
                              .to_string());
                },
                _ => (),
            }
        });

        assert_eq!(
            seen,
            ["stack", "fried", "Jumbles #7 – 1 swap"],
        );
    }

    #[test]
    fn handler_changes_puzzle() {
        let puzzle = make_puzzle("stcak\ndgoma\nrunst\nfride", 12);

        puzzle.borrow_mut().swap((0, 2), (0, 3));

        let mut events = Vec::new();

        dispatch_events(&puzzle, |event| {
            // Resetting from inside a handler queues more events which
            // get dispatched by the same loop
            if event == Event::RowSolved(0) {
                puzzle.borrow_mut().reset();
            }

            events.push(event);
        });

        assert_eq!(
            events,
            [
                Event::SwapCountChanged(1),
                Event::RowSolved(0),
                Event::SwapCountChanged(0),
            ],
        );
        assert_eq!(puzzle.borrow().n_swaps(), 0);
    }
}
