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

use super::grid::{Grid, Position, N_COLUMNS, N_LETTERS, N_ROWS};

#[derive(Debug)]
pub struct Solution {
    pub swaps: Vec<(Position, Position)>,
    pub grid: Grid,
}

fn position(index: usize) -> Position {
    ((index / N_COLUMNS) as u32, (index % N_COLUMNS) as u32)
}

/// Finds a sequence of swaps that turns `from` into `to`. Swaps that
/// put two letters in their final place at once are preferred. This
/// is not guaranteed to be the shortest sequence when letters repeat.
pub fn swaps_between(
    from: &Grid,
    to: &Grid,
) -> Option<Vec<(Position, Position)>> {
    if from.sorted_letters() != to.sorted_letters() {
        return None;
    }

    let mut letters = from.letters().collect::<Vec<char>>();
    let target = to.letters().collect::<Vec<char>>();
    let mut swaps = Vec::new();

    for i in 0..N_LETTERS {
        if letters[i] == target[i] {
            continue;
        }

        let is_candidate = |j: usize| {
            letters[j] == target[i] && letters[j] != target[j]
        };

        let j = (i + 1..N_LETTERS)
            .find(|&j| is_candidate(j) && target[j] == letters[i])
            .or_else(|| (i + 1..N_LETTERS).find(|&j| is_candidate(j)))?;

        letters.swap(i, j);
        swaps.push((position(i), position(j)));
    }

    Some(swaps)
}

fn permutations(n: usize) -> Vec<Vec<usize>> {
    if n == 0 {
        return vec![Vec::new()];
    }

    let mut result = Vec::new();

    for shorter in permutations(n - 1) {
        for pos in 0..=shorter.len() {
            let mut permutation = shorter.clone();
            permutation.insert(pos, n - 1);
            result.push(permutation);
        }
    }

    result
}

/// Tries every assignment of the words to the rows and returns the
/// one that needs the fewest swaps.
pub fn solve<T: AsRef<str>>(grid: &Grid, words: &[T]) -> Option<Solution> {
    if words.len() != N_ROWS {
        return None;
    }

    let mut best: Option<Solution> = None;

    for order in permutations(N_ROWS) {
        let target = Grid::from_rows(order.iter().map(|&i| words[i].as_ref()))
            .ok()?;
        let swaps = swaps_between(grid, &target)?;

        if best.as_ref().map(|b| swaps.len() < b.swaps.len()).unwrap_or(true) {
            best = Some(Solution { swaps, grid: target });
        }
    }

    best
}

#[cfg(test)]
mod test {
    use super::*;
    use super::super::dictionary::Dictionary;
    use super::super::puzzle::{Config, Outcome, Puzzle};
    use std::rc::Rc;

    static WORDS: [&str; 4] = ["stack", "dogma", "runts", "fried"];

    #[test]
    fn test_permutations() {
        let mut all = permutations(3);
        all.sort();

        assert_eq!(
            all,
            [
                [0, 1, 2], [0, 2, 1],
                [1, 0, 2], [1, 2, 0],
                [2, 0, 1], [2, 1, 0],
            ],
        );
        assert_eq!(permutations(4).len(), 24);
    }

    #[test]
    fn two_cycles_first() {
        let from = Grid::new("abcde\nfghij\nklmno\npqrst").unwrap();
        let to = Grid::new("bacde\nfghij\nklmno\npqrts").unwrap();

        assert_eq!(
            swaps_between(&from, &to).unwrap(),
            [((0, 0), (0, 1)), ((3, 3), (3, 4))],
        );

        let to = Grid::new("bcade\nfghij\nklmno\npqrst").unwrap();

        assert_eq!(swaps_between(&from, &to).unwrap().len(), 2);
        assert!(swaps_between(&from, &from).unwrap().is_empty());

        let other = Grid::new("abcde\nfghij\nklmno\npqrsz").unwrap();
        assert!(swaps_between(&from, &other).is_none());
    }

    #[test]
    fn rows_stay_in_place() {
        let grid = Grid::new("dgoma\nstcak\nfride\nrunst").unwrap();
        let solution = solve(&grid, &WORDS).unwrap();

        assert_eq!(solution.swaps.len(), 4);
        assert_eq!(
            solution.grid,
            Grid::new("dogma\nstack\nfried\nrunts").unwrap(),
        );
    }

    #[test]
    fn already_solved() {
        let grid = Grid::new("runts\nstack\nfried\ndogma").unwrap();
        let solution = solve(&grid, &WORDS).unwrap();

        assert!(solution.swaps.is_empty());
        assert_eq!(solution.grid, grid);
    }

    #[test]
    fn wrong_letters() {
        let grid = Grid::new("stcak\ndgoma\nrunst\nfridz").unwrap();

        assert!(solve(&grid, &WORDS).is_none());
        assert!(solve(&grid, &WORDS[0..3]).is_none());
    }

    #[test]
    fn replay_solution() {
        let grid = Grid::new("kcats\nmagod\nfried\nnurts").unwrap();
        let solution = solve(&grid, &WORDS).unwrap();

        let mut puzzle = Puzzle::new(
            grid,
            Rc::new(Dictionary::from_words(WORDS)),
            Config::default(),
            (),
        );

        for &(a, b) in solution.swaps.iter() {
            assert!(puzzle.swap(a, b));
        }

        assert_eq!(puzzle.outcome(), Outcome::Solved);
        assert_eq!(puzzle.solved_swaps(), Some(solution.swaps.len() as u32));
        assert_eq!(puzzle.grid(), &solution.grid);
    }
}
