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

use super::grid::N_COLUMNS;
use std::fmt::Write;

pub const SOLVED_GLYPH: char = '🟩';
pub const UNSOLVED_GLYPH: char = '⬜';

/// Builds the text that the player can paste to show off their
/// result. The first line names the puzzle and the number of swaps,
/// followed by one line of glyphs per row.
pub fn share_text(puzzle_num: usize, n_swaps: u32, rows: &[bool]) -> String {
    let mut text = format!("Jumbles #{} – ", puzzle_num);

    if n_swaps == 1 {
        text.push_str("1 swap");
    } else {
        write!(&mut text, "{} swaps", n_swaps).unwrap();
    }

    for &valid in rows {
        let glyph = if valid { SOLVED_GLYPH } else { UNSOLVED_GLYPH };

        text.push('\n');
        text.extend(std::iter::repeat(glyph).take(N_COLUMNS));
    }

    text
}
