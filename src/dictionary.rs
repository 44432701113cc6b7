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

use std::collections::HashSet;

/// The set of words that count as a solved row. Words are stored in
/// lowercase and lookups lowercase the probe first.
#[derive(Debug, Default)]
pub struct Dictionary {
    words: HashSet<String>,
}

impl Dictionary {
    pub fn new() -> Dictionary {
        Dictionary::default()
    }

    pub fn from_words<I, T>(words: I) -> Dictionary
        where I: IntoIterator<Item = T>,
              T: AsRef<str>
    {
        let mut dictionary = Dictionary::new();

        for word in words {
            dictionary.insert(word.as_ref());
        }

        dictionary
    }

    /// Builds a dictionary from the text of a word list with one word
    /// per line. Blank lines and lines starting with “#” are skipped.
    pub fn from_word_list(s: &str) -> Dictionary {
        Dictionary::from_words(
            s.lines()
                .map(str::trim)
                .filter(|line| !line.is_empty() && !line.starts_with('#'))
        )
    }

    pub fn insert(&mut self, word: &str) -> bool {
        self.words.insert(word.to_lowercase())
    }

    pub fn contains(&self, word: &str) -> bool {
        if word.chars().any(char::is_uppercase) {
            self.words.contains(&word.to_lowercase())
        } else {
            self.words.contains(word)
        }
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
