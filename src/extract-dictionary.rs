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

use std::process::ExitCode;
use std::collections::BTreeSet;
use std::io::{BufWriter, BufReader, BufRead, Write};
use std::fs::File;
use std::ffi::OsString;

use clap::Parser;

#[derive(Parser)]
#[command(name = "Extract dictionary")]
struct Cli {
    #[arg(required = true, value_name = "WORDLIST")]
    word_lists: Vec<OsString>,
    #[arg(short, long, value_name = "FILE")]
    output: OsString,
    #[arg(short, long, value_name = "LENGTH", default_value_t = 5)]
    length: usize,
}

// Proper nouns and abbreviations are skipped by rejecting anything
// that isn’t entirely lowercase letters
fn normalize_word(line: &str, length: usize) -> Option<&str> {
    let word = line.trim();

    (word.chars().count() == length &&
     word.chars().all(|ch| ch.is_alphabetic() && ch.is_lowercase()))
        .then_some(word)
}

fn read_words<R: BufRead>(
    input: R,
    length: usize,
    words: &mut BTreeSet<String>,
) -> Result<(), std::io::Error> {
    for line in input.lines() {
        let line = line?;

        if let Some(word) = normalize_word(&line, length) {
            words.insert(word.to_string());
        }
    }

    Ok(())
}

fn write_words<W: Write>(
    mut output: W,
    words: &BTreeSet<String>,
) -> Result<(), std::io::Error> {
    for word in words.iter() {
        writeln!(&mut output, "{}", word)?;
    }

    output.flush()
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let mut words = BTreeSet::new();

    for filename in cli.word_lists.iter() {
        if let Err(e) = File::open(filename).and_then(|file| {
            read_words(BufReader::new(file), cli.length, &mut words)
        }) {
            eprintln!("{}: {}", filename.to_string_lossy(), e);
            return ExitCode::FAILURE;
        }
    }

    if let Err(e) = File::create(&cli.output).and_then(|file| {
        write_words(BufWriter::new(file), &words)
    }) {
        eprintln!("{}: {}", cli.output.to_string_lossy(), e);
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_normalize_word() {
        assert_eq!(normalize_word("stack", 5), Some("stack"));
        assert_eq!(normalize_word("  dogma\r", 5), Some("dogma"));
        assert_eq!(normalize_word("ĉapel", 5), Some("ĉapel"));
        assert_eq!(normalize_word("stack", 4), None);
        assert_eq!(normalize_word("Paris", 5), None);
        assert_eq!(normalize_word("can't", 5), None);
        assert_eq!(normalize_word("", 5), None);
    }

    #[test]
    fn extract() {
        let mut words = BTreeSet::new();

        read_words(
            "runts\nstack\nStack\nstacks\n\nfried\nstack\n".as_bytes(),
            5,
            &mut words,
        ).unwrap();

        let mut output = Vec::new();
        write_words(&mut output, &words).unwrap();

        assert_eq!(
            std::str::from_utf8(&output).unwrap(),
            "fried\nrunts\nstack\n",
        );
    }
}
