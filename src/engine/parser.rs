use std::io::{self, BufRead};

use log::debug;

use crate::engine::command::{Command, CommandWord, VOCABULARY};

/// Reads player input one line at a time and turns it into commands.
pub struct Parser<R> {
    reader: R,
}

impl<R: BufRead> Parser<R> {
    pub fn new(reader: R) -> Self {
        Parser { reader }
    }

    /// Block for the next line. `Ok(None)` means input has ended.
    pub fn get_command(&mut self) -> io::Result<Option<Command>> {
        let mut line = String::new();
        let bytes_read = self.reader.read_line(&mut line)?;
        if bytes_read == 0 {
            return Ok(None);
        }

        Ok(Some(parse_line(&line)))
    }
}

/// Split a line into at most two words and classify the first.
/// Extra words are ignored; an empty line is an unknown command.
pub fn parse_line(line: &str) -> Command {
    let mut tokens = line.split_whitespace();
    let word1 = tokens.next();
    let word2 = tokens.next().map(str::to_string);

    let command_word = match word1 {
        Some(w) => CommandWord::lookup(w),
        None => CommandWord::Unknown,
    };

    debug!("parsed {:?} -> {} {:?}", line.trim_end(), command_word, word2);
    Command::new(command_word, word2)
}

/// All valid command words, space separated.
pub fn show_commands() -> String {
    VOCABULARY
        .iter()
        .map(|(word, _)| *word)
        .collect::<Vec<_>>()
        .join(" ")
}
