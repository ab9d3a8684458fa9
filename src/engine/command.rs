use std::fmt;

/// Every command word the game understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandWord {
    Go,
    Quit,
    Help,
    Unknown,
}

/// The vocabulary, in the order help lists it.
pub const VOCABULARY: [(&str, CommandWord); 3] = [
    ("go", CommandWord::Go),
    ("quit", CommandWord::Quit),
    ("help", CommandWord::Help),
];

impl CommandWord {
    /// Exact, case-sensitive lookup; anything else is `Unknown`.
    pub fn lookup(token: &str) -> CommandWord {
        VOCABULARY
            .iter()
            .find(|(word, _)| *word == token)
            .map(|(_, cw)| *cw)
            .unwrap_or(CommandWord::Unknown)
    }

    pub fn is_unknown(self) -> bool {
        self == CommandWord::Unknown
    }

    pub fn as_str(self) -> &'static str {
        VOCABULARY
            .iter()
            .find(|(_, cw)| *cw == self)
            .map(|(word, _)| *word)
            .unwrap_or("?")
    }
}

impl fmt::Display for CommandWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    command_word: CommandWord,
    second_word: Option<String>,
}

impl Command {
    pub fn new(command_word: CommandWord, second_word: Option<String>) -> Self {
        Command {
            command_word,
            second_word,
        }
    }

    pub fn command_word(&self) -> CommandWord {
        self.command_word
    }

    pub fn second_word(&self) -> Option<&str> {
        self.second_word.as_deref()
    }

    pub fn has_second_word(&self) -> bool {
        self.second_word.is_some()
    }
}
