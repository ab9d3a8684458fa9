mod command;
mod movement;
mod output;
mod parser;
mod render;

pub use command::{Command, CommandWord, VOCABULARY};
pub use movement::{GO_WHERE, NO_DOOR, go_room};
pub use output::{Output, OutputBlock};
pub use parser::{Parser, parse_line, show_commands};
pub use render::{FAREWELL, render_help, render_welcome};
