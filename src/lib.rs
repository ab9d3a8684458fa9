pub mod engine;
pub mod world;

use std::io::{self, BufRead, Write};

use log::debug;

use engine::{
    Command, CommandWord, FAREWELL, Output, Parser, go_room, parse_line, render_help,
    render_welcome,
};
use world::{Room, RoomId, World, ensure_valid};

pub use world::{load_campus, load_world_from_str};

pub const UNKNOWN_COMMAND: &str = "I don't know what you mean...";
pub const QUIT_WHAT: &str = "Quit what?";

/// One play session: the room graph and where the player stands in it.
///
/// The world is checked on construction and never changes afterwards, so
/// `current_room` always names a room in the arena.
pub struct Game {
    world: World,
    current_room: RoomId,
}

#[cfg(feature = "wasm")]
mod wasm_bindings {
    use super::*;
    use serde::Serialize;
    use serde_wasm_bindgen::to_value;
    use wasm_bindgen::prelude::*;

    #[derive(Serialize)]
    struct WasmStepResult {
        blocks: Vec<engine::OutputBlock>,
        quit: bool,
    }

    #[wasm_bindgen]
    pub struct WasmGame {
        game: Game,
        finished: bool,
    }

    #[wasm_bindgen]
    impl WasmGame {
        /// Create a new game on the campus map. Call `init()` for the welcome banner.
        #[wasm_bindgen(constructor)]
        pub fn new() -> Result<WasmGame, JsValue> {
            let game = Game::new().map_err(|e| JsValue::from_str(&e.to_string()))?;
            Ok(WasmGame {
                game,
                finished: false,
            })
        }

        #[wasm_bindgen]
        pub fn init(&mut self) -> JsValue {
            to_value(&WasmStepResult {
                blocks: self.game.welcome().blocks,
                quit: false,
            })
            .unwrap_or(JsValue::NULL)
        }

        /// Process one line of input. After a quit every call just repeats the farewell.
        #[wasm_bindgen]
        pub fn step(&mut self, input: &str) -> JsValue {
            let (mut out, quit) = if self.finished {
                (Output::new(), true)
            } else {
                self.game.step(input)
            };
            if quit {
                self.finished = true;
                out.blocks.extend(self.game.farewell().blocks);
            }
            to_value(&WasmStepResult {
                blocks: out.blocks,
                quit,
            })
            .unwrap_or(JsValue::NULL)
        }
    }
}

impl Game {
    /// A fresh game on the built-in campus map, standing outside.
    pub fn new() -> io::Result<Self> {
        Game::with_world(load_campus()?)
    }

    /// Start a game on any world that passes validation.
    pub fn with_world(world: World) -> io::Result<Self> {
        ensure_valid(&world)?;
        let current_room = world.start_room;
        Ok(Game {
            world,
            current_room,
        })
    }

    pub fn current_room(&self) -> &Room {
        &self.world.rooms[self.current_room.0]
    }

    pub fn welcome(&self) -> Output {
        let mut out = Output::new();
        render_welcome(&mut out, self.current_room());
        out
    }

    pub fn farewell(&self) -> Output {
        let mut out = Output::new();
        out.say(FAREWELL);
        out
    }

    /// Parse and process a single line of input; returns (output, quit?)
    pub fn step(&mut self, input: &str) -> (Output, bool) {
        self.process_command(&parse_line(input))
    }

    /// Returns (output, quit?). Only a bare `quit` ends the game.
    pub fn process_command(&mut self, command: &Command) -> (Output, bool) {
        let mut out = Output::new();
        let mut quit = false;

        match command.command_word() {
            CommandWord::Unknown => out.say(UNKNOWN_COMMAND),
            CommandWord::Help => render_help(&mut out),
            CommandWord::Go => go_room(&mut out, &mut self.current_room, &self.world, command),
            CommandWord::Quit => {
                if command.has_second_word() {
                    out.say(QUIT_WHAT);
                } else {
                    quit = true;
                }
            }
        }

        debug!(
            "{} -> room '{}', quit={}",
            command.command_word(),
            self.current_room().id,
            quit
        );
        (out, quit)
    }
}

/// Play a whole session: welcome, prompt and process lines until a bare
/// `quit` or the end of input, then say goodbye.
pub fn run<R: BufRead, W: Write>(game: &mut Game, input: R, output: &mut W) -> io::Result<()> {
    let mut parser = Parser::new(input);
    game.welcome().write_to(output)?;

    loop {
        write!(output, "> ")?;
        output.flush()?;

        // End of input counts as quitting.
        let Some(command) = parser.get_command()? else {
            writeln!(output)?;
            break;
        };

        let (out, quit) = game.process_command(&command);
        out.write_to(output)?;

        if quit {
            break;
        }
    }

    game.farewell().write_to(output)?;
    output.flush()
}
