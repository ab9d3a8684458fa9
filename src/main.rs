use std::io;

use log::info;
use zuul::Game;

fn main() -> io::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let mut game = Game::new()?;
    info!("starting in '{}'", game.current_room().id);

    let stdin = io::stdin();
    let stdout = io::stdout();
    zuul::run(&mut game, stdin.lock(), &mut stdout.lock())
}
