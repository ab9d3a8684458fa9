use log::debug;

use crate::engine::command::Command;
use crate::engine::output::Output;
use crate::world::{RoomId, World};

pub const GO_WHERE: &str = "Go where?";
pub const NO_DOOR: &str = "There is no door!";

/// Try to leave `current_room` in the direction named by the command's
/// second word. Only a real exit moves the player.
pub fn go_room(out: &mut Output, current_room: &mut RoomId, world: &World, command: &Command) {
    let Some(direction) = command.second_word() else {
        out.say(GO_WHERE);
        return;
    };

    let next = world
        .room(*current_room)
        .and_then(|room| room.get_exit(direction))
        .and_then(|id| world.room(id).map(|room| (id, room)));

    match next {
        Some((id, room)) => {
            debug!("moving {} to '{}'", direction, room.id);
            *current_room = id;
            out.say(room.long_description());
        }
        None => {
            debug!("no exit {} from {:?}", direction, current_room);
            out.say(NO_DOOR);
        }
    }
}
