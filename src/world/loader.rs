use log::info;
use serde::Deserialize;
use std::collections::HashMap;
use std::io;

use super::model::{Room, RoomId, World};
use super::validator::{ValidationError, into_io_result, validate_world};

/// The campus map the game ships with.
const CAMPUS_TOML: &str = include_str!("../../assets/campus.toml");

////////////////////
/// TOML STRUCTS ///
////////////////////

#[derive(Deserialize)]
struct WorldFile {
    world: WorldHeader,
    #[serde(default)]
    room: Vec<RoomConfig>, // [[room]] blocks
}

#[derive(Deserialize)]
struct WorldHeader {
    id: String,
    start_room: String,
}

#[derive(Deserialize)]
struct RoomConfig {
    id: String,
    desc: String,

    #[serde(default)]
    exit: Vec<ExitConfig>, // [[room.exit]]
}

#[derive(Deserialize)]
struct ExitConfig {
    direction: String,
    target: String,
}

/////////////////////////////
/// TOML PARSER FUNCTIONS ///
/////////////////////////////

/// Load the built-in campus world.
pub fn load_campus() -> io::Result<World> {
    load_world_from_str(CAMPUS_TOML)
}

/// Public API: load a world from a TOML string.
///
/// Room keys only exist in the TOML, so exits and the start room naming an
/// unknown key are reported here. Every other structural problem is left
/// to `validate_world`, which sees the arena exactly as declared.
pub fn load_world_from_str(contents: &str) -> io::Result<World> {
    let world_file: WorldFile = toml::from_str(contents)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e.to_string()))?;

    if world_file.world.id.trim().is_empty() {
        return Err(io::Error::new(
            io::ErrorKind::InvalidData,
            "world.id may not be empty",
        ));
    }

    // First pass: one arena slot per declared room; the first of a repeated key wins.
    let mut rooms: Vec<Room> = Vec::with_capacity(world_file.room.len());
    let mut room_index: HashMap<String, RoomId> = HashMap::new();

    for room_cfg in &world_file.room {
        room_index
            .entry(room_cfg.id.clone())
            .or_insert(RoomId(rooms.len()));
        rooms.push(Room::new(room_cfg.id.clone(), room_cfg.desc.trim()));
    }

    // Second pass: wire exits so they can point forwards.
    let mut errors: Vec<ValidationError> = Vec::new();

    for (slot, room_cfg) in world_file.room.into_iter().enumerate() {
        for exit in room_cfg.exit {
            match room_index.get(&exit.target) {
                Some(&target) => rooms[slot].set_exit(exit.direction, target),
                None => errors.push(ValidationError::new(format!(
                    "room '{}' exit '{}' targets missing room '{}'",
                    room_cfg.id, exit.direction, exit.target
                ))),
            }
        }
    }

    let start_room = match room_index.get(&world_file.world.start_room) {
        Some(&id) => id,
        None => {
            if !rooms.is_empty() {
                errors.push(ValidationError::new(format!(
                    "start_room '{}' not found among rooms",
                    world_file.world.start_room
                )));
            }
            // Placeholder; the load fails before anything reads it.
            RoomId(0)
        }
    };

    let world = World {
        id: world_file.world.id,
        start_room,
        rooms,
        room_index,
    };

    errors.extend(validate_world(&world));
    into_io_result(errors)?;

    info!("loaded world '{}' with {} rooms", world.id, world.rooms.len());
    Ok(world)
}
