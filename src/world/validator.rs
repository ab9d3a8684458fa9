use std::collections::HashSet;
use std::fmt;
use std::io;

use super::model::World;

#[derive(Debug, Clone)]
pub struct ValidationError {
    pub message: String,
}

impl ValidationError {
    pub(crate) fn new(msg: impl Into<String>) -> Self {
        ValidationError {
            message: msg.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

pub fn validate_world(world: &World) -> Vec<ValidationError> {
    let mut errors: Vec<ValidationError> = Vec::new();

    // Rooms must not be empty
    if world.rooms.is_empty() {
        errors.push(ValidationError::new("world has no rooms"));
    }

    // start_room must exist (an empty world has already failed above)
    if !world.rooms.is_empty() && world.room(world.start_room).is_none() {
        errors.push(ValidationError::new(format!(
            "start_room index {} not found among rooms",
            world.start_room.0
        )));
    }

    let mut seen: HashSet<&str> = HashSet::new();

    for room in &world.rooms {
        if room.id.trim().is_empty() {
            errors.push(ValidationError::new("room id may not be empty"));
        } else if !seen.insert(room.id.as_str()) {
            errors.push(ValidationError::new(format!(
                "duplicate room id '{}'",
                room.id
            )));
        }

        for exit in &room.exits {
            if world.room(exit.target).is_none() {
                errors.push(ValidationError::new(format!(
                    "room '{}' exit '{}' targets missing room index {}",
                    room.id, exit.direction, exit.target.0
                )));
            }
        }
    }

    errors
}

/// Fold collected errors into a single `InvalidData` error.
pub(crate) fn into_io_result(errors: Vec<ValidationError>) -> io::Result<()> {
    if errors.is_empty() {
        return Ok(());
    }
    let msg = errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join("; ");
    Err(io::Error::new(io::ErrorKind::InvalidData, msg))
}

/// Run every structural check and fail on the first broken world.
pub fn ensure_valid(world: &World) -> io::Result<()> {
    into_io_result(validate_world(world))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::{Room, RoomId};
    use std::collections::HashMap;

    fn world_of(rooms: Vec<Room>, start: usize) -> World {
        let room_index = rooms
            .iter()
            .enumerate()
            .map(|(i, r)| (r.id.clone(), RoomId(i)))
            .collect::<HashMap<_, _>>();
        World {
            id: "test".into(),
            start_room: RoomId(start),
            rooms,
            room_index,
        }
    }

    #[test]
    fn well_formed_world_has_no_errors() {
        let mut a = Room::new("a", "in a");
        let mut b = Room::new("b", "in b");
        a.set_exit("east", RoomId(1));
        b.set_exit("west", RoomId(0));

        assert!(validate_world(&world_of(vec![a, b], 0)).is_empty());
    }

    #[test]
    fn empty_world_reports_missing_rooms_once() {
        let errors = validate_world(&world_of(Vec::new(), 0));
        let messages: Vec<String> = errors.iter().map(|e| e.to_string()).collect();

        assert_eq!(messages, vec!["world has no rooms".to_string()]);
    }

    #[test]
    fn start_outside_arena_is_reported() {
        let errors = validate_world(&world_of(vec![Room::new("a", "in a")], 3));
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].message, "start_room index 3 not found among rooms");
    }

    #[test]
    fn ensure_valid_joins_messages() {
        let mut a = Room::new("a", "in a");
        a.set_exit("down", RoomId(7));
        let rooms = vec![a, Room::new("a", "in a again")];

        let err = ensure_valid(&world_of(rooms, 0)).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
        assert_eq!(
            err.to_string(),
            "room 'a' exit 'down' targets missing room index 7; duplicate room id 'a'"
        );
        assert!(ensure_valid(&world_of(vec![Room::new("b", "in b")], 0)).is_ok());
    }

    #[test]
    fn exit_outside_arena_is_reported() {
        let mut a = Room::new("a", "in a");
        a.set_exit("down", RoomId(7));

        let errors = validate_world(&world_of(vec![a], 0));
        assert_eq!(errors.len(), 1);
        assert!(errors[0].message.contains("exit 'down'"));
    }

    #[test]
    fn blank_and_repeated_ids_are_reported() {
        let rooms = vec![
            Room::new("a", "in a"),
            Room::new(" ", "in nothing"),
            Room::new("a", "in a again"),
        ];

        let errors = validate_world(&world_of(rooms, 0));
        assert_eq!(errors.len(), 2);
        assert_eq!(errors[0].message, "room id may not be empty");
        assert_eq!(errors[1].message, "duplicate room id 'a'");
    }
}
