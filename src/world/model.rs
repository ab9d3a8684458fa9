use std::collections::HashMap;

//////////////////////////////
/// GAME STRUCTS AND ENUMS ///
//////////////////////////////

/// Index of a room inside the world's arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RoomId(pub usize);

/// Runtime world type used by the game loop.
///
/// Rooms reference each other in cycles, so they live in one arena and
/// point at their neighbours by `RoomId`.
#[derive(Debug)]
pub struct World {
    pub id: String,
    pub start_room: RoomId,
    pub rooms: Vec<Room>,
    pub room_index: HashMap<String, RoomId>,
}

#[derive(Debug)]
pub struct Room {
    pub id: String,
    pub desc: String,
    pub exits: Vec<Exit>,
}

#[derive(Debug, Clone)]
pub struct Exit {
    pub direction: String,
    pub target: RoomId,
}

impl Room {
    pub fn new(id: impl Into<String>, desc: impl Into<String>) -> Self {
        Room {
            id: id.into(),
            desc: desc.into(),
            exits: Vec::new(),
        }
    }

    /// Record the exit for `direction`, replacing any earlier one.
    pub fn set_exit(&mut self, direction: impl Into<String>, neighbor: RoomId) {
        let direction = direction.into();
        if let Some(exit) = self.exits.iter_mut().find(|e| e.direction == direction) {
            exit.target = neighbor;
        } else {
            self.exits.push(Exit {
                direction,
                target: neighbor,
            });
        }
    }

    /// `None` simply means there is no door that way.
    pub fn get_exit(&self, direction: &str) -> Option<RoomId> {
        self.exits
            .iter()
            .find(|e| e.direction == direction)
            .map(|e| e.target)
    }

    pub fn short_description(&self) -> &str {
        &self.desc
    }

    pub fn long_description(&self) -> String {
        format!("You are {}.\n{}", self.desc, self.exits_description())
    }

    fn exits_description(&self) -> String {
        let mut s = String::from("Exits:");
        for exit in &self.exits {
            s.push(' ');
            s.push_str(&exit.direction);
        }
        s
    }
}

impl World {
    pub fn room(&self, id: RoomId) -> Option<&Room> {
        self.rooms.get(id.0)
    }

    pub fn room_by_key(&self, key: &str) -> Option<RoomId> {
        self.room_index.get(key).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_exit_overwrites_existing_direction() {
        let mut room = Room::new("hall", "in a hall");
        room.set_exit("north", RoomId(1));
        room.set_exit("south", RoomId(2));
        room.set_exit("north", RoomId(3));

        assert_eq!(room.get_exit("north"), Some(RoomId(3)));
        assert_eq!(room.exits.len(), 2);
        assert_eq!(room.exits[0].direction, "north");
    }

    #[test]
    fn missing_exit_is_none() {
        let mut room = Room::new("hall", "in a hall");
        room.set_exit("north", RoomId(1));

        assert_eq!(room.get_exit("up"), None);
        assert_eq!(room.get_exit(""), None);
        assert_eq!(room.get_exit("North"), None);
    }

    #[test]
    fn long_description_lists_exits_in_insertion_order() {
        let mut room = Room::new("outside", "outside the main entrance of the university");
        room.set_exit("east", RoomId(1));
        room.set_exit("south", RoomId(2));
        room.set_exit("west", RoomId(3));

        assert_eq!(
            room.short_description(),
            "outside the main entrance of the university"
        );
        assert_eq!(
            room.long_description(),
            "You are outside the main entrance of the university.\nExits: east south west"
        );
    }

    #[test]
    fn room_without_exits_has_bare_exit_line() {
        let room = Room::new("cell", "in a locked cell");
        assert_eq!(room.long_description(), "You are in a locked cell.\nExits:");
    }
}
