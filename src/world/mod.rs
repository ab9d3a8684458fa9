mod loader;
mod model;
mod validator;

pub use loader::{load_campus, load_world_from_str};

// Minimal, intentional surface area: re-export only what the game/engine uses.
pub use model::{Room, RoomId, World};
pub use validator::ensure_valid;
