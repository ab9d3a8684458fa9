use crate::engine::command::CommandWord;
use crate::engine::output::Output;
use crate::engine::parser::show_commands;
use crate::world::Room;

pub const FAREWELL: &str = "Thank you for playing.  Good bye.";

pub fn render_welcome(out: &mut Output, room: &Room) {
    out.blank();
    out.say("Welcome to the World of Zuul!");
    out.say("World of Zuul is a new, incredibly boring adventure game.");
    out.say(format!("Type '{}' if you need help.", CommandWord::Help));
    out.blank();
    out.say(room.long_description());
}

/// Some stupid, cryptic message and the list of command words.
pub fn render_help(out: &mut Output) {
    out.say("You are lost. You are alone. You wander");
    out.say("around at the university.");
    out.blank();
    out.say("Your command words are:");
    out.say(show_commands());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::RoomId;

    #[test]
    fn welcome_banner_ends_with_room() {
        let mut room = Room::new("outside", "outside the main entrance of the university");
        room.set_exit("east", RoomId(1));

        let mut out = Output::new();
        render_welcome(&mut out, &room);

        assert_eq!(
            out.to_text(),
            "\nWelcome to the World of Zuul!\n\
             World of Zuul is a new, incredibly boring adventure game.\n\
             Type 'help' if you need help.\n\
             \n\
             You are outside the main entrance of the university.\nExits: east\n"
        );
    }

    #[test]
    fn help_lists_command_words() {
        let mut out = Output::new();
        render_help(&mut out);

        assert_eq!(
            out.to_text(),
            "You are lost. You are alone. You wander\n\
             around at the university.\n\
             \n\
             Your command words are:\n\
             go quit help\n"
        );
    }
}
