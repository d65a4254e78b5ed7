use std::str::FromStr;

use crate::game::Direction;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Move(Direction),
    Jump(Direction),
    Pickup,
    Spring,
    Replay,
    Restart,
    Teleport,
    Help,
    Quit,
}

pub const HELP: &[&str] = &[
    "right, left, up, down (r, l, u, d): move one space",
    "jump, jumpleft, jumpup, jumpdown (jr, jl, ju, jd): move two spaces, walls still block",
    "pickup (p): pick up a prize, penalty if there is none",
    "spring (s): spring a trap where you stand, penalty if there is none",
    "replay: score the round and play the same board again",
    "restart: new board, score back to zero",
    "teleport: back to the start with a zero score",
    "help (?): show this list",
    "quit (q): end the game; leaving on the right side scores, quitting early costs",
];

impl FromStr for Command {
    type Err = String;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let command = match input.trim().to_lowercase().as_str() {
            "right" | "r" => Command::Move(Direction::Right),
            "left" | "l" => Command::Move(Direction::Left),
            "up" | "u" => Command::Move(Direction::Up),
            "down" | "d" => Command::Move(Direction::Down),
            "jump" | "jr" | "jumpright" => Command::Jump(Direction::Right),
            "jumpleft" | "jl" => Command::Jump(Direction::Left),
            "jumpup" | "ju" => Command::Jump(Direction::Up),
            "jumpdown" | "jd" => Command::Jump(Direction::Down),
            "pickup" | "p" => Command::Pickup,
            "spring" | "s" => Command::Spring,
            "replay" => Command::Replay,
            "restart" => Command::Restart,
            "teleport" => Command::Teleport,
            "help" | "?" => Command::Help,
            "quit" | "q" => Command::Quit,
            other => return Err(format!("Unknown command '{}', type help for a list", other)),
        };
        Ok(command)
    }
}
