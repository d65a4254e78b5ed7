use std::io::{self, BufRead, Write};
use std::time::Instant;

use crate::command::{Command, HELP};
use crate::session::Session;

/// Line-oriented game loop. End of input counts as quitting.
pub fn run<R: BufRead, W: Write>(session: &mut Session, input: &mut R, out: &mut W) -> io::Result<()> {
    writeln!(out, "Welcome to EscapeRoom!")?;
    writeln!(out, "Get to the other side of the room, avoiding walls and invisible traps,")?;
    writeln!(out, "pick up all the prizes.")?;
    writeln!(out)?;

    let mut line = String::new();
    while !session.should_quit() {
        write!(out, "Enter command: ")?;
        out.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            let feedback = session.handle(Command::Quit, Instant::now());
            writeln!(out)?;
            writeln!(out, "{}", feedback.message)?;
            break;
        }

        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(err) => {
                writeln!(out, "{}", err)?;
                continue;
            }
        };

        if command == Command::Help {
            for entry in HELP {
                writeln!(out, "  {}", entry)?;
            }
            continue;
        }

        let feedback = session.handle(command, Instant::now());
        if !feedback.message.is_empty() {
            writeln!(out, "{}", feedback.message)?;
        }

        if feedback.trap.is_some() {
            writeln!(out, "Do you want to spring it? (yes/no)")?;
            line.clear();
            input.read_line(&mut line)?;
            match line.trim().to_lowercase().as_str() {
                "yes" | "y" => {
                    let sprung = session.handle(Command::Spring, Instant::now());
                    writeln!(out, "{}", sprung.message)?;
                }
                _ => writeln!(out, "You chose not to spring the trap.")?,
            }
        }
    }

    writeln!(out, "score={}", session.game().score())?;
    writeln!(out, "steps={}", session.game().steps())?;
    Ok(())
}
