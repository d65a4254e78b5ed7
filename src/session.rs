use std::time::Instant;

use rand::rngs::StdRng;

use crate::board::TrapId;
use crate::command::Command;
use crate::countdown::TrapCountdown;
use crate::game::{Direction, GameState, MoveEvent, MoveOutcome};

/// Result of one command as the shells present it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Feedback {
    pub delta: i32,
    pub message: String,
    pub trap: Option<TrapId>,
}

impl Feedback {
    fn new(delta: i32, message: impl Into<String>) -> Self {
        Self {
            delta,
            message: message.into(),
            trap: None,
        }
    }
}

/// Presentation-side driver shared by the console and the terminal UI.
/// With a countdown, stepping on a trap arms an auto-trigger; without one
/// the shell decides what to do about the trap.
pub struct Session {
    game: GameState,
    rng: StdRng,
    countdown: Option<TrapCountdown>,
    last_direction: Option<Direction>,
    message: String,
    quit: bool,
}

impl Session {
    pub fn new(game: GameState, rng: StdRng, countdown: Option<TrapCountdown>) -> Self {
        Self {
            game,
            rng,
            countdown,
            last_direction: None,
            message: String::new(),
            quit: false,
        }
    }

    pub fn handle(&mut self, command: Command, now: Instant) -> Feedback {
        let feedback = match command {
            Command::Move(direction) => {
                self.last_direction = Some(direction);
                let outcome = self.game.step(direction);
                self.on_move(outcome, now)
            }
            Command::Jump(direction) => {
                self.last_direction = Some(direction);
                let outcome = self.game.jump(direction);
                self.on_move(outcome, now)
            }
            Command::Pickup => {
                let outcome = self.game.pickup_prize();
                if outcome.collected {
                    Feedback::new(outcome.delta, format!("{:+} from coin", outcome.delta))
                } else {
                    Feedback::new(
                        outcome.delta,
                        format!("{:+} from trying to pick up a non-existent prize", outcome.delta),
                    )
                }
            }
            Command::Spring => {
                // A pending trap can be disarmed after stepping off it.
                let pending = self.countdown.as_ref().and_then(TrapCountdown::pending);
                let outcome = match pending.and_then(|trap| self.game.disarm_trap(trap)) {
                    Some(outcome) => outcome,
                    None => self.game.spring_trap(0, 0),
                };
                match outcome.sprung {
                    Some(trap) => {
                        if let Some(countdown) = self.countdown.as_mut() {
                            countdown.cancel_for(trap);
                        }
                        Feedback::new(outcome.delta, format!("{:+} from disarming trap", outcome.delta))
                    }
                    None => Feedback::new(
                        outcome.delta,
                        format!("{:+} from trying to spring a non-existent trap", outcome.delta),
                    ),
                }
            }
            Command::Replay => {
                self.cancel_countdown();
                let steps = self.game.steps();
                let delta = self.game.replay();
                Feedback::new(
                    delta,
                    format!("{:+} at replay after {} steps, board reset", delta, steps),
                )
            }
            Command::Restart => {
                self.cancel_countdown();
                self.game.restart(&mut self.rng);
                self.last_direction = None;
                Feedback::new(0, "New board")
            }
            Command::Teleport => {
                self.cancel_countdown();
                self.game.teleport_to_start();
                Feedback::new(0, "Back to the start, score reset")
            }
            Command::Help => Feedback::new(0, "Type help or ? for the command list"),
            Command::Quit => {
                self.cancel_countdown();
                self.quit = true;
                let delta = self.game.end_game();
                if delta > 0 {
                    Feedback::new(delta, format!("{:+}, you made it!", delta))
                } else {
                    Feedback::new(delta, format!("{:+}, you quit too soon", delta))
                }
            }
        };
        self.message = feedback.message.clone();
        feedback
    }

    fn on_move(&mut self, outcome: MoveOutcome, now: Instant) -> Feedback {
        let delta = outcome.delta;
        match outcome.event {
            MoveEvent::None => Feedback::new(0, ""),
            MoveEvent::WallHit => Feedback::new(delta, format!("{:+} from running into a wall", delta)),
            MoveEvent::OffGrid => Feedback::new(delta, format!("{:+} from going off the grid", delta)),
            MoveEvent::PrizeCollected => Feedback::new(delta, format!("{:+} from coin", delta)),
            MoveEvent::WonExit => Feedback::new(
                delta,
                format!("You made it off the grid! Score: {}", self.game.score()),
            ),
            MoveEvent::Finished => Feedback::new(0, "Game over: replay or restart"),
            MoveEvent::TrapEncountered(trap) => {
                let message = match self.countdown.as_mut() {
                    Some(countdown) => {
                        countdown.arm(trap, now);
                        format!(
                            "You stepped on a trap! {:.1}s to disarm it",
                            countdown.duration().as_secs_f32()
                        )
                    }
                    None => "You stepped on a trap!".to_string(),
                };
                Feedback {
                    delta,
                    message,
                    trap: Some(trap),
                }
            }
        }
    }

    /// Fires the pending trap once its deadline has passed.
    pub fn tick(&mut self, now: Instant) -> Option<Feedback> {
        let trap = self.countdown.as_mut()?.poll(now)?;
        let delta = self.game.trigger_trap(trap);
        if delta == 0 {
            return None;
        }
        let feedback = Feedback::new(delta, format!("{:+} from not disarming a trap", delta));
        self.message = feedback.message.clone();
        Some(feedback)
    }

    fn cancel_countdown(&mut self) {
        if let Some(countdown) = self.countdown.as_mut() {
            countdown.cancel();
        }
    }

    pub fn game(&self) -> &GameState {
        &self.game
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn last_direction(&self) -> Option<Direction> {
        self.last_direction
    }

    pub fn trap_pending(&self) -> bool {
        self.countdown.as_ref().is_some_and(TrapCountdown::is_armed)
    }

    pub fn countdown_remaining(&self, now: Instant) -> Option<std::time::Duration> {
        self.countdown.as_ref()?.remaining(now)
    }

    pub fn should_quit(&self) -> bool {
        self.quit
    }
}
