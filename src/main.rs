mod tui;

use clap::Parser;
use crossterm::cursor::{Hide, Show};
use crossterm::terminal::{self, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::ExecutableCommand;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::io;

use escape_room::config::{load_config, FileContentConfigProvider, Validate};
use escape_room::countdown::TrapCountdown;
use escape_room::session::Session;
use escape_room::{console, log, logger, GameState};

const DEFAULT_CONFIG_PATH: &str = "escape_room.yaml";

#[derive(Parser)]
#[command(name = "escape_room", about = "Reach the right edge of the room, dodging walls and hidden traps")]
struct Args {
    /// YAML config file; defaults are used when it does not exist
    #[arg(long, default_value = DEFAULT_CONFIG_PATH)]
    config: String,
    /// Seed for the board layout
    #[arg(long)]
    seed: Option<u64>,
    #[arg(long)]
    walls: Option<usize>,
    #[arg(long)]
    prizes: Option<usize>,
    #[arg(long)]
    traps: Option<usize>,
    /// Play with typed commands instead of the full-screen board
    #[arg(long)]
    text: bool,
    #[arg(long)]
    log_file: Option<String>,
    #[arg(long)]
    log_prefix: bool,
    /// Print the effective config as YAML and exit
    #[arg(long)]
    dump_config: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let mut config = load_config(&FileContentConfigProvider::new(args.config.clone()))?;
    if let Some(walls) = args.walls {
        config.board.walls = walls;
    }
    if let Some(prizes) = args.prizes {
        config.board.prizes = prizes;
    }
    if let Some(traps) = args.traps {
        config.board.traps = traps;
    }
    if args.log_file.is_some() {
        config.log_file = args.log_file.clone();
    }
    config.validate()?;

    if args.dump_config {
        print!("{}", config.to_yaml()?);
        return Ok(());
    }

    if let Some(path) = config.log_file.as_deref() {
        let prefix = args
            .log_prefix
            .then(|| if args.text { "Console" } else { "Tui" }.to_string());
        logger::init_logger(prefix, path)?;
    }

    let seed = args.seed.unwrap_or_else(|| rand::thread_rng().gen());
    log!("Starting escape room with seed {}", seed);
    let mut rng = StdRng::seed_from_u64(seed);
    let mut game = GameState::new(config.rules, config.board);
    game.generate_board(&mut rng);

    if args.text {
        let mut session = Session::new(game, rng, None);
        console::run(&mut session, &mut io::stdin().lock(), &mut io::stdout())?;
        return Ok(());
    }

    let mut session = Session::new(game, rng, Some(TrapCountdown::new(config.trap_countdown())));
    let mut stdout = io::stdout();
    terminal::enable_raw_mode()?;
    stdout.execute(EnterAlternateScreen)?;
    stdout.execute(Hide)?;

    let result = tui::run(&mut stdout, &mut session);

    stdout.execute(Show)?;
    stdout.execute(LeaveAlternateScreen)?;
    terminal::disable_raw_mode()?;
    result?;

    let game = session.game();
    println!("score={}", game.score());
    println!("steps={}", game.steps());
    log!("Exited with score {} after {} steps", game.score(), game.steps());
    Ok(())
}
