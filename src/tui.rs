use crossterm::cursor::MoveTo;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use crossterm::terminal::{self, Clear, ClearType};
use crossterm::QueueableCommand;
use std::io::{self, Stdout, Write};
use std::thread;
use std::time::{Duration, Instant};
use unicode_width::UnicodeWidthStr;

use escape_room::board::{WallKind, GRID_H, GRID_W, SPACE_SIZE, START_X, START_Y};
use escape_room::command::Command;
use escape_room::game::{Direction, GameState, GameStatus};
use escape_room::session::Session;

const LAYOUT_W: usize = (2 * GRID_W + 1) as usize;
const LAYOUT_H: usize = (2 * GRID_H + 1) as usize;
const CELL_W: usize = 2;
const HUD_ROWS: u16 = 2;
const DEFAULT_RENDER_FPS: u64 = 60;

const KEYS: &[&str] = &[
    "arrows / hjkl  move one space",
    "space          jump two spaces in the last direction",
    "d              disarm the trap you stepped on",
    "p              pick up a prize",
    "r              replay this board   n  new board",
    "t              back to start, score reset",
    "?              toggle this help    q  quit",
];

#[derive(Clone, Copy, PartialEq)]
enum Glyph {
    Player,
    Coin,
    SprungTrap,
    Wall,
    Post,
    Border,
    Exit,
    Empty,
    Tint,
}

#[derive(Clone, Copy, PartialEq)]
struct Cell {
    glyph: Glyph,
    color: Color,
}

struct Renderer {
    last: Vec<Cell>,
    last_hud: (String, String),
    needs_full: bool,
    show_help: bool,
    origin_x: u16,
    origin_y: u16,
}

impl Renderer {
    fn new() -> Self {
        Self {
            last: vec![
                Cell {
                    glyph: Glyph::Empty,
                    color: Color::Reset,
                };
                LAYOUT_W * LAYOUT_H
            ],
            last_hud: (String::new(), String::new()),
            needs_full: true,
            show_help: false,
            origin_x: 0,
            origin_y: HUD_ROWS,
        }
    }
}

pub fn run(stdout: &mut Stdout, session: &mut Session) -> io::Result<()> {
    let mut renderer = Renderer::new();
    let frame_time = Duration::from_micros(1_000_000 / read_render_fps().max(1));

    loop {
        let frame_start = Instant::now();
        while event::poll(Duration::from_millis(0))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Release {
                    continue;
                }
                if key.code == KeyCode::Char('?') {
                    renderer.show_help = !renderer.show_help;
                    renderer.needs_full = true;
                    continue;
                }
                if let Some(command) = command_for(key.code, session.last_direction()) {
                    session.handle(command, Instant::now());
                }
            }
        }

        session.tick(Instant::now());
        render(stdout, session, &mut renderer)?;

        if session.should_quit() {
            return render_game_over(stdout, session.game(), renderer.show_help);
        }

        let elapsed = frame_start.elapsed();
        if elapsed < frame_time {
            thread::sleep(frame_time - elapsed);
        }
    }
}

fn read_render_fps() -> u64 {
    std::env::var("ESCAPE_ROOM_FPS")
        .ok()
        .and_then(|v| v.parse::<u64>().ok())
        .filter(|v| *v > 0)
        .unwrap_or(DEFAULT_RENDER_FPS)
}

fn command_for(code: KeyCode, last_direction: Option<Direction>) -> Option<Command> {
    let command = match code {
        KeyCode::Up | KeyCode::Char('k') => Command::Move(Direction::Up),
        KeyCode::Down | KeyCode::Char('j') => Command::Move(Direction::Down),
        KeyCode::Left | KeyCode::Char('h') => Command::Move(Direction::Left),
        KeyCode::Right | KeyCode::Char('l') => Command::Move(Direction::Right),
        KeyCode::Char(' ') => Command::Jump(last_direction?),
        KeyCode::Char('d') => Command::Spring,
        KeyCode::Char('p') => Command::Pickup,
        KeyCode::Char('r') => Command::Replay,
        KeyCode::Char('n') => Command::Restart,
        KeyCode::Char('t') => Command::Teleport,
        KeyCode::Char('q') | KeyCode::Esc => Command::Quit,
        _ => return None,
    };
    Some(command)
}

fn hud_lines(session: &Session, now: Instant) -> (String, String) {
    let game = session.game();
    let status = format!(
        "Score: {}  Steps: {}  Coins left: {}  (? help, q quit)",
        game.score(),
        game.steps(),
        game.board().active_prizes()
    );
    let message = match session.countdown_remaining(now) {
        Some(left) => format!("TRAP! press d to disarm ({:.1}s)", left.as_secs_f32()),
        None if game.status() == GameStatus::Won => format!(
            "Congratulations! You win! Final score: {}  (r replay, n new board)",
            game.score()
        ),
        None => session.message().to_string(),
    };
    (status, message)
}

fn needed_size(show_help: bool) -> (u16, u16) {
    let help_rows = if show_help { KEYS.len() + 1 } else { 0 };
    ((LAYOUT_W * CELL_W) as u16, (LAYOUT_H + help_rows) as u16 + HUD_ROWS)
}

/// Top-left of the board for this terminal size, `None` when it does not fit.
fn board_origin(term_w: u16, term_h: u16, show_help: bool) -> Option<(u16, u16)> {
    let (needed_w, needed_h) = needed_size(show_help);
    if term_w < needed_w || term_h < needed_h {
        return None;
    }
    Some(((term_w - needed_w) / 2, (term_h - needed_h) / 2 + HUD_ROWS))
}

/// The row just below the board, above the help panel.
fn game_over_pos(term_w: u16, term_h: u16, show_help: bool) -> (u16, u16) {
    match board_origin(term_w, term_h, show_help) {
        Some((x, y)) => (x, y + LAYOUT_H as u16),
        None => (0, 1),
    }
}

fn render(stdout: &mut Stdout, session: &Session, renderer: &mut Renderer) -> io::Result<()> {
    let (needed_w, needed_h) = needed_size(renderer.show_help);

    stdout.queue(MoveTo(0, 0))?;

    let (term_w, term_h) = terminal::size()?;
    let Some((origin_x, origin_y)) = board_origin(term_w, term_h, renderer.show_help) else {
        stdout.queue(Clear(ClearType::All))?;
        let msg = format!(
            "Terminal too small. Need at least {}x{} (cols x rows). Current: {}x{}.",
            needed_w, needed_h, term_w, term_h
        );
        stdout.queue(Print(msg))?;
        stdout.flush()?;
        renderer.needs_full = true;
        return Ok(());
    };

    if origin_x != renderer.origin_x || origin_y != renderer.origin_y {
        renderer.origin_x = origin_x;
        renderer.origin_y = origin_y;
        renderer.needs_full = true;
    }
    if renderer.needs_full {
        stdout.queue(Clear(ClearType::All))?;
    }

    let hud = hud_lines(session, Instant::now());
    if renderer.needs_full || hud != renderer.last_hud {
        stdout.queue(MoveTo(renderer.origin_x, renderer.origin_y - 2))?;
        stdout.queue(SetForegroundColor(Color::White))?;
        stdout.queue(Clear(ClearType::CurrentLine))?;
        stdout.queue(Print(&hud.0))?;
        stdout.queue(MoveTo(renderer.origin_x, renderer.origin_y - 1))?;
        let color = if session.trap_pending() {
            Color::Red
        } else {
            Color::Magenta
        };
        stdout.queue(SetForegroundColor(color))?;
        stdout.queue(Clear(ClearType::CurrentLine))?;
        stdout.queue(Print(&hud.1))?;
        stdout.queue(ResetColor)?;
        renderer.last_hud = hud;
    }

    let tinted = session.trap_pending();
    for y in 0..LAYOUT_H {
        for x in 0..LAYOUT_W {
            let cell = cell_for(session.game(), x, y, tinted);
            let idx = y * LAYOUT_W + x;
            if renderer.needs_full || cell != renderer.last[idx] {
                renderer.last[idx] = cell;
                draw_cell(stdout, renderer, x, y, cell)?;
            }
        }
    }

    if renderer.needs_full && renderer.show_help {
        let top = renderer.origin_y + LAYOUT_H as u16 + 1;
        stdout.queue(SetForegroundColor(Color::Grey))?;
        for (i, line) in KEYS.iter().enumerate() {
            stdout.queue(MoveTo(renderer.origin_x, top + i as u16))?;
            stdout.queue(Print(line))?;
        }
        stdout.queue(ResetColor)?;
    }
    renderer.needs_full = false;

    stdout.flush()?;
    Ok(())
}

fn player_layout_pos(game: &GameState) -> (usize, usize) {
    let (x, y) = game.position();
    let cx = ((x - START_X) / SPACE_SIZE).clamp(0, GRID_W) as usize;
    let cy = ((y - START_Y) / SPACE_SIZE).clamp(0, GRID_H - 1) as usize;
    ((2 * cx + 1).min(LAYOUT_W - 1), 2 * cy + 1)
}

fn wall_at(game: &GameState, x: usize, y: usize) -> bool {
    let (lx, ly) = (x as i32, y as i32);
    game.board().walls().iter().any(|wall| {
        let (w, h) = wall.cell();
        match wall.kind {
            WallKind::Vertical => lx == 2 * w + 2 && ly == 2 * h + 1,
            WallKind::Horizontal => lx == 2 * w + 1 && ly == 2 * h + 2,
        }
    })
}

fn cell_for(game: &GameState, x: usize, y: usize, tinted: bool) -> Cell {
    if (x, y) == player_layout_pos(game) {
        return Cell {
            glyph: Glyph::Player,
            color: Color::Yellow,
        };
    }
    if wall_at(game, x, y) {
        return Cell {
            glyph: Glyph::Wall,
            color: Color::Blue,
        };
    }
    if x == LAYOUT_W - 1 && y % 2 == 1 {
        return Cell {
            glyph: Glyph::Exit,
            color: Color::Green,
        };
    }
    if x == 0 || y == 0 || x == LAYOUT_W - 1 || y == LAYOUT_H - 1 {
        return Cell {
            glyph: Glyph::Border,
            color: Color::DarkGrey,
        };
    }
    if x % 2 == 0 && y % 2 == 0 {
        return Cell {
            glyph: Glyph::Post,
            color: Color::DarkGrey,
        };
    }
    if x % 2 == 1 && y % 2 == 1 {
        let cell = ((x / 2) as i32, (y / 2) as i32);
        let board = game.board();
        if board.prizes().iter().any(|p| p.is_active() && p.cell() == cell) {
            return Cell {
                glyph: Glyph::Coin,
                color: Color::Yellow,
            };
        }
        if board.traps().iter().any(|t| !t.is_active() && t.cell() == cell) {
            return Cell {
                glyph: Glyph::SprungTrap,
                color: Color::Red,
            };
        }
    }
    if tinted {
        return Cell {
            glyph: Glyph::Tint,
            color: Color::DarkRed,
        };
    }
    Cell {
        glyph: Glyph::Empty,
        color: Color::Reset,
    }
}

fn draw_cell(stdout: &mut Stdout, renderer: &Renderer, x: usize, y: usize, cell: Cell) -> io::Result<()> {
    let text = match cell.glyph {
        Glyph::Player => "😃",
        Glyph::Coin => "● ",
        Glyph::SprungTrap => "✖ ",
        Glyph::Wall => "██",
        Glyph::Post => "· ",
        Glyph::Border => "░░",
        Glyph::Exit => "→ ",
        Glyph::Empty => "  ",
        Glyph::Tint => "··",
    };
    let x_pos = renderer.origin_x + (x * CELL_W) as u16;
    let y_pos = renderer.origin_y + y as u16;
    stdout.queue(MoveTo(x_pos, y_pos))?;
    stdout.queue(SetForegroundColor(cell.color))?;
    stdout.queue(Print(text))?;
    let w = UnicodeWidthStr::width(text);
    if w < CELL_W {
        for _ in 0..(CELL_W - w) {
            stdout.queue(Print(' '))?;
        }
    }
    stdout.queue(ResetColor)?;
    Ok(())
}

fn render_game_over(stdout: &mut Stdout, game: &GameState, show_help: bool) -> io::Result<()> {
    let (term_w, term_h) = terminal::size()?;
    let (x, y) = game_over_pos(term_w, term_h, show_help);
    stdout.queue(MoveTo(x, y))?;
    stdout.queue(Clear(ClearType::CurrentLine))?;
    stdout.queue(Print(format!(
        "GAME OVER - Final Score: {}  Steps: {} (press q to quit)",
        game.score(),
        game.steps()
    )))?;
    stdout.flush()?;
    loop {
        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press && matches!(key.code, KeyCode::Char('q') | KeyCode::Esc) {
                    return Ok(());
                }
            }
        }
    }
}
