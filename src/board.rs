use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::log;

pub const WIDTH: i32 = 510;
pub const HEIGHT: i32 = 360;
pub const SPACE_SIZE: i32 = 60;
pub const GRID_W: i32 = 8;
pub const GRID_H: i32 = 5;
pub const START_X: i32 = 15;
pub const START_Y: i32 = 15;

const ITEM_OFFSET: i32 = 15;
const ITEM_SIZE: i32 = 15;
const WALL_THICKNESS: i32 = 8;
const WALL_INSET: i32 = 5;

/// Axis-aligned rectangle in pixel space. A zero-area rectangle marks a
/// consumed prize or sprung trap and contains no point.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn right(&self) -> i32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> i32 {
        self.y + self.height
    }

    pub fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }

    pub fn contains(&self, px: i32, py: i32) -> bool {
        !self.is_empty() && px >= self.x && py >= self.y && px < self.right() && py < self.bottom()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WallKind {
    Vertical,
    Horizontal,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Wall {
    pub kind: WallKind,
    pub rect: Rect,
}

impl Wall {
    /// Wall on the right edge (vertical) or bottom edge (horizontal) of cell `(w, h)`.
    pub fn at_cell(w: i32, h: i32, kind: WallKind) -> Self {
        let s = SPACE_SIZE;
        let rect = match kind {
            WallKind::Vertical => Rect::new(w * s + s - WALL_INSET, h * s, WALL_THICKNESS, s),
            WallKind::Horizontal => Rect::new(w * s, h * s + s - WALL_INSET, s, WALL_THICKNESS),
        };
        Self { kind, rect }
    }

    /// Cell whose edge this wall sits on.
    pub fn cell(&self) -> (i32, i32) {
        let s = SPACE_SIZE;
        match self.kind {
            WallKind::Vertical => ((self.rect.x + WALL_INSET) / s - 1, self.rect.y / s),
            WallKind::Horizontal => (self.rect.x / s, (self.rect.y + WALL_INSET) / s - 1),
        }
    }

    /// Whether the straight path from `(x, y)` to `(x + dx, y + dy)` crosses this wall.
    pub fn blocks(&self, x: i32, y: i32, dx: i32, dy: i32) -> bool {
        let r = &self.rect;
        let new_x = x + dx;
        let new_y = y + dy;
        let in_y_band = y >= r.y && y <= r.bottom();
        let in_x_band = x >= r.x && x <= r.right();

        if dx > 0 {
            x <= r.x && r.x <= new_x && in_y_band
        } else if dx < 0 {
            x >= r.x && r.x >= new_x && in_y_band
        } else if dy > 0 {
            y <= r.y && r.y <= new_y && in_x_band
        } else if dy < 0 {
            y >= r.y && r.y >= new_y && in_x_band
        } else {
            false
        }
    }
}

/// A prize or trap: its live rectangle plus the snapshot it was placed with.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Item {
    rect: Rect,
    original: Rect,
}

impl Item {
    pub fn new(rect: Rect) -> Self {
        Self {
            rect,
            original: rect,
        }
    }

    pub fn at_cell(w: i32, h: i32) -> Self {
        let s = SPACE_SIZE;
        Self::new(Rect::new(w * s + ITEM_OFFSET, h * s + ITEM_OFFSET, ITEM_SIZE, ITEM_SIZE))
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }

    pub fn original(&self) -> Rect {
        self.original
    }

    pub fn is_active(&self) -> bool {
        !self.rect.is_empty()
    }

    pub fn contains(&self, px: i32, py: i32) -> bool {
        self.rect.contains(px, py)
    }

    pub fn consume(&mut self) {
        self.rect.width = 0;
        self.rect.height = 0;
    }

    pub fn restore(&mut self) {
        self.rect = self.original;
    }

    /// Cell the item was placed in.
    pub fn cell(&self) -> (i32, i32) {
        (self.original.x / SPACE_SIZE, self.original.y / SPACE_SIZE)
    }
}

/// Index of a trap on the current board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TrapId(pub usize);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardCounts {
    pub walls: usize,
    pub prizes: usize,
    pub traps: usize,
}

impl Default for BoardCounts {
    fn default() -> Self {
        Self {
            walls: 20,
            prizes: 3,
            traps: 5,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Board {
    walls: Vec<Wall>,
    prizes: Vec<Item>,
    traps: Vec<Item>,
}

impl Board {
    pub fn new(walls: Vec<Wall>, prizes: Vec<Item>, traps: Vec<Item>) -> Self {
        Self {
            walls,
            prizes,
            traps,
        }
    }

    /// Random layout. Entities may stack in the same cell and traps may hide prizes.
    pub fn generate(counts: BoardCounts, rng: &mut impl Rng) -> Self {
        let traps = (0..counts.traps).map(|_| random_item(rng)).collect();
        let prizes = (0..counts.prizes).map(|_| random_item(rng)).collect();
        let walls = (0..counts.walls)
            .map(|_| {
                let (w, h) = random_cell(rng);
                let kind = if rng.gen_bool(0.5) {
                    WallKind::Vertical
                } else {
                    WallKind::Horizontal
                };
                Wall::at_cell(w, h, kind)
            })
            .collect();

        log!(
            "Board generated: {} walls, {} prizes, {} traps",
            counts.walls,
            counts.prizes,
            counts.traps
        );
        Self {
            walls,
            prizes,
            traps,
        }
    }

    pub fn walls(&self) -> &[Wall] {
        &self.walls
    }

    pub fn prizes(&self) -> &[Item] {
        &self.prizes
    }

    pub fn traps(&self) -> &[Item] {
        &self.traps
    }

    /// Puts every prize and trap back to its original snapshot.
    pub fn restore(&mut self) {
        for item in self.prizes.iter_mut().chain(self.traps.iter_mut()) {
            item.restore();
        }
    }

    pub fn wall_blocks(&self, x: i32, y: i32, dx: i32, dy: i32) -> bool {
        self.walls.iter().any(|wall| wall.blocks(x, y, dx, dy))
    }

    pub fn active_trap_at(&self, px: i32, py: i32) -> Option<TrapId> {
        self.traps
            .iter()
            .position(|trap| trap.contains(px, py))
            .map(TrapId)
    }

    pub fn active_prize_at(&self, px: i32, py: i32) -> Option<usize> {
        self.prizes.iter().position(|prize| prize.contains(px, py))
    }

    pub(crate) fn trap_mut(&mut self, id: TrapId) -> Option<&mut Item> {
        self.traps.get_mut(id.0)
    }

    pub(crate) fn prize_mut(&mut self, idx: usize) -> Option<&mut Item> {
        self.prizes.get_mut(idx)
    }

    pub fn active_prizes(&self) -> usize {
        self.prizes.iter().filter(|p| p.is_active()).count()
    }

    pub fn active_traps(&self) -> usize {
        self.traps.iter().filter(|t| t.is_active()).count()
    }
}

fn random_cell(rng: &mut impl Rng) -> (i32, i32) {
    let h = rng.gen_range(0..GRID_H);
    let w = rng.gen_range(0..GRID_W);
    (w, h)
}

fn random_item(rng: &mut impl Rng) -> Item {
    let (w, h) = random_cell(rng);
    Item::at_cell(w, h)
}
