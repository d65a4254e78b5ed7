use rand::Rng;

use crate::board::{Board, BoardCounts, TrapId, HEIGHT, SPACE_SIZE, START_X, START_Y, WIDTH};
use crate::log;
use crate::rules::Rules;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// One-cell offset in pixels.
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -SPACE_SIZE),
            Direction::Down => (0, SPACE_SIZE),
            Direction::Left => (-SPACE_SIZE, 0),
            Direction::Right => (SPACE_SIZE, 0),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveEvent {
    None,
    WallHit,
    OffGrid,
    TrapEncountered(TrapId),
    PrizeCollected,
    WonExit,
    /// The game has ended; nothing happened.
    Finished,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MoveOutcome {
    pub delta: i32,
    pub event: MoveEvent,
}

impl MoveOutcome {
    fn new(delta: i32, event: MoveEvent) -> Self {
        Self { delta, event }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SpringOutcome {
    pub delta: i32,
    pub sprung: Option<TrapId>,
}

impl SpringOutcome {
    pub fn is_sprung(&self) -> bool {
        self.sprung.is_some()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PickupOutcome {
    pub delta: i32,
    pub collected: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    Playing,
    Won,
    Ended,
}

/// The rules engine. Owns the board, the player and the running score;
/// every operation applies its score delta and also returns it.
#[derive(Clone, Debug)]
pub struct GameState {
    board: Board,
    rules: Rules,
    counts: BoardCounts,
    x: i32,
    y: i32,
    steps: u32,
    score: i32,
    status: GameStatus,
}

impl GameState {
    pub fn new(rules: Rules, counts: BoardCounts) -> Self {
        Self::with_board(Board::default(), rules, counts)
    }

    pub fn with_board(board: Board, rules: Rules, counts: BoardCounts) -> Self {
        Self {
            board,
            rules,
            counts,
            x: START_X,
            y: START_Y,
            steps: 0,
            score: 0,
            status: GameStatus::Playing,
        }
    }

    pub fn set_walls(&mut self, walls: usize) {
        self.counts.walls = walls;
    }

    pub fn set_prizes(&mut self, prizes: usize) {
        self.counts.prizes = prizes;
    }

    pub fn set_traps(&mut self, traps: usize) {
        self.counts.traps = traps;
    }

    /// Lays out a fresh random board using the configured counts.
    pub fn generate_board(&mut self, rng: &mut impl Rng) {
        self.board = Board::generate(self.counts, rng);
    }

    pub fn step(&mut self, direction: Direction) -> MoveOutcome {
        let (dx, dy) = direction.delta();
        self.move_player(dx, dy)
    }

    /// Two cells at once, counted as one move attempt.
    pub fn jump(&mut self, direction: Direction) -> MoveOutcome {
        let (dx, dy) = direction.delta();
        self.move_player(dx * 2, dy * 2)
    }

    pub fn move_player(&mut self, dx: i32, dy: i32) -> MoveOutcome {
        if self.status == GameStatus::Ended {
            return MoveOutcome::new(0, MoveEvent::Finished);
        }

        self.steps += 1;
        let new_x = self.x + dx;
        let new_y = self.y + dy;

        if dx > 0 && new_x > WIDTH - SPACE_SIZE {
            if self.board.wall_blocks(self.x, self.y, dx, dy) {
                log!("Exit blocked by wall at ({}, {})", self.x, self.y);
                return self.apply_move(-self.rules.hit_wall, MoveEvent::WallHit);
            }
            self.x = new_x;
            self.status = GameStatus::Won;
            log!("Player exited the grid after {} steps", self.steps);
            return MoveOutcome::new(0, MoveEvent::WonExit);
        }

        if new_x < 0 || new_y < 0 || new_y > HEIGHT - SPACE_SIZE {
            log!("Off grid attempt to ({}, {})", new_x, new_y);
            return self.apply_move(-self.rules.off_grid, MoveEvent::OffGrid);
        }

        if self.board.wall_blocks(self.x, self.y, dx, dy) {
            log!("Wall hit moving from ({}, {}) by ({}, {})", self.x, self.y, dx, dy);
            return self.apply_move(-self.rules.hit_wall, MoveEvent::WallHit);
        }

        self.x = new_x;
        self.y = new_y;
        // A won player who walks back onto the grid is playing again.
        if !self.player_at_end() {
            self.status = GameStatus::Playing;
        }

        if let Some(idx) = self.board.active_prize_at(new_x, new_y) {
            if let Some(prize) = self.board.prize_mut(idx) {
                prize.consume();
            }
            log!("Prize collected at ({}, {})", new_x, new_y);
            return self.apply_move(self.rules.prize, MoveEvent::PrizeCollected);
        }

        if let Some(trap) = self.board.active_trap_at(new_x, new_y) {
            log!("Trap {} encountered at ({}, {})", trap.0, new_x, new_y);
            return MoveOutcome::new(0, MoveEvent::TrapEncountered(trap));
        }

        MoveOutcome::new(0, MoveEvent::None)
    }

    fn apply_move(&mut self, delta: i32, event: MoveEvent) -> MoveOutcome {
        self.score += delta;
        MoveOutcome::new(delta, event)
    }

    /// Active trap at the cell offset `(dx, dy)` from the player.
    pub fn trap_at(&self, dx: i32, dy: i32) -> Option<TrapId> {
        self.board.active_trap_at(self.x + dx, self.y + dy)
    }

    pub fn is_trap_at(&self, dx: i32, dy: i32) -> bool {
        self.trap_at(dx, dy).is_some()
    }

    /// Springs the active trap at the offset, or penalises when there is none.
    pub fn spring_trap(&mut self, dx: i32, dy: i32) -> SpringOutcome {
        match self.trap_at(dx, dy) {
            Some(id) => {
                if let Some(trap) = self.board.trap_mut(id) {
                    trap.consume();
                }
                self.score += self.rules.trap;
                log!("Trap {} sprung", id.0);
                SpringOutcome {
                    delta: self.rules.trap,
                    sprung: Some(id),
                }
            }
            None => {
                self.score -= self.rules.trap;
                log!("No trap to spring at ({}, {})", self.x + dx, self.y + dy);
                SpringOutcome {
                    delta: -self.rules.trap,
                    sprung: None,
                }
            }
        }
    }

    /// Disarms a specific trap wherever the player now stands. `None` when it is
    /// already sprung, so the caller can fall back to `spring_trap`.
    pub fn disarm_trap(&mut self, id: TrapId) -> Option<SpringOutcome> {
        let trap = self.board.trap_mut(id)?;
        if !trap.is_active() {
            return None;
        }
        trap.consume();
        self.score += self.rules.trap;
        log!("Trap {} disarmed", id.0);
        Some(SpringOutcome {
            delta: self.rules.trap,
            sprung: Some(id),
        })
    }

    /// Fires a trap that was not disarmed in time. No effect if it is already sprung.
    pub fn trigger_trap(&mut self, id: TrapId) -> i32 {
        let Some(trap) = self.board.trap_mut(id) else {
            return 0;
        };
        if !trap.is_active() {
            return 0;
        }
        trap.consume();
        self.score -= self.rules.trap_expired;
        log!("Trap {} triggered", id.0);
        -self.rules.trap_expired
    }

    pub fn pickup_prize(&mut self) -> PickupOutcome {
        match self.board.active_prize_at(self.x, self.y) {
            Some(idx) => {
                if let Some(prize) = self.board.prize_mut(idx) {
                    prize.consume();
                }
                self.score += self.rules.prize;
                log!("Prize picked up at ({}, {})", self.x, self.y);
                PickupOutcome {
                    delta: self.rules.prize,
                    collected: true,
                }
            }
            None => {
                self.score -= self.rules.prize;
                PickupOutcome {
                    delta: -self.rules.prize,
                    collected: false,
                }
            }
        }
    }

    /// True once the player has left the grid through the right edge.
    pub fn player_at_end(&self) -> bool {
        self.x > WIDTH - SPACE_SIZE
    }

    fn end_delta(&self) -> i32 {
        if self.player_at_end() {
            self.rules.end
        } else {
            -self.rules.end
        }
    }

    /// Scores the finished round and restarts the same board. The running score is kept.
    pub fn replay(&mut self) -> i32 {
        let delta = self.end_delta();
        self.score += delta;
        log!("Replay after {} steps, delta {}", self.steps, delta);
        self.board.restore();
        self.reset_player();
        delta
    }

    pub fn end_game(&mut self) -> i32 {
        let delta = self.end_delta();
        if self.status == GameStatus::Ended {
            return delta;
        }
        self.score += delta;
        self.status = GameStatus::Ended;
        log!("Game ended: score {}, steps {}", self.score, self.steps);
        delta
    }

    /// Restores prizes and traps and puts the player back at the start. Score is untouched.
    pub fn reset_game(&mut self) {
        self.board.restore();
        self.reset_player();
    }

    /// Back to the start corner with restored items and a zero score. Steps keep counting.
    pub fn teleport_to_start(&mut self) {
        self.x = START_X;
        self.y = START_Y;
        self.board.restore();
        self.score = 0;
        self.status = GameStatus::Playing;
    }

    /// New random board, zero score and steps.
    pub fn restart(&mut self, rng: &mut impl Rng) {
        self.generate_board(rng);
        self.reset_player();
        self.score = 0;
    }

    fn reset_player(&mut self) {
        self.x = START_X;
        self.y = START_Y;
        self.steps = 0;
        self.status = GameStatus::Playing;
    }

    pub fn steps(&self) -> u32 {
        self.steps
    }

    pub fn score(&self) -> i32 {
        self.score
    }

    pub fn position(&self) -> (i32, i32) {
        (self.x, self.y)
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_finished(&self) -> bool {
        self.status == GameStatus::Ended
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn rules(&self) -> &Rules {
        &self.rules
    }

    pub fn counts(&self) -> BoardCounts {
        self.counts
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Item, Wall, WallKind};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn game_with(walls: Vec<Wall>, prizes: Vec<Item>, traps: Vec<Item>) -> GameState {
        GameState::with_board(
            Board::new(walls, prizes, traps),
            Rules::default(),
            BoardCounts::default(),
        )
    }

    fn empty_game() -> GameState {
        game_with(vec![], vec![], vec![])
    }

    #[test]
    fn test_clean_move_updates_position() {
        let mut game = empty_game();
        let outcome = game.step(Direction::Right);
        assert_eq!(outcome, MoveOutcome::new(0, MoveEvent::None));
        assert_eq!(game.position(), (75, 15));
        assert_eq!(game.steps(), 1);
        assert_eq!(game.score(), 0);
    }

    #[test]
    fn test_off_grid_penalised_without_moving() {
        let mut game = empty_game();
        for dir in [Direction::Up, Direction::Left] {
            let outcome = game.step(dir);
            assert_eq!(outcome.event, MoveEvent::OffGrid);
            assert_eq!(outcome.delta, -game.rules().off_grid);
            assert_eq!(game.position(), (START_X, START_Y));
        }
        assert_eq!(game.steps(), 2);
        assert_eq!(game.score(), -2 * game.rules().off_grid);
    }

    #[test]
    fn test_bottom_edge_is_off_grid() {
        let mut game = empty_game();
        for _ in 0..4 {
            assert_eq!(game.step(Direction::Down).event, MoveEvent::None);
        }
        assert_eq!(game.position(), (15, 255));
        let outcome = game.step(Direction::Down);
        assert_eq!(outcome.event, MoveEvent::OffGrid);
        assert_eq!(game.position(), (15, 255));
        assert_eq!(game.steps(), 5);
    }

    #[test]
    fn test_wall_hit_penalised_without_moving() {
        let mut game = game_with(vec![Wall::at_cell(0, 0, WallKind::Vertical)], vec![], vec![]);
        let outcome = game.step(Direction::Right);
        assert_eq!(outcome.event, MoveEvent::WallHit);
        assert_eq!(outcome.delta, -game.rules().hit_wall);
        assert_eq!(game.position(), (START_X, START_Y));
        assert_eq!(game.steps(), 1);
        assert_eq!(game.score(), -game.rules().hit_wall);
    }

    #[test]
    fn test_wall_blocks_from_both_sides() {
        let mut game = game_with(vec![Wall::at_cell(1, 1, WallKind::Horizontal)], vec![], vec![]);
        game.step(Direction::Right);
        assert_eq!(game.step(Direction::Down).event, MoveEvent::None);
        assert_eq!(game.step(Direction::Down).event, MoveEvent::WallHit);
        assert_eq!(game.position(), (75, 75));
        game.step(Direction::Left);
        game.step(Direction::Down);
        game.step(Direction::Right);
        assert_eq!(game.position(), (75, 135));
        assert_eq!(game.step(Direction::Up).event, MoveEvent::WallHit);
        assert_eq!(game.position(), (75, 135));
    }

    #[test]
    fn test_win_exit_after_eight_moves_right() {
        let mut game = empty_game();
        for _ in 0..7 {
            assert_eq!(game.step(Direction::Right).event, MoveEvent::None);
        }
        assert_eq!(game.position(), (435, 15));
        let outcome = game.step(Direction::Right);
        assert_eq!(outcome, MoveOutcome::new(0, MoveEvent::WonExit));
        assert_eq!(game.position(), (495, 15));
        assert!(game.position().0 > WIDTH - SPACE_SIZE);
        assert_eq!(game.status(), GameStatus::Won);
        assert!(game.player_at_end());
        assert_eq!(game.steps(), 8);
    }

    #[test]
    fn test_blocked_exit_is_wall_hit() {
        let mut game = game_with(vec![Wall::at_cell(7, 0, WallKind::Vertical)], vec![], vec![]);
        for _ in 0..7 {
            game.step(Direction::Right);
        }
        let outcome = game.step(Direction::Right);
        assert_eq!(outcome.event, MoveEvent::WallHit);
        assert_eq!(game.position(), (435, 15));
        assert_eq!(game.status(), GameStatus::Playing);
        assert!(!game.player_at_end());
    }

    #[test]
    fn test_wall_on_other_row_does_not_block_exit() {
        let mut game = game_with(vec![Wall::at_cell(7, 1, WallKind::Vertical)], vec![], vec![]);
        for _ in 0..7 {
            game.step(Direction::Right);
        }
        assert_eq!(game.step(Direction::Right).event, MoveEvent::WonExit);
    }

    #[test]
    fn test_moves_after_win_still_count_steps() {
        let mut game = empty_game();
        for _ in 0..8 {
            game.step(Direction::Right);
        }
        assert_eq!(game.steps(), 8);

        let outcome = game.step(Direction::Left);
        assert_eq!(outcome, MoveOutcome::new(0, MoveEvent::None));
        assert_eq!(game.steps(), 9);
        assert_eq!(game.position(), (435, 15));
        assert_eq!(game.status(), GameStatus::Playing);
        assert!(!game.player_at_end());

        assert_eq!(game.step(Direction::Right).event, MoveEvent::WonExit);
        assert_eq!(game.steps(), 10);
        assert_eq!(game.status(), GameStatus::Won);
    }

    #[test]
    fn test_prize_collected_on_move_once() {
        let mut game = game_with(vec![], vec![Item::at_cell(5, 0)], vec![]);
        for _ in 0..4 {
            assert_eq!(game.step(Direction::Right).event, MoveEvent::None);
        }
        let outcome = game.step(Direction::Right);
        assert_eq!(outcome.event, MoveEvent::PrizeCollected);
        assert_eq!(outcome.delta, game.rules().prize);
        assert_eq!(game.position(), (315, 15));
        assert_eq!(game.score(), game.rules().prize);

        game.step(Direction::Left);
        assert_eq!(game.step(Direction::Right).event, MoveEvent::None);
        assert!(!game.pickup_prize().collected);
    }

    #[test]
    fn test_prize_restored_by_replay() {
        let mut game = game_with(vec![], vec![Item::at_cell(5, 0)], vec![]);
        for _ in 0..5 {
            game.step(Direction::Right);
        }
        assert!(game.board().prizes()[0].rect().is_empty());

        let delta = game.replay();
        assert_eq!(delta, -game.rules().end);
        assert_eq!(game.position(), (START_X, START_Y));
        assert_eq!(game.steps(), 0);

        let mut collected = 0;
        for _ in 0..5 {
            if game.step(Direction::Right).event == MoveEvent::PrizeCollected {
                collected += 1;
            }
        }
        assert_eq!(collected, 1);
        assert_eq!(game.score(), 2 * game.rules().prize - game.rules().end);
    }

    #[test]
    fn test_prize_takes_precedence_over_trap() {
        let mut game = game_with(vec![], vec![Item::at_cell(1, 0)], vec![Item::at_cell(1, 0)]);
        let outcome = game.step(Direction::Right);
        assert_eq!(outcome.event, MoveEvent::PrizeCollected);
        assert!(game.is_trap_at(0, 0));
    }

    #[test]
    fn test_trap_encountered_moves_player() {
        let mut game = game_with(vec![], vec![], vec![Item::at_cell(0, 1)]);
        assert!(game.is_trap_at(0, SPACE_SIZE));
        let outcome = game.step(Direction::Down);
        assert_eq!(outcome, MoveOutcome::new(0, MoveEvent::TrapEncountered(TrapId(0))));
        assert_eq!(game.position(), (15, 75));
        assert!(game.is_trap_at(0, 0));
    }

    #[test]
    fn test_spring_trap_once() {
        let mut game = game_with(vec![], vec![], vec![Item::at_cell(0, 1)]);
        game.step(Direction::Down);

        let first = game.spring_trap(0, 0);
        assert_eq!(first.sprung, Some(TrapId(0)));
        assert_eq!(first.delta, game.rules().trap);
        assert!(!game.is_trap_at(0, 0));

        let second = game.spring_trap(0, 0);
        assert!(!second.is_sprung());
        assert_eq!(second.delta, -game.rules().trap);
        assert_eq!(game.score(), 0);
    }

    #[test]
    fn test_spring_on_empty_ground_does_not_mutate_traps() {
        let mut game = game_with(vec![], vec![], vec![Item::at_cell(3, 3)]);
        let before = game.board().clone();
        let outcome = game.spring_trap(0, 0);
        assert_eq!(outcome.delta, -game.rules().trap);
        assert_eq!(outcome.sprung, None);
        assert_eq!(game.board(), &before);
    }

    #[test]
    fn test_spring_at_relative_offset() {
        let mut game = game_with(vec![], vec![], vec![Item::at_cell(1, 0)]);
        let outcome = game.spring_trap(SPACE_SIZE, 0);
        assert!(outcome.is_sprung());
        assert_eq!(game.position(), (START_X, START_Y));
        assert_eq!(game.step(Direction::Right).event, MoveEvent::None);
    }

    #[test]
    fn test_disarm_trap_after_stepping_off() {
        let mut game = game_with(vec![], vec![], vec![Item::at_cell(0, 1)]);
        game.step(Direction::Down);
        game.step(Direction::Right);
        assert!(!game.is_trap_at(0, 0));

        let outcome = game.disarm_trap(TrapId(0));
        assert_eq!(
            outcome,
            Some(SpringOutcome {
                delta: game.rules().trap,
                sprung: Some(TrapId(0)),
            })
        );
        assert_eq!(game.board().active_traps(), 0);
        assert_eq!(game.disarm_trap(TrapId(0)), None);
        assert_eq!(game.disarm_trap(TrapId(4)), None);
        assert_eq!(game.trigger_trap(TrapId(0)), 0);
        assert_eq!(game.score(), game.rules().trap);
    }

    #[test]
    fn test_trigger_trap_penalises_once() {
        let mut game = game_with(vec![], vec![], vec![Item::at_cell(0, 1)]);
        game.step(Direction::Down);
        assert_eq!(game.trigger_trap(TrapId(0)), -game.rules().trap_expired);
        assert_eq!(game.trigger_trap(TrapId(0)), 0);
        assert_eq!(game.trigger_trap(TrapId(9)), 0);
        assert_eq!(game.score(), -game.rules().trap_expired);
        assert!(!game.spring_trap(0, 0).is_sprung());
    }

    #[test]
    fn test_pickup_without_prize_penalises() {
        let mut game = empty_game();
        let outcome = game.pickup_prize();
        assert_eq!(
            outcome,
            PickupOutcome {
                delta: -game.rules().prize,
                collected: false,
            }
        );
        assert_eq!(game.score(), -game.rules().prize);
    }

    #[test]
    fn test_replay_restores_every_item() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut game = GameState::new(Rules::default(), BoardCounts::default());
        game.generate_board(&mut rng);
        let original = game.board().clone();

        for (w, h) in original
            .traps()
            .iter()
            .map(Item::cell)
            .collect::<Vec<_>>()
        {
            game.spring_trap(w * SPACE_SIZE, h * SPACE_SIZE);
        }
        assert_eq!(game.board().active_traps(), 0);

        game.replay();
        assert_eq!(game.board(), &original);
    }

    #[test]
    fn test_replay_after_win_keeps_score() {
        let mut game = game_with(vec![], vec![Item::at_cell(2, 0)], vec![]);
        for _ in 0..8 {
            game.step(Direction::Right);
        }
        let before = game.score();
        let delta = game.replay();
        assert_eq!(delta, game.rules().end);
        assert_eq!(game.score(), before + delta);
        assert_eq!(game.status(), GameStatus::Playing);
        assert_eq!(game.board().active_prizes(), 1);
    }

    #[test]
    fn test_end_game_is_terminal() {
        let mut game = empty_game();
        game.step(Direction::Right);
        let delta = game.end_game();
        assert_eq!(delta, -game.rules().end);
        assert_eq!(game.status(), GameStatus::Ended);
        assert_eq!(game.step(Direction::Right).event, MoveEvent::Finished);
        assert_eq!(game.steps(), 1);

        game.end_game();
        assert_eq!(game.score(), -game.rules().end);
    }

    #[test]
    fn test_end_game_after_win_rewards() {
        let mut game = empty_game();
        for _ in 0..8 {
            game.step(Direction::Right);
        }
        assert_eq!(game.end_game(), game.rules().end);
        assert_eq!(game.score(), game.rules().end);
    }

    #[test]
    fn test_jump_moves_two_cells_in_one_step() {
        let mut game = empty_game();
        let outcome = game.jump(Direction::Right);
        assert_eq!(outcome.event, MoveEvent::None);
        assert_eq!(game.position(), (135, 15));
        assert_eq!(game.steps(), 1);
    }

    #[test]
    fn test_jump_cannot_clear_walls() {
        let mut game = game_with(vec![Wall::at_cell(1, 0, WallKind::Vertical)], vec![], vec![]);
        let outcome = game.jump(Direction::Right);
        assert_eq!(outcome.event, MoveEvent::WallHit);
        assert_eq!(game.position(), (START_X, START_Y));
    }

    #[test]
    fn test_reset_and_teleport() {
        let mut game = game_with(vec![], vec![Item::at_cell(1, 0)], vec![]);
        game.step(Direction::Right);
        game.step(Direction::Down);
        game.reset_game();
        assert_eq!(game.position(), (START_X, START_Y));
        assert_eq!(game.steps(), 0);
        assert_eq!(game.score(), game.rules().prize);
        assert_eq!(game.board().active_prizes(), 1);

        game.step(Direction::Right);
        game.step(Direction::Down);
        game.teleport_to_start();
        assert_eq!(game.position(), (START_X, START_Y));
        assert_eq!(game.score(), 0);
        assert_eq!(game.steps(), 2);
        assert_eq!(game.board().active_prizes(), 1);
    }

    #[test]
    fn test_restart_generates_new_board_with_counts() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut game = empty_game();
        game.set_walls(4);
        game.set_prizes(2);
        game.set_traps(1);
        game.step(Direction::Up);
        game.restart(&mut rng);

        assert_eq!(game.board().walls().len(), 4);
        assert_eq!(game.board().prizes().len(), 2);
        assert_eq!(game.board().traps().len(), 1);
        assert_eq!(game.score(), 0);
        assert_eq!(game.steps(), 0);
        assert_eq!(game.status(), GameStatus::Playing);
    }
}
