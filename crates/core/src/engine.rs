//! Engine module - the per-tick state machine
//!
//! Owns the grid, the active piece and the running/game-over status. Input
//! commands and gravity ticks are the only ways state changes; each call runs
//! to completion before the next, so a host only needs `&mut Engine`.

use crate::grid::{ClearedRows, Grid};
use crate::piece::Piece;
use crate::rng::SimpleRng;
use crate::snapshot::{ActiveSnapshot, Snapshot};
use crate::types::{Command, SPAWN_X, SPAWN_Y};

/// Engine lifecycle. `GameOver` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    Running,
    GameOver,
}

/// What a single [`Engine::tick`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// The piece moved down one row
    Fell,
    /// The piece locked, rows were cleared and a new piece spawned
    Locked { lines_cleared: u8 },
    /// The piece locked and the next piece could not spawn
    GameOver,
    /// Nothing happened (game already over)
    Idle,
}

/// Emitted after every lock, consumed by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LockEvent {
    pub lines_cleared: u8,
    pub game_over: bool,
}

#[derive(Debug, Clone)]
pub struct Engine {
    grid: Grid,
    active: Piece,
    status: Status,
    rng: SimpleRng,
    /// Last lock event (consumed by observers).
    last_event: Option<LockEvent>,
}

impl Engine {
    /// Create an engine with an empty grid and a freshly spawned piece
    pub fn new(seed: u32) -> Self {
        let mut rng = SimpleRng::new(seed);
        let active = Piece::spawn(SPAWN_X, SPAWN_Y, &mut rng);
        log::trace!("spawned {} piece at ({}, {})", active.color.as_str(), active.x, active.y);
        Self {
            grid: Grid::new(),
            active,
            status: Status::Running,
            rng,
            last_event: None,
        }
    }

    /// Start from an arbitrary grid and active piece.
    ///
    /// The engine starts in `GameOver` if the piece does not fit where it is.
    pub fn from_parts(grid: Grid, active: Piece, seed: u32) -> Self {
        let status = if grid.is_valid_placement(&active, 0, 0) {
            Status::Running
        } else {
            Status::GameOver
        };
        Self {
            grid,
            active,
            status,
            rng: SimpleRng::new(seed),
            last_event: None,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn active(&self) -> &Piece {
        &self.active
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn game_over(&self) -> bool {
        self.status == Status::GameOver
    }

    pub fn seed(&self) -> u32 {
        self.rng.seed()
    }

    /// Apply one input command.
    ///
    /// Returns `true` if the active piece changed. Blocked moves, `Quit` and
    /// anything after game over leave the engine untouched.
    pub fn apply(&mut self, command: Command) -> bool {
        if self.game_over() {
            return false;
        }
        match command {
            Command::MoveLeft => self.try_move(-1, 0),
            Command::MoveRight => self.try_move(1, 0),
            Command::SoftDrop => self.try_move(0, 1),
            Command::Rotate => self.try_rotate(),
            Command::Quit => false,
        }
    }

    /// Move the active piece if the target placement is valid
    pub fn try_move(&mut self, dx: i8, dy: i8) -> bool {
        if !self.grid.is_valid_placement(&self.active, dx, dy) {
            return false;
        }
        self.active.translate(dx, dy);
        true
    }

    /// Rotate clockwise in place; no kicks, no re-centering
    pub fn try_rotate(&mut self) -> bool {
        let candidate = self.active.with_shape(self.active.rotated_copy());
        if !self.grid.is_valid_placement(&candidate, 0, 0) {
            return false;
        }
        self.active = candidate;
        true
    }

    /// One gravity step: fall one row, or lock and spawn the next piece
    pub fn tick(&mut self) -> TickOutcome {
        if self.game_over() {
            return TickOutcome::Idle;
        }

        if self.try_move(0, 1) {
            return TickOutcome::Fell;
        }

        let cleared = self.lock_piece();
        if self.game_over() {
            TickOutcome::GameOver
        } else {
            TickOutcome::Locked {
                lines_cleared: cleared.len() as u8,
            }
        }
    }

    /// Apply `commands` in order, run exactly one tick and return the result.
    pub fn step(&mut self, commands: &[Command]) -> Snapshot {
        for &command in commands {
            self.apply(command);
        }
        self.tick();
        self.snapshot()
    }

    /// Lock the active piece, clear full rows and spawn the next piece
    pub fn lock_piece(&mut self) -> ClearedRows {
        self.grid.lock(&self.active);
        log::debug!(
            "locked {} piece at ({}, {})",
            self.active.color.as_str(),
            self.active.x,
            self.active.y
        );

        let cleared = self.grid.clear_full_rows();
        if !cleared.is_empty() {
            log::debug!("cleared {} row(s): {:?}", cleared.len(), cleared.as_slice());
        }

        let spawned = self.spawn_piece();
        self.last_event = Some(LockEvent {
            lines_cleared: cleared.len() as u8,
            game_over: !spawned,
        });
        cleared
    }

    /// Replace the active piece with a new random one at the spawn origin.
    ///
    /// Returns `false` and ends the game if the new piece overlaps locked
    /// cells. The blocked piece stays active so the final frame shows it.
    pub fn spawn_piece(&mut self) -> bool {
        self.active = Piece::spawn(SPAWN_X, SPAWN_Y, &mut self.rng);
        if !self.grid.is_valid_placement(&self.active, 0, 0) {
            self.status = Status::GameOver;
            log::info!("game over: spawn blocked at ({}, {})", SPAWN_X, SPAWN_Y);
            return false;
        }
        log::trace!("spawned {} piece at ({}, {})", self.active.color.as_str(), SPAWN_X, SPAWN_Y);
        true
    }

    /// Take and clear the last lock event.
    pub fn take_last_event(&mut self) -> Option<LockEvent> {
        self.last_event.take()
    }

    pub fn snapshot_into(&self, out: &mut Snapshot) {
        self.grid.write_grid(&mut out.grid);
        out.active = Some(ActiveSnapshot::from(self.active));
        out.status = self.status;
    }

    pub fn snapshot(&self) -> Snapshot {
        let mut s = Snapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::shape_def;
    use crate::types::{Color, ShapeKind, BOARD_HEIGHT, BOARD_WIDTH};

    fn engine_with(kind: ShapeKind, x: i8, y: i8) -> Engine {
        Engine::from_parts(Grid::new(), Piece::from_def(shape_def(kind), x, y), 12345)
    }

    #[test]
    fn test_new_engine() {
        let engine = Engine::new(12345);
        assert_eq!(engine.status(), Status::Running);
        assert_eq!((engine.active().x, engine.active().y), (SPAWN_X, SPAWN_Y));
        assert!(engine.grid().cells().iter().all(|c| c.is_none()));
        assert_eq!(engine.seed(), 12345);
    }

    #[test]
    fn test_from_parts_detects_overlap() {
        let mut grid = Grid::new();
        grid.set(4, 0, Some(Color::Red));
        let piece = Piece::from_def(shape_def(ShapeKind::O), 4, 0);
        let engine = Engine::from_parts(grid, piece, 1);
        assert_eq!(engine.status(), Status::GameOver);
    }

    #[test]
    fn test_move_left_at_wall_is_noop() {
        let mut engine = engine_with(ShapeKind::T, 0, 5);
        assert!(!engine.apply(Command::MoveLeft));
        assert_eq!((engine.active().x, engine.active().y), (0, 5));
    }

    #[test]
    fn test_move_right_until_wall() {
        let mut engine = engine_with(ShapeKind::O, SPAWN_X, 0);
        let mut moves = 0;
        while engine.apply(Command::MoveRight) {
            moves += 1;
        }
        assert_eq!(moves, BOARD_WIDTH as i8 - 2 - SPAWN_X);
        assert_eq!(engine.active().x, BOARD_WIDTH as i8 - 2);
    }

    #[test]
    fn test_soft_drop_stops_at_floor() {
        let mut engine = engine_with(ShapeKind::O, 0, BOARD_HEIGHT as i8 - 3);
        assert!(engine.apply(Command::SoftDrop));
        assert!(!engine.apply(Command::SoftDrop));
        assert_eq!(engine.active().y, BOARD_HEIGHT as i8 - 2);
    }

    #[test]
    fn test_rotate_keeps_origin() {
        let mut engine = engine_with(ShapeKind::L, 4, 5);
        assert!(engine.apply(Command::Rotate));
        assert_eq!((engine.active().x, engine.active().y), (4, 5));
        assert_eq!(engine.active().shape, shape_def(ShapeKind::L).matrix.rotated_cw());
    }

    #[test]
    fn test_rotate_blocked_by_wall_is_discarded() {
        // Vertical I in the rightmost column: rotating back to horizontal
        // would stick out past the wall and there is no kick.
        let bar = Piece::from_def(shape_def(ShapeKind::I), 9, 5);
        let vertical = bar.with_shape(bar.rotated_copy());
        let mut engine = Engine::from_parts(Grid::new(), vertical, 1);
        assert!(!engine.apply(Command::Rotate));
        assert_eq!(engine.active(), &vertical);
    }

    #[test]
    fn test_rotate_blocked_by_locked_cell() {
        let mut grid = Grid::new();
        // T rotated clockwise occupies (4,6) which the spawn matrix does not.
        grid.set(4, 6, Some(Color::Blue));
        let piece = Piece::from_def(shape_def(ShapeKind::T), 4, 5);
        let mut engine = Engine::from_parts(grid, piece, 1);
        assert!(!engine.apply(Command::Rotate));
        assert_eq!(engine.active(), &piece);
    }

    #[test]
    fn test_quit_never_mutates() {
        let mut engine = Engine::new(7);
        let before = engine.snapshot();
        assert!(!engine.apply(Command::Quit));
        assert_eq!(engine.snapshot(), before);
    }

    #[test]
    fn test_tick_gravity() {
        let mut engine = engine_with(ShapeKind::T, SPAWN_X, 0);
        assert_eq!(engine.tick(), TickOutcome::Fell);
        assert_eq!(engine.active().y, 1);
    }

    #[test]
    fn test_tick_locks_on_floor() {
        let mut engine = engine_with(ShapeKind::O, 0, BOARD_HEIGHT as i8 - 2);
        assert_eq!(engine.tick(), TickOutcome::Locked { lines_cleared: 0 });
        assert_eq!(engine.grid().get(0, 18), Some(Some(Color::Yellow)));
        assert_eq!(engine.grid().get(1, 19), Some(Some(Color::Yellow)));
        assert_eq!((engine.active().x, engine.active().y), (SPAWN_X, SPAWN_Y));

        let ev = engine.take_last_event().unwrap();
        assert_eq!(ev.lines_cleared, 0);
        assert!(!ev.game_over);
        assert!(engine.take_last_event().is_none());
    }

    #[test]
    fn test_tick_reports_cleared_lines() {
        let mut grid = Grid::new();
        for x in 0..BOARD_WIDTH as i8 - 1 {
            grid.set(x, 19, Some(Color::Green));
        }
        // Vertical I dropping into the last column of row 19.
        let bar = Piece::from_def(shape_def(ShapeKind::I), 9, 16);
        let vertical = bar.with_shape(bar.rotated_copy());
        let mut engine = Engine::from_parts(grid, vertical, 3);

        assert_eq!(engine.tick(), TickOutcome::Locked { lines_cleared: 1 });
        // Three leftover I cells shifted down one row.
        for y in 17..20 {
            assert_eq!(engine.grid().get(9, y), Some(Some(Color::Cyan)));
        }
        assert_eq!(engine.grid().get(0, 19), Some(None));
    }

    #[test]
    fn test_game_over_is_terminal() {
        let mut engine = Engine::new(1);
        engine.status = Status::GameOver;
        let before = engine.snapshot();
        for cmd in [Command::MoveLeft, Command::MoveRight, Command::SoftDrop, Command::Rotate] {
            assert!(!engine.apply(cmd));
        }
        assert_eq!(engine.tick(), TickOutcome::Idle);
        assert_eq!(engine.snapshot(), before);
    }

    #[test]
    fn test_step_applies_commands_then_gravity() {
        let mut engine = engine_with(ShapeKind::O, SPAWN_X, 0);
        let snap = engine.step(&[Command::MoveLeft, Command::MoveLeft, Command::Quit]);
        let active = snap.active.unwrap();
        assert_eq!((active.x, active.y), (SPAWN_X - 2, 1));
        assert_eq!(snap.status, Status::Running);
    }

    #[test]
    fn test_snapshot_mirrors_state() {
        let mut engine = engine_with(ShapeKind::S, 2, 3);
        engine.grid.set(0, 19, Some(Color::Red));
        let snap = engine.snapshot();
        assert_eq!(snap.grid[19][0], Some(Color::Red));
        let active = snap.active.unwrap();
        assert_eq!((active.x, active.y, active.color), (2, 3, Color::Red));
        let cells: Vec<_> = active.cells().collect();
        let expected: Vec<_> = engine.active().cells().collect();
        assert_eq!(cells, expected);
    }
}
