//! Shared types and constants for the engine, input and terminal crates.
//!
//! Everything here is plain data with no dependencies, so it can be used from
//! the core engine, the key map and the renderer alike.
//!
//! # Grid Dimensions
//!
//! - **Width**: 10 columns (indexed 0-9)
//! - **Height**: 20 rows (indexed 0-19, row 0 at the top)
//! - **Spawn origin**: (`BOARD_WIDTH / 2 - 1`, 0) = (4, 0)
//!
//! # Timing
//!
//! The engine does not pace itself. The host calls the engine once per tick at
//! a constant cadence of [`TICK_MS`] (5 ticks per second).
//!
//! # Examples
//!
//! ```
//! use tetris_tick_types::{Color, Command, ShapeKind, BOARD_HEIGHT, BOARD_WIDTH, SPAWN_X};
//!
//! assert_eq!(Command::from_str("moveLeft"), Some(Command::MoveLeft));
//! assert_eq!(Command::from_str("jump"), None);
//!
//! assert_eq!(ShapeKind::ALL[0].index(), 0);
//! assert_eq!(Color::Cyan.rgb(), (0, 255, 255));
//!
//! assert_eq!(BOARD_WIDTH, 10);
//! assert_eq!(BOARD_HEIGHT, 20);
//! assert_eq!(SPAWN_X, 4);
//! ```

/// Grid width in cells (10 columns)
pub const BOARD_WIDTH: u8 = 10;

/// Grid height in cells (20 rows)
pub const BOARD_HEIGHT: u8 = 20;

/// Column of a freshly spawned piece's origin
pub const SPAWN_X: i8 = (BOARD_WIDTH / 2) as i8 - 1;

/// Row of a freshly spawned piece's origin
pub const SPAWN_Y: i8 = 0;

/// Fixed tick interval in milliseconds (200ms = 5 ticks per second)
pub const TICK_MS: u32 = 200;

/// Number of entries in the shape catalog
pub const SHAPE_COUNT: usize = 7;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spawn_origin_is_left_of_center() {
        assert_eq!(SPAWN_X, 4);
        assert_eq!(SPAWN_Y, 0);
    }

    #[test]
    fn shape_index_matches_catalog_order() {
        for (i, kind) in ShapeKind::ALL.iter().enumerate() {
            assert_eq!(kind.index(), i);
        }
        assert_eq!(ShapeKind::ALL.len(), SHAPE_COUNT);
    }

    #[test]
    fn command_parsing_is_case_insensitive() {
        assert_eq!(Command::from_str("ROTATE"), Some(Command::Rotate));
        assert_eq!(Command::from_str("softdrop"), Some(Command::SoftDrop));
        assert_eq!(Command::from_str(""), None);
        for cmd in [
            Command::MoveLeft,
            Command::MoveRight,
            Command::SoftDrop,
            Command::Rotate,
            Command::Quit,
        ] {
            assert_eq!(Command::from_str(cmd.as_str()), Some(cmd));
        }
    }
}

/// Colour of a locked cell or the active piece.
///
/// Each catalog shape owns exactly one colour, so a colour is also the only
/// identity a locked cell keeps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Cyan,
    Yellow,
    Purple,
    Blue,
    Orange,
    Green,
    Red,
}

impl Color {
    /// 24-bit RGB value used by the renderer
    pub fn rgb(&self) -> (u8, u8, u8) {
        match self {
            Color::Cyan => (0, 255, 255),
            Color::Yellow => (255, 255, 0),
            Color::Purple => (255, 0, 255),
            Color::Blue => (0, 0, 255),
            Color::Orange => (255, 165, 0),
            Color::Green => (0, 255, 0),
            Color::Red => (255, 0, 0),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Color::Cyan => "cyan",
            Color::Yellow => "yellow",
            Color::Purple => "purple",
            Color::Blue => "blue",
            Color::Orange => "orange",
            Color::Green => "green",
            Color::Red => "red",
        }
    }
}

/// A cell on the grid
///
/// - `None`: Empty cell
/// - `Some(Color)`: Locked cell with the colour of the piece that landed there
pub type Cell = Option<Color>;

/// The seven catalog shapes, in catalog order.
///
/// Names follow the geometry of the spawn matrix:
/// - **I**: 1x4 bar
/// - **O**: 2x2 square
/// - **T**: T-shape, stem down
/// - **L**: 2x3, foot on the left
/// - **J**: 2x3, foot on the right
/// - **Z**: 2x3, top row shifted left
/// - **S**: 2x3, top row shifted right
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    I,
    O,
    T,
    L,
    J,
    Z,
    S,
}

impl ShapeKind {
    /// All kinds in catalog order
    pub const ALL: [ShapeKind; SHAPE_COUNT] = [
        ShapeKind::I,
        ShapeKind::O,
        ShapeKind::T,
        ShapeKind::L,
        ShapeKind::J,
        ShapeKind::Z,
        ShapeKind::S,
    ];

    /// Position in the catalog
    pub fn index(&self) -> usize {
        match self {
            ShapeKind::I => 0,
            ShapeKind::O => 1,
            ShapeKind::T => 2,
            ShapeKind::L => 3,
            ShapeKind::J => 4,
            ShapeKind::Z => 5,
            ShapeKind::S => 6,
        }
    }
}

/// Discrete input commands fed to the engine, one per key-press edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Move piece one cell down
    SoftDrop,
    /// Rotate piece 90° clockwise (no wall kicks)
    Rotate,
    /// Terminate the session; never mutates the engine
    Quit,
}

impl Command {
    /// Parse a command name (case-insensitive)
    ///
    /// Unknown names return `None` and are meant to be ignored by callers.
    ///
    /// # Examples
    ///
    /// ```
    /// use tetris_tick_types::Command;
    ///
    /// assert_eq!(Command::from_str("moveRight"), Some(Command::MoveRight));
    /// assert_eq!(Command::from_str("quit"), Some(Command::Quit));
    /// assert_eq!(Command::from_str("hardDrop"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveleft" => Some(Command::MoveLeft),
            "moveright" => Some(Command::MoveRight),
            "softdrop" => Some(Command::SoftDrop),
            "rotate" => Some(Command::Rotate),
            "quit" => Some(Command::Quit),
            _ => None,
        }
    }

    /// camelCase name, the inverse of [`Command::from_str`]
    pub fn as_str(&self) -> &'static str {
        match self {
            Command::MoveLeft => "moveLeft",
            Command::MoveRight => "moveRight",
            Command::SoftDrop => "softDrop",
            Command::Rotate => "rotate",
            Command::Quit => "quit",
        }
    }
}
