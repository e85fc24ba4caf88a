pub mod arbiter;
pub mod board;
pub mod error;
pub mod geometry;
pub mod group;
pub mod ko;
pub mod player;
pub mod rules;
pub mod stone;
pub mod turn;

/// A board coordinate as `(row, col)`, zero-based from the top-left corner.
pub type Cell = (u8, u8);

pub use arbiter::{Arbiter, GameState, Status};
pub use board::{Board, Captures, Placement};
pub use error::GoError;
pub use geometry::Direction;
pub use group::Group;
pub use ko::KoHistory;
pub use player::Player;
pub use rules::Rules;
pub use stone::Stone;
pub use turn::Turn;
