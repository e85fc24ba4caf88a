use serde::{Deserialize, Serialize};

use crate::Cell;
use crate::stone::Stone;

/// A committed move: who played where, and how many opponent stones it took.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    pub stone: Stone,
    pub cell: Cell,
    #[serde(default)]
    pub captured: u32,
}

impl Turn {
    pub fn play(stone: Stone, cell: Cell) -> Self {
        Turn {
            stone,
            cell,
            captured: 0,
        }
    }

    pub fn is_capture(&self) -> bool {
        self.captured > 0
    }
}
