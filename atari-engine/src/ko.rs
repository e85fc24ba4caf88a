use std::collections::VecDeque;

use crate::board::Board;
use crate::stone::Stone;

/// Recent positions produced by each color, newest last.
///
/// A move is a ko violation when the position it produces matches one the
/// same color has already produced within the remembered window. With a
/// depth of one this is the simple ko rule.
#[derive(Debug, Clone)]
pub struct KoHistory {
    depth: usize,
    positions: [VecDeque<Board>; 2],
}

impl KoHistory {
    pub fn new(depth: usize) -> Self {
        KoHistory {
            depth,
            positions: [VecDeque::new(), VecDeque::new()],
        }
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Remember the position `stone` just produced.
    pub fn record(&mut self, stone: Stone, board: &Board) {
        if self.depth == 0 {
            return;
        }
        let window = &mut self.positions[stone.index()];
        if window.len() == self.depth {
            window.pop_front();
        }
        window.push_back(board.clone());
    }

    /// True if `stone` has already produced this position.
    pub fn repeats(&self, stone: Stone, board: &Board) -> bool {
        self.positions[stone.index()]
            .iter()
            .any(|seen| seen.equals_position(board))
    }
}
