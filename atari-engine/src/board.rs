use std::fmt;

use arrayvec::ArrayVec;
use serde::{Deserialize, Serialize};

use crate::Cell;
use crate::error::GoError;
use crate::geometry::Direction;
use crate::group::Group;
use crate::stone::Stone;

/// Captured stones, indexed by the color of the stones that were taken off
/// the board.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Captures {
    pub black: u32,
    pub white: u32,
}

impl Captures {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stones of this color that have been captured.
    pub fn get(&self, stone: Stone) -> u32 {
        match stone {
            Stone::Black => self.black,
            Stone::White => self.white,
        }
    }

    /// Prisoners taken by this color.
    pub fn taken_by(&self, stone: Stone) -> u32 {
        self.get(stone.opp())
    }

    fn add(&mut self, stone: Stone, count: u32) {
        match stone {
            Stone::Black => self.black += count,
            Stone::White => self.white += count,
        }
    }
}

/// What capture resolution removed after a single placement.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Placement {
    /// Opponent stones taken off the board.
    pub captured: Vec<Cell>,
    /// The mover's own stones taken off the board (self-capture).
    pub lost: Vec<Cell>,
}

impl Placement {
    pub fn is_capture(&self) -> bool {
        !self.captured.is_empty()
    }

    pub fn is_suicide(&self) -> bool {
        !self.lost.is_empty()
    }
}

/// An R x C Go board stored as a flat row-major array, together with the
/// groups currently on it and the running capture counters.
///
/// Every occupied cell belongs to exactly one group and groups are maximal;
/// `place` restores both before resolving captures.
#[derive(Debug, Clone)]
pub struct Board {
    cells: Vec<Option<Stone>>,
    rows: u8,
    cols: u8,
    groups: Vec<Group>,
    captures: Captures,
}

impl Board {
    /// Create an empty board. Both dimensions must be in `1..=255`.
    pub fn new(rows: usize, cols: usize) -> Result<Self, GoError> {
        let invalid = GoError::InvalidDimensions { rows, cols };
        let r = u8::try_from(rows).map_err(|_| invalid.clone())?;
        let c = u8::try_from(cols).map_err(|_| invalid.clone())?;
        if r == 0 || c == 0 {
            return Err(invalid);
        }
        Ok(Self::blank(r, c))
    }

    /// Build a board from a row-major matrix of stone values (see
    /// `Stone::from_int`). Stones are grouped as found; no captures are
    /// resolved.
    pub fn from_matrix(matrix: Vec<Vec<i8>>) -> Result<Self, GoError> {
        let rows = matrix.len();
        let cols = matrix.first().map_or(0, Vec::len);
        if let Some(bad) = matrix.iter().find(|row| row.len() != cols) {
            return Err(GoError::InvalidDimensions {
                rows,
                cols: bad.len(),
            });
        }

        let cells = matrix.into_iter().flatten().collect();
        Self::from_state(cells, rows, cols, Captures::new())
    }

    /// Restore a board from row-major stone values and capture counters, as
    /// stored in a game state snapshot. Stones are regrouped by flood fill.
    pub fn from_state(
        cells: Vec<i8>,
        rows: usize,
        cols: usize,
        captures: Captures,
    ) -> Result<Self, GoError> {
        let mut board = Self::new(rows, cols)?;
        if cells.len() != board.len() {
            return Err(GoError::InvalidDimensions { rows, cols });
        }
        board.cells = cells.into_iter().map(Stone::from_int).collect();
        board.captures = captures;
        board.regroup();
        Ok(board)
    }

    fn blank(rows: u8, cols: u8) -> Self {
        Board {
            cells: vec![None; rows as usize * cols as usize],
            rows,
            cols,
            groups: Vec::new(),
            captures: Captures::new(),
        }
    }

    // -- Accessors --

    pub fn rows(&self) -> u8 {
        self.rows
    }

    pub fn cols(&self) -> u8 {
        self.cols
    }

    pub fn captures(&self) -> &Captures {
        &self.captures
    }

    /// Stones of `stone`'s color captured so far.
    pub fn captured_count(&self, stone: Stone) -> u32 {
        self.captures.get(stone)
    }

    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    pub fn group_at(&self, cell: Cell) -> Option<&Group> {
        self.groups.iter().find(|g| g.contains(cell))
    }

    pub fn on_board(&self, (row, col): Cell) -> bool {
        row < self.rows && col < self.cols
    }

    pub fn stone_at(&self, cell: Cell) -> Result<Option<Stone>, GoError> {
        let i = self.index(cell)?;
        Ok(self.cells[i])
    }

    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(Option::is_none)
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    pub fn count_stones(&self, stone: Stone) -> usize {
        self.cells.iter().filter(|&&c| c == Some(stone)).count()
    }

    /// Empty cells in row-major order.
    pub fn empty_cells(&self) -> impl Iterator<Item = Cell> + '_ {
        (0..self.rows)
            .flat_map(move |row| (0..self.cols).map(move |col| (row, col)))
            .filter(move |&cell| self.cells[self.idx(cell)].is_none())
    }

    /// Stone values in row-major order, 0 for empty cells.
    pub fn to_ints(&self) -> Vec<i8> {
        self.cells
            .iter()
            .map(|c| c.map_or(0, Stone::to_int))
            .collect()
    }

    /// Same dimensions and the same color on every cell. Capture counters
    /// are not compared.
    pub fn equals_position(&self, other: &Board) -> bool {
        self.rows == other.rows && self.cols == other.cols && self.cells == other.cells
    }

    // -- Adjacency --

    /// On-board orthogonal neighbors, visited north, east, south, west.
    pub fn neighbors(&self, cell: Cell) -> ArrayVec<Cell, 4> {
        Direction::ALL
            .iter()
            .filter_map(|d| d.step(cell, self.rows, self.cols))
            .collect()
    }

    /// Empty orthogonal neighbors of a single cell.
    pub fn liberties_of(&self, cell: Cell) -> ArrayVec<Cell, 4> {
        self.neighbors(cell)
            .into_iter()
            .filter(|&n| self.cells[self.idx(n)].is_none())
            .collect()
    }

    /// Flood-fill the connected stones of one color starting at `cell`.
    pub fn chain(&self, cell: Cell) -> Vec<Cell> {
        let stone = match self.stone_at(cell) {
            Ok(Some(s)) => s,
            _ => return Vec::new(),
        };

        let mut visited = vec![false; self.cells.len()];
        let mut result = Vec::new();
        let mut stack = vec![cell];

        while let Some(p) = stack.pop() {
            let vi = self.idx(p);
            if visited[vi] {
                continue;
            }
            visited[vi] = true;
            result.push(p);
            for n in self.neighbors(p) {
                if self.cells[self.idx(n)] == Some(stone) && !visited[self.idx(n)] {
                    stack.push(n);
                }
            }
        }

        result
    }

    // -- Placement --

    /// Put a stone on an empty cell, merge it with touching friendly groups,
    /// then resolve captures.
    ///
    /// Dead opponent groups are removed first. Only when none died, and the
    /// board still has an empty cell, is the mover's own group removed if it
    /// has no liberties left.
    pub fn place(&mut self, cell: Cell, stone: Stone) -> Result<Placement, GoError> {
        let i = self.index(cell)?;
        if self.cells[i].is_some() {
            return Err(GoError::Overwrite(cell));
        }

        self.cells[i] = Some(stone);
        self.adopt(Group::from_members(stone, vec![cell]));

        let captured = self.remove_dead(stone.opp());
        let lost = if captured.is_empty() && !self.is_full() {
            self.remove_own_dead(cell)
        } else {
            Vec::new()
        };

        let (row, col) = cell;
        if !captured.is_empty() {
            tracing::debug!(
                "{stone} at ({row}, {col}) captured {} stones",
                captured.len()
            );
        }
        if !lost.is_empty() {
            tracing::debug!("{stone} at ({row}, {col}) lost {} own stones", lost.len());
        }

        Ok(Placement { captured, lost })
    }

    /// Apply a placement to a copy of this board, leaving `self` untouched.
    pub fn resolve(&self, cell: Cell, stone: Stone) -> Result<(Board, Placement), GoError> {
        let mut board = self.clone();
        let placement = board.place(cell, stone)?;
        Ok((board, placement))
    }

    /// Place a stone and return the resulting board. Self-capture is refused.
    pub fn play(&self, cell: Cell, stone: Stone) -> Result<Board, GoError> {
        let (board, placement) = self.resolve(cell, stone)?;
        if placement.is_suicide() {
            return Err(GoError::Suicide(cell));
        }
        Ok(board)
    }

    /// Register a group whose stones are already on the grid, merging every
    /// same-colored group that touches it.
    pub(crate) fn adopt(&mut self, mut group: Group) {
        let stone = group.stone();
        let (touching, rest): (Vec<Group>, Vec<Group>) = std::mem::take(&mut self.groups)
            .into_iter()
            .partition(|g| g.stone() == stone && self.touches(g, &group));
        self.groups = rest;
        for g in touching {
            group.absorb(g);
        }
        self.groups.push(group);
    }

    fn touches(&self, a: &Group, b: &Group) -> bool {
        b.members()
            .iter()
            .any(|&m| self.neighbors(m).iter().any(|&n| a.contains(n)))
    }

    /// Remove every group of `stone`'s color with no liberties and credit
    /// the capture counter. Deadness is decided for all groups before any
    /// stone is cleared.
    fn remove_dead(&mut self, stone: Stone) -> Vec<Cell> {
        let (dead, alive): (Vec<Group>, Vec<Group>) = std::mem::take(&mut self.groups)
            .into_iter()
            .partition(|g| g.stone() == stone && !g.is_alive(self));
        self.groups = alive;
        self.clear_groups(stone, dead)
    }

    fn remove_own_dead(&mut self, cell: Cell) -> Vec<Cell> {
        let Some(pos) = self.groups.iter().position(|g| g.contains(cell)) else {
            return Vec::new();
        };
        if self.groups[pos].is_alive(self) {
            return Vec::new();
        }
        let group = self.groups.swap_remove(pos);
        self.clear_groups(group.stone(), vec![group])
    }

    fn clear_groups(&mut self, stone: Stone, groups: Vec<Group>) -> Vec<Cell> {
        let mut removed = Vec::new();
        for group in groups {
            for &member in group.members() {
                let i = self.idx(member);
                self.cells[i] = None;
            }
            removed.extend_from_slice(group.members());
        }
        self.captures.add(stone, removed.len() as u32);
        removed
    }

    /// Rebuild the group list from the grid by flood fill.
    fn regroup(&mut self) {
        let mut seen = vec![false; self.cells.len()];
        let mut groups = Vec::new();
        for i in 0..self.cells.len() {
            let Some(stone) = self.cells[i] else {
                continue;
            };
            if seen[i] {
                continue;
            }
            let cell = self.cell_of(i);
            let members = self.chain(cell);
            for &m in &members {
                seen[self.idx(m)] = true;
            }
            groups.push(Group::from_members(stone, members));
        }
        self.groups = groups;
    }

    // -- Internal helpers --

    pub(crate) fn len(&self) -> usize {
        self.cells.len()
    }

    /// Flat index of an on-board cell.
    #[inline]
    pub(crate) fn idx(&self, (row, col): Cell) -> usize {
        row as usize * self.cols as usize + col as usize
    }

    fn cell_of(&self, i: usize) -> Cell {
        let cols = self.cols as usize;
        ((i / cols) as u8, (i % cols) as u8)
    }

    fn index(&self, cell: Cell) -> Result<usize, GoError> {
        if self.on_board(cell) {
            Ok(self.idx(cell))
        } else {
            Err(GoError::NotOnBoard {
                cell,
                rows: self.rows,
                cols: self.cols,
            })
        }
    }

    pub(crate) fn set_stone(&mut self, cell: Cell, stone: Stone) {
        let i = self.idx(cell);
        self.cells[i] = Some(stone);
    }
}

/// Rows of stone letters (`B`, `W`) with `+` for empty cells.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.rows {
            for col in 0..self.cols {
                let c = self.cells[self.idx((row, col))].map_or('+', Stone::letter);
                write!(f, "{c}")?;
            }
            if row + 1 < self.rows {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
