use crate::Cell;
use crate::board::Board;
use crate::error::GoError;
use crate::stone::Stone;

/// A maximal 4-connected set of same-colored stones.
///
/// Members are stored as coordinates. Liberties and liveness are always
/// derived from the board passed in, never cached, since captures elsewhere
/// on the board change them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    stone: Stone,
    members: Vec<Cell>,
}

impl Group {
    /// Start a group from a single occupied cell.
    pub fn new(board: &Board, seed: Cell) -> Result<Self, GoError> {
        match board.stone_at(seed)? {
            Some(stone) => Ok(Group {
                stone,
                members: vec![seed],
            }),
            None => Err(GoError::EmptyCell(seed)),
        }
    }

    pub(crate) fn from_members(stone: Stone, members: Vec<Cell>) -> Self {
        Group { stone, members }
    }

    pub fn stone(&self) -> Stone {
        self.stone
    }

    pub fn members(&self) -> &[Cell] {
        &self.members
    }

    pub fn size(&self) -> usize {
        self.members.len()
    }

    pub fn contains(&self, cell: Cell) -> bool {
        self.members.contains(&cell)
    }

    /// Absorb the members of another group of the same color.
    pub fn merge(&mut self, other: Group) -> Result<(), GoError> {
        if other.stone != self.stone {
            return Err(GoError::ColorMismatch {
                expected: self.stone,
                found: other.stone,
            });
        }
        self.absorb(other);
        Ok(())
    }

    /// `merge` for callers that already matched colors.
    pub(crate) fn absorb(&mut self, other: Group) {
        self.members.extend(other.members);
    }

    /// Distinct empty cells adjacent to any member. A cell shared by several
    /// members is reported once.
    pub fn liberties(&self, board: &Board) -> Vec<Cell> {
        let mut seen = vec![false; board.len()];
        let mut libs = Vec::new();
        for &member in &self.members {
            for n in board.liberties_of(member) {
                let ni = board.idx(n);
                if !seen[ni] {
                    seen[ni] = true;
                    libs.push(n);
                }
            }
        }
        libs
    }

    pub fn is_alive(&self, board: &Board) -> bool {
        self.members
            .iter()
            .any(|&member| !board.liberties_of(member).is_empty())
    }

    /// Recreate this group's stones on another board and register the group
    /// there, merging it with any touching group of the same color.
    pub fn copy_into(&self, target: &mut Board) -> Result<(), GoError> {
        for &member in &self.members {
            if target.stone_at(member)?.is_some() {
                return Err(GoError::Overwrite(member));
            }
        }
        for &member in &self.members {
            target.set_stone(member, self.stone);
        }
        target.adopt(self.clone());
        Ok(())
    }
}
