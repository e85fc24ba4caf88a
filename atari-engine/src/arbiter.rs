use std::fmt;

use serde::{Deserialize, Serialize};

use crate::Cell;
use crate::board::{Board, Captures, Placement};
use crate::error::GoError;
use crate::ko::KoHistory;
use crate::player::Player;
use crate::rules::Rules;
use crate::stone::Stone;
use crate::turn::Turn;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    Playing,
    Won(Stone),
    /// The board filled up before either side reached the capture threshold.
    Drawn,
}

impl Status {
    pub fn is_finished(&self) -> bool {
        !matches!(self, Status::Playing)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::Playing => write!(f, "playing"),
            Status::Won(stone) => write!(f, "{stone} won"),
            Status::Drawn => write!(f, "drawn"),
        }
    }
}

/// What a front end needs to draw the game: the position, counters, side to
/// move and outcome.
///
/// Players, rules and the move log are not part of it. `Arbiter::from_state`
/// resumes play from a snapshot given the rules; ko then only knows the
/// restored position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    pub board: Vec<i8>,
    pub rows: u8,
    pub cols: u8,
    pub captures: Captures,
    pub turn: Stone,
    pub status: Status,
}

/// Referee for one game: owns the authoritative board, decides whose turn it
/// is, which moves are legal and when the game is over.
///
/// Legality is checked by simulating the move on a copy of the board; the
/// authoritative board only changes through `play`.
#[derive(Debug, Clone)]
pub struct Arbiter {
    board: Board,
    rules: Rules,
    players: [Option<Player>; 2],
    turn: Stone,
    ko: KoHistory,
    moves: Vec<Turn>,
}

impl Arbiter {
    pub fn new(rows: usize, cols: usize, rules: Rules) -> Result<Self, GoError> {
        rules.validate()?;
        let board = Board::new(rows, cols)?;
        Ok(Arbiter {
            board,
            rules,
            players: [None, None],
            turn: Stone::Black,
            ko: KoHistory::new(rules.ko_history),
            moves: Vec::new(),
        })
    }

    pub fn basic(rows: usize, cols: usize) -> Result<Self, GoError> {
        Self::new(rows, cols, Rules::basic())
    }

    pub fn advanced(rows: usize, cols: usize, capture_threshold: u32) -> Result<Self, GoError> {
        Self::new(rows, cols, Rules::advanced(capture_threshold)?)
    }

    /// Replay a move log from an empty board. Fails on the first turn that
    /// is out of order or illegal.
    pub fn with_moves(
        rows: usize,
        cols: usize,
        rules: Rules,
        moves: &[Turn],
    ) -> Result<Self, GoError> {
        let mut arbiter = Self::new(rows, cols, rules)?;
        for turn in moves {
            if turn.stone != arbiter.turn {
                return Err(GoError::OutOfTurn(turn.stone));
            }
            arbiter.play(turn.cell)?;
        }
        Ok(arbiter)
    }

    /// Resume a game from a snapshot. The restored position counts as
    /// produced by the side that just moved, so it cannot be recreated by
    /// that side under ko.
    pub fn from_state(state: &GameState, rules: Rules) -> Result<Self, GoError> {
        rules.validate()?;
        let board = Board::from_state(
            state.board.clone(),
            state.rows as usize,
            state.cols as usize,
            state.captures.clone(),
        )?;
        let mut ko = KoHistory::new(rules.ko_history);
        ko.record(state.turn.opp(), &board);
        Ok(Arbiter {
            board,
            rules,
            players: [None, None],
            turn: state.turn,
            ko,
            moves: Vec::new(),
        })
    }

    // -- Players and turns --

    /// Seat a player in the first free slot: Black, then White. Returns the
    /// assigned color, or `None` once both seats are taken.
    pub fn register_player(&mut self, name: impl Into<String>) -> Option<Stone> {
        let slot = self.players.iter().position(Option::is_none)?;
        let stone = Stone::ALL[slot];
        let player = Player::new(name, stone);
        tracing::trace!("registered {player}");
        self.players[slot] = Some(player);
        Some(stone)
    }

    pub fn player(&self, stone: Stone) -> Option<&Player> {
        self.players[stone.index()].as_ref()
    }

    pub fn current_player(&self) -> Option<&Player> {
        self.player(self.turn)
    }

    pub fn other_player(&self) -> Option<&Player> {
        self.player(self.turn.opp())
    }

    /// The color to move.
    pub fn turn(&self) -> Stone {
        self.turn
    }

    pub fn toggle_turn(&mut self) {
        self.turn = self.turn.opp();
    }

    // -- Accessors --

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn rules(&self) -> &Rules {
        &self.rules
    }

    pub fn moves(&self) -> &[Turn] {
        &self.moves
    }

    pub fn ko(&self) -> &KoHistory {
        &self.ko
    }

    pub fn rows(&self) -> u8 {
        self.board.rows()
    }

    pub fn cols(&self) -> u8 {
        self.board.cols()
    }

    pub fn stone_at(&self, cell: Cell) -> Result<Option<Stone>, GoError> {
        self.board.stone_at(cell)
    }

    pub fn captured_count(&self, stone: Stone) -> u32 {
        self.board.captured_count(stone)
    }

    // -- Legality --

    /// The board that playing `cell` for the side to move would produce.
    /// Nothing on `self` changes.
    pub fn try_move(&self, cell: Cell) -> Result<Board, GoError> {
        self.simulate(cell).map(|(board, _)| board)
    }

    pub fn is_legal_move(&self, cell: Cell) -> bool {
        match self.try_move(cell) {
            Ok(_) => true,
            Err(e) if e.is_illegal_move() => {
                tracing::trace!("{} may not play ({}, {}): {e}", self.turn, cell.0, cell.1);
                false
            }
            Err(e) => {
                tracing::debug!("move check failed: {e}");
                false
            }
        }
    }

    /// Every cell the side to move may legally play, in row-major order.
    pub fn legal_moves(&self) -> Vec<Cell> {
        self.board
            .empty_cells()
            .filter(|&cell| self.is_legal_move(cell))
            .collect()
    }

    fn simulate(&self, cell: Cell) -> Result<(Board, Placement), GoError> {
        let (board, placement) = self.board.resolve(cell, self.turn)?;
        if placement.is_suicide() {
            return Err(GoError::Suicide(cell));
        }
        if self.rules.ko_enabled() && self.ko.repeats(self.turn, &board) {
            return Err(GoError::KoViolation(cell));
        }
        Ok((board, placement))
    }

    // -- Game actions --

    /// Play `cell` for the side to move and hand the turn over.
    ///
    /// The move is validated on a copy first; on any error the game is left
    /// exactly as it was.
    pub fn play(&mut self, cell: Cell) -> Result<Status, GoError> {
        if self.is_finished() {
            return Err(GoError::GameOver);
        }

        let stone = self.turn;
        let (board, placement) = self.simulate(cell).inspect_err(|e| {
            tracing::debug!("rejected {stone} at ({}, {}): {e}", cell.0, cell.1);
        })?;

        let turn = Turn {
            stone,
            cell,
            captured: placement.captured.len() as u32,
        };
        if turn.is_capture() {
            tracing::debug!(
                "{stone} took {} stones, {} total",
                turn.captured,
                board.captures().taken_by(stone)
            );
        }
        self.ko.record(stone, &board);
        self.moves.push(turn);
        self.board = board;
        self.toggle_turn();

        let status = self.status();
        if status.is_finished() {
            tracing::info!("game over after {} moves: {status}", self.moves.len());
            tracing::debug!("final position:\n{}", self.board);
        }
        Ok(status)
    }

    // -- Outcome --

    /// The color whose opponent has lost at least `capture_threshold`
    /// stones. The side to move is checked first.
    pub fn winner_stone(&self) -> Option<Stone> {
        let threshold = self.rules.capture_threshold;
        [self.turn, self.turn.opp()]
            .into_iter()
            .find(|&stone| self.board.captured_count(stone) >= threshold)
            .map(Stone::opp)
    }

    pub fn winner(&self) -> Option<&Player> {
        self.winner_stone().and_then(|stone| self.player(stone))
    }

    pub fn status(&self) -> Status {
        match self.winner_stone() {
            Some(stone) => Status::Won(stone),
            None if self.board.is_full() => Status::Drawn,
            None => Status::Playing,
        }
    }

    pub fn is_finished(&self) -> bool {
        self.status().is_finished()
    }

    // -- Serialization --

    pub fn game_state(&self) -> GameState {
        GameState {
            board: self.board.to_ints(),
            rows: self.board.rows(),
            cols: self.board.cols(),
            captures: self.board.captures().clone(),
            turn: self.turn,
            status: self.status(),
        }
    }
}
