//! Players, legality and move transitions.
//!
//! A [`Player`] is a borrowed view of one alliance on one board. The board
//! stores each alliance's king, move list and check status; the player
//! answers rule questions from them and plays moves, reporting the outcome as
//! a [`MoveTransition`].

use std::fmt;
use std::ptr;

use log::trace;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{Alliance, Board, Move, Piece, Position};

/// Per-alliance data computed once when a board is built.
#[derive(Clone, Debug)]
pub(crate) struct PlayerState {
    king: Piece,
    legal_moves: Vec<Move>,
    in_check: bool,
}

impl PlayerState {
    /// Placeholder used while the board's moves are being generated.
    pub(crate) fn unresolved(king: Piece) -> Self {
        PlayerState {
            king,
            legal_moves: Vec::new(),
            in_check: false,
        }
    }

    /// Check status and castles of `king`'s alliance; the move list holds
    /// only the castles until [`PlayerState::finish`] adds the piece moves.
    pub(crate) fn resolve(board: &Board, king: Piece, opponent_moves: &[Move]) -> Self {
        let in_check = calculate_attacks_on(king.position(), opponent_moves)
            .next()
            .is_some();
        let castles = board.calculate_castles(&king, in_check, opponent_moves);
        PlayerState {
            king,
            legal_moves: castles,
            in_check,
        }
    }

    pub(crate) fn finish(self, mut piece_moves: Vec<Move>) -> Self {
        piece_moves.extend(self.legal_moves);
        PlayerState {
            legal_moves: piece_moves,
            ..self
        }
    }

    pub(crate) fn legal_moves(&self) -> &[Move] {
        &self.legal_moves
    }
}

/// Moves in `moves` that land on `position`
pub fn calculate_attacks_on(position: Position, moves: &[Move]) -> impl Iterator<Item = &Move> {
    moves.iter().filter(move |mv| mv.destination() == position)
}

/// Outcome of trying to play a move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum MoveStatus {
    /// The move was played
    Done,
    /// The move is not among the player's legal moves
    IllegalMove,
    /// The move would leave the mover's king attacked
    InCheck,
}

impl MoveStatus {
    #[inline]
    #[must_use]
    pub const fn is_done(self) -> bool {
        matches!(self, MoveStatus::Done)
    }
}

impl fmt::Display for MoveStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveStatus::Done => write!(f, "done"),
            MoveStatus::IllegalMove => write!(f, "illegal move"),
            MoveStatus::InCheck => write!(f, "leaves player in check"),
        }
    }
}

/// The result of [`Player::make_move`].
///
/// Holds the resulting board when the move was played; otherwise
/// [`MoveTransition::board`] is the unchanged original board.
#[derive(Clone, Debug)]
pub struct MoveTransition<'a> {
    original: &'a Board,
    resulting: Option<Board>,
    mv: Move,
    status: MoveStatus,
}

impl<'a> MoveTransition<'a> {
    fn done(original: &'a Board, resulting: Board, mv: Move) -> Self {
        MoveTransition {
            original,
            resulting: Some(resulting),
            mv,
            status: MoveStatus::Done,
        }
    }

    fn rejected(original: &'a Board, mv: Move, status: MoveStatus) -> Self {
        MoveTransition {
            original,
            resulting: None,
            mv,
            status,
        }
    }

    /// The board after the move, or the original board if it was rejected
    #[must_use]
    pub fn board(&self) -> &Board {
        self.resulting.as_ref().unwrap_or(self.original)
    }

    /// The board the move was attempted on
    #[must_use]
    pub fn original_board(&self) -> &'a Board {
        self.original
    }

    #[must_use]
    pub fn mv(&self) -> Move {
        self.mv
    }

    #[must_use]
    pub fn status(&self) -> MoveStatus {
        self.status
    }

    /// The resulting board, only when the move was played
    #[must_use]
    pub fn into_board(self) -> Option<Board> {
        self.resulting
    }
}

/// One alliance's view of a board.
///
/// Two players are equal when they view the same board instance for the
/// same alliance.
#[derive(Clone, Copy, Debug)]
pub struct Player<'a> {
    board: &'a Board,
    alliance: Alliance,
}

impl<'a> Player<'a> {
    pub(crate) fn new(board: &'a Board, alliance: Alliance) -> Self {
        Player { board, alliance }
    }

    #[inline]
    #[must_use]
    pub fn alliance(&self) -> Alliance {
        self.alliance
    }

    #[inline]
    #[must_use]
    pub fn board(&self) -> &'a Board {
        self.board
    }

    #[must_use]
    pub fn opponent(&self) -> Player<'a> {
        Player::new(self.board, self.alliance.opponent())
    }

    #[must_use]
    pub fn king(&self) -> Piece {
        self.board.player_state(self.alliance).king
    }

    #[must_use]
    pub fn active_pieces(&self) -> &'a [Piece] {
        self.board.active_pieces(self.alliance)
    }

    /// Pseudo-legal piece moves followed by the available castles
    #[must_use]
    pub fn legal_moves(&self) -> &'a [Move] {
        self.board.player_state(self.alliance).legal_moves()
    }

    #[must_use]
    pub fn is_move_legal(&self, mv: &Move) -> bool {
        self.legal_moves().contains(mv)
    }

    /// Whether the opponent's moves attack this player's king
    #[must_use]
    pub fn is_in_check(&self) -> bool {
        self.board.player_state(self.alliance).in_check
    }

    #[must_use]
    pub fn is_in_checkmate(&self) -> bool {
        self.is_in_check() && !self.has_escape_moves()
    }

    #[must_use]
    pub fn is_in_stalemate(&self) -> bool {
        !self.is_in_check() && !self.has_escape_moves()
    }

    /// Whether this alliance has castled on the way to this board
    #[must_use]
    pub fn is_castled(&self) -> bool {
        self.board.is_castled(self.alliance)
    }

    /// Whether any legal move can be played without leaving the king attacked
    fn has_escape_moves(&self) -> bool {
        self.legal_moves()
            .iter()
            .any(|mv| self.make_move(*mv).status().is_done())
    }

    /// Try to play `mv` for this player.
    ///
    /// Moves outside [`Player::legal_moves`] are rejected as
    /// [`MoveStatus::IllegalMove`]; moves after which the opponent could
    /// capture the king are rejected as [`MoveStatus::InCheck`]. Rejected
    /// transitions carry the original board.
    #[must_use]
    pub fn make_move(&self, mv: Move) -> MoveTransition<'a> {
        if !self.is_move_legal(&mv) {
            trace!("{}: {mv} rejected, not a legal move", self.alliance);
            return MoveTransition::rejected(self.board, mv, MoveStatus::IllegalMove);
        }

        let next = mv.execute(self.board);
        let king_position = next.player(self.alliance).king().position();
        let replies = next.player(self.alliance.opponent()).legal_moves();
        let king_attacked = calculate_attacks_on(king_position, replies).next().is_some();
        if king_attacked {
            trace!("{}: {mv} rejected, king would be attacked", self.alliance);
            return MoveTransition::rejected(self.board, mv, MoveStatus::InCheck);
        }

        MoveTransition::done(self.board, next, mv)
    }
}

impl PartialEq for Player<'_> {
    fn eq(&self, other: &Self) -> bool {
        ptr::eq(self.board, other.board) && self.alliance == other.alliance
    }
}

impl Eq for Player<'_> {}

impl fmt::Display for Player<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.alliance)
    }
}
