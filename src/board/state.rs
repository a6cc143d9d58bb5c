//! The immutable board snapshot.

use std::fmt;

use once_cell::sync::Lazy;

use super::player::{Player, PlayerState};
use super::{
    Alliance, BoardError, Builder, Move, Piece, Position, Square, BOARD_SIZE, NUM_SQUARES,
    NULL_MOVE,
};

static INITIAL_BOARD: Lazy<Board> = Lazy::new(|| Builder::starting_position().build());

/// A complete, immutable chess position.
///
/// A board is created once by [`Builder`] and never changes afterwards;
/// executing a move produces a new board. Each alliance's pseudo-legal moves
/// (plus castles) are computed at construction time and shared by every
/// [`Player`] view of the board.
#[derive(Clone, Debug)]
pub struct Board {
    squares: [Square; NUM_SQUARES],
    pieces: [Vec<Piece>; 2],
    players: [PlayerState; 2],
    mover: Alliance,
    en_passant_pawn: Option<Piece>,
    castled: [bool; 2],
}

impl Board {
    /// The standard initial position with White to move.
    #[must_use]
    pub fn initial() -> Board {
        INITIAL_BOARD.clone()
    }

    pub(crate) fn from_parts(
        config: [Option<Piece>; NUM_SQUARES],
        mover: Alliance,
        en_passant_pawn: Option<Piece>,
        castled: [bool; 2],
    ) -> Result<Board, BoardError> {
        let squares: [Square; NUM_SQUARES] =
            std::array::from_fn(|index| Square::new(Position::ALL[index], config[index]));

        let mut pieces: [Vec<Piece>; 2] = [Vec::with_capacity(16), Vec::with_capacity(16)];
        for piece in config.iter().flatten() {
            pieces[piece.alliance().index()].push(*piece);
        }

        let white_king = find_king(&pieces[0], Alliance::White)?;
        let black_king = find_king(&pieces[1], Alliance::Black)?;

        let mut board = Board {
            squares,
            pieces,
            players: [
                PlayerState::unresolved(white_king),
                PlayerState::unresolved(black_king),
            ],
            mover,
            en_passant_pawn,
            castled,
        };

        let white_moves = board.calculate_legal_moves(Alliance::White);
        let black_moves = board.calculate_legal_moves(Alliance::Black);
        let white = PlayerState::resolve(&board, white_king, &black_moves);
        let black = PlayerState::resolve(&board, black_king, &white_moves);
        board.players = [white.finish(white_moves), black.finish(black_moves)];

        Ok(board)
    }

    /// The square at `position`
    #[inline]
    #[must_use]
    pub fn square(&self, position: Position) -> &Square {
        &self.squares[position.index()]
    }

    /// The piece at `position`, if any
    #[inline]
    #[must_use]
    pub fn piece_at(&self, position: Position) -> Option<Piece> {
        self.squares[position.index()].piece()
    }

    #[inline]
    #[must_use]
    pub fn is_occupied(&self, position: Position) -> bool {
        self.squares[position.index()].is_occupied()
    }

    /// All squares in index order (a8 first, h1 last)
    #[must_use]
    pub fn squares(&self) -> &[Square; NUM_SQUARES] {
        &self.squares
    }

    /// Every piece of `alliance` on the board, in index order
    #[inline]
    #[must_use]
    pub fn active_pieces(&self, alliance: Alliance) -> &[Piece] {
        &self.pieces[alliance.index()]
    }

    /// The alliance whose turn it is
    #[inline]
    #[must_use]
    pub const fn mover(&self) -> Alliance {
        self.mover
    }

    #[must_use]
    pub fn player(&self, alliance: Alliance) -> Player<'_> {
        Player::new(self, alliance)
    }

    #[must_use]
    pub fn white_player(&self) -> Player<'_> {
        self.player(Alliance::White)
    }

    #[must_use]
    pub fn black_player(&self) -> Player<'_> {
        self.player(Alliance::Black)
    }

    /// The player whose turn it is
    #[must_use]
    pub fn current_player(&self) -> Player<'_> {
        self.player(self.mover)
    }

    /// The pawn that just made a two-square advance, if any
    #[inline]
    #[must_use]
    pub const fn en_passant_pawn(&self) -> Option<Piece> {
        self.en_passant_pawn
    }

    /// Whether `alliance` castled on the way to this position
    #[inline]
    #[must_use]
    pub const fn is_castled(&self, alliance: Alliance) -> bool {
        self.castled[alliance.index()]
    }

    pub(crate) fn player_state(&self, alliance: Alliance) -> &PlayerState {
        &self.players[alliance.index()]
    }

    /// White's legal moves followed by Black's
    pub fn all_legal_moves(&self) -> impl Iterator<Item = &Move> + '_ {
        self.players
            .iter()
            .flat_map(|player| player.legal_moves().iter())
    }

    /// The move from `from` to `to` among both players' moves, or
    /// [`NULL_MOVE`] if there is none.
    #[must_use]
    pub fn find_move(&self, from: Position, to: Position) -> Move {
        find_move(self, from, to)
    }
}

/// The move from `from` to `to`, or [`NULL_MOVE`] if no such move exists.
///
/// Both players' moves are scanned, so the result may belong to the side not
/// on move; [`Player::make_move`] rejects it as illegal.
#[must_use]
pub fn find_move(board: &Board, from: Position, to: Position) -> Move {
    board
        .all_legal_moves()
        .find(|mv| mv.current_position() == from && mv.destination() == to)
        .copied()
        .unwrap_or(NULL_MOVE)
}

/// The single king among `pieces`
fn find_king(pieces: &[Piece], alliance: Alliance) -> Result<Piece, BoardError> {
    let mut kings = pieces.iter().copied().filter(|piece| piece.kind().is_king());
    let king = kings.next().ok_or(BoardError::MissingKing { alliance })?;
    let extra = kings.count();
    if extra > 0 {
        return Err(BoardError::WrongKingCount {
            alliance,
            count: extra + 1,
        });
    }
    Ok(king)
}

impl Default for Board {
    fn default() -> Self {
        Board::initial()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, square) in self.squares.iter().enumerate() {
            write!(f, "{:>3}", square.to_string())?;
            if (index + 1) % BOARD_SIZE == 0 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
