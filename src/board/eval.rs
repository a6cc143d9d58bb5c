//! Static evaluation.
//!
//! Scores are from White's point of view: positive favours White. A side's
//! score is its material plus one point per legal move, plus bonuses for
//! checking the opponent, mating the opponent (scaled by the remaining search
//! depth so faster mates win) and having castled.

use super::{Alliance, Board};

/// Scores a board for the search.
pub trait BoardEvaluator {
    /// Score of `board` with `depth` plies left to search; positive favours White.
    fn evaluate(&self, board: &Board, depth: u32) -> i32;
}

/// Bonus sizes used by [`StandardEvaluator`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EvalWeights {
    /// Awarded when the opponent is in check
    pub check_bonus: i32,
    /// Awarded when the opponent is checkmated, before depth scaling
    pub checkmate_bonus: i32,
    /// Depth multiplier for the checkmate bonus
    pub depth_bonus: i32,
    /// Awarded once the side has castled
    pub castle_bonus: i32,
}

impl Default for EvalWeights {
    fn default() -> Self {
        EvalWeights {
            check_bonus: 50,
            checkmate_bonus: 10_000,
            depth_bonus: 10,
            castle_bonus: 60,
        }
    }
}

/// Material, mobility, check, checkmate and castling evaluation.
#[derive(Clone, Debug, Default)]
pub struct StandardEvaluator {
    weights: EvalWeights,
}

impl StandardEvaluator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_weights(weights: EvalWeights) -> Self {
        StandardEvaluator { weights }
    }

    #[must_use]
    pub fn weights(&self) -> &EvalWeights {
        &self.weights
    }

    /// Score of one side, always non-negative.
    #[must_use]
    pub fn score_player(&self, board: &Board, alliance: Alliance, depth: u32) -> i32 {
        let player = board.player(alliance);
        let opponent = player.opponent();

        let material: i32 = player.active_pieces().iter().map(|piece| piece.value()).sum();
        let mobility = player.legal_moves().len() as i32;
        let check = if opponent.is_in_check() {
            self.weights.check_bonus
        } else {
            0
        };
        let checkmate = if opponent.is_in_checkmate() {
            self.weights.checkmate_bonus * self.depth_multiplier(depth)
        } else {
            0
        };
        let castled = if player.is_castled() {
            self.weights.castle_bonus
        } else {
            0
        };

        material + mobility + check + checkmate + castled
    }

    fn depth_multiplier(&self, depth: u32) -> i32 {
        if depth == 0 {
            1
        } else {
            self.weights.depth_bonus * depth as i32
        }
    }
}

impl BoardEvaluator for StandardEvaluator {
    fn evaluate(&self, board: &Board, depth: u32) -> i32 {
        self.score_player(board, Alliance::White, depth)
            - self.score_player(board, Alliance::Black, depth)
    }
}
