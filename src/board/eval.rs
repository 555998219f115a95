use super::pst::piece_value;
use super::state::{Board, Position};
use super::{Color, PieceKind};

impl Board {
    /// Material and piece-square balance, White minus Black.
    #[must_use]
    pub fn material_balance(&self) -> i32 {
        PieceKind::ALL
            .iter()
            .map(|&kind| {
                let side: i32 = self
                    .pieces(kind)
                    .iter()
                    .map(|sq| piece_value(kind, sq))
                    .sum();
                side * kind.color().sign()
            })
            .sum()
    }
}

/// Static score from the side to move's point of view.
#[must_use]
pub fn evaluate(position: &Position) -> i32 {
    evaluate_for(&position.board, position.side_to_move)
}

#[inline]
pub(crate) fn evaluate_for(board: &Board, side: Color) -> i32 {
    board.material_balance() * side.sign()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{AttackTables, PositionBuilder};

    #[test]
    fn test_start_position_is_balanced() {
        assert_eq!(evaluate(&Position::starting()), 0);
    }

    #[test]
    fn test_extra_queen_counts_for_owner() {
        let tables = AttackTables::with_seed(12).unwrap();
        let rows = [
            "....k...", "........", "........", "........", "...Q....", "........",
            "........", "....K...",
        ];
        let white = PositionBuilder::diagram(&rows)
            .unwrap()
            .build(&tables)
            .unwrap();
        let black = PositionBuilder::diagram(&rows)
            .unwrap()
            .side_to_move(Color::Black)
            .build(&tables)
            .unwrap();

        assert!(evaluate(&white) > 800);
        assert_eq!(evaluate(&black), -evaluate(&white));
    }
}
