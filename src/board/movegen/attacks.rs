//! Check oracle: is a square attacked by a given side.
//!
//! Shared by castling-path checks and post-move check flagging, so both agree.

use super::super::attack_tables::AttackTables;
use super::super::state::Board;
use super::super::{Bitboard, Color, Piece, PieceKind, Square};

/// Squares from which a `by` pawn would capture onto `sq`.
#[inline]
fn pawn_sources(sq: Square, by: Color) -> Bitboard {
    let bit = Bitboard::from_square(sq);
    match by {
        Color::White => ((bit & !Bitboard::FILE_H) >> 7) | ((bit & !Bitboard::FILE_A) >> 9),
        Color::Black => ((bit & !Bitboard::FILE_A) << 7) | ((bit & !Bitboard::FILE_H) << 9),
    }
}

/// True if any piece of `by` attacks `sq` on `board`.
pub(crate) fn is_square_attacked(
    board: &Board,
    tables: &AttackTables,
    sq: Square,
    by: Color,
) -> bool {
    let kind = |piece| board.pieces(PieceKind::new(by, piece));

    if (pawn_sources(sq, by) & kind(Piece::Pawn)).is_nonempty() {
        return true;
    }
    if (tables.knight_attacks(sq) & kind(Piece::Knight)).is_nonempty() {
        return true;
    }
    if (tables.king_attacks(sq) & kind(Piece::King)).is_nonempty() {
        return true;
    }

    let occupied = board.occupied();
    let queens = kind(Piece::Queen);
    if (tables.bishop_attacks(sq, occupied) & (kind(Piece::Bishop) | queens)).is_nonempty() {
        return true;
    }
    (tables.rook_attacks(sq, occupied) & (kind(Piece::Rook) | queens)).is_nonempty()
}

/// True if `color`'s king stands on an attacked square.
#[inline]
pub(crate) fn king_attacked(board: &Board, tables: &AttackTables, color: Color) -> bool {
    debug_assert!(board.king_square(color).is_some(), "no {color} king");
    board
        .king_square(color)
        .is_some_and(|king| is_square_attacked(board, tables, king, color.opponent()))
}
