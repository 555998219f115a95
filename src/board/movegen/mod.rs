//! Legal successor generation.
//!
//! Each candidate is built by copying the parent position and applying the
//! move's mask changes to the copy. It is kept only if the mover's king is
//! safe, and it carries the opponent's check flag.

mod attacks;
mod kings;
mod knights;
mod pawns;
mod sliders;

pub(crate) use attacks::{is_square_attacked, king_attacked};

use super::attack_tables::{AttackTables, Slider};
use super::state::Position;
use super::{corner_right, Bitboard, Color, Move, MoveFlags, Piece, PieceKind, Square};

/// Upper bound on legal successors seen in typical positions.
const SUCCESSOR_CAPACITY: usize = 48;

/// Every legal successor of `position` for its side to move.
pub(crate) fn legal_successors(position: &Position, tables: &AttackTables) -> Vec<Position> {
    let gen = Generator::new(position, tables);
    let mut out = Vec::with_capacity(SUCCESSOR_CAPACITY);
    for &kind in PieceKind::of(gen.us) {
        for from in position.board.pieces(kind).iter() {
            gen.piece_moves(kind, from, &mut out);
        }
    }
    out
}

/// Legal successors that move the piece standing on `from`.
pub(crate) fn successors_from(
    position: &Position,
    tables: &AttackTables,
    from: Square,
) -> Vec<Position> {
    let mut out = Vec::new();
    match position.piece_at(from) {
        Some(kind) if kind.color() == position.side_to_move => {
            Generator::new(position, tables).piece_moves(kind, from, &mut out);
        }
        _ => {}
    }
    out
}

pub(crate) fn has_legal_successor(position: &Position, tables: &AttackTables) -> bool {
    let gen = Generator::new(position, tables);
    let mut out = Vec::new();
    for &kind in PieceKind::of(gen.us) {
        for from in position.board.pieces(kind).iter() {
            gen.piece_moves(kind, from, &mut out);
            if !out.is_empty() {
                return true;
            }
        }
    }
    false
}

/// Per-position generation context.
pub(crate) struct Generator<'a> {
    pub(super) position: &'a Position,
    pub(super) tables: &'a AttackTables,
    pub(super) us: Color,
    pub(super) own: Bitboard,
    pub(super) enemy: Bitboard,
    pub(super) occupied: Bitboard,
    /// Enemy kinds a move may capture, scanned in order.
    victims: &'static [PieceKind],
}

impl<'a> Generator<'a> {
    pub(crate) fn new(position: &'a Position, tables: &'a AttackTables) -> Self {
        let us = position.side_to_move;
        let own = position.board.occupied_by(us);
        let enemy = position.board.occupied_by(us.opponent());
        Generator {
            position,
            tables,
            us,
            own,
            enemy,
            occupied: own | enemy,
            // The king is never captured, only checkmated.
            victims: &PieceKind::of(us.opponent())[..5],
        }
    }

    /// Closed dispatch over the piece families.
    pub(crate) fn piece_moves(&self, kind: PieceKind, from: Square, out: &mut Vec<Position>) {
        match kind.piece() {
            Piece::Pawn => self.pawn_moves(kind, from, out),
            Piece::Knight => self.knight_moves(kind, from, out),
            Piece::Bishop => self.slider_moves(kind, from, &[Slider::Bishop], out),
            Piece::Rook => self.slider_moves(kind, from, &[Slider::Rook], out),
            Piece::Queen => self.slider_moves(kind, from, &[Slider::Bishop, Slider::Rook], out),
            Piece::King => self.king_moves(kind, from, out),
        }
    }

    /// Emit one successor per square in `targets` not held by the mover.
    pub(super) fn emit_targets(
        &self,
        kind: PieceKind,
        from: Square,
        targets: Bitboard,
        out: &mut Vec<Position>,
    ) {
        for to in (targets & !self.own).iter() {
            let (next, mv) = self.step(kind, from, to);
            self.finish(next, mv, out);
        }
    }

    /// The parent with `kind` moved from `from` to `to`.
    ///
    /// Clears the en-passant target, captures whatever enemy piece stood
    /// on `to` and drops any castling right tied to either square touched.
    pub(super) fn step(&self, kind: PieceKind, from: Square, to: Square) -> (Position, Move) {
        let mut next = *self.position;
        let mut mv = Move::new(from, to, kind);

        next.board.lift(kind, from);
        if let Some(victim) = next.board.capture(self.victims, to) {
            mv.flags = mv.flags.with(MoveFlags::CAPTURE);
            mv.captured = Some(victim);
        }
        next.board.put(kind, to);
        next.en_passant = Bitboard::EMPTY;

        if kind.piece() == Piece::King {
            next.flags.clear_castling_for(self.us);
        }
        next.flags
            .clear_castling_bits(corner_right(from) | corner_right(to));

        (next, mv)
    }

    /// Accept `next` if the mover's king is safe, recording the move and
    /// the opponent's check flag.
    pub(super) fn finish(&self, mut next: Position, mv: Move, out: &mut Vec<Position>) {
        if king_attacked(&next.board, self.tables, self.us) {
            return;
        }
        let them = self.us.opponent();
        let checks = king_attacked(&next.board, self.tables, them);
        next.flags.set_checked(self.us, false);
        next.flags.set_checked(them, checks);
        next.last_move = Some(mv);
        next.side_to_move = them;
        out.push(next);
    }
}
