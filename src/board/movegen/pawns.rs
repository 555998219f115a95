use super::super::state::Position;
use super::super::{Bitboard, Color, Move, MoveFlags, Piece, PieceKind, Square};
use super::Generator;

impl Generator<'_> {
    pub(super) fn pawn_moves(&self, kind: PieceKind, from: Square, out: &mut Vec<Position>) {
        let pawn = Bitboard::from_square(from);
        let empty = !self.occupied;

        // Single and double pushes, then diagonal captures. The en-passant
        // target sits on the one rank a capturing pawn of this side can reach.
        let (single, double, captures, ep_rank) = match self.us {
            Color::White => {
                let single = pawn.shift_north() & empty;
                let double = (single & Bitboard::RANK_3).shift_north() & empty;
                let captures =
                    ((pawn & !Bitboard::FILE_A) << 7) | ((pawn & !Bitboard::FILE_H) << 9);
                (single, double, captures, Bitboard::RANK_6)
            }
            Color::Black => {
                let single = pawn.shift_south() & empty;
                let double = (single & Bitboard::RANK_6).shift_south() & empty;
                let captures =
                    ((pawn & !Bitboard::FILE_A) >> 9) | ((pawn & !Bitboard::FILE_H) >> 7);
                (single, double, captures, Bitboard::RANK_3)
            }
        };

        for to in single.iter().chain((captures & self.enemy).iter()) {
            let (next, mv) = self.step(kind, from, to);
            if to.rank() == self.us.opponent().back_rank() {
                let (next, mv) = self.promote(next, mv);
                self.finish(next, mv, out);
            } else {
                self.finish(next, mv, out);
            }
        }

        for to in double.iter() {
            let (mut next, mut mv) = self.step(kind, from, to);
            next.en_passant = Bitboard::from_square(Square::from_index(
                (from.index() + to.index()) / 2,
            ));
            mv.flags = mv.flags.with(MoveFlags::DOUBLE_PAWN_PUSH);
            self.finish(next, mv, out);
        }

        let ep = self.position.en_passant & ep_rank & captures;
        for to in ep.iter() {
            self.en_passant_capture(kind, from, to, out);
        }
    }

    /// Replace the pawn that just reached the last rank with a queen.
    fn promote(&self, mut next: Position, mut mv: Move) -> (Position, Move) {
        let queen = PieceKind::new(self.us, Piece::Queen);
        next.board.lift(mv.piece, mv.to);
        next.board.put(queen, mv.to);
        mv.flags = mv.flags.with(MoveFlags::PROMOTION);
        mv.promotion = Some(queen);
        (next, mv)
    }

    /// The captured pawn stands one rank behind `to`, beside the mover.
    fn en_passant_capture(
        &self,
        kind: PieceKind,
        from: Square,
        to: Square,
        out: &mut Vec<Position>,
    ) {
        let victim_sq = Square::new(from.rank(), to.file()).unwrap_or(to);
        let victim = PieceKind::new(self.us.opponent(), Piece::Pawn);
        if !self.position.board.pieces(victim).contains(victim_sq) {
            return;
        }

        let (mut next, mut mv) = self.step(kind, from, to);
        next.board.lift(victim, victim_sq);
        mv.flags = mv
            .flags
            .with(MoveFlags::CAPTURE)
            .with(MoveFlags::EN_PASSANT);
        mv.captured = Some(victim);
        self.finish(next, mv, out);
    }
}
