use super::super::state::Position;
use super::super::{Bitboard, MoveFlags, Piece, PieceKind, Square};
use super::{is_square_attacked, Generator};

/// One castling option, relative to the mover's back rank.
struct CastleSide {
    kingside: bool,
    rook_file: usize,
    king_to_file: usize,
    rook_to_file: usize,
    /// Files that must be empty
    between: &'static [usize],
    /// Files the king crosses or lands on
    path: &'static [usize],
    flag: MoveFlags,
}

const CASTLE_SIDES: [CastleSide; 2] = [
    CastleSide {
        kingside: true,
        rook_file: 7,
        king_to_file: 6,
        rook_to_file: 5,
        between: &[5, 6],
        path: &[5, 6],
        flag: MoveFlags::CASTLE_KINGSIDE,
    },
    CastleSide {
        kingside: false,
        rook_file: 0,
        king_to_file: 2,
        rook_to_file: 3,
        between: &[1, 2, 3],
        path: &[3, 2],
        flag: MoveFlags::CASTLE_QUEENSIDE,
    },
];

const KING_HOME_FILE: usize = 4;

impl Generator<'_> {
    pub(super) fn king_moves(&self, kind: PieceKind, from: Square, out: &mut Vec<Position>) {
        let targets = self.tables.king_attacks(from);
        self.emit_targets(kind, from, targets, out);

        let rank = self.us.back_rank();
        if from.rank() != rank || from.file() != KING_HOME_FILE {
            return;
        }
        let them = self.us.opponent();
        let board = &self.position.board;
        if is_square_attacked(board, self.tables, from, them) {
            return;
        }

        let on_rank = |file: usize| Square::from_index(rank * 8 + file);
        let rook = PieceKind::new(self.us, Piece::Rook);
        for side in &CASTLE_SIDES {
            if !self.position.castling().has(self.us, side.kingside) {
                continue;
            }
            if !board.pieces(rook).contains(on_rank(side.rook_file)) {
                continue;
            }
            let between = side
                .between
                .iter()
                .fold(Bitboard::EMPTY, |acc, &f| acc | Bitboard::from_square(on_rank(f)));
            if (between & self.occupied).is_nonempty() {
                continue;
            }
            if side
                .path
                .iter()
                .any(|&f| is_square_attacked(board, self.tables, on_rank(f), them))
            {
                continue;
            }

            let (mut next, mut mv) = self.step(kind, from, on_rank(side.king_to_file));
            next.board.lift(rook, on_rank(side.rook_file));
            next.board.put(rook, on_rank(side.rook_to_file));
            mv.flags = mv.flags.with(side.flag);
            self.finish(next, mv, out);
        }
    }
}
