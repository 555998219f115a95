use super::super::state::Position;
use super::super::{PieceKind, Square};
use super::Generator;

impl Generator<'_> {
    pub(super) fn knight_moves(&self, kind: PieceKind, from: Square, out: &mut Vec<Position>) {
        let targets = self.tables.knight_attacks(from);
        self.emit_targets(kind, from, targets, out);
    }
}
