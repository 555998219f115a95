use super::super::attack_tables::Slider;
use super::super::state::Position;
use super::super::{Bitboard, PieceKind, Square};
use super::Generator;

impl Generator<'_> {
    /// Bishops, rooks and queens. A queen passes both slider families.
    pub(super) fn slider_moves(
        &self,
        kind: PieceKind,
        from: Square,
        sliders: &[Slider],
        out: &mut Vec<Position>,
    ) {
        let targets = sliders.iter().fold(Bitboard::EMPTY, |acc, &slider| {
            acc | self.tables.slider_attacks(slider, from, self.occupied)
        });
        self.emit_targets(kind, from, targets, out);
    }
}
