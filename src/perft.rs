use crate::board::{AttackTables, Move, Position};

/// Count leaf positions reachable in exactly `depth` plies.
#[must_use]
pub fn perft(position: &Position, tables: &AttackTables, depth: u32) -> u64 {
    if depth == 0 {
        return 1;
    }

    let successors = position.legal_successors(tables);
    if depth == 1 {
        return successors.len() as u64;
    }

    successors
        .iter()
        .map(|child| perft(child, tables, depth - 1))
        .sum()
}

/// Per-successor leaf counts at `depth`, in generation order.
#[must_use]
pub fn perft_divide(position: &Position, tables: &AttackTables, depth: u32) -> Vec<(Move, u64)> {
    if depth == 0 {
        return Vec::new();
    }
    position
        .legal_successors(tables)
        .iter()
        .filter_map(|child| {
            let mv = child.last_move()?;
            Some((mv, perft(child, tables, depth - 1)))
        })
        .collect()
}
