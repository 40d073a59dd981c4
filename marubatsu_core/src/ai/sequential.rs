use crate::ai::types::Strategy;
use crate::engine::board::Board;
use crate::engine::types::{Player, Square};

/// 空きマスを走査順（左上から行優先）にたどり、最初の空きに打つAI。
///
/// 先読みを行わない最弱の基準実装。
#[derive(Debug, Default)]
#[non_exhaustive]
pub struct Agent;

impl Agent {
    /// エージェントを生成する。
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Strategy for Agent {
    #[inline]
    fn think(&mut self, board: &mut Board) -> bool {
        for square in Square::all() {
            let cell = match board.cell_mut(square) {
                Some(value) => value,
                None => continue,
            };

            if cell.put(Player::Second) {
                return true;
            }
        }

        false
    }
}
