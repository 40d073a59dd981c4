use crate::ai::types::{SCORE_NO_MOVE, SCORE_WIN, Strategy};
use crate::engine::board::{Board, Outcome};
use crate::engine::types::{Player, Square};

/// 枝刈りなしのネガマックス探索を行うAI。
///
/// 評価の形はアルファベータ探索と同じだが、常に全ての空きマスを展開する。
/// 同じ盤面に対して選ぶマスはアルファベータ探索と一致する（枝刈りは
/// 訪問ノード数だけを変える）。
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
        let (_score, best) = evaluate(board, Player::Second);

        // 番兵（`None` のまま）は「1手も試せなかった」ことを意味する。
        let square = match best {
            Some(value) => value,
            None => return false,
        };

        match board.cell_mut(square) {
            Some(cell) => cell.put(Player::Second),
            None => false,
        }
    }
}

/// `current` 手番視点の評価値と最善マスを返す。
///
/// 空きマスを走査順に試し、子局面を相手視点（符号反転）で再帰評価する。
/// 試した印は必ず取り除くため、呼び出し前後で盤面は不変。
fn evaluate(board: &mut Board, current: Player) -> (i32, Option<Square>) {
    // 死活判定。
    let outcome = board.outcome();
    if let Some(winner) = outcome.winner() {
        if winner == current {
            return (SCORE_WIN, None);
        }
        return (SCORE_WIN.wrapping_neg(), None);
    }
    if matches!(outcome, Outcome::Draw) {
        return (0_i32, None);
    }

    let mut best: Option<Square> = None;
    let mut score_max = SCORE_NO_MOVE;

    for square in Square::all() {
        if board.mark_at(square).is_some() {
            continue;
        }

        set_mark(board, square, Some(current));
        let (child_score, _child_best) = evaluate(board, current.opponent());
        let score = child_score.wrapping_neg();
        set_mark(board, square, None);

        if score_max < score {
            score_max = score;
            best = Some(square);
        }
    }

    (score_max, best)
}

/// 探索用にマスを直接書き換える（試行/巻き戻し）。
fn set_mark(board: &mut Board, square: Square, value: Option<Player>) {
    let cell = match board.cell_mut(square) {
        Some(target) => target,
        None => return,
    };
    cell.set(value);
}
