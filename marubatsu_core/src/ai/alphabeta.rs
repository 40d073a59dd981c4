use crate::ai::types::{SCORE_NO_MOVE, SCORE_WIN, Strategy};
use crate::engine::board::{Board, Outcome};
use crate::engine::types::{Player, Square};

/// アルファベータ枝刈り付きミニマックス探索を行うAI。
///
/// 盤面が小さいため深さ制限は設けず、終局まで読み切る。
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
        let (score, best) = evaluate(
            board,
            Player::Second,
            SCORE_WIN.wrapping_neg(),
            SCORE_WIN,
        );

        // 番兵値以下は「1手も試せなかった」ことを意味する（投了）。
        if score <= SCORE_NO_MOVE {
            return false;
        }

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
/// 空きマスを走査順に試し、子局面を相手視点（窓を反転・符号反転）で
/// 再帰評価する。試した印は必ず取り除くため、呼び出し前後で盤面は不変。
/// ベータ値を上回る手が見つかった時点で残りの兄弟手は打ち切る。
fn evaluate(
    board: &mut Board,
    current: Player,
    alpha: i32,
    beta: i32,
) -> (i32, Option<Square>) {
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

    let mut alpha_mut = alpha;
    let mut best: Option<Square> = None;
    let mut score_max = SCORE_NO_MOVE;

    for square in Square::all() {
        if board.mark_at(square).is_some() {
            continue;
        }

        set_mark(board, square, Some(current));
        let (child_score, _child_best) = evaluate(
            board,
            current.opponent(),
            beta.wrapping_neg(),
            alpha_mut.wrapping_neg(),
        );
        let score = child_score.wrapping_neg();
        set_mark(board, square, None);

        // ベータカット。確定済みの最善（score_max）と今回の手の良い方を返す。
        if beta < score {
            let cut = if score_max < score { score } else { score_max };
            return (cut, best);
        }

        if score_max < score {
            score_max = score;
            if alpha_mut < score_max {
                alpha_mut = score_max;
            }
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
