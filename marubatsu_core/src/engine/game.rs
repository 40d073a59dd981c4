use crate::ai::types::{Engine, Kind, Strategy as _};
use crate::engine::board::{Board, Outcome};

/// 1ゲーム（先手＝人間 対 後手＝AI）の進行を管理する構造体。
///
/// 勝敗は成立した着手の直後に必ず再計算してキャッシュする（遅延評価は
/// しない）。
#[derive(Debug)]
pub struct Match {
    /// 盤面。
    board: Board,
    /// 選択されたAI。
    engine: Engine,
    /// 直近の勝敗判定（直前の成立した着手の時点）。
    outcome: Outcome,
    /// 成立した着手の累計。
    turns: u32,
}

impl Match {
    /// 盤面への参照を返す。
    #[inline]
    #[must_use]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    /// 選択されているAIの種別を返す。
    #[inline]
    #[must_use]
    pub const fn kind(&self) -> Kind {
        self.engine.kind()
    }

    /// 空の盤面と指定AIでゲームを開始する。
    #[inline]
    #[must_use]
    pub const fn new(kind: Kind) -> Self {
        Self {
            board: Board::new(),
            engine: Engine::new(kind),
            outcome: Outcome::Unfinished,
            turns: u32::MIN,
        }
    }

    /// 盤面座標（x, y）へ先手の印を置く。
    ///
    /// 範囲外・埋まっているマスは何も変えずに `false`。成立した場合は
    /// 勝敗キャッシュを更新する。
    #[inline]
    pub fn put(&mut self, x: u8, y: u8) -> bool {
        if !self.board.put(x, y) {
            return false;
        }

        self.refresh();
        true
    }

    /// AIに後手の1手を打たせる。
    ///
    /// `false` はAIの投了（空きマスなし）を意味する。成立した場合は
    /// 勝敗キャッシュを更新する。
    #[inline]
    pub fn select_move(&mut self) -> bool {
        if !self.engine.think(&mut self.board) {
            tracing::debug!(kind = self.kind().label(), "ai resigned");
            return false;
        }

        self.refresh();
        true
    }

    /// キャッシュ済みの勝敗を返す。
    #[inline]
    #[must_use]
    pub const fn status(&self) -> Outcome {
        self.outcome
    }

    /// 成立した着手の累計を返す。
    #[inline]
    #[must_use]
    pub const fn turns(&self) -> u32 {
        self.turns
    }

    /// 着手成立後の共通処理（勝敗再計算と手数カウント）。
    fn refresh(&mut self) {
        self.outcome = self.board.outcome();
        self.turns = self.turns.wrapping_add(1);
        tracing::debug!(turns = self.turns, outcome = ?self.outcome, "move committed");
    }
}
