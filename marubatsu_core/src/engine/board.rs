use crate::engine::types::{Player, Square};

/// 盤面のマス数（配列長）。
const CELL_COUNT: usize = 9;

/// 3つ並びが成立しうる8ライン（横3、縦3、斜め2）をマス番号で表す。
const LINES: [[u8; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// 1マスの状態（空き or どちらかの印）。
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct Cell {
    /// マスの中身（`None` は空き）。
    value: Option<Player>,
}

impl Cell {
    /// 空きマス。
    pub const EMPTY: Self = Self { value: None };

    /// 空きマスであれば `player` の印を置いて `true`、埋まっていれば
    /// 何も変えずに `false` を返す。
    #[inline]
    pub const fn put(&mut self, player: Player) -> bool {
        if self.value.is_some() {
            return false;
        }

        self.value = Some(player);
        true
    }

    /// マスの中身を無条件に書き換える（探索の試行/巻き戻し専用）。
    #[inline]
    pub(crate) const fn set(&mut self, value: Option<Player>) {
        self.value = value;
    }

    /// マスの中身を返す。
    #[inline]
    #[must_use]
    pub const fn value(self) -> Option<Player> {
        self.value
    }
}

/// 勝敗判定の結果。
///
/// 盤面から毎回導出される値であり、盤面と独立に保持してはならない。
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum Outcome {
    /// 引き分け（空きマスなし、3つ並びなし）。
    Draw,
    /// 先手の勝ち。
    FirstWins,
    /// 後手の勝ち。
    SecondWins,
    /// 進行中。
    Unfinished,
}

impl Outcome {
    /// 決着がついているかどうかを返す。
    #[inline]
    #[must_use]
    pub const fn is_finished(self) -> bool {
        !matches!(self, Self::Unfinished)
    }

    /// 勝者を返す（勝敗がついていなければ `None`）。
    #[inline]
    #[must_use]
    pub const fn winner(self) -> Option<Player> {
        match self {
            Self::FirstWins => Some(Player::First),
            Self::SecondWins => Some(Player::Second),
            Self::Draw | Self::Unfinished => None,
        }
    }
}

/// 3x3 の盤面。
///
/// 外部からの書き込みは必ずガード付きの [`Board::put`] を通る。探索用の
/// 直接アクセス（[`Board::cell_mut`]）は crate 内限定。
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct Board {
    /// 走査順（`y * 3 + x`）で並んだマス。
    cells: [Cell; CELL_COUNT],
}

impl Board {
    /// マスへの可変アクセスを返す（探索の試行/巻き戻し専用）。
    #[inline]
    pub(crate) fn cell_mut(&mut self, square: Square) -> Option<&mut Cell> {
        self.cells.get_mut(usize::from(square.index()))
    }

    /// 空きマスの数を返す。
    #[inline]
    #[must_use]
    pub fn empty_count(&self) -> u8 {
        let mut count = u8::MIN;
        for cell in &self.cells {
            if cell.value().is_none() {
                count = count.saturating_add(1);
            }
        }
        count
    }

    /// マスの並びから盤面を生成する（テスト用）。
    ///
    /// 正当な手順で到達可能かどうかは呼び出し側が保証する。
    #[cfg(test)]
    #[inline]
    #[must_use]
    pub(crate) fn from_marks(marks: [Option<Player>; CELL_COUNT]) -> Self {
        let mut cells = [Cell::EMPTY; CELL_COUNT];
        for (cell, mark) in cells.iter_mut().zip(marks) {
            cell.set(mark);
        }
        Self { cells }
    }

    /// 指定マスの印を返す（空きなら `None`）。
    #[inline]
    #[must_use]
    pub fn mark_at(&self, square: Square) -> Option<Player> {
        match self.cells.get(usize::from(square.index())) {
            Some(cell) => cell.value(),
            None => None,
        }
    }

    /// 空の盤面を生成する。
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cells: [Cell::EMPTY; CELL_COUNT],
        }
    }

    /// 現在の盤面の勝敗を判定する。
    ///
    /// 8ラインすべてを走査し、3つ並びがあればその打ち手の勝ち。無ければ
    /// 空きマスの有無で `Unfinished` / `Draw` を返す。純粋関数であり、
    /// 同じ盤面に対して常に同じ値を返す。
    #[inline]
    #[must_use]
    pub fn outcome(&self) -> Outcome {
        for line in LINES {
            let winner = match self.line_winner(line) {
                Some(value) => value,
                None => continue,
            };

            return match winner {
                Player::First => Outcome::FirstWins,
                Player::Second => Outcome::SecondWins,
            };
        }

        if self.empty_count() == u8::MIN {
            Outcome::Draw
        } else {
            Outcome::Unfinished
        }
    }

    /// 盤面座標（x, y）へ先手の印を置く。
    ///
    /// 座標が範囲外、またはマスが埋まっている場合は何も変えずに `false`。
    #[inline]
    pub fn put(&mut self, x: u8, y: u8) -> bool {
        let square = match Square::from_xy(x, y) {
            Some(value) => value,
            None => return false,
        };

        match self.cell_mut(square) {
            Some(cell) => cell.put(Player::First),
            None => false,
        }
    }

    /// 1ラインの3マスが同じ印で埋まっていればその打ち手を返す。
    fn line_winner(&self, line: [u8; 3]) -> Option<Player> {
        let [first, second, third] = line;

        let mark = match self.mark_at(Square::from_index_unchecked(first)) {
            Some(value) => value,
            None => return None,
        };

        if self.mark_at(Square::from_index_unchecked(second)) != Some(mark) {
            return None;
        }
        if self.mark_at(Square::from_index_unchecked(third)) != Some(mark) {
            return None;
        }

        Some(mark)
    }
}
