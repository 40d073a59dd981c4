use crate::ai::{alphabeta, negamax, sequential};
use crate::engine::board::Board;

/// 勝敗が確定した局面の評価値（手番視点の絶対値）。
pub(crate) const SCORE_WIN: i32 = 10_000;

/// 「1手も打てなかった」ことを表す番兵値。
///
/// 実際の終局評価は ±10_000 か 0 のみで、この値と交差しない。評価の
/// 粒度を変える場合は番兵も併せて導出し直すこと。
pub(crate) const SCORE_NO_MOVE: i32 = -9_999;

/// 後手の手を選択するAI。
pub trait Strategy {
    /// 空きマス1つへ後手の印を置けたら `true` を返す。
    ///
    /// `false` は「空きマスが1つも無い」ことのみを意味する（投了）。
    /// 埋まっているマスを上書きすることはない。
    fn think(&mut self, board: &mut Board) -> bool;
}

/// AI の種別（メニュー選択の識別子）。
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[non_exhaustive]
pub enum Kind {
    /// アルファベータ探索。
    AlphaBeta,
    /// ネガマックス探索。
    NegaMax,
    /// 走査順に打つだけ。
    Sequential,
}

impl Kind {
    /// 0 始まりの選択番号から種別を得る。範囲外は `None`。
    ///
    /// 範囲外の選択は構成エラーであり、呼び出し側（シェル）は
    /// [`Engine`] を生成する前に拒否しなければならない。
    #[inline]
    #[must_use]
    pub const fn from_index(index: u8) -> Option<Self> {
        match index {
            0 => Some(Self::Sequential),
            1 => Some(Self::AlphaBeta),
            2 => Some(Self::NegaMax),
            _ => None,
        }
    }

    /// 表示用のラベルを返す。
    #[inline]
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::AlphaBeta => "ALPHA_BETA",
            Self::NegaMax => "NEGA_MAX",
            Self::Sequential => "SEQUENTIAL",
        }
    }
}

/// 種別ごとの実体を保持する閉じたディスパッチ。
///
/// 種別集合は固定なので、trait オブジェクトではなく `match` で分岐する。
#[derive(Debug)]
#[non_exhaustive]
pub enum Engine {
    /// アルファベータ探索。
    AlphaBeta(alphabeta::Agent),
    /// ネガマックス探索。
    NegaMax(negamax::Agent),
    /// 走査順に打つだけ。
    Sequential(sequential::Agent),
}

impl Engine {
    /// 実体の種別を返す。
    #[inline]
    #[must_use]
    pub const fn kind(&self) -> Kind {
        match self {
            Self::AlphaBeta(_) => Kind::AlphaBeta,
            Self::NegaMax(_) => Kind::NegaMax,
            Self::Sequential(_) => Kind::Sequential,
        }
    }

    /// 種別に応じた実体を生成する。
    #[inline]
    #[must_use]
    pub const fn new(kind: Kind) -> Self {
        match kind {
            Kind::AlphaBeta => Self::AlphaBeta(alphabeta::Agent::new()),
            Kind::NegaMax => Self::NegaMax(negamax::Agent::new()),
            Kind::Sequential => Self::Sequential(sequential::Agent::new()),
        }
    }
}

impl Strategy for Engine {
    #[inline]
    fn think(&mut self, board: &mut Board) -> bool {
        match self {
            Self::AlphaBeta(agent) => agent.think(board),
            Self::NegaMax(agent) => agent.think(board),
            Self::Sequential(agent) => agent.think(board),
        }
    }
}
