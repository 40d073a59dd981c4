/// アルファベータ枝刈り付きミニマックス探索AI。
pub mod alphabeta;
/// 枝刈りなしネガマックス探索AI。
pub mod negamax;
/// 空きマスを走査順に打つだけのAI。
pub mod sequential;
pub mod types;

pub type Engine = types::Engine;
pub type Kind = types::Kind;
