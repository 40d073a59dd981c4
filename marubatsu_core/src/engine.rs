/// 盤面（マス目）と勝敗判定の実装。
pub mod board;
/// ゲーム進行（手番、結果キャッシュ）の実装。
pub mod game;
pub mod types;

pub type Board = board::Board;
pub type Cell = board::Cell;
pub type Match = game::Match;
pub type Outcome = board::Outcome;
pub type Player = types::Player;
pub type Square = types::Square;
