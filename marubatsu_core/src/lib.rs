//! Tick-tack-toe (○×ゲーム) core logic.
//!
//! このクレートは盤面と勝敗判定を管理する `engine` と、後手の手を選択する
//! `ai` を提供します。コンソールUI（`marubatsu_cli`）から利用されることを
//! 想定しています。

#![forbid(unsafe_code)]

/// ゲームルール・盤面・進行を提供するモジュール。
pub mod engine;

/// AI（手選択アルゴリズム）を提供するモジュール。
pub mod ai;
