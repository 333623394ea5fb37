// src/lib.rs

// WASM と JavaScript を繋ぐための基本！
use wasm_bindgen::prelude::*;

// 自分で作ったモジュールたち！ これでコードを整理してるんだ。
pub mod app; // セッションとブラウザ向けの入り口
pub mod components; // カード、パイル、盤面
pub mod config; // ルール設定
pub mod error;
pub mod logic; // ルール判定、手の列挙、採点、ヒント、状態遷移
pub mod logging;

// よく使う型はここから直接使えるようにしておくよ！
pub use crate::app::game_app::GameApp;
pub use crate::app::session::GameSession;
pub use crate::components::card::{Card, Rank, Suit};
pub use crate::components::game_state::{GameState, GameStatus};
pub use crate::config::rules_config::RulesConfig;
pub use crate::error::ConfigError;
pub use crate::logic::advisor::{explain_move, get_suggestion, suggest_best_move, ScoredMove, Suggestion};
pub use crate::logic::moves::{enumerate_moves, Move};
pub use crate::logic::rules::RulesEngine;
pub use crate::logic::scoring::{score_move, MoveScore};

// main 関数の代わりに、Wasm がロードされた時に最初に実行される関数だよ。
#[wasm_bindgen(start)]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
    logging::init_logging(log::LevelFilter::Info);
    log::info!("Panic hook set!");
}
