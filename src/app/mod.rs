// src/app/mod.rs
//! ゲームを外から動かすための入り口をまとめるモジュールだよ！

pub mod game_app; // ブラウザ (wasm-bindgen) 向け
pub mod session; // 盤面とヒントを持つセッション
