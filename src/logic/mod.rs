// src/logic/mod.rs
//! ゲームのロジック (描画や入力に関係ない部分) をまとめるよ！

pub mod advisor;
pub mod auto_move;
pub mod deck;
pub mod moves;
pub mod rules;
pub mod scoring;
pub mod transitions;

#[cfg(test)]
pub(crate) mod test_support;
