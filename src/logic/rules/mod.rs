// src/logic/rules/mod.rs
//! ソリティアのルール関連モジュールをまとめるよ！
//! 判定は全部 `RulesEngine` のメソッドで、副作用なし。変なデータには false で答える！

pub mod common;
pub mod foundation;
pub mod stock_waste;
pub mod tableau;
pub mod win_condition;

#[cfg(test)]
mod tests;

pub use common::*;
