// src/config/mod.rs
//! 設定まわり。今はルール設定だけ！

pub mod rules_config;
