// src/error.rs
//! ルール設定を読み込む時のエラーだよ。
//! ゲーム中のルール判定はエラーを出さずに false を返すだけなので、ここにあるのは設定まわりだけ！

use thiserror::Error;

/// ルール設定 (rules.json) の読み込み・検証で起きるエラー。
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid rules JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Rank alias '{alias}' points to unknown rank '{target}'")]
    UnknownAliasTarget { alias: String, target: String },

    #[error("No rank value configured for '{0}'")]
    MissingRankValue(String),

    #[error("Rank value for '{token}' must be 1..=13, got {value}")]
    RankValueOutOfRange { token: String, value: u8 },

    #[error("Unknown rank token '{token}' in {field}")]
    UnknownRankToken { field: &'static str, token: String },

    #[error("No colour configured for suit '{0}'")]
    MissingSuitColor(String),

    #[error("Configuration error: {0}")]
    Invalid(String),
}
