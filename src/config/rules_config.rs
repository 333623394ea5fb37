// src/config/rules_config.rs
//! ソリティアのルール設定だよ！📜
//! ランクの数値、スートの色、場札・組札の置き方、山札から引く枚数、勝利条件…
//! ルールエンジンは全部ここを見て判定するんだ。ゲーム中に書き換えることはないよ。

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::components::card::{Suit, ALL_RANKS, ALL_SUITS};
use crate::error::ConfigError;
use crate::logic::rules::CardColor;

/// 標準クロンダイクのルール設定 (JSON)。`RulesConfig::klondike()` と同じ中身だよ。
pub const DEFAULT_RULES_JSON: &str = include_str!("rules.json");

/// 積む方向。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BuildDirection {
    Ascending,
    Descending,
}

impl BuildDirection {
    /// 上に置くカードのランクが、一番上のカードのランクとどれだけ離れてないといけないか。
    pub fn step(self) -> i32 {
        match self {
            BuildDirection::Ascending => 1,
            BuildDirection::Descending => -1,
        }
    }
}

/// 空の場札に何を置けるか。JSON では `false` / `true` / `"king"` のどれか。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AllowOnEmpty {
    /// false なら何も置けない、true ならなんでも置ける。
    Flag(bool),
    /// 指定したランクだけ置ける (ふつうはキング👑)。
    Rank(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableauRules {
    pub allow_on_empty: AllowOnEmpty,
    pub alternate_colors: bool,
    pub build_direction: BuildDirection,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FoundationRules {
    pub start: String,
    pub match_suit: bool,
    pub build_direction: BuildDirection,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockRules {
    pub draw_count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WinCondition {
    pub foundation_piles: usize,
    pub cards_per_pile: usize,
}

/// ルール設定の本体。起動時に一回作って、`RulesEngine::new` に渡してね。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RulesConfig {
    pub rank_values: BTreeMap<String, u8>,
    #[serde(default)]
    pub rank_aliases: BTreeMap<String, String>,
    pub suit_colors: BTreeMap<String, CardColor>,
    pub tableau: TableauRules,
    pub foundation: FoundationRules,
    pub stock: StockRules,
    pub win_condition: WinCondition,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self::klondike()
    }
}

impl RulesConfig {
    /// 標準クロンダイク (1枚引き、空き列にはキングだけ) のルール。
    pub fn klondike() -> Self {
        let rank_values = ALL_RANKS
            .iter()
            .zip(1u8..)
            .map(|(rank, value)| (rank.token().to_string(), value))
            .collect();
        let rank_aliases = [("a", "ace"), ("j", "jack"), ("q", "queen"), ("k", "king")]
            .into_iter()
            .map(|(alias, canonical)| (alias.to_string(), canonical.to_string()))
            .collect();
        let suit_colors = ALL_SUITS
            .iter()
            .map(|&suit| (suit.token().to_string(), CardColor::from_suit(suit)))
            .collect();

        Self {
            rank_values,
            rank_aliases,
            suit_colors,
            tableau: TableauRules {
                allow_on_empty: AllowOnEmpty::Rank("king".to_string()),
                alternate_colors: true,
                build_direction: BuildDirection::Descending,
            },
            foundation: FoundationRules {
                start: "ace".to_string(),
                match_suit: true,
                build_direction: BuildDirection::Ascending,
            },
            stock: StockRules { draw_count: 1 },
            win_condition: WinCondition { foundation_piles: 4, cards_per_pile: 13 },
        }
    }

    /// JSON からルールを読み込んで、中身をチェックするよ。
    /// おかしな設定はここでエラーにして、ゲーム中に「なぜか何も動かせない」状態にならないようにする！
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: RulesConfig = serde_json::from_str(json)?;
        config.validate()?;
        log::info!("[Rules] Loaded rules config: drawCount={}, allowOnEmpty={:?}",
            config.stock.draw_count, config.tableau.allow_on_empty);
        Ok(config)
    }

    /// ランクのトークン (`"ace"`, `"K"`, `"7"` など) を数値に変換する。
    ///
    /// 1. 小文字にして `rankValues` を探す
    /// 2. なければ `rankAliases` で正式名に直してもう一回
    /// 3. それでもなければ整数として読む
    ///
    /// どれもダメなら None。None になったカードはどのルールでも動かせない扱いになるよ。
    pub fn rank_value(&self, token: &str) -> Option<i32> {
        let key = token.trim().to_lowercase();
        if let Some(&value) = self.rank_values.get(&key) {
            return Some(i32::from(value));
        }
        // 別名も正式名も、大文字小文字は区別しない
        let canonical = self.rank_aliases.get(&key).or_else(|| {
            self.rank_aliases
                .iter()
                .find(|(alias, _)| alias.trim().to_lowercase() == key)
                .map(|(_, target)| target)
        });
        if let Some(&value) = canonical.and_then(|target| self.rank_values.get(&target.trim().to_lowercase())) {
            return Some(i32::from(value));
        }
        key.parse::<i32>().ok()
    }

    /// スートの色。設定になければ None。
    pub fn suit_color(&self, suit: Suit) -> Option<CardColor> {
        self.suit_colors.get(suit.token()).copied()
    }

    /// 設定の中身をチェックするよ。
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (token, &value) in &self.rank_values {
            if !(1..=13).contains(&value) {
                return Err(ConfigError::RankValueOutOfRange { token: token.clone(), value });
            }
        }
        for (alias, target) in &self.rank_aliases {
            if !self.rank_values.contains_key(&target.trim().to_lowercase()) {
                return Err(ConfigError::UnknownAliasTarget {
                    alias: alias.clone(),
                    target: target.clone(),
                });
            }
        }
        // 52枚のデッキのランクは全部数値にできないとダメ！
        for rank in ALL_RANKS {
            if self.rank_value(rank.token()).is_none() {
                return Err(ConfigError::MissingRankValue(rank.token().to_string()));
            }
        }
        for suit in ALL_SUITS {
            if self.suit_color(suit).is_none() {
                return Err(ConfigError::MissingSuitColor(suit.token().to_string()));
            }
        }
        if let AllowOnEmpty::Rank(token) = &self.tableau.allow_on_empty {
            if self.rank_value(token).is_none() {
                return Err(ConfigError::UnknownRankToken {
                    field: "tableau.allowOnEmpty",
                    token: token.clone(),
                });
            }
        }
        if self.rank_value(&self.foundation.start).is_none() {
            return Err(ConfigError::UnknownRankToken {
                field: "foundation.start",
                token: self.foundation.start.clone(),
            });
        }
        if self.stock.draw_count == 0 {
            return Err(ConfigError::Invalid("stock.drawCount must be at least 1".to_string()));
        }
        if self.win_condition.foundation_piles == 0 || self.win_condition.cards_per_pile == 0 {
            return Err(ConfigError::Invalid(
                "winCondition needs at least one pile and one card per pile".to_string(),
            ));
        }
        Ok(())
    }
}
