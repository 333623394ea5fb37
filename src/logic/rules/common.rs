//! ルール判定で共通して使うヘルパー関数や型を置くよ。

use serde::{Deserialize, Serialize};

use crate::components::card::{Card, Suit};
use crate::config::rules_config::RulesConfig;

/// カードの色（赤か黒か）を表すヘルパーenumだよ。
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CardColor {
    Red,
    Black,
}

impl CardColor {
    /// スートからカードの色を取得する関数 (標準の色分け)。
    /// ルールエンジンは設定の `suitColors` を使うので、これはデフォルト設定を作る時用。
    pub fn from_suit(suit: Suit) -> Self {
        match suit {
            Suit::Hearts | Suit::Diamonds => CardColor::Red,
            Suit::Clubs | Suit::Spades => CardColor::Black,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            CardColor::Red => "red",
            CardColor::Black => "black",
        }
    }
}

/// ルールエンジン本体だよ！⚖️
///
/// ルール設定を一つ持っていて、「このカード、ここに置ける？」みたいな質問に
/// true / false で答えるだけ。状態は持たないし、何も書き換えない！
///
/// 判定の中身はパイルの種類ごとにファイルを分けてるよ
/// (`tableau.rs`, `foundation.rs`, `stock_waste.rs`, `win_condition.rs`)。
#[derive(Debug, Clone, Default)]
pub struct RulesEngine {
    config: RulesConfig,
}

impl RulesEngine {
    pub fn new(config: RulesConfig) -> Self {
        Self { config }
    }

    /// 読み取り専用の設定 (UI のデバッグ表示用)。
    pub fn config(&self) -> &RulesConfig {
        &self.config
    }

    /// カードのランクを設定に従って数値にする。変換できなければ None。
    pub(crate) fn rank_of(&self, card: &Card) -> Option<i32> {
        self.config.rank_value(card.rank.token())
    }

    /// カードの色を設定から引く。
    pub(crate) fn color_of(&self, card: &Card) -> Option<CardColor> {
        self.config.suit_color(card.suit)
    }
}
