//! ゲームの勝利条件判定ロジックを定義するよ。

use super::common::RulesEngine;
use crate::components::card::Card;
use crate::components::stack::{Pile, StackType};

impl RulesEngine {
    /// ゲームのクリア条件を判定する。
    /// 組札の数が設定どおりで、全部の組札に `cardsPerPile` 枚ずつ乗っていればクリア！🏆
    pub fn is_game_won(&self, foundations: &[Pile]) -> bool {
        let win = &self.config().win_condition;
        foundations.len() == win.foundation_piles
            && foundations.iter().all(|f| f.len() == win.cards_per_pile)
    }

    /// どこに置くかで場札ルールと組札ルールを振り分ける汎用チェック。
    /// 山札と捨て札には直接置けないよ。
    pub fn can_place(&self, card: &Card, destination: &[Card], target: StackType) -> bool {
        match target {
            StackType::Tableau(_) => self.can_place_on_tableau(card, destination),
            StackType::Foundation(_) => self.can_place_on_foundation(card, destination),
            StackType::Stock | StackType::Waste => false,
        }
    }
}
