//! 山札 (Stock) と捨て札 (Waste) に関するルールを定義するよ。

use super::common::RulesEngine;
use crate::components::card::Card;

impl RulesEngine {
    /// 山札から引けるかチェックする。設定の `drawCount` 枚以上残ってないとダメ。
    pub fn can_draw_from_stock(&self, stock: &[Card]) -> bool {
        stock.len() >= self.config().stock.draw_count
    }

    /// 山札が空で捨て札にカードがあれば、捨て札を山札に戻せる。
    pub fn can_recycle_waste(&self, stock: &[Card], waste: &[Card]) -> bool {
        stock.is_empty() && !waste.is_empty()
    }

    /// 捨て札の一番上をドラッグできるかチェックする。
    pub fn can_drag_from_waste(&self, waste: &[Card]) -> bool {
        waste.last().is_some_and(|top| self.can_drag_card(top))
    }
}
