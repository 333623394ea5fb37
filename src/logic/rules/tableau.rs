//! 場札 (Tableau) へのカード移動ルールと、ドラッグできるかのルールを定義するよ。

use itertools::Itertools;
use log::trace;

use super::common::RulesEngine;
use crate::components::card::Card;
use crate::config::rules_config::AllowOnEmpty;

impl RulesEngine {
    /// 指定されたカードが、場札 `destination` の一番上に置けるかチェックする。
    pub fn can_place_on_tableau(&self, card: &Card, destination: &[Card]) -> bool {
        let rules = &self.config().tableau;
        let Some(move_rank) = self.rank_of(card) else {
            trace!("[Tableau Rule] {:?} has no rank value.", card.rank);
            return false;
        };

        let Some(target_top_card) = destination.last() else {
            // 空の列
            let allowed = match &rules.allow_on_empty {
                AllowOnEmpty::Flag(any) => *any,
                AllowOnEmpty::Rank(token) => self.config().rank_value(token) == Some(move_rank),
            };
            trace!("[Tableau Rule] Moving {:?} onto empty Tableau. Allowed: {}.", card.rank, allowed);
            return allowed;
        };

        let Some(target_rank) = self.rank_of(target_top_card) else {
            return false;
        };

        if rules.alternate_colors {
            let colors_different = match (self.color_of(card), self.color_of(target_top_card)) {
                (Some(move_color), Some(target_color)) => move_color != target_color,
                _ => false,
            };
            if !colors_different {
                trace!("[Tableau Rule] {:?} onto {:?}: same or unknown colour.", card, target_top_card);
                return false;
            }
        }

        let rank_fits = move_rank == target_rank + rules.build_direction.step();
        trace!(
            "[Tableau Rule] Moving {:?} onto {:?}. Rank fits: {}.",
            card.rank, target_top_card.rank, rank_fits
        );
        rank_fits
    }

    /// ドラッグを始められるのは表向きのカードだけ！
    pub fn can_drag_card(&self, card: &Card) -> bool {
        card.is_face_up
    }

    /// 場札の列 `column` の `start_index` から下のカードをまとめて持ち上げられるかチェックする。
    ///
    /// 持ち上げる部分が、それ自体ちゃんとした場札の並び (色違い・ランク順) になっていればOK。
    pub fn can_drag_stack_from(&self, column: &[Card], start_index: usize) -> bool {
        let Some(start_card) = column.get(start_index) else {
            return false;
        };
        if !self.can_drag_card(start_card) {
            return false;
        }
        column[start_index..]
            .iter()
            .tuple_windows()
            .all(|(current, next)| {
                next.is_face_up && self.can_place_on_tableau(next, std::slice::from_ref(current))
            })
    }
}
