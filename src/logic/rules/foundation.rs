//! 組札 (Foundation) へのカード移動ルールを定義するよ。

use log::trace;

use super::common::RulesEngine;
use crate::components::card::Card;
use crate::components::stack::Pile;

impl RulesEngine {
    /// 指定されたカードが、組札 `foundation` の一番上に置けるかチェックする。
    pub fn can_place_on_foundation(&self, card: &Card, foundation: &[Card]) -> bool {
        let rules = &self.config().foundation;
        let Some(move_rank) = self.rank_of(card) else {
            trace!("[Foundation Rule] {:?} has no rank value.", card.rank);
            return false;
        };

        let result = match foundation.last() {
            None => {
                // 空の組札にはスタートのランク (ふつうはエース) だけ
                let start = self.config().rank_value(&rules.start);
                start == Some(move_rank)
            }
            Some(top) => {
                if rules.match_suit && top.suit != card.suit {
                    trace!("[Foundation Rule] Suit mismatch: {:?} onto {:?}.", card.suit, top.suit);
                    return false;
                }
                match self.rank_of(top) {
                    Some(top_rank) => move_rank == top_rank + rules.build_direction.step(),
                    None => false,
                }
            }
        };

        trace!("[Foundation Rule] {:?} {:?} onto foundation of {} cards: {}",
            card.rank, card.suit, foundation.len(), result);
        result
    }

    /// カードを置ける最初の組札のインデックスを探すよ。表向きのカードだけが対象。
    pub fn find_foundation_for(&self, card: &Card, foundations: &[Pile]) -> Option<usize> {
        if !self.can_drag_card(card) {
            return None;
        }
        foundations
            .iter()
            .position(|foundation| self.can_place_on_foundation(card, foundation))
    }
}
