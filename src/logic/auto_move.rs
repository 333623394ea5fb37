// src/logic/auto_move.rs
//! カードの自動移動に関するロジックをまとめるモジュールだよ！🪄✨
//! 場札や捨て札の一番上のカードを、置ける組札に自動で送るんだ (ダブルクリック用)。

use log::debug;

use crate::components::game_state::GameState;
use crate::components::stack::StackType;
use crate::logic::moves::Move;
use crate::logic::rules::RulesEngine;
use crate::logic::transitions::apply_move;

/// `source` の一番上のカードを置ける組札を探して、その手を返すよ。
///
/// 組札は 0 番から順番に見て、最初に置けたところを選ぶ。
/// 場札と捨て札以外 (組札・山札) からは自動移動しないので None。
pub fn find_automatic_foundation_move(rules: &RulesEngine, state: &GameState, source: StackType) -> Option<Move> {
    let found = match source {
        StackType::Tableau(from_column) => {
            let column = state.tableaus.get(from_column)?;
            let top = column.last()?;
            rules
                .find_foundation_for(top, &state.foundations)
                .map(|foundation_index| Move::TableauToFoundation {
                    from_column,
                    from_index: column.len() - 1,
                    foundation_index,
                })
        }
        StackType::Waste => {
            let top = state.waste_top()?;
            rules
                .find_foundation_for(top, &state.foundations)
                .map(|foundation_index| Move::WasteToFoundation { foundation_index })
        }
        StackType::Foundation(_) | StackType::Stock => None,
    };

    debug!("[AutoMove] {} -> {:?}", source.describe(), found);
    found
}

/// 自動移動できればした盤面を、できなければ同じ盤面を返すよ。
pub fn auto_move_to_foundation(rules: &RulesEngine, state: &GameState, source: StackType) -> GameState {
    match find_automatic_foundation_move(rules, state, source) {
        Some(mv) => apply_move(rules, state, &mv),
        None => state.clone(),
    }
}
