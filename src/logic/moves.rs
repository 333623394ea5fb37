// src/logic/moves.rs
//! 今の盤面でできる手を全部並べるモジュールだよ！🧮
//!
//! 並べる順番はいつも同じ (ヒントが毎回同じになるように):
//! 1. 場札 → 組札 (列の順、組札の順)
//! 2. 捨て札 → 組札 (組札の順)
//! 3. 場札 → 場札 (一番上の1枚、(移動元, 移動先) の順)
//! 4. 場札の束 → 場札 ((移動元, 開始位置, 移動先) の順)
//! 5. 捨て札 → 場札 (移動先の順)
//! 6. 山札から引く、引けなければ捨て札のリサイクル

use itertools::iproduct;
use log::debug;
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::components::game_state::GameState;
use crate::logic::rules::RulesEngine;

/// 一手を表す enum。盤面の位置 (列番号や組札番号) だけを持つよ。
///
/// JSON では `{"type": "tableau-to-foundation", "fromColumn": 0, ...}` の形になる。
/// フィールド名は `Card` の `faceUp` と同じく camelCase だよ。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case", rename_all_fields = "camelCase")]
pub enum Move {
    TableauToFoundation { from_column: usize, from_index: usize, foundation_index: usize },
    WasteToFoundation { foundation_index: usize },
    TableauToTableau { from_column: usize, from_index: usize, to_column: usize },
    TableauStackToTableau { from_column: usize, from_index: usize, to_column: usize, length: usize },
    WasteToTableau { to_column: usize },
    DrawStock,
    RecycleWaste,
    /// 組札が全部埋まってる。もうやることはない🏆
    GameWon,
    /// 動かせる手がない。
    NoMove,
}

impl Move {
    /// 盤面を変えない「お知らせ」用の手かどうか。
    pub fn is_sentinel(&self) -> bool {
        matches!(self, Move::GameWon | Move::NoMove)
    }

    /// ログ用の短い名前。
    pub fn kind(&self) -> &'static str {
        match self {
            Move::TableauToFoundation { .. } => "tableau-to-foundation",
            Move::WasteToFoundation { .. } => "waste-to-foundation",
            Move::TableauToTableau { .. } => "tableau-to-tableau",
            Move::TableauStackToTableau { .. } => "tableau-stack-to-tableau",
            Move::WasteToTableau { .. } => "waste-to-tableau",
            Move::DrawStock => "draw-stock",
            Move::RecycleWaste => "recycle-waste",
            Move::GameWon => "game-won",
            Move::NoMove => "no-move",
        }
    }
}

/// 今の盤面で合法な手を全部、決まった順番で返すよ。盤面は読むだけ！
pub fn enumerate_moves(rules: &RulesEngine, state: &GameState) -> Vec<Move> {
    let mut moves = Vec::new();
    let columns = 0..state.tableaus.len();

    // 場札 → 組札
    for (from_column, column) in state.tableaus.iter().enumerate() {
        let Some(top) = column.last() else { continue };
        if !rules.can_drag_card(top) {
            continue;
        }
        for (foundation_index, foundation) in state.foundations.iter().enumerate() {
            if rules.can_place_on_foundation(top, foundation) {
                moves.push(Move::TableauToFoundation {
                    from_column,
                    from_index: column.len() - 1,
                    foundation_index,
                });
            }
        }
    }

    // 捨て札 → 組札
    if let Some(top_waste) = state.waste.last().filter(|_| rules.can_drag_from_waste(&state.waste)) {
        for (foundation_index, foundation) in state.foundations.iter().enumerate() {
            if rules.can_place_on_foundation(top_waste, foundation) {
                moves.push(Move::WasteToFoundation { foundation_index });
            }
        }
    }

    // 場札 → 場札 (一番上の1枚)
    for (from_column, to_column) in iproduct!(columns.clone(), columns.clone()) {
        if from_column == to_column {
            continue;
        }
        let source = &state.tableaus[from_column];
        let Some(top) = source.last() else { continue };
        if rules.can_drag_card(top) && rules.can_place_on_tableau(top, &state.tableaus[to_column]) {
            moves.push(Move::TableauToTableau {
                from_column,
                from_index: source.len() - 1,
                to_column,
            });
        }
    }

    // 場札の束 → 場札。置けるかは束の一番下 (start のカード) だけで判定するよ
    for (from_column, source) in state.tableaus.iter().enumerate() {
        for from_index in 0..source.len() {
            if !rules.can_drag_stack_from(source, from_index) {
                continue;
            }
            let run_bottom = &source[from_index];
            for to_column in columns.clone() {
                if to_column == from_column {
                    continue;
                }
                if rules.can_place_on_tableau(run_bottom, &state.tableaus[to_column]) {
                    moves.push(Move::TableauStackToTableau {
                        from_column,
                        from_index,
                        to_column,
                        length: source.len() - from_index,
                    });
                }
            }
        }
    }

    // 捨て札 → 場札
    if let Some(top_waste) = state.waste.last().filter(|_| rules.can_drag_from_waste(&state.waste)) {
        for (to_column, destination) in state.tableaus.iter().enumerate() {
            if rules.can_place_on_tableau(top_waste, destination) {
                moves.push(Move::WasteToTableau { to_column });
            }
        }
    }

    // 山札
    if rules.can_draw_from_stock(&state.stock) {
        moves.push(Move::DrawStock);
    } else if rules.can_recycle_waste(&state.stock, &state.waste) {
        moves.push(Move::RecycleWaste);
    }

    debug!(
        "AI: Enumerated moves {}",
        json!({
            "count": moves.len(),
            "sample": moves.iter().take(25).map(Move::kind).collect::<Vec<_>>(),
        })
    );
    moves
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::card::{Rank, Suit};
    use crate::config::rules_config::RulesConfig;
    use crate::logic::deck::deal_with_seed;
    use crate::logic::test_support::{down, foundation_run, up};

    fn engine() -> RulesEngine {
        RulesEngine::new(RulesConfig::klondike())
    }

    #[test]
    fn blocked_board_has_no_moves() {
        // 全部の列に裏向きの上に表向きのエース以外…どこにも動かせない盤面
        let mut state = GameState::empty();
        state.tableaus[0] = vec![down(Suit::Hearts, Rank::Ace), up(Suit::Hearts, Rank::Five)];
        state.tableaus[1] = vec![down(Suit::Clubs, Rank::Ace), up(Suit::Hearts, Rank::Nine)];
        state.tableaus[2] = vec![up(Suit::Diamonds, Rank::Three)];
        // 他の列は空だけど、キングがいないので置けない

        let moves = enumerate_moves(&engine(), &state);
        assert!(moves.is_empty(), "動かせる手はないはず: {:?}", moves);
        println!("手詰まり盤面テスト、成功！🎉");
    }

    #[test]
    fn enumeration_order_and_contents() {
        let mut state = GameState::empty();
        state.tableaus[0] = vec![down(Suit::Clubs, Rank::Four), up(Suit::Spades, Rank::Ace)];
        state.tableaus[1] = vec![up(Suit::Hearts, Rank::Eight)];
        state.tableaus[2] = vec![up(Suit::Clubs, Rank::Nine)];
        state.waste = vec![up(Suit::Hearts, Rank::Ace)];
        state.stock = vec![down(Suit::Diamonds, Rank::Two)];

        let moves = enumerate_moves(&engine(), &state);
        let expected = vec![
            // 場札 → 組札: スペードのエースは4つの空き組札どこにでも
            Move::TableauToFoundation { from_column: 0, from_index: 1, foundation_index: 0 },
            Move::TableauToFoundation { from_column: 0, from_index: 1, foundation_index: 1 },
            Move::TableauToFoundation { from_column: 0, from_index: 1, foundation_index: 2 },
            Move::TableauToFoundation { from_column: 0, from_index: 1, foundation_index: 3 },
            Move::WasteToFoundation { foundation_index: 0 },
            Move::WasteToFoundation { foundation_index: 1 },
            Move::WasteToFoundation { foundation_index: 2 },
            Move::WasteToFoundation { foundation_index: 3 },
            // 8❤️ → 9♣️
            Move::TableauToTableau { from_column: 1, from_index: 0, to_column: 2 },
            Move::TableauStackToTableau { from_column: 1, from_index: 0, to_column: 2, length: 1 },
            Move::DrawStock,
        ];
        assert_eq!(moves, expected);
    }

    #[test]
    fn stack_moves_carry_run_length() {
        let mut state = GameState::empty();
        state.tableaus[0] = vec![
            down(Suit::Clubs, Rank::Two),
            up(Suit::Spades, Rank::Nine),
            up(Suit::Hearts, Rank::Eight),
            up(Suit::Clubs, Rank::Seven),
        ];
        state.tableaus[3] = vec![up(Suit::Diamonds, Rank::Ten)];

        let moves = enumerate_moves(&engine(), &state);
        assert!(moves.contains(&Move::TableauStackToTableau {
            from_column: 0,
            from_index: 1,
            to_column: 3,
            length: 3,
        }));
        // 8❤️ や 7♣️ からの束は 10♦️ には置けない
        assert!(!moves.iter().any(|m| matches!(m,
            Move::TableauStackToTableau { from_index: 2, .. } | Move::TableauStackToTableau { from_index: 3, .. })));
    }

    #[test]
    fn recycle_only_when_stock_is_empty() {
        let mut state = GameState::empty();
        state.waste = vec![up(Suit::Spades, Rank::Five)];
        let moves = enumerate_moves(&engine(), &state);
        assert_eq!(moves, vec![Move::RecycleWaste]);

        state.stock = vec![down(Suit::Spades, Rank::Six)];
        let moves = enumerate_moves(&engine(), &state);
        assert_eq!(moves, vec![Move::DrawStock]);
    }

    #[test]
    fn enumeration_does_not_touch_state() {
        let mut state = deal_with_seed(99);
        state.foundations[0] = foundation_run(Suit::Hearts, Rank::Ace);
        let before = state.clone();
        let first = enumerate_moves(&engine(), &state);
        let second = enumerate_moves(&engine(), &state);
        assert_eq!(state, before);
        assert_eq!(first, second, "同じ盤面なら同じ結果のはず");
    }

    #[test]
    fn move_json_uses_kebab_case_tags_and_camel_case_fields() {
        let json = serde_json::to_string(&Move::WasteToTableau { to_column: 3 }).unwrap();
        assert_eq!(json, r#"{"type":"waste-to-tableau","toColumn":3}"#);

        let stack = Move::TableauStackToTableau { from_column: 1, from_index: 2, to_column: 4, length: 3 };
        let value = serde_json::to_value(stack).unwrap();
        assert_eq!(value["type"], "tableau-stack-to-tableau");
        assert_eq!(value["fromColumn"], 1);
        assert_eq!(value["fromIndex"], 2);
        assert_eq!(value["toColumn"], 4);
        assert_eq!(value["length"], 3);
        assert!(value.get("from_column").is_none(), "snake_case のキーは出ないはず");

        let parsed: Move =
            serde_json::from_str(r#"{"type":"tableau-to-foundation","fromColumn":0,"fromIndex":5,"foundationIndex":2}"#)
                .unwrap();
        assert_eq!(parsed, Move::TableauToFoundation { from_column: 0, from_index: 5, foundation_index: 2 });
        let parsed: Move = serde_json::from_str(r#"{"type":"draw-stock"}"#).unwrap();
        assert_eq!(parsed, Move::DrawStock);
        assert_eq!(Move::NoMove.kind(), "no-move");
        assert!(Move::GameWon.is_sentinel());
    }
}
