// src/logic/transitions.rs
//! カードを実際に動かす状態遷移だよ！🚚
//!
//! どの関数も今の盤面 (`&GameState`) を受け取って、新しい盤面を返す。
//! 受け取った盤面は書き換えない (コピーしてから動かす)。
//! ルールに合わない手は何もせず、元と同じ盤面を返すよ。呼び出し側は信用しないでルールを確認し直す！

use log::{info, warn};
use serde_json::json;

use crate::components::card::Card;
use crate::components::game_state::GameState;
use crate::components::stack::{Pile, StackType};
use crate::logic::moves::Move;
use crate::logic::rules::RulesEngine;

/// 一番上が裏向きになっていたら表にするよ。
fn flip_new_top(column: &mut Pile) {
    if let Some(last) = column.last_mut() {
        if !last.is_face_up {
            last.is_face_up = true;
        }
    }
}

fn card_label(card: &Card) -> String {
    format!("{} of {}", card.rank.token(), card.suit.token())
}

/// 場札の列 `from_column` の `from_index` から下の束を、列 `to_column` に動かす。
pub fn move_cards(
    rules: &RulesEngine,
    state: &GameState,
    from_column: usize,
    from_index: usize,
    to_column: usize,
) -> GameState {
    if from_column == to_column {
        return state.clone();
    }
    let (Some(source), Some(destination)) = (state.tableaus.get(from_column), state.tableaus.get(to_column)) else {
        warn!("[Transition] move_cards: column out of range ({} -> {}).", from_column, to_column);
        return state.clone();
    };
    if !rules.can_drag_stack_from(source, from_index) {
        return state.clone();
    }
    let moving = &source[from_index..];
    let Some(run_bottom) = moving.first() else {
        return state.clone();
    };
    if !rules.can_place_on_tableau(run_bottom, destination) {
        return state.clone();
    }

    info!(
        "Move {} card(s) from column {} to column {} {}",
        moving.len(),
        from_column + 1,
        to_column + 1,
        json!({ "cards": moving.iter().map(card_label).collect::<Vec<_>>() })
    );

    let mut next = state.clone();
    let carried: Vec<Card> = next.tableaus[from_column].drain(from_index..).collect();
    next.tableaus[to_column].extend(carried);
    flip_new_top(&mut next.tableaus[from_column]);
    next
}

/// 山札をクリックした時の動き。
///
/// - 山札が空で捨て札があれば、捨て札を全部裏返して山札に戻す (リサイクル)。
///   並び順はそのまま。捨て札の一番上だったカード (最後に引いたカード) が山札の一番上になるので、
///   次の一巡は最後に引いたカードから逆順にめくれるよ。
/// - そうでなければ、山札の上から `drawCount` 枚を1枚ずつ捨て札へ表向きで移す。
/// - どっちもできなければ何もしない。
pub fn draw_one(rules: &RulesEngine, state: &GameState) -> GameState {
    if rules.can_recycle_waste(&state.stock, &state.waste) {
        info!("Recycling waste back to stock {}", json!({ "cards": state.waste.len() }));
        let mut next = state.clone();
        next.stock = state.waste.iter().map(|card| card.with_face_up(false)).collect();
        next.waste.clear();
        return next;
    }

    if !rules.can_draw_from_stock(&state.stock) {
        return state.clone();
    }

    let mut next = state.clone();
    for _ in 0..rules.config().stock.draw_count {
        let Some(drawn) = next.stock.pop() else { break };
        info!("Drew card from stock {}", json!({ "card": card_label(&drawn) }));
        next.waste.push(drawn.with_face_up(true));
    }
    next
}

/// 捨て札の一番上を場札の列 `to_column` に動かす。
pub fn move_waste_to_tableau(rules: &RulesEngine, state: &GameState, to_column: usize) -> GameState {
    let (Some(top), Some(destination)) = (state.waste.last(), state.tableaus.get(to_column)) else {
        return state.clone();
    };
    if !rules.can_drag_from_waste(&state.waste) || !rules.can_place(top, destination, StackType::Tableau(to_column)) {
        return state.clone();
    }

    info!("Move waste card to column {} {}", to_column + 1, json!({ "card": card_label(top) }));
    let mut next = state.clone();
    if let Some(card) = next.waste.pop() {
        next.tableaus[to_column].push(card.with_face_up(true));
    }
    next
}

/// 場札の列 `from_column` の一番上のカードを組札 `foundation_index` に動かす。
///
/// `from_index` が本当に一番上の位置じゃなければ何もしない
/// (古いヒントが、もう変わった盤面を指してる時の保険)。
pub fn move_to_foundation(
    rules: &RulesEngine,
    state: &GameState,
    from_column: usize,
    from_index: usize,
    foundation_index: usize,
) -> GameState {
    let (Some(source), Some(foundation)) = (state.tableaus.get(from_column), state.foundations.get(foundation_index)) else {
        return state.clone();
    };
    if source.is_empty() || from_index != source.len() - 1 {
        return state.clone();
    }
    let card = &source[from_index];
    if !rules.can_drag_card(card) || !rules.can_place_on_foundation(card, foundation) {
        return state.clone();
    }

    info!("Move card to foundation pile {} {}", foundation_index + 1, json!({ "card": card_label(card) }));
    let mut next = state.clone();
    if let Some(card) = next.tableaus[from_column].pop() {
        next.foundations[foundation_index].push(card);
    }
    flip_new_top(&mut next.tableaus[from_column]);
    next
}

/// 捨て札の一番上を組札 `foundation_index` に動かす。
pub fn move_waste_to_foundation(rules: &RulesEngine, state: &GameState, foundation_index: usize) -> GameState {
    let (Some(top), Some(foundation)) = (state.waste.last(), state.foundations.get(foundation_index)) else {
        return state.clone();
    };
    if !rules.can_drag_from_waste(&state.waste)
        || !rules.can_place(top, foundation, StackType::Foundation(foundation_index))
    {
        return state.clone();
    }

    info!("Move waste card to foundation pile {} {}", foundation_index + 1, json!({ "card": card_label(top) }));
    let mut next = state.clone();
    if let Some(card) = next.waste.pop() {
        next.foundations[foundation_index].push(card);
    }
    next
}

/// 計算済みの手を、対応する状態遷移に振り分けるよ。
/// `GameWon` と `NoMove` は何もしない。
pub fn apply_move(rules: &RulesEngine, state: &GameState, mv: &Move) -> GameState {
    match *mv {
        Move::TableauToFoundation { from_column, from_index, foundation_index } => {
            move_to_foundation(rules, state, from_column, from_index, foundation_index)
        }
        Move::WasteToFoundation { foundation_index } => move_waste_to_foundation(rules, state, foundation_index),
        Move::TableauToTableau { from_column, from_index, to_column }
        | Move::TableauStackToTableau { from_column, from_index, to_column, .. } => {
            move_cards(rules, state, from_column, from_index, to_column)
        }
        Move::WasteToTableau { to_column } => move_waste_to_tableau(rules, state, to_column),
        Move::DrawStock | Move::RecycleWaste => draw_one(rules, state),
        Move::GameWon | Move::NoMove => state.clone(),
    }
}
