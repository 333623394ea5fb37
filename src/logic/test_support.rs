// src/logic/test_support.rs
//! テスト用の盤面づくりヘルパーだよ。テストの時だけコンパイルされる！

use crate::components::card::{Card, Rank, Suit, ALL_RANKS, ALL_SUITS};
use crate::components::game_state::GameState;

/// スートとランクからカード ID を決める (デッキ生成と同じ振り方)。
pub fn id_of(suit: Suit, rank: Rank) -> u8 {
    let suit_index = ALL_SUITS.iter().position(|&s| s == suit).unwrap_or(0);
    let rank_index = ALL_RANKS.iter().position(|&r| r == rank).unwrap_or(0);
    (suit_index * 13 + rank_index + 1) as u8
}

pub fn up(suit: Suit, rank: Rank) -> Card {
    Card { id: id_of(suit, rank), suit, rank, is_face_up: true }
}

pub fn down(suit: Suit, rank: Rank) -> Card {
    Card { id: id_of(suit, rank), suit, rank, is_face_up: false }
}

/// スートのエースからランク `up_to` まで、表向きで並べた組札を作る。
pub fn foundation_run(suit: Suit, up_to: Rank) -> Vec<Card> {
    ALL_RANKS
        .iter()
        .take_while(|&&r| r <= up_to)
        .map(|&r| up(suit, r))
        .collect()
}

/// 4つの組札が全部キングまで埋まった、勝利済みの盤面。
pub fn won_state() -> GameState {
    let mut state = GameState::empty();
    for (i, &suit) in ALL_SUITS.iter().enumerate() {
        state.foundations[i] = foundation_run(suit, Rank::King);
    }
    state
}

/// カード ID を小さい順に並べたもの。52枚保存のチェックに使うよ。
pub fn sorted_ids(state: &GameState) -> Vec<u8> {
    let mut ids: Vec<u8> = state.all_cards().map(|c| c.id).collect();
    ids.sort_unstable();
    ids
}
