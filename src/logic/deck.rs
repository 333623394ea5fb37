// src/logic/deck.rs

use log::info;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{thread_rng, Rng, SeedableRng};

use crate::components::card::{Card, ALL_RANKS, ALL_SUITS};
use crate::components::game_state::GameState;
use crate::components::stack::TABLEAU_COUNT;

/// 標準的な52枚のカードデッキ（ソリティア用）を生成する関数だよ！🃏
///
/// カード ID は ハート → ダイヤ → クラブ → スペード、エース → キングの順に 1 から振るよ。
/// 生成された時点では、すべてのカードは裏向き (`is_face_up: false`) になってる！
pub fn create_standard_deck() -> Vec<Card> {
    let mut deck = Vec::with_capacity(52);
    let mut id = 1u8;
    for &suit in ALL_SUITS.iter() {
        for &rank in ALL_RANKS.iter() {
            deck.push(Card::new(id, suit, rank));
            id += 1;
        }
    }
    deck
}

/// カードデッキをシャッフルする関数だよ。乱数生成器は呼び出し側が渡してね。
pub fn shuffle_deck<R: Rng + ?Sized>(deck: &mut [Card], rng: &mut R) {
    deck.shuffle(rng);
}

/// シャッフル済みのデッキからクロンダイクの初期配置を作るよ！
///
/// - 場札 (Tableau): 7列。i 列目に i+1 枚、一番上だけ表向き。
/// - 山札 (Stock): 残りの24枚、全部裏向き。
/// - 捨て札 (Waste) と組札 (Foundation) は空っぽ。
pub fn deal_from_deck(deck: Vec<Card>) -> GameState {
    let mut state = GameState::empty();
    let mut card_iterator = deck.into_iter();

    for tableau_index in 0..TABLEAU_COUNT {
        state.tableaus[tableau_index] = card_iterator
            .by_ref()
            .take(tableau_index + 1)
            .enumerate()
            .map(|(position, card)| card.with_face_up(position == tableau_index))
            .collect();
    }

    state.stock = card_iterator.map(|card| card.with_face_up(false)).collect();
    info!("[Deal] Dealt tableau and {} stock cards.", state.stock.len());
    state
}

/// 新しいゲームを配るよ。`rng` でシャッフルする。
pub fn deal_new_game<R: Rng + ?Sized>(rng: &mut R) -> GameState {
    let mut deck = create_standard_deck();
    shuffle_deck(&mut deck, rng);
    deal_from_deck(deck)
}

/// シードを指定して配る。同じシードなら同じ盤面になるよ (テストやリプレイ用)。
pub fn deal_with_seed(seed: u64) -> GameState {
    let mut rng = StdRng::seed_from_u64(seed);
    deal_new_game(&mut rng)
}

/// OS の乱数で配る。ふつうの「新しいゲーム」はこれ！
pub fn deal_random() -> GameState {
    deal_new_game(&mut thread_rng())
}
