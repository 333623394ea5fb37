// src/components/game_state.rs

// serde を使う宣言！ゲーム状態を JSON にして UI に渡すよ！
use serde::{Deserialize, Serialize};

use crate::components::card::Card;
use crate::components::stack::{Pile, FOUNDATION_COUNT, TABLEAU_COUNT};

/// ゲーム全体の現在の状態を表す列挙型だよ！🏆🏁
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// ゲームが進行中の状態
    Playing,
    /// 勝利！🏆
    Won,
}

/// 1ゲーム分の盤面のスナップショットだよ。
///
/// 7つの場札、4つの組札、山札、捨て札でできてる。
/// 52枚のカードは必ずこのどこかに1枚ずつ入っていて、増えたり減ったりしないのがお約束！
///
/// 状態遷移 (`logic::transitions`) はこれを書き換えずに、新しい `GameState` を返すよ。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub tableaus: Vec<Pile>,
    pub foundations: Vec<Pile>,
    pub stock: Pile,
    pub waste: Pile,
}

impl GameState {
    /// 全部空っぽの盤面を作るよ。テストやデバッグ用の盤面を組み立てる時に便利！
    pub fn empty() -> Self {
        Self {
            tableaus: vec![Vec::new(); TABLEAU_COUNT],
            foundations: vec![Vec::new(); FOUNDATION_COUNT],
            stock: Vec::new(),
            waste: Vec::new(),
        }
    }

    /// 組札に乗っているカードの合計枚数。
    pub fn foundation_card_count(&self) -> usize {
        self.foundations.iter().map(Vec::len).sum()
    }

    /// 捨て札の一番上のカード。
    pub fn waste_top(&self) -> Option<&Card> {
        self.waste.last()
    }

    /// 盤面にある全部のカードを、山札 → 捨て札 → 場札 → 組札 の順で返すよ。
    pub fn all_cards(&self) -> impl Iterator<Item = &Card> {
        self.stock
            .iter()
            .chain(self.waste.iter())
            .chain(self.tableaus.iter().flatten())
            .chain(self.foundations.iter().flatten())
    }

    /// 盤面上のカード枚数の合計。ずっと 52 のはず！
    pub fn total_cards(&self) -> usize {
        self.all_cards().count()
    }
}
