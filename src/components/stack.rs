// src/components/stack.rs

// serde を使うためにインポート！Serialize と Deserialize トレイトを使うよ。
use serde::{Deserialize, Serialize};

use crate::components::card::Card;

/// カードの山 (パイル) だよ。一番最後の要素が「一番上」のカード！
pub type Pile = Vec<Card>;

/// 場札の列の数。
pub const TABLEAU_COUNT: usize = 7;
/// 組札の数。
pub const FOUNDATION_COUNT: usize = 4;

/// カードが存在する場所の種類を示す Enum だよ。
/// これを使って、カードが山札にあるのか、場札の何列目にあるのか、などを区別するよ。
/// 場所ごとに置けるルールが違うから、汎用の `can_place` でこれを見て振り分けるんだ。
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StackType {
    /// 場札 (Tableau) だよ。7つの列があるので、列番号 (0-6) を持つ。
    Tableau(usize),
    /// 組札 (Foundation) だよ。4つあって番号 (0-3) で管理する。
    /// どのスートを積むかは最初に置かれたエースで決まるよ！
    Foundation(usize),
    /// 山札 (Stock) だよ。プレイヤーがカードを引く元の場所。
    Stock,
    /// 山札からめくったカードを置く場所 (Waste) だよ。
    Waste,
}

impl StackType {
    /// 人間向けの名前。列番号は 1 始まりで表示するよ。
    pub fn describe(self) -> String {
        match self {
            StackType::Tableau(i) => format!("column {}", i + 1),
            StackType::Foundation(i) => format!("foundation pile {}", i + 1),
            StackType::Stock => "stock".to_string(),
            StackType::Waste => "waste".to_string(),
        }
    }
}
