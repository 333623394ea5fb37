// src/components/card.rs

// serde を使う宣言！カード情報を JSON にして UI に渡したりするよ！
use serde::{Deserialize, Serialize};

/// カードのスート（マーク）を表す列挙型だよ！❤️♦️♣️♠️
///
/// JSON では `"hearts"` みたいな小文字の複数形で表すよ。
/// ルール設定 (`suitColors`) のキーもこのトークンと同じ！
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Suit {
    Hearts,   // ❤️
    Diamonds, // ♦️
    Clubs,    // ♣️
    Spades,   // ♠️
}

impl Suit {
    /// 設定ファイルで使うトークン文字列を返すよ。
    pub fn token(self) -> &'static str {
        match self {
            Suit::Hearts => "hearts",
            Suit::Diamonds => "diamonds",
            Suit::Clubs => "clubs",
            Suit::Spades => "spades",
        }
    }
}

/// カードのランク（数字）を表す列挙型だよ！ A, 2, 3, ..., K
///
/// ここでは数値を持たせないよ。ランクの数値はルール設定の `rankValues` から
/// 引くのがお約束！ (`RulesEngine::rank_value` を見てね)
/// JSON では `"ace"`, `"2"`, ..., `"king"` のトークンになる。`"A"` や `"K"` も読めるよ。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Rank {
    #[serde(rename = "ace", alias = "A", alias = "a")]
    Ace,
    #[serde(rename = "2")]
    Two,
    #[serde(rename = "3")]
    Three,
    #[serde(rename = "4")]
    Four,
    #[serde(rename = "5")]
    Five,
    #[serde(rename = "6")]
    Six,
    #[serde(rename = "7")]
    Seven,
    #[serde(rename = "8")]
    Eight,
    #[serde(rename = "9")]
    Nine,
    #[serde(rename = "10")]
    Ten,
    #[serde(rename = "jack", alias = "J", alias = "j")]
    Jack,
    #[serde(rename = "queen", alias = "Q", alias = "q")]
    Queen,
    #[serde(rename = "king", alias = "K", alias = "k")]
    King,
}

impl Rank {
    /// 設定ファイルで使うトークン文字列を返すよ。
    pub fn token(self) -> &'static str {
        match self {
            Rank::Ace => "ace",
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "jack",
            Rank::Queen => "queen",
            Rank::King => "king",
        }
    }
}

/// デッキを作る時の順番 (スート)。カードID もこの順番で振るよ。
pub const ALL_SUITS: [Suit; 4] = [Suit::Hearts, Suit::Diamonds, Suit::Clubs, Suit::Spades];

/// デッキを作る時の順番 (ランク)。
pub const ALL_RANKS: [Rank; 13] = [
    Rank::Ace,
    Rank::Two,
    Rank::Three,
    Rank::Four,
    Rank::Five,
    Rank::Six,
    Rank::Seven,
    Rank::Eight,
    Rank::Nine,
    Rank::Ten,
    Rank::Jack,
    Rank::Queen,
    Rank::King,
];

/// カードそのものを表す構造体だよ！🃏
///
/// - `id`: 1..=52 のユニークな番号。ゲーム中ずっと変わらない！
/// - `suit`: カードのスート
/// - `rank`: カードのランク
/// - `is_face_up`: 表向きなら true
///
/// カードは値としてコピーして使うよ。状態遷移では新しいパイルを作るから、
/// 同じカードを二つのパイルが共有することはないんだ。
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub id: u8,
    pub suit: Suit,
    pub rank: Rank,
    #[serde(rename = "faceUp")]
    pub is_face_up: bool,
}

impl Card {
    /// 新しいカードを作るヘルパー。最初は裏向き！
    pub fn new(id: u8, suit: Suit, rank: Rank) -> Self {
        Self { id, suit, rank, is_face_up: false }
    }

    /// 表裏だけ変えたコピーを返すよ。元のカードはそのまま。
    pub fn with_face_up(&self, is_face_up: bool) -> Self {
        Self { is_face_up, ..self.clone() }
    }
}
