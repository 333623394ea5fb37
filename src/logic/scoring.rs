// src/logic/scoring.rs
//! 手の良さを点数にするヒューリスティックだよ！📈
//! 先読みはしない。組札が進む手、裏向きのカードをめくれる手、列を空ける手、長い束を動かす手が高得点。

use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::components::card::{Card, Rank};
use crate::components::game_state::GameState;
use crate::logic::moves::Move;

/// 組札に乗ってるカード1枚ごとに全部の手に足される点数。
pub const FOUNDATION_PROGRESS_WEIGHT: f64 = 0.2;

/// 点数と、その内訳の説明。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoveScore {
    pub score: f64,
    pub reason: String,
}

/// 加点を順番に貯めていく小さなヘルパー。
#[derive(Default)]
struct ScoreSheet {
    score: f64,
    reasons: Vec<&'static str>,
}

impl ScoreSheet {
    fn add(&mut self, points: f64, label: &'static str) {
        self.score += points;
        self.reasons.push(label);
    }

    fn finish(self) -> MoveScore {
        MoveScore { score: self.score, reason: self.reasons.iter().join("; ") }
    }
}

/// 位置 `index` のすぐ下のカードが裏向きかどうか。
fn face_down_below(column: &[Card], index: usize) -> bool {
    index
        .checked_sub(1)
        .and_then(|below| column.get(below))
        .is_some_and(|card| !card.is_face_up)
}

/// 手 `mv` を盤面 `state` で採点する。同じ引数なら必ず同じ結果になるよ。
pub fn score_move(mv: &Move, state: &GameState) -> MoveScore {
    let mut sheet = ScoreSheet::default();

    match *mv {
        Move::TableauToFoundation { from_column, from_index, .. } => {
            let source = state.tableaus.get(from_column).map(Vec::as_slice).unwrap_or(&[]);
            sheet.add(50.0, "Progress foundation");
            if source
                .get(from_index)
                .is_some_and(|card| matches!(card.rank, Rank::Ace | Rank::Two))
            {
                sheet.add(10.0, "Low rank foundation build");
            }
            if source.len() == 1 {
                sheet.add(12.0, "Free column");
            }
            if source.len() > 1 && face_down_below(source, source.len() - 1) {
                sheet.add(25.0, "Uncovers face-down card");
            }
        }
        Move::WasteToFoundation { .. } => {
            sheet.add(45.0, "Waste to foundation");
            if state.waste_top().is_some_and(|card| card.rank == Rank::Ace) {
                sheet.add(15.0, "Ace advancement");
            }
        }
        Move::TableauToTableau { from_column, .. } => {
            let source = state.tableaus.get(from_column).map(Vec::as_slice).unwrap_or(&[]);
            if source.len() > 1 && face_down_below(source, source.len() - 1) {
                sheet.add(30.0, "Uncovers face-down card");
            }
            if source.len() == 1 {
                sheet.add(18.0, "Creates empty column (King slot)");
            }
            sheet.add(8.0, "Reposition for future sequence");
        }
        Move::TableauStackToTableau { from_column, from_index, length, .. } => {
            let source = state.tableaus.get(from_column).map(Vec::as_slice).unwrap_or(&[]);
            if face_down_below(source, from_index) {
                sheet.add(35.0, "Uncovers face-down card beneath stack");
            }
            if from_index == 0 {
                sheet.add(22.0, "Frees entire column");
            }
            let moving = length.max(1) as f64;
            sheet.add((moving * 3.0).min(25.0), "Moves multi-card sequence");
            sheet.add(10.0, "Improves sequencing potential");
        }
        Move::WasteToTableau { .. } => sheet.add(12.0, "Deploy waste card"),
        Move::DrawStock => sheet.add(5.0, "Reveal new card"),
        Move::RecycleWaste => sheet.add(4.0, "Recycle waste to restock"),
        Move::GameWon | Move::NoMove => {}
    }

    let foundation_count = state.foundation_card_count() as f64;
    sheet.add(foundation_count * FOUNDATION_PROGRESS_WEIGHT, "Foundation progress weight");
    sheet.finish()
}
