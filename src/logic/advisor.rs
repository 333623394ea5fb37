// src/logic/advisor.rs
//! ヒント機能！🤖 一番点数の高い手を選んで、人間向けの説明文をつけるよ。

use log::{debug, info};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::components::card::Card;
use crate::components::game_state::GameState;
use crate::logic::moves::{enumerate_moves, Move};
use crate::logic::rules::{CardColor, RulesEngine};
use crate::logic::scoring::score_move;

/// 採点済みの手。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredMove {
    #[serde(rename = "move")]
    pub mv: Move,
    pub score: f64,
    pub reason: String,
}

/// UI に渡すヒント。手と説明文のセットだよ。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Suggestion {
    #[serde(rename = "move")]
    pub mv: Move,
    pub message: String,
}

/// 一番良さそうな手を選ぶよ。
///
/// - もう勝ってたら `GameWon` (点数は無限大)
/// - 手がなければ `NoMove`
/// - 同点なら先に列挙された手が勝つ。だから同じ盤面なら毎回同じヒントになる！
pub fn suggest_best_move(rules: &RulesEngine, state: &GameState) -> ScoredMove {
    if rules.is_game_won(&state.foundations) {
        return ScoredMove {
            mv: Move::GameWon,
            score: f64::INFINITY,
            reason: "All foundation piles complete".to_string(),
        };
    }

    let mut best: Option<ScoredMove> = None;
    let mut scored_count = 0usize;
    for mv in enumerate_moves(rules, state) {
        let scored = score_move(&mv, state);
        scored_count += 1;
        debug!(
            "AI: Scored move {}",
            json!({ "type": mv.kind(), "score": scored.score, "reason": scored.reason })
        );
        // 厳密に大きい時だけ入れ替える (同点は先勝ち)
        if best.as_ref().map_or(true, |b| scored.score > b.score) {
            best = Some(ScoredMove { mv, score: scored.score, reason: scored.reason });
        }
    }

    match best {
        Some(best) => {
            info!(
                "AI: Selected best move {}",
                json!({ "type": best.mv.kind(), "score": best.score, "reason": best.reason, "total": scored_count })
            );
            best
        }
        None => ScoredMove {
            mv: Move::NoMove,
            score: 0.0,
            reason: "No legal moves available".to_string(),
        },
    }
}

/// カードを「red 7」みたいに説明するよ。
fn describe_card(card: Option<&Card>) -> String {
    match card {
        Some(card) => {
            let color = CardColor::from_suit(card.suit);
            format!("{} {}", color.name(), card.rank.token())
        }
        None => "card".to_string(),
    }
}

/// 手を人間向けの文章にする。表示専用で、判断には使わないよ。列番号は 1 始まり。
pub fn explain_move(mv: &Move, state: &GameState) -> String {
    let card_at = |column: usize, index: usize| state.tableaus.get(column).and_then(|c| c.get(index));
    let column_top = |column: usize| state.tableaus.get(column).and_then(|c| c.last());

    match *mv {
        Move::TableauToFoundation { from_column, from_index, .. } => format!(
            "Move {} (purple highlight) from column {} to foundation pile (amber highlight) - building Ace to King by suit.",
            describe_card(card_at(from_column, from_index)),
            from_column + 1
        ),
        Move::WasteToFoundation { .. } => format!(
            "Move {} (purple highlight) from waste pile to foundation (amber highlight) - building Ace to King by suit.",
            describe_card(state.waste_top())
        ),
        Move::TableauToTableau { from_column, to_column, .. } => format!(
            "Move {} (purple highlight) from column {} to column {} (green highlight) - alternate red/black, descending.",
            describe_card(column_top(from_column)),
            from_column + 1,
            to_column + 1
        ),
        Move::TableauStackToTableau { from_column, from_index, to_column, length } => format!(
            "Move {}-card stack (purple highlight, starting with {}) from column {} to column {} (green highlight) - alternate colors.",
            length,
            describe_card(card_at(from_column, from_index)),
            from_column + 1,
            to_column + 1
        ),
        Move::WasteToTableau { to_column } => format!(
            "Move {} (purple highlight) from waste to column {} (green highlight) - alternate red/black, descending.",
            describe_card(state.waste_top()),
            to_column + 1
        ),
        Move::DrawStock => "Click the stock pile (green highlight) to draw a new card.".to_string(),
        Move::RecycleWaste => {
            "Click the stock pile (green highlight) to recycle waste cards back to stock.".to_string()
        }
        Move::GameWon => "Congratulations! All cards are in the foundation piles!".to_string(),
        Move::NoMove => {
            "No legal moves available. Try drawing from stock or starting a new game.".to_string()
        }
    }
}

/// ヒントを作る便利関数。`{ move, message }` を返すよ。
pub fn get_suggestion(rules: &RulesEngine, state: &GameState) -> Suggestion {
    let best = suggest_best_move(rules, state);
    let message = explain_move(&best.mv, state);
    debug!("AI: Explanation {}", json!({ "message": message }));
    Suggestion { mv: best.mv, message }
}
