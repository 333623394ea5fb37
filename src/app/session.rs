// src/app/session.rs
//! 1ゲーム分のセッションだよ！🎮
//! 今の盤面と、最後に出したヒントを持ってる。UI はこれを通してだけゲームを動かすんだ。
//! 盤面を変える時は、状態遷移関数が作った新しい `GameState` に丸ごと入れ替えるよ。

use log::{debug, info};

use crate::components::game_state::{GameState, GameStatus};
use crate::components::stack::StackType;
use crate::config::rules_config::RulesConfig;
use crate::logic::advisor::{get_suggestion, Suggestion};
use crate::logic::auto_move;
use crate::logic::deck::{deal_random, deal_with_seed};
use crate::logic::moves::Move;
use crate::logic::rules::RulesEngine;
use crate::logic::transitions;

#[derive(Debug, Clone)]
pub struct GameSession {
    rules: RulesEngine,
    state: GameState,
    current_suggestion: Option<Move>,
}

impl GameSession {
    /// ランダムに配った新しいゲーム。
    pub fn new(config: RulesConfig) -> Self {
        Self::from_state(config, deal_random())
    }

    /// シード付きで配ったゲーム。同じシードなら同じ配り方！
    pub fn with_seed(config: RulesConfig, seed: u64) -> Self {
        Self::from_state(config, deal_with_seed(seed))
    }

    /// 決まった盤面から始める (テストやデバッグ用)。
    pub fn from_state(config: RulesConfig, state: GameState) -> Self {
        Self { rules: RulesEngine::new(config), state, current_suggestion: None }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn rules(&self) -> &RulesEngine {
        &self.rules
    }

    /// 新しいゲームを配り直す。古いヒントも消すよ。
    pub fn reset_game(&mut self) {
        info!("🔄 New game started");
        self.state = deal_random();
        self.current_suggestion = None;
    }

    /// シード付きで配り直す。
    pub fn reset_game_with_seed(&mut self, seed: u64) {
        info!("🔄 New game started (seed {})", seed);
        self.state = deal_with_seed(seed);
        self.current_suggestion = None;
    }

    /// 盤面を入れ替えて、変わったかどうかを返す。どんな操作の後でもヒントは消す。
    fn commit(&mut self, next: GameState) -> bool {
        self.current_suggestion = None;
        if next == self.state {
            return false;
        }
        self.state = next;
        true
    }

    pub fn move_cards(&mut self, from_column: usize, from_index: usize, to_column: usize) -> bool {
        let next = transitions::move_cards(&self.rules, &self.state, from_column, from_index, to_column);
        self.commit(next)
    }

    pub fn draw_one(&mut self) -> bool {
        let next = transitions::draw_one(&self.rules, &self.state);
        self.commit(next)
    }

    pub fn move_waste_to_tableau(&mut self, to_column: usize) -> bool {
        let next = transitions::move_waste_to_tableau(&self.rules, &self.state, to_column);
        self.commit(next)
    }

    pub fn move_to_foundation(&mut self, from_column: usize, from_index: usize, foundation_index: usize) -> bool {
        let next = transitions::move_to_foundation(&self.rules, &self.state, from_column, from_index, foundation_index);
        self.commit(next)
    }

    pub fn move_waste_to_foundation(&mut self, foundation_index: usize) -> bool {
        let next = transitions::move_waste_to_foundation(&self.rules, &self.state, foundation_index);
        self.commit(next)
    }

    /// ダブルクリックされた山の一番上を、置ける組札に自動で送る。
    pub fn auto_move_to_foundation(&mut self, source: StackType) -> bool {
        let next = auto_move::auto_move_to_foundation(&self.rules, &self.state, source);
        self.commit(next)
    }

    /// ヒントを出して、その手を覚えておくよ (UI のハイライト用)。
    pub fn suggest_move(&mut self) -> Suggestion {
        let suggestion = get_suggestion(&self.rules, &self.state);
        debug!("🤖 AI Suggestion generated: {:?} {}", suggestion.mv.kind(), suggestion.message);
        self.current_suggestion = Some(suggestion.mv);
        suggestion
    }

    pub fn current_suggestion(&self) -> Option<&Move> {
        self.current_suggestion.as_ref()
    }

    pub fn clear_suggestion(&mut self) {
        self.current_suggestion = None;
    }

    /// 覚えてるヒントの手を実行する。盤面が変わったら true。
    /// 結果に関係なく、ヒントは消えるよ (同じヒントを二回使わないように)。
    pub fn apply_suggested_move(&mut self) -> bool {
        let Some(mv) = self.current_suggestion.take() else {
            return false;
        };
        let next = transitions::apply_move(&self.rules, &self.state, &mv);
        self.commit(next)
    }

    /// 勝ってる？ 何回呼んでも同じ答え。
    pub fn check_win(&self) -> bool {
        self.rules.is_game_won(&self.state.foundations)
    }

    pub fn status(&self) -> GameStatus {
        if self.check_win() {
            GameStatus::Won
        } else {
            GameStatus::Playing
        }
    }
}
