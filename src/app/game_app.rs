// src/app/game_app.rs

// --- 必要なものをインポート ---
use log::{error, info};
use wasm_bindgen::prelude::*;

use crate::app::session::GameSession;
use crate::components::stack::StackType;
use crate::config::rules_config::RulesConfig;

// --- ブラウザ (JavaScript) 側から使うゲームの入り口 ---
// 中身はほぼ GameSession への委譲。データは全部 JSON 文字列でやりとりするよ！
#[wasm_bindgen]
pub struct GameApp {
    session: GameSession,
}

// GameApp 構造体のメソッドを実装していくよ！
#[wasm_bindgen]
impl GameApp {
    /// 標準クロンダイクのルールで、ランダムに配ったゲームを作る。
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        info!("GameApp: Initializing...");
        Self { session: GameSession::new(RulesConfig::klondike()) }
    }

    /// シード付きで配る。
    pub fn with_seed(seed: u64) -> Self {
        Self { session: GameSession::with_seed(RulesConfig::klondike(), seed) }
    }

    /// JSON のルール設定でゲームを作る。設定がおかしければエラー文字列を返すよ。
    pub fn with_rules_json(rules_json: &str) -> Result<GameApp, String> {
        match RulesConfig::from_json(rules_json) {
            Ok(config) => Ok(Self { session: GameSession::new(config) }),
            Err(e) => {
                let error_msg = format!("Failed to load rules: {}", e);
                error!("{}", error_msg);
                Err(error_msg)
            }
        }
    }

    /// 新しいゲームを配り直す。
    pub fn new_game(&mut self) {
        self.session.reset_game();
    }

    /// 今の盤面を JSON 文字列で返す。
    pub fn state_json(&self) -> Result<String, String> {
        serde_json::to_string(self.session.state()).map_err(|e| {
            let error_msg = format!("Failed to serialize game state: {}", e);
            error!("{}", error_msg);
            error_msg
        })
    }

    /// 読み取り専用のルール設定 (デバッグ表示用)。
    pub fn rules_json(&self) -> Result<String, String> {
        serde_json::to_string(self.session.rules().config()).map_err(|e| e.to_string())
    }

    /// ヒントを `{"move": {...}, "message": "..."}` の JSON で返す。
    pub fn suggest_move(&mut self) -> Result<String, String> {
        let suggestion = self.session.suggest_move();
        serde_json::to_string(&suggestion).map_err(|e| e.to_string())
    }

    pub fn apply_suggested_move(&mut self) -> bool {
        self.session.apply_suggested_move()
    }

    pub fn clear_suggestion(&mut self) {
        self.session.clear_suggestion();
    }

    pub fn draw_one(&mut self) -> bool {
        self.session.draw_one()
    }

    pub fn move_cards(&mut self, from_column: usize, from_index: usize, to_column: usize) -> bool {
        self.session.move_cards(from_column, from_index, to_column)
    }

    pub fn move_waste_to_tableau(&mut self, to_column: usize) -> bool {
        self.session.move_waste_to_tableau(to_column)
    }

    pub fn move_to_foundation(&mut self, from_column: usize, from_index: usize, foundation_index: usize) -> bool {
        self.session.move_to_foundation(from_column, from_index, foundation_index)
    }

    pub fn move_waste_to_foundation(&mut self, foundation_index: usize) -> bool {
        self.session.move_waste_to_foundation(foundation_index)
    }

    /// 場札の列の一番上を組札へ自動移動 (ダブルクリック)。
    pub fn auto_move_column_to_foundation(&mut self, column: usize) -> bool {
        self.session.auto_move_to_foundation(StackType::Tableau(column))
    }

    pub fn auto_move_waste_to_foundation(&mut self) -> bool {
        self.session.auto_move_to_foundation(StackType::Waste)
    }

    pub fn is_won(&self) -> bool {
        self.session.check_win()
    }
}

impl Default for GameApp {
    fn default() -> Self {
        Self::new()
    }
}
