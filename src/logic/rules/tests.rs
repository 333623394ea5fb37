// src/logic/rules/tests.rs
//! rules モジュール内の関数のユニットテスト。

use super::*;
use crate::components::card::{Card, Rank, Suit};
use crate::components::stack::StackType;
use crate::config::rules_config::{AllowOnEmpty, BuildDirection, RulesConfig};
use crate::logic::test_support::{down, foundation_run, up, won_state};

fn engine() -> RulesEngine {
    RulesEngine::new(RulesConfig::klondike())
}

// --- 各ルール関数のテスト ---

#[test]
fn test_card_color() {
    assert_eq!(CardColor::from_suit(Suit::Hearts), CardColor::Red);
    assert_eq!(CardColor::from_suit(Suit::Diamonds), CardColor::Red);
    assert_eq!(CardColor::from_suit(Suit::Clubs), CardColor::Black);
    assert_eq!(CardColor::from_suit(Suit::Spades), CardColor::Black);
    println!("CardColor テスト、成功！🎉");
}

#[test]
fn test_foundation_start_rank() {
    let rules = engine();
    assert!(rules.can_place_on_foundation(&up(Suit::Hearts, Rank::Ace), &[]), "空の組札にエースは置けるはず");
    assert!(!rules.can_place_on_foundation(&up(Suit::Hearts, Rank::Two), &[]), "空の組札に2は置けないはず");
    println!("組札のスタートランクテスト、成功！🎉");
}

#[test]
fn test_foundation_sequence() {
    let rules = engine();
    let hearts = foundation_run(Suit::Hearts, Rank::Two);

    assert!(rules.can_place_on_foundation(&up(Suit::Hearts, Rank::Three), &hearts));
    assert!(!rules.can_place_on_foundation(&up(Suit::Spades, Rank::Three), &hearts), "スート違いはダメ");
    assert!(!rules.can_place_on_foundation(&up(Suit::Hearts, Rank::Four), &hearts), "ランク飛ばしはダメ");
    assert!(!rules.can_place_on_foundation(&up(Suit::Hearts, Rank::Two), &hearts), "同じランクはダメ");
}

#[test]
fn test_foundation_without_suit_matching() {
    let mut config = RulesConfig::klondike();
    config.foundation.match_suit = false;
    let rules = RulesEngine::new(config);
    let hearts = foundation_run(Suit::Hearts, Rank::Ace);
    assert!(rules.can_place_on_foundation(&up(Suit::Spades, Rank::Two), &hearts));
}

#[test]
fn test_tableau_empty_column_rules() {
    let rules = engine();
    assert!(rules.can_place_on_tableau(&up(Suit::Spades, Rank::King), &[]), "空の列にキングは置けるはず");
    assert!(!rules.can_place_on_tableau(&up(Suit::Hearts, Rank::Queen), &[]), "空の列にクイーンは置けないはず");

    let mut config = RulesConfig::klondike();
    config.tableau.allow_on_empty = AllowOnEmpty::Flag(true);
    let anything = RulesEngine::new(config);
    assert!(anything.can_place_on_tableau(&up(Suit::Hearts, Rank::Five), &[]));

    let mut config = RulesConfig::klondike();
    config.tableau.allow_on_empty = AllowOnEmpty::Flag(false);
    let nothing = RulesEngine::new(config);
    assert!(!nothing.can_place_on_tableau(&up(Suit::Spades, Rank::King), &[]));
    println!("空の場札ルールテスト、成功！🎉");
}

#[test]
fn test_tableau_color_and_rank() {
    let rules = engine();
    let column = vec![up(Suit::Hearts, Rank::Queen)];

    assert!(rules.can_place_on_tableau(&up(Suit::Spades, Rank::Jack), &column), "Q❤️ に J♠️ は置けるはず");
    assert!(!rules.can_place_on_tableau(&up(Suit::Diamonds, Rank::Jack), &column), "同色はダメ");
    assert!(!rules.can_place_on_tableau(&up(Suit::Spades, Rank::Ten), &column), "ランク違いはダメ");
    assert!(!rules.can_place_on_tableau(&up(Suit::Spades, Rank::King), &column), "上のランクはダメ");
}

#[test]
fn test_tableau_ascending_variant() {
    let mut config = RulesConfig::klondike();
    config.tableau.build_direction = BuildDirection::Ascending;
    config.tableau.alternate_colors = false;
    let rules = RulesEngine::new(config);
    let column = vec![up(Suit::Hearts, Rank::Five)];
    assert!(rules.can_place_on_tableau(&up(Suit::Hearts, Rank::Six), &column));
    assert!(!rules.can_place_on_tableau(&up(Suit::Hearts, Rank::Four), &column));
}

#[test]
fn test_unresolvable_ranks_fail_closed() {
    // jack の数値を消すと、ジャックはどこにも置けなくなる
    let mut config = RulesConfig::klondike();
    config.rank_values.remove("jack");
    config.rank_aliases.remove("j");
    let rules = RulesEngine::new(config);

    let jack = up(Suit::Spades, Rank::Jack);
    assert!(!rules.can_place_on_tableau(&jack, &[up(Suit::Hearts, Rank::Queen)]));
    assert!(!rules.can_place_on_tableau(&up(Suit::Hearts, Rank::Ten), &[jack.clone()]));
    assert!(!rules.can_place_on_foundation(&jack, &foundation_run(Suit::Spades, Rank::Ten)));

    // 色が分からないスートも交互チェックで false
    let mut config = RulesConfig::klondike();
    config.suit_colors.remove("spades");
    let rules = RulesEngine::new(config);
    assert!(!rules.can_place_on_tableau(&up(Suit::Spades, Rank::Jack), &[up(Suit::Hearts, Rank::Queen)]));
    println!("壊れた設定での判定テスト、成功！🎉");
}

#[test]
fn test_drag_rules() {
    let rules = engine();
    assert!(rules.can_drag_card(&up(Suit::Clubs, Rank::Nine)));
    assert!(!rules.can_drag_card(&down(Suit::Clubs, Rank::Nine)));

    let column = vec![
        down(Suit::Clubs, Rank::Two),
        up(Suit::Spades, Rank::Nine),
        up(Suit::Hearts, Rank::Eight),
        up(Suit::Clubs, Rank::Seven),
    ];
    assert!(!rules.can_drag_stack_from(&column, 0), "裏向きからは持てない");
    assert!(rules.can_drag_stack_from(&column, 1));
    assert!(rules.can_drag_stack_from(&column, 2));
    assert!(rules.can_drag_stack_from(&column, 3), "一番上の1枚だけでもOK");
    assert!(!rules.can_drag_stack_from(&column, 4), "範囲外はダメ");

    let broken = vec![
        up(Suit::Spades, Rank::Nine),
        up(Suit::Clubs, Rank::Eight), // 同色
        up(Suit::Hearts, Rank::Seven),
    ];
    assert!(!rules.can_drag_stack_from(&broken, 0));
    assert!(rules.can_drag_stack_from(&broken, 1));
}

#[test]
fn test_stock_waste_rules() {
    let rules = engine();
    let stock = vec![down(Suit::Hearts, Rank::Ace)];
    let waste = vec![up(Suit::Hearts, Rank::Two)];

    // ストックがある場合
    assert!(rules.can_draw_from_stock(&stock), "ストックがあれば引けるはず");
    assert!(!rules.can_recycle_waste(&stock, &waste), "ストックがある場合はリサイクルできないはず");

    // ストックが空の場合
    assert!(!rules.can_draw_from_stock(&[]), "ストックが空なら引けないはず");
    assert!(rules.can_recycle_waste(&[], &waste), "ストックが空でウェストにあればリサイクルできるはず");
    assert!(!rules.can_recycle_waste(&[], &[]), "ストックもウェストも空ならリサイクルできないはず");

    assert!(rules.can_drag_from_waste(&waste));
    assert!(!rules.can_drag_from_waste(&[]));

    // 3枚引きのルールだと、2枚しかない山札からは引けない
    let mut config = RulesConfig::klondike();
    config.stock.draw_count = 3;
    let draw_three = RulesEngine::new(config);
    assert!(!draw_three.can_draw_from_stock(&[down(Suit::Clubs, Rank::Ace), down(Suit::Clubs, Rank::Two)]));
    println!("Stock/Waste ルールテスト、成功！🎉");
}

#[test]
fn test_win_condition() {
    let rules = engine();
    let mut state = won_state();
    assert!(rules.is_game_won(&state.foundations), "全部の組札が13枚ならクリアなはず！🏆");

    state.foundations[2].pop();
    assert!(!rules.is_game_won(&state.foundations), "12枚の組札があればクリアじゃないはず！🙅");

    let three_piles: Vec<Vec<Card>> = won_state().foundations.into_iter().take(3).collect();
    assert!(!rules.is_game_won(&three_piles), "組札の数が足りないとクリアじゃない");
    println!("ゲームクリア判定テスト、成功！🎉");
}

#[test]
fn test_find_foundation_and_generic_place() {
    let rules = engine();
    let mut foundations = vec![Vec::new(); 4];
    foundations[2] = foundation_run(Suit::Clubs, Rank::Ace);

    assert_eq!(rules.find_foundation_for(&up(Suit::Clubs, Rank::Two), &foundations), Some(2));
    assert_eq!(rules.find_foundation_for(&up(Suit::Hearts, Rank::Ace), &foundations), Some(0));
    assert_eq!(rules.find_foundation_for(&down(Suit::Hearts, Rank::Ace), &foundations), None, "裏向きはダメ");
    assert_eq!(rules.find_foundation_for(&up(Suit::Hearts, Rank::Three), &foundations), None);

    let king = up(Suit::Spades, Rank::King);
    assert!(rules.can_place(&king, &[], StackType::Tableau(0)));
    assert!(!rules.can_place(&king, &[], StackType::Foundation(0)));
    assert!(!rules.can_place(&king, &[], StackType::Waste));
}
