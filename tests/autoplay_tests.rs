//! Autoplay runner tests - full sessions end to end

use blockfit::autoplay::{play_game, run_games, FirstFit, Greedy, StrategyKind};
use blockfit::config::{apply_overrides, Overrides};
use blockfit::core::LevelPattern;
use blockfit::engine::SessionConfig;
use blockfit::types::RefillPolicy;

#[test]
fn test_game_ends_by_game_over_or_cap() {
    let summary = play_game(SessionConfig::default(), 42, &mut FirstFit, 5_000).unwrap();
    assert!(summary.game_over || summary.turns == 5_000);
    assert!(summary.turns > 0);
    assert!(summary.score >= 10 * summary.blocks_placed as u32);
    assert_eq!(summary.best_score, summary.score);
}

#[test]
fn test_same_seed_same_game() {
    let a = play_game(SessionConfig::default(), 9, &mut Greedy, 500).unwrap();
    let b = play_game(SessionConfig::default(), 9, &mut Greedy, 500).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_best_score_carries_between_games() {
    let summaries = run_games(SessionConfig::default(), 100, 4, StrategyKind::FirstFit, 2_000).unwrap();
    assert_eq!(summaries.len(), 4);
    assert_eq!(
        summaries.iter().map(|s| s.seed).collect::<Vec<_>>(),
        vec![100, 101, 102, 103]
    );

    let mut best = 0;
    for summary in &summaries {
        best = best.max(summary.score);
        assert_eq!(summary.best_score, best);
    }
}

#[test]
fn test_patterns_alternate_across_games() {
    let config = SessionConfig {
        patterns: vec![
            LevelPattern::new("left", vec![(0, 0), (1, 0)]),
            LevelPattern::new("right", vec![(0, 9), (1, 9)]),
        ],
        pattern_chance_percent: 100,
        ..SessionConfig::default()
    };
    let summaries = run_games(config, 7, 6, StrategyKind::Greedy, 20).unwrap();
    for pair in summaries.windows(2) {
        assert_ne!(pair[0].pattern_id, pair[1].pattern_id);
    }
}

#[test]
fn test_when_all_empty_small_grid() {
    let overrides = Overrides {
        rows: Some(6),
        columns: Some(6),
        refill: Some(RefillPolicy::WhenAllEmpty),
        ..Overrides::default()
    };
    let config = apply_overrides(SessionConfig::default(), &overrides);
    let summary = play_game(config, 3, &mut Greedy, 2_000).unwrap();
    assert!(summary.game_over || summary.turns == 2_000);
    assert!(summary.blocks_placed >= u64::from(summary.turns));

    let json = serde_json::to_value(&summary).unwrap();
    assert_eq!(json["strategy"], "greedy");
    assert!(json.get("pattern_id").is_none());
}
