//! Property tests for the placement pipeline.
//!
//! Invariants covered:
//! - A rejected placement changes neither the grid nor the score.
//! - After an accepted placement no row or column is left full.
//! - Score deltas match the block and line formulas exactly.
//! - Every aligned window of `catalog.len()` draws is a permutation of the catalog.
//! - The move search agrees with a scan of every origin on the grid.
//! - The game-over flag is raised by exactly one turn report.

use proptest::prelude::*;

use blockfit::autoplay::{Greedy, Strategy as MoveStrategy};
use blockfit::core::{
    default_catalog, extended_catalog, has_any_move, valid_origins, Grid, ScoreRules, Shape,
    ShapeSupply, SimpleRng,
};
use blockfit::engine::{GameSession, PlacementEngine, SessionConfig};

fn arb_grid() -> impl Strategy<Value = Grid> {
    (2usize..=8, 2usize..=8).prop_flat_map(|(rows, cols)| {
        proptest::collection::vec(any::<bool>(), rows * cols).prop_map(move |cells| {
            let mut grid = Grid::new(rows, cols).unwrap();
            for (i, occupied) in cells.into_iter().enumerate() {
                grid.set((i / cols) as i32, (i % cols) as i32, occupied);
            }
            grid
        })
    })
}

fn no_full_lines(grid: &Grid) -> bool {
    (0..grid.rows()).all(|r| !grid.is_row_full(r))
        && (0..grid.columns()).all(|c| !grid.is_column_full(c))
}

fn fits_somewhere_by_full_scan(shape: &Shape, grid: &Grid) -> bool {
    (0..grid.rows() as i32)
        .any(|r| (0..grid.columns() as i32).any(|c| grid.can_accommodate(shape, r, c)))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn placement_is_atomic_and_scored_exactly(
        grid in arb_grid(),
        shape_idx in 0usize..13,
        row in -2i32..10,
        col in -2i32..10,
    ) {
        let shape = default_catalog().swap_remove(shape_idx);
        let rules = ScoreRules::default();
        let mut engine = PlacementEngine::new(grid.clone(), rules, 0);

        let outcome = engine.place(&shape, row, col);
        if outcome.accepted {
            prop_assert!(no_full_lines(engine.grid()));
            prop_assert_eq!(outcome.placement_points, rules.placement_score(shape.block_count()));
            prop_assert_eq!(outcome.line_points, rules.line_clear_score(outcome.lines_cleared()));
            prop_assert_eq!(outcome.new_score, outcome.points());
            prop_assert!(
                engine.grid().occupied_count() <= grid.occupied_count() + shape.block_count()
            );
        } else {
            prop_assert!(outcome.rejection.is_some());
            prop_assert_eq!(engine.grid(), &grid);
            prop_assert_eq!(engine.score().current(), 0);
            prop_assert!(!grid.can_accommodate(&shape, row, col));
        }
    }

    #[test]
    fn move_search_matches_full_scan(
        grid in arb_grid(),
        shapes in proptest::sample::subsequence(extended_catalog(), 0..=4),
    ) {
        let expected = shapes.iter().any(|s| fits_somewhere_by_full_scan(s, &grid));
        prop_assert_eq!(has_any_move(&shapes, &grid), expected);

        for shape in &shapes {
            let pruned = valid_origins(shape, &grid).count();
            let full = (0..grid.rows() as i32)
                .flat_map(|r| (0..grid.columns() as i32).map(move |c| (r, c)))
                .filter(|&(r, c)| grid.can_accommodate(shape, r, c))
                .count();
            prop_assert_eq!(pruned, full);
        }
    }

    #[test]
    fn bag_windows_are_permutations(seed in any::<u32>(), lookahead in 1usize..6) {
        let catalog = default_catalog();
        let span = catalog.len();
        let mut supply = ShapeSupply::new(catalog, 10, 10, lookahead, SimpleRng::new(seed)).unwrap();

        for _ in 0..3 {
            let mut seen = vec![0usize; span];
            for _ in 0..span {
                let shape = supply.take_next();
                let idx = supply
                    .catalog()
                    .iter()
                    .position(|s| s.name() == shape.name())
                    .unwrap();
                seen[idx] += 1;
            }
            prop_assert!(seen.iter().all(|&n| n == 1));
        }
    }

    #[test]
    fn rollout_keeps_session_invariants(seed in any::<u32>()) {
        let mut session = GameSession::new(SessionConfig::default(), SimpleRng::new(seed)).unwrap();
        let mut strategy = Greedy;
        let mut signals = 0;
        let mut last_score = 0;

        for _ in 0..150 {
            if session.is_game_over() {
                break;
            }
            let mv = strategy.choose(session.grid(), session.slots()).unwrap();
            let report = session.place(mv.slot, mv.row, mv.col).unwrap();
            prop_assert!(report.outcome.accepted);
            prop_assert!(report.outcome.new_score > last_score);
            last_score = report.outcome.new_score;
            if report.game_over {
                signals += 1;
            }
        }
        prop_assert!(signals <= 1);
        prop_assert_eq!(signals == 1, session.is_game_over());
    }
}
