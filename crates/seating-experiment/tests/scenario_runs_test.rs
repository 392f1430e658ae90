//! Integration tests for preset and generated scenario runs.
//!
//! Tests the full flow of:
//! - ScenarioSpec -> ExperimentRunner -> RunResult
//! - bench collection, summary and JSON persistence

use seating_experiment::{
    BenchResults, ExperimentRunner, GeneratorConfig, Scenario, ScenarioGenerator,
};
use seating_kernel::{has_violation, RepairStrategy, SeatingConfig};
use uuid::Uuid;

fn runner() -> ExperimentRunner {
    ExperimentRunner::new(SeatingConfig::default()).expect("default config is valid")
}

#[test]
fn test_presets_leave_no_seated_party_in_violation() {
    let runner = runner();
    for scenario in Scenario::presets() {
        let spec = scenario.spec();
        let (outcome, result) = runner.run(&spec).unwrap();

        for (party, seats) in outcome.placements.iter() {
            assert!(
                !has_violation(seats, 3),
                "{}: party {} too close: {:?}",
                spec.name,
                party,
                seats
            );
            if result.unresolved.contains(&party) {
                assert!(seats.is_empty());
            }
        }
        assert_eq!(result.grid.len(), spec.rows);
    }
}

#[test]
fn test_generated_scenarios_with_reserved_seats() {
    let mut generator = ScenarioGenerator::new(GeneratorConfig {
        rows: 5,
        cols: 5,
        parties: 3,
        party_size_range: (2, 3),
        reserved_cells: 4,
        seed: Some(2024),
    })
    .unwrap();

    let runner = runner();
    for spec in generator.generate_batch(3) {
        let (outcome, _) = runner.run(&spec).unwrap();
        for seat in &spec.reserved {
            assert!(
                outcome.grid.get(*seat).is_some_and(|c| c.party().is_none() && !c.is_empty()),
                "reserved seat {} was reassigned",
                seat
            );
        }
    }
}

#[test]
fn test_frontier_matches_combinations_on_pairs() {
    let spec = Scenario::Pairs.spec();
    let frontier = ExperimentRunner::new(SeatingConfig::default().with_repair(RepairStrategy::Frontier))
        .unwrap();
    let (a, _) = frontier.run(&spec).unwrap();
    let (b, _) = runner().run(&spec).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_bench_results_save_and_load() {
    let results = runner()
        .bench(&[Scenario::Pairs.spec()], 2)
        .unwrap();

    let path = std::env::temp_dir()
        .join(format!("seating-bench-{}", Uuid::new_v4()))
        .join("bench.json");
    results.save(&path).unwrap();
    let loaded = BenchResults::load(&path).unwrap();

    assert_eq!(loaded.results.len(), 2);
    assert_eq!(loaded.summary["pairs"].trials, 2);
    assert_eq!(loaded.results[0].grid, results.results[0].grid);

    if let Some(dir) = path.parent() {
        let _ = std::fs::remove_dir_all(dir);
    }
}
