use itertools::Itertools;
use quince_solver::solve_with_strategy;
use quince_solver::CostMatrix;
use quince_solver::ExecutionId;
use quince_solver::ExecutionLedger;
use quince_solver::Instance;
use quince_solver::StrategyDetail;
use quince_solver::StrategyKind;
use rand::rngs::SmallRng;
use rand::Rng;
use rand::SeedableRng;

const STRATEGIES: [StrategyKind; 4] = [
    StrategyKind::BranchAndBound,
    StrategyKind::Greedy,
    StrategyKind::Flow,
    StrategyKind::Hungarian,
];

fn instance(rows: Vec<Vec<f64>>) -> Instance {
    Instance::new(CostMatrix::from_rows(rows).unwrap())
}

fn random_instance(rng: &mut SmallRng, n: usize) -> Instance {
    let rows = (0..n)
        .map(|_| (0..n).map(|_| f64::from(rng.gen_range(0..25))).collect())
        .collect();
    instance(rows)
}

fn brute_force_cost(instance: &Instance) -> f64 {
    let matrix = instance.matrix();
    let n = matrix.dimension();

    (0..n)
        .permutations(n)
        .map(|assignment| matrix.assignment_cost(&assignment))
        .fold(f64::INFINITY, f64::min)
}

#[test]
fn every_strategy_produces_a_feasible_assignment() {
    let mut rng = SmallRng::seed_from_u64(3);

    for _ in 0..5 {
        let instance = random_instance(&mut rng, 5);

        for kind in STRATEGIES {
            let outcome = solve_with_strategy(&instance, kind);

            let mut jobs = outcome.assignment.clone();
            jobs.sort_unstable();
            assert_eq!((0..5).collect::<Vec<_>>(), jobs);
            assert_eq!(
                instance.matrix().assignment_cost(&outcome.assignment),
                outcome.cost.unwrap()
            );
        }
    }
}

#[test]
fn exact_strategies_agree_with_the_oracle() {
    let mut rng = SmallRng::seed_from_u64(17);

    for n in 2..=6 {
        let instance = random_instance(&mut rng, n);
        let expected = brute_force_cost(&instance);

        for kind in [
            StrategyKind::BranchAndBound,
            StrategyKind::Flow,
            StrategyKind::Hungarian,
        ] {
            let outcome = solve_with_strategy(&instance, kind);
            assert!(
                (outcome.cost.unwrap() - expected).abs() < 1e-9,
                "{kind:?} should be exact"
            );
        }
    }
}

#[test]
fn greedy_never_beats_the_optimum() {
    let mut rng = SmallRng::seed_from_u64(29);

    for _ in 0..10 {
        let instance = random_instance(&mut rng, 4);
        let expected = brute_force_cost(&instance);

        let outcome = solve_with_strategy(&instance, StrategyKind::Greedy);
        assert!(outcome.cost.unwrap() >= expected - 1e-9);
    }
}

#[test]
fn only_branch_and_bound_reports_a_tree_and_history() {
    let instance = instance(vec![vec![1.0, 2.0], vec![2.0, 1.0]]);

    for kind in STRATEGIES {
        let outcome = solve_with_strategy(&instance, kind);
        let has_search_detail = matches!(outcome.detail, StrategyDetail::BranchAndBound { .. });

        assert_eq!(kind == StrategyKind::BranchAndBound, has_search_detail);
    }
}

#[test]
fn branch_and_bound_detail_serializes_with_tree_and_history() {
    let instance = instance(vec![vec![1.0, 2.0], vec![2.0, 1.0]]);
    let outcome = solve_with_strategy(&instance, StrategyKind::BranchAndBound);

    let json = serde_json::to_value(&outcome).unwrap();

    assert_eq!("branch-and-bound", json["strategy"]);
    assert_eq!(2.0, json["cost"]);
    assert_eq!(0, json["tree"]["id"]);
    assert_eq!("optimal", json["tree"]["status"]);
    assert!(!json["history"].as_array().unwrap().is_empty());
}

#[test]
fn capacities_and_durations_are_accepted_by_every_strategy() {
    let instance = instance(vec![vec![1.0, 2.0], vec![2.0, 1.0]])
        .with_worker_capacities(vec![1.0, 1.0])
        .unwrap()
        .with_job_durations(vec![3.0, 4.0])
        .unwrap();

    for kind in STRATEGIES {
        let outcome = solve_with_strategy(&instance, kind);
        assert_eq!(Some(2.0), outcome.cost);
    }
}

#[test]
fn the_ledger_hands_out_sequential_ids_and_keeps_records_immutable() {
    let mut ledger = ExecutionLedger::default();
    let instance = instance(vec![vec![1.0, 2.0], vec![2.0, 1.0]]);

    for (index, kind) in STRATEGIES.into_iter().enumerate() {
        let outcome = solve_with_strategy(&instance, kind);
        let id = ledger.record(kind, outcome);

        assert_eq!(ExecutionId::from(index as u32), id);
    }

    assert_eq!(STRATEGIES.len(), ledger.len());
    let record = ledger.get(ExecutionId::from(1)).unwrap();
    assert_eq!(StrategyKind::Greedy, record.strategy);
    assert_eq!(Some(2.0), record.outcome.cost);
}

#[test]
fn a_failed_validation_leaves_no_trace_in_the_ledger() {
    let ledger = ExecutionLedger::default();

    let invalid = CostMatrix::from_rows(vec![vec![1.0, 2.0], vec![3.0]]);
    assert!(invalid.is_err());

    // The matrix never became an instance, so nothing was recorded.
    assert!(ledger.is_empty());
}
