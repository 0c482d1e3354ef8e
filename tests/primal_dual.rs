use rand::{rngs::SmallRng, Rng, SeedableRng};
use setcover::{
    solve, DualGrowingSolver, Instance, SetCoverSolver, SolverConfig, SolverError,
    ValidationError, DEFAULT_EPSILON,
};

/// Random instance where every element lies in at least one set.
fn random_feasible_instance(rng: &mut SmallRng, elements: usize, sets: usize) -> Instance {
    let mut members = vec![Vec::new(); sets];
    for e in 0..elements {
        members[rng.random_range(0..sets)].push(e);
        for set in members.iter_mut() {
            if rng.random_bool(0.25) {
                set.push(e);
            }
        }
    }

    let mut instance = Instance::new(elements);
    for elements in members {
        let cost = rng.random_range(0..10u32) as f64 + if rng.random_bool(0.5) { 0.5 } else { 0.0 };
        instance.add_set(cost, elements);
    }
    instance
}

fn brute_force_optimum(instance: &Instance) -> f64 {
    let m = instance.num_sets();
    let mut best = f64::INFINITY;
    for mask in 0u32..(1 << m) {
        let selection: Vec<usize> = (0..m).filter(|&s| mask & (1 << s) != 0).collect();
        if instance.covers(&selection) {
            best = best.min(instance.cost_of(&selection));
        }
    }
    best
}

fn set_loads(instance: &Instance, duals: &[f64]) -> Vec<f64> {
    instance
        .sets()
        .iter()
        .map(|elements| {
            let mut distinct = elements.clone();
            distinct.sort_unstable();
            distinct.dedup();
            distinct.iter().map(|&e| duals[e]).sum()
        })
        .collect()
}

#[test]
fn reference_instance_is_solved_literally() {
    let mut instance = Instance::new(5);
    instance.add_set(50.0, vec![0, 1]);
    instance.add_set(2.0, vec![1, 2, 3]);
    instance.add_set(3.0, vec![3, 4]);
    instance.add_set(2.0, vec![4, 0]);

    let cover = solve(&instance).unwrap();
    assert_eq!(cover.sets, vec![1, 3]);
    assert_eq!(cover.total_cost, 4.0);
    assert!(instance.covers(&cover.sets));
    assert!(!cover.contains(0));
}

#[test]
fn random_instances_are_covered_within_the_frequency_bound() {
    let mut rng = SmallRng::seed_from_u64(0x5e7c0de);
    for _ in 0..200 {
        let elements = rng.random_range(1..9);
        let sets = rng.random_range(1..9);
        let instance = random_feasible_instance(&mut rng, elements, sets);

        let cover = solve(&instance).unwrap();
        assert!(instance.covers(&cover.sets), "{:?}", instance);

        let optimum = brute_force_optimum(&instance);
        let f = instance.max_frequency() as f64;
        assert!(
            cover.total_cost <= f * optimum + 1e-9,
            "cost {} exceeds {} x {} on {:?}",
            cover.total_cost,
            f,
            optimum,
            instance
        );
        assert!(cover.dual_bound <= optimum + 1e-9);
        assert_eq!(cover.max_frequency, instance.max_frequency());
    }
}

#[test]
fn duals_never_overload_a_set() {
    let mut rng = SmallRng::seed_from_u64(17);
    for _ in 0..200 {
        let elements = rng.random_range(1..30);
        let sets = rng.random_range(1..15);
        let instance = random_feasible_instance(&mut rng, elements, sets);

        let cover = solve(&instance).unwrap();
        assert_eq!(cover.dual_values.len(), instance.element_count());
        assert!(cover.dual_values.iter().all(|&y| y >= 0.0));

        let loads = set_loads(&instance, &cover.dual_values);
        for (s, (&load, &cost)) in loads.iter().zip(instance.costs()).enumerate() {
            assert!(load <= cost + DEFAULT_EPSILON, "set {} load {} > cost {}", s, load, cost);
            assert_eq!(cover.contains(s), (cost - load).abs() < DEFAULT_EPSILON);
        }
    }
}

#[test]
fn repeated_solves_are_identical() {
    let mut rng = SmallRng::seed_from_u64(99);
    let instance = random_feasible_instance(&mut rng, 25, 12);

    let first = solve(&instance).unwrap();
    for _ in 0..5 {
        let again = solve(&instance).unwrap();
        assert_eq!(again.sets, first.sets);
        assert_eq!(again.dual_values, first.dual_values);
    }
}

#[test]
fn pruning_keeps_coverage_and_never_costs_more() {
    let mut rng = SmallRng::seed_from_u64(2024);
    let pruning = DualGrowingSolver::new(SolverConfig::default().with_pruning(true));
    for _ in 0..200 {
        let elements = rng.random_range(1..20);
        let sets = rng.random_range(1..12);
        let instance = random_feasible_instance(&mut rng, elements, sets);

        let plain = solve(&instance).unwrap();
        let pruned = pruning.solve(&instance).unwrap();

        assert!(instance.covers(&pruned.sets));
        assert!(pruned.total_cost <= plain.total_cost);
        assert!(pruned.sets.iter().all(|s| plain.contains(*s)));
        assert!(pruned.sets.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(pruned.dual_values, plain.dual_values);
    }
}

#[test]
fn any_uncovered_element_makes_the_instance_infeasible() {
    let mut rng = SmallRng::seed_from_u64(7);
    for _ in 0..50 {
        let elements = rng.random_range(2..20);
        let sets = rng.random_range(1..8);
        let instance = random_feasible_instance(&mut rng, elements, sets);

        // Rebuild the instance without one element.
        let missing = rng.random_range(0..elements);
        let sets: Vec<Vec<usize>> = instance
            .sets()
            .iter()
            .map(|s| s.iter().copied().filter(|&e| e != missing).collect())
            .collect();
        let holed = Instance::from_parts(elements, sets, instance.costs().to_vec());

        assert_eq!(
            solve(&holed),
            Err(SolverError::InfeasibleInstance { element: missing })
        );
    }
}

#[test]
fn empty_universe_is_not_infeasible() {
    let cover = solve(&Instance::new(0)).unwrap();
    assert!(cover.is_empty());
    assert_eq!(cover.total_cost, 0.0);
}

#[test]
fn validation_happens_before_solving() {
    // Element 3 is uncovered too, but the range error must win.
    let instance = Instance::new(4).with_set(1.0, [0, 1, 2, 7]);
    assert_eq!(
        solve(&instance),
        Err(SolverError::Validation(ValidationError::ElementOutOfRange {
            set: 0,
            element: 7,
            element_count: 4
        }))
    );

    let mismatched = Instance::from_parts(1, vec![vec![0]], vec![1.0, 2.0]);
    assert!(matches!(
        solve(&mismatched),
        Err(SolverError::Validation(ValidationError::CostCountMismatch { .. }))
    ));
}

#[test]
fn zero_cost_sets_covering_elements_are_selected() {
    let mut rng = SmallRng::seed_from_u64(31);
    for _ in 0..100 {
        let elements = rng.random_range(1..15);
        let sets = rng.random_range(1..10);
        let mut instance = random_feasible_instance(&mut rng, elements, sets);
        let free = instance.add_set(0.0, [rng.random_range(0..elements)]);

        let cover = solve(&instance).unwrap();
        assert!(cover.contains(free));
    }
}

#[test]
fn larger_epsilon_accepts_nearly_tight_sets() {
    let instance = Instance::new(5)
        .with_set(50.0, [0, 1])
        .with_set(2.0, [1, 2, 3])
        .with_set(3.0, [3, 4])
        .with_set(2.0, [4, 0]);

    let loose = DualGrowingSolver::new(SolverConfig::default().with_epsilon(3.5));
    assert_eq!(loose.solve(&instance).unwrap().sets, vec![1, 2, 3]);
}
