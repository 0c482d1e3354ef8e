// Primal-dual solver for weighted set cover
// Grows one dual variable per element and selects the sets whose dual
// constraint becomes tight. The cover costs at most f times the optimum,
// where f is the largest number of sets sharing a single element.

use crate::domain::{
    models::{count_u32, Cover, Instance, SolverConfig, SolverStatistics},
    solver_service::{Result, SetCoverSolver, SolverError},
};
use crate::solver::{CoverageIndex, RedundancyPruner};
use std::time::Instant;
use tracing::{debug, trace, warn};

pub struct DualGrowingSolver {
    config: SolverConfig,
}

impl DualGrowingSolver {
    pub fn new(config: SolverConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Raise every element's dual as far as the constraints of its covering
    /// sets allow, in increasing element order. Returns the duals and the
    /// per-set loads.
    fn grow_duals(
        &self,
        instance: &Instance,
        coverage: &CoverageIndex,
    ) -> Result<(Vec<f64>, Vec<f64>)> {
        let costs = instance.costs();
        let mut load = vec![0.0; instance.num_sets()];
        let mut duals = vec![0.0; instance.element_count()];

        for (element, dual) in duals.iter_mut().enumerate() {
            let covering = coverage.covering_sets(element);

            let increment = covering
                .iter()
                .map(|&s| costs[s] - load[s])
                .fold(f64::INFINITY, f64::min);

            // An empty row leaves the dual unbounded, so the primal is infeasible.
            if increment == f64::INFINITY {
                warn!(element, "element is not contained in any set");
                return Err(SolverError::InfeasibleInstance { element });
            }

            // Sets that bound the increment become exactly tight; adding the
            // increment to a large load could round past the cost.
            *dual = increment;
            for &s in covering {
                if costs[s] - load[s] - increment <= self.config.epsilon {
                    load[s] = costs[s];
                } else {
                    load[s] += increment;
                }
                debug_assert!(load[s] <= costs[s]);
            }

            if self.config.verbose {
                debug!(element, increment, covering = covering.len(), "raised dual");
            } else {
                trace!(element, increment, covering = covering.len(), "raised dual");
            }
        }

        Ok((duals, load))
    }

    fn tight_sets(&self, instance: &Instance, load: &[f64]) -> Vec<usize> {
        instance
            .costs()
            .iter()
            .zip(load)
            .enumerate()
            .filter(|(_, (&cost, &paid))| (cost - paid).abs() < self.config.epsilon)
            .map(|(s, _)| s)
            .collect()
    }
}

impl Default for DualGrowingSolver {
    fn default() -> Self {
        Self::new(SolverConfig::default())
    }
}

impl SetCoverSolver for DualGrowingSolver {
    fn solve(&self, instance: &Instance) -> Result<Cover> {
        // Validate first
        self.config.validate()?;
        self.validate(instance)?;

        let start_time = Instant::now();

        if instance.element_count() == 0 {
            return Ok(Cover::empty().with_statistics(SolverStatistics {
                num_sets: count_u32(instance.num_sets()),
                ..SolverStatistics::default()
            }));
        }

        // A universe larger than the total membership cannot be covered; detect
        // that before allocating anything per element.
        if instance.element_count() > instance.num_memberships() {
            if let Some(element) = instance.first_uncovered() {
                warn!(element, "element is not contained in any set");
                return Err(SolverError::InfeasibleInstance { element });
            }
        }

        let coverage = CoverageIndex::build(instance);
        let (dual_values, load) = self.grow_duals(instance, &coverage)?;

        let tight = self.tight_sets(instance, &load);
        let tight_sets = tight.len();
        let sets = if self.config.prune_redundant {
            RedundancyPruner::new().prune(instance, &tight)
        } else {
            tight
        };

        let statistics = SolverStatistics {
            num_elements: count_u32(instance.element_count()),
            num_sets: count_u32(instance.num_sets()),
            num_memberships: coverage.num_memberships() as u64,
            tight_sets: count_u32(tight_sets),
            pruned_sets: count_u32(tight_sets - sets.len()),
            solve_time_ms: start_time.elapsed().as_secs_f64() * 1000.0,
        };

        let cover = Cover {
            total_cost: instance.cost_of(&sets),
            dual_bound: dual_values.iter().sum(),
            max_frequency: coverage.max_frequency(),
            sets,
            dual_values,
            statistics,
        };

        debug!(
            selected = cover.sets.len(),
            total_cost = cover.total_cost,
            dual_bound = cover.dual_bound,
            max_frequency = cover.max_frequency,
            "dual growing finished"
        );

        Ok(cover)
    }

    fn name(&self) -> &str {
        "Primal-Dual (dual growing)"
    }

    fn approximation_guarantee(&self, instance: &Instance) -> f64 {
        instance.max_frequency() as f64
    }
}

/// Solve with the default configuration.
pub fn solve(instance: &Instance) -> Result<Cover> {
    DualGrowingSolver::default().solve(instance)
}
