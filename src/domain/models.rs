use super::solver_service::{SolverError, ValidationError};
use super::value_objects::DEFAULT_EPSILON;

/// Weighted set cover instance.
///
/// Elements are identified by `0..element_count`. Sets are indexed in the
/// order they were added, and `costs[i]` is the cost of `sets[i]`.
#[derive(Debug, Clone, PartialEq)]
pub struct Instance {
    element_count: usize,
    sets: Vec<Vec<usize>>,
    costs: Vec<f64>,
}

impl Instance {
    pub fn new(element_count: usize) -> Self {
        Self {
            element_count,
            sets: Vec::new(),
            costs: Vec::new(),
        }
    }

    /// Build an instance from parallel vectors. Nothing is checked here,
    /// call [`Instance::validate`] before use.
    pub fn from_parts(element_count: usize, sets: Vec<Vec<usize>>, costs: Vec<f64>) -> Self {
        Self {
            element_count,
            sets,
            costs,
        }
    }

    /// Append a set and return its index.
    pub fn add_set(&mut self, cost: f64, covered_elements: impl IntoIterator<Item = usize>) -> usize {
        self.sets.push(covered_elements.into_iter().collect());
        self.costs.push(cost);
        self.sets.len() - 1
    }

    pub fn with_set(mut self, cost: f64, covered_elements: impl IntoIterator<Item = usize>) -> Self {
        self.add_set(cost, covered_elements);
        self
    }

    pub fn element_count(&self) -> usize {
        self.element_count
    }

    pub fn num_sets(&self) -> usize {
        self.sets.len()
    }

    pub fn sets(&self) -> &[Vec<usize>] {
        &self.sets
    }

    pub fn costs(&self) -> &[f64] {
        &self.costs
    }

    /// Check index alignment, element ranges and costs.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.costs.len() != self.sets.len() {
            return Err(ValidationError::CostCountMismatch {
                sets: self.sets.len(),
                costs: self.costs.len(),
            });
        }

        for (set, (elements, &cost)) in self.sets.iter().zip(&self.costs).enumerate() {
            if !cost.is_finite() || cost < 0.0 {
                return Err(ValidationError::InvalidCost { set, cost });
            }
            if let Some(&element) = elements.iter().find(|&&e| e >= self.element_count) {
                return Err(ValidationError::ElementOutOfRange {
                    set,
                    element,
                    element_count: self.element_count,
                });
            }
        }

        Ok(())
    }

    /// Total cost of the given selection of set indices.
    pub fn cost_of(&self, selection: &[usize]) -> f64 {
        selection.iter().map(|&s| self.costs[s]).sum()
    }

    /// Whether the selection covers every element of the universe.
    pub fn covers(&self, selection: &[usize]) -> bool {
        let mut covered = vec![false; self.element_count];
        for &s in selection {
            for &e in &self.sets[s] {
                covered[e] = true;
            }
        }
        covered.into_iter().all(|c| c)
    }

    /// Number of distinct sets containing each element. Allocates one slot
    /// per element of the universe.
    pub fn element_frequency(&self) -> Vec<usize> {
        let mut frequency = vec![0; self.element_count];
        let mut last_seen = vec![usize::MAX; self.element_count];
        for (s, elements) in self.sets.iter().enumerate() {
            for &e in elements {
                if e < self.element_count && last_seen[e] != s {
                    last_seen[e] = s;
                    frequency[e] += 1;
                }
            }
        }
        frequency
    }

    /// The `f` of the approximation guarantee. Only allocates per membership,
    /// never per element of the universe.
    pub fn max_frequency(&self) -> usize {
        let mut memberships: Vec<(usize, usize)> = self
            .sets
            .iter()
            .enumerate()
            .flat_map(|(s, elements)| elements.iter().map(move |&e| (e, s)))
            .collect();
        memberships.sort_unstable();
        memberships.dedup();

        memberships
            .chunk_by(|a, b| a.0 == b.0)
            .map(|run| run.len())
            .max()
            .unwrap_or(0)
    }

    /// Total number of element occurrences over all sets.
    pub fn num_memberships(&self) -> usize {
        self.sets.iter().map(Vec::len).sum()
    }

    /// Sorted distinct elements contained in at least one set.
    pub fn covered_elements(&self) -> Vec<usize> {
        let mut covered: Vec<usize> = self.sets.iter().flatten().copied().collect();
        covered.sort_unstable();
        covered.dedup();
        covered
    }

    /// Smallest element contained in no set, found without allocating over
    /// the whole universe.
    pub fn first_uncovered(&self) -> Option<usize> {
        let covered = self.covered_elements();
        let first = covered
            .iter()
            .enumerate()
            .find(|&(i, &e)| i != e)
            .map_or(covered.len(), |(i, _)| i);
        (first < self.element_count).then_some(first)
    }
}

/// Saturating conversion for statistics counters.
pub(crate) fn count_u32(n: usize) -> u32 {
    u32::try_from(n).unwrap_or(u32::MAX)
}

/// Configuration for the solver
#[derive(Debug, Clone, PartialEq)]
pub struct SolverConfig {
    /// Tolerance under which a dual constraint counts as tight
    pub epsilon: f64,
    /// Drop selected sets that are covered by the rest of the selection
    pub prune_redundant: bool,
    /// Log every dual step at debug level instead of trace
    pub verbose: bool,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            epsilon: DEFAULT_EPSILON,
            prune_redundant: false,
            verbose: false,
        }
    }
}

impl SolverConfig {
    pub fn with_epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = epsilon;
        self
    }

    pub fn with_pruning(mut self, prune_redundant: bool) -> Self {
        self.prune_redundant = prune_redundant;
        self
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn validate(&self) -> Result<(), SolverError> {
        if !self.epsilon.is_finite() || self.epsilon <= 0.0 {
            return Err(SolverError::InvalidConfig(format!(
                "epsilon must be finite and positive, got {}",
                self.epsilon
            )));
        }
        Ok(())
    }
}

/// Statistics about the solve process
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SolverStatistics {
    pub num_elements: u32,
    pub num_sets: u32,
    /// Number of (element, set) memberships in the coverage index
    pub num_memberships: u64,
    pub tight_sets: u32,
    pub pruned_sets: u32,
    pub solve_time_ms: f64,
}

/// A set cover together with the dual certificate that produced it
#[derive(Debug, Clone, PartialEq)]
pub struct Cover {
    /// Selected set indices in increasing order
    pub sets: Vec<usize>,
    pub total_cost: f64,
    /// Final dual value of every element
    pub dual_values: Vec<f64>,
    /// Sum of the duals, a lower bound on the optimal cover cost
    pub dual_bound: f64,
    pub max_frequency: usize,
    pub statistics: SolverStatistics,
}

impl Cover {
    /// Cover of an empty universe.
    pub fn empty() -> Self {
        Self {
            sets: Vec::new(),
            total_cost: 0.0,
            dual_values: Vec::new(),
            dual_bound: 0.0,
            max_frequency: 0,
            statistics: SolverStatistics::default(),
        }
    }

    pub fn with_statistics(mut self, statistics: SolverStatistics) -> Self {
        self.statistics = statistics;
        self
    }

    pub fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }

    pub fn len(&self) -> usize {
        self.sets.len()
    }

    pub fn contains(&self, set: usize) -> bool {
        self.sets.binary_search(&set).is_ok()
    }

    /// Ratio between the cover cost and the dual lower bound. The true
    /// approximation ratio against the optimum is at most this value.
    pub fn approximation_ratio_bound(&self) -> f64 {
        if self.dual_bound > 0.0 {
            self.total_cost / self.dual_bound
        } else if self.total_cost > 0.0 {
            f64::INFINITY
        } else {
            1.0
        }
    }
}
