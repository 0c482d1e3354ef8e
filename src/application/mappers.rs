// Mappers: Convert between gRPC protobuf types and domain models
// Keeps protobuf types out of the domain and solver layers

use crate::domain::{
    models::{count_u32, Cover, Instance, SolverConfig},
    solver_service::{SolverError, ValidationError},
    value_objects::{SolutionStatus, DEFAULT_EPSILON},
};

pub mod set_cover {
    tonic::include_proto!("set_cover");
}

use set_cover as proto;

/// Convert protobuf SolverConfig to domain SolverConfig
pub fn proto_to_domain_config(proto_cfg: Option<&proto::SolverConfig>) -> SolverConfig {
    match proto_cfg {
        Some(cfg) => SolverConfig {
            epsilon: if cfg.epsilon != 0.0 {
                cfg.epsilon
            } else {
                DEFAULT_EPSILON
            },
            prune_redundant: cfg.prune_redundant,
            verbose: cfg.verbose,
        },
        None => SolverConfig::default(),
    }
}

fn proto_to_domain_elements(
    set: usize,
    proto_set: &proto::WeightedSet,
) -> std::result::Result<Vec<usize>, ValidationError> {
    proto_set
        .elements
        .iter()
        .map(|&element| {
            usize::try_from(element).map_err(|_| ValidationError::NegativeElement { set, element })
        })
        .collect()
}

/// Build a domain Instance from an element count and protobuf sets
pub fn proto_to_domain_instance(
    element_count: u64,
    proto_sets: &[proto::WeightedSet],
) -> std::result::Result<Instance, ValidationError> {
    let element_count = usize::try_from(element_count)
        .map_err(|_| ValidationError::ElementCountTooLarge { element_count })?;

    let mut instance = Instance::new(element_count);
    for (set, proto_set) in proto_sets.iter().enumerate() {
        let elements = proto_to_domain_elements(set, proto_set)?;
        instance.add_set(proto_set.cost, elements);
    }
    Ok(instance)
}

/// Convert protobuf SetCoverInstance to a domain Instance and its solver configuration
pub fn proto_to_domain_request(
    proto_inst: &proto::SetCoverInstance,
) -> std::result::Result<(Instance, SolverConfig), ValidationError> {
    let instance = proto_to_domain_instance(proto_inst.element_count, &proto_inst.sets)?;
    let config = proto_to_domain_config(proto_inst.solver_config.as_ref());
    Ok((instance, config))
}

fn domain_to_proto_status(status: SolutionStatus) -> i32 {
    match status {
        SolutionStatus::Feasible => proto::SolutionStatus::Feasible as i32,
        SolutionStatus::Infeasible => proto::SolutionStatus::Infeasible as i32,
        SolutionStatus::Invalid => proto::SolutionStatus::Invalid as i32,
    }
}

/// Convert a domain Cover to protobuf SetCoverResult
pub fn domain_to_proto_cover(cover: Cover, solver_name: &str) -> proto::SetCoverResult {
    let message = format!(
        "Selected {} sets with total cost {} (dual bound {})",
        cover.sets.len(),
        cover.total_cost,
        cover.dual_bound
    );

    proto::SetCoverResult {
        status: domain_to_proto_status(SolutionStatus::Feasible),
        selected_sets: cover.sets.iter().map(|&s| s as u64).collect(),
        total_cost: cover.total_cost,
        dual_values: cover.dual_values,
        dual_bound: cover.dual_bound,
        max_frequency: count_u32(cover.max_frequency),
        uncovered_element: None,
        message,
        statistics: Some(proto::SolverStatistics {
            num_elements: cover.statistics.num_elements,
            num_sets: cover.statistics.num_sets,
            num_memberships: cover.statistics.num_memberships,
            tight_sets: cover.statistics.tight_sets,
            pruned_sets: cover.statistics.pruned_sets,
            solve_time_ms: cover.statistics.solve_time_ms,
            solver_name: solver_name.to_string(),
        }),
    }
}

/// Convert a solver failure to a protobuf SetCoverResult
pub fn domain_to_proto_failure(error: &SolverError, solver_name: &str) -> proto::SetCoverResult {
    let uncovered_element = match error {
        SolverError::InfeasibleInstance { element } => Some(*element as u64),
        _ => None,
    };

    proto::SetCoverResult {
        status: domain_to_proto_status(error.status()),
        selected_sets: Vec::new(),
        total_cost: 0.0,
        dual_values: Vec::new(),
        dual_bound: 0.0,
        max_frequency: 0,
        uncovered_element,
        message: error.to_string(),
        statistics: Some(proto::SolverStatistics {
            solver_name: solver_name.to_string(),
            ..Default::default()
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn weighted_set(cost: f64, elements: &[i64]) -> proto::WeightedSet {
        proto::WeightedSet {
            cost,
            elements: elements.to_vec(),
        }
    }

    #[test]
    fn builds_instance_in_set_order() {
        let proto_inst = proto::SetCoverInstance {
            name: "reference".to_string(),
            element_count: 3,
            sets: vec![weighted_set(2.0, &[0, 1]), weighted_set(1.0, &[2])],
            solver_config: None,
        };
        let (instance, config) = proto_to_domain_request(&proto_inst).unwrap();

        assert_eq!(instance.element_count(), 3);
        assert_eq!(instance.sets(), &[vec![0, 1], vec![2]]);
        assert_eq!(instance.costs(), &[2.0, 1.0]);
        assert_eq!(config, SolverConfig::default());
    }

    #[test]
    fn negative_element_is_a_validation_error() {
        let sets = vec![weighted_set(1.0, &[0]), weighted_set(1.0, &[1, -3])];
        assert_eq!(
            proto_to_domain_instance(2, &sets),
            Err(ValidationError::NegativeElement { set: 1, element: -3 })
        );
    }

    #[test]
    fn zero_epsilon_selects_default() {
        let cfg = proto::SolverConfig {
            epsilon: 0.0,
            prune_redundant: true,
            verbose: false,
        };
        let config = proto_to_domain_config(Some(&cfg));
        assert_eq!(config.epsilon, DEFAULT_EPSILON);
        assert!(config.prune_redundant);
    }

    #[test]
    fn infeasibility_reports_the_element() {
        let result =
            domain_to_proto_failure(&SolverError::InfeasibleInstance { element: 4 }, "test");
        assert_eq!(result.status, proto::SolutionStatus::Infeasible as i32);
        assert_eq!(result.uncovered_element, Some(4));
        assert!(result.selected_sets.is_empty());
    }

    #[test]
    fn cover_maps_selected_sets() {
        let mut cover = Cover::empty();
        cover.sets = vec![1, 3];
        cover.total_cost = 4.0;
        cover.dual_bound = 4.0;
        let result = domain_to_proto_cover(cover, "test");
        assert_eq!(result.status, proto::SolutionStatus::Feasible as i32);
        assert_eq!(result.selected_sets, vec![1, 3]);
        assert_eq!(result.uncovered_element, None);
    }
}
