// Post-processing: drop selected sets that the rest of the selection already covers

use crate::domain::models::Instance;
use tracing::debug;

/// Greedy redundancy removal, most expensive sets first.
///
/// A set is dropped when every element it contains is covered by at least one
/// other set still in the selection. Ties on cost go to the higher set index.
#[derive(Debug, Clone, Copy, Default)]
pub struct RedundancyPruner;

impl RedundancyPruner {
    pub fn new() -> Self {
        Self
    }

    /// Return the pruned selection in increasing index order. `selection`
    /// must be sorted and reference valid set indices.
    pub fn prune(&self, instance: &Instance, selection: &[usize]) -> Vec<usize> {
        let mut multiplicity = vec![0u32; instance.element_count()];
        for &s in selection {
            for &e in distinct(&instance.sets()[s]).iter() {
                multiplicity[e] += 1;
            }
        }

        let mut candidates = selection.to_vec();
        candidates.sort_by(|&a, &b| {
            instance.costs()[b]
                .total_cmp(&instance.costs()[a])
                .then(b.cmp(&a))
        });

        let mut removed = vec![false; instance.num_sets()];
        let mut num_removed = 0;
        for &s in &candidates {
            let elements = distinct(&instance.sets()[s]);
            if elements.iter().all(|&e| multiplicity[e] >= 2) {
                for &e in &elements {
                    multiplicity[e] -= 1;
                }
                removed[s] = true;
                num_removed += 1;
            }
        }

        if num_removed > 0 {
            debug!(removed = num_removed, "pruned redundant sets");
        }

        selection.iter().copied().filter(|&s| !removed[s]).collect()
    }
}

fn distinct(elements: &[usize]) -> Vec<usize> {
    let mut elements = elements.to_vec();
    elements.sort_unstable();
    elements.dedup();
    elements
}
