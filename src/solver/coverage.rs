// Sparse element -> covering sets relation

use crate::domain::models::Instance;

/// For every element, the increasing list of sets containing it.
///
/// Stored in compressed rows: the sets covering element `e` are
/// `set_ids[offsets[e]..offsets[e + 1]]`. Repeated occurrences of an element
/// inside one set are collapsed, membership is 0/1.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoverageIndex {
    offsets: Vec<usize>,
    set_ids: Vec<usize>,
}

impl CoverageIndex {
    /// Build the index. The instance must have been validated.
    pub fn build(instance: &Instance) -> Self {
        let element_count = instance.element_count();

        let mut degree = vec![0usize; element_count];
        let mut last_seen = vec![usize::MAX; element_count];
        for (s, elements) in instance.sets().iter().enumerate() {
            for &e in elements {
                if last_seen[e] != s {
                    last_seen[e] = s;
                    degree[e] += 1;
                }
            }
        }

        let mut offsets = Vec::with_capacity(element_count + 1);
        offsets.push(0);
        for d in &degree {
            offsets.push(offsets[offsets.len() - 1] + d);
        }

        // Sets are visited in increasing order, so each row comes out sorted.
        let mut cursor = offsets[..element_count].to_vec();
        let mut set_ids = vec![0usize; offsets[element_count]];
        last_seen.fill(usize::MAX);
        for (s, elements) in instance.sets().iter().enumerate() {
            for &e in elements {
                if last_seen[e] != s {
                    last_seen[e] = s;
                    set_ids[cursor[e]] = s;
                    cursor[e] += 1;
                }
            }
        }

        Self { offsets, set_ids }
    }

    pub fn num_elements(&self) -> usize {
        self.offsets.len() - 1
    }

    /// Total number of (element, set) memberships.
    pub fn num_memberships(&self) -> usize {
        self.set_ids.len()
    }

    pub fn covering_sets(&self, element: usize) -> &[usize] {
        &self.set_ids[self.offsets[element]..self.offsets[element + 1]]
    }

    pub fn frequency(&self, element: usize) -> usize {
        self.offsets[element + 1] - self.offsets[element]
    }

    pub fn max_frequency(&self) -> usize {
        (0..self.num_elements())
            .map(|e| self.frequency(e))
            .max()
            .unwrap_or(0)
    }

    /// First element no set contains, if any.
    pub fn first_uncovered(&self) -> Option<usize> {
        (0..self.num_elements()).find(|&e| self.frequency(e) == 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rows_list_covering_sets_in_order() {
        let instance = Instance::new(5)
            .with_set(50.0, [0, 1])
            .with_set(2.0, [1, 2, 3])
            .with_set(3.0, [3, 4])
            .with_set(2.0, [4, 0]);
        let index = CoverageIndex::build(&instance);

        assert_eq!(index.num_elements(), 5);
        assert_eq!(index.covering_sets(0), &[0, 3]);
        assert_eq!(index.covering_sets(1), &[0, 1]);
        assert_eq!(index.covering_sets(2), &[1]);
        assert_eq!(index.covering_sets(3), &[1, 2]);
        assert_eq!(index.covering_sets(4), &[2, 3]);
        assert_eq!(index.num_memberships(), 9);
        assert_eq!(index.max_frequency(), 2);
        assert_eq!(index.first_uncovered(), None);
    }

    #[test]
    fn duplicates_collapse_and_gaps_are_reported() {
        let instance = Instance::new(4)
            .with_set(1.0, [2, 0, 2])
            .with_set(1.0, Vec::new())
            .with_set(1.0, [0]);
        let index = CoverageIndex::build(&instance);

        assert_eq!(index.covering_sets(0), &[0, 2]);
        assert_eq!(index.covering_sets(2), &[0]);
        assert!(index.covering_sets(1).is_empty());
        assert_eq!(index.first_uncovered(), Some(1));
        assert_eq!(index.num_memberships(), 3);
    }

    #[test]
    fn empty_universe() {
        let index = CoverageIndex::build(&Instance::new(0).with_set(1.0, Vec::new()));
        assert_eq!(index.num_elements(), 0);
        assert_eq!(index.max_frequency(), 0);
        assert_eq!(index.first_uncovered(), None);
    }
}
