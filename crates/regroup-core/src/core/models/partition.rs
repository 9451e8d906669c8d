use super::group::Group;
use super::registry::StudentRegistry;
use super::student::StudentId;
use rand::Rng;
use thiserror::Error;

/// Returned when a random assignment is requested on a partition whose
/// groups are all at capacity.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("every group is at capacity; the partition cannot accept another student")]
pub struct PartitionFull;

/// Computes group capacities left to right: each remaining group takes
/// `remaining / groups_left`, rounded up while the division is uneven.
///
/// The capacities always sum to exactly `total_students` and differ by at
/// most one, independent of assignment order. Groups past `total_students`
/// get capacity 0.
pub fn group_capacities(total_students: usize, num_groups: usize) -> Vec<usize> {
    let mut capacities = Vec::with_capacity(num_groups);
    let mut remaining = total_students;
    for i in 0..num_groups {
        let groups_left = num_groups - i;
        let mut size = remaining / groups_left;
        if remaining % groups_left > 0 {
            size += 1;
        }
        capacities.push(size);
        remaining -= size;
    }
    capacities
}

/// One candidate assignment of all students into capacity-bounded groups.
///
/// Created fresh for every trial and discarded unless it becomes the
/// incumbent. Random placement is constructive: a live index of non-full
/// groups is sampled uniformly, so each assignment is O(1) and a full
/// partition is an error rather than a spin.
#[derive(Debug, Clone)]
pub struct Partition {
    groups: Vec<Group>,
    open: Vec<usize>,
}

impl Partition {
    /// Builds an empty partition with capacities from [`group_capacities`].
    pub fn with_capacities(total_students: usize, num_groups: usize) -> Self {
        let groups: Vec<Group> = group_capacities(total_students, num_groups)
            .into_iter()
            .map(Group::new)
            .collect();
        let open = groups
            .iter()
            .enumerate()
            .filter(|(_, g)| !g.is_full())
            .map(|(i, _)| i)
            .collect();
        Self { groups, open }
    }

    /// Places the student into a uniformly random group with remaining
    /// capacity.
    pub fn assign_random<R: Rng + ?Sized>(
        &mut self,
        student: StudentId,
        rng: &mut R,
    ) -> Result<(), PartitionFull> {
        if self.open.is_empty() {
            return Err(PartitionFull);
        }
        let slot = rng.gen_range(0..self.open.len());
        let group_index = self.open[slot];
        let accepted = self.groups[group_index].try_add(student);
        debug_assert!(accepted, "open list held a full group");
        if self.groups[group_index].is_full() {
            self.open.swap_remove(slot);
        }
        Ok(())
    }

    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    /// Total students placed so far.
    pub fn len(&self) -> usize {
        self.groups.iter().map(Group::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.iter().all(Group::is_empty)
    }

    pub fn is_full(&self) -> bool {
        self.open.is_empty()
    }

    /// Exports the partition as display names, one inner list per group.
    pub fn names(&self, registry: &StudentRegistry) -> Vec<Vec<String>> {
        self.groups
            .iter()
            .map(|g| {
                g.members()
                    .iter()
                    .map(|&id| registry.name(id).to_string())
                    .collect()
            })
            .collect()
    }

    /// Exports the partition as matrix positions, parallel to [`Self::names`].
    pub fn positions(&self, registry: &StudentRegistry) -> Vec<Vec<usize>> {
        self.groups
            .iter()
            .map(|g| g.members().iter().map(|&id| registry.position(id)).collect())
            .collect()
    }
}

#[cfg(test)]
impl Partition {
    /// Test-only constructor for a fixed, hand-built grouping.
    pub(crate) fn from_groups(groups: Vec<Group>) -> Self {
        let open = groups
            .iter()
            .enumerate()
            .filter(|(_, g)| !g.is_full())
            .map(|(i, _)| i)
            .collect();
        Self { groups, open }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn registry_of(n: usize) -> (StudentRegistry, Vec<StudentId>) {
        let mut registry = StudentRegistry::new();
        let ids = (0..n)
            .map(|i| registry.resolve(&format!("Student {i}")))
            .collect();
        (registry, ids)
    }

    #[test]
    fn capacities_split_six_students_into_two_threes() {
        assert_eq!(group_capacities(6, 2), vec![3, 3]);
    }

    #[test]
    fn capacities_put_the_larger_group_first_for_five_students() {
        assert_eq!(group_capacities(5, 2), vec![3, 2]);
    }

    #[test]
    fn capacities_sum_to_total_and_spread_at_most_one() {
        for total in 0..40 {
            for num_groups in 1..=12 {
                let capacities = group_capacities(total, num_groups);
                assert_eq!(capacities.len(), num_groups);
                assert_eq!(capacities.iter().sum::<usize>(), total);
                let max = capacities.iter().max().copied().unwrap_or(0);
                let min = capacities.iter().min().copied().unwrap_or(0);
                assert!(max - min <= 1, "spread > 1 for {total}/{num_groups}");
            }
        }
    }

    #[test]
    fn capacities_are_deterministic() {
        assert_eq!(group_capacities(17, 4), group_capacities(17, 4));
    }

    #[test]
    fn more_groups_than_students_yields_trailing_zero_capacities() {
        assert_eq!(group_capacities(2, 4), vec![1, 1, 0, 0]);
    }

    #[test]
    fn assign_random_places_every_student_exactly_once() {
        let (_, ids) = registry_of(10);
        let mut rng = StdRng::seed_from_u64(11);
        let mut partition = Partition::with_capacities(10, 3);
        for &id in &ids {
            partition.assign_random(id, &mut rng).unwrap();
        }
        assert!(partition.is_full());
        let mut placed: Vec<StudentId> = partition
            .groups()
            .iter()
            .flat_map(|g| g.members().iter().copied())
            .collect();
        placed.sort();
        let mut expected = ids.clone();
        expected.sort();
        assert_eq!(placed, expected);
    }

    #[test]
    fn assign_random_never_overfills_a_group() {
        let (_, ids) = registry_of(7);
        let mut rng = StdRng::seed_from_u64(5);
        let mut partition = Partition::with_capacities(7, 3);
        for &id in &ids {
            partition.assign_random(id, &mut rng).unwrap();
        }
        for group in partition.groups() {
            assert!(group.len() <= group.capacity());
        }
    }

    #[test]
    fn assign_random_on_full_partition_is_an_error() {
        let (_, ids) = registry_of(3);
        let mut rng = StdRng::seed_from_u64(2);
        let mut partition = Partition::with_capacities(2, 2);
        partition.assign_random(ids[0], &mut rng).unwrap();
        partition.assign_random(ids[1], &mut rng).unwrap();
        assert_eq!(
            partition.assign_random(ids[2], &mut rng),
            Err(PartitionFull)
        );
    }

    #[test]
    fn zero_capacity_groups_receive_no_students() {
        let (_, ids) = registry_of(2);
        let mut rng = StdRng::seed_from_u64(7);
        let mut partition = Partition::with_capacities(2, 5);
        for &id in &ids {
            partition.assign_random(id, &mut rng).unwrap();
        }
        for group in partition.groups().iter().filter(|g| g.capacity() == 0) {
            assert!(group.is_empty());
        }
        assert_eq!(partition.len(), 2);
    }

    #[test]
    fn exports_are_parallel_structures() {
        let (registry, ids) = registry_of(4);
        let mut rng = StdRng::seed_from_u64(3);
        let mut partition = Partition::with_capacities(4, 2);
        for &id in &ids {
            partition.assign_random(id, &mut rng).unwrap();
        }
        let names = partition.names(&registry);
        let positions = partition.positions(&registry);
        assert_eq!(names.len(), positions.len());
        for (group_names, group_positions) in names.iter().zip(&positions) {
            assert_eq!(group_names.len(), group_positions.len());
            for (name, &pos) in group_names.iter().zip(group_positions) {
                assert_eq!(name, &format!("Student {pos}"));
            }
        }
    }
}
