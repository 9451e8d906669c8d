use crate::core::models::partition::Partition;
use crate::core::models::registry::StudentRegistry;
use crate::core::models::relationship::RelationshipMatrix;

/// Total intra-group relationship score of a partition.
///
/// Sums the matrix entry for every unordered pair of students sharing a
/// group, each pair counted once and addressed by the students' global
/// registry positions. Groups with fewer than two members contribute
/// nothing. Pure in the partition and the fixed matrix, so a result can
/// always be re-derived for verification.
pub fn score(
    partition: &Partition,
    matrix: &RelationshipMatrix,
    registry: &StudentRegistry,
) -> u64 {
    let mut total = 0;
    for group in partition.groups() {
        let members = group.members();
        for (offset, &a) in members.iter().enumerate() {
            for &b in &members[offset + 1..] {
                total += matrix.get(registry.position(a), registry.position(b));
            }
        }
    }
    total
}
