/// Strictly upper-triangular matrix of pairwise relationship scores.
///
/// A score applies to the unordered pair of matrix positions `{i, j}` but is
/// stored once, at `rows[i][j - i - 1]` with `i < j`, halving storage. Built
/// once per optimization run while scanning the roster and never mutated
/// during the search.
#[derive(Debug, Clone, Default)]
pub struct RelationshipMatrix {
    rows: Vec<Vec<u64>>,
}

impl RelationshipMatrix {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends the score row for the next student: scores against every
    /// student with a later position, in position order.
    pub fn push_row(&mut self, scores: Vec<u64>) {
        self.rows.push(scores);
    }

    /// Score for the unordered pair `{a, b}` of global positions.
    ///
    /// Arguments are ordered internally, so callers index by each student's
    /// stable registry position regardless of group-local ordering. The
    /// diagonal and any pair outside the recorded triangle read as 0.
    pub fn get(&self, a: usize, b: usize) -> u64 {
        if a == b {
            return 0;
        }
        let (i, j) = if a < b { (a, b) } else { (b, a) };
        self.rows
            .get(i)
            .and_then(|row| row.get(j - i - 1))
            .copied()
            .unwrap_or(0)
    }

    /// Number of recorded rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
