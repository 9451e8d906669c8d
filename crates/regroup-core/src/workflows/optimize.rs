use crate::core::io::roster::RosterTable;
use crate::core::models::registry::StudentRegistry;
use crate::core::models::relationship::RelationshipMatrix;
use crate::engine::config::OptimizeConfig;
use crate::engine::error::EngineError;
use crate::engine::progress::{Progress, ProgressReporter};
use crate::engine::search::Search;
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument, warn};

/// The winning grouping of one optimization run.
///
/// `groups` holds display names and `positions` the matching matrix
/// positions, parallel structures: `positions[g][m]` locates the score cells
/// for `groups[g][m]`. This is the handoff value between the optimize and
/// confirm phases; it serializes so the host can persist it across
/// invocations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupingResult {
    pub best_score: u64,
    pub groups: Vec<Vec<String>>,
    pub positions: Vec<Vec<usize>>,
}

impl GroupingResult {
    /// True when no students were grouped; downstream code should report
    /// "no students" instead of publishing a hollow result.
    pub fn is_empty(&self) -> bool {
        self.groups.iter().all(Vec::is_empty)
    }

    pub fn num_students(&self) -> usize {
        self.groups.iter().map(Vec::len).sum()
    }
}

/// Proposes a grouping for the roster: builds the registry and relationship
/// matrix, runs the randomized search, and exports the incumbent.
///
/// Zero students and more groups than students are tolerated with a warning;
/// data-integrity problems surface earlier, when the roster table is loaded.
#[instrument(skip_all, name = "optimize_workflow")]
pub fn run(
    table: &RosterTable,
    config: &OptimizeConfig,
    reporter: &ProgressReporter,
) -> Result<GroupingResult, EngineError> {
    reporter.report(Progress::PhaseStart {
        name: "Loading relationships",
    });
    let (registry, matrix) = build_relationships(table);
    if registry.is_empty() {
        warn!("No students found in the roster; the grouping will be empty.");
    } else if config.num_groups > registry.len() {
        warn!(
            num_groups = config.num_groups,
            students = registry.len(),
            "More groups than students; trailing groups will stay empty."
        );
    }
    reporter.report(Progress::PhaseFinish);

    reporter.report(Progress::PhaseStart { name: "Searching" });
    info!(
        students = registry.len(),
        groups = config.num_groups,
        trials = config.attempted_depth,
        "Starting randomized group search."
    );
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let mut search = Search::new(config, &registry, &matrix);
    search.run(&mut rng, reporter)?;
    let (partition, best_score) = search
        .into_best()
        .ok_or_else(|| EngineError::Internal("search finished without an incumbent".to_string()))?;
    reporter.report(Progress::PhaseFinish);

    info!(best_score, "Search complete.");
    Ok(GroupingResult {
        best_score,
        groups: partition.names(&registry),
        positions: partition.positions(&registry),
    })
}

/// Scans the roster rows once, resolving row and column students against the
/// registry and recording the upper-triangular scores row by row.
fn build_relationships(table: &RosterTable) -> (StudentRegistry, RelationshipMatrix) {
    let mut registry = StudentRegistry::new();
    let mut matrix = RelationshipMatrix::new();
    for row in table {
        registry.resolve(&row.name);
        let mut scores = Vec::with_capacity(row.scores.len());
        for (column_name, score) in &row.scores {
            registry.resolve(column_name);
            scores.push(*score);
        }
        matrix.push_row(scores);
    }
    (registry, matrix)
}
