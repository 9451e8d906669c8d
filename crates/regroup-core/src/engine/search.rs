use super::config::OptimizeConfig;
use super::error::EngineError;
use super::progress::{Progress, ProgressReporter};
use super::scoring;
use crate::core::models::partition::Partition;
use crate::core::models::registry::StudentRegistry;
use crate::core::models::relationship::RelationshipMatrix;
use rand::Rng;
use tracing::{debug, instrument};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchPhase {
    Idle,
    Searching,
    Done,
}

/// Randomized-restart search for a low-scoring balanced partition.
///
/// Runs `attempted_depth` independent trials. Each trial builds a fresh
/// partition with ceiling-first capacities, places every student in registry
/// insertion order into a random open group, and scores the result. The
/// first trial seeds the incumbent unconditionally; a later trial replaces
/// it only on a strictly lower score, so ties keep the earlier partition.
///
/// Exact minimum-score balanced partitioning is NP-hard in general, and the
/// scores are soft preferences rather than hard constraints, so best-of-many
/// random sampling is deliberately used instead of exhaustive search.
///
/// A search runs at most once; the best partition and score are frozen when
/// the phase reaches [`SearchPhase::Done`], and a fresh `Search` is required
/// for a re-run.
pub struct Search<'a> {
    config: &'a OptimizeConfig,
    registry: &'a StudentRegistry,
    matrix: &'a RelationshipMatrix,
    phase: SearchPhase,
    incumbent: Option<(Partition, u64)>,
}

impl<'a> Search<'a> {
    pub fn new(
        config: &'a OptimizeConfig,
        registry: &'a StudentRegistry,
        matrix: &'a RelationshipMatrix,
    ) -> Self {
        Self {
            config,
            registry,
            matrix,
            phase: SearchPhase::Idle,
            incumbent: None,
        }
    }

    pub fn phase(&self) -> SearchPhase {
        self.phase
    }

    /// The incumbent partition and its score; populated once the search has
    /// run at least one trial, frozen after completion.
    pub fn best(&self) -> Option<(&Partition, u64)> {
        self.incumbent.as_ref().map(|(p, s)| (p, *s))
    }

    /// Consumes the search state, yielding the incumbent.
    pub fn into_best(self) -> Option<(Partition, u64)> {
        self.incumbent
    }

    /// Runs the full trial loop synchronously. There is no cancellation;
    /// `attempted_depth` is the sole resource bound.
    #[instrument(skip_all, fields(trials = self.config.attempted_depth))]
    pub fn run<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        reporter: &ProgressReporter,
    ) -> Result<(), EngineError> {
        if self.phase != SearchPhase::Idle {
            return Err(EngineError::SearchConsumed);
        }
        self.phase = SearchPhase::Searching;

        let total_students = self.registry.len();
        reporter.report(Progress::TrialStart {
            total_trials: self.config.attempted_depth as u64,
        });

        for trial in 0..self.config.attempted_depth {
            let mut partition =
                Partition::with_capacities(total_students, self.config.num_groups);
            for id in self.registry.iter() {
                partition.assign_random(id, rng)?;
            }

            let trial_score = scoring::score(&partition, self.matrix, self.registry);
            let improved = match &self.incumbent {
                Some((_, best_score)) => trial_score < *best_score,
                None => true,
            };
            if improved {
                debug!(trial, score = trial_score, "New incumbent partition.");
                self.incumbent = Some((partition, trial_score));
            }
            reporter.report(Progress::TrialIncrement);
        }

        reporter.report(Progress::TrialFinish);
        self.phase = SearchPhase::Done;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::config::OptimizeConfigBuilder;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn uniform_setup(
        students: usize,
        pair_score: u64,
    ) -> (StudentRegistry, RelationshipMatrix) {
        let mut registry = StudentRegistry::new();
        let mut matrix = RelationshipMatrix::new();
        for i in 0..students {
            registry.resolve(&format!("Student {i}"));
            matrix.push_row(vec![pair_score; students - i - 1]);
        }
        (registry, matrix)
    }

    fn run_search(
        config: &OptimizeConfig,
        registry: &StudentRegistry,
        matrix: &RelationshipMatrix,
        seed: u64,
    ) -> (Vec<Vec<usize>>, u64) {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut search = Search::new(config, registry, matrix);
        search.run(&mut rng, &ProgressReporter::new()).unwrap();
        assert_eq!(search.phase(), SearchPhase::Done);
        let (partition, score) = search.into_best().unwrap();
        (partition.positions(registry), score)
    }

    #[test]
    fn six_students_two_groups_all_zero_scores_is_score_zero() {
        let (registry, matrix) = uniform_setup(6, 0);
        let config = OptimizeConfigBuilder::new()
            .num_groups(2)
            .attempted_depth(10)
            .build()
            .unwrap();
        let (positions, score) = run_search(&config, &registry, &matrix, 1);
        assert_eq!(score, 0);
        let mut sizes: Vec<usize> = positions.iter().map(Vec::len).collect();
        sizes.sort();
        assert_eq!(sizes, vec![3, 3]);
    }

    #[test]
    fn every_student_is_placed_exactly_once() {
        let (registry, matrix) = uniform_setup(9, 1);
        let config = OptimizeConfigBuilder::new()
            .num_groups(4)
            .attempted_depth(25)
            .build()
            .unwrap();
        let (positions, _) = run_search(&config, &registry, &matrix, 3);
        let mut all: Vec<usize> = positions.into_iter().flatten().collect();
        all.sort();
        assert_eq!(all, (0..9).collect::<Vec<_>>());
    }

    #[test]
    fn hot_pair_is_separated_given_enough_trials() {
        // Four students, one pair scoring 10, everything else 0. With two
        // groups of two and 500 trials the pair is split essentially always.
        let mut registry = StudentRegistry::new();
        for name in ["Ada", "Bob", "Carol", "Dan"] {
            registry.resolve(name);
        }
        let mut matrix = RelationshipMatrix::new();
        matrix.push_row(vec![10, 0, 0]);
        matrix.push_row(vec![0, 0]);
        matrix.push_row(vec![0]);
        matrix.push_row(vec![]);

        let config = OptimizeConfigBuilder::new()
            .num_groups(2)
            .attempted_depth(500)
            .build()
            .unwrap();

        let mut best_scores = Vec::new();
        for seed in 0..5 {
            let (positions, score) = run_search(&config, &registry, &matrix, seed);
            if score == 0 {
                for group in &positions {
                    assert!(!(group.contains(&0) && group.contains(&1)));
                }
            }
            best_scores.push(score);
        }
        assert!(
            best_scores.contains(&0),
            "500 trials never separated the hot pair: {best_scores:?}"
        );
    }

    #[test]
    fn more_groups_than_students_leaves_trailing_groups_empty() {
        let (registry, matrix) = uniform_setup(3, 2);
        let config = OptimizeConfigBuilder::new()
            .num_groups(6)
            .attempted_depth(5)
            .build()
            .unwrap();
        let (positions, score) = run_search(&config, &registry, &matrix, 4);
        assert_eq!(positions.len(), 6);
        assert_eq!(positions.iter().filter(|g| g.is_empty()).count(), 3);
        assert_eq!(score, 0);
    }

    #[test]
    fn zero_students_completes_with_an_empty_partition() {
        let registry = StudentRegistry::new();
        let matrix = RelationshipMatrix::new();
        let config = OptimizeConfig::default();
        let (positions, score) = run_search(&config, &registry, &matrix, 9);
        assert_eq!(score, 0);
        assert!(positions.iter().all(Vec::is_empty));
    }

    #[test]
    fn deeper_search_never_worsens_the_best_score() {
        // With a fixed seed the first k trials of a depth-k+1 run are the
        // same as a depth-k run, so the retained best is monotone in depth.
        let mut registry = StudentRegistry::new();
        let mut matrix = RelationshipMatrix::new();
        for i in 0..8usize {
            registry.resolve(&format!("Student {i}"));
            let row = (i + 1..8).map(|j| ((i * 7 + j * 3) % 5) as u64).collect();
            matrix.push_row(row);
        }
        let mut previous = u64::MAX;
        for depth in [1, 5, 25, 125] {
            let config = OptimizeConfigBuilder::new()
                .num_groups(3)
                .attempted_depth(depth)
                .build()
                .unwrap();
            let (_, score) = run_search(&config, &registry, &matrix, 42);
            assert!(score <= previous);
            previous = score;
        }
    }

    #[test]
    fn running_twice_is_an_error() {
        let (registry, matrix) = uniform_setup(4, 1);
        let config = OptimizeConfig::default();
        let mut rng = StdRng::seed_from_u64(0);
        let mut search = Search::new(&config, &registry, &matrix);
        search.run(&mut rng, &ProgressReporter::new()).unwrap();
        let err = search.run(&mut rng, &ProgressReporter::new()).unwrap_err();
        assert!(matches!(err, EngineError::SearchConsumed));
    }

    #[test]
    fn identical_seeds_reproduce_the_same_result() {
        let (registry, matrix) = uniform_setup(10, 2);
        let config = OptimizeConfigBuilder::new()
            .num_groups(3)
            .attempted_depth(40)
            .build()
            .unwrap();
        let first = run_search(&config, &registry, &matrix, 7);
        let second = run_search(&config, &registry, &matrix, 7);
        assert_eq!(first, second);
    }
}
