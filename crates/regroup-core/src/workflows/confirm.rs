use super::optimize::GroupingResult;
use crate::engine::error::EngineError;
use tracing::{info, instrument};

/// Destination for accepted-grouping score updates.
///
/// Implementations persist the relationship grid (a CSV file, a spreadsheet,
/// a database); the confirm workflow only decides which cells to touch.
pub trait ScoreSink {
    /// Adds one to the persisted score for the unordered pair of matrix
    /// positions `{a, b}`.
    fn increment(&mut self, a: usize, b: usize) -> Result<(), EngineError>;
}

/// Reinforces an accepted grouping: every unordered pair of positions that
/// now shares a group gets its relationship score incremented by exactly 1.
///
/// There is no deduplication guard; invoking this twice for the same
/// acceptance double-counts. Calling it exactly once per acceptance is the
/// host's responsibility.
#[instrument(skip_all, name = "confirm_workflow")]
pub fn run(result: &GroupingResult, sink: &mut dyn ScoreSink) -> Result<(), EngineError> {
    let mut pairs = 0u64;
    for group in &result.positions {
        for (offset, &a) in group.iter().enumerate() {
            for &b in &group[offset + 1..] {
                sink.increment(a, b)?;
                pairs += 1;
            }
        }
    }
    info!(pairs, "Applied relationship increments for accepted grouping.");
    Ok(())
}

/// Renders the notification body for an accepted grouping.
pub fn render_summary(result: &GroupingResult, label: &str) -> String {
    let mut body = format!("Next {label} groups:\n");
    for (index, group) in result.groups.iter().enumerate() {
        body.push_str(&format!("Group #{}\n", index + 1));
        for name in group {
            body.push('\t');
            body.push_str(name);
            body.push('\n');
        }
        body.push('\n');
    }
    body
}
