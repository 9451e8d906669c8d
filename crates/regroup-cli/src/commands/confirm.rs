use crate::cli::ConfirmArgs;
use crate::error::{CliError, Result};
use regroup::core::io::roster::{self, RosterTable};
use regroup::engine::error::EngineError;
use regroup::workflows;
use regroup::workflows::confirm::ScoreSink;
use regroup::workflows::optimize::GroupingResult;
use tracing::info;

/// Applies pair increments to an in-memory roster grid so the whole file can
/// be rewritten in one pass afterwards.
struct CsvScoreSink {
    table: RosterTable,
}

impl ScoreSink for CsvScoreSink {
    fn increment(&mut self, a: usize, b: usize) -> std::result::Result<(), EngineError> {
        let (i, j) = (a.min(b), a.max(b));
        let row = self
            .table
            .get_mut(i)
            .ok_or_else(|| EngineError::ScoreUpdate(format!("no roster row for position {i}")))?;
        let cell = row.scores.get_mut(j - i - 1).ok_or_else(|| {
            EngineError::ScoreUpdate(format!("no score cell for pair ({i}, {j})"))
        })?;
        cell.1 += 1;
        Ok(())
    }
}

pub fn run(args: ConfirmArgs) -> Result<()> {
    let text = std::fs::read_to_string(&args.pending).map_err(|e| CliError::FileParsing {
        path: args.pending.clone(),
        source: e.into(),
    })?;
    let result: GroupingResult = toml::from_str(&text).map_err(|e| CliError::FileParsing {
        path: args.pending.clone(),
        source: e.into(),
    })?;

    if result.is_empty() {
        println!("Pending grouping is empty; nothing to confirm.");
        return Ok(());
    }

    info!("Loading roster from {:?}", &args.roster);
    let table = roster::read_csv(&args.roster)?;
    let mut sink = CsvScoreSink { table };
    workflows::confirm::run(&result, &mut sink)?;
    roster::write_csv(&args.roster, &sink.table)?;
    info!("Updated relationship scores written to {:?}", &args.roster);

    print!("{}", workflows::confirm::render_summary(&result, &args.label));
    println!(
        "Relationship scores updated in: {}",
        args.roster.display()
    );

    Ok(())
}
