use crate::cli::OptimizeArgs;
use crate::config;
use crate::error::{CliError, Result};
use crate::utils::progress::CliProgressHandler;
use regroup::core::io::roster;
use regroup::engine::progress::ProgressReporter;
use regroup::workflows;
use tracing::{info, warn};

pub fn run(args: OptimizeArgs) -> Result<()> {
    let config = config::build_config(&args)?;

    info!("Loading roster from {:?}", &args.roster);
    let table = roster::read_csv(&args.roster)?;

    let progress_handler = CliProgressHandler::new();
    let reporter = ProgressReporter::with_callback(progress_handler.get_callback());

    println!(
        "Searching for a grouping ({} groups, {} trials)...",
        config.num_groups, config.attempted_depth
    );
    let result = workflows::optimize::run(&table, &config, &reporter)?;

    if result.is_empty() {
        warn!("Roster produced no students; not writing a pending grouping.");
        println!("Warning: the roster contains no students; no grouping was written.");
        return Ok(());
    }

    for (index, group) in result.groups.iter().enumerate() {
        println!("Group {}:", index + 1);
        for name in group {
            println!("  - {name}");
        }
    }
    println!("Best score: {}", result.best_score);

    // The pending file is the handoff to a later `confirm`; a rerun before
    // confirmation simply overwrites it and the last proposal wins.
    let text = toml::to_string_pretty(&result).map_err(|e| CliError::FileParsing {
        path: args.out.clone(),
        source: e.into(),
    })?;
    std::fs::write(&args.out, text)?;
    info!("Pending grouping written to {:?}", &args.out);
    println!(
        "Pending grouping written to: {} (accept it with `regroup confirm`)",
        args.out.display()
    );

    Ok(())
}
