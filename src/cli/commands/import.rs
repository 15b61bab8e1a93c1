//! `import` command: ingest an export file, reconcile it against the store
//! and report what was added, updated and skipped.

use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::db::store::{self, ImportAnalysis};
use crate::db::initialize::init_db;
use crate::errors::AppResult;
use crate::import::read_file;
use crate::ui::messages::{info, success, warning};
use std::path::Path;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Import {
        file,
        apply_updates,
        dry_run,
    } = cmd
    {
        let rows = read_file(Path::new(file))?;
        info(format!("Read {} rows from {}", rows.len(), file));

        let mut pool = DbPool::new(&cfg.database)?;
        init_db(&pool.conn)?;

        let analysis = store::analyze(&pool.conn, &rows)?;
        print_analysis(&analysis);

        if *dry_run {
            info("Dry run: nothing written.");
            return Ok(());
        }

        if !analysis.duplicates_with_updates.is_empty() && !apply_updates {
            warning(format!(
                "{} changed duplicate(s) left untouched (re-run with --apply-updates to overwrite)",
                analysis.duplicates_with_updates.len()
            ));
        }

        let result = store::merge(&mut pool.conn, &rows, *apply_updates)?;
        success(format!(
            "Merge completed: {} added, {} updated, {} skipped",
            result.added, result.updated, result.skipped
        ));
    }
    Ok(())
}

fn print_analysis(analysis: &ImportAnalysis) {
    println!();
    println!("New bookings:          {}", analysis.new_bookings.len());
    println!("Unchanged duplicates:  {}", analysis.duplicates_no_change.len());
    println!(
        "Changed duplicates:    {}",
        analysis.duplicates_with_updates.len()
    );

    for diff in &analysis.duplicates_with_updates {
        println!("\n  Booking {}:", diff.booking_number);
        for change in &diff.changes {
            println!(
                "    {}: \"{}\" -> \"{}\"",
                change.field, change.old, change.new
            );
        }
    }
    println!();
}
