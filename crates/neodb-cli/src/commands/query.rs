//! Query command implementation.

use neodb_io::write_results;
use neodb_store::{limit, Criteria, Store};
use tracing::info;

use crate::output;
use crate::QueryArgs;

/// Results printed to stdout when no `--limit` is given.
const DEFAULT_PRINT_LIMIT: usize = 10;

pub fn run(store: &Store, args: QueryArgs) -> Result<(), Box<dyn std::error::Error>> {
    let filters = criteria(&args).into_filters();
    let results = store.query(&filters);

    match args.outfile {
        Some(path) => {
            let count = write_results(limit(results, args.limit), &path)
                .map_err(|e| format!("Failed to write {}: {}", path.display(), e))?;
            info!(count, path = %path.display(), "wrote results");
        }
        None => {
            let mut printed = 0;
            for approach in limit(results, Some(args.limit.unwrap_or(DEFAULT_PRINT_LIMIT))) {
                if printed == 0 {
                    output::print_table_header();
                }
                println!("{}", output::format_table_row(&approach));
                printed += 1;
            }
            if printed == 0 {
                println!("No matching close approaches.");
            }
        }
    }

    Ok(())
}

fn criteria(args: &QueryArgs) -> Criteria {
    let hazardous = match (args.hazardous, args.not_hazardous) {
        (true, _) => Some(true),
        (false, true) => Some(false),
        (false, false) => None,
    };

    Criteria {
        date: args.date,
        start_date: args.start_date,
        end_date: args.end_date,
        distance_min: args.min_distance,
        distance_max: args.max_distance,
        velocity_min: args.min_velocity,
        velocity_max: args.max_velocity,
        diameter_min: args.min_diameter,
        diameter_max: args.max_diameter,
        hazardous,
    }
}
