//! Inspect command implementation.

use neodb_store::Store;

pub fn run(
    store: &Store,
    pdes: Option<String>,
    name: Option<String>,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let body = match (pdes.as_deref(), name.as_deref()) {
        (Some(pdes), _) => store.find_by_designation(pdes),
        (None, Some(name)) => store.find_by_name(name),
        (None, None) => return Err("either --pdes or --name is required".into()),
    };

    match body {
        Some(body) => {
            println!("{}", body);
            if verbose {
                for approach in store.approaches_of(body) {
                    println!("- {}", approach);
                }
            }
            Ok(())
        }
        None => {
            eprintln!("No matching NEOs exist in the database.");
            std::process::exit(1);
        }
    }
}
