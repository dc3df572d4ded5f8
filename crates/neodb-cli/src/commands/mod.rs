//! Subcommand implementations.

use std::path::Path;

use neodb_io::{load_approaches, load_bodies, ReadMode};
use neodb_store::Store;
use tracing::info;

pub mod inspect;
pub mod query;

/// Loads both data files and builds the store.
pub fn open_store(
    neofile: &Path,
    cadfile: &Path,
    permissive: bool,
) -> Result<Store, Box<dyn std::error::Error>> {
    let mode = if permissive {
        ReadMode::Permissive
    } else {
        ReadMode::Strict
    };

    let bodies = load_bodies(neofile, mode)
        .map_err(|e| format!("Failed to load {}: {}", neofile.display(), e))?;
    let approaches = load_approaches(cadfile, mode)
        .map_err(|e| format!("Failed to load {}: {}", cadfile.display(), e))?;

    let store = Store::new(bodies, approaches);
    info!(
        bodies = store.bodies().len(),
        approaches = store.events().len(),
        unlinked = store.unlinked_events(),
        "database ready"
    );
    Ok(store)
}
