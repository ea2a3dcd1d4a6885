//! Simulation engine module
//!
//! One synchronous run: validate the request, resolve the ID list from the
//! configured source, partition it, assemble the report. Runs are
//! independent and stateless; nothing persists between them.

mod types;

pub use types::{Counts, Outcome, SimulationReport};

use crate::config::SimulationConfig;
use crate::error::Result;
use crate::partition;
use crate::source::{self, Sampler};
use tracing::{debug, info};

/// Execute one simulation run.
///
/// Returns [`Outcome::Waiting`] when the resolved ID list is empty (manual
/// mode with blank input) — that is a prompt state, not an error. Invalid
/// manual tokens and invalid bounds surface as `Err`; the ID list is then
/// treated as absent for the rest of the run.
pub fn run_simulation(config: &SimulationConfig, sampler: &mut dyn Sampler) -> Result<Outcome> {
    config.validate()?;

    let (ids, generated) = if config.auto_generate {
        let ids = source::generate_ids(sampler, config.count, config.min_id, config.max_id)?;
        info!(
            count = ids.len(),
            min = config.min_id,
            max = config.max_id,
            "generated random IDs"
        );
        (ids, true)
    } else {
        let ids = source::parse_id_list(&config.ids_text)?;
        (ids, false)
    };

    if ids.is_empty() {
        debug!("no IDs supplied, nothing to partition");
        return Ok(Outcome::Waiting);
    }

    let partition = partition::partition(&ids);
    let records = partition::records(&ids);
    debug!(
        total = ids.len(),
        even = partition.even_count(),
        odd = partition.odd_count(),
        "partition complete"
    );

    Ok(Outcome::Completed(SimulationReport {
        ids,
        partition,
        records,
        generated,
    }))
}
