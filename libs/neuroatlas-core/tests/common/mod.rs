//! Shared fixtures for integration tests.

use neuroatlas_core::{Atlas, Region, RegionGroup, SessionGenerator};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Fixed clock value used across tests.
pub const NOW: i64 = 1_700_000_000_000;

/// Build a region with placeholder metadata.
pub fn region(id: &str, name: &str, group: RegionGroup) -> Region {
    Region {
        id: id.to_string(),
        allen_id: 0,
        name: name.to_string(),
        acronym: id.to_string(),
        description: String::new(),
        surgical_notes: String::new(),
        connections: Vec::new(),
        group,
        bilateral: true,
    }
}

/// Three-region catalog used for the small-pool session checks.
pub fn small_atlas() -> Atlas {
    Atlas::new(vec![
        region("A", "Alpha Nucleus", RegionGroup::Cortex),
        region("B", "Beta Nucleus", RegionGroup::Cortex),
        region("C", "Gamma Nucleus", RegionGroup::Midbrain),
    ])
}

/// Session generator with a deterministic random source.
pub fn seeded(atlas: &Atlas, seed: u64) -> SessionGenerator<'_, Atlas, StdRng> {
    SessionGenerator::with_rng(atlas, StdRng::seed_from_u64(seed))
}
