use rand::prelude::*;

use super::ProgramInfo;

use crate::kernel::{Ticks, MAX_PROCESSES};

const MAX_BURST: Ticks = 12;
const MAX_ARRIVAL_GAP: Ticks = 4;
const MAX_PRIORITY: u32 = 5;
const MAX_MEMORY: u64 = 40;

/// Generates `count` processes with arrivals spread out in registration
/// order. The same seed always yields the same workload.
pub fn random_programs(count: usize, seed: u64) -> Vec<ProgramInfo> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut arrival_time = 0;

    (0..count.min(MAX_PROCESSES))
        .map(|idx| {
            let id = idx as u32 + 1;
            let program = ProgramInfo::new(
                id,
                &format!("Job {}", id),
                rng.random_range(1..=MAX_BURST),
                arrival_time,
                rng.random_range(1..=MAX_PRIORITY),
                rng.random_range(1..=MAX_MEMORY),
            );
            arrival_time += rng.random_range(0..=MAX_ARRIVAL_GAP);
            program
        })
        .collect()
}
