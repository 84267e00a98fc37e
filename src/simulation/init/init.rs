use rand::SeedableRng;
use rand_chacha::ChaCha12Rng;

use crate::grid::{Grid, DEAD};

use super::perf_stats::PerfStats;
use super::Simulation;

pub(super) fn create_simulation(width: u32, height: u32, seed: u64) -> Simulation {
    let grid = Grid::new(width, height);
    let size = grid.size();
    Simulation {
        grid,
        next_cells: vec![DEAD; size],
        generation: 0,
        rng: ChaCha12Rng::seed_from_u64(seed),
        perf_enabled: false,
        perf_stats: PerfStats::default(),
    }
}

/// Seed for sessions that should differ on every page load
pub(crate) fn entropy_seed() -> u64 {
    #[cfg(target_arch = "wasm32")]
    {
        let hi = (js_sys::Math::random() * u32::MAX as f64) as u64;
        let lo = (js_sys::Math::random() * u32::MAX as f64) as u64;
        ((hi << 32) | lo) ^ js_sys::Date::now() as u64
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        use std::time::{SystemTime, UNIX_EPOCH};
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(super::DEFAULT_SEED)
    }
}
