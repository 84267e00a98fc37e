//! Simulation - one Grid, the generation counter, and the Life transition
//!
//! The generation counter restarts at 0 on reset, randomize, resize and
//! pattern insertion, and grows by exactly 1 per `next_generation`. Cell
//! toggles are live edits and leave it alone.
//!
//! Each generation reads neighbor counts and prior states from the front
//! buffer only and writes results into a back buffer, then swaps the two.

use rand::SeedableRng;
use rand_chacha::ChaCha12Rng;

use crate::domain::patterns::Pattern;
use crate::grid::Grid;

#[path = "perf/perf_timer.rs"]
mod perf_timer;
#[path = "perf/perf_stats.rs"]
mod perf_stats;
#[path = "step/step.rs"]
mod step;
#[path = "commands/commands.rs"]
mod commands;
#[path = "init/init.rs"]
mod init;
mod facade;

pub use facade::GameOfLife;
pub use perf_stats::PerfStats;

use perf_timer::PerfTimer;

/// Seed used when the caller does not provide one
pub const DEFAULT_SEED: u64 = 12345;

/// Alive probability used by `randomize`
pub const DEFAULT_RANDOM_DENSITY: f64 = 0.3;

pub struct Simulation {
    grid: Grid,
    next_cells: Vec<u8>,
    generation: u64,
    rng: ChaCha12Rng,

    // Perf metrics
    perf_enabled: bool,
    perf_stats: PerfStats,
}

impl Simulation {
    /// Empty `width x height` grid at generation 0
    pub fn new(width: u32, height: u32) -> Self {
        init::create_simulation(width, height, DEFAULT_SEED)
    }

    pub fn with_seed(width: u32, height: u32, seed: u64) -> Self {
        init::create_simulation(width, height, seed)
    }

    /// Restart the random source used by `randomize`
    pub fn reseed(&mut self, seed: u64) {
        self.rng = ChaCha12Rng::seed_from_u64(seed);
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Direct grid access for live edits. Resizing or replacing the whole
    /// state through this handle does not touch the generation counter.
    pub fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    pub fn width(&self) -> u32 { self.grid.width() }

    pub fn height(&self) -> u32 { self.grid.height() }

    pub fn generation(&self) -> u64 { self.generation }

    pub fn population(&self) -> usize {
        self.grid.population()
    }

    /// Counter back to 0, cells untouched
    pub fn reset_generation(&mut self) {
        self.generation = 0;
    }

    /// Apply B3/S23 to every cell at once and advance the counter
    pub fn next_generation(&mut self) {
        step::next_generation(self);
    }

    /// Clear all cells
    pub fn reset(&mut self) {
        commands::reset(self)
    }

    pub fn randomize(&mut self) {
        commands::randomize(self, DEFAULT_RANDOM_DENSITY)
    }

    pub fn randomize_with_probability(&mut self, probability: f64) {
        commands::randomize(self, probability)
    }

    /// New empty grid of the given size
    pub fn resize(&mut self, width: u32, height: u32) {
        commands::resize(self, width, height)
    }

    pub fn toggle_cell(&mut self, x: i32, y: i32) {
        commands::toggle_cell(self, x, y)
    }

    pub fn set_cell(&mut self, x: i32, y: i32, alive: bool) {
        commands::set_cell(self, x, y, alive)
    }

    /// Stamp `pattern` with its top-left corner at `(x, y)`; restarts the count
    pub fn insert_pattern(&mut self, pattern: &Pattern, x: i32, y: i32) {
        commands::insert_pattern(self, pattern, x, y)
    }

    /// Enable or disable per-generation perf metrics. Disabling clears the
    /// recorded stats.
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        self.perf_enabled = enabled;
        if !enabled {
            self.perf_stats.reset();
        }
    }

    /// Last generation's perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        self.perf_stats.clone()
    }
}

pub(crate) use init::entropy_seed;

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
