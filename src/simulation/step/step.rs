use crate::domain::rules;
use crate::grid::{ALIVE, DEAD};

use super::{PerfTimer, Simulation};

pub(super) fn next_generation(sim: &mut Simulation) {
    let perf_on = sim.perf_enabled;
    if perf_on {
        sim.perf_stats.reset();
    }
    let step_start = if perf_on { Some(PerfTimer::start()) } else { None };

    let grid = &sim.grid;
    let next = &mut sim.next_cells;
    // Grid may have been resized through grid_mut()
    if next.len() != grid.size() {
        next.clear();
        next.resize(grid.size(), DEAD);
    }

    let mut births = 0u32;
    let mut deaths = 0u32;

    // Reads only touch `grid`, writes only touch `next`
    for y in 0..grid.height() {
        for x in 0..grid.width() {
            let idx = grid.index(x, y);
            let was_alive = grid.is_alive_idx(idx);
            let neighbors = grid.count_neighbors(x as i32, y as i32);
            let alive = rules::next_state(was_alive, neighbors);
            next[idx] = if alive { ALIVE } else { DEAD };

            match (was_alive, alive) {
                (false, true) => births += 1,
                (true, false) => deaths += 1,
                _ => {}
            }
        }
    }

    sim.grid.swap_cells(&mut sim.next_cells);
    sim.generation += 1;

    if perf_on {
        let stats = &mut sim.perf_stats;
        stats.cells_processed = sim.grid.size() as u32;
        stats.births = births;
        stats.deaths = deaths;
        stats.population = sim.grid.population() as u32;
        stats.generation = sim.generation;
        if let Some(start) = step_start {
            stats.step_ms = start.elapsed_ms();
        }
    }
}
