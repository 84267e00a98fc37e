use crate::domain::patterns::Pattern;
use crate::grid::DEAD;

use super::Simulation;

pub(super) fn reset(sim: &mut Simulation) {
    sim.grid.clear();
    sim.generation = 0;
}

pub(super) fn randomize(sim: &mut Simulation, probability: f64) {
    sim.grid.randomize(&mut sim.rng, probability);
    sim.generation = 0;
}

pub(super) fn resize(sim: &mut Simulation, width: u32, height: u32) {
    sim.grid.resize(width, height);
    sim.next_cells.clear();
    sim.next_cells.resize(sim.grid.size(), DEAD);
    sim.generation = 0;
}

// Live edits: the generation counter keeps running
pub(super) fn toggle_cell(sim: &mut Simulation, x: i32, y: i32) {
    sim.grid.toggle_cell(x, y);
}

pub(super) fn set_cell(sim: &mut Simulation, x: i32, y: i32, alive: bool) {
    sim.grid.set_cell(x, y, alive);
}

pub(super) fn insert_pattern(sim: &mut Simulation, pattern: &Pattern, x: i32, y: i32) {
    sim.grid.insert_pattern(pattern, x, y);
    sim.generation = 0;
}
