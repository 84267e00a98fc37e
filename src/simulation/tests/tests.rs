use super::*;
use crate::domain::patterns::PatternKind;

fn alive_cells(sim: &Simulation) -> Vec<(i32, i32)> {
    let mut out = Vec::new();
    for y in 0..sim.height() as i32 {
        for x in 0..sim.width() as i32 {
            if sim.grid().get_cell(x, y) {
                out.push((x, y));
            }
        }
    }
    out
}

fn with_cells(width: u32, height: u32, cells: &[(i32, i32)]) -> Simulation {
    let mut sim = Simulation::new(width, height);
    for &(x, y) in cells {
        sim.set_cell(x, y, true);
    }
    sim
}

#[test]
fn new_simulation_is_empty_at_generation_zero() {
    let sim = Simulation::new(20, 10);
    assert_eq!((sim.width(), sim.height()), (20, 10));
    assert_eq!(sim.generation(), 0);
    assert_eq!(sim.population(), 0);
}

#[test]
fn blinker_oscillates_with_period_two() {
    let horizontal = vec![(4, 5), (5, 5), (6, 5)];
    let vertical = vec![(5, 4), (5, 5), (5, 6)];
    let mut sim = with_cells(10, 10, &horizontal);

    sim.next_generation();
    assert_eq!(alive_cells(&sim), vertical);
    assert_eq!(sim.generation(), 1);

    sim.next_generation();
    assert_eq!(alive_cells(&sim), horizontal);
    assert_eq!(sim.generation(), 2);
}

#[test]
fn block_is_a_still_life() {
    let block = vec![(5, 5), (6, 5), (5, 6), (6, 6)];
    let mut sim = with_cells(10, 10, &block);
    for _ in 0..5 {
        sim.next_generation();
        assert_eq!(alive_cells(&sim), block);
    }
    assert_eq!(sim.generation(), 5);
}

#[test]
fn lonely_cells_die() {
    let mut sim = with_cells(10, 10, &[(5, 5)]);
    sim.next_generation();
    assert_eq!(sim.population(), 0);

    let mut pair = with_cells(10, 10, &[(2, 2), (3, 2)]);
    pair.next_generation();
    assert_eq!(pair.population(), 0);
}

#[test]
fn crowded_center_dies() {
    let mut cells = Vec::new();
    for y in 4..=6 {
        for x in 4..=6 {
            cells.push((x, y));
        }
    }
    let mut sim = with_cells(10, 10, &cells);
    sim.next_generation();

    // Center had 8 neighbors, edge midpoints had 5
    assert!(!sim.grid().get_cell(5, 5));
    assert!(!sim.grid().get_cell(5, 4));
    assert!(!sim.grid().get_cell(4, 5));
    // Corners had 3 and survive
    assert!(sim.grid().get_cell(4, 4));
    assert!(sim.grid().get_cell(6, 6));
}

#[test]
fn three_neighbors_give_birth() {
    let mut sim = with_cells(10, 10, &[(5, 4), (5, 5), (5, 6)]);
    sim.next_generation();
    assert!(sim.grid().get_cell(4, 5));
    assert!(sim.grid().get_cell(6, 5));
}

#[test]
fn step_reads_only_the_previous_generation() {
    // An L-tromino becomes a block in one step. Updating in place would
    // let early births feed later neighbor counts.
    let mut sim = with_cells(6, 6, &[(2, 2), (3, 2), (2, 3)]);
    sim.next_generation();
    assert_eq!(alive_cells(&sim), vec![(2, 2), (3, 2), (2, 3), (3, 3)]);
}

#[test]
fn edges_do_not_wrap() {
    // Vertical blinker on the left edge loses the cells that would sit at x = -1
    let mut sim = with_cells(5, 5, &[(0, 1), (0, 2), (0, 3)]);
    sim.next_generation();
    assert_eq!(alive_cells(&sim), vec![(0, 2), (1, 2)]);
}

#[test]
fn glider_moves_diagonally() {
    let mut sim = Simulation::new(12, 12);
    sim.insert_pattern(&PatternKind::Glider.pattern(), 1, 1);
    assert_eq!(alive_cells(&sim), vec![(2, 1), (3, 2), (1, 3), (2, 3), (3, 3)]);

    for _ in 0..4 {
        sim.next_generation();
    }
    assert_eq!(alive_cells(&sim), vec![(3, 2), (4, 3), (2, 4), (3, 4), (4, 4)]);
    assert_eq!(sim.generation(), 4);
}

#[test]
fn full_grid_keeps_only_corners() {
    let mut sim = Simulation::new(4, 4);
    sim.randomize_with_probability(1.0);
    assert_eq!(sim.population(), 16);

    sim.next_generation();
    assert_eq!(alive_cells(&sim), vec![(0, 0), (3, 0), (0, 3), (3, 3)]);
}

#[test]
fn degenerate_grid_steps() {
    let mut sim = Simulation::new(0, 0);
    sim.next_generation();
    sim.randomize();
    sim.next_generation();
    assert_eq!(sim.population(), 0);
    assert_eq!(sim.generation(), 1);
}

#[test]
fn generation_counter_restarts_on_lifecycle_commands() {
    let mut sim = with_cells(10, 10, &[(4, 5), (5, 5), (6, 5)]);
    sim.next_generation();
    sim.next_generation();
    assert_eq!(sim.generation(), 2);

    sim.reset();
    assert_eq!(sim.generation(), 0);
    assert_eq!(sim.population(), 0);

    sim.next_generation();
    sim.randomize();
    assert_eq!(sim.generation(), 0);

    sim.next_generation();
    sim.resize(8, 8);
    assert_eq!(sim.generation(), 0);

    sim.next_generation();
    sim.insert_pattern(&PatternKind::Blinker.pattern(), 2, 2);
    assert_eq!(sim.generation(), 0);

    sim.next_generation();
    sim.reset_generation();
    assert_eq!(sim.generation(), 0);
    assert_eq!(sim.population(), 3);
}

#[test]
fn cell_edits_keep_the_generation_counter() {
    let mut sim = Simulation::new(10, 10);
    sim.next_generation();
    sim.next_generation();
    sim.next_generation();

    sim.toggle_cell(3, 3);
    sim.set_cell(4, 4, true);
    sim.toggle_cell(-1, 50);
    assert_eq!(sim.generation(), 3);
    assert_eq!(sim.population(), 2);
}

#[test]
fn resize_clears_and_changes_dimensions() {
    let mut sim = with_cells(10, 10, &[(1, 1), (2, 2)]);
    sim.resize(4, 7);
    assert_eq!((sim.width(), sim.height()), (4, 7));
    assert_eq!(sim.population(), 0);

    sim.set_cell(3, 6, true);
    sim.next_generation();
    assert_eq!(sim.population(), 0);
}

#[test]
fn step_follows_resize_through_grid_mut() {
    let mut sim = Simulation::new(3, 3);
    sim.grid_mut().resize(10, 10);
    for (x, y) in [(4, 5), (5, 5), (6, 5)] {
        sim.grid_mut().set_cell(x, y, true);
    }
    sim.next_generation();
    assert_eq!(alive_cells(&sim), vec![(5, 4), (5, 5), (5, 6)]);
}

#[test]
fn randomize_uses_default_density_and_seed() {
    let mut a = Simulation::with_seed(50, 50, 7);
    let mut b = Simulation::with_seed(50, 50, 7);
    a.randomize();
    b.randomize();
    assert_eq!(a.grid(), b.grid());

    // 2500 cells at 0.3: well inside [500, 1000]
    let pop = a.population();
    assert!((500..=1000).contains(&pop), "population {}", pop);
}

#[test]
fn reseed_replays_the_same_board() {
    let mut sim = Simulation::with_seed(30, 30, 99);
    sim.randomize();
    let first = sim.grid().snapshot();

    sim.randomize();
    assert_ne!(sim.grid().snapshot(), first);

    sim.reseed(99);
    sim.randomize();
    assert_eq!(sim.grid().snapshot(), first);
}

#[test]
fn randomize_with_probability_extremes() {
    let mut sim = Simulation::new(8, 8);
    sim.randomize_with_probability(0.0);
    assert_eq!(sim.population(), 0);
    sim.randomize_with_probability(1.0);
    assert_eq!(sim.population(), 64);
}

#[test]
fn perf_stats_are_zero_until_enabled() {
    let mut sim = with_cells(10, 10, &[(4, 5), (5, 5), (6, 5)]);
    sim.next_generation();
    assert_eq!(sim.get_perf_stats(), PerfStats::default());

    sim.enable_perf_metrics(true);
    sim.next_generation();
    let stats = sim.get_perf_stats();
    assert_eq!(stats.cells_processed(), 100);
    assert_eq!(stats.births(), 2);
    assert_eq!(stats.deaths(), 2);
    assert_eq!(stats.population(), 3);
    assert_eq!(stats.generation(), 2);
    assert!(stats.step_ms() >= 0.0);
}

#[test]
fn disabling_perf_metrics_clears_stats() {
    let mut sim = with_cells(10, 10, &[(4, 5), (5, 5), (6, 5)]);
    sim.enable_perf_metrics(true);
    sim.next_generation();
    assert_eq!(sim.get_perf_stats().generation(), 1);

    sim.enable_perf_metrics(false);
    assert_eq!(sim.get_perf_stats(), PerfStats::default());
    sim.next_generation();
    assert_eq!(sim.get_perf_stats(), PerfStats::default());
}
