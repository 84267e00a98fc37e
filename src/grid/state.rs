use rand::Rng;

use crate::domain::patterns::Pattern;

use super::*;

impl Grid {
    // === Clear entire grid ===
    pub fn clear(&mut self) {
        self.cells.fill(DEAD);
    }

    /// Each cell independently becomes alive with `probability`.
    /// `<= 0.0` leaves every cell dead, `>= 1.0` makes every cell alive.
    pub fn randomize<R: Rng + ?Sized>(&mut self, rng: &mut R, probability: f64) {
        for cell in self.cells.iter_mut() {
            *cell = if rng.random::<f64>() < probability { ALIVE } else { DEAD };
        }
    }

    /// Deep copy of the cell matrix, independent of later grid mutation
    pub fn snapshot(&self) -> CellRows {
        if self.width == 0 {
            return vec![Vec::new(); self.height as usize];
        }
        self.cells
            .chunks_exact(self.width as usize)
            .map(|row| row.iter().map(|&c| c == ALIVE).collect())
            .collect()
    }

    /// Replace every cell from `rows`, which must have exactly `height`
    /// rows of exactly `width` entries each. Anything else leaves the grid
    /// untouched. Returns whether the state was applied.
    pub fn set_state(&mut self, rows: &[Vec<bool>]) -> bool {
        let width = self.width as usize;
        if rows.len() != self.height as usize || rows.iter().any(|row| row.len() != width) {
            return false;
        }
        for (dst, &alive) in self.cells.iter_mut().zip(rows.iter().flatten()) {
            *dst = if alive { ALIVE } else { DEAD };
        }
        true
    }

    /// New dimensions with every cell dead. Prior state is always dropped.
    pub fn resize(&mut self, width: u32, height: u32) {
        *self = Grid::new(width, height);
    }

    /// Overwrite the region covered by `pattern` with its values, top-left
    /// corner at `(start_x, start_y)`. Dead pattern entries clear cells.
    /// Pattern cells that land off the grid are clipped.
    pub fn insert_pattern(&mut self, pattern: &Pattern, start_x: i32, start_y: i32) {
        for (py, row) in pattern.rows().iter().enumerate() {
            let Some(y) = offset(start_y, py) else { continue };
            for (px, &alive) in row.iter().enumerate() {
                let Some(x) = offset(start_x, px) else { continue };
                self.set_cell(x, y, alive);
            }
        }
    }
}

#[inline]
fn offset(start: i32, delta: usize) -> Option<i32> {
    i32::try_from(delta).ok().and_then(|d| start.checked_add(d))
}
