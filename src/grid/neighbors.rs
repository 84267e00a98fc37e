use super::*;

const OFFSETS: [(i32, i32); 8] = [
    (-1, -1), (0, -1), (1, -1),
    (-1, 0),           (1, 0),
    (-1, 1),  (0, 1),  (1, 1),
];

impl Grid {
    /// Alive cells among the 8 Chebyshev neighbors of `(x, y)`.
    /// Each neighbor is bounds-checked on its own, `(x, y)` itself is not,
    /// and nothing wraps around the edges.
    pub fn count_neighbors(&self, x: i32, y: i32) -> u8 {
        let mut count = 0;
        for (dx, dy) in OFFSETS {
            let (Some(nx), Some(ny)) = (x.checked_add(dx), y.checked_add(dy)) else {
                continue;
            };
            if self.get_cell(nx, ny) {
                count += 1;
            }
        }
        count
    }
}
