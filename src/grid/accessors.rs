use super::*;

impl Grid {
    // === Cell access ===
    #[inline]
    pub fn get_cell(&self, x: i32, y: i32) -> bool {
        match self.checked_index(x, y) {
            Some(idx) => self.cells[idx] == ALIVE,
            None => false,
        }
    }

    #[inline]
    pub fn set_cell(&mut self, x: i32, y: i32, alive: bool) {
        if let Some(idx) = self.checked_index(x, y) {
            self.cells[idx] = if alive { ALIVE } else { DEAD };
        }
    }

    #[inline]
    pub fn toggle_cell(&mut self, x: i32, y: i32) {
        if let Some(idx) = self.checked_index(x, y) {
            self.cells[idx] ^= ALIVE;
        }
    }

    /// In-bounds read by flat index
    #[inline]
    pub(crate) fn is_alive_idx(&self, idx: usize) -> bool {
        self.cells[idx] == ALIVE
    }
}
