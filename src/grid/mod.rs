//! Grid - fixed-size 2D cell matrix
//!
//! Cells live in one flat row-major byte array (0 = dead, 1 = alive) so the
//! front-end can read them straight out of WASM memory.
//!
//! Every coordinate operation is bounds-safe: reads outside
//! `[0, width) x [0, height)` see a dead cell, writes outside are dropped.

pub(crate) const DEAD: u8 = 0;
pub(crate) const ALIVE: u8 = 1;

/// Row-major boolean snapshot, `rows[y][x]`
pub type CellRows = Vec<Vec<bool>>;

mod indexing;
mod accessors;
mod neighbors;
mod state;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    width: u32,
    height: u32,
    size: usize,
    cells: Vec<u8>,
}

impl Grid {
    /// Zero dimensions give a degenerate grid with no cells, and so do
    /// dimensions whose cell count cannot be addressed on this target.
    pub fn new(width: u32, height: u32) -> Self {
        let Some(size) = cell_count(width, height) else {
            console_warn!("grid {}x{} is too large, using 0x0", width, height);
            return Self::new(0, 0);
        };
        Self {
            width,
            height,
            size,
            cells: vec![DEAD; size],
        }
    }

    /// Raw cell bytes for JS interop
    pub fn cells(&self) -> &[u8] {
        &self.cells
    }

    pub fn cells_ptr(&self) -> *const u8 {
        self.cells.as_ptr()
    }

    /// Number of alive cells
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|&&c| c == ALIVE).count()
    }

    /// Swap in a fully computed buffer of the same size.
    /// The previous cells are left in `next` for reuse.
    pub(crate) fn swap_cells(&mut self, next: &mut Vec<u8>) {
        debug_assert_eq!(next.len(), self.size, "swap_cells: buffer size mismatch");
        std::mem::swap(&mut self.cells, next);
    }
}

fn cell_count(width: u32, height: u32) -> Option<usize> {
    let size = (width as usize).checked_mul(height as usize)?;
    (size <= isize::MAX as usize).then_some(size)
}
