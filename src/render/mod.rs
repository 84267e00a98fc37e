//! Renderer - paints a Grid into an ABGR pixel buffer
//!
//! The buffer is row-major, `canvas_width * canvas_height` pixels, and can be
//! copied straight into an `ImageData` on the JS side.

use crate::domain::config::SchemeColors;
use crate::grid::Grid;

pub struct Renderer {
    cell_size: u32,
    show_grid: bool,
    colors: SchemeColors,
    canvas_width: u32,
    canvas_height: u32,
    pixels: Vec<u32>,
}

impl Renderer {
    pub fn new(cell_size: u32, colors: SchemeColors, show_grid: bool) -> Self {
        Self {
            cell_size: cell_size.max(1),
            show_grid,
            colors,
            canvas_width: 0,
            canvas_height: 0,
            pixels: Vec::new(),
        }
    }

    #[inline]
    pub fn cell_size(&self) -> u32 { self.cell_size }

    #[inline]
    pub fn show_grid(&self) -> bool { self.show_grid }

    #[inline]
    pub fn colors(&self) -> SchemeColors { self.colors }

    #[inline]
    pub fn canvas_width(&self) -> u32 { self.canvas_width }

    #[inline]
    pub fn canvas_height(&self) -> u32 { self.canvas_height }

    pub fn pixels(&self) -> &[u32] {
        &self.pixels
    }

    pub fn pixels_ptr(&self) -> *const u32 {
        self.pixels.as_ptr()
    }

    /// Size the canvas to fit a `width x height` grid
    pub fn resize_canvas(&mut self, width: u32, height: u32) {
        self.canvas_width = width.saturating_mul(self.cell_size);
        self.canvas_height = height.saturating_mul(self.cell_size);
        let len = self.canvas_width as usize * self.canvas_height as usize;
        self.pixels.resize(len, self.colors.dead);
    }

    pub fn set_color_scheme(&mut self, colors: SchemeColors) {
        self.colors = colors;
    }

    pub fn set_show_grid(&mut self, show_grid: bool) {
        self.show_grid = show_grid;
    }

    /// Takes effect on the next `resize_canvas` or `render`
    pub fn set_cell_size(&mut self, cell_size: u32) {
        self.cell_size = cell_size.max(1);
    }

    pub fn render(&mut self, grid: &Grid) {
        let needed_w = grid.width().saturating_mul(self.cell_size);
        let needed_h = grid.height().saturating_mul(self.cell_size);
        if (needed_w, needed_h) != (self.canvas_width, self.canvas_height) {
            self.resize_canvas(grid.width(), grid.height());
        }

        self.pixels.fill(self.colors.dead);

        let cs = self.cell_size;
        for y in 0..grid.height() {
            for x in 0..grid.width() {
                if grid.is_alive_idx(grid.index(x, y)) {
                    self.fill_rect(x.saturating_mul(cs), y.saturating_mul(cs), cs, cs, self.colors.alive);
                }
            }
        }

        if self.show_grid {
            self.draw_grid_lines(grid.width(), grid.height());
        }
    }

    /// Floor division of canvas coordinates by the cell size
    pub fn canvas_to_grid(&self, canvas_x: f64, canvas_y: f64) -> (i32, i32) {
        let cs = self.cell_size as f64;
        ((canvas_x / cs).floor() as i32, (canvas_y / cs).floor() as i32)
    }

    /// Fill the cell's square minus a 1px margin
    pub fn highlight_cell(&mut self, x: i32, y: i32, color: u32) {
        if x < 0 || y < 0 || self.cell_size <= 2 {
            return;
        }
        let cs = self.cell_size;
        let (Some(px), Some(py)) = ((x as u32).checked_mul(cs), (y as u32).checked_mul(cs)) else {
            return;
        };
        self.fill_rect(px + 1, py + 1, cs - 2, cs - 2, color);
    }

    fn draw_grid_lines(&mut self, width: u32, height: u32) {
        let (cw, ch) = (self.canvas_width, self.canvas_height);
        if cw == 0 || ch == 0 {
            return;
        }
        let color = self.colors.grid;
        let cs = self.cell_size;

        // Vertical lines, the last one on the far edge
        for x in 0..=width {
            let px = x.saturating_mul(cs).min(cw - 1);
            self.fill_rect(px, 0, 1, ch, color);
        }
        // Horizontal lines
        for y in 0..=height {
            let py = y.saturating_mul(cs).min(ch - 1);
            self.fill_rect(0, py, cw, 1, color);
        }
    }

    /// Clipped to the canvas
    fn fill_rect(&mut self, x: u32, y: u32, w: u32, h: u32, color: u32) {
        let end_x = x.saturating_add(w).min(self.canvas_width);
        let end_y = y.saturating_add(h).min(self.canvas_height);
        if x >= end_x || y >= end_y {
            return;
        }
        let stride = self.canvas_width as usize;
        for row in y..end_y {
            let start = row as usize * stride;
            self.pixels[start + x as usize..start + end_x as usize].fill(color);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const COLORS: SchemeColors = SchemeColors {
        alive: 0xFF000000,
        dead: 0xFFFFFFFF,
        grid: 0xFFCCCCCC,
    };

    fn pixel(r: &Renderer, x: u32, y: u32) -> u32 {
        r.pixels()[(y * r.canvas_width() + x) as usize]
    }

    #[test]
    fn resize_canvas_scales_by_cell_size() {
        let mut r = Renderer::new(10, COLORS, true);
        r.resize_canvas(50, 30);
        assert_eq!((r.canvas_width(), r.canvas_height()), (500, 300));
        assert_eq!(r.pixels().len(), 150_000);
    }

    #[test]
    fn renders_alive_cells_without_grid() {
        let mut grid = Grid::new(3, 2);
        grid.set_cell(1, 1, true);
        let mut r = Renderer::new(4, COLORS, false);
        r.render(&grid);

        assert_eq!((r.canvas_width(), r.canvas_height()), (12, 8));
        for y in 0..8 {
            for x in 0..12 {
                let alive = (4..8).contains(&x) && (4..8).contains(&y);
                let expected = if alive { COLORS.alive } else { COLORS.dead };
                assert_eq!(pixel(&r, x, y), expected, "at ({}, {})", x, y);
            }
        }
    }

    #[test]
    fn grid_lines_cover_cell_borders_and_far_edge() {
        let grid = Grid::new(2, 2);
        let mut r = Renderer::new(5, COLORS, true);
        r.render(&grid);

        assert_eq!(pixel(&r, 0, 2), COLORS.grid);
        assert_eq!(pixel(&r, 5, 2), COLORS.grid);
        assert_eq!(pixel(&r, 9, 2), COLORS.grid);
        assert_eq!(pixel(&r, 2, 0), COLORS.grid);
        assert_eq!(pixel(&r, 2, 5), COLORS.grid);
        assert_eq!(pixel(&r, 2, 9), COLORS.grid);
        assert_eq!(pixel(&r, 2, 2), COLORS.dead);
        assert_eq!(pixel(&r, 7, 7), COLORS.dead);
    }

    #[test]
    fn color_scheme_change_applies_on_next_render() {
        let mut grid = Grid::new(1, 1);
        grid.set_cell(0, 0, true);
        let mut r = Renderer::new(2, COLORS, false);
        r.render(&grid);
        assert_eq!(pixel(&r, 0, 0), COLORS.alive);

        r.set_color_scheme(SchemeColors { alive: 0xFF00FF00, ..COLORS });
        r.render(&grid);
        assert_eq!(pixel(&r, 1, 1), 0xFF00FF00);
    }

    #[test]
    fn render_follows_grid_resize() {
        let mut r = Renderer::new(10, COLORS, true);
        r.render(&Grid::new(5, 5));
        assert_eq!(r.pixels().len(), 2500);
        r.render(&Grid::new(2, 3));
        assert_eq!((r.canvas_width(), r.canvas_height()), (20, 30));
        assert_eq!(r.pixels().len(), 600);
    }

    #[test]
    fn canvas_to_grid_floors() {
        let r = Renderer::new(10, COLORS, true);
        assert_eq!(r.canvas_to_grid(0.0, 0.0), (0, 0));
        assert_eq!(r.canvas_to_grid(9.9, 10.0), (0, 1));
        assert_eq!(r.canvas_to_grid(55.0, 123.4), (5, 12));
        assert_eq!(r.canvas_to_grid(-0.5, 3.0), (-1, 0));
    }

    #[test]
    fn highlight_cell_keeps_margin_and_clips() {
        let mut r = Renderer::new(4, COLORS, false);
        r.render(&Grid::new(2, 2));
        r.highlight_cell(1, 0, 0xFF0000FF);
        assert_eq!(pixel(&r, 4, 0), COLORS.dead);
        assert_eq!(pixel(&r, 5, 1), 0xFF0000FF);
        assert_eq!(pixel(&r, 6, 2), 0xFF0000FF);
        assert_eq!(pixel(&r, 7, 3), COLORS.dead);

        r.highlight_cell(-1, 0, 0xFF0000FF);
        r.highlight_cell(9, 9, 0xFF0000FF);
        assert_eq!(r.pixels().iter().filter(|&&p| p == 0xFF0000FF).count(), 4);
    }
}
