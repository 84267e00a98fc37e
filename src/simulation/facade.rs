use wasm_bindgen::prelude::*;

use crate::domain::config::EngineConfig;
use crate::domain::patterns::Pattern;
use crate::render::Renderer;

use super::perf_stats::PerfStats;
use super::{entropy_seed, Simulation};

/// Browser-facing handle: one simulation, its renderer, and the UI config.
/// JS owns the instance and drives `next_generation` from its own timer.
#[wasm_bindgen]
pub struct GameOfLife {
    core: Simulation,
    renderer: Renderer,
    config: EngineConfig,
    speed_ms: u32,
}

// Fallible operations with plain `String` errors, mapped to JS below
impl GameOfLife {
    pub fn from_config(width: u32, height: u32, seed: u64, config: EngineConfig) -> Self {
        let defaults = config.defaults();
        let colors = defaults.color_scheme.colors().unwrap_or_default();
        let core = Simulation::with_seed(width, height, seed);
        let mut renderer = Renderer::new(defaults.cell_size, colors, defaults.show_grid);
        renderer.resize_canvas(core.width(), core.height());
        let speed_ms = defaults.speed_ms;
        Self {
            core,
            renderer,
            config,
            speed_ms,
        }
    }

    pub fn from_config_json(json: &str, seed: u64) -> Result<Self, String> {
        let config = EngineConfig::from_json(json)?;
        let size = config.defaults().grid_size.clone();
        Ok(Self::from_config(size.width, size.height, seed, config))
    }

    pub fn simulation(&self) -> &Simulation {
        &self.core
    }

    pub fn renderer(&self) -> &Renderer {
        &self.renderer
    }

    pub fn try_insert_pattern(&mut self, name: &str, x: i32, y: i32) -> Result<(), String> {
        let pattern = Pattern::by_name(name).ok_or_else(|| format!("unknown pattern: {}", name))?;
        self.core.insert_pattern(&pattern, x, y);
        Ok(())
    }

    pub fn try_insert_pattern_text(&mut self, text: &str, x: i32, y: i32) -> Result<(), String> {
        let pattern: Pattern = text.parse()?;
        self.core.insert_pattern(&pattern, x, y);
        Ok(())
    }

    pub fn try_select_grid_size(&mut self, label: &str) -> Result<(), String> {
        let size = self
            .config
            .grid_size(label)
            .ok_or_else(|| format!("unknown grid size: {}", label))?;
        let (width, height) = (size.width, size.height);
        self.resize(width, height);
        Ok(())
    }

    pub fn try_select_color_scheme(&mut self, name: &str) -> Result<(), String> {
        let scheme = self
            .config
            .color_scheme(name)
            .ok_or_else(|| format!("unknown color scheme: {}", name))?;
        let colors = scheme.colors()?;
        self.renderer.set_color_scheme(colors);
        Ok(())
    }
}

fn js_err(e: String) -> JsValue {
    console_warn!("life-engine: {}", e);
    JsValue::from_str(&e)
}

#[wasm_bindgen]
impl GameOfLife {
    /// Builtin config, fresh random seed
    #[wasm_bindgen(constructor)]
    pub fn new(width: u32, height: u32) -> Self {
        Self::from_config(width, height, entropy_seed(), EngineConfig::builtin())
    }

    #[wasm_bindgen(js_name = withSeed)]
    pub fn with_seed(width: u32, height: u32, seed: u64) -> Self {
        Self::from_config(width, height, seed, EngineConfig::builtin())
    }

    /// Grid dimensions come from the config's default grid size
    #[wasm_bindgen(js_name = withConfig)]
    pub fn with_config(json: String) -> Result<GameOfLife, JsValue> {
        Self::from_config_json(&json, entropy_seed()).map_err(js_err)
    }

    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 { self.core.width() }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 { self.core.height() }

    #[wasm_bindgen(getter)]
    pub fn generation(&self) -> u64 { self.core.generation() }

    #[wasm_bindgen(getter)]
    pub fn population(&self) -> u32 { self.core.population() as u32 }

    #[wasm_bindgen(getter)]
    pub fn speed_ms(&self) -> u32 { self.speed_ms }

    #[wasm_bindgen(getter)]
    pub fn min_speed_ms(&self) -> u32 { self.config.defaults().min_speed_ms }

    #[wasm_bindgen(getter)]
    pub fn max_speed_ms(&self) -> u32 { self.config.defaults().max_speed_ms }

    #[wasm_bindgen(getter)]
    pub fn canvas_width(&self) -> u32 { self.renderer.canvas_width() }

    #[wasm_bindgen(getter)]
    pub fn canvas_height(&self) -> u32 { self.renderer.canvas_height() }

    #[wasm_bindgen(getter)]
    pub fn cell_size(&self) -> u32 { self.renderer.cell_size() }

    // === CELL EDITING ===

    pub fn get_cell(&self, x: i32, y: i32) -> bool {
        self.core.grid().get_cell(x, y)
    }

    pub fn set_cell(&mut self, x: i32, y: i32, alive: bool) {
        self.core.set_cell(x, y, alive);
    }

    pub fn toggle_cell(&mut self, x: i32, y: i32) {
        self.core.toggle_cell(x, y);
    }

    /// Toggle the cell under a canvas click. Returns false when the click
    /// lands outside the grid.
    pub fn toggle_at_canvas(&mut self, canvas_x: f64, canvas_y: f64) -> bool {
        let (x, y) = self.renderer.canvas_to_grid(canvas_x, canvas_y);
        let hit = self.core.grid().in_bounds(x, y);
        self.core.toggle_cell(x, y);
        hit
    }

    pub fn insert_pattern(&mut self, name: &str, x: i32, y: i32) -> Result<(), JsValue> {
        self.try_insert_pattern(name, x, y).map_err(js_err)
    }

    /// Plaintext rows, `#`/`O` alive and `.` dead
    pub fn insert_pattern_text(&mut self, text: &str, x: i32, y: i32) -> Result<(), JsValue> {
        self.try_insert_pattern_text(text, x, y).map_err(js_err)
    }

    // === LIFECYCLE ===

    pub fn next_generation(&mut self) {
        self.core.next_generation();
    }

    pub fn reset(&mut self) {
        self.core.reset();
    }

    pub fn randomize(&mut self) {
        self.core.randomize();
    }

    pub fn reset_generation(&mut self) {
        self.core.reset_generation();
    }

    /// Resize the grid (clearing it) and the canvas to match
    pub fn resize(&mut self, width: u32, height: u32) {
        self.core.resize(width, height);
        let (width, height) = (self.core.width(), self.core.height());
        self.renderer.resize_canvas(width, height);
        console_log!("life-engine: grid resized to {}x{}", width, height);
    }

    pub fn reseed(&mut self, seed: u64) {
        self.core.reseed(seed);
    }

    // === SETTINGS ===

    pub fn select_grid_size(&mut self, label: &str) -> Result<(), JsValue> {
        self.try_select_grid_size(label).map_err(js_err)
    }

    pub fn select_color_scheme(&mut self, name: &str) -> Result<(), JsValue> {
        self.try_select_color_scheme(name).map_err(js_err)
    }

    pub fn set_show_grid(&mut self, show_grid: bool) {
        self.renderer.set_show_grid(show_grid);
    }

    pub fn set_cell_size(&mut self, cell_size: u32) {
        self.renderer.set_cell_size(cell_size);
        self.renderer.resize_canvas(self.core.width(), self.core.height());
    }

    /// Store the timer interval, clamped to the configured range.
    /// Returns the value actually stored.
    pub fn set_speed(&mut self, speed_ms: u32) -> u32 {
        self.speed_ms = self.config.clamp_speed(speed_ms);
        self.speed_ms
    }

    pub fn get_config_manifest_json(&self) -> String {
        self.config.manifest_json()
    }

    // === RENDERING ===

    /// Repaint the pixel buffer from the current cells
    pub fn render(&mut self) {
        self.renderer.render(self.core.grid());
    }

    /// Hover feedback. Call after `render`; the next render clears it.
    pub fn highlight_cell(&mut self, x: i32, y: i32, color: u32) {
        self.renderer.highlight_cell(x, y, color);
    }

    /// Get pointer to the ABGR pixel buffer (for ImageData)
    pub fn pixels_ptr(&self) -> *const u32 {
        self.renderer.pixels_ptr()
    }

    pub fn pixels_len(&self) -> usize {
        self.renderer.pixels().len()
    }

    /// Get pointer to raw cell bytes (0 dead, 1 alive), row-major
    pub fn cells_ptr(&self) -> *const u8 {
        self.core.grid().cells_ptr()
    }

    pub fn cells_len(&self) -> usize {
        self.core.grid().size()
    }

    // === PERF ===

    /// Enable or disable per-generation perf metrics
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        self.core.enable_perf_metrics(enabled);
    }

    /// Stats from the last generation stepped with perf enabled. Disabling
    /// perf metrics clears them.
    pub fn get_perf_stats(&self) -> PerfStats {
        self.core.get_perf_stats()
    }
}
