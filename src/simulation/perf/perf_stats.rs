use wasm_bindgen::prelude::*;

/// Counters for the most recent generation
#[wasm_bindgen]
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PerfStats {
    pub(super) step_ms: f64,
    pub(super) cells_processed: u32,
    pub(super) births: u32,
    pub(super) deaths: u32,
    pub(super) population: u32,
    pub(super) generation: u64,
}

impl PerfStats {
    pub(crate) fn reset(&mut self) {
        *self = PerfStats::default();
    }
}

#[wasm_bindgen]
impl PerfStats {
    #[wasm_bindgen(getter)]
    pub fn step_ms(&self) -> f64 { self.step_ms }
    #[wasm_bindgen(getter)]
    pub fn cells_processed(&self) -> u32 { self.cells_processed }
    #[wasm_bindgen(getter)]
    pub fn births(&self) -> u32 { self.births }
    #[wasm_bindgen(getter)]
    pub fn deaths(&self) -> u32 { self.deaths }
    #[wasm_bindgen(getter)]
    pub fn population(&self) -> u32 { self.population }
    #[wasm_bindgen(getter)]
    pub fn generation(&self) -> u64 { self.generation }
}
