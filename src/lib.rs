//! Life Engine - Conway's Game of Life in WASM
//!
//! Architecture:
//! - core/        - Logging macros
//! - domain/      - B3/S23 rule, patterns, config
//! - grid/        - Bounded cell storage
//! - simulation/  - Generation stepping and the JS facade
//! - render/      - Pixel buffer for the canvas

// Log macros must be declared first so later modules see them
#[macro_use]
pub mod core;
pub mod domain;
pub mod grid;
pub mod render;
pub mod simulation;

use wasm_bindgen::prelude::*;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    console_log!("Life WASM Engine {} initialized", env!("CARGO_PKG_VERSION"));
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Names accepted by `GameOfLife::insert_pattern`
#[wasm_bindgen]
pub fn pattern_names() -> Vec<String> {
    domain::patterns::pattern_names()
        .into_iter()
        .map(str::to_string)
        .collect()
}

// Re-export main types
pub use domain::config::{ColorScheme, EngineConfig, GridSize, SchemeColors, Settings};
pub use domain::patterns::{Pattern, PatternKind};
pub use grid::Grid;
pub use render::Renderer;
pub use simulation::{GameOfLife, PerfStats, Simulation};
