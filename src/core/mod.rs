//! Core utilities shared by the rest of the engine

#[macro_use]
#[path = "utils/log.rs"]
pub mod log;
