//! Domain logic: the Life rule, stock patterns, and front-end config

pub mod config;
pub mod patterns;
pub mod rules;
