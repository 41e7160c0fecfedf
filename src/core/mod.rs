//! Core building blocks: run parameters, the operation set and registry,
//! row parsing, and the row-processing pipeline. These are internal
//! primitives consumed by the high-level `api` module.
pub mod params;
pub mod processing;
