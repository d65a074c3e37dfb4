//! Superstore sales dashboard: load a retail dataset, narrow it by date and
//! by a Region → State → City cascade, and summarise sales by category,
//! region and month.
//!
//! Everything in this crate is GUI-free; the egui front-end lives in the
//! binary.

pub mod config;
pub mod data;
pub mod state;
