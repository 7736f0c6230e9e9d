//! Targeting math and sample strategies for tank bots driven by an external
//! battle engine.
//!
//! [`tactics`] holds the pure geometry, prediction, hit-probability and shot
//! simulation routines. [`ai`] builds bots on top of them, and [`engine`]
//! describes the boundary those bots are driven across.

pub mod ai;
pub mod config;
pub mod engine;
pub mod tactics;
