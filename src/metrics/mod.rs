//! Metrics module for workout calculations.

pub mod calculator;

pub use calculator::{summarize, Summary};
