//! Data models for Workbench.
//!
//! Request-scoped values only: nothing here outlives a response.

mod environment;
mod exercise;

pub use environment::*;
pub use exercise::*;
