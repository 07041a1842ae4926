//! Service layer for Workbench.
//!
//! - Environment (host facts reported by the lab dashboard)

mod environment;

pub use environment::EnvironmentService;
