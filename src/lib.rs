//! Workbench - starter sites and Python lab dashboard
//!
//! Library exports for testing and external use.

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod site;
pub mod state;
pub mod templates;

pub use config::config;
pub use error::{Error, Result};
pub use site::Site;
pub use state::AppState;
