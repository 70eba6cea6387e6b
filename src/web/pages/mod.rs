//! Maud-based page templates for the web UI.
//!
//! This module contains full page implementations using maud templates.
//! Each page module exports a render function that produces the complete HTML.

pub mod dashboard;
pub mod error;
pub mod home;

// Re-export page rendering functions for convenience
pub use dashboard::{render_dashboard, DashboardData};
pub use error::{render_flow_error, render_token_error};
pub use home::render_home;
