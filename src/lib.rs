//! Instagram Insights Dashboard library.
//!
//! A single-session web dashboard that authorizes an Instagram professional
//! account via OAuth, aggregates recent media engagement into rolling
//! 7/30/90-day reports, and renders a dashboard plus a deep link into the
//! CoShot companion app.

pub mod components;
pub mod config;
pub mod deeplink;
pub mod insights;
pub mod instagram;
pub mod web;
