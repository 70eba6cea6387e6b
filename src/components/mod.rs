//! Maud HTML template components for the web UI.
//!
//! - `layout`: Base page layout and navigation
//! - `metric`: Engagement metric cards and raw-totals tables

mod layout;
mod metric;

pub use layout::BaseLayout;
pub use metric::{MetricCard, TotalsTable};
