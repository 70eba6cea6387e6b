//! Engagement aggregation core.
//!
//! [`totals`] holds the per-window accumulator and engagement-rate math;
//! [`fetcher`] walks the paginated media listing with a time cutoff and
//! produces the three rolling-window reports.

pub mod fetcher;
pub mod totals;

pub use fetcher::{fetch_report_since, fetch_window_report, run_window_reports, WindowReports};
pub use totals::{engagement_rate, Report, RunningTotals};
