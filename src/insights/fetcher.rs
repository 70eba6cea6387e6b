use anyhow::Result;
use chrono::{DateTime, Duration, Utc};
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::config::REPORT_WINDOW_DAYS;
use crate::insights::totals::{Report, RunningTotals};
use crate::instagram::InstagramClient;

/// Fetch and aggregate one rolling report window ending now.
///
/// # Errors
///
/// Transport failures and non-JSON responses propagate and abort the
/// window's report; there are no retries.
pub async fn fetch_window_report(
    client: &InstagramClient,
    access_token: &str,
    user_id: &str,
    window_days: i64,
    followers: u64,
) -> Result<Report> {
    let cutoff = Utc::now() - Duration::days(window_days);
    info!(window_days, user_id = %user_id, "Starting media fetch");

    let report = fetch_report_since(client, access_token, user_id, cutoff, followers).await?;

    info!(
        window_days,
        posts = report.post_count,
        engagement_rate = report.engagement_rate,
        "Window report complete"
    );
    Ok(report)
}

/// Walk the paginated media listing, folding every post at or after
/// `cutoff` into running totals.
///
/// Precondition: the provider returns media newest-first across pages. The
/// first post strictly older than the cutoff stops the traversal, so an
/// in-range post appearing after an out-of-range one would be dropped. A
/// page without a `data` collection ends the walk (defensive stop, not an
/// error), as does a page without a next cursor.
///
/// # Errors
///
/// Transport failures and non-JSON responses propagate to the caller.
pub async fn fetch_report_since(
    client: &InstagramClient,
    access_token: &str,
    user_id: &str,
    cutoff: DateTime<Utc>,
    followers: u64,
) -> Result<Report> {
    let mut totals = RunningTotals::default();
    let mut next_url = Some(client.media_url(access_token, user_id));

    while let Some(url) = next_url {
        let page = client.fetch_media_page(&url).await?;

        let Some(posts) = page.data else {
            debug!("Media page without data collection, stopping");
            break;
        };

        let mut reached_cutoff = false;
        for post in &posts {
            match post.parsed_timestamp() {
                Some(ts) if ts < cutoff => {
                    reached_cutoff = true;
                    break;
                }
                Some(_) => totals.accumulate(post),
                None => {
                    // Tolerant parsing: a post we cannot date cannot be
                    // placed in a window, so it contributes nothing.
                    warn!(post_id = %post.id, "Skipping post with unparseable timestamp");
                }
            }
        }

        next_url = if reached_cutoff {
            None
        } else {
            page.paging.and_then(|p| p.next)
        };
    }

    Ok(Report::from_totals(totals, followers))
}

/// Engagement reports for the three fixed windows.
#[derive(Debug, Clone, Serialize)]
pub struct WindowReports {
    /// 7-day window.
    pub week: Report,
    /// 30-day window.
    pub month: Report,
    /// 90-day window.
    pub quarter: Report,
}

/// Run the fetcher once per fixed window (7, 30, 90 days), sequentially.
///
/// Each window re-fetches and re-aggregates from scratch; no totals are
/// shared across windows.
///
/// # Errors
///
/// The first failing window aborts the remaining ones.
pub async fn run_window_reports(
    client: &InstagramClient,
    access_token: &str,
    user_id: &str,
    followers: u64,
) -> Result<WindowReports> {
    let [week_days, month_days, quarter_days] = REPORT_WINDOW_DAYS;

    let week = fetch_window_report(client, access_token, user_id, week_days, followers).await?;
    let month = fetch_window_report(client, access_token, user_id, month_days, followers).await?;
    let quarter =
        fetch_window_report(client, access_token, user_id, quarter_days, followers).await?;

    Ok(WindowReports {
        week,
        month,
        quarter,
    })
}
