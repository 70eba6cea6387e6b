//! Authorized dashboard page: profile header, engagement metrics, raw
//! totals, and the CoShot export link.

use maud::{html, Markup};

use crate::components::{BaseLayout, MetricCard, TotalsTable};
use crate::insights::WindowReports;
use crate::instagram::types::{Identity, Profile};

/// Everything the dashboard page needs, assembled by the callback flow.
#[derive(Debug, Clone)]
pub struct DashboardData {
    pub identity: Identity,
    pub profile: Profile,
    pub reports: WindowReports,
    /// `coshot://callback` deep link. Rendered as an href only.
    pub deep_link: String,
}

impl DashboardData {
    fn display_name(&self) -> &str {
        self.identity.name.as_deref().unwrap_or("Instagram User")
    }

    fn username(&self) -> &str {
        self.identity.username.as_deref().unwrap_or("unknown")
    }
}

/// Render the full dashboard page.
#[must_use]
pub fn render_dashboard(data: &DashboardData) -> Markup {
    let content = html! {
        (render_profile_header(data))
        hr;
        section {
            h2 { "Engagement Performance" }
            div class="grid" {
                (MetricCard::new("7-Day ER", format!("{}%", data.reports.week.engagement_rate))
                    .with_delta(format!("{} posts", data.reports.week.post_count)))
                (MetricCard::new("30-Day ER", format!("{}%", data.reports.month.engagement_rate))
                    .with_delta(format!("{} posts", data.reports.month.post_count)))
                (MetricCard::new("90-Day ER", format!("{}%", data.reports.quarter.engagement_rate))
                    .with_delta(format!("{} posts", data.reports.quarter.post_count)))
            }
        }
        hr;
        section {
            h2 { "Raw Data" }
            div class="grid" {
                div {
                    h3 { "30-Day Totals" }
                    (TotalsTable::new(&data.reports.month.totals))
                }
                div {
                    h3 { "90-Day Totals" }
                    (TotalsTable::new(&data.reports.quarter.totals))
                }
            }
        }
        hr;
        section {
            h2 { "Export to CoShot App" }
            a role="button" class="coshot-link" href=(data.deep_link) {
                "Send to CoShot App"
            }
        }
    };

    BaseLayout::new("Dashboard").render(content)
}

/// Profile header: picture, names, ids, and account counts.
fn render_profile_header(data: &DashboardData) -> Markup {
    let profile = &data.profile;
    html! {
        section class="profile-header" {
            div class="grid" {
                div {
                    @if let Some(pic) = &profile.profile_picture_url {
                        img src=(pic) alt="Profile picture" width="120";
                    } @else {
                        p { "(No Profile Image)" }
                    }
                }
                div {
                    h2 { (data.display_name()) " (@" (data.username()) ")" }
                    p {
                        strong { "App ID: " }
                        code { (data.identity.id.as_deref().unwrap_or("-")) }
                    }
                    p {
                        strong { "IG User ID: " }
                        code { (data.identity.user_id.as_deref().unwrap_or("-")) }
                    }
                    p {
                        strong { "Account Type: " }
                        code { (profile.account_type.as_deref().unwrap_or("-")) }
                    }
                    p { strong { "Followers: " } (profile.followers_count) }
                    p { strong { "Following: " } (profile.follows_count) }
                    p { strong { "Media Count: " } (profile.media_count) }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::insights::{Report, RunningTotals};

    fn test_data() -> DashboardData {
        let totals = RunningTotals {
            likes: 10,
            comments: 5,
            shares: 2,
            saves: 3,
            reach: 900,
            total_interactions: 20,
            post_count: 4,
        };
        let report = Report::from_totals(totals, 100);
        DashboardData {
            identity: Identity {
                id: Some("178414".to_string()),
                user_id: Some("9001".to_string()),
                username: Some("acme_coffee".to_string()),
                name: Some("Acme Coffee".to_string()),
            },
            profile: Profile {
                account_type: Some("BUSINESS".to_string()),
                profile_picture_url: Some("https://cdn.example.com/pic.jpg".to_string()),
                followers_count: 100,
                follows_count: 42,
                media_count: 250,
            },
            reports: WindowReports {
                week: report.clone(),
                month: report.clone(),
                quarter: report,
            },
            deep_link: "coshot://callback?access_token=abc".to_string(),
        }
    }

    #[test]
    fn test_dashboard_profile_header() {
        let html = render_dashboard(&test_data()).into_string();

        assert!(html.contains("Acme Coffee (@acme_coffee)"));
        assert!(html.contains("<code>178414</code>"));
        assert!(html.contains("<code>9001</code>"));
        assert!(html.contains("<code>BUSINESS</code>"));
        assert!(html.contains(r#"<img src="https://cdn.example.com/pic.jpg""#));
    }

    #[test]
    fn test_dashboard_metric_cards() {
        let html = render_dashboard(&test_data()).into_string();

        assert!(html.contains("<header>7-Day ER</header>"));
        assert!(html.contains("<header>30-Day ER</header>"));
        assert!(html.contains("<header>90-Day ER</header>"));
        assert!(html.contains("<strong>20%</strong>"));
        assert!(html.contains("4 posts"));
    }

    #[test]
    fn test_dashboard_raw_tables_and_deep_link() {
        let html = render_dashboard(&test_data()).into_string();

        assert!(html.contains("<h3>30-Day Totals</h3>"));
        assert!(html.contains("<h3>90-Day Totals</h3>"));
        assert!(html.contains(r#"href="coshot://callback?access_token=abc""#));
        assert!(html.contains("Send to CoShot App"));
    }

    #[test]
    fn test_dashboard_missing_profile_picture() {
        let mut data = test_data();
        data.profile.profile_picture_url = None;
        let html = render_dashboard(&data).into_string();

        assert!(html.contains("(No Profile Image)"));
        assert!(!html.contains("<img"));
    }

    #[test]
    fn test_dashboard_fallback_identity() {
        let mut data = test_data();
        data.identity.name = None;
        data.identity.username = None;
        let html = render_dashboard(&data).into_string();

        assert!(html.contains("Instagram User (@unknown)"));
    }
}
