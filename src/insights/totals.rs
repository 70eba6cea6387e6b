use serde::Serialize;

use crate::instagram::types::MediaPost;

/// Running totals accumulated over one report window.
///
/// Created fresh per window, folded post by post, discarded once the
/// window's [`Report`] is produced. Every field is monotonically
/// non-decreasing during a pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RunningTotals {
    pub likes: u64,
    pub comments: u64,
    pub shares: u64,
    pub saves: u64,
    pub reach: u64,
    pub total_interactions: u64,
    pub post_count: u64,
}

impl RunningTotals {
    /// Fold one media post into the totals.
    ///
    /// Absent counters contribute 0. Each named insight metric contributes
    /// the numeric payload of its first value (0 when the value list is
    /// empty); metric names outside the known set are ignored.
    pub fn accumulate(&mut self, post: &MediaPost) {
        self.likes += post.like_count;
        self.comments += post.comments_count;
        self.post_count += 1;

        let Some(insights) = &post.insights else {
            return;
        };
        for metric in &insights.data {
            let value = metric.first_value();
            match metric.name.as_str() {
                "shares" => self.shares += value,
                "saved" => self.saves += value,
                "reach" => self.reach += value,
                "total_interactions" => self.total_interactions += value,
                _ => {}
            }
        }
    }

    /// Engagement numerator: likes + comments + shares + saves.
    ///
    /// Reach and total interactions are collected for the raw-data tables
    /// but excluded from the engagement-rate formula.
    #[must_use]
    pub fn engagement(&self) -> u64 {
        self.likes + self.comments + self.shares + self.saves
    }
}

/// Engagement rate as a percentage of follower count.
///
/// Returns 0.0 when `followers` is 0 regardless of totals. Rounded to two
/// decimals, half away from zero (`f64::round` semantics).
#[must_use]
pub fn engagement_rate(totals: &RunningTotals, followers: u64) -> f64 {
    if followers == 0 {
        return 0.0;
    }
    let rate = totals.engagement() as f64 / followers as f64 * 100.0;
    (rate * 100.0).round() / 100.0
}

/// Aggregated result for one report window.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    /// Percentage, rounded to two decimals.
    pub engagement_rate: f64,
    pub post_count: u64,
    pub totals: RunningTotals,
}

impl Report {
    /// Seal a totals pass into a report against a follower count.
    #[must_use]
    pub fn from_totals(totals: RunningTotals, followers: u64) -> Self {
        Self {
            engagement_rate: engagement_rate(&totals, followers),
            post_count: totals.post_count,
            totals,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post_json(json: &str) -> MediaPost {
        serde_json::from_str(json).expect("valid test post")
    }

    #[test]
    fn test_accumulate_counters_and_insights() {
        let mut totals = RunningTotals::default();
        totals.accumulate(&post_json(
            r#"{
                "id": "1",
                "timestamp": "2024-06-01T00:00:00+0000",
                "like_count": 10,
                "comments_count": 4,
                "insights": {"data": [
                    {"name": "shares", "values": [{"value": 2}]},
                    {"name": "saved", "values": [{"value": 3}]},
                    {"name": "reach", "values": [{"value": 500}]},
                    {"name": "total_interactions", "values": [{"value": 19}]}
                ]}
            }"#,
        ));

        assert_eq!(totals.likes, 10);
        assert_eq!(totals.comments, 4);
        assert_eq!(totals.shares, 2);
        assert_eq!(totals.saves, 3);
        assert_eq!(totals.reach, 500);
        assert_eq!(totals.total_interactions, 19);
        assert_eq!(totals.post_count, 1);
    }

    #[test]
    fn test_accumulate_missing_fields_contribute_zero() {
        let mut totals = RunningTotals::default();
        totals.accumulate(&post_json(r#"{"id": "1"}"#));

        assert_eq!(totals.post_count, 1);
        assert_eq!(
            totals,
            RunningTotals {
                post_count: 1,
                ..RunningTotals::default()
            }
        );
    }

    #[test]
    fn test_accumulate_ignores_unknown_metrics() {
        let mut totals = RunningTotals::default();
        totals.accumulate(&post_json(
            r#"{
                "id": "1",
                "insights": {"data": [
                    {"name": "views", "values": [{"value": 900}]},
                    {"name": "impressions", "values": [{"value": 800}]}
                ]}
            }"#,
        ));

        assert_eq!(totals.engagement(), 0);
        assert_eq!(totals.reach, 0);
        assert_eq!(totals.post_count, 1);
    }

    #[test]
    fn test_accumulate_empty_values_list() {
        let mut totals = RunningTotals::default();
        totals.accumulate(&post_json(
            r#"{
                "id": "1",
                "insights": {"data": [
                    {"name": "total_interactions", "values": []}
                ]}
            }"#,
        ));

        assert_eq!(totals.total_interactions, 0);
        assert_eq!(totals.post_count, 1);
    }

    #[test]
    fn test_engagement_rate_reference_case() {
        let totals = RunningTotals {
            likes: 10,
            comments: 5,
            shares: 2,
            saves: 3,
            ..RunningTotals::default()
        };
        assert!((engagement_rate(&totals, 100) - 20.00).abs() < f64::EPSILON);
    }

    #[test]
    fn test_engagement_rate_zero_followers() {
        let totals = RunningTotals {
            likes: 1000,
            ..RunningTotals::default()
        };
        assert!((engagement_rate(&totals, 0) - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_engagement_rate_excludes_reach_and_interactions() {
        let totals = RunningTotals {
            likes: 10,
            reach: 100_000,
            total_interactions: 50_000,
            ..RunningTotals::default()
        };
        assert!((engagement_rate(&totals, 100) - 10.00).abs() < f64::EPSILON);
    }

    #[test]
    fn test_engagement_rate_rounds_half_away_from_zero() {
        // 5 / 400 * 100 = 1.25; 1 / 16 * 100 = 6.25 -> stays 6.25
        // 1 / 800 * 100 = 0.125 -> rounds up to 0.13 (half away from zero)
        let totals = RunningTotals {
            likes: 1,
            ..RunningTotals::default()
        };
        assert!((engagement_rate(&totals, 800) - 0.13).abs() < f64::EPSILON);
    }

    #[test]
    fn test_engagement_rate_is_pure() {
        let totals = RunningTotals {
            likes: 7,
            comments: 3,
            shares: 1,
            saves: 2,
            ..RunningTotals::default()
        };
        let first = engagement_rate(&totals, 123);
        let second = engagement_rate(&totals, 123);
        assert!((first - second).abs() < f64::EPSILON);
    }

    #[test]
    fn test_report_from_totals_snapshot() {
        let totals = RunningTotals {
            likes: 10,
            comments: 5,
            shares: 2,
            saves: 3,
            post_count: 4,
            ..RunningTotals::default()
        };
        let report = Report::from_totals(totals.clone(), 100);

        assert!((report.engagement_rate - 20.00).abs() < f64::EPSILON);
        assert_eq!(report.post_count, 4);
        assert_eq!(report.totals, totals);
    }
}
