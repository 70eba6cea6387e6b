//! Serde models for Instagram Graph API responses.
//!
//! Parsing is deliberately tolerant: every field the provider may omit
//! deserializes to a default instead of failing, so a malformed post
//! degrades to zero contribution rather than aborting a report.

use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Response from the short-lived token exchange (POST oauth/access_token).
#[derive(Debug, Clone, Deserialize)]
pub struct TokenResponse {
    pub access_token: Option<String>,
    #[serde(default)]
    pub user_id: Option<serde_json::Value>,
}

/// Response from the long-lived token upgrade (GET /access_token).
#[derive(Debug, Clone, Deserialize)]
pub struct LongLivedTokenResponse {
    pub access_token: Option<String>,
    #[serde(default)]
    pub expires_in: Option<u64>,
}

/// Basic identity resolved from an access token (GET /me).
#[derive(Debug, Clone, Deserialize)]
pub struct Identity {
    pub id: Option<String>,
    pub user_id: Option<String>,
    pub username: Option<String>,
    pub name: Option<String>,
}

/// Professional account profile (GET /{user_id}).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Profile {
    pub account_type: Option<String>,
    pub profile_picture_url: Option<String>,
    #[serde(default)]
    pub followers_count: u64,
    #[serde(default)]
    pub follows_count: u64,
    #[serde(default)]
    pub media_count: u64,
}

/// One page of the media-listing endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct MediaPage {
    /// Absent `data` means end-of-data, not an error.
    pub data: Option<Vec<MediaPost>>,
    pub paging: Option<Paging>,
}

/// Opaque cursor-based pagination block.
#[derive(Debug, Clone, Deserialize)]
pub struct Paging {
    /// Fully-qualified URL of the next page, if any.
    pub next: Option<String>,
}

/// A single media post with engagement counters and optional insights.
#[derive(Debug, Clone, Deserialize)]
pub struct MediaPost {
    #[serde(default)]
    pub id: String,
    pub timestamp: Option<String>,
    #[serde(default)]
    pub like_count: u64,
    #[serde(default)]
    pub comments_count: u64,
    pub insights: Option<InsightEnvelope>,
}

impl MediaPost {
    /// Parse the post timestamp.
    ///
    /// The Graph API emits `%Y-%m-%dT%H:%M:%S%z` (offset without a colon,
    /// e.g. `+0000`), which is not strict RFC 3339. Returns `None` when the
    /// timestamp is absent or unparseable.
    #[must_use]
    pub fn parsed_timestamp(&self) -> Option<DateTime<Utc>> {
        let raw = self.timestamp.as_deref()?;
        DateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%z")
            .or_else(|_| DateTime::parse_from_rfc3339(raw))
            .ok()
            .map(|dt| dt.with_timezone(&Utc))
    }
}

/// Wrapper the API puts around per-post insight metrics.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct InsightEnvelope {
    #[serde(default)]
    pub data: Vec<InsightMetric>,
}

/// One named insight metric with timestamped values.
#[derive(Debug, Clone, Deserialize)]
pub struct InsightMetric {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub values: Vec<MetricValue>,
}

impl InsightMetric {
    /// Numeric payload of the first value, or 0 when the list is empty or
    /// the payload is not a number.
    #[must_use]
    pub fn first_value(&self) -> u64 {
        self.values.first().map_or(0, MetricValue::numeric)
    }
}

/// A single timestamped metric value. Only the payload is used.
#[derive(Debug, Clone, Deserialize)]
pub struct MetricValue {
    #[serde(default)]
    pub value: serde_json::Value,
}

impl MetricValue {
    /// Interpret the payload as a non-negative integer, defaulting to 0.
    #[must_use]
    pub fn numeric(&self) -> u64 {
        self.value
            .as_u64()
            .or_else(|| self.value.as_f64().map(|f| f.max(0.0) as u64))
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parsed_timestamp_graph_format() {
        let post: MediaPost =
            serde_json::from_str(r#"{"id": "1", "timestamp": "2024-06-01T12:30:00+0000"}"#)
                .unwrap();
        let ts = post.parsed_timestamp().expect("should parse");
        assert_eq!(ts.to_rfc3339(), "2024-06-01T12:30:00+00:00");
    }

    #[test]
    fn test_parsed_timestamp_rfc3339_fallback() {
        let post: MediaPost =
            serde_json::from_str(r#"{"id": "1", "timestamp": "2024-06-01T12:30:00+00:00"}"#)
                .unwrap();
        assert!(post.parsed_timestamp().is_some());
    }

    #[test]
    fn test_parsed_timestamp_absent_or_garbage() {
        let post: MediaPost = serde_json::from_str(r#"{"id": "1"}"#).unwrap();
        assert!(post.parsed_timestamp().is_none());

        let post: MediaPost =
            serde_json::from_str(r#"{"id": "1", "timestamp": "yesterday"}"#).unwrap();
        assert!(post.parsed_timestamp().is_none());
    }

    #[test]
    fn test_media_post_counters_default_to_zero() {
        let post: MediaPost = serde_json::from_str(r#"{"id": "1"}"#).unwrap();
        assert_eq!(post.like_count, 0);
        assert_eq!(post.comments_count, 0);
        assert!(post.insights.is_none());
    }

    #[test]
    fn test_metric_first_value_empty_list() {
        let metric: InsightMetric =
            serde_json::from_str(r#"{"name": "total_interactions", "values": []}"#).unwrap();
        assert_eq!(metric.first_value(), 0);
    }

    #[test]
    fn test_metric_first_value_uses_first_only() {
        let metric: InsightMetric = serde_json::from_str(
            r#"{"name": "reach", "values": [{"value": 120}, {"value": 999}]}"#,
        )
        .unwrap();
        assert_eq!(metric.first_value(), 120);
    }

    #[test]
    fn test_metric_value_non_numeric_payload() {
        let metric: InsightMetric =
            serde_json::from_str(r#"{"name": "shares", "values": [{"value": "n/a"}]}"#).unwrap();
        assert_eq!(metric.first_value(), 0);
    }

    #[test]
    fn test_media_page_without_data() {
        let page: MediaPage = serde_json::from_str(r#"{"error": {"code": 190}}"#).unwrap();
        assert!(page.data.is_none());
        assert!(page.paging.is_none());
    }

    #[test]
    fn test_profile_defaults() {
        let profile: Profile = serde_json::from_str("{}").unwrap();
        assert_eq!(profile.followers_count, 0);
        assert!(profile.account_type.is_none());
    }
}
