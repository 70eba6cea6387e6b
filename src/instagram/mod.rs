//! Typed client for the Instagram OAuth and Graph API endpoints.

pub mod types;

use anyhow::{Context, Result};
use reqwest::Client;
use tracing::debug;

use crate::config::Config;
use self::types::{Identity, LongLivedTokenResponse, MediaPage, Profile, TokenResponse};

/// Field set requested from the media-listing endpoint.
const MEDIA_FIELDS: &str =
    "id,timestamp,like_count,comments_count,insights.metric(views,impressions,reach,saved,shares,total_interactions)";

/// Client for the Instagram OAuth and Graph APIs.
///
/// One instance is built at startup and shared across requests; the
/// underlying `reqwest::Client` pools connections and applies the configured
/// timeout to every call.
#[derive(Debug, Clone)]
pub struct InstagramClient {
    client: Client,
    oauth_base: String,
    graph_base: String,
    api_version: String,
    app_id: String,
    app_secret: String,
    redirect_uri: String,
    media_page_size: u32,
}

impl InstagramClient {
    /// Create a new client from the application configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn new(config: &Config) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.request_timeout)
            .user_agent(concat!(
                "instagram-insights-dashboard/",
                env!("CARGO_PKG_VERSION")
            ))
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            oauth_base: config.oauth_base_url.trim_end_matches('/').to_string(),
            graph_base: config.graph_base_url.trim_end_matches('/').to_string(),
            api_version: config.api_version.clone(),
            app_id: config.app_id.clone(),
            app_secret: config.app_secret.clone(),
            redirect_uri: config.redirect_uri.clone(),
            media_page_size: config.media_page_size,
        })
    }

    /// Exchange an authorization code for a short-lived access token.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or a non-JSON response body. A
    /// rejected code yields `access_token: None`, not an error.
    pub async fn exchange_code(&self, code: &str) -> Result<TokenResponse> {
        let url = format!("{}/oauth/access_token", self.oauth_base);
        debug!(code_prefix = %prefix(code), "Exchanging authorization code");

        let response = self
            .client
            .post(&url)
            .form(&[
                ("client_id", self.app_id.as_str()),
                ("client_secret", self.app_secret.as_str()),
                ("grant_type", "authorization_code"),
                ("redirect_uri", self.redirect_uri.as_str()),
                ("code", code),
            ])
            .send()
            .await
            .context("Failed to reach token endpoint")?;

        response
            .json()
            .await
            .context("Failed to parse token exchange response")
    }

    /// Upgrade a short-lived token to a long-lived one.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or a non-JSON response body.
    pub async fn exchange_long_lived(&self, short_token: &str) -> Result<LongLivedTokenResponse> {
        let url = format!("{}/access_token", self.graph_base);

        let response = self
            .client
            .get(&url)
            .query(&[
                ("grant_type", "ig_exchange_token"),
                ("client_secret", self.app_secret.as_str()),
                ("access_token", short_token),
            ])
            .send()
            .await
            .context("Failed to reach long-lived token endpoint")?;

        response
            .json()
            .await
            .context("Failed to parse long-lived token response")
    }

    /// Resolve an access token to the platform and user identity.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or a non-JSON response body.
    pub async fn fetch_identity(&self, access_token: &str) -> Result<Identity> {
        let url = format!("{}/{}/me", self.graph_base, self.api_version);

        let response = self
            .client
            .get(&url)
            .query(&[
                ("fields", "id,user_id,username,name"),
                ("access_token", access_token),
            ])
            .send()
            .await
            .context("Failed to fetch identity")?;

        response
            .json()
            .await
            .context("Failed to parse identity response")
    }

    /// Fetch professional account data for a user.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or a non-JSON response body.
    pub async fn fetch_profile(&self, access_token: &str, user_id: &str) -> Result<Profile> {
        let url = format!("{}/{}/{}", self.graph_base, self.api_version, user_id);

        let response = self
            .client
            .get(&url)
            .query(&[
                (
                    "fields",
                    "account_type,profile_picture_url,followers_count,follows_count,media_count",
                ),
                ("access_token", access_token),
            ])
            .send()
            .await
            .context("Failed to fetch profile")?;

        response
            .json()
            .await
            .context("Failed to parse profile response")
    }

    /// Build the first-page URL for the media-listing endpoint.
    ///
    /// Follow-up pages come from the provider's `paging.next` cursor, which
    /// is already a fully-qualified URL.
    #[must_use]
    pub fn media_url(&self, access_token: &str, user_id: &str) -> String {
        format!(
            "{}/{}/{}/media?fields={}&limit={}&access_token={}",
            self.graph_base,
            self.api_version,
            user_id,
            MEDIA_FIELDS,
            self.media_page_size,
            access_token
        )
    }

    /// Fetch one page of the media listing from a fully-qualified URL.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or a non-JSON response body.
    /// Provider-side errors arrive as a page without `data`, which callers
    /// treat as end-of-data.
    pub async fn fetch_media_page(&self, url: &str) -> Result<MediaPage> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .context("Failed to fetch media page")?;

        response
            .json()
            .await
            .context("Failed to parse media page response")
    }

    /// Pre-built refresh-token URL handed to the companion app.
    ///
    /// The companion app calls this URL itself to extend token validity, so
    /// the token has to be embedded in the query string.
    #[must_use]
    pub fn refresh_url(&self, access_token: &str) -> String {
        format!(
            "{}/refresh_access_token?grant_type=ig_refresh_token&access_token={}",
            self.graph_base, access_token
        )
    }
}

/// First characters of a token or code, safe to log.
fn prefix(secret: &str) -> &str {
    let end = secret
        .char_indices()
        .nth(15)
        .map_or(secret.len(), |(i, _)| i);
    &secret[..end]
}
