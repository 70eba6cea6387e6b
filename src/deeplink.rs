//! Deep link construction for the CoShot companion app.

/// URI scheme and host the CoShot app registers for.
const COSHOT_CALLBACK: &str = "coshot://callback";

/// Build the `coshot://callback` deep link carrying the session tokens.
///
/// Each query value is percent-encoded. `refresh_url` is the pre-built
/// refresh endpoint from [`crate::instagram::InstagramClient::refresh_url`];
/// it embeds the access token in its own query string because the companion
/// app calls it verbatim. The assembled link is sensitive and must never be
/// logged.
#[must_use]
pub fn build_deep_link(access_token: &str, auth_token: &str, refresh_url: &str) -> String {
    format!(
        "{}?access_token={}&auth_token={}&refresh_url={}",
        COSHOT_CALLBACK,
        urlencoding::encode(access_token),
        urlencoding::encode(auth_token),
        urlencoding::encode(refresh_url)
    )
}
