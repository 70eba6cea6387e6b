use anyhow::{Context, Result};
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::routing::get;
use axum::Router;
use maud::Markup;
use serde::Deserialize;
use tracing::{error, info, warn};

use super::pages;
use super::AppState;
use crate::deeplink::build_deep_link;
use crate::insights::run_window_reports;

/// Create the router with all routes.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(home))
        .route("/redirect", get(oauth_redirect))
        .route("/healthz", get(health))
}

#[derive(Debug, Deserialize)]
pub struct CallbackParams {
    code: Option<String>,
}

/// Landing page. The original single-page app re-entered the same URL after
/// authorization, so a `code` query parameter runs the callback flow here
/// too.
async fn home(State(state): State<AppState>, Query(params): Query<CallbackParams>) -> Response {
    match params.code {
        Some(code) => run_callback(&state, &code).await,
        None => Html(pages::render_home(&state.config.embed_url).into_string()).into_response(),
    }
}

/// Registered OAuth redirect endpoint.
async fn oauth_redirect(
    State(state): State<AppState>,
    Query(params): Query<CallbackParams>,
) -> Response {
    match params.code {
        Some(code) => run_callback(&state, &code).await,
        None => (StatusCode::BAD_REQUEST, "Missing authorization code").into_response(),
    }
}

async fn health() -> &'static str {
    "OK"
}

// ========== Callback flow ==========

/// Outcome of the authorized flow that still renders a page.
enum FlowOutcome {
    Dashboard(Markup),
    /// Token exchange returned no access token. The only user-visible
    /// error message; everything else propagates as a transport failure.
    TokenExchangeFailed,
}

async fn run_callback(state: &AppState, raw_code: &str) -> Response {
    match authorized_flow(state, raw_code).await {
        Ok(FlowOutcome::Dashboard(markup)) => Html(markup.into_string()).into_response(),
        Ok(FlowOutcome::TokenExchangeFailed) => {
            Html(pages::render_token_error().into_string()).into_response()
        }
        Err(e) => {
            error!("Authorized flow failed: {e:#}");
            (
                StatusCode::BAD_GATEWAY,
                Html(pages::render_flow_error().into_string()),
            )
                .into_response()
        }
    }
}

/// Run the full authorized session: token exchange, profile fetch, window
/// reports, deep link, dashboard.
///
/// # Errors
///
/// Transport failures anywhere in the chain propagate and abort the flow;
/// no partial dashboard is rendered.
async fn authorized_flow(state: &AppState, raw_code: &str) -> Result<FlowOutcome> {
    // Instagram appends a `#_` fragment marker to the code on some paths.
    let code = raw_code.split("#_").next().unwrap_or(raw_code);
    info!("Authorization code received");

    let token_res = state.instagram.exchange_code(code).await?;
    let Some(short_token) = token_res.access_token else {
        warn!("Token exchange response had no access_token");
        return Ok(FlowOutcome::TokenExchangeFailed);
    };

    // Upgrade to a long-lived token; if the upgrade response lacks one,
    // degrade to the short-lived token rather than halting.
    let long_res = state.instagram.exchange_long_lived(&short_token).await?;
    let access_token = long_res.access_token.unwrap_or_else(|| {
        warn!("Long-lived exchange returned no token, using short-lived token");
        short_token.clone()
    });

    let identity = state.instagram.fetch_identity(&access_token).await?;
    let user_id = identity
        .user_id
        .clone()
        .context("Identity response missing user_id")?;

    let profile = state.instagram.fetch_profile(&access_token, &user_id).await?;

    info!(
        username = identity.username.as_deref().unwrap_or("unknown"),
        user_id = %user_id,
        followers = profile.followers_count,
        media = profile.media_count,
        "User connected"
    );

    let reports = run_window_reports(
        &state.instagram,
        &access_token,
        &user_id,
        profile.followers_count,
    )
    .await?;

    let refresh_url = state.instagram.refresh_url(&access_token);
    let deep_link = build_deep_link(&access_token, &short_token, &refresh_url);

    let data = pages::DashboardData {
        identity,
        profile,
        reports,
        deep_link,
    };

    Ok(FlowOutcome::Dashboard(pages::render_dashboard(&data)))
}
