//! Landing page rendering using maud templates.

use maud::{html, Markup};

use crate::components::BaseLayout;

/// Render the landing page with the Instagram authorize link.
///
/// `embed_url` is the hosted login/authorize URL from configuration; the
/// OAuth screen itself is Instagram's, we only link to it.
#[must_use]
pub fn render_home(embed_url: &str) -> Markup {
    let content = html! {
        h1 { "Instagram Business Data Automator" }
        p {
            "Welcome! Authorize your Instagram professional account to view "
            "engagement insights across 7, 30, and 90 day windows."
        }
        a role="button" class="authorize-button" href=(embed_url) {
            "Login & Authorize Instagram"
        }
    };

    BaseLayout::new("Home").render(content)
}
