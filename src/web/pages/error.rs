//! Error pages for the callback flow.

use maud::{html, Markup};

use crate::components::BaseLayout;

/// Token exchange failed: the only explicit user-facing error in the flow.
#[must_use]
pub fn render_token_error() -> Markup {
    let content = html! {
        h1 { "Token exchange failed" }
        p {
            "Instagram did not return an access token for the authorization "
            "code. Please check your App ID and App Secret, then authorize "
            "again."
        }
        a role="button" href="/" { "Back to Home" }
    };

    BaseLayout::new("Error").render(content)
}

/// Generic upstream failure page for transport errors during the flow.
#[must_use]
pub fn render_flow_error() -> Markup {
    let content = html! {
        h1 { "Something went wrong" }
        p {
            "An upstream request to Instagram failed before the dashboard "
            "could be built. The attempt was not retried; please authorize "
            "again."
        }
        a role="button" href="/" { "Back to Home" }
    };

    BaseLayout::new("Error").render(content)
}
