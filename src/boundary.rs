//! A render-fault boundary for fragment handlers.
//!
//! There is no general way to catch a fault in the middle of building
//! markup, so the boundary is an explicit result-wrapping render pass: a
//! fragment's render closure returns `Result<Markup, Error>`, and an `Err`
//! swaps a fallback view into the fragment's slot instead of the content.
//! The fallback carries a manual retry control that re-requests the same
//! fragment URL, recovering the subtree without reloading the rest of the
//! page.
//!
//! The boundary only guards the render pass. Fetch failures are handled at
//! each call site before rendering starts: they are logged and the view
//! falls back to its empty state.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use maud::{Markup, html};

use crate::{
    Error, endpoints,
    html::{BUTTON_OUTLINE_STYLE, BUTTON_PRIMARY_STYLE, alert_triangle_icon, base, refresh_icon},
};

/// Wraps a fragment's render pass, swapping in a fallback view on failure.
pub(crate) struct RenderBoundary<'a> {
    /// The fragment URL the fallback's retry control re-requests.
    retry_url: &'a str,
}

impl<'a> RenderBoundary<'a> {
    pub(crate) fn new(retry_url: &'a str) -> Self {
        Self { retry_url }
    }

    /// Run `render`, replacing an `Err` with the default fallback view.
    pub(crate) fn render(self, render: impl FnOnce() -> Result<Markup, Error>) -> Response {
        self.render_with_fallback(render, default_fallback)
    }

    /// Run `render`, replacing an `Err` with a caller-supplied fallback.
    ///
    /// The fallback receives the error and the retry URL for the fragment
    /// that failed to render.
    pub(crate) fn render_with_fallback(
        self,
        render: impl FnOnce() -> Result<Markup, Error>,
        fallback: impl FnOnce(&Error, &str) -> Markup,
    ) -> Response {
        match render() {
            Ok(markup) => markup.into_response(),
            Err(error) => {
                tracing::error!("could not render fragment {}: {error}", self.retry_url);
                fallback(&error, self.retry_url).into_response()
            }
        }
    }
}

/// The raw error text, shown only in development builds.
fn error_details(error: &Error) -> Option<String> {
    #[cfg(debug_assertions)]
    {
        Some(error.to_string())
    }

    #[cfg(not(debug_assertions))]
    {
        let _ = error;
        None
    }
}

/// The retry control: re-requests `retry_url` and swaps the result over the
/// fallback it lives in.
fn try_again_button(retry_url: &str) -> Markup {
    html! {
        button
            hx-get=(retry_url)
            hx-target="closest [data-fallback='true']"
            hx-swap="outerHTML"
            class=(BUTTON_PRIMARY_STYLE)
        {
            (refresh_icon("h-4 w-4 mr-2"))
            "Try Again"
        }
    }
}

/// The default fallback view shown in place of a fragment that failed to render.
pub(crate) fn default_fallback(error: &Error, retry_url: &str) -> Markup {
    html! {
        div
            data-fallback="true"
            class="max-w-md w-full mx-auto my-8 bg-white dark:bg-gray-800 rounded-lg shadow-lg p-6"
        {
            div class="flex items-center justify-center w-12 h-12 mx-auto bg-red-100 rounded-full mb-4"
            {
                (alert_triangle_icon("h-6 w-6 text-red-600"))
            }

            h2 class="text-xl font-semibold text-gray-900 dark:text-white text-center mb-2"
            {
                "Something went wrong"
            }

            p class="text-gray-600 dark:text-gray-400 text-center mb-6"
            {
                "We encountered an unexpected error. Please try again."
            }

            @if let Some(details) = error_details(error) {
                div class="mb-4 p-3 bg-red-50 border border-red-200 rounded-md"
                {
                    p class="text-sm text-red-800 font-mono" { (details) }
                }
            }

            div class="flex space-x-3"
            {
                (try_again_button(retry_url))

                a href=(endpoints::DASHBOARD_VIEW) class=(BUTTON_OUTLINE_STYLE)
                {
                    "Go to Dashboard"
                }
            }
        }
    }
}

/// A compact fallback that fits inside a dashboard panel slot.
pub(crate) fn compact_fallback(error: &Error, retry_url: &str) -> Markup {
    html! {
        div
            data-fallback="true"
            class="bg-white dark:bg-gray-800 border border-red-200 dark:border-red-800
                rounded-lg p-6 text-center"
        {
            div class="flex items-center justify-center mb-3"
            {
                (alert_triangle_icon("h-5 w-5 text-red-600"))
            }

            p class="text-sm text-gray-600 dark:text-gray-400 mb-4"
            {
                "This panel could not be displayed."
            }

            @if let Some(details) = error_details(error) {
                p class="text-xs text-red-800 dark:text-red-300 font-mono mb-4" { (details) }
            }

            (try_again_button(retry_url))
        }
    }
}

/// The full-page fallback, used when an error escapes a page handler
/// rather than a fragment render pass.
pub(crate) fn fallback_page_response(error: &Error) -> Response {
    let content = default_fallback(error, endpoints::DASHBOARD_VIEW);

    (
        StatusCode::INTERNAL_SERVER_ERROR,
        base("Something went wrong", &content),
    )
        .into_response()
}
