//! Finboard is a web dashboard for keeping an eye on your personal finances.
//!
//! It renders transactions, budgets, and spending summaries as HTML pages.
//! All data lives in a remote finance API: this app fetches records on
//! demand, renders them, and forwards the one supported mutation (deleting
//! a transaction) back to the API. There is no database and no
//! authentication in this codebase.

#![warn(missing_docs)]

use std::{net::SocketAddr, time::Duration};

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_server::Handle;
use tokio::signal;

mod api;
mod app_state;
mod boundary;
mod dashboard;
mod endpoints;
mod html;
mod logging;
mod navigation;
mod not_found;
mod routing;
#[cfg(test)]
mod test_utils;
mod transaction;

pub use api::ApiClient;
pub use app_state::AppState;
pub use logging::logging_middleware;
pub use routing::build_router;

use crate::{boundary::fallback_page_response, not_found::get_404_not_found_response};

/// An async task that waits for either the ctrl+c or terminate signal, whichever comes first, and
/// then signals the server to shut down gracefully.
///
/// `handle` is a handle to an Axum `Server`.
pub async fn graceful_shutdown(handle: Handle<SocketAddr>) {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::debug!("Received ctrl+c signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
        _ = terminate => {
            tracing::debug!("Received terminate signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
    }
}

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// The finance API could not be reached at all.
    ///
    /// This covers connection failures, DNS errors, and requests that died
    /// before a status code arrived.
    #[error("could not reach the finance API: {0}")]
    ApiUnreachable(String),

    /// The finance API answered with a non-success status code.
    #[error("the finance API responded with status {0}")]
    ApiStatus(StatusCode),

    /// The finance API answered with a body that could not be parsed.
    ///
    /// The error string should only be logged for debugging on the server,
    /// the client is shown the panel's empty state instead.
    #[error("could not parse the finance API response: {0}")]
    InvalidApiResponse(String),

    /// Tried to delete a transaction that the finance API does not know
    /// about, most likely because it was already deleted elsewhere.
    #[error("tried to delete a transaction that does not exist")]
    DeleteMissingTransaction,

    /// The requested resource was not found.
    #[error("the requested resource could not be found")]
    NotFound,

    /// A date could not be formatted for display.
    #[error("could not format date for display: {0}")]
    DateFormat(String),
}

impl From<reqwest::Error> for Error {
    fn from(error: reqwest::Error) -> Self {
        if error.is_decode() {
            Error::InvalidApiResponse(error.to_string())
        } else if let Some(status) = error.status() {
            if status == StatusCode::NOT_FOUND {
                Error::NotFound
            } else {
                Error::ApiStatus(status)
            }
        } else {
            Error::ApiUnreachable(error.to_string())
        }
    }
}

impl From<time::error::Format> for Error {
    fn from(error: time::error::Format) -> Self {
        Error::DateFormat(error.to_string())
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Error::NotFound => get_404_not_found_response(),
            // Any errors that are not handled above are not intended to be
            // shown to the client.
            error => {
                tracing::error!("An unexpected error occurred: {error}");
                fallback_page_response(&error)
            }
        }
    }
}
