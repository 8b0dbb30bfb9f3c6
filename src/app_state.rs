//! Implements a struct that holds the state shared by the route handlers.

use crate::api::ApiClient;

/// The state of the dashboard server.
///
/// Route handlers pull out the slice of state they need through their own
/// `FromRef` state structs, so this struct only needs to be cheap to clone.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The client for the external finance API that owns all data.
    pub api: ApiClient,
}

impl AppState {
    /// Create a new [AppState] that talks to the finance API at `api_base_url`.
    pub fn new(api_base_url: &str) -> Self {
        Self {
            api: ApiClient::new(api_base_url),
        }
    }
}
