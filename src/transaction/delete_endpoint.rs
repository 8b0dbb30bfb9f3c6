//! The endpoint that forwards a transaction delete to the finance API.

use axum::{
    extract::{FromRef, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::{
    AppState, Error,
    api::{ApiClient, TransactionId},
};

/// The state needed to delete a transaction.
#[derive(Debug, Clone)]
pub struct DeleteTransactionState {
    /// The client for the finance API.
    pub api: ApiClient,
}

impl FromRef<AppState> for DeleteTransactionState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            api: state.api.clone(),
        }
    }
}

/// A route handler for deleting a transaction.
///
/// Responds 200 with an empty body once the API confirms the delete, which
/// is what lets the client remove the confirmed row. On failure the row
/// must stay: the error is logged and the response carries an error status
/// with no body, so nothing is swapped and no message is shown.
pub async fn delete_transaction_endpoint(
    State(state): State<DeleteTransactionState>,
    Path(transaction_id): Path<TransactionId>,
) -> Response {
    match state.api.delete_transaction(transaction_id).await {
        Ok(()) => StatusCode::OK.into_response(),
        Err(Error::DeleteMissingTransaction) => {
            tracing::error!("Could not delete transaction {transaction_id}: not found");
            StatusCode::NOT_FOUND.into_response()
        }
        Err(error) => {
            tracing::error!("Could not delete transaction {transaction_id}: {error}");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
