use axum::extract::State;

use crate::{error::AppError, state::AppState};

/// Liveness probe. Verifies database connectivity only; schema and data
/// integrity are out of scope.
pub async fn health_check(State(state): State<AppState>) -> Result<&'static str, AppError> {
    state.store.ping().await?;
    Ok("Database connection is healthy")
}
