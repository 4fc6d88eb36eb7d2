use axum::{extract::State, Json};

use crate::{error::AppError, models::audit_log::AuditLogResponse, state::AppState};

/// Returns the full audit trail, most recent change first. No filtering, no
/// pagination.
pub async fn list_audit_logs(
    State(state): State<AppState>,
) -> Result<Json<Vec<AuditLogResponse>>, AppError> {
    let logs = state.store.list_audit_logs().await?;
    Ok(Json(
        logs.into_iter()
            .map(AuditLogResponse::from)
            .collect::<Vec<_>>(),
    ))
}
