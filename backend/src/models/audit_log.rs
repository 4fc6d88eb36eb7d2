use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::{types::Json, FromRow};
use utoipa::ToSchema;

/// One immutable change record from the `audit_log` table. Rows are written
/// by the store's mutation procedures, never by the HTTP layer.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct AuditLog {
    pub id: i64,
    pub table_name: String,
    pub action: String,
    pub record_id: i64,
    pub old_values: Option<Json<Value>>,
    pub new_values: Option<Json<Value>>,
    pub changed_by: Option<String>,
    pub changed_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AuditLogResponse {
    pub id: i64,
    pub table_name: String,
    pub action: String,
    pub record_id: i64,
    pub old_values: Option<Value>,
    pub new_values: Option<Value>,
    pub changed_by: Option<String>,
    pub changed_at: DateTime<Utc>,
}

impl From<AuditLog> for AuditLogResponse {
    fn from(log: AuditLog) -> Self {
        Self {
            id: log.id,
            table_name: log.table_name,
            action: log.action,
            record_id: log.record_id,
            old_values: log.old_values.map(|value| value.0),
            new_values: log.new_values.map(|value| value.0),
            changed_by: log.changed_by,
            changed_at: log.changed_at,
        }
    }
}
