use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::{
    error::AppError,
    models::product::{ProductPayload, ProductResponse},
    state::AppState,
};

/// Optional actor attribution for product mutations, recorded by the store
/// in the audit trail.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
#[serde(rename_all = "camelCase")]
pub struct ChangedByQuery {
    pub changed_by: Option<String>,
}

pub async fn list_products(
    State(state): State<AppState>,
) -> Result<Json<Vec<ProductResponse>>, AppError> {
    let products = state.store.list_products().await?;
    Ok(Json(
        products
            .into_iter()
            .map(ProductResponse::from)
            .collect::<Vec<_>>(),
    ))
}

pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<ProductResponse>, AppError> {
    let product = state
        .store
        .get_product(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Product not found".to_string()))?;
    Ok(Json(ProductResponse::from(product)))
}

pub async fn create_product(
    State(state): State<AppState>,
    Query(query): Query<ChangedByQuery>,
    Json(payload): Json<ProductPayload>,
) -> Result<Response, AppError> {
    let id = state
        .store
        .insert_product(&payload, query.changed_by)
        .await?;

    let location = format!("/products/{}", id);
    let body = Json(ProductResponse::from_payload(id, payload));
    Ok((StatusCode::CREATED, [(header::LOCATION, location)], body).into_response())
}

/// Replaces an existing product. The existence pre-check avoids reporting
/// success for ids that have no matching row; it is not atomic with the
/// subsequent write.
pub async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Query(query): Query<ChangedByQuery>,
    Json(payload): Json<ProductPayload>,
) -> Result<StatusCode, AppError> {
    if !state.store.product_exists(id).await? {
        return Err(AppError::NotFound("Product not found".to_string()));
    }

    state
        .store
        .update_product(id, &payload, query.changed_by)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Query(query): Query<ChangedByQuery>,
) -> Result<StatusCode, AppError> {
    if !state.store.product_exists(id).await? {
        return Err(AppError::NotFound("Product not found".to_string()));
    }

    state
        .store
        .delete_product(id, query.changed_by)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}
