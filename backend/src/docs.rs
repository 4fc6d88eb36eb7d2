#![allow(dead_code)] // OpenAPI doc stubs are only referenced by utoipa macros.

use crate::{
    error::ErrorResponse,
    handlers::products::ChangedByQuery,
    models::{
        audit_log::AuditLogResponse,
        product::{ProductPayload, ProductResponse},
    },
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        list_products_doc,
        get_product_doc,
        create_product_doc,
        update_product_doc,
        delete_product_doc,
        list_audit_logs_doc,
        health_doc
    ),
    components(schemas(ProductPayload, ProductResponse, AuditLogResponse, ErrorResponse)),
    tags(
        (name = "Products", description = "Product catalog CRUD"),
        (name = "Audit", description = "Audit trail of product changes"),
        (name = "Health", description = "Database connectivity probe")
    )
)]
pub struct ApiDoc;

#[utoipa::path(
    get,
    path = "/products",
    responses(
        (status = 200, description = "All products", body = [ProductResponse]),
        (status = 500, description = "Store unreachable", body = ErrorResponse)
    ),
    tag = "Products"
)]
fn list_products_doc() {}

#[utoipa::path(
    get,
    path = "/products/{id}",
    params(("id" = i64, Path, description = "Product id")),
    responses(
        (status = 200, description = "The product", body = ProductResponse),
        (status = 404, description = "No matching product", body = ErrorResponse)
    ),
    tag = "Products"
)]
fn get_product_doc() {}

#[utoipa::path(
    post,
    path = "/products",
    request_body = ProductPayload,
    params(ChangedByQuery),
    responses(
        (status = 201, description = "Created; Location points at the new product", body = ProductResponse),
        (status = 500, description = "Store unreachable", body = ErrorResponse)
    ),
    tag = "Products"
)]
fn create_product_doc() {}

#[utoipa::path(
    put,
    path = "/products/{id}",
    request_body = ProductPayload,
    params(("id" = i64, Path, description = "Product id"), ChangedByQuery),
    responses(
        (status = 204, description = "Updated"),
        (status = 404, description = "No matching product", body = ErrorResponse)
    ),
    tag = "Products"
)]
fn update_product_doc() {}

#[utoipa::path(
    delete,
    path = "/products/{id}",
    params(("id" = i64, Path, description = "Product id"), ChangedByQuery),
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, description = "No matching product", body = ErrorResponse)
    ),
    tag = "Products"
)]
fn delete_product_doc() {}

#[utoipa::path(
    get,
    path = "/products/audit",
    responses(
        (status = 200, description = "All audit rows, most recent first", body = [AuditLogResponse]),
        (status = 500, description = "Store unreachable", body = ErrorResponse)
    ),
    tag = "Audit"
)]
fn list_audit_logs_doc() {}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Database connection is healthy", body = String),
        (status = 500, description = "Connection failed; message describes the failure", body = ErrorResponse)
    ),
    tag = "Health"
)]
fn health_doc() {}
