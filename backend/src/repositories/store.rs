//! Store capability trait for dependency injection and testing.
//!
//! The backing database exposes a set of named, parameterized operations;
//! this trait mirrors that surface with one method per operation. Handlers
//! depend on the trait, so tests can substitute the store.
//! Use `MockCatalogStore` in tests to mock the behavior.

use async_trait::async_trait;

use crate::error::AppError;
use crate::models::audit_log::AuditLog;
use crate::models::product::{Product, ProductPayload};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CatalogStore: Send + Sync {
    /// List all products in store order.
    async fn list_products(&self) -> Result<Vec<Product>, AppError>;

    /// Fetch a single product, or `None` if the id has no matching row.
    async fn get_product(&self, id: i64) -> Result<Option<Product>, AppError>;

    /// Insert a product and return the store-assigned id. The store records
    /// the audit row; `changed_by` is the optional actor attribution.
    async fn insert_product(
        &self,
        product: &ProductPayload,
        changed_by: Option<String>,
    ) -> Result<i64, AppError>;

    /// Replace an existing product's fields.
    async fn update_product(
        &self,
        id: i64,
        product: &ProductPayload,
        changed_by: Option<String>,
    ) -> Result<(), AppError>;

    /// Delete a product by id.
    async fn delete_product(&self, id: i64, changed_by: Option<String>) -> Result<(), AppError>;

    /// Idempotent existence predicate keyed on the product id.
    async fn product_exists(&self, id: i64) -> Result<bool, AppError>;

    /// List all audit rows, most recent change first.
    async fn list_audit_logs(&self) -> Result<Vec<AuditLog>, AppError>;

    /// Connectivity probe: acquire a connection and run a trivial statement.
    async fn ping(&self) -> Result<(), AppError>;
}
