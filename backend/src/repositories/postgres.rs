//! PostgreSQL implementation of the catalog store.
//!
//! Every method acquires its own pooled connection and releases it on every
//! exit path when the guard drops. Mutations invoke the store's SQL functions
//! by name; those functions write the audit rows.

use async_trait::async_trait;
use sqlx::PgPool;

use crate::error::AppError;
use crate::models::audit_log::AuditLog;
use crate::models::product::{Product, ProductPayload};
use crate::repositories::store::CatalogStore;

const PRODUCT_COLUMNS: &str = "id, name, description, price, stock_quantity";
const AUDIT_COLUMNS: &str =
    "id, table_name, action, record_id, old_values, new_values, changed_by, changed_at";

#[derive(Debug, Clone)]
pub struct PgCatalogStore {
    pool: PgPool,
}

impl PgCatalogStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CatalogStore for PgCatalogStore {
    async fn list_products(&self) -> Result<Vec<Product>, AppError> {
        let mut conn = self.pool.acquire().await?;
        let query = format!("SELECT {} FROM products", PRODUCT_COLUMNS);
        let rows = sqlx::query_as::<_, Product>(&query)
            .fetch_all(&mut *conn)
            .await?;
        Ok(rows)
    }

    async fn get_product(&self, id: i64) -> Result<Option<Product>, AppError> {
        let mut conn = self.pool.acquire().await?;
        let query = format!("SELECT {} FROM products WHERE id = $1", PRODUCT_COLUMNS);
        let row = sqlx::query_as::<_, Product>(&query)
            .bind(id)
            .fetch_optional(&mut *conn)
            .await?;
        Ok(row)
    }

    async fn insert_product(
        &self,
        product: &ProductPayload,
        changed_by: Option<String>,
    ) -> Result<i64, AppError> {
        let mut conn = self.pool.acquire().await?;
        let id = sqlx::query_scalar::<_, i64>("SELECT insert_product($1, $2, $3, $4, $5)")
            .bind(&product.name)
            .bind(&product.description)
            .bind(product.price)
            .bind(product.stock_quantity)
            .bind(changed_by)
            .fetch_one(&mut *conn)
            .await?;
        Ok(id)
    }

    async fn update_product(
        &self,
        id: i64,
        product: &ProductPayload,
        changed_by: Option<String>,
    ) -> Result<(), AppError> {
        let mut conn = self.pool.acquire().await?;
        sqlx::query("SELECT update_product($1, $2, $3, $4, $5, $6)")
            .bind(id)
            .bind(&product.name)
            .bind(&product.description)
            .bind(product.price)
            .bind(product.stock_quantity)
            .bind(changed_by)
            .execute(&mut *conn)
            .await?;
        Ok(())
    }

    async fn delete_product(&self, id: i64, changed_by: Option<String>) -> Result<(), AppError> {
        let mut conn = self.pool.acquire().await?;
        sqlx::query("SELECT delete_product($1, $2)")
            .bind(id)
            .bind(changed_by)
            .execute(&mut *conn)
            .await?;
        Ok(())
    }

    async fn product_exists(&self, id: i64) -> Result<bool, AppError> {
        let mut conn = self.pool.acquire().await?;
        let exists = sqlx::query_scalar::<_, bool>("SELECT product_exists($1)")
            .bind(id)
            .fetch_one(&mut *conn)
            .await?;
        Ok(exists)
    }

    async fn list_audit_logs(&self) -> Result<Vec<AuditLog>, AppError> {
        let mut conn = self.pool.acquire().await?;
        let query = format!(
            "SELECT {} FROM audit_log ORDER BY changed_at DESC, id DESC",
            AUDIT_COLUMNS
        );
        let rows = sqlx::query_as::<_, AuditLog>(&query)
            .fetch_all(&mut *conn)
            .await?;
        Ok(rows)
    }

    async fn ping(&self) -> Result<(), AppError> {
        let mut conn = self
            .pool
            .acquire()
            .await
            .map_err(|e| AppError::DatabaseUnavailable(format!("Database connection failed: {}", e)))?;
        sqlx::query("SELECT 1")
            .execute(&mut *conn)
            .await
            .map_err(|e| AppError::DatabaseUnavailable(format!("Database connection failed: {}", e)))?;
        Ok(())
    }
}
