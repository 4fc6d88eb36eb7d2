#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use rust_decimal::Decimal;
use serde_json::json;
use sqlx::types::Json;

use catalog_backend::{
    config::Config,
    error::AppError,
    models::{
        audit_log::AuditLog,
        product::{Product, ProductPayload},
    },
    repositories::CatalogStore,
    state::AppState,
};

/// In-memory stand-in for the PostgreSQL store. Mutations append audit rows
/// the way the database procedures do, so handler tests can observe the
/// store-side audit side effects without a live database.
pub struct StubStore {
    healthy: bool,
    inner: Mutex<Inner>,
}

struct Inner {
    next_product_id: i64,
    next_audit_id: i64,
    base_time: DateTime<Utc>,
    products: Vec<Product>,
    audit: Vec<AuditLog>,
}

impl StubStore {
    pub fn new() -> Self {
        Self {
            healthy: true,
            inner: Mutex::new(Inner {
                next_product_id: 1,
                next_audit_id: 1,
                base_time: Utc::now(),
                products: Vec::new(),
                audit: Vec::new(),
            }),
        }
    }

    /// A store whose connectivity probe always fails.
    pub fn unreachable() -> Self {
        let mut store = Self::new();
        store.healthy = false;
        store
    }

    /// Audit rows in insertion order, for asserting on store side effects.
    pub fn audit_rows(&self) -> Vec<AuditLog> {
        self.inner.lock().expect("lock stub store").audit.clone()
    }

    fn snapshot(product: &Product) -> serde_json::Value {
        json!({
            "id": product.id,
            "name": product.name,
            "description": product.description,
            "price": product.price.to_string(),
            "stock_quantity": product.stock_quantity,
        })
    }

    fn record(
        inner: &mut Inner,
        action: &str,
        record_id: i64,
        old_values: Option<serde_json::Value>,
        new_values: Option<serde_json::Value>,
        changed_by: Option<String>,
    ) {
        let id = inner.next_audit_id;
        inner.next_audit_id += 1;
        inner.audit.push(AuditLog {
            id,
            table_name: "products".to_string(),
            action: action.to_string(),
            record_id,
            old_values: old_values.map(Json),
            new_values: new_values.map(Json),
            changed_by,
            changed_at: inner.base_time + Duration::seconds(id),
        });
    }
}

#[async_trait]
impl CatalogStore for StubStore {
    async fn list_products(&self) -> Result<Vec<Product>, AppError> {
        Ok(self.inner.lock().expect("lock stub store").products.clone())
    }

    async fn get_product(&self, id: i64) -> Result<Option<Product>, AppError> {
        Ok(self
            .inner
            .lock()
            .expect("lock stub store")
            .products
            .iter()
            .find(|product| product.id == id)
            .cloned())
    }

    async fn insert_product(
        &self,
        product: &ProductPayload,
        changed_by: Option<String>,
    ) -> Result<i64, AppError> {
        let mut inner = self.inner.lock().expect("lock stub store");
        let id = inner.next_product_id;
        inner.next_product_id += 1;

        let row = Product {
            id,
            name: product.name.clone(),
            description: product.description.clone(),
            price: product.price,
            stock_quantity: product.stock_quantity,
        };
        let new_values = Self::snapshot(&row);
        inner.products.push(row);
        Self::record(&mut inner, "INSERT", id, None, Some(new_values), changed_by);
        Ok(id)
    }

    async fn update_product(
        &self,
        id: i64,
        product: &ProductPayload,
        changed_by: Option<String>,
    ) -> Result<(), AppError> {
        let mut inner = self.inner.lock().expect("lock stub store");
        let Some(pos) = inner.products.iter().position(|p| p.id == id) else {
            // The database procedure is a no-op for a missing row.
            return Ok(());
        };

        let old_values = Self::snapshot(&inner.products[pos]);
        inner.products[pos].name = product.name.clone();
        inner.products[pos].description = product.description.clone();
        inner.products[pos].price = product.price;
        inner.products[pos].stock_quantity = product.stock_quantity;
        let new_values = Self::snapshot(&inner.products[pos]);
        Self::record(
            &mut inner,
            "UPDATE",
            id,
            Some(old_values),
            Some(new_values),
            changed_by,
        );
        Ok(())
    }

    async fn delete_product(&self, id: i64, changed_by: Option<String>) -> Result<(), AppError> {
        let mut inner = self.inner.lock().expect("lock stub store");
        let Some(pos) = inner.products.iter().position(|p| p.id == id) else {
            return Ok(());
        };

        let removed = inner.products.remove(pos);
        let old_values = Self::snapshot(&removed);
        Self::record(&mut inner, "DELETE", id, Some(old_values), None, changed_by);
        Ok(())
    }

    async fn product_exists(&self, id: i64) -> Result<bool, AppError> {
        Ok(self
            .inner
            .lock()
            .expect("lock stub store")
            .products
            .iter()
            .any(|product| product.id == id))
    }

    async fn list_audit_logs(&self) -> Result<Vec<AuditLog>, AppError> {
        let mut rows = self.inner.lock().expect("lock stub store").audit.clone();
        rows.sort_by(|a, b| b.changed_at.cmp(&a.changed_at).then(b.id.cmp(&a.id)));
        Ok(rows)
    }

    async fn ping(&self) -> Result<(), AppError> {
        if self.healthy {
            Ok(())
        } else {
            Err(AppError::DatabaseUnavailable(
                "Database connection failed: connection refused".to_string(),
            ))
        }
    }
}

pub fn test_config() -> Config {
    Config {
        database_url: "postgres://localhost:5432/catalog_test".to_string(),
        port: 0,
    }
}

pub fn state_with(store: Arc<StubStore>) -> AppState {
    AppState::new(store, test_config())
}

pub fn widget_payload() -> ProductPayload {
    ProductPayload {
        name: "Widget".to_string(),
        description: None,
        price: Decimal::new(999, 2),
        stock_quantity: 10,
    }
}
