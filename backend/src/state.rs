use std::sync::Arc;

use crate::{config::Config, repositories::CatalogStore};

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn CatalogStore>,
    pub config: Config,
}

impl AppState {
    pub fn new(store: Arc<dyn CatalogStore>, config: Config) -> Self {
        Self { store, config }
    }
}
