use std::sync::Arc;

use crate::config::Config;
use crate::store::{Employee, InMemoryRepository, Order, Repository};

/// Shared application state: one storage handle per record type, each owned
/// exclusively by its resource's handlers.
#[derive(Clone)]
pub struct AppState {
    pub employees: Arc<dyn Repository<Employee>>,
    pub orders: Arc<dyn Repository<Order>>,
    pub config: Arc<Config>,
}

impl AppState {
    /// Fresh state over empty in-memory repositories.
    pub fn new(config: Config) -> Self {
        Self {
            employees: Arc::new(InMemoryRepository::<Employee>::new()),
            orders: Arc::new(InMemoryRepository::<Order>::new()),
            config: Arc::new(config),
        }
    }
}
