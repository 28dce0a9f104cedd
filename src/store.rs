use std::collections::HashMap;
use std::sync::RwLock;

use anyhow::{Result, anyhow};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An employee record as stored. The identity is not a field: storage files
/// every record under a UUID of its own choosing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Employee {
    pub name: String,
    pub role: String,
}

/// An order record as stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Order {
    pub description: String,
    pub status: OrderStatus,
}

/// Fulfilment state of an order. No endpoint drives the cancellation
/// transition; the variant completes the enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    InProgress,
    Completed,
    Cancelled,
}

/// Generic persistence capability backing one record type.
///
/// The four operations are all the resource handlers need: save, find by
/// id, find all, delete by id. Identities are minted inside `save`, never
/// by callers; `Some(id)` is passed only to overwrite a row the caller has
/// already looked up.
pub trait Repository<T>: Send + Sync {
    /// Persist `record`, returning the identity it is filed under. With
    /// `id: None` the record is inserted under a freshly minted identity;
    /// with `Some(id)` it replaces whatever is stored under `id`.
    fn save(&self, id: Option<Uuid>, record: T) -> Result<Uuid>;

    /// Look up the record stored under `id`.
    fn find_by_id(&self, id: Uuid) -> Result<Option<T>>;

    /// Every stored record with its identity, in storage iteration order.
    fn find_all(&self) -> Result<Vec<(Uuid, T)>>;

    /// Remove the record stored under `id`. Removing an absent identity is
    /// a no-op, not an error.
    fn delete_by_id(&self, id: Uuid) -> Result<()>;
}

/// In-memory storage backend: one keyed row table per repository.
pub struct InMemoryRepository<T> {
    rows: RwLock<HashMap<Uuid, T>>,
}

impl<T> InMemoryRepository<T> {
    pub fn new() -> Self {
        Self {
            rows: RwLock::new(HashMap::new()),
        }
    }
}

impl<T: Clone + Send + Sync> Repository<T> for InMemoryRepository<T> {
    fn save(&self, id: Option<Uuid>, record: T) -> Result<Uuid> {
        let id = id.unwrap_or_else(Uuid::new_v4);
        let mut rows = self
            .rows
            .write()
            .map_err(|_| anyhow!("row table lock poisoned"))?;
        rows.insert(id, record);
        Ok(id)
    }

    fn find_by_id(&self, id: Uuid) -> Result<Option<T>> {
        let rows = self
            .rows
            .read()
            .map_err(|_| anyhow!("row table lock poisoned"))?;
        Ok(rows.get(&id).cloned())
    }

    fn find_all(&self) -> Result<Vec<(Uuid, T)>> {
        let rows = self
            .rows
            .read()
            .map_err(|_| anyhow!("row table lock poisoned"))?;
        Ok(rows
            .iter()
            .map(|(id, record)| (*id, record.clone()))
            .collect())
    }

    fn delete_by_id(&self, id: Uuid) -> Result<()> {
        let mut rows = self
            .rows
            .write()
            .map_err(|_| anyhow!("row table lock poisoned"))?;
        rows.remove(&id);
        Ok(())
    }
}
