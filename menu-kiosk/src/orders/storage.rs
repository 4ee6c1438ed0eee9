//! redb-based local storage for the customer's cart
//!
//! # Tables
//!
//! | Table | Key | Value | Purpose |
//! |-------|-----|-------|---------|
//! | `local_storage` | slot name | raw bytes | Named slots, one value each |
//!
//! The cart lives in the `cart` slot as a JSON array of `MenuItem` (the raw
//! cart sequence, duplicates included). A missing slot means an empty cart.
//! Every write replaces the whole slot.
//!
//! # Durability
//!
//! redb commits with `Durability::Immediate`, so a slot is persistent as soon
//! as `commit()` returns.

use redb::{Database, ReadableDatabase, TableDefinition};
use shared::models::MenuItem;
use std::path::Path;
use std::sync::Arc;
use thiserror::Error;

/// Table for named slots: key = slot name, value = raw bytes
const LOCAL_STORAGE_TABLE: TableDefinition<&str, &[u8]> = TableDefinition::new("local_storage");

/// Slot holding the serialized cart sequence
pub const CART_SLOT: &str = "cart";

/// Storage errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Database error: {0}")]
    Database(#[from] redb::DatabaseError),

    #[error("Transaction error: {0}")]
    Transaction(#[from] redb::TransactionError),

    #[error("Table error: {0}")]
    Table(#[from] redb::TableError),

    #[error("Storage error: {0}")]
    Storage(#[from] redb::StorageError),

    #[error("Commit error: {0}")]
    Commit(#[from] redb::CommitError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type StorageResult<T> = Result<T, StorageError>;

/// Cart storage backed by redb
///
/// Cheap to clone; clones share the same database.
#[derive(Clone)]
pub struct CartStorage {
    db: Arc<Database>,
}

impl CartStorage {
    /// Open or create the database at the given path
    pub fn open(path: impl AsRef<Path>) -> StorageResult<Self> {
        let db = Database::create(path)?;
        Self::init(db)
    }

    /// Open an in-memory database (for testing)
    pub fn open_in_memory() -> StorageResult<Self> {
        let db = Database::builder().create_with_backend(redb::backends::InMemoryBackend::new())?;
        Self::init(db)
    }

    fn init(db: Database) -> StorageResult<Self> {
        let write_txn = db.begin_write()?;
        {
            let _ = write_txn.open_table(LOCAL_STORAGE_TABLE)?;
        }
        write_txn.commit()?;

        Ok(Self { db: Arc::new(db) })
    }

    // ========== Slot Operations ==========

    /// Read a slot
    pub fn get_item(&self, key: &str) -> StorageResult<Option<Vec<u8>>> {
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(LOCAL_STORAGE_TABLE)?;
        Ok(table.get(key)?.map(|guard| guard.value().to_vec()))
    }

    /// Replace a slot's contents
    pub fn set_item(&self, key: &str, value: &[u8]) -> StorageResult<()> {
        let txn = self.db.begin_write()?;
        {
            let mut table = txn.open_table(LOCAL_STORAGE_TABLE)?;
            table.insert(key, value)?;
        }
        txn.commit()?;
        Ok(())
    }

    /// Remove a slot, returning whether it existed
    pub fn remove_item(&self, key: &str) -> StorageResult<bool> {
        let txn = self.db.begin_write()?;
        let existed = {
            let mut table = txn.open_table(LOCAL_STORAGE_TABLE)?;
            let removed = table.remove(key)?;
            removed.is_some()
        };
        txn.commit()?;
        Ok(existed)
    }

    // ========== Cart Slot ==========

    /// Load the persisted cart sequence (`None` when the slot is absent)
    pub fn load_cart(&self) -> StorageResult<Option<Vec<MenuItem>>> {
        match self.get_item(CART_SLOT)? {
            Some(bytes) => Ok(Some(serde_json::from_slice(&bytes)?)),
            None => Ok(None),
        }
    }

    /// Persist the full cart sequence
    pub fn save_cart(&self, entries: &[MenuItem]) -> StorageResult<()> {
        let value = serde_json::to_vec(entries)?;
        self.set_item(CART_SLOT, &value)
    }

    /// Erase the cart slot
    pub fn erase_cart(&self) -> StorageResult<bool> {
        self.remove_item(CART_SLOT)
    }
}
