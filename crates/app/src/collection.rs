//! JSON file collections
//!
//! Each resource is kept as a pretty-printed JSON array in its own file. Every
//! mutation reads the whole file, changes it and rewrites it while holding the
//! collection's lock, so concurrent requests within one process never lose
//! writes. Several processes sharing one file are not coordinated.

use std::{
    io::{self, ErrorKind},
    marker::PhantomData,
    path::{Path, PathBuf},
};

use serde::{Serialize, de::DeserializeOwned};
use storefront::{ids::TypedId, prelude::OrderRecord, products::Product};
use thiserror::Error;
use tokio::{fs, sync::Mutex};
use tracing::debug;

/// Errors raised while reading or writing a collection file.
#[derive(Debug, Error)]
pub enum CollectionError {
    #[error("failed to access {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to decode or encode {path}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// A record stored in a [`JsonFileCollection`].
pub trait Record: Clone + Serialize + DeserializeOwned + Send + Sync + 'static {
    /// The record's identifier.
    fn id(&self) -> TypedId<Self>;
}

impl Record for Product {
    fn id(&self) -> TypedId<Self> {
        self.id
    }
}

impl Record for OrderRecord {
    fn id(&self) -> TypedId<Self> {
        self.id
    }
}

#[derive(Debug)]
pub struct JsonFileCollection<T> {
    path: PathBuf,
    lock: Mutex<()>,
    _records: PhantomData<fn() -> T>,
}

impl<T: Record> JsonFileCollection<T> {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
            _records: PhantomData,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// All records, in file order.
    pub async fn list(&self) -> Result<Vec<T>, CollectionError> {
        let _guard = self.lock.lock().await;

        self.read().await
    }

    /// The record with the given id, if any.
    pub async fn get(&self, id: TypedId<T>) -> Result<Option<T>, CollectionError> {
        let _guard = self.lock.lock().await;

        Ok(self.read().await?.into_iter().find(|record| record.id() == id))
    }

    /// Append the record built by `build` from the next free id (one more than
    /// the largest stored id, or 1).
    pub async fn insert_with<F>(&self, build: F) -> Result<T, CollectionError>
    where
        F: FnOnce(TypedId<T>) -> T + Send,
    {
        let _guard = self.lock.lock().await;

        let mut records = self.read().await?;
        let id = TypedId::next_after(records.iter().map(Record::id));
        let record = build(id);

        records.push(record.clone());

        self.write(&records).await?;

        Ok(record)
    }

    /// Replace the record with the given id by `update(record)`.
    ///
    /// Returns `None` without touching the file when the id is absent.
    pub async fn update_with<F>(&self, id: TypedId<T>, update: F) -> Result<Option<T>, CollectionError>
    where
        F: FnOnce(T) -> T + Send,
    {
        let _guard = self.lock.lock().await;

        let mut records = self.read().await?;

        let Some(slot) = records.iter_mut().find(|record| record.id() == id) else {
            return Ok(None);
        };

        let updated = update(slot.clone());

        *slot = updated.clone();

        self.write(&records).await?;

        Ok(Some(updated))
    }

    /// Remove the record with the given id, returning it.
    pub async fn delete(&self, id: TypedId<T>) -> Result<Option<T>, CollectionError> {
        let _guard = self.lock.lock().await;

        let mut records = self.read().await?;

        let Some(position) = records.iter().position(|record| record.id() == id) else {
            return Ok(None);
        };

        let removed = records.remove(position);

        self.write(&records).await?;

        Ok(Some(removed))
    }

    async fn read(&self) -> Result<Vec<T>, CollectionError> {
        let json = match fs::read_to_string(&self.path).await {
            Ok(json) => json,
            Err(error) if error.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(source) => return Err(self.io_error(source)),
        };

        serde_json::from_str(&json).map_err(|source| self.json_error(source))
    }

    async fn write(&self, records: &[T]) -> Result<(), CollectionError> {
        let json = serde_json::to_string_pretty(records).map_err(|source| self.json_error(source))?;

        if let Some(parent) = self.path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .await
                .map_err(|source| self.io_error(source))?;
        }

        fs::write(&self.path, json)
            .await
            .map_err(|source| self.io_error(source))?;

        debug!(path = %self.path.display(), records = records.len(), "collection written");

        Ok(())
    }

    fn io_error(&self, source: io::Error) -> CollectionError {
        CollectionError::Io {
            path: self.path.clone(),
            source,
        }
    }

    fn json_error(&self, source: serde_json::Error) -> CollectionError {
        CollectionError::Json {
            path: self.path.clone(),
            source,
        }
    }
}
