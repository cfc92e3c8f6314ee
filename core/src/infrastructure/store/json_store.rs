use std::{
    path::{Path, PathBuf},
    sync::Arc,
};

use serde::{Serialize, de::DeserializeOwned};
use serde_json::{Map, Value};
use tokio::sync::{RwLock, broadcast};
use tracing::{error, info};

use crate::domain::common::entities::app_errors::CoreError;

pub const PROFILES_KEY: &str = "profiles";
pub const FAMILIES_KEY: &str = "families";
pub const ACTIVE_SELECTION_KEY: &str = "active-selection";
pub const HISTORY_KEY: &str = "history";
pub const FAVORITES_KEY: &str = "favorites";

const EVENT_CAPACITY: usize = 64;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreEventKind {
    Set,
    Removed,
}

/// Emitted after a key has been written (and persisted, for file stores).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreEvent {
    pub key: String,
    pub kind: StoreEventKind,
}

/// Key/value document store over a JSON object, optionally mirrored to a
/// file. Clones share the same data.
#[derive(Debug, Clone)]
pub struct JsonStore {
    inner: Arc<StoreInner>,
}

#[derive(Debug)]
struct StoreInner {
    data: RwLock<Map<String, Value>>,
    path: Option<PathBuf>,
    events: broadcast::Sender<StoreEvent>,
}

impl JsonStore {
    pub fn in_memory() -> Self {
        Self::with_data(Map::new(), None)
    }

    /// Loads `path` when it exists; the file is created on the first write.
    pub async fn open(path: impl Into<PathBuf>) -> Result<Self, CoreError> {
        let path = path.into();

        let data = match tokio::fs::read_to_string(&path).await {
            Ok(contents) if contents.trim().is_empty() => Map::new(),
            Ok(contents) => serde_json::from_str(&contents).map_err(|e| {
                error!("Failed to parse store file {}: {}", path.display(), e);
                CoreError::StorageError(format!("invalid store file {}: {}", path.display(), e))
            })?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Map::new(),
            Err(e) => {
                error!("Failed to read store file {}: {}", path.display(), e);
                return Err(CoreError::StorageError(e.to_string()));
            }
        };

        info!(path = %path.display(), keys = data.len(), "Store opened");
        Ok(Self::with_data(data, Some(path)))
    }

    fn with_data(data: Map<String, Value>, path: Option<PathBuf>) -> Self {
        let (events, _) = broadcast::channel(EVENT_CAPACITY);

        Self {
            inner: Arc::new(StoreInner {
                data: RwLock::new(data),
                path,
                events,
            }),
        }
    }

    pub fn path(&self) -> Option<&Path> {
        self.inner.path.as_deref()
    }

    pub fn subscribe(&self) -> broadcast::Receiver<StoreEvent> {
        self.inner.events.subscribe()
    }

    pub async fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, CoreError> {
        let data = self.inner.data.read().await;

        data.get(key).map(|value| decode(key, value)).transpose()
    }

    pub async fn get_or_default<T: DeserializeOwned + Default>(
        &self,
        key: &str,
    ) -> Result<T, CoreError> {
        Ok(self.get(key).await?.unwrap_or_default())
    }

    pub async fn set<T: Serialize>(&self, key: &str, value: &T) -> Result<(), CoreError> {
        let value = encode(key, value)?;
        let mut data = self.inner.data.write().await;

        self.commit(&mut data, key, Some(value)).await
    }

    /// Read-modify-write of one key under the write lock. Nothing is written
    /// when `f` fails.
    pub async fn update<T, R, F>(&self, key: &str, f: F) -> Result<R, CoreError>
    where
        T: DeserializeOwned + Serialize + Default,
        F: FnOnce(&mut T) -> Result<R, CoreError>,
    {
        let mut data = self.inner.data.write().await;

        let mut current: T = match data.get(key) {
            Some(value) => decode(key, value)?,
            None => T::default(),
        };
        let result = f(&mut current)?;

        let value = encode(key, &current)?;
        self.commit(&mut data, key, Some(value)).await?;
        Ok(result)
    }

    /// Returns whether the key existed.
    pub async fn remove(&self, key: &str) -> Result<bool, CoreError> {
        let mut data = self.inner.data.write().await;
        if !data.contains_key(key) {
            return Ok(false);
        }

        self.commit(&mut data, key, None).await?;
        Ok(true)
    }

    /// Applies the change, persists it and notifies subscribers. The change
    /// is rolled back if persisting fails.
    async fn commit(
        &self,
        data: &mut Map<String, Value>,
        key: &str,
        value: Option<Value>,
    ) -> Result<(), CoreError> {
        let kind = if value.is_some() {
            StoreEventKind::Set
        } else {
            StoreEventKind::Removed
        };

        let previous = match value {
            Some(value) => data.insert(key.to_string(), value),
            None => data.remove(key),
        };

        if let Err(e) = self.persist(data).await {
            match previous {
                Some(previous) => data.insert(key.to_string(), previous),
                None => data.remove(key),
            };
            return Err(e);
        }

        let _ = self.inner.events.send(StoreEvent {
            key: key.to_string(),
            kind,
        });
        Ok(())
    }

    async fn persist(&self, data: &Map<String, Value>) -> Result<(), CoreError> {
        let Some(path) = &self.inner.path else {
            return Ok(());
        };

        let contents = serde_json::to_string_pretty(data).map_err(|e| {
            error!("Failed to serialize store: {}", e);
            CoreError::StorageError(e.to_string())
        })?;

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await.map_err(|e| {
                error!("Failed to create store directory {}: {}", parent.display(), e);
                CoreError::StorageError(e.to_string())
            })?;
        }

        let mut tmp_name = path.as_os_str().to_owned();
        tmp_name.push(".tmp");
        let tmp_path = PathBuf::from(tmp_name);

        tokio::fs::write(&tmp_path, contents).await.map_err(|e| {
            error!("Failed to write store file {}: {}", tmp_path.display(), e);
            CoreError::StorageError(e.to_string())
        })?;
        tokio::fs::rename(&tmp_path, path).await.map_err(|e| {
            error!("Failed to replace store file {}: {}", path.display(), e);
            CoreError::StorageError(e.to_string())
        })
    }
}

fn decode<T: DeserializeOwned>(key: &str, value: &Value) -> Result<T, CoreError> {
    T::deserialize(value).map_err(|e| {
        error!("Failed to decode store key {}: {}", key, e);
        CoreError::StorageError(format!("invalid value for {}: {}", key, e))
    })
}

fn encode<T: Serialize>(key: &str, value: &T) -> Result<Value, CoreError> {
    serde_json::to_value(value).map_err(|e| {
        error!("Failed to encode store key {}: {}", key, e);
        CoreError::StorageError(format!("cannot encode {}: {}", key, e))
    })
}
