use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tempfile::NamedTempFile;

use base::errors::{TrackerError, TrackerResult};

use crate::entities::TrackedOrder;
use crate::orders::TrackedOrders;
use crate::storage::OrderStorage;

pub type SchemaVersion = u32;

pub const SCHEMA_VERSION: SchemaVersion = 1;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct StoreFileOut<'a> {
    schema_version: SchemaVersion,
    orders: &'a [TrackedOrder],
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoreFileIn {
    schema_version: SchemaVersion,
    orders: Vec<TrackedOrder>,
}

/// Keeps the orders in a single versioned JSON document.
pub struct JsonFileOrderStorage {
    path: PathBuf,
}

impl JsonFileOrderStorage {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: io::Error) -> TrackerError {
        TrackerError::StoreIo {
            path: self.path.clone(),
            source,
        }
    }

    fn corrupt(&self, reason: String) -> TrackerError {
        log::error!("order store {} is corrupt: {}", self.path.display(), reason);

        TrackerError::CorruptStore {
            path: self.path.clone(),
            reason,
        }
    }

    fn directory(&self) -> &Path {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        }
    }
}

impl OrderStorage for JsonFileOrderStorage {
    fn load(&self) -> TrackerResult<TrackedOrders> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                log::debug!(
                    "order store {} does not exist yet, starting empty",
                    self.path.display()
                );
                return Ok(TrackedOrders::new());
            }
            Err(e) => return Err(self.io_error(e)),
        };

        let store_file: StoreFileIn =
            serde_json::from_str(&content).map_err(|e| self.corrupt(e.to_string()))?;

        if store_file.schema_version > SCHEMA_VERSION {
            return Err(self.corrupt(format!(
                "schema version {} is newer than the supported version {}",
                store_file.schema_version, SCHEMA_VERSION
            )));
        }

        log::debug!(
            "loaded {} orders from {}",
            store_file.orders.len(),
            self.path.display()
        );

        Ok(TrackedOrders::from(store_file.orders))
    }

    fn save(&self, orders: &TrackedOrders) -> TrackerResult<()> {
        let directory = self.directory();
        fs::create_dir_all(directory).map_err(|e| self.io_error(e))?;

        // written next to the target so the final rename stays on one file system
        let mut file = NamedTempFile::new_in(directory).map_err(|e| self.io_error(e))?;

        let store_file = StoreFileOut {
            schema_version: SCHEMA_VERSION,
            orders: orders.as_slice(),
        };

        serde_json::to_writer_pretty(&mut file, &store_file)
            .map_err(|e| self.io_error(e.into()))?;
        file.flush().map_err(|e| self.io_error(e))?;

        file.persist(&self.path).map_err(|e| self.io_error(e.error))?;

        log::debug!("saved {} orders to {}", orders.len(), self.path.display());

        Ok(())
    }
}
