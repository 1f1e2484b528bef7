use std::sync::Arc;
use std::time::Duration;

use log::{error, info};

use super::batch_errors::{BatchError, Result};
use super::batch_model::{BatchOperation, ItemResult};
use super::batch_traits::AddonFileStoreTrait;
use crate::addons::{AddonCatalogTrait, WorkshopClientTrait};
use crate::constants::REMOTE_CALL_PACING_MS;

/// Runs one mutation over a list of target identifiers, independently per
/// item: one item's failure never prevents attempting the rest, and the call
/// returns only after every identifier has been attempted.
pub struct BatchExecutor {
    catalog: Arc<dyn AddonCatalogTrait>,
    files: Arc<dyn AddonFileStoreTrait>,
    workshop: Arc<dyn WorkshopClientTrait>,
}

impl BatchExecutor {
    pub fn new(
        catalog: Arc<dyn AddonCatalogTrait>,
        files: Arc<dyn AddonFileStoreTrait>,
        workshop: Arc<dyn WorkshopClientTrait>,
    ) -> Self {
        Self {
            catalog,
            files,
            workshop,
        }
    }

    /// Copies workshop packages into the managed folder and, when the client
    /// is able to, unsubscribes from each migrated item.
    pub async fn migrate(&self, ids: Vec<i64>) -> Result<Vec<ItemResult>> {
        let can_unsubscribe = self.workshop.can_unsubscribe();
        let mut results = Vec::with_capacity(ids.len());
        for (i, id) in ids.into_iter().enumerate() {
            let result = match self.files.migrate(id).await {
                Ok(filename) => {
                    if can_unsubscribe {
                        pace_remote_call(i).await;
                        match self.workshop.unsubscribe(id).await {
                            Ok(()) => ItemResult::ok(filename),
                            Err(e) => ItemResult::error(filename, e.to_string()),
                        }
                    } else {
                        ItemResult::ok(filename)
                    }
                }
                Err(e) => ItemResult::error(format!("{}.vpk", id), e.to_string()),
            };
            log_item(BatchOperation::Migrate, &result);
            results.push(result);
        }
        Ok(results)
    }

    /// Unsubscribes from each workshop item. Fails at call level when the
    /// client has no credentials to unsubscribe with.
    pub async fn unsubscribe(&self, ids: Vec<i64>) -> Result<Vec<ItemResult>> {
        if !self.workshop.can_unsubscribe() {
            return Err(BatchError::UnsubscribeUnavailable);
        }
        let mut results = Vec::with_capacity(ids.len());
        for (i, id) in ids.into_iter().enumerate() {
            pace_remote_call(i).await;
            let result = match self.workshop.unsubscribe(id).await {
                Ok(()) => ItemResult::ok(id.to_string()),
                Err(e) => ItemResult::error(id.to_string(), e.to_string()),
            };
            log_item(BatchOperation::Unsubscribe, &result);
            results.push(result);
        }
        Ok(results)
    }

    /// Toggles the enabled flag in the catalog; file content is not touched.
    pub async fn set_enabled(
        &self,
        filenames: Vec<String>,
        enabled: bool,
    ) -> Result<Vec<ItemResult>> {
        let operation = if enabled {
            BatchOperation::Enable
        } else {
            BatchOperation::Disable
        };
        let mut results = Vec::with_capacity(filenames.len());
        for filename in filenames {
            let result = match self.catalog.set_enabled(&filename, enabled).await {
                Ok(()) => ItemResult::ok(filename),
                Err(e) => ItemResult::error(filename, e.to_string()),
            };
            log_item(operation, &result);
            results.push(result);
        }
        Ok(results)
    }

    /// Moves each addon file to the trash and drops its catalog entry.
    pub async fn delete(&self, filenames: Vec<String>) -> Result<Vec<ItemResult>> {
        let mut results = Vec::with_capacity(filenames.len());
        for filename in filenames {
            let result = match self.files.trash(&filename).await {
                Ok(()) => match self.catalog.delete(&filename).await {
                    Ok(()) => ItemResult::ok(filename),
                    Err(e) => ItemResult::error(filename, e.to_string()),
                },
                Err(e) => ItemResult::error(filename, e.to_string()),
            };
            log_item(BatchOperation::Delete, &result);
            results.push(result);
        }
        Ok(results)
    }
}

/// Sleep between consecutive remote calls so a large selection does not hit
/// the workshop API with a burst of requests.
async fn pace_remote_call(index: usize) {
    if index > 0 {
        tokio::time::sleep(Duration::from_millis(REMOTE_CALL_PACING_MS)).await;
    }
}

fn log_item(operation: BatchOperation, result: &ItemResult) {
    match result {
        ItemResult::Ok { filename } => info!("{} {}: OK", operation, filename),
        ItemResult::Error { filename, error } => {
            error!("{} {}: {}", operation, filename, error)
        }
    }
}
