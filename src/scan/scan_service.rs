use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Instant;

use log::{error, info, warn};
use tokio::sync::Mutex;
use uuid::Uuid;

use super::scan_errors::{Result, ScanError};
use super::scan_helpers::{find_workshop_id, flags_from_content};
use super::scan_model::{AddonFileData, ScanCounter, ScanSpeed, ScanStatus};
use super::scan_traits::AddonSourceTrait;
use crate::addons::{Addon, AddonCatalogTrait, WorkshopClientTrait};
use crate::events::{EventSinkTrait, ScanProgress, ScanResultEvent, ScanResultKind, ScanStateEvent};

/// Owned state of the single process-wide scan job. All transitions happen
/// under one lock, so two concurrent `start` calls can never both succeed.
struct JobState {
    status: ScanStatus,
    cancel: Option<Arc<AtomicBool>>,
    abort_reason: Option<String>,
}

impl Default for JobState {
    fn default() -> Self {
        Self {
            status: ScanStatus::Inactive,
            cancel: None,
            abort_reason: None,
        }
    }
}

/// Owns the scan job lifecycle: start, cooperative abort, status. The job
/// itself runs on a background tokio task and reports through the event
/// sink; completion is never polled for.
pub struct ScanCoordinator {
    state: Arc<Mutex<JobState>>,
    catalog: Arc<dyn AddonCatalogTrait>,
    source: Arc<dyn AddonSourceTrait>,
    workshop: Arc<dyn WorkshopClientTrait>,
    sink: Arc<dyn EventSinkTrait>,
}

impl ScanCoordinator {
    pub fn new(
        catalog: Arc<dyn AddonCatalogTrait>,
        source: Arc<dyn AddonSourceTrait>,
        workshop: Arc<dyn WorkshopClientTrait>,
        sink: Arc<dyn EventSinkTrait>,
    ) -> Self {
        Self {
            state: Arc::new(Mutex::new(JobState::default())),
            catalog,
            source,
            workshop,
            sink,
        }
    }

    /// Starts a background scan. Returns once the job is accepted; all
    /// further signals arrive on the event sink.
    pub async fn start(&self, speed: ScanSpeed) -> Result<()> {
        let mut state = self.state.lock().await;
        if state.status != ScanStatus::Inactive {
            return Err(ScanError::AlreadyRunning);
        }
        let cancel = Arc::new(AtomicBool::new(false));
        state.status = ScanStatus::Running;
        state.abort_reason = None;
        state.cancel = Some(cancel.clone());

        let job = ScanJob {
            state: self.state.clone(),
            catalog: self.catalog.clone(),
            source: self.source.clone(),
            workshop: self.workshop.clone(),
            sink: self.sink.clone(),
        };
        tokio::spawn(async move { job.run(speed, cancel).await });
        Ok(())
    }

    /// Requests cancellation of the running scan. The job stops at its next
    /// checkpoint; a second abort while cancelling keeps the first reason.
    pub async fn abort(&self, reason: Option<String>) -> Result<()> {
        let mut state = self.state.lock().await;
        match state.status {
            ScanStatus::Inactive => Err(ScanError::NotRunning),
            ScanStatus::Cancelling => Ok(()),
            ScanStatus::Running => {
                info!("Scan abort requested (reason={:?})", reason);
                state.status = ScanStatus::Cancelling;
                state.abort_reason = reason;
                if let Some(cancel) = &state.cancel {
                    cancel.store(true, Ordering::SeqCst);
                }
                Ok(())
            }
        }
    }

    pub async fn status(&self) -> ScanStatus {
        self.state.lock().await.status
    }
}

struct ScanJob {
    state: Arc<Mutex<JobState>>,
    catalog: Arc<dyn AddonCatalogTrait>,
    source: Arc<dyn AddonSourceTrait>,
    workshop: Arc<dyn WorkshopClientTrait>,
    sink: Arc<dyn EventSinkTrait>,
}

impl ScanJob {
    async fn run(self, speed: ScanSpeed, cancel: Arc<AtomicBool>) {
        let scan_id = Uuid::new_v4();
        let started = Instant::now();
        self.sink.scan_state(ScanStateEvent::Started { speed });
        info!("===== SCAN STARTED =====");
        info!("speed={} scan_id={}", speed, scan_id);

        let paths = match self.source.enumerate() {
            Ok(paths) => paths,
            Err(err) => {
                // Not being able to list the addons folder is fatal
                error!("scan enumeration failed: {}", err);
                self.finish_aborted(Some(err.to_string())).await;
                return;
            }
        };
        let total_items = paths.len() as u32;
        let mut counter = ScanCounter::default();

        let known_ws_ids = match self.catalog.workshop_ids().await {
            Ok(ids) => ids,
            Err(err) => {
                warn!("failed to list known workshop ids: {}", err);
                Vec::new()
            }
        };
        let mut new_ws_ids: Vec<i64> = Vec::new();

        for path in paths {
            if cancel.load(Ordering::SeqCst) {
                self.finish_aborted(None).await;
                return;
            }

            counter.total += 1;
            let filename = path
                .file_name()
                .map(|name| name.to_string_lossy().to_string())
                .unwrap_or_else(|| path.to_string_lossy().to_string());
            match self.process_item(&path, scan_id).await {
                Ok((result, ws_id)) => {
                    match result {
                        ScanResultKind::Added => {
                            counter.added += 1;
                            if let Some(id) = ws_id {
                                if !known_ws_ids.contains(&id) {
                                    new_ws_ids.push(id);
                                }
                            }
                        }
                        // Renamed entries count as updated in the totals
                        ScanResultKind::Updated | ScanResultKind::Renamed => counter.updated += 1,
                        ScanResultKind::NoAction => {}
                    }
                    self.sink.scan_result(ScanResultEvent { result, filename });
                }
                Err(err) => {
                    counter.failed += 1;
                    error!("SCAN ERROR FOR \"{}\": {}", filename, err);
                }
            }
            self.sink.scan_progress(ScanProgress {
                value: counter.total,
                total: total_items,
            });

            if let Some(pause) = speed.pause() {
                tokio::time::sleep(pause).await;
            }
        }

        // Last checkpoint before the auxiliary passes
        if cancel.load(Ordering::SeqCst) {
            self.finish_aborted(None).await;
            return;
        }

        if !new_ws_ids.is_empty() {
            self.fetch_workshop_items(&new_ws_ids).await;
        }

        match self.catalog.prune_unseen(scan_id).await {
            Ok(removed) if !removed.is_empty() => {
                info!("pruned {} missing addons: {:?}", removed.len(), removed);
            }
            Ok(_) => {}
            Err(err) => warn!("failed to prune missing addons: {}", err),
        }

        let time = started.elapsed().as_secs();
        self.finish(ScanStateEvent::Complete {
            time,
            total: counter.total,
            added: counter.added,
            updated: counter.updated,
            failed: counter.failed,
        })
        .await;

        info!("====== SCAN COMPLETE ======");
        info!(
            "{} addons scanned, {} added, {} updated, {} failed",
            counter.total, counter.added, counter.updated, counter.failed,
        );
        info!("Duration: {} seconds", time);
    }

    /// Classifies one file against the catalog. Returns the result kind and,
    /// for new entries, the workshop id to resolve.
    async fn process_item(
        &self,
        path: &Path,
        scan_id: Uuid,
    ) -> Result<(ScanResultKind, Option<i64>)> {
        let file = self.source.read(path).await?;

        if let Some(entry) = self.catalog.get_by_filename(&file.filename).await? {
            // Known file: changed on disk since last seen?
            if file.modified > entry.addon.updated_at {
                self.catalog
                    .update_file_info(
                        &file.filename,
                        file.modified,
                        file.file_size,
                        &file.info,
                        scan_id,
                    )
                    .await?;
                return Ok((ScanResultKind::Updated, None));
            }
            self.catalog.touch(&file.filename, scan_id).await?;
            return Ok((ScanResultKind::NoAction, None));
        }

        // Unknown filename: a known (title, version) means the file moved.
        // Any content change will surface on the next scan's modified check.
        if let (Some(title), Some(version)) = (&file.info.title, &file.info.version) {
            if self
                .catalog
                .rename(title, version, &file.filename, scan_id)
                .await?
            {
                return Ok((ScanResultKind::Renamed, None));
            }
        }

        let addon = build_addon(&file)?;
        let ws_id = addon.workshop_id;
        self.catalog.insert(addon, scan_id).await?;
        Ok((ScanResultKind::Added, ws_id))
    }

    /// Resolves remote metadata for workshop ids first seen by this scan.
    /// Failures are logged and never fail the job.
    async fn fetch_workshop_items(&self, ids: &[i64]) {
        match self.workshop.fetch_items(ids).await {
            Ok(items) => {
                info!("fetched {} workshop items", items.len());
                if let Err(err) = self.catalog.add_workshop_items(items).await {
                    warn!("failed to store workshop items: {}", err);
                }
            }
            Err(err) => warn!("failed to fetch workshop items: {}", err),
        }
    }

    /// Emits the terminal event and releases the job slot, atomically with
    /// respect to `start`/`abort`. Nothing is emitted for this job after it.
    async fn finish(&self, event: ScanStateEvent) {
        let mut state = self.state.lock().await;
        state.status = ScanStatus::Inactive;
        state.cancel = None;
        state.abort_reason = None;
        self.sink.scan_state(event);
    }

    async fn finish_aborted(&self, fatal_reason: Option<String>) {
        let mut state = self.state.lock().await;
        let reason = fatal_reason.or_else(|| state.abort_reason.take());
        info!("Scan aborted (reason={:?})", reason);
        state.status = ScanStatus::Inactive;
        state.cancel = None;
        state.abort_reason = None;
        self.sink.scan_state(ScanStateEvent::Aborted { reason });
    }
}

fn build_addon(file: &AddonFileData) -> Result<Addon> {
    let title = file
        .info
        .title
        .clone()
        .ok_or_else(|| ScanError::Parse("addon info has no title".to_string()))?;
    let version = file
        .info
        .version
        .clone()
        .ok_or_else(|| ScanError::Parse("addon info has no version".to_string()))?;

    Ok(Addon {
        filename: file.filename.clone(),
        updated_at: file.modified,
        created_at: file.created,
        file_size: file.file_size,
        flags: flags_from_content(&file.info.content, file.workshop),
        title,
        author: file.info.author.clone(),
        version,
        tagline: file.info.tagline.clone(),
        chapter_ids: file.info.chapter_ids.as_ref().map(|c| c.join(",")),
        workshop_id: find_workshop_id(&file.filename, file.info.addon_url.as_deref()),
    })
}
