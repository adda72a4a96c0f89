//! In-memory stand-ins for the filesystem, clock, reporter and catalog.

use crate::models::backup_record::BackupRecord;
use crate::models::error::{RetentionError, Result};
use crate::models::operator_event::OperatorEvent;
use crate::service::clock::Clock;
use crate::service::metadata::MetadataSource;
use crate::service::reporter::Reporter;
use crate::service::store::{FileStore, RemoveOutcome};
use chrono::{DateTime, FixedOffset, Utc};
use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet};
use std::io;
use std::path::PathBuf;

pub fn record_created(name: &str, created_at: DateTime<Utc>) -> BackupRecord {
    let created_at = created_at.fixed_offset();
    BackupRecord {
        name: name.to_string(),
        size_bytes: 100,
        created_at,
        modified_at: created_at,
    }
}

pub fn record_at(name: &str, size_bytes: u64, created_at: &str, modified_at: &str) -> BackupRecord {
    BackupRecord {
        name: name.to_string(),
        size_bytes,
        created_at: DateTime::<FixedOffset>::parse_from_rfc3339(created_at).unwrap(),
        modified_at: DateTime::<FixedOffset>::parse_from_rfc3339(modified_at).unwrap(),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreOp {
    Remove(String),
    Copy(String),
}

#[derive(Debug, Default)]
pub struct MemoryStore {
    source: RefCell<BTreeMap<String, Vec<u8>>>,
    destination: RefCell<BTreeMap<String, Vec<u8>>>,
    failing_removes: RefCell<BTreeSet<String>>,
    operations: RefCell<Vec<StoreOp>>,
}

impl MemoryStore {
    pub fn with_source(files: &[(&str, &str)]) -> Self {
        let store = MemoryStore::default();
        for (name, content) in files {
            store
                .source
                .borrow_mut()
                .insert(name.to_string(), content.as_bytes().to_vec());
        }
        store
    }

    pub fn fail_remove(&self, name: &str) {
        self.failing_removes.borrow_mut().insert(name.to_string());
    }

    pub fn operations(&self) -> Vec<StoreOp> {
        self.operations.borrow().clone()
    }

    pub fn destination_content(&self, name: &str) -> Option<Vec<u8>> {
        self.destination.borrow().get(name).cloned()
    }
}

impl FileStore for MemoryStore {
    fn ensure_locations(&self) -> io::Result<()> {
        Ok(())
    }

    fn remove(&self, name: &str) -> io::Result<RemoveOutcome> {
        self.operations
            .borrow_mut()
            .push(StoreOp::Remove(name.to_string()));
        if self.failing_removes.borrow().contains(name) {
            return Err(io::Error::new(
                io::ErrorKind::PermissionDenied,
                "permission denied",
            ));
        }
        match self.source.borrow_mut().remove(name) {
            Some(_) => Ok(RemoveOutcome::Removed),
            None => Ok(RemoveOutcome::Absent),
        }
    }

    fn copy(&self, name: &str) -> io::Result<u64> {
        self.operations
            .borrow_mut()
            .push(StoreOp::Copy(name.to_string()));
        let content = self
            .source
            .borrow()
            .get(name)
            .cloned()
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "source file not found"))?;
        let bytes = content.len() as u64;
        self.destination
            .borrow_mut()
            .insert(name.to_string(), content);
        Ok(bytes)
    }

    fn exists(&self, name: &str) -> bool {
        self.source.borrow().contains_key(name)
    }
}

pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

#[derive(Debug, Default)]
pub struct RecordingReporter {
    pub events: Vec<OperatorEvent>,
}

impl Reporter for RecordingReporter {
    fn report(&mut self, event: OperatorEvent) {
        self.events.push(event);
    }
}

/// Catalog that hands out a fixed list, or fails like an unreadable descriptor.
pub struct StaticMetadata {
    records: Option<Vec<BackupRecord>>,
}

impl StaticMetadata {
    pub fn new(records: Vec<BackupRecord>) -> Self {
        StaticMetadata {
            records: Some(records),
        }
    }

    pub fn unreadable() -> Self {
        StaticMetadata { records: None }
    }
}

impl MetadataSource for StaticMetadata {
    fn load(&self) -> Result<Vec<BackupRecord>> {
        self.records
            .clone()
            .ok_or_else(|| RetentionError::MetadataRead {
                path: PathBuf::from("static"),
                cause: io::Error::new(io::ErrorKind::NotFound, "catalog unavailable"),
            })
    }
}
