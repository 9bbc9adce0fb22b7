//! Resource table for the moderation view
//!
//! Records live only in memory and are never persisted.

use chrono::NaiveDate;
use thiserror::Error;
use tracing::info;

use crate::models::{Category, NewResource, ResourceFilter, ResourceRecord, ResourceStatus};

/// Error raised by table mutations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TableError {
    #[error("Resource {0} not found")]
    NotFound(u64),

    #[error("Resource {id} cannot move from {from} to {to}")]
    InvalidTransition {
        id: u64,
        from: ResourceStatus,
        to: ResourceStatus,
    },
}

/// Per-status totals for the dashboard summary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StatusCounts {
    pub pending: usize,
    pub approved: usize,
    pub blocked: usize,
}

impl StatusCounts {
    pub fn total(&self) -> usize {
        self.pending + self.approved + self.blocked
    }
}

/// In-memory resource table
#[derive(Debug, Clone, Default)]
pub struct ResourceTable {
    records: Vec<ResourceRecord>,
}

impl ResourceTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a table from existing records
    pub fn from_records(records: Vec<ResourceRecord>) -> Self {
        Self { records }
    }

    /// Create a table seeded with the demo catalogue
    pub fn with_mock_data() -> Self {
        let seed = [
            ("Midnight Rain", "Luna Park", Category::Pop, (2024, 3, 5), ResourceStatus::Pending),
            ("Iron Valley", "The Foundry", Category::Rock, (2024, 3, 8), ResourceStatus::Approved),
            ("Nocturne in Blue", "Clara Ives", Category::Classical, (2024, 3, 12), ResourceStatus::Pending),
            ("Smoke Rings", "Dexter Hale Trio", Category::Jazz, (2024, 4, 1), ResourceStatus::Blocked),
            ("River Song", "Old Pines", Category::Folk, (2024, 4, 9), ResourceStatus::Pending),
            ("Neon Drift", "Pulsewave", Category::Electronic, (2024, 4, 15), ResourceStatus::Approved),
        ];

        let records = seed
            .into_iter()
            .zip(1u64..)
            .filter_map(|((title, artist, category, (y, m, d), status), id)| {
                Some(ResourceRecord {
                    id,
                    title: title.to_string(),
                    artist: artist.to_string(),
                    category,
                    upload_date: NaiveDate::from_ymd_opt(y, m, d)?,
                    status,
                    audio_url: format!("https://cdn.music.com/audio/{}.mp3", id),
                })
            })
            .collect();

        Self { records }
    }

    /// All records in insertion order
    pub fn list(&self) -> &[ResourceRecord] {
        &self.records
    }

    pub fn get(&self, id: u64) -> Option<&ResourceRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    /// Records passing every set filter, in insertion order
    pub fn filter(&self, filter: &ResourceFilter) -> Vec<&ResourceRecord> {
        self.records.iter().filter(|r| filter.matches(r)).collect()
    }

    /// pending → approved
    pub fn approve(&mut self, id: u64) -> Result<&ResourceRecord, TableError> {
        self.transition(id, ResourceStatus::Approved)
    }

    /// pending → blocked
    pub fn block(&mut self, id: u64) -> Result<&ResourceRecord, TableError> {
        self.transition(id, ResourceStatus::Blocked)
    }

    fn transition(&mut self, id: u64, to: ResourceStatus) -> Result<&ResourceRecord, TableError> {
        let record = self
            .records
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or(TableError::NotFound(id))?;

        if record.status != ResourceStatus::Pending {
            return Err(TableError::InvalidTransition {
                id,
                from: record.status,
                to,
            });
        }

        record.status = to;
        info!("Resource {} moved to {}", id, to);
        Ok(record)
    }

    /// Append a pending record under the next free id
    pub fn append(&mut self, new: NewResource) -> u64 {
        let id = self.records.iter().map(|r| r.id).max().unwrap_or(0) + 1;
        self.records.push(ResourceRecord {
            id,
            title: new.title,
            artist: new.artist,
            category: new.category,
            upload_date: new.upload_date,
            status: ResourceStatus::Pending,
            audio_url: new.audio_url,
        });
        info!("Resource {} appended", id);
        id
    }

    /// Remove a record
    pub fn delete(&mut self, id: u64) -> Result<ResourceRecord, TableError> {
        let index = self
            .records
            .iter()
            .position(|r| r.id == id)
            .ok_or(TableError::NotFound(id))?;

        info!("Resource {} deleted", id);
        Ok(self.records.remove(index))
    }

    pub fn counts(&self) -> StatusCounts {
        self.records
            .iter()
            .fold(StatusCounts::default(), |mut counts, r| {
                match r.status {
                    ResourceStatus::Pending => counts.pending += 1,
                    ResourceStatus::Approved => counts.approved += 1,
                    ResourceStatus::Blocked => counts.blocked += 1,
                }
                counts
            })
    }
}
