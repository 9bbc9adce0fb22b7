//! Resource models for the moderation table

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Moderation status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceStatus {
    Pending,
    Approved,
    Blocked,
}

impl ResourceStatus {
    /// Label shown in the status column
    pub fn label(&self) -> &'static str {
        match self {
            ResourceStatus::Pending => "Pending",
            ResourceStatus::Approved => "Approved",
            ResourceStatus::Blocked => "Blocked",
        }
    }
}

impl fmt::Display for ResourceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Music category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Pop,
    Rock,
    Classical,
    Jazz,
    Folk,
    Electronic,
}

impl Category {
    /// Label shown in the category column
    pub fn label(&self) -> &'static str {
        match self {
            Category::Pop => "Pop",
            Category::Rock => "Rock",
            Category::Classical => "Classical",
            Category::Jazz => "Jazz",
            Category::Folk => "Folk",
            Category::Electronic => "Electronic",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Uploaded track awaiting or past moderation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceRecord {
    pub id: u64,
    pub title: String,
    pub artist: String,
    pub category: Category,
    pub upload_date: NaiveDate,
    pub status: ResourceStatus,
    pub audio_url: String,
}

impl ResourceRecord {
    /// Upload date as rendered in the table
    pub fn rendered_date(&self) -> String {
        self.upload_date.format("%Y-%m-%d").to_string()
    }
}

/// Resource append payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewResource {
    pub title: String,
    pub artist: String,
    pub category: Category,
    pub upload_date: NaiveDate,
    pub audio_url: String,
}

/// Table filters; every set field must match
#[derive(Debug, Clone, Default)]
pub struct ResourceFilter {
    /// Case-insensitive substring of title or artist
    pub text: Option<String>,
    /// Exact status label
    pub status: Option<String>,
    /// Exact category label
    pub category: Option<String>,
    /// Substring of the rendered `YYYY-MM-DD` date
    pub date: Option<String>,
}

impl ResourceFilter {
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn date(mut self, date: impl Into<String>) -> Self {
        self.date = Some(date.into());
        self
    }

    /// Whether a record passes every set filter; blank filters are ignored
    pub fn matches(&self, record: &ResourceRecord) -> bool {
        let set = |value: &Option<String>| {
            value
                .as_deref()
                .map(str::trim)
                .filter(|v| !v.is_empty())
                .map(str::to_string)
        };

        if let Some(text) = set(&self.text) {
            let needle = text.to_lowercase();
            if !record.title.to_lowercase().contains(&needle)
                && !record.artist.to_lowercase().contains(&needle)
            {
                return false;
            }
        }

        if let Some(status) = set(&self.status) {
            if record.status.label() != status {
                return false;
            }
        }

        if let Some(category) = set(&self.category) {
            if record.category.label() != category {
                return false;
            }
        }

        if let Some(date) = set(&self.date) {
            if !record.rendered_date().contains(&date) {
                return false;
            }
        }

        true
    }
}
