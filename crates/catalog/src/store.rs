use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::dates;
use crate::error::{CatalogError, Result};
use crate::records::{Campaign, RecordKind, Session, Tip};
use crate::sample;

/// One immutable catalog per record kind.
///
/// A store is built once (from the built-in samples or a JSON file) and
/// only read afterwards; the filter engine borrows catalogs and never
/// mutates them.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ContentStore {
    #[serde(default)]
    pub tips: Vec<Tip>,
    #[serde(default)]
    pub campaigns: Vec<Campaign>,
    #[serde(default)]
    pub sessions: Vec<Session>,
}

impl ContentStore {
    /// The built-in sample content set.
    #[must_use]
    pub fn sample() -> Self {
        sample::store()
    }

    /// Parse and validate a store from JSON.
    pub fn from_json_str(raw: &str) -> Result<Self> {
        let store: Self = serde_json::from_str(raw)?;
        store.validate()?;
        Ok(store)
    }

    /// Read, parse, and validate a store from a JSON file.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)?;
        Self::from_json_str(&raw)
    }

    /// Total record count across all catalogs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tips.len() + self.campaigns.len() + self.sessions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Classification values in catalog order: tips' categories first,
    /// then sessions' topics. Campaigns are exempt from category
    /// filtering and therefore absent here.
    pub fn classification_values(&self) -> impl Iterator<Item = &str> {
        self.tips
            .iter()
            .map(|tip| tip.category.as_str())
            .chain(self.sessions.iter().map(|session| session.topic.as_str()))
    }

    /// Enforce catalog invariants: ids unique within each catalog, every
    /// date-shaped field parseable.
    pub fn validate(&self) -> Result<()> {
        check_unique_ids(RecordKind::Tip, self.tips.iter().map(|t| t.id.as_str()))?;
        check_unique_ids(
            RecordKind::Campaign,
            self.campaigns.iter().map(|c| c.id.as_str()),
        )?;
        check_unique_ids(
            RecordKind::Session,
            self.sessions.iter().map(|s| s.id.as_str()),
        )?;

        for tip in &self.tips {
            check_date(RecordKind::Tip, &tip.id, "timestamp", &tip.timestamp)?;
        }
        for campaign in &self.campaigns {
            check_date(
                RecordKind::Campaign,
                &campaign.id,
                "timestamp",
                &campaign.timestamp,
            )?;
            check_date(
                RecordKind::Campaign,
                &campaign.id,
                "startDate",
                &campaign.start_date,
            )?;
            check_date(
                RecordKind::Campaign,
                &campaign.id,
                "endDate",
                &campaign.end_date,
            )?;
        }
        for session in &self.sessions {
            check_date(
                RecordKind::Session,
                &session.id,
                "timestamp",
                &session.timestamp,
            )?;
            check_date(
                RecordKind::Session,
                &session.id,
                "scheduledDate",
                &session.scheduled_date,
            )?;
        }

        Ok(())
    }
}

fn check_unique_ids<'a>(kind: RecordKind, ids: impl Iterator<Item = &'a str>) -> Result<()> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(CatalogError::DuplicateId {
                kind,
                id: id.to_string(),
            });
        }
    }
    Ok(())
}

fn check_date(kind: RecordKind, id: &str, field: &'static str, value: &str) -> Result<()> {
    if !dates::is_valid(value) {
        return Err(CatalogError::InvalidDate {
            kind,
            id: id.to_string(),
            field,
            value: value.to_string(),
        });
    }
    Ok(())
}
