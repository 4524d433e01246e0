use std::collections::HashSet;
use std::path::Path;

use chrono::NaiveDateTime;
use serde::Deserialize;
use tracing::{debug, info};

use super::event::ClubEvent;
use super::schedule::Schedule;
use crate::error::CatalogError;

const BUNDLED_EVENTS: &str = include_str!("../../data/events.json");

#[derive(Debug, Deserialize)]
struct CatalogDocument {
    #[serde(default)]
    events: Vec<ClubEvent>,
}

/// The externally owned list of events, kept in source order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    events: Vec<ClubEvent>,
}

impl Catalog {
    pub fn new(events: Vec<ClubEvent>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        for ev in &events {
            if ev.title.trim().is_empty() {
                return Err(CatalogError::EmptyTitle(ev.id.clone()));
            }
            if !seen.insert(ev.id.as_str()) {
                return Err(CatalogError::DuplicateId(ev.id.clone()));
            }
        }
        Ok(Self { events })
    }

    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let doc: CatalogDocument = serde_json::from_str(json)?;
        Self::new(doc.events)
    }

    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let content = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let catalog = Self::from_json(&content)?;
        info!(path = %path.display(), events = catalog.len(), "loaded events catalog");
        Ok(catalog)
    }

    /// The sample catalog compiled into the binary.
    pub fn bundled() -> Result<Self, CatalogError> {
        let catalog = Self::from_json(BUNDLED_EVENTS)?;
        debug!(events = catalog.len(), "using bundled events catalog");
        Ok(catalog)
    }

    pub fn events(&self) -> &[ClubEvent] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn find(&self, id: &str) -> Option<&ClubEvent> {
        self.events.iter().find(|e| e.id == id)
    }

    pub fn schedule(&self, now: NaiveDateTime) -> Schedule<'_> {
        Schedule::new(&self.events, now)
    }
}
