use std::collections::HashSet;
use std::path::Path;
use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationErrors};
use crate::models::{Member, Destination};

/// Roster and destinations bundled with the binary
const BUILTIN_SEED: &str = include_str!("../../data/seed.toml");

/// Errors that can occur while loading seed data
#[derive(Debug, Error)]
pub enum SeedError {
    #[error("Failed to read seed file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse seed file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Duplicate {kind} id: {id}")]
    DuplicateId { kind: &'static str, id: String },

    #[error("Selected destination not found: {0}")]
    UnknownDestination(String),

    #[error("Invalid {kind} {id}: {source}")]
    Invalid {
        kind: &'static str,
        id: String,
        source: ValidationErrors,
    },
}

/// Trip roster, destination catalogue and the current selection
#[derive(Debug, Clone, Deserialize)]
pub struct SeedData {
    #[serde(default)]
    pub members: Vec<Member>,
    #[serde(default)]
    pub destinations: Vec<Destination>,
    /// Ids of the destinations picked for the trip, in visiting order
    #[serde(default)]
    pub selected: Vec<String>,
}

impl SeedData {
    /// Load seed data from a TOML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, SeedError> {
        let contents = std::fs::read_to_string(path.as_ref())?;
        tracing::debug!("Read seed file {}", path.as_ref().display());
        Self::from_toml_str(&contents)
    }

    /// Seed data compiled into the binary
    pub fn builtin() -> Result<Self, SeedError> {
        Self::from_toml_str(BUILTIN_SEED)
    }

    pub fn from_toml_str(contents: &str) -> Result<Self, SeedError> {
        let seed: SeedData = toml::from_str(contents)?;
        seed.check()?;
        Ok(seed)
    }

    fn check(&self) -> Result<(), SeedError> {
        let mut member_ids = HashSet::new();
        for member in &self.members {
            member.validate().map_err(|source| SeedError::Invalid {
                kind: "member",
                id: member.id.clone(),
                source,
            })?;
            if !member_ids.insert(member.id.as_str()) {
                return Err(SeedError::DuplicateId { kind: "member", id: member.id.clone() });
            }
        }

        let mut destination_ids = HashSet::new();
        for destination in &self.destinations {
            destination.validate().map_err(|source| SeedError::Invalid {
                kind: "destination",
                id: destination.id.clone(),
                source,
            })?;
            if !destination_ids.insert(destination.id.as_str()) {
                return Err(SeedError::DuplicateId { kind: "destination", id: destination.id.clone() });
            }
        }

        if let Some(missing) = self.selected.iter().find(|id| !destination_ids.contains(id.as_str())) {
            return Err(SeedError::UnknownDestination(missing.clone()));
        }

        Ok(())
    }

    /// Selected destinations in visiting order
    pub fn selected_destinations(&self) -> Vec<Destination> {
        self.selected
            .iter()
            .filter_map(|id| self.destinations.iter().find(|d| &d.id == id))
            .cloned()
            .collect()
    }

    /// Catalogue destinations not yet selected
    pub fn available_destinations(&self) -> Vec<Destination> {
        self.destinations
            .iter()
            .filter(|d| !self.selected.contains(&d.id))
            .cloned()
            .collect()
    }
}
