//! Persistence collaborator interface
//!
//! The ingestion core never owns storage. It consumes a [`ScanStore`] for
//! dressing lookup, observation creation and history reads. [`MemoryStore`] is
//! an in-process implementation used by tests, benches and the demo CLI.

pub mod memory;

pub use memory::MemoryStore;

use std::fmt;
use std::str::FromStr;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::dressing::{DressingRecord, PatientRecord};
use crate::ingest::Observation;
use crate::Result;

/// Opaque record key assigned by the store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordKey(Uuid);

impl RecordKey {
    /// Fresh random key
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse a string that is syntactically a record key
    pub fn parse(value: &str) -> Option<Self> {
        Uuid::parse_str(value).ok().map(Self)
    }
}

impl Default for RecordKey {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for RecordKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl FromStr for RecordKey {
    type Err = uuid::Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}

/// Observation as held by the store, with the key it was created under
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StoredObservation {
    pub id: RecordKey,
    pub observation: Observation,
}

/// Storage operations consumed by the ingestion core
#[async_trait]
pub trait ScanStore: Send + Sync {
    /// Look up a dressing by its printed code
    async fn find_dressing_by_code(&self, code: &str) -> Result<Option<DressingRecord>>;

    /// Look up a dressing by record key
    async fn find_dressing_by_key(&self, key: RecordKey) -> Result<Option<DressingRecord>>;

    async fn find_patient(&self, key: RecordKey) -> Result<Option<PatientRecord>>;

    /// Append an observation atomically and return its new key
    async fn create_observation(&self, observation: &Observation) -> Result<RecordKey>;

    /// All observations of a patient, in no particular order
    async fn observations_for_patient(&self, patient: RecordKey) -> Result<Vec<StoredObservation>>;

    /// All observations of a dressing, in no particular order
    async fn observations_for_dressing(&self, dressing: RecordKey) -> Result<Vec<StoredObservation>>;
}
