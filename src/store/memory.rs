//! In-memory [`ScanStore`]

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::dressing::{DressingRecord, PatientRecord};
use crate::ingest::Observation;
use crate::store::{RecordKey, ScanStore, StoredObservation};
use crate::{Result, ScanError};

#[derive(Default)]
struct Tables {
    patients: HashMap<RecordKey, PatientRecord>,
    dressings: HashMap<RecordKey, DressingRecord>,
    observations: Vec<StoredObservation>,
}

/// Store backed by process memory; observations are append-only
#[derive(Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn insert_patient(&self, patient: PatientRecord) {
        self.tables.write().await.patients.insert(patient.key, patient);
    }

    /// Register a dressing. Codes are unique; re-inserting the same key replaces it.
    ///
    /// # Errors
    ///
    /// Returns `ScanError::DuplicateDressingCode` when another dressing already
    /// carries the same code.
    pub async fn insert_dressing(&self, dressing: DressingRecord) -> Result<()> {
        let mut tables = self.tables.write().await;
        let taken = tables
            .dressings
            .values()
            .any(|existing| existing.code == dressing.code && existing.key != dressing.key);
        if taken {
            return Err(ScanError::DuplicateDressingCode { code: dressing.code });
        }
        tables.dressings.insert(dressing.key, dressing);
        Ok(())
    }

    pub async fn observation_count(&self) -> usize {
        self.tables.read().await.observations.len()
    }
}

#[async_trait]
impl ScanStore for MemoryStore {
    async fn find_dressing_by_code(&self, code: &str) -> Result<Option<DressingRecord>> {
        let tables = self.tables.read().await;
        Ok(tables.dressings.values().find(|d| d.code == code).cloned())
    }

    async fn find_dressing_by_key(&self, key: RecordKey) -> Result<Option<DressingRecord>> {
        Ok(self.tables.read().await.dressings.get(&key).cloned())
    }

    async fn find_patient(&self, key: RecordKey) -> Result<Option<PatientRecord>> {
        Ok(self.tables.read().await.patients.get(&key).cloned())
    }

    async fn create_observation(&self, observation: &Observation) -> Result<RecordKey> {
        let id = RecordKey::new();
        self.tables.write().await.observations.push(StoredObservation {
            id,
            observation: observation.clone(),
        });
        Ok(id)
    }

    async fn observations_for_patient(&self, patient: RecordKey) -> Result<Vec<StoredObservation>> {
        let tables = self.tables.read().await;
        Ok(tables
            .observations
            .iter()
            .filter(|stored| stored.observation.patient() == patient)
            .cloned()
            .collect())
    }

    async fn observations_for_dressing(&self, dressing: RecordKey) -> Result<Vec<StoredObservation>> {
        let tables = self.tables.read().await;
        Ok(tables
            .observations
            .iter()
            .filter(|stored| stored.observation.dressing() == dressing)
            .cloned()
            .collect())
    }
}
