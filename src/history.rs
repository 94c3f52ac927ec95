//! Read-only observation history per patient and per dressing

use serde::Serialize;

use crate::dressing::PatientRecord;
use crate::risk::InfectionLevel;
use crate::store::{RecordKey, ScanStore, StoredObservation};
use crate::{Result, ScanError};

/// A patient with every observation of their dressings, newest first
#[derive(Debug, Clone, Serialize)]
pub struct PatientHistory {
    pub patient: PatientRecord,
    pub observations: Vec<StoredObservation>,
}

impl PatientHistory {
    pub fn latest(&self) -> Option<&StoredObservation> {
        self.observations.first()
    }

    /// Level of the most recent observation
    pub fn latest_level(&self) -> Option<InfectionLevel> {
        self.latest().map(|stored| stored.observation.level())
    }

    /// Most severe level ever observed
    pub fn peak_level(&self) -> Option<InfectionLevel> {
        self.observations
            .iter()
            .map(|stored| stored.observation.level())
            .max()
    }
}

fn newest_first(mut observations: Vec<StoredObservation>) -> Vec<StoredObservation> {
    observations.sort_by(|a, b| b.observation.recorded_at().cmp(&a.observation.recorded_at()));
    observations
}

/// Full history of a patient.
///
/// # Errors
///
/// Returns `ScanError::PatientNotFound` for an unknown patient key.
pub async fn patient_history(store: &dyn ScanStore, patient: RecordKey) -> Result<PatientHistory> {
    let record = store
        .find_patient(patient)
        .await?
        .ok_or_else(|| ScanError::PatientNotFound {
            patient: patient.to_string(),
        })?;
    let observations = store.observations_for_patient(patient).await?;

    Ok(PatientHistory {
        patient: record,
        observations: newest_first(observations),
    })
}

/// Most recent observation of a patient, if any
pub async fn latest_observation(
    store: &dyn ScanStore,
    patient: RecordKey,
) -> Result<Option<StoredObservation>> {
    let observations = store.observations_for_patient(patient).await?;
    Ok(newest_first(observations).into_iter().next())
}

/// History of one dressing, newest first
pub async fn dressing_history(
    store: &dyn ScanStore,
    dressing: RecordKey,
) -> Result<Vec<StoredObservation>> {
    let observations = store.observations_for_dressing(dressing).await?;
    Ok(newest_first(observations))
}
