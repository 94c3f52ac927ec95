//! Scan ingestion pipeline
//!
//! One request runs a single pass through
//! `Resolving → ColorDetermination → Validating → Mapping → Persisting → Done`.
//! Any stage may fail; the first failure is returned unchanged, with one
//! exception: a failed image falls back to the manual color when one was given.

use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::color::{classify, sample_image, IndicatorColor, RgbSample};
use crate::config::{SamplerConfig, ScanConfig};
use crate::dressing::DressingResolver;
use crate::ingest::Observation;
use crate::risk::{Classification, InfectionLevel};
use crate::store::{RecordKey, ScanStore};
use crate::{Result, ScanError};

/// Stages of a single ingestion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IngestionStage {
    Resolving,
    ColorDetermination,
    Validating,
    Mapping,
    Persisting,
    Done,
}

impl fmt::Display for IngestionStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            IngestionStage::Resolving => "resolving",
            IngestionStage::ColorDetermination => "color_determination",
            IngestionStage::Validating => "validating",
            IngestionStage::Mapping => "mapping",
            IngestionStage::Persisting => "persisting",
            IngestionStage::Done => "done",
        };
        f.write_str(name)
    }
}

/// Already-parsed submission from the transport layer
#[derive(Debug, Clone)]
pub struct IngestionRequest {
    /// Dressing code or record key
    pub dressing_identifier: String,
    /// Manual color name; an empty string counts as absent
    pub manual_color: Option<String>,
    /// Raw photo of the indicator pad
    pub image: Option<Vec<u8>>,
    /// Where the transport layer stored the raw image, if anywhere
    pub image_ref: Option<String>,
    /// Staff member recording the scan
    pub recorder: RecordKey,
    pub notes: Option<String>,
}

impl IngestionRequest {
    pub fn new(dressing_identifier: impl Into<String>, recorder: RecordKey) -> Self {
        Self {
            dressing_identifier: dressing_identifier.into(),
            manual_color: None,
            image: None,
            image_ref: None,
            recorder,
            notes: None,
        }
    }

    pub fn with_manual_color(mut self, color: impl Into<String>) -> Self {
        self.manual_color = Some(color.into());
        self
    }

    pub fn with_image(mut self, bytes: Vec<u8>) -> Self {
        self.image = Some(bytes);
        self
    }

    pub fn with_image_ref(mut self, image_ref: impl Into<String>) -> Self {
        self.image_ref = Some(image_ref.into());
        self
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }
}

/// Result returned to the caller after a successful ingestion
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IngestionSummary {
    pub record_id: RecordKey,
    pub dressing_code: String,
    pub color: IndicatorColor,
    /// pH rounded to two decimal places
    pub ph_value: f64,
    pub infection_level: InfectionLevel,
    pub timestamp: DateTime<Utc>,
}

impl IngestionSummary {
    fn new(record_id: RecordKey, observation: &Observation) -> Self {
        Self {
            record_id,
            dressing_code: observation.dressing_code().to_string(),
            color: observation.color(),
            ph_value: observation.ph().rounded(),
            infection_level: observation.level(),
            timestamp: observation.recorded_at(),
        }
    }
}

enum DeterminedColor {
    Sampled { rgb: RgbSample, color: IndicatorColor },
    Manual(String),
}

/// Runs ingestion requests against a store. Cheap to share behind an `Arc`.
pub struct Ingestor {
    store: Arc<dyn ScanStore>,
    resolver: DressingResolver,
    sampler: Arc<SamplerConfig>,
}

impl Ingestor {
    /// Ingestor with default limits
    pub fn new(store: Arc<dyn ScanStore>) -> Self {
        Self::with_config(store, ScanConfig::default())
    }

    pub fn with_config(store: Arc<dyn ScanStore>, config: ScanConfig) -> Self {
        Self {
            resolver: DressingResolver::new(Arc::clone(&store)),
            store,
            sampler: Arc::new(config.sampler),
        }
    }

    /// Run one submission through the pipeline.
    ///
    /// # Errors
    ///
    /// - `DressingNotFound` when the identifier matches no dressing
    /// - `MissingInput` when neither image nor manual color was given
    /// - `ImageProcessing` when the image fails and no manual color was given
    /// - `InvalidColor` when the manual color is not an indicator color
    /// - `Persistence` when the store write fails; retry with [`Ingestor::persist`]
    /// - `Persistence` with nothing pending when a store read fails; not retryable
    pub async fn ingest(&self, request: IngestionRequest) -> Result<IngestionSummary> {
        let IngestionRequest {
            dressing_identifier,
            manual_color,
            image,
            image_ref,
            recorder,
            notes,
        } = request;

        debug!(stage = %IngestionStage::Resolving, identifier = %dressing_identifier, "entering stage");
        let dressing = self
            .resolver
            .resolve(&dressing_identifier)
            .await
            .inspect_err(failed_at(IngestionStage::Resolving))?;

        debug!(stage = %IngestionStage::ColorDetermination, dressing = %dressing.code, "entering stage");
        let determined = self
            .determine_color(image, manual_color)
            .await
            .inspect_err(failed_at(IngestionStage::ColorDetermination))?;

        debug!(stage = %IngestionStage::Validating, dressing = %dressing.code, "entering stage");
        let (color, rgb) = validate(determined).inspect_err(failed_at(IngestionStage::Validating))?;

        debug!(stage = %IngestionStage::Mapping, dressing = %dressing.code, color = %color, "entering stage");
        let classification =
            Classification::from_color(color).inspect_err(failed_at(IngestionStage::Mapping))?;

        let observation = Observation::new(
            &dressing,
            recorder,
            classification,
            rgb,
            image_ref,
            notes.unwrap_or_default(),
        );
        self.persist(observation).await
    }

    /// Write a fully classified observation.
    ///
    /// This is the retry entry point after a `Persistence` failure: pass the
    /// observation from [`ScanError::pending_observation`] back in. The
    /// classification is not recomputed.
    pub async fn persist(&self, observation: Observation) -> Result<IngestionSummary> {
        debug!(stage = %IngestionStage::Persisting, dressing = %observation.dressing_code(), "entering stage");
        match self.store.create_observation(&observation).await {
            Ok(record_id) => {
                info!(
                    stage = %IngestionStage::Done,
                    record = %record_id,
                    dressing = %observation.dressing_code(),
                    color = %observation.color(),
                    ph = %observation.ph(),
                    level = %observation.level(),
                    "observation recorded"
                );
                Ok(IngestionSummary::new(record_id, &observation))
            }
            Err(err) => {
                failed_at(IngestionStage::Persisting)(&err);
                Err(err.with_pending(observation))
            }
        }
    }

    async fn determine_color(
        &self,
        image: Option<Vec<u8>>,
        manual_color: Option<String>,
    ) -> Result<DeterminedColor> {
        let manual_color = manual_color.filter(|color| !color.is_empty());

        let Some(bytes) = image else {
            return manual_color
                .map(DeterminedColor::Manual)
                .ok_or(ScanError::MissingInput);
        };

        match self.sample(bytes).await {
            Ok(rgb) => {
                let color = classify(rgb);
                debug!(rgb = %rgb.hex(), color = %color, "classified image");
                Ok(DeterminedColor::Sampled { rgb, color })
            }
            Err(err) => match manual_color {
                Some(manual) => {
                    warn!(error = %err, manual = %manual, "image sampling failed, using manual color");
                    Ok(DeterminedColor::Manual(manual))
                }
                None => Err(err.into_image_processing()),
            },
        }
    }

    /// Decode and average on the blocking pool so request tasks are not stalled
    async fn sample(&self, bytes: Vec<u8>) -> Result<RgbSample> {
        let config = Arc::clone(&self.sampler);
        tokio::task::spawn_blocking(move || sample_image(&bytes, &config))
            .await
            .map_err(|e| ScanError::image_decode("image sampling task failed", e))?
    }
}

fn validate(determined: DeterminedColor) -> Result<(IndicatorColor, Option<RgbSample>)> {
    match determined {
        DeterminedColor::Sampled { rgb, color } => Ok((color, Some(rgb))),
        DeterminedColor::Manual(name) => Ok((name.parse()?, None)),
    }
}

fn failed_at(stage: IngestionStage) -> impl Fn(&ScanError) {
    move |err| warn!(stage = %stage, error = %err, "ingestion failed")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dressing::{DressingRecord, PatientRecord};
    use crate::store::MemoryStore;

    async fn setup() -> (Arc<MemoryStore>, Ingestor) {
        let store = Arc::new(MemoryStore::new());
        let patient = PatientRecord::new("PAT-001", "Test Patient");
        store
            .insert_dressing(DressingRecord::new("BANDAGE-001", patient.key, "ankle"))
            .await
            .unwrap();
        store.insert_patient(patient).await;
        let ingestor = Ingestor::new(store.clone());
        (store, ingestor)
    }

    #[test]
    fn test_validate_manual_color() {
        let (color, rgb) = validate(DeterminedColor::Manual("Blue".into())).unwrap();
        assert_eq!(color, IndicatorColor::Blue);
        assert!(rgb.is_none());

        let err = validate(DeterminedColor::Manual("Magenta".into())).unwrap_err();
        assert!(matches!(err, ScanError::InvalidColor { .. }));
    }

    #[tokio::test]
    async fn test_manual_color_ingestion() {
        let (store, ingestor) = setup().await;
        let request = IngestionRequest::new("BANDAGE-001", RecordKey::new()).with_manual_color("Yellow");

        let summary = ingestor.ingest(request).await.unwrap();
        assert_eq!(summary.dressing_code, "BANDAGE-001");
        assert_eq!(summary.color, IndicatorColor::Yellow);
        assert_eq!(summary.ph_value, 6.0);
        assert_eq!(summary.infection_level, InfectionLevel::Healthy);
        assert_eq!(store.observation_count().await, 1);
    }

    #[tokio::test]
    async fn test_empty_manual_color_is_missing_input() {
        let (store, ingestor) = setup().await;
        let request = IngestionRequest::new("BANDAGE-001", RecordKey::new()).with_manual_color("");

        let err = ingestor.ingest(request).await.unwrap_err();
        assert!(matches!(err, ScanError::MissingInput));
        assert_eq!(store.observation_count().await, 0);
    }

    #[tokio::test]
    async fn test_unknown_dressing_checked_before_input() {
        let (_, ingestor) = setup().await;
        let request = IngestionRequest::new("BANDAGE-404", RecordKey::new());

        let err = ingestor.ingest(request).await.unwrap_err();
        assert!(matches!(err, ScanError::DressingNotFound { .. }));
    }

    #[test]
    fn test_stage_names() {
        assert_eq!(IngestionStage::ColorDetermination.to_string(), "color_determination");
        assert_eq!(IngestionStage::Done.to_string(), "done");
    }
}
