//! Immutable scan observations

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::color::{IndicatorColor, RgbSample};
use crate::dressing::DressingRecord;
use crate::risk::{Classification, InfectionLevel, PhEstimate};
use crate::store::RecordKey;

/// One scan event of a dressing.
///
/// The patient is taken from the dressing, never from the caller, and the
/// color/pH/level triple comes from a single [`Classification`]. There are no
/// setters: history is append-only.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Observation {
    dressing: RecordKey,
    dressing_code: String,
    patient: RecordKey,
    recorder: RecordKey,
    image_ref: Option<String>,
    #[serde(flatten)]
    classification: Classification,
    /// Zeroed when the color was entered manually
    rgb: RgbSample,
    notes: String,
    recorded_at: DateTime<Utc>,
}

impl Observation {
    pub fn new(
        dressing: &DressingRecord,
        recorder: RecordKey,
        classification: Classification,
        rgb: Option<RgbSample>,
        image_ref: Option<String>,
        notes: impl Into<String>,
    ) -> Self {
        Self {
            dressing: dressing.key,
            dressing_code: dressing.code.clone(),
            patient: dressing.patient,
            recorder,
            image_ref,
            classification,
            rgb: rgb.unwrap_or_default(),
            notes: notes.into(),
            recorded_at: Utc::now(),
        }
    }

    pub fn dressing(&self) -> RecordKey {
        self.dressing
    }

    pub fn dressing_code(&self) -> &str {
        &self.dressing_code
    }

    pub fn patient(&self) -> RecordKey {
        self.patient
    }

    pub fn recorder(&self) -> RecordKey {
        self.recorder
    }

    pub fn image_ref(&self) -> Option<&str> {
        self.image_ref.as_deref()
    }

    pub fn classification(&self) -> Classification {
        self.classification
    }

    pub fn color(&self) -> IndicatorColor {
        self.classification.color()
    }

    pub fn ph(&self) -> PhEstimate {
        self.classification.ph()
    }

    pub fn level(&self) -> InfectionLevel {
        self.classification.level()
    }

    pub fn rgb(&self) -> RgbSample {
        self.rgb
    }

    pub fn notes(&self) -> &str {
        &self.notes
    }

    pub fn recorded_at(&self) -> DateTime<Utc> {
        self.recorded_at
    }
}
