//! Patient and dressing records as returned by the store

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::store::RecordKey;

/// Patient owning one or more dressings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatientRecord {
    pub key: RecordKey,
    /// Human-readable patient code (e.g., "PAT-001")
    pub code: String,
    pub name: String,
}

impl PatientRecord {
    pub fn new(code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            key: RecordKey::new(),
            code: code.into(),
            name: name.into(),
        }
    }
}

/// Physical dressing bearing an indicator pad
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DressingRecord {
    pub key: RecordKey,
    /// Code printed on the dressing (e.g., "BANDAGE-001")
    pub code: String,
    pub patient: RecordKey,
    pub wound_location: String,
    pub applied_at: DateTime<Utc>,
    pub removed_at: Option<DateTime<Utc>>,
    pub active: bool,
}

impl DressingRecord {
    /// New active dressing applied now
    pub fn new(
        code: impl Into<String>,
        patient: RecordKey,
        wound_location: impl Into<String>,
    ) -> Self {
        Self {
            key: RecordKey::new(),
            code: code.into(),
            patient,
            wound_location: wound_location.into(),
            applied_at: Utc::now(),
            removed_at: None,
            active: true,
        }
    }
}
