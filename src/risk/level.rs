//! pH estimates and infection levels

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::ph::{SCALE_MAX, SCALE_MIN};
use crate::{Result, ScanError};

/// Estimated wound-bed pH, always finite and within [0, 14]
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct PhEstimate(pub(crate) f64);

impl PhEstimate {
    pub fn new(value: f64) -> Result<Self> {
        if value.is_finite() && (SCALE_MIN..=SCALE_MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(ScanError::OutOfRange { ph: value })
        }
    }

    pub fn value(&self) -> f64 {
        self.0
    }

    /// Value rounded to two decimal places, as reported to callers
    pub fn rounded(&self) -> f64 {
        (self.0 * 100.0).round() / 100.0
    }
}

impl TryFrom<f64> for PhEstimate {
    type Error = ScanError;

    fn try_from(value: f64) -> Result<Self> {
        Self::new(value)
    }
}

impl From<PhEstimate> for f64 {
    fn from(ph: PhEstimate) -> Self {
        ph.0
    }
}

impl fmt::Display for PhEstimate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

/// Clinical risk bucket, ordered by increasing severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum InfectionLevel {
    Healthy,
    MildRisk,
    MediumInfection,
    HighInfection,
}

impl InfectionLevel {
    pub const ALL: [InfectionLevel; 4] = [
        InfectionLevel::Healthy,
        InfectionLevel::MildRisk,
        InfectionLevel::MediumInfection,
        InfectionLevel::HighInfection,
    ];

    /// Label shown to clinical staff
    pub fn label(&self) -> &'static str {
        match self {
            InfectionLevel::Healthy => "Healthy",
            InfectionLevel::MildRisk => "Mild Risk",
            InfectionLevel::MediumInfection => "Medium Infection",
            InfectionLevel::HighInfection => "High Infection",
        }
    }

    /// Whether the level calls for clinical follow-up
    pub fn needs_attention(&self) -> bool {
        *self >= InfectionLevel::MediumInfection
    }
}

impl fmt::Display for InfectionLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
