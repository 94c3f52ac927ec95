//! Error types for the woundscan library

use thiserror::Error;

use crate::ingest::Observation;
use crate::color::IndicatorColor;

/// Result type alias for woundscan operations
pub type Result<T> = std::result::Result<T, ScanError>;

/// Error types for scan ingestion and classification
#[derive(Error, Debug)]
pub enum ScanError {
    /// No dressing matched the identifier as a code or as a record key
    #[error("Dressing not found: {identifier}")]
    DressingNotFound { identifier: String },

    /// Dressing code already registered to another dressing
    #[error("Dressing code already in use: {code}")]
    DuplicateDressingCode { code: String },

    /// No patient record for the requested key
    #[error("Patient not found: {patient}")]
    PatientNotFound { patient: String },

    /// Neither an image nor a manual color was submitted
    #[error("Either an image or a manual color is required")]
    MissingInput,

    /// Image bytes could not be decoded or yielded no samplable pixels
    #[error("Failed to decode image: {message}")]
    ImageDecode {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Image was submitted, could not be sampled, and no manual color was given
    #[error("Failed to process image: {message}")]
    ImageProcessing {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Color value outside the indicator vocabulary
    #[error("Invalid color '{value}' (allowed: {})", IndicatorColor::allowed_names())]
    InvalidColor { value: String },

    /// pH value outside the range its consumer defines
    #[error("pH value {ph} is out of range")]
    OutOfRange { ph: f64 },

    /// Color name unknown to the risk mapper
    #[error("Unknown color: {value}")]
    UnknownColor { value: String },

    /// Persistence collaborator failed; the computed observation is kept for retry
    #[error("Persistence error: {message}")]
    Persistence {
        message: String,
        pending: Option<Box<Observation>>,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl ScanError {
    /// Create an image decode error with context
    pub fn image_decode<E>(message: impl Into<String>, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::ImageDecode {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a persistence error with context
    pub fn persistence<E>(message: impl Into<String>, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Persistence {
            message: message.into(),
            pending: None,
            source: Some(Box::new(source)),
        }
    }

    /// Attach the observation that failed to persist
    pub fn with_pending(self, observation: Observation) -> Self {
        match self {
            Self::Persistence { message, source, .. } => Self::Persistence {
                message,
                pending: Some(Box::new(observation)),
                source,
            },
            other => other,
        }
    }

    /// Turn a sampler failure into the terminal ingestion failure
    pub(crate) fn into_image_processing(self) -> Self {
        match self {
            Self::ImageDecode { message, source } => Self::ImageProcessing { message, source },
            other => other,
        }
    }

    /// Only a failed observation write may be retried, since it carries the
    /// observation to write again. A store failure while reading (dressing
    /// lookup, history) has nothing pending and is terminal like every other
    /// failure.
    pub fn is_retryable(&self) -> bool {
        matches!(self, ScanError::Persistence { pending: Some(_), .. })
    }

    /// Observation carried by a persistence failure, ready to be written again
    pub fn pending_observation(&self) -> Option<&Observation> {
        match self {
            ScanError::Persistence { pending, .. } => pending.as_deref(),
            _ => None,
        }
    }

    /// Take ownership of the observation carried by a persistence failure
    pub fn into_pending(self) -> Option<Observation> {
        match self {
            ScanError::Persistence { pending, .. } => pending.map(|observation| *observation),
            _ => None,
        }
    }

    /// Get user-friendly error description for application display
    pub fn user_message(&self) -> String {
        match self {
            ScanError::DressingNotFound { identifier } => {
                format!("No dressing found for '{}'. Please check the dressing code.", identifier)
            }
            ScanError::PatientNotFound { .. } => "Patient not found.".to_string(),
            ScanError::MissingInput => {
                "Either an image upload or a color selection is required.".to_string()
            }
            ScanError::ImageDecode { .. } | ScanError::ImageProcessing { .. } => {
                "Could not process the image. Please upload a clear JPEG, PNG or WebP photo, or select the color manually.".to_string()
            }
            ScanError::InvalidColor { .. } => format!(
                "Invalid color selected. Choose one of: {}.",
                IndicatorColor::allowed_names()
            ),
            ScanError::Persistence { .. } => {
                "The scan could not be saved. Please try again.".to_string()
            }
            _ => "Scan classification failed. Please try again.".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pending() -> Observation {
        use crate::dressing::DressingRecord;
        use crate::risk::Classification;
        use crate::store::RecordKey;

        let dressing = DressingRecord::new("BANDAGE-001", RecordKey::new(), "heel");
        let classification = Classification::from_color(IndicatorColor::Green).unwrap();
        Observation::new(&dressing, RecordKey::new(), classification, None, None, "")
    }

    #[test]
    fn test_only_failed_write_is_retryable() {
        let io = std::io::Error::new(std::io::ErrorKind::Other, "disk full");
        let err = ScanError::persistence("write failed", io).with_pending(pending());
        assert!(err.is_retryable());
        assert_eq!(err.pending_observation().map(|o| o.color()), Some(IndicatorColor::Green));

        let io = std::io::Error::new(std::io::ErrorKind::Other, "connection reset");
        let read_failure = ScanError::persistence("dressing lookup failed", io);
        assert!(!read_failure.is_retryable());
        assert!(read_failure.into_pending().is_none());

        assert!(!ScanError::MissingInput.is_retryable());
        assert!(!ScanError::DressingNotFound { identifier: "BANDAGE-999".into() }.is_retryable());
        assert!(!ScanError::OutOfRange { ph: 3.0 }.is_retryable());
    }

    #[test]
    fn test_invalid_color_names_allowed_set() {
        let err = ScanError::InvalidColor { value: "Purple".into() };
        let text = err.to_string();
        assert!(text.contains("Purple"));
        assert!(text.contains("Yellow, Green, Blue, DarkBlue"));
    }

    #[test]
    fn test_image_decode_becomes_processing() {
        let io = std::io::Error::new(std::io::ErrorKind::InvalidData, "bad header");
        let err = ScanError::image_decode("not an image", io).into_image_processing();
        assert!(matches!(err, ScanError::ImageProcessing { ref message, .. } if message == "not an image"));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_user_message_mentions_identifier() {
        let err = ScanError::DressingNotFound { identifier: "BANDAGE-999".into() };
        assert!(err.user_message().contains("BANDAGE-999"));
    }
}
