//! Observation ingestion: from a submission to a stored, classified observation

pub mod observation;
pub mod orchestrator;

pub use observation::Observation;
pub use orchestrator::{IngestionRequest, IngestionStage, IngestionSummary, Ingestor};
