//! # woundscan
//!
//! Converts a wound-dressing observation into a clinical risk classification.
//!
//! An observation is either a photograph of the dressing's colorimetric
//! indicator pad or a color picked by hand. The pipeline:
//! - Resolves the dressing from its printed code or record key
//! - Samples the photo to one representative RGB triple
//! - Classifies the triple into one of four indicator colors
//! - Maps the color to a pH estimate and an infection level
//! - Hands the finished observation to a storage collaborator
//!
//! ## Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use woundscan::{IngestionRequest, Ingestor, MemoryStore, RecordKey};
//!
//! # async fn run() -> woundscan::Result<()> {
//! let store = Arc::new(MemoryStore::new());
//! let ingestor = Ingestor::new(store);
//!
//! let request = IngestionRequest::new("BANDAGE-001", RecordKey::new())
//!     .with_manual_color("Green");
//! let summary = ingestor.ingest(request).await?;
//! println!("{} pH {:.2} -> {}", summary.color, summary.ph_value, summary.infection_level);
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod constants;
pub mod config;
pub mod color;
pub mod risk;
pub mod dressing;
pub mod store;
pub mod ingest;
pub mod history;

pub use error::{Result, ScanError};
pub use config::{SamplerConfig, ScanConfig};
pub use color::{classify, sample_image, IndicatorColor, RgbSample};
pub use risk::{
    color_name_to_ph, color_to_ph, ph_to_color, ph_to_level, Classification, InfectionLevel,
    PhEstimate,
};
pub use dressing::{DressingRecord, DressingResolver, PatientRecord};
pub use store::{MemoryStore, RecordKey, ScanStore, StoredObservation};
pub use ingest::{IngestionRequest, IngestionStage, IngestionSummary, Ingestor, Observation};
pub use history::PatientHistory;
