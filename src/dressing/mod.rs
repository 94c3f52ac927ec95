//! Dressing and patient records and identifier resolution

pub mod record;
pub mod resolver;

pub use record::{DressingRecord, PatientRecord};
pub use resolver::DressingResolver;
