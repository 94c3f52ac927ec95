//! Identifier-form-agnostic dressing lookup
//!
//! Staff enter the printed code while some integrations pass the internal
//! record key. The code is tried first; only a miss on a string that parses as
//! a record key triggers the second lookup.

use std::sync::Arc;

use tracing::debug;

use crate::dressing::DressingRecord;
use crate::store::{RecordKey, ScanStore};
use crate::{Result, ScanError};

/// Resolves a caller-supplied identifier to its dressing record
#[derive(Clone)]
pub struct DressingResolver {
    store: Arc<dyn ScanStore>,
}

impl DressingResolver {
    pub fn new(store: Arc<dyn ScanStore>) -> Self {
        Self { store }
    }

    /// Resolve `identifier` as a dressing code, then as a record key.
    ///
    /// # Errors
    ///
    /// - `ScanError::DressingNotFound` carrying `identifier` when both lookups miss
    /// - `ScanError::Persistence` when the store itself fails
    pub async fn resolve(&self, identifier: &str) -> Result<DressingRecord> {
        if let Some(dressing) = self.store.find_dressing_by_code(identifier).await? {
            debug!(identifier, "resolved dressing by code");
            return Ok(dressing);
        }

        if let Some(key) = RecordKey::parse(identifier) {
            if let Some(dressing) = self.store.find_dressing_by_key(key).await? {
                debug!(identifier, code = %dressing.code, "resolved dressing by record key");
                return Ok(dressing);
            }
        }

        Err(ScanError::DressingNotFound {
            identifier: identifier.to_string(),
        })
    }
}
