//! Opaque references to arbitrary records.

use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};
use crate::value_object::ValueObject;

/// Points at one record of one table, e.g. the vendor-gateway transaction a
/// remote purchase originated from.
///
/// Holders treat it as opaque; only the component that created it interprets
/// the table name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableRecordReference {
    table_name: String,
    record_id: i32,
}

impl TableRecordReference {
    pub fn new(table_name: impl Into<String>, record_id: i32) -> DomainResult<Self> {
        let table_name = table_name.into();
        if table_name.trim().is_empty() {
            return Err(DomainError::validation("table name must not be blank"));
        }
        if record_id < 0 {
            return Err(DomainError::invalid_id("recordId", record_id));
        }
        Ok(Self {
            table_name,
            record_id,
        })
    }

    pub fn table_name(&self) -> &str {
        &self.table_name
    }

    pub fn record_id(&self) -> i32 {
        self.record_id
    }
}

impl core::fmt::Display for TableRecordReference {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}/{}", self.table_name, self.record_id)
    }
}

impl ValueObject for TableRecordReference {}
