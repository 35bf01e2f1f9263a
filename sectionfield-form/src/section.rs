//! Resolving section handles to their configuration.

use std::collections::HashMap;

use sectionfield_config::{SectionConfig, SectionRegistry};

use crate::error::{FieldTypeError, Result};

/// Looks up a section by handle. May block on I/O.
pub trait SectionResolver {
    fn read_by_handle(&self, handle: &str) -> Result<&SectionConfig>;
}

impl SectionResolver for SectionRegistry {
    fn read_by_handle(&self, handle: &str) -> Result<&SectionConfig> {
        self.section(handle).ok_or_else(|| unknown(handle))
    }
}

impl SectionResolver for HashMap<String, SectionConfig> {
    fn read_by_handle(&self, handle: &str) -> Result<&SectionConfig> {
        self.get(handle).ok_or_else(|| unknown(handle))
    }
}

fn unknown(handle: &str) -> FieldTypeError {
    FieldTypeError::UnknownSection {
        handle: handle.to_string(),
    }
}
