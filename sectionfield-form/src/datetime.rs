//! Date-time field type.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use sectionfield_config::{FieldConfig, SectionConfig};
use serde_json::Value;

use crate::entry::EntryReader;
use crate::error::{FieldTypeError, Result};
use crate::field_type::FieldType;
use crate::form::{FieldDescriptor, FormBuilder, ScalarValue, Widget};
use crate::section::SectionResolver;

/// Renders a date-time widget named after the field handle, with
/// `form.all.data` as initial value.
#[derive(Debug, Clone, PartialEq)]
pub struct DateTimeField {
    config: FieldConfig,
}

impl DateTimeField {
    pub fn new(config: FieldConfig) -> Self {
        Self { config }
    }

    /// The configured initial value. A date without a time is midnight.
    pub fn initial_value(&self) -> Result<Option<NaiveDateTime>> {
        match self.config.form_data() {
            None | Some(Value::Null) => Ok(None),
            Some(Value::String(raw)) => parse_date_time(raw)
                .map(Some)
                .ok_or_else(|| self.invalid(raw)),
            Some(other) => Err(self.invalid(&other.to_string())),
        }
    }

    fn invalid(&self, value: &str) -> FieldTypeError {
        FieldTypeError::InvalidFormData {
            field: self.config.handle.clone(),
            value: value.to_string(),
        }
    }
}

impl<H, E> FieldType<H, E> for DateTimeField {
    fn config(&self) -> &FieldConfig {
        &self.config
    }

    fn add_to_form<'b>(
        &self,
        builder: &'b mut dyn FormBuilder<E>,
        _host_section: &SectionConfig,
        _host: &H,
        _sections: &dyn SectionResolver,
        _reader: &dyn EntryReader<E>,
    ) -> Result<&'b mut dyn FormBuilder<E>> {
        let data = self.initial_value()?.map(ScalarValue::DateTime);
        builder.add(FieldDescriptor::scalar(
            self.config.handle.clone(),
            Widget::DateTime,
            data,
        ));
        Ok(builder)
    }
}

/// Parse `YYYY-MM-DD`, `YYYY-MM-DD HH:MM:SS`, `YYYY-MM-DDTHH:MM:SS` or RFC 3339.
///
/// RFC 3339 values are converted to UTC before the offset is dropped.
pub fn parse_date_time(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return date.and_hms_opt(0, 0, 0);
    }
    for format in ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"] {
        if let Ok(date_time) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(date_time);
        }
    }
    DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(|date_time| date_time.naive_utc())
}
