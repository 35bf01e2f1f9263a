//! Entries and the reader that supplies them.

use sectionfield_config::SectionConfig;
use serde_json::Value;

/// A content record of some section.
///
/// Form population only needs to read one field of an entry: the value of
/// its section's `default` field, used as the entry's label.
pub trait Entry {
    fn field_value(&self, handle: &str) -> Option<String>;
}

/// JSON objects are entries: strings are used as-is, other non-null values
/// in their JSON form.
impl Entry for Value {
    fn field_value(&self, handle: &str) -> Option<String> {
        match self.get(handle)? {
            Value::Null => None,
            Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }
}

/// What an `EntryReader` is asked to read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadCriteria {
    pub section: String,
    pub namespace: String,
}

impl ReadCriteria {
    /// All entries of a section.
    pub fn for_section(section: &SectionConfig) -> Self {
        Self {
            section: section.handle.clone(),
            namespace: section.namespace.clone(),
        }
    }
}

/// Reads candidate entries. May block on I/O; called at most once per form field.
pub trait EntryReader<E> {
    fn read(&self, criteria: &ReadCriteria) -> Vec<E>;
}

impl<E, F> EntryReader<E> for F
where
    F: Fn(&ReadCriteria) -> Vec<E>,
{
    fn read(&self, criteria: &ReadCriteria) -> Vec<E> {
        self(criteria)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn json_entry_field_values() {
        let entry = json!({"title": "Io", "order": 5, "moon": null});
        assert_eq!(entry.field_value("title"), Some("Io".into()));
        assert_eq!(entry.field_value("order"), Some("5".into()));
        assert_eq!(entry.field_value("moon"), None);
        assert_eq!(entry.field_value("missing"), None);
        assert_eq!(json!("scalar").field_value("title"), None);
    }

    #[test]
    fn criteria_for_section() {
        let section = SectionConfig::new("Moon", "moon", "title", "Solar");
        let criteria = ReadCriteria::for_section(&section);
        assert_eq!(criteria.section, "moon");
        assert_eq!(criteria.namespace, "Solar");
    }

    #[test]
    fn closures_are_readers() {
        let reader = |criteria: &ReadCriteria| vec![json!({"title": criteria.section.clone()})];
        let entries = reader.read(&ReadCriteria {
            section: "moon".into(),
            namespace: "Solar".into(),
        });
        assert_eq!(entries, vec![json!({"title": "moon"})]);
    }
}
