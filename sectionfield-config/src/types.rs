//! Field and section value objects.
//!
//! Both serialize to/from YAML via serde. On disk each document is wrapped
//! in a single key (`field:` or `section:`) so a file says what it holds.
//! Values are built once from their declarative form and treated as
//! read-only afterwards.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{ConfigError, Result};

/// Presentation options for a field, keyed by form context.
///
/// `all` applies to every form, `create` and `update` only to forms for new
/// or existing entries. The contents are opaque to the registry; field types
/// read the keys they understand.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct FormOptions {
    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub all: Value,
    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub create: Value,
    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub update: Value,
}

impl FormOptions {
    /// Look up a key in the `all` options. Returns `None` when `all` is not a map.
    pub fn all_option(&self, key: &str) -> Option<&Value> {
        self.all.get(key)
    }

    fn is_empty(&self) -> bool {
        self.all.is_null() && self.create.is_null() && self.update.is_null()
    }
}

/// A field configuration: one named, typed attribute of a section.
///
/// `kind` and `to` are only meaningful for relationship fields; the raw
/// `kind` string is kept so an unrecognized value can be reported by the
/// field type that interprets it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FieldConfig {
    pub name: String,
    pub handle: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variant: Option<String>,
    #[serde(default, skip_serializing_if = "FormOptions::is_empty")]
    pub form: FormOptions,
}

#[derive(Serialize, Deserialize)]
struct FieldDocument {
    field: FieldConfig,
}

impl FieldConfig {
    pub fn new(name: impl Into<String>, handle: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            handle: handle.into(),
            kind: None,
            to: None,
            variant: None,
            form: FormOptions::default(),
        }
    }

    /// Set the relationship kind (`one-to-many`, `many-to-one`, `many-to-many`).
    pub fn with_kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = Some(kind.into());
        self
    }

    /// Set the handle of the section this field points to.
    pub fn with_to(mut self, to: impl Into<String>) -> Self {
        self.to = Some(to.into());
        self
    }

    pub fn with_variant(mut self, variant: impl Into<String>) -> Self {
        self.variant = Some(variant.into());
        self
    }

    pub fn with_form(mut self, form: FormOptions) -> Self {
        self.form = form;
        self
    }

    /// The `form.all.data` value, used by scalar field types as initial data.
    pub fn form_data(&self) -> Option<&Value> {
        self.form.all_option("data")
    }

    /// Parse a `field:` document and check its invariants.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let doc: FieldDocument = serde_yaml_ng::from_str(yaml)?;
        doc.field.validate()?;
        Ok(doc.field)
    }

    /// Serialize as a `field:` document.
    pub fn to_yaml(&self) -> Result<String> {
        let doc = FieldDocument {
            field: self.clone(),
        };
        Ok(serde_yaml_ng::to_string(&doc)?)
    }

    pub fn validate(&self) -> Result<()> {
        require_non_empty("field", "name", &self.name)?;
        require_non_empty("field", "handle", &self.handle)?;
        if let Some(to) = &self.to {
            require_non_empty("field", "to", to)?;
        }
        Ok(())
    }
}

/// A section configuration: a content type and the fields it is made of.
///
/// `default` names the field whose value labels an entry of this section
/// wherever entries are listed for selection.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SectionConfig {
    pub name: String,
    pub handle: String,
    pub fields: Vec<String>,
    pub default: String,
    pub namespace: String,
}

#[derive(Serialize, Deserialize)]
struct SectionDocument {
    section: SectionConfig,
}

impl SectionConfig {
    pub fn new(
        name: impl Into<String>,
        handle: impl Into<String>,
        default: impl Into<String>,
        namespace: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            handle: handle.into(),
            fields: Vec::new(),
            default: default.into(),
            namespace: namespace.into(),
        }
    }

    pub fn with_fields<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.fields = fields.into_iter().map(Into::into).collect();
        self
    }

    /// Parse a `section:` document and check its invariants.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let doc: SectionDocument = serde_yaml_ng::from_str(yaml)?;
        doc.section.validate()?;
        Ok(doc.section)
    }

    /// Serialize as a `section:` document.
    pub fn to_yaml(&self) -> Result<String> {
        let doc = SectionDocument {
            section: self.clone(),
        };
        Ok(serde_yaml_ng::to_string(&doc)?)
    }

    pub fn validate(&self) -> Result<()> {
        require_non_empty("section", "name", &self.name)?;
        require_non_empty("section", "handle", &self.handle)?;
        require_non_empty("section", "default", &self.default)?;
        Ok(())
    }
}

fn require_non_empty(what: &'static str, key: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ConfigError::InvalidConfig {
            what,
            message: format!("{key} must not be empty"),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn relationship_field_from_yaml() {
        let yaml = r#"
field:
  name: sexyname
  handle: lovehandles
  kind: many-to-one
  to: neptune
  variant: not the variant you are looking for
  form:
    all: [relations]
"#;
        let field = FieldConfig::from_yaml(yaml).unwrap();
        assert_eq!(field.handle, "lovehandles");
        assert_eq!(field.kind.as_deref(), Some("many-to-one"));
        assert_eq!(field.to.as_deref(), Some("neptune"));
        assert_eq!(
            field.variant.as_deref(),
            Some("not the variant you are looking for")
        );
        assert_eq!(field.form.all, json!(["relations"]));
        // `all` is a list here, not a map
        assert!(field.form_data().is_none());
    }

    #[test]
    fn scalar_field_form_data() {
        let yaml = r#"
field:
  name: published
  handle: publishDate
  form:
    all:
      data: "2015-12-25"
"#;
        let field = FieldConfig::from_yaml(yaml).unwrap();
        assert!(field.kind.is_none());
        assert!(field.to.is_none());
        assert_eq!(field.form_data(), Some(&json!("2015-12-25")));
    }

    #[test]
    fn field_missing_handle_is_rejected() {
        let yaml = "field:\n  name: nameless\n";
        assert!(matches!(
            FieldConfig::from_yaml(yaml),
            Err(ConfigError::Yaml(_))
        ));
    }

    #[test]
    fn field_empty_handle_is_rejected() {
        let yaml = "field:\n  name: blank\n  handle: ''\n";
        let err = FieldConfig::from_yaml(yaml).unwrap_err();
        assert!(err.to_string().contains("handle must not be empty"));
    }

    #[test]
    fn field_yaml_keeps_wrapper_and_skips_empty_form() {
        let field = FieldConfig::new("Moons", "moons")
            .with_kind("one-to-many")
            .with_to("moon");
        let yaml = field.to_yaml().unwrap();
        assert!(yaml.starts_with("field:"));
        assert!(!yaml.contains("form"));
        assert_eq!(FieldConfig::from_yaml(&yaml).unwrap(), field);
    }

    #[test]
    fn section_from_yaml() {
        let yaml = r#"
section:
  name: nameOfSection
  handle: handleOfSection
  fields: ['1', '2', '3']
  default: sexyPerDefault
  namespace: the space has no name
"#;
        let section = SectionConfig::from_yaml(yaml).unwrap();
        assert_eq!(section.handle, "handleOfSection");
        assert_eq!(section.fields, vec!["1", "2", "3"]);
        assert_eq!(section.default, "sexyPerDefault");
        assert_eq!(section.namespace, "the space has no name");
    }

    #[test]
    fn section_without_default_is_rejected() {
        let yaml = r#"
section:
  name: Planet
  handle: planet
  fields: []
  default: ""
  namespace: Solar
"#;
        let err = SectionConfig::from_yaml(yaml).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidConfig { what: "section", .. }));
    }
}
