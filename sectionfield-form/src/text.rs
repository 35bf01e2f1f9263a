//! Single-line text field type.

use sectionfield_config::{FieldConfig, SectionConfig};
use serde_json::Value;

use crate::entry::EntryReader;
use crate::error::Result;
use crate::field_type::FieldType;
use crate::form::{FieldDescriptor, FormBuilder, ScalarValue, Widget};
use crate::section::SectionResolver;

#[derive(Debug, Clone, PartialEq)]
pub struct TextInput {
    config: FieldConfig,
}

impl TextInput {
    pub fn new(config: FieldConfig) -> Self {
        Self { config }
    }

    /// `form.all.data` as text; numbers and booleans in their JSON form.
    pub fn initial_value(&self) -> Option<String> {
        match self.config.form_data()? {
            Value::Null => None,
            Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }
}

impl<H, E> FieldType<H, E> for TextInput {
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
        builder.add(FieldDescriptor::scalar(
            self.config.handle.clone(),
            Widget::Text,
            self.initial_value().map(ScalarValue::Text),
        ));
        Ok(builder)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entry::ReadCriteria;
    use crate::form::Form;
    use sectionfield_config::FormOptions;
    use serde_json::json;
    use std::collections::HashMap;

    fn text_with(all: Value) -> TextInput {
        TextInput::new(FieldConfig::new("Title", "title").with_form(FormOptions {
            all,
            ..FormOptions::default()
        }))
    }

    #[test]
    fn adds_to_form() {
        let field = text_with(json!({"data": "Hello, Io"}));
        let sections: HashMap<String, SectionConfig> = HashMap::new();
        let reader = |_: &ReadCriteria| Vec::<Value>::new();
        let mut form: Form<Value> = Form::new();

        field
            .add_to_form(
                &mut form,
                &SectionConfig::new("Post", "post", "title", "Blog"),
                &(),
                &sections,
                &reader,
            )
            .unwrap();

        let descriptor = form.get("title").unwrap();
        assert_eq!(descriptor.widget, Widget::Text);
        assert_eq!(
            descriptor.scalar_data(),
            Some(&ScalarValue::Text("Hello, Io".into()))
        );
        assert!(!descriptor.is_multiple());
    }

    #[test]
    fn initial_value_conversions() {
        assert_eq!(text_with(json!({"data": 42})).initial_value(), Some("42".into()));
        assert_eq!(text_with(json!({"data": null})).initial_value(), None);
        assert_eq!(text_with(json!(["relations"])).initial_value(), None);
        assert_eq!(text_with(Value::Null).initial_value(), None);
    }
}
