//! Field descriptors and the form builder they are added to.

use chrono::NaiveDateTime;
use serde::Serialize;

use crate::choice::ChoiceList;
use crate::selection::Selection;

/// Kind of widget a descriptor asks the rendering layer for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Widget {
    /// Single or multi-select, see `FieldOptions::Choice::multiple`
    Choice,
    DateTime,
    Text,
}

/// A scalar widget's initial value.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ScalarValue {
    DateTime(NaiveDateTime),
    Text(String),
}

/// Widget options.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FieldOptions<E> {
    Choice {
        choices: ChoiceList<E>,
        data: Selection<E>,
        multiple: bool,
    },
    Scalar {
        data: Option<ScalarValue>,
    },
}

/// One form field: the widget name, its kind, and its options.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldDescriptor<E> {
    pub name: String,
    pub widget: Widget,
    pub options: FieldOptions<E>,
}

impl<E> FieldDescriptor<E> {
    pub fn choice(
        name: impl Into<String>,
        choices: ChoiceList<E>,
        data: Selection<E>,
        multiple: bool,
    ) -> Self {
        Self {
            name: name.into(),
            widget: Widget::Choice,
            options: FieldOptions::Choice {
                choices,
                data,
                multiple,
            },
        }
    }

    pub fn scalar(name: impl Into<String>, widget: Widget, data: Option<ScalarValue>) -> Self {
        Self {
            name: name.into(),
            widget,
            options: FieldOptions::Scalar { data },
        }
    }

    pub fn choices(&self) -> Option<&ChoiceList<E>> {
        match &self.options {
            FieldOptions::Choice { choices, .. } => Some(choices),
            FieldOptions::Scalar { .. } => None,
        }
    }

    pub fn selection(&self) -> Option<&Selection<E>> {
        match &self.options {
            FieldOptions::Choice { data, .. } => Some(data),
            FieldOptions::Scalar { .. } => None,
        }
    }

    pub fn scalar_data(&self) -> Option<&ScalarValue> {
        match &self.options {
            FieldOptions::Scalar { data } => data.as_ref(),
            FieldOptions::Choice { .. } => None,
        }
    }

    /// `false` for scalar widgets.
    pub fn is_multiple(&self) -> bool {
        matches!(self.options, FieldOptions::Choice { multiple: true, .. })
    }
}

/// Receives field descriptors from field types.
pub trait FormBuilder<E> {
    fn add(&mut self, descriptor: FieldDescriptor<E>);
}

/// A form as an ordered list of field descriptors.
///
/// Adding a descriptor whose name is already present replaces the earlier
/// one in place.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Form<E> {
    fields: Vec<FieldDescriptor<E>>,
}

impl<E> Form<E> {
    pub fn new() -> Self {
        Self { fields: Vec::new() }
    }

    pub fn get(&self, name: &str) -> Option<&FieldDescriptor<E>> {
        self.fields.iter().find(|f| f.name == name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|f| f.name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldDescriptor<E>> {
        self.fields.iter()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<E> Default for Form<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> FormBuilder<E> for Form<E> {
    fn add(&mut self, descriptor: FieldDescriptor<E>) {
        match self.fields.iter_mut().find(|f| f.name == descriptor.name) {
            Some(existing) => *existing = descriptor,
            None => self.fields.push(descriptor),
        }
    }
}
