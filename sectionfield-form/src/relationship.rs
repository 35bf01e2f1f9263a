//! Relationship field type.
//!
//! Populates a choice widget for a one-to-many, many-to-one or many-to-many
//! relationship. The target section is resolved, its entries are read and
//! labelled by the section's default field, and the host's current value is
//! selected. The cardinality decides the widget name, whether it is a
//! multi-select, and whether a placeholder choice is offered.

use sectionfield_config::{FieldConfig, SectionConfig, Settings, DEFAULT_PLACEHOLDER_LABEL};
use tracing::debug;

use crate::cardinality::Cardinality;
use crate::choice::ChoiceList;
use crate::entry::{Entry, EntryReader, ReadCriteria};
use crate::error::{FieldTypeError, Result};
use crate::field_type::FieldType;
use crate::form::{FieldDescriptor, FormBuilder};
use crate::host::HostEntity;
use crate::section::SectionResolver;
use crate::selection::extract_selection;

#[derive(Debug, Clone, PartialEq)]
pub struct Relationship {
    config: FieldConfig,
    placeholder_label: String,
}

impl Relationship {
    pub fn new(config: FieldConfig) -> Self {
        Self {
            config,
            placeholder_label: DEFAULT_PLACEHOLDER_LABEL.to_string(),
        }
    }

    /// Take the placeholder label from runtime settings.
    pub fn from_settings(config: FieldConfig, settings: &Settings) -> Self {
        Self::new(config).with_placeholder(settings.placeholder_label.clone())
    }

    pub fn with_placeholder(mut self, label: impl Into<String>) -> Self {
        self.placeholder_label = label.into();
        self
    }

    pub fn placeholder_label(&self) -> &str {
        &self.placeholder_label
    }

    pub fn cardinality(&self) -> Result<Cardinality> {
        Cardinality::from_config(&self.config)
    }

    /// Handle of the related section.
    pub fn target(&self) -> Result<&str> {
        self.config
            .to
            .as_deref()
            .ok_or_else(|| FieldTypeError::MissingTarget {
                field: self.config.handle.clone(),
            })
    }

    /// Form field name and host relation name.
    pub fn relation_name(&self) -> Result<String> {
        Ok(self.cardinality()?.relation_name(self.target()?))
    }
}

impl<H, E> FieldType<H, E> for Relationship
where
    H: HostEntity<E>,
    E: Entry + Clone,
{
    fn config(&self) -> &FieldConfig {
        &self.config
    }

    fn add_to_form<'b>(
        &self,
        builder: &'b mut dyn FormBuilder<E>,
        _host_section: &SectionConfig,
        host: &H,
        sections: &dyn SectionResolver,
        reader: &dyn EntryReader<E>,
    ) -> Result<&'b mut dyn FormBuilder<E>> {
        let cardinality = self.cardinality()?;
        let to = self.target()?;

        let target = sections.read_by_handle(to)?;
        let entries = reader.read(&ReadCriteria::for_section(target));
        let choices = ChoiceList::from_entries(entries, &target.default);

        let relation = cardinality.relation_name(to);
        let selection = extract_selection(host, &relation, cardinality)?;

        let policy = cardinality.policy();
        let choices = if policy.placeholder {
            choices.with_placeholder(&self.placeholder_label)
        } else {
            choices
        };

        debug!(
            field = %self.config.handle,
            relation = %relation,
            %cardinality,
            choices = choices.len(),
            "relationship field added to form"
        );

        builder.add(FieldDescriptor::choice(
            relation,
            choices,
            selection,
            policy.multiple,
        ));
        Ok(builder)
    }
}
