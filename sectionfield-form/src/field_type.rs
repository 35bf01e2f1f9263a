//! The contract every field type implements.

use sectionfield_config::{FieldConfig, SectionConfig};

use crate::entry::EntryReader;
use crate::error::Result;
use crate::form::FormBuilder;
use crate::section::SectionResolver;

/// A field type renders one configured field into a form.
///
/// `H` is the host entity being edited, `E` the entry type related entities
/// are represented as. Field types that do not touch relations ignore the
/// host, the resolver and the reader.
pub trait FieldType<H, E> {
    /// The configuration this field type was built with.
    fn config(&self) -> &FieldConfig;

    /// Add this field's descriptor to `builder` and hand the builder back.
    ///
    /// On error nothing has been added.
    fn add_to_form<'b>(
        &self,
        builder: &'b mut dyn FormBuilder<E>,
        host_section: &SectionConfig,
        host: &H,
        sections: &dyn SectionResolver,
        reader: &dyn EntryReader<E>,
    ) -> Result<&'b mut dyn FormBuilder<E>>;
}
