//! Field types that populate editing forms
//!
//! Each field type turns one configured field into a form field descriptor.
//! Scalar types read their initial value from configuration; the
//! relationship type resolves the related section, lists its entries as
//! choices and selects the host entity's current value.
//!
//! ## Relationship fields
//!
//! ```text
//! Relationship::add_to_form
//!   ├── Cardinality::from_config      one-to-many | many-to-one | many-to-many
//!   ├── SectionResolver::read_by_handle(to)
//!   ├── EntryReader::read(criteria)
//!   ├── ChoiceList::from_entries      label = entry[section.default]
//!   ├── extract_selection(host)       RelationAccessors on the host type
//!   └── FormBuilder::add(descriptor)
//! ```
//!
//! Any error returns before the builder is touched.

pub mod cardinality;
pub mod choice;
pub mod datetime;
pub mod entry;
pub mod error;
pub mod field_type;
pub mod form;
pub mod host;
pub mod inflect;
pub mod relationship;
pub mod section;
pub mod selection;
pub mod text;

pub use cardinality::{Cardinality, Naming, ShapingPolicy};
pub use choice::ChoiceList;
pub use datetime::DateTimeField;
pub use entry::{Entry, EntryReader, ReadCriteria};
pub use error::{FieldTypeError, Result};
pub use field_type::FieldType;
pub use form::{FieldDescriptor, FieldOptions, Form, FormBuilder, ScalarValue, Widget};
pub use host::{HostEntity, RelationAccessor, RelationAccessors};
pub use relationship::Relationship;
pub use section::SectionResolver;
pub use selection::{extract_selection, Selection};
pub use text::TextInput;
