//! Section and field configuration
//!
//! `sectionfield-config` owns the declarative side of the content model:
//! sections (content types) and the fields they are made of. It knows
//! nothing about forms; field types in `sectionfield-form` interpret the
//! configuration.
//!
//! # Architecture
//!
//! - **Value objects**: `FieldConfig` and `SectionConfig` are built once and read-only afterwards
//! - **YAML on disk**: one `.yaml` file per section and per field, wrapped in a `section:`/`field:` key
//! - **Registry**: `SectionRegistry` indexes both by handle
//! - **Settings**: `SettingsProvider` merges defaults, settings files and `SECTIONFIELD_` env vars

pub mod error;
pub mod registry;
pub mod settings;
pub mod types;

pub use error::{ConfigError, Result};
pub use registry::{SectionRegistry, SectionRegistryBuilder};
pub use settings::{Settings, SettingsProvider, DEFAULT_PLACEHOLDER_LABEL};
pub use types::{FieldConfig, FormOptions, SectionConfig};
