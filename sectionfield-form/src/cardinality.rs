//! Relationship cardinality and the form shaping policy it implies.

use std::fmt;
use std::str::FromStr;

use sectionfield_config::FieldConfig;

use crate::error::{FieldTypeError, Result};
use crate::inflect::{pluralize, singularize};

/// How a relationship's form field name is derived from its `to` handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Naming {
    Plural,
    Singular,
}

/// Shaping rules for one cardinality.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShapingPolicy {
    /// Multi-select widget, current selection is a list.
    pub multiple: bool,
    pub naming: Naming,
    /// Offer an empty choice mapped to null ahead of the entries.
    pub placeholder: bool,
}

/// The shape of a relationship between two sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cardinality {
    OneToMany,
    ManyToOne,
    ManyToMany,
}

impl Cardinality {
    pub const ALL: [Cardinality; 3] = [
        Cardinality::OneToMany,
        Cardinality::ManyToOne,
        Cardinality::ManyToMany,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Cardinality::OneToMany => "one-to-many",
            Cardinality::ManyToOne => "many-to-one",
            Cardinality::ManyToMany => "many-to-many",
        }
    }

    pub fn policy(self) -> ShapingPolicy {
        match self {
            Cardinality::OneToMany | Cardinality::ManyToMany => ShapingPolicy {
                multiple: true,
                naming: Naming::Plural,
                placeholder: false,
            },
            Cardinality::ManyToOne => ShapingPolicy {
                multiple: false,
                naming: Naming::Singular,
                placeholder: true,
            },
        }
    }

    pub fn is_multiple(self) -> bool {
        self.policy().multiple
    }

    /// Name of the relation on the host entity, also used as the form field name.
    pub fn relation_name(self, to: &str) -> String {
        match self.policy().naming {
            Naming::Plural => pluralize(to),
            Naming::Singular => singularize(to),
        }
    }

    /// Read the cardinality of a relationship field. An absent kind is unsupported too.
    pub fn from_config(config: &FieldConfig) -> Result<Self> {
        let kind = config.kind.as_deref().unwrap_or_default();
        kind.parse().map_err(|_| FieldTypeError::UnsupportedCardinality {
            field: config.handle.clone(),
            kind: kind.to_string(),
        })
    }
}

impl FromStr for Cardinality {
    type Err = FieldTypeError;

    fn from_str(kind: &str) -> Result<Self> {
        Cardinality::ALL
            .into_iter()
            .find(|c| c.as_str() == kind)
            .ok_or_else(|| FieldTypeError::UnsupportedCardinality {
                field: String::new(),
                kind: kind.to_string(),
            })
    }
}

impl fmt::Display for Cardinality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
