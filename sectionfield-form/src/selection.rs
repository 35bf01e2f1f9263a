//! Reading a host entity's current relationship value.

use serde::{Serialize, Serializer};

use crate::cardinality::Cardinality;
use crate::error::{FieldTypeError, Result};
use crate::host::{HostEntity, RelationAccessor};

/// The currently selected related entities.
#[derive(Debug, Clone, PartialEq)]
pub enum Selection<E> {
    /// Many-to-one: one entity or nothing.
    One(Option<E>),
    /// To-many: entities as the host stores them, duplicates included.
    Many(Vec<E>),
}

impl<E> Selection<E> {
    pub fn as_one(&self) -> Option<&E> {
        match self {
            Selection::One(one) => one.as_ref(),
            Selection::Many(_) => None,
        }
    }

    pub fn as_many(&self) -> &[E] {
        match self {
            Selection::One(_) => &[],
            Selection::Many(many) => many,
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            Selection::One(one) => one.is_none(),
            Selection::Many(many) => many.is_empty(),
        }
    }
}

/// A to-one selection serializes as the entity or `null`, a to-many one as a list.
impl<E: Serialize> Serialize for Selection<E> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            Selection::One(one) => one.serialize(serializer),
            Selection::Many(many) => many.serialize(serializer),
        }
    }
}

/// Read the host's current value for `relation`.
///
/// Fails with `MissingRelationAccessor` when the host declares no accessor
/// for the relation, or one whose shape disagrees with the cardinality.
pub fn extract_selection<H, E>(
    host: &H,
    relation: &str,
    cardinality: Cardinality,
) -> Result<Selection<E>>
where
    H: HostEntity<E>,
{
    let missing = || FieldTypeError::MissingRelationAccessor {
        relation: relation.to_string(),
    };
    let accessor = host.relations().get(relation).ok_or_else(missing)?;

    match (cardinality, accessor) {
        (Cardinality::OneToMany | Cardinality::ManyToMany, RelationAccessor::ToMany(get)) => {
            Ok(Selection::Many(get(host)))
        }
        (Cardinality::ManyToOne, RelationAccessor::ToOne(get)) => Ok(Selection::One(get(host))),
        (Cardinality::OneToMany | Cardinality::ManyToMany, RelationAccessor::ToOne(_))
        | (Cardinality::ManyToOne, RelationAccessor::ToMany(_)) => Err(missing()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::RelationAccessors;
    use std::sync::LazyLock;

    struct Planet {
        moons: Vec<&'static str>,
        star: Option<&'static str>,
    }

    static PLANET_RELATIONS: LazyLock<RelationAccessors<Planet, &'static str>> =
        LazyLock::new(|| {
            RelationAccessors::new()
                .to_many("moons", |p: &Planet| p.moons.clone())
                .to_one("star", |p: &Planet| p.star)
        });

    impl HostEntity<&'static str> for Planet {
        fn relations(&self) -> &RelationAccessors<Self, &'static str> {
            &PLANET_RELATIONS
        }
    }

    fn jupiter() -> Planet {
        Planet {
            moons: vec!["Io", "Europa", "Io"],
            star: Some("Sol"),
        }
    }

    #[test]
    fn to_many_keeps_order_and_duplicates() {
        let selection = extract_selection(&jupiter(), "moons", Cardinality::OneToMany).unwrap();
        assert_eq!(selection, Selection::Many(vec!["Io", "Europa", "Io"]));
        assert_eq!(selection.as_many().len(), 3);
        assert!(selection.as_one().is_none());
    }

    #[test]
    fn to_one_reads_single_value() {
        let selection = extract_selection(&jupiter(), "star", Cardinality::ManyToOne).unwrap();
        assert_eq!(selection.as_one(), Some(&"Sol"));

        let rogue = Planet {
            moons: Vec::new(),
            star: None,
        };
        let selection = extract_selection(&rogue, "star", Cardinality::ManyToOne).unwrap();
        assert_eq!(selection, Selection::One(None));
        assert!(selection.is_empty());
    }

    #[test]
    fn missing_accessor_is_fatal() {
        let err = extract_selection(&jupiter(), "rings", Cardinality::ManyToMany).unwrap_err();
        assert_eq!(
            err,
            FieldTypeError::MissingRelationAccessor {
                relation: "rings".into()
            }
        );
    }

    #[test]
    fn accessor_shape_must_match_cardinality() {
        assert!(extract_selection(&jupiter(), "star", Cardinality::ManyToMany).is_err());
        assert!(extract_selection(&jupiter(), "moons", Cardinality::ManyToOne).is_err());
    }

    #[test]
    fn serializes_by_shape() {
        assert_eq!(
            serde_json::to_string(&Selection::One(Some("Sol"))).unwrap(),
            r#""Sol""#
        );
        assert_eq!(
            serde_json::to_string(&Selection::<&str>::One(None)).unwrap(),
            "null"
        );
        assert_eq!(
            serde_json::to_string(&Selection::Many(vec!["Io", "Europa"])).unwrap(),
            r#"["Io","Europa"]"#
        );
    }
}
