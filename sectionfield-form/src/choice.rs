//! Choice lists: label → entry mappings offered to selection widgets.
//!
//! Labels come from each entry's default field and are not required to be
//! unique. When two entries share a label the later one wins, and the label
//! keeps the position of its first occurrence. Callers that need every entry
//! to be selectable must design their sections so labels are unique.

use indexmap::IndexMap;
use serde::ser::{Serialize, SerializeMap, Serializer};
use tracing::trace;

use crate::entry::Entry;

/// An ordered label → choice mapping. A choice of `None` is the placeholder.
#[derive(Debug, Clone, PartialEq)]
pub struct ChoiceList<E> {
    pairs: Vec<(String, Option<E>)>,
    choices: IndexMap<String, Option<E>>,
}

impl<E: Clone> ChoiceList<E> {
    pub fn new() -> Self {
        Self {
            pairs: Vec::new(),
            choices: IndexMap::new(),
        }
    }

    /// Label every entry with its value for `label_field`.
    ///
    /// An entry without a value for the field gets the empty label. An empty
    /// input gives an empty list.
    pub fn from_entries<I>(entries: I, label_field: &str) -> Self
    where
        I: IntoIterator<Item = E>,
        E: Entry,
    {
        let mut list = Self::new();
        for entry in entries {
            let label = entry.field_value(label_field).unwrap_or_default();
            list.push(label, Some(entry));
        }
        trace!(
            label_field,
            inserted = list.pairs.len(),
            choices = list.len(),
            "built choice list"
        );
        list
    }

    /// Append a pair. An existing label is overwritten in place.
    pub fn push(&mut self, label: impl Into<String>, choice: Option<E>) {
        let label = label.into();
        self.choices.insert(label.clone(), choice.clone());
        self.pairs.push((label, choice));
    }

    /// A new list starting with `placeholder → None`, followed by this list's pairs.
    ///
    /// The placeholder is never overwritten: pairs carrying the placeholder
    /// label are dropped.
    pub fn with_placeholder(self, placeholder: &str) -> Self {
        let mut list = Self::new();
        list.push(placeholder, None);
        for (label, choice) in self.pairs {
            if label != placeholder {
                list.push(label, choice);
            }
        }
        list
    }
}

impl<E> ChoiceList<E> {
    /// Number of distinct labels.
    pub fn len(&self) -> usize {
        self.choices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.choices.is_empty()
    }

    /// The choice for a label. `Some(None)` is the placeholder.
    pub fn get(&self, label: &str) -> Option<Option<&E>> {
        self.choices.get(label).map(Option::as_ref)
    }

    pub fn contains(&self, label: &str) -> bool {
        self.choices.contains_key(label)
    }

    /// Distinct labels in display order.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.choices.keys().map(String::as_str)
    }

    /// (label, choice) in display order, after collisions are resolved.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&E>)> {
        self.choices
            .iter()
            .map(|(label, choice)| (label.as_str(), choice.as_ref()))
    }

    /// Entries reachable through the list, i.e. all non-placeholder choices.
    pub fn entries(&self) -> impl Iterator<Item = &E> {
        self.choices.values().filter_map(Option::as_ref)
    }

    /// Every pair in insertion order, including those shadowed by a later label.
    pub fn pairs(&self) -> &[(String, Option<E>)] {
        &self.pairs
    }
}

impl<E: Clone> Default for ChoiceList<E> {
    fn default() -> Self {
        Self::new()
    }
}

/// Serializes as an ordered map; the placeholder is `null`.
impl<E: Serialize> Serialize for ChoiceList<E> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.choices.len()))?;
        for (label, choice) in &self.choices {
            map.serialize_entry(label, choice)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn moon(title: &str, id: u32) -> Value {
        json!({"title": title, "id": id})
    }

    #[test]
    fn labels_entries_in_order() {
        let list = ChoiceList::from_entries(vec![moon("Io", 1), moon("Europa", 2)], "title");
        assert_eq!(list.len(), 2);
        assert_eq!(list.labels().collect::<Vec<_>>(), vec!["Io", "Europa"]);
        assert_eq!(list.get("Europa"), Some(Some(&moon("Europa", 2))));
        assert_eq!(list.get("Ganymede"), None);
    }

    #[test]
    fn empty_input_gives_empty_list() {
        let list = ChoiceList::<Value>::from_entries(Vec::new(), "title");
        assert!(list.is_empty());
        assert_eq!(list.entries().count(), 0);
    }

    #[test]
    fn duplicate_label_last_write_wins_in_first_position() {
        let list = ChoiceList::from_entries(
            vec![moon("Io", 1), moon("Europa", 2), moon("Io", 3)],
            "title",
        );

        // collisions reduce the count
        assert_eq!(list.len(), 2);
        assert_eq!(list.pairs().len(), 3);
        assert_eq!(list.labels().collect::<Vec<_>>(), vec!["Io", "Europa"]);
        assert_eq!(list.get("Io"), Some(Some(&moon("Io", 3))));
        assert!(!list.entries().any(|e| e["id"] == 1));
    }

    #[test]
    fn missing_label_field_gives_empty_label() {
        let list = ChoiceList::from_entries(vec![json!({"name": "Titan"})], "title");
        assert_eq!(list.labels().collect::<Vec<_>>(), vec![""]);
    }

    #[test]
    fn placeholder_comes_first_and_maps_to_none() {
        let list = ChoiceList::from_entries(vec![moon("Io", 1)], "title").with_placeholder("...");
        assert_eq!(list.labels().collect::<Vec<_>>(), vec!["...", "Io"]);
        assert_eq!(list.get("..."), Some(None));
        assert_eq!(list.entries().count(), 1);
    }

    #[test]
    fn entry_labelled_like_placeholder_is_dropped() {
        let list = ChoiceList::from_entries(vec![moon("...", 7), moon("Io", 1)], "title")
            .with_placeholder("...");
        assert_eq!(list.len(), 2);
        assert_eq!(list.get("..."), Some(None));
        assert_eq!(list.labels().collect::<Vec<_>>(), vec!["...", "Io"]);
        assert_eq!(list.iter().filter(|(_, choice)| choice.is_none()).count(), 1);
    }

    #[test]
    fn serializes_as_ordered_map() {
        let list = ChoiceList::from_entries(vec![moon("Io", 1), moon("Callisto", 4)], "title")
            .with_placeholder("...");
        let json = serde_json::to_string(&list).unwrap();
        assert_eq!(
            json,
            r#"{"...":null,"Io":{"id":1,"title":"Io"},"Callisto":{"id":4,"title":"Callisto"}}"#
        );
    }
}
