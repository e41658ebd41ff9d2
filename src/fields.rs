//! The [`FieldSet`]: named textual values extracted from a letter.
//!
//! Keys are normalised on insertion (trimmed, first character uppercased,
//! remainder unchanged) and stored in a `BTreeMap`, so two parses of the
//! same document iterate in the same order and serialise to the same JSON.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::warn;

/// Name of the field that carries the letter body.
pub const CONTENT_FIELD: &str = "Content";

/// Mapping from normalised field name to field value.
///
/// Inserting a name that already exists overwrites the previous value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldSet {
    fields: BTreeMap<String, String>,
}

impl FieldSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Baseline values used when a letter does not define them.
    pub fn baseline() -> Self {
        [
            ("Location", "Melbourne, VIC"),
            ("Recipient", "Hiring Manager"),
            ("Closing", "Warm Regards"),
        ]
        .into_iter()
        .collect()
    }

    /// Insert a field, normalising the name and trimming the value.
    ///
    /// Returns the previous value if the normalised name was already present.
    pub fn insert(&mut self, name: &str, value: &str) -> Option<String> {
        let name = normalize_name(name);
        let previous = self.fields.insert(name.clone(), value.trim().to_string());
        if previous.is_some() {
            warn!("Field '{}' defined more than once; keeping the later value", name);
        }
        previous
    }

    /// Replace the value of an existing field verbatim.
    ///
    /// Returns `false` (and does nothing) if the field is absent.
    pub fn replace(&mut self, name: &str, value: String) -> bool {
        match self.fields.get_mut(name) {
            Some(slot) => {
                *slot = value;
                true
            }
            None => false,
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterate over `(name, value)` pairs in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Layer `other` on top of `self`; fields in `other` win on conflict.
    pub fn merge(&mut self, other: FieldSet) {
        self.fields.extend(other.fields);
    }

    pub fn into_inner(self) -> BTreeMap<String, String> {
        self.fields
    }
}

impl<'a> FromIterator<(&'a str, &'a str)> for FieldSet {
    fn from_iter<I: IntoIterator<Item = (&'a str, &'a str)>>(iter: I) -> Self {
        let mut set = FieldSet::new();
        for (name, value) in iter {
            set.fields.insert(normalize_name(name), value.trim().to_string());
        }
        set
    }
}

impl IntoIterator for FieldSet {
    type Item = (String, String);
    type IntoIter = std::collections::btree_map::IntoIter<String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.into_iter()
    }
}

/// Normalise a raw field name: trim, then uppercase the first character.
///
/// The rest of the name is left as written, so `"phone Number"` becomes
/// `"Phone Number"` and `"eMail"` becomes `"EMail"`.
pub fn normalize_name(raw: &str) -> String {
    let trimmed = raw.trim();
    let mut chars = trimmed.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Build the final FieldSet: `defaults` first, then `parsed` on top.
pub fn merge_defaults(defaults: &FieldSet, parsed: FieldSet) -> FieldSet {
    let mut merged = defaults.clone();
    merged.merge(parsed);
    merged
}
