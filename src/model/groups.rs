use serde::ser::{Serialize, SerializeMap, Serializer};
use std::collections::HashMap;

/// Insertion-ordered mapping from a string key to an ordered list of strings.
///
/// Keys iterate in the order they were first seen and each key's values keep
/// the order they were appended in. This is the shape of the element index
/// and of both bond groupings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Groups {
    keys: Vec<String>,
    members: HashMap<String, Vec<String>>,
}

impl Groups {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `value` to the group for `key`, creating the group on first use.
    pub fn push(&mut self, key: &str, value: impl Into<String>) {
        match self.members.get_mut(key) {
            Some(values) => values.push(value.into()),
            None => {
                self.keys.push(key.to_string());
                self.members.insert(key.to_string(), vec![value.into()]);
            }
        }
    }

    /// Removes the first occurrence of `value` from the group for `key`.
    ///
    /// A group left empty is dropped entirely. Returns `true` if a value was
    /// removed.
    pub fn remove_value(&mut self, key: &str, value: &str) -> bool {
        let Some(values) = self.members.get_mut(key) else {
            return false;
        };
        let Some(pos) = values.iter().position(|v| v == value) else {
            return false;
        };
        values.remove(pos);

        if values.is_empty() {
            self.members.remove(key);
            self.keys.retain(|k| k != key);
        }
        true
    }

    pub fn get(&self, key: &str) -> Option<&[String]> {
        self.members.get(key).map(Vec::as_slice)
    }

    #[inline]
    pub fn contains_key(&self, key: &str) -> bool {
        self.members.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.keys.iter().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.keys
            .iter()
            .map(|k| (k.as_str(), self.members[k].as_slice()))
    }

    /// Iterates every value of every group, in key order then value order.
    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.iter()
            .flat_map(|(_, values)| values.iter().map(String::as_str))
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

impl std::ops::Index<&str> for Groups {
    type Output = [String];

    fn index(&self, key: &str) -> &Self::Output {
        match self.get(key) {
            Some(values) => values,
            None => panic!("no group for key '{key}'"),
        }
    }
}

impl Serialize for Groups {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (key, values) in self.iter() {
            map.serialize_entry(key, values)?;
        }
        map.end()
    }
}
