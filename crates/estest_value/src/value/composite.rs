//! Composite value payloads: objects, symbols and functions.

use rustc_hash::FxHashMap;
use std::fmt;

use super::Value;

// ObjectValue

/// Own enumerable string-keyed properties of a plain object.
///
/// Entries are stored in insertion order with an index for O(1) lookup.
/// [`ObjectValue::entries`] reports them in host order: array-index keys
/// ascending, then every other key in insertion order.
#[derive(Clone, Default)]
pub struct ObjectValue {
    entries: Vec<(String, Value)>,
    index: FxHashMap<String, usize>,
}

impl ObjectValue {
    /// Create an empty object.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a property, returning the previous value if the key existed.
    ///
    /// Overwriting keeps the key at its original insertion position.
    pub fn insert(&mut self, key: impl Into<String>, value: Value) -> Option<Value> {
        let key = key.into();
        if let Some(&slot) = self.index.get(&key) {
            return self
                .entries
                .get_mut(slot)
                .map(|entry| std::mem::replace(&mut entry.1, value));
        }
        self.index.insert(key.clone(), self.entries.len());
        self.entries.push((key, value));
        None
    }

    /// Look up a property by key.
    pub fn get(&self, key: &str) -> Option<&Value> {
        let slot = *self.index.get(key)?;
        self.entries.get(slot).map(|(_, value)| value)
    }

    /// Number of properties.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the object has no properties.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Properties in host enumeration order.
    pub fn entries(&self) -> Vec<(&str, &Value)> {
        let mut indexed: Vec<(u32, &str, &Value)> = Vec::new();
        let mut named: Vec<(&str, &Value)> = Vec::with_capacity(self.entries.len());
        for (key, value) in &self.entries {
            match array_index(key) {
                Some(i) => indexed.push((i, key.as_str(), value)),
                None => named.push((key.as_str(), value)),
            }
        }
        indexed.sort_by_key(|(i, _, _)| *i);
        indexed
            .into_iter()
            .map(|(_, key, value)| (key, value))
            .chain(named)
            .collect()
    }
}

impl<K: Into<String>> FromIterator<(K, Value)> for ObjectValue {
    fn from_iter<I: IntoIterator<Item = (K, Value)>>(iter: I) -> Self {
        let mut object = ObjectValue::new();
        for (key, value) in iter {
            object.insert(key, value);
        }
        object
    }
}

impl PartialEq for ObjectValue {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self
                .entries
                .iter()
                .all(|(key, value)| other.get(key).is_some_and(|v| v == value))
    }
}

impl fmt::Debug for ObjectValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.entries()).finish()
    }
}

/// Parse `key` as a canonical array index (`0..2^32 - 1`).
///
/// Leading zeros, signs and whitespace disqualify a key, as does the
/// maximum `u32`, which is a valid property name but not an index.
fn array_index(key: &str) -> Option<u32> {
    if key.is_empty() || (key.len() > 1 && key.starts_with('0')) {
        return None;
    }
    if !key.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    key.parse::<u32>().ok().filter(|&i| i != u32::MAX)
}

// SymbolValue

/// A unique, opaque token. Identity comes from the enclosing `Heap`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SymbolValue {
    pub description: Option<String>,
}

// FunctionValue

/// A callable value as seen by the assertion engine: a name and, when known,
/// its source text. Identity comes from the enclosing `Heap`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FunctionValue {
    pub name: String,
    pub source: Option<String>,
}

impl FunctionValue {
    /// Host `ToString` of the function.
    ///
    /// Uses the recorded source text, or the native-code placeholder the host
    /// prints for functions without source.
    pub fn source_text(&self) -> String {
        match &self.source {
            Some(source) => source.clone(),
            None if self.name.is_empty() => "function () { [native code] }".to_string(),
            None => format!("function {}() {{ [native code] }}", self.name),
        }
    }
}
