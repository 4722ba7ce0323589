use std::collections::BTreeMap;

/// A scalar gateway parameter.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(untagged)]
pub enum ParameterValue {
    Text(String),
    Integer(i64),
}

impl ParameterValue {
    pub fn is_empty(&self) -> bool {
        matches!(self, ParameterValue::Text(s) if s.is_empty())
    }
}

impl From<String> for ParameterValue {
    fn from(s: String) -> Self {
        ParameterValue::Text(s)
    }
}

impl From<&str> for ParameterValue {
    fn from(s: &str) -> Self {
        ParameterValue::Text(s.to_string())
    }
}

impl From<i64> for ParameterValue {
    fn from(i: i64) -> Self {
        ParameterValue::Integer(i)
    }
}

/// Parameters keyed by the name the gateway expects.
///
/// Values only enter the map through the request setters, after they have
/// been validated. Entries are overwritten, never removed.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize)]
#[serde(transparent)]
pub struct ParameterMap(BTreeMap<&'static str, ParameterValue>);

impl ParameterMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&ParameterValue> {
        self.0.get(key)
    }

    /// True when `key` holds a value that is not an empty string.
    pub fn is_present(&self, key: &str) -> bool {
        self.get(key).map_or(false, |v| !v.is_empty())
    }

    /// First entry of `required` that is not present.
    pub fn first_missing(&self, required: &[&'static str]) -> Option<&'static str> {
        required.iter().copied().find(|key| !self.is_present(key))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &ParameterValue)> {
        self.0.iter().map(|(k, v)| (*k, v))
    }

    pub(crate) fn insert(&mut self, key: &'static str, value: impl Into<ParameterValue>) {
        self.0.insert(key, value.into());
    }
}
