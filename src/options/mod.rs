use std::collections::BTreeMap;
#[cfg(feature = "toml")]
use std::fs;
#[cfg(feature = "toml")]
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{event, Level};

#[cfg(feature = "toml")]
use crate::error::CegisError;

/// A single entry of an [OptionsTable].
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum OptionValue {
    Unsigned(u64),
    Str(String),
    List(Vec<String>),
}

impl From<&str> for OptionValue {
    fn from(value: &str) -> Self {
        OptionValue::Str(value.to_string())
    }
}

impl From<String> for OptionValue {
    fn from(value: String) -> Self {
        OptionValue::Str(value)
    }
}

impl From<u64> for OptionValue {
    fn from(value: u64) -> Self {
        OptionValue::Unsigned(value)
    }
}

impl From<Vec<String>> for OptionValue {
    fn from(value: Vec<String>) -> Self {
        OptionValue::List(value)
    }
}

/// A generic key to value store of settings, independent of command line
/// parsing. Reads never fail: a missing key reads as the empty value of
/// the requested shape (`""`, an empty list or `0`), which callers treat
/// as "not configured".
///
/// When the `toml` feature is enabled, a table can be read from and written
/// to a flat TOML document whose keys are option names:
///
/// ```toml
/// function = "main"
/// cegis-targets = ["a", "b"]
/// cegis-max-prog-size = 12
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct OptionsTable {
    options: BTreeMap<String, OptionValue>,
}

impl OptionsTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_set(&self, key: &str) -> bool {
        self.options.contains_key(key)
    }

    pub fn get(&self, key: &str) -> Option<&OptionValue> {
        self.options.get(key)
    }

    /// Single string view of `key`. Lists yield their first element and
    /// unsigned values their decimal rendering.
    pub fn get_option(&self, key: &str) -> String {
        match self.options.get(key) {
            Some(OptionValue::Str(s)) => s.clone(),
            Some(OptionValue::Unsigned(n)) => n.to_string(),
            Some(OptionValue::List(l)) => l.first().cloned().unwrap_or_default(),
            None => String::new(),
        }
    }

    pub fn get_list_option(&self, key: &str) -> Vec<String> {
        match self.options.get(key) {
            Some(OptionValue::List(l)) => l.clone(),
            Some(OptionValue::Str(s)) => vec![s.clone()],
            Some(OptionValue::Unsigned(n)) => vec![n.to_string()],
            None => vec![],
        }
    }

    /// Unsigned view of `key`. String entries are trimmed before parsing;
    /// anything that still does not parse reads as `0`, i.e. unset.
    pub fn get_unsigned_int_option(&self, key: &str) -> u64 {
        match self.options.get(key) {
            Some(OptionValue::Unsigned(n)) => *n,
            Some(OptionValue::Str(s)) if s.is_empty() => 0,
            Some(OptionValue::Str(s)) => s.trim().parse().unwrap_or_else(|_| {
                event!(
                    Level::WARN,
                    "Option {} has non-numeric value '{}', treating it as unset",
                    key,
                    s
                );
                0
            }),
            Some(OptionValue::List(_)) | None => 0,
        }
    }

    pub fn set_option<V: Into<OptionValue>>(&mut self, key: &str, value: V) -> &mut Self {
        self.options.insert(key.to_string(), value.into());
        self
    }

    /// Appends to the list stored under `key`, converting a scalar entry
    /// into a list first.
    pub fn push_list_option(&mut self, key: &str, value: &str) -> &mut Self {
        let mut list = self.get_list_option(key);
        list.push(value.to_string());
        self.options.insert(key.to_string(), OptionValue::List(list));
        self
    }

    pub fn remove_option(&mut self, key: &str) -> Option<OptionValue> {
        self.options.remove(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &OptionValue)> {
        self.options.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.options.len()
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }
}

#[cfg(feature = "toml")]
impl OptionsTable {
    pub fn from_toml_str(s: &str) -> Result<Self, CegisError> {
        let table: OptionsTable = toml_edit::de::from_str(s)?;
        Ok(table)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, CegisError> {
        let path = path.as_ref();
        let s = fs::read_to_string(path)?;
        let table = Self::from_toml_str(&s)?;
        event!(
            Level::DEBUG,
            "Loaded {} options from {}",
            table.len(),
            path.display()
        );
        Ok(table)
    }

    pub fn to_toml_string(&self) -> Result<String, CegisError> {
        let s = toml_edit::ser::to_string_pretty(self)?;
        Ok(s)
    }
}
