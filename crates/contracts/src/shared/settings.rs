use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

/// Endpoint accepting a settings payload
pub const SETTINGS_ENDPOINT: &str = "/api/settings";

/// Endpoint restoring configuration from a server-side backup
pub const RESTORE_BACKUP_ENDPOINT: &str = "/api/settings/backup";

/// Value of a single form field.
///
/// `Integer(None)` stands for a number field whose text could not be parsed;
/// it goes over the wire as `null`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(untagged)]
pub enum FieldValue {
    Boolean(bool),
    Integer(Option<i64>),
    Text(String),
}

/// Settings submitted from the form, keyed by input name.
///
/// Keys keep the position of their first insertion; inserting an existing
/// key replaces its value in place.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SettingsPayload {
    entries: Vec<(String, FieldValue)>,
}

impl SettingsPayload {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a value, overwriting any earlier value under the same name
    pub fn insert(&mut self, name: impl Into<String>, value: FieldValue) {
        let name = name.into();
        match self.entries.iter_mut().find(|(key, _)| *key == name) {
            Some((_, slot)) => *slot = value,
            None => self.entries.push((name, value)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.entries
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for SettingsPayload {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

/// Response of the settings endpoints
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct SubmissionResult {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: String,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct RestoreBackupRequest {
    pub backup_file: String,
}
