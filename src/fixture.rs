//! Fixture loading: the `data.properties` record and static JSON bodies.
//!
//! A [`FixtureStore`] is rooted at a directory laid out as:
//!
//! ```text
//! fixtures/
//!   data.properties      flat key=value config
//!   json/<name>.json     canned response bodies, one per logical name
//! ```
//!
//! Loading is read-only and fallible; a missing file or key is an error for
//! the caller to handle, never a partially populated record.

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use tracing::debug;

use crate::error::HarnessError;

/// File name of the key/value config inside the fixture root.
pub const PROPERTIES_FILE: &str = "data.properties";

/// Subdirectory of the fixture root holding JSON response bodies.
pub const JSON_DIR: &str = "json";

/// The configuration-derived entity describing one test location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixtureRecord {
    pub id: String,
    /// Currency-prefixed price, e.g. `£9.99`.
    pub cost: String,
    pub location_name: String,
    /// Logical name of the JSON body fixture for this location.
    pub file_name: String,
}

impl FixtureRecord {
    /// The cost with its leading currency symbol stripped.
    ///
    /// The symbol may be multi-byte (`£`), so this skips one `char`, not
    /// one byte.
    pub fn cost_amount(&self) -> &str {
        let mut chars = self.cost.chars();
        chars.next();
        chars.as_str()
    }
}

/// Read-only access to the fixture directory.
#[derive(Debug, Clone)]
pub struct FixtureStore {
    root: PathBuf,
}

impl FixtureStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Path of the properties file inside this store.
    pub fn properties_path(&self) -> PathBuf {
        self.root.join(PROPERTIES_FILE)
    }

    /// Path of the JSON body fixture with the given logical name.
    pub fn json_fixture_path(&self, name: &str) -> PathBuf {
        self.root.join(JSON_DIR).join(format!("{name}.json"))
    }

    /// Load the location record from `data.properties`.
    pub fn load_record(&self) -> Result<FixtureRecord, HarnessError> {
        let path = self.properties_path();
        let contents = fs::read_to_string(&path).map_err(|source| HarnessError::ConfigLoad {
            path: path.clone(),
            source,
        })?;
        let properties = parse_properties(&contents)?;

        let get = |key: &str| -> Result<String, HarnessError> {
            properties
                .get(key)
                .cloned()
                .ok_or_else(|| HarnessError::MissingKey(key.to_string()))
        };

        let record = FixtureRecord {
            id: get("id")?,
            cost: get("cost")?,
            location_name: get("locationName")?,
            file_name: get("fileName")?,
        };
        debug!(path = %path.display(), location = %record.location_name, "loaded fixture record");
        Ok(record)
    }

    /// Read the raw bytes of a JSON body fixture by logical name.
    pub fn read_json_fixture(&self, name: &str) -> Result<Vec<u8>, HarnessError> {
        let path = self.json_fixture_path(name);
        if !path.is_file() {
            return Err(HarnessError::FixtureNotFound(path));
        }
        Ok(fs::read(&path)?)
    }
}

/// Parse flat `key=value` text. Blank lines and lines starting with `#` or
/// `!` are skipped; whitespace around keys and values is trimmed.
fn parse_properties(contents: &str) -> Result<HashMap<String, String>, HarnessError> {
    let mut properties = HashMap::new();
    for (index, raw_line) in contents.lines().enumerate() {
        let line = raw_line.trim();
        if line.is_empty() || line.starts_with('#') || line.starts_with('!') {
            continue;
        }
        let Some((key, value)) = line.split_once('=') else {
            return Err(HarnessError::MalformedLine {
                line: index + 1,
                text: raw_line.to_string(),
            });
        };
        properties.insert(key.trim().to_string(), value.trim().to_string());
    }
    Ok(properties)
}
