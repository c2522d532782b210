use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur while loading the gift catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Catalog file not found at {0}")]
    NotFound(PathBuf),

    #[error("Failed to read catalog: {0}")]
    Io(#[from] std::io::Error),

    #[error("Could not decode JSON catalog: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Could not decode TOML catalog: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Static lookup tables backing every prediction
///
/// Keys of `gifts_by_age` are stringified ages ("30"), keys of `interests`
/// are interest names, stored trimmed and lower-cased. Both tables are
/// optional in the file and default to empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    gifts_by_age: BTreeMap<String, String>,
    #[serde(default, deserialize_with = "deserialize_interests")]
    interests: BTreeMap<String, String>,
}

/// Trim and lower-case interest keys; on a collision the later key wins
fn normalize_interest_keys(interests: BTreeMap<String, String>) -> BTreeMap<String, String> {
    interests
        .into_iter()
        .map(|(name, category)| (name.trim().to_lowercase(), category))
        .filter(|(name, _)| !name.is_empty())
        .collect()
}

fn deserialize_interests<'de, D>(deserializer: D) -> Result<BTreeMap<String, String>, D::Error>
where
    D: Deserializer<'de>,
{
    BTreeMap::<String, String>::deserialize(deserializer).map(normalize_interest_keys)
}

impl Catalog {
    pub fn new(
        gifts_by_age: BTreeMap<String, String>,
        interests: BTreeMap<String, String>,
    ) -> Self {
        Self {
            gifts_by_age,
            interests: normalize_interest_keys(interests),
        }
    }

    /// Read and parse a catalog file
    ///
    /// Files ending in `.toml` are parsed as TOML, everything else as JSON.
    pub async fn load<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let path = path.as_ref();

        let raw = match tokio::fs::read_to_string(path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(CatalogError::NotFound(path.to_path_buf()));
            }
            Err(e) => return Err(e.into()),
        };

        let is_toml = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"));

        if is_toml {
            Self::from_toml_str(&raw)
        } else {
            Self::from_json_str(&raw)
        }
    }

    pub fn from_json_str(raw: &str) -> Result<Self, CatalogError> {
        Ok(serde_json::from_str(raw)?)
    }

    pub fn from_toml_str(raw: &str) -> Result<Self, CatalogError> {
        Ok(toml::from_str(raw)?)
    }

    /// Gift description for an age, if the catalog has one
    pub fn gift_for_age(&self, age: u8) -> Option<&str> {
        self.gifts_by_age.get(&age.to_string()).map(String::as_str)
    }

    /// Category label for a normalized interest
    pub fn category_for(&self, interest: &str) -> Option<&str> {
        self.interests.get(interest).map(String::as_str)
    }

    pub fn gifts_by_age(&self) -> &BTreeMap<String, String> {
        &self.gifts_by_age
    }

    pub fn interests(&self) -> &BTreeMap<String, String> {
        &self.interests
    }
}
