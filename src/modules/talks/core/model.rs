use serde::{Deserialize, Serialize};

/// A single conference-session record as it appears in the source document.
///
/// Every field defaults when absent so a sparse document never fails to load;
/// unknown fields are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Talk {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub categories: Vec<String>,
    #[serde(default)]
    pub speakers: Vec<Speaker>,
}

/// A first/last name pair embedded in a talk. Speakers carry no id of their
/// own; the case-insensitive name pair is their identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Speaker {
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
}

impl Speaker {
    /// Normalized key used to deduplicate speakers across talks.
    pub fn identity(&self) -> (String, String) {
        (self.first_name.to_lowercase(), self.last_name.to_lowercase())
    }
}
