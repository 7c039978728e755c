use serde::{Deserialize, Serialize};

/// An interest a user can pin to their profile, picked from a fixed catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Interest {
    /// Unique identifier for the interest.
    #[serde(rename = "_id")]
    pub id: String,

    /// Human-readable name, e.g. "Hiking".
    pub name: String,
}
