use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Contact details revealed to both sides after a mutual match.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SharedContact {
    /// Unique identifier of the match record.
    #[serde(rename = "_id")]
    pub id: String,

    /// Given name of the matched user.
    pub first_name: String,

    /// Family name of the matched user.
    pub surname: String,

    /// Email address shared with the match.
    pub email: String,

    /// Phone number shared with the match.
    pub phone: String,

    /// Profile picture URL of the matched user.
    #[serde(default)]
    pub img: String,

    /// Whether the current user has opened this contact card yet.
    #[serde(default)]
    pub is_seen: bool,

    /// When the match was made.
    pub matched_at: DateTime<Utc>,
}
