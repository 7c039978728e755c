use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A speed-dating event as returned by `/events`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    /// Unique identifier for the event.
    #[serde(rename = "_id")]
    pub id: String,

    /// Display title.
    pub title: String,

    /// Longer description shown on the event card.
    pub description: String,

    /// When the event takes place.
    pub date: DateTime<Utc>,

    /// Venue name or address.
    pub location: String,

    /// Seats available per gender.
    pub max_spots: u32,

    /// Ids of the men registered for the event.
    #[serde(default)]
    pub registered_men: Vec<String>,

    /// Ids of the women registered for the event.
    #[serde(default)]
    pub registered_women: Vec<String>,
}

impl Event {
    /// Whether the given user is registered, regardless of which list
    /// the backend filed them under.
    #[must_use]
    pub fn is_registered(&self, user_id: &str) -> bool {
        self.registered_men.iter().any(|id| id == user_id)
            || self.registered_women.iter().any(|id| id == user_id)
    }

    /// Total number of registrations across both lists.
    #[must_use]
    pub fn registration_count(&self) -> usize {
        self.registered_men.len() + self.registered_women.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample() -> Event {
        Event {
            id: "e1".to_string(),
            title: "Friday Sparks".to_string(),
            description: "Seven dates in one evening.".to_string(),
            date: Utc.with_ymd_and_hms(2025, 6, 13, 18, 0, 0).unwrap(),
            location: "Café Aveny".to_string(),
            max_spots: 10,
            registered_men: vec!["m1".to_string()],
            registered_women: vec!["w1".to_string(), "w2".to_string()],
        }
    }

    #[test]
    fn registration_check_spans_both_lists() {
        let event = sample();
        assert!(event.is_registered("m1"));
        assert!(event.is_registered("w2"));
        assert!(!event.is_registered("u9"));
        assert_eq!(event.registration_count(), 3);
    }

    #[test]
    fn event_parses_backend_document() {
        let json = r#"{
            "_id": "e7",
            "title": "Midsummer Mixer",
            "description": "Outdoor edition.",
            "date": "2025-06-20T17:30:00Z",
            "location": "Stadsparken",
            "maxSpots": 12,
            "registeredMen": [],
            "registeredWomen": ["w5"]
        }"#;

        let event: Event = serde_json::from_str(json).unwrap();
        assert_eq!(event.id, "e7");
        assert_eq!(event.max_spots, 12);
        assert_eq!(event.registered_women, vec!["w5".to_string()]);
    }
}
