use serde::{Deserialize, Deserializer};

/// One entry of the events catalog, as published in `events.json`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClubEvent {
    #[serde(deserialize_with = "id_from_number_or_string")]
    pub id: String,
    pub title: String,
    pub start_date: String,
    pub end_date: String,
    pub time: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub what_to_expect: Option<Vec<String>>,
    #[serde(default)]
    pub requirements: Option<String>,
}

impl ClubEvent {
    /// "March 5, 2025 - March 6, 2025", collapsed to a single date when both ends match.
    pub fn date_range_display(&self) -> String {
        if self.start_date == self.end_date || self.start_date.is_empty() {
            self.end_date.clone()
        } else {
            format!("{} - {}", self.start_date, self.end_date)
        }
    }

    pub fn tags_display(&self) -> String {
        self.tags
            .iter()
            .map(|t| format!("#{}", t))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Number(u64),
    Text(String),
}

fn id_from_number_or_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match RawId::deserialize(deserializer)? {
        RawId::Number(n) => n.to_string(),
        RawId::Text(s) => s,
    })
}

#[cfg(test)]
pub(crate) fn sample(id: &str, end_date: &str, time: &str) -> ClubEvent {
    ClubEvent {
        id: id.to_string(),
        title: format!("Event {}", id),
        start_date: end_date.to_string(),
        end_date: end_date.to_string(),
        time: time.to_string(),
        location: "ETLC 1-001".to_string(),
        description: String::new(),
        tags: Vec::new(),
        image: None,
        what_to_expect: None,
        requirements: None,
    }
}
