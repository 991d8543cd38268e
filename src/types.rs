//! Shared types used across the converter.
//! Includes the typed input record (`SoundRecord`), the grouped output
//! (`Tale`, `TalePart`) and the tale category (`TaleType`).
use std::str::FromStr;

use serde::Deserialize;

/// Assumed playing time of a single part, in seconds.
pub const PART_LENGTH_SECONDS: u64 = 120;

/// One element of the `sounds` array, reduced to the fields grouping needs.
///
/// Wrong-typed values are kept as `None` so that a single bad record does not
/// reject the whole document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SoundRecord {
    #[serde(default, deserialize_with = "lenient_string")]
    pub id: Option<String>,
    #[serde(
        default,
        rename = "originalName",
        deserialize_with = "lenient_string"
    )]
    pub original_name: Option<String>,
}

impl SoundRecord {
    /// Build a record from an arbitrary JSON value; non-objects yield `None`.
    pub fn from_value(value: &serde_json::Value) -> Option<Self> {
        if !value.is_object() {
            return None;
        }
        Some(Self::deserialize(value).unwrap_or_default())
    }

    /// Returns `(id, original_name)` when both are non-empty strings.
    pub fn required_fields(&self) -> Option<(&str, &str)> {
        match (self.id.as_deref(), self.original_name.as_deref()) {
            (Some(id), Some(name)) if !id.is_empty() && !name.is_empty() => Some((id, name)),
            _ => None,
        }
    }
}

fn lenient_string<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::String(s) => Some(s),
        _ => None,
    })
}

/// A part before sorting: its ordinal within the tale and the sound id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TalePart {
    pub ordinal: u64,
    pub id: String,
}

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug)]
pub enum TaleType {
    FairyTale,
    Story,
    Song,
    Verse,
    Joke,
}

impl std::fmt::Display for TaleType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            TaleType::FairyTale => "fairytale",
            TaleType::Story => "story",
            TaleType::Song => "song",
            TaleType::Verse => "verse",
            TaleType::Joke => "joke",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for TaleType {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "fairytale" => Ok(TaleType::FairyTale),
            "story" => Ok(TaleType::Story),
            "song" => Ok(TaleType::Song),
            "verse" => Ok(TaleType::Verse),
            "joke" => Ok(TaleType::Joke),
            other => Err(format!("unknown tale type '{}'", other)),
        }
    }
}

/// A finished tale: parts are already in playing order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tale {
    pub name: String,
    pub tale_type: TaleType,
    pub parts: Vec<String>,
}

impl Tale {
    pub fn story(name: impl Into<String>, parts: Vec<String>) -> Self {
        Self {
            name: name.into(),
            tale_type: TaleType::Story,
            parts,
        }
    }

    /// Total playing time in seconds.
    pub fn length(&self) -> u64 {
        self.parts.len() as u64 * PART_LENGTH_SECONDS
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_record_from_object() {
        let rec = SoundRecord::from_value(&json!({
            "id": "abc",
            "originalName": "foo_1.wav",
            "size": 42
        }))
        .unwrap();
        assert_eq!(rec.required_fields(), Some(("abc", "foo_1.wav")));
    }

    #[test]
    fn test_record_wrong_types_degrade() {
        let rec = SoundRecord::from_value(&json!({ "id": 7, "originalName": null })).unwrap();
        assert_eq!(rec.id, None);
        assert_eq!(rec.original_name, None);
        assert!(rec.required_fields().is_none());
    }

    #[test]
    fn test_record_empty_strings_rejected() {
        let rec = SoundRecord::from_value(&json!({ "id": "", "originalName": "a_1.wav" })).unwrap();
        assert!(rec.required_fields().is_none());
    }

    #[test]
    fn test_record_non_object() {
        assert!(SoundRecord::from_value(&json!("foo_1.wav")).is_none());
        assert!(SoundRecord::from_value(&json!(null)).is_none());
        assert!(SoundRecord::from_value(&json!([1, 2])).is_none());
    }

    #[test]
    fn test_tale_type_round_trip_names() {
        assert_eq!("Story".parse::<TaleType>(), Ok(TaleType::Story));
        assert_eq!("FAIRYTALE".parse::<TaleType>(), Ok(TaleType::FairyTale));
        assert!("poem".parse::<TaleType>().is_err());
        assert_eq!(TaleType::Joke.to_string(), "joke");
    }

    #[test]
    fn test_tale_length() {
        let tale = Tale::story("foo", vec!["A".into(), "B".into()]);
        assert_eq!(tale.length(), 240);
        assert_eq!(tale.tale_type, TaleType::Story);
    }
}
