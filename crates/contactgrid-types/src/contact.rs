use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::date::{parse_date, to_iso};
use crate::Result;

/// A contact exactly as the data source delivers it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawContact {
    pub name: String,
    /// Subject line of the last message
    pub short_text: String,
    /// Source-specific date text
    pub date: String,
    #[serde(default)]
    pub image: String,
    /// CSS color used as the avatar background
    #[serde(default)]
    pub color: String,
}

/// A contact after normalization: the raw fields plus `subject` and `iso`.
///
/// `iso` is `None` when the source date could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    pub name: String,
    pub short_text: String,
    pub date: String,
    pub image: String,
    pub color: String,
    pub subject: String,
    pub iso: Option<String>,
}

impl Contact {
    /// The normalized timestamp as a typed instant.
    pub fn timestamp(&self) -> Option<DateTime<Utc>> {
        self.iso
            .as_deref()
            .and_then(|iso| DateTime::parse_from_rfc3339(iso).ok())
            .map(|dt| dt.with_timezone(&Utc))
    }
}

/// Derive the display fields of a single record.
///
/// Pure and total: every raw record produces a contact.
pub fn normalize(raw: &RawContact) -> Contact {
    Contact {
        name: raw.name.clone(),
        short_text: raw.short_text.clone(),
        date: raw.date.clone(),
        image: raw.image.clone(),
        color: raw.color.clone(),
        subject: raw.short_text.clone(),
        iso: parse_date(&raw.date).map(to_iso),
    }
}

/// Normalize a whole batch, preserving order.
pub fn normalize_all(raws: &[RawContact]) -> Vec<Contact> {
    raws.iter().map(normalize).collect()
}

/// Parse a JSON array of raw contacts.
pub fn parse_contacts(json: &str) -> Result<Vec<RawContact>> {
    Ok(serde_json::from_str(json)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(date: &str) -> RawContact {
        RawContact {
            name: "A".to_string(),
            short_text: "s1".to_string(),
            date: date.to_string(),
            image: "i".to_string(),
            color: "red".to_string(),
        }
    }

    #[test]
    fn test_normalize_copies_subject_and_derives_iso() {
        let contact = normalize(&raw("2020-01-01"));
        assert_eq!(contact.subject, "s1");
        assert_eq!(contact.short_text, "s1");
        assert_eq!(contact.iso.as_deref(), Some("2020-01-01T00:00:00.000Z"));
        assert_eq!(contact.color, "red");
    }

    #[test]
    fn test_normalize_is_pure() {
        let input = raw("2021-07-04T18:00:00-04:00");
        assert_eq!(normalize(&input), normalize(&input));
    }

    #[test]
    fn test_unparseable_date_keeps_record() {
        let contact = normalize(&raw("not a date"));
        assert_eq!(contact.iso, None);
        assert_eq!(contact.timestamp(), None);
        assert_eq!(contact.date, "not a date");
    }

    #[test]
    fn test_timestamp_round_trips_iso() {
        let contact = normalize(&raw("2020-02-29T12:00:00Z"));
        let ts = contact.timestamp().expect("valid timestamp");
        assert_eq!(to_iso(ts), "2020-02-29T12:00:00.000Z");
    }

    #[test]
    fn test_normalize_all_preserves_order() {
        let raws = vec![raw("2020-01-01"), raw("2020-01-02"), raw("bad")];
        let contacts = normalize_all(&raws);
        assert_eq!(contacts.len(), 3);
        assert_eq!(contacts[1].iso.as_deref(), Some("2020-01-02T00:00:00.000Z"));
        assert_eq!(contacts[2].iso, None);
    }

    #[test]
    fn test_parse_contacts_camel_case() {
        let json = r#"[{"name":"A","shortText":"s1","date":"2020-01-01","image":"i","color":"red"}]"#;
        let raws = parse_contacts(json).unwrap();
        assert_eq!(raws, vec![raw("2020-01-01")]);
    }

    #[test]
    fn test_parse_contacts_optional_fields() {
        let json = r#"[{"name":"B","shortText":"hi","date":"2020-01-01"}]"#;
        let raws = parse_contacts(json).unwrap();
        assert_eq!(raws[0].image, "");
        assert_eq!(raws[0].color, "");
    }

    #[test]
    fn test_parse_contacts_rejects_wrong_shape() {
        assert!(parse_contacts(r#"{"name":"A"}"#).is_err());
    }
}
