//! Sample contact records.

use contactgrid_types::RawContact;

pub fn contact(name: &str, short_text: &str, date: &str, color: &str) -> RawContact {
    RawContact {
        name: name.to_string(),
        short_text: short_text.to_string(),
        date: date.to_string(),
        image: format!("https://avatars.example.com/{}.png", name.to_lowercase()),
        color: color.to_string(),
    }
}

/// The single record used across the acceptance tests.
pub fn single_record() -> Vec<RawContact> {
    vec![RawContact {
        name: "A".to_string(),
        short_text: "s1".to_string(),
        date: "2020-01-01".to_string(),
        image: "i".to_string(),
        color: "red".to_string(),
    }]
}

/// A small mixed list: several date layouts and one unparseable date.
pub fn sample_contacts() -> Vec<RawContact> {
    vec![
        contact("Ada", "Analytical engine", "1843-10-05", "slateblue"),
        contact("Alan", "Computable numbers", "1936-11-12T09:30:00", "#2e8b57"),
        contact("Grace", "Moth in relay", "Tue, 09 Sep 1947 15:45:00 +0000", "tomato"),
        contact("Ken", "Trusting trust", "sometime in 1984", "olive"),
    ]
}

pub fn to_json(contacts: &[RawContact]) -> String {
    serde_json::to_string_pretty(contacts).expect("contacts serialize")
}
