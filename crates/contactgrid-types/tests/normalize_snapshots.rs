use contactgrid_types::{RawContact, normalize, normalize_all};

fn ada() -> RawContact {
    RawContact {
        name: "Ada Lovelace".to_string(),
        short_text: "Engine notes".to_string(),
        date: "1843-10-05".to_string(),
        image: "https://example.com/ada.png".to_string(),
        color: "#6a5acd".to_string(),
    }
}

#[test]
fn test_normalized_contact_snapshot() {
    let contact = normalize(&ada());
    insta::assert_json_snapshot!("normalized_contact", contact);
}

#[test]
fn test_single_record_batch() {
    let raw = RawContact {
        name: "A".to_string(),
        short_text: "s1".to_string(),
        date: "2020-01-01".to_string(),
        image: "i".to_string(),
        color: "red".to_string(),
    };

    let contacts = normalize_all(&[raw]);

    assert_eq!(contacts.len(), 1);
    assert_eq!(contacts[0].subject, "s1");
    assert_eq!(contacts[0].iso.as_deref(), Some("2020-01-01T00:00:00.000Z"));
}

#[test]
fn test_empty_batch() {
    assert!(normalize_all(&[]).is_empty());
}
