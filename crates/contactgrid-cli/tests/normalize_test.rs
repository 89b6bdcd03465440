use contactgrid_testing::{TestWorld, assertions, fixtures};

#[test]
fn test_normalize_single_record() {
    let world = TestWorld::new().with_contacts(&fixtures::single_record());
    let result = world.run(&["normalize"]).expect("Failed to run normalize");

    assert!(result.success(), "normalize failed: {}", result.stderr);

    let json = result.json().expect("normalize prints JSON");
    assertions::assert_contact_count(&json, 1).unwrap();
    assertions::assert_subjects_copied(&json).unwrap();
    assert_eq!(json[0]["iso"], "2020-01-01T00:00:00.000Z");
    assert_eq!(json[0]["color"], "red");
}

#[test]
fn test_unparseable_date_has_null_iso() {
    let world = TestWorld::new().with_contacts(&fixtures::sample_contacts());
    let result = world.run(&["normalize"]).unwrap();

    assert!(result.success(), "normalize failed: {}", result.stderr);
    let json = result.json().unwrap();
    assertions::assert_contact_count(&json, 4).unwrap();
    assert_eq!(json[1]["iso"], "1936-11-12T09:30:00.000Z");
    assert_eq!(json[2]["iso"], "1947-09-09T15:45:00.000Z");
    assert!(json[3]["iso"].is_null());
}

#[test]
fn test_bundled_contacts_without_data_file() {
    let world = TestWorld::new();
    let result = world.run(&["normalize"]).unwrap();

    assert!(result.success(), "normalize failed: {}", result.stderr);
    assertions::assert_contact_count(&result.json().unwrap(), 8).unwrap();
}

#[test]
fn test_plain_format_uses_configured_dates() {
    let world = TestWorld::new()
        .with_contacts(&fixtures::single_record())
        .with_config("[date]\ntimezone = \"utc\"\n");
    let result = world.run(&["normalize", "--format", "plain"]).unwrap();

    assert!(result.success(), "normalize failed: {}", result.stderr);
    assert_eq!(result.stdout.trim_end(), "A  s1  Wed, Jan 1, 2020");
}

#[test]
fn test_malformed_file_is_an_error() {
    let world = TestWorld::new().with_contacts_json("{ not json");
    let result = world.run(&["normalize"]).unwrap();

    assert!(!result.success());
    assert!(result.stderr.contains("Error: Record error: JSON error"));
}
