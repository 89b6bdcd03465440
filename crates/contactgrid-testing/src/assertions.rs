//! Custom assertions for contactgrid output.

use anyhow::{Context, Result};
use serde_json::Value;

/// Assert that `normalize` JSON output holds the expected number of records.
pub fn assert_contact_count(json: &Value, expected: usize) -> Result<()> {
    let contacts = json.as_array().context("Expected a JSON array of contacts")?;

    if contacts.len() != expected {
        anyhow::bail!("Expected {} contacts, got {}", expected, contacts.len());
    }

    Ok(())
}

/// Assert that every normalized record carries `subject == shortText`.
pub fn assert_subjects_copied(json: &Value) -> Result<()> {
    let contacts = json.as_array().context("Expected a JSON array of contacts")?;

    for (i, contact) in contacts.iter().enumerate() {
        let subject = contact["subject"]
            .as_str()
            .with_context(|| format!("Contact {} missing subject", i))?;
        let short_text = contact["shortText"]
            .as_str()
            .with_context(|| format!("Contact {} missing shortText", i))?;

        if subject != short_text {
            anyhow::bail!(
                "Contact {} has subject {:?} but shortText {:?}",
                i,
                subject,
                short_text
            );
        }
    }

    Ok(())
}

/// Assert that a rendered frame shows the given footer count.
pub fn assert_count_line(frame: &str, expected: usize) -> Result<()> {
    let needle = format!("count {}", expected);
    if !frame.lines().any(|line| line.contains(&needle)) {
        anyhow::bail!("Expected {:?} in rendered frame:\n{}", needle, frame);
    }
    Ok(())
}
