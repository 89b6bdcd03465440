use anyhow::Result;
use contactgrid_types::{Contact, normalize_all};
use is_terminal::IsTerminal;
use owo_colors::OwoColorize;
use tokio::runtime::Runtime;

use crate::context::AppContext;
use crate::presentation::formatters::DateDisplay;
use crate::types::OutputFormat;

pub fn handle(ctx: &AppContext, format: OutputFormat) -> Result<()> {
    let source = ctx.source()?;
    let runtime = Runtime::new()?;
    let raws = runtime.block_on(source.fetch())?;
    let contacts = normalize_all(&raws);
    tracing::info!(count = contacts.len(), source = %source.describe(), "normalized contacts");

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&contacts)?),
        OutputFormat::Plain => {
            let dates = DateDisplay::from_config(&ctx.config()?.date)?;
            let color = std::io::stdout().is_terminal();
            for contact in &contacts {
                println!("{}", format_plain(contact, &dates, color));
            }
        }
    }
    Ok(())
}

fn format_plain(contact: &Contact, dates: &DateDisplay, color: bool) -> String {
    let date = dates.render(contact.iso.as_deref());
    if color {
        format!(
            "{}  {}  {}",
            contact.name.bold(),
            contact.subject,
            date.dimmed()
        )
    } else {
        format!("{}  {}  {}", contact.name, contact.subject, date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contactgrid_runtime::DateZone;
    use contactgrid_types::{RawContact, normalize};

    #[test]
    fn test_format_plain() {
        let contact = normalize(&RawContact {
            name: "A".to_string(),
            short_text: "s1".to_string(),
            date: "2020-01-01".to_string(),
            image: "i".to_string(),
            color: "red".to_string(),
        });
        let dates = DateDisplay::new("%Y-%m-%d", DateZone::Utc).unwrap();
        assert_eq!(format_plain(&contact, &dates, false), "A  s1  2020-01-01");
    }
}
