//! Writes a generated layout for an external plotter.
//!
//! This is a one-shot stream of `(index, tier, x, y)` rows, not a storage
//! format. CSV headers come from the `SiteRecord` field names.

use std::io::Write;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::topology::SiteList;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Json,
    Csv,
    Table,
}

pub fn write_sites<W: Write>(sites: &SiteList, format: OutputFormat, mut writer: W) -> Result<()> {
    match format {
        OutputFormat::Json => {
            let records: Vec<_> = sites.records().collect();
            serde_json::to_writer_pretty(&mut writer, &records)?;
            writeln!(writer)?;
        }
        OutputFormat::Csv => {
            let mut rows = csv::Writer::from_writer(&mut writer);
            for record in sites.records() {
                rows.serialize(record)?;
            }
            rows.flush()?;
        }
        OutputFormat::Table => {
            writeln!(writer, "{:>5} {:>4} {:>12} {:>12}", "index", "tier", "x", "y")?;
            for record in sites.records() {
                writeln!(
                    writer,
                    "{:>5} {:>4} {:>12.3} {:>12.3}",
                    record.index, record.tier, record.x, record.y
                )?;
            }
        }
    }
    writer.flush()?;
    Ok(())
}
