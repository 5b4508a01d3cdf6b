use anyhow::{Context, Result};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::debug;

use crate::table::{PriceTable, Settlement, TableConfig};

/// Descriptive fields shown above a table
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SheetHeader {
    pub name: Option<String>,
    pub date: Option<NaiveDate>,
    /// Game type, shown as GHAR
    pub kind: Option<String>,
    /// Open number used for settlement
    pub open: Option<String>,
}

/// A price table together with its header and rates, persisted as JSON
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sheet {
    pub version: String,
    pub created_at: DateTime<Utc>,
    pub header: SheetHeader,
    #[serde(default)]
    pub config: TableConfig,
    pub table: PriceTable,
}

impl Sheet {
    /// Create a sheet with an empty standard table
    pub fn new(header: SheetHeader) -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            created_at: Utc::now(),
            header,
            config: TableConfig::default(),
            table: PriceTable::standard(),
        }
    }

    /// Read a sheet from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read sheet: {}", path.display()))?;
        let sheet = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to decode sheet: {}", path.display()))?;
        debug!(path = %path.display(), "loaded sheet");
        Ok(sheet)
    }

    /// Write the sheet as pretty-printed JSON
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let json = serde_json::to_string_pretty(self).context("Failed to encode sheet")?;
        fs::write(path, json)
            .with_context(|| format!("Failed to write sheet: {}", path.display()))?;
        debug!(path = %path.display(), "saved sheet");
        Ok(())
    }

    /// One-line summary of the header
    pub fn header_line(&self) -> String {
        let name = self.header.name.as_deref().unwrap_or("N/A");
        let date = self
            .header
            .date
            .map(|d| d.format("%Y-%m-%d").to_string())
            .unwrap_or_else(|| "—".to_string());
        let kind = self.header.kind.as_deref().unwrap_or("—");
        let open = self
            .header
            .open
            .as_deref()
            .map(str::trim)
            .filter(|o| !o.is_empty())
            .map(|o| format!("{:0>2}", o))
            .unwrap_or_else(|| "None".to_string());

        format!(
            "Name: {} | Date: {} | GHAR: {} | Open: {}",
            name, date, kind, open
        )
    }

    /// Settle using `open`, or the header's open number when `None`
    pub fn settle(&self, open: Option<&str>) -> Settlement {
        let open = open.or(self.header.open.as_deref());
        self.table.settle(open, &self.config)
    }
}
