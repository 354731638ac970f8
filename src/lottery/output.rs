//! Human-readable and JSON rendering of batches.

use std::fs::File;
use std::io::Write;

use serde::{Deserialize, Serialize};

use crate::lottery::analysis::{analyze, Stats};
use crate::lottery::error::Result;
use crate::lottery::ticket::TicketBatch;
use crate::lottery::validator::Strategy;

const RULE: &str = "--------------------------------------------------";

/// Render tickets one per line, e.g. `Ticket 01: 04 - 11 - 23 - 38 - 41 - 56`.
pub fn format_batch(game_id: &str, batch: &TicketBatch) -> String {
    let mut out = String::new();
    out.push_str(&format!("Tickets for {}:\n", game_id.to_uppercase()));
    out.push_str(RULE);
    out.push('\n');
    for (i, row) in batch.formatted().iter().enumerate() {
        out.push_str(&format!("Ticket {:02}: {}\n", i + 1, row.join(" - ")));
    }
    out.push_str(RULE);
    out.push('\n');
    out
}

/// Render the analysis summary with one-decimal percentages.
pub fn format_stats(stats: &Stats) -> String {
    let mut out = String::new();
    out.push_str("Batch analysis:\n");
    out.push_str(RULE);
    out.push('\n');
    out.push_str(&format!("Total tickets: {}\n", stats.total_tickets));
    out.push_str(&format!("Numbers per ticket: {}\n", stats.ticket_size));
    out.push_str(&format!("Even numbers: {:.1}%\n", stats.percent_even));
    out.push_str(&format!("Odd numbers: {:.1}%\n", stats.percent_odd));
    let top: Vec<String> = stats
        .most_frequent(5)
        .iter()
        .map(|(number, count)| format!("{}x{}", number, count))
        .collect();
    out.push_str(&format!("Most frequent: {}\n", top.join(", ")));
    out.push_str(RULE);
    out.push('\n');
    out
}

/// A finished batch bundled with its analysis, ready for export.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchReport {
    /// Game identifier.
    pub game_id: String,
    /// Strategy name the batch was generated with.
    pub strategy: String,
    /// Tickets as zero-padded strings.
    pub tickets: Vec<Vec<String>>,
    /// Statistics over the batch.
    pub stats: Stats,
}

impl BatchReport {
    /// Build a report, analyzing the batch.
    pub fn new(game_id: &str, strategy: Strategy, batch: &TicketBatch) -> Result<Self> {
        Ok(Self {
            game_id: game_id.to_string(),
            strategy: strategy.to_string(),
            tickets: batch.formatted(),
            stats: analyze(batch)?,
        })
    }

    /// Serialize to pretty JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Write pretty JSON to `path`.
    pub fn save_json(&self, path: &str) -> Result<()> {
        let json = self.to_json()?;
        let mut file = File::create(path)?;
        file.write_all(json.as_bytes())?;
        Ok(())
    }
}
