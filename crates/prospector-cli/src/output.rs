//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use colored::*;
use prospector_domain::ProspectRecord;
use prospector_extractor::{CandidateBlock, ExtractionFailure, StructureIndicator};
use prospector_gatekeeper::ValidationResult;
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Get the output format.
    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// Format prospect records.
    pub fn format_prospects(&self, records: &[ProspectRecord]) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                let values: Vec<_> = records.iter().map(prospect_json).collect();
                Ok(serde_json::to_string_pretty(&values)?)
            }
            OutputFormat::Table => Ok(self.format_prospects_table(records)),
            OutputFormat::Quiet => Ok(records
                .iter()
                .map(|r| r.company_name.as_str())
                .collect::<Vec<_>>()
                .join("\n")),
        }
    }

    /// Format prospects as a table.
    fn format_prospects_table(&self, records: &[ProspectRecord]) -> String {
        if records.is_empty() {
            return self.colorize("No prospects found.", "yellow");
        }

        let mut builder = Builder::default();
        builder.push_record(["#", "Company", "Website", "Email", "Contact", "Sector", "Score", "Status"]);

        for (idx, record) in records.iter().enumerate() {
            let contact = match (&record.contact_name, &record.contact_position) {
                (Some(name), Some(position)) => format!("{} ({})", name, position),
                (Some(name), None) => name.clone(),
                _ => String::new(),
            };
            builder.push_record([
                (idx + 1).to_string(),
                record.company_name.clone(),
                record.website.clone().unwrap_or_default(),
                record.email.clone().unwrap_or_default(),
                contact,
                record.sector.clone().unwrap_or_default(),
                record.quality_score.to_string(),
                record.status.to_string(),
            ]);
        }

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));

        table.to_string()
    }

    /// Format blocks that did not become records.
    pub fn format_failures(&self, failures: &[ExtractionFailure]) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                let values: Vec<_> = failures
                    .iter()
                    .map(|f| {
                        serde_json::json!({
                            "company_name": f.company_name,
                            "order_index": f.order_index,
                            "reason": f.reason,
                        })
                    })
                    .collect();
                Ok(serde_json::to_string_pretty(&values)?)
            }
            OutputFormat::Quiet => Ok(String::new()),
            OutputFormat::Table => {
                if failures.is_empty() {
                    return Ok(self.info("No blocks were dropped."));
                }
                let mut builder = Builder::default();
                builder.push_record(["#", "Block", "Reason"]);
                for failure in failures {
                    builder.push_record([
                        failure.order_index.to_string(),
                        failure.company_name.clone(),
                        failure.reason.clone(),
                    ]);
                }
                let mut table = builder.build();
                table.with(Style::rounded());
                Ok(table.to_string())
            }
        }
    }

    /// Format a format-detector verdict.
    pub fn format_detection(
        &self,
        source: &str,
        structured: bool,
        indicators: &[StructureIndicator],
    ) -> Result<String> {
        let names: Vec<&str> = indicators.iter().map(|i| i.as_str()).collect();
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&serde_json::json!({
                "source": source,
                "structured": structured,
                "indicators": names,
            }))?),
            OutputFormat::Quiet => Ok(structured.to_string()),
            OutputFormat::Table => {
                let verdict = if structured {
                    self.success(&format!("{} is a structured report", source))
                } else {
                    self.warning(&format!("{} is not a structured report", source))
                };
                let found = if names.is_empty() {
                    "none".to_string()
                } else {
                    names.join(", ")
                };
                Ok(format!("{}\n  Indicators: {}", verdict, found))
            }
        }
    }

    /// Format candidate blocks with their block-level verdict.
    pub fn format_blocks(&self, blocks: &[(CandidateBlock, ValidationResult)]) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                let values: Vec<_> = blocks
                    .iter()
                    .map(|(block, verdict)| {
                        serde_json::json!({
                            "name": block.name,
                            "order_index": block.order_index,
                            "strategy": block.strategy.as_str(),
                            "body_chars": block.body.chars().count(),
                            "accepted": verdict.is_accepted(),
                            "reasons": verdict.reasons.iter().map(ToString::to_string).collect::<Vec<_>>(),
                        })
                    })
                    .collect();
                Ok(serde_json::to_string_pretty(&values)?)
            }
            OutputFormat::Quiet => Ok(blocks
                .iter()
                .map(|(block, _)| block.name.as_str())
                .collect::<Vec<_>>()
                .join("\n")),
            OutputFormat::Table => {
                if blocks.is_empty() {
                    return Ok(self.colorize("No candidate blocks found.", "yellow"));
                }
                let mut builder = Builder::default();
                builder.push_record(["#", "Name", "Strategy", "Body", "Verdict"]);
                for (block, verdict) in blocks {
                    let verdict = if verdict.is_accepted() {
                        self.colorize("accepted", "green")
                    } else {
                        let reasons: Vec<String> =
                            verdict.reasons.iter().map(ToString::to_string).collect();
                        self.colorize(&reasons.join("; "), "red")
                    };
                    builder.push_record([
                        block.order_index.to_string(),
                        block.name.clone(),
                        block.strategy.as_str().to_string(),
                        format!("{} chars", block.body.chars().count()),
                        verdict,
                    ]);
                }
                let mut table = builder.build();
                table
                    .with(Style::rounded())
                    .with(Modify::new(Rows::first()).with(Alignment::center()));
                Ok(table.to_string())
            }
        }
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an error message.
    pub fn error(&self, message: &str) -> String {
        self.colorize(&format!("✗ {}", message), "red")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    /// Format an extraction summary line.
    pub fn extraction_summary(
        &self,
        source: &str,
        records: &[ProspectRecord],
        dropped: usize,
    ) -> String {
        let qualified = records.iter().filter(|r| r.is_qualified()).count();
        let reachable = records.iter().filter(|r| r.has_contact_channel()).count();
        let msg = format!(
            "{}: {} prospect(s) found ({} qualified, {} reachable), {} block(s) dropped",
            source,
            records.len(),
            qualified,
            reachable,
            dropped
        );
        if records.is_empty() {
            self.warning(&msg)
        } else {
            self.success(&msg)
        }
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            _ => text.to_string(),
        }
    }
}

/// JSON representation of a prospect record.
pub fn prospect_json(record: &ProspectRecord) -> serde_json::Value {
    let extra = &record.extra_data;
    let scoring = extra.scoring.as_ref().map(|s| {
        let components: serde_json::Map<String, serde_json::Value> = s
            .components
            .iter()
            .map(|(key, value)| (key.clone(), serde_json::json!(value)))
            .collect();
        serde_json::json!({
            "components": components,
            "total": s.total,
            "max": s.max,
        })
    });

    serde_json::json!({
        "company_name": record.company_name,
        "website": record.website,
        "email": record.email,
        "phone": record.phone,
        "whatsapp": record.whatsapp,
        "contact_name": record.contact_name,
        "contact_position": record.contact_position,
        "location": record.location,
        "sector": record.sector,
        "description": record.description,
        "quality_score": record.quality_score.value(),
        "status": record.status.as_str(),
        "extra_data": {
            "linkedin_profiles": extra.linkedin_profiles,
            "decision_makers": extra.decision_makers,
            "scoring": scoring,
            "raw_details": extra.raw_details,
            "provenance": {
                "source": extra.provenance.source,
                "strategy": extra.provenance.strategy,
                "block_index": extra.provenance.block_index,
            },
        },
    })
}
