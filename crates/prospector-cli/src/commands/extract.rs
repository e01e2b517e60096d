//! Extract command implementation.

use super::read_report;
use crate::cli::ExtractArgs;
use crate::config::OutputFormat;
use crate::error::{CliError, Result};
use crate::output::{prospect_json, Formatter};
use crate::sink::JsonLinesSink;
use prospector_domain::ProspectSink;
use prospector_extractor::{ExtractionResult, Extractor};
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, info};

/// Extraction outcome for one input.
#[derive(Debug)]
pub struct ReportOutcome {
    /// File path, or `stdin`
    pub source: String,
    /// Pipeline result
    pub result: ExtractionResult,
}

/// Execute the extract command.
pub async fn execute_extract(
    args: ExtractArgs,
    extractor: Arc<Extractor>,
    formatter: &Formatter,
) -> Result<()> {
    let sources = if args.stdin {
        vec!["-".to_string()]
    } else if args.files.is_empty() {
        return Err(CliError::InvalidInput(
            "Must specify report files or --stdin".to_string(),
        ));
    } else {
        args.files
    };

    let outcomes = extract_reports(sources, extractor).await?;

    if let Some(path) = &args.output {
        let written = export(&outcomes, Path::new(path))?;
        info!(path = %path, written, "Exported prospects");
    }

    print_outcomes(&outcomes, args.show_dropped, formatter)
}

/// Run the pipeline over every source, one blocking task per report.
///
/// Outcomes come back in the order the sources were given.
pub async fn extract_reports(
    sources: Vec<String>,
    extractor: Arc<Extractor>,
) -> Result<Vec<ReportOutcome>> {
    let mut handles = Vec::with_capacity(sources.len());
    for source in sources {
        let extractor = Arc::clone(&extractor);
        handles.push(tokio::task::spawn_blocking(move || -> Result<ReportOutcome> {
            let text = read_report(&source)?;
            debug!(source = %source, bytes = text.len(), "Extracting report");
            let result = extractor.run(&text);
            let source = if source == "-" { "stdin".to_string() } else { source };
            Ok(ReportOutcome { source, result })
        }));
    }

    let mut outcomes = Vec::with_capacity(handles.len());
    for handle in handles {
        outcomes.push(handle.await??);
    }
    Ok(outcomes)
}

/// Append every extracted record to a JSON-lines file.
fn export(outcomes: &[ReportOutcome], path: &Path) -> Result<usize> {
    let mut sink = JsonLinesSink::append_to(path)?;
    for outcome in outcomes {
        sink.accept(&outcome.result.prospects)?;
    }
    sink.flush()?;
    Ok(sink.written())
}

fn print_outcomes(outcomes: &[ReportOutcome], show_dropped: bool, formatter: &Formatter) -> Result<()> {
    if formatter.format() == OutputFormat::Json {
        let values: Vec<_> = outcomes
            .iter()
            .map(|outcome| {
                let result = &outcome.result;
                let mut value = serde_json::json!({
                    "source": outcome.source,
                    "structured": result.metadata.structured,
                    "strategy": result.metadata.strategy.map(|s| s.as_str()),
                    "prospects": result.prospects.iter().map(prospect_json).collect::<Vec<_>>(),
                });
                if show_dropped {
                    value["dropped"] = serde_json::json!(result
                        .failures
                        .iter()
                        .map(|f| serde_json::json!({
                            "company_name": f.company_name,
                            "order_index": f.order_index,
                            "reason": f.reason,
                        }))
                        .collect::<Vec<_>>());
                }
                value
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&values)?);
        return Ok(());
    }

    for outcome in outcomes {
        let result = &outcome.result;
        if formatter.format() == OutputFormat::Table {
            println!(
                "{}",
                formatter.extraction_summary(
                    &outcome.source,
                    &result.prospects,
                    result.failures.len()
                )
            );
            if !result.metadata.structured {
                println!("{}", formatter.info("Report did not pass the format check"));
            }
        }

        let rendered = formatter.format_prospects(&result.prospects)?;
        if !rendered.is_empty() {
            println!("{}", rendered);
        }
        if show_dropped {
            let dropped = formatter.format_failures(&result.failures)?;
            if !dropped.is_empty() {
                println!("{}", dropped);
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    const REPORT: &str = "1. **Acme Corp**\n- **Website:** https://acme.example.com\n\n\
                          2. **Globex**\n- **Email:** sales@globex.example.com\n";

    #[tokio::test]
    async fn test_extract_reports_keeps_order() {
        let dir = tempdir().unwrap();
        let structured = dir.path().join("a.md");
        let prose = dir.path().join("b.md");
        fs::write(&structured, REPORT).unwrap();
        fs::write(&prose, "Nothing structured in here at all.").unwrap();

        let sources = vec![
            structured.to_string_lossy().into_owned(),
            prose.to_string_lossy().into_owned(),
        ];
        let outcomes = extract_reports(sources.clone(), Arc::new(Extractor::with_defaults()))
            .await
            .unwrap();

        assert_eq!(outcomes.len(), 2);
        assert_eq!(outcomes[0].source, sources[0]);
        assert_eq!(outcomes[0].result.prospects.len(), 2);
        assert!(outcomes[1].result.prospects.is_empty());
        assert!(!outcomes[1].result.metadata.structured);
    }

    #[tokio::test]
    async fn test_missing_file_is_an_error() {
        let result = extract_reports(
            vec!["/definitely/not/here.md".to_string()],
            Arc::new(Extractor::with_defaults()),
        )
        .await;
        assert!(matches!(result, Err(CliError::Io(_))));
    }

    #[tokio::test]
    async fn test_export_writes_json_lines() {
        let dir = tempdir().unwrap();
        let report = dir.path().join("a.md");
        fs::write(&report, REPORT).unwrap();
        let outcomes = extract_reports(
            vec![report.to_string_lossy().into_owned()],
            Arc::new(Extractor::with_defaults()),
        )
        .await
        .unwrap();

        let output = dir.path().join("out.jsonl");
        assert_eq!(export(&outcomes, &output).unwrap(), 2);
        let contents = fs::read_to_string(&output).unwrap();
        assert!(contents.lines().next().unwrap().contains("\"Acme Corp\""));
    }
}
