//! @ai:module:intent Format scan reports and run summaries for the terminal (text, JSON)
//! @ai:module:layer infrastructure
//! @ai:module:public_api OutputFormat, format_scan, format_summary, to_json
//! @ai:module:depends_on generate, emitter
//! @ai:module:stateless true

use crate::emitter::struct_name;
use crate::generate::{GenerationSummary, ScanResult};
use colored::Colorize;
use serde::Serialize;

/// @ai:intent Output format options
#[derive(Debug, Clone, Copy, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    JsonPretty,
}

/// @ai:intent Format a dry-run scan as a string
/// @ai:effects pure
pub fn format_scan(scan: &ScanResult, format: OutputFormat) -> String {
    match format {
        OutputFormat::Json => to_json(scan, false),
        OutputFormat::JsonPretty => to_json(scan, true),
        OutputFormat::Text => format_scan_text(scan),
    }
}

/// @ai:intent Format a dry-run scan as human-readable text
/// @ai:effects pure
fn format_scan_text(scan: &ScanResult) -> String {
    let mut output = String::new();

    for (key, records) in scan.groups.iter() {
        output.push_str(&format!(
            "{} {}\n",
            struct_name(key).cyan().bold(),
            format!("(group {}, {} fields)", key, records.len()).dimmed()
        ));

        for record in records {
            output.push_str(&format!("    {}\n", record));
        }
    }

    if !scan.groups.is_empty() {
        output.push('\n');
    }

    output.push_str(&format!(
        "Scanned {} files: {} groups, {} fields\n",
        scan.files_scanned,
        scan.groups.group_count(),
        scan.groups.record_count()
    ));

    output
}

/// @ai:intent Format the result of a completed run
/// @ai:effects pure
pub fn format_summary(summary: &GenerationSummary, format: OutputFormat) -> String {
    match format {
        OutputFormat::Json => to_json(summary, false),
        OutputFormat::JsonPretty => to_json(summary, true),
        OutputFormat::Text => {
            let destination = summary
                .output
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "stdout".to_string());

            format!(
                "{} {} converters ({} fields) from {} files -> {}\n",
                "OK".green().bold(),
                summary.groups,
                summary.records,
                summary.files_scanned,
                destination.bold()
            )
        }
    }
}

/// @ai:intent Format any serializable value as JSON
/// @ai:effects pure
pub fn to_json<T: Serialize>(value: &T, pretty: bool) -> String {
    if pretty {
        serde_json::to_string_pretty(value).unwrap_or_default()
    } else {
        serde_json::to_string(value).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::declaration::ConverterRecord;
    use crate::groups::ConverterGroups;
    use std::path::PathBuf;

    fn scan() -> ScanResult {
        let mut groups = ConverterGroups::new();
        groups.insert(
            "Widgets",
            vec![
                ConverterRecord::from_identifier("Foo"),
                ConverterRecord::from_identifier("Bar"),
            ],
        );
        ScanResult {
            files_scanned: 3,
            groups,
        }
    }

    #[test]
    fn test_scan_text_lists_fields() {
        colored::control::set_override(false);
        let text = format_scan(&scan(), OutputFormat::Text);

        assert!(text.contains("WidgetsConverter (group Widgets, 2 fields)"));
        assert!(text.contains("    Foo Foo\n    Bar Bar\n"));
        assert!(text.contains("Scanned 3 files: 1 groups, 2 fields"));
    }

    #[test]
    fn test_scan_json() {
        let json = format_scan(&scan(), OutputFormat::Json);
        assert_eq!(
            json,
            r#"{"files_scanned":3,"groups":{"Widgets":[{"name":"Foo","type":"Foo"},{"name":"Bar","type":"Bar"}]}}"#
        );
    }

    #[test]
    fn test_summary_text_defaults_to_stdout() {
        colored::control::set_override(false);
        let summary = GenerationSummary {
            files_scanned: 2,
            groups: 1,
            records: 2,
            output: None,
        };

        assert_eq!(
            format_summary(&summary, OutputFormat::Text),
            "OK 1 converters (2 fields) from 2 files -> stdout\n"
        );
    }

    #[test]
    fn test_summary_json_includes_output_path() {
        let summary = GenerationSummary {
            files_scanned: 1,
            groups: 1,
            records: 1,
            output: Some(PathBuf::from("converter.go")),
        };

        let json = format_summary(&summary, OutputFormat::JsonPretty);
        assert!(json.contains("\"output\": \"converter.go\""));
    }
}
