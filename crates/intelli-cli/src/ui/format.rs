//! Formatting utilities for durations and run summaries.

use console::Term;
use intelli_docs::PipelineReport;
use owo_colors::OwoColorize;
use std::time::Duration;

/// Format duration in human-readable format.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use intelli_cli::ui::format_duration;
///
/// assert_eq!(format_duration(Duration::from_millis(50)), "50ms");
/// assert_eq!(format_duration(Duration::from_millis(1500)), "1.50s");
/// ```
pub fn format_duration(duration: Duration) -> String {
    let total_ms = duration.as_millis();

    if total_ms < 1000 {
        format!("{}ms", total_ms)
    } else {
        format!("{:.2}s", duration.as_secs_f64())
    }
}

/// Summary rows for a generation run, as `(label, value)` pairs.
pub fn format_report(report: &PipelineReport) -> Vec<(&'static str, String)> {
    let mut rows = Vec::new();
    if let Some(extract) = report.extract {
        rows.push((
            "Extracted",
            format!(
                "{} records from {} lines",
                extract.records_written, extract.lines_read
            ),
        ));
    }
    rows.push(("Properties", report.properties.to_string()));
    rows.push(("Methods", report.methods.to_string()));
    rows.push(("Objects", report.objects.to_string()));
    rows.push(("Nested (dropped)", report.nested_dropped.to_string()));
    rows.push(("Problems", report.problems.to_string()));
    rows
}

/// Print a run summary table to stderr.
pub fn print_report(report: &PipelineReport, elapsed: Duration) {
    let width = Term::stderr().size().1 as usize;

    eprintln!("\n{}", "Stub Summary".bold().underline());
    eprintln!("{}", "─".repeat(width.min(60)));

    for (label, value) in format_report(report) {
        eprintln!("  {} {:<18} {}", "▸".blue(), label, value.bright_white().bold());
    }

    eprintln!("{}", "─".repeat(width.min(60)));
    eprintln!("  {} {}", "Done in".bold(), format_duration(elapsed).green());
}

#[cfg(test)]
mod tests {
    use super::*;
    use intelli_docs::ExtractReport;

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(Duration::from_millis(0)), "0ms");
        assert_eq!(format_duration(Duration::from_millis(999)), "999ms");
        assert_eq!(format_duration(Duration::from_millis(2500)), "2.50s");
    }

    #[test]
    fn test_format_report_without_extract() {
        let report = PipelineReport {
            properties: 2,
            methods: 5,
            problems: 1,
            objects: 3,
            ..PipelineReport::default()
        };
        let rows = format_report(&report);
        assert_eq!(rows[0], ("Properties", "2".to_string()));
        assert!(rows.iter().all(|(label, _)| *label != "Extracted"));
        assert!(rows.contains(&("Problems", "1".to_string())));
    }

    #[test]
    fn test_format_report_with_extract() {
        let report = PipelineReport {
            extract: Some(ExtractReport {
                lines_read: 40,
                records_written: 12,
            }),
            ..PipelineReport::default()
        };
        let rows = format_report(&report);
        assert_eq!(rows[0].1, "12 records from 40 lines");
    }

    #[test]
    fn test_print_report() {
        // Should not panic
        print_report(&PipelineReport::default(), Duration::from_millis(12));
    }
}
