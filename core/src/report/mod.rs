// Report module - 报告生成
// 为所有文件的提取结果分配全局序号，并渲染为 Markdown 或 JSON

mod markdown;

use crate::error::Result;
use crate::scanner::{ErrorRecord, ScanOutcome};
use chrono::{DateTime, Local};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum ReportFormat {
    #[default]
    Markdown,
    Json,
}

impl ReportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Markdown => "md",
            Self::Json => "json",
        }
    }
}

/// One line of the report: a record plus its running index across all files.
#[derive(Debug, Clone, Serialize)]
pub struct ReportEntry {
    pub index: usize,
    pub file_path: String,
    pub line_number: usize,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_line: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ScanReport {
    pub codebase: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feature: Option<String>,
    pub generated_at: DateTime<Local>,
    pub files_scanned: usize,
    pub files_skipped: Vec<String>,
    pub entries: Vec<ReportEntry>,
    #[serde(skip)]
    pub include_full_line: bool,
}

impl ScanReport {
    pub fn new(
        codebase: impl Into<String>,
        feature: Option<String>,
        outcome: ScanOutcome,
        include_full_line: bool,
    ) -> Self {
        let files_scanned = outcome.files_scanned();
        let files_skipped = outcome
            .skipped
            .into_iter()
            .map(|skipped| skipped.file_path)
            .collect();

        // 序号从 1 开始，跨文件连续
        let entries = outcome
            .scanned
            .into_iter()
            .flat_map(|file| file.records)
            .enumerate()
            .map(|(i, record)| to_entry(i + 1, record, include_full_line))
            .collect();

        Self {
            codebase: codebase.into(),
            feature: feature.filter(|f| !f.trim().is_empty()),
            generated_at: Local::now(),
            files_scanned,
            files_skipped,
            entries,
            include_full_line,
        }
    }

    pub fn message_count(&self) -> usize {
        self.entries.len()
    }

    pub fn render(&self, format: ReportFormat) -> Result<String> {
        match format {
            ReportFormat::Markdown => Ok(markdown::render(self)),
            ReportFormat::Json => Ok(serde_json::to_string_pretty(self)?),
        }
    }
}

fn to_entry(index: usize, record: ErrorRecord, include_full_line: bool) -> ReportEntry {
    ReportEntry {
        index,
        file_path: record.file_path,
        line_number: record.line_number,
        message: record.message,
        full_line: include_full_line.then_some(record.full_line),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scanner::{FileScan, SkippedFile};

    fn record(file: &str, line: usize, message: &str) -> ErrorRecord {
        ErrorRecord {
            message: message.to_string(),
            file_path: file.to_string(),
            line_number: line,
            full_line: format!("log.Error(\"{message}\")"),
        }
    }

    fn outcome() -> ScanOutcome {
        ScanOutcome {
            scanned: vec![
                FileScan {
                    file_path: "a.go".into(),
                    records: vec![record("a.go", 3, "first"), record("a.go", 9, "second")],
                },
                FileScan {
                    file_path: "empty.go".into(),
                    records: vec![],
                },
                FileScan {
                    file_path: "b.go".into(),
                    records: vec![record("b.go", 1, "third")],
                },
            ],
            skipped: vec![SkippedFile {
                file_path: "gone.go".into(),
                reason: "not found".into(),
            }],
        }
    }

    #[test]
    fn index_runs_across_files() {
        let report = ScanReport::new("demo", None, outcome(), false);
        let indexed: Vec<_> = report
            .entries
            .iter()
            .map(|e| (e.index, e.file_path.as_str(), e.message.as_str()))
            .collect();
        assert_eq!(
            indexed,
            vec![(1, "a.go", "first"), (2, "a.go", "second"), (3, "b.go", "third")]
        );
        assert_eq!(report.files_scanned, 3);
        assert_eq!(report.files_skipped, vec!["gone.go"]);
    }

    #[test]
    fn json_omits_full_line_unless_requested() {
        let plain = ScanReport::new("demo", None, outcome(), false)
            .render(ReportFormat::Json)
            .unwrap();
        let value: serde_json::Value = serde_json::from_str(&plain).unwrap();
        assert!(value["entries"][0].get("full_line").is_none());
        assert!(value.get("feature").is_none());
        assert_eq!(value["entries"][2]["index"], 3);

        let full = ScanReport::new("demo", Some("login".into()), outcome(), true)
            .render(ReportFormat::Json)
            .unwrap();
        let value: serde_json::Value = serde_json::from_str(&full).unwrap();
        assert_eq!(value["entries"][0]["full_line"], "log.Error(\"first\")");
        assert_eq!(value["feature"], "login");
    }

    #[test]
    fn format_extension_matches_format() {
        assert_eq!(ReportFormat::default(), ReportFormat::Markdown);
        assert_eq!(ReportFormat::Markdown.extension(), "md");
        assert_eq!(ReportFormat::Json.extension(), "json");
    }
}
