use super::ScanReport;

pub(super) fn render(report: &ScanReport) -> String {
    let mut out = String::new();

    out.push_str(&format!("# Error messages: {}\n\n", escape_text(&report.codebase)));
    if let Some(feature) = &report.feature {
        out.push_str(&format!("- Feature: {}\n", escape_text(feature)));
    }
    out.push_str(&format!(
        "- Generated: {}\n",
        report.generated_at.format("%Y-%m-%d %H:%M:%S")
    ));
    out.push_str(&format!("- Files scanned: {}\n", report.files_scanned));
    out.push_str(&format!("- Files skipped: {}\n", report.files_skipped.len()));
    out.push_str(&format!("- Messages: {}\n\n", report.entries.len()));

    if report.entries.is_empty() {
        out.push_str("No error messages found.\n");
    } else if report.include_full_line {
        out.push_str("| # | File | Line | Message | Code |\n");
        out.push_str("| --- | --- | --- | --- | --- |\n");
        for entry in &report.entries {
            let code = entry.full_line.as_deref().unwrap_or_default();
            out.push_str(&format!(
                "| {} | {} | {} | {} | {} |\n",
                entry.index,
                code_span(&entry.file_path),
                entry.line_number,
                escape_text(&entry.message),
                code_span(code)
            ));
        }
    } else {
        out.push_str("| # | File | Line | Message |\n");
        out.push_str("| --- | --- | --- | --- |\n");
        for entry in &report.entries {
            out.push_str(&format!(
                "| {} | {} | {} | {} |\n",
                entry.index,
                code_span(&entry.file_path),
                entry.line_number,
                escape_text(&entry.message)
            ));
        }
    }

    if !report.files_skipped.is_empty() {
        out.push_str("\n## Skipped files\n\n");
        for path in &report.files_skipped {
            out.push_str(&format!("- {}\n", code_span(path)));
        }
    }

    out
}

fn escape_text(text: &str) -> String {
    text.replace('|', "\\|")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Inline code that survives backticks in `text` and sits inside a table cell.
fn code_span(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }

    let longest_run = text
        .split(|c| c != '`')
        .map(str::len)
        .max()
        .unwrap_or(0);
    let fence = "`".repeat(longest_run + 1);
    let pad = if text.starts_with('`') || text.ends_with('`') {
        " "
    } else {
        ""
    };

    format!("{fence}{pad}{}{pad}{fence}", text.replace('|', "\\|"))
}
