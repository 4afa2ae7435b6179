use approvalguard_types::{ApprovalReport, ids};

/// Escape a workflow command message.
pub fn escape_data(s: &str) -> String {
    s.replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}

fn escape_property(s: &str) -> String {
    escape_data(s).replace(':', "%3A").replace(',', "%2C")
}

/// The failure signal: `::error::{message}`.
pub fn render_error_command(message: &str) -> String {
    format!("::error::{}", escape_data(message))
}

/// File-level annotations for unmet requirements, one per matched file, capped at `max`.
///
/// Format:
/// `::error file={path},title=approvalguard::{message}`
pub fn render_github_annotations(report: &ApprovalReport, max: usize) -> Vec<String> {
    let mut out = Vec::new();

    for r in report.unmet() {
        let message = format!(
            "Requires {} approvals (PR has {}) because it matches: {}",
            r.required_approvals,
            report.approvals,
            r.patterns.join(", ")
        );
        for file in &r.matched_files {
            out.push(format!(
                "::error file={},title={}::{}",
                escape_property(file.as_str()),
                ids::TOOL_NAME,
                escape_data(&message)
            ));
        }
    }

    out.truncate(max);
    out
}
