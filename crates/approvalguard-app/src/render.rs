//! Artifact writers: the JSON report and the Markdown summary.

use anyhow::Context;
use approvalguard_types::ApprovalReport;
use camino::Utf8Path;
use std::io::Write;

pub fn serialize_report(report: &ApprovalReport) -> anyhow::Result<Vec<u8>> {
    let mut data = serde_json::to_vec_pretty(report).context("serialize report")?;
    data.push(b'\n');
    Ok(data)
}

/// Write the JSON report, creating parent directories.
pub fn write_report(path: &Utf8Path, report: &ApprovalReport) -> anyhow::Result<()> {
    ensure_parent(path)?;
    let data = serialize_report(report)?;
    std::fs::write(path, data).with_context(|| format!("write report: {path}"))?;
    Ok(())
}

/// Append text to a file, creating it (and parents) if missing.
///
/// `$GITHUB_STEP_SUMMARY` is shared by every step of a job, so it is appended to, never replaced.
pub fn append_text(path: &Utf8Path, text: &str) -> anyhow::Result<()> {
    ensure_parent(path)?;
    let mut file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("open for append: {path}"))?;
    file.write_all(text.as_bytes())
        .with_context(|| format!("append text: {path}"))?;
    Ok(())
}

fn ensure_parent(path: &Utf8Path) -> anyhow::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_str().is_empty()
    {
        std::fs::create_dir_all(parent).with_context(|| format!("create directory: {parent}"))?;
    }
    Ok(())
}
