//! Machine-readable report: both annotated views plus summary counts.

use anyhow::Result;
use line_diff::{AnnotatedView, EditScript};
use std::io::Write;

pub(crate) fn write_json_report<W: Write>(
    w: &mut W,
    old_name: &str,
    new_name: &str,
    old_view: &AnnotatedView,
    new_view: &AnnotatedView,
    script: &EditScript,
) -> Result<()> {
    let report = serde_json::json!({
        "file1": { "name": old_name, "lines": old_view.lines() },
        "file2": { "name": new_name, "lines": new_view.lines() },
        "summary": {
            "common": script.common_lines(),
            "removed": script.removed_lines(),
            "added": script.added_lines(),
        },
    });

    writeln!(w, "{}", serde_json::to_string_pretty(&report)?)?;
    Ok(())
}
