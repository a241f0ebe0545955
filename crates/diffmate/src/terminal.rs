//! Plain text report: both annotated panes printed in sequence with a
//! marker gutter, optionally colored for terminals.

use anyhow::Result;
use line_diff::{AnnotatedLine, AnnotatedView, LineRole};
use std::io::Write;

const RED: &str = "\x1b[31m";
const GREEN: &str = "\x1b[32m";
const RESET: &str = "\x1b[0m";

pub(crate) fn write_text_report<W: Write>(
    w: &mut W,
    old_name: &str,
    new_name: &str,
    old_view: &AnnotatedView,
    new_view: &AnnotatedView,
    color: bool,
) -> Result<()> {
    writeln!(w, "File 1: {}", old_name)?;
    for line in old_view {
        write_line(w, line, color)?;
    }

    writeln!(w)?;
    writeln!(w, "File 2: {}", new_name)?;
    for line in new_view {
        write_line(w, line, color)?;
    }

    writeln!(w)?;

    let removed = old_view.changed_lines();
    let added = new_view.changed_lines();
    if removed == 0 && added == 0 {
        writeln!(w, "No differences found.")?;
    } else {
        let unchanged = old_view.len() - removed;
        writeln!(w, "{} removed, {} added, {} unchanged", removed, added, unchanged)?;
    }

    Ok(())
}

fn write_line<W: Write>(w: &mut W, line: &AnnotatedLine, color: bool) -> Result<()> {
    match line.role {
        LineRole::Removed if color => writeln!(w, "{}- {}{}", RED, line.content, RESET)?,
        LineRole::Removed => writeln!(w, "- {}", line.content)?,
        LineRole::Added if color => writeln!(w, "{}+ {}{}", GREEN, line.content, RESET)?,
        LineRole::Added => writeln!(w, "+ {}", line.content)?,
        _ => writeln!(w, "  {}", line.content)?,
    }
    Ok(())
}
