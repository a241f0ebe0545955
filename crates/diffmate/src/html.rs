//! HTML report: one page with the two annotated panes side by side.
//!
//! Line content arrives raw from the diff engine and is escaped here,
//! immediately before being embedded in markup.

use anyhow::Result;
use line_diff::{AnnotatedLine, AnnotatedView, LineRole};
use std::io::Write;

pub(crate) fn write_html_report<W: Write>(
    w: &mut W,
    old_name: &str,
    new_name: &str,
    old_view: &AnnotatedView,
    new_view: &AnnotatedView,
) -> Result<()> {
    writeln!(w, "<!DOCTYPE html>")?;
    writeln!(w, "<html>")?;
    writeln!(w, "<head>")?;
    writeln!(w, "<meta charset=\"utf-8\">")?;
    writeln!(w, "<title>DiffMate report</title>")?;
    writeln!(w, "<style>")?;
    writeln!(w, "body {{ font-family: sans-serif; }}")?;
    writeln!(w, ".panes {{ display: flex; gap: 16px; }}")?;
    writeln!(
        w,
        ".pane {{ flex: 1; white-space: pre-wrap; height: 600px; overflow-y: auto; border: 1px solid #ccc; padding: 10px; }}"
    )?;
    writeln!(w, ".removed {{ background-color: #ffcccc; }}")?;
    writeln!(w, ".added {{ background-color: #ccffcc; }}")?;
    writeln!(w, "</style>")?;
    writeln!(w, "</head>")?;
    writeln!(w, "<body>")?;
    writeln!(w, "<div class=\"panes\">")?;

    write_pane(w, &format!("File 1: {}", old_name), old_view)?;
    write_pane(w, &format!("File 2: {}", new_name), new_view)?;

    writeln!(w, "</div>")?;
    writeln!(w, "</body>")?;
    writeln!(w, "</html>")?;

    Ok(())
}

fn write_pane<W: Write>(w: &mut W, title: &str, view: &AnnotatedView) -> Result<()> {
    writeln!(w, "<div>")?;
    writeln!(w, "<h2>{}</h2>", escape(title))?;
    writeln!(w, "<div class=\"pane\">")?;
    for line in view {
        write_line(w, line)?;
    }
    writeln!(w, "</div>")?;
    writeln!(w, "</div>")?;
    Ok(())
}

fn write_line<W: Write>(w: &mut W, line: &AnnotatedLine) -> Result<()> {
    match line.role {
        LineRole::Removed => {
            writeln!(w, "<span class=\"removed\">{}</span>", escape(&line.content))?
        }
        LineRole::Added => {
            writeln!(w, "<span class=\"added\">{}</span>", escape(&line.content))?
        }
        LineRole::Unchanged => writeln!(w, "{}", escape(&line.content))?,
    }
    Ok(())
}

/// Escape text for embedding in HTML element content or attribute values
fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
