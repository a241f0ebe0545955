mod html;
mod json;
mod terminal;

use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use extract::{DocumentKind, DocumentText};
use line_diff::{build_views, compute_diff, AnnotatedView, EditScript};
use log::{debug, info};
use std::fs::File;
use std::io::{self, BufWriter, IsTerminal, Write};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "diffmate")]
#[command(about = "Compare two documents and show a side-by-side line diff")]
#[command(version)]
struct Cli {
    #[arg(help = "Path to the first (old) document")]
    file1: PathBuf,

    #[arg(help = "Path to the second (new) document")]
    file2: PathBuf,

    #[arg(long, short, value_enum, default_value = "text", help = "Output format")]
    format: OutputFormat,

    #[arg(
        long,
        short,
        value_name = "FILE",
        help = "Write the report to a file instead of stdout"
    )]
    output: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Html,
    Json,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    run(&cli)
}

fn run(cli: &Cli) -> Result<()> {
    // Both documents must be of the same type; this is checked before any
    // extraction work happens.
    let kind1 = DocumentKind::from_path(&cli.file1)?;
    let kind2 = DocumentKind::from_path(&cli.file2)?;
    if kind1 != kind2 {
        bail!("documents must be of the same type ({} vs {})", kind1, kind2);
    }

    info!(
        "Comparing {} against {}",
        cli.file1.display(),
        cli.file2.display()
    );

    let doc1 = DocumentText::from_path(&cli.file1)
        .with_context(|| format!("Failed to read {}", cli.file1.display()))?;
    let doc2 = DocumentText::from_path(&cli.file2)
        .with_context(|| format!("Failed to read {}", cli.file2.display()))?;

    let lines1 = doc1.lines();
    let lines2 = doc2.lines();

    let script = compute_diff(&lines1, &lines2);
    debug!(
        "{} common, {} removed, {} added",
        script.common_lines(),
        script.removed_lines(),
        script.added_lines()
    );

    let (old_view, new_view) = build_views(&script);

    let name1 = cli.file1.display().to_string();
    let name2 = cli.file2.display().to_string();

    match &cli.output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create {}", path.display()))?;
            let mut writer = BufWriter::new(file);
            render(
                &mut writer, cli.format, false, &name1, &name2, &old_view, &new_view, &script,
            )?;
            writer.flush()?;
        }
        None => {
            let color = cli.format == OutputFormat::Text && io::stdout().is_terminal();
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            render(
                &mut handle, cli.format, color, &name1, &name2, &old_view, &new_view, &script,
            )?;
        }
    }

    Ok(())
}

#[allow(clippy::too_many_arguments)]
fn render<W: Write>(
    w: &mut W,
    format: OutputFormat,
    color: bool,
    name1: &str,
    name2: &str,
    old_view: &AnnotatedView,
    new_view: &AnnotatedView,
    script: &EditScript,
) -> Result<()> {
    match format {
        OutputFormat::Text => terminal::write_text_report(w, name1, name2, old_view, new_view, color),
        OutputFormat::Html => html::write_html_report(w, name1, name2, old_view, new_view),
        OutputFormat::Json => json::write_json_report(w, name1, name2, old_view, new_view, script),
    }
}
