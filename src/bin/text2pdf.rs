//! Command line front-end: export text files to PDF and inspect layout metrics.

use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use text2pdf::export::{export_file, ExportConfig};
use text2pdf::layout::{LineMetrics, Margins};
use text2pdf::pagesize::PaperSize;
use text2pdf::selection::{Selection, FONT_MENU, SIZE_MENU};
use text2pdf::{MetricsTable, Mm};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "text2pdf", about = "Lay out text files as PDF documents", version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Args)]
struct FontArgs {
    /// Font family, one of the families listed by `text2pdf fonts`
    #[arg(short, long, env = "TEXT2PDF_FONT", default_value = "Courier")]
    font: String,

    /// Point size, one of the sizes listed by `text2pdf fonts`
    #[arg(short, long, env = "TEXT2PDF_SIZE", default_value_t = 10)]
    size: u16,
}

impl FontArgs {
    fn selection(&self) -> anyhow::Result<Selection> {
        let mut selection = Selection::default();
        selection.select_font(&self.font)?;
        selection.select_size(self.size)?;
        Ok(selection)
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Export a text file to PDF
    Export {
        /// The text file to export
        file: PathBuf,

        #[command(flatten)]
        font: FontArgs,

        /// Paper size
        #[arg(short, long, env = "TEXT2PDF_PAPER", default_value_t = PaperSize::A4)]
        paper: PaperSize,

        /// Rotate the paper to landscape
        #[arg(long)]
        landscape: bool,

        /// Margin on every side of the page, in millimetres. Left and right
        /// together may not take more than 20mm off the A4 width.
        #[arg(long, default_value_t = 10.0)]
        margin: f64,

        /// Directory to write the PDF into
        #[arg(short, long, env = "TEXT2PDF_OUTPUT_DIR", default_value = ".")]
        output_dir: PathBuf,

        /// Document title, defaults to the file name
        #[arg(long)]
        title: Option<String>,

        /// Document author
        #[arg(long)]
        author: Option<String>,
    },
    /// Print the column budget and line height for a font
    Budget {
        #[command(flatten)]
        font: FontArgs,
    },
    /// List the available font families and sizes
    Fonts,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "text2pdf=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Export {
            file,
            font,
            paper,
            landscape,
            margin,
            output_dir,
            title,
            author,
        } => {
            let mut selection = font.selection()?;
            selection.select_paper(paper);

            let config = ExportConfig {
                font: selection.font().clone(),
                paper: selection.paper(),
                landscape,
                margins: Margins::all(Mm(margin)),
                output_dir,
                title,
                author,
                ..ExportConfig::default()
            };

            let (target, summary) = export_file(&file, &config)
                .with_context(|| format!("failed to export {}", file.display()))?;
            println!(
                "{} ({} pages, {} columns)",
                target.display(),
                summary.pages,
                summary.column_budget
            );
        }
        Commands::Budget { font } => {
            let selection = font.selection()?;
            let metrics = LineMetrics::new(selection.font(), &MetricsTable::default())?;
            println!("columns:     {}", metrics.column_budget);
            println!("line height: {:.3} mm", metrics.line_height.0);
            println!("char width:  {:.3} mm", metrics.char_width.0);
        }
        Commands::Fonts => {
            let metrics = MetricsTable::default();
            for family in FONT_MENU {
                let coefficient = metrics.width_coefficient(family)?;
                println!("{family:<14} {coefficient}");
            }
            let sizes: Vec<String> = SIZE_MENU.iter().map(u16::to_string).collect();
            println!("sizes: {}", sizes.join(", "));
        }
    }

    Ok(())
}
