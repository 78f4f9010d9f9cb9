//! Exporting a text document to a PDF file.

use crate::document::WriteStats;
use crate::error::PDFError;
use crate::font::FontSpec;
use crate::info::Info;
use crate::layout::{layout_with_metrics, LineMetrics, Margins};
use crate::metrics::MetricsTable;
use crate::pagesize::{PageOrientation, PageSize, PaperSize};
use crate::writer::DocumentWriter;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Extension given to exported documents
pub const PDF_EXTENSION: &str = "pdf";

/// Everything an export needs besides the text itself
#[derive(Debug, Clone, PartialEq)]
pub struct ExportConfig {
    pub font: FontSpec,
    pub metrics: MetricsTable,
    pub paper: PaperSize,
    pub landscape: bool,
    pub margins: Margins,
    /// Directory exported files are written into
    pub output_dir: PathBuf,
    pub title: Option<String>,
    pub author: Option<String>,
}

impl Default for ExportConfig {
    fn default() -> Self {
        ExportConfig {
            font: FontSpec::default(),
            metrics: MetricsTable::default(),
            paper: PaperSize::default(),
            landscape: false,
            margins: Margins::default(),
            output_dir: PathBuf::from("."),
            title: None,
            author: None,
        }
    }
}

impl ExportConfig {
    /// The paper dimensions after applying the orientation
    pub fn page_size(&self) -> PageSize {
        if self.landscape {
            self.paper.size().landscape()
        } else {
            self.paper.size().portrait()
        }
    }

    fn info(&self, default_title: Option<&str>) -> Info {
        let mut info = Info::new();
        if let Some(title) = self.title.as_deref().or(default_title) {
            info.title(title);
        }
        if let Some(author) = &self.author {
            info.author(author);
        }
        info
    }
}

/// Summary of a finished export
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExportSummary {
    /// Characters per wrapped line
    pub column_budget: usize,
    /// Number of render commands produced by layout
    pub commands: usize,
    pub pages: usize,
    pub bytes: usize,
}

/// Derive the name of the exported document from the source file name: the
/// part before the first `.`, with spaces replaced by underscores, placed in
/// `output_dir`.
///
/// `notes/My Draft.v2.txt` exports to `<output_dir>/My_Draft.pdf`.
pub fn output_path_for(source: &Path, output_dir: &Path) -> PathBuf {
    let file_name = source
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    let stem = file_name.split('.').next().unwrap_or_default();
    output_dir.join(format!("{}.{PDF_EXTENSION}", stem.replace(' ', "_")))
}

/// Normalize `\r\n` and lone `\r` line endings to `\n`
pub fn normalize_newlines(text: &str) -> String {
    text.replace("\r\n", "\n").replace('\r', "\n")
}

/// Lay out `text` and write it as a PDF to `out`. Layout happens completely
/// before anything is written, so a layout error leaves `out` untouched.
pub fn export_text<W: Write>(
    text: &str,
    config: &ExportConfig,
    out: W,
) -> Result<ExportSummary, PDFError> {
    export_with_title(text, config, None, out)
}

fn export_with_title<W: Write>(
    text: &str,
    config: &ExportConfig,
    default_title: Option<&str>,
    out: W,
) -> Result<ExportSummary, PDFError> {
    let metrics = LineMetrics::new(&config.font, &config.metrics)?;
    tracing::debug!(
        family = %config.font.family,
        point_size = config.font.point_size,
        column_budget = metrics.column_budget,
        line_height_mm = metrics.line_height.0,
        "computed line metrics"
    );

    let commands = layout_with_metrics(text, &config.font, &config.metrics)?;
    let writer = DocumentWriter::for_font(
        &config.font,
        &config.metrics,
        config.page_size(),
        config.margins,
    )?;

    let WriteStats {
        pages,
        replaced_chars,
        bytes,
    } = writer.write(&commands, Some(config.info(default_title)), out)?;

    if replaced_chars > 0 {
        tracing::warn!(
            replaced_chars,
            family = %config.font.family,
            "characters outside the font's encoding were replaced with '?'"
        );
    }

    Ok(ExportSummary {
        column_budget: metrics.column_budget,
        commands: commands.len(),
        pages,
        bytes,
    })
}

/// Export a text file to a PDF in the configured output directory, returning
/// the path written to. The output file is only created once the document has
/// been fully rendered.
pub fn export_file(
    source: &Path,
    config: &ExportConfig,
) -> Result<(PathBuf, ExportSummary), PDFError> {
    let text = normalize_newlines(&fs::read_to_string(source)?);
    let default_title = source
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned());

    let mut rendered: Vec<u8> = Vec::new();
    let summary = export_with_title(&text, config, default_title.as_deref(), &mut rendered)?;

    let target = output_path_for(source, &config.output_dir);
    fs::write(&target, &rendered)?;
    tracing::info!(
        source = %source.display(),
        target = %target.display(),
        pages = summary.pages,
        "exported document"
    );

    Ok((target, summary))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LayoutError;

    #[test]
    fn output_names_follow_the_source_name() {
        let dir = Path::new("out");
        assert_eq!(
            output_path_for(Path::new("notes/My Draft.v2.txt"), dir),
            PathBuf::from("out/My_Draft.pdf")
        );
        assert_eq!(
            output_path_for(Path::new("README"), dir),
            PathBuf::from("out/README.pdf")
        );
        assert_eq!(
            output_path_for(Path::new("/tmp/a b c.md"), Path::new(".")),
            PathBuf::from("./a_b_c.pdf")
        );
    }

    #[test]
    fn newlines_are_normalized() {
        assert_eq!(normalize_newlines("a\r\nb\rc\n"), "a\nb\nc\n");
    }

    #[test]
    fn landscape_swaps_dimensions() {
        let config = ExportConfig {
            landscape: true,
            ..ExportConfig::default()
        };
        let (width, height) = config.page_size();
        assert!(width > height);
    }

    #[test]
    fn export_reports_layout_and_pages() {
        let mut out = Vec::new();
        let summary = export_text("~2Title\nbody", &ExportConfig::default(), &mut out).unwrap();
        assert_eq!(summary.column_budget, 85);
        assert_eq!(summary.commands, 4);
        assert_eq!(summary.pages, 1);
        assert_eq!(summary.bytes, out.len());
    }

    #[test]
    fn layout_errors_write_nothing() {
        let mut out = Vec::new();
        let err = export_text("~!", &ExportConfig::default(), &mut out).unwrap_err();
        assert!(matches!(
            err,
            PDFError::Layout(LayoutError::MalformedDirective { line: 1, .. })
        ));
        assert!(out.is_empty());
    }
}
