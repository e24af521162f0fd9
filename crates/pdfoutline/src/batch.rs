//! Directory batch runner: one JSON outline per input PDF.

use std::path::{Path, PathBuf};

use colored::Colorize;
use outline_core::{extract_outline, file_stem, HeuristicConfig};
use pdf::PdfDocument;

use crate::prelude::{println, *};

/// What happened to a single input file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileReport {
    pub file: String,
    pub outcome: Outcome,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Processed { headings: usize, output: PathBuf },
    Failed { reason: String },
}

impl FileReport {
    pub fn is_processed(&self) -> bool {
        matches!(self.outcome, Outcome::Processed { .. })
    }
}

/// Regular files in `input` with a `.pdf` extension (any case), sorted by path.
pub fn discover_pdfs(input: &Path) -> Result<Vec<PathBuf>> {
    let entries = std::fs::read_dir(input)
        .map_err(|e| Error::InputUnreadable(input.to_path_buf(), e.to_string()))?;

    let mut files = Vec::new();
    for entry in entries {
        let path = entry
            .map_err(|e| Error::InputUnreadable(input.to_path_buf(), e.to_string()))?
            .path();
        let is_pdf = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("pdf"));
        if is_pdf && path.is_file() {
            files.push(path);
        }
    }
    files.sort();

    Ok(files)
}

/// Extract the outline of `path` and write it to `<output_dir>/<stem>.json`.
///
/// Returns the number of headings and the written path.
pub fn process_file(
    path: &Path,
    output_dir: &Path,
    config: &HeuristicConfig,
) -> Result<(usize, PathBuf)> {
    let stem = file_stem(path);
    let result = {
        let document = PdfDocument::open(path)?;
        extract_outline(&document, &stem, config)
    };
    log::debug!(
        "{}: title {:?}, {} headings",
        path.display(),
        result.title,
        result.outline.len()
    );

    let json = serde_json::to_string_pretty(&result)?;
    let target = output_dir.join(f!("{stem}.json"));
    std::fs::write(&target, json)
        .with_context(|| f!("failed to write {}", target.display()))?;

    Ok((result.outline.len(), target))
}

/// Process every PDF in `input`, writing results into `output`.
///
/// A failing file is reported and skipped; only an unreadable input directory
/// or an output directory that cannot be created stops the batch.
pub fn run(
    input: &Path,
    output: &Path,
    config: &HeuristicConfig,
    verbose: bool,
) -> Result<Vec<FileReport>> {
    std::fs::create_dir_all(output)
        .map_err(|e| Error::OutputUnavailable(output.to_path_buf(), e.to_string()))?;

    let files = discover_pdfs(input)?;
    println!("Found {} PDF(s)", files.len());
    log::info!("processing {} file(s) from {}", files.len(), input.display());

    let mut reports = Vec::with_capacity(files.len());
    for path in files {
        let file = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();

        let outcome = match process_file(&path, output, config) {
            Ok((headings, written)) => {
                println!(
                    "{} Processed: {} → {} headings",
                    "[✓]".green(),
                    file,
                    headings
                );
                if verbose {
                    println!("    {}", written.display().to_string().dimmed());
                }
                Outcome::Processed {
                    headings,
                    output: written,
                }
            }
            Err(err) => {
                let reason = f!("{err:#}");
                log::warn!("{}: {}", path.display(), reason);
                println!("{} Failed: {}: {}", "[✗]".red(), file, reason);
                Outcome::Failed { reason }
            }
        };

        reports.push(FileReport { file, outcome });
    }

    Ok(reports)
}

pub fn print_summary(reports: &[FileReport]) {
    let processed = reports.iter().filter(|r| r.is_processed()).count();
    let failed = reports.len() - processed;

    let failed_label = f!("{failed} failed");
    println!(
        "{} {} processed, {}",
        "Done:".bold(),
        processed.to_string().green(),
        if failed > 0 {
            failed_label.red().to_string()
        } else {
            failed_label
        }
    );
}
