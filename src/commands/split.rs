use crate::pdf::extract::extract;
use crate::scan::{scan, ScanOptions};
use anyhow::{Context, Result};
use std::io::Write;
use std::path::Path;

#[derive(Debug, Default, Clone, Copy)]
pub struct SplitOptions {
    pub scan: ScanOptions,
    /// Print one line per extracted page
    pub verbose: bool,
    /// Abort the run at the first failed file instead of moving on
    pub fail_fast: bool,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub succeeded: usize,
    pub failed: usize,
}

pub fn run<P: AsRef<Path>, W: Write>(
    root: P,
    options: &SplitOptions,
    out: &mut W,
) -> Result<RunSummary> {
    let root = root.as_ref();

    writeln!(out, "PDF Extractor started!\n\n")?;
    writeln!(out, "pdfsplit {}", env!("CARGO_PKG_VERSION"))?;

    let found = scan(root, &options.scan)?;
    log::debug!(
        "{} file(s) to split, {} director(ies) skipped",
        found.candidates.len(),
        found.skipped.len()
    );

    let mut summary = RunSummary::default();
    for candidate in &found.candidates {
        let file_name = candidate.file_name();
        writeln!(out, "Extracting {} ...", file_name)?;

        let mut progress_err = None;
        let result = extract(candidate, |page, total| {
            if options.verbose && progress_err.is_none() {
                if let Err(e) = writeln!(
                    out,
                    "Extracting page {} of {} from {}",
                    page, total, file_name
                ) {
                    progress_err = Some(e);
                }
            }
        });
        if let Some(e) = progress_err {
            return Err(e).context("Failed to write progress");
        }

        match result {
            Ok(extracted) => {
                summary.succeeded += 1;
                log::debug!(
                    "wrote {} page(s) from {}",
                    extracted.pages,
                    candidate.source_path().display()
                );
                writeln!(out, "{} extracted!", file_name)?;
            }
            Err(e) => {
                summary.failed += 1;
                log::error!("{:#}", anyhow::Error::new(e));
                writeln!(out, "{} extraction failed!", file_name)?;

                if options.fail_fast {
                    writeln!(out, "\nPDF Extractor finished!")?;
                    anyhow::bail!(
                        "Aborted after failing to extract {}",
                        candidate.source_path().display()
                    );
                }
            }
        }
    }

    writeln!(out, "\nPDF Extractor finished!")?;

    Ok(summary)
}
