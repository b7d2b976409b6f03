use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use thiserror::Error;

use crate::pdf::PdfDocument;
use crate::scan::Candidate;

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("PDF not found: {}", path.display())]
    NotFound {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to parse PDF: {}", path.display())]
    MalformedDocument {
        path: PathBuf,
        #[source]
        source: lopdf::Error,
    },

    #[error("I/O error on {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to extract page {page} from {}: {message}", path.display())]
    Unexpected {
        path: PathBuf,
        page: u32,
        message: String,
    },
}

impl ExtractError {
    fn open(path: PathBuf, source: io::Error) -> Self {
        if source.kind() == io::ErrorKind::NotFound {
            ExtractError::NotFound { path, source }
        } else {
            ExtractError::Io { path, source }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExtractedPages {
    pub pages: u32,
}

/// Split a candidate into `<base>_<n>.pdf` files next to it, one per page.
///
/// `on_page(n, total)` runs before page `n` is written. Pages written before
/// an error stay on disk. The source file is only read.
pub fn extract<F>(candidate: &Candidate, mut on_page: F) -> Result<ExtractedPages, ExtractError>
where
    F: FnMut(u32, u32),
{
    let source_path = candidate.source_path();

    let doc = {
        let file = File::open(&source_path)
            .map_err(|e| ExtractError::open(source_path.clone(), e))?;
        PdfDocument::load(file).map_err(|e| ExtractError::MalformedDocument {
            path: source_path.clone(),
            source: e,
        })?
    };

    let total = doc.page_count();
    log::debug!("{} has {} page(s)", source_path.display(), total);

    let page_ids = doc.page_ids();
    for &(page, _) in &page_ids {
        let mut single = doc
            .single_page(&page_ids, page)
            .ok_or_else(|| ExtractError::Unexpected {
                path: source_path.clone(),
                page,
                message: "page missing from page tree".to_string(),
            })?;

        let bytes = PdfDocument::to_bytes(&mut single).map_err(|e| ExtractError::Unexpected {
            path: source_path.clone(),
            page,
            message: e.to_string(),
        })?;

        on_page(page, total);

        let output_path = candidate.page_path(page);
        write_file(&output_path, &bytes).map_err(|e| ExtractError::Io {
            path: output_path.clone(),
            source: e,
        })?;
    }

    Ok(ExtractedPages { pages: total })
}

fn write_file(path: &std::path::Path, bytes: &[u8]) -> io::Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    writer.write_all(bytes)?;
    writer.flush()
}
