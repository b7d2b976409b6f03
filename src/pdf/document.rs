use lopdf::{Document, ObjectId};
use std::io::Read;

pub struct PdfDocument {
    pub doc: Document,
}

impl PdfDocument {
    /// Parse a PDF from any reader. The reader is consumed and dropped before
    /// this returns.
    pub fn load<R: Read>(source: R) -> lopdf::Result<Self> {
        let doc = Document::load_from(source)?;
        Ok(PdfDocument { doc })
    }

    pub fn page_count(&self) -> u32 {
        self.doc.get_pages().len() as u32
    }

    /// Get 1-indexed page object IDs
    pub fn page_ids(&self) -> Vec<(u32, ObjectId)> {
        let mut pages: Vec<_> = self.doc.get_pages().into_iter().collect();
        pages.sort_by_key(|(num, _)| *num);
        pages
    }

    /// Build a new document holding only the given 1-indexed page.
    ///
    /// `all_pages` is this document's `page_ids()`, computed once by the
    /// caller. Returns `None` if the page does not exist.
    pub fn single_page(&self, all_pages: &[(u32, ObjectId)], page: u32) -> Option<Document> {
        if !all_pages.iter().any(|(num, _)| *num == page) {
            return None;
        }

        let pages_to_delete: Vec<u32> = all_pages
            .iter()
            .map(|(num, _)| *num)
            .filter(|num| *num != page)
            .collect();

        let mut new_doc = self.doc.clone();
        if !pages_to_delete.is_empty() {
            new_doc.delete_pages(&pages_to_delete);
        }
        // Drop the objects only the deleted pages referenced
        new_doc.prune_objects();

        Some(new_doc)
    }

    /// Serialize a document to PDF bytes
    pub fn to_bytes(doc: &mut Document) -> lopdf::Result<Vec<u8>> {
        let mut buf = Vec::new();
        doc.save_to(&mut buf).map_err(lopdf::Error::from)?;
        Ok(buf)
    }
}
