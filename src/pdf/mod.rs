pub mod document;
pub mod extract;

#[cfg(test)]
pub mod testing;

pub use document::PdfDocument;
