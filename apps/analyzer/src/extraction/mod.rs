//! Text extraction: turns an uploaded PDF into plain text, page by page.
//!
//! Pluggable behind the `TextExtractor` trait; `AppState` carries an
//! `Arc<dyn TextExtractor>` (default: `PdfTextExtractor`).
//!
//! # Failure policy
//! All-or-nothing. A page that fails to decode aborts the whole document and no
//! partial text is returned. The decoder runs inside `spawn_blocking`, so a
//! panic inside it surfaces as `ExtractionError::DecoderPanicked` instead of
//! taking the worker down.

use async_trait::async_trait;
use bytes::Bytes;
use thiserror::Error;
use tracing::{debug, warn};

const PDF_MAGIC: &[u8] = b"%PDF";

#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("The uploaded file is empty")]
    Empty,

    #[error("The uploaded file is not a PDF document")]
    NotPdf,

    #[error("Failed to decode PDF: {0}")]
    Decode(String),

    #[error("PDF decoder crashed while reading the document")]
    DecoderPanicked,

    #[error("Extraction task failed: {0}")]
    Task(String),
}

/// Produces the plain text of a document.
#[async_trait]
pub trait TextExtractor: Send + Sync {
    async fn extract(&self, bytes: Bytes) -> Result<String, ExtractionError>;
}

/// `pdf-extract` backed extractor.
pub struct PdfTextExtractor;

#[async_trait]
impl TextExtractor for PdfTextExtractor {
    async fn extract(&self, bytes: Bytes) -> Result<String, ExtractionError> {
        if bytes.is_empty() {
            return Err(ExtractionError::Empty);
        }
        if !is_pdf(&bytes) {
            return Err(ExtractionError::NotPdf);
        }

        // Decoding is CPU-bound; keep it off the async executor.
        let pages = tokio::task::spawn_blocking(move || {
            pdf_extract::extract_text_from_mem_by_pages(&bytes)
                .map_err(|e| ExtractionError::Decode(e.to_string()))
        })
        .await
        .map_err(|e| {
            if e.is_panic() {
                warn!("PDF decoder panicked");
                ExtractionError::DecoderPanicked
            } else {
                ExtractionError::Task(e.to_string())
            }
        })??;

        debug!(pages = pages.len(), "PDF decoded");
        Ok(join_pages(&pages))
    }
}

/// True when the data starts with `%PDF`, ignoring leading whitespace.
pub fn is_pdf(data: &[u8]) -> bool {
    let start = data
        .iter()
        .position(|b| !b.is_ascii_whitespace())
        .unwrap_or(data.len());
    data[start..].starts_with(PDF_MAGIC)
}

/// Joins each page's fragments with a single space and terminates every page
/// with a newline, keeping page order.
pub fn join_pages<S: AsRef<str>>(pages: &[S]) -> String {
    let mut text = String::new();
    for page in pages {
        text.push_str(&join_fragments(page.as_ref()));
        text.push('\n');
    }
    text
}

/// A page's fragments are its non-blank lines, trimmed.
fn join_fragments(page: &str) -> String {
    page.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use lopdf::content::{Content, Operation};
    use lopdf::{dictionary, Document, Object, Stream};

    /// Builds a minimal PDF with one Courier text line per page.
    fn make_pdf(page_texts: &[&str]) -> Vec<u8> {
        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();
        let font_id = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => "Courier",
        });
        let resources_id = doc.add_object(dictionary! {
            "Font" => dictionary! {
                "F1" => font_id,
            },
        });

        let mut kids: Vec<Object> = Vec::new();
        for text in page_texts {
            let content = Content {
                operations: vec![
                    Operation::new("BT", vec![]),
                    Operation::new("Tf", vec!["F1".into(), 24.into()]),
                    Operation::new("Td", vec![72.into(), 700.into()]),
                    Operation::new("Tj", vec![Object::string_literal(*text)]),
                    Operation::new("ET", vec![]),
                ],
            };
            let content_id =
                doc.add_object(Stream::new(dictionary! {}, content.encode().unwrap()));
            let page_id = doc.add_object(dictionary! {
                "Type" => "Page",
                "Parent" => pages_id,
                "Contents" => content_id,
                "Resources" => resources_id,
                "MediaBox" => vec![0.into(), 0.into(), 612.into(), 792.into()],
            });
            kids.push(page_id.into());
        }

        let count = kids.len() as i64;
        doc.objects.insert(
            pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => kids,
                "Count" => count,
            }),
        );
        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);

        let mut buf = Vec::new();
        doc.save_to(&mut buf).unwrap();
        buf
    }

    #[test]
    fn test_is_pdf_accepts_magic_with_leading_whitespace() {
        assert!(is_pdf(b"%PDF-1.7\n..."));
        assert!(is_pdf(b"\r\n  %PDF-1.4"));
        assert!(!is_pdf(b"PK\x03\x04 zip archive"));
        assert!(!is_pdf(b""));
        assert!(!is_pdf(b"%PD"));
    }

    #[test]
    fn test_join_pages_spaces_fragments_and_terminates_pages() {
        let pages = ["Jane Doe\n  Rust Engineer  \n\n", "Skills:\nDocker\nAWS"];
        assert_eq!(
            join_pages(&pages),
            "Jane Doe Rust Engineer\nSkills: Docker AWS\n"
        );
    }

    #[test]
    fn test_join_pages_blank_page_still_gets_newline() {
        let pages = ["first", "   \n", "third"];
        assert_eq!(join_pages(&pages), "first\n\nthird\n");
    }

    #[test]
    fn test_join_pages_no_pages_is_empty() {
        let pages: [&str; 0] = [];
        assert_eq!(join_pages(&pages), "");
    }

    #[tokio::test]
    async fn test_empty_upload_rejected() {
        let err = PdfTextExtractor.extract(Bytes::new()).await.unwrap_err();
        assert!(matches!(err, ExtractionError::Empty));
    }

    #[tokio::test]
    async fn test_non_pdf_rejected() {
        let err = PdfTextExtractor
            .extract(Bytes::from_static(b"Hello, I am a plain text resume"))
            .await
            .unwrap_err();
        assert!(matches!(err, ExtractionError::NotPdf));
    }

    #[tokio::test]
    async fn test_truncated_pdf_fails_without_partial_text() {
        let err = PdfTextExtractor
            .extract(Bytes::from_static(b"%PDF-1.5\n1 0 obj\n<< /Type /Catalog"))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            ExtractionError::Decode(_) | ExtractionError::DecoderPanicked
        ));
    }

    #[tokio::test]
    async fn test_extracts_pages_in_order() {
        let pdf = make_pdf(&["Kubernetes Operator", "Terraform Modules"]);
        let text = PdfTextExtractor.extract(Bytes::from(pdf)).await.unwrap();

        let first = text.find("Kubernetes").expect("first page text");
        let second = text.find("Terraform").expect("second page text");
        assert!(first < second);
        assert!(text.ends_with('\n'));
    }
}
