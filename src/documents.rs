//! PDF text extraction.
//!
//! Pages are read in document order and their text concatenated with no
//! separator. A page whose text cannot be decoded (image-only pages, unknown
//! encodings) contributes an empty string instead of failing the document.

use lopdf::Document;
use tracing::{debug, info};

use crate::error::DocumentError;

/// Text of every page, in page order.
pub fn extract_pages(pdf_bytes: &[u8]) -> Result<Vec<String>, DocumentError> {
    let document = Document::load_mem(pdf_bytes).map_err(|e| DocumentError::Parse(e.to_string()))?;
    let pages = document.get_pages();

    let mut texts = Vec::with_capacity(pages.len());
    for page_number in pages.keys() {
        let text = match document.extract_text(&[*page_number]) {
            Ok(text) => text,
            Err(e) => {
                debug!(page = page_number, error = %e, "No text extracted from page");
                String::new()
            }
        };
        texts.push(text);
    }

    info!(pages = texts.len(), "Extracted PDF text");
    Ok(texts)
}

/// Whole-document text.
pub fn extract_text(pdf_bytes: &[u8]) -> Result<String, DocumentError> {
    Ok(extract_pages(pdf_bytes)?.concat())
}

#[cfg(test)]
pub(crate) mod fixtures {
    use lopdf::content::{Content, Operation};
    use lopdf::{dictionary, Document, Object, Stream};

    /// A PDF with one Courier text line per entry in `pages`.
    pub fn pdf_with_pages(pages: &[&str]) -> Vec<u8> {
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
        for text in pages {
            let content = Content {
                operations: vec![
                    Operation::new("BT", vec![]),
                    Operation::new("Tf", vec!["F1".into(), 24.into()]),
                    Operation::new("Td", vec![72.into(), 700.into()]),
                    Operation::new("Tj", vec![Object::string_literal(*text)]),
                    Operation::new("ET", vec![]),
                ],
            };
            let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode().unwrap()));
            let page_id = doc.add_object(dictionary! {
                "Type" => "Page",
                "Parent" => pages_id,
                "Contents" => content_id,
                "Resources" => resources_id,
                "MediaBox" => vec![0.into(), 0.into(), 595.into(), 842.into()],
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

        let mut bytes = Vec::new();
        doc.save_to(&mut bytes).unwrap();
        bytes
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::pdf_with_pages;
    use super::*;

    #[test]
    fn zero_page_document_yields_empty_text() {
        let pdf = pdf_with_pages(&[]);
        assert!(extract_pages(&pdf).unwrap().is_empty());
        assert_eq!(extract_text(&pdf).unwrap(), "");
    }

    #[test]
    fn pages_are_concatenated_in_order() {
        let pdf = pdf_with_pages(&["Alpha", "Beta", "Gamma"]);
        let pages = extract_pages(&pdf).unwrap();
        assert_eq!(pages.len(), 3);

        let text = extract_text(&pdf).unwrap();
        assert_eq!(text, pages.concat());
        let alpha = text.find("Alpha").unwrap();
        let beta = text.find("Beta").unwrap();
        let gamma = text.find("Gamma").unwrap();
        assert!(alpha < beta && beta < gamma);
    }

    #[test]
    fn running_length_never_shrinks() {
        let pdf = pdf_with_pages(&["one", "", "three"]);
        let mut running = String::new();
        let mut last = 0;
        for page in extract_pages(&pdf).unwrap() {
            running.push_str(&page);
            assert!(running.len() >= last);
            last = running.len();
        }
    }

    #[test]
    fn garbage_input_is_a_parse_error() {
        let err = extract_text(b"definitely not a pdf").unwrap_err();
        assert!(matches!(err, DocumentError::Parse(_)));
    }
}
