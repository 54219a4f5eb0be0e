#![allow(dead_code)]

use knowledge_navigator::clients::mock::{MockClient, MockHandle, MockResponse};
use knowledge_navigator::clients::openai::models::OpenAIModel;
use knowledge_navigator::core::{Assistant, RetryConfig};
use knowledge_navigator::menu::Navigator;
use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, Stream};
use std::sync::Arc;
use std::time::Duration;
use tempfile::TempDir;

/// A navigator over a mock client writing artifacts into a fresh temp dir.
/// Keep the `TempDir` alive for as long as the navigator is used.
pub fn mock_navigator(responses: Vec<MockResponse>) -> (Navigator<MockClient>, Arc<MockHandle>, TempDir) {
    mock_navigator_with_retry(responses, RetryConfig::default())
}

pub fn mock_navigator_with_retry(
    responses: Vec<MockResponse>,
    retry: RetryConfig,
) -> (Navigator<MockClient>, Arc<MockHandle>, TempDir) {
    let (client, handle) = MockClient::with_responses(responses);
    let assistant = Assistant::new(client, OpenAIModel::Gpt4o).with_retry(retry);
    let dir = tempfile::tempdir().expect("temp dir");
    let navigator = Navigator::new(assistant, dir.path().join("output"));
    (navigator, handle, dir)
}

pub fn fast_retry(max_retries: usize) -> RetryConfig {
    RetryConfig { max_retries, initial_backoff: Duration::from_millis(1) }
}

/// A minimal text PDF, one line per page.
pub fn pdf_with_pages(pages: &[&str]) -> Vec<u8> {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();
    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Courier",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! { "F1" => font_id },
    });

    let mut kids: Vec<Object> = Vec::new();
    for text in pages {
        let content = Content {
            operations: vec![
                Operation::new("BT", vec![]),
                Operation::new("Tf", vec!["F1".into(), 18.into()]),
                Operation::new("Td", vec![50.into(), 750.into()]),
                Operation::new("Tj", vec![Object::string_literal(*text)]),
                Operation::new("ET", vec![]),
            ],
        };
        let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode().expect("content")));
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
        Object::Dictionary(dictionary! { "Type" => "Pages", "Kids" => kids, "Count" => count }),
    );
    let catalog_id = doc.add_object(dictionary! { "Type" => "Catalog", "Pages" => pages_id });
    doc.trailer.set("Root", catalog_id);

    let mut bytes = Vec::new();
    doc.save_to(&mut bytes).expect("save pdf");
    bytes
}
