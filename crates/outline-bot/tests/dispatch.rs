use outline_bot::{BotError, Dispatcher, DocumentHandler, DocumentUpload, Handler, Incoming, MessageKind};
use outline_core::{AppConfig, DocumentFormat, ExtractionMode, OutputFormat};
use outline_delivery::{reassemble, MemoryChannel};
use std::io::{Cursor, Write};
use std::num::NonZeroUsize;
use std::sync::Arc;
use zip::write::FileOptions;
use zip::{CompressionMethod, ZipWriter};

const ACK: &str = "All contents sent.";

fn docx(paragraphs: &[&str]) -> Vec<u8> {
    let body: String = paragraphs
        .iter()
        .map(|p| format!("<w:p><w:r><w:t>{p}</w:t></w:r></w:p>"))
        .collect();
    let xml = format!(
        r#"<?xml version="1.0" encoding="UTF-8"?><w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main"><w:body>{body}</w:body></w:document>"#
    );
    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    let options = FileOptions::default().compression_method(CompressionMethod::Stored);
    writer.start_file("word/document.xml", options).unwrap();
    writer.write_all(xml.as_bytes()).unwrap();
    writer.finish().unwrap().into_inner()
}

fn upload(bytes: Vec<u8>) -> Incoming {
    Incoming::Document(DocumentUpload::new("report.docx", DocumentFormat::DOCX_MIME, bytes))
}

async fn run(config: &AppConfig, message: Incoming) -> Vec<String> {
    let dispatcher = Dispatcher::from_config(config).unwrap();
    let channel = MemoryChannel::new();
    dispatcher.dispatch(&message, &channel).await.unwrap();
    channel.sent()
}

// ========== Chat surface ==========

#[tokio::test]
async fn test_start_greets_by_name() {
    let sent = run(&AppConfig::default(), Incoming::Start { user_name: "Dilnoza Karimova".into() }).await;
    assert_eq!(sent, vec!["Hello, Dilnoza Karimova!"]);
}

#[tokio::test]
async fn test_text_gets_usage_hint() {
    let config = AppConfig::default();
    let sent = run(&config, Incoming::Text("hi".into())).await;
    assert_eq!(sent, vec![config.bot.usage_hint.clone()]);
}

#[tokio::test]
async fn test_unsupported_type_rejected_before_extraction() {
    let config = AppConfig::default();
    let message = Incoming::Document(DocumentUpload::new("notes.txt", "text/plain", b"1 Intro".to_vec()));
    let sent = run(&config, message).await;
    assert_eq!(sent, vec![config.bot.unsupported_type.clone()]);
}

// ========== Documents ==========

#[tokio::test]
async fn test_docx_outline_delivered_with_acknowledgement() {
    let bytes = docx(&["Cover", "Mundarija", "1. Introduction ........ 3", "1.1 Overview .... 4", "2 Setup ..... 7"]);
    let sent = run(&AppConfig::default(), upload(bytes)).await;

    assert_eq!(sent.last().map(String::as_str), Some(ACK));
    let payload = reassemble(&sent[..sent.len() - 1]);
    let json: serde_json::Value = serde_json::from_str(&payload).unwrap();
    assert_eq!(json["1"]["title"], "Introduction");
    assert_eq!(json["1"]["sections"]["1.1"]["title"], "Overview");
    assert_eq!(json["2"]["title"], "Setup");
    assert!(payload.contains("\n    \"1\""));
}

#[tokio::test]
async fn test_docx_without_marker_reports_not_found() {
    let mut config = AppConfig::default();
    config.delivery.pretty = false;
    let sent = run(&config, upload(docx(&["1 Introduction", "2 Setup"]))).await;
    assert_eq!(sent, vec![r#"{"error":"table of contents not found"}"#.to_string(), ACK.to_string()]);
}

#[tokio::test]
async fn test_small_frames_reassemble() {
    let mut config = AppConfig::default();
    config.delivery.frame_limit = NonZeroUsize::new(16).unwrap();
    let sent = run(&config, upload(docx(&["Contents", "1 Кириш", "1.1 Мақсад", "2 Натижа"]))).await;

    let frames = &sent[..sent.len() - 1];
    assert!(frames.len() > 1);
    assert!(frames.iter().all(|f| f.chars().count() <= 16));
    let json: serde_json::Value = serde_json::from_str(&reassemble(frames)).unwrap();
    assert_eq!(json["1"]["sections"]["1.1"]["title"], "Мақсад");
}

#[tokio::test]
async fn test_full_body_mode_collects_body() {
    let mut config = AppConfig::default();
    config.outline.mode = ExtractionMode::FullBody;
    config.delivery.pretty = false;
    let sent = run(&config, upload(docx(&["1 Intro", "Some text.", "1.1 Details", "More."]))).await;
    let json: serde_json::Value = serde_json::from_str(&sent[0]).unwrap();
    assert_eq!(json["1"]["body"], "Some text.");
    assert_eq!(json["1"]["sections"]["1.1"]["body"], "More.");
}

#[tokio::test]
async fn test_text_output() {
    let mut config = AppConfig::default();
    config.bot.output = OutputFormat::Text;
    config.delivery.pretty = false;
    let sent = run(&config, upload(docx(&["Title", "1 Intro"]))).await;
    assert_eq!(sent, vec![r#"{"text":"Title\n1 Intro"}"#.to_string(), ACK.to_string()]);
}

#[tokio::test]
async fn test_corrupt_file_answered_with_failure_message() {
    let config = AppConfig::default();
    let sent = run(&config, upload(b"not a zip archive".to_vec())).await;
    assert_eq!(sent.len(), 1);
    assert!(sent[0].starts_with(&config.bot.failure_prefix));
}

// ========== Routing ==========

#[tokio::test]
async fn test_missing_handler() {
    let dispatcher = Dispatcher::new();
    let channel = MemoryChannel::new();
    let err = dispatcher.dispatch(&Incoming::Text("x".into()), &channel).await.unwrap_err();
    assert!(matches!(err, BotError::NoHandler(MessageKind::Text)));
    assert!(channel.is_empty());
}

#[tokio::test]
async fn test_registered_handler_replaces_default() {
    let config = AppConfig::default();
    let dispatcher = Dispatcher::from_config(&config).unwrap();
    assert!(dispatcher.handles(MessageKind::Start));
    assert!(dispatcher.handles(MessageKind::Document));
    assert!(dispatcher.handles(MessageKind::Text));

    let handler: Arc<dyn Handler> = Arc::new(DocumentHandler::new(&config).unwrap());
    let dispatcher = dispatcher.register(MessageKind::Text, handler);
    let channel = MemoryChannel::new();
    let err = dispatcher.dispatch(&Incoming::Text("x".into()), &channel).await.unwrap_err();
    assert!(matches!(
        err,
        BotError::UnexpectedMessage { expected: MessageKind::Document, got: MessageKind::Text }
    ));
}

#[tokio::test]
async fn test_channel_failure_surfaces() {
    let dispatcher = Dispatcher::from_config(&AppConfig::default()).unwrap();
    let channel = MemoryChannel::failing_after(0);
    let err = dispatcher
        .dispatch(&upload(docx(&["Contents", "1 Intro"])), &channel)
        .await
        .unwrap_err();
    assert!(matches!(err, BotError::Delivery(_)));
}

#[tokio::test]
async fn test_invalid_outline_config_rejected() {
    let mut config = AppConfig::default();
    config.outline.markers.clear();
    assert!(matches!(Dispatcher::from_config(&config), Err(BotError::Outline(_))));
}

#[tokio::test]
async fn test_concurrent_uploads_stay_separate() {
    let config = AppConfig::default();
    let dispatcher = Arc::new(Dispatcher::from_config(&config).unwrap());
    let mut tasks = Vec::new();
    for i in 1..=4 {
        let dispatcher = Arc::clone(&dispatcher);
        tasks.push(tokio::spawn(async move {
            let title = format!("{i} Chapter{i}");
            let channel = MemoryChannel::new();
            dispatcher.dispatch(&upload(docx(&["Contents", title.as_str()])), &channel).await.unwrap();
            (i, channel.sent())
        }));
    }
    for task in tasks {
        let (i, sent) = task.await.unwrap();
        let json: serde_json::Value = serde_json::from_str(&sent[0]).unwrap();
        assert_eq!(json[i.to_string()]["title"], format!("Chapter{i}"));
        assert_eq!(sent.len(), 2);
    }
}
