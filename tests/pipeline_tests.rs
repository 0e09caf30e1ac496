// Pipeline orchestration tests driven by the scripted in-process client: no
// network, deterministic provider output.

use std::sync::Arc;

use cardforge::{
    render, ApiConfig, CardForgeError, DynLlmClient, LogKind, Pipeline, RequestLog,
    ScriptedClient,
};
use serde_json::json;

fn pipeline_with(
    responses: &[&str],
) -> (Pipeline, Arc<ScriptedClient>, RequestLog) {
    let scripted = Arc::new(ScriptedClient::with_responses(responses.to_vec()));
    let client: DynLlmClient = scripted.clone();
    let config = ApiConfig::chat("sk-1234567890abcdef1234567890", "https://api.example.com/v1")
        .with_models("tool-model", "coding-model");
    let log = RequestLog::new();
    let pipeline = Pipeline::new(client, &config, log.clone());
    (pipeline, scripted, log)
}

#[tokio::test]
async fn convert_raw_text_uses_tool_model_and_strips_fences() {
    let (pipeline, scripted, log) =
        pipeline_with(&["```\n<CharData>\n\"Name\": \"Rook\"\n</CharData>\n```"]);

    let out = pipeline.convert_raw_text("a grizzled scout").await.unwrap();
    assert!(out.starts_with("<CharData>"));
    assert!(!out.contains("```"));

    let requests = scripted.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].model, "tool-model");
    assert!(requests[0].prompt.contains("a grizzled scout"));

    let kinds: Vec<LogKind> = log.entries().iter().map(|e| e.kind).collect();
    assert_eq!(kinds, vec![LogKind::Info, LogKind::Request, LogKind::Response]);
}

#[tokio::test]
async fn generate_template_parses_fenced_json_and_cleans_html() {
    let bundle_json = json!({
        "regex": r#""Name":\s*"(?<Name>[^"]*)""#,
        "html": "```html\n<div>$<Name></div>\n```"
    })
    .to_string();
    let response = format!("```json\n{}\n```", bundle_json);
    let (pipeline, scripted, _log) = pipeline_with(&[response.as_str()]);

    let bundle = pipeline
        .generate_template(r#"<CharData>"Name": "Rook"</CharData>"#)
        .await
        .unwrap();
    assert_eq!(bundle.html, "<div>$<Name></div>");

    // A schema-constrained json call was made on the tool model.
    let requests = scripted.requests();
    assert_eq!(requests[0].model, "tool-model");
    assert!(requests[0].json_mode);
    assert!(requests[0].schema.is_some());

    // The generated pair actually renders.
    let outcome = render(
        &bundle.regex,
        r#"<CharData>"Name": "Rook"</CharData>"#,
        &bundle.html,
    );
    assert!(outcome.is_ok());
    assert_eq!(outcome.html, "<div>Rook</div>");
}

#[tokio::test]
async fn generate_template_rejects_unparseable_json() {
    let (pipeline, _scripted, log) = pipeline_with(&["this is prose, not a template"]);

    let result = pipeline.generate_template("<CharData></CharData>").await;
    assert!(matches!(result, Err(CardForgeError::Serialization(_))));

    let entries = log.entries();
    assert_eq!(entries.last().unwrap().kind, LogKind::Error);
}

#[tokio::test]
async fn provider_failure_is_logged_then_propagated() {
    // Empty script: the first call fails.
    let (pipeline, _scripted, log) = pipeline_with(&[]);

    let result = pipeline.convert_raw_text("anything").await;
    assert!(result.is_err());

    let kinds: Vec<LogKind> = log.entries().iter().map(|e| e.kind).collect();
    assert_eq!(kinds, vec![LogKind::Info, LogKind::Request, LogKind::Error]);
}

#[tokio::test]
async fn modify_template_attaches_image_and_uses_coding_model() {
    let (pipeline, scripted, log) = pipeline_with(&["<div>restyled</div>"]);

    let image = cardforge::ImageAttachment::new("image/png", "QUJD");
    let out = pipeline
        .modify_template("<div>$<HP></div>", "make it darker", Some(image))
        .await
        .unwrap();
    assert_eq!(out, "<div>restyled</div>");

    let requests = scripted.requests();
    assert_eq!(requests[0].model, "coding-model");
    assert!(requests[0].image.is_some());
    assert!(requests[0].prompt.contains("make it darker"));
    assert!(requests[0].prompt.contains("<div>$<HP></div>"));

    // The raw base64 payload must not be copied into the log.
    let request_entry = &log.entries()[1];
    assert_eq!(request_entry.kind, LogKind::Request);
    assert!(request_entry.content.contains("[+ image data]"));
    assert!(!request_entry.content.contains("QUJD"));
}

#[tokio::test]
async fn generate_inspiration_embeds_placeholder_keys() {
    let (pipeline, scripted, _log) = pipeline_with(&["<div>$<HP> $<MP></div>"]);

    let keys = vec!["HP".to_string(), "MP".to_string()];
    let out = pipeline.generate_inspiration(&keys).await.unwrap();
    assert!(out.contains("$<HP>"));

    let requests = scripted.requests();
    assert_eq!(requests[0].model, "coding-model");
    assert!(requests[0].prompt.contains("$<HP>, $<MP>"));
}

#[tokio::test]
async fn session_pipeline_shares_the_session_log() {
    use cardforge::Session;

    let mut session = Session::new();
    session.set_config(ApiConfig::chat(
        "sk-1234567890abcdef1234567890",
        "https://api.example.com/v1",
    ));

    // Pipeline construction succeeds and appends nothing yet.
    let _pipeline = session.pipeline().unwrap();
    assert!(session.log().is_empty());

    // The in-flight guard serializes user-initiated actions.
    let guard = session.begin_request().unwrap();
    assert!(matches!(session.begin_request(), Err(CardForgeError::Busy)));
    drop(guard);
}
