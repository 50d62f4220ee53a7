//! Pipeline tests against mock provider HTTP servers
//!
//! Exercises the real Gemini and Ollama providers over the wire with
//! wiremock, driving the full pipeline down to the written artifacts.

use serde_json::json;
use serial_test::serial;
use std::sync::Arc;
use tempfile::TempDir;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use sitesmith::config::{GeminiConfig, GeneratorConfig, OllamaConfig, ParseStrategy};
use sitesmith::generator::Generator;
use sitesmith::providers::{GeminiProvider, OllamaProvider, TextModel};
use sitesmith::session::Responses;

const TEST_KEY_ENV: &str = "SITESMITH_TEST_GOOGLE_API_KEY";

fn temp_generator_config(dir: &TempDir, strategy: ParseStrategy) -> GeneratorConfig {
    GeneratorConfig {
        site_dir: dir.path().join("generated_sites"),
        styles_dir: dir.path().join("static/styles"),
        uploads_dir: dir.path().join("static/uploads"),
        strategy,
        ..Default::default()
    }
}

fn full_responses() -> Responses {
    Responses {
        website_type: Some("Blog".to_string()),
        color_palette: Some("Dark-Mode".to_string()),
        accent_color: Some("Blue".to_string()),
        additional_info: Some("a blog about birds".to_string()),
        image_paths: Vec::new(),
    }
}

/// Wraps raw model output in a Gemini generateContent response body
fn gemini_body(text: &str) -> serde_json::Value {
    json!({
        "candidates": [
            { "content": { "parts": [ { "text": text } ] } }
        ]
    })
}

async fn gemini_provider(server: &MockServer) -> GeminiProvider {
    std::env::set_var(TEST_KEY_ENV, "test-key");
    let config = GeminiConfig {
        api_base: Some(server.uri()),
        api_key_env: TEST_KEY_ENV.to_string(),
        ..Default::default()
    };
    GeminiProvider::new(config).unwrap()
}

#[tokio::test]
#[serial]
async fn test_gemini_json_strategy_end_to_end() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(
            "/v1beta/models/gemini-1.5-pro-latest:generateContent",
        ))
        .and(query_param("key", "test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(gemini_body(
            "```json\n{\"html\": \"<p>x</p>\", \"css\": \"body{color:red}\"}\n```",
        )))
        .expect(1)
        .mount(&server)
        .await;

    let provider = gemini_provider(&server).await;
    let dir = TempDir::new().unwrap();
    let generator = Generator::new(
        Arc::new(provider),
        temp_generator_config(&dir, ParseStrategy::Json),
    );

    let outcome = generator.generate(&full_responses()).await.unwrap();

    let page = std::fs::read_to_string(&outcome.current_site_path).unwrap();
    assert!(page.contains("<p>x</p>"));
    assert!(page.contains("body{color:red}"));
}

#[tokio::test]
#[serial]
async fn test_gemini_markup_strategy_end_to_end() {
    let server = MockServer::start().await;

    let document =
        "<html><head><style>body{background:#111}</style></head><body><h1>Birds</h1></body></html>";
    Mock::given(method("POST"))
        .and(path(
            "/v1beta/models/gemini-1.5-pro-latest:generateContent",
        ))
        .respond_with(ResponseTemplate::new(200).set_body_json(gemini_body(document)))
        .expect(1)
        .mount(&server)
        .await;

    let provider = gemini_provider(&server).await;
    let dir = TempDir::new().unwrap();
    let generator = Generator::new(
        Arc::new(provider),
        temp_generator_config(&dir, ParseStrategy::Markup),
    );

    let outcome = generator.generate(&full_responses()).await.unwrap();

    let stylesheet = std::fs::read_to_string(outcome.stylesheet_path.unwrap()).unwrap();
    assert_eq!(stylesheet, "body{background:#111}");

    let page = std::fs::read_to_string(outcome.page_path.unwrap()).unwrap();
    assert!(!page.contains("<style>"));
    assert!(page.contains(r#"href="/static/styles/blog-website.css""#));
    assert!(page.contains("<h1>Birds</h1>"));
}

#[tokio::test]
#[serial]
async fn test_gemini_unparseable_output_fails_without_writes() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(
            "/v1beta/models/gemini-1.5-pro-latest:generateContent",
        ))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(gemini_body("Here is your website! <html></html>")),
        )
        .mount(&server)
        .await;

    let provider = gemini_provider(&server).await;
    let dir = TempDir::new().unwrap();
    let config = temp_generator_config(&dir, ParseStrategy::Json);
    let current_site = config.current_site_path();
    let generator = Generator::new(Arc::new(provider), config);

    let result = generator.generate(&full_responses()).await;

    assert!(result.is_err());
    assert!(!current_site.exists());
}

#[tokio::test]
#[serial]
async fn test_gemini_api_error_surfaces_as_provider_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(
            "/v1beta/models/gemini-1.5-pro-latest:generateContent",
        ))
        .respond_with(ResponseTemplate::new(429).set_body_string("quota exceeded"))
        .mount(&server)
        .await;

    let provider = gemini_provider(&server).await;
    let result = provider.generate("prompt").await;

    let err = result.unwrap_err().to_string();
    assert!(err.contains("429"));
    assert!(err.contains("quota exceeded"));
}

#[tokio::test]
#[serial]
async fn test_gemini_elaboration_makes_two_calls() {
    let server = MockServer::start().await;

    // Both the elaboration pre-pass and the generation call hit the same
    // endpoint; two requests total are expected.
    Mock::given(method("POST"))
        .and(path(
            "/v1beta/models/gemini-1.5-pro-latest:generateContent",
        ))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(gemini_body(r#"{"html": "<p>x</p>", "css": ""}"#)),
        )
        .expect(2)
        .mount(&server)
        .await;

    let provider = gemini_provider(&server).await;
    let dir = TempDir::new().unwrap();
    let mut config = temp_generator_config(&dir, ParseStrategy::Json);
    config.elaborate_content = true;
    let generator = Generator::new(Arc::new(provider), config);

    generator.generate(&full_responses()).await.unwrap();
}

#[tokio::test]
async fn test_ollama_generate_end_to_end() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/generate"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "response": "{\"html\": \"<p>from ollama</p>\", \"css\": \"\"}",
            "done": true
        })))
        .expect(1)
        .mount(&server)
        .await;

    let provider = OllamaProvider::new(OllamaConfig {
        host: server.uri(),
        model: "llama3.2:latest".to_string(),
    })
    .unwrap();

    let dir = TempDir::new().unwrap();
    let generator = Generator::new(
        Arc::new(provider),
        temp_generator_config(&dir, ParseStrategy::Json),
    );

    let outcome = generator.generate(&full_responses()).await.unwrap();
    let page = std::fs::read_to_string(&outcome.current_site_path).unwrap();
    assert!(page.contains("<p>from ollama</p>"));
}

#[tokio::test]
async fn test_ollama_incomplete_response_fails() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/generate"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "response": "partial",
            "done": false
        })))
        .mount(&server)
        .await;

    let provider = OllamaProvider::new(OllamaConfig {
        host: server.uri(),
        model: "llama3.2:latest".to_string(),
    })
    .unwrap();

    assert!(provider.generate("prompt").await.is_err());
}
