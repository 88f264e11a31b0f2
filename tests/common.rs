use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use async_trait::async_trait;
use doclyzer::enums::ai_provider_error::AiProviderError;
use doclyzer::services::document_analyzer::DocumentAnalyzer;
use doclyzer::structs::analysis_request::AnalysisRequest;
use doclyzer::structs::config::server_config::ServerConfig;
use doclyzer::traits::ai_provider::AiProvider;
use serde_json::Value;
use warp::http::StatusCode;
use warp::Filter;

pub const ID_CARD_TEXT: &str = "Here is the result: {\"title\":\"ID card\",\"description\":\"d\",\"category\":\"Идентификация\",\"tags\":[],\"actions\":[],\"content\":\"c\"} Thanks.";

/// Provider returning a canned answer and counting calls.
pub struct StubProvider {
    reply: Result<String, AiProviderError>,
    calls: AtomicUsize,
}

impl StubProvider {
    pub fn answering(text: &str) -> Arc<Self> {
        Arc::new(Self {
            reply: Ok(text.to_string()),
            calls: AtomicUsize::new(0),
        })
    }

    pub fn failing(error: AiProviderError) -> Arc<Self> {
        Arc::new(Self {
            reply: Err(error),
            calls: AtomicUsize::new(0),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl AiProvider for StubProvider {
    async fn generate(
        &self,
        _api_key: &str,
        _prompt: &str,
        _request: &AnalysisRequest,
    ) -> Result<String, AiProviderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.reply.clone()
    }
}

pub fn analyzer_with(provider: Arc<StubProvider>, api_key: Option<&str>) -> Arc<DocumentAnalyzer> {
    Arc::new(DocumentAnalyzer::new(provider, api_key.map(str::to_string)))
}

pub fn server_config() -> ServerConfig {
    ServerConfig::default()
}

pub fn json_body(body: &[u8]) -> Value {
    serde_json::from_slice(body).expect("response body is JSON")
}

/// A request seen by the fake upstream.
#[derive(Debug, Clone)]
pub struct CapturedCall {
    pub model_action: String,
    pub key: Option<String>,
    pub body: Value,
}

/// Serves `reply_body` with `status` for every `generateContent` call under `/v1/models/`.
pub async fn spawn_fake_gemini(status: u16, reply_body: String) -> (SocketAddr, Arc<Mutex<Vec<CapturedCall>>>) {
    let calls = Arc::new(Mutex::new(Vec::new()));
    let captured = Arc::clone(&calls);
    let status = StatusCode::from_u16(status).unwrap();

    let route = warp::post()
        .and(warp::path!("v1" / "models" / String))
        .and(warp::query::<HashMap<String, String>>())
        .and(warp::body::json::<Value>())
        .map(move |model_action: String, query: HashMap<String, String>, body: Value| {
            captured.lock().unwrap().push(CapturedCall {
                model_action,
                key: query.get("key").cloned(),
                body,
            });

            warp::http::Response::builder()
                .status(status)
                .header("content-type", "application/json")
                .body(reply_body.clone())
                .unwrap()
        });

    let (addr, server) = warp::serve(route).bind_ephemeral(([127, 0, 0, 1], 0));
    tokio::spawn(server);
    (addr, calls)
}

pub fn gemini_text_response(text: &str) -> String {
    serde_json::json!({
        "candidates": [{
            "content": { "parts": [{ "text": text }], "role": "model" },
            "finishReason": "STOP"
        }]
    })
    .to_string()
}
