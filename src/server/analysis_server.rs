use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;
use serde_json::json;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use warp::http::StatusCode;
use warp::hyper::body::Bytes;
use warp::reply::Response;
use warp::{Filter, Rejection, Reply};
use crate::config::constants::{ANALYZE_ROUTE, API_ROUTE_PREFIX};
use crate::errors::{AnalysisError, DoclyzerError, DoclyzerResult};
use crate::services::document_analyzer::DocumentAnalyzer;
use crate::structs::analysis_request::AnalysisRequest;
use crate::structs::config::server_config::ServerConfig;
use crate::structs::error_body::ErrorBody;

pub struct AnalysisServer {
    analyzer: Arc<DocumentAnalyzer>,
    config: ServerConfig,
    shutdown_tx: Option<oneshot::Sender<()>>,
    server_task: Option<JoinHandle<()>>,
}

impl AnalysisServer {
    pub fn new(analyzer: Arc<DocumentAnalyzer>, config: ServerConfig) -> Self {
        Self {
            analyzer,
            config,
            shutdown_tx: None,
            server_task: None,
        }
    }

    /// Binds and serves in the background, returning the bound address.
    pub async fn start(&mut self) -> DoclyzerResult<SocketAddr> {
        let addr = self.resolve_address().await?;

        let (shutdown_tx, shutdown_rx) = oneshot::channel();
        self.shutdown_tx = Some(shutdown_tx);

        let routes = routes(Arc::clone(&self.analyzer), &self.config);
        let (bound, server) = warp::serve(routes)
            .try_bind_with_graceful_shutdown(addr, async {
                shutdown_rx.await.ok();
            })
            .map_err(|e| DoclyzerError::Server(format!("failed to bind {}: {}", addr, e)))?;

        self.server_task = Some(tokio::spawn(server));

        if !self.analyzer.has_credential() {
            log::warn!("⚠️ No API key configured, analysis requests will fail with HTTP 500");
        }
        log::info!("🌐 Analysis server listening on http://{}", bound);
        Ok(bound)
    }

    /// Serves until Ctrl-C, then shuts down gracefully.
    pub async fn run_until_ctrl_c(mut self) -> DoclyzerResult<()> {
        self.start().await?;
        tokio::signal::ctrl_c().await?;
        self.shutdown().await
    }

    pub async fn shutdown(&mut self) -> DoclyzerResult<()> {
        log::info!("🛑 Shutting down analysis server...");

        if let Some(shutdown_tx) = self.shutdown_tx.take() {
            shutdown_tx
                .send(())
                .map_err(|()| DoclyzerError::Server("failed to send shutdown signal".to_string()))?;
        }

        if let Some(task) = self.server_task.take() {
            task.await
                .map_err(|e| DoclyzerError::Server(format!("server task failed: {}", e)))?;
        }

        log::info!("✅ Analysis server shutdown complete");
        Ok(())
    }

    async fn resolve_address(&self) -> DoclyzerResult<SocketAddr> {
        tokio::net::lookup_host((self.config.host.as_str(), self.config.port))
            .await?
            .next()
            .ok_or_else(|| DoclyzerError::Server(format!("cannot resolve host '{}'", self.config.host)))
    }
}

/// All HTTP routes of the service, with CORS and JSON error replies applied.
pub fn routes(
    analyzer: Arc<DocumentAnalyzer>,
    config: &ServerConfig,
) -> impl Filter<Extract = impl Reply, Error = Rejection> + Clone {
    let analyzer_filter = warp::any().map(move || Arc::clone(&analyzer));

    let health = warp::path!("health")
        .and(warp::get())
        .map(|| {
            warp::reply::json(&json!({
                "status": "ok",
                "version": env!("CARGO_PKG_VERSION"),
            }))
        });

    let analyze = warp::path(API_ROUTE_PREFIX)
        .and(warp::path(ANALYZE_ROUTE))
        .and(warp::path::end())
        .and(warp::post())
        .and(warp::body::content_length_limit(config.max_body_bytes))
        .and(warp::body::bytes())
        .and(analyzer_filter)
        .and_then(analyze_handler);

    let mut cors = warp::cors()
        .allow_methods(vec!["GET", "POST", "OPTIONS"])
        .allow_headers(vec!["content-type"]);
    cors = if config.cors_origins.is_empty() {
        cors.allow_any_origin()
    } else {
        cors.allow_origins(config.cors_origins.iter().map(String::as_str))
    };

    health
        .or(analyze)
        .recover(handle_rejection)
        .with(warp::log("doclyzer::http"))
        .with(cors)
}

async fn analyze_handler(body: Bytes, analyzer: Arc<DocumentAnalyzer>) -> Result<Response, Infallible> {
    let request: AnalysisRequest = match serde_json::from_slice(&body) {
        Ok(request) => request,
        Err(e) => {
            return Ok(error_reply(&AnalysisError::InvalidRequestPayload(format!(
                "Request body must be a JSON object with 'base64Data' and 'mimeType': {}",
                e
            ))));
        }
    };

    match analyzer.analyze(request).await {
        Ok(result) => Ok(warp::reply::with_status(warp::reply::json(&result), StatusCode::OK).into_response()),
        Err(e) => Ok(error_reply(&e)),
    }
}

fn error_reply(error: &AnalysisError) -> Response {
    let status = StatusCode::from_u16(error.status_code()).unwrap_or(StatusCode::BAD_GATEWAY);
    json_error(&error.to_error_body(), status)
}

fn json_error(body: &ErrorBody, status: StatusCode) -> Response {
    warp::reply::with_status(warp::reply::json(body), status).into_response()
}

async fn handle_rejection(rejection: Rejection) -> Result<Response, Infallible> {
    if rejection.is_not_found() {
        return Ok(json_error(&ErrorBody::new("Not found"), StatusCode::NOT_FOUND));
    }

    if rejection.find::<warp::reject::PayloadTooLarge>().is_some() {
        return Ok(json_error(
            &ErrorBody::new("Request body is too large"),
            StatusCode::PAYLOAD_TOO_LARGE,
        ));
    }

    if rejection.find::<warp::reject::LengthRequired>().is_some() {
        return Ok(json_error(
            &ErrorBody::new("Content-Length header is required"),
            StatusCode::LENGTH_REQUIRED,
        ));
    }

    if rejection.find::<warp::reject::MethodNotAllowed>().is_some() {
        return Ok(error_reply(&AnalysisError::MethodNotAllowed));
    }

    log::error!("❌ Unhandled rejection: {:?}", rejection);
    Ok(json_error(
        &ErrorBody::new("Internal server error"),
        StatusCode::INTERNAL_SERVER_ERROR,
    ))
}
