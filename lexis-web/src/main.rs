//! Servidor web Axum com WebSocket para análise de entidades e montagem de padrões

use std::sync::Arc;

use axum::{
    extract::{
        ws::{Message, WebSocket, WebSocketUpgrade},
        State,
    },
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use lexis_core::{
    lexicon::demo_texts,
    pattern::PatternWord,
    ConfigurationError, LexisConfig, LexisPipeline, MultiWordPattern, PatternMatch,
    PatternMatcher, PipelineEvent, Separators, SingleWordPattern,
};
use serde::{Deserialize, Serialize};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Estado compartilhado da aplicação
struct AppState {
    pipeline: LexisPipeline,
    config: LexisConfig,
}

#[derive(Deserialize)]
struct AnalyzeRequest {
    text: String,
}

/// Pedido de montagem: `options` vira um padrão de uma palavra, `words` um
/// padrão multi-palavra. `sample` é opcional e recebe os casamentos.
#[derive(Deserialize)]
struct PatternRequest {
    #[serde(default)]
    separators: Option<Separators>,
    #[serde(default)]
    case_insensitive: Option<bool>,
    #[serde(default)]
    options: Vec<String>,
    #[serde(default)]
    words: Vec<PatternWord>,
    #[serde(default)]
    sample: Option<String>,
}

#[derive(Serialize)]
struct PatternResponse {
    single_word: Option<String>,
    multi_word: Option<String>,
    matches: Vec<PatternMatch>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let mut config = match std::env::var("LEXIS_CONFIG") {
        Ok(path) => LexisConfig::from_reader(std::fs::File::open(&path)?)?,
        Err(_) => LexisConfig::default(),
    };
    if let Ok(bind) = std::env::var("LEXIS_BIND") {
        config.bind_addr = bind;
    }

    let pipeline = LexisPipeline::from_config(&config)?;
    let bind_addr = config.bind_addr.clone();
    let app = build_router(Arc::new(AppState { pipeline, config }));

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    info!("🚀 Servidor Lexis iniciado em http://{}", bind_addr);
    axum::serve(listener, app).await?;
    Ok(())
}

fn build_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health_handler))
        .route("/analyze", post(analyze_handler))
        .route("/pattern", post(pattern_handler))
        .route("/demo-texts", get(demo_texts_handler))
        .route("/ws", get(ws_handler))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

fn bad_request(message: impl ToString) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(serde_json::json!({"error": message.to_string()})),
    )
        .into_response()
}

async fn health_handler() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// Análise via HTTP POST (sem streaming)
async fn analyze_handler(
    State(state): State<Arc<AppState>>,
    Json(req): Json<AnalyzeRequest>,
) -> Response {
    if req.text.trim().is_empty() {
        return bad_request("Texto vazio");
    }
    Json(state.pipeline.analyze(&req.text)).into_response()
}

/// Monta os padrões pedidos e, se houver amostra, aplica o mais específico.
async fn pattern_handler(
    State(state): State<Arc<AppState>>,
    Json(req): Json<PatternRequest>,
) -> Response {
    match build_patterns(&state.config, req) {
        Ok(response) => Json(response).into_response(),
        Err(err) => {
            warn!(%err, "montagem de padrão rejeitada");
            bad_request(err)
        }
    }
}

fn build_patterns(
    config: &LexisConfig,
    req: PatternRequest,
) -> Result<PatternResponse, ConfigurationError> {
    let separators = req.separators.unwrap_or_else(|| config.separators.clone());
    separators.validate()?;
    let case_insensitive = req.case_insensitive.unwrap_or(config.case_insensitive);

    let mut single = SingleWordPattern::with_separators(separators.clone());
    for option in req.options {
        single.add_option(option);
    }
    let multi = MultiWordPattern::from_words(req.words, separators);

    let single_word = (!single.is_empty()).then(|| single.build());
    let multi_word = if multi.is_empty() {
        None
    } else {
        Some(multi.build()?)
    };

    let matches = match req.sample {
        Some(sample) => {
            let matcher = if multi.is_empty() {
                PatternMatcher::from_single(&single, case_insensitive)?
            } else {
                PatternMatcher::from_multi(&multi, case_insensitive)?
            };
            matcher.find_all(&sample)
        }
        None => Vec::new(),
    };

    Ok(PatternResponse {
        single_word,
        multi_word,
        matches,
    })
}

/// Retorna textos de demonstração
async fn demo_texts_handler() -> impl IntoResponse {
    let texts: Vec<serde_json::Value> = demo_texts()
        .iter()
        .map(|(domain, text)| {
            serde_json::json!({
                "domain": domain,
                "text": text
            })
        })
        .collect();
    Json(texts)
}

/// Upgrade HTTP → WebSocket
async fn ws_handler(ws: WebSocketUpgrade, State(state): State<Arc<AppState>>) -> impl IntoResponse {
    ws.on_upgrade(move |socket| handle_websocket(socket, state))
}

/// Recebe texto (puro ou `{"text": ...}`), roda o pipeline e envia os eventos
async fn handle_websocket(mut socket: WebSocket, state: Arc<AppState>) {
    info!("WebSocket conectado");

    while let Some(Ok(msg)) = socket.recv().await {
        match msg {
            Message::Text(text) => {
                let text = match serde_json::from_str::<AnalyzeRequest>(&text) {
                    Ok(req) => req.text.trim().to_string(),
                    Err(_) => text.trim().to_string(),
                };
                if text.is_empty() {
                    continue;
                }

                info!("Analisando via WebSocket: {} chars", text.len());

                // O pipeline é síncrono: roda fora do runtime
                let (tx, rx) = std::sync::mpsc::channel::<PipelineEvent>();
                let worker = Arc::clone(&state);
                let handle = tokio::task::spawn_blocking(move || {
                    worker.pipeline.analyze_streaming(&text, tx);
                });
                if let Err(err) = handle.await {
                    warn!(%err, "pipeline interrompido");
                    continue;
                }

                let events: Vec<PipelineEvent> = rx.try_iter().collect();
                for event in &events {
                    if let Ok(json) = serde_json::to_string(event) {
                        if socket.send(Message::Text(json)).await.is_err() {
                            return; // cliente desconectou
                        }
                        // Pausa curta para a animação passo a passo no cliente
                        tokio::time::sleep(tokio::time::Duration::from_millis(35)).await;
                    }
                }
            }
            Message::Close(_) => {
                info!("WebSocket desconectado");
                return;
            }
            Message::Ping(payload) => {
                let _ = socket.send(Message::Pong(payload)).await;
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::Body, http::Request};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    fn app() -> Router {
        let config = LexisConfig::default();
        let pipeline = LexisPipeline::from_config(&config).unwrap();
        build_router(Arc::new(AppState { pipeline, config }))
    }

    fn json_request(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn body_json(response: Response) -> Value {
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&body).unwrap()
    }

    #[tokio::test]
    async fn test_health_check() {
        let response = app()
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await["status"], "ok");
    }

    #[tokio::test]
    async fn test_analyze_returns_entities() {
        let response = app()
            .oneshot(json_request(
                "/analyze",
                json!({"text": "Jose Luís Ferreira llega el 4 de enero de 1905"}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        let entities = json["entities"].as_array().unwrap();
        assert_eq!(entities.len(), 2);
        assert_eq!(entities[0]["text"], "Jose Luís Ferreira");
        assert_eq!(entities[0]["category"], "Per");
        assert_eq!(entities[1]["category"], "Date");
    }

    #[tokio::test]
    async fn test_analyze_rejects_empty_text() {
        let response = app()
            .oneshot(json_request("/analyze", json!({"text": "   "})))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(body_json(response).await["error"].is_string());
    }

    #[tokio::test]
    async fn test_pattern_builds_and_matches() {
        let response = app()
            .oneshot(json_request(
                "/pattern",
                json!({
                    "options": ["Hi", "Hello"],
                    "words": [
                        {"fragment": "Hello"},
                        {"fragment": "dear", "optional": true},
                        {"fragment": "world"}
                    ],
                    "sample": "Hello world, hello dear World"
                }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        assert_eq!(
            json["single_word"],
            r"(?<=^|[\p{P}\s])(Hi|Hello)(?=[\p{P}\s]|$)"
        );
        assert!(json["multi_word"].is_string());
        let matches = json["matches"].as_array().unwrap();
        assert_eq!(matches.len(), 2);
        assert_eq!(matches[1]["text"], "hello dear World");
    }

    #[tokio::test]
    async fn test_pattern_rejects_optional_edge() {
        let response = app()
            .oneshot(json_request(
                "/pattern",
                json!({"words": [{"fragment": "a"}, {"fragment": "b", "optional": true}]}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = body_json(response).await;
        assert!(json["error"].as_str().unwrap().contains("última"));
    }

    #[tokio::test]
    async fn test_pattern_rejects_zero_separator_repeat() {
        let response = app()
            .oneshot(json_request(
                "/pattern",
                json!({"options": ["a"], "separators": {"max_repeat": 0}}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_demo_texts() {
        let response = app()
            .oneshot(Request::builder().uri("/demo-texts").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json.as_array().unwrap().len(), demo_texts().len());
    }
}
