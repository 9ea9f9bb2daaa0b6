use std::sync::Arc;

use axum::extract::{DefaultBodyLimit, Query, State};
use axum::http::{header, HeaderValue, StatusCode, Uri};
use axum::response::{Html, IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::config::Config;
use crate::content::{Catalog, Example};
use crate::error::SiteError;
use crate::highlighter;
use crate::pages;
use crate::playground;
use crate::scripts::{self, ScriptKind};

pub const DEFAULT_DOWNLOAD_NAME: &str = "script.rift";

/// Largest JSON body the `/api/*` endpoints accept.
pub const BODY_LIMIT: usize = 256 * 1024;

#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            catalog: Arc::new(Catalog::load()),
            config: Arc::new(config),
        }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(home))
        .route("/installation", get(installation))
        .route("/docs", get(docs))
        .route("/playground", get(playground_page))
        .route("/examples", get(examples))
        .route("/comparison", get(comparison))
        .route("/community", get(community))
        .route("/api-reference", get(api_reference))
        .route("/api/run", post(run))
        .route("/api/highlight", post(highlight))
        .route("/api/download", post(download))
        .route("/api/examples", get(example_list))
        .route("/api/install", get(install_script))
        .route("/api/uninstall", get(uninstall_script))
        .route("/rift/install.sh", get(install_script))
        .route("/rift/uninstall.sh", get(uninstall_script))
        .fallback(not_found)
        .layer(DefaultBodyLimit::max(BODY_LIMIT))
        .with_state(state)
}

pub async fn start_web_server(config: Config) -> Result<(), SiteError> {
    let addr = config.addr();
    info!(
        scripts_dir = %config.scripts_dir.display(),
        run_delay_ms = config.run_delay_ms,
        "starting RIFT site"
    );

    let app = router(AppState::new(config));
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|source| SiteError::Bind {
            addr: addr.clone(),
            source,
        })?;
    info!("RIFT site running on http://{}", addr);

    axum::serve(listener, app).await.map_err(SiteError::Serve)
}

async fn home(State(state): State<AppState>) -> Html<String> {
    Html(pages::home(&state.catalog))
}

async fn installation(State(state): State<AppState>) -> Html<String> {
    Html(pages::installation(&state.catalog))
}

async fn docs(State(state): State<AppState>) -> Html<String> {
    Html(pages::docs(&state.catalog))
}

#[derive(Debug, Default, Deserialize)]
pub struct PlaygroundQuery {
    pub example: Option<String>,
}

async fn playground_page(
    State(state): State<AppState>,
    Query(query): Query<PlaygroundQuery>,
) -> Html<String> {
    Html(pages::playground(&state.catalog, query.example.as_deref()))
}

#[derive(Debug, Default, Deserialize)]
pub struct ExamplesQuery {
    pub category: Option<String>,
}

async fn examples(
    State(state): State<AppState>,
    Query(query): Query<ExamplesQuery>,
) -> Html<String> {
    Html(pages::examples(&state.catalog, query.category.as_deref()))
}

#[derive(Debug, Default, Deserialize)]
pub struct ComparisonQuery {
    pub lang: Option<String>,
    pub topic: Option<String>,
}

async fn comparison(
    State(state): State<AppState>,
    Query(query): Query<ComparisonQuery>,
) -> Html<String> {
    Html(pages::comparison(
        &state.catalog,
        query.lang.as_deref(),
        query.topic.as_deref(),
    ))
}

async fn community(State(state): State<AppState>) -> Html<String> {
    Html(pages::community(&state.catalog))
}

#[derive(Debug, Default, Deserialize)]
pub struct ApiReferenceQuery {
    pub module: Option<String>,
}

async fn api_reference(
    State(state): State<AppState>,
    Query(query): Query<ApiReferenceQuery>,
) -> Html<String> {
    Html(pages::api_reference(&state.catalog, query.module.as_deref()))
}

async fn not_found(State(state): State<AppState>, uri: Uri) -> (StatusCode, Html<String>) {
    debug!(path = uri.path(), "no route");
    (StatusCode::NOT_FOUND, Html(pages::not_found(&state.catalog, uri.path())))
}

#[derive(Debug, Deserialize)]
pub struct RunRequest {
    pub code: String,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct RunLine {
    pub kind: &'static str,
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct RunResponse {
    /// Always `true`; nothing was executed.
    pub simulated: bool,
    pub output: String,
    pub lines: Vec<RunLine>,
}

async fn run(
    State(state): State<AppState>,
    Json(request): Json<RunRequest>,
) -> Result<Json<RunResponse>, SiteError> {
    let delay = state.config.run_delay();
    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }

    let response = tokio::task::spawn_blocking(move || {
        let simulation = playground::simulate(&request.code);
        debug!(
            bytes = request.code.len(),
            has_output = simulation.has_output(),
            "simulated run"
        );

        RunResponse {
            simulated: true,
            output: simulation.render(),
            lines: simulation
                .lines
                .iter()
                .map(|line| RunLine {
                    kind: line.kind(),
                    text: line.text().into_owned(),
                })
                .collect(),
        }
    })
    .await?;

    Ok(Json(response))
}

#[derive(Debug, Deserialize)]
pub struct HighlightRequest {
    pub code: String,
    #[serde(default)]
    pub language: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct HighlightResponse {
    pub language: String,
    pub lines: Vec<String>,
}

async fn highlight(
    Json(request): Json<HighlightRequest>,
) -> Result<Json<HighlightResponse>, SiteError> {
    let HighlightRequest { code, language } = request;
    let lines = tokio::task::spawn_blocking(move || highlighter::highlight(&code)).await?;
    debug!(lines = lines.len(), "highlighted snippet");

    Ok(Json(HighlightResponse {
        language: language.unwrap_or_else(|| "rift".to_string()),
        lines,
    }))
}

#[derive(Debug, Deserialize)]
pub struct DownloadRequest {
    pub code: String,
    #[serde(default)]
    pub filename: Option<String>,
}

async fn download(Json(request): Json<DownloadRequest>) -> Result<Response, SiteError> {
    let filename = sanitize_filename(request.filename.as_deref().unwrap_or(DEFAULT_DOWNLOAD_NAME));
    let disposition = HeaderValue::from_str(&format!("attachment; filename=\"{}\"", filename))?;

    let mut response = request.code.into_response();
    let headers = response.headers_mut();
    headers.insert(header::CONTENT_TYPE, HeaderValue::from_static(scripts::CONTENT_TYPE));
    headers.insert(header::CONTENT_DISPOSITION, disposition);
    Ok(response)
}

/// Keeps `[A-Za-z0-9._-]`; a name with nothing left but dots becomes the default.
pub fn sanitize_filename(name: &str) -> String {
    let cleaned: String = name
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-'))
        .collect();

    if cleaned.chars().all(|c| c == '.') {
        DEFAULT_DOWNLOAD_NAME.to_string()
    } else {
        cleaned
    }
}

async fn example_list(State(state): State<AppState>) -> Json<Vec<Example>> {
    Json(state.catalog.examples.clone())
}

async fn install_script(State(state): State<AppState>) -> Response {
    scripts::serve_script(&state.config.scripts_dir, ScriptKind::Install).await
}

async fn uninstall_script(State(state): State<AppState>) -> Response {
    scripts::serve_script(&state.config.scripts_dir, ScriptKind::Uninstall).await
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> AppState {
        AppState::new(Config {
            run_delay_ms: 0,
            scripts_dir: std::env::temp_dir().join("rift-site-no-scripts-here"),
            ..Config::default()
        })
    }

    async fn body_text(response: Response) -> String {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("failed to read body");
        String::from_utf8(bytes.to_vec()).expect("body should be utf-8")
    }

    #[test]
    fn router_builds() {
        let _app = router(state());
    }

    #[tokio::test]
    async fn run_returns_simulated_output() {
        let Json(response) = run(
            State(state()),
            Json(RunRequest {
                code: "print(\"Hi\")\nhttp.serve(8080)".to_string(),
            }),
        )
        .await
        .expect("run should succeed");

        assert!(response.simulated);
        assert_eq!(
            response.output,
            "Hi\n\n✓ Server started on http://localhost:8080\n  Press Ctrl+C to stop\n"
        );
        assert_eq!(response.lines.len(), 4);
        assert_eq!(response.lines[0], RunLine { kind: "literal", text: "Hi".to_string() });
        assert_eq!(response.lines[1].kind, "separator");
    }

    #[tokio::test]
    async fn run_without_prints() {
        let Json(response) = run(State(state()), Json(RunRequest { code: String::new() }))
            .await
            .expect("run should succeed");
        assert_eq!(response.output, "✓ Code executed successfully (no output)\n");
        assert!(response.lines.is_empty());
    }

    #[tokio::test]
    async fn run_waits_for_the_configured_delay() {
        let state = AppState::new(Config {
            run_delay_ms: 30,
            ..Config::default()
        });
        let started = std::time::Instant::now();
        let _ = run(State(state), Json(RunRequest { code: "print(1)".to_string() })).await;
        assert!(started.elapsed() >= std::time::Duration::from_millis(30));
    }

    #[tokio::test]
    async fn highlight_defaults_language() {
        let Json(response) = highlight(Json(HighlightRequest {
            code: "let x = 1\n# done".to_string(),
            language: None,
        }))
        .await
        .expect("highlight should succeed");

        assert_eq!(response.language, "rift");
        assert_eq!(response.lines.len(), 2);
        assert!(response.lines[0].starts_with("<span style=\"color:#bb9af7\">let</span>"));
    }

    #[tokio::test]
    async fn adversarial_bodies_finish_quickly() {
        let started = std::time::Instant::now();
        let Json(ran) = run(
            State(state()),
            Json(RunRequest {
                code: "print(".repeat(40_000),
            }),
        )
        .await
        .expect("run should succeed");
        assert!(ran.lines.is_empty());

        let Json(highlighted) = highlight(Json(HighlightRequest {
            code: "/* ".repeat(40_000),
            language: None,
        }))
        .await
        .expect("highlight should succeed");
        assert_eq!(highlighted.lines.len(), 1);
        assert!(started.elapsed() < std::time::Duration::from_secs(2));
    }

    #[tokio::test]
    async fn download_is_an_attachment() {
        let response = download(Json(DownloadRequest {
            code: "print(\"hi\")".to_string(),
            filename: Some("../../etc/pa\"ss wd.rift".to_string()),
        }))
        .await
        .expect("download should succeed");

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[header::CONTENT_TYPE], "text/plain; charset=utf-8");
        assert_eq!(
            response.headers()[header::CONTENT_DISPOSITION],
            "attachment; filename=\"....etcpasswd.rift\""
        );
        assert_eq!(body_text(response).await, "print(\"hi\")");
    }

    #[tokio::test]
    async fn download_defaults_filename() {
        let response = download(Json(DownloadRequest {
            code: String::new(),
            filename: None,
        }))
        .await
        .expect("download should succeed");
        assert_eq!(
            response.headers()[header::CONTENT_DISPOSITION],
            "attachment; filename=\"script.rift\""
        );
    }

    #[test]
    fn sanitize_filename_rules() {
        assert_eq!(sanitize_filename("my_script-2.rift"), "my_script-2.rift");
        assert_eq!(sanitize_filename("a b/c"), "abc");
        assert_eq!(sanitize_filename("///"), "script.rift");
        assert_eq!(sanitize_filename(".."), "script.rift");
        assert_eq!(sanitize_filename(""), "script.rift");
    }

    #[tokio::test]
    async fn example_list_has_every_example() {
        let state = state();
        let Json(list) = example_list(State(state.clone())).await;
        assert_eq!(list.len(), state.catalog.examples.len());
        let json = serde_json::to_value(&list).expect("examples serialize");
        assert_eq!(json[0]["id"], "rest-api");
        assert_eq!(json[0]["difficulty"], "Beginner");
    }

    #[tokio::test]
    async fn pages_render_through_handlers() {
        let Html(html) = playground_page(
            State(state()),
            Query(PlaygroundQuery {
                example: Some("patterns".to_string()),
            }),
        )
        .await;
        assert!(html.contains("<option value=\"patterns\" selected>"));

        let Html(html) = comparison(State(state()), Query(ComparisonQuery::default())).await;
        assert!(html.contains("RIFT vs Python"));

        let Html(html) = api_reference(
            State(state()),
            Query(ApiReferenceQuery {
                module: Some("crypto".to_string()),
            }),
        )
        .await;
        assert!(html.contains("crypto.uuid()"));
        assert!(!html.contains("<section id=\"db\">"));
    }

    #[tokio::test]
    async fn unknown_route_is_404() {
        let (status, Html(html)) = not_found(State(state()), Uri::from_static("/nope")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(html.contains("/nope"));
    }

    #[tokio::test]
    async fn missing_install_script_redirects() {
        let response = install_script(State(state())).await;
        assert_eq!(response.status(), StatusCode::FOUND);
        assert_eq!(
            response.headers()[header::LOCATION],
            "https://raw.githubusercontent.com/FoundationINCCorporateTeam/RIFT/main/install.sh"
        );
    }
}
