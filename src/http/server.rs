//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with the relay handler
//! - Wire up middleware (tracing, timeout, request ID)
//! - Dispatch requests to the channel router
//! - Apply the channel's header override to outbound headers
//! - Forward requests to upstream channels and stream responses back
//!
//! # Design Decisions
//! - The upstream client sends exactly the headers it is given and never
//!   follows redirects; a 3xx goes back to the caller as-is

use axum::{
    body::Body,
    extract::{Request, State},
    http::StatusCode,
    response::Response,
    routing::any,
    Router,
};
use http_body_util::LengthLimitError;
use hyper_rustls::{HttpsConnector, HttpsConnectorBuilder};
use hyper_util::{
    client::legacy::{connect::HttpConnector, Client},
    rt::TokioExecutor,
};
use std::future::Future;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::{RelayConfig, TimeoutConfig};
use crate::header_override::{apply_header_override, build_header_override_spec};
use crate::http::request::{outbound_headers, request_id, strip_hop_by_hop, upstream_url};
use crate::http::response::RelayError;
use crate::relay::RelayInfo;
use crate::routing::ChannelRouter;

/// HTTP(S) client used for upstream channels.
pub type UpstreamClient = Client<HttpsConnector<HttpConnector>, Body>;

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub channels: Arc<ChannelRouter>,
    pub client: UpstreamClient,
    pub max_body_bytes: usize,
}

/// HTTP server for the relay.
pub struct RelayServer {
    router: Router,
    config: RelayConfig,
}

impl RelayServer {
    /// Create a new relay server with the given configuration.
    pub fn new(config: RelayConfig) -> Self {
        let channels = Arc::new(ChannelRouter::from_config(config.channels.clone()));

        let state = AppState {
            channels,
            client: build_client(&config.timeouts),
            max_body_bytes: config.listener.max_body_bytes,
        };

        let router = Self::build_router(&config, state);
        Self { router, config }
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(config: &RelayConfig, state: AppState) -> Router {
        Router::new()
            .route("/{*path}", any(relay_handler))
            .route("/", any(relay_handler))
            .with_state(state)
            .layer(
                ServiceBuilder::new()
                    .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
                    .layer(TraceLayer::new_for_http())
                    .layer(PropagateRequestIdLayer::x_request_id())
                    .layer(TimeoutLayer::with_status_code(
                        StatusCode::GATEWAY_TIMEOUT,
                        Duration::from_secs(config.timeouts.request_secs),
                    )),
            )
    }

    /// Run the server until `shutdown` resolves.
    pub async fn run<F>(self, listener: TcpListener, shutdown: F) -> Result<(), std::io::Error>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            channels = self.config.channels.len(),
            "Relay server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown)
            .await?;

        tracing::info!("Relay server stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &RelayConfig {
        &self.config
    }
}

/// Build the upstream client. Plain HTTP and HTTPS (webpki roots) are both accepted.
fn build_client(timeouts: &TimeoutConfig) -> UpstreamClient {
    let mut http = HttpConnector::new();
    http.enforce_http(false);
    http.set_connect_timeout(Some(Duration::from_secs(timeouts.connect_secs)));

    let https = HttpsConnectorBuilder::new()
        .with_webpki_roots()
        .https_or_http()
        .enable_http1()
        .wrap_connector(http);

    Client::builder(TokioExecutor::new()).build(https)
}

/// True when reading a body failed because it exceeded the size limit.
fn is_length_limit(err: &axum::Error) -> bool {
    let mut source: Option<&(dyn std::error::Error + 'static)> = Some(err);
    while let Some(e) = source {
        if e.is::<LengthLimitError>() {
            return true;
        }
        source = e.source();
    }
    false
}

/// Main relay handler.
/// Looks up the channel, rewrites headers, and forwards the request.
async fn relay_handler(
    State(state): State<AppState>,
    request: Request,
) -> Result<Response, RelayError> {
    let start_time = Instant::now();
    let request_id = request_id(request.headers());
    let path = request.uri().path().to_string();

    let (channel, upstream_path) = match state.channels.match_path(&path) {
        Some(route) => (route.channel.clone(), route.upstream_path.to_string()),
        None => {
            tracing::warn!(request_id = %request_id, path = %path, "No channel matched");
            return Err(RelayError::NoChannel { path: path.clone() });
        }
    };

    tracing::debug!(
        request_id = %request_id,
        channel = %channel.name,
        method = %request.method(),
        path = %path,
        "Relaying request"
    );

    // 1. Header override spec for this call
    let info = RelayInfo::new(request_id.clone(), channel.name.clone(), channel.api_key.clone());
    let spec = build_header_override_spec(channel.header_override.as_ref(), &info).map_err(
        |source| {
            tracing::error!(
                request_id = %request_id,
                channel = %channel.name,
                error = %source,
                "Invalid channel header override"
            );
            RelayError::HeaderOverride {
                channel: channel.name.clone(),
                source,
            }
        },
    )?;

    // 2. Outbound request
    let uri = upstream_url(&channel.base_url, &upstream_path, request.uri().query())?;
    let (parts, body) = request.into_parts();
    let mut headers = outbound_headers(&parts.headers);
    apply_header_override(&mut headers, Some(&spec));

    let body = axum::body::to_bytes(body, state.max_body_bytes)
        .await
        .map_err(|e| {
            if is_length_limit(&e) {
                RelayError::PayloadTooLarge {
                    limit: state.max_body_bytes,
                }
            } else {
                RelayError::Body(e.to_string())
            }
        })?;

    let mut upstream_request = Request::new(Body::from(body));
    *upstream_request.method_mut() = parts.method;
    *upstream_request.uri_mut() = uri;
    *upstream_request.headers_mut() = headers;

    // 3. Forward
    let upstream = state.client.request(upstream_request).await.map_err(|e| {
        tracing::error!(
            request_id = %request_id,
            channel = %channel.name,
            error = %e,
            "Upstream error"
        );
        RelayError::Upstream(e.to_string())
    })?;

    tracing::info!(
        request_id = %request_id,
        channel = %channel.name,
        status = %upstream.status(),
        elapsed_ms = start_time.elapsed().as_millis() as u64,
        "Upstream responded"
    );

    let (mut parts, body) = upstream.into_parts();
    strip_hop_by_hop(&mut parts.headers);
    Ok(Response::from_parts(parts, Body::new(body)))
}
