use std::net::SocketAddr;
use std::time::Duration;

use axum::{Router, middleware};
use http::{HeaderName, HeaderValue};
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{
    MakeRequestId, PropagateRequestIdLayer, RequestId, SetRequestIdLayer,
};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use uuid::Uuid;

use crate::core::{Config, ServerError, ServerState};

const REQUEST_ID_HEADER: &str = "x-request-id";

/// Custom request ID generator
#[derive(Clone)]
struct XRequestId;

impl MakeRequestId for XRequestId {
    fn make_request_id<B>(&mut self, _request: &http::Request<B>) -> Option<RequestId> {
        let id = Uuid::new_v4().to_string();
        HeaderValue::from_str(&id).ok().map(RequestId::new)
    }
}

/// HTTP 请求日志中间件
async fn log_request(
    request: http::Request<axum::body::Body>,
    next: middleware::Next,
) -> http::Response<axum::body::Body> {
    let method = request.method().clone();
    let uri = request.uri().clone();

    let response = next.run(request).await;

    let status = response.status();

    tracing::info!(target: "http_access", "{} {} {}", method, uri, status);

    response
}

/// Build a fully configured application with all middleware and state
///
/// Used by both the listener and in-process (oneshot) callers
pub fn build_app(state: ServerState) -> Router {
    let request_timeout = Duration::from_millis(state.config.request_timeout_ms);

    crate::api::build_router()
        .with_state(state)
        // ========== Tower HTTP Middleware ==========
        .layer(TimeoutLayer::new(request_timeout))
        .layer(CorsLayer::permissive())
        .layer(CompressionLayer::new())
        .layer(middleware::from_fn(log_request))
        .layer(TraceLayer::new_for_http())
        // ========== Request ID ==========
        .layer(PropagateRequestIdLayer::new(HeaderName::from_static(
            REQUEST_ID_HEADER,
        )))
        .layer(SetRequestIdLayer::new(
            HeaderName::from_static(REQUEST_ID_HEADER),
            XRequestId,
        ))
}

#[derive(Clone, Debug)]
pub struct HttpService {
    config: Config,
    router: Router,
}

impl HttpService {
    pub fn new(config: Config, state: ServerState) -> Self {
        Self {
            config,
            router: build_app(state),
        }
    }

    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Bind the HTTP listener and serve until `shutdown_signal` resolves
    pub async fn start_server<F>(
        &self,
        shutdown_signal: F,
        grace_period: Duration,
    ) -> Result<(), ServerError>
    where
        F: std::future::Future<Output = ()> + Send + 'static,
    {
        let addr = SocketAddr::from(([0, 0, 0, 0], self.config.http_port));
        tracing::info!("🛍️ Catalog server starting on {}", addr);

        let handle = axum_server::Handle::new();

        let handle_clone = handle.clone();
        tokio::spawn(async move {
            shutdown_signal.await;
            handle_clone.graceful_shutdown(Some(grace_period));
        });

        axum_server::bind(addr)
            .handle(handle)
            .serve(self.router().into_make_service())
            .await?;

        Ok(())
    }
}
