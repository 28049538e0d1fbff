//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create the Axum router with all handlers
//! - Wire up middleware (request ID, tracing, timeout, body limit, headers)
//! - Dispatch page requests through the route table to the views
//! - Serve the booking action, the JSON data API and the health probe
//! - Run with graceful shutdown

use axum::{
    body::Body,
    extract::{Path, State},
    http::{header, HeaderValue, Method, Request, StatusCode, Uri},
    response::{Html, IntoResponse, Redirect, Response},
    routing::{get, post},
    Router,
};
use maud::Markup;
use std::sync::Arc;
use std::time::{Duration, Instant};
use thiserror::Error;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::{
    limit::RequestBodyLimitLayer,
    set_header::SetResponseHeaderLayer,
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::catalog::{HotelStore, StoreError};
use crate::config::{AppConfig, ValidationError};
use crate::http::api;
use crate::http::request::{propagate_request_id_layer, request_id, set_request_id_layer};
use crate::observability::metrics;
use crate::routing::{RouteMatch, RouteTable};
use crate::views::{layout, parse_hotel_id, DetailView, ListView, ViewError};

/// Errors raised while building the server.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ValidationError),

    #[error("failed to create hotel store: {0}")]
    Store(#[from] StoreError),
}

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<HotelStore>,
    pub routes: Arc<RouteTable>,
}

/// HTTP server for the hotel browser.
pub struct HttpServer {
    router: Router,
    config: AppConfig,
    store: Arc<HotelStore>,
}

impl HttpServer {
    /// Create a server whose store reads the configured source.
    pub fn new(config: AppConfig) -> Result<Self, ServerError> {
        let source = config.source.data_source()?;
        let store = HotelStore::with_timeout(source, config.source.fetch_timeout())?;
        Ok(Self::with_store(config, Arc::new(store)))
    }

    /// Create a server around an existing store.
    pub fn with_store(config: AppConfig, store: Arc<HotelStore>) -> Self {
        let state = AppState {
            store: store.clone(),
            routes: Arc::new(RouteTable::standard()),
        };
        let router = Self::build_router(&config, state);
        Self {
            router,
            config,
            store,
        }
    }

    /// Build the Axum router with all middleware layers.
    #[allow(deprecated)]
    fn build_router(config: &AppConfig, state: AppState) -> Router {
        let router = Router::new()
            .route("/health", get(|| async { "ok" }))
            .route("/api/hotels", get(api::list_hotels))
            .route("/api/hotels/{id}", get(api::get_hotel))
            .route("/hotels/{id}/book", post(book_handler).fallback(not_found_handler))
            .route("/", get(page_handler).fallback(not_found_handler))
            .route("/{*path}", get(page_handler).fallback(not_found_handler))
            .with_state(state)
            .layer(RequestBodyLimitLayer::new(config.security.max_body_size))
            .layer(TimeoutLayer::new(Duration::from_secs(config.timeouts.request_secs)));

        let router = if config.security.enable_headers {
            router.layer(SetResponseHeaderLayer::if_not_present(
                header::X_CONTENT_TYPE_OPTIONS,
                HeaderValue::from_static("nosniff"),
            ))
        } else {
            router
        };

        router
            .layer(propagate_request_id_layer())
            .layer(TraceLayer::new_for_http().make_span_with(|request: &Request<Body>| {
                tracing::info_span!(
                    "request",
                    method = %request.method(),
                    path = %request.uri().path(),
                    request_id = %request_id(request),
                )
            }))
            .layer(set_request_id_layer())
    }

    /// The configured router, for embedding or in-process tests.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    pub fn store(&self) -> Arc<HotelStore> {
        self.store.clone()
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Run the server until `shutdown` fires.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, source = %self.store.source(), "HTTP server starting");

        if self.config.source.preload {
            let store = self.store.clone();
            tokio::spawn(async move {
                store.preload().await;
            });
        }

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

fn html_response(markup: Markup, error: Option<&ViewError>) -> Response {
    let status = error.map_or(StatusCode::OK, ViewError::status_code);
    (status, Html(markup.into_string())).into_response()
}

/// Page dispatcher: resolves the path through the route table and renders the view.
async fn page_handler(State(state): State<AppState>, uri: Uri) -> Response {
    let start = Instant::now();
    let path = uri.path();

    let (route, response) = match state.routes.resolve(path) {
        Some(RouteMatch::Redirect { to }) => ("redirect", Redirect::to(to).into_response()),
        Some(RouteMatch::HotelList) => {
            let mut view = ListView::new(state.store.clone());
            view.activate().await;
            ("hotel_list", html_response(view.render(), view.state().error()))
        }
        Some(RouteMatch::HotelDetail { id }) => {
            let mut view = DetailView::new(state.store.clone());
            view.activate(&id).await;
            ("hotel_detail", html_response(view.render(), view.state().error()))
        }
        None => {
            tracing::debug!(path = %path, "No route matched");
            ("not_found", not_found_page(path))
        }
    };

    metrics::record_request(route, response.status().as_u16(), start);
    response
}

fn not_found_page(path: &str) -> Response {
    (StatusCode::NOT_FOUND, Html(layout::not_found(path).into_string())).into_response()
}

/// Any method a page route does not serve gets the 404 page.
async fn not_found_handler(method: Method, uri: Uri) -> Response {
    let start = Instant::now();
    tracing::debug!(method = %method, path = %uri.path(), "Method not routed");
    let response = not_found_page(uri.path());
    metrics::record_request("not_found", response.status().as_u16(), start);
    response
}

/// POST /hotels/{id}/book: run the placeholder booking action.
async fn book_handler(State(state): State<AppState>, Path(raw_id): Path<String>) -> Response {
    let start = Instant::now();
    let mut view = ListView::new(state.store.clone());
    view.activate().await;

    let response = match (view.state().error(), view.hotels()) {
        (Some(err), _) => html_response(view.render(), Some(err)),
        (None, hotels) => {
            let hotel = parse_hotel_id(&raw_id)
                .and_then(|id| hotels.and_then(|list| list.iter().find(|h| h.id == id)));
            match hotel {
                Some(hotel) => html_response(view.book_hotel(hotel).render(), None),
                None => not_found_page(&format!("/hotels/{}", raw_id)),
            }
        }
    };

    metrics::record_request("booking", response.status().as_u16(), start);
    response
}
